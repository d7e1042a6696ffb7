// Copyright (c) 2017-2023 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A graph stored as adjacency lists.
//!
//! `AdjGraph` is the simplest finite [`Graph`] implementation: each node has a
//! list of outgoing edges with their costs. Nodes are arbitrary hashable
//! values and are enumerated in insertion order.
//!
//! # Example
//!
//! ```
//! use rs_path::AdjGraph;
//!
//! let mut g = AdjGraph::new();
//! g.add_edge('a', 'b', 2.0);
//! g.add_undirected_edge('b', 'c', 1.5);
//!
//! assert_eq!(g.nodes(), &['a', 'b', 'c']);
//! assert_eq!(g.num_edges(), 3);
//! assert_eq!(g.outedges('b'), &[('c', 1.5)]);
//! assert!(g.outedges('x').is_empty());
//! ```

use crate::traits::Graph;

use std::collections::HashMap;
use std::hash::Hash;

/// A finite graph with adjacency lists.
#[derive(Clone, Debug)]
pub struct AdjGraph<N, D> {
    /// The nodes in insertion order.
    nodes: Vec<N>,
    /// The index of each node.
    index: HashMap<N, usize>,
    /// The outgoing edges of each node.
    outedges: Vec<Vec<(N, D)>>,
    nedges: usize,
}

impl<N, D> Default for AdjGraph<N, D> {
    fn default() -> Self {
        AdjGraph {
            nodes: vec![],
            index: HashMap::new(),
            outedges: vec![],
            nedges: 0,
        }
    }
}

impl<N, D> AdjGraph<N, D>
where
    N: Copy + Eq + Hash,
    D: Copy,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// Add a node (if it does not exist) and return its index.
    pub fn add_node(&mut self, u: N) -> usize {
        let nodes = &mut self.nodes;
        let outedges = &mut self.outedges;
        *self.index.entry(u).or_insert_with(|| {
            nodes.push(u);
            outedges.push(vec![]);
            nodes.len() - 1
        })
    }

    /// Add the directed edge `(u, v)`.
    ///
    /// Missing end nodes are added.
    pub fn add_edge(&mut self, u: N, v: N, cost: D) {
        let uid = self.add_node(u);
        self.add_node(v);
        self.outedges[uid].push((v, cost));
        self.nedges += 1;
    }

    /// Add the edges `(u, v)` and `(v, u)` with the same cost.
    pub fn add_undirected_edge(&mut self, u: N, v: N, cost: D) {
        self.add_edge(u, v, cost);
        self.add_edge(v, u, cost);
    }

    /// Return the nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.nedges
    }

    pub fn contains(&self, u: N) -> bool {
        self.index.contains_key(&u)
    }

    /// Return the outgoing edges of `u`.
    ///
    /// Unknown nodes have no outgoing edges.
    pub fn outedges(&self, u: N) -> &[(N, D)] {
        match self.index.get(&u) {
            Some(&i) => &self.outedges[i],
            None => &[],
        }
    }
}

impl<N, D> Graph<N, D> for AdjGraph<N, D>
where
    N: Copy + Eq + Hash,
    D: Copy,
{
    fn collect(&self, u: N, edges: &mut Vec<(N, D)>) {
        edges.extend_from_slice(self.outedges(u))
    }
}
