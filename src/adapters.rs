/*
 * Copyright (c) 2017-2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Reverse the direction of the edges of a graph.

use crate::adjgraph::AdjGraph;
use crate::traits::Graph;

use std::hash::Hash;

/// Return the graph with all edges of `g` in opposite direction.
///
/// A [`Graph`] only knows outgoing edges, so the nodes whose edges should be
/// reversed must be given explicitly. The result contains an edge `(v, u)`
/// for each edge `(u, v)` of `g` with `u` in `nodes`. All nodes in `nodes` are
/// nodes of the reversed graph, even if they have no edges.
///
/// # Example
///
/// ```
/// use rs_path::{reverse, AdjGraph};
///
/// let mut g = AdjGraph::new();
/// g.add_edge(0, 1, 1.0);
/// g.add_edge(0, 2, 4.0);
/// g.add_edge(2, 1, 2.0);
///
/// let r = reverse(&g, g.nodes());
/// assert_eq!(r.num_edges(), 3);
/// assert_eq!(r.outedges(1), &[(0, 1.0), (2, 2.0)]);
/// assert_eq!(r.outedges(2), &[(0, 4.0)]);
/// assert!(r.outedges(0).is_empty());
/// ```
pub fn reverse<N, D, G>(g: &G, nodes: &[N]) -> AdjGraph<N, D>
where
    N: Copy + Eq + Hash,
    D: Copy,
    G: Graph<N, D>,
{
    let mut r = AdjGraph::new();
    let mut edges = vec![];
    for &u in nodes {
        r.add_node(u);
    }
    for &u in nodes {
        edges.clear();
        g.collect(u, &mut edges);
        for &(v, cost) in &edges {
            r.add_edge(v, u, cost);
        }
    }
    r
}
