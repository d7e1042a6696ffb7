/*
 * Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![allow(dead_code)]

use rs_path::AdjGraph;

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random graph on the nodes `0..n` with integral edge costs in `1..10`.
///
/// Sums of these costs are exact, so lengths can be compared with `==`.
pub fn random_graph<R: Rng>(rng: &mut R, n: usize, m: usize, directed: bool) -> AdjGraph<usize, f64> {
    let mut g = AdjGraph::new();
    for u in 0..n {
        g.add_node(u);
    }
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let cost = rng.random_range(1..10) as f64;
        if directed {
            g.add_edge(u, v, cost);
        } else {
            g.add_undirected_edge(u, v, cost);
        }
    }
    g
}

/// Textbook Dijkstra with a binary heap.
pub fn reference_distances(g: &AdjGraph<usize, f64>, start: usize) -> HashMap<usize, f64> {
    let mut dist = HashMap::new();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), start)));
    while let Some(Reverse((OrderedFloat(d), u))) = heap.pop() {
        if dist.contains_key(&u) {
            continue;
        }
        dist.insert(u, d);
        for &(v, cost) in g.outedges(u) {
            if !dist.contains_key(&v) {
                heap.push(Reverse((OrderedFloat(d + cost), v)));
            }
        }
    }
    dist
}

/// Return the length of a node sequence, using the cheapest parallel edge.
pub fn path_length(g: &AdjGraph<usize, f64>, path: &[usize]) -> Option<f64> {
    let mut len = 0.0;
    for uv in path.windows(2) {
        let cost = g
            .outedges(uv[0])
            .iter()
            .filter(|&&(v, _)| v == uv[1])
            .map(|&(_, c)| c)
            .fold(None, |m: Option<f64>, c| Some(m.map_or(c, |m| m.min(c))))?;
        len += cost;
    }
    Some(len)
}
