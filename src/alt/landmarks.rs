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

//! Selection of landmark nodes.
//!
//! Landmarks far away from each other (and close to the border of the graph)
//! give better bounds. [`select_farthest`] greedily picks the node farthest
//! away from all landmarks chosen so far, [`select_random`] is cheap but
//! usually worse.

use crate::search::AStar;
use crate::traits::{Graph, NoModifier};

use crate::num::traits::Float;

use log::{debug, warn};
use rand::Rng;

use std::hash::Hash;

/// The landmark selection strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkSelection {
    /// Uniform sampling without replacement.
    Random,
    /// Greedy farthest point selection.
    Farthest,
}

/// Select `count` distinct nodes uniformly at random.
///
/// If there are fewer than `count` nodes, all nodes are returned (in random
/// order).
pub fn select_random<N, R>(nodes: &[N], count: usize, rng: &mut R) -> Vec<N>
where
    N: Copy,
    R: Rng + ?Sized,
{
    let mut pool = nodes.to_vec();
    let count = count.min(pool.len());
    for i in 0..count {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

/// Select `count` landmarks by the farthest point heuristic.
///
/// The first landmark is a random node. Each further landmark is the node
/// whose distance to the nearest landmark selected so far is maximal. Nodes
/// not reachable from some landmark are never selected, so fewer than `count`
/// landmarks may be returned.
///
/// # Example
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rs_path::alt::select_farthest;
/// use rs_path::classes;
///
/// let g = classes::path::<f64>(10);
/// let nodes = g.nodes().to_vec();
/// let landmarks = select_farthest(&g, &nodes, 2, &mut StdRng::seed_from_u64(42));
/// assert_eq!(landmarks.len(), 2);
/// // the node farthest from any node of a path is an end point
/// assert!(landmarks[1] == 0 || landmarks[1] == 10);
/// ```
pub fn select_farthest<N, D, G, R>(graph: &G, nodes: &[N], count: usize, rng: &mut R) -> Vec<N>
where
    N: Copy + Eq + Hash,
    D: Float,
    G: Graph<N, D>,
    R: Rng + ?Sized,
{
    farthest(graph, None::<&G>, nodes, count, rng)
}

/// Select `count` landmarks by the farthest point heuristic in a directed
/// graph.
///
/// The distance of a node to the landmarks is the minimum of the distances
/// from and to the landmarks. `reversed` must be the reversed graph.
pub fn select_farthest_directed<N, D, G, H, R>(
    graph: &G,
    reversed: &H,
    nodes: &[N],
    count: usize,
    rng: &mut R,
) -> Vec<N>
where
    N: Copy + Eq + Hash,
    D: Float,
    G: Graph<N, D>,
    H: Graph<N, D>,
    R: Rng + ?Sized,
{
    farthest(graph, Some(reversed), nodes, count, rng)
}

fn farthest<N, D, G, H, R>(graph: &G, reversed: Option<&H>, nodes: &[N], count: usize, rng: &mut R) -> Vec<N>
where
    N: Copy + Eq + Hash,
    D: Float,
    G: Graph<N, D>,
    H: Graph<N, D>,
    R: Rng + ?Sized,
{
    let count = count.min(nodes.len());
    if count == 0 {
        return vec![];
    }

    let mut astar = AStar::new();
    // running minimum of the distances to the selected landmarks
    let mut min_from = vec![D::infinity(); nodes.len()];
    let mut min_to = vec![D::infinity(); if reversed.is_some() { nodes.len() } else { 0 }];

    let mut landmarks = Vec::with_capacity(count);
    landmarks.push(nodes[rng.random_range(0..nodes.len())]);

    while landmarks.len() < count {
        let last = landmarks[landmarks.len() - 1];
        update_min(&mut astar, graph, last, nodes, &mut min_from);
        if let Some(reversed) = reversed {
            update_min(&mut astar, reversed, last, nodes, &mut min_to);
        }

        let mut best: Option<(usize, D)> = None;
        for i in 0..nodes.len() {
            let mut d = min_from[i];
            if !min_to.is_empty() {
                d = d.min(min_to[i]);
            }
            if d > D::zero() && best.map_or(true, |(_, bd)| d > bd) {
                best = Some((i, d));
            }
        }

        match best {
            Some((i, _)) => landmarks.push(nodes[i]),
            None => {
                warn!(
                    "No further landmark candidate reachable, selected only {} of {} landmarks",
                    landmarks.len(),
                    count
                );
                break;
            }
        }
    }

    debug!("Selected {} landmarks by farthest point heuristic", landmarks.len());
    landmarks
}

/// Update the running minimum distances by the distances from `l`.
///
/// Unreachable nodes get distance 0.
fn update_min<N, D, G>(astar: &mut AStar<N, D>, graph: &G, l: N, nodes: &[N], mins: &mut [D])
where
    N: Copy + Eq + Hash,
    D: Float,
    G: Graph<N, D>,
{
    astar.dijkstra(graph, l, &NoModifier, D::infinity());
    for (&u, m) in nodes.iter().zip(mins.iter_mut()) {
        let d = astar.distance(u).unwrap_or_else(D::zero);
        if d < *m {
            *m = d;
        }
    }
}
