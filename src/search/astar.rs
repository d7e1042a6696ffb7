/*
 * Copyright (c) 2018, 2021, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A* search.
//!
//! This module implements an A*-search for finding a shortest path from some
//! start node to some goal node. Each node is assigned a lower bound (or
//! "heuristic value") $h(u)$ estimating the distance to the goal node. The
//! heuristic must satisfy
//! \\[ h(u) \le w(u,v) + h(v), (u,v) \in E, \qquad h(t) = 0 \\]
//! where $w\colon E \to \mathbb{R}_+$ are the (non-negative) weights of the edges
//! and $t$ is the goal node. Dijkstra's algorithm is the special case $h = 0$.
//!
//! The search is done by an [`AStar`] object that owns all working data:
//! the predecessor map, the priority queue and two scratch buffers. These are
//! reused by all subsequent searches, so after a few queries a search usually
//! does not allocate anymore. An `AStar` object handles one query at a time,
//! parallel searches need one object per thread.
//!
//! Nodes are never removed from the priority queue. If a shorter path to a
//! node is found, the node is pushed again and the outdated entry is skipped
//! when it is popped.
//!
//! # Example
//!
//! ```
//! use rs_path::classes;
//! use rs_path::search::AStar;
//! use rs_path::traits::{heuristic_fn, NoModifier, NodePath};
//!
//! // 6x4 grid graph, nodes are (x, y)
//! let g = classes::grid::<f64>(6, 4);
//! let mut manh = heuristic_fn(|(x, y): (usize, usize), (xt, yt): (usize, usize)| {
//!     ((x as isize - xt as isize).abs() + (y as isize - yt as isize).abs()) as f64
//! });
//!
//! let mut astar = AStar::new();
//! let mut path = vec![];
//! let dist = astar.find_path(&g, (0, 0), (5, 3), &mut manh, &NoModifier, &mut NodePath::default(), &mut path);
//!
//! assert_eq!(dist, Some(8.0));
//! assert_eq!(path.len(), 9);
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[8], (5, 3));
//! ```

use crate::collections::{Comparator, MinHeap};
use crate::traits::{EdgeModifier, Graph, Heuristic, PathProcessor};

use crate::num::traits::Float;

use log::debug;

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

/// Default bound on the number of nodes examined by a single search.
pub const DEFAULT_MAX_EXPAND: usize = 65536;

/// The predecessor information of a reached node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameFrom<N, D> {
    /// The predecessor on the currently best path.
    pub prev: N,
    /// The node itself.
    pub next: N,
    /// The length of the currently best path.
    pub g: D,
}

/// An entry of the open set.
#[derive(Clone, Copy, Debug)]
struct Open<N, D> {
    node: N,
    /// priority
    f: D,
    /// distance from the start when the entry has been pushed
    g: D,
}

/// Orders open entries by their priority.
#[derive(Clone, Copy, Debug, Default)]
struct ByPriority;

impl<N, D> Comparator<Open<N, D>> for ByPriority
where
    D: PartialOrd,
{
    fn compare(&self, a: &Open<N, D>, b: &Open<N, D>) -> Ordering {
        a.f.partial_cmp(&b.f).unwrap_or(Ordering::Equal)
    }
}

/// The A* search engine.
///
/// This struct contains all algorithmic working data.
pub struct AStar<N, D> {
    /// Predecessor and distance of each reached node.
    came_from: HashMap<N, CameFrom<N, D>>,
    /// The open set.
    open: MinHeap<Open<N, D>, ByPriority>,
    /// Scratch buffer for outgoing edges.
    edges: Vec<(N, D)>,
    /// Scratch buffer for path reconstruction.
    path: Vec<N>,
    /// Whether the last search stopped at the expansion bound.
    exhausted: bool,
    /// The maximal number of nodes (besides the start node) a search may reach
    /// before it gives up.
    ///
    /// This bounds the running time of searches for unreachable goals and makes
    /// searches on infinite graphs terminate. A search giving up reports "no
    /// path", use [`AStar::exhausted`] to distinguish this case.
    pub max_expand: usize,
}

impl<N, D> Default for AStar<N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, D> AStar<N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    /// Return a new search engine with the default expansion bound.
    pub fn new() -> Self {
        Self::with_max_expand(DEFAULT_MAX_EXPAND)
    }

    /// Return a new search engine with a custom expansion bound.
    pub fn with_max_expand(max_expand: usize) -> Self {
        AStar {
            came_from: HashMap::new(),
            open: MinHeap::default(),
            edges: vec![],
            path: vec![],
            exhausted: false,
            max_expand,
        }
    }

    /// Return `true` if the last search gave up because it reached the
    /// expansion bound.
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// Return the predecessor information of a node reached by the last search.
    pub fn came_from(&self, u: N) -> Option<&CameFrom<N, D>> {
        self.came_from.get(&u)
    }

    /// Return the best known distance of `u` from the start of the last search.
    ///
    /// After [`AStar::dijkstra`] this is the shortest path distance for each
    /// node within the cost bound.
    pub fn distance(&self, u: N) -> Option<D> {
        self.came_from.get(&u).map(|c| c.g)
    }

    /// Return all nodes reached by the last search with their distances.
    pub fn reached(&self) -> impl Iterator<Item = (N, D)> + '_ {
        self.came_from.iter().map(|(&u, c)| (u, c.g))
    }

    /// Return the number of nodes reached by the last search.
    pub fn num_reached(&self) -> usize {
        self.came_from.len()
    }

    fn reset(&mut self, start: N) {
        self.open.clear();
        self.came_from.clear();
        self.exhausted = false;
        self.came_from.insert(
            start,
            CameFrom {
                prev: start,
                next: start,
                g: D::zero(),
            },
        );
        self.open.push(Open {
            node: start,
            f: D::zero(),
            g: D::zero(),
        });
    }

    /// Return `true` if the popped entry is outdated.
    fn is_stale(&self, u: N, g: D) -> bool {
        self.came_from.get(&u).map_or(true, |c| g > c.g)
    }

    /// Relax all outgoing edges of `u`.
    ///
    /// Successors whose distance would exceed `max_cost` are ignored.
    fn expand<G, M, F>(&mut self, graph: &G, modifier: &M, u: N, g: D, max_cost: D, priority: F)
    where
        G: Graph<N, D>,
        M: EdgeModifier<N, D>,
        F: Fn(N, D) -> D,
    {
        let mut edges = mem::take(&mut self.edges);
        edges.clear();
        graph.collect(u, &mut edges);

        for &(v, weight) in edges.iter() {
            let mut weight = weight;
            if !modifier.modify_cost(u, v, &mut weight) {
                continue;
            }
            let gv = g + weight;
            debug_assert!(!gv.is_nan(), "path cost is NaN (invalid edge cost)");
            if gv > max_cost {
                continue;
            }

            match self.came_from.entry(v) {
                Entry::Occupied(mut e) => {
                    if gv < e.get().g {
                        *e.get_mut() = CameFrom { prev: u, next: v, g: gv };
                    } else {
                        continue;
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(CameFrom { prev: u, next: v, g: gv });
                }
            }

            let f = priority(v, gv);
            debug_assert!(!f.is_nan(), "node priority is NaN (invalid heuristic)");
            self.open.push(Open { node: v, f, g: gv });
        }

        self.edges = edges;
    }

    /// Compute the length of a shortest path from `start` to `goal`.
    ///
    /// Returns `None` if there is no path or the search reached
    /// [`AStar::max_expand`] nodes before finding the goal.
    ///
    /// # Parameter
    /// - `graph`: the graph
    /// - `start`: the start node
    /// - `goal`: the goal node
    /// - `heur`: the lower bound heuristic, its goal is set to `goal`
    /// - `modifier`: the edge cost modifier
    pub fn eval_path<G, H, M>(&mut self, graph: &G, start: N, goal: N, heur: &mut H, modifier: &M) -> Option<D>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
    {
        self.reset(start);
        heur.set_goal(goal);

        let heur = &*heur;
        loop {
            // all nodes besides the start node count as examined
            if self.came_from.len() - 1 > self.max_expand {
                debug!(
                    "A* search gave up after reaching {} nodes (max_expand = {})",
                    self.came_from.len(),
                    self.max_expand
                );
                self.exhausted = true;
                return None;
            }

            let Open { node: u, g, .. } = self.open.pop()?;
            if self.is_stale(u, g) {
                continue;
            }
            if u == goal {
                return Some(g);
            }

            self.expand(graph, modifier, u, g, D::infinity(), |v, gv| gv + heur.heuristic(v));
        }
    }

    /// Compute a shortest path from `start` to `goal`.
    ///
    /// On success the path is passed to `processor`, which appends its output
    /// to `out`, and the length of the path is returned. If there is no path
    /// `None` is returned and `out` is not modified.
    ///
    /// The parameters are the same as for [`AStar::eval_path`].
    #[allow(clippy::too_many_arguments)]
    pub fn find_path<G, H, M, P>(
        &mut self,
        graph: &G,
        start: N,
        goal: N,
        heur: &mut H,
        modifier: &M,
        processor: &mut P,
        out: &mut Vec<P::Segment>,
    ) -> Option<D>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
        P: PathProcessor<N>,
    {
        let dist = self.eval_path(graph, start, goal, heur, modifier)?;
        self.build_path(start, goal, processor.insert_query_start());
        processor.process_path(start, goal, &self.path, out);
        Some(dist)
    }

    /// Fill the path buffer by following the predecessors from `goal`.
    fn build_path(&mut self, start: N, goal: N, insert_start: bool) {
        self.path.clear();
        let mut u = goal;
        while u != start {
            match self.came_from.get(&u) {
                Some(c) => {
                    self.path.push(c.next);
                    u = c.prev;
                }
                None => break,
            }
        }
        if insert_start {
            self.path.push(start);
        }
        self.path.reverse();
    }

    /// Compute shortest paths from `start` to all nodes within distance `max_cost`.
    ///
    /// The results are available via [`AStar::distance`], [`AStar::came_from`]
    /// and [`AStar::reached`]. Nodes farther away than `max_cost` are not
    /// reached.
    ///
    /// The expansion bound is not applied. With `max_cost` being infinite the
    /// search runs until all nodes reachable from `start` have been handled, so
    /// it does not terminate on infinite graphs.
    pub fn dijkstra<G, M>(&mut self, graph: &G, start: N, modifier: &M, max_cost: D)
    where
        G: Graph<N, D>,
        M: EdgeModifier<N, D>,
    {
        self.reset(start);
        while let Some(Open { node: u, g, .. }) = self.open.pop() {
            if g > max_cost {
                break;
            }
            if self.is_stale(u, g) {
                continue;
            }
            self.expand(graph, modifier, u, g, max_cost, |_, gv| gv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AStar;
    use crate::traits::{heuristic_fn, NoModifier, NodePath, ZeroHeuristic};

    fn line(u: u32, edges: &mut Vec<(u32, f64)>) {
        if u > 0 {
            edges.push((u - 1, 1.0));
        }
        edges.push((u + 1, 1.0));
    }

    #[test]
    fn test_start_is_goal() {
        let mut astar = AStar::with_max_expand(0);
        let mut path = vec![];
        let d = astar.find_path(&line, 4, 4, &mut ZeroHeuristic, &NoModifier, &mut NodePath::default(), &mut path);
        assert_eq!(d, Some(0.0));
        assert_eq!(path, vec![4]);
    }

    #[test]
    fn test_infinite_graph_terminates() {
        // one-way infinite line, the goal lies behind the start
        let half = |u: u32, edges: &mut Vec<(u32, f64)>| edges.push((u + 1, 1.0));
        let mut astar = AStar::with_max_expand(100);
        assert_eq!(astar.eval_path(&half, 10, 5, &mut ZeroHeuristic, &NoModifier), None);
        assert!(astar.exhausted());
        assert!(astar.num_reached() <= 102);
    }

    #[test]
    fn test_dijkstra_bound() {
        let mut astar = AStar::new();
        astar.dijkstra(&line, 5, &NoModifier, 3.0);
        let mut reached: Vec<_> = astar.reached().map(|(u, _)| u).collect();
        reached.sort();
        assert_eq!(reached, vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(astar.distance(8), Some(3.0));
        assert_eq!(astar.distance(9), None);
        assert_eq!(astar.came_from(7).map(|c| c.prev), Some(6));
    }

    #[test]
    fn test_without_start() {
        let mut astar = AStar::new();
        let mut path = vec![];
        let mut processor = NodePath {
            insert_query_start: false,
        };
        let d = astar.find_path(&line, 2, 5, &mut ZeroHeuristic, &NoModifier, &mut processor, &mut path);
        assert_eq!(d, Some(3.0));
        assert_eq!(path, vec![3, 4, 5]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "path cost is NaN")]
    fn test_nan_cost() {
        let broken = |u: u32, edges: &mut Vec<(u32, f64)>| edges.push((u + 1, f64::NAN));
        let mut astar = AStar::new();
        astar.eval_path(&broken, 0, 3, &mut ZeroHeuristic, &NoModifier);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "node priority is NaN")]
    fn test_nan_heuristic() {
        let mut astar = AStar::new();
        astar.eval_path(&line, 0, 3, &mut heuristic_fn(|_: u32, _: u32| f64::NAN), &NoModifier);
    }
}
