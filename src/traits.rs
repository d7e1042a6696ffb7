// Copyright (c) 2015-2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for the collaborators of a search.
//!
//! A search never looks into a concrete graph type. It only needs four
//! capabilities, each described by a small trait:
//!
//! - [`Graph`]: the outgoing edges of a node,
//! - [`Heuristic`]: a lower bound on the remaining distance to the goal,
//! - [`EdgeModifier`]: a hook to change the cost of an edge or drop it,
//! - [`PathProcessor`]: conversion of the found node sequence into the
//!   output format of the caller.
//!
//! All traits are used as generic parameters, so there is no dynamic dispatch
//! in the inner loop of a search.

use crate::num::traits::Float;

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// A (possibly infinite) graph given by the outgoing edges of each node.
///
/// Edge costs must be non-negative.
///
/// Any function `Fn(N, &mut Vec<(N, D)>)` is a graph.
pub trait Graph<N, D> {
    /// Append the outgoing edges `(v, cost)` of node `u` to `edges`.
    ///
    /// The caller clears `edges` before each call, implementors must only
    /// append.
    fn collect(&self, u: N, edges: &mut Vec<(N, D)>);
}

impl<N, D, F> Graph<N, D> for F
where
    F: Fn(N, &mut Vec<(N, D)>),
{
    fn collect(&self, u: N, edges: &mut Vec<(N, D)>) {
        (*self)(u, edges)
    }
}

/// A heuristic providing a lower bound on the distance to a goal node.
///
/// The heuristic must be admissible, i.e. `heuristic(u)` must not exceed the
/// length of a shortest path from `u` to the goal, and consistent, i.e.
/// `heuristic(u) <= w(u,v) + heuristic(v)` for each edge `(u,v)`. Otherwise
/// the paths returned by the search may not be shortest ones. This is *not*
/// checked.
pub trait Heuristic<N, D> {
    /// Set the goal node for subsequent calls to [`Heuristic::heuristic`].
    fn set_goal(&mut self, goal: N);

    /// Return the lower bound for node `u`.
    fn heuristic(&self, u: N) -> D;
}

/// The zero heuristic.
///
/// An A*-search with this heuristic is Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N, D> Heuristic<N, D> for ZeroHeuristic
where
    D: Float,
{
    fn set_goal(&mut self, _goal: N) {}

    fn heuristic(&self, _u: N) -> D {
        D::zero()
    }
}

/// A heuristic given by a function of a node and the goal.
///
/// # Example
///
/// ```
/// use rs_path::traits::{heuristic_fn, Heuristic};
///
/// let mut h = heuristic_fn(|u: i32, goal: i32| ((goal - u).abs()) as f64);
/// h.set_goal(7);
/// assert_eq!(h.heuristic(3), 4.0);
/// ```
pub struct HeuristicFn<F, N> {
    f: F,
    goal: Option<N>,
}

/// Return a [`Heuristic`] evaluating `f(u, goal)`.
///
/// Before a goal is set the heuristic is zero.
pub fn heuristic_fn<F, N, D>(f: F) -> HeuristicFn<F, N>
where
    F: Fn(N, N) -> D,
{
    HeuristicFn { f, goal: None }
}

impl<F, N, D> Heuristic<N, D> for HeuristicFn<F, N>
where
    F: Fn(N, N) -> D,
    N: Copy,
    D: Float,
{
    fn set_goal(&mut self, goal: N) {
        self.goal = Some(goal);
    }

    fn heuristic(&self, u: N) -> D {
        match self.goal {
            Some(goal) => (self.f)(u, goal),
            None => D::zero(),
        }
    }
}

/// A hook to modify the cost of an edge during a search.
///
/// Any function `Fn(N, N, &mut D) -> bool` is an edge modifier.
pub trait EdgeModifier<N, D> {
    /// Possibly change the `cost` of the edge `(from, to)`.
    ///
    /// Return `false` if the edge should be ignored.
    fn modify_cost(&self, from: N, to: N, cost: &mut D) -> bool;
}

impl<N, D, F> EdgeModifier<N, D> for F
where
    F: Fn(N, N, &mut D) -> bool,
{
    fn modify_cost(&self, from: N, to: N, cost: &mut D) -> bool {
        (*self)(from, to, cost)
    }
}

/// The edge modifier keeping all edges unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoModifier;

impl<N, D> EdgeModifier<N, D> for NoModifier {
    fn modify_cost(&self, _from: N, _to: N, _cost: &mut D) -> bool {
        true
    }
}

/// Drop all edges entering one of the blocked nodes.
///
/// # Example
///
/// ```
/// use rs_path::traits::{BlockedNodes, EdgeModifier};
///
/// let blocked = BlockedNodes::new(vec![2, 3]);
/// let mut cost = 1.0;
/// assert!(blocked.modify_cost(0, 1, &mut cost));
/// assert!(!blocked.modify_cost(1, 2, &mut cost));
/// ```
#[derive(Clone, Debug)]
pub struct BlockedNodes<N, S = std::collections::hash_map::RandomState> {
    pub blocked: HashSet<N, S>,
}

impl<N> BlockedNodes<N>
where
    N: Eq + Hash,
{
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        BlockedNodes {
            blocked: nodes.into_iter().collect(),
        }
    }
}

impl<N, D, S> EdgeModifier<N, D> for BlockedNodes<N, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn modify_cost(&self, _from: N, to: N, _cost: &mut D) -> bool {
        !self.blocked.contains(&to)
    }
}

/// Conversion of a found path into the output of a search.
pub trait PathProcessor<N> {
    /// The type of the elements written to the output.
    type Segment;

    /// Whether the start node should be the first node of the raw path.
    fn insert_query_start(&self) -> bool;

    /// Append the output for the raw node sequence `path` to `out`.
    ///
    /// `path` leads from `start` to `goal` and ends with `goal`. It starts with
    /// `start` iff [`PathProcessor::insert_query_start`] is `true`.
    fn process_path(&mut self, start: N, goal: N, path: &[N], out: &mut Vec<Self::Segment>);
}

/// Output the nodes of the path.
#[derive(Clone, Copy, Debug)]
pub struct NodePath {
    /// Whether the start node is part of the output.
    pub insert_query_start: bool,
}

impl Default for NodePath {
    fn default() -> Self {
        NodePath {
            insert_query_start: true,
        }
    }
}

impl<N> PathProcessor<N> for NodePath
where
    N: Copy,
{
    type Segment = N;

    fn insert_query_start(&self) -> bool {
        self.insert_query_start
    }

    fn process_path(&mut self, _start: N, _goal: N, path: &[N], out: &mut Vec<N>) {
        out.extend_from_slice(path)
    }
}

/// Output the edges `(u, v)` of the path.
///
/// The first segment starts at the query start, so a path from a node to
/// itself produces no segment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgePath;

impl<N> PathProcessor<N> for EdgePath
where
    N: Copy,
{
    type Segment = (N, N);

    fn insert_query_start(&self) -> bool {
        true
    }

    fn process_path(&mut self, _start: N, _goal: N, path: &[N], out: &mut Vec<(N, N)>) {
        out.extend(path.windows(2).map(|uv| (uv[0], uv[1])))
    }
}
