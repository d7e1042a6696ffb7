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

//! Paths visiting a sequence of stops.
//!
//! A path through the stops $s_0, s_1, \ldots, s_n$ is the concatenation of
//! shortest paths from $s_{i-1}$ to $s_i$ for $i = 1, \ldots, n$. Its length
//! is the sum of the lengths of these legs. If a single leg has no path, the
//! whole sequence has no path.
//!
//! A sequence with less than two stops has no path. This is not an error, it
//! allows representing an "empty" option in an
//! [`OptionBatch`][crate::search::OptionBatch].
//!
//! # Example
//!
//! ```
//! use rs_path::classes;
//! use rs_path::search::AStar;
//! use rs_path::traits::{NoModifier, NodePath, ZeroHeuristic};
//!
//! let g = classes::path::<f64>(9);
//! let mut astar = AStar::new();
//! let mut out = vec![];
//! let mut processor = NodePath { insert_query_start: false };
//!
//! let dist = astar.find_path_stops(&g, &[2, 5, 3], &mut ZeroHeuristic, &NoModifier, &mut processor, &mut out);
//! assert_eq!(dist, Some(5.0));
//! assert_eq!(out, vec![3, 4, 5, 4, 3]);
//!
//! assert_eq!(astar.find_path_stops(&g, &[2], &mut ZeroHeuristic, &NoModifier, &mut processor, &mut out), None);
//! assert_eq!(out.len(), 5);
//! ```

use crate::search::AStar;
use crate::traits::{EdgeModifier, Graph, Heuristic, PathProcessor};

use crate::num::traits::Float;

use std::hash::Hash;

impl<N, D> AStar<N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    /// Compute the length of a shortest path visiting all `stops` in order.
    ///
    /// Returns `None` if `stops` contains less than two nodes or some leg has no
    /// path.
    pub fn eval_path_stops<G, H, M>(&mut self, graph: &G, stops: &[N], heur: &mut H, modifier: &M) -> Option<D>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
    {
        if stops.len() < 2 {
            return None;
        }
        let mut dist = D::zero();
        for leg in stops.windows(2) {
            dist = dist + self.eval_path(graph, leg[0], leg[1], heur, modifier)?;
        }
        Some(dist)
    }

    /// Compute a shortest path visiting all `stops` in order.
    ///
    /// Each leg is passed separately to `processor`, so `out` receives the
    /// concatenation of the outputs of all legs. If there is no path, `None` is
    /// returned and `out` is restored to its length before the call.
    ///
    /// With [`NodePath`][crate::traits::NodePath] inserting the query start,
    /// each intermediate stop appears twice in `out`, as the end of one leg
    /// and the start of the next. Use `insert_query_start: false` and push the
    /// first stop separately to get each node once.
    #[allow(clippy::too_many_arguments)]
    pub fn find_path_stops<G, H, M, P>(
        &mut self,
        graph: &G,
        stops: &[N],
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
        if stops.len() < 2 {
            return None;
        }
        let len = out.len();
        let mut dist = D::zero();
        for leg in stops.windows(2) {
            match self.find_path(graph, leg[0], leg[1], heur, modifier, processor, out) {
                Some(d) => dist = dist + d,
                None => {
                    out.truncate(len);
                    return None;
                }
            }
        }
        Some(dist)
    }

    /// Return the sum of the heuristic values of all legs of `stops`.
    ///
    /// For an admissible heuristic this is a lower bound on the length of a
    /// path visiting all stops.
    pub fn stops_lower_bound<H>(stops: &[N], heur: &mut H) -> D
    where
        H: Heuristic<N, D>,
    {
        let mut bound = D::zero();
        for leg in stops.windows(2) {
            heur.set_goal(leg[1]);
            bound = bound + heur.heuristic(leg[0]);
        }
        bound
    }
}
