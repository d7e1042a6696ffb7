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

//! Choosing between several candidate stop sequences.
//!
//! An *option* is a sequence of stops (see [`stops`][crate::search::stops]).
//! A batch of options is stored in an [`OptionBatch`], which keeps the stops
//! of all options in one flat vector and describes each option by an
//! [`OptionSpan`] into that vector.
//!
//! The search functions return the index of the selected option together with
//! the length of its path:
//!
//! - `*_option`: the first option (in batch order) having a path,
//! - `*_option_remap`: the first option having a path in a given order,
//! - `*_cheapest_option`: the option with the shortest path. Options whose
//!   heuristic lower bound already exceeds the best length found so far are
//!   skipped without a search.
//!
//! # Example
//!
//! ```
//! use rs_path::classes;
//! use rs_path::search::{AStar, OptionBatch, OptionBuffers};
//! use rs_path::traits::{heuristic_fn, NoModifier, NodePath};
//!
//! let g = classes::path::<f64>(20);
//! let mut h = heuristic_fn(|u: usize, v: usize| (u as f64 - v as f64).abs());
//!
//! let mut batch = OptionBatch::new();
//! batch.push(&[0, 15, 2]);
//! batch.push(&[0, 3, 6]);
//! batch.push_empty();
//! batch.push(&[0, 25]);
//!
//! let mut astar = AStar::new();
//! let mut buffers = OptionBuffers::default();
//! let mut out = vec![];
//! let best = astar.find_cheapest_option(&g, &batch, &mut h, &NoModifier, &mut NodePath::default(), &mut buffers, &mut out);
//!
//! assert_eq!(best, Some((1, 6.0)));
//! assert_eq!(out, vec![0, 1, 2, 3, 3, 4, 5, 6]);
//! ```

use crate::search::AStar;
use crate::traits::{EdgeModifier, Graph, Heuristic, PathProcessor};

use crate::num::traits::Float;

use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The position of the stops of one option in the node vector of a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OptionSpan {
    /// Index of the first stop.
    pub start: usize,
    /// Number of stops.
    pub len: usize,
}

impl OptionSpan {
    pub fn new(start: usize, len: usize) -> Self {
        OptionSpan { start, len }
    }

    /// Return the stops of this option.
    pub fn stops<'a, N>(&self, nodes: &'a [N]) -> &'a [N] {
        &nodes[self.start..self.start + self.len]
    }
}

/// A batch of options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OptionBatch<N> {
    nodes: Vec<N>,
    spans: Vec<OptionSpan>,
}

impl<N> Default for OptionBatch<N> {
    fn default() -> Self {
        OptionBatch {
            nodes: vec![],
            spans: vec![],
        }
    }
}

impl<N> OptionBatch<N> {
    /// Return an empty batch.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a batch from a flat node vector and the spans of the options.
    ///
    /// # Panics
    ///
    /// Panics if some span is not contained in `nodes`.
    pub fn from_parts(nodes: Vec<N>, spans: Vec<OptionSpan>) -> Self {
        assert!(
            spans.iter().all(|s| s.start + s.len <= nodes.len()),
            "option span out of range"
        );
        OptionBatch { nodes, spans }
    }

    /// Add an option and return its index.
    pub fn push(&mut self, stops: &[N]) -> usize
    where
        N: Clone,
    {
        let start = self.nodes.len();
        self.nodes.extend_from_slice(stops);
        self.spans.push(OptionSpan::new(start, stops.len()));
        self.spans.len() - 1
    }

    /// Add an option without stops and return its index.
    ///
    /// An empty option never has a path.
    pub fn push_empty(&mut self) -> usize {
        self.spans.push(OptionSpan::new(self.nodes.len(), 0));
        self.spans.len() - 1
    }

    /// Return the number of options.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Remove all options.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.spans.clear();
    }

    /// Return the stops of option `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn stops(&self, i: usize) -> &[N] {
        self.spans[i].stops(&self.nodes)
    }

    /// Return the spans of all options.
    pub fn spans(&self) -> &[OptionSpan] {
        &self.spans
    }

    /// Return the flat node vector.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Return an iterator over the stops of all options.
    pub fn iter(&self) -> impl Iterator<Item = &[N]> + '_ {
        self.spans.iter().map(move |s| s.stops(&self.nodes))
    }
}

/// The two alternating scratch buffers used by
/// [`AStar::find_cheapest_option`].
///
/// The path of the best option so far is kept in one buffer while the next
/// candidate is written to the other one. The buffers can be reused for many
/// searches.
pub struct OptionBuffers<S> {
    buffers: [Vec<S>; 2],
}

impl<S> Default for OptionBuffers<S> {
    fn default() -> Self {
        OptionBuffers {
            buffers: [vec![], vec![]],
        }
    }
}

impl<N, D> AStar<N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    /// Return the first option of `batch` having a path.
    ///
    /// The path of that option is appended to `out`, the paths of options
    /// tried before are discarded. Returns the index of the option and the
    /// length of its path, or `None` if no option has a path.
    #[allow(clippy::too_many_arguments)]
    pub fn find_option<G, H, M, P>(
        &mut self,
        graph: &G,
        batch: &OptionBatch<N>,
        heur: &mut H,
        modifier: &M,
        processor: &mut P,
        out: &mut Vec<P::Segment>,
    ) -> Option<(usize, D)>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
        P: PathProcessor<N>,
    {
        batch.iter().enumerate().find_map(|(i, stops)| {
            self.find_path_stops(graph, stops, heur, modifier, processor, out)
                .map(|d| (i, d))
        })
    }

    /// Return the first option having a path when trying them in the order
    /// `order`.
    ///
    /// `order` contains indices into `batch`, the returned index is the index in
    /// `batch` (not the position in `order`). Options not listed in `order`
    /// are not considered.
    ///
    /// # Panics
    ///
    /// Panics if `order` contains an index not less than `batch.len()`.
    #[allow(clippy::too_many_arguments)]
    pub fn find_option_remap<G, H, M, P>(
        &mut self,
        graph: &G,
        batch: &OptionBatch<N>,
        order: &[usize],
        heur: &mut H,
        modifier: &M,
        processor: &mut P,
        out: &mut Vec<P::Segment>,
    ) -> Option<(usize, D)>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
        P: PathProcessor<N>,
    {
        order.iter().find_map(|&i| {
            self.find_path_stops(graph, batch.stops(i), heur, modifier, processor, out)
                .map(|d| (i, d))
        })
    }

    /// Return the option with the shortest path.
    ///
    /// The path of the winning option is appended to `out`. Among several
    /// options of the same length the first one in `batch` wins. Returns `None`
    /// if no option has a path.
    ///
    /// The lengths of the paths must be finite.
    #[allow(clippy::too_many_arguments)]
    pub fn find_cheapest_option<G, H, M, P>(
        &mut self,
        graph: &G,
        batch: &OptionBatch<N>,
        heur: &mut H,
        modifier: &M,
        processor: &mut P,
        buffers: &mut OptionBuffers<P::Segment>,
        out: &mut Vec<P::Segment>,
    ) -> Option<(usize, D)>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
        P: PathProcessor<N>,
    {
        let mut best: Option<(usize, D)> = None;
        // the buffer receiving the next candidate, the other one holds the best path
        let mut cur = 0;
        buffers.buffers[0].clear();
        buffers.buffers[1].clear();

        for (i, stops) in batch.iter().enumerate() {
            if stops.len() < 2 {
                continue;
            }
            if let Some((_, best_dist)) = best {
                if Self::stops_lower_bound(stops, heur) > best_dist {
                    continue;
                }
            }

            let buf = &mut buffers.buffers[cur];
            buf.clear();
            if let Some(d) = self.find_path_stops(graph, stops, heur, modifier, processor, buf) {
                debug_assert!(d.is_finite(), "infinite path length of option {}", i);
                if best.map_or(true, |(_, best_dist)| d < best_dist) {
                    best = Some((i, d));
                    cur = 1 - cur;
                }
            }
        }

        if best.is_some() {
            out.append(&mut buffers.buffers[1 - cur]);
        }
        best
    }

    /// Return the first option of `batch` having a path and its length.
    ///
    /// This is [`AStar::find_option`] without computing the path.
    pub fn eval_option<G, H, M>(
        &mut self,
        graph: &G,
        batch: &OptionBatch<N>,
        heur: &mut H,
        modifier: &M,
    ) -> Option<(usize, D)>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
    {
        batch
            .iter()
            .enumerate()
            .find_map(|(i, stops)| self.eval_path_stops(graph, stops, heur, modifier).map(|d| (i, d)))
    }

    /// Return the first option having a path when trying them in the order
    /// `order`.
    ///
    /// This is [`AStar::find_option_remap`] without computing the path.
    ///
    /// # Panics
    ///
    /// Panics if `order` contains an index not less than `batch.len()`.
    pub fn eval_option_remap<G, H, M>(
        &mut self,
        graph: &G,
        batch: &OptionBatch<N>,
        order: &[usize],
        heur: &mut H,
        modifier: &M,
    ) -> Option<(usize, D)>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
    {
        order.iter().find_map(|&i| {
            self.eval_path_stops(graph, batch.stops(i), heur, modifier)
                .map(|d| (i, d))
        })
    }

    /// Return the option with the shortest path and its length.
    ///
    /// This is [`AStar::find_cheapest_option`] without computing the path.
    pub fn eval_cheapest_option<G, H, M>(
        &mut self,
        graph: &G,
        batch: &OptionBatch<N>,
        heur: &mut H,
        modifier: &M,
    ) -> Option<(usize, D)>
    where
        G: Graph<N, D>,
        H: Heuristic<N, D>,
        M: EdgeModifier<N, D>,
    {
        let mut best: Option<(usize, D)> = None;
        for (i, stops) in batch.iter().enumerate() {
            if stops.len() < 2 {
                continue;
            }
            if let Some((_, best_dist)) = best {
                if Self::stops_lower_bound(stops, heur) > best_dist {
                    continue;
                }
            }
            if let Some(d) = self.eval_path_stops(graph, stops, heur, modifier) {
                debug_assert!(d.is_finite(), "infinite path length of option {}", i);
                if best.map_or(true, |(_, best_dist)| d < best_dist) {
                    best = Some((i, d));
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::{OptionBatch, OptionBuffers, OptionSpan};
    use crate::search::AStar;
    use crate::traits::{NoModifier, NodePath, ZeroHeuristic};

    #[test]
    fn test_batch() {
        let mut batch = OptionBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.push(&[1, 2, 3]), 0);
        assert_eq!(batch.push_empty(), 1);
        assert_eq!(batch.push(&[4, 5]), 2);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.nodes(), &[1, 2, 3, 4, 5]);
        assert_eq!(
            batch.spans(),
            &[OptionSpan::new(0, 3), OptionSpan::new(3, 0), OptionSpan::new(3, 2)]
        );
        assert_eq!(batch.stops(2), &[4, 5]);
        assert_eq!(batch.iter().map(|s| s.len()).collect::<Vec<_>>(), vec![3, 0, 2]);

        let copy = OptionBatch::from_parts(batch.nodes().to_vec(), batch.spans().to_vec());
        assert_eq!(copy, batch);

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_invalid_span() {
        OptionBatch::from_parts(vec![1, 2], vec![OptionSpan::new(1, 2)]);
    }

    fn infinite_leg(u: u32, edges: &mut Vec<(u32, f64)>) {
        if u == 0 {
            edges.push((1, f64::INFINITY));
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "infinite path length")]
    fn test_infinite_cheapest_option() {
        let mut batch = OptionBatch::new();
        batch.push(&[0, 1]);
        let mut astar = AStar::new();
        let mut out = vec![];
        astar.find_cheapest_option(
            &infinite_leg,
            &batch,
            &mut ZeroHeuristic,
            &NoModifier,
            &mut NodePath::default(),
            &mut OptionBuffers::default(),
            &mut out,
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "infinite path length")]
    fn test_infinite_eval_cheapest_option() {
        let mut batch = OptionBatch::new();
        batch.push(&[0, 1]);
        AStar::new().eval_cheapest_option(&infinite_leg, &batch, &mut ZeroHeuristic, &NoModifier);
    }

    #[test]
    #[should_panic]
    fn test_remap_out_of_range() {
        let mut batch = OptionBatch::new();
        batch.push(&[0, 1]);
        AStar::new().eval_option_remap(&infinite_leg, &batch, &[1], &mut ZeroHeuristic, &NoModifier);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::super::OptionBatch;
        use serde_json;

        #[test]
        fn test_serde() {
            let mut batch = OptionBatch::new();
            batch.push(&[3u32, 1, 4]);
            batch.push_empty();
            let serialized = serde_json::to_string(&batch).unwrap();
            let restored: OptionBatch<u32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(restored, batch);
        }
    }
}
