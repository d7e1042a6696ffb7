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

//! ALT heuristic: A*, landmarks and the triangle inequality.
//!
//! For a set of landmark nodes $L$ the shortest path distances from (and, in
//! directed graphs, to) each landmark are computed in advance. For each
//! landmark $l$ the triangle inequality gives the lower bounds
//! \\[ d(u,t) \ge d(l,t) - d(l,u), \qquad d(u,t) \ge d(u,l) - d(t,l), \\]
//! and the heuristic value of $u$ is the maximum of these bounds over all
//! landmarks. The resulting heuristic is admissible and consistent.
//!
//! Preprocessing runs one Dijkstra search per landmark (and direction) in
//! parallel using `rayon`. The results are merged sequentially into one
//! distance vector per node.
//!
//! # Example
//!
//! ```
//! use rs_path::alt::Alt;
//! use rs_path::classes;
//! use rs_path::search::AStar;
//! use rs_path::traits::{Heuristic, NoModifier};
//!
//! let g = classes::path::<f64>(9);
//! let mut alt = Alt::new(false);
//! alt.compute(&g, &[9]).unwrap();
//!
//! let mut h = alt.heuristic();
//! h.set_goal(9);
//! assert_eq!(h.heuristic(0), 9.0);
//!
//! let mut astar = AStar::new();
//! assert_eq!(astar.eval_path(&g, 2, 7, &mut alt.heuristic(), &NoModifier), Some(5.0));
//! ```

pub mod io;
pub mod landmarks;

pub use self::landmarks::{select_farthest, select_farthest_directed, select_random, LandmarkSelection};

use crate::search::AStar;
use crate::traits::{Graph, Heuristic, NoModifier};

use crate::num::traits::Float;

use log::{debug, info, trace};
use rand::Rng;
use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::collections::HashMap;
use std::hash::Hash;
use std::io as stdio;

/// The maximal number of landmarks.
pub const MAX_LANDMARKS: usize = 31;

/// The distances of one node to or from all landmarks.
pub type Distances<D> = SmallVec<[D; 8]>;

/// Errors of ALT preprocessing and serialization.
#[derive(Debug, Error)]
pub enum AltError {
    #[error("too many landmarks: {requested} requested, at most {max} supported")]
    TooManyLandmarks { requested: usize, max: usize },
    #[error("directed landmark tables need the reversed graph")]
    MissingReverseGraph,
    #[error("invalid landmark data: {0}")]
    Format(String),
    #[error("I/O error: {0}")]
    Io(#[from] stdio::Error),
}

/// The preprocessing state of an [`Alt`] object.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AltState {
    /// No landmark distances are available.
    Uncomputed,
    /// Preprocessing is running.
    Computing,
    /// The landmark distances are available.
    Ready,
}

/// Precomputed landmark distances.
#[derive(Clone, Debug)]
pub struct Alt<N, D> {
    directed: bool,
    state: AltState,
    landmarks: Vec<N>,
    /// Distances from the landmarks to each node.
    from_landmarks: HashMap<N, Distances<D>>,
    /// Distances from each node to the landmarks, only for directed graphs.
    to_landmarks: HashMap<N, Distances<D>>,
}

impl<N, D> Alt<N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    /// Return a new object without landmarks.
    ///
    /// If `directed` is `true`, distances in both directions are stored and
    /// the reversed graph must be given for preprocessing.
    pub fn new(directed: bool) -> Self {
        Alt {
            directed,
            state: AltState::Uncomputed,
            landmarks: vec![],
            from_landmarks: HashMap::new(),
            to_landmarks: HashMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn state(&self) -> AltState {
        self.state
    }

    /// Return the landmarks of the last preprocessing.
    pub fn landmarks(&self) -> &[N] {
        &self.landmarks
    }

    pub fn num_landmarks(&self) -> usize {
        self.landmarks.len()
    }

    /// Return the distances from all landmarks to `u`.
    ///
    /// Returns `None` if `u` has not been reached from any landmark.
    /// Unreachable landmarks have infinite distance.
    pub fn from_landmarks(&self, u: N) -> Option<&[D]> {
        self.from_landmarks.get(&u).map(|d| &d[..])
    }

    /// Return the distances from `u` to all landmarks.
    ///
    /// This is always `None` for undirected graphs.
    pub fn to_landmarks(&self, u: N) -> Option<&[D]> {
        self.to_landmarks.get(&u).map(|d| &d[..])
    }

    /// Remove all landmarks and distances.
    pub fn clear(&mut self) {
        self.landmarks.clear();
        self.from_landmarks.clear();
        self.to_landmarks.clear();
        self.state = AltState::Uncomputed;
    }

    fn begin(&mut self, landmarks: &[N]) -> Result<(), AltError> {
        if landmarks.len() > MAX_LANDMARKS {
            return Err(AltError::TooManyLandmarks {
                requested: landmarks.len(),
                max: MAX_LANDMARKS,
            });
        }
        self.clear();
        self.state = AltState::Computing;
        self.landmarks.extend_from_slice(landmarks);
        info!(
            "Computing {} landmark distances for {} graph",
            landmarks.len(),
            if self.directed { "directed" } else { "undirected" }
        );
        Ok(())
    }

    /// Compute the landmark distances of an undirected graph.
    ///
    /// Any previous data is discarded. Fails if there are more than
    /// [`MAX_LANDMARKS`] landmarks or if this object has been created for a
    /// directed graph.
    pub fn compute<G>(&mut self, graph: &G, landmarks: &[N]) -> Result<(), AltError>
    where
        G: Graph<N, D> + Sync,
        N: Send + Sync,
        D: Send + Sync,
    {
        if self.directed {
            return Err(AltError::MissingReverseGraph);
        }
        self.begin(landmarks)?;
        let from = landmark_distances(graph, landmarks);
        self.from_landmarks = merge(from, landmarks.len());
        self.finish();
        Ok(())
    }

    /// Compute the landmark distances using the reversed graph, too.
    ///
    /// `reversed` must contain the edge `(v, u)` for each edge `(u, v)` of
    /// `graph` (see [`reverse`][crate::adapters::reverse]). For an undirected
    /// object `reversed` is not used.
    pub fn compute_directed<G, R>(&mut self, graph: &G, reversed: &R, landmarks: &[N]) -> Result<(), AltError>
    where
        G: Graph<N, D> + Sync,
        R: Graph<N, D> + Sync,
        N: Send + Sync,
        D: Send + Sync,
    {
        if !self.directed {
            return self.compute(graph, landmarks);
        }
        self.begin(landmarks)?;
        let (from, to) = rayon::join(
            || landmark_distances(graph, landmarks),
            || landmark_distances(reversed, landmarks),
        );
        self.from_landmarks = merge(from, landmarks.len());
        self.to_landmarks = merge(to, landmarks.len());
        self.finish();
        Ok(())
    }

    /// Select `count` landmarks among `nodes` and compute their distances.
    ///
    /// See [`compute`][Alt::compute].
    pub fn compute_with_selection<G, Rn>(
        &mut self,
        graph: &G,
        nodes: &[N],
        count: usize,
        selection: LandmarkSelection,
        rng: &mut Rn,
    ) -> Result<(), AltError>
    where
        G: Graph<N, D> + Sync,
        Rn: Rng + ?Sized,
        N: Send + Sync,
        D: Send + Sync,
    {
        check_count(count)?;
        if self.directed {
            return Err(AltError::MissingReverseGraph);
        }
        let landmarks = match selection {
            LandmarkSelection::Random => select_random(nodes, count, rng),
            LandmarkSelection::Farthest => select_farthest(graph, nodes, count, rng),
        };
        self.compute(graph, &landmarks)
    }

    /// Select `count` landmarks among `nodes` and compute their distances
    /// using the reversed graph.
    ///
    /// See [`compute_directed`][Alt::compute_directed].
    pub fn compute_directed_with_selection<G, R, Rn>(
        &mut self,
        graph: &G,
        reversed: &R,
        nodes: &[N],
        count: usize,
        selection: LandmarkSelection,
        rng: &mut Rn,
    ) -> Result<(), AltError>
    where
        G: Graph<N, D> + Sync,
        R: Graph<N, D> + Sync,
        Rn: Rng + ?Sized,
        N: Send + Sync,
        D: Send + Sync,
    {
        check_count(count)?;
        let landmarks = match selection {
            LandmarkSelection::Random => select_random(nodes, count, rng),
            LandmarkSelection::Farthest if self.directed => {
                select_farthest_directed(graph, reversed, nodes, count, rng)
            }
            LandmarkSelection::Farthest => select_farthest(graph, nodes, count, rng),
        };
        self.compute_directed(graph, reversed, &landmarks)
    }

    fn finish(&mut self) {
        self.state = AltState::Ready;
        debug!(
            "Landmark tables ready: {} nodes reached from landmarks, {} nodes reaching landmarks",
            self.from_landmarks.len(),
            self.to_landmarks.len()
        );
    }

    /// Return a heuristic using the landmark distances.
    ///
    /// If no distances have been computed the heuristic is zero.
    pub fn heuristic(&self) -> AltHeuristic<'_, N, D> {
        AltHeuristic {
            alt: self,
            goal: None,
            goal_from: None,
            goal_to: None,
        }
    }
}

fn check_count(count: usize) -> Result<(), AltError> {
    if count > MAX_LANDMARKS {
        Err(AltError::TooManyLandmarks {
            requested: count,
            max: MAX_LANDMARKS,
        })
    } else {
        Ok(())
    }
}

/// Run Dijkstra from each landmark, one task per landmark.
fn landmark_distances<N, D, G>(graph: &G, landmarks: &[N]) -> Vec<Vec<(N, D)>>
where
    N: Copy + Eq + Hash + Send + Sync,
    D: Float + Send + Sync,
    G: Graph<N, D> + Sync,
{
    landmarks
        .par_iter()
        .enumerate()
        .map_init(AStar::<N, D>::new, |astar, (i, &l)| {
            astar.dijkstra(graph, l, &NoModifier, D::infinity());
            trace!("Landmark {} reached {} nodes", i, astar.num_reached());
            astar.reached().collect::<Vec<_>>()
        })
        .collect()
}

/// Build the per-node distance vectors.
fn merge<N, D>(distances: Vec<Vec<(N, D)>>, n: usize) -> HashMap<N, Distances<D>>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    let mut table = HashMap::new();
    for (i, dists) in distances.into_iter().enumerate() {
        for (u, d) in dists {
            table
                .entry(u)
                .or_insert_with(|| -> Distances<D> { smallvec![D::infinity(); n] })[i] = d;
        }
    }
    table
}

/// A [`Heuristic`] based on precomputed landmark distances.
///
/// Created by [`Alt::heuristic`].
#[derive(Clone, Debug)]
pub struct AltHeuristic<'a, N, D> {
    alt: &'a Alt<N, D>,
    goal: Option<N>,
    goal_from: Option<&'a Distances<D>>,
    goal_to: Option<&'a Distances<D>>,
}

impl<'a, N, D> Heuristic<N, D> for AltHeuristic<'a, N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    fn set_goal(&mut self, goal: N) {
        self.goal = Some(goal);
        self.goal_from = self.alt.from_landmarks.get(&goal);
        self.goal_to = self.alt.to_landmarks.get(&goal);
    }

    fn heuristic(&self, u: N) -> D {
        if self.goal == Some(u) {
            return D::zero();
        }
        let (uf, gf) = match (self.alt.from_landmarks.get(&u), self.goal_from) {
            (Some(uf), Some(gf)) => (uf, gf),
            _ => return D::zero(),
        };

        // infinite terms belong to unreachable landmarks and give no bound
        let bound = |a: D, b: D| if a.is_finite() && b.is_finite() { a - b } else { D::zero() };

        let mut h = D::zero();
        if self.alt.directed {
            let to = self.alt.to_landmarks.get(&u).zip(self.goal_to);
            for i in 0..uf.len() {
                h = h.max(bound(gf[i], uf[i]));
                if let Some((ut, gt)) = to {
                    h = h.max(bound(ut[i], gt[i]));
                }
            }
        } else {
            for i in 0..uf.len() {
                h = h.max(bound(uf[i], gf[i]).abs());
            }
        }
        h
    }
}
