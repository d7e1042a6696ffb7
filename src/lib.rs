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

#![forbid(unsafe_code)]

//! A library for shortest path searches on implicit graphs.
//!
//! The graph, the heuristic, modifications of edge costs and the format of the
//! returned path are given by small traits (see [`traits`]), so the searches
//! work on any graph that can enumerate the outgoing edges of a node. The
//! [`AStar`] engine keeps its working memory between queries.
//!
//! Besides single queries the engine supports paths through a sequence of
//! stops and the selection of the first or cheapest of several alternative
//! stop sequences (see [`search`]). The [`alt`] module provides a heuristic
//! based on precomputed distances to landmark nodes.

mod num {
    pub use num_traits as traits;
}

// # Collaborators

pub mod traits;
pub use self::traits::{EdgeModifier, Graph, Heuristic, PathProcessor};
pub use self::traits::{EdgePath, NoModifier, NodePath, ZeroHeuristic};

pub mod adjgraph;
pub use self::adjgraph::AdjGraph;

pub mod adapters;
pub use self::adapters::reverse;

/// Graph classes
pub mod classes;

pub mod collections;

// # Algorithms

pub mod search;
pub use self::search::{AStar, OptionBatch};

pub mod alt;
pub use self::alt::{Alt, AltError};
