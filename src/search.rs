/*
 * Copyright (c) 2019, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Shortest path searches.
//!
//! All searches are methods of the [`AStar`] engine:
//!
//! - single queries: [`AStar::eval_path`], [`AStar::find_path`] and the
//!   one-to-all search [`AStar::dijkstra`] (module [`astar`]),
//! - paths through a sequence of stops: [`AStar::eval_path_stops`],
//!   [`AStar::find_path_stops`] (module [`stops`]),
//! - selection among candidate stop sequences: [`AStar::find_option`],
//!   [`AStar::find_cheapest_option`] and friends (module [`options`]).
//!
//! The `eval_*` variants only compute the length of the path, the `find_*`
//! variants additionally pass the path to a
//! [`PathProcessor`][crate::traits::PathProcessor].

pub mod astar;
pub mod options;
pub mod stops;

pub use self::astar::{AStar, CameFrom, DEFAULT_MAX_EXPAND};
pub use self::options::{OptionBatch, OptionBuffers, OptionSpan};
