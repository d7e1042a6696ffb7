/*
 * Copyright (c) 2017, 2018, 2020, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! All edges have cost 1 (diagonal grid edges cost $\sqrt{2}$) and, unless
//! noted otherwise, are undirected, i.e. stored in both directions.

use crate::adjgraph::AdjGraph;

use crate::num::traits::Float;

/// Returns a path with `m` edges on the nodes `0, ..., m`.
pub fn path<D>(m: usize) -> AdjGraph<usize, D>
where
    D: Float,
{
    let mut g = AdjGraph::new();
    g.add_node(0);
    for u in 0..m {
        g.add_undirected_edge(u, u + 1, D::one());
    }
    g
}

/// Returns a cycle on the nodes `0, ..., n-1`.
///
/// If `directed` is `true`, the edges run from `i` to `i+1 (mod n)` only.
pub fn cycle<D>(n: usize, directed: bool) -> AdjGraph<usize, D>
where
    D: Float,
{
    let mut g = AdjGraph::new();
    for u in 0..n {
        g.add_node(u);
    }
    for u in 0..n {
        if directed {
            g.add_edge(u, (u + 1) % n, D::one());
        } else {
            g.add_undirected_edge(u, (u + 1) % n, D::one());
        }
    }
    g
}

/// Return a grid graph with `n` columns and `m` rows.
///
/// The nodes are the coordinates `(x, y)` with `x < n` and `y < m`. Each node
/// is connected to its horizontal and vertical neighbors.
///
/// ```
/// use rs_path::classes;
///
/// let g = classes::grid::<f32>(5, 4);
/// assert_eq!(g.num_nodes(), 20);
/// assert_eq!(g.num_edges(), 2 * (4 * 4 + 5 * 3));
/// assert_eq!(g.outedges((0, 0)).len(), 2);
/// assert_eq!(g.outedges((2, 1)).len(), 4);
/// ```
pub fn grid<D>(n: usize, m: usize) -> AdjGraph<(usize, usize), D>
where
    D: Float,
{
    grid_with_walls(n, m, &[], false)
}

/// Return a grid graph with `n` columns and `m` rows without the `walls`.
///
/// Wall cells are not nodes of the graph. If `diagonal` is `true`, each node
/// is also connected to its (up to four) diagonal neighbors by an edge of
/// cost $\sqrt{2}$.
pub fn grid_with_walls<D>(n: usize, m: usize, walls: &[(usize, usize)], diagonal: bool) -> AdjGraph<(usize, usize), D>
where
    D: Float,
{
    let mut g = AdjGraph::new();
    let free = |x: usize, y: usize| x < n && y < m && !walls.contains(&(x, y));
    let sqrt2 = (D::one() + D::one()).sqrt();

    for y in 0..m {
        for x in 0..n {
            if free(x, y) {
                g.add_node((x, y));
            }
        }
    }
    for y in 0..m {
        for x in 0..n {
            if !free(x, y) {
                continue;
            }
            if free(x + 1, y) {
                g.add_undirected_edge((x, y), (x + 1, y), D::one());
            }
            if free(x, y + 1) {
                g.add_undirected_edge((x, y), (x, y + 1), D::one());
            }
            if diagonal {
                if free(x + 1, y + 1) {
                    g.add_undirected_edge((x, y), (x + 1, y + 1), sqrt2);
                }
                if x > 0 && free(x - 1, y + 1) {
                    g.add_undirected_edge((x, y), (x - 1, y + 1), sqrt2);
                }
            }
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::{cycle, grid_with_walls, path};

    #[test]
    fn test_path() {
        let g = path::<f64>(5);
        assert_eq!(g.num_nodes(), 6);
        assert_eq!(g.num_edges(), 10);
        assert_eq!(g.outedges(0), &[(1, 1.0)]);
        assert_eq!(g.outedges(3), &[(2, 1.0), (4, 1.0)]);

        let g = path::<f64>(0);
        assert_eq!(g.nodes(), &[0]);
    }

    #[test]
    fn test_cycle() {
        let g = cycle::<f64>(42, false);
        assert_eq!(g.num_nodes(), 42);
        assert_eq!(g.num_edges(), 84);
        assert!(g.nodes().iter().all(|&u| g.outedges(u).len() == 2));

        let g = cycle::<f64>(7, true);
        assert_eq!(g.num_edges(), 7);
        assert_eq!(g.outedges(6), &[(0, 1.0)]);
    }

    #[test]
    fn test_walls() {
        let g = grid_with_walls::<f64>(3, 3, &[(1, 1)], false);
        assert_eq!(g.num_nodes(), 8);
        assert!(!g.contains((1, 1)));
        assert_eq!(g.num_edges(), 2 * 8);

        let g = grid_with_walls::<f64>(3, 3, &[], true);
        assert_eq!(g.outedges((1, 1)).len(), 8);
        assert_eq!(g.outedges((0, 0)).len(), 3);
    }
}
