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

mod common;

use rs_path::classes;
use rs_path::search::AStar;
use rs_path::traits::{heuristic_fn, BlockedNodes, EdgePath, NoModifier, NodePath, ZeroHeuristic};

use common::{path_length, random_graph, reference_distances, rng};

fn octile((x, y): (usize, usize), (xt, yt): (usize, usize)) -> f64 {
    let dx = (x as f64 - xt as f64).abs();
    let dy = (y as f64 - yt as f64).abs();
    dx.max(dy) + (2f64.sqrt() - 1.0) * dx.min(dy)
}

#[test_log::test]
fn test_grid_with_wall() {
    let g = classes::grid_with_walls::<f64>(5, 5, &[(2, 2)], true);
    let mut astar = AStar::new();
    let mut path = vec![];
    let dist = astar
        .find_path(
            &g,
            (0, 0),
            (4, 4),
            &mut heuristic_fn(octile),
            &NoModifier,
            &mut NodePath::default(),
            &mut path,
        )
        .unwrap();

    assert!((dist - (2.0 + 3.0 * 2f64.sqrt())).abs() < 1e-9);
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(4, 4)));
    assert!(!path.contains(&(2, 2)));
    assert_eq!(path.len(), 6);

    // without the wall the diagonal is straight
    let g = classes::grid_with_walls::<f64>(5, 5, &[], true);
    let dist = astar.eval_path(&g, (0, 0), (4, 4), &mut heuristic_fn(octile), &NoModifier);
    assert!((dist.unwrap() - 4.0 * 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_random_graphs() {
    let mut rng = rng(42);
    for &directed in &[true, false] {
        for _ in 0..10 {
            let g = random_graph(&mut rng, 30, 60, directed);
            let mut astar = AStar::new();
            let mut path = vec![];
            for s in 0..30 {
                let expected = reference_distances(&g, s);
                for t in 0..30 {
                    path.clear();
                    let dist = astar.find_path(
                        &g,
                        s,
                        t,
                        &mut ZeroHeuristic,
                        &NoModifier,
                        &mut NodePath::default(),
                        &mut path,
                    );
                    assert_eq!(dist, expected.get(&t).cloned());
                    if let Some(dist) = dist {
                        assert_eq!(path[0], s);
                        assert_eq!(path_length(&g, &path), Some(dist));
                    } else {
                        assert!(path.is_empty());
                    }
                }
            }
        }
    }
}

#[test]
fn test_eval_matches_find() {
    let mut rng = rng(7);
    let g = random_graph(&mut rng, 50, 150, true);
    let mut astar = AStar::new();
    let mut path = vec![];
    for s in 0..10 {
        for t in 40..50 {
            let a = astar.eval_path(&g, s, t, &mut ZeroHeuristic, &NoModifier);
            let b = astar.find_path(&g, s, t, &mut ZeroHeuristic, &NoModifier, &mut EdgePath, &mut path);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_reuse() {
    let g = classes::grid_with_walls::<f64>(8, 6, &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4)], false);
    let mut astar = AStar::new();
    let mut first = vec![];
    let mut second = vec![];
    let manhattan = |(x, y): (usize, usize), (xt, yt): (usize, usize)| {
        (x as f64 - xt as f64).abs() + (y as f64 - yt as f64).abs()
    };

    let d1 = astar.find_path(
        &g,
        (0, 0),
        (7, 0),
        &mut heuristic_fn(manhattan),
        &NoModifier,
        &mut NodePath::default(),
        &mut first,
    );
    // another query in between
    astar.eval_path(&g, (5, 5), (0, 1), &mut heuristic_fn(manhattan), &NoModifier);
    let d2 = astar.find_path(
        &g,
        (0, 0),
        (7, 0),
        &mut heuristic_fn(manhattan),
        &NoModifier,
        &mut NodePath::default(),
        &mut second,
    );

    assert_eq!(d1, Some(17.0));
    assert_eq!(d1, d2);
    assert_eq!(first, second);
}

#[test_log::test]
fn test_max_expand_zero() {
    let g = classes::path::<f64>(10);
    let mut astar = AStar::with_max_expand(0);
    assert_eq!(astar.eval_path(&g, 0, 5, &mut ZeroHeuristic, &NoModifier), None);
    assert!(astar.exhausted());
    // only the start node and its single neighbor have been reached
    assert_eq!(astar.num_reached(), 2);

    assert_eq!(astar.eval_path(&g, 3, 3, &mut ZeroHeuristic, &NoModifier), Some(0.0));
    assert!(!astar.exhausted());

    // a truly unreachable goal within the bound is not reported as exhausted
    let mut astar = AStar::new();
    assert_eq!(astar.eval_path(&g, 0, 42, &mut ZeroHeuristic, &NoModifier), None);
    assert!(!astar.exhausted());
}

#[test]
fn test_modifiers() {
    let g = classes::grid::<f64>(5, 3);
    let mut astar = AStar::new();

    // block the middle column except for the bottom row
    let blocked = BlockedNodes::new(vec![(2, 0), (2, 1)]);
    let mut path = vec![];
    let dist = astar.find_path(
        &g,
        (0, 0),
        (4, 0),
        &mut ZeroHeuristic,
        &blocked,
        &mut NodePath::default(),
        &mut path,
    );
    assert_eq!(dist, Some(8.0));
    assert!(path.contains(&(2, 2)));

    // vertical edges are twice as expensive
    let vertical = |(_, y1): (usize, usize), (_, y2): (usize, usize), cost: &mut f64| {
        if y1 != y2 {
            *cost *= 2.0;
        }
        true
    };
    assert_eq!(astar.eval_path(&g, (0, 0), (4, 2), &mut ZeroHeuristic, &vertical), Some(8.0));

    // dropping all edges leaving the start
    let none = |_: (usize, usize), _: (usize, usize), _: &mut f64| false;
    assert_eq!(astar.eval_path(&g, (0, 0), (4, 2), &mut ZeroHeuristic, &none), None);
}

#[test]
fn test_edge_path() {
    let g = classes::path::<f64>(5);
    let mut astar = AStar::new();
    let mut out = vec![];
    let dist = astar.find_path(&g, 1, 4, &mut ZeroHeuristic, &NoModifier, &mut EdgePath, &mut out);
    assert_eq!(dist, Some(3.0));
    assert_eq!(out, vec![(1, 2), (2, 3), (3, 4)]);

    out.clear();
    assert_eq!(
        astar.find_path(&g, 2, 2, &mut ZeroHeuristic, &NoModifier, &mut EdgePath, &mut out),
        Some(0.0)
    );
    assert!(out.is_empty());
}

#[test]
fn test_dijkstra() {
    let mut rng = rng(3);
    let g = random_graph(&mut rng, 40, 100, false);
    let expected = reference_distances(&g, 0);
    let mut astar = AStar::new();

    astar.dijkstra(&g, 0, &NoModifier, f64::INFINITY);
    assert_eq!(astar.num_reached(), expected.len());
    for (u, d) in astar.reached() {
        assert_eq!(expected.get(&u), Some(&d));
    }

    astar.dijkstra(&g, 0, &NoModifier, 10.0);
    for (&u, &d) in &expected {
        if d <= 10.0 {
            assert_eq!(astar.distance(u), Some(d));
        } else {
            assert_eq!(astar.distance(u), None);
        }
    }
}
