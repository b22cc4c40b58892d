use maze_search::algorithms::common::SearchResult;
use maze_search::algorithms::Algorithm;
use maze_search::statistics::optimal_path_length;
use maze_search::{Cell, Grid, Position};
use pathfinding::prelude::bfs_reach;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_maze(rng: &mut StdRng, rows: usize, cols: usize, wall_density: f64) -> Grid {
    let cells = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.gen_bool(wall_density) {
                        Cell::Wall
                    } else {
                        Cell::Open
                    }
                })
                .collect()
        })
        .collect();
    Grid::new(cells).unwrap()
}

fn open_positions(grid: &Grid) -> Vec<Position> {
    let mut out = Vec::new();
    for r in 0..grid.rows() as i32 {
        for c in 0..grid.cols() as i32 {
            let p = Position::new(r, c);
            if grid.is_open(p) {
                out.push(p);
            }
        }
    }
    out
}

fn run(algorithm: Algorithm, grid: &Grid, start: Position, goal: Position) -> SearchResult {
    algorithm.create().find_path(grid, start, goal).unwrap()
}

fn assert_valid_path(grid: &Grid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for p in path {
        assert!(grid.is_open(*p), "{p} is not open");
    }
    for w in path.windows(2) {
        assert_eq!(w[0].manhattan(&w[1]), 1, "{} -> {} is not one step", w[0], w[1]);
    }
}

#[test]
fn path_lengths_agree_on_random_mazes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut solvable = 0;

    for _ in 0..200 {
        let rows = rng.gen_range(2..12);
        let cols = rng.gen_range(2..12);
        let grid = random_maze(&mut rng, rows, cols, 0.3);
        let open = open_positions(&grid);
        let (Some(&start), Some(&goal)) = (open.choose(&mut rng), open.choose(&mut rng)) else {
            continue;
        };

        let reference = optimal_path_length(&grid, start, goal);
        let bfs = run(Algorithm::Bfs, &grid, start, goal);
        let dfs = run(Algorithm::Dfs, &grid, start, goal);
        let a_star = run(Algorithm::AStar, &grid, start, goal);

        assert_eq!(bfs.path_length(), reference);
        assert_eq!(a_star.path_length(), reference);

        match reference {
            Some(len) => {
                solvable += 1;
                assert!(dfs.path_length().unwrap() >= len);
                for result in [&bfs, &dfs, &a_star] {
                    assert_valid_path(&grid, result.path.as_ref().unwrap(), start, goal);
                }
            }
            None => assert_eq!(dfs.path, None),
        }
    }

    assert!(solvable > 50, "too few solvable mazes: {solvable}");
}

#[test]
fn unreachable_goal_expands_whole_component() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut checked = 0;

    for _ in 0..300 {
        let grid = random_maze(&mut rng, 8, 8, 0.4);
        let open = open_positions(&grid);
        let (Some(&start), Some(&goal)) = (open.choose(&mut rng), open.choose(&mut rng)) else {
            continue;
        };
        if optimal_path_length(&grid, start, goal).is_some() {
            continue;
        }

        let component = bfs_reach(start, |p| grid.get_neighbors(p)).count();
        for algorithm in Algorithm::ALL {
            let result = run(algorithm, &grid, start, goal);
            assert_eq!(result.path, None);
            assert_eq!(result.nodes_expanded, component, "{algorithm}");
        }
        checked += 1;
    }

    assert!(checked > 0);
}

#[test]
fn start_equals_goal_is_single_cell_path() {
    let grid = Grid::open(4, 4).unwrap();
    let p = Position::new(2, 3);
    for algorithm in Algorithm::ALL {
        let result = run(algorithm, &grid, p, p);
        assert_eq!(result.path, Some(vec![p]));
        assert_eq!(result.nodes_expanded, 1);
    }
}

#[test]
fn open_grid_corner_to_corner() {
    let grid = Grid::open(5, 5).unwrap();
    for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
        let result = run(algorithm, &grid, Position::new(0, 0), Position::new(4, 4));
        assert_eq!(result.path_length(), Some(8), "{algorithm}");
        assert!(result.nodes_expanded <= 25);
    }
}

#[test]
fn expansions_do_not_shrink_as_grid_grows() {
    let start = Position::new(0, 0);
    let goal = Position::new(2, 2);
    for algorithm in [Algorithm::Bfs, Algorithm::AStar] {
        let counts: Vec<usize> = (3..12)
            .map(|n| {
                let grid = Grid::open(n, n).unwrap();
                run(algorithm, &grid, start, goal).nodes_expanded
            })
            .collect();
        assert!(
            counts.windows(2).all(|w| w[0] <= w[1]),
            "{algorithm}: {counts:?}"
        );
    }
}

#[test]
fn a_star_expands_no_more_than_bfs_on_classic_maze() {
    let grid = maze_search::maze::classic().unwrap();
    let start = maze_search::maze::CLASSIC_EVADER_START;
    let goal = maze_search::maze::CLASSIC_GOAL;
    let bfs = run(Algorithm::Bfs, &grid, start, goal);
    let a_star = run(Algorithm::AStar, &grid, start, goal);
    assert_eq!(bfs.path_length(), a_star.path_length());
    assert!(a_star.nodes_expanded <= bfs.nodes_expanded);
}

#[test]
fn invalid_endpoints_are_errors() {
    let grid = Grid::from_ascii("..#\n...\n").unwrap();
    for algorithm in Algorithm::ALL {
        let mut finder = algorithm.create();
        assert!(finder.find_path(&grid, Position::new(0, 2), Position::new(1, 0)).is_err());
        assert!(finder.find_path(&grid, Position::new(0, 0), Position::new(5, 5)).is_err());
    }
}
