use antidfs::stats::{count_dead_ends, reachable_cells};
use antidfs::{Direction, Generator, Grid, MazeStats, Tile};
use proptest::prelude::*;

fn generate(width: usize, height: usize, seed: u64, k: usize, beta: f64, p: f64) -> Generator {
    let mut generator = Generator::new(width, height, seed, k, beta, p).unwrap();
    generator.generate(0, 0).unwrap();
    generator
}

fn has_open_block(grid: &Grid) -> bool {
    let tiles = grid.tiles();
    (0..grid.rows() - 1).any(|row| {
        (0..grid.cols() - 1).any(|col| {
            tiles[row][col] == Tile::Passage
                && tiles[row][col + 1] == Tile::Passage
                && tiles[row + 1][col] == Tile::Passage
                && tiles[row + 1][col + 1] == Tile::Passage
        })
    })
}

fn all_visited(generator: &Generator) -> bool {
    (0..generator.height()).all(|y| (0..generator.width()).all(|x| generator.is_visited(x, y)))
}

#[test]
fn five_by_five_seed_42_scenario() {
    let first = generate(5, 5, 42, 10, 0.5, 0.1);
    let grid = first.grid();
    assert_eq!(grid.rows(), 11);
    assert_eq!(grid.cols(), 11);
    assert!(all_visited(&first));
    let visited = (0..5)
        .flat_map(|y| (0..5).map(move |x| (x, y)))
        .filter(|&(x, y)| first.is_visited(x, y))
        .count();
    assert_eq!(visited, 25);
    assert!(!has_open_block(grid));

    let second = generate(5, 5, 42, 10, 0.5, 0.1);
    assert_eq!(first.tiles(), second.tiles());
}

#[test]
fn ten_by_ten_perfect_maze_scenario() {
    let generator = generate(10, 10, 123, 10, 0.0, 0.0);
    let stats = MazeStats::calculate(generator.grid());
    assert_eq!(stats.internal_passages, 99);
    assert_eq!(stats.wall_count + stats.passage_count, 441);
    assert_eq!(generator.braid_count(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_valid_configuration_yields_connected_maze(
        width in 1usize..=24,
        height in 1usize..=24,
        seed in any::<u64>(),
        k in 1usize..=100,
        beta in 0.0f64..3.0,
        p in 0.0f64..=1.0,
        start in (0usize..24, 0usize..24),
    ) {
        let (start_x, start_y) = (start.0 % width, start.1 % height);
        let mut generator = Generator::new(width, height, seed, k, beta, p).unwrap();
        generator.generate(start_x, start_y).unwrap();
        let grid = generator.grid();

        prop_assert_eq!(grid.rows(), 2 * height + 1);
        prop_assert_eq!(grid.cols(), 2 * width + 1);
        prop_assert!(all_visited(&generator));
        prop_assert_eq!(reachable_cells(grid), width * height);
        prop_assert!(!has_open_block(grid));

        let stats = MazeStats::calculate(grid);
        prop_assert_eq!(stats.wall_count + stats.passage_count, stats.total_cells);
        prop_assert_eq!(
            stats.internal_passages,
            width * height - 1 + generator.braid_count()
        );

        let mut again = Generator::new(width, height, seed, k, beta, p).unwrap();
        again.generate(start_x, start_y).unwrap();
        prop_assert_eq!(generator.tiles(), again.tiles());
    }

    #[test]
    fn zero_braiding_never_opens_extra_walls(
        width in 1usize..=16,
        height in 1usize..=16,
        seed in any::<u64>(),
        beta in 0.0f64..3.0,
    ) {
        let generator = generate(width, height, seed, 10, beta, 0.0);
        prop_assert_eq!(generator.braid_count(), 0);
        let stats = MazeStats::calculate(generator.grid());
        prop_assert_eq!(stats.internal_passages, width * height - 1);
    }
}

#[test]
fn deterministic_for_identical_parameters() {
    for seed in [0u64, 1, 7, 2024, u64::MAX] {
        let a = generate(16, 12, seed, 50, 0.8, 0.3);
        let b = generate(16, 12, seed, 50, 0.8, 0.3);
        assert_eq!(a.tiles(), b.tiles());
        assert_eq!(a.braid_count(), b.braid_count());
    }
    let a = generate(16, 12, 1, 50, 0.8, 0.3);
    let b = generate(16, 12, 2, 50, 0.8, 0.3);
    assert_ne!(a.tiles(), b.tiles());
}

#[test]
fn zero_braid_probability_yields_spanning_tree() {
    for seed in 0..20u64 {
        let generator = generate(12, 9, seed, 20, 0.8, 0.0);
        let grid = generator.grid();
        let stats = MazeStats::calculate(grid);
        // Connected with exactly n - 1 edges means acyclic.
        assert_eq!(stats.internal_passages, 12 * 9 - 1);
        assert_eq!(reachable_cells(grid), 12 * 9);
    }
}

#[test]
fn braiding_adds_loops() {
    let generator = generate(20, 20, 5, 20, 0.8, 1.0);
    let stats = MazeStats::calculate(generator.grid());
    assert!(generator.braid_count() > 0);
    assert_eq!(stats.internal_passages, 20 * 20 - 1 + generator.braid_count());
}

#[test]
fn braiding_reduces_dead_ends_on_average() {
    let total_dead_ends = |p: f64| -> usize {
        (0..40u64)
            .map(|seed| count_dead_ends(generate(15, 15, seed, 10, 0.5, p).grid()))
            .sum()
    };
    let none = total_dead_ends(0.0);
    let some = total_dead_ends(0.3);
    let heavy = total_dead_ends(1.0);
    assert!(some < none, "p=0.3 gave {some}, p=0 gave {none}");
    assert!(heavy < some, "p=1.0 gave {heavy}, p=0.3 gave {some}");
}

#[test]
fn boundary_opening_changes_grid_only_on_edges() {
    let (width, height) = (4, 3);
    for y in 0..height {
        for x in 0..width {
            for dir in Direction::ALL {
                let mut generator = generate(width, height, 9, 10, 0.8, 0.1);
                let before = generator.tiles().to_vec();
                let on_edge = match dir {
                    Direction::Up => y == 0,
                    Direction::Down => y == height - 1,
                    Direction::Left => x == 0,
                    Direction::Right => x == width - 1,
                };
                let opened = generator.open_boundary_entrance(x, y, dir);
                assert_eq!(opened, on_edge);
                assert_eq!(generator.tiles() != before.as_slice(), on_edge);
            }
        }
    }
}

#[test]
fn out_of_bounds_start_is_rejected() {
    let mut generator = Generator::new(5, 5, 42, 10, 0.5, 0.1).unwrap();
    assert!(generator.generate(0, 5).is_err());
    assert!(generator.tiles().iter().flatten().all(|&t| t == Tile::Wall));
}
