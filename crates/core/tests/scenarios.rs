use maze_core::mapgen::generate_maze;
use maze_core::{AgentKind, Cell, ControlFlags, Direction, Game, SimConfig};

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn seed_42_default_grid_picks_the_deepest_dead_end() {
    let game = Game::new(42, SimConfig::default()).expect("default config is valid");
    let goal = game.goal().expect("validated level has a goal");
    let deepest = game.dead_ends().iter().map(|dead_end| dead_end.depth).max();
    assert_eq!(Some(goal.depth), deepest);
    assert_ne!(goal.cell, game.start());
    assert_eq!(game.start(), Cell::new(11, 1));
}

#[test]
fn open_cells_form_a_tree_without_open_blocks() {
    for seed in 0..40 {
        let maze = generate_maze(22, 17, seed);
        let grid = &maze.grid;
        let mut links = 0;
        for cell in grid.open_cells() {
            let right = cell.step(Direction::Right, 1);
            let up = cell.step(Direction::Up, 1);
            links += usize::from(grid.is_open(right)) + usize::from(grid.is_open(up));
            let block = [cell, right, up, right.step(Direction::Up, 1)];
            assert!(block.iter().any(|&c| grid.is_wall(c)), "seed {seed}: open block at {cell:?}");
        }
        assert_eq!(links + 1, grid.open_cells().count(), "seed {seed}: corridors merged");
    }
}

#[test]
fn border_stays_closed_through_play() {
    let mut game = Game::new(2_718, SimConfig::default()).expect("default config is valid");
    for frame in 0..600_u32 {
        let controls =
            ControlFlags { up: frame % 3 == 0, right: frame % 5 == 0, ..Default::default() };
        game.tick(FRAME, controls);
    }
    let grid = game.grid();
    for cell in grid.cells().filter(|&cell| grid.on_border(cell)) {
        assert!(grid.is_wall(cell));
    }
    assert!(grid.is_open(Cell::containing(game.player().planar())));
}

#[test]
fn guards_facing_a_wall_turn_perpendicular_next_tick() {
    for seed in [1_u64, 2, 3, 5, 8] {
        let mut game = Game::new(seed, SimConfig::default()).expect("default config is valid");
        for _ in 0..1_500 {
            let before: Vec<(Direction, bool)> = game
                .enemies()
                .filter(|(_, enemy)| enemy.kind() == AgentKind::Guard)
                .map(|(_, enemy)| {
                    let ahead = enemy.position().truncate() + enemy.facing().unit() * 0.5;
                    (enemy.facing(), game.grid().is_wall(Cell::containing(ahead)))
                })
                .collect();
            if game.tick(FRAME, ControlFlags::default()).status.is_terminal() {
                break;
            }
            let after = game.enemies().filter(|(_, enemy)| enemy.kind() == AgentKind::Guard);
            for ((facing, blocked), (_, enemy)) in before.into_iter().zip(after) {
                if blocked {
                    assert_ne!(facing.is_vertical(), enemy.facing().is_vertical(), "seed {seed}");
                }
            }
        }
    }
}

#[test]
fn retry_builds_a_fresh_level_from_the_same_run() {
    let config = SimConfig { scout_detect_radius_sq: 10_000.0, ..SimConfig::default() };
    let mut game = Game::new(64, config).expect("config is valid");
    let first_level = game.level_seed();
    for _ in 0..60 {
        game.tick(FRAME, ControlFlags::default());
    }
    assert!(game.status().is_terminal(), "scouts covering the map should catch the player");
    let signal = game.end_signal().expect("terminal level raises the end signal");
    assert!(["YOU WIN", "YOU LOSE"].contains(&signal.message()));

    game.retry().expect("retry regenerates");
    assert_eq!(game.level_index(), 1);
    assert_ne!(game.level_seed(), first_level);
    assert!(game.end_signal().is_none());
    assert_eq!(game.player().planar(), game.start().center());
}
