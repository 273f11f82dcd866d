use super::test_support::{corridor, guard_facing, open_room, scenario};
use super::*;
use crate::enemy::Scout;
use crate::types::{ControlFlags, Outcome};

const FRAME: f32 = 1.0 / 60.0;

fn hold(right: bool, up: bool) -> ControlFlags {
    ControlFlags { right, up, ..ControlFlags::default() }
}

#[test]
fn pushing_into_a_wall_for_one_second_never_crosses_it() {
    let mut game = scenario(corridor(), Cell::new(5, 2), None, SimConfig::default());
    for _ in 0..60 {
        let report = game.tick(FRAME, hold(true, false));
        assert_eq!(report.status, GameStatus::Playing);
        let x = game.player().position.x;
        assert!(x + game.config().footprint_half_extent < 5.5, "crossed into the wall at x={x}");
    }
}

#[test]
fn frame_hitch_does_not_carry_the_player_into_the_next_corridor() {
    let mut grid = corridor();
    for x in 1..=5 {
        grid.open(Cell::new(x, 4));
    }
    let mut game = scenario(grid, Cell::new(3, 2), None, SimConfig::default());
    game.tick(0.7, hold(false, true));
    let cell = Cell::containing(game.player().planar());
    assert_eq!(cell, Cell::new(3, 2), "player ended at {}", game.player().position);
}

#[test]
fn lose_lands_on_the_tick_the_timer_empties() {
    let config = SimConfig { detection_grace: 0.5, ..SimConfig::default() };
    let mut game = scenario(open_room(9, 9), Cell::new(4, 4), None, config);
    game.enemies.insert(guard_facing(Cell::new(2, 4), Direction::Right));

    for expected_remaining in [0.375, 0.25, 0.125] {
        let report = game.tick(0.125, ControlFlags::default());
        assert!(report.seen);
        assert_eq!(report.status, GameStatus::Playing);
        assert_eq!(game.detection().remaining(), expected_remaining);
    }
    let report = game.tick(0.125, ControlFlags::default());
    assert_eq!(report.status, GameStatus::Ended(Outcome::Lose));
    assert_eq!(game.current_tick(), 4);
}

#[test]
fn unseen_player_keeps_a_full_grace_period() {
    let mut game = scenario(open_room(9, 9), Cell::new(4, 4), None, SimConfig::default());
    game.enemies.insert(guard_facing(Cell::new(2, 4), Direction::Left));
    for _ in 0..10 {
        let report = game.tick(FRAME, ControlFlags::default());
        assert!(!report.seen);
        assert_eq!(game.detection().remaining(), game.config().detection_grace);
    }
}

#[test]
fn standing_within_the_win_radius_wins_that_tick() {
    let goal = Some(Cell::new(5, 2));
    let mut game = scenario(corridor(), Cell::new(4, 2), goal, SimConfig::default());
    assert_eq!(game.tick(FRAME, ControlFlags::default()).status, GameStatus::Playing);

    game.player.position.x = 4.6;
    let report = game.tick(FRAME, ControlFlags::default());
    assert_eq!(report.status, GameStatus::Ended(Outcome::Win));
    assert_eq!(game.end_signal().map(|signal| signal.message()), Some("YOU WIN"));
}

#[test]
fn losing_is_decided_before_winning() {
    let config = SimConfig { detection_grace: 0.125, ..SimConfig::default() };
    let mut game = scenario(corridor(), Cell::new(5, 2), Some(Cell::new(5, 2)), config);
    game.enemies.insert(Enemy::Scout(Scout::spawn(Cell::new(5, 2))));
    let report = game.tick(0.125, ControlFlags::default());
    assert_eq!(report.status, GameStatus::Ended(Outcome::Lose));
}

#[test]
fn ended_level_ignores_further_ticks() {
    let goal = Some(Cell::new(5, 2));
    let mut game = scenario(corridor(), Cell::new(5, 2), goal, SimConfig::default());
    game.enemies.insert(Enemy::Scout(Scout::spawn(Cell::new(2, 2))));
    assert_eq!(game.tick(FRAME, ControlFlags::default()).status, GameStatus::Ended(Outcome::Win));

    let frozen = game.snapshot_hash();
    let report = game.tick(FRAME, hold(false, true));
    assert!(!report.seen);
    assert_eq!(report.status, GameStatus::Ended(Outcome::Win));
    assert_eq!(game.snapshot_hash(), frozen);
    assert_eq!(game.current_tick(), 1);
}

#[test]
fn frame_view_puts_the_player_lamp_first() {
    let goal = Some(Cell::new(7, 7));
    let mut game = scenario(open_room(9, 9), Cell::new(4, 4), goal, SimConfig::default());
    game.enemies.insert(guard_facing(Cell::new(2, 2), Direction::Up));
    game.enemies.insert(Enemy::Scout(Scout::spawn(Cell::new(6, 6))));

    let view = game.frame_view();
    assert_eq!(view.lamps.len(), 3);
    assert_eq!(view.lamps[0].position, game.player().position);
    assert_eq!(view.enemies.len(), 2);
    assert_eq!(view.enemies[0].position, Vec3::new(2.0, 2.0, 0.75));
    assert_eq!(view.goal, Some(Vec3::new(7.0, 7.0, 0.0)));
    assert!(!view.dead);
    assert!(game.end_signal().is_none());

    game.status = GameStatus::Ended(Outcome::Lose);
    assert!(game.frame_view().dead);
    let signal = game.end_signal().expect("ended level raises the signal");
    assert_eq!(signal.message(), "YOU LOSE");
    assert_eq!(signal.choices().map(EndChoice::label), ["TRY AGAIN", "QUIT"]);
}

#[test]
fn invalid_frame_time_does_not_move_the_player() {
    let mut game = scenario(corridor(), Cell::new(3, 2), None, SimConfig::default());
    let before = game.player().position;
    for elapsed in [f32::NAN, -1.0, f32::INFINITY] {
        game.tick(elapsed, hold(true, false));
    }
    assert_eq!(game.player().position, before);
    assert_eq!(game.detection().remaining(), game.config().detection_grace);
}

#[test]
fn facing_follows_the_last_resolved_flag() {
    let mut game = scenario(open_room(9, 9), Cell::new(4, 4), None, SimConfig::default());
    game.tick(FRAME, hold(true, false));
    assert_eq!(game.player().facing, Direction::Right);
    game.tick(FRAME, hold(true, true));
    assert_eq!(game.player().facing, Direction::Up);
    game.tick(FRAME, ControlFlags::default());
    assert_eq!(game.player().facing, Direction::Up);
}

#[test]
fn snapshot_hash_tracks_simulation_state() {
    let mut a = Game::new(99, SimConfig::default()).expect("default config is valid");
    let b = Game::new(99, SimConfig::default()).expect("default config is valid");
    assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    a.tick(FRAME, ControlFlags::default());
    assert_ne!(a.snapshot_hash(), b.snapshot_hash());
}
