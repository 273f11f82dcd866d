//! Top-down rendering of one frame view plus the HUD and end-of-level menu.

use app::app_loop::{AppMode, AppState};
use app::{format_seed, format_snapshot_hash};
use ::glam::Vec3 as MazeVec3;
use macroquad::prelude::*;
use maze_core::{AgentKind, Game, LampParams, WallGrid};

use crate::frame_input::LookAngles;

const HUD_HEIGHT: f32 = 28.0;
const HUD_FONT_SIZE: f32 = 20.0;
const MENU_FONT_SIZE: f32 = 36.0;
const MENU_LINE_STEP: f32 = 44.0;
const WALL_COLOR: Color = Color { r: 0.22, g: 0.24, b: 0.3, a: 1.0 };
const FLOOR_COLOR: Color = Color { r: 0.05, g: 0.05, b: 0.07, a: 1.0 };
const LIT_FLOOR_COLOR: Color = Color { r: 0.35, g: 0.35, b: 0.38, a: 1.0 };
const GOAL_COLOR: Color = Color { r: 0.2, g: 0.9, b: 0.4, a: 1.0 };
const LAMP_COLOR: Color = Color { r: 1.0, g: 0.95, b: 0.6, a: 0.18 };
const PLAYER_LAMP_REACH: f32 = 3.0;
/// Lamps pointing within this much of straight down light a disc instead of a cone.
const DOWNWARD_PLANAR_EPSILON: f32 = 0.1;

/// Maze-to-screen mapping. Maze +y points up the screen; cell `(x, y)` is centred on `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardMetrics {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_step: f32,
    pub grid_height: f32,
}

impl BoardMetrics {
    pub fn fit(grid_width: usize, grid_height: usize, screen_w: f32, screen_h: f32) -> Self {
        let available_h = (screen_h - HUD_HEIGHT).max(0.0);
        let cell_step = if grid_width == 0 || grid_height == 0 {
            1.0
        } else {
            (screen_w / grid_width as f32).min(available_h / grid_height as f32)
        };
        let board_w = grid_width as f32 * cell_step;
        let board_h = grid_height as f32 * cell_step;
        Self {
            offset_x: ((screen_w - board_w) * 0.5).max(0.0),
            offset_y: HUD_HEIGHT + ((available_h - board_h) * 0.5).max(0.0),
            cell_step,
            grid_height: grid_height as f32,
        }
    }

    pub fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            self.offset_x + (x + 0.5) * self.cell_step,
            self.offset_y + (self.grid_height - 0.5 - y) * self.cell_step,
        )
    }
}

/// The floor patch a lamp lights, in maze units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LampFootprint {
    Cone { apex: Vec2, left: Vec2, right: Vec2 },
    Disc { center: Vec2, radius: f32 },
}

pub fn lamp_footprint(lamp: &LampParams, reach: f32) -> LampFootprint {
    let apex = Vec2::new(lamp.position.x, lamp.position.y);
    let planar = Vec2::new(lamp.direction.x, lamp.direction.y);
    let half_fov = lamp.fov * 0.5;
    if planar.length() < DOWNWARD_PLANAR_EPSILON {
        return LampFootprint::Disc { center: apex, radius: lamp.position.z * half_fov.tan() };
    }
    let heading = planar.y.atan2(planar.x);
    let edge = |angle: f32| apex + Vec2::new(angle.cos(), angle.sin()) * reach;
    LampFootprint::Cone { apex, left: edge(heading + half_fov), right: edge(heading - half_fov) }
}

/// The player lamp follows the cursor yaw; a steeper pitch pulls its reach in.
pub fn aim_player_lamp(lamp: &LampParams, look: LookAngles) -> (LampParams, f32) {
    let direction = MazeVec3::new(look.yaw.cos(), look.yaw.sin(), 0.0);
    let reach = PLAYER_LAMP_REACH * look.pitch.cos().max(0.25);
    (LampParams { direction, ..*lamp }, reach)
}

pub fn draw_frame(game: &Game, app_state: &AppState, look: LookAngles) {
    let view = game.frame_view();
    let grid = game.grid();
    let metrics = BoardMetrics::fit(grid.width(), grid.height(), screen_width(), screen_height());

    clear_background(BLACK);
    draw_grid(grid, &metrics, view.dead);

    if let Some(goal) = view.goal {
        let center = metrics.to_screen(goal.x, goal.y);
        draw_circle(center.x, center.y, metrics.cell_step * 0.3, GOAL_COLOR);
    }

    for (index, lamp) in view.lamps.iter().enumerate() {
        let (lamp, reach) = if index == 0 {
            aim_player_lamp(lamp, look)
        } else {
            (*lamp, game.config().guard_view_distance)
        };
        draw_lamp(&lamp_footprint(&lamp, reach), &metrics);
    }

    for agent in view.enemies.iter().chain([&view.player]) {
        let center = metrics.to_screen(agent.position.x, agent.position.y);
        let (radius, color) = match agent.kind {
            AgentKind::Player => (0.25, SKYBLUE),
            AgentKind::Guard => (0.3, ORANGE),
            AgentKind::Scout => (0.35, Color { r: 0.9, g: 0.2, b: 0.3, a: 0.6 }),
        };
        draw_circle(center.x, center.y, radius * metrics.cell_step, color);
        let facing = agent.facing.unit();
        let tip = metrics.to_screen(
            agent.position.x + facing.x * radius,
            agent.position.y + facing.y * radius,
        );
        draw_line(center.x, center.y, tip.x, tip.y, 2.0, WHITE);
    }

    draw_hud(game);
    if let AppMode::EndScreen { signal, selected } = &app_state.mode {
        draw_end_menu(signal.message(), &signal.choices().map(|choice| choice.label()), *selected);
    }
}

fn draw_grid(grid: &WallGrid, metrics: &BoardMetrics, dead: bool) {
    let floor = if dead { LIT_FLOOR_COLOR } else { FLOOR_COLOR };
    for cell in grid.cells() {
        let corner = metrics.to_screen(cell.x as f32 - 0.5, cell.y as f32 + 0.5);
        let color = if grid.is_wall(cell) { WALL_COLOR } else { floor };
        draw_rectangle(corner.x, corner.y, metrics.cell_step, metrics.cell_step, color);
    }
}

fn draw_lamp(footprint: &LampFootprint, metrics: &BoardMetrics) {
    match *footprint {
        LampFootprint::Cone { apex, left, right } => {
            let [a, l, r] = [apex, left, right].map(|p| metrics.to_screen(p.x, p.y));
            draw_triangle(a, l, r, LAMP_COLOR);
        }
        LampFootprint::Disc { center, radius } => {
            let c = metrics.to_screen(center.x, center.y);
            draw_circle(c.x, c.y, radius * metrics.cell_step, LAMP_COLOR);
        }
    }
}

fn draw_hud(game: &Game) {
    let detection = game.detection();
    let line = format!(
        "seed {}  level {}  tick {}  hash {}  grace {:.2}/{:.2}",
        format_seed(game.run_seed()),
        game.level_index(),
        game.current_tick(),
        format_snapshot_hash(game.snapshot_hash()),
        detection.remaining(),
        detection.max(),
    );
    draw_text(&line, 8.0, HUD_HEIGHT - 8.0, HUD_FONT_SIZE, LIGHTGRAY);
}

fn draw_end_menu(message: &str, labels: &[&str], selected: usize) {
    let center_x = screen_width() * 0.5;
    let mut text_y = screen_height() * 0.4;
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color { a: 0.5, ..BLACK });

    let size = measure_text(message, None, MENU_FONT_SIZE as u16, 1.0);
    draw_text(message, center_x - size.width * 0.5, text_y, MENU_FONT_SIZE, WHITE);
    for (index, label) in labels.iter().enumerate() {
        text_y += MENU_LINE_STEP;
        let text = if index == selected { format!("> {label} <") } else { (*label).to_owned() };
        let color = if index == selected { YELLOW } else { GRAY };
        let size = measure_text(&text, None, MENU_FONT_SIZE as u16, 1.0);
        draw_text(&text, center_x - size.width * 0.5, text_y, MENU_FONT_SIZE, color);
    }
}
