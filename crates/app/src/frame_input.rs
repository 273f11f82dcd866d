//! Keyboard and mouse input collection for one rendered frame.

use std::f32::consts::FRAC_PI_2;

use macroquad::prelude::{
    KeyCode, is_key_down, is_key_pressed, mouse_position, screen_height, screen_width,
};
use maze_core::ControlFlags;

const MENU_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::W,
    KeyCode::S,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Space,
    KeyCode::Escape,
];

/// Cosmetic look angles in radians, derived from the cursor. Never fed to the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Default)]
pub struct FrameInput {
    pub controls: ControlFlags,
    pub keys_pressed: Vec<KeyCode>,
    pub look: LookAngles,
}

pub fn capture_frame_input() -> FrameInput {
    let controls = ControlFlags {
        up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
    };
    let keys_pressed = MENU_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    let (cursor_x, cursor_y) = mouse_position();
    let look = look_angles(cursor_x, cursor_y, screen_width(), screen_height());

    FrameInput { controls, keys_pressed, look }
}

/// Yaw follows the cursor around the window centre with +y pointing up the screen.
/// Pitch tilts from level (centre) to straight down (window edge).
pub fn look_angles(cursor_x: f32, cursor_y: f32, width: f32, height: f32) -> LookAngles {
    if width <= 0.0 || height <= 0.0 {
        return LookAngles::default();
    }
    let dx = cursor_x - width * 0.5;
    let dy = height * 0.5 - cursor_y;
    let yaw = if dx == 0.0 && dy == 0.0 { 0.0 } else { dy.atan2(dx) };
    let reach = (dx / (width * 0.5)).hypot(dy / (height * 0.5)).min(1.0);
    LookAngles { yaw, pitch: -reach * FRAC_PI_2 }
}
