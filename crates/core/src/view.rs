//! Read-only per-frame snapshot handed to the rendering layer.

use glam::Vec3;

use crate::types::{AgentKind, Direction};

/// Spotlight parameters for one light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LampParams {
    pub position: Vec3,
    /// Unit vector the cone points along.
    pub direction: Vec3,
    /// Full cone angle in radians.
    pub fov: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentView {
    pub kind: AgentKind,
    pub position: Vec3,
    pub facing: Direction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    pub player: AgentView,
    pub enemies: Vec<AgentView>,
    pub goal: Option<Vec3>,
    /// Player lamp first, then one per enemy in update order.
    pub lamps: Vec<LampParams>,
    /// Set once the level has ended; the renderer raises ambient light.
    pub dead: bool,
}
