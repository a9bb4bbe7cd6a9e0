//! Ping Pong - two paddles, one ball, an AI that never stops watching
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state machine)
//! - `config`: Validated match geometry and best-of selection
//! - `settings`: JSON-backed user preferences
//! - `audio`: Maps simulation notifications onto sound cues
//! - `renderer`: Draw-command capture and a headless text canvas

pub mod audio;
pub mod config;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::{BestOf, MatchConfig};
pub use error::{ConfigError, SettingsError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Frame rate the driver paces `tick` at. The core never reads a clock.
    pub const FPS: u32 = 60;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between the left screen edge and the player paddle
    pub const PLAYER_PADDLE_X: f32 = 10.0;
    /// Distance from the right screen edge to the AI paddle's left edge
    pub const AI_PADDLE_INSET: f32 = 20.0;

    /// Player paddle travel per tick while a direction key is held
    pub const PLAYER_STEP: f32 = 10.0;
    /// Maximum AI paddle travel per tick
    pub const AI_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 7.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
}
