//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, no clock reads
//! - Serve randomness only through `ServeSource`
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod events;
pub mod rect;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, hits_horizontal_wall, paddle_contact, scoring_side};
pub use events::{EventSink, GameEvent, NullSink};
pub use rect::Rect;
pub use serve::{ScriptedServe, ServeRng, ServeSource};
pub use state::{Ball, GameState, MatchPhase, MatchSnapshot, Overlay, Paddle, Score, Side};
pub use tick::{InputSource, TickInput, handle_input, tick, update};
