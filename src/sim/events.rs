//! Notifications raised by the simulation
//!
//! The core never plays sounds itself; it reports what happened to an
//! `EventSink` and carries on. Sinks are best-effort and cannot fail the tick.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball reflected off either paddle
    PaddleHit,
    /// A point was awarded and the ball re-served
    Score,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::WallBounce => "wall_bounce",
            GameEvent::PaddleHit => "paddle_hit",
            GameEvent::Score => "score",
        }
    }
}

/// Receiver for simulation notifications
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Records notifications in order
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: GameEvent) {
        (**self).notify(event);
    }
}
