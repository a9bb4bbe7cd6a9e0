//! Game state and core simulation types
//!
//! `GameState` owns the ball, both paddles and the scoreboard. Entities hold
//! no reference back to the match; all coordination happens in `tick`.

use core::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{hits_horizontal_wall, paddle_contact};
use super::events::{EventSink, GameEvent};
use super::rect::Rect;
use super::serve::{ServeRng, ServeSource};
use crate::config::{BestOf, MatchConfig};
use crate::consts::*;

/// One of the two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Player,
    /// Right paddle, auto-tracking
    Ai,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball in play
    Playing,
    /// Someone reached the winning score; replay menu hidden
    GameOver,
    /// Game over with the best-of menu showing
    ReplayMenu,
    /// Exit requested. Terminal.
    Terminated,
}

/// What the presentation layer should draw over the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    GameOver(Side),
    ReplayMenu,
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick. Neither component is ever zero.
    pub vel: Vec2,
    spawn: Vec2,
    bounds: Vec2,
}

impl Ball {
    /// Ball at `spawn` with an opening serve drawn from `serve`
    pub fn new(spawn: Vec2, size: Vec2, bounds: Vec2, serve: &mut impl ServeSource) -> Self {
        let vel = Vec2::new(SERVE_SPEED_X * serve.next_sign(), serve.next_vertical_velocity());
        Self::with_velocity(spawn, size, bounds, vel)
    }

    pub fn with_velocity(spawn: Vec2, size: Vec2, bounds: Vec2, vel: Vec2) -> Self {
        debug_assert!(vel.x != 0.0 && vel.y != 0.0, "ball velocity must be nonzero");
        Self {
            pos: spawn,
            size,
            vel,
            spawn,
            bounds,
        }
    }

    /// Position the ball returns to on every reset
    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Advance one tick and reflect off the top/bottom edges.
    ///
    /// Horizontal bounds are not checked here; leaving the field is a
    /// scoring decision made by the match.
    pub fn advance(&mut self, sink: &mut dyn EventSink) {
        self.pos += self.vel;

        if hits_horizontal_wall(&self.rect(), self.bounds.y) {
            self.vel.y = -self.vel.y;
            sink.notify(GameEvent::WallBounce);
        }
    }

    /// Bounce off whichever paddle the ball is moving into, if touching it.
    ///
    /// On contact the ball is placed flush against the paddle's outer face
    /// so it cannot tunnel or stick. Returns the side that was hit.
    pub fn check_collision(
        &mut self,
        player: &Paddle,
        ai: &Paddle,
        sink: &mut dyn EventSink,
    ) -> Option<Side> {
        let contact = paddle_contact(&self.rect(), self.vel.x, &player.rect(), &ai.rect())?;
        self.pos.x = contact.resolved_x;
        self.vel.x = -self.vel.x;
        sink.notify(GameEvent::PaddleHit);
        Some(contact.side)
    }

    /// Back to spawn, horizontal direction flipped, fresh vertical speed.
    pub fn reset(&mut self, serve: &mut impl ServeSource) {
        self.pos = self.spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = serve.next_vertical_velocity();
    }
}

/// A paddle (player or AI)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Shift vertically, then clamp to `[0, screen_height - height]`
    pub fn move_by(&mut self, delta: f32, screen_height: f32) {
        let max_y = (screen_height - self.size.y).max(0.0);
        self.pos.y = (self.pos.y + delta).clamp(0.0, max_y);
    }

    /// Step the paddle's centre toward the ball's centre by at most `AI_SPEED`.
    ///
    /// Pure pursuit: no prediction, never overshoots, snaps when close.
    pub fn auto_track(&mut self, ball: &Ball, screen_height: f32) {
        let delta = ball.rect().center_y() - self.center_y();
        self.move_by(delta.clamp(-AI_SPEED, AI_SPEED), screen_height);
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.ai
    }

    /// First side at or past `winning_score`, player checked first
    pub fn leader_at(&self, winning_score: u32) -> Option<Side> {
        if self.player >= winning_score {
            Some(Side::Player)
        } else if self.ai >= winning_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Serializable view of everything drawable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    pub best_of: BestOf,
    pub score: Score,
    pub winner: Option<Side>,
    pub ball: Rect,
    pub ball_velocity: Vec2,
    pub player: Rect,
    pub ai: Rect,
    pub time_ticks: u64,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState<R = ServeRng> {
    config: MatchConfig,
    pub ball: Ball,
    pub player: Paddle,
    pub ai: Paddle,
    pub score: Score,
    phase: MatchPhase,
    winner: Option<Side>,
    /// Ticks simulated while playing, across all matches
    pub time_ticks: u64,
    serve: R,
}

impl GameState<ServeRng> {
    /// Create a new match with a seeded serve generator
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        Self::with_serve(config, ServeRng::new(seed))
    }
}

impl<R: ServeSource> GameState<R> {
    pub fn with_serve(config: MatchConfig, mut serve: R) -> Self {
        let rest_y = config.paddle_rest_y();
        let ball = Ball::new(
            config.ball_spawn(),
            Vec2::splat(BALL_SIZE),
            config.bounds(),
            &mut serve,
        );

        log::info!(
            "New match: {}x{}, {}",
            config.screen_width(),
            config.screen_height(),
            config.best_of.as_str()
        );

        Self {
            ball,
            player: Paddle::new(config.player_paddle_x(), rest_y, PADDLE_WIDTH, PADDLE_HEIGHT),
            ai: Paddle::new(config.ai_paddle_x(), rest_y, PADDLE_WIDTH, PADDLE_HEIGHT),
            score: Score::default(),
            phase: MatchPhase::Playing,
            winner: None,
            time_ticks: 0,
            config,
            serve,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn screen_width(&self) -> f32 {
        self.config.screen_width() as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.config.screen_height() as f32
    }

    pub fn best_of(&self) -> BestOf {
        self.config.best_of
    }

    pub fn winning_score(&self) -> u32 {
        self.config.best_of.winning_score()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// True once either side has reached the winning score
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn menu_visible(&self) -> bool {
        self.phase == MatchPhase::ReplayMenu
    }

    /// False once an exit has been requested
    pub fn is_running(&self) -> bool {
        self.phase != MatchPhase::Terminated
    }

    pub fn overlay(&self) -> Overlay {
        match (self.phase, self.winner) {
            (MatchPhase::ReplayMenu, _) => Overlay::ReplayMenu,
            (MatchPhase::GameOver, Some(side)) => Overlay::GameOver(side),
            _ => Overlay::None,
        }
    }

    /// Award a point, announce it and re-serve
    pub fn award_point(&mut self, side: Side, sink: &mut dyn EventSink) {
        self.score.award(side);
        sink.notify(GameEvent::Score);
        log::debug!(
            "{side} scores: {} - {}",
            self.score.player,
            self.score.ai
        );
        self.ball.reset(&mut self.serve);
    }

    /// Move to `GameOver` if a side has reached the winning score.
    /// Returns true on the tick the match ends.
    pub fn check_winner(&mut self) -> bool {
        if self.phase != MatchPhase::Playing {
            return false;
        }
        let Some(side) = self.score.leader_at(self.winning_score()) else {
            return false;
        };
        self.winner = Some(side);
        self.phase = MatchPhase::GameOver;
        log::info!(
            "{side} wins {} - {} ({})",
            self.score.player,
            self.score.ai,
            self.best_of().as_str()
        );
        true
    }

    /// `GameOver` -> `ReplayMenu`. Ignored in any other phase.
    pub fn show_replay_menu(&mut self) -> bool {
        if self.phase != MatchPhase::GameOver {
            return false;
        }
        self.phase = MatchPhase::ReplayMenu;
        log::debug!("Replay menu opened");
        true
    }

    /// `ReplayMenu` -> `Playing` with a new best-of target. Ignored elsewhere.
    pub fn select_best_of(&mut self, best_of: BestOf) -> bool {
        if self.phase != MatchPhase::ReplayMenu {
            return false;
        }
        self.config.best_of = best_of;
        self.reset_match();
        log::info!("Rematch: {}", best_of.as_str());
        true
    }

    /// Zero the scores, clear the result, re-serve and recentre both paddles
    pub fn reset_match(&mut self) {
        self.score = Score::default();
        self.winner = None;
        self.phase = MatchPhase::Playing;
        self.ball.reset(&mut self.serve);

        let rest_y = self.config.paddle_rest_y();
        self.player.pos.y = rest_y;
        self.ai.pos.y = rest_y;
    }

    /// Stop the match for good
    pub fn terminate(&mut self) {
        if self.phase != MatchPhase::Terminated {
            log::info!("Exit requested ({:?})", self.phase);
            self.phase = MatchPhase::Terminated;
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            best_of: self.best_of(),
            score: self.score,
            winner: self.winner,
            ball: self.ball.rect(),
            ball_velocity: self.ball.vel,
            player: self.player.rect(),
            ai: self.ai.rect(),
            time_ticks: self.time_ticks,
        }
    }
}
