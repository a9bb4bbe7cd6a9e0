//! Match configuration
//!
//! Screen geometry and the best-of target are fixed for the lifetime of a
//! `GameState` except for the best-of choice made from the replay menu.

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Axis, ConfigError};

/// Match length: first side to N points wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BestOf {
    Three,
    #[default]
    Five,
    Seven,
}

impl BestOf {
    /// Options in replay-menu order
    pub const ALL: [BestOf; 3] = [BestOf::Three, BestOf::Five, BestOf::Seven];

    /// Points needed to win the match
    pub fn winning_score(&self) -> u32 {
        match self {
            BestOf::Three => 3,
            BestOf::Five => 5,
            BestOf::Seven => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BestOf::Three => "Best of 3",
            BestOf::Five => "Best of 5",
            BestOf::Seven => "Best of 7",
        }
    }

    /// Replay-menu hotkey for this option
    pub fn key(&self) -> char {
        match self {
            BestOf::Three => '3',
            BestOf::Five => '5',
            BestOf::Seven => '7',
        }
    }
}

impl TryFrom<u8> for BestOf {
    type Error = ConfigError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(BestOf::Three),
            5 => Ok(BestOf::Five),
            7 => Ok(BestOf::Seven),
            _ => Err(ConfigError::InvalidBestOf(n)),
        }
    }
}

impl From<BestOf> for u8 {
    fn from(best_of: BestOf) -> Self {
        best_of.winning_score() as u8
    }
}

impl FromStr for BestOf {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let digits = lower
            .strip_prefix("best-of-")
            .or_else(|| lower.strip_prefix("best of "))
            .or_else(|| lower.strip_prefix("bo"))
            .unwrap_or(lower.as_str());
        match digits.parse::<u8>() {
            Ok(n) => BestOf::try_from(n),
            Err(_) => Err(ConfigError::UnknownBestOf(s.to_string())),
        }
    }
}

/// Validated match geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    screen_width: u32,
    screen_height: u32,
    pub best_of: BestOf,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            best_of: BestOf::default(),
        }
    }
}

impl MatchConfig {
    /// Narrowest screen whose spawned ball sits clear of the AI paddle
    pub const MIN_WIDTH: u32 = 2 * (BALL_SIZE + AI_PADDLE_INSET) as u32 + 1;
    /// Shortest screen where a paddle parked at either end leaves the ball a
    /// lane past it, with a tick of vertical travel to spare
    pub const MIN_HEIGHT: u32 = (2.0 * (PADDLE_HEIGHT + SERVE_SPEED_Y) + BALL_SIZE) as u32 + 1;

    pub fn new(
        screen_width: u32,
        screen_height: u32,
        best_of: BestOf,
    ) -> Result<Self, ConfigError> {
        if screen_width == 0 {
            return Err(ConfigError::ZeroDimension { axis: Axis::Width });
        }
        if screen_height == 0 {
            return Err(ConfigError::ZeroDimension { axis: Axis::Height });
        }
        if screen_width < Self::MIN_WIDTH || screen_height < Self::MIN_HEIGHT {
            return Err(ConfigError::ScreenTooSmall {
                width: screen_width,
                height: screen_height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }
        Ok(Self {
            screen_width,
            screen_height,
            best_of,
        })
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn screen_height(&self) -> u32 {
        self.screen_height
    }

    /// Screen size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    pub fn player_paddle_x(&self) -> f32 {
        PLAYER_PADDLE_X
    }

    pub fn ai_paddle_x(&self) -> f32 {
        self.screen_width as f32 - AI_PADDLE_INSET
    }

    /// Paddle y that vertically centres a paddle on screen
    pub fn paddle_rest_y(&self) -> f32 {
        (self.screen_height / 2) as f32 - PADDLE_HEIGHT / 2.0
    }

    /// Ball spawn point (top-left corner of the ball)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new((self.screen_width / 2) as f32, (self.screen_height / 2) as f32)
    }
}
