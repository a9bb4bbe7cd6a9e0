//! Draw-command capture for a match
//!
//! Layout follows the classic screen: paddles and ball, a centre line, the
//! two scores across the top, and a shaded overlay once the match is over.

use glam::Vec2;

use super::{SHADE, WHITE};
use crate::config::BestOf;
use crate::sim::{GameState, Overlay, Rect, ServeSource, Side};

/// RGBA, each channel in [0, 1]
pub type Color = [f32; 4];

/// Text font sizes (points)
const SCORE_SIZE: f32 = 30.0;
const WINNER_SIZE: f32 = 48.0;
const TITLE_SIZE: f32 = 36.0;
const OPTION_SIZE: f32 = 28.0;
const HINT_SIZE: f32 = 24.0;

/// How a text position anchors the string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        align: Align,
        color: Color,
    },
}

/// One frame's worth of draw commands
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCmd>,
}

impl Scene {
    /// Build the draw list for the current state
    pub fn capture<R: ServeSource>(state: &GameState<R>) -> Self {
        let width = state.screen_width();
        let height = state.screen_height();
        let mut scene = Self {
            width,
            height,
            commands: Vec::with_capacity(16),
        };

        scene.push(DrawCmd::FillRect {
            rect: state.player.rect(),
            color: WHITE,
        });
        scene.push(DrawCmd::FillRect {
            rect: state.ai.rect(),
            color: WHITE,
        });
        scene.push(DrawCmd::FillEllipse {
            rect: state.ball.rect(),
            color: WHITE,
        });
        scene.push(DrawCmd::Line {
            from: Vec2::new(width / 2.0, 0.0),
            to: Vec2::new(width / 2.0, height),
            color: WHITE,
        });

        scene.text(
            state.score.player.to_string(),
            Vec2::new(width / 4.0, 20.0),
            SCORE_SIZE,
            Align::TopLeft,
        );
        scene.text(
            state.score.ai.to_string(),
            Vec2::new(width * 3.0 / 4.0, 20.0),
            SCORE_SIZE,
            Align::TopLeft,
        );

        match state.overlay() {
            Overlay::None => {}
            Overlay::GameOver(winner) => scene.game_over(winner),
            Overlay::ReplayMenu => scene.replay_menu(),
        }

        scene
    }

    /// All text in the scene, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    fn text(&mut self, text: String, pos: Vec2, size: f32, align: Align) {
        self.push(DrawCmd::Text {
            text,
            pos,
            size,
            align,
            color: WHITE,
        });
    }

    fn shade(&mut self) {
        self.push(DrawCmd::FillRect {
            rect: Rect::new(0.0, 0.0, self.width, self.height),
            color: SHADE,
        });
    }

    fn game_over(&mut self, winner: Side) {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        self.shade();
        self.text(
            format!("{winner} Wins!"),
            Vec2::new(cx, cy - 50.0),
            WINNER_SIZE,
            Align::Center,
        );
        self.text(
            "Press SPACE to choose game mode or ESC to exit".to_string(),
            Vec2::new(cx, cy + 20.0),
            HINT_SIZE,
            Align::Center,
        );
    }

    fn replay_menu(&mut self) {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        self.shade();
        self.text(
            "Choose Game Mode".to_string(),
            Vec2::new(cx, cy - 100.0),
            TITLE_SIZE,
            Align::Center,
        );
        for (i, best_of) in BestOf::ALL.iter().enumerate() {
            self.text(
                format!("{} (Press {})", best_of.as_str(), best_of.key()),
                Vec2::new(cx, cy - 20.0 + i as f32 * 40.0),
                OPTION_SIZE,
                Align::Center,
            );
        }
        self.text(
            "Press ESC to exit".to_string(),
            Vec2::new(cx, cy + 120.0),
            HINT_SIZE,
            Align::Center,
        );
    }
}
