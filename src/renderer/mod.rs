//! Rendering module
//!
//! The simulation never draws. `Scene::capture` turns a `GameState` into an
//! ordered list of draw commands, and `present` replays them onto any
//! `RenderTarget`.

pub mod ascii;
pub mod scene;

pub use ascii::AsciiCanvas;
pub use scene::{Align, Color, DrawCmd, Scene};

use glam::Vec2;

use crate::sim::Rect;

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
/// Half-transparent black used behind overlay text
pub const SHADE: Color = [0.0, 0.0, 0.0, 0.5];

/// Anything that can draw the primitives a scene is made of
pub trait RenderTarget {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: Align, color: Color);

    /// Ellipse inscribed in `rect`. Targets without curves may fill the box.
    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.fill_rect(rect, color);
    }
}

/// Clear the target and draw every command in order
pub fn present<T: RenderTarget + ?Sized>(target: &mut T, scene: &Scene) {
    target.clear(BLACK);
    for cmd in &scene.commands {
        match cmd {
            DrawCmd::FillRect { rect, color } => target.fill_rect(*rect, *color),
            DrawCmd::FillEllipse { rect, color } => target.fill_ellipse(*rect, *color),
            DrawCmd::Line { from, to, color } => target.line(*from, *to, *color),
            DrawCmd::Text {
                text,
                pos,
                size,
                align,
                color,
            } => target.text(text, *pos, *size, *align, *color),
        }
    }
}
