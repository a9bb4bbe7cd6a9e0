//! Collision detection for the ball against walls, paddles and goal lines
//!
//! Every test here is boundary-inclusive: a ball exactly touching an edge
//! counts as a hit on that same tick.

use super::rect::Rect;
use super::state::Side;

/// Result of a ball/paddle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Paddle that was hit
    pub side: Side,
    /// Ball x that puts it flush against the paddle's outer face
    pub resolved_x: f32,
}

/// True when the ball touches or crosses the top or bottom edge
pub fn hits_horizontal_wall(ball: &Rect, screen_height: f32) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= screen_height
}

/// Check the ball against both paddles.
///
/// A paddle only counts while the ball is travelling toward it, so a ball
/// already heading away cannot be caught a second time. The two direction
/// gates are mutually exclusive: at most one paddle reports a contact.
pub fn paddle_contact(ball: &Rect, vel_x: f32, player: &Rect, ai: &Rect) -> Option<PaddleContact> {
    if vel_x < 0.0 && ball.overlaps(player) {
        Some(PaddleContact {
            side: Side::Player,
            resolved_x: player.right(),
        })
    } else if vel_x > 0.0 && ball.overlaps(ai) {
        Some(PaddleContact {
            side: Side::Ai,
            resolved_x: ai.left() - ball.width,
        })
    } else {
        None
    }
}

/// Side awarded a point when the ball reaches a goal line, if any.
///
/// Left edge at or past 0 is the AI's point; right edge at or past the
/// screen width is the player's. The left line is checked first.
pub fn scoring_side(ball: &Rect, screen_width: f32) -> Option<Side> {
    if ball.left() <= 0.0 {
        Some(Side::Ai)
    } else if ball.right() >= screen_width {
        Some(Side::Player)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Rect {
        Rect::new(10.0, 250.0, 10.0, 100.0)
    }

    fn ai() -> Rect {
        Rect::new(780.0, 250.0, 10.0, 100.0)
    }

    #[test]
    fn test_wall_contact_is_inclusive() {
        assert!(hits_horizontal_wall(&Rect::new(100.0, 0.0, 7.0, 7.0), 600.0));
        assert!(hits_horizontal_wall(&Rect::new(100.0, 593.0, 7.0, 7.0), 600.0));
        assert!(!hits_horizontal_wall(&Rect::new(100.0, 0.5, 7.0, 7.0), 600.0));
        assert!(!hits_horizontal_wall(&Rect::new(100.0, 592.0, 7.0, 7.0), 600.0));
    }

    #[test]
    fn test_player_paddle_contact_when_moving_left() {
        let ball = Rect::new(18.0, 300.0, 7.0, 7.0);
        let contact = paddle_contact(&ball, -5.0, &player(), &ai()).expect("should hit");
        assert_eq!(contact.side, Side::Player);
        assert_eq!(contact.resolved_x, 20.0);
    }

    #[test]
    fn test_ai_paddle_contact_when_moving_right() {
        let ball = Rect::new(775.0, 300.0, 7.0, 7.0);
        let contact = paddle_contact(&ball, 5.0, &player(), &ai()).expect("should hit");
        assert_eq!(contact.side, Side::Ai);
        assert_eq!(contact.resolved_x, 773.0);
    }

    #[test]
    fn test_no_contact_when_moving_away() {
        let ball = Rect::new(18.0, 300.0, 7.0, 7.0);
        assert_eq!(paddle_contact(&ball, 5.0, &player(), &ai()), None);

        let ball = Rect::new(775.0, 300.0, 7.0, 7.0);
        assert_eq!(paddle_contact(&ball, -5.0, &player(), &ai()), None);
    }

    #[test]
    fn test_edge_touch_counts_as_contact() {
        // Ball's left edge exactly on the paddle's right face
        let ball = Rect::new(20.0, 343.0, 7.0, 7.0);
        assert!(paddle_contact(&ball, -5.0, &player(), &ai()).is_some());
    }

    #[test]
    fn test_miss_above_paddle() {
        let ball = Rect::new(15.0, 200.0, 7.0, 7.0);
        assert_eq!(paddle_contact(&ball, -5.0, &player(), &ai()), None);
    }

    #[test]
    fn test_scoring_side() {
        assert_eq!(scoring_side(&Rect::new(0.0, 300.0, 7.0, 7.0), 800.0), Some(Side::Ai));
        assert_eq!(scoring_side(&Rect::new(-3.0, 300.0, 7.0, 7.0), 800.0), Some(Side::Ai));
        assert_eq!(scoring_side(&Rect::new(793.0, 300.0, 7.0, 7.0), 800.0), Some(Side::Player));
        assert_eq!(scoring_side(&Rect::new(400.0, 300.0, 7.0, 7.0), 800.0), None);
    }
}
