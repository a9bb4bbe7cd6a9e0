//! Per-frame simulation step
//!
//! One `tick` per rendered frame: apply the sampled input, then advance the
//! match. Nothing here blocks or reads a clock.

use super::collision::scoring_side;
use super::events::EventSink;
use super::serve::ServeSource;
use super::state::{GameState, MatchPhase};
use crate::config::BestOf;
use crate::consts::PLAYER_STEP;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Player paddle up (W)
    pub move_up: bool,
    /// Player paddle down (S)
    pub move_down: bool,
    /// Open the replay menu from the game-over screen (SPACE)
    pub show_menu: bool,
    /// Best-of choice from the replay menu (3/5/7)
    pub best_of: Option<BestOf>,
    /// Quit (ESC or window close)
    pub exit: bool,
}

/// Source of per-frame input, sampled once per tick by the driver
pub trait InputSource {
    fn move_up(&self) -> bool;
    fn move_down(&self) -> bool;
    fn show_menu(&self) -> bool;
    fn select_best_of(&self, best_of: BestOf) -> bool;
    fn exit(&self) -> bool;

    /// Fold the queries into a `TickInput`. When several best-of keys are
    /// held the shortest match wins.
    fn sample(&self) -> TickInput {
        TickInput {
            move_up: self.move_up(),
            move_down: self.move_down(),
            show_menu: self.show_menu(),
            best_of: BestOf::ALL.into_iter().find(|b| self.select_best_of(*b)),
            exit: self.exit(),
        }
    }
}

impl InputSource for TickInput {
    fn move_up(&self) -> bool {
        self.move_up
    }

    fn move_down(&self) -> bool {
        self.move_down
    }

    fn show_menu(&self) -> bool {
        self.show_menu
    }

    fn select_best_of(&self, best_of: BestOf) -> bool {
        self.best_of == Some(best_of)
    }

    fn exit(&self) -> bool {
        self.exit
    }
}

/// Apply input, then advance the match by one frame
pub fn tick<R: ServeSource>(state: &mut GameState<R>, input: &TickInput, sink: &mut dyn EventSink) {
    handle_input(state, input);
    update(state, sink);
}

/// Apply one frame of input to the match state machine
pub fn handle_input<R: ServeSource>(state: &mut GameState<R>, input: &TickInput) {
    if input.exit {
        state.terminate();
        return;
    }

    match state.phase() {
        MatchPhase::Playing => {
            let height = state.screen_height();
            if input.move_up {
                state.player.move_by(-PLAYER_STEP, height);
            }
            if input.move_down {
                state.player.move_by(PLAYER_STEP, height);
            }
        }
        MatchPhase::GameOver => {
            if input.show_menu {
                state.show_replay_menu();
            }
        }
        MatchPhase::ReplayMenu => {
            if let Some(best_of) = input.best_of {
                state.select_best_of(best_of);
            }
        }
        MatchPhase::Terminated => {}
    }
}

/// Advance the ball, resolve contacts, score, check for a winner, move the AI.
///
/// Does nothing outside `Playing`.
pub fn update<R: ServeSource>(state: &mut GameState<R>, sink: &mut dyn EventSink) {
    if state.phase() != MatchPhase::Playing {
        return;
    }
    state.time_ticks += 1;

    state.ball.advance(sink);
    state.ball.check_collision(&state.player, &state.ai, sink);

    if let Some(side) = scoring_side(&state.ball.rect(), state.screen_width()) {
        state.award_point(side, sink);
    }

    state.check_winner();

    let height = state.screen_height();
    state.ai.auto_track(&state.ball, height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::consts::*;
    use crate::sim::events::{GameEvent, NullSink};
    use crate::sim::serve::ScriptedServe;
    use crate::sim::state::{Score, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    fn scripted_state(best_of: BestOf) -> GameState<ScriptedServe> {
        let config = MatchConfig::new(SCREEN_WIDTH, SCREEN_HEIGHT, best_of).unwrap();
        GameState::with_serve(config, ScriptedServe::constant(1.0))
    }

    /// Park the ball just past the AI paddle so the next update scores for the player
    fn set_up_player_point<R: ServeSource>(state: &mut GameState<R>) {
        state.ball.pos = Vec2::new(792.0, 40.0);
        state.ball.vel = Vec2::new(SERVE_SPEED_X, SERVE_SPEED_Y);
    }

    #[test]
    fn test_tick_moves_player_paddle() {
        let mut state = scripted_state(BestOf::Five);
        let up = TickInput {
            move_up: true,
            ..Default::default()
        };
        tick(&mut state, &up, &mut NullSink);
        assert_eq!(state.player.pos.y, 250.0 - PLAYER_STEP);

        let both = TickInput {
            move_up: true,
            move_down: true,
            ..Default::default()
        };
        tick(&mut state, &both, &mut NullSink);
        assert_eq!(state.player.pos.y, 250.0 - PLAYER_STEP, "up and down cancel out");
    }

    #[test]
    fn test_player_scores_past_ai_paddle() {
        let mut state = scripted_state(BestOf::Five);
        set_up_player_point(&mut state);
        let mut events = Vec::new();

        update(&mut state, &mut events);

        assert_eq!(state.score, Score { player: 1, ai: 0 });
        assert_eq!(events, vec![GameEvent::Score]);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_ai_scores_past_player_paddle() {
        let mut state = scripted_state(BestOf::Five);
        state.ball.pos = Vec2::new(3.0, 40.0);
        state.ball.vel = Vec2::new(-SERVE_SPEED_X, SERVE_SPEED_Y);
        let mut events = Vec::new();

        update(&mut state, &mut events);

        assert_eq!(state.score, Score { player: 0, ai: 1 });
        assert_eq!(events, vec![GameEvent::Score]);
    }

    #[test]
    fn test_paddle_hit_in_update() {
        let mut state = scripted_state(BestOf::Five);
        state.ball.pos = Vec2::new(24.0, 290.0);
        state.ball.vel = Vec2::new(-SERVE_SPEED_X, SERVE_SPEED_Y);
        let mut events = Vec::new();

        update(&mut state, &mut events);

        assert_eq!(state.ball.pos.x, 20.0);
        assert_eq!(state.ball.vel.x, SERVE_SPEED_X);
        assert_eq!(events, vec![GameEvent::PaddleHit]);
    }

    #[test]
    fn test_win_detected_on_scoring_tick() {
        let mut state = scripted_state(BestOf::Five);
        state.score = Score { player: 4, ai: 4 };
        set_up_player_point(&mut state);

        update(&mut state, &mut NullSink);

        assert_eq!(state.score.player, 5);
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Side::Player));
        assert_eq!(state.phase(), MatchPhase::GameOver);
    }

    #[test]
    fn test_update_is_frozen_after_game_over() {
        let mut state = scripted_state(BestOf::Three);
        state.score.ai = 3;
        update(&mut state, &mut NullSink);
        assert_eq!(state.winner(), Some(Side::Ai));

        let ball = state.ball.pos;
        let ticks = state.time_ticks;
        let mut events = Vec::new();
        update(&mut state, &mut events);
        assert_eq!(state.ball.pos, ball);
        assert_eq!(state.time_ticks, ticks);
        assert!(events.is_empty());
    }

    #[test]
    fn test_movement_ignored_after_game_over() {
        let mut state = scripted_state(BestOf::Three);
        state.score.ai = 3;
        update(&mut state, &mut NullSink);

        let down = TickInput {
            move_down: true,
            ..Default::default()
        };
        tick(&mut state, &down, &mut NullSink);
        assert_eq!(state.player.pos.y, 250.0);
    }

    #[test]
    fn test_menu_flow() {
        let mut state = scripted_state(BestOf::Five);
        state.score.player = 5;
        update(&mut state, &mut NullSink);
        assert_eq!(state.phase(), MatchPhase::GameOver);

        // Best-of keys do nothing until the menu is visible
        let pick_seven = TickInput {
            best_of: Some(BestOf::Seven),
            ..Default::default()
        };
        handle_input(&mut state, &pick_seven);
        assert_eq!(state.phase(), MatchPhase::GameOver);

        let menu = TickInput {
            show_menu: true,
            ..Default::default()
        };
        handle_input(&mut state, &menu);
        assert_eq!(state.phase(), MatchPhase::ReplayMenu);

        handle_input(&mut state, &pick_seven);
        assert_eq!(state.phase(), MatchPhase::Playing);
        assert_eq!(state.winning_score(), 7);
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_exit_terminates_from_any_phase() {
        let exit = TickInput {
            exit: true,
            ..Default::default()
        };

        let mut playing = scripted_state(BestOf::Five);
        tick(&mut playing, &exit, &mut NullSink);
        assert_eq!(playing.phase(), MatchPhase::Terminated);

        let mut menu = scripted_state(BestOf::Five);
        menu.score.ai = 5;
        update(&mut menu, &mut NullSink);
        menu.show_replay_menu();
        tick(&mut menu, &exit, &mut NullSink);
        assert_eq!(menu.phase(), MatchPhase::Terminated);

        // Terminal: later input is ignored
        let pick = TickInput {
            best_of: Some(BestOf::Three),
            ..Default::default()
        };
        tick(&mut menu, &pick, &mut NullSink);
        assert_eq!(menu.phase(), MatchPhase::Terminated);
    }

    #[test]
    fn test_ai_tracks_after_update() {
        let mut state = scripted_state(BestOf::Five);
        state.ball.pos = Vec2::new(400.0, 100.0);
        state.ball.vel = Vec2::new(SERVE_SPEED_X, -SERVE_SPEED_Y);
        update(&mut state, &mut NullSink);
        assert_eq!(state.ai.pos.y, 250.0 - AI_SPEED);
    }

    #[test]
    fn test_sample_prefers_shortest_match() {
        struct Keys;
        impl InputSource for Keys {
            fn move_up(&self) -> bool {
                false
            }
            fn move_down(&self) -> bool {
                true
            }
            fn show_menu(&self) -> bool {
                false
            }
            fn select_best_of(&self, best_of: BestOf) -> bool {
                best_of != BestOf::Three
            }
            fn exit(&self) -> bool {
                false
            }
        }

        let input = Keys.sample();
        assert!(input.move_down);
        assert_eq!(input.best_of, Some(BestOf::Five));
    }

    #[test]
    fn test_tick_input_round_trips_through_sample() {
        let input = TickInput {
            move_up: true,
            best_of: Some(BestOf::Seven),
            ..Default::default()
        };
        assert_eq!(input.sample(), input);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>()).prop_map(|(move_up, move_down)| TickInput {
            move_up,
            move_down,
            ..Default::default()
        })
    }

    proptest! {
        #[test]
        fn prop_scores_only_grow_by_one(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(arb_input(), 1..400),
        ) {
            let config = MatchConfig::new(SCREEN_WIDTH, SCREEN_HEIGHT, BestOf::Seven).unwrap();
            let mut state = GameState::new(config, seed);
            for input in &inputs {
                let before = state.score;
                let mut events = Vec::new();
                tick(&mut state, input, &mut events);

                let scored = events.iter().filter(|e| **e == GameEvent::Score).count() as u32;
                prop_assert!(state.score.player >= before.player);
                prop_assert!(state.score.ai >= before.ai);
                prop_assert_eq!(state.score.total(), before.total() + scored);
                prop_assert!(scored <= 1);

                let max_y = SCREEN_HEIGHT as f32 - PADDLE_HEIGHT;
                prop_assert!((0.0..=max_y).contains(&state.player.pos.y));
                prop_assert!((0.0..=max_y).contains(&state.ai.pos.y));
                prop_assert!(state.ball.vel.x != 0.0 && state.ball.vel.y != 0.0);
                prop_assert_eq!(state.is_game_over(), state.score.leader_at(7).is_some());
            }
        }
    }
}
