//! Ping Pong entry point
//!
//! Headless demo: a scripted player pilot plays one match against the AI,
//! then opens the replay menu and quits. Prints the last frame and a JSON
//! snapshot of the match.
//!
//! Usage: `ping-pong [settings.json]`

use std::process::ExitCode;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ping_pong::Settings;
use ping_pong::audio::AudioCues;
use ping_pong::consts::FPS;
use ping_pong::renderer::{AsciiCanvas, Scene, present};
use ping_pong::sim::{GameState, MatchPhase, TickInput, tick};

/// Hard stop for a match that never finishes (ten minutes of play)
const MAX_FRAMES: u64 = FPS as u64 * 600;

/// Chance the pilot misjudges an incoming rally
const BLUNDER_CHANCE: f64 = 0.3;

const CANVAS_COLS: usize = 80;
const CANVAS_ROWS: usize = 30;

/// Scripted stand-in for a human on W/S
struct Pilot {
    rng: Pcg32,
    incoming: bool,
    blunder: bool,
}

impl Pilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            incoming: false,
            blunder: false,
        }
    }

    fn input(&mut self, state: &GameState) -> TickInput {
        let incoming = state.ball.vel.x < 0.0;
        if incoming && !self.incoming {
            self.blunder = self.rng.random_bool(BLUNDER_CHANCE);
        }
        self.incoming = incoming;

        let target = if incoming {
            state.ball.rect().center_y()
        } else {
            state.screen_height() / 2.0
        };
        let offset = target - state.player.center_y();
        // A blundering pilot runs the wrong way
        let offset = if self.blunder { -offset } else { offset };

        TickInput {
            move_up: offset < -5.0,
            move_down: offset > 5.0,
            ..TickInput::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Ping Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let config = match settings.match_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Serve seed: {}", seed);

    let mut state = GameState::new(config, seed);
    let mut audio = AudioCues::from_settings(&settings);
    let mut pilot = Pilot::new(seed.wrapping_add(1));
    let mut cues_played = 0usize;
    let mut frame = None;

    for _ in 0..MAX_FRAMES {
        let input = match state.phase() {
            MatchPhase::Playing => pilot.input(&state),
            MatchPhase::GameOver => TickInput {
                show_menu: true,
                ..TickInput::default()
            },
            MatchPhase::ReplayMenu => {
                let mut canvas = AsciiCanvas::new(
                    CANVAS_COLS,
                    CANVAS_ROWS,
                    state.screen_width(),
                    state.screen_height(),
                );
                present(&mut canvas, &Scene::capture(&state));
                frame = Some(canvas);
                TickInput {
                    exit: true,
                    ..TickInput::default()
                }
            }
            MatchPhase::Terminated => break,
        };

        tick(&mut state, &input, &mut audio);
        for cue in audio.drain() {
            let tone = cue.effect.tone();
            log::debug!(
                "Play {:?}: {:.0} -> {:.0} Hz over {:.2}s, gain {:.2}",
                cue.effect,
                tone.frequency_at(0.0),
                tone.frequency_at(tone.duration_secs),
                tone.duration_secs,
                cue.volume * tone.gain
            );
            cues_played += 1;
        }
    }

    if state.is_running() {
        log::warn!("Frame cap reached after {} ticks", state.time_ticks);
        state.terminate();
    }
    log::info!(
        "Finished after {} ticks, {} audio cues",
        state.time_ticks,
        cues_played
    );

    if let Some(canvas) = frame {
        println!("{canvas}");
    }
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
