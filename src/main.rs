use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;

mod audio;
mod config;
mod game;
mod input;
mod render;
mod storage;

use audio::{SoundBank, SoundPlayer};
use config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{Difficulty, GameSession, RunState, TickOutcome};
use input::Command;
use render::{HudLayout, Playfield};
use storage::{SAVE_FILE, load_high_score, save_high_score};

/// Gate for the fixed-step loop: a tick is due once the current interval
/// has elapsed since the last one. Resetting on resume/restart keeps a
/// pause from producing a burst of catch-up ticks.
struct TickTimer {
    last: f64,
}

impl TickTimer {
    fn new(now: f64) -> Self {
        TickTimer { last: now }
    }

    fn due(&mut self, now: f64, interval_secs: f64) -> bool {
        if now - self.last >= interval_secs {
            self.last = now;
            true
        } else {
            false
        }
    }

    fn reset(&mut self, now: f64) {
        self.last = now;
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Retro Snake".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let bank = SoundBank::load().await;
    if bank.is_none() {
        warn!("audio unavailable, running silent");
    }
    let mut sounds = SoundPlayer::new(bank);

    let mut high_score = load_high_score(SAVE_FILE);
    let mut session = GameSession::new(Difficulty::Easy, StdRng::from_entropy());
    session.start();

    let playfield = Playfield::new();
    let layout = HudLayout::default();
    let mut timer = TickTimer::new(get_time());

    loop {
        let now = get_time();

        for command in input::poll(&layout, session.state()) {
            match command {
                Command::Turn(dir) => session.request_heading(dir),
                Command::TogglePause => {
                    session.toggle_pause();
                    if session.state() == RunState::Running {
                        timer.reset(now);
                    }
                }
                Command::Restart => {
                    session.start();
                    timer.reset(now);
                }
                Command::ToggleSound => {
                    sounds.toggle_enabled();
                }
                Command::SetDifficulty(difficulty) => session.set_difficulty(difficulty),
            }
        }

        if session.state() == RunState::Running
            && timer.due(now, session.speed_ms() as f64 / 1000.0)
        {
            match session.tick() {
                TickOutcome::Ate => sounds.play_eat(now),
                TickOutcome::Moved { blip: true } => sounds.play_move(now),
                TickOutcome::Moved { blip: false } | TickOutcome::Idle => {}
                TickOutcome::Died => {
                    sounds.play_game_over(now);
                    if session.score() > high_score {
                        high_score = session.score();
                        info!("new high score: {}", high_score);
                        if let Err(err) = save_high_score(SAVE_FILE, high_score) {
                            warn!("high score not saved: {}", err);
                        }
                    }
                }
            }
        }

        // The playfield target persists; pause and game over freeze it.
        if session.state() == RunState::Running {
            playfield.draw_scene(&session, now);
        }
        playfield.blit();
        render::draw_hud(&session, high_score, sounds.enabled(), &layout);
        if session.state() == RunState::NotRunning {
            render::draw_game_over(session.score(), &layout);
        }

        sounds.update(now);
        next_frame().await;
    }
}
