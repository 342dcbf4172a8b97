use macroquad::prelude::*;

use crate::game::{Difficulty, Direction, RunState};
use crate::render::HudLayout;

/// What the player asked for this frame. The session validates turns and
/// pause itself; the commands just carry intent out of the event layer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    ToggleSound,
    SetDifficulty(Difficulty),
}

/// Polls keyboard and mouse once per frame. Keys are inert while the
/// session is not running; the restart button only exists on the
/// game-over panel, the rest of the buttons work in every state.
pub fn poll(layout: &HudLayout, state: RunState) -> Vec<Command> {
    let mut commands = Vec::new();

    if state != RunState::NotRunning {
        if is_key_pressed(KeyCode::Up) {
            commands.push(Command::Turn(Direction::Up));
        }
        if is_key_pressed(KeyCode::Down) {
            commands.push(Command::Turn(Direction::Down));
        }
        if is_key_pressed(KeyCode::Left) {
            commands.push(Command::Turn(Direction::Left));
        }
        if is_key_pressed(KeyCode::Right) {
            commands.push(Command::Turn(Direction::Right));
        }
        if is_key_pressed(KeyCode::Space) {
            commands.push(Command::TogglePause);
        }
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (mx, my) = mouse_position();
        let point = vec2(mx, my);

        if state == RunState::NotRunning && layout.restart.contains(point) {
            commands.push(Command::Restart);
        }
        if layout.sound.contains(point) {
            commands.push(Command::ToggleSound);
        }
        for (rect, difficulty) in layout.difficulty.iter().zip(Difficulty::ALL) {
            if rect.contains(point) {
                commands.push(Command::SetDifficulty(difficulty));
            }
        }
    }

    commands
}
