use macroquad::prelude::*;

use crate::config::{
    BOARD_ORIGIN_Y, BOARD_SIZE, BUTTON_ACTIVE, BUTTON_FILL, CELL_SIZE, EYE_COLOR, FADE_CLEAR,
    FOOD_RED, GRID_LINE, GRID_SIZE, HEAD_COLOR, HUD_DIM, HUD_TEXT, OVERLAY, STEM_COLOR,
};
use crate::game::{Cell, Difficulty, Direction, GameSession, RunState};

/// Food opacity pulses with the wall clock so it animates smoothly
/// between ticks.
pub fn food_pulse_alpha(now: f64) -> f32 {
    ((now * 5.0).sin() * 0.2 + 0.8) as f32
}

/// Body segments darken with distance from the head, floored so the tail
/// stays visible.
pub fn body_green(index: usize) -> u8 {
    (180 - (index as i32) * 5).max(100) as u8
}

/// The two eye marks on the head, as pixel offsets within the cell.
pub fn eye_offsets(heading: Direction) -> [(f32, f32); 2] {
    match heading {
        Direction::Right => [(12.0, 4.0), (12.0, 12.0)],
        Direction::Left => [(4.0, 4.0), (4.0, 12.0)],
        Direction::Up => [(4.0, 4.0), (12.0, 4.0)],
        Direction::Down => [(4.0, 12.0), (12.0, 12.0)],
    }
}

/// Offscreen 400x400 scene the game draws into. The target persists
/// between frames, so the translucent clear leaves a fading trail of the
/// previous frames, and pausing simply freezes its contents.
pub struct Playfield {
    target: RenderTarget,
    camera: Camera2D,
}

impl Playfield {
    pub fn new() -> Self {
        let target = render_target(BOARD_SIZE as u32, BOARD_SIZE as u32);
        target.texture.set_filter(FilterMode::Nearest);
        let mut camera = Camera2D::from_display_rect(Rect::new(0.0, 0.0, BOARD_SIZE, BOARD_SIZE));
        camera.render_target = Some(target.clone());
        Playfield { target, camera }
    }

    pub fn draw_scene(&self, session: &GameSession, now: f64) {
        set_camera(&self.camera);

        draw_rectangle(0.0, 0.0, BOARD_SIZE, BOARD_SIZE, FADE_CLEAR);
        draw_grid_lines();
        draw_food(session.food(), now);
        draw_snake(session.snake(), session.heading());

        set_default_camera();
    }

    pub fn blit(&self) {
        draw_texture_ex(
            &self.target.texture,
            0.0,
            BOARD_ORIGIN_Y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(BOARD_SIZE, BOARD_SIZE)),
                ..Default::default()
            },
        );
    }
}

fn draw_grid_lines() {
    for i in 0..=GRID_SIZE {
        let p = i as f32 * CELL_SIZE;
        draw_line(p, 0.0, p, BOARD_SIZE, 1.0, GRID_LINE);
        draw_line(0.0, p, BOARD_SIZE, p, 1.0, GRID_LINE);
    }
}

fn draw_food(food: Cell, now: f64) {
    let (r, g, b) = FOOD_RED;
    let body = Color::new(r, g, b, food_pulse_alpha(now));
    let fx = food.x as f32 * CELL_SIZE;
    let fy = food.y as f32 * CELL_SIZE;
    let size = CELL_SIZE - 2.0;

    // Two overlapping rectangles make the pixel apple, plus a stem.
    draw_rectangle(fx + 4.0, fy + 2.0, size - 8.0, size - 6.0, body);
    draw_rectangle(fx + 2.0, fy + 4.0, size - 4.0, size - 10.0, body);
    draw_rectangle(fx + size / 2.0 - 1.0, fy, 2.0, 4.0, STEM_COLOR);
}

fn draw_snake(snake: &[Cell], heading: Direction) {
    for (index, segment) in snake.iter().enumerate() {
        let sx = segment.x as f32 * CELL_SIZE;
        let sy = segment.y as f32 * CELL_SIZE;

        if index == 0 {
            draw_rectangle(sx, sy, CELL_SIZE - 2.0, CELL_SIZE - 2.0, HEAD_COLOR);
            for (ex, ey) in eye_offsets(heading) {
                draw_rectangle(sx + ex, sy + ey, 3.0, 3.0, EYE_COLOR);
            }
        } else {
            let color = Color::from_rgba(51, body_green(index), 51, 255);
            draw_rectangle(sx, sy, CELL_SIZE - 2.0, CELL_SIZE - 2.0, color);
        }
    }
}

/// Screen-space rectangles for every clickable control.
pub struct HudLayout {
    pub difficulty: [Rect; 3],
    pub sound: Rect,
    pub restart: Rect,
}

impl Default for HudLayout {
    fn default() -> Self {
        HudLayout {
            difficulty: [
                Rect::new(10.0, 42.0, 88.0, 28.0),
                Rect::new(102.0, 42.0, 88.0, 28.0),
                Rect::new(194.0, 42.0, 88.0, 28.0),
            ],
            sound: Rect::new(306.0, 42.0, 84.0, 28.0),
            restart: Rect::new(150.0, 330.0, 100.0, 34.0),
        }
    }
}

pub fn draw_hud(
    session: &GameSession,
    high_score: u32,
    sound_enabled: bool,
    layout: &HudLayout,
) {
    draw_text(&format!("SCORE: {}", session.score()), 10.0, 26.0, 24.0, HUD_TEXT);
    draw_text(&format!("HIGH: {high_score}"), 260.0, 26.0, 24.0, HUD_TEXT);

    for (rect, difficulty) in layout.difficulty.iter().zip(Difficulty::ALL) {
        let active = session.difficulty() == difficulty;
        draw_button(*rect, difficulty.label(), active);
    }
    draw_button(
        layout.sound,
        if sound_enabled { "SOUND ON" } else { "SOUND OFF" },
        sound_enabled,
    );

    let status = match session.state() {
        RunState::Running => "SPACE TO PAUSE",
        RunState::Paused => "PAUSED",
        RunState::NotRunning => "",
    };
    draw_text(status, 10.0, BOARD_ORIGIN_Y + BOARD_SIZE + 26.0, 20.0, HUD_DIM);
}

pub fn draw_game_over(final_score: u32, layout: &HudLayout) {
    draw_rectangle(0.0, BOARD_ORIGIN_Y, BOARD_SIZE, BOARD_SIZE, OVERLAY);

    let sw = BOARD_SIZE;
    let title = "GAME OVER";
    let tm = measure_text(title, None, 40, 1.0);
    draw_text(title, (sw - tm.width) * 0.5, 250.0, 40.0, HUD_TEXT);

    let line = format!("FINAL SCORE: {final_score}");
    let lm = measure_text(&line, None, 24, 1.0);
    draw_text(&line, (sw - lm.width) * 0.5, 290.0, 24.0, HUD_TEXT);

    draw_button(layout.restart, "RESTART", true);
}

fn draw_button(rect: Rect, label: &str, active: bool) {
    let fill = if active { BUTTON_ACTIVE } else { BUTTON_FILL };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, HUD_TEXT);

    let m = measure_text(label, None, 18, 1.0);
    draw_text(
        label,
        rect.x + (rect.w - m.width) * 0.5,
        rect.y + rect.h * 0.5 + 6.0,
        18.0,
        if active { HUD_TEXT } else { HUD_DIM },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_alpha_stays_in_band() {
        let mut t = 0.0;
        while t < 10.0 {
            let a = food_pulse_alpha(t);
            assert!((0.6..=1.0).contains(&a), "alpha {a} at t={t}");
            t += 0.01;
        }
    }

    #[test]
    fn body_gradient_floors_at_100() {
        assert_eq!(body_green(1), 175);
        assert_eq!(body_green(16), 100);
        assert_eq!(body_green(200), 100);
    }

    #[test]
    fn eyes_sit_on_the_leading_edge() {
        assert_eq!(eye_offsets(Direction::Right), [(12.0, 4.0), (12.0, 12.0)]);
        assert_eq!(eye_offsets(Direction::Left), [(4.0, 4.0), (4.0, 12.0)]);
        assert_eq!(eye_offsets(Direction::Up), [(4.0, 4.0), (12.0, 4.0)]);
        assert_eq!(eye_offsets(Direction::Down), [(4.0, 12.0), (12.0, 12.0)]);
    }
}
