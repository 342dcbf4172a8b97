use macroquad::prelude::Color;

// Grid geometry
pub const GRID_SIZE: i32 = 20;
pub const CELL_SIZE: f32 = 20.0;
pub const BOARD_SIZE: f32 = GRID_SIZE as f32 * CELL_SIZE;

// Window layout: HUD strip on top, playfield below, status line at the bottom
pub const BOARD_ORIGIN_Y: f32 = 80.0;
pub const WINDOW_WIDTH: i32 = BOARD_SIZE as i32;
pub const WINDOW_HEIGHT: i32 = BOARD_ORIGIN_Y as i32 + BOARD_SIZE as i32 + 40;

// Snake spawn cell
pub const START_X: i32 = 10;
pub const START_Y: i32 = 10;

// Scoring and pacing
pub const FOOD_SCORE: u32 = 10;
pub const SPEED_STEP_MS: u64 = 2;
pub const SPEED_FLOOR_MS: u64 = 30;
pub const MOVE_BLIP_CHANCE: f64 = 0.1;

// Retro green palette
pub const FADE_CLEAR: Color = Color::new(0.039, 0.039, 0.039, 0.1);
pub const GRID_LINE: Color = Color::new(0.2, 1.0, 0.2, 0.05);
pub const HEAD_COLOR: Color = Color::new(0.267, 1.0, 0.267, 1.0);
pub const EYE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const FOOD_RED: (f32, f32, f32) = (1.0, 0.2, 0.2);
pub const STEM_COLOR: Color = Color::new(0.396, 0.263, 0.129, 1.0);

pub const HUD_TEXT: Color = Color::new(0.2, 1.0, 0.2, 1.0);
pub const HUD_DIM: Color = Color::new(0.2, 0.55, 0.2, 1.0);
pub const BUTTON_FILL: Color = Color::new(0.0, 0.15, 0.0, 1.0);
pub const BUTTON_ACTIVE: Color = Color::new(0.0, 0.45, 0.0, 1.0);
pub const OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.6);
