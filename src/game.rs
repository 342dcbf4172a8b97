use rand::Rng;
use rand::rngs::StdRng;

use crate::config::{
    FOOD_SCORE, GRID_SIZE, MOVE_BLIP_CHANCE, SPEED_FLOOR_MS, SPEED_STEP_MS, START_X, START_Y,
};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE && self.y < GRID_SIZE
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    NotRunning,
    Running,
    Paused,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn interval_ms(self) -> u64 {
        match self {
            Difficulty::Easy => 150,
            Difficulty::Normal => 100,
            Difficulty::Hard => 50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "HARD",
        }
    }
}

/// What a single simulation step did, so the caller can route side
/// effects (sounds, high-score persistence) without the session knowing
/// about them.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Not running or paused; nothing changed.
    Idle,
    Moved { blip: bool },
    Ate,
    Died,
}

/// Rejection-samples a uniformly random cell outside `occupied`.
///
/// A fully occupied grid makes this loop forever; the 20x20 board with a
/// single session never gets there in practice.
pub fn place_food(occupied: &[Cell], rng: &mut impl Rng) -> Cell {
    loop {
        let cell = Cell {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}

/// The whole mutable state of one playthrough: snake, heading, food,
/// score, speed and the run-state flag, plus the RNG feeding food
/// placement and the move blip.
pub struct GameSession {
    snake: Vec<Cell>,
    heading: Direction,
    food: Cell,
    score: u32,
    speed_ms: u64,
    difficulty: Difficulty,
    state: RunState,
    rng: StdRng,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, mut rng: StdRng) -> Self {
        let snake = vec![Cell { x: START_X, y: START_Y }];
        let food = place_food(&snake, &mut rng);
        GameSession {
            snake,
            heading: Direction::Right,
            food,
            score: 0,
            speed_ms: difficulty.interval_ms(),
            difficulty,
            state: RunState::NotRunning,
            rng,
        }
    }

    /// Resets everything and enters `Running`. Used for both the first
    /// start and every restart.
    pub fn start(&mut self) {
        self.snake = vec![Cell { x: START_X, y: START_Y }];
        self.heading = Direction::Right;
        self.score = 0;
        self.speed_ms = self.difficulty.interval_ms();
        self.food = place_food(&self.snake, &mut self.rng);
        self.state = RunState::Running;
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Accepts the turn only if it is orthogonal to the current heading;
    /// an in-place reversal would walk the head straight into the neck.
    /// Rejections are dropped silently.
    pub fn request_heading(&mut self, dir: Direction) {
        if self.state == RunState::NotRunning {
            return;
        }
        if dir.axis() != self.heading.axis() {
            self.heading = dir;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::NotRunning => RunState::NotRunning,
        };
    }

    /// Difficulty buttons override the speed immediately, mid-session
    /// included, and set the base speed of the next restart.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.speed_ms = difficulty.interval_ms();
    }

    /// One discrete step. Only advances while `Running`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != RunState::Running {
            return TickOutcome::Idle;
        }

        let (dx, dy) = self.heading.delta();
        let head = self.head();
        let new_head = Cell { x: head.x + dx, y: head.y + dy };

        // Wall or body: game over, score as it was before the step.
        if !new_head.in_bounds() || self.snake.contains(&new_head) {
            self.state = RunState::NotRunning;
            return TickOutcome::Died;
        }

        self.snake.insert(0, new_head);

        if new_head == self.food {
            self.score += FOOD_SCORE;
            self.food = place_food(&self.snake, &mut self.rng);
            self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS).max(SPEED_FLOOR_MS);
            // Tail kept: the snake grows by one.
            TickOutcome::Ate
        } else {
            self.snake.pop();
            TickOutcome::Moved { blip: self.rng.gen_bool(MOVE_BLIP_CHANCE) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn session(difficulty: Difficulty, seed: u64) -> GameSession {
        let mut s = GameSession::new(difficulty, StdRng::seed_from_u64(seed));
        s.start();
        s
    }

    /// Moves the food somewhere the next step cannot reach so a test can
    /// force a plain move.
    fn park_food(s: &mut GameSession) {
        s.food = Cell { x: 0, y: 0 };
        if s.snake.contains(&s.food) {
            s.food = Cell { x: 19, y: 19 };
        }
    }

    #[test]
    fn plain_tick_moves_head_and_keeps_length() {
        let mut s = session(Difficulty::Easy, 1);
        park_food(&mut s);
        assert_eq!(s.snake(), &[Cell { x: 10, y: 10 }]);

        let out = s.tick();
        assert!(matches!(out, TickOutcome::Moved { .. }));
        assert_eq!(s.snake(), &[Cell { x: 11, y: 10 }]);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn eating_grows_by_one_and_scores_ten() {
        let mut s = session(Difficulty::Easy, 2);
        s.food = Cell { x: 11, y: 10 };

        let len_before = s.snake().len();
        assert_eq!(s.tick(), TickOutcome::Ate);
        assert_eq!(s.snake().len(), len_before + 1);
        assert_eq!(s.score(), 10);
        assert_ne!(s.food(), s.head(), "food must be regenerated elsewhere");
    }

    #[test]
    fn wall_exit_ends_the_session_with_pre_tick_score() {
        let mut s = session(Difficulty::Easy, 3);
        s.snake = vec![Cell { x: 19, y: 10 }];
        park_food(&mut s);

        assert_eq!(s.tick(), TickOutcome::Died);
        assert_eq!(s.state(), RunState::NotRunning);
        assert_eq!(s.score(), 0);
        // A dead session no longer advances.
        assert_eq!(s.tick(), TickOutcome::Idle);
    }

    #[test]
    fn self_collision_ends_the_session() {
        let mut s = session(Difficulty::Easy, 4);
        // Head at (10,10) moving right into its own body at (11,10).
        s.snake = vec![
            Cell { x: 10, y: 10 },
            Cell { x: 10, y: 11 },
            Cell { x: 11, y: 11 },
            Cell { x: 11, y: 10 },
        ];
        park_food(&mut s);

        assert_eq!(s.tick(), TickOutcome::Died);
        assert_eq!(s.state(), RunState::NotRunning);
    }

    #[test]
    fn reversal_is_rejected_orthogonal_is_accepted() {
        let mut s = session(Difficulty::Easy, 5);
        assert_eq!(s.heading(), Direction::Right);

        s.request_heading(Direction::Left);
        assert_eq!(s.heading(), Direction::Right);

        s.request_heading(Direction::Up);
        assert_eq!(s.heading(), Direction::Up);

        s.request_heading(Direction::Down);
        assert_eq!(s.heading(), Direction::Up);
    }

    #[test]
    fn heading_requests_are_inert_after_game_over() {
        let mut s = session(Difficulty::Easy, 6);
        s.snake = vec![Cell { x: 19, y: 10 }];
        park_food(&mut s);
        s.tick();

        s.request_heading(Direction::Up);
        assert_eq!(s.heading(), Direction::Right);
    }

    #[test]
    fn speed_decrements_per_food_and_floors_at_30() {
        let mut s = session(Difficulty::Easy, 7);
        assert_eq!(s.speed_ms(), 150);

        for _ in 0..100 {
            // Re-seat the snake each round so the walk stays on the board.
            s.snake = vec![Cell { x: 1, y: 10 }];
            s.food = Cell { x: 2, y: 10 };
            assert_eq!(s.tick(), TickOutcome::Ate);
        }
        assert_eq!(s.speed_ms(), 30);
    }

    #[test]
    fn pause_gates_ticks_and_resume_reenters() {
        let mut s = session(Difficulty::Easy, 8);
        park_food(&mut s);
        s.toggle_pause();
        assert_eq!(s.state(), RunState::Paused);
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.snake(), &[Cell { x: 10, y: 10 }]);

        s.toggle_pause();
        assert_eq!(s.state(), RunState::Running);
        assert!(matches!(s.tick(), TickOutcome::Moved { .. }));
    }

    #[test]
    fn pause_is_meaningless_when_not_running() {
        let mut s = GameSession::new(Difficulty::Easy, StdRng::seed_from_u64(9));
        assert_eq!(s.state(), RunState::NotRunning);
        s.toggle_pause();
        assert_eq!(s.state(), RunState::NotRunning);
    }

    #[test]
    fn restart_resets_score_speed_and_state() {
        let mut s = session(Difficulty::Normal, 10);
        s.food = Cell { x: 11, y: 10 };
        s.tick();
        assert_eq!(s.score(), 10);

        s.set_difficulty(Difficulty::Hard);
        s.start();
        assert_eq!(s.score(), 0);
        assert_eq!(s.speed_ms(), 50);
        assert_eq!(s.state(), RunState::Running);
        assert_eq!(s.snake(), &[Cell { x: 10, y: 10 }]);
        assert_eq!(s.heading(), Direction::Right);
    }

    #[test]
    fn difficulty_override_applies_immediately() {
        let mut s = session(Difficulty::Easy, 11);
        s.set_difficulty(Difficulty::Hard);
        assert_eq!(s.speed_ms(), 50);
    }

    #[test]
    fn food_is_never_placed_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(12);
        // Occupy half the board to make collisions likely.
        let occupied: Vec<Cell> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE / 2).map(move |x| Cell { x, y }))
            .collect();

        for _ in 0..1000 {
            let food = place_food(&occupied, &mut rng);
            assert!(food.in_bounds());
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn body_cells_stay_distinct_across_a_random_walk() {
        let mut s = session(Difficulty::Easy, 13);
        let mut rng = StdRng::seed_from_u64(14);

        for _ in 0..5000 {
            let dir = match rng.gen_range(0..4) {
                0 => Direction::Up,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Right,
            };
            s.request_heading(dir);
            match s.tick() {
                TickOutcome::Died => s.start(),
                _ => {
                    let unique: HashSet<Cell> = s.snake().iter().copied().collect();
                    assert_eq!(unique.len(), s.snake().len());
                    assert!(!s.snake().contains(&s.food()));
                }
            }
        }
    }
}
