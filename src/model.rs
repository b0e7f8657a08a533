//! Core data models for Iso Snake.
//! The game state is plain data advanced one discrete tick at a time; the
//! renderer only ever sees it through a `GameSnapshot`.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::{
    FOOD_PER_LEVEL, GRID_GROWTH_PER_LEVEL, GRID_SIZE_INITIAL, GRID_SIZE_MAX, GRID_SIZE_MIN,
    TICK_MS_INITIAL, TICK_MS_MIN,
};
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub col: u32,
    pub row: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Start screen; nothing moves yet.
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Moved,
    Ate,
    LeveledUp,
    Died,
    /// Ate the last free cell; the game is over.
    BoardFull,
}

/// Read-only view handed to the renderer each frame.
#[derive(Clone, Copy, Debug)]
pub struct GameSnapshot<'a> {
    /// Index 0 is the head.
    pub snake: &'a [GridCoordinate],
    pub food: Option<GridCoordinate>,
    pub grid_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Side length of the square board.
    pub grid_size: u32,
    /// Index 0 is the head.
    pub snake: Vec<GridCoordinate>,
    /// Direction of the last completed move.
    pub direction: Direction,
    /// Direction the next tick will move in.
    pub pending_direction: Direction,
    pub food: Option<GridCoordinate>,
    pub score: u32,
    pub level: u32,
    /// Current tick period; halves on every level-up.
    pub tick_ms: u32,
    pub status: GameStatus,
    /// Bumped by every reduction so views can redraw on change.
    pub version: u64,
}

impl GameState {
    pub fn new(grid_size: u32) -> Self {
        Self::with_rng(grid_size, &mut js_sys::Math::random)
    }

    /// Fresh board with a three-segment snake in the middle heading right.
    pub fn with_rng(grid_size: u32, rand: &mut dyn FnMut() -> f64) -> Self {
        let grid_size = grid_size.clamp(GRID_SIZE_MIN, GRID_SIZE_MAX);
        let mid = grid_size / 2;
        let snake = (0..3)
            .map(|i| GridCoordinate {
                col: mid - i,
                row: mid,
            })
            .collect();
        let mut state = Self {
            grid_size,
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            level: 1,
            tick_ms: TICK_MS_INITIAL,
            status: GameStatus::Ready,
            version: 0,
        };
        state.place_food(rand);
        state
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            snake: &self.snake,
            food: self.food,
            grid_size: self.grid_size,
        }
    }

    pub fn head(&self) -> GridCoordinate {
        self.snake[0]
    }

    /// Queues a direction change; reversing onto the neck is ignored.
    pub fn turn(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.pending_direction = dir;
        }
    }

    /// Puts food on a uniformly chosen free cell, or clears it when the board
    /// is full. `rand` yields values in [0, 1).
    pub fn place_food(&mut self, rand: &mut dyn FnMut() -> f64) {
        let n = self.grid_size;
        let free: Vec<GridCoordinate> = (0..n)
            .flat_map(|row| (0..n).map(move |col| GridCoordinate { col, row }))
            .filter(|c| !self.snake.contains(c))
            .collect();
        self.food = if free.is_empty() {
            None
        } else {
            let idx = ((rand() * free.len() as f64).floor() as usize).min(free.len() - 1);
            Some(free[idx])
        };
    }

    /// Advances one tick.
    pub fn step(&mut self, rand: &mut dyn FnMut() -> f64) -> StepOutcome {
        if self.status != GameStatus::Playing {
            return StepOutcome::Idle;
        }
        let (dx, dy) = self.pending_direction.delta();
        let head = self.head();
        let nx = head.col as i64 + dx;
        let ny = head.row as i64 + dy;
        let n = self.grid_size as i64;
        if nx < 0 || ny < 0 || nx >= n || ny >= n {
            return self.die();
        }
        let next = GridCoordinate {
            col: nx as u32,
            row: ny as u32,
        };
        let eats = self.food == Some(next);
        // The tail moves out of the way this tick unless the snake grows
        let body_len = if eats {
            self.snake.len()
        } else {
            self.snake.len() - 1
        };
        if self.snake[..body_len].contains(&next) {
            return self.die();
        }
        self.direction = self.pending_direction;
        self.snake.insert(0, next);
        if !eats {
            self.snake.pop();
            return StepOutcome::Moved;
        }

        self.score += 1;
        let leveled = self.score % FOOD_PER_LEVEL == 0;
        if leveled {
            self.level_up();
        }
        self.place_food(rand);
        if self.food.is_none() {
            clog(&format!("board full score={}", self.score));
            self.status = GameStatus::GameOver;
            return StepOutcome::BoardFull;
        }
        if leveled {
            StepOutcome::LeveledUp
        } else {
            StepOutcome::Ate
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.tick_ms = (self.tick_ms / 2).max(TICK_MS_MIN);
        self.grid_size = (self.grid_size + GRID_GROWTH_PER_LEVEL).min(GRID_SIZE_MAX);
        clog(&format!(
            "level {} grid={} tick={}ms",
            self.level, self.grid_size, self.tick_ms
        ));
    }

    fn die(&mut self) -> StepOutcome {
        clog(&format!("game over score={}", self.score));
        self.status = GameStatus::GameOver;
        StepOutcome::Died
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Leaves the start screen, or restarts after game over.
    Start,
    Tick,
    Turn(Direction),
    TogglePause,
    Restart,
}

impl GameState {
    /// Applies one action, drawing randomness from `rand`. Returns `None`
    /// when the action changes nothing.
    pub fn apply(&self, action: GameAction, rand: &mut dyn FnMut() -> f64) -> Option<Self> {
        use GameAction::*;
        let mut new = self.clone();
        match action {
            Start => match new.status {
                GameStatus::Ready | GameStatus::Paused => new.status = GameStatus::Playing,
                GameStatus::GameOver => {
                    new = GameState::with_rng(GRID_SIZE_INITIAL, rand);
                    new.status = GameStatus::Playing;
                }
                GameStatus::Playing => return None,
            },
            Tick => {
                if new.step(rand) == StepOutcome::Idle {
                    return None;
                }
            }
            Turn(dir) => {
                if new.status == GameStatus::Ready {
                    new.status = GameStatus::Playing;
                }
                new.turn(dir);
            }
            TogglePause => {
                new.status = match new.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            Restart => new = GameState::with_rng(GRID_SIZE_INITIAL, rand),
        }
        new.version = self.version.wrapping_add(1);
        Some(new)
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action, &mut js_sys::Math::random) {
            Some(new) => Rc::new(new),
            None => self,
        }
    }
}
