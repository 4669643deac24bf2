use super::action::Direction;
use super::config::GameConfig;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Fold the position back onto a toroidal grid of the given size
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        Self {
            x: self.x.rem_euclid(width as i32),
            y: self.y.rem_euclid(height as i32),
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a new snake whose body trails behind `head`, opposite to `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Put a new head in front of the current one
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Drop the last segment
    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// No free cell was left to place food on
    BoardFull,
}

/// Where the game is in its lifecycle, derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing built yet; the first update lays out walls and snake
    Uninitialized,
    /// Waiting for food to be placed
    Sowing,
    /// Food placed, frozen until the first steering input
    Ready,
    /// Snake advances every `wait` ticks
    Running,
    /// Frozen until a restart input
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// `None` until lazily placed, and again after a restart
    pub snake: Option<Snake>,
    /// Static obstacles, built once on the first update
    pub walls: Option<Vec<Position>>,
    /// `None` while unsown
    pub food: Option<Position>,
    pub direction: Direction,
    /// Set once a steering input was accepted; cleared when the snake moves
    pub direction_consumed: bool,
    pub game_over: bool,
    pub game_started: bool,
    pub tick: u32,
    pub high_score: u32,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    /// Create an uninitialized game state for the configured board
    pub fn new(config: &GameConfig) -> Self {
        Self {
            snake: None,
            walls: None,
            food: None,
            direction: Direction::Right,
            direction_consumed: false,
            game_over: false,
            game_started: false,
            tick: 0,
            high_score: 0,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
        }
    }

    /// Current score: segments grown beyond the two starting ones
    pub fn score(&self) -> u32 {
        self.snake
            .as_ref()
            .map_or(0, |snake| snake.len().saturating_sub(2) as u32)
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.walls.is_none() {
            Phase::Uninitialized
        } else if self.game_started {
            Phase::Running
        } else if self.food.is_none() {
            Phase::Sowing
        } else {
            Phase::Ready
        }
    }

    pub fn walls(&self) -> &[Position] {
        self.walls.as_deref().unwrap_or(&[])
    }

    /// Snake segments, head first; empty while the snake is not placed
    pub fn snake_body(&self) -> &[Position] {
        match &self.snake {
            Some(snake) => &snake.body,
            None => &[],
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls().contains(&pos)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake_body().contains(&pos)
    }

    /// Check if a position is free for food
    pub fn is_free(&self, pos: Position) -> bool {
        !self.is_wall(pos) && !self.is_occupied_by_snake(pos)
    }

    /// Wall cells: the full top and bottom rows
    pub fn build_walls(width: usize, height: usize) -> Vec<Position> {
        let bottom = height as i32 - 1;
        (0..width as i32)
            .flat_map(|x| [Position::new(x, 0), Position::new(x, bottom)])
            .collect()
    }

    /// Starting snake: head in the middle of the board, one segment to its left
    pub fn starting_snake(width: usize, height: usize) -> Snake {
        let head = Position::new((width / 2) as i32, (height / 2) as i32);
        Snake::new(head, Direction::Right, 2)
    }
}
