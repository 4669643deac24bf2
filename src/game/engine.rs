use super::{
    action::{Direction, Intent},
    config::GameConfig,
    food::{self, SowOutcome},
    state::{CollisionType, GameState, Phase},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Player input collected during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Steering requests in the order they arrived
    pub intents: Vec<Intent>,
    /// Whether a restart was requested
    pub restart: bool,
}

impl TickInput {
    pub fn steer(intent: Intent) -> Self {
        Self {
            intents: vec![intent],
            restart: false,
        }
    }

    pub fn restart() -> Self {
        Self {
            intents: Vec::new(),
            restart: true,
        }
    }
}

/// Information about a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// What a single tick did to the game
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Whether the snake advanced a cell
    pub moved: bool,
    /// Whether the game was reset this tick
    pub restarted: bool,
    pub info: StepInfo,
    /// Lifecycle phase after the tick
    pub phase: Phase,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh, not yet initialized state for this engine's board
    pub fn new_state(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// Run one tick: lazy setup, food, restart, steering, then the step.
    pub fn update(&mut self, state: &mut GameState, input: &TickInput) -> TickReport {
        self.initialize(state);

        let mut report = TickReport {
            moved: false,
            restarted: false,
            info: StepInfo::default(),
            phase: state.phase(),
        };

        if !state.game_over {
            match food::sow(&mut self.rng, state) {
                SowOutcome::Sown(pos) => debug!(x = pos.x, y = pos.y, "food sown"),
                SowOutcome::BoardFull => {
                    state.game_over = true;
                    report.info.collision_type = Some(CollisionType::BoardFull);
                    info!(score = state.score(), "board full, game over");
                }
                SowOutcome::AlreadySown => {}
            }
        }

        if state.game_over {
            if input.restart {
                Self::reset(state);
                report.restarted = true;
            }
            report.phase = state.phase();
            return report;
        }

        for &intent in &input.intents {
            Self::steer(state, intent);
        }

        if let Some(info) = self.step(state) {
            report.moved = true;
            report.info = info;
        }

        report.phase = state.phase();
        report
    }

    /// Lay out walls and the starting snake if they are missing
    pub fn initialize(&self, state: &mut GameState) {
        if state.walls.is_none() {
            state.walls = Some(GameState::build_walls(
                self.config.grid_width,
                self.config.grid_height,
            ));
        }

        if state.snake.is_none() {
            state.snake = Some(GameState::starting_snake(
                self.config.grid_width,
                self.config.grid_height,
            ));
        }
    }

    /// Apply a steering request. At most one request is accepted between two
    /// moves, and facing straight back is refused. Returns whether it was taken.
    pub fn steer(state: &mut GameState, intent: Intent) -> bool {
        if state.direction_consumed {
            return false;
        }

        match intent.resolve(state.direction) {
            Some(direction) => {
                state.direction = direction;
                state.direction_consumed = true;
                state.game_started = true;
                true
            }
            None => false,
        }
    }

    /// Count a tick and move the snake when the wait for the current score
    /// has elapsed. Nothing happens before the first steering input or after
    /// the game is over.
    pub fn step(&self, state: &mut GameState) -> Option<StepInfo> {
        if !state.game_started || state.game_over {
            return None;
        }

        let wait = self.config.wait(state.score());
        let moved = if state.tick % wait == 0 {
            state.tick = 0;
            Some(Self::advance(state))
        } else {
            None
        };

        state.tick += 1;
        moved
    }

    /// Move the snake one cell in its current direction.
    ///
    /// The new head is put on the body before anything is checked: eating
    /// keeps it grown, otherwise the tail goes. Collisions are then checked
    /// against every segment behind the head and against the walls.
    pub fn advance(state: &mut GameState) -> StepInfo {
        let (width, height) = (state.grid_width, state.grid_height);
        let walls = state.walls.as_deref().unwrap_or(&[]);
        let Some(snake) = state.snake.as_mut() else {
            return StepInfo::default();
        };

        let head = snake
            .head()
            .moved_in_direction(state.direction)
            .wrapped(width, height);
        snake.push_head(head);

        let ate_food = state.food == Some(head);
        if ate_food {
            state.food = None;
            let score = snake.len().saturating_sub(2) as u32;
            state.high_score = state.high_score.max(score);
            debug!(score, "food eaten");
        } else {
            snake.pop_tail();
        }

        let collision_type = if snake.collides_with_body(head) {
            Some(CollisionType::SelfCollision)
        } else if walls.contains(&head) {
            Some(CollisionType::Wall)
        } else {
            None
        };

        if let Some(collision) = collision_type {
            state.game_over = true;
            info!(
                score = snake.len().saturating_sub(2),
                high_score = state.high_score,
                ?collision,
                "game over"
            );
        }

        state.direction_consumed = false;

        StepInfo {
            ate_food,
            collision_type,
        }
    }

    /// Clear the round but keep the high score
    pub fn reset(state: &mut GameState) {
        state.snake = None;
        state.food = None;
        state.game_over = false;
        state.game_started = false;
        state.direction_consumed = false;
        state.direction = Direction::Right;
        state.tick = 0;
        debug!(high_score = state.high_score, "game reset");
    }
}
