use std::time::{Duration, Instant};

use crate::game::{CollisionType, GameState, TickReport};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub score: u32,
    /// Snake length when the round ended
    pub length: usize,
    pub cause: Option<CollisionType>,
    pub duration: Duration,
}

/// Rounds played during one run of the program, plus the clock of the
/// round in progress. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct SessionStats {
    round_started: Instant,
    round_time: Duration,
    round_over: bool,
    rounds: Vec<RoundRecord>,
}

impl SessionStats {
    pub fn new(now: Instant) -> Self {
        Self {
            round_started: now,
            round_time: Duration::ZERO,
            round_over: false,
            rounds: Vec::new(),
        }
    }

    /// Advance the round clock; it stays frozen once the round is over
    pub fn refresh(&mut self, now: Instant) {
        if !self.round_over {
            self.round_time = now.saturating_duration_since(self.round_started);
        }
    }

    pub fn on_round_start(&mut self, now: Instant) {
        self.round_started = now;
        self.round_time = Duration::ZERO;
        self.round_over = false;
    }

    /// Record the round that `report` just ended
    pub fn on_round_end(&mut self, state: &GameState, report: &TickReport) {
        self.round_over = true;
        self.rounds.push(RoundRecord {
            score: state.score(),
            length: state.snake_body().len(),
            cause: report.info.collision_type,
            duration: self.round_time,
        });
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Longest snake so far; the earliest round wins a tie
    pub fn best_round(&self) -> Option<&RoundRecord> {
        self.rounds
            .iter()
            .reduce(|best, round| if round.length > best.length { round } else { best })
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    /// Round clock as mm:ss
    pub fn round_clock(&self) -> String {
        let total_secs = self.round_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

pub fn cause_label(cause: Option<CollisionType>) -> &'static str {
    match cause {
        Some(CollisionType::Wall) => "wall",
        Some(CollisionType::SelfCollision) => "bit itself",
        Some(CollisionType::BoardFull) => "board full",
        None => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Phase, Position, Snake, StepInfo};

    fn ended(length: usize, cause: CollisionType) -> (GameState, TickReport) {
        let mut state = GameState::new(&GameConfig::default());
        state.snake = Some(Snake::new(Position::new(20, 10), Direction::Right, length));
        state.game_over = true;

        let report = TickReport {
            moved: true,
            restarted: false,
            info: StepInfo {
                ate_food: false,
                collision_type: Some(cause),
            },
            phase: Phase::GameOver,
        };
        (state, report)
    }

    #[test]
    fn test_round_clock_freezes_at_game_over() {
        let start = Instant::now();
        let mut stats = SessionStats::new(start);

        stats.refresh(start + Duration::from_secs(125));
        assert_eq!(stats.round_clock(), "02:05");

        let (state, report) = ended(4, CollisionType::Wall);
        stats.on_round_end(&state, &report);
        stats.refresh(start + Duration::from_secs(3661));
        assert_eq!(stats.round_clock(), "02:05");
        assert_eq!(stats.last_round().unwrap().duration, Duration::from_secs(125));

        stats.on_round_start(start + Duration::from_secs(4000));
        assert_eq!(stats.round_clock(), "00:00");
        stats.refresh(start + Duration::from_secs(4003));
        assert_eq!(stats.round_clock(), "00:03");
    }

    #[test]
    fn test_records_score_length_and_cause() {
        let mut stats = SessionStats::new(Instant::now());
        let (state, report) = ended(7, CollisionType::SelfCollision);

        stats.on_round_end(&state, &report);

        let round = stats.last_round().unwrap();
        assert_eq!(round.score, 5);
        assert_eq!(round.length, 7);
        assert_eq!(round.cause, Some(CollisionType::SelfCollision));
        assert_eq!(cause_label(round.cause), "bit itself");
    }

    #[test]
    fn test_best_round_is_longest() {
        let mut stats = SessionStats::new(Instant::now());
        assert!(stats.best_round().is_none());

        for (length, cause) in [
            (5, CollisionType::Wall),
            (9, CollisionType::SelfCollision),
            (9, CollisionType::Wall),
            (3, CollisionType::Wall),
        ] {
            let (state, report) = ended(length, cause);
            stats.on_round_end(&state, &report);
        }

        assert_eq!(stats.rounds_played(), 4);
        let best = stats.best_round().unwrap();
        assert_eq!(best.length, 9);
        assert_eq!(best.cause, Some(CollisionType::SelfCollision));
        assert_eq!(stats.last_round().unwrap().length, 3);
    }
}
