/// Direction the snake can move
///
/// The discriminants give the cyclic order used by relative turns:
/// turning left adds one, turning right subtracts one (mod 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Up = 1,
    Left = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// The direction facing the other way
    pub fn opposite(self) -> Self {
        Self::from_index(self as u8 + 2)
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Quarter turn to the left (+1 mod 4)
    pub fn turned_left(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    /// Quarter turn to the right (-1 mod 4)
    pub fn turned_right(self) -> Self {
        Self::from_index(self as u8 + 3)
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A steering request coming from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Rotate the current heading a quarter turn left
    TurnLeft,
    /// Rotate the current heading a quarter turn right
    TurnRight,
    /// Face an absolute direction
    Face(Direction),
}

impl Intent {
    /// Heading that results from applying this intent to `current`,
    /// or `None` if the request would reverse the snake onto itself.
    pub fn resolve(self, current: Direction) -> Option<Direction> {
        match self {
            Intent::TurnLeft => Some(current.turned_left()),
            Intent::TurnRight => Some(current.turned_right()),
            Intent::Face(direction) if current.is_opposite(direction) => None,
            Intent::Face(direction) => Some(direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_relative_turns_cycle() {
        assert_eq!(Direction::Right.turned_left(), Direction::Up);
        assert_eq!(Direction::Up.turned_left(), Direction::Left);
        assert_eq!(Direction::Down.turned_left(), Direction::Right);
        assert_eq!(Direction::Right.turned_right(), Direction::Down);
        assert_eq!(Direction::Up.turned_right(), Direction::Right);

        for direction in Direction::ALL {
            assert_eq!(direction.turned_left().turned_right(), direction);
            assert_eq!(
                direction.turned_left().turned_left().turned_left().turned_left(),
                direction
            );
        }
    }

    #[test]
    fn test_resolve_rejects_reversal() {
        assert_eq!(Intent::Face(Direction::Left).resolve(Direction::Right), None);
        assert_eq!(Intent::Face(Direction::Down).resolve(Direction::Up), None);
        assert_eq!(
            Intent::Face(Direction::Up).resolve(Direction::Right),
            Some(Direction::Up)
        );
        assert_eq!(
            Intent::Face(Direction::Right).resolve(Direction::Right),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_relative_turns_never_reverse() {
        for direction in Direction::ALL {
            for intent in [Intent::TurnLeft, Intent::TurnRight] {
                let next = intent.resolve(direction).unwrap();
                assert!(!direction.is_opposite(next));
            }
        }
    }
}
