//! Robot state and operations: orientation, pose, and the instruction alphabet.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grid position. Bounds belong to the [`Grid`](crate::grid::Grid), not the position.
pub type Position = IVec2;

/// One of the four compass headings a robot can face.
///
/// Rotation is closed over these four values; there is no way to reach a fifth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// All orientations in clockwise order starting from North.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the orientation 90° counter-clockwise from `self` (N → W → S → E → N).
    pub fn turn_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Returns the orientation 90° clockwise from `self` (N → E → S → W → N).
    pub fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken by a forward move while facing `self`.
    pub fn direction(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Parses a compass letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The compass letter for this orientation.
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Returned when a string is not one of `N`, `E`, `S`, `W`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid orientation '{0}'")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| ParseOrientationError(s.into())),
            _ => Err(ParseOrientationError(s.into())),
        }
    }
}

/// The kinematic state of a robot: where it stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Current grid position.
    pub position: Position,

    /// Current heading.
    pub orientation: Orientation,
}

impl Pose {
    /// A pose at `(x, y)` facing `orientation`.
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            position: IVec2::new(x, y),
            orientation,
        }
    }

    /// The position one forward step ahead. Says nothing about whether it is on the grid.
    pub fn ahead(&self) -> Position {
        self.position + self.orientation.direction()
    }

    /// Rotates in place 90° counter-clockwise.
    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.turn_left();
    }

    /// Rotates in place 90° clockwise.
    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.turn_right();
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.orientation)
    }
}

/// Operations a robot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Rotate 90° counter-clockwise in place (`L`).
    TurnLeft,
    /// Rotate 90° clockwise in place (`R`).
    TurnRight,
    /// Advance one grid point in the current heading (`F`).
    Forward,
}

impl Instruction {
    /// Maps an instruction letter, in either case, to its operation.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            'F' => Some(Self::Forward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_are_inverses() {
        for o in Orientation::ALL {
            assert_eq!(o.turn_left().turn_right(), o);
            assert_eq!(o.turn_right().turn_left(), o);
        }
    }

    #[test]
    fn four_turns_return_to_start() {
        for o in Orientation::ALL {
            let left = (0..4).fold(o, |acc, _| acc.turn_left());
            let right = (0..4).fold(o, |acc, _| acc.turn_right());
            assert_eq!(left, o);
            assert_eq!(right, o);
        }
    }

    #[test]
    fn turns_follow_the_compass() {
        assert_eq!(Orientation::East.turn_left(), Orientation::North);
        assert_eq!(Orientation::North.turn_left(), Orientation::West);
        assert_eq!(Orientation::East.turn_right(), Orientation::South);
        assert_eq!(Orientation::North.turn_right(), Orientation::East);
    }

    #[test]
    fn forward_step_per_heading() {
        assert_eq!(Pose::new(1, 1, Orientation::East).ahead(), IVec2::new(2, 1));
        assert_eq!(Pose::new(3, 2, Orientation::North).ahead(), IVec2::new(3, 3));
        assert_eq!(Pose::new(3, 2, Orientation::South).ahead(), IVec2::new(3, 1));
        assert_eq!(Pose::new(0, 0, Orientation::West).ahead(), IVec2::new(-1, 0));
    }

    #[test]
    fn parses_orientation_case_insensitively() {
        assert_eq!("n".parse::<Orientation>(), Ok(Orientation::North));
        assert_eq!("W".parse::<Orientation>(), Ok(Orientation::West));
        assert!("L".parse::<Orientation>().is_err());
        assert!("NE".parse::<Orientation>().is_err());
        assert!("".parse::<Orientation>().is_err());
    }

    #[test]
    fn instruction_alphabet() {
        assert_eq!(Instruction::from_char('f'), Some(Instruction::Forward));
        assert_eq!(Instruction::from_char('L'), Some(Instruction::TurnLeft));
        assert_eq!(Instruction::from_char('r'), Some(Instruction::TurnRight));
        assert_eq!(Instruction::from_char('2'), None);
    }

    #[test]
    fn pose_displays_as_coordinates_and_letter() {
        assert_eq!(Pose::new(2, 1, Orientation::East).to_string(), "2 1 E");
    }
}
