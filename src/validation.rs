//! Input validation for world and robot configuration.
//!
//! Everything here runs before the engine sees a value:
//! - world bounds must be non-negative and at most [`MAX_COORDINATE`]
//! - a robot must start inside the world
//! - an instruction string is at most [`MAX_INSTRUCTION_LEN`] characters
//!
//! The instruction alphabet itself is checked by the engine.

use crate::grid::Bounds;
use crate::robot::{Orientation, ParseOrientationError, Pose};
use glam::IVec2;
use thiserror::Error;

/// Largest coordinate a world edge may have.
pub const MAX_COORDINATE: i32 = 50;

/// Longest instruction string a single robot accepts.
pub const MAX_INSTRUCTION_LEN: usize = 100;

/// Reasons raw world or robot input is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("2 integers are expected as coordinates, got '{input}'")]
    ExpectedIntegers { input: String },

    #[error("World coordinates should be between 0 and {}, got {max_x} {max_y}", MAX_COORDINATE)]
    InvalidWorldConfig { max_x: i32, max_y: i32 },

    #[error("Robot is placed outside of the specified world: {x} {y}")]
    InvalidRobotConfig { x: i32, y: i32 },

    #[error(transparent)]
    InvalidOrientation(#[from] ParseOrientationError),

    #[error(
        "Maximum instruction length is {} characters, {length} characters were entered",
        MAX_INSTRUCTION_LEN
    )]
    InvalidInstructionLength { length: usize },

    #[error("Unexpected '{token}' at the end of '{input}'")]
    UnexpectedToken { token: String, input: String },
}

/// Checks world bounds against `0..=MAX_COORDINATE` and returns them as [`Bounds`].
pub fn validate_world_config(max_x: i32, max_y: i32) -> Result<Bounds, ValidationError> {
    let range = 0..=MAX_COORDINATE;
    if !range.contains(&max_x) || !range.contains(&max_y) {
        return Err(ValidationError::InvalidWorldConfig { max_x, max_y });
    }
    Ok(Bounds::new(max_x, max_y))
}

/// Checks that a robot starts inside the world.
pub fn validate_robot_config(x: i32, y: i32, bounds: Bounds) -> Result<(), ValidationError> {
    if !bounds.contains(IVec2::new(x, y)) {
        return Err(ValidationError::InvalidRobotConfig { x, y });
    }
    Ok(())
}

/// Checks an instruction string's length. The letters themselves are left to the engine.
pub fn validate_instructions(instructions: &str) -> Result<(), ValidationError> {
    let length = instructions.chars().count();
    if length > MAX_INSTRUCTION_LEN {
        return Err(ValidationError::InvalidInstructionLength { length });
    }
    Ok(())
}

/// Parses a world line such as `"5 3"` into validated bounds.
pub fn parse_world_line(line: &str) -> Result<Bounds, ValidationError> {
    let mut tokens = line.split_whitespace();
    let (max_x, max_y) = parse_coordinates(line, &mut tokens)?;
    reject_trailing(line, &mut tokens)?;
    validate_world_config(max_x, max_y)
}

/// Parses a robot line such as `"1 1 E"` into a starting pose inside `bounds`.
pub fn parse_robot_line(line: &str, bounds: Bounds) -> Result<Pose, ValidationError> {
    let mut tokens = line.split_whitespace();
    let (x, y) = parse_coordinates(line, &mut tokens)?;
    let orientation: Orientation = tokens.next().unwrap_or_default().parse()?;
    reject_trailing(line, &mut tokens)?;
    validate_robot_config(x, y, bounds)?;
    Ok(Pose::new(x, y, orientation))
}

fn parse_coordinates<'a>(
    line: &str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<(i32, i32), ValidationError> {
    let mut next_int = || {
        tokens
            .next()
            .and_then(|t| t.parse::<i32>().ok())
            .ok_or_else(|| ValidationError::ExpectedIntegers { input: line.into() })
    };
    let x = next_int()?;
    let y = next_int()?;
    Ok((x, y))
}

fn reject_trailing<'a>(
    line: &str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    match tokens.next() {
        Some(token) => Err(ValidationError::UnexpectedToken {
            token: token.into(),
            input: line.into(),
        }),
        None => Ok(()),
    }
}
