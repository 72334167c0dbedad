//! Engine that drives robots across a [`Grid`] one at a time.
//!
//! The entry point is [`MarsEngine`]. Create one per world with the world's
//! [`Bounds`], then call [`MarsEngine::run`] once per robot, in the order the
//! robots were submitted. Scent left by a lost robot stays on the engine's grid
//! and protects every robot that runs afterwards.

use crate::grid::{Bounds, Grid};
use crate::robot::{Instruction, Pose};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Errors raised while interpreting an instruction string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid instruction '{instruction}' at position {index}")]
    InvalidInstruction { instruction: char, index: usize },
}

/// Where a robot ended up, and whether it fell off the grid on the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Final pose. A lost robot reports the last on-grid point it stood on.
    pub pose: Pose,
    pub lost: bool,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lost {
            write!(f, "{} LOST", self.pose)
        } else {
            write!(f, "{}", self.pose)
        }
    }
}

/// Owns one world and runs robots across it.
pub struct MarsEngine {
    grid: Grid,
}

impl MarsEngine {
    /// Creates an engine over a fresh grid with no scent.
    ///
    /// `bounds` is expected to be validated already; see
    /// [`validate_world_config`](crate::validation::validate_world_config).
    pub fn new(bounds: Bounds) -> Self {
        Self {
            grid: Grid::new(bounds),
        }
    }

    /// The rectangle this engine's robots move on.
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds
    }

    #[cfg(test)]
    pub(crate) fn is_scented(&self, position: crate::robot::Position) -> bool {
        self.grid.is_scented(position)
    }

    /// Runs one robot from `start` through `instructions` and returns its outcome.
    ///
    /// Letters are case-insensitive. Processing stops as soon as the robot is lost,
    /// so anything after that point is never inspected.
    ///
    /// `start` must lie on the grid, which
    /// [`validate_robot_config`](crate::validation::validate_robot_config) checks.
    /// An off-grid start is not rejected here, and its first forward move counts as a
    /// fall from that point.
    ///
    /// # Forward moves
    ///
    /// A forward move that stays on the grid advances the robot. A move that would
    /// leave the grid either:
    /// 1. loses the robot and scents its current point, or
    /// 2. is ignored, when the current point already carries scent.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInstruction`] on the first letter outside
    /// `L`, `R`, `F`. The grid's scent is left as it was.
    pub fn run(&mut self, start: Pose, instructions: &str) -> Result<RunOutcome, EngineError> {
        let mut pose = start;
        let mut lost = false;

        debug!(start = %start, instructions, "robot starting");

        for (index, c) in instructions.chars().map(|c| c.to_ascii_uppercase()).enumerate() {
            if lost {
                break;
            }

            let instruction = Instruction::from_char(c)
                .ok_or(EngineError::InvalidInstruction { instruction: c, index })?;

            match instruction {
                Instruction::TurnLeft => pose.turn_left(),
                Instruction::TurnRight => pose.turn_right(),
                Instruction::Forward => {
                    let next = pose.ahead();
                    if self.grid.is_on_grid(next) {
                        pose.position = next;
                    } else if self.grid.is_scented(pose.position) {
                        debug!(at = %pose, "scent blocked a fall");
                    } else {
                        self.grid.leave_scent(pose.position);
                        lost = true;
                        debug!(at = %pose, "robot lost");
                    }
                }
            }
        }

        let outcome = RunOutcome { pose, lost };
        debug!(%outcome, "robot finished");
        Ok(outcome)
    }
}
