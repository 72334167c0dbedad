//! Sequential driver for one world.
//!
//! A session owns a single [`MarsEngine`] and feeds it robots strictly in the order
//! they are submitted. A script is plain text: the first non-blank line holds the
//! world bounds, then each robot takes two non-blank lines, its starting pose and
//! its instructions.
//!
//! ```text
//! 5 3
//! 1 1 E
//! RFRFRFRF
//! 3 2 N
//! FRRFLLFFRRFLL
//! ```

use crate::engine::{EngineError, MarsEngine, RunOutcome};
use crate::grid::Bounds;
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a robot, or the whole script, could not be run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("No world coordinates were given")]
    MissingWorld,

    #[error("Robot on line {line} has no instructions")]
    MissingInstructions { line: usize },

    #[error("Session was aborted by an earlier robot")]
    Aborted,
}

/// What to do when a single robot cannot be run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the whole session at the first failing robot.
    #[default]
    Abort,
    /// Report the failing robot and carry on with the same world.
    SkipRobot,
}

/// Either where the robot ended up or why it never ran to completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotResult {
    Outcome(RunOutcome),
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotReport {
    /// 1-based line of the robot's pose in the script, or its submission index.
    pub line: usize,
    pub result: RobotResult,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub bounds: Bounds,
    pub robots: Vec<RobotReport>,
    /// Set when [`ErrorPolicy::Abort`] cut the session short.
    pub aborted: bool,
}

/// One world and the robots submitted to it so far.
pub struct Session {
    engine: MarsEngine,
    policy: ErrorPolicy,
    robots: Vec<RobotReport>,
    aborted: bool,
}

impl Session {
    /// Opens a world with no scent and no robots.
    pub fn new(bounds: Bounds, policy: ErrorPolicy) -> Self {
        Self {
            engine: MarsEngine::new(bounds),
            policy,
            robots: Vec::new(),
            aborted: false,
        }
    }

    /// True once a robot failed under [`ErrorPolicy::Abort`]. Further submissions are refused.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Validates and runs one robot, recording the result under `line`.
    ///
    /// # Errors
    ///
    /// Returns the validation or engine error for this robot. Under
    /// [`ErrorPolicy::Abort`] the session is closed afterwards.
    pub fn submit_at(
        &mut self,
        line: usize,
        pose_line: &str,
        instructions: &str,
    ) -> Result<RunOutcome, SessionError> {
        if self.aborted {
            return Err(SessionError::Aborted);
        }
        let result = self.run_robot(pose_line, instructions);
        self.record(line, result)
    }

    /// Like [`submit_at`](Self::submit_at), numbering robots in submission order.
    pub fn submit(
        &mut self,
        pose_line: &str,
        instructions: &str,
    ) -> Result<RunOutcome, SessionError> {
        let line = self.robots.len() + 1;
        self.submit_at(line, pose_line, instructions)
    }

    /// Closes the session and hands back every recorded robot, in submission order.
    pub fn into_report(self) -> SessionReport {
        SessionReport {
            bounds: self.engine.bounds(),
            robots: self.robots,
            aborted: self.aborted,
        }
    }

    fn run_robot(
        &mut self,
        pose_line: &str,
        instructions: &str,
    ) -> Result<RunOutcome, SessionError> {
        let start = validation::parse_robot_line(pose_line, self.engine.bounds())?;
        validation::validate_instructions(instructions)?;
        Ok(self.engine.run(start, instructions)?)
    }

    fn record(
        &mut self,
        line: usize,
        result: Result<RunOutcome, SessionError>,
    ) -> Result<RunOutcome, SessionError> {
        let entry = match &result {
            Ok(outcome) => RobotResult::Outcome(*outcome),
            Err(err) => {
                match self.policy {
                    ErrorPolicy::Abort => self.aborted = true,
                    ErrorPolicy::SkipRobot => warn!(line, error = %err, "skipping robot"),
                }
                RobotResult::Error(err.to_string())
            }
        };
        self.robots.push(RobotReport { line, result: entry });
        result
    }
}

/// Runs every robot in `script` against a single world.
///
/// # Errors
///
/// Fails only when the world line is missing or invalid. Robot failures end up in the
/// returned report, and under [`ErrorPolicy::Abort`] stop further robots from running.
pub fn run_script(script: &str, policy: ErrorPolicy) -> Result<SessionReport, SessionError> {
    let mut lines = script
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, world_line) = lines.next().ok_or(SessionError::MissingWorld)?;
    let bounds = validation::parse_world_line(world_line)?;
    debug!(?bounds, "world created");

    let mut session = Session::new(bounds, policy);

    while let Some((line, pose_line)) = lines.next() {
        if session.is_aborted() {
            break;
        }
        let result = match lines.next() {
            Some((_, instructions)) => session.submit_at(line, pose_line, instructions),
            None => {
                let missing = Err(SessionError::MissingInstructions { line });
                session.record(line, missing)
            }
        };
        if let Err(err) = result {
            debug!(line, error = %err, "robot recorded as failed");
        }
    }

    Ok(session.into_report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{Orientation, Pose};

    #[test]
    fn submit_numbers_robots_in_order() {
        let mut session = Session::new(Bounds::new(2, 2), ErrorPolicy::SkipRobot);
        session.submit("1 1 E", "FF").unwrap();
        session.submit("1 1 E", "FF").unwrap();
        let report = session.into_report();
        assert_eq!(report.robots[0].line, 1);
        assert_eq!(report.robots[1].line, 2);
        assert_eq!(
            report.robots[1].result,
            RobotResult::Outcome(RunOutcome {
                pose: Pose::new(2, 1, Orientation::East),
                lost: false,
            })
        );
    }

    #[test]
    fn abort_policy_closes_session() {
        let mut session = Session::new(Bounds::new(2, 2), ErrorPolicy::Abort);
        assert!(session.submit("1 1 E", "X").is_err());
        assert!(session.is_aborted());
        assert_eq!(session.submit("1 1 E", "F"), Err(SessionError::Aborted));

        let report = session.into_report();
        assert!(report.aborted);
        assert_eq!(report.robots.len(), 1);
    }

    #[test]
    fn overlong_instructions_are_rejected_before_running() {
        let mut session = Session::new(Bounds::new(2, 2), ErrorPolicy::SkipRobot);
        let err = session.submit("2 2 N", &"F".repeat(101)).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::InvalidInstructionLength { length: 101 })
        ));
        // The robot never ran, so a later robot still falls from (2, 2).
        assert!(session.submit("2 2 N", "F").unwrap().lost);
    }

    #[test]
    fn missing_world_line() {
        assert_eq!(run_script("\n  \n", ErrorPolicy::Abort), Err(SessionError::MissingWorld));
    }

    #[test]
    fn dangling_pose_line_is_reported() {
        let report = run_script("2 2\n1 1 E\n", ErrorPolicy::SkipRobot).unwrap();
        assert_eq!(report.robots.len(), 1);
        assert_eq!(report.robots[0].line, 2);
        assert!(matches!(report.robots[0].result, RobotResult::Error(_)));
    }
}
