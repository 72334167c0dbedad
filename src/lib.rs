//! # mars-robots
//!
//! Simulates robots exploring a rectangular plateau on Mars.
//!
//! Each robot starts from a pose and follows a string of `L`, `R` and `F`
//! instructions. A robot that steps off the edge is lost, but it leaves a *scent*
//! on the last point it stood on, and every robot run afterwards on the same
//! [`MarsEngine`] ignores a forward move off the grid from a scented point.
//!
//! ```
//! use mars_robots::{Bounds, MarsEngine, Orientation, Pose};
//!
//! let mut engine = MarsEngine::new(Bounds::new(2, 2));
//! let first = engine.run(Pose::new(1, 1, Orientation::East), "FF").unwrap();
//! let second = engine.run(Pose::new(1, 1, Orientation::East), "FF").unwrap();
//! assert!(first.lost);
//! assert!(!second.lost);
//! ```

pub mod engine;
pub mod grid;
pub mod robot;
pub mod session;
pub mod validation;

pub use engine::*;
pub use grid::*;
pub use robot::*;
pub use session::*;
pub use validation::*;
