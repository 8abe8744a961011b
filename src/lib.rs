//! # Pointer Velocity - Kalman-Filtered 2D Velocity Estimation
//!
//! A small library for converting noisy, irregularly-timed 2D position
//! samples (e.g. mouse-pointer events) into a smoothed position-and-velocity
//! estimate.
//!
//! ## Features
//!
//! - Fixed-topology constant-velocity Kalman filter (4 states, 2 observed
//!   dimensions), allocation-free over statically-sized matrices
//! - Tracked-point wrapper with raw-observation distance accounting
//! - Bounded velocity history for plotting/telemetry consumers
//!
//! ## Example
//!
//! ```rust
//! use pointer_velocity::TrackedPoint;
//!
//! // Seed tracking at the first observed position
//! let mut pointer = TrackedPoint::new(0.0, 0.0).unwrap();
//!
//! // Feed each subsequent position sample
//! pointer.update_position(10.0, 0.0).unwrap();
//!
//! // Read back the smoothed estimate
//! assert!(pointer.vx > 0.0);
//! assert!((pointer.distance_traveled - 10.0).abs() < 1e-12);
//! ```
//!
//! The estimator is synchronous and single-threaded: callers feeding it from
//! concurrent event sources must serialize calls per tracked point (e.g. a
//! mutex held across each `update_position`).

// Public modules
pub mod filter;
pub mod tracked_point;
pub mod trace;

// Re-exports for convenience
pub use filter::VelocityEstimator;
pub use tracked_point::TrackedPoint;
pub use trace::{TraceSample, VelocityTrace};

// Error types
pub use crate::error::{Error, Result};

mod error {
    use thiserror::Error;

    /// Errors that can occur during velocity estimation
    #[derive(Error, Debug, Clone, Copy, PartialEq)]
    pub enum Error {
        #[error("Non-finite observation coordinates: ({x}, {y})")]
        NonFiniteObservation { x: f64, y: f64 },

        #[error("Innovation covariance is singular (det = {det:e})")]
        SingularInnovation { det: f64 },
    }

    /// Result type for estimator operations
    pub type Result<T> = std::result::Result<T, Error>;
}
