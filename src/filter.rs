//! Constant-velocity Kalman filter over a fixed 4-dimensional state.
//!
//! The state vector is `[px, py, vx, vy]` and only position is observed.
//! All matrices are statically sized, so predict/update never allocate and
//! every operation completes in bounded, input-independent time.

use nalgebra::{Matrix2, Matrix2x4, Matrix4, Vector2, Vector4};

use crate::{Error, Result};

/// Fixed time step encoded into the state transition matrix.
///
/// Observations are assumed to arrive roughly this far apart; wall-clock
/// deltas between events are deliberately not measured, so velocities are in
/// units of pixels per `dt`, not pixels per real second.
pub const DEFAULT_DT: f64 = 0.2;

/// Measurement noise variance per axis. Larger than typical pixel jitter,
/// biasing the filter toward its own motion model over raw samples.
pub const DEFAULT_R: f64 = 5.0;

/// Process noise variance per state dimension. Bounds how quickly the filter
/// can follow sudden direction changes.
pub const DEFAULT_Q: f64 = 0.5;

/// Initial variance on every state dimension (high uncertainty prior).
pub const DEFAULT_P: f64 = 500.0;

/// Determinant magnitudes below this are treated as a singular innovation
/// covariance rather than propagated as NaN/Inf.
const DET_EPSILON: f64 = 1e-12;

/// Constant-velocity Kalman filter for a single 2D point.
///
/// The model topology never varies at runtime: 4 state dimensions, 2
/// measured dimensions, position advanced by velocity over a fixed `dt`.
/// `F`, `H`, `Q`, `R` and `dt` are immutable after construction.
#[derive(Clone, Debug)]
pub struct VelocityEstimator {
    /// State vector [px, py, vx, vy]
    x: Vector4<f64>,
    /// State covariance matrix
    p: Matrix4<f64>,
    /// State transition matrix (constant velocity model)
    f: Matrix4<f64>,
    /// Measurement matrix (observe position only)
    h: Matrix2x4<f64>,
    /// Process noise covariance
    q: Matrix4<f64>,
    /// Measurement noise covariance
    r: Matrix2<f64>,
    /// Time step baked into `f`
    dt: f64,
}

impl VelocityEstimator {
    /// Create an estimator with the default noise model.
    ///
    /// State starts at zero with high uncertainty (`P = 500 * I`).
    pub fn new() -> Self {
        Self::with_noise(DEFAULT_DT, DEFAULT_R, DEFAULT_Q, DEFAULT_P)
    }

    /// Create an estimator with explicit noise parameters.
    ///
    /// # Arguments
    /// * `dt` - Fixed time step encoded into the transition matrix
    /// * `r` - Measurement noise variance per axis
    /// * `q` - Process noise variance per state dimension
    /// * `p0` - Initial variance per state dimension
    pub fn with_noise(dt: f64, r: f64, q: f64, p0: f64) -> Self {
        // F: identity plus position-from-velocity coupling
        let mut f = Matrix4::identity();
        f[(0, 2)] = dt;
        f[(1, 3)] = dt;

        let h = Matrix2x4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0,
        );

        Self {
            x: Vector4::zeros(),
            p: Matrix4::identity() * p0,
            f,
            h,
            q: Matrix4::identity() * q,
            r: Matrix2::identity() * r,
            dt,
        }
    }

    /// Advance the state one fixed time step without a measurement.
    ///
    /// Returns the predicted position. Mutates `x` and `P` in place and
    /// never fails.
    pub fn predict(&mut self) -> (f64, f64) {
        // x = F @ x
        self.x = self.f * self.x;

        // P = F @ P @ F.T + Q
        self.p = self.f * self.p * self.f.transpose() + self.q;

        (self.x[0], self.x[1])
    }

    /// Fold a position observation into the state.
    ///
    /// Returns the full posterior state vector `[px, py, vx, vy]`.
    ///
    /// # Errors
    /// * [`Error::NonFiniteObservation`] if either coordinate is NaN or
    ///   infinite
    /// * [`Error::SingularInnovation`] if the innovation covariance cannot
    ///   be inverted (unreachable with a positive `R`, but guarded)
    ///
    /// Both checks run before any mutation: a failed update leaves `x` and
    /// `P` exactly as they were.
    pub fn update(&mut self, zx: f64, zy: f64) -> Result<Vector4<f64>> {
        if !zx.is_finite() || !zy.is_finite() {
            return Err(Error::NonFiniteObservation { x: zx, y: zy });
        }

        let z = Vector2::new(zx, zy);

        // y = z - H @ x (innovation)
        let y = z - self.h * self.x;

        // S = H @ P @ H.T + R (innovation covariance)
        let s = self.h * self.p * self.h.transpose() + self.r;
        let si = invert_2x2(&s)?;

        // K = P @ H.T @ S^-1 (Kalman gain)
        let k = self.p * self.h.transpose() * si;

        // x = x + K @ y
        self.x += k * y;

        // P = (I - K @ H) @ P
        self.p = (Matrix4::identity() - k * self.h) * self.p;

        Ok(self.x)
    }

    /// Get the full state vector [px, py, vx, vy].
    pub fn state_vector(&self) -> &Vector4<f64> {
        &self.x
    }

    /// Get the current position estimate.
    pub fn position(&self) -> (f64, f64) {
        (self.x[0], self.x[1])
    }

    /// Get the current velocity estimate (pixels per `dt`).
    pub fn velocity(&self) -> (f64, f64) {
        (self.x[2], self.x[3])
    }

    /// Get the state covariance.
    pub fn covariance(&self) -> &Matrix4<f64> {
        &self.p
    }

    /// Get the fixed time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed-form 2x2 inverse with a determinant guard.
fn invert_2x2(m: &Matrix2<f64>) -> Result<Matrix2<f64>> {
    let det = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
    if det.abs() < DET_EPSILON {
        return Err(Error::SingularInnovation { det });
    }
    Ok(Matrix2::new(
        m[(1, 1)], -m[(0, 1)], //
        -m[(1, 0)], m[(0, 0)],
    ) / det)
}
