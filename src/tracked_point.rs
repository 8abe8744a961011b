//! Consumer-facing wrapper around a [`VelocityEstimator`].
//!
//! A `TrackedPoint` is created from the first observation of a pointer and
//! fed every subsequent sample. Rendering layers read the public fields
//! after each call; they never drive the filter directly.

use crate::filter::VelocityEstimator;
use crate::Result;

/// A single tracked 2D point with smoothed position and velocity.
///
/// The position/velocity fields mirror the filter's state estimate, while
/// `distance_traveled` accumulates displacement between the raw observations
/// themselves, independent of filter smoothing.
#[derive(Clone, Debug)]
pub struct TrackedPoint {
    /// Smoothed position estimate, x axis.
    pub x: f64,

    /// Smoothed position estimate, y axis.
    pub y: f64,

    /// Smoothed velocity estimate, x axis (pixels per filter time step).
    pub vx: f64,

    /// Smoothed velocity estimate, y axis (pixels per filter time step).
    pub vy: f64,

    /// Total raw Euclidean distance covered by the observation sequence.
    /// Monotonically non-decreasing, never reset.
    pub distance_traveled: f64,

    /// The filter maintaining this point's state.
    filter: VelocityEstimator,

    /// Last raw observation, kept separate from the smoothed fields so
    /// distance accounting is exact.
    last_observation: (f64, f64),
}

impl TrackedPoint {
    /// Start tracking at an initial observed position.
    ///
    /// The seed observation goes straight into the filter's zero-velocity,
    /// high-uncertainty prior with no preceding predict step, so the
    /// posterior position lands essentially on `(x0, y0)` with zero
    /// velocity.
    ///
    /// # Errors
    /// [`crate::Error::NonFiniteObservation`] if either coordinate is NaN
    /// or infinite.
    pub fn new(x0: f64, y0: f64) -> Result<Self> {
        let mut filter = VelocityEstimator::new();
        let state = filter.update(x0, y0)?;

        Ok(Self {
            x: state[0],
            y: state[1],
            vx: state[2],
            vy: state[3],
            distance_traveled: 0.0,
            filter,
            last_observation: (x0, y0),
        })
    }

    /// Fold a new raw position sample into the track.
    ///
    /// Runs one predict-then-update cycle, unconditionally, then refreshes
    /// the public fields and adds the raw displacement since the previous
    /// observation to `distance_traveled`.
    ///
    /// # Errors
    /// Fails without mutating any field if the observation is non-finite or
    /// the filter's innovation covariance degenerates.
    pub fn update_position(&mut self, x: f64, y: f64) -> Result<()> {
        // Validate before predict() so a rejected sample leaves the filter
        // state untouched as well
        if !x.is_finite() || !y.is_finite() {
            return Err(crate::Error::NonFiniteObservation { x, y });
        }

        self.filter.predict();
        let state = self.filter.update(x, y)?;

        self.x = state[0];
        self.y = state[1];
        self.vx = state[2];
        self.vy = state[3];

        let (px, py) = self.last_observation;
        self.distance_traveled += (x - px).hypot(y - py);
        self.last_observation = (x, y);

        Ok(())
    }

    /// Velocity magnitude (pixels per filter time step).
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Access the underlying estimator (read-only).
    pub fn estimator(&self) -> &VelocityEstimator {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tracked_point_seed() {
        let point = TrackedPoint::new(120.0, 340.0).unwrap();

        assert_relative_eq!(point.x, 120.0, max_relative = 0.02);
        assert_relative_eq!(point.y, 340.0, max_relative = 0.02);
        assert_relative_eq!(point.vx, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point.vy, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point.distance_traveled, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tracked_point_single_move() {
        let mut point = TrackedPoint::new(0.0, 0.0).unwrap();
        point.update_position(10.0, 0.0).unwrap();

        // Filter infers rightward motion from one displaced sample
        assert!(point.vx > 0.0, "vx should be positive, got {}", point.vx);
        assert!(point.x > 5.0 && point.x <= 10.0);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(point.distance_traveled, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tracked_point_distance_uses_raw_observations() {
        let mut point = TrackedPoint::new(0.0, 0.0).unwrap();

        // 3-4-5 triangle legs; raw displacements sum exactly
        point.update_position(3.0, 0.0).unwrap();
        point.update_position(3.0, 4.0).unwrap();
        assert_relative_eq!(point.distance_traveled, 7.0, epsilon = 1e-12);

        // Back to the start still adds distance
        point.update_position(0.0, 0.0).unwrap();
        assert_relative_eq!(point.distance_traveled, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tracked_point_rejects_non_finite() {
        let mut point = TrackedPoint::new(5.0, 5.0).unwrap();
        point.update_position(6.0, 5.0).unwrap();
        let snapshot = point.clone();

        assert!(point.update_position(f64::NAN, 5.0).is_err());
        assert!(point.update_position(5.0, f64::INFINITY).is_err());

        // Failed calls leave every field untouched
        assert_eq!(point.x, snapshot.x);
        assert_eq!(point.y, snapshot.y);
        assert_eq!(point.vx, snapshot.vx);
        assert_eq!(point.vy, snapshot.vy);
        assert_eq!(point.distance_traveled, snapshot.distance_traveled);
    }

    #[test]
    fn test_tracked_point_seed_rejects_non_finite() {
        assert!(TrackedPoint::new(f64::NAN, 0.0).is_err());
        assert!(TrackedPoint::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_tracked_point_speed() {
        let mut point = TrackedPoint::new(0.0, 0.0).unwrap();
        point.update_position(3.0, 4.0).unwrap();

        assert_relative_eq!(
            point.speed(),
            point.vx.hypot(point.vy),
            epsilon = 1e-12
        );
        assert!(point.speed() > 0.0);
    }
}
