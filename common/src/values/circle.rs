use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::error::PrimerError;

/// A circle with a strictly positive integer radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    radius: i32,
}

impl Circle {
    /// Creates a circle, rejecting any radius that is not bigger than 0.
    pub fn new(radius: i32) -> Result<Self, PrimerError> {
        if radius <= 0 {
            warn!(radius, "rejected circle radius");
            return Err(PrimerError::NonPositiveRadius(radius));
        }
        debug!(radius, "circle created");
        Ok(Self { radius })
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Widened so that `2 * i32::MAX` fits.
    pub fn diameter(&self) -> i64 {
        i64::from(self.radius) * 2
    }

    pub fn circumference(&self) -> f64 {
        f64::from(self.radius) * PI * 2.0
    }

    pub fn area(&self) -> f64 {
        f64::from(self.radius).powi(2) * PI
    }
}

impl TryFrom<i32> for Circle {
    type Error = PrimerError;

    fn try_from(radius: i32) -> Result<Self, Self::Error> {
        Circle::new(radius)
    }
}
