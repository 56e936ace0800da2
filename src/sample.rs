//! Raw and smoothed acceleration values.

/// One raw accelerometer delivery, gravity included, in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    /// A sample with all axes at rest.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Builds a sample from per-axis readings, substituting zero for any
    /// axis the sensor did not report.
    pub fn from_axes(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self {
            x: x.unwrap_or(0.0),
            y: y.unwrap_or(0.0),
            z: z.unwrap_or(0.0),
        }
    }

    /// Euclidean magnitude of the acceleration vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Componentwise mean over the retained sample window, in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AveragedReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AveragedReading {
    /// The reading reported before any sample has arrived.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean magnitude of the averaged vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_axes_default_to_zero() {
        let sample = Sample::from_axes(Some(1.5), None, Some(-9.81));
        assert_eq!(sample, Sample::new(1.5, 0.0, -9.81));
    }

    #[test]
    fn fully_absent_reading_is_zero() {
        assert_eq!(Sample::from_axes(None, None, None), Sample::ZERO);
    }

    #[test]
    fn sample_magnitude() {
        let sample = Sample::new(3.0, 4.0, 0.0);
        assert!((sample.magnitude() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_reading_has_zero_magnitude() {
        assert_eq!(AveragedReading::ZERO.magnitude(), 0.0);
    }
}
