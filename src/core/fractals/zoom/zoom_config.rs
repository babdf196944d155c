use crate::core::data::complex::Complex;

pub const DEFAULT_CENTER: Complex = Complex::new(0.23701, 0.521);
pub const DEFAULT_BASE_DELTA: f64 = 0.001;
pub const ZOOM_DECAY: f64 = 0.98;

/// Where the animation zooms to and how fast. Fixed for the duration of a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomConfig {
    /// The plane point every frame is centred on.
    pub center: Complex,
    /// Half the visible plane height in frame 0.
    pub base_delta: f64,
    /// Per-frame multiplier applied to the half-height.
    pub decay: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            base_delta: DEFAULT_BASE_DELTA,
            decay: ZOOM_DECAY,
        }
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn with_center(self, center: Complex) -> Self {
        Self { center, ..self }
    }

    #[must_use]
    pub fn with_base_delta(self, base_delta: f64) -> Self {
        Self { base_delta, ..self }
    }

    /// Half-height of the visible plane in `frame`.
    #[must_use]
    pub fn delta(&self, frame: usize) -> f64 {
        let exponent = i32::try_from(frame).unwrap_or(i32::MAX);
        self.base_delta * self.decay.powi(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ZoomConfig::default();

        assert_eq!(config.center, Complex::new(0.23701, 0.521));
        assert_eq!(config.base_delta, 0.001);
        assert_eq!(config.decay, 0.98);
    }

    #[test]
    fn test_delta_at_frame_zero_is_base_delta() {
        assert_eq!(ZoomConfig::default().delta(0), DEFAULT_BASE_DELTA);
    }

    #[test]
    fn test_delta_at_frame_one_decays_once() {
        assert_eq!(ZoomConfig::default().delta(1), DEFAULT_BASE_DELTA * 0.98);
    }

    #[test]
    fn test_delta_is_positive_and_strictly_decreasing() {
        let config = ZoomConfig::default();

        for frame in 0..1000 {
            let current = config.delta(frame);
            let next = config.delta(frame + 1);
            assert!(current > 0.0, "delta({frame}) = {current}");
            assert!(next < current, "delta({}) = {next} >= {current}", frame + 1);
        }
    }

    #[test]
    fn test_builders_override_single_fields() {
        let config = ZoomConfig::default()
            .with_center(Complex::new(-0.75, 0.1))
            .with_base_delta(1.5);

        assert_eq!(config.center, Complex::new(-0.75, 0.1));
        assert_eq!(config.base_delta, 1.5);
        assert_eq!(config.decay, ZOOM_DECAY);
    }
}
