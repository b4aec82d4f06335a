//! In-memory settings for generation and rendering. There is no configuration
//! file; the binary fills these from its command line.

use super::error::TrajectoryError;
use super::fit::CanvasSize;
use super::synthesizer::DEFAULT_TOLERANCE;
use super::NativeFloat;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Jitter amplitude added to each model input coordinate.
    pub randomness: f64,
    /// Interpolated samples per control point segment.
    pub points_per_segment: usize,
    /// Per-axis distance to the end point at which prediction stops.
    pub tolerance: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            randomness: 1.5,
            points_per_segment: 5,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if !self.randomness.is_finite() || self.randomness < 0.0 {
            return Err(TrajectoryError::InvalidRandomness(self.randomness));
        }
        if self.points_per_segment == 0 {
            return Err(TrajectoryError::InvalidConfig(
                "points per segment must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// RGB colour.
pub type Rgb = (u8, u8, u8);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    pub canvas: CanvasSize,
    pub padding: NativeFloat,
    /// Mark every n-th vertex; None disables markers.
    pub marker_every: Option<usize>,
    /// Marker radius in path units, scaled with the fit like the line.
    pub marker_radius: NativeFloat,
    pub background: Rgb,
    pub line: Rgb,
    pub marker: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            canvas: CanvasSize::new(1000, 1000),
            padding: 50.0,
            marker_every: Some(4),
            marker_radius: 2.5,
            background: (0, 0, 0),
            line: (255, 255, 255),
            marker: (255, 0, 0),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        let invalid = |msg: String| Err(TrajectoryError::InvalidConfig(msg));
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return invalid(format!(
                "canvas {}x{} has no area",
                self.canvas.width, self.canvas.height
            ));
        }
        let min_side = self.canvas.width.min(self.canvas.height) as NativeFloat;
        if !self.padding.is_finite() || self.padding < 0.0 || 2.0 * self.padding >= min_side {
            return invalid(format!(
                "padding {} leaves no drawable area on a {}x{} canvas",
                self.padding, self.canvas.width, self.canvas.height
            ));
        }
        if self.marker_every == Some(0) {
            return invalid("marker interval must be at least 1".to_owned());
        }
        if !self.marker_radius.is_finite() || self.marker_radius < 0.0 {
            return invalid(format!("marker radius {} must be >= 0", self.marker_radius));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_generator_settings() {
        let config = GeneratorConfig {
            points_per_segment: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(TrajectoryError::InvalidConfig(_))));

        let config = GeneratorConfig {
            randomness: -1.0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(TrajectoryError::InvalidRandomness(_))));
    }

    #[test]
    fn rejects_bad_render_settings() {
        let base = RenderConfig::default();
        let cases = [
            RenderConfig { padding: 500.0, ..base },
            RenderConfig { padding: -1.0, ..base },
            RenderConfig { canvas: CanvasSize::new(0, 100), ..base },
            RenderConfig { marker_every: Some(0), ..base },
            RenderConfig { marker_radius: f64::NAN, ..base },
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(TrajectoryError::InvalidConfig(_))));
        }
        assert!(RenderConfig { marker_every: None, ..base }.validate().is_ok());
    }
}
