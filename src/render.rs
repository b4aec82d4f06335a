//! Raster rendering of a path into a png, auto-fitted to the canvas.

use std::path::Path;

use log::info;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use super::config::{RenderConfig, Rgb};
use super::error::TrajectoryError;
use super::fit::{compute_fit, FitTransform};
use super::point::Point;

fn color((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

/// Vertices that receive a marker: every `every`-th segment start.
pub fn marker_indices(len: usize, every: Option<usize>) -> impl Iterator<Item = usize> {
    let step = every.unwrap_or(0);
    let count = if step == 0 { 0 } else { len.saturating_sub(1) };
    (0..count).step_by(step.max(1))
}

/// Marker radius in canvas pixels for a radius given in path units.
pub fn marker_radius_px(radius: f64, scale: f64) -> u32 {
    (radius * scale).round().max(1.0) as u32
}

/// Draw `path` as a polyline into the png at `out`.
/// Returns the transform used, or an error if the path is empty or drawing fails.
pub fn render_path(
    path: &[Point],
    out: &Path,
    config: &RenderConfig,
) -> Result<FitTransform, TrajectoryError> {
    config.validate()?;
    let fit = compute_fit(path, config.canvas, config.padding)
        .ok_or_else(|| TrajectoryError::Render("no points to render".to_owned()))?;

    let draw_err = |e: DrawingAreaErrorKind<_>| TrajectoryError::Render(e.to_string());

    let root = BitMapBackend::new(out, (config.canvas.width, config.canvas.height))
        .into_drawing_area();
    root.fill(&color(config.background)).map_err(draw_err)?;

    let pixels: Vec<(i32, i32)> = path.iter().map(|&p| fit.apply_pixel(p)).collect();
    root.draw(&PathElement::new(
        pixels.clone(),
        color(config.line).stroke_width(1),
    ))
    .map_err(draw_err)?;

    let radius = marker_radius_px(config.marker_radius, fit.scale);
    for i in marker_indices(pixels.len(), config.marker_every) {
        root.draw(&Circle::new(
            pixels[i],
            radius,
            color(config.marker).filled(),
        ))
        .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    info!("rendered {} points to {}", path.len(), out.display());
    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_on_every_nth_segment_start() {
        let idx: Vec<_> = marker_indices(10, Some(4)).collect();
        assert_eq!(idx, vec![0, 4, 8]);
        let idx: Vec<_> = marker_indices(9, Some(4)).collect();
        assert_eq!(idx, vec![0, 4]);
        assert_eq!(marker_indices(10, None).count(), 0);
        assert_eq!(marker_indices(10, Some(0)).count(), 0);
        assert_eq!(marker_indices(1, Some(1)).count(), 0);
    }

    #[test]
    fn marker_scales_with_fit() {
        assert_eq!(marker_radius_px(2.5, 1.0), 3);
        assert_eq!(marker_radius_px(2.5, 4.5), 11);
        assert_eq!(marker_radius_px(2.5, 0.01), 1);
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let out = std::env::temp_dir().join("pathsynth-invalid.png");
        let config = RenderConfig {
            padding: 600.0,
            ..RenderConfig::default()
        };
        let err = render_path(&[Point::new(1, 1)], &out, &config).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidConfig(_)));
    }

    #[test]
    fn empty_path_is_an_error() {
        let out = std::env::temp_dir().join("pathsynth-empty.png");
        let err = render_path(&[], &out, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, TrajectoryError::Render(_)));
    }
}
