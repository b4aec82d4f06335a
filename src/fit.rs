//! Auto-fit projection of path coordinates onto a fixed size canvas.

use super::bounds::BoundingBox;
use super::point::Point;
use super::NativeFloat;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        CanvasSize { width, height }
    }

    pub fn center(&self) -> (NativeFloat, NativeFloat) {
        (self.width as NativeFloat / 2.0, self.height as NativeFloat / 2.0)
    }
}

/// Uniform scale plus translation mapping path space into canvas space:
/// `canvas = (data - data_center) * scale + canvas_center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitTransform {
    pub scale: NativeFloat,
    pub data_center: (NativeFloat, NativeFloat),
    pub canvas_center: (NativeFloat, NativeFloat),
}

impl FitTransform {
    pub fn apply(&self, p: Point) -> (NativeFloat, NativeFloat) {
        (
            (p.x as NativeFloat - self.data_center.0) * self.scale + self.canvas_center.0,
            (p.y as NativeFloat - self.data_center.1) * self.scale + self.canvas_center.1,
        )
    }

    /// Map to integer pixel coordinates of the canvas.
    pub fn apply_pixel(&self, p: Point) -> (i32, i32) {
        let (x, y) = self.apply(p);
        (x.round() as i32, y.round() as i32)
    }
}

/// Scale that fits a `data_width` x `data_height` box into `drawable_width` x `drawable_height`
/// without distorting it. Axes with zero extent are ignored; if both are zero the scale is 1.
pub fn fit_scale(
    data_width: NativeFloat,
    data_height: NativeFloat,
    drawable_width: NativeFloat,
    drawable_height: NativeFloat,
) -> NativeFloat {
    match (data_width > 0.0, data_height > 0.0) {
        (true, true) => (drawable_width / data_width).min(drawable_height / data_height),
        (true, false) => drawable_width / data_width,
        (false, true) => drawable_height / data_height,
        (false, false) => 1.0,
    }
}

/// Compute the transform that centers the bounding box of `path` on the canvas and
/// scales it to fill the canvas minus `padding` on every side.
/// Returns None for an empty path.
pub fn compute_fit(path: &[Point], canvas: CanvasSize, padding: NativeFloat) -> Option<FitTransform> {
    let bounds = BoundingBox::of(path.iter().copied())?;
    Some(fit_bounds(&bounds, canvas, padding))
}

pub fn fit_bounds(bounds: &BoundingBox, canvas: CanvasSize, padding: NativeFloat) -> FitTransform {
    let drawable_width = canvas.width as NativeFloat - 2.0 * padding;
    let drawable_height = canvas.height as NativeFloat - 2.0 * padding;

    FitTransform {
        scale: fit_scale(bounds.width(), bounds.height(), drawable_width, drawable_height),
        data_center: bounds.center(),
        canvas_center: canvas.center(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CANVAS: CanvasSize = CanvasSize::new(1000, 1000);

    #[test]
    fn single_point_is_centered_unscaled() {
        let path = [Point::new(37, -12); 3];
        let fit = compute_fit(&path, CANVAS, 50.0).unwrap();
        assert_eq!(fit.scale, 1.0);
        assert_eq!(fit.apply(path[0]), (500.0, 500.0));
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let path = [Point::new(100, 300), Point::new(300, 400)];
        let fit = compute_fit(&path, CANVAS, 50.0).unwrap();
        // drawable 900x900, data 200x100
        assert_relative_eq!(fit.scale, 4.5);
        assert_eq!(fit.data_center, (200.0, 350.0));

        let (x0, y0) = fit.apply(path[0]);
        let (x1, y1) = fit.apply(path[1]);
        assert_relative_eq!(x0, 50.0);
        assert_relative_eq!(x1, 950.0);
        assert_relative_eq!(y0, 275.0);
        assert_relative_eq!(y1, 725.0);
    }

    #[test]
    fn degenerate_line_scales_by_its_axis() {
        let horizontal = [Point::new(0, 10), Point::new(300, 10)];
        let fit = compute_fit(&horizontal, CANVAS, 50.0).unwrap();
        assert_relative_eq!(fit.scale, 3.0);

        let vertical = [Point::new(4, 0), Point::new(4, 90)];
        let fit = compute_fit(&vertical, CanvasSize::new(800, 500), 25.0).unwrap();
        assert_relative_eq!(fit.scale, 5.0);
        assert_eq!(fit.apply_pixel(vertical[1]), (400, 475));
    }

    #[test]
    fn empty_path_has_no_fit() {
        assert!(compute_fit(&[], CANVAS, 50.0).is_none());
    }
}
