//! Synthesis of human-like 2D pointer trajectories.
//!
//! A trained model proposes a handful of noisy control points between a start
//! and an end point ([`Synthesizer`]), a uniform Catmull-Rom spline turns them
//! into a smooth, densely sampled path ([`densify`]) and [`compute_fit`] maps
//! the result onto a fixed size canvas for inspection.
//!
//! The model is abstracted behind the [`Predictor`] trait and randomness is
//! injected as any [`rand::Rng`], so the whole pipeline runs deterministically
//! with a stub predictor and a seeded generator:
//!
//! ```rust
//! use pathsynth::{GeneratorConfig, ModelInput, Point, PredictorError, TrajectoryGenerator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut predictor = |_: &ModelInput| -> Result<Vec<f32>, PredictorError> {
//!     Ok(vec![0.2, 0.4, 0.5, 0.6])
//! };
//! let generator = TrajectoryGenerator::new(&GeneratorConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let trajectory = generator
//!     .generate(Point::new(0, 0), Point::new(100, 100), &mut predictor, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(trajectory.path[0], Point::new(0, 0));
//! assert_eq!(trajectory.path.last(), Some(&Point::new(100, 100)));
//! ```

// Floating point type used for spline evaluation and canvas projection
pub type NativeFloat = f64;

pub mod bounds;
pub mod catmull_rom;
pub mod config;
pub mod control_points;
pub mod dense_path;
pub mod densify;
pub mod error;
pub mod fit;
pub mod normalize;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod point;
pub mod point2;
pub mod predictor;
#[cfg(feature = "render")]
pub mod render;
pub mod spline;
pub mod synthesizer;
pub mod trajectory;

pub use bounds::BoundingBox;
pub use catmull_rom::CatmullRom;
pub use config::{GeneratorConfig, RenderConfig};
pub use control_points::ControlPoints;
pub use dense_path::DensePath;
pub use densify::{densify, try_densify};
pub use error::TrajectoryError;
pub use fit::{compute_fit, CanvasSize, FitTransform};
pub use normalize::{ModelInput, Normalization};
#[cfg(feature = "onnx")]
pub use onnx::OnnxPredictor;
pub use point::Point;
pub use point2::Point2;
pub use predictor::{Predictor, PredictorError};
#[cfg(feature = "render")]
pub use render::render_path;
pub use spline::Spline;
pub use synthesizer::Synthesizer;
pub use trajectory::{Trajectory, TrajectoryGenerator};
