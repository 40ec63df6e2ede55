//! Axis-aligned 2D shapes and an ASCII scene renderer.
//!
//! Layout
//! - `shape`: points, axis-aligned segments, rectangles, circles behind the
//!   shared `Figure` capability set and the closed `Shape` enum.
//! - `scene`: ordered collection of shared shapes plus depth-filtered
//!   rasterization into a fixed character canvas.
//! - `rand`: seeded random scenes for benches and the demo driver.
//!
//! Conventions
//! - Coordinates are `f64` stored as `nalgebra::Vector2`.
//! - Every validation failure is an `InvalidArgument`; nothing panics on bad input.

pub mod error;
pub mod rand;
pub mod scene;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{InvalidArgument, ShapeResult};
pub use nalgebra::Vector2 as Vec2;
pub use scene::{DrawDepth, RenderCfg, Scene, HEIGHT, WIDTH};
pub use shape::{
    Circle, Figure, LineSegment, Planar, Point, Rectangle, Shape, ShapeKind, SharedShape,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{InvalidArgument, ShapeResult};
    pub use crate::rand::{random_scene, random_shape, RandomSceneCfg};
    pub use crate::scene::{DrawDepth, RenderCfg, Scene, HEIGHT, WIDTH};
    pub use crate::shape::{
        Circle, Figure, LineSegment, Planar, Point, Rectangle, Shape, ShapeKind, SharedShape,
    };
    pub use nalgebra::Vector2 as Vec2;
}
