//! Shape kinds and their shared capability set.
//!
//! Purpose
//! - `Figure` is the common interface: depth tag, dimension, rigid motion
//!   (translate), the axis-preserving quarter turn (rotate), uniform scaling
//!   about the shape's centre, and closed point containment.
//! - `Shape` is the closed sum over the four kinds; the scene stores
//!   `SharedShape` handles so callers can keep mutating what they registered.
//!
//! Rotation model
//! - Segments and rectangles stay axis-aligned. `rotate` is a 90° turn about
//!   the centre, which for these shapes reduces to swapping the extents; no
//!   trigonometry is involved.

mod circle;
mod point;
mod rect;
mod segment;

pub use circle::Circle;
pub use point::Point;
pub use rect::Rectangle;
pub use segment::LineSegment;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::ShapeResult;

/// Shared, mutable shape handle (scene plus external callers).
pub type SharedShape = Rc<RefCell<Shape>>;

/// Capability set shared by every shape kind.
pub trait Figure {
    fn depth(&self) -> u32;
    /// Set the depth tag. Negative input is rejected and leaves the depth unchanged.
    fn set_depth(&mut self, depth: i32) -> ShapeResult<()>;
    /// Topological dimension: 0 point, 1 segment, 2 rectangle/circle.
    fn dim(&self) -> u8;
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self);
    /// Scale about the centre. `factor <= 0` is rejected and leaves the shape unchanged.
    fn scale(&mut self, factor: f64) -> ShapeResult<()>;
    /// Closed containment test (boundary counts as inside).
    fn contains(&self, p: &Point) -> bool;
}

/// Two-dimensional shapes.
pub trait Planar: Figure {
    fn area(&self) -> f64;
}

/// Discriminant of `Shape`, handy for reports and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Segment,
    Rect,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Segment => "segment",
            ShapeKind::Rect => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of shape kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(Point),
    Segment(LineSegment),
    Rect(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// Wrap into a shared handle for registration with a `Scene`.
    pub fn shared(self) -> SharedShape {
        Rc::new(RefCell::new(self))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Area for 2D kinds, `None` for points and segments.
    pub fn area(&self) -> Option<f64> {
        match self {
            Shape::Rect(r) => Some(r.area()),
            Shape::Circle(c) => Some(c.area()),
            Shape::Point(_) | Shape::Segment(_) => None,
        }
    }

    fn as_figure(&self) -> &dyn Figure {
        match self {
            Shape::Point(s) => s,
            Shape::Segment(s) => s,
            Shape::Rect(s) => s,
            Shape::Circle(s) => s,
        }
    }

    fn as_figure_mut(&mut self) -> &mut dyn Figure {
        match self {
            Shape::Point(s) => s,
            Shape::Segment(s) => s,
            Shape::Rect(s) => s,
            Shape::Circle(s) => s,
        }
    }
}

impl Figure for Shape {
    #[inline]
    fn depth(&self) -> u32 {
        self.as_figure().depth()
    }
    #[inline]
    fn set_depth(&mut self, depth: i32) -> ShapeResult<()> {
        self.as_figure_mut().set_depth(depth)
    }
    #[inline]
    fn dim(&self) -> u8 {
        self.as_figure().dim()
    }
    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) {
        self.as_figure_mut().translate(dx, dy)
    }
    #[inline]
    fn rotate(&mut self) {
        self.as_figure_mut().rotate()
    }
    #[inline]
    fn scale(&mut self, factor: f64) -> ShapeResult<()> {
        self.as_figure_mut().scale(factor)
    }
    #[inline]
    fn contains(&self, p: &Point) -> bool {
        self.as_figure().contains(p)
    }
}

impl From<Point> for Shape {
    fn from(s: Point) -> Self {
        Shape::Point(s)
    }
}

impl From<LineSegment> for Shape {
    fn from(s: LineSegment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rect(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}
