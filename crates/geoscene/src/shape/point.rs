use nalgebra::Vector2;

use super::Figure;
use crate::error::{check_depth, check_scale, ShapeResult};

/// A coordinate pair with a depth tag. Also the corner/endpoint storage of
/// the composite shapes, which own independent copies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pos: Vector2<f64>,
    depth: u32,
}

impl Point {
    /// Point at depth 0.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            depth: 0,
        }
    }

    pub fn with_depth(x: f64, y: f64, depth: i32) -> ShapeResult<Self> {
        Ok(Self {
            pos: Vector2::new(x, y),
            depth: check_depth(depth)?,
        })
    }

    #[inline]
    pub(crate) fn from_vec(pos: Vector2<f64>, depth: u32) -> Self {
        Self { pos, depth }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        self.pos
    }

    /// Neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }

    /// Exact coordinate equality; depth is ignored.
    #[inline]
    pub fn same_position(&self, other: &Point) -> bool {
        self.pos == other.pos
    }

    #[inline]
    pub(crate) fn set_depth_unchecked(&mut self, depth: u32) {
        self.depth = depth;
    }
}

impl Figure for Point {
    #[inline]
    fn depth(&self) -> u32 {
        self.depth
    }
    fn set_depth(&mut self, depth: i32) -> ShapeResult<()> {
        self.depth = check_depth(depth)?;
        Ok(())
    }
    #[inline]
    fn dim(&self) -> u8 {
        0
    }
    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) {
        self.pos += Vector2::new(dx, dy);
    }
    /// No orientation.
    #[inline]
    fn rotate(&mut self) {}
    /// No size; only the factor is validated.
    fn scale(&mut self, factor: f64) -> ShapeResult<()> {
        check_scale(factor)
    }
    /// Exact floating equality, no tolerance.
    #[inline]
    fn contains(&self, p: &Point) -> bool {
        self.same_position(p)
    }
}
