use std::f64::consts::PI;

use super::{Figure, Planar, Point};
use crate::error::{check_depth, check_scale, InvalidArgument, ShapeResult};

/// Circle with a centre point and strictly positive radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    centre: Point,
    radius: f64,
}

impl Circle {
    /// Depth comes from `centre`. NaN radii are rejected.
    pub fn new(centre: Point, radius: f64) -> ShapeResult<Self> {
        if !centre.is_finite() {
            return Err(InvalidArgument::NonFiniteCoordinate);
        }
        if radius.is_nan() || radius <= 0.0 {
            return Err(InvalidArgument::NonPositiveRadius { radius });
        }
        Ok(Self { centre, radius })
    }

    #[inline]
    pub fn centre(&self) -> &Point {
        &self.centre
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Figure for Circle {
    #[inline]
    fn depth(&self) -> u32 {
        self.centre.depth()
    }
    fn set_depth(&mut self, depth: i32) -> ShapeResult<()> {
        self.centre.set_depth_unchecked(check_depth(depth)?);
        Ok(())
    }
    #[inline]
    fn dim(&self) -> u8 {
        2
    }
    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) {
        self.centre.translate(dx, dy);
    }
    /// Rotationally symmetric.
    #[inline]
    fn rotate(&mut self) {}
    /// Rejected if the scaled radius would underflow to zero.
    fn scale(&mut self, factor: f64) -> ShapeResult<()> {
        check_scale(factor)?;
        let radius = self.radius * factor;
        if radius <= 0.0 {
            return Err(InvalidArgument::NonPositiveRadius { radius });
        }
        self.radius = radius;
        Ok(())
    }
    #[inline]
    fn contains(&self, p: &Point) -> bool {
        (self.centre.position() - p.position()).norm_squared() <= self.radius * self.radius
    }
}

impl Planar for Circle {
    #[inline]
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
