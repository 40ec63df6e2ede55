use nalgebra::Vector2;

use super::{Figure, Point};
use crate::error::{check_depth, check_scale, InvalidArgument, ShapeResult};

/// Axis-aligned line segment `P–Q`.
///
/// Invariants:
/// - `P` and `Q` differ on exactly one axis (horizontal or vertical).
/// - Both endpoints carry the segment's depth.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    p: Point,
    q: Point,
}

impl LineSegment {
    pub fn new(p: Point, q: Point) -> ShapeResult<Self> {
        if p.depth() != q.depth() {
            return Err(InvalidArgument::DepthMismatch {
                p: p.depth(),
                q: q.depth(),
            });
        }
        if !p.is_finite() || !q.is_finite() {
            return Err(InvalidArgument::NonFiniteCoordinate);
        }
        if p.same_position(&q) {
            return Err(InvalidArgument::CoincidentPoints);
        }
        if p.x() != q.x() && p.y() != q.y() {
            return Err(InvalidArgument::NotAxisAligned);
        }
        Ok(Self { p, q })
    }

    #[inline]
    pub fn p(&self) -> &Point {
        &self.p
    }
    #[inline]
    pub fn q(&self) -> &Point {
        &self.q
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.p.x().min(self.q.x())
    }
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.p.x().max(self.q.x())
    }
    #[inline]
    pub fn ymin(&self) -> f64 {
        self.p.y().min(self.q.y())
    }
    #[inline]
    pub fn ymax(&self) -> f64 {
        self.p.y().max(self.q.y())
    }

    /// Manhattan span; one term is always zero for an axis-aligned segment.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.xmax() - self.xmin()) + (self.ymax() - self.ymin())
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p.x() == self.q.x()
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.p.position() + self.q.position()) * 0.5
    }

    fn mapped_endpoints(&self, f: impl Fn(Vector2<f64>) -> Vector2<f64>) -> (Point, Point) {
        let depth = self.p.depth();
        (
            Point::from_vec(f(self.p.position()), depth),
            Point::from_vec(f(self.q.position()), depth),
        )
    }
}

impl Figure for LineSegment {
    #[inline]
    fn depth(&self) -> u32 {
        self.p.depth()
    }
    fn set_depth(&mut self, depth: i32) -> ShapeResult<()> {
        let d = check_depth(depth)?;
        self.p.set_depth_unchecked(d);
        self.q.set_depth_unchecked(d);
        Ok(())
    }
    #[inline]
    fn dim(&self) -> u8 {
        1
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.p.translate(dx, dy);
        self.q.translate(dx, dy);
    }
    /// Quarter turn (counter-clockwise) about the midpoint: each endpoint's
    /// half-length offset moves to the perpendicular axis, so vertical becomes
    /// horizontal and vice versa.
    ///
    /// Left unchanged if rounding would merge the rotated endpoints.
    fn rotate(&mut self) {
        let m = self.midpoint();
        let (p, q) = self.mapped_endpoints(|v| {
            let d = v - m;
            m + Vector2::new(-d.y, d.x)
        });
        if !p.same_position(&q) {
            self.p = p;
            self.q = q;
        }
    }
    /// Extend (f > 1) or shrink (f < 1) each end by `length/2 * (f - 1)`,
    /// midpoint fixed. Rejected if the scaled endpoints would coincide.
    fn scale(&mut self, factor: f64) -> ShapeResult<()> {
        check_scale(factor)?;
        let m = self.midpoint();
        let (p, q) = self.mapped_endpoints(|v| m + (v - m) * factor);
        if p.same_position(&q) {
            return Err(InvalidArgument::CoincidentPoints);
        }
        self.p = p;
        self.q = q;
        Ok(())
    }
    /// Inclusive bounding-box test, exact for axis-aligned segments.
    fn contains(&self, p: &Point) -> bool {
        p.x() >= self.xmin()
            && p.x() <= self.xmax()
            && p.y() >= self.ymin()
            && p.y() <= self.ymax()
    }
}
