use nalgebra::Vector2;

use super::{Figure, Planar, Point};
use crate::error::{check_depth, check_scale, InvalidArgument, ShapeResult};

/// Axis-aligned rectangle spanned by opposite corners `P` and `Q`.
///
/// Invariants:
/// - `P.x != Q.x` and `P.y != Q.y` (positive width and height).
/// - Both corners carry the rectangle's depth.
/// - `P` keeps its corner class (e.g. top-right) across rotate and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    p: Point,
    q: Point,
}

impl Rectangle {
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
        if p.x() == q.x() || p.y() == q.y() {
            return Err(InvalidArgument::DegenerateRectangle);
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
    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax() - self.xmin()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax() - self.ymin()
    }

    #[inline]
    pub fn centre(&self) -> Vector2<f64> {
        (self.p.position() + self.q.position()) * 0.5
    }

    /// Replace both corners if they still span a positive area.
    fn set_corners(&mut self, p: Vector2<f64>, q: Vector2<f64>) -> ShapeResult<()> {
        if p.x == q.x || p.y == q.y {
            return Err(InvalidArgument::DegenerateRectangle);
        }
        let depth = self.p.depth();
        self.p = Point::from_vec(p, depth);
        self.q = Point::from_vec(q, depth);
        Ok(())
    }
}

impl Figure for Rectangle {
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
        2
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.p.translate(dx, dy);
        self.q.translate(dx, dy);
    }
    /// Swap width and height about the centre.
    ///
    /// With `diff = (w - h) / 2` the x-extent shrinks by `diff` on each side
    /// and the y-extent grows by `diff`. `P` stays in the corner class it
    /// occupied (e.g. `(xmax, ymin)`), `Q` takes the opposite one.
    ///
    /// Left unchanged if rounding would collapse the rotated extents.
    fn rotate(&mut self) {
        let diff = (self.width() - self.height()) * 0.5;
        let (xmin, xmax) = (self.xmin() + diff, self.xmax() - diff);
        let (ymin, ymax) = (self.ymin() - diff, self.ymax() + diff);
        let p_right = self.p.x() == self.xmax();
        let p_top = self.p.y() == self.ymax();
        let p = Vector2::new(
            if p_right { xmax } else { xmin },
            if p_top { ymax } else { ymin },
        );
        let q = Vector2::new(
            if p_right { xmin } else { xmax },
            if p_top { ymin } else { ymax },
        );
        // Only a degenerate result is refused; the shape then stays as it was.
        let _ = self.set_corners(p, q);
    }
    /// Each side moves outward by `half-extent * (f - 1)` along its axis.
    /// Rejected if either extent would round to zero.
    fn scale(&mut self, factor: f64) -> ShapeResult<()> {
        check_scale(factor)?;
        let c = self.centre();
        let p = c + (self.p.position() - c) * factor;
        let q = c + (self.q.position() - c) * factor;
        self.set_corners(p, q)
    }
    fn contains(&self, p: &Point) -> bool {
        p.x() >= self.xmin()
            && p.x() <= self.xmax()
            && p.y() >= self.ymin()
            && p.y() <= self.ymax()
    }
}

impl Planar for Rectangle {
    #[inline]
    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}
