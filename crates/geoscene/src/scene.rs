//! Scene: ordered shared shapes and depth-filtered ASCII rasterization.
//!
//! Rendering rule
//! - Rows are emitted top to bottom (`y = height-1 ..= 0`), columns left to
//!   right. Each cell is the point `(x, y)` in shape coordinates.
//! - Shapes are tested in registration order; the first one that contains the
//!   cell and passes the depth filter marks it. Depth only filters
//!   eligibility, it does not reorder shapes.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{InvalidArgument, ShapeResult};
use crate::shape::{Figure, Point, SharedShape};

/// Canvas width in cells.
pub const WIDTH: usize = 60;
/// Canvas height in cells.
pub const HEIGHT: usize = 20;

/// Depth filter applied while rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawDepth {
    /// Every shape is eligible.
    #[default]
    All,
    /// Shapes with `depth <= d` are eligible.
    UpTo(u32),
}

impl DrawDepth {
    /// Map the integer convention: `-1` means all depths.
    pub fn from_i32(depth: i32) -> ShapeResult<Self> {
        match depth {
            -1 => Ok(DrawDepth::All),
            d => u32::try_from(d)
                .map(DrawDepth::UpTo)
                .map_err(|_| InvalidArgument::InvalidDrawDepth { depth: d }),
        }
    }

    #[inline]
    pub fn admits(&self, depth: u32) -> bool {
        match *self {
            DrawDepth::All => true,
            DrawDepth::UpTo(max) => depth <= max,
        }
    }
}

/// Canvas size and glyphs.
#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    pub width: usize,
    pub height: usize,
    pub filled: char,
    pub blank: char,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            filled: '*',
            blank: ' ',
        }
    }
}

/// Ordered collection of shared shapes. Shapes are only ever added.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<SharedShape>,
    draw_depth: DrawDepth,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shared handle; registration order decides cell ownership.
    ///
    /// # Panics
    /// Panics if `shape` is mutably borrowed at the time of the call.
    pub fn add_object(&mut self, shape: SharedShape) {
        {
            let s = shape.borrow();
            debug!(
                index = self.shapes.len(),
                kind = %s.kind(),
                depth = s.depth(),
                "scene_add_object"
            );
        }
        self.shapes.push(shape);
    }

    /// Set the filter from the integer convention (`-1` = all depths).
    pub fn set_draw_depth(&mut self, depth: i32) -> ShapeResult<()> {
        self.set_draw_filter(DrawDepth::from_i32(depth)?);
        Ok(())
    }

    pub fn set_draw_filter(&mut self, filter: DrawDepth) {
        debug!(filter = ?filter, "scene_draw_depth");
        self.draw_depth = filter;
    }

    #[inline]
    pub fn draw_depth(&self) -> DrawDepth {
        self.draw_depth
    }

    #[inline]
    pub fn shapes(&self) -> &[SharedShape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Index of the shape that wins cell `(x, y)`, if any.
    ///
    /// # Panics
    /// Panics if a registered shape is mutably borrowed; the same holds for
    /// `render`, `render_with`, and `Display`.
    pub fn shape_at(&self, x: f64, y: f64) -> Option<usize> {
        let cell = Point::new(x, y);
        self.shapes.iter().position(|s| {
            let s = s.borrow();
            self.draw_depth.admits(s.depth()) && s.contains(&cell)
        })
    }

    /// Render with the default 60×20 canvas.
    pub fn render(&self) -> String {
        self.render_with(&RenderCfg::default())
    }

    /// Render `cfg.height` rows of `cfg.width` glyphs, each row ending in `\n`.
    pub fn render_with(&self, cfg: &RenderCfg) -> String {
        let mut out = String::with_capacity((cfg.width + 1) * cfg.height);
        let mut marked = 0usize;
        for y in (0..cfg.height).rev() {
            for x in 0..cfg.width {
                if self.shape_at(x as f64, y as f64).is_some() {
                    out.push(cfg.filled);
                    marked += 1;
                } else {
                    out.push(cfg.blank);
                }
            }
            out.push('\n');
        }
        trace!(
            shapes = self.shapes.len(),
            width = cfg.width,
            height = cfg.height,
            marked,
            "scene_render"
        );
        out
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, LineSegment, Point, Rectangle, Shape};

    fn cell(canvas: &str, x: usize, y: usize) -> char {
        let row = HEIGHT - 1 - y;
        canvas.lines().nth(row).unwrap().chars().nth(x).unwrap()
    }

    fn demo_scene() -> (Scene, Vec<SharedShape>) {
        let point = Shape::from(Point::new(0.0, 0.0)).shared();
        let line = Shape::from(
            LineSegment::new(Point::new(0.0, 19.0), Point::new(59.0, 19.0)).unwrap(),
        )
        .shared();
        let rect = Shape::from(
            Rectangle::new(Point::new(59.0, 0.0), Point::new(55.0, 19.0)).unwrap(),
        )
        .shared();
        let circle = Shape::from(Circle::new(Point::new(30.0, 0.0), 10.0).unwrap()).shared();
        let mut scene = Scene::new();
        for s in [&point, &line, &rect, &circle] {
            scene.add_object(s.clone());
        }
        (scene, vec![point, line, rect, circle])
    }

    #[test]
    fn demo_scene_marks_expected_regions() {
        let (scene, _) = demo_scene();
        let canvas = scene.to_string();
        let rows: Vec<&str> = canvas.split_terminator('\n').collect();
        assert_eq!(rows.len(), HEIGHT);
        assert!(rows.iter().all(|r| r.chars().count() == WIDTH));
        assert!(canvas.ends_with('\n'));

        // bottom-left point
        assert_eq!(cell(&canvas, 0, 0), '*');
        assert_eq!(cell(&canvas, 1, 0), ' ');
        // full top row
        assert!(rows[0].chars().all(|c| c == '*'));
        // right-edge rectangle band, every row
        for y in 0..HEIGHT {
            for x in 55..WIDTH {
                assert_eq!(cell(&canvas, x, y), '*', "rect cell ({x},{y})");
            }
        }
        // circle: centre, boundary, and just outside
        assert_eq!(cell(&canvas, 30, 0), '*');
        assert_eq!(cell(&canvas, 20, 0), '*');
        assert_eq!(cell(&canvas, 30, 10), '*');
        assert_eq!(cell(&canvas, 19, 0), ' ');
        assert_eq!(cell(&canvas, 30, 11), ' ');
        assert_eq!(cell(&canvas, 37, 8), ' ');
    }

    #[test]
    fn first_registered_shape_wins_regardless_of_depth() {
        let (scene, _) = demo_scene();
        // rect (index 2) and line (index 1) overlap at the top-right corner
        assert_eq!(scene.shape_at(57.0, 19.0), Some(1));
        assert_eq!(scene.shape_at(57.0, 5.0), Some(2));
        assert_eq!(scene.shape_at(10.0, 10.0), None);
    }

    #[test]
    fn depth_filter_hides_deeper_shapes() {
        let (mut scene, handles) = demo_scene();
        handles[1].borrow_mut().set_depth(3).unwrap();
        handles[3].borrow_mut().set_depth(5).unwrap();

        scene.set_draw_depth(2).unwrap();
        let canvas = scene.render();
        // line (depth 3) and circle (depth 5) excluded
        assert_eq!(cell(&canvas, 10, 19), ' ');
        assert_eq!(cell(&canvas, 30, 0), ' ');
        // point and rect (depth 0) still drawn, rect still owns the top-right
        assert_eq!(cell(&canvas, 0, 0), '*');
        assert_eq!(cell(&canvas, 57, 19), '*');
        assert_eq!(scene.shape_at(57.0, 19.0), Some(2));

        scene.set_draw_depth(3).unwrap();
        let canvas = scene.render();
        assert_eq!(cell(&canvas, 10, 19), '*');
        assert_eq!(cell(&canvas, 30, 0), ' ');

        scene.set_draw_depth(-1).unwrap();
        assert_eq!(scene.draw_depth(), DrawDepth::All);
        assert_eq!(cell(&scene.render(), 30, 0), '*');
    }

    #[test]
    fn render_sees_mutations_through_shared_handles() {
        let (scene, handles) = demo_scene();
        handles[3].borrow_mut().translate(0.0, -5.0);
        let canvas = scene.render();
        assert_eq!(cell(&canvas, 30, 5), '*');
        assert_eq!(cell(&canvas, 30, 6), ' ');

        // rect 4x19 becomes 19x4 about its centre (57, 9.5)
        handles[2].borrow_mut().rotate();
        let canvas = scene.render();
        assert_eq!(cell(&canvas, 48, 9), '*');
        assert_eq!(cell(&canvas, 57, 15), ' ');
    }

    #[test]
    fn draw_depth_integer_convention() {
        assert_eq!(DrawDepth::from_i32(-1), Ok(DrawDepth::All));
        assert_eq!(DrawDepth::from_i32(0), Ok(DrawDepth::UpTo(0)));
        assert_eq!(DrawDepth::from_i32(i32::MAX), Ok(DrawDepth::UpTo(i32::MAX as u32)));
        assert_eq!(
            DrawDepth::from_i32(i32::MIN),
            Err(InvalidArgument::InvalidDrawDepth { depth: i32::MIN })
        );
    }

    #[test]
    #[should_panic]
    fn render_panics_while_a_shape_is_mutably_borrowed() {
        let (scene, handles) = demo_scene();
        let _guard = handles[0].borrow_mut();
        let _ = scene.render();
    }

    #[test]
    fn invalid_draw_depth_is_rejected_and_filter_kept() {
        let mut scene = Scene::new();
        scene.set_draw_depth(4).unwrap();
        assert_eq!(
            scene.set_draw_depth(-2),
            Err(InvalidArgument::InvalidDrawDepth { depth: -2 })
        );
        assert_eq!(scene.draw_depth(), DrawDepth::UpTo(4));
    }

    #[test]
    fn empty_scene_renders_blank_canvas_with_custom_glyphs() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        let cfg = RenderCfg {
            width: 3,
            height: 2,
            filled: '#',
            blank: '.',
        };
        assert_eq!(scene.render_with(&cfg), "...\n...\n");
    }
}
