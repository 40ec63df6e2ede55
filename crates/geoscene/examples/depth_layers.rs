//! Render the same scene at each depth cut-off.
//!
//! Three nested rectangles sit at depths 0, 1, 2. Raising the draw depth
//! reveals one more layer each time; the first-registered rectangle keeps the
//! cells it shares with later ones.

use geoscene::prelude::*;

fn main() -> Result<(), InvalidArgument> {
    let mut scene = Scene::new();
    for (depth, inset) in [(0, 20.0), (1, 10.0), (2, 2.0)] {
        let p = Point::with_depth(inset, inset / 4.0, depth)?;
        let q = Point::with_depth(59.0 - inset, 19.0 - inset / 4.0, depth)?;
        scene.add_object(Shape::from(Rectangle::new(p, q)?).shared());
    }
    for cut in 0..=2 {
        scene.set_draw_depth(cut)?;
        println!("draw depth {cut}:\n{scene}");
    }
    Ok(())
}
