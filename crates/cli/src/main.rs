use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geoscene::prelude::*;
use geoscene::rand::{random_scene, RandomSceneCfg};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "geoscene")]
#[command(about = "Build, transform, and render ASCII shape scenes")]
#[command(version)]
struct Cmd {
    /// Log level (error, warn, info, debug, trace); logs go to stderr
    #[arg(long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Walk through construction, mutation, and rendering of the four shape kinds
    Demo,
    /// Render a seeded random scene
    Render {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 8)]
        count: usize,
        /// Highest depth drawn; -1 draws every depth
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        draw_depth: i32,
        /// Depths of generated shapes are drawn from 0..=max_depth
        #[arg(long, default_value_t = 3)]
        max_depth: u32,
    },
    /// Print a JSON summary of the demo scene, or of a random one with --seed
    Report {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.log_level);
    tracing::info!(version = geoscene::VERSION, "start");
    match cmd.action {
        Action::Demo => demo(),
        Action::Render {
            seed,
            count,
            draw_depth,
            max_depth,
        } => render(seed, count, draw_depth, max_depth),
        Action::Report { seed } => report(seed),
    }
}

fn init_logging(level: Level) {
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles to the four shapes of the demo scene, kept so they can be mutated
/// after registration.
struct DemoShapes {
    rect: SharedShape,
    circle: SharedShape,
}

fn demo_scene() -> Result<(Scene, DemoShapes)> {
    let point = Shape::from(Point::new(0.0, 0.0)).shared();
    let line = Shape::from(LineSegment::new(Point::new(0.0, 19.0), Point::new(59.0, 19.0))?)
        .shared();
    let rect = Shape::from(Rectangle::new(Point::new(59.0, 0.0), Point::new(55.0, 19.0))?)
        .shared();
    let circle = Shape::from(Circle::new(Point::new(30.0, 0.0), 10.0)?).shared();

    let mut scene = Scene::new();
    scene.add_object(point);
    scene.add_object(line);
    scene.add_object(rect.clone());
    scene.add_object(circle.clone());
    Ok((scene, DemoShapes { rect, circle }))
}

fn demo() -> Result<()> {
    let p1 = Point::new(-1.0, -2.0);
    let mut p2 = Point::new(10.0, -2.0);
    println!("p1.x = {}", p1.x());

    let l = LineSegment::new(p1, p2).context("building demo segment")?;
    println!("segment x-range = [{}, {}]", l.xmin(), l.xmax());
    println!("segment length = {}", l.length());

    p2.translate(0.0, 2.0);
    let mut r = Rectangle::new(p1, p2).context("building demo rectangle")?;
    r.rotate();
    println!("rotated rectangle y-range = [{}, {}]", r.ymin(), r.ymax());
    println!("rotated rectangle area = {}", r.area());

    let mut c = Circle::new(Point::with_depth(1.0, 2.0, 3)?, 2.0)?;
    println!("circle area = {:.4}", c.area());
    c.scale(10.0)?;
    println!("circle area after scale(10) = {:.4}", c.area());

    let (scene, shapes) = demo_scene()?;
    println!("{scene}");

    shapes.rect.borrow_mut().rotate();
    shapes.circle.borrow_mut().translate(0.0, -5.0);
    tracing::info!("rotated rectangle, moved circle down by 5");
    print!("{scene}");
    Ok(())
}

fn render(seed: u64, count: usize, draw_depth: i32, max_depth: u32) -> Result<()> {
    let cfg = RandomSceneCfg {
        count,
        max_depth,
        ..Default::default()
    };
    let mut scene = random_scene(&cfg, seed).context("generating random scene")?;
    scene
        .set_draw_depth(draw_depth)
        .with_context(|| format!("applying draw depth {draw_depth}"))?;
    tracing::info!(seed, count, draw_depth, "render");
    print!("{scene}");
    Ok(())
}

#[derive(Serialize)]
struct ShapeSummary {
    index: usize,
    kind: &'static str,
    depth: u32,
    dim: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
}

#[derive(Serialize)]
struct SceneSummary {
    version: &'static str,
    seed: Option<u64>,
    width: usize,
    height: usize,
    marked_cells: usize,
    shapes: Vec<ShapeSummary>,
}

fn summarize(scene: &Scene, seed: Option<u64>) -> SceneSummary {
    let shapes = scene
        .shapes()
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let s = s.borrow();
            let length = match &*s {
                Shape::Segment(l) => Some(l.length()),
                _ => None,
            };
            ShapeSummary {
                index,
                kind: s.kind().as_str(),
                depth: s.depth(),
                dim: s.dim(),
                length,
                area: s.area(),
            }
        })
        .collect();
    let marked_cells = scene.render().chars().filter(|&c| c == '*').count();
    SceneSummary {
        version: geoscene::VERSION,
        seed,
        width: WIDTH,
        height: HEIGHT,
        marked_cells,
        shapes,
    }
}

fn report(seed: Option<u64>) -> Result<()> {
    let scene = match seed {
        Some(seed) => random_scene(&RandomSceneCfg::default(), seed)?,
        None => demo_scene()?.0,
    };
    let summary = summarize(&scene, seed);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn demo_scene_summary_lists_shapes_in_order() {
        let (scene, _) = demo_scene().unwrap();
        let v: Value = serde_json::to_value(summarize(&scene, None)).unwrap();
        let kinds: Vec<&str> = v["shapes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["point", "segment", "rectangle", "circle"]);
        assert_eq!(v["shapes"][1]["length"], 59.0);
        assert!(v["shapes"][0].get("area").is_none());
        assert_eq!(v["width"], 60);
        assert!(v["marked_cells"].as_u64().unwrap() > 60);
    }

    #[test]
    fn demo_handles_mutate_registered_shapes() {
        let (scene, shapes) = demo_scene().unwrap();
        assert_eq!(scene.shape_at(30.0, 0.0), Some(3));
        shapes.circle.borrow_mut().translate(0.0, -15.0);
        assert_eq!(scene.shape_at(30.0, 0.0), None);
    }

    #[test]
    fn cli_log_level_is_validated() {
        let cmd = Cmd::try_parse_from(["geoscene", "--log-level", "debug", "demo"]).unwrap();
        assert_eq!(cmd.log_level, Level::DEBUG);
        assert!(Cmd::try_parse_from(["geoscene", "--log-level", "verbose", "demo"]).is_err());
    }

    #[test]
    fn cli_parses_negative_draw_depth() {
        let cmd = Cmd::try_parse_from(["geoscene", "render", "--draw-depth", "-1"]).unwrap();
        match cmd.action {
            Action::Render { draw_depth, .. } => assert_eq!(draw_depth, -1),
            _ => panic!("expected render"),
        }
    }
}
