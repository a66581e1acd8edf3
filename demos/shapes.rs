//! Builds a handful of shapes and prints their areas and volumes.
//!
//! ```text
//! cargo run --example shapes
//! RUST_LOG=mensura=debug cargo run --example shapes
//! ```

use std::rc::Rc;

use mensura::geometry::{Circle, Cube, Cuboid, Prism, Rectangle, Shape, Sphere, Square};
use mensura::operations::query::{Measure, Measurement};
use mensura::operations::shaping::Extrude;
use mensura::store::ShapeStore;

fn main() -> mensura::Result<()> {
    // Default: WARN for everything, INFO for mensura.
    // Override with RUST_LOG env var (e.g. RUST_LOG=mensura=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("mensura=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Shared handles: the prisms keep their bases alive.
    let square = Rc::new(Square::new(4.0));
    let circle = Rc::new(Circle::new(3.0));

    let shapes: Vec<Rc<dyn Shape>> = vec![
        square.clone(),
        Rc::new(Rectangle::new(4.0, 5.0)),
        circle.clone(),
        Rc::new(Cube::new(4.0)),
        Rc::new(Cuboid::new(4.0, 5.0, 6.0)),
        Rc::new(Sphere::new(3.0)),
        Rc::new(Prism::new(10.0, square)),
        Rc::new(Prism::new(15.0, circle)),
    ];

    for shape in &shapes {
        println!("{}", Measurement::of(shape.as_ref())?);
    }

    // The same run through the arena.
    let mut store = ShapeStore::new();
    let base = store.add_flat(Square::new(4.0));
    let prism = Extrude::new(base, 10.0).execute(&mut store)?;
    store.remove(base)?;
    println!("{}", Measure::new(prism).execute(&store)?);

    Ok(())
}
