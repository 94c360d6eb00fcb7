//! Factory pattern, both formulations: the closed-set match and the
//! open-closed registry that new products join without edits elsewhere.

use anyhow::Result;
use motif_catalogue::factory::{Shape, ShapeFactory, ShapeRegistry};

struct Triangle;

impl Shape for Triangle {
    fn render(&self) -> String { "Drawing a Triangle".to_string() }
}

fn main() -> Result<()> {
    for kind in ["circle", "square"] {
        let shape = ShapeFactory::create(kind.parse()?);
        println!("{}", shape.render());
    }

    let mut registry = ShapeRegistry::with_builtins();
    registry.register("triangle", || Box::new(Triangle));

    for name in registry.registered() {
        println!("registered: {name}");
    }
    println!("{}", registry.create("triangle")?.render());

    Ok(())
}
