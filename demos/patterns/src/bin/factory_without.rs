//! The same shapes without a factory: call sites branch on the identifier
//! and construct concrete types themselves. Every new shape means another
//! branch at every construction site.

struct Circle;

impl Circle {
    fn draw(&self) {
        println!("Drawing a Circle");
    }
}

struct Square;

impl Square {
    fn draw(&self) {
        println!("Drawing a Square");
    }
}

fn draw_shape(name: &str) {
    if name == "circle" {
        Circle.draw();
    } else if name == "square" {
        Square.draw();
    } else {
        println!("Unknown shape: {name}");
    }
}

fn main() {
    draw_shape("circle");
    draw_shape("square");
    draw_shape("triangle");
}
