//! Factory: construct trait objects from runtime identifiers.
//!
//! Two formulations. [`ShapeFactory`] is the closed-set version, one match
//! extended by editing it. [`ShapeRegistry`] is the open-closed version:
//! products register a constructor under a name, and adding one touches no
//! existing code. The registry is an explicit instance passed to whoever
//! needs it, not a global.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

pub trait Shape: Send + Sync {
    /// Describe drawing this shape.
    fn render(&self) -> String;
}

pub struct Circle;

impl Shape for Circle {
    fn render(&self) -> String { "Drawing a Circle".to_string() }
}

pub struct Square;

impl Shape for Square {
    fn render(&self) -> String { "Drawing a Square".to_string() }
}

#[derive(Error, Debug, PartialEq)]
pub enum FactoryError {
    /// The identifier names no known product.
    #[error("unknown shape: {0}")]
    UnknownShape(String),
}

/// The built-in product set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            other => Err(FactoryError::UnknownShape(other.to_string())),
        }
    }
}

/// Closed-set factory over [`ShapeKind`].
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn create(kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}

/// Constructor for a registered product.
pub type ShapeCtor = Box<dyn Fn() -> Box<dyn Shape> + Send + Sync>;

/// Open-closed factory: a name-to-constructor table.
#[derive(Default)]
pub struct ShapeRegistry {
    ctors: HashMap<String, ShapeCtor>,
}

impl ShapeRegistry {
    pub fn new() -> Self { Self::default() }

    /// Registry preloaded with the built-in shapes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("circle", || Box::new(Circle));
        registry.register("square", || Box::new(Square));
        registry
    }

    /// Register `ctor` under `name`, replacing any previous registration.
    pub fn register<F>(&mut self, name: impl Into<String>, ctor: F)
    where F: Fn() -> Box<dyn Shape> + Send + Sync + 'static {
        let name = name.into();
        debug!("shape constructor registered: {name}");
        self.ctors.insert(name, Box::new(ctor));
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Shape>, FactoryError> {
        let ctor = self.ctors.get(name).ok_or_else(|| FactoryError::UnknownShape(name.to_string()))?;
        Ok(ctor())
    }

    /// Registered product names, sorted.
    pub fn registered(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ctors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
