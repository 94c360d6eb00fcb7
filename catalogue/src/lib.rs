/*!
Classic design patterns recast as small idiomatic Rust modules, one per
pattern. Each module carries the pattern's moving parts plus tests for the
behavior the pattern exists to provide; the runnable with/without contrasts
live in the demo binaries.

The observer pattern is the deep one and has its own crate,
`motif-observe`.
*/

pub mod adapter;
pub mod builder;
pub mod facade;
pub mod factory;
pub mod singleton;
pub mod strategy;
