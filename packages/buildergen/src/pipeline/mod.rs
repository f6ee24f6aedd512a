//! Pipeline orchestration

mod generator;

pub use generator::{generate_builder, BuilderGenerator};
