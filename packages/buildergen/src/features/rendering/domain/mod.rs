//! Rendering domain models

mod builder_spec;

pub use builder_spec::BuilderSpec;
