//! Rendering infrastructure

mod builder_writer;

pub use builder_writer::render_builder_class;
