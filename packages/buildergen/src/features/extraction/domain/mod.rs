//! Extraction domain models

mod property;

pub use property::PropertyDescriptor;
