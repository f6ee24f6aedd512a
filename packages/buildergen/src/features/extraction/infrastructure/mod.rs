//! Extraction infrastructure

mod property_collector;

pub use property_collector::collect_properties;
