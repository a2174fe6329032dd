/// Store engine selection.
pub mod store_engine;
