pub mod dataset;
pub mod style;
pub mod tree;
