pub mod engine;
pub mod outcome;

pub use engine::{classify, filter_subset};
pub use outcome::{percentage, Classification, ClassificationCounts};
