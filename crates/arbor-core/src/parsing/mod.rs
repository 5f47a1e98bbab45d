pub mod normalize;
pub mod parameters;

pub use normalize::{is_compliant, is_mis_labelled, is_substandard, is_unsafe, normalize_verdict};
pub use parameters::split_parameters;
