pub use crate::errors::PathError;
pub use crate::path::{labels, Iter, LabelSet, Path};
pub use crate::pop::{Pop, Popped};

pub mod errors;
pub mod path;
pub mod pop;
