//! Struct `Sample` represents a batch of labeled (or unlabeled) examples.

pub(crate) mod feature;
pub(crate) mod sample_struct;
pub(crate) mod reader;


pub use feature::Feature;
pub use sample_struct::Sample;
pub use reader::SampleReader;
