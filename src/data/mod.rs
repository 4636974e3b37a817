pub mod dataset;
pub mod seven_segment;

pub use dataset::Dataset;
