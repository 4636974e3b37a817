pub mod network;
pub mod spec;

pub use network::{ForwardPass, Network};
pub use spec::NetworkSpec;
