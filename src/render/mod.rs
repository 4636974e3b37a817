pub mod segment;

pub use segment::{render_digit, render_side_by_side, threshold};
