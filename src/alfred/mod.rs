//! Alfred script filter output.

mod render;
mod response;

pub use render::{filter_response, toggle_response};
