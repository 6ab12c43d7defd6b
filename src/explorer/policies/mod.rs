mod display_filter;

pub use display_filter::{DisplayMode, NodeFilter};
