//! Non-TUI command implementations

mod score;
mod simple;

pub use score::run_score;
pub use simple::run_simple;
