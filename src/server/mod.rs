//! TCP server: startup side effects and the accept loop.

pub mod listener;
pub mod listing;
