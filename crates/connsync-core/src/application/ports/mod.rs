//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `connsync-adapters` implement them.
//!
//! - **Driven (Output) Ports**: `Filesystem`

pub mod output;

pub use output::Filesystem;
