//! Battle sinks provided by the runtime.
//!
//! - [`TracingSink`] turns battle events into structured `tracing` events
//! - [`FanoutSink`] forwards every event to several sinks
//! - [`EventLogSink`] appends events to a JSON-lines file
mod fanout;
mod log;
mod trace;

pub use fanout::FanoutSink;
pub use log::EventLogSink;
pub use trace::TracingSink;
