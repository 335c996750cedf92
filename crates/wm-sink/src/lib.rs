//! Forwarding of document event streams into a generic document sink.
//!
//! Some targets are not serialized by this workspace at all: they are built
//! through an external document-construction capability with a narrower
//! vocabulary than the event protocol. [`DocumentSink`] captures that
//! capability set, and [`SinkRenderer`] translates each event onto it —
//! one-to-one where the sink has an equivalent, degrading to raw text where
//! it only nearly does, and silently dropping what it cannot represent. The
//! adapter itself carries no session state and never fails.

mod renderer;
mod sink;

pub use renderer::SinkRenderer;
pub use sink::DocumentSink;
