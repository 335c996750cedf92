//! Document event protocol shared by all wikimark renderers.
//!
//! A document model is replayed as a flat stream of [`Event`]s in document
//! order: paired [`Event::Begin`]/[`Event::End`] calls for block-level
//! constructs and single atomic events for content (words, spaces, line
//! breaks, macro calls). Consumers receive one event at a time and never get
//! a tree, so any structural context they need has to be reconstructed from
//! the sequence itself.
//!
//! Producers guarantee well-formedness: every `End` matches the innermost
//! open `Begin` of the same kind, and nothing is left open at the end of the
//! stream. Consumers are entitled to rely on this; [`validate::check`] exists
//! for drivers and tests that want to verify a stream before replaying it.
//!
//! # Example
//!
//! ```
//! use wm_events::{Event, Parameters, Tag, validate};
//!
//! let events = vec![
//!     Event::Begin(Tag::Document),
//!     Event::Begin(Tag::Paragraph(Parameters::new())),
//!     Event::Word("Hello".into()),
//!     Event::End(Tag::Paragraph(Parameters::new())),
//!     Event::End(Tag::Document),
//! ];
//! assert!(validate::check(&events).is_ok());
//! ```

mod event;
mod link;
mod parameters;
pub mod validate;

pub use event::{Event, Format, ListKind, MacroCall, SectionLevel, Tag};
pub use link::Link;
pub use parameters::Parameters;
