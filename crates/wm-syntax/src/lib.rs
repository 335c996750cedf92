//! Native wiki-syntax rendering of document event streams.
//!
//! [`SyntaxRenderer`] replays a [`wm_events::Event`] stream back into the
//! document's own markup dialect, reconstructing nesting depth and block
//! boundaries from the flat event sequence alone — constant auxiliary state,
//! no lookahead. Feeding the output back through the parser reproduces the
//! same model, which is what makes the dialect round-trippable.
//!
//! [`render_macro`] is the pure helper that serializes a macro invocation
//! into its canonical call form; the renderer uses it to replace a macro's
//! expansion with the original call.
//!
//! # Example
//!
//! ```
//! use wm_events::{Event, ListKind, Tag};
//! use wm_syntax::SyntaxRenderer;
//!
//! let events = vec![
//!     Event::Begin(Tag::List(ListKind::Bulleted)),
//!     Event::Begin(Tag::ListItem),
//!     Event::Word("a".into()),
//!     Event::End(Tag::ListItem),
//!     Event::Begin(Tag::ListItem),
//!     Event::Word("b".into()),
//!     Event::End(Tag::ListItem),
//!     Event::End(Tag::List(ListKind::Bulleted)),
//! ];
//! assert_eq!(SyntaxRenderer::render(events), "* a\n* b");
//! ```

mod macros;
mod renderer;
mod state;

pub use macros::render_macro;
pub use renderer::SyntaxRenderer;
