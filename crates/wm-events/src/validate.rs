//! Stream well-formedness checking.
//!
//! Renderers assume well-formed input and do not re-check it; this module is
//! for the driving side, where a malformed stream is a bug worth catching
//! before it is replayed into a consumer.

use crate::event::{Event, Tag};

/// A violation of the Begin/End pairing contract.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StreamError {
    /// An `End` arrived with no construct open at all.
    #[error("end of {found} with nothing open")]
    UnmatchedEnd {
        /// Kind of the offending end event.
        found: &'static str,
    },
    /// An `End` arrived for a different kind than the innermost open one.
    #[error("end of {found} while {open} is the innermost open element")]
    MismatchedEnd {
        /// Kind of the innermost open construct.
        open: &'static str,
        /// Kind of the offending end event.
        found: &'static str,
    },
    /// The stream finished with a construct still open.
    #[error("{open} still open at end of stream")]
    Unclosed {
        /// Kind of the construct left open.
        open: &'static str,
    },
}

/// Check that every `End` closes the innermost open `Begin` of the same kind
/// and that nothing is left open when the stream finishes.
///
/// Sections, lists, and format spans must also agree on their payload kind:
/// ending a bold span while an italic span is innermost is a mismatch.
pub fn check<'a, I>(events: I) -> Result<(), StreamError>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut open: Vec<&Tag> = Vec::new();
    for event in events {
        match event {
            Event::Begin(tag) => open.push(tag),
            Event::End(tag) => match open.pop() {
                None => {
                    return Err(StreamError::UnmatchedEnd {
                        found: tag.kind_name(),
                    });
                }
                Some(innermost) if !same_kind(innermost, tag) => {
                    return Err(StreamError::MismatchedEnd {
                        open: innermost.kind_name(),
                        found: tag.kind_name(),
                    });
                }
                Some(_) => {}
            },
            _ => {}
        }
    }
    match open.pop() {
        Some(tag) => Err(StreamError::Unclosed {
            open: tag.kind_name(),
        }),
        None => Ok(()),
    }
}

fn same_kind(open: &Tag, end: &Tag) -> bool {
    match (open, end) {
        (Tag::Section(a), Tag::Section(b)) => a == b,
        (Tag::List(a), Tag::List(b)) => a == b,
        (Tag::Format(a), Tag::Format(b)) => a == b,
        _ => std::mem::discriminant(open) == std::mem::discriminant(end),
    }
}
