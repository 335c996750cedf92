//! Session state for the syntax renderer.
//!
//! All of this lives for one event stream and is discarded with the
//! renderer; nothing is shared between sessions.

use wm_events::ListKind;

/// The kind of top-level element most recently opened or emitted.
///
/// Begin-paragraph and begin-standalone-macro consult this to decide whether
/// the previous block already forces a line break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Element {
    Document,
    Paragraph,
    HorizontalLine,
    List,
    Macro,
    Section,
    DefinitionList,
    Quotation,
}

/// Progress of the current item-like sub-element (list item, definition
/// term/description, quotation line).
///
/// End events never know whether a sibling follows, so closing an item only
/// records `Closed`; the next sibling's begin handler turns that into a line
/// break. `Open` lets a nested block know it is starting inside an unfinished
/// item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ItemState {
    /// No item seen, or the enclosing structure was closed.
    #[default]
    Idle,
    /// A begin was seen with no matching end yet.
    Open,
    /// An end was seen; a break is owed before the next sibling.
    Closed,
}

/// Stack of list style markers, one character per open list level.
///
/// The concatenated stack is the item prefix: `**` for a bullet two levels
/// deep, `11.` for a numbered item inside a numbered list.
#[derive(Debug, Default)]
pub(crate) struct MarkerStack(String);

impl MarkerStack {
    pub(crate) fn push(&mut self, kind: ListKind) {
        self.0.push(match kind {
            ListKind::Bulleted => '*',
            ListKind::Numbered => '1',
        });
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The accumulated markers, outermost first, with the trailing `.` that
    /// numbered prefixes carry.
    pub(crate) fn item_prefix(&self) -> String {
        let mut prefix = self.0.clone();
        if self.0.starts_with('1') {
            prefix.push('.');
        }
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulleted_prefix() {
        let mut markers = MarkerStack::default();
        markers.push(ListKind::Bulleted);
        assert_eq!(markers.item_prefix(), "*");
        markers.push(ListKind::Bulleted);
        assert_eq!(markers.item_prefix(), "**");
    }

    #[test]
    fn test_numbered_prefix_gets_dot() {
        let mut markers = MarkerStack::default();
        markers.push(ListKind::Numbered);
        assert_eq!(markers.item_prefix(), "1.");
        markers.push(ListKind::Numbered);
        assert_eq!(markers.item_prefix(), "11.");
    }

    #[test]
    fn test_mixed_prefix_follows_outermost() {
        let mut markers = MarkerStack::default();
        markers.push(ListKind::Numbered);
        markers.push(ListKind::Bulleted);
        assert_eq!(markers.item_prefix(), "1*.");

        let mut markers = MarkerStack::default();
        markers.push(ListKind::Bulleted);
        markers.push(ListKind::Numbered);
        assert_eq!(markers.item_prefix(), "*1");
    }

    #[test]
    fn test_pop_restores_outer_prefix() {
        let mut markers = MarkerStack::default();
        markers.push(ListKind::Bulleted);
        markers.push(ListKind::Numbered);
        markers.pop();
        assert_eq!(markers.item_prefix(), "*");
        markers.pop();
        assert!(markers.is_empty());
    }
}
