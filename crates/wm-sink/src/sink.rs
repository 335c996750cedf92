//! The generic document-sink capability set.

/// A capability-limited document-building target.
///
/// The sink's vocabulary is deliberately narrower than the event protocol:
/// five section levels, three formatting styles, no quotations, no macro
/// boundaries, no anchors. [`SinkRenderer`](crate::SinkRenderer) owns the
/// translation down to this set; implementations only have to build their
/// target structure from these calls, delivered in document order.
pub trait DocumentSink {
    /// Open the document body.
    fn body_start(&mut self);
    /// Close the document body.
    fn body_end(&mut self);

    /// Open a paragraph.
    fn paragraph_start(&mut self);
    /// Close a paragraph.
    fn paragraph_end(&mut self);

    /// Open a section at `level`, 1 through 5.
    fn section_start(&mut self, level: u8);
    /// Close a section at `level`, 1 through 5.
    fn section_end(&mut self, level: u8);

    /// Open a bulleted list.
    fn list_start(&mut self);
    /// Close a bulleted list.
    fn list_end(&mut self);

    /// Open a numbered list.
    fn numbered_list_start(&mut self);
    /// Close a numbered list.
    fn numbered_list_end(&mut self);

    /// Open a list item.
    fn list_item_start(&mut self);
    /// Close a list item.
    fn list_item_end(&mut self);

    /// Open a definition list.
    fn definition_list_start(&mut self);
    /// Close a definition list.
    fn definition_list_end(&mut self);

    /// Open a defined term.
    fn defined_term_start(&mut self);
    /// Close a defined term.
    fn defined_term_end(&mut self);

    /// Open a term's definition.
    fn definition_start(&mut self);
    /// Close a term's definition.
    fn definition_end(&mut self);

    /// Open a bold span.
    fn bold_start(&mut self);
    /// Close a bold span.
    fn bold_end(&mut self);

    /// Open an italic span.
    fn italic_start(&mut self);
    /// Close an italic span.
    fn italic_end(&mut self);

    /// Open a monospaced span.
    fn monospaced_start(&mut self);
    /// Close a monospaced span.
    fn monospaced_end(&mut self);

    /// Emit a link to `reference`.
    fn link(&mut self, reference: &str);

    /// Emit text with no further structure.
    fn raw_text(&mut self, text: &str);

    /// Emit an explicit line break.
    fn line_break(&mut self);

    /// Emit a horizontal rule.
    fn horizontal_rule(&mut self);

    /// Emit text protected from any markup interpretation.
    fn verbatim(&mut self, text: &str);
}
