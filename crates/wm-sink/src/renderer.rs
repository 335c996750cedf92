//! Event-to-sink translation.

use tracing::trace;
use wm_events::{Event, Format, ListKind, SectionLevel, Tag};

use crate::sink::DocumentSink;

/// Forwards each event of a stream onto a [`DocumentSink`].
///
/// Stateless apart from owning the sink: every event maps directly onto sink
/// calls, or is dropped when the sink has no representation for it. Macro
/// markers are boundaries only — the expansion between them is exactly what
/// the sink should receive, so the markers themselves forward nothing.
///
/// Expects a well-formed stream, like every consumer of the protocol; it
/// forwards calls as they come and performs no pairing checks of its own.
pub struct SinkRenderer<S: DocumentSink> {
    sink: S,
}

impl<S: DocumentSink> SinkRenderer<S> {
    /// Wrap `sink` for one rendering session.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Forward a whole event stream.
    pub fn render<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.process_event(event);
        }
    }

    /// Forward one event, in document order.
    pub fn process_event(&mut self, event: Event) {
        match event {
            Event::Begin(tag) => self.begin(&tag),
            Event::End(tag) => self.end(&tag),
            // The sink has no distinct concept for these; they degrade to
            // raw text.
            Event::Word(word) => self.sink.raw_text(&word),
            Event::Space => self.sink.raw_text(" "),
            Event::SpecialSymbol(symbol) => self.sink.raw_text(&symbol),
            Event::NewLine => self.sink.raw_text("\n"),
            Event::LineBreak => self.sink.line_break(),
            // No escape concept either; protected is the closest it has.
            Event::Escape(text) => self.sink.verbatim(&text),
            Event::VerbatimInline(text) | Event::VerbatimStandalone(text) => {
                self.sink.verbatim(&text);
            }
            Event::HorizontalLine => self.sink.horizontal_rule(),
            Event::Link(link) => self.sink.link(&link.reference),
            Event::InlineMacro(call) | Event::StandaloneMacro(call) => {
                trace!(name = %call.name, "unexpanded macro call has no sink representation, dropping");
            }
            Event::EmptyLines(count) => {
                trace!(count, "empty lines have no sink representation, dropping");
            }
            Event::Id(name) => {
                trace!(name = %name, "id anchor has no sink representation, dropping");
            }
        }
    }

    /// Take back the sink, ending the session.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn begin(&mut self, tag: &Tag) {
        match tag {
            Tag::Document => self.sink.body_start(),
            Tag::Paragraph(_) => self.sink.paragraph_start(),
            Tag::Section(level) => self.sink.section_start(sink_section_level(*level)),
            Tag::List(ListKind::Bulleted) => self.sink.list_start(),
            Tag::List(ListKind::Numbered) => self.sink.numbered_list_start(),
            Tag::ListItem => self.sink.list_item_start(),
            Tag::DefinitionList => self.sink.definition_list_start(),
            Tag::DefinitionTerm => self.sink.defined_term_start(),
            Tag::DefinitionDescription => self.sink.definition_start(),
            Tag::Format(Format::Bold) => self.sink.bold_start(),
            Tag::Format(Format::Italic) => self.sink.italic_start(),
            Tag::Format(Format::Monospace) => self.sink.monospaced_start(),
            Tag::Format(format) => {
                trace!(?format, "format has no sink representation, dropping");
            }
            Tag::Quotation(_) | Tag::QuotationLine | Tag::MacroMarker(_) | Tag::XmlElement { .. } => {
                trace!(kind = tag.kind_name(), "no sink representation, dropping");
            }
        }
    }

    fn end(&mut self, tag: &Tag) {
        match tag {
            Tag::Document => self.sink.body_end(),
            Tag::Paragraph(_) => self.sink.paragraph_end(),
            Tag::Section(level) => self.sink.section_end(sink_section_level(*level)),
            Tag::List(ListKind::Bulleted) => self.sink.list_end(),
            Tag::List(ListKind::Numbered) => self.sink.numbered_list_end(),
            Tag::ListItem => self.sink.list_item_end(),
            Tag::DefinitionList => self.sink.definition_list_end(),
            Tag::DefinitionTerm => self.sink.defined_term_end(),
            Tag::DefinitionDescription => self.sink.definition_end(),
            Tag::Format(Format::Bold) => self.sink.bold_end(),
            Tag::Format(Format::Italic) => self.sink.italic_end(),
            Tag::Format(Format::Monospace) => self.sink.monospaced_end(),
            Tag::Format(_)
            | Tag::Quotation(_)
            | Tag::QuotationLine
            | Tag::MacroMarker(_)
            | Tag::XmlElement { .. } => {}
        }
    }
}

/// The sink has five section levels; the protocol's sixth collapses onto the
/// deepest one.
fn sink_section_level(level: SectionLevel) -> u8 {
    level.as_number().min(5)
}
