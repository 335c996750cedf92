//! Event-stream replay into native wiki syntax.

use std::fmt::Write;

use wm_events::{Event, Format, Link, ListKind, MacroCall, Parameters, SectionLevel, Tag};

use crate::macros::render_macro;
use crate::state::{Element, ItemState, MarkerStack};

/// Replays a document event stream into the document's own markup dialect.
///
/// One instance renders exactly one stream: feed events in document order
/// through [`process_event`](Self::process_event) (or drive a whole stream
/// with [`render`](Self::render)) and take the text with
/// [`into_output`](Self::into_output). The input must be well-formed — every
/// end event matching the innermost open begin of the same kind; an
/// unmatched end is a producer bug, not a condition this renderer detects
/// (drivers can run `wm_events::validate::check` beforehand).
///
/// End events never know whether more content follows, so block endings only
/// arm a pending line break; the break is emitted by the next print, through
/// a single output gate that also discards everything produced inside a
/// macro marker.
pub struct SyntaxRenderer {
    output: String,
    element: Option<Element>,
    pending_newline: bool,
    suppressed: bool,
    markers: MarkerStack,
    list_depth: usize,
    definition_depth: usize,
    quotation_depth: usize,
    list_item: ItemState,
    definition_item: ItemState,
    quotation_line: ItemState,
}

impl SyntaxRenderer {
    /// Create a renderer for a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            element: None,
            pending_newline: false,
            suppressed: false,
            markers: MarkerStack::default(),
            list_depth: 0,
            definition_depth: 0,
            quotation_depth: 0,
            list_item: ItemState::default(),
            definition_item: ItemState::default(),
            quotation_line: ItemState::default(),
        }
    }

    /// Render a whole event stream.
    pub fn render<I>(events: I) -> String
    where
        I: IntoIterator<Item = Event>,
    {
        let mut renderer = Self::new();
        for event in events {
            renderer.process_event(event);
        }
        renderer.into_output()
    }

    /// Consume one event, in document order.
    pub fn process_event(&mut self, event: Event) {
        match event {
            Event::Begin(tag) => self.begin(tag),
            Event::End(tag) => self.end(&tag),
            Event::Word(word) => self.print(&word),
            Event::Space => self.print(" "),
            Event::SpecialSymbol(symbol) => self.print(&symbol),
            Event::NewLine => self.print("\\"),
            Event::LineBreak => self.print("\n"),
            Event::Escape(text) => self.escape(&text),
            Event::VerbatimInline(text) | Event::VerbatimStandalone(text) => self.verbatim(&text),
            Event::HorizontalLine => self.horizontal_line(),
            Event::EmptyLines(count) => self.empty_lines(count),
            Event::Link(link) => self.link(&link),
            Event::InlineMacro(call) => {
                let text = render_macro(&call);
                self.print(&text);
            }
            Event::StandaloneMacro(call) => self.standalone_macro(&call),
            Event::Id(name) => {
                let anchor = format!("{{{{id name=\"{name}\"}}}}");
                self.print(&anchor);
            }
        }
    }

    /// Take the rendered text, ending the session.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    fn begin(&mut self, tag: Tag) {
        match tag {
            Tag::Document => self.element = Some(Element::Document),
            Tag::Paragraph(parameters) => self.begin_paragraph(&parameters),
            Tag::Section(level) => self.begin_section(level),
            Tag::List(kind) => self.begin_list(kind),
            Tag::ListItem => self.begin_list_item(),
            Tag::DefinitionList => self.begin_definition_list(),
            Tag::DefinitionTerm => self.begin_definition_item("; "),
            Tag::DefinitionDescription => self.begin_definition_item(": "),
            Tag::Quotation(_) => self.begin_quotation(),
            Tag::QuotationLine => self.begin_quotation_line(),
            Tag::Format(format) => self.print(format_delimiter(format)),
            // Everything inside the marker is the macro's expansion; discard
            // it and re-serialize the original call at the matching end.
            Tag::MacroMarker(_) => self.suppressed = true,
            // The dialect has no inline-XML syntax; producers use macros.
            Tag::XmlElement { .. } => {}
        }
    }

    fn end(&mut self, tag: &Tag) {
        match tag {
            Tag::Document | Tag::XmlElement { .. } => {}
            Tag::Paragraph(_) | Tag::Section(_) => self.pending_newline = true,
            Tag::List(_) => self.end_list(),
            Tag::ListItem => self.list_item = ItemState::Closed,
            Tag::DefinitionList => self.end_definition_list(),
            Tag::DefinitionTerm | Tag::DefinitionDescription => {
                self.definition_item = ItemState::Closed;
            }
            Tag::Quotation(_) => self.end_quotation(),
            Tag::QuotationLine => self.quotation_line = ItemState::Closed,
            Tag::Format(format) => self.print(format_delimiter(*format)),
            Tag::MacroMarker(call) => {
                self.suppressed = false;
                let text = render_macro(call);
                self.print(&text);
            }
        }
    }

    fn begin_paragraph(&mut self, parameters: &Parameters) {
        // Headings, rules, and standalone macros already force a break after
        // themselves; any other predecessor needs a blank-line separator.
        if !matches!(
            self.element,
            Some(
                Element::Document | Element::HorizontalLine | Element::Macro | Element::Section
            )
        ) {
            self.print("\n");
        }

        if !parameters.is_empty() {
            let mut prefix = String::from("(%");
            for (name, value) in parameters.iter() {
                write!(prefix, " {name}=\"{value}\"").unwrap();
            }
            prefix.push_str(" %)\n");
            self.print(&prefix);
        }

        self.element = Some(Element::Paragraph);
    }

    fn begin_section(&mut self, level: SectionLevel) {
        let prefix = match level {
            SectionLevel::Level1 => "1 ",
            SectionLevel::Level2 => "1.1 ",
            SectionLevel::Level3 => "1.1.1 ",
            SectionLevel::Level4 => "1.1.1.1 ",
            // The dialect has no marker deeper than five levels.
            SectionLevel::Level5 | SectionLevel::Level6 => "1.1.1.1.1 ",
        };
        self.print(prefix);
        self.element = Some(Element::Section);
    }

    fn begin_list(&mut self, kind: ListKind) {
        // A nested list starting inside a still-open item goes on its own line.
        if self.list_item == ItemState::Open {
            self.print("\n");
            self.list_item = ItemState::Idle;
        }
        self.markers.push(kind);
        self.list_depth += 1;
        self.element = Some(Element::List);
    }

    fn begin_list_item(&mut self) {
        match self.list_item {
            ItemState::Closed if self.element != Some(Element::DefinitionList) => {
                self.print("\n");
                self.list_item = ItemState::Open;
            }
            // A definition list just closed inside this list; its end already
            // armed the break.
            ItemState::Closed => {}
            ItemState::Idle | ItemState::Open => self.list_item = ItemState::Open,
        }

        let prefix = self.markers.item_prefix();
        self.print(&prefix);
        self.print(" ");
    }

    fn end_list(&mut self) {
        self.markers.pop();
        self.list_depth -= 1;
        if self.list_depth == 0 {
            self.list_item = ItemState::Idle;
            self.pending_newline = true;
        }
    }

    fn begin_definition_list(&mut self) {
        if self.element == Some(Element::DefinitionList) {
            // Nested inside a term/description of an enclosing definition
            // list, or a sibling of one that just closed.
            self.print("\n");
        } else if self.list_item == ItemState::Open {
            self.print("\n");
        } else if self.definition_item == ItemState::Open {
            self.print("\n");
            self.definition_item = ItemState::Idle;
        }

        self.definition_depth += 1;
        self.element = Some(Element::DefinitionList);
    }

    fn begin_definition_item(&mut self, marker: &str) {
        if self.definition_item == ItemState::Closed {
            self.print("\n");
        }
        self.definition_item = ItemState::Open;

        // A definition list inside an ordinary list keeps the list prefix.
        if !self.markers.is_empty() {
            let prefix = self.markers.item_prefix();
            self.print(&prefix);
        }
        let depth_markers = ":".repeat(self.definition_depth - 1);
        self.print(&depth_markers);
        self.print(marker);
    }

    fn end_definition_list(&mut self) {
        self.definition_depth -= 1;
        if self.definition_depth == 0 {
            self.definition_item = ItemState::Idle;
            self.pending_newline = true;
            if self.list_item == ItemState::Open {
                self.list_item = ItemState::Idle;
            }
        }
    }

    fn begin_quotation(&mut self) {
        if self.quotation_line == ItemState::Open {
            self.print("\n");
            self.quotation_line = ItemState::Idle;
        }
        self.quotation_depth += 1;
        self.element = Some(Element::Quotation);
    }

    fn begin_quotation_line(&mut self) {
        if self.quotation_line == ItemState::Closed {
            self.print("\n");
        }
        self.quotation_line = ItemState::Open;

        let markers = ">".repeat(self.quotation_depth);
        self.print(&markers);
    }

    fn end_quotation(&mut self) {
        self.quotation_depth -= 1;
        if self.quotation_depth == 0 {
            self.quotation_line = ItemState::Idle;
            self.pending_newline = true;
        }
    }

    fn standalone_macro(&mut self, call: &MacroCall) {
        // A paragraph's own trailing break covers the macro; a document start
        // needs nothing.
        if !matches!(self.element, Some(Element::Document | Element::Paragraph)) {
            self.print("\n");
        }
        let text = render_macro(call);
        self.print(&text);
        self.element = Some(Element::Macro);
    }

    fn escape(&mut self, text: &str) {
        let mut escaped = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            escaped.push('\\');
            escaped.push(c);
        }
        self.print(&escaped);
    }

    fn verbatim(&mut self, text: &str) {
        self.print("{{{");
        self.print(text);
        self.print("}}}");
    }

    fn horizontal_line(&mut self) {
        self.print("----");
        self.pending_newline = true;
        self.element = Some(Element::HorizontalLine);
    }

    fn empty_lines(&mut self, count: u32) {
        // A single empty line is already implied by normal block spacing.
        if count > 1 {
            for _ in 0..count {
                self.print("\n");
            }
        }
    }

    fn link(&mut self, link: &Link) {
        let mut text = String::from("[[");
        if let Some(label) = &link.label {
            write!(text, "{label}>").unwrap();
        }
        text.push_str(&link.reference);
        if let Some(anchor) = &link.anchor {
            write!(text, "#{anchor}").unwrap();
        }
        if let Some(query_string) = &link.query_string {
            write!(text, "?{query_string}").unwrap();
        }
        if let Some(alias) = &link.interwiki_alias {
            write!(text, "@{alias}").unwrap();
        }
        if let Some(target) = &link.target {
            write!(text, ">{target}").unwrap();
        }
        text.push_str("]]");
        self.print(&text);
    }

    /// The single output gate: drops everything while a macro marker is
    /// open, otherwise flushes a pending line break before the text.
    fn print(&mut self, text: &str) {
        if self.suppressed {
            return;
        }
        if self.pending_newline {
            self.output.push('\n');
            self.pending_newline = false;
        }
        self.output.push_str(text);
    }
}

impl Default for SyntaxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-character delimiter for a formatting span, identical on open and
/// close. Same-kind nesting inside itself is representationally ambiguous in
/// the dialect; the renderer reproduces it as-is.
fn format_delimiter(format: Format) -> &'static str {
    match format {
        Format::Bold => "**",
        Format::Italic => "~~",
        Format::Strikeout => "--",
        Format::Underline => "__",
        Format::Superscript => "^^",
        Format::Subscript => ",,",
        Format::Monospace => "##",
    }
}
