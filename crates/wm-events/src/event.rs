//! The closed event and tag vocabulary.

use crate::link::Link;
use crate::parameters::Parameters;

/// Section heading depth. The protocol carries six levels even though some
/// consumers cannot represent the deepest one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionLevel {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
}

impl SectionLevel {
    /// Numeric depth, 1 through 6.
    #[must_use]
    pub fn as_number(self) -> u8 {
        match self {
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
            Self::Level4 => 4,
            Self::Level5 => 5,
            Self::Level6 => 6,
        }
    }
}

/// List numbering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// Inline formatting span kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    Bold,
    Italic,
    Strikeout,
    Underline,
    Superscript,
    Subscript,
    Monospace,
}

/// A macro invocation: name, attribute map, and optional body.
///
/// The same payload is carried by macro markers (which bracket the macro's
/// expanded content) and by inline/standalone macro events (which carry the
/// unexpanded call only).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroCall {
    /// Macro name.
    pub name: String,
    /// Macro parameters, in author order.
    pub parameters: Parameters,
    /// Macro body, absent for body-less macros.
    pub content: Option<String>,
}

impl MacroCall {
    /// Create a call to `name` with no parameters and no body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
            content: None,
        }
    }

    /// Add a parameter, keeping author order.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Set the body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Block-level constructs opened by [`Event::Begin`] and closed by
/// [`Event::End`].
///
/// An `End` carries the same payload as its matching `Begin`; for macro
/// markers that is load-bearing, since a consumer that discards the marker's
/// inner events re-serializes the original call from the `End` payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// The whole document. Outermost pair of every stream.
    Document,
    /// A paragraph, with optional presentation attributes.
    Paragraph(Parameters),
    /// A section heading.
    Section(SectionLevel),
    /// A bulleted or numbered list.
    List(ListKind),
    /// One item of the innermost open list.
    ListItem,
    /// A definition list.
    DefinitionList,
    /// A term line of the innermost open definition list.
    DefinitionTerm,
    /// A description line of the innermost open definition list.
    DefinitionDescription,
    /// A quotation block, with optional presentation attributes.
    Quotation(Parameters),
    /// One line of the innermost open quotation.
    QuotationLine,
    /// An inline formatting span.
    Format(Format),
    /// Brackets the expanded content of a macro. Consumers choose between
    /// replaying the inner events and re-serializing the original call.
    MacroMarker(MacroCall),
    /// A raw XML element from the model layer.
    XmlElement {
        /// Element name.
        name: String,
        /// Element attributes.
        attributes: Parameters,
    },
}

impl Tag {
    /// Human-readable kind label, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Paragraph(_) => "paragraph",
            Self::Section(_) => "section",
            Self::List(_) => "list",
            Self::ListItem => "list item",
            Self::DefinitionList => "definition list",
            Self::DefinitionTerm => "definition term",
            Self::DefinitionDescription => "definition description",
            Self::Quotation(_) => "quotation",
            Self::QuotationLine => "quotation line",
            Self::Format(_) => "format span",
            Self::MacroMarker(_) => "macro marker",
            Self::XmlElement { .. } => "xml element",
        }
    }
}

/// One notification in a document event stream.
///
/// Structural constructs arrive as [`Event::Begin`]/[`Event::End`] pairs;
/// everything else is atomic and occurs singly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Open a block-level construct.
    Begin(Tag),
    /// Close the innermost open construct of the same kind.
    End(Tag),
    /// A run of word characters, emitted verbatim.
    Word(String),
    /// A single inter-word space.
    Space,
    /// A symbol the producer's lexer set apart from word characters.
    SpecialSymbol(String),
    /// An explicit new-paragraph-line marker.
    NewLine,
    /// An explicit line break inside the current block.
    LineBreak,
    /// Text whose every character must be protected from markup
    /// interpretation.
    Escape(String),
    /// Protected text inside a line.
    VerbatimInline(String),
    /// Protected text standing on its own.
    VerbatimStandalone(String),
    /// A horizontal rule.
    HorizontalLine,
    /// A run of `count` empty source lines.
    EmptyLines(u32),
    /// A link.
    Link(Link),
    /// An unexpanded macro call inside a line.
    InlineMacro(MacroCall),
    /// An unexpanded macro call standing on its own.
    StandaloneMacro(MacroCall),
    /// A named anchor.
    Id(String),
}
