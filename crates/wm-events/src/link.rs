//! Link payload carried by link events.

/// A link to a document, with every addressing refinement optional.
///
/// Only the reference is mandatory; label, anchor, query string, inter-wiki
/// alias, and explicit target are independently present or absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// The document reference being linked to.
    pub reference: String,
    /// Display label, when it differs from the reference.
    pub label: Option<String>,
    /// Anchor within the target document.
    pub anchor: Option<String>,
    /// Query string appended to the target.
    pub query_string: Option<String>,
    /// Alias of a configured inter-wiki destination.
    pub interwiki_alias: Option<String>,
    /// Explicit browse target (e.g. a new window).
    pub target: Option<String>,
}

impl Link {
    /// Create a link to `reference` with no optional refinements.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Self::default()
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Set the query string.
    #[must_use]
    pub fn with_query_string(mut self, query_string: impl Into<String>) -> Self {
        self.query_string = Some(query_string.into());
        self
    }

    /// Set the inter-wiki alias.
    #[must_use]
    pub fn with_interwiki_alias(mut self, alias: impl Into<String>) -> Self {
        self.interwiki_alias = Some(alias.into());
        self
    }

    /// Set the explicit browse target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}
