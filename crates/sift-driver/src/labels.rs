//! Display labels for generated help and status text.

/// Nouns and verb used to render help text and the status line.
///
/// Purely cosmetic; the labels have no effect on loop behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Singular noun for one item, e.g. "file".
    pub singular: String,
    /// Plural noun, e.g. "files".
    pub plural: String,
    /// Verb describing the action, e.g. "delete".
    pub verb: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            singular: "object".to_string(),
            plural: "objects".to_string(),
            verb: "act on".to_string(),
        }
    }
}

impl Labels {
    /// Creates labels from the three display strings.
    #[must_use]
    pub fn new(
        singular: impl Into<String>,
        plural: impl Into<String>,
        verb: impl Into<String>,
    ) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
            verb: verb.into(),
        }
    }

    /// Sets the singular noun.
    #[must_use]
    pub fn with_singular(mut self, singular: impl Into<String>) -> Self {
        self.singular = singular.into();
        self
    }

    /// Sets the plural noun.
    #[must_use]
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = plural.into();
        self
    }

    /// Sets the verb.
    #[must_use]
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = verb.into();
        self
    }
}
