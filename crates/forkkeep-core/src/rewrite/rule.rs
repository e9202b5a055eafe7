//! The single substitution applied by a rewrite run

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::{Error, Result};

/// Matches whole `GL42.gl` .. `GL45.gl` references.
pub const DEFAULT_PATTERN: &str = r"\bGL4[2345]\.gl\b";

/// Routes those references through the fork's command dispatcher.
pub const DEFAULT_REPLACEMENT: &str = "de.florianmichael.thingl.GlCommands.get().gl";

/// A pattern and the literal text that replaces each of its matches.
///
/// The replacement is inserted verbatim: `$1` or `${name}` in it are not
/// expanded. Construction rejects a replacement that the pattern matches on
/// its own; for identifier-anchored patterns that makes a second application
/// to the output a no-op.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Build a rule from a regular expression and a literal replacement.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        let replacement = replacement.into();

        if regex.is_match(&replacement) {
            return Err(Error::NonIdempotentRule {
                pattern: pattern.to_string(),
                replacement,
            });
        }

        Ok(Self {
            pattern: regex,
            replacement,
        })
    }

    /// Build a rule matching any of `tokens` as a whole identifier.
    ///
    /// Tokens are literal text; `old_call` matches `old_call(x)` but not
    /// `my_old_call(x)` or `old_caller(x)`.
    pub fn whole_tokens<I, S>(tokens: I, replacement: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternation = tokens
            .into_iter()
            .map(|t| regex::escape(t.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        if alternation.is_empty() {
            return Err(Error::InvalidPattern {
                pattern: String::new(),
                message: "at least one token is required".into(),
            });
        }

        Self::new(&format!(r"\b(?:{alternation})\b"), replacement)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// Returns the rewritten text and whether it differs from the input.
    /// Text without matches is returned borrowed.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, bool) {
        let rewritten = self
            .pattern
            .replace_all(text, NoExpand(self.replacement.as_str()));
        let changed = match &rewritten {
            Cow::Borrowed(_) => false,
            Cow::Owned(s) => s != text,
        };
        (rewritten, changed)
    }
}
