//! Error types for identifier resolution and catalog loading.

use std::{fmt, io, result};

use crate::Style;

/// Why an identifier could not be split into a style and a glyph name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The identifier is empty or whitespace only.
    Empty,
    /// No `fa-<name>` token is present.
    MissingGlyph,
    /// More than one `fa-<name>` token is present.
    MultipleGlyphs,
    /// Two style tokens name different styles.
    ConflictingStyles,
    /// A token is neither a style prefix nor an `fa-` glyph token.
    UnknownToken,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "identifier is empty",
            Self::MissingGlyph => "no glyph token",
            Self::MultipleGlyphs => "more than one glyph token",
            Self::ConflictingStyles => "conflicting style tokens",
            Self::UnknownToken => "unrecognized token",
        })
    }
}

/// Errors returned when resolving an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("malformed icon identifier {identifier:?}: {reason}")]
    MalformedIdentifier { identifier: String, reason: MalformedReason },

    #[error("{}", not_found_message(.name, .canonical, .style))]
    GlyphNotFound {
        /// Glyph name as written in the identifier.
        name: String,
        /// Name after legacy alias translation.
        canonical: String,
        /// Style that was requested explicitly, if any.
        style: Option<Style>,
    },
}

impl ResolveError {
    pub(crate) fn malformed(identifier: &str, reason: MalformedReason) -> Self {
        Self::MalformedIdentifier { identifier: identifier.to_owned(), reason }
    }

    /// True for [`ResolveError::GlyphNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GlyphNotFound { .. })
    }

    /// True for [`ResolveError::MalformedIdentifier`].
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedIdentifier { .. })
    }
}

fn not_found_message(name: &str, canonical: &str, style: &Option<Style>) -> String {
    let mut message = format!("glyph '{name}'");
    if name != canonical {
        message.push_str(&format!(" (now '{canonical}')"));
    }
    match style {
        Some(style) => message.push_str(&format!(" not found in style {style}")),
        None => message.push_str(" not found"),
    }
    message
}

/// Errors that can occur while loading a glyph catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse icon metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read icon metadata: {0}")]
    Io(#[from] io::Error),

    #[error("glyph '{name}' has no path data for style {style}")]
    EmptyPath { name: String, style: Style },

    #[error("legacy name '{legacy}' maps to both '{first}' and '{second}'")]
    AliasConflict { legacy: String, first: String, second: String },
}

pub type Result<T, E = ResolveError> = result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ResolveError::GlyphNotFound {
            name: "ad".into(),
            canonical: "rectangle-ad".into(),
            style: Some(Style::Brands),
        };
        assert_eq!(err.to_string(), "glyph 'ad' (now 'rectangle-ad') not found in style brands");

        let err = ResolveError::GlyphNotFound {
            name: "house".into(),
            canonical: "house".into(),
            style: None,
        };
        assert_eq!(err.to_string(), "glyph 'house' not found");
        assert!(err.is_not_found());
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_message() {
        let err = ResolveError::malformed("fas far fa-x", MalformedReason::ConflictingStyles);
        assert_eq!(
            err.to_string(),
            "malformed icon identifier \"fas far fa-x\": conflicting style tokens"
        );
        assert!(err.is_malformed());
    }
}
