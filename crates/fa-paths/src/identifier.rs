//! Parsing of icon identifiers such as `fas fa-arrow-left`.

use std::{fmt, str::FromStr};

use crate::{MalformedReason, ResolveError, Result, Style};

/// Generic namespace marker that prefixes every glyph token.
const GLYPH_MARKER: &str = "fa-";

/// FontAwesome 4 class carried alongside the glyph token (`fa fa-home`).
const NAMESPACE_TOKEN: &str = "fa";

/// A parsed identifier: an optional style and the glyph name as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconId {
    pub style: Option<Style>,
    pub name: String,
}

impl IconId {
    pub fn new(style: Option<Style>, name: impl Into<String>) -> Self {
        Self { style, name: name.into() }
    }

    /// Split a whitespace separated identifier into style and glyph name.
    ///
    /// Accepted tokens are the style prefixes (`fas`, `fa-solid`, ...), the
    /// bare `fa` namespace marker, and exactly one `fa-<name>` glyph token.
    /// Anything else makes the identifier malformed.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut style = None;
        let mut name = None;

        for token in raw.split_whitespace() {
            if token == NAMESPACE_TOKEN {
                continue;
            }
            if let Some(found) = Style::from_prefix(token) {
                match style {
                    Some(existing) if existing != found => {
                        return Err(ResolveError::malformed(raw, MalformedReason::ConflictingStyles));
                    }
                    _ => style = Some(found),
                }
                continue;
            }
            let Some(glyph) = token.strip_prefix(GLYPH_MARKER).filter(|g| !g.is_empty()) else {
                return Err(ResolveError::malformed(raw, MalformedReason::UnknownToken));
            };
            if name.replace(glyph).is_some() {
                return Err(ResolveError::malformed(raw, MalformedReason::MultipleGlyphs));
            }
        }

        match name {
            Some(name) => Ok(Self::new(style, name)),
            None if raw.trim().is_empty() => {
                Err(ResolveError::malformed(raw, MalformedReason::Empty))
            }
            None => Err(ResolveError::malformed(raw, MalformedReason::MissingGlyph)),
        }
    }
}

impl FromStr for IconId {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the modern form, e.g. `fa-solid fa-house`.
impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(style) = self.style {
            write!(f, "{} ", style.prefix())?;
        }
        write!(f, "{GLYPH_MARKER}{}", self.name)
    }
}
