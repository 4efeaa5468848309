//! # fa-paths
//!
//! Resolve FontAwesome icon identifiers to SVG path data.
//!
//! Identifiers may use any of the historical conventions: the FontAwesome 6
//! form (`fa-solid fa-arrow-left`), FontAwesome 5 prefixes
//! (`fas fa-arrow-left`), a bare glyph token (`fa-arrow-left`), and glyph
//! names that were renamed in FontAwesome 6 (`fa-ad` is `fa-rectangle-ad`).
//!
//! Resolution is a pure function of the identifier and an immutable catalog.
//! It fails with [`ResolveError::MalformedIdentifier`] when the identifier
//! cannot be split into a style and a glyph name, and with
//! [`ResolveError::GlyphNotFound`] when the catalog has no such glyph in the
//! requested style. An explicit style never falls back to another one.
//!
//! ## Example
//!
//! ```
//! let legacy = fa_paths::resolve("fas fa-cog").unwrap();
//! let current = fa_paths::resolve("fa-solid fa-gear").unwrap();
//! assert_eq!(legacy, current);
//!
//! assert!(fa_paths::resolve("far fa-gear").unwrap_err().is_not_found());
//! ```
//!
//! [`resolve`] uses a small catalog embedded in the crate: sixteen glyphs
//! taken verbatim from the FontAwesome Free 6.2.0 metadata (icons under
//! CC BY 4.0). Load the full `icons.json` of a FontAwesome release with
//! [`Catalog::from_path`] and wrap it in a [`Resolver`] to resolve every
//! published glyph.

mod aliases;
mod catalog;
mod error;
mod identifier;
mod options;
mod resolver;
mod style;

use std::sync::LazyLock;

pub use aliases::{AliasTable, LEGACY_GLYPH_ALIASES};
pub use catalog::{Catalog, GlyphFamily, GlyphRecord, PathIssue, PathProblem};
pub use error::{CatalogError, MalformedReason, ResolveError, Result};
pub use identifier::IconId;
pub use options::ResolveOptions;
pub use resolver::{ResolvedIcon, Resolver};
pub use style::{ALL_STYLES, Style, UnknownStyle};

static DEFAULT_RESOLVER: LazyLock<Resolver> = LazyLock::new(|| {
    Catalog::bundled()
        .and_then(Resolver::new)
        .expect("embedded icon metadata is valid")
});

/// The resolver over the embedded catalog, built on first use.
pub fn default_resolver() -> &'static Resolver {
    &DEFAULT_RESOLVER
}

/// Resolve an identifier against the embedded catalog.
pub fn resolve(identifier: &str) -> Result<String> {
    default_resolver().resolve(identifier)
}
