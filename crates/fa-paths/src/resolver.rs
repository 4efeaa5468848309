//! Identifier resolution against a catalog.

use log::{debug, warn};

use crate::{
    AliasTable, Catalog, CatalogError, GlyphRecord, IconId, ResolveError, ResolveOptions, Result,
    Style,
};

/// A successfully resolved identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedIcon<'a> {
    /// Canonical glyph name.
    pub name: &'a str,
    /// Style the record was found in.
    pub style: Style,
    pub record: &'a GlyphRecord,
}

impl ResolvedIcon<'_> {
    pub fn path(&self) -> &str {
        &self.record.path
    }
}

/// Resolves identifiers to path data.
///
/// Holds a catalog and the alias table derived from it; both are immutable,
/// so a resolver can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    aliases: AliasTable,
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        Self::with_options(catalog, ResolveOptions::default())
    }

    /// Build a resolver, merging the catalog's declared aliases into the
    /// built-in legacy table.
    pub fn with_options(catalog: Catalog, options: ResolveOptions) -> Result<Self, CatalogError> {
        let mut aliases = AliasTable::legacy();
        for (legacy, canonical) in catalog.declared_aliases() {
            aliases.insert(legacy, canonical)?;
        }

        // Canonical names resolve to themselves, whatever an alias says.
        let shadowing: Vec<String> = aliases
            .iter()
            .filter(|&(legacy, _)| catalog.contains(legacy))
            .map(|(legacy, _)| legacy.to_owned())
            .collect();
        for legacy in shadowing {
            if let Some(canonical) = aliases.remove(&legacy) {
                warn!("Ignoring alias '{legacy}' -> '{canonical}': '{legacy}' is a glyph");
            }
        }

        debug!(
            "Resolver ready: {} glyphs, {} aliases, default styles {:?}",
            catalog.len(),
            aliases.len(),
            options.default_styles
        );
        Ok(Self { catalog, aliases, options })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve an identifier to its path data.
    pub fn resolve(&self, identifier: &str) -> Result<String> {
        self.resolve_icon(identifier).map(|icon| icon.record.path.clone())
    }

    /// Resolve an identifier, keeping the glyph's name, style and box.
    pub fn resolve_icon(&self, identifier: &str) -> Result<ResolvedIcon<'_>> {
        self.resolve_id(&IconId::parse(identifier)?)
    }

    /// Resolve an already parsed identifier.
    ///
    /// An explicit style is looked up as is; only identifiers without a style
    /// walk the configured default styles.
    pub fn resolve_id(&self, id: &IconId) -> Result<ResolvedIcon<'_>> {
        let canonical = self.aliases.canonical(&id.name);
        let not_found = || ResolveError::GlyphNotFound {
            name: id.name.clone(),
            canonical: canonical.to_owned(),
            style: id.style,
        };

        let (name, family) = self.catalog.family_entry(canonical).ok_or_else(not_found)?;
        let found = match id.style {
            Some(style) => family.get(style).map(|record| (style, record)),
            None => self
                .options
                .default_styles
                .iter()
                .find_map(|&style| family.get(style).map(|record| (style, record))),
        };
        let (style, record) = found.ok_or_else(not_found)?;
        Ok(ResolvedIcon { name, style, record })
    }
}
