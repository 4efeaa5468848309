//! The glyph catalog: canonical glyph names and their path data per style.
//!
//! Catalogs are read from FontAwesome's published `icons.json` metadata,
//! an object keyed by canonical glyph name:
//!
//! ```json
//! {
//!   "house": {
//!     "label": "house",
//!     "unicode": "f015",
//!     "aliases": { "names": ["home"] },
//!     "svg": { "solid": { "width": 576, "height": 512, "path": "M..." } }
//!   }
//! }
//! ```
//!
//! Duotone entries carry a two-element `path` array; the layers are joined
//! into a single path string.

use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use indexmap::IndexMap;
use kurbo::{BezPath, Rect, Shape};
use log::{debug, info};
use rayon::prelude::*;
use serde::Deserialize;

use crate::{CatalogError, Style};

const BUNDLED_METADATA: &str = include_str!("../data/icons.json");

/// Path data of one glyph in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub width: u32,
    pub height: u32,
    pub path: String,
}

impl GlyphRecord {
    pub fn new(width: u32, height: u32, path: impl Into<String>) -> Self {
        Self { width, height, path: path.into() }
    }

    /// Parse the path data and return its bounding box.
    pub fn bounds(&self) -> Result<Rect, PathProblem> {
        let path =
            BezPath::from_svg(&self.path).map_err(|e| PathProblem::Unparsable(e.to_string()))?;
        let bounds = path.bounding_box();
        if bounds.is_zero_area() {
            return Err(PathProblem::EmptyBounds);
        }
        Ok(bounds)
    }
}

/// A glyph and the styles it is published in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphFamily {
    /// Display name from the metadata.
    pub label: Option<String>,
    /// Code point of the glyph in the icon font, as hex (`f013`).
    pub unicode: Option<String>,
    records: IndexMap<Style, GlyphRecord>,
}

impl GlyphFamily {
    pub fn get(&self, style: Style) -> Option<&GlyphRecord> {
        self.records.get(&style)
    }

    pub fn styles(&self) -> impl Iterator<Item = Style> + '_ {
        self.records.keys().copied()
    }
}

/// Canonical glyph name and style to path data. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    glyphs: IndexMap<String, GlyphFamily>,
    aliases: Vec<(String, String)>,
}

#[derive(Deserialize)]
struct RawIcon {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    unicode: Option<String>,
    #[serde(default)]
    aliases: Option<RawAliases>,
    #[serde(default)]
    svg: IndexMap<String, RawSvg>,
}

#[derive(Deserialize)]
struct RawAliases {
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Deserialize)]
struct RawSvg {
    width: u32,
    height: u32,
    path: RawPath,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPath {
    Single(String),
    Layers(Vec<String>),
}

impl RawPath {
    fn into_path(self) -> String {
        match self {
            RawPath::Single(path) => path,
            RawPath::Layers(layers) => layers
                .into_iter()
                .filter(|layer| !layer.trim().is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyphs taken from the FontAwesome Free 6.2.0 metadata, embedded in
    /// the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_METADATA)
    }

    /// Parse `icons.json` metadata from a string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Self::from_raw(serde_json::from_reader(BufReader::new(reader))?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let catalog = Self::from_reader(File::open(path)?)?;
        info!("Loaded {} glyphs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    fn from_raw(raw: IndexMap<String, RawIcon>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (name, icon) in raw {
            for (key, svg) in icon.svg {
                let Some(style) = Style::from_key(&key) else {
                    debug!("Skipping unsupported style '{key}' of glyph '{name}'");
                    continue;
                };
                let record = GlyphRecord::new(svg.width, svg.height, svg.path.into_path());
                catalog.insert(&name, style, record)?;
            }
            if let Some(family) = catalog.glyphs.get_mut(&name) {
                family.label = icon.label;
                family.unicode = icon.unicode;
            }
            for legacy in icon.aliases.map(|a| a.names).unwrap_or_default() {
                catalog.insert_alias(legacy, &name);
            }
        }
        debug!(
            "Parsed icon metadata: {} glyphs, {} records, {} aliases",
            catalog.len(),
            catalog.record_count(),
            catalog.aliases.len()
        );
        Ok(catalog)
    }

    /// Add or replace the record of `name` in `style`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        style: Style,
        record: GlyphRecord,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        if record.path.trim().is_empty() {
            return Err(CatalogError::EmptyPath { name, style });
        }
        self.glyphs.entry(name).or_default().records.insert(style, record);
        Ok(())
    }

    /// Declare that `legacy` is an older name of the canonical glyph `canonical`.
    pub fn insert_alias(&mut self, legacy: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.push((legacy.into(), canonical.into()));
    }

    /// Aliases declared by the metadata, in declaration order.
    pub fn declared_aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }

    pub fn get(&self, name: &str, style: Style) -> Option<&GlyphRecord> {
        self.glyphs.get(name)?.get(style)
    }

    pub fn family(&self, name: &str) -> Option<&GlyphFamily> {
        self.glyphs.get(name)
    }

    /// Like [`Catalog::family`], also returning the stored name.
    pub fn family_entry(&self, name: &str) -> Option<(&str, &GlyphFamily)> {
        self.glyphs.get_key_value(name).map(|(name, family)| (name.as_str(), family))
    }

    /// True when `name` is a canonical glyph in any style.
    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    pub fn styles_of(&self, name: &str) -> Vec<Style> {
        self.glyphs.get(name).map(|f| f.styles().collect()).unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }

    /// Glyph names with their metadata, in metadata order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &GlyphFamily)> {
        self.glyphs.iter().map(|(name, family)| (name.as_str(), family))
    }

    /// Every `(name, style, record)` triple, in metadata order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Style, &GlyphRecord)> {
        self.glyphs.iter().flat_map(|(name, family)| {
            family.records.iter().map(move |(&style, record)| (name.as_str(), style, record))
        })
    }

    /// Number of glyph names.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Number of (name, style) records.
    pub fn record_count(&self) -> usize {
        self.glyphs.values().map(|f| f.records.len()).sum()
    }

    /// Parse every record's path and report those that are not drawable.
    pub fn validate(&self) -> Vec<PathIssue> {
        let records: Vec<_> = self.iter().collect();
        records
            .par_iter()
            .filter_map(|&(name, style, record)| {
                record.bounds().err().map(|problem| PathIssue {
                    name: name.to_owned(),
                    style,
                    problem,
                })
            })
            .collect()
    }
}

/// What is wrong with a record's path data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathProblem {
    Unparsable(String),
    EmptyBounds,
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathProblem::Unparsable(e) => write!(f, "invalid path data: {e}"),
            PathProblem::EmptyBounds => f.write_str("path has an empty bounding box"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIssue {
    pub name: String,
    pub style: Style,
    pub problem: PathProblem,
}

impl fmt::Display for PathIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.style, self.problem)
    }
}
