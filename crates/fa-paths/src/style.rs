//! FontAwesome styles and the prefixes that select them.

use std::{fmt, str::FromStr};

/// A rendering variant of the icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Style {
    Solid,
    Regular,
    Light,
    Thin,
    Duotone,
    Brands,
}

/// Every style, in the order FontAwesome lists them.
pub const ALL_STYLES: &[Style] = &[
    Style::Solid,
    Style::Regular,
    Style::Light,
    Style::Thin,
    Style::Duotone,
    Style::Brands,
];

/// Legacy (FontAwesome 5) and modern (FontAwesome 6) style prefixes.
const STYLE_PREFIXES: &[(&str, Style)] = &[
    ("fas", Style::Solid),
    ("far", Style::Regular),
    ("fal", Style::Light),
    ("fat", Style::Thin),
    ("fad", Style::Duotone),
    ("fab", Style::Brands),
    ("fa-solid", Style::Solid),
    ("fa-regular", Style::Regular),
    ("fa-light", Style::Light),
    ("fa-thin", Style::Thin),
    ("fa-duotone", Style::Duotone),
    ("fa-brands", Style::Brands),
];

impl Style {
    /// Key used for this style in `icons.json` metadata.
    pub const fn key(self) -> &'static str {
        match self {
            Style::Solid => "solid",
            Style::Regular => "regular",
            Style::Light => "light",
            Style::Thin => "thin",
            Style::Duotone => "duotone",
            Style::Brands => "brands",
        }
    }

    /// Legacy three-letter prefix, e.g. `fas`.
    pub const fn legacy_prefix(self) -> &'static str {
        match self {
            Style::Solid => "fas",
            Style::Regular => "far",
            Style::Light => "fal",
            Style::Thin => "fat",
            Style::Duotone => "fad",
            Style::Brands => "fab",
        }
    }

    /// Modern prefix, e.g. `fa-solid`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Style::Solid => "fa-solid",
            Style::Regular => "fa-regular",
            Style::Light => "fa-light",
            Style::Thin => "fa-thin",
            Style::Duotone => "fa-duotone",
            Style::Brands => "fa-brands",
        }
    }

    /// Map an identifier token (`fas`, `fa-solid`, ...) to its style.
    pub fn from_prefix(token: &str) -> Option<Self> {
        STYLE_PREFIXES
            .iter()
            .find_map(|&(prefix, style)| (prefix == token).then_some(style))
    }

    /// Map a metadata key (`solid`, `brands`, ...) to its style.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_STYLES.iter().copied().find(|style| style.key() == key)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}'")]
pub struct UnknownStyle(pub String);

/// Accepts metadata keys as well as either prefix form.
impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .or_else(|| Self::from_prefix(s))
            .ok_or_else(|| UnknownStyle(s.to_owned()))
    }
}
