//! Options for identifier resolution

use crate::Style;

/// Styles tried, in order, for identifiers without a style token.
const DEFAULT_STYLES: &[Style] = &[Style::Solid, Style::Regular, Style::Brands];

/// Options for identifier resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Fallback order for identifiers that name no style. Identifiers with an
    /// explicit style never fall back.
    pub default_styles: Vec<Style>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { default_styles: DEFAULT_STYLES.to_vec() }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fallback order (accepts any iterable of styles)
    pub fn default_styles(mut self, styles: impl IntoIterator<Item = Style>) -> Self {
        self.default_styles = Vec::new();
        for style in styles {
            if !self.default_styles.contains(&style) {
                self.default_styles.push(style);
            }
        }
        self
    }

    /// Resolve unstyled identifiers against a single style
    pub fn default_style(self, style: Style) -> Self {
        self.default_styles([style])
    }
}
