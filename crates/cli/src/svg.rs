//! Standalone SVG documents for resolved icons.

use fa_paths::ResolvedIcon;

/// Wrap a resolved icon in an `<svg>` element sized to the glyph's box.
pub fn svg_document(icon: &ResolvedIcon<'_>) -> String {
    let record = icon.record;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\
         <!-- {} ({}) --><path d=\"{}\"/></svg>\n",
        record.width,
        record.height,
        icon.name,
        icon.style,
        escape_attribute(&record.path)
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
