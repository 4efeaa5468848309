//! fa-paths CLI library.

pub mod cli;
pub mod config;
pub mod download;
pub mod svg;

pub use download::download;
pub use svg::svg_document;
