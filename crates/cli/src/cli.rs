//! CLI definitions and command dispatch.

use std::{fs::write, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};

use fa_paths::{Catalog, ResolveOptions, Resolver, Style};

use crate::{config::FONTAWESOME_VERSION, download::download, svg::svg_document};

#[derive(Parser)]
#[command(name = "fa-paths", version)]
#[command(about = "Resolve FontAwesome icon identifiers to SVG path data")]
#[command(after_help = "Examples:\n  \
    fa-paths resolve 'fas fa-gear' fa-github\n  \
    fa-paths download --out-dir build && fa-paths --catalog build/icons.json svg fa-ad")]
pub struct Cli {
    /// FontAwesome icons.json metadata (default: the embedded sample catalog)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
    /// Style tried for identifiers without one; repeat to set a fallback order
    #[arg(long = "default-style", global = true, value_name = "STYLE")]
    pub default_styles: Vec<Style>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the path data of each identifier
    Resolve {
        #[arg(value_name = "IDENTIFIER", required = true)]
        identifiers: Vec<String>,
    },
    /// Write a standalone SVG document for an identifier
    Svg {
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List canonical glyph names with their code point, styles and label
    List {
        /// Only glyphs published in this style
        #[arg(long)]
        style: Option<Style>,
    },
    /// Check that every path in the catalog parses and is drawable
    Check,
    /// Download the icon metadata of a FontAwesome Free release
    Download {
        #[arg(long, default_value = FONTAWESOME_VERSION)]
        version: String,
        #[arg(long, default_value = "build")]
        out_dir: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Resolve { identifiers } => self.resolve(identifiers),
            Commands::Svg { identifier, output } => self.svg(identifier, output.as_ref()),
            Commands::List { style } => self.list(*style),
            Commands::Check => self.check(),
            Commands::Download { version, out_dir } => {
                download(version, out_dir)?;
                Ok(())
            }
        }
    }

    fn resolver(&self) -> Result<Resolver> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
            None => Catalog::bundled()?,
        };
        let mut options = ResolveOptions::new();
        if !self.default_styles.is_empty() {
            options = options.default_styles(self.default_styles.iter().copied());
        }
        Ok(Resolver::with_options(catalog, options)?)
    }

    fn resolve(&self, identifiers: &[String]) -> Result<()> {
        let resolver = self.resolver()?;
        let mut failures = 0;
        for identifier in identifiers {
            match resolver.resolve(identifier) {
                Ok(path) => println!("{path}"),
                Err(e) => {
                    eprintln!("{identifier}: {e}");
                    failures += 1;
                }
            }
        }
        if failures > 0 {
            bail!("{failures} of {} identifiers could not be resolved", identifiers.len());
        }
        Ok(())
    }

    fn svg(&self, identifier: &str, output: Option<&PathBuf>) -> Result<()> {
        let resolver = self.resolver()?;
        let icon = resolver
            .resolve_icon(identifier)
            .with_context(|| format!("Failed to resolve {identifier:?}"))?;
        let document = svg_document(&icon);
        match output {
            Some(path) => {
                write(path, document)
                    .with_context(|| format!("Failed to write SVG: {}", path.display()))?;
                info!("Wrote {} ({}) to {}", icon.name, icon.style, path.display());
            }
            None => print!("{document}"),
        }
        Ok(())
    }

    fn list(&self, style: Option<Style>) -> Result<()> {
        let resolver = self.resolver()?;
        for line in list_lines(resolver.catalog(), style) {
            println!("{line}");
        }
        Ok(())
    }

    fn check(&self) -> Result<()> {
        let resolver = self.resolver()?;
        let catalog = resolver.catalog();
        let issues = catalog.validate();
        for issue in &issues {
            debug!("Invalid record: {issue:?}");
            eprintln!("{issue}");
        }

        println!("Catalog Summary");
        println!("  Glyphs:  {}", catalog.len());
        println!("  Records: {}", catalog.record_count());
        println!("  Aliases: {}", resolver.aliases().len());
        if !issues.is_empty() {
            println!("  Invalid: {}", issues.len());
            bail!("{} records have unusable path data", issues.len());
        }
        Ok(())
    }
}

/// One tab-separated line per glyph: name, code point, styles and label.
fn list_lines(catalog: &Catalog, style: Option<Style>) -> Vec<String> {
    let mut lines = Vec::new();
    for (name, family) in catalog.families() {
        let styles: Vec<_> = family.styles().collect();
        if style.is_some_and(|s| !styles.contains(&s)) {
            continue;
        }
        let keys: Vec<_> = styles.iter().map(|s| s.key()).collect();
        lines.push(format!(
            "{name}\t{}\t{}\t{}",
            family.unicode.as_deref().unwrap_or("-"),
            keys.join(","),
            family.label.as_deref().unwrap_or(name)
        ));
    }
    lines
}
