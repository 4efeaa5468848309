//! Integration tests for identifier resolution.
//!
//! The embedded catalog covers the identifier conventions; the alias cases
//! run over a synthetic catalog holding every legacy target.

use std::{collections::HashSet, thread};

use fa_paths::{
    ALL_STYLES, Catalog, GlyphRecord, LEGACY_GLYPH_ALIASES, MalformedReason, ResolveError,
    ResolveOptions, Resolver, Style, default_resolver, resolve,
};

/// A catalog holding every canonical target of the legacy table, each with
/// a distinct path, in solid and regular.
fn legacy_target_catalog() -> Catalog {
    let targets: HashSet<&str> = LEGACY_GLYPH_ALIASES.iter().map(|&(_, c)| c).collect();
    let mut catalog = Catalog::new();
    for (i, name) in targets.into_iter().enumerate() {
        let size = i + 1;
        for style in [Style::Solid, Style::Regular] {
            let path = format!("M0 0H{size}V{size}H0Z");
            catalog.insert(name, style, GlyphRecord::new(512, 512, path)).unwrap();
        }
    }
    catalog
}

// ============================================================================
// Embedded catalog
// ============================================================================

#[test]
fn test_icon_exists_and_is_drawable() {
    for identifier in [
        "fa-github",
        "fa-angle-left",
        "fa-angle-right",
        "fa-brands fa-github",
        "fa-solid fa-angle-left",
        "fa-regular fa-copy",
    ] {
        let icon = default_resolver().resolve_icon(identifier).unwrap();
        assert!(!icon.path().is_empty(), "{identifier}");
        let bounds = icon.record.bounds().unwrap();
        assert!(bounds.area() > 0.0, "{identifier}");
    }
}

#[test]
fn test_unknown_icon_fails() {
    let err = resolve("fa-you-cant-find-me").unwrap_err();
    assert!(err.is_not_found());

    let err = resolve("fa").unwrap_err();
    assert!(matches!(
        err,
        ResolveError::MalformedIdentifier { reason: MalformedReason::MissingGlyph, .. }
    ));

    // angle-left is only published as solid
    let err = resolve("far fa-angle-left").unwrap_err();
    assert_eq!(
        err,
        ResolveError::GlyphNotFound {
            name: "angle-left".into(),
            canonical: "angle-left".into(),
            style: Some(Style::Regular),
        }
    );
}

#[test]
fn test_legacy_style_still_works() {
    for (legacy, current) in [
        ("fab fa-github", "fa-brands fa-github"),
        ("fas fa-angle-left", "fa-solid fa-angle-left"),
        ("far fa-copy", "fa-regular fa-copy"),
    ] {
        assert_eq!(resolve(legacy).unwrap(), resolve(current).unwrap(), "{legacy}");
    }
}

#[test]
fn test_bare_brand_glyph_uses_default_styles() {
    assert_eq!(resolve("fa-github").unwrap(), resolve("fab fa-github").unwrap());
    assert_eq!(resolve("fa fa-github").unwrap(), resolve("fab fa-github").unwrap());
}

#[test]
fn test_bare_glyph_falls_back_to_regular() {
    // copy is only embedded as regular
    let icon = default_resolver().resolve_icon("fa-copy").unwrap();
    assert_eq!((icon.name, icon.style), ("copy", Style::Regular));
    assert!(resolve("fas fa-copy").unwrap_err().is_not_found());
}

#[test]
fn test_legacy_value_in_embedded_catalog() {
    assert_eq!(resolve("fa-cog").unwrap(), resolve("fa-gear").unwrap());
    assert_eq!(resolve("fa-search").unwrap(), resolve("fa-magnifying-glass").unwrap());
    assert_eq!(
        resolve("fas fa-history").unwrap(),
        resolve("fa-solid fa-clock-rotate-left").unwrap()
    );
    assert_eq!(resolve("fa-paint-brush").unwrap(), resolve("fa-paintbrush").unwrap());
    assert_eq!(resolve("fa-pencil-alt").unwrap(), resolve("fa-pencil").unwrap());
}

#[test]
fn test_metadata_alias_in_embedded_catalog() {
    // navicon is declared by the metadata only
    assert_eq!(default_resolver().aliases().get("navicon"), Some("bars"));
    assert_eq!(resolve("fa fa-navicon").unwrap(), resolve("fa-solid fa-bars").unwrap());
}

#[test]
fn test_embedded_outlines_are_fontawesome_free() {
    let github = default_resolver().resolve_icon("fab fa-github").unwrap();
    assert!(github.path().starts_with("M165.9 397.4c0 2-2.3 3.6-5.2 3.6"));
    assert_eq!((github.record.width, github.record.height), (496, 512));

    let gear = default_resolver().resolve_icon("fa-solid fa-gear").unwrap();
    assert!(gear.path().starts_with("M495.9 166.6c3.2 8.7 .5 18.4-6.4 24.6"));
    assert_eq!((gear.record.width, gear.record.height), (512, 512));

    let copy = default_resolver().resolve_icon("fa-regular fa-copy").unwrap();
    assert!(copy.path().starts_with("M502.6 70.63l-61.25-61.25"));
}

#[test]
fn test_every_canonical_record_resolves() {
    let resolver = default_resolver();
    for (name, style, record) in resolver.catalog().iter() {
        let path = resolver.resolve(&format!("{} fa-{name}", style.prefix())).unwrap();
        assert!(!path.is_empty());
        assert_eq!(path, record.path);
    }
}

#[test]
fn test_legacy_prefix_equals_modern_prefix() {
    let resolver = default_resolver();
    for (name, style, _) in resolver.catalog().iter() {
        let legacy = resolver.resolve(&format!("{} fa-{name}", style.legacy_prefix()));
        let modern = resolver.resolve(&format!("{} fa-{name}", style.prefix()));
        assert_eq!(legacy, modern, "{name} ({style})");
    }
}

#[test]
fn test_styles_not_published_fail() {
    let resolver = default_resolver();
    for name in resolver.catalog().names() {
        let published = resolver.catalog().styles_of(name);
        for &style in ALL_STYLES.iter().filter(|s| !published.contains(s)) {
            let err = resolver.resolve(&format!("{} fa-{name}", style.prefix())).unwrap_err();
            assert!(err.is_not_found(), "{name} ({style})");
        }
    }
}

#[test]
fn test_resolve_is_idempotent() {
    for identifier in ["fa-github", "fas fa-angle-left", "fa-cog", "fa-you-cant-find-me", "fa"] {
        assert_eq!(resolve(identifier), resolve(identifier));
    }
}

#[test]
fn test_concurrent_resolution() {
    let expected = resolve("fa-solid fa-gear").unwrap();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| resolve("fas fa-cog").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ============================================================================
// Legacy glyph names
// ============================================================================

#[test]
fn test_legacy_value_maps_to_current_name() {
    let resolver = Resolver::new(legacy_target_catalog()).unwrap();
    for &(legacy, current) in LEGACY_GLYPH_ALIASES {
        let legacy_path = resolver.resolve(&format!("fa-{legacy}")).unwrap();
        let current_path = resolver.resolve(&format!("fa-{current}")).unwrap();
        assert_eq!(legacy_path, current_path, "{legacy} -> {current}");
    }
}

#[test]
fn test_legacy_value_with_every_style() {
    let resolver = Resolver::new(legacy_target_catalog()).unwrap();
    for &(legacy, current) in LEGACY_GLYPH_ALIASES {
        for style in [Style::Solid, Style::Regular] {
            let icon = resolver.resolve_icon(&format!("{} fa-{legacy}", style.prefix())).unwrap();
            assert_eq!(icon.name, current);
            assert_eq!(icon.style, style);
        }
        let err = resolver.resolve(&format!("fab fa-{legacy}")).unwrap_err();
        assert!(err.is_not_found(), "{legacy}");
    }
}

#[test]
fn test_canonical_names_resolve_to_themselves() {
    let resolver = Resolver::new(legacy_target_catalog()).unwrap();
    for name in resolver.catalog().names() {
        assert_eq!(resolver.resolve_icon(&format!("fa-{name}")).unwrap().name, name);
    }
}

#[test]
fn test_configured_default_style() {
    let options = ResolveOptions::new().default_style(Style::Regular);
    let resolver = Resolver::with_options(Catalog::bundled().unwrap(), options).unwrap();
    assert_eq!(resolver.resolve("fa-copy").unwrap(), resolve("fa-regular fa-copy").unwrap());
    assert!(resolver.resolve("fa-angle-left").unwrap_err().is_not_found());
    assert!(resolver.resolve("fa-github").unwrap_err().is_not_found());
}

#[test]
fn test_catalog_from_reader() {
    let json = br#"{
        "rocket": {
            "aliases": { "names": ["space-ship"] },
            "svg": { "solid": { "width": 512, "height": 512, "path": "M0 0H512V512H0Z" } }
        }
    }"#;
    let resolver = Resolver::new(Catalog::from_reader(&json[..]).unwrap()).unwrap();
    assert_eq!(resolver.resolve("fa-space-ship").unwrap(), "M0 0H512V512H0Z");
    assert_eq!(resolver.resolve("fas fa-rocket").unwrap(), "M0 0H512V512H0Z");
    assert!(resolver.resolve("fa-regular fa-rocket").unwrap_err().is_not_found());
}
