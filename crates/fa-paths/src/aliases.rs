//! Legacy glyph names and the table that maps them to current names.

use std::collections::HashMap;

use crate::CatalogError;

/// FontAwesome 4 and 5 glyph names renamed in FontAwesome 6.
pub const LEGACY_GLYPH_ALIASES: &[(&str, &str)] = &[
    ("ad", "rectangle-ad"),
    ("adjust", "circle-half-stroke"),
    ("air-freshener", "spray-can-sparkles"),
    ("allergies", "hand-dots"),
    ("ambulance", "truck-medical"),
    ("american-sign-language-interpreting", "hands-asl-interpreting"),
    ("angle-double-down", "angles-down"),
    ("angle-double-left", "angles-left"),
    ("angle-double-right", "angles-right"),
    ("angle-double-up", "angles-up"),
    ("angry", "face-angry"),
    ("apple-alt", "apple-whole"),
    ("archive", "box-archive"),
    ("arrow-alt-circle-down", "circle-down"),
    ("arrow-alt-circle-left", "circle-left"),
    ("arrow-alt-circle-right", "circle-right"),
    ("arrow-alt-circle-up", "circle-up"),
    ("arrow-circle-down", "circle-arrow-down"),
    ("arrow-circle-left", "circle-arrow-left"),
    ("arrow-circle-right", "circle-arrow-right"),
    ("arrow-circle-up", "circle-arrow-up"),
    ("arrows", "arrows-up-down-left-right"),
    ("arrows-alt", "up-down-left-right"),
    ("arrows-alt-h", "left-right"),
    ("arrows-alt-v", "up-down"),
    ("arrows-h", "arrows-left-right"),
    ("arrows-v", "arrows-up-down"),
    ("assistive-listening-systems", "ear-listen"),
    ("atlas", "book-atlas"),
    ("backspace", "delete-left"),
    ("balance-scale", "scale-balanced"),
    ("balance-scale-left", "scale-unbalanced"),
    ("balance-scale-right", "scale-unbalanced-flip"),
    ("band-aid", "bandage"),
    ("baseball-ball", "baseball"),
    ("basketball-ball", "basketball"),
    ("beer", "beer-mug-empty"),
    ("bible", "book-bible"),
    ("biking", "person-biking"),
    ("birthday-cake", "cake-candles"),
    ("blind", "person-walking-with-cane"),
    ("book-dead", "book-skull"),
    ("book-reader", "book-open-reader"),
    ("border-style", "border-top-left"),
    ("boxes", "boxes-stacked"),
    ("boxes-alt", "boxes-stacked"),
    ("broadcast-tower", "tower-broadcast"),
    ("burn", "fire-flame-simple"),
    ("bus-alt", "bus-simple"),
    ("calendar-alt", "calendar-days"),
    ("calendar-times", "calendar-xmark"),
    ("camera-alt", "camera"),
    ("car-alt", "car-rear"),
    ("caret-square-down", "square-caret-down"),
    ("caret-square-left", "square-caret-left"),
    ("caret-square-right", "square-caret-right"),
    ("caret-square-up", "square-caret-up"),
    ("chalkboard-teacher", "chalkboard-user"),
    ("check-circle", "circle-check"),
    ("check-square", "square-check"),
    ("chevron-circle-down", "circle-chevron-down"),
    ("chevron-circle-left", "circle-chevron-left"),
    ("chevron-circle-right", "circle-chevron-right"),
    ("chevron-circle-up", "circle-chevron-up"),
    ("clinic-medical", "house-chimney-medical"),
    ("cloud-download", "cloud-arrow-down"),
    ("cloud-download-alt", "cloud-arrow-down"),
    ("cloud-upload", "cloud-arrow-up"),
    ("cloud-upload-alt", "cloud-arrow-up"),
    ("cocktail", "martini-glass-citrus"),
    ("coffee", "mug-saucer"),
    ("cog", "gear"),
    ("cogs", "gears"),
    ("columns", "table-columns"),
    ("comment-alt", "message"),
    ("compress-alt", "down-left-and-up-right-to-center"),
    ("compress-arrows-alt", "minimize"),
    ("concierge-bell", "bell-concierge"),
    ("crop-alt", "crop-simple"),
    ("cut", "scissors"),
    ("deaf", "ear-deaf"),
    ("desktop-alt", "desktop"),
    ("diagnoses", "person-dots-from-line"),
    ("digging", "person-digging"),
    ("digital-tachograph", "tachograph-digital"),
    ("directions", "diamond-turn-right"),
    ("dizzy", "face-dizzy"),
    ("dolly-flatbed", "cart-flatbed"),
    ("donate", "circle-dollar-to-slot"),
    ("dot-circle", "circle-dot"),
    ("drafting-compass", "compass-drafting"),
    ("edit", "pen-to-square"),
    ("ellipsis-h", "ellipsis"),
    ("ellipsis-v", "ellipsis-vertical"),
    ("envelope-square", "square-envelope"),
    ("exchange", "arrow-right-arrow-left"),
    ("exchange-alt", "right-left"),
    ("exclamation-circle", "circle-exclamation"),
    ("exclamation-triangle", "triangle-exclamation"),
    ("expand-alt", "up-right-and-down-left-from-center"),
    ("expand-arrows-alt", "maximize"),
    ("external-link", "arrow-up-right-from-square"),
    ("external-link-alt", "up-right-from-square"),
    ("external-link-square", "square-arrow-up-right"),
    ("external-link-square-alt", "square-up-right"),
    ("fast-backward", "backward-fast"),
    ("fast-forward", "forward-fast"),
    ("feather-alt", "feather-pointed"),
    ("female", "person-dress"),
    ("fighter-jet", "jet-fighter"),
    ("file-alt", "file-lines"),
    ("file-archive", "file-zipper"),
    ("file-download", "file-arrow-down"),
    ("file-edit", "file-pen"),
    ("file-medical-alt", "file-waveform"),
    ("file-upload", "file-arrow-up"),
    ("fire-alt", "fire-flame-curved"),
    ("first-aid", "kit-medical"),
    ("fist-raised", "hand-fist"),
    ("flushed", "face-flushed"),
    ("font-awesome-alt", "square-font-awesome-stroke"),
    ("font-awesome-flag", "font-awesome"),
    ("font-awesome-logo-full", "font-awesome"),
    ("football-ball", "football"),
    ("frown", "face-frown"),
    ("frown-open", "face-frown-open"),
    ("funnel-dollar", "filter-circle-dollar"),
    ("glass-cheers", "champagne-glasses"),
    ("glass-martini", "martini-glass-empty"),
    ("glass-martini-alt", "martini-glass"),
    ("glass-whiskey", "whiskey-glass"),
    ("globe-africa", "earth-africa"),
    ("globe-americas", "earth-americas"),
    ("globe-asia", "earth-asia"),
    ("globe-europe", "earth-europe"),
    ("golf-ball", "golf-ball-tee"),
    ("grimace", "face-grimace"),
    ("grin", "face-grin"),
    ("grin-alt", "face-grin-wide"),
    ("grin-beam", "face-grin-beam"),
    ("grin-beam-sweat", "face-grin-beam-sweat"),
    ("grin-hearts", "face-grin-hearts"),
    ("grin-squint", "face-grin-squint"),
    ("grin-squint-tears", "face-grin-squint-tears"),
    ("grin-stars", "face-grin-stars"),
    ("grin-tears", "face-grin-tears"),
    ("grin-tongue", "face-grin-tongue"),
    ("grin-tongue-squint", "face-grin-tongue-squint"),
    ("grin-tongue-wink", "face-grin-tongue-wink"),
    ("grin-wink", "face-grin-wink"),
    ("grip-horizontal", "grip"),
    ("h-square", "square-h"),
    ("hamburger", "burger"),
    ("hand-holding-usd", "hand-holding-dollar"),
    ("hand-holding-water", "hand-holding-droplet"),
    ("hand-paper", "hand"),
    ("hand-rock", "hand-back-fist"),
    ("hands-helping", "handshake-angle"),
    ("hands-wash", "hands-bubbles"),
    ("handshake-alt", "handshake-simple"),
    ("handshake-alt-slash", "handshake-simple-slash"),
    ("hard-hat", "helmet-safety"),
    ("hdd", "hard-drive"),
    ("headphones-alt", "headphones-simple"),
    ("heart-broken", "heart-crack"),
    ("heartbeat", "heart-pulse"),
    ("hiking", "person-hiking"),
    ("history", "clock-rotate-left"),
    ("home", "house"),
    ("home-alt", "house"),
    ("home-lg", "house-chimney"),
    ("home-lg-alt", "house"),
    ("hospital-alt", "hospital"),
    ("hospital-symbol", "circle-h"),
    ("hot-tub", "hot-tub-person"),
    ("hourglass-half", "hourglass"),
    ("house-damage", "house-chimney-crack"),
    ("hryvnia", "hryvnia-sign"),
    ("id-card-alt", "id-card-clip"),
    ("info-circle", "circle-info"),
    ("innosoft", "42-group"),
    ("journal-whills", "book-journal-whills"),
    ("kiss", "face-kiss"),
    ("kiss-beam", "face-kiss-beam"),
    ("kiss-wink-heart", "face-kiss-wink-heart"),
    ("landmark-alt", "landmark-dome"),
    ("laptop-house", "house-laptop"),
    ("laugh", "face-laugh"),
    ("laugh-beam", "face-laugh-beam"),
    ("laugh-squint", "face-laugh-squint"),
    ("laugh-wink", "face-laugh-wink"),
    ("level-down", "arrow-turn-down"),
    ("level-down-alt", "turn-down"),
    ("level-up", "arrow-turn-up"),
    ("level-up-alt", "turn-up"),
    ("list-alt", "rectangle-list"),
    ("location", "location-crosshairs"),
    ("long-arrow-alt-down", "down-long"),
    ("long-arrow-alt-left", "left-long"),
    ("long-arrow-alt-right", "right-long"),
    ("long-arrow-alt-up", "up-long"),
    ("long-arrow-down", "arrow-down-long"),
    ("long-arrow-left", "arrow-left-long"),
    ("long-arrow-right", "arrow-right-long"),
    ("long-arrow-up", "arrow-up-long"),
    ("low-vision", "eye-low-vision"),
    ("luggage-cart", "cart-flatbed-suitcase"),
    ("magic", "wand-magic"),
    ("mail-bulk", "envelopes-bulk"),
    ("male", "person"),
    ("map-marked", "map-location"),
    ("map-marked-alt", "map-location-dot"),
    ("map-marker", "location-pin"),
    ("map-marker-alt", "location-dot"),
    ("map-signs", "signs-post"),
    ("mars-stroke-h", "mars-stroke-right"),
    ("mars-stroke-v", "mars-stroke-up"),
    ("medium-m", "medium"),
    ("medkit", "suitcase-medical"),
    ("meh", "face-meh"),
    ("meh-blank", "face-meh-blank"),
    ("meh-rolling-eyes", "face-rolling-eyes"),
    ("microphone-alt", "microphone-lines"),
    ("microphone-alt-slash", "microphone-lines-slash"),
    ("minus-circle", "circle-minus"),
    ("minus-square", "square-minus"),
    ("mobile-alt", "mobile-screen-button"),
    ("mobile-android", "mobile"),
    ("mobile-android-alt", "mobile-screen"),
    ("money-bill-alt", "money-bill-1"),
    ("money-bill-wave-alt", "money-bill-1-wave"),
    ("money-check-alt", "money-check-dollar"),
    ("mouse", "computer-mouse"),
    ("mouse-pointer", "arrow-pointer"),
    ("paint-brush", "paintbrush"),
    ("parking", "square-parking"),
    ("pastafarianism", "spaghetti-monster-flying"),
    ("pause-circle", "circle-pause"),
    ("pen-alt", "pen-clip"),
    ("pen-square", "square-pen"),
    ("pencil-alt", "pencil"),
    ("pencil-ruler", "pen-ruler"),
    ("percentage", "percent"),
    ("phone-alt", "phone-flip"),
    ("phone-square", "square-phone"),
    ("phone-square-alt", "square-phone-flip"),
    ("photo-video", "photo-film"),
    ("play-circle", "circle-play"),
    ("plus-circle", "circle-plus"),
    ("plus-square", "square-plus"),
    ("poll", "square-poll-vertical"),
    ("poll-h", "square-poll-horizontal"),
    ("portrait", "image-portrait"),
    ("pound-sign", "sterling-sign"),
    ("pray", "person-praying"),
    ("praying-hands", "hands-praying"),
    ("prescription-bottle-alt", "prescription-bottle-medical"),
    ("procedures", "bed-pulse"),
    ("project-diagram", "diagram-project"),
    ("question-circle", "circle-question"),
    ("quran", "book-quran"),
    ("radiation-alt", "circle-radiation"),
    ("random", "shuffle"),
    ("redo", "arrow-rotate-right"),
    ("redo-alt", "rotate-right"),
    ("remove-format", "text-slash"),
    ("rss-square", "square-rss"),
    ("running", "person-running"),
    ("sad-cry", "face-sad-cry"),
    ("sad-tear", "face-sad-tear"),
    ("save", "floppy-disk"),
    ("search", "magnifying-glass"),
    ("search-dollar", "magnifying-glass-dollar"),
    ("search-location", "magnifying-glass-location"),
    ("search-minus", "magnifying-glass-minus"),
    ("search-plus", "magnifying-glass-plus"),
    ("share-alt", "share-nodes"),
    ("share-alt-square", "square-share-nodes"),
    ("share-square", "share-from-square"),
    ("shipping-fast", "truck-fast"),
    ("shopping-bag", "bag-shopping"),
    ("shopping-basket", "basket-shopping"),
    ("shopping-cart", "cart-shopping"),
    ("shuttle-van", "van-shuttle"),
    ("sign", "sign-hanging"),
    ("sign-in", "arrow-right-to-bracket"),
    ("sign-in-alt", "right-to-bracket"),
    ("sign-language", "hands"),
    ("sign-out", "arrow-right-from-bracket"),
    ("sign-out-alt", "right-from-bracket"),
    ("skating", "person-skating"),
    ("skiing", "person-skiing"),
    ("skiing-nordic", "person-skiing-nordic"),
    ("slack-hash", "slack"),
    ("sliders-h", "sliders"),
    ("smile", "face-smile"),
    ("smile-beam", "face-smile-beam"),
    ("smile-wink", "face-smile-wink"),
    ("smoking-ban", "ban-smoking"),
    ("sms", "comment-sms"),
    ("snapchat-ghost", "snapchat"),
    ("snowboarding", "person-snowboarding"),
    ("sort-alpha-down", "arrow-down-a-z"),
    ("sort-alpha-down-alt", "arrow-down-z-a"),
    ("sort-alpha-up", "arrow-up-a-z"),
    ("sort-alpha-up-alt", "arrow-up-z-a"),
    ("sort-amount-down", "arrow-down-wide-short"),
    ("sort-amount-down-alt", "arrow-down-short-wide"),
    ("sort-amount-up", "arrow-up-wide-short"),
    ("sort-amount-up-alt", "arrow-up-short-wide"),
    ("sort-numeric-down", "arrow-down-1-9"),
    ("sort-numeric-down-alt", "arrow-down-9-1"),
    ("sort-numeric-up", "arrow-up-1-9"),
    ("sort-numeric-up-alt", "arrow-up-9-1"),
    ("space-shuttle", "shuttle-space"),
    ("square-root-alt", "square-root-variable"),
    ("star-half-alt", "star-half-stroke"),
    ("step-backward", "backward-step"),
    ("step-forward", "forward-step"),
    ("sticky-note", "note-sticky"),
    ("stop-circle", "circle-stop"),
    ("store-alt", "shop"),
    ("store-alt-slash", "shop-slash"),
    ("stream", "bars-staggered"),
    ("subway", "train-subway"),
    ("surprise", "face-surprise"),
    ("swimmer", "person-swimming"),
    ("swimming-pool", "water-ladder"),
    ("sync", "arrows-rotate"),
    ("sync-alt", "rotate"),
    ("table-tennis", "table-tennis-paddle-ball"),
    ("tablet-alt", "tablet-screen-button"),
    ("tablet-android", "tablet"),
    ("tachometer", "gauge-simple"),
    ("tachometer-alt", "gauge"),
    ("tachometer-alt-fast", "gauge"),
    ("tasks", "list-check"),
    ("tasks-alt", "bars-progress"),
    ("telegram-plane", "telegram"),
    ("temperature-down", "temperature-arrow-down"),
    ("temperature-up", "temperature-arrow-up"),
    ("tenge", "tenge-sign"),
    ("th", "table-cells"),
    ("th-large", "table-cells-large"),
    ("th-list", "table-list"),
    ("theater-masks", "masks-theater"),
    ("thermometer-empty", "temperature-empty"),
    ("thermometer-full", "temperature-full"),
    ("thermometer-half", "temperature-half"),
    ("thermometer-quarter", "temperature-quarter"),
    ("thermometer-three-quarters", "temperature-three-quarters"),
    ("thunderstorm", "cloud-bolt"),
    ("ticket-alt", "ticket-simple"),
    ("times", "xmark"),
    ("times-circle", "circle-xmark"),
    ("times-square", "square-xmark"),
    ("tint", "droplet"),
    ("tint-slash", "droplet-slash"),
    ("tired", "face-tired"),
    ("tools", "screwdriver-wrench"),
    ("torah", "scroll-torah"),
    ("tram", "train-tram"),
    ("transgender-alt", "transgender"),
    ("trash-alt", "trash-can"),
    ("trash-restore", "trash-arrow-up"),
    ("trash-restore-alt", "trash-can-arrow-up"),
    ("truck-loading", "truck-ramp-box"),
    ("tshirt", "shirt"),
    ("tv-alt", "tv"),
    ("undo", "arrow-rotate-left"),
    ("undo-alt", "rotate-left"),
    ("university", "building-columns"),
    ("unlink", "link-slash"),
    ("unlock-alt", "unlock-keyhole"),
    ("user-alt", "user-large"),
    ("user-alt-slash", "user-large-slash"),
    ("user-circle", "circle-user"),
    ("user-cog", "user-gear"),
    ("user-edit", "user-pen"),
    ("user-friends", "user-group"),
    ("user-md", "user-doctor"),
    ("user-times", "user-xmark"),
    ("users-cog", "users-gear"),
    ("utensil-spoon", "spoon"),
    ("volleyball-ball", "volleyball"),
    ("volume-down", "volume-low"),
    ("volume-mute", "volume-xmark"),
    ("volume-up", "volume-high"),
    ("vote-yea", "check-to-slot"),
    ("walking", "person-walking"),
    ("weight", "weight-scale"),
    ("window-close", "rectangle-xmark"),
];

/// Legacy name to canonical name mapping used by a resolver.
///
/// Starts from [`LEGACY_GLYPH_ALIASES`] and may be extended with the
/// aliases a metadata file declares. No legacy name maps to two targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable(HashMap<String, String>);

impl Default for AliasTable {
    fn default() -> Self {
        Self::legacy()
    }
}

impl AliasTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// The built-in legacy table.
    pub fn legacy() -> Self {
        Self(
            LEGACY_GLYPH_ALIASES
                .iter()
                .map(|&(legacy, canonical)| (legacy.to_owned(), canonical.to_owned()))
                .collect(),
        )
    }

    /// Add an alias. Re-adding an identical pair is a no-op.
    pub fn insert(
        &mut self,
        legacy: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let (legacy, canonical) = (legacy.into(), canonical.into());
        match self.0.get(&legacy) {
            Some(existing) if *existing != canonical => Err(CatalogError::AliasConflict {
                legacy,
                first: existing.clone(),
                second: canonical,
            }),
            Some(_) => Ok(()),
            None => {
                self.0.insert(legacy, canonical);
                Ok(())
            }
        }
    }

    pub(crate) fn remove(&mut self, legacy: &str) -> Option<String> {
        self.0.remove(legacy)
    }

    pub fn get(&self, legacy: &str) -> Option<&str> {
        self.0.get(legacy).map(String::as_str)
    }

    /// The canonical name for `name`; names without an alias map to themselves.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_legacy_table_is_a_function() {
        let mut seen = HashSet::new();
        for (legacy, _) in LEGACY_GLYPH_ALIASES {
            assert!(seen.insert(legacy), "'{legacy}' listed twice");
        }
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        let targets: HashSet<_> = LEGACY_GLYPH_ALIASES.iter().map(|(_, c)| c).collect();
        for (legacy, _) in LEGACY_GLYPH_ALIASES {
            assert!(!targets.contains(legacy), "'{legacy}' is both legacy and canonical");
        }
        let table = AliasTable::legacy();
        for (_, canonical) in LEGACY_GLYPH_ALIASES {
            assert_eq!(table.canonical(canonical), *canonical);
        }
    }

    #[test]
    fn test_legacy_lookup() {
        let table = AliasTable::legacy();
        assert_eq!(table.get("ad"), Some("rectangle-ad"));
        assert_eq!(table.get("cog"), Some("gear"));
        assert_eq!(table.get("gear"), None);
        assert_eq!(table.len(), LEGACY_GLYPH_ALIASES.len());
    }

    #[test]
    fn test_canonical_passthrough() {
        let table = AliasTable::legacy();
        assert_eq!(table.canonical("home"), "house");
        assert_eq!(table.canonical("you-cant-find-me"), "you-cant-find-me");
    }

    #[test]
    fn test_insert_rejects_second_target() {
        let mut table = AliasTable::empty();
        table.insert("cog", "gear").unwrap();
        table.insert("cog", "gear").unwrap();
        let err = table.insert("cog", "wrench").unwrap_err();
        assert!(matches!(err, CatalogError::AliasConflict { ref first, .. } if first == "gear"));
        assert_eq!(table.len(), 1);
    }
}
