use crate::map_type::MapType;
use crate::regex_patterns::RE_LANGUAGE_CODE;
use serde::Deserialize;

/// Sentinel accepted in the stored link-text option.
const USE_ADDRESS: &str = "use_address";

/// Sentinel accepted in the stored language option.
const PAGE_LANGUAGE: &str = "page";

pub const DEFAULT_LINK_TEXT: &str = "View larger map";
pub const DEFAULT_LANGCODE: &str = "en";

/// Text shown on the map link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkText {
    /// Fixed text shared by every map link.
    Fixed(String),
    /// Use each address value as its own link text.
    UseAddress,
}

/// Language handed to the map provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapLanguage {
    /// A specific language code.
    Fixed(String),
    /// Resolve to the ambient page language at render time.
    PageAmbient,
}

/// Fully resolved formatter configuration. Construct via `Default` or
/// `RawSettings::resolve`; render-time code never sees the stored string form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatterSettings {
    pub include_map: bool,
    pub include_static_map: bool,
    pub include_link: bool,
    pub include_text: bool,
    pub iframe_width: u32,
    pub iframe_height: u32,
    pub zoom_level: u8,
    pub information_bubble: bool,
    pub link_text: LinkText,
    pub map_type: MapType,
    pub langcode: MapLanguage,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        FormatterSettings {
            include_map: true,
            include_static_map: false,
            include_link: false,
            include_text: false,
            iframe_width: 200,
            iframe_height: 200,
            zoom_level: 14,
            information_bubble: true,
            link_text: LinkText::Fixed(DEFAULT_LINK_TEXT.to_string()),
            map_type: MapType::Roadmap,
            langcode: MapLanguage::Fixed(DEFAULT_LANGCODE.to_string()),
        }
    }
}

impl FormatterSettings {
    /// Language code handed to the map provider, with the ambient page
    /// language filled in for the "page" sentinel.
    pub fn language_for(&self, page_langcode: &str) -> String {
        match &self.langcode {
            MapLanguage::Fixed(code) => code.clone(),
            MapLanguage::PageAmbient => page_langcode.to_string(),
        }
    }

    /// Whether any map output (dynamic, static or link) is configured.
    pub fn wants_map_output(&self) -> bool {
        self.include_map || self.include_static_map || self.include_link
    }
}

/// The stored, loosely typed form of the option table: every value a string,
/// booleans as "1"/"0". Missing keys take the defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawSettings {
    pub include_map: Option<String>,
    pub include_static_map: Option<String>,
    pub include_link: Option<String>,
    pub include_text: Option<String>,
    pub iframe_width: Option<String>,
    pub iframe_height: Option<String>,
    pub zoom_level: Option<String>,
    pub information_bubble: Option<String>,
    pub link_text: Option<String>,
    pub map_type: Option<String>,
    pub langcode: Option<String>,
}

impl RawSettings {
    /// Coerce the stored strings into the typed settings, merging against the
    /// defaults. Never fails; every malformed value degrades to a documented
    /// fallback.
    pub fn resolve(&self) -> FormatterSettings {
        let defaults = FormatterSettings::default();
        FormatterSettings {
            include_map: truthy(self.include_map.as_deref(), defaults.include_map),
            include_static_map: truthy(
                self.include_static_map.as_deref(),
                defaults.include_static_map,
            ),
            include_link: truthy(self.include_link.as_deref(), defaults.include_link),
            include_text: truthy(self.include_text.as_deref(), defaults.include_text),
            iframe_width: positive_int(self.iframe_width.as_deref(), defaults.iframe_width),
            iframe_height: positive_int(self.iframe_height.as_deref(), defaults.iframe_height),
            zoom_level: zoom(self.zoom_level.as_deref(), defaults.zoom_level),
            information_bubble: truthy(
                self.information_bubble.as_deref(),
                defaults.information_bubble,
            ),
            link_text: match self.link_text.as_deref() {
                Some(text) => resolve_link_text(text),
                None => defaults.link_text,
            },
            map_type: match self.map_type.as_deref() {
                Some(code) => MapType::from_code(code),
                None => defaults.map_type,
            },
            langcode: match self.langcode.as_deref() {
                Some(code) => resolve_language(code),
                None => defaults.langcode,
            },
        }
    }
}

/// Mirror of the host's integer cast on stored flag values: the value parses
/// as a nonzero integer, or it is false.
fn truthy(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => v.trim().parse::<i64>().map(|n| n != 0).unwrap_or(false),
        None => default,
    }
}

/// Pixel sizes must be positive integers; anything else keeps the default.
fn positive_int(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// Zoom is an integer clamped to the provider's 1..=20 range.
fn zoom(value: Option<&str>, default: u8) -> u8 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|n| n.clamp(1, 20) as u8)
        .unwrap_or(default)
}

fn resolve_link_text(text: &str) -> LinkText {
    if text.trim() == USE_ADDRESS {
        LinkText::UseAddress
    } else {
        LinkText::Fixed(text.to_string())
    }
}

/// Normalize a stored language code: lowercase, keep only the leading
/// letters-and-hyphens prefix. An empty result or the "page" sentinel means
/// the ambient page language.
fn resolve_language(code: &str) -> MapLanguage {
    let lowered = code.trim().to_lowercase();
    let cleaned = RE_LANGUAGE_CODE
        .captures(&lowered)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    if cleaned.is_empty() || cleaned == PAGE_LANGUAGE {
        MapLanguage::PageAmbient
    } else {
        MapLanguage::Fixed(cleaned)
    }
}
