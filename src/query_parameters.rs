use crate::settings::RawSettings;
use serde::Deserialize;

/// The (potential) URL parameters for the map endpoints. Settings arrive in
/// their stored string form and go through the usual resolution step.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MapQueryParameters {
    /// One or more address values, separated by `|`.
    pub address: Option<String>,
    /// Ambient page language, substituted for the "page" language sentinel.
    pub uselang: Option<String>,
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

impl MapQueryParameters {
    /// Address values in input order. Blank segments are dropped, duplicates
    /// are kept.
    pub fn addresses(&self) -> Vec<String> {
        self.address
            .as_deref()
            .unwrap_or("")
            .split('|')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Ambient page language for this request, default "en".
    pub fn page_langcode(&self) -> String {
        match self.uselang.as_deref().map(str::trim) {
            Some(lang) if !lang.is_empty() => lang.to_ascii_lowercase(),
            _ => "en".to_string(),
        }
    }

    /// The loosely typed settings map carried by the query string.
    pub fn raw_settings(&self) -> RawSettings {
        RawSettings {
            include_map: self.include_map.clone(),
            include_static_map: self.include_static_map.clone(),
            include_link: self.include_link.clone(),
            include_text: self.include_text.clone(),
            iframe_width: self.iframe_width.clone(),
            iframe_height: self.iframe_height.clone(),
            zoom_level: self.zoom_level.clone(),
            information_bubble: self.information_bubble.clone(),
            link_text: self.link_text.clone(),
            map_type: self.map_type.clone(),
            langcode: self.langcode.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FormatterSettings;

    #[test]
    fn test_addresses_split() {
        let params = MapQueryParameters {
            address: Some("221B Baker St| 10 Downing St |221B Baker St".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.addresses(),
            vec!["221B Baker St", "10 Downing St", "221B Baker St"]
        );
    }

    #[test]
    fn test_addresses_none() {
        let params = MapQueryParameters::default();
        assert!(params.addresses().is_empty());
    }

    #[test]
    fn test_addresses_blank_segments_dropped() {
        let params = MapQueryParameters {
            address: Some("|| Main St ||".to_string()),
            ..Default::default()
        };
        assert_eq!(params.addresses(), vec!["Main St"]);
    }

    #[test]
    fn test_page_langcode_default() {
        let params = MapQueryParameters::default();
        assert_eq!(params.page_langcode(), "en");
    }

    #[test]
    fn test_page_langcode_empty() {
        let params = MapQueryParameters {
            uselang: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.page_langcode(), "en");
    }

    #[test]
    fn test_page_langcode_lowercased() {
        let params = MapQueryParameters {
            uselang: Some("FR".to_string()),
            ..Default::default()
        };
        assert_eq!(params.page_langcode(), "fr");
    }

    #[test]
    fn test_empty_query_resolves_to_defaults() {
        let params = MapQueryParameters::default();
        assert_eq!(
            params.raw_settings().resolve(),
            FormatterSettings::default()
        );
    }

    #[test]
    fn test_raw_settings_passthrough() {
        let params = MapQueryParameters {
            include_link: Some("1".to_string()),
            zoom_level: Some("10".to_string()),
            ..Default::default()
        };
        let settings = params.raw_settings().resolve();
        assert!(settings.include_link);
        assert_eq!(settings.zoom_level, 10);
    }
}
