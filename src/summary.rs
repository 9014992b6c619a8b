use crate::settings::{FormatterSettings, LinkText, MapLanguage};

/// Render the active configuration as short human-readable lines for the
/// administrative settings list. The order is fixed: output lines for the
/// enabled widgets first, then the shared map parameters, then the
/// original-text marker.
pub fn settings_summary(settings: &FormatterSettings) -> Vec<String> {
    let mut summary = Vec::new();

    if settings.include_map {
        summary.push(format!(
            "Dynamic map: {} x {}",
            settings.iframe_width, settings.iframe_height
        ));
    }
    if settings.include_static_map {
        summary.push(format!(
            "Static map: {} x {}",
            settings.iframe_width, settings.iframe_height
        ));
    }
    if settings.include_link {
        let link_text = match &settings.link_text {
            LinkText::Fixed(text) => text.as_str(),
            LinkText::UseAddress => "use_address",
        };
        summary.push(format!("Map link: {link_text}"));
    }

    if settings.wants_map_output() {
        let bubble = if settings.information_bubble {
            "Yes"
        } else {
            "No"
        };
        // The summary describes stored configuration; the ambient sentinel is
        // shown literally since no page language is in scope here.
        let language = match &settings.langcode {
            MapLanguage::Fixed(code) if !code.is_empty() => code.as_str(),
            MapLanguage::Fixed(_) => "en",
            MapLanguage::PageAmbient => "page",
        };
        summary.push(format!("Map Type: {}", settings.map_type.label()));
        summary.push(format!("Zoom Level: {}", settings.zoom_level));
        summary.push(format!("Information Bubble: {bubble}"));
        summary.push(format!("Language: {language}"));
    }

    if settings.include_text {
        summary.push("Original text displayed".to_string());
    }

    summary
}
