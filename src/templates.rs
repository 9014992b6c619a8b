use crate::view_model::MapViewModel;
use aho_corasick::AhoCorasick;
use anyhow::Result;
use std::collections::HashMap;

/// Expand the page template with the rendered view models.
pub fn render_page(page_langcode: &str, view_models: &[MapViewModel]) -> Result<String> {
    let items = view_models
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n");

    let mut rep_map: HashMap<String, String> = HashMap::new();
    rep_map.insert(
        "langcode".to_string(),
        html_escape::encode_double_quoted_attribute(page_langcode).to_string(),
    );
    rep_map.insert("items".to_string(), items);

    replace_placeholders(include_str!("../data/map_page.html"), &rep_map)
}

/// Replace every `{key}` placeholder in the template with its value.
fn replace_placeholders(template: &str, rep_map: &HashMap<String, String>) -> Result<String> {
    let (patterns, replacements): (Vec<_>, Vec<_>) = rep_map
        .iter()
        .map(|(key, value)| (format!("{{{key}}}"), value.clone()))
        .unzip();

    let ac = AhoCorasick::new(&patterns)?;
    Ok(ac.replace_all(template, &replacements))
}

/// One output block per view model: dynamic map, static map, map link and
/// original text, in that order, each gated on its flag.
pub fn render_item(vm: &MapViewModel) -> String {
    let mut out = String::from("<div class=\"simple-gmap-map\">\n");
    if vm.include_map {
        out.push_str(&format!(
            "<iframe width=\"{}\" height=\"{}\" frameborder=\"0\" scrolling=\"no\" marginheight=\"0\" marginwidth=\"0\" src=\"{}\"></iframe>\n",
            vm.width,
            vm.height,
            embed_url(vm)
        ));
    }
    if vm.include_static_map {
        out.push_str(&format!(
            "<img class=\"simple-gmap-static\" src=\"{}\" alt=\"\" />\n",
            static_map_url(vm)
        ));
    }
    if vm.include_link {
        out.push_str(&format!(
            "<p class=\"simple-gmap-link\"><a href=\"{}\">{}</a></p>\n",
            link_url(vm),
            vm.link_text
        ));
    }
    if vm.include_text {
        out.push_str(&format!(
            "<p class=\"simple-gmap-address\">{}</p>\n",
            vm.address_text
        ));
    }
    out.push_str("</div>");
    out
}

/// Dynamic embed URL. Suppressing the information bubble pushes the info
/// window next to the marker instead of opening it.
pub fn embed_url(vm: &MapViewModel) -> String {
    format!(
        "//maps.google.com/maps?q={}&amp;z={}&amp;t={}&amp;hl={}{}&amp;output=embed",
        vm.url_suffix,
        vm.zoom,
        vm.map_type,
        vm.langcode,
        iwloc_suffix(vm)
    )
}

/// Same map as the embed, without the embed output mode.
pub fn link_url(vm: &MapViewModel) -> String {
    format!(
        "//maps.google.com/maps?q={}&amp;z={}&amp;t={}&amp;hl={}{}",
        vm.url_suffix,
        vm.zoom,
        vm.map_type,
        vm.langcode,
        iwloc_suffix(vm)
    )
}

/// Static map image URL. Uses the spelled-out map type and pixel sizes.
pub fn static_map_url(vm: &MapViewModel) -> String {
    format!(
        "//maps.googleapis.com/maps/api/staticmap?center={}&amp;zoom={}&amp;size={}x{}&amp;maptype={}&amp;language={}",
        vm.url_suffix, vm.zoom, vm.width, vm.height, vm.static_map_type, vm.langcode
    )
}

fn iwloc_suffix(vm: &MapViewModel) -> &'static str {
    if vm.information_bubble {
        ""
    } else {
        "&amp;iwloc=near"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FormatterSettings, LinkText};
    use crate::view_model::view_models;

    fn model(settings: &FormatterSettings, address: &str) -> MapViewModel {
        view_models(settings, &[address.to_string()], "en")
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_embed_url() {
        let vm = model(&FormatterSettings::default(), "1 Infinite Loop");
        assert_eq!(
            embed_url(&vm),
            "//maps.google.com/maps?q=1%20Infinite%20Loop&amp;z=14&amp;t=m&amp;hl=en&amp;output=embed"
        );
    }

    #[test]
    fn test_embed_url_without_bubble() {
        let settings = FormatterSettings {
            information_bubble: false,
            ..Default::default()
        };
        let vm = model(&settings, "somewhere");
        assert!(embed_url(&vm).contains("&amp;iwloc=near&amp;output=embed"));
    }

    #[test]
    fn test_link_url_has_no_embed_mode() {
        let vm = model(&FormatterSettings::default(), "somewhere");
        assert!(!link_url(&vm).contains("output=embed"));
    }

    #[test]
    fn test_static_map_url() {
        let settings = FormatterSettings {
            include_static_map: true,
            iframe_width: 400,
            iframe_height: 300,
            ..Default::default()
        };
        let vm = model(&settings, "somewhere");
        assert_eq!(
            static_map_url(&vm),
            "//maps.googleapis.com/maps/api/staticmap?center=somewhere&amp;zoom=14&amp;size=400x300&amp;maptype=roadmap&amp;language=en"
        );
    }

    #[test]
    fn test_render_item_gates_on_flags() {
        let settings = FormatterSettings {
            include_map: false,
            include_static_map: false,
            include_link: true,
            include_text: true,
            link_text: LinkText::Fixed("View larger map".to_string()),
            ..Default::default()
        };
        let html = render_item(&model(&settings, "221B Baker St"));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("<img"));
        assert!(html.contains(">View larger map</a>"));
        assert!(html.contains("<p class=\"simple-gmap-address\">221B Baker St</p>"));
    }

    #[test]
    fn test_render_item_default() {
        let html = render_item(&model(&FormatterSettings::default(), "221B Baker St"));
        assert!(html.contains("<iframe width=\"200\" height=\"200\""));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<a href"));
        assert!(!html.contains("simple-gmap-address"));
    }

    #[test]
    fn test_render_item_escapes_address() {
        let settings = FormatterSettings {
            include_text: true,
            ..Default::default()
        };
        let html = render_item(&model(&settings, "<script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_page_replaces_placeholders() {
        let settings = FormatterSettings::default();
        let models = view_models(&settings, &["Main St".to_string()], "fr");
        let html = render_page("fr", &models).unwrap();
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("simple-gmap-map"));
        assert!(!html.contains("{items}"));
        assert!(!html.contains("{langcode}"));
    }

    #[test]
    fn test_render_page_empty() {
        let html = render_page("en", &[]).unwrap();
        assert!(!html.contains("simple-gmap-map"));
        assert!(!html.contains("{items}"));
    }

    #[test]
    fn test_replace_placeholders() {
        let mut rep_map = HashMap::new();
        rep_map.insert("name".to_string(), "World".to_string());
        let result = replace_placeholders("Hello {name}!", &rep_map).unwrap();
        assert_eq!(result, "Hello World!");
    }
}
