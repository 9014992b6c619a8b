use crate::settings::{FormatterSettings, LinkText};
use serde::Serialize;

/// Template-ready record for one address value. Constructed fresh per render
/// call, consumed once by the template layer.
///
/// `url_suffix` is the percent-encoded raw address for URL contexts;
/// `address_text` and `link_text` are HTML-escaped for markup contexts. The
/// two encodings come from the same source string but must never be mixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewModel {
    pub include_map: bool,
    pub include_static_map: bool,
    pub include_link: bool,
    pub include_text: bool,
    pub width: u32,
    pub height: u32,
    pub url_suffix: String,
    pub zoom: u8,
    pub information_bubble: bool,
    pub link_text: String,
    pub address_text: String,
    pub map_type: String,
    pub static_map_type: String,
    pub langcode: String,
}

/// Build one view model per address value, in input order. Stateless and
/// infallible; every call is independent.
pub fn view_models(
    settings: &FormatterSettings,
    addresses: &[String],
    page_langcode: &str,
) -> Vec<MapViewModel> {
    let langcode = settings.language_for(page_langcode);

    // Fixed link text is shared by every item; the use_address sentinel is
    // resolved per item below.
    let fixed_link_text = match &settings.link_text {
        LinkText::Fixed(text) if settings.include_link => {
            Some(html_escape::encode_text(text).into_owned())
        }
        _ => None,
    };

    addresses
        .iter()
        .map(|address| {
            let url_suffix = urlencoding::encode(address).into_owned();
            let address_value = html_escape::encode_text(address).into_owned();
            let link_text = if !settings.include_link {
                String::new()
            } else {
                match &fixed_link_text {
                    Some(text) => text.clone(),
                    None => address_value.clone(),
                }
            };
            MapViewModel {
                include_map: settings.include_map,
                include_static_map: settings.include_static_map,
                include_link: settings.include_link,
                include_text: settings.include_text,
                width: settings.iframe_width,
                height: settings.iframe_height,
                url_suffix,
                zoom: settings.zoom_level,
                information_bubble: settings.information_bubble,
                link_text,
                address_text: if settings.include_text {
                    address_value
                } else {
                    String::new()
                },
                map_type: settings.map_type.code().to_string(),
                static_map_type: settings.map_type.static_code().to_string(),
                langcode: langcode.clone(),
            }
        })
        .collect()
}
