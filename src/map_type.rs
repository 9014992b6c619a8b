/// Map rendering style understood by the map provider.
///
/// The provider uses two different vocabularies for the same four styles: a
/// one-letter code in dynamic embed and link URLs (`t=` parameter) and a
/// spelled-out name in static map image URLs (`maptype=` parameter). Both
/// projections live on this one enum so the tables cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapType {
    /// Parse the stored one-letter code. Unknown or empty codes degrade to the
    /// roadmap style, never an error.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "k" => MapType::Satellite,
            "h" => MapType::Hybrid,
            "p" => MapType::Terrain,
            _ => MapType::Roadmap,
        }
    }

    /// One-letter code used in dynamic embed and link URLs.
    pub const fn code(&self) -> &'static str {
        match self {
            MapType::Roadmap => "m",
            MapType::Satellite => "k",
            MapType::Hybrid => "h",
            MapType::Terrain => "p",
        }
    }

    /// Name used by the static map image API. A different vocabulary from
    /// `code`, not a substitute for it.
    pub const fn static_code(&self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Hybrid => "hybrid",
            MapType::Terrain => "terrain",
        }
    }

    /// Human-readable label for the settings summary.
    pub const fn label(&self) -> &'static str {
        match self {
            MapType::Roadmap => "Map",
            MapType::Satellite => "Satellite",
            MapType::Hybrid => "Hybrid",
            MapType::Terrain => "Terrain",
        }
    }
}
