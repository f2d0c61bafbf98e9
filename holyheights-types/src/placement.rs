use geo::Point;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Marker icon family for a building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    #[default]
    Cathedral,
    Synagogue,
    Mosque,
    Gopura,
    Temple,
    Stupa,
    Pagoda,
    Statue,
    Pyramid,
}

impl IconKey {
    /// Match order used when classifying a building type. More specific
    /// keywords must come before the generic ones that contain them.
    pub const PRIORITY: [IconKey; 9] = [
        IconKey::Cathedral,
        IconKey::Synagogue,
        IconKey::Mosque,
        IconKey::Gopura,
        IconKey::Temple,
        IconKey::Stupa,
        IconKey::Pagoda,
        IconKey::Statue,
        IconKey::Pyramid,
    ];

    /// Lower-case substring that selects this icon.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Cathedral => "cathedral",
            Self::Synagogue => "synagogue",
            Self::Mosque => "mosque",
            Self::Gopura => "gopura",
            Self::Temple => "temple",
            Self::Stupa => "stupa",
            Self::Pagoda => "pagoda",
            Self::Statue => "statue",
            Self::Pyramid => "pyramid",
        }
    }

    /// Default SVG asset for the icon.
    pub fn asset_path(&self) -> &'static str {
        match self {
            Self::Cathedral => "icons/cathedral-svgrepo-com.svg",
            Self::Synagogue => "icons/synagogue-svgrepo-com.svg",
            Self::Mosque => "icons/mosque-svgrepo-com.svg",
            Self::Gopura => "icons/hindu-temple-svgrepo-com.svg",
            Self::Temple => "icons/hindu-temple-stupa-svgrepo-com.svg",
            Self::Stupa => "icons/stupa-svgrepo-com.svg",
            Self::Pagoda => "icons/pagoda-svgrepo-com.svg",
            Self::Statue => "icons/great-buddha-of-nara-1-svgrepo-com.svg",
            Self::Pyramid => "icons/pyramid-svgrepo-com.svg",
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Transient visual cue for a marker whose building changed in the shown year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// Construction began the previous year
    Started,
    /// Construction finished this year
    Completed,
    /// Destroyed this year
    Destroyed,
}

/// A marker ready for the map: where, how large, which icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Building identity (`BuildingRecord::name`)
    pub name: String,
    /// Marker position after any dodge offset (x = longitude, y = latitude)
    pub position: Point,
    pub size_px: f64,
    pub icon: IconKey,
    pub destroyed: bool,
    pub height: f64,
    pub year: i32,
    pub highlights: SmallVec<[Highlight; 2]>,
}

impl Placement {
    pub fn lat(&self) -> f64 {
        self.position.y()
    }

    pub fn lng(&self) -> f64 {
        self.position.x()
    }

    /// Text for the marker popup.
    pub fn popup_text(&self) -> String {
        format!(
            "{}\nHeight: {:.0} m\nYear: {}",
            self.name, self.height, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_lists_every_icon_once() {
        let mut seen = std::collections::HashSet::new();
        for key in IconKey::PRIORITY {
            assert!(seen.insert(key));
        }
        assert_eq!(seen.len(), 9);
        assert_eq!(IconKey::PRIORITY[3], IconKey::Gopura);
        assert_eq!(IconKey::PRIORITY[4], IconKey::Temple);
    }

    #[test]
    fn test_popup_rounds_height() {
        let placement = Placement {
            name: "Ulm Minster".into(),
            position: Point::new(9.99, 48.4),
            size_px: 45.0,
            icon: IconKey::Cathedral,
            destroyed: false,
            height: 161.53,
            year: 1890,
            highlights: SmallVec::new(),
        };
        assert_eq!(placement.popup_text(), "Ulm Minster\nHeight: 162 m\nYear: 1890");
        assert_eq!(placement.lat(), 48.4);
        assert_eq!(placement.lng(), 9.99);
    }
}
