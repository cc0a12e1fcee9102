//! The closed set of entity categories and their associated scrape data.
//!
//! Each category carries the filename pattern its images must match, the
//! media listing start/stop markers, and the local directory its downloads
//! are saved under.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;

static ADVENTURER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}_\d{2,3}_r0[345]\.png$").unwrap());
static DRAGON_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}_01\.png$").unwrap());
static WEAPON_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}_01_\d{5}\.png$").unwrap());
static WYRMPRINT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}_0[12]\.png$").unwrap());

/// Entity category, the unit of independent processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Adventurer,
    Dragon,
    Weapon,
    Wyrmprint,
}

impl Category {
    /// All categories, in the order a full run processes them
    pub const ALL: [Category; 4] = [
        Category::Adventurer,
        Category::Dragon,
        Category::Weapon,
        Category::Wyrmprint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adventurer => "adventurer",
            Category::Dragon => "dragon",
            Category::Weapon => "weapon",
            Category::Wyrmprint => "wyrmprint",
        }
    }

    /// Pattern an uploaded filename must match to belong to this category
    pub fn pattern(&self) -> &'static Regex {
        match self {
            Category::Adventurer => &ADVENTURER_PATTERN,
            Category::Dragon => &DRAGON_PATTERN,
            Category::Weapon => &WEAPON_PATTERN,
            Category::Wyrmprint => &WYRMPRINT_PATTERN,
        }
    }

    /// First filename requested from the media listing
    pub fn start_marker(&self) -> &'static str {
        match self {
            Category::Adventurer => "100001_01_r04.png",
            Category::Dragon => "200010_01.png",
            Category::Weapon => "301001_01_19901.png",
            Category::Wyrmprint => "400001_01.png",
        }
    }

    /// First character at which the media listing scan halts
    ///
    /// The listing is returned in lexical order, so any filename whose first
    /// character sorts at or past this marker ends the scan.
    pub fn stop_marker(&self) -> char {
        match self {
            Category::Adventurer => '2',
            Category::Dragon => '3',
            Category::Weapon => '4',
            Category::Wyrmprint => 'A',
        }
    }

    /// Directory under the image root that downloads are saved to
    pub fn save_dir(&self) -> &'static str {
        match self {
            Category::Adventurer => "character",
            Category::Dragon => "dragon",
            Category::Weapon => "weapon",
            Category::Wyrmprint => "amulet",
        }
    }

    /// Alternate catalog key to try when a filename has no direct entry
    ///
    /// Wyrmprints have two image variants sharing one catalog entry keyed by
    /// the second variant, so a `_01` filename falls back to its `_02` key.
    /// Other categories have no fallback.
    pub fn catalog_key_fallback(&self, file_name: &str) -> Option<String> {
        match self {
            Category::Wyrmprint if file_name.contains("_01") => {
                Some(file_name.replace("_01", "_02"))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
