//! Static reference data: translations, Hadith collections, chapters, countries.

use serde::Serialize;

/// A Quran translation offered by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Value sent as `translator`.
    pub id: &'static str,
    pub name: &'static str,
    pub language: &'static str,
    /// ISO-style language code.
    pub code: &'static str,
}

/// A Hadith collection offered by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

/// A Quran chapter (surah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub number: u16,
    pub name: &'static str,
    pub verses: u16,
}

const fn translation(
    id: &'static str,
    name: &'static str,
    language: &'static str,
    code: &'static str,
) -> Translation {
    Translation {
        id,
        name,
        language,
        code,
    }
}

const fn chapter(number: u16, name: &'static str, verses: u16) -> Chapter {
    Chapter {
        number,
        name,
        verses,
    }
}

/// Translations, default first.
pub const TRANSLATIONS: &[Translation] = &[
    translation("2", "Yusuf Ali", "English", "en"),
    translation("1", "Arabic", "Arabic", "ar"),
    translation("3", "Shakir", "English", "en"),
    translation("4", "Pickthal", "English", "en"),
    translation("6", "Transliteration", "Transliteration", "tr"),
    translation("17", "Urdu", "Urdu", "ur"),
    translation("8", "French", "French", "fr"),
    translation("9", "Spanish", "Spanish", "es"),
    translation("10", "Indonesian", "Indonesian", "id"),
    translation("11", "Melayu", "Malay", "ms"),
    translation("12", "German", "German", "de"),
    translation("19", "Russian", "Russian", "ru"),
];

pub const COLLECTIONS: &[Collection] = &[
    Collection {
        id: "1",
        name: "Sahih Bukhari",
        code: "bukhari",
    },
    Collection {
        id: "2",
        name: "Sahih Muslim",
        code: "muslim",
    },
    Collection {
        id: "3",
        name: "Sunan Abu-Dawud",
        code: "abudawud",
    },
    Collection {
        id: "4",
        name: "Malik's Muwatta",
        code: "muwatta",
    },
];

/// Chapters with display names. Not every chapter is listed; searches may
/// still be scoped to any chapter number.
pub const CHAPTERS: &[Chapter] = &[
    chapter(1, "Al-Fatiha", 7),
    chapter(2, "Al-Baqara", 286),
    chapter(3, "Aal-e-Imran", 200),
    chapter(4, "An-Nisa", 176),
    chapter(5, "Al-Maeda", 120),
    chapter(6, "Al-Anaam", 165),
    chapter(7, "Al-Araf", 206),
    chapter(8, "Al-Anfal", 75),
    chapter(9, "At-Taubah", 129),
    chapter(10, "Yunus", 109),
    chapter(81, "At-Takwir", 29),
    chapter(85, "Al-Burooj", 22),
    chapter(90, "Al-Balad", 20),
    chapter(94, "Ash-Sharh", 8),
    chapter(100, "Al-Adiyat", 11),
    chapter(105, "Al-Fil", 5),
    chapter(110, "An-Nasr", 3),
    chapter(113, "Al-Falaq", 5),
    chapter(114, "An-Nas", 6),
];

pub const POPULAR_COUNTRIES: &[&str] = &[
    "USA",
    "UK",
    "Canada",
    "Australia",
    "India",
    "Pakistan",
    "Saudi Arabia",
    "UAE",
    "Egypt",
    "Turkey",
    "Malaysia",
    "Indonesia",
];

pub const COUNTRIES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola",
    "Argentina", "Australia", "Austria", "Azerbaijan", "Bahrain",
    "Bangladesh", "Belgium", "Brazil", "Brunei", "Bulgaria",
    "Canada", "China", "Denmark", "Egypt", "Ethiopia",
    "Finland", "France", "Germany", "Ghana", "Greece",
    "India", "Indonesia", "Iran", "Iraq", "Ireland",
    "Italy", "Japan", "Jordan", "Kazakhstan", "Kenya",
    "Kuwait", "Lebanon", "Libya", "Malaysia", "Maldives",
    "Morocco", "Netherlands", "Nigeria", "Norway", "Oman",
    "Pakistan", "Palestine", "Philippines", "Qatar", "Russia",
    "Saudi Arabia", "Singapore", "Somalia", "South Africa", "Spain",
    "Sri Lanka", "Sudan", "Sweden", "Switzerland", "Syria",
    "Tanzania", "Thailand", "Tunisia", "Turkey", "Uganda",
    "Ukraine", "United Arab Emirates", "United Kingdom", "USA", "Uzbekistan",
    "Yemen",
];

pub fn translation_by_id(id: &str) -> Option<&'static Translation> {
    TRANSLATIONS.iter().find(|t| t.id == id)
}

pub fn collection_by_id(id: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.id == id)
}

/// Look a chapter up by its number as typed, e.g. `"7"`.
pub fn chapter_by_number(number: &str) -> Option<&'static Chapter> {
    let number: u16 = number.trim().parse().ok()?;
    CHAPTERS.iter().find(|c| c.number == number)
}

/// Case-insensitive membership in [`COUNTRIES`] or [`POPULAR_COUNTRIES`].
pub fn is_known_country(name: &str) -> bool {
    let name = name.trim();
    COUNTRIES
        .iter()
        .chain(POPULAR_COUNTRIES)
        .any(|c| c.eq_ignore_ascii_case(name))
}
