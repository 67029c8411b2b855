//! Fixed category taxonomy and its derived reverse index.
//!
//! The forward table is authored by hand. The reverse index (term →
//! categories) is built from it once, on first use, and never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical categories and their related terms, in display order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "business",
        &[
            "corporate",
            "office",
            "meeting",
            "team",
            "professional",
            "finance",
            "startup",
            "conference",
            "workplace",
            "entrepreneur",
            "presentation",
            "handshake",
        ],
    ),
    (
        "technology",
        &[
            "computer",
            "digital",
            "software",
            "coding",
            "data",
            "innovation",
            "robot",
            "smartphone",
            "internet",
            "network",
            "circuit",
            "futuristic",
        ],
    ),
    (
        "nature",
        &[
            "landscape",
            "forest",
            "trees",
            "mountains",
            "ocean",
            "river",
            "wildlife",
            "sunset",
            "outdoor",
            "flowers",
            "waterfall",
            "sky",
        ],
    ),
    (
        "people",
        &[
            "person",
            "crowd",
            "family",
            "friends",
            "portrait",
            "community",
            "children",
            "couple",
            "smiling",
            "walking",
        ],
    ),
    (
        "city",
        &[
            "urban",
            "street",
            "traffic",
            "skyline",
            "buildings",
            "downtown",
            "night",
            "architecture",
            "metropolis",
            "pedestrians",
        ],
    ),
    (
        "food",
        &[
            "cooking",
            "kitchen",
            "restaurant",
            "meal",
            "chef",
            "ingredients",
            "dining",
            "fresh",
            "baking",
            "coffee",
        ],
    ),
    (
        "travel",
        &[
            "vacation",
            "tourism",
            "journey",
            "adventure",
            "airport",
            "beach",
            "destination",
            "explore",
            "hotel",
            "road",
        ],
    ),
    (
        "sports",
        &[
            "fitness",
            "running",
            "football",
            "soccer",
            "basketball",
            "training",
            "athlete",
            "stadium",
            "competition",
            "exercise",
        ],
    ),
    (
        "health",
        &[
            "medical",
            "hospital",
            "doctor",
            "wellness",
            "healthcare",
            "nurse",
            "medicine",
            "yoga",
            "healthy",
            "therapy",
        ],
    ),
    (
        "education",
        &[
            "school",
            "student",
            "learning",
            "classroom",
            "tutor",
            "university",
            "study",
            "books",
            "library",
            "lecture",
        ],
    ),
    (
        "lifestyle",
        &[
            "home",
            "relaxing",
            "fashion",
            "shopping",
            "leisure",
            "hobby",
            "living",
            "morning",
            "routine",
            "cozy",
        ],
    ),
    (
        "abstract",
        &[
            "background",
            "motion",
            "pattern",
            "particles",
            "light",
            "texture",
            "gradient",
            "loop",
            "geometric",
            "bokeh",
        ],
    ),
];

/// Related terms of a canonical category, or `None` if `name` is not one.
pub fn category_terms(name: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, terms)| *terms)
}

/// Returns `true` if `name` is a canonical category.
pub fn is_category(name: &str) -> bool {
    category_terms(name).is_some()
}

/// Categories listing `term` among their related terms, in table order.
///
/// Returns an empty slice for unknown terms.
pub fn categories_for(term: &str) -> &'static [&'static str] {
    reverse_index().get(term).map(Vec::as_slice).unwrap_or(&[])
}

static REVERSE_INDEX: OnceLock<HashMap<&'static str, Vec<&'static str>>> = OnceLock::new();

fn reverse_index() -> &'static HashMap<&'static str, Vec<&'static str>> {
    REVERSE_INDEX.get_or_init(|| {
        let mut index: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for (category, terms) in CATEGORIES {
            for term in *terms {
                let owners = index.entry(*term).or_default();
                if !owners.contains(category) {
                    owners.push(*category);
                }
            }
        }
        index
    })
}
