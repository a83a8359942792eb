use std::collections::BTreeSet;

/// Canonical ingredient name and its regional-language and culinary aliases.
pub type SynonymEntry = (&'static str, &'static [&'static str]);

/// Built-in synonym table used for pantry matching.
pub const INGREDIENT_SYNONYMS: &[SynonymEntry] = &[
    (
        "chicken",
        &[
            "chicken breast",
            "chicken thigh",
            "chicken wings",
            "poultry",
            "chicken pieces",
            "murgh",
            "murg",
            "koli",
            "kozhi",
            "kodi",
        ],
    ),
    ("potato", &["potatoes", "aloo", "potato"]),
    ("tomato", &["tomatoes", "tamatar", "tomato"]),
    ("onion", &["onions", "pyaaz", "onion"]),
    ("garlic", &["lahsun", "garlic cloves"]),
    ("ginger", &["adrak"]),
    ("paneer", &["cottage cheese", "indian cheese"]),
    ("curd", &["yogurt", "dahi", "yoghurt", "curd"]),
    ("rice", &["basmati", "chawal", "basmati rice"]),
    ("spinach", &["palak", "spinach leaves"]),
    (
        "beans",
        &[
            "green beans",
            "french beans",
            "string beans",
            "rajma",
            "kidney beans",
            "mixed vegetables",
        ],
    ),
    ("carrot", &["carrots", "gajar"]),
    ("peas", &["green peas", "matar", "frozen peas"]),
    (
        "capsicum",
        &["bell pepper", "shimla mirch", "green pepper", "red pepper"],
    ),
    ("cabbage", &["patta gobhi"]),
    ("cauliflower", &["gobi", "phool gobhi"]),
    ("corn", &["sweet corn", "makai", "baby corn"]),
    ("mushroom", &["mushrooms", "button mushroom"]),
    ("methi (fenugreek)", &["methi", "fenugreek", "methi leaves"]),
    ("bottle gourd (lauki)", &["lauki", "bottle gourd", "dudhi"]),
    (
        "brinjal (eggplant)",
        &["brinjal", "eggplant", "baingan", "aubergine"],
    ),
    ("okra (ladies finger)", &["okra", "ladies finger", "bhindi"]),
    ("bitter gourd", &["karela"]),
    ("egg", &["eggs", "egg"]),
    (
        "fish",
        &["pomfret", "salmon", "tuna", "mackerel", "rohu", "fish fillet"],
    ),
    ("prawns", &["shrimp", "jhinga", "prawn"]),
    ("mutton", &["lamb", "goat meat", "goat"]),
    (
        "dal",
        &[
            "toor dal",
            "chana dal",
            "moong dal",
            "urad dal",
            "masoor dal",
            "lentils",
            "daal",
        ],
    ),
    (
        "flour",
        &["wheat flour", "atta", "maida", "all-purpose flour"],
    ),
    ("noodles", &["hakka noodles", "chow mein", "instant noodles"]),
    ("tofu", &["bean curd", "soy paneer"]),
    ("soy", &["soy sauce", "soya"]),
];

/// Loose containment test in either direction, no token boundaries.
pub fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Resolve an ingredient or pantry name to all of its known variants.
///
/// The term is lower-cased and trimmed first. The result always contains the
/// term itself; any table entry whose key or alias overlaps the term
/// contributes its key and every alias.
///
/// # Examples
/// ```
/// use mealmate_meal_planning::synonyms::variants;
///
/// let found = variants("Aloo");
/// assert!(found.contains("potato"));
/// assert!(found.contains("aloo"));
/// ```
pub fn variants(term: &str) -> BTreeSet<String> {
    let term = term.trim().to_lowercase();
    let mut found = BTreeSet::new();

    if term.is_empty() {
        found.insert(term);
        return found;
    }

    for (key, aliases) in INGREDIENT_SYNONYMS {
        let hit = overlaps(&term, key) || aliases.iter().any(|alias| overlaps(&term, alias));
        if hit {
            found.insert((*key).to_string());
            found.extend(aliases.iter().map(|alias| (*alias).to_string()));
        }
    }

    found.insert(term);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_term_resolves_to_itself() {
        let found = variants("saffron");
        assert_eq!(found.len(), 1);
        assert!(found.contains("saffron"));
    }

    #[test]
    fn test_term_is_normalized() {
        let found = variants("  PALAK ");
        assert!(found.contains("palak"));
        assert!(found.contains("spinach"));
        assert!(found.contains("spinach leaves"));
    }

    #[test]
    fn test_regional_chicken_names() {
        for term in ["murgh", "koli", "kozhi", "kodi", "poultry"] {
            let found = variants(term);
            assert!(found.contains("chicken"), "{term} should resolve to chicken");
        }
    }

    #[test]
    fn test_term_containing_alias_matches() {
        // "boneless chicken thigh" contains the key "chicken"
        let found = variants("boneless chicken thigh");
        assert!(found.contains("poultry"));
        assert!(found.contains("boneless chicken thigh"));
    }

    #[test]
    fn test_alias_containing_term_matches() {
        // "gobi" is contained in the cauliflower alias list
        let found = variants("gobi");
        assert!(found.contains("cauliflower"));
        assert!(found.contains("phool gobhi"));
    }

    #[test]
    fn test_substring_match_has_no_token_boundaries() {
        // "eggplant" contains "egg", "peppercorn" contains "corn"
        let found = variants("eggplant");
        assert!(found.contains("brinjal"));
        assert!(found.contains("eggs"));

        let found = variants("peppercorn");
        assert!(found.contains("sweet corn"));
    }

    #[test]
    fn test_empty_term_resolves_to_itself() {
        let found = variants("   ");
        assert_eq!(found.len(), 1);
        assert!(found.contains(""));
    }

    #[test]
    fn test_table_has_every_entry() {
        assert_eq!(INGREDIENT_SYNONYMS.len(), 32);
    }
}
