//! Allergy and intolerance to ingredient expansion.

use rsvp_core::normalize::normalize_key;
use rsvp_core::types::Language;

struct ExpansionRule {
    /// Catalog codes (allergy or intolerance) this rule answers to.
    codes: &'static [&'static str],
    /// Normalized fragments tried against free-text values.
    keywords: &'static [&'static str],
    /// Ingredients listed Spanish, English, French.
    ingredients: [&'static [&'static str]; 3],
}

impl ExpansionRule {
    const fn ingredients(&self, language: Language) -> &'static [&'static str] {
        match language {
            Language::Es => self.ingredients[0],
            Language::En => self.ingredients[1],
            Language::Fr => self.ingredients[2],
        }
    }

    fn mentions(&self, keys: &[String]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| keys.iter().any(|key| key.contains(keyword)))
    }
}

// Order matters for keyword matching: "peanut" before "nuts", "shellfish"
// before "fish".
const RULES: &[ExpansionRule] = &[
    ExpansionRule {
        codes: &["milk", "lactose"],
        keywords: &["milk", "dairy", "lact", "leche", "lait"],
        ingredients: [
            &["leche", "lácteos", "nata", "queso"],
            &["milk", "dairy", "cream", "cheese"],
            &["lait", "produits laitiers", "crème", "fromage"],
        ],
    },
    ExpansionRule {
        codes: &["egg"],
        keywords: &["egg", "huevo", "oeuf", "œuf"],
        ingredients: [
            &["huevo", "mayonesa", "merengue"],
            &["egg", "mayonnaise", "meringue"],
            &["œuf", "mayonnaise", "meringue"],
        ],
    },
    ExpansionRule {
        codes: &["peanut"],
        keywords: &["peanut", "cacahuete", "mani", "arachide"],
        ingredients: [
            &["cacahuete", "crema de cacahuete", "satay"],
            &["peanut", "peanut butter", "satay"],
            &["arachide", "beurre de cacahuète", "satay"],
        ],
    },
    ExpansionRule {
        codes: &["tree_nuts"],
        keywords: &["nuts", "nuez", "nueces", "frutos secos", "almond", "almendra", "noix"],
        ingredients: [
            &["almendra", "nuez", "avellana", "anacardo", "pistacho"],
            &["almond", "walnut", "hazelnut", "cashew", "pistachio"],
            &["amande", "noix", "noisette", "cajou", "pistache"],
        ],
    },
    ExpansionRule {
        codes: &["gluten"],
        keywords: &["gluten", "celiac", "celiaco", "wheat", "trigo"],
        ingredients: [
            &["gluten", "trigo", "pan", "pasta", "harina"],
            &["gluten", "wheat", "bread", "pasta", "flour"],
            &["gluten", "blé", "pain", "pâtes", "farine"],
        ],
    },
    ExpansionRule {
        codes: &["shellfish"],
        keywords: &["shellfish", "marisco", "crustace", "shrimp", "gamba", "fruits de mer"],
        ingredients: [
            &["marisco", "gamba", "langostino", "langosta", "cangrejo"],
            &["shellfish", "shrimp", "prawn", "lobster", "crab"],
            &["fruits de mer", "crevette", "gambas", "homard", "crabe"],
        ],
    },
    ExpansionRule {
        codes: &["fish"],
        keywords: &["fish", "pescado", "poisson"],
        ingredients: [
            &["pescado", "salmón", "atún", "bacalao", "anchoa"],
            &["fish", "salmon", "tuna", "cod", "anchovy"],
            &["poisson", "saumon", "thon", "cabillaud", "anchois"],
        ],
    },
    ExpansionRule {
        codes: &["soy"],
        keywords: &["soy", "soja"],
        ingredients: [
            &["soja", "salsa de soja", "tofu", "edamame"],
            &["soy", "soy sauce", "tofu", "edamame"],
            &["soja", "sauce soja", "tofu", "edamame"],
        ],
    },
    ExpansionRule {
        codes: &["sesame"],
        keywords: &["sesame", "sesamo"],
        ingredients: [
            &["sésamo", "tahini", "hummus"],
            &["sesame", "tahini", "hummus"],
            &["sésame", "tahini", "houmous"],
        ],
    },
    ExpansionRule {
        codes: &["mustard"],
        keywords: &["mustard", "mostaza", "moutarde"],
        ingredients: [&["mostaza"], &["mustard"], &["moutarde"]],
    },
    ExpansionRule {
        codes: &["sulfites"],
        keywords: &["sulfit", "sulphit"],
        ingredients: [
            &["sulfitos", "vino", "fruta deshidratada"],
            &["sulfites", "wine", "dried fruit"],
            &["sulfites", "vin", "fruits secs"],
        ],
    },
    ExpansionRule {
        codes: &["fructose"],
        keywords: &["fructos"],
        ingredients: [
            &["fructosa", "miel", "zumo de frutas"],
            &["fructose", "honey", "fruit juice"],
            &["fructose", "miel", "jus de fruits"],
        ],
    },
    ExpansionRule {
        codes: &["histamine"],
        keywords: &["histamin"],
        ingredients: [
            &["queso curado", "embutidos", "vino"],
            &["aged cheese", "cured meats", "wine"],
            &["fromage affiné", "charcuterie", "vin"],
        ],
    },
    ExpansionRule {
        codes: &["caffeine"],
        keywords: &["caffeine", "cafeina", "cafeine"],
        ingredients: [
            &["café", "té negro", "bebidas energéticas"],
            &["coffee", "black tea", "energy drinks"],
            &["café", "thé noir", "boissons énergisantes"],
        ],
    },
    ExpansionRule {
        codes: &["alcohol"],
        keywords: &["alcohol", "alcool"],
        ingredients: [
            &["cerveza", "vino", "licores", "cócteles"],
            &["beer", "wine", "spirits", "cocktails"],
            &["bière", "vin", "spiritueux", "cocktails"],
        ],
    },
];

/// ## Summary
/// Ingredients to keep off the table for one allergy or intolerance.
///
/// `code` is the value resolved through its catalog and `label` its display
/// label. A rule listing `code` wins; otherwise the first rule with a keyword
/// inside either normalized text. `None` when no rule applies.
pub(super) fn expand(code: &str, label: &str, language: Language) -> Option<&'static [&'static str]> {
    let rule = RULES
        .iter()
        .find(|rule| rule.codes.contains(&code))
        .or_else(|| {
            let keys = [normalize_key(code), normalize_key(label)];
            RULES.iter().find(|rule| rule.mentions(&keys))
        })?;

    Some(rule.ingredients(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_selects_rule() {
        assert_eq!(
            expand("milk", "Milk", Language::En),
            Some(["milk", "dairy", "cream", "cheese"].as_slice())
        );
        assert_eq!(expand("lactose", "Lactosa", Language::Es).map(|i| i[0]), Some("leche"));
    }

    #[test]
    fn free_text_matches_keywords() {
        assert_eq!(expand("Peanut butter", "Peanut butter", Language::En).map(|i| i[0]), Some("peanut"));
        assert_eq!(expand("Mariscos crudos", "Mariscos crudos", Language::Fr).map(|i| i[0]), Some("fruits de mer"));
        assert_eq!(expand("Shellfish", "Shellfish", Language::En).map(|i| i[0]), Some("shellfish"));
    }

    #[test]
    fn unknown_allergy_has_no_rule() {
        assert!(expand("Kiwi", "Kiwi", Language::En).is_none());
    }
}
