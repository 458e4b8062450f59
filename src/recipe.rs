//! Recipe and feed document types plus the static facet tables.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single recipe from either feed. Every field is optional; the feeds are
/// hand-curated JSON and no field is guaranteed. An absent field suppresses
/// the corresponding line in the UI rather than erroring.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub why_youll_love_it: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub source_detail: Option<String>,
    pub source_url: Option<String>,
    pub meal_type: Option<String>,
    pub effort: Option<String>,
    pub diet: Option<String>,
    pub health: Option<String>,
    pub cuisine: Option<String>,
    pub hero_ingredient: Option<String>,
    pub time: Option<String>,
}

impl Recipe {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// Wire shape of each feed: a `recipes` array plus, on the inspiration feed,
/// an optional generation timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDocument {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    pub generated_at: Option<DateTime<Utc>>,
}

pub const ANY: &str = "Any";

pub const MEAL_TYPES: &[&str] = &[
    ANY,
    "Weeknight Dinner",
    "Quick Lunch",
    "Side Dish",
    "Weekend Showstopper",
    "BBQ",
    "Brunch",
    "Snack/Starter",
];

pub const EFFORTS: &[&str] = &[ANY, "Easy", "Medium", "Involved"];

pub const DIETS: &[&str] = &[ANY, "Meat", "Vegetarian", "Vegan"];

pub const HEALTH_LEVELS: &[&str] = &[ANY, "Light", "Balanced", "Indulgent"];

pub const CUISINES: &[&str] = &[
    ANY,
    "Asian",
    "Middle Eastern",
    "Indian",
    "Italian",
    "British",
    "Australian/Fresh",
    "Mexican/Latin",
    "Mediterranean",
    "American",
];

pub const HERO_INGREDIENTS: &[&str] = &[
    ANY,
    "Chicken",
    "Beef",
    "Lamb",
    "Pork",
    "Fish/Seafood",
    "Beans/Legumes",
    "Eggs",
    "Vegetables",
    "Pasta/Noodles",
    "Rice/Grains",
    "Tofu/Tempeh",
];

pub const TIME_BUCKETS: &[&str] = &[ANY, "Under 30 mins", "30-60 mins", "1 hour+"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub name: &'static str,
    pub emoji: &'static str,
}

/// The curated list of recipe sources shown as toggle chips. Matching against
/// a recipe's `source` field is substring containment, not equality, so
/// "Ottolenghi" still matches "Ottolenghi & Tamimi".
pub const SOURCES: &[Source] = &[
    Source { name: "Ottolenghi", emoji: "🥗" },
    Source { name: "Ixta Belfrage", emoji: "🌶️" },
    Source { name: "Lara Lee", emoji: "🥥" },
    Source { name: "Dishoom", emoji: "☕" },
    Source { name: "Bill Granger", emoji: "🍳" },
    Source { name: "Nigella", emoji: "🍫" },
    Source { name: "Bold Beans", emoji: "🫘" },
    Source { name: "Six Seasons", emoji: "🥬" },
    Source { name: "Serious Eats", emoji: "🔬" },
    Source { name: "Diana Henry", emoji: "🍂" },
    Source { name: "Splash of Soy", emoji: "🥢" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_deserializes_camel_case_keys() {
        let json = r#"{
            "id": "r1",
            "title": "Charred Corn",
            "whyYoullLoveIt": "Smoky and sweet",
            "imageUrl": "https://example.com/corn.jpg",
            "sourceDetail": "Flavour, p. 82",
            "mealType": "BBQ",
            "heroIngredient": "Vegetables"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id.as_deref(), Some("r1"));
        assert_eq!(recipe.why_youll_love_it.as_deref(), Some("Smoky and sweet"));
        assert_eq!(recipe.meal_type.as_deref(), Some("BBQ"));
        assert_eq!(recipe.hero_ingredient.as_deref(), Some("Vegetables"));
        assert!(recipe.source.is_none());
    }

    #[test]
    fn recipe_tolerates_unknown_fields_and_empty_object() {
        let recipe: Recipe = serde_json::from_str(r#"{"rating": 5}"#).unwrap();
        assert!(recipe.title.is_none());
        assert_eq!(recipe.display_title(), "Untitled");
    }

    #[test]
    fn feed_document_defaults_missing_recipes_array() {
        let doc: FeedDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.recipes.is_empty());
        assert!(doc.generated_at.is_none());
    }

    #[test]
    fn feed_document_parses_generated_at() {
        let doc: FeedDocument = serde_json::from_str(
            r#"{"recipes": [], "generatedAt": "2025-06-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(doc.generated_at.is_some());
    }

    #[test]
    fn facet_tables_start_with_any() {
        for table in [
            MEAL_TYPES,
            EFFORTS,
            DIETS,
            HEALTH_LEVELS,
            CUISINES,
            HERO_INGREDIENTS,
            TIME_BUCKETS,
        ] {
            assert_eq!(table[0], ANY);
        }
    }
}
