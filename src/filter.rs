//! Facet definitions and the recipe filter predicate.

use crate::recipe::{
    FeedDocument, Recipe, ANY, CUISINES, DIETS, EFFORTS, HEALTH_LEVELS, HERO_INGREDIENTS,
    MEAL_TYPES, TIME_BUCKETS,
};

/// One of the seven single-valued filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    MealType,
    Effort,
    Diet,
    Health,
    Cuisine,
    HeroIngredient,
    Time,
}

impl Facet {
    pub fn label(&self) -> &'static str {
        match self {
            Facet::MealType => "Meal Type",
            Facet::Effort => "Effort",
            Facet::Diet => "Diet",
            Facet::Health => "Health",
            Facet::Cuisine => "Cuisine",
            Facet::HeroIngredient => "Hero Ingredient",
            Facet::Time => "Time",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Facet::MealType => MEAL_TYPES,
            Facet::Effort => EFFORTS,
            Facet::Diet => DIETS,
            Facet::Health => HEALTH_LEVELS,
            Facet::Cuisine => CUISINES,
            Facet::HeroIngredient => HERO_INGREDIENTS,
            Facet::Time => TIME_BUCKETS,
        }
    }

    pub fn all() -> &'static [Facet] {
        &[
            Facet::MealType,
            Facet::Effort,
            Facet::Diet,
            Facet::Health,
            Facet::Cuisine,
            Facet::HeroIngredient,
            Facet::Time,
        ]
    }
}

/// Current filter selections: one value per facet (default "Any") plus a
/// multi-valued set of source names (default empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub meal_type: String,
    pub effort: String,
    pub diet: String,
    pub health: String,
    pub cuisine: String,
    pub hero_ingredient: String,
    pub time: String,
    pub sources: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            meal_type: ANY.to_string(),
            effort: ANY.to_string(),
            diet: ANY.to_string(),
            health: ANY.to_string(),
            cuisine: ANY.to_string(),
            hero_ingredient: ANY.to_string(),
            time: ANY.to_string(),
            sources: Vec::new(),
        }
    }

    pub fn selection(&self, facet: Facet) -> &str {
        match facet {
            Facet::MealType => &self.meal_type,
            Facet::Effort => &self.effort,
            Facet::Diet => &self.diet,
            Facet::Health => &self.health,
            Facet::Cuisine => &self.cuisine,
            Facet::HeroIngredient => &self.hero_ingredient,
            Facet::Time => &self.time,
        }
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let slot = match facet {
            Facet::MealType => &mut self.meal_type,
            Facet::Effort => &mut self.effort,
            Facet::Diet => &mut self.diet,
            Facet::Health => &mut self.health,
            Facet::Cuisine => &mut self.cuisine,
            Facet::HeroIngredient => &mut self.hero_ingredient,
            Facet::Time => &mut self.time,
        };
        *slot = value.into();
    }

    /// Step the facet's selection through its option table, wrapping at both
    /// ends. An off-table selection restarts from "Any".
    pub fn cycle(&mut self, facet: Facet, forward: bool) {
        let options = facet.options();
        let current = options
            .iter()
            .position(|opt| *opt == self.selection(facet))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else if current == 0 {
            options.len() - 1
        } else {
            current - 1
        };
        self.set(facet, options[next]);
    }

    /// Add or remove a source name from the multi-select set.
    pub fn toggle_source(&mut self, name: &str) {
        if let Some(index) = self.sources.iter().position(|s| s == name) {
            self.sources.remove(index);
        } else {
            self.sources.push(name.to_string());
        }
    }

    /// Restore every facet to "Any" and empty the source set.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::new()
    }

    /// The filter predicate. True iff every facet is "Any" or equals the
    /// recipe's attribute exactly (case-sensitive), and, when sources are
    /// selected, the recipe's source contains one of them case-insensitively.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let facets = [
            (&self.meal_type, &recipe.meal_type),
            (&self.effort, &recipe.effort),
            (&self.diet, &recipe.diet),
            (&self.health, &recipe.health),
            (&self.cuisine, &recipe.cuisine),
            (&self.hero_ingredient, &recipe.hero_ingredient),
            (&self.time, &recipe.time),
        ];
        for (selection, attribute) in facets {
            if selection != ANY && attribute.as_deref() != Some(selection.as_str()) {
                return false;
            }
        }

        if !self.sources.is_empty() {
            // Substring containment on purpose: the two feeds format source
            // names slightly differently and must still match.
            let Some(source) = recipe.source.as_deref() else {
                return false;
            };
            let source = source.to_lowercase();
            if !self
                .sources
                .iter()
                .any(|selected| source.contains(&selected.to_lowercase()))
            {
                return false;
            }
        }

        true
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the predicate over an optionally absent collection. Absent filters
/// to an empty result, never an error.
pub fn filter_recipes<'a>(
    filters: &FilterState,
    collection: Option<&'a FeedDocument>,
) -> Vec<&'a Recipe> {
    collection
        .map(|doc| doc.recipes.iter().filter(|r| filters.matches(r)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(fields: &[(&str, &str)]) -> Recipe {
        let mut recipe = Recipe::default();
        for (key, value) in fields {
            let value = Some(value.to_string());
            match *key {
                "title" => recipe.title = value,
                "source" => recipe.source = value,
                "mealType" => recipe.meal_type = value,
                "effort" => recipe.effort = value,
                "diet" => recipe.diet = value,
                "health" => recipe.health = value,
                "cuisine" => recipe.cuisine = value,
                "heroIngredient" => recipe.hero_ingredient = value,
                "time" => recipe.time = value,
                other => panic!("unknown fixture field: {}", other),
            }
        }
        recipe
    }

    #[test]
    fn default_filter_matches_anything() {
        let filters = FilterState::new();
        assert!(filters.matches(&Recipe::default()));
        assert!(filters.matches(&recipe(&[("diet", "Vegan"), ("mealType", "BBQ")])));
    }

    #[test]
    fn facet_mismatch_rejects() {
        let mut filters = FilterState::new();
        filters.set(Facet::Diet, "Vegan");
        assert!(!filters.matches(&recipe(&[("diet", "Meat")])));
        assert!(filters.matches(&recipe(&[("diet", "Vegan")])));
    }

    #[test]
    fn facet_equality_is_case_sensitive() {
        let mut filters = FilterState::new();
        filters.set(Facet::Diet, "Vegan");
        assert!(!filters.matches(&recipe(&[("diet", "vegan")])));
    }

    #[test]
    fn missing_attribute_never_equals_a_non_any_selection() {
        let mut filters = FilterState::new();
        filters.set(Facet::Cuisine, "Indian");
        assert!(!filters.matches(&Recipe::default()));
    }

    #[test]
    fn source_match_is_case_insensitive_substring() {
        let mut filters = FilterState::new();
        filters.sources.push("ottolenghi".to_string());
        assert!(filters.matches(&recipe(&[("source", "Ottolenghi & Tamimi")])));
        assert!(!filters.matches(&recipe(&[("source", "Nigella")])));
    }

    #[test]
    fn sourceless_recipe_never_matches_a_source_filter() {
        let mut filters = FilterState::new();
        filters.sources.push("Dishoom".to_string());
        assert!(!filters.matches(&recipe(&[("title", "Plain")])));
        filters.sources.clear();
        assert!(filters.matches(&recipe(&[("title", "Plain")])));
    }

    #[test]
    fn any_selected_source_is_enough() {
        let mut filters = FilterState::new();
        filters.sources.push("Nigella".to_string());
        filters.sources.push("Dishoom".to_string());
        assert!(filters.matches(&recipe(&[("source", "Dishoom: From Bombay With Love")])));
    }

    #[test]
    fn scenario_vegan_snack() {
        let doc = FeedDocument {
            recipes: vec![recipe(&[
                ("title", "A"),
                ("diet", "Vegan"),
                ("mealType", "Snack/Starter"),
            ])],
            generated_at: None,
        };
        let mut filters = FilterState::new();
        filters.set(Facet::Diet, "Vegan");

        let matched = filter_recipes(&filters, Some(&doc));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title.as_deref(), Some("A"));

        filters.set(Facet::MealType, "BBQ");
        assert!(filter_recipes(&filters, Some(&doc)).is_empty());
    }

    #[test]
    fn absent_collection_filters_to_empty() {
        let filters = FilterState::new();
        assert!(filter_recipes(&filters, None).is_empty());
    }

    #[test]
    fn clear_restores_defaults() {
        let mut filters = FilterState::new();
        filters.set(Facet::Diet, "Vegan");
        filters.set(Facet::Time, "1 hour+");
        filters.sources.push("Nigella".to_string());
        assert!(!filters.is_default());

        filters.clear();
        assert!(filters.is_default());
        assert!(filters.sources.is_empty());
        for facet in Facet::all() {
            assert_eq!(filters.selection(*facet), ANY);
        }
    }

    #[test]
    fn cycle_wraps_both_directions() {
        let mut filters = FilterState::new();
        filters.cycle(Facet::Effort, false);
        assert_eq!(filters.effort, "Involved");
        filters.cycle(Facet::Effort, true);
        assert_eq!(filters.effort, ANY);
    }

    #[test]
    fn toggle_source_is_an_involution() {
        let mut filters = FilterState::new();
        filters.toggle_source("Bold Beans");
        assert_eq!(filters.sources, vec!["Bold Beans".to_string()]);
        filters.toggle_source("Bold Beans");
        assert!(filters.sources.is_empty());
    }
}
