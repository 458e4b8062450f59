use chick_feed::config::AppConfig;
use chick_feed::filter::{filter_recipes, Facet, FilterState};
use chick_feed::keys::{map_key, Action};
use chick_feed::nav::Tab;
use chick_feed::recipe::{FeedDocument, Recipe, ANY, SOURCES};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn tab_keys_map_to_tab_switches() {
    assert_eq!(map_key(key(KeyCode::Tab)), Some(Action::NextTab));
    assert_eq!(map_key(key(KeyCode::BackTab)), Some(Action::PrevTab));
    assert_eq!(map_key(key(KeyCode::Char('1'))), Some(Action::SwitchTab(0)));
    assert_eq!(map_key(key(KeyCode::Char('2'))), Some(Action::SwitchTab(1)));
    assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Action::Refresh));
    assert_eq!(map_key(key(KeyCode::Char('c'))), Some(Action::ClearFilters));
}

#[test]
fn ctrl_c_quits() {
    let event = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    };
    assert_eq!(map_key(event), Some(Action::Quit));
}

#[test]
fn config_defaults_are_valid() {
    assert!(AppConfig::default().validate().is_ok());
}

fn arb_facet() -> impl Strategy<Value = Facet> {
    prop::sample::select(Facet::all())
}

/// A recipe whose categorical attributes are either absent or drawn from the
/// published option tables, with a free-form source.
fn arb_recipe() -> impl Strategy<Value = Recipe> {
    (
        prop::option::of("[a-zA-Z0-9 ]{1,20}"),
        prop::option::of(prop::sample::select(&Facet::MealType.options()[1..])),
        prop::option::of(prop::sample::select(&Facet::Effort.options()[1..])),
        prop::option::of(prop::sample::select(&Facet::Diet.options()[1..])),
        prop::option::of(prop::sample::select(&Facet::Health.options()[1..])),
        prop::option::of(prop::sample::select(&Facet::Cuisine.options()[1..])),
        prop::option::of(prop::sample::select(&Facet::HeroIngredient.options()[1..])),
        prop::option::of(prop::sample::select(&Facet::Time.options()[1..])),
        prop::option::of("[a-zA-Z ]{1,20}"),
    )
        .prop_map(
            |(title, meal_type, effort, diet, health, cuisine, hero, time, source)| Recipe {
                title,
                meal_type: meal_type.map(str::to_string),
                effort: effort.map(str::to_string),
                diet: diet.map(str::to_string),
                health: health.map(str::to_string),
                cuisine: cuisine.map(str::to_string),
                hero_ingredient: hero.map(str::to_string),
                time: time.map(str::to_string),
                source,
                ..Recipe::default()
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An all-"Any" filter with no sources selected matches every recipe.
    #[test]
    fn default_filter_matches_every_recipe(recipe in arb_recipe()) {
        let filters = FilterState::new();
        prop_assert!(filters.matches(&recipe));
    }

    /// A facet selection matches exactly the recipes carrying that value.
    #[test]
    fn facet_selection_is_exact_equality(recipe in arb_recipe(), facet in arb_facet()) {
        let mut filters = FilterState::new();
        let value = facet.options()[1];
        filters.set(facet, value);

        let attribute = match facet {
            Facet::MealType => &recipe.meal_type,
            Facet::Effort => &recipe.effort,
            Facet::Diet => &recipe.diet,
            Facet::Health => &recipe.health,
            Facet::Cuisine => &recipe.cuisine,
            Facet::HeroIngredient => &recipe.hero_ingredient,
            Facet::Time => &recipe.time,
        };
        prop_assert_eq!(filters.matches(&recipe), attribute.as_deref() == Some(value));
    }

    /// Every recipe surviving the filter actually passes the predicate, and
    /// the filtered list never grows.
    #[test]
    fn filtering_is_a_subset(
        recipes in prop::collection::vec(arb_recipe(), 0..20),
        facet in arb_facet(),
    ) {
        let doc = FeedDocument { recipes, generated_at: None };
        let mut filters = FilterState::new();
        filters.set(facet, facet.options()[1]);

        let matched = filter_recipes(&filters, Some(&doc));
        prop_assert!(matched.len() <= doc.recipes.len());
        for recipe in matched {
            prop_assert!(filters.matches(recipe));
        }
    }

    /// Clear-all restores the default state no matter what came before.
    #[test]
    fn clear_always_restores_defaults(
        facet in arb_facet(),
        value_index in 0usize..12,
        source_index in 0usize..SOURCES.len(),
    ) {
        let mut filters = FilterState::new();
        let options = facet.options();
        filters.set(facet, options[value_index % options.len()]);
        filters.toggle_source(SOURCES[source_index].name);

        filters.clear();
        prop_assert!(filters.is_default());
        prop_assert!(filters.sources.is_empty());
        for facet in Facet::all() {
            prop_assert_eq!(filters.selection(*facet), ANY);
        }
    }

    /// Cycling a facet through its whole option table returns to the start.
    #[test]
    fn facet_cycle_is_cyclic(facet in arb_facet(), forward in any::<bool>()) {
        let mut filters = FilterState::new();
        for _ in 0..facet.options().len() {
            filters.cycle(facet, forward);
        }
        prop_assert_eq!(filters.selection(facet), ANY);
    }

    /// Toggling the same source twice is a no-op.
    #[test]
    fn source_toggle_is_involutive(source_index in 0usize..SOURCES.len()) {
        let mut filters = FilterState::new();
        let before = filters.sources.clone();
        filters.toggle_source(SOURCES[source_index].name);
        filters.toggle_source(SOURCES[source_index].name);
        prop_assert_eq!(filters.sources, before);
    }

    /// Source matching ignores case on both sides.
    #[test]
    fn source_match_ignores_case(name in "[a-zA-Z]{3,12}", suffix in "[a-zA-Z ]{0,10}") {
        let mut filters = FilterState::new();
        filters.sources.push(name.to_lowercase());

        let recipe = Recipe {
            source: Some(format!("{}{}", name.to_uppercase(), suffix)),
            ..Recipe::default()
        };
        prop_assert!(filters.matches(&recipe));
    }

    /// A recipe without a source never matches once a source is selected.
    #[test]
    fn sourceless_recipe_rejected_by_source_filter(
        mut recipe in arb_recipe(),
        source_index in 0usize..SOURCES.len(),
    ) {
        recipe.source = None;
        let mut filters = FilterState::new();
        filters.toggle_source(SOURCES[source_index].name);
        prop_assert!(!filters.matches(&recipe));
    }

    /// Tab cycling in either direction comes back around.
    #[test]
    fn tab_navigation_is_cyclic(start in prop::sample::select(Tab::all())) {
        let mut tab = start;
        for _ in 0..Tab::all().len() {
            tab = tab.next();
        }
        prop_assert_eq!(tab, start);

        for _ in 0..Tab::all().len() {
            tab = tab.previous();
        }
        prop_assert_eq!(tab, start);
    }

    /// Every letter key either maps to an action or to nothing, never panics,
    /// and movement keys are stable.
    #[test]
    fn movement_keys_are_stable(ch in prop::sample::select(vec!['j', 'k', 'h', 'l'])) {
        let action = map_key(key(KeyCode::Char(ch)));
        let expected = match ch {
            'j' => Action::MoveDown,
            'k' => Action::MoveUp,
            'h' => Action::MoveLeft,
            _ => Action::MoveRight,
        };
        prop_assert_eq!(action, Some(expected));
    }
}
