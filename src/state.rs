//! Application state and view state definitions.

use crate::config::AppConfig;
use crate::fetch::{FeedClient, LoadOutcome};
use crate::filter::{filter_recipes, Facet, FilterState};
use crate::nav::Tab;
use crate::notifications::{Notification, NotificationLevel};
use crate::recipe::{FeedDocument, Recipe, SOURCES};
use crate::theme::RoostTheme;

/// Focus state for the filter panel. Rows 0..7 are the seven facets in
/// `Facet::all()` order; row 7 is the source chip row.
#[derive(Debug, Clone)]
pub struct FilterPanelState {
    pub focused: bool,
    pub row: usize,
    pub source_index: usize,
}

pub const SOURCE_ROW: usize = 7;

impl FilterPanelState {
    pub fn new() -> Self {
        Self {
            focused: false,
            row: 0,
            source_index: 0,
        }
    }

    pub fn facet(&self) -> Option<Facet> {
        Facet::all().get(self.row).copied()
    }

    pub fn on_source_row(&self) -> bool {
        self.row == SOURCE_ROW
    }

    pub fn next_row(&mut self) {
        self.row = (self.row + 1) % (SOURCE_ROW + 1);
    }

    pub fn prev_row(&mut self) {
        self.row = if self.row == 0 { SOURCE_ROW } else { self.row - 1 };
    }
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct App {
    pub config: AppConfig,
    pub theme: RoostTheme,
    pub feeds: FeedClient,
    pub active_tab: Tab,
    pub filters: FilterState,
    pub filter_panel: FilterPanelState,

    pub inspiration: Option<FeedDocument>,
    pub library: Option<FeedDocument>,
    pub loading: bool,

    pub inspire_selected: Option<usize>,
    pub library_selected: Option<usize>,

    pub notifications: Vec<Notification>,
    pub help_visible: bool,
}

impl App {
    pub fn new(config: AppConfig, feeds: FeedClient) -> Self {
        Self {
            config,
            theme: RoostTheme::roost(),
            feeds,
            active_tab: Tab::Inspire,
            filters: FilterState::new(),
            filter_panel: FilterPanelState::new(),
            inspiration: None,
            library: None,
            loading: false,
            inspire_selected: None,
            library_selected: None,
            notifications: Vec::new(),
            help_visible: false,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Apply a joint load result: both collections are replaced wholesale, so
    /// a failed fetch yields an absent collection even after a prior success.
    /// Loading resolves here, once, regardless of individual outcomes.
    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome) {
        self.inspiration = outcome.inspiration;
        self.library = outcome.library;
        self.loading = false;
        for error in &outcome.errors {
            self.notify(NotificationLevel::Warning, error.clone());
        }
        if outcome.errors.is_empty() {
            self.notify(NotificationLevel::Success, "Recipes loaded");
        }
    }

    pub fn collection(&self, tab: Tab) -> Option<&FeedDocument> {
        match tab {
            Tab::Inspire => self.inspiration.as_ref(),
            Tab::Library => self.library.as_ref(),
        }
    }

    /// Recipes of the given tab's collection that pass the current filters.
    /// Recomputed on every call; the feeds hold tens of recipes at most.
    pub fn filtered(&self, tab: Tab) -> Vec<&Recipe> {
        filter_recipes(&self.filters, self.collection(tab))
    }

    pub fn library_total(&self) -> usize {
        self.library.as_ref().map(|doc| doc.recipes.len()).unwrap_or(0)
    }

    pub fn selected_index(&self, tab: Tab) -> Option<usize> {
        match tab {
            Tab::Inspire => self.inspire_selected,
            Tab::Library => self.library_selected,
        }
    }

    fn selected_slot(&mut self, tab: Tab) -> &mut Option<usize> {
        match tab {
            Tab::Inspire => &mut self.inspire_selected,
            Tab::Library => &mut self.library_selected,
        }
    }

    /// The selected recipe on the active tab, clamped into the filtered list.
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let filtered = self.filtered(self.active_tab);
        let index = self.selected_index(self.active_tab)?;
        filtered.get(index.min(filtered.len().checked_sub(1)?)).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered(self.active_tab).len();
        let tab = self.active_tab;
        select_next_index(len, self.selected_slot(tab));
    }

    pub fn select_previous(&mut self) {
        let len = self.filtered(self.active_tab).len();
        let tab = self.active_tab;
        select_prev_index(len, self.selected_slot(tab));
    }

    /// Switching tabs never resets filters.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Cycle the focused facet's value, or move along the source chips when
    /// the source row is focused.
    pub fn filter_step(&mut self, forward: bool) {
        if self.filter_panel.on_source_row() {
            let len = SOURCES.len();
            self.filter_panel.source_index = if forward {
                (self.filter_panel.source_index + 1) % len
            } else if self.filter_panel.source_index == 0 {
                len - 1
            } else {
                self.filter_panel.source_index - 1
            };
        } else if let Some(facet) = self.filter_panel.facet() {
            self.filters.cycle(facet, forward);
        }
    }

    /// Toggle the focused source chip. No-op on facet rows; facet values are
    /// cycled, not toggled.
    pub fn filter_select(&mut self) {
        if self.filter_panel.on_source_row() {
            let name = SOURCES[self.filter_panel.source_index].name;
            self.filters.toggle_source(name);
        }
    }

    /// Decorative save affordance. There is no write path back to storage.
    pub fn save_selected(&mut self) {
        if self.active_tab != Tab::Inspire {
            return;
        }
        let message = match self.selected_recipe() {
            Some(recipe) => format!(
                "Saving '{}' is not wired up yet; the library is read-only.",
                recipe.display_title()
            ),
            None => "Nothing selected to save.".to_string(),
        };
        self.notify(NotificationLevel::Info, message);
    }

    /// Empty-state sentence for a tab whose filtered list came out empty.
    /// A populated collection means the filters rejected everything; absent
    /// and loaded-empty collections share the same wording.
    pub fn empty_message(&self, tab: Tab) -> &'static str {
        let populated = self
            .collection(tab)
            .map(|doc| !doc.recipes.is_empty())
            .unwrap_or(false);
        match (tab, populated) {
            (_, true) => "No recipes match your filters. Try adjusting them.",
            (Tab::Inspire, false) => "No inspiration yet! Refresh to fetch new ideas.",
            (Tab::Library, false) => "Your library is empty. Save recipes from Inspire Me!",
        }
    }
}

fn select_next_index(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(index) if index + 1 < len => index + 1,
        Some(_) => 0,
        None => 0,
    });
}

fn select_prev_index(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(0) | None => len - 1,
        Some(index) => (index - 1).min(len - 1),
    });
}
