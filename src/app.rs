use crate::catalog::SkipOption;
use crate::fetch::messages::CatalogMessage;
use crate::filter::{FilterState, PriceBounds, apply_filters, price_bounds};
use crate::selection::Selection;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Catalog,
    Filters,
}

/// Row of the filter panel under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    MinPrice,
    MaxPrice,
    RoadOnly,
    HeavyWaste,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            Self::MinPrice => Self::MaxPrice,
            Self::MaxPrice => Self::RoadOnly,
            Self::RoadOnly => Self::HeavyWaste,
            Self::HeavyWaste => Self::MinPrice,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::MinPrice => Self::HeavyWaste,
            Self::MaxPrice => Self::MinPrice,
            Self::RoadOnly => Self::MaxPrice,
            Self::HeavyWaste => Self::RoadOnly,
        }
    }

    pub const ALL: [FilterField; 4] = [
        Self::MinPrice,
        Self::MaxPrice,
        Self::RoadOnly,
        Self::HeavyWaste,
    ];
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub focus: Focus,

    // Catalog as fetched, never mutated after arrival
    pub loading: bool,
    pub skips: Vec<SkipOption>,

    pub filters: FilterState,
    pub bounds: PriceBounds,
    pub filter_field: FilterField,
    pub price_step: f64,

    // Derived from skips + filters
    pub visible: Vec<SkipOption>,
    pub highlighted: usize,

    pub selection: Selection,

    pub status_msg: String,
}

impl App {
    pub fn new(price_step: f64) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            focus: Focus::Catalog,

            loading: true,
            skips: Vec::new(),

            filters: FilterState::default(),
            bounds: price_bounds(&[]),
            filter_field: FilterField::MinPrice,
            price_step,

            visible: Vec::new(),
            highlighted: 0,

            selection: Selection::default(),

            status_msg: "Loading...".to_string(),
        }
    }

    /// Handle one message from the fetch task.
    pub fn handle_message(&mut self, msg: CatalogMessage) {
        match msg {
            CatalogMessage::Started { url } => {
                tracing::debug!(%url, "catalog request issued");
            }
            CatalogMessage::Loaded(options) => self.set_catalog(options),
        }
    }

    /// Apply everything the fetch task has sent since the last tick.
    pub fn drain_messages(&mut self, rx: &Receiver<CatalogMessage>) {
        loop {
            match rx.try_recv() {
                Ok(msg) => self.handle_message(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Task ended without reporting (panicked); stop waiting
                    if self.loading {
                        tracing::error!("catalog task ended without a result");
                        self.set_catalog(Vec::new());
                    }
                    break;
                }
            }
        }
    }

    pub fn set_catalog(&mut self, options: Vec<SkipOption>) {
        self.skips = options;
        self.loading = false;
        self.bounds = price_bounds(&self.skips);
        self.recompute();
        self.status_msg = format!("{} skips available", self.skips.len());
    }

    /// Re-run the filter over the full catalog.
    pub fn recompute(&mut self) {
        self.visible = apply_filters(&self.skips, &self.filters);
        if self.highlighted >= self.visible.len() {
            self.highlighted = self.visible.len().saturating_sub(1);
        }
        tracing::debug!(
            shown = self.visible.len(),
            total = self.skips.len(),
            filters = ?self.filters,
            "filters applied"
        );
    }

    pub fn highlighted_option(&self) -> Option<&SkipOption> {
        self.visible.get(self.highlighted)
    }

    pub fn list_next(&mut self) {
        if self.highlighted + 1 < self.visible.len() {
            self.highlighted += 1;
        }
    }

    pub fn list_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn list_first(&mut self) {
        self.highlighted = 0;
    }

    pub fn list_last(&mut self) {
        self.highlighted = self.visible.len().saturating_sub(1);
    }

    /// Select the card under the cursor.
    pub fn select_highlighted(&mut self) {
        if let Some(option) = self.highlighted_option().cloned() {
            self.status_msg = format!("{} Yard Skip selected", option.size);
            self.selection.select(option);
        }
    }

    /// The checkout flow stops here; nothing happens beyond a status note.
    pub fn press_continue(&mut self) {
        if let Some(option) = self.selection.current() {
            tracing::info!(id = %option.id, "continue pressed");
            self.status_msg = "Continue is not available yet".to_string();
        }
    }

    pub fn set_min_price(&mut self, value: f64) {
        self.filters.min_price = self.bounds.clamp(value);
        self.recompute();
    }

    pub fn set_max_price(&mut self, value: f64) {
        self.filters.max_price = self.bounds.clamp(value);
        self.recompute();
    }

    pub fn toggle_road_only(&mut self) {
        self.filters.show_road_only = !self.filters.show_road_only;
        self.recompute();
    }

    pub fn toggle_heavy_waste(&mut self) {
        self.filters.show_heavy_waste = !self.filters.show_heavy_waste;
        self.recompute();
    }

    /// Move the focused filter row by `steps` slider steps, or flip it if it
    /// is a checkbox.
    pub fn adjust_filter(&mut self, steps: f64) {
        let delta = steps * self.price_step;
        match self.filter_field {
            FilterField::MinPrice => self.set_min_price(self.filters.min_price + delta),
            FilterField::MaxPrice => self.set_max_price(self.filters.max_price + delta),
            FilterField::RoadOnly => self.toggle_road_only(),
            FilterField::HeavyWaste => self.toggle_heavy_waste(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Catalog => Focus::Filters,
            Focus::Filters => Focus::Catalog,
        };
    }
}
