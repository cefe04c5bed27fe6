//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The four selection signals stand in for the year slider, indicator selector
//! and the two country selectors; reading them through [`AppState::selection`]
//! subscribes the caller to every control at once.

use dioxus::prelude::*;
use wwd_data::{DashboardConfig, DataContext, Selection};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded datasets (None until both fetches succeed)
    pub data: Signal<Option<DataContext>>,
    /// Dashboard configuration
    pub config: Signal<DashboardConfig>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Slider bounds `(min, max)`
    pub year_bounds: Signal<(i32, i32)>,
    /// Selected year
    pub year: Signal<i32>,
    /// Selected indicator
    pub indicator: Signal<String>,
    /// First compared country ("" when unset)
    pub country1: Signal<String>,
    /// Second compared country ("" when unset)
    pub country2: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let config = DashboardConfig::default();
        let year = config.default_year;
        Self {
            data: Signal::new(None),
            config: Signal::new(config),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            year_bounds: Signal::new((year, year)),
            year: Signal::new(year),
            indicator: Signal::new(String::new()),
            country1: Signal::new(String::new()),
            country2: Signal::new(String::new()),
        }
    }

    /// Read the current selection from the control signals.
    pub fn selection(&self) -> Selection {
        Selection {
            year: (self.year)(),
            indicator: (self.indicator)(),
            country1: (self.country1)(),
            country2: (self.country2)(),
        }
    }

    /// Current selection without subscribing the caller (for event handlers
    /// running outside a reactive scope).
    pub fn peek_selection(&self) -> Selection {
        Selection {
            year: *self.year.peek(),
            indicator: self.indicator.peek().clone(),
            country1: self.country1.peek().clone(),
            country2: self.country2.peek().clone(),
        }
    }

    /// Write a selection back into the control signals. Only signals whose
    /// value changed are written, so unchanged controls do not re-notify.
    pub fn apply_selection(&mut self, selection: Selection) {
        if *self.year.peek() != selection.year {
            self.year.set(selection.year);
        }
        if *self.indicator.peek() != selection.indicator {
            self.indicator.set(selection.indicator);
        }
        if *self.country1.peek() != selection.country1 {
            self.country1.set(selection.country1);
        }
        if *self.country2.peek() != selection.country2 {
            self.country2.set(selection.country2);
        }
    }

    /// Install freshly loaded data and its starting selection.
    pub fn install(&mut self, ctx: DataContext) {
        let config = self.config.peek().clone();
        let initial = Selection::initial(&ctx, &config);
        let bounds = ctx
            .year_range()
            .unwrap_or((initial.year, initial.year));
        self.year_bounds.set(bounds);
        self.apply_selection(initial);
        self.data.set(Some(ctx));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Record an initialization failure. No partial UI is shown afterwards.
    pub fn fail(&mut self, message: String) {
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
