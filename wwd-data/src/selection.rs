//! The user's current selection and the map click assignment rule.

use serde::{Deserialize, Serialize};

use crate::config::DashboardConfig;
use crate::store::DataContext;

/// Year, indicator and the two compared countries.
///
/// An empty country string means "nothing selected" in that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub year: i32,
    pub indicator: String,
    pub country1: String,
    pub country2: String,
}

/// One of the two country selectors; also where a map click writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    /// DOM id of the selector bound to this slot.
    pub fn dom_id(self) -> &'static str {
        match self {
            Slot::First => "country-select-1",
            Slot::Second => "country-select-2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::First => "Country 1: ",
            Slot::Second => "Country 2: ",
        }
    }
}

impl Selection {
    /// Starting selection once the data is loaded: latest year, first
    /// indicator, no countries.
    pub fn initial(ctx: &DataContext, config: &DashboardConfig) -> Self {
        Self {
            year: ctx
                .year_range()
                .map(|(_, max)| max)
                .unwrap_or(config.default_year),
            indicator: ctx.indicators().first().cloned().unwrap_or_default(),
            country1: String::new(),
            country2: String::new(),
        }
    }

    /// Slot a clicked country goes into: the first selector when it is empty
    /// or merely duplicates the second, otherwise the second.
    pub fn slot_for_click(&self) -> Slot {
        if self.country1.is_empty() || self.country1 == self.country2 {
            Slot::First
        } else {
            Slot::Second
        }
    }

    /// Apply a map click, returning the slot that was written.
    pub fn assign_clicked(&mut self, country: &str) -> Slot {
        let slot = self.slot_for_click();
        match slot {
            Slot::First => self.country1 = country.to_string(),
            Slot::Second => self.country2 = country.to_string(),
        }
        slot
    }

    pub fn same_country(&self) -> bool {
        self.country1 == self.country2
    }
}
