//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod control_panel;
mod country_selector;
mod error_display;
mod indicator_selector;
mod loading_spinner;
mod no_data_notice;
mod year_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use control_panel::ControlPanel;
pub use country_selector::CountrySelector;
pub use wwd_data::selection::Slot;
pub use error_display::ErrorDisplay;
pub use indicator_selector::IndicatorSelector;
pub use loading_spinner::LoadingSpinner;
pub use no_data_notice::NoDataNotice;
pub use year_slider::YearSlider;
