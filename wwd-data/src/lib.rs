//! Data processing for the world water dashboard.
//!
//! Every view is a pure function of the loaded [`store::DataContext`], the
//! current [`selection::Selection`] and the [`config::DashboardConfig`].
//! The resulting view models derive `Serialize` so they can be handed to the
//! D3.js renderers as JSON.
//!
//! # Views
//!
//! - [`views::choropleth`] - per-country fill colors and the gradient legend
//! - [`views::comparison`] - all indicators of two countries in one year
//! - [`views::live_line`] - one indicator over time for two countries

pub mod config;
pub mod models;
pub mod scale;
pub mod selection;
pub mod store;
pub mod views;

pub use config::DashboardConfig;
pub use selection::Selection;
pub use store::DataContext;
