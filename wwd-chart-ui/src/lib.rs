//! Shared Dioxus components and D3.js bridge for the world water dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js map and chart functions, data fetching,
//!   and the map click callback
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (controls, containers, notices)

pub mod js_bridge;
pub mod state;
pub mod components;
