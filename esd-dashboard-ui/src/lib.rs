//! Shared Dioxus components and browser bridge for the sensor dashboard.
//!
//! This crate provides:
//! - `js_bridge`: the one-shot `fetch` of the readings resource and small
//!   `js_sys::eval()` helpers
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the table, its controls and the add-sensor dialog
//! - `theme`: shared inline style fragments

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
