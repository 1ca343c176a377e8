//! Shared Dioxus components and browser glue for the survey apps.
//!
//! This crate provides:
//! - `js_bridge`: Chart.js rendering, alerts, timers and navigation via `js_sys::eval()` and `web_sys`
//! - `charts`: Chart.js configuration builders
//! - `session`: the `Session` read from browser storage
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (inputs, cards, containers, etc.)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod session;
pub mod state;
