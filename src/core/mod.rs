//! # Core Application Logic
//!
//! This module contains pawlist's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (navigator)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │ subscribe()
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The `Dog` record and the fixed seed list
//! - [`observable`]: Publish/subscribe cell that pushes state changes
//! - [`state`]: The `App` struct and the list/detail `Navigator`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered configuration (file, env, CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod observable;
pub mod state;
