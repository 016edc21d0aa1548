//! # Core Application Logic
//!
//! The catalog and the navigator. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (static)     │
//!                    │  • State (nav stack)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  --list    │
//!             │  Adapter   │          │  printer   │
//!             │ (ratatui)  │          │ (main.rs)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `CarType` records and lookups
//! - [`image`]: bundled image references
//! - [`route`]: screens and detail-view reconstruction
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered settings

pub mod action;
pub mod catalog;
pub mod config;
pub mod image;
pub mod route;
pub mod state;
