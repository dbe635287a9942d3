//! # Core Menu Model
//!
//! This module contains the menu engine itself. It knows nothing about the
//! real terminal; everything flows through the [`crate::console::Console`]
//! trait.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │            CORE              │
//!                 │  (this module)               │
//!                 │                              │
//!                 │  • Menu   (static container) │
//!                 │  • List   (model-derived)    │
//!                 │  • Item   (one entry)        │
//!                 │  • Flow   (traversal result) │
//!                 └──────────────┬───────────────┘
//!                                │
//!                ┌───────────────┼───────────────┐
//!                ▼               ▼               ▼
//!         ┌────────────┐  ┌────────────┐  ┌────────────┐
//!         │  console   │  │   render   │  │   tests    │
//!         │ (std I/O)  │  │ strategies │  │ (scripted) │
//!         └────────────┘  └────────────┘  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: the `Navigable` trait and the static `Menu` container
//! - [`list`]: the dynamic `List<T>` engine and its `Binding<T>` modes
//! - [`item`]: one renderable, actionable entry
//! - [`flow`]: depth-first traversal control (`Flow`, `Outcome`)
//! - [`error`]: the `MenuError` taxonomy
//! - [`config`]: appearance settings (TOML file + env overrides)

pub mod config;
pub mod error;
pub mod flow;
pub mod item;
pub mod list;
pub mod menu;

pub use error::MenuError;
pub use flow::{Flow, Outcome};
pub use item::{Item, ItemAction, Selection};
pub use list::{Binding, List};
pub use menu::{Menu, Navigable};
