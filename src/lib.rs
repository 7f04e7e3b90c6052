//! Chrono Cookbook Library
//!
//! A browsable catalog of chrono date/time examples, each paired with the
//! output it produces when run. This library provides functionality to:
//! - Hold the example catalog: groups of source listings with runnable code
//! - Run each example once and capture its output or failure
//! - Detect whether the runtime has a usable clock before running anything
//! - Render groups as side-by-side source/result tables for the terminal
//!
//! # Example
//!
//! ```
//! use chrono_cookbook::capability::TimeCapability;
//! use chrono_cookbook::render::{render_catalog, RenderOptions};
//! use chrono_cookbook::snippets;
//!
//! let catalog = snippets::catalog();
//! let capability = TimeCapability::acquire();
//!
//! let page = render_catalog(&catalog, capability, &RenderOptions::default());
//! assert!(page.contains("Comparing dates"));
//! ```

pub mod capability;
pub mod catalog;
pub mod error;
pub mod render;
pub mod runner;
pub mod snippets;

// Re-export commonly used items
pub use error::{Error, Result};
