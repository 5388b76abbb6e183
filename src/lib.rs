//! Client-side enhancements for the Guida Viaggi static travel guide.
//!
//! Compiled to WebAssembly and loaded by every page of the site. On load it:
//! - applies the persisted (or system-derived) light/dark theme
//! - stamps the current year into `[data-year]` placeholders
//! - live-filters the location cards on the index page
//! - hides optional sections that have no real content
//! - builds a table of contents from the sections left visible
//! - wires the scroll-to-top control
//!
//! The decision logic lives in pure modules that compile on any target and
//! test without a browser; everything touching the live document sits under
//! [`dom`], which only exists on wasm32.

pub mod prefs;
pub mod search;
pub mod sections;
pub mod theme;
pub mod toc;

#[cfg(target_arch = "wasm32")]
pub mod dom;
