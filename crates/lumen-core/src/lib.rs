//! # Snapshots, Renders, and Mounts
//!
//! Lumen drives small interactive accessibility demos. Each demo panel has a
//! row of form controls and a preview area, and every interaction runs the
//! same pipeline:
//!
//! - read every control into a [`ControlState`] snapshot,
//! - hand the snapshot to the panel's widget, which returns [`Rendered`]
//!   markup plus an optional mount callback,
//! - commit the markup to the preview, then run the mount callback against a
//!   [`Host`] for anything markup can't express (focus, audio, inline styles).
//!
//! ## Rendering
//!
//! ```rust
//! use lumen_core::*;
//!
//! let ratio = truncate_to(contrast_ratio("#000000", "#ffffff"), 2);
//! let rendered = Rendered::markup(format!("<p>{ratio}:1</p>"));
//! assert_eq!(rendered.markup, "<p>21:1</p>");
//! assert!(!rendered.has_mount());
//! ```
//!
//! ## Deferred work
//!
//! Some side effects have to wait a beat, e.g. until the button that caused
//! them has released focus. [`Host::defer`] schedules a [`Task`] and returns
//! a [`Deferred`] handle. Handles created while a [`Scope`] is running are
//! cancelled when that scope is disposed, which is how a panel drops stale
//! work when it re-renders.

pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod markup;
pub mod render_api;
pub mod scope;
pub mod state;

pub use animation::*;
pub use color::*;
pub use effects::*;
pub use error::*;
pub use markup::*;
pub use render_api::*;
pub use scope::*;
pub use state::*;
