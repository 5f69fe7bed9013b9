//! ==============================================================================
//! lib.rs - shared logic for the site behavior layer
//! ==============================================================================
//!
//! purpose:
//!     everything the browser crate decides, minus the dom calls. keeping the
//!     rules here means they build and test on any target, not only wasm32.
//!
//! relationships:
//!     - used by: site (dom wiring, leaflet bindings, fetch)
//!
//! modules:
//!     - config:  page-embedded json config with defaults
//!     - scroll:  navbar threshold, anchor resolution and offsets
//!     - reveal:  stagger delays, one-shot latch
//!     - counter: ease-out counter animation
//!     - phone:   phone number formatter
//!     - form:    submit-button state machine
//!     - tabs:    declarative tab groups
//!     - map:     coverage map model, widget registry
//!     - error:   error taxonomy
//!
//! ==============================================================================

pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod map;
pub mod phone;
pub mod reveal;
pub mod scroll;
pub mod tabs;

pub use config::SiteConfig;
pub use error::{ConfigError, MapError, RegistryError, SiteError, SubmitError};
pub use map::{MapSurface, Scheduler, WidgetRegistry};
