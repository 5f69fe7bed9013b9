//! ==============================================================================
//! error.rs - error taxonomy for site behaviors
//! ==============================================================================
//!
//! nothing here is fatal. every variant ends up as a log line and a skipped
//! behavior, except submit errors which drive the contact form's retry state.
//!
//! ==============================================================================

use thiserror::Error;

/// failure while wiring a behavior to the page
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SiteError {
    /// element not present in the document
    #[error("element not found: {0}")]
    MissingElement(String),

    /// browser api call threw
    #[error("javascript error: {0}")]
    Js(String),

    /// no window/document (non-browser host)
    #[error("no browser window available")]
    NoWindow,
}

/// contact form submission failure
///
/// both variants collapse into the same ui state; the split only exists for logs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },

    #[error("transport failure: {0}")]
    Transport(String),
}

/// page configuration could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// widget registry misuse
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("a map widget is already installed")]
    AlreadyInstalled,
}

/// map widget initialization failure
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MapError {
    #[error("mapping library not loaded")]
    LibraryMissing,

    #[error("map container #{0} not found")]
    ContainerMissing(String),

    #[error("leaflet error: {0}")]
    Leaflet(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
