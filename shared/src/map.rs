//! ==============================================================================
//! map.rs - coverage map model and widget registry
//! ==============================================================================
//!
//! purpose:
//!     describes the embedded coverage map (center, zoom, tiles, pins) and owns
//!     the single map handle for the page lifetime.
//!
//! relationships:
//!     - used by: site/src/map.rs (builds the leaflet widget from `MapConfig`)
//!     - used by: site/src/tabs.rs (asks the registry for a deferred refresh)
//!
//! why a registry:
//!     leaflet cannot size a canvas that was hidden (zero dimensions) when the
//!     map was built, so tab switches that reveal the map must trigger a
//!     size recalculation. the registry is the only shared handle; tab groups
//!     get it by `Rc`, never through a global.
//!
//! ==============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::RegistryError;

/// default delay before a revealed map recalculates its size
pub const DEFAULT_REFRESH_DELAY_MS: u32 = 150;

// ==============================================================================
// geometry and pins
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// leaflet's `[lat, lng]` tuple form
    pub fn to_json(self) -> Value {
        json!([self.lat, self.lng])
    }
}

/// visual category of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinCategory {
    Headquarters,
    Branch,
    SalesRep,
    Appointment,
}

/// circle marker paint, serialized as leaflet path options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl PinCategory {
    pub fn style(self) -> MarkerStyle {
        let (radius, fill_color) = match self {
            PinCategory::Headquarters => (12.0, "#f97316"),
            PinCategory::Branch => (9.0, "#3b82f6"),
            PinCategory::SalesRep => (7.0, "#22c55e"),
            PinCategory::Appointment => (5.0, "#a855f7"),
        };
        MarkerStyle {
            radius,
            fill_color,
            color: "#0f172a",
            weight: 1.5,
            fill_opacity: 0.9,
        }
    }
}

/// small accent dot drawn on top of star representatives
pub fn star_accent_style() -> MarkerStyle {
    MarkerStyle {
        radius: 3.0,
        fill_color: "#facc15",
        color: "#facc15",
        weight: 0.0,
        fill_opacity: 1.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub label: String,
    pub position: LatLng,
    pub category: PinCategory,
    /// star representatives get an accent marker
    #[serde(default)]
    pub star: bool,
}

impl Pin {
    fn new(label: &str, lat: f64, lng: f64, category: PinCategory) -> Self {
        Self {
            label: label.to_string(),
            position: LatLng::new(lat, lng),
            category,
            star: false,
        }
    }

    fn starred(mut self) -> Self {
        self.star = true;
        self
    }
}

/// built-in coverage network
pub fn default_pins() -> Vec<Pin> {
    use PinCategory::*;
    vec![
        Pin::new("Dallas Headquarters", 32.7767, -96.7970, Headquarters),
        Pin::new("Atlanta Office", 33.7490, -84.3880, Branch),
        Pin::new("Denver Office", 39.7392, -104.9903, Branch),
        Pin::new("Chicago Office", 41.8781, -87.6298, Branch),
        Pin::new("Phoenix Rep", 33.4484, -112.0740, SalesRep).starred(),
        Pin::new("Nashville Rep", 36.1627, -86.7816, SalesRep),
        Pin::new("Charlotte Rep", 35.2271, -80.8431, SalesRep).starred(),
        Pin::new("Kansas City Rep", 39.0997, -94.5786, SalesRep),
        Pin::new("Salt Lake City Rep", 40.7608, -111.8910, SalesRep),
        Pin::new("Houston", 29.7604, -95.3698, Appointment),
        Pin::new("Oklahoma City", 35.4676, -97.5164, Appointment),
        Pin::new("Orlando", 28.5384, -81.3789, Appointment),
        Pin::new("Minneapolis", 44.9778, -93.2650, Appointment),
        Pin::new("St. Louis", 38.6270, -90.1994, Appointment),
        Pin::new("Seattle", 47.6062, -122.3321, Appointment),
    ]
}

// ==============================================================================
// configuration
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// id of the container element
    pub container_id: String,
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: String,
    pub tile_subdomains: String,
    pub attribution: String,
    pub max_zoom: u8,
    pub zoom_control_position: String,
    pub refresh_delay_ms: u32,
    pub pins: Vec<Pin>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "coverage-map".to_string(),
            center: LatLng::new(38.5, -96.0),
            zoom: 4,
            tile_url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string(),
            tile_subdomains: "abcd".to_string(),
            attribution: "&copy; OpenStreetMap contributors &copy; CARTO".to_string(),
            max_zoom: 19,
            zoom_control_position: "topright".to_string(),
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            pins: default_pins(),
        }
    }
}

impl MapConfig {
    /// `L.map` options: fixed view, every user interaction disabled
    pub fn map_options(&self) -> Value {
        json!({
            "center": self.center.to_json(),
            "zoom": self.zoom,
            "zoomControl": false,
            "dragging": false,
            "scrollWheelZoom": false,
            "doubleClickZoom": false,
            "touchZoom": false,
            "boxZoom": false,
            "keyboard": false,
            "attributionControl": true,
        })
    }

    pub fn tile_options(&self) -> Value {
        json!({
            "attribution": self.attribution,
            "subdomains": self.tile_subdomains,
            "maxZoom": self.max_zoom,
        })
    }

    pub fn zoom_control_options(&self) -> Value {
        json!({ "position": self.zoom_control_position })
    }

    pub fn pins_in(&self, category: PinCategory) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(move |p| p.category == category)
    }
}

// ==============================================================================
// widget registry
// ==============================================================================

/// a map that can recompute its size after being revealed
pub trait MapSurface {
    /// recompute canvas size and return to the home view
    fn refresh(&self);
}

/// deferred task runner (`setTimeout` in the browser)
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// owner of the page's single map handle
pub struct WidgetRegistry<M> {
    map: RefCell<Option<Rc<M>>>,
    refresh_delay_ms: u32,
}

impl<M: MapSurface + 'static> WidgetRegistry<M> {
    pub fn new(refresh_delay_ms: u32) -> Self {
        Self {
            map: RefCell::new(None),
            refresh_delay_ms,
        }
    }

    /// install the map; a second install is rejected
    pub fn install(&self, map: M) -> Result<Rc<M>, RegistryError> {
        let mut slot = self.map.borrow_mut();
        if slot.is_some() {
            return Err(RegistryError::AlreadyInstalled);
        }
        let map = Rc::new(map);
        *slot = Some(map.clone());
        Ok(map)
    }

    pub fn map(&self) -> Option<Rc<M>> {
        self.map.borrow().clone()
    }

    pub fn is_installed(&self) -> bool {
        self.map.borrow().is_some()
    }

    /// schedule one refresh after the configured delay; false when no map
    pub fn schedule_refresh<S: Scheduler + ?Sized>(&self, scheduler: &S) -> bool {
        let Some(map) = self.map() else {
            return false;
        };
        scheduler.defer(self.refresh_delay_ms, Box::new(move || map.refresh()));
        true
    }
}
