//! ==============================================================================
//! map.rs - coverage map widget
//! ==============================================================================
//!
//! builds the non-interactive leaflet map from `MapConfig` and installs it in
//! the widget registry. tab groups find it there when they need a resize.
//!
//! ==============================================================================

use shared::map::{star_accent_style, LatLng, MapConfig, MapSurface, Pin};
use shared::{MapError, WidgetRegistry};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{js_message, Page};
use crate::leaflet::{self, to_js};

/// the page's leaflet map plus its home view
pub struct CoverageMap {
    map: leaflet::Map,
    home: JsValue,
    zoom: f64,
}

impl MapSurface for CoverageMap {
    fn refresh(&self) {
        self.map.invalidate_size();
        self.map.set_view(&self.home, self.zoom);
    }
}

pub type MapRegistry = WidgetRegistry<CoverageMap>;

fn leaflet_error(e: JsValue) -> MapError {
    MapError::Leaflet(js_message(&e))
}

fn js_value(value: &serde_json::Value) -> Result<JsValue, MapError> {
    to_js(value).map_err(leaflet_error)
}

fn latlng(position: LatLng) -> Result<JsValue, MapError> {
    js_value(&position.to_json())
}

fn style(value: impl serde::Serialize) -> Result<JsValue, MapError> {
    let json = serde_json::to_value(value).map_err(|e| MapError::Leaflet(e.to_string()))?;
    js_value(&json)
}

/// build the map once; no container or no library means no map
pub fn install(page: &Page, registry: &MapRegistry, config: &MapConfig) -> Result<(), MapError> {
    let container = page
        .document
        .get_element_by_id(&config.container_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MapError::ContainerMissing(config.container_id.clone()))?;
    if !leaflet::is_loaded(&page.window) {
        return Err(MapError::LibraryMissing);
    }
    if registry.is_installed() {
        return Err(shared::RegistryError::AlreadyInstalled.into());
    }

    let home = latlng(config.center)?;
    let map = leaflet::create_map(&container, &js_value(&config.map_options())?).map_err(leaflet_error)?;
    // leaflet now owns the container; register before anything else can fail
    let installed = registry.install(CoverageMap {
        map,
        home,
        zoom: config.zoom as f64,
    })?;
    let map = &installed.map;

    leaflet::tile_layer(&config.tile_url, &js_value(&config.tile_options())?)
        .map_err(leaflet_error)?
        .add_to(map);
    leaflet::zoom_control(&js_value(&config.zoom_control_options())?)
        .map_err(leaflet_error)?
        .add_to(map);

    for pin in &config.pins {
        add_pin(map, pin)?;
    }
    log::info!("coverage map ready, {} pins", config.pins.len());
    Ok(())
}

fn add_pin(map: &leaflet::Map, pin: &Pin) -> Result<(), MapError> {
    let position = latlng(pin.position)?;

    let marker = leaflet::circle_marker(&position, &style(pin.category.style())?).map_err(leaflet_error)?;
    marker.bind_tooltip(&pin.label);
    marker.add_to(map);

    if pin.star {
        leaflet::circle_marker(&position, &style(star_accent_style())?)
            .map_err(leaflet_error)?
            .add_to(map);
    }
    Ok(())
}
