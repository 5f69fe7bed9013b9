//! ==============================================================================
//! leaflet.rs - bindings for the page-loaded Leaflet library (`window.L`)
//! ==============================================================================
//!
//! only the calls the coverage map needs. constructors are `catch` so a
//! broken library surfaces as `Err` instead of a trap.
//!
//! ==============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(container: &HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(latlng: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &Map);

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &Layer, content: &str);

    pub type Control;

    #[wasm_bindgen(catch, js_namespace = ["L", "control"], js_name = zoom)]
    pub fn zoom_control(options: &JsValue) -> Result<Control, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &Map);
}

/// whether the page loaded leaflet
pub fn is_loaded(window: &Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("L"))
        .map(|l| l.is_object())
        .unwrap_or(false)
}

/// convert a serde_json value into a plain js object
pub fn to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}
