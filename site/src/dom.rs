//! ==============================================================================
//! dom.rs - thin layer over web-sys for the behavior modules
//! ==============================================================================
//!
//! purpose:
//!     element lookup, class/style helpers, and owners for everything the page
//!     keeps alive: event listeners, intersection observers, timers.
//!
//! lifetimes:
//!     `Listeners` and `Observers` hold their callbacks until dropped, and
//!     detach them on drop. the `Site` that owns them lives for the page.
//!     deferred tasks go through gloo timers and are never cancelled.
//!
//! ==============================================================================

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use shared::reveal::OneShot;
use shared::{Scheduler, SiteError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, ScrollBehavior,
    ScrollToOptions, Window,
};

// ==============================================================================
// page access
// ==============================================================================

/// window + document of the running page
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoWindow)?;
        Ok(Self { window, document })
    }

    pub fn by_id(&self, id: &str) -> Result<Element, SiteError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))
    }

    /// element by id, cast to a concrete html type
    pub fn typed_by_id<T: JsCast>(&self, id: &str) -> Result<T, SiteError> {
        self.by_id(id)?
            .dyn_into::<T>()
            .map_err(|_| SiteError::MissingElement(format!("#{} (unexpected element type)", id)))
    }

    pub fn query(&self, selector: &str) -> Result<Element, SiteError> {
        self.document
            .query_selector(selector)
            .map_err(js_error)?
            .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
    }

    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, SiteError> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .map_err(js_error)
    }

    pub fn body(&self) -> Result<HtmlElement, SiteError> {
        self.document
            .body()
            .ok_or_else(|| SiteError::MissingElement("body".to_string()))
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    pub fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// descendants of `parent` matching `selector`
pub fn query_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    parent
        .query_selector_all(selector)
        .map(elements)
        .map_err(js_error)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// best-effort message out of a thrown js value
pub fn js_error(value: JsValue) -> SiteError {
    SiteError::Js(js_message(&value))
}

pub fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

// ==============================================================================
// class and style helpers
// ==============================================================================

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// inline style property; an empty value clears it
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }
}

// ==============================================================================
// event listeners
// ==============================================================================

/// owns every registered event handler; dropping it detaches them all
#[derive(Default)]
pub struct Listeners {
    held: Vec<EventListener>,
}

impl Listeners {
    /// passive listener, for events whose default action always proceeds
    pub fn listen<F>(&mut self, target: &EventTarget, event: &str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.held.push(EventListener::new(target, event.to_string(), handler));
    }

    /// listener allowed to call `prevent_default`
    pub fn intercept<F>(&mut self, target: &EventTarget, event: &str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.held.push(EventListener::new_with_options(
            target,
            event.to_string(),
            EventListenerOptions::enable_prevent_default(),
            handler,
        ));
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }
}

// ==============================================================================
// intersection observers
// ==============================================================================

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// owns intersection observers and their callbacks
#[derive(Default)]
pub struct Observers {
    held: Vec<(IntersectionObserver, ObserverCallback)>,
}

impl Observers {
    /// call `on_enter` the first time each target intersects, then unobserve it
    pub fn observe_once<F>(
        &mut self,
        targets: Vec<Element>,
        root_margin: Option<&str>,
        threshold: f64,
        mut on_enter: F,
    ) -> Result<(), SiteError>
    where
        F: FnMut(&Element) + 'static,
    {
        let watched = targets.clone();
        let mut latch: OneShot<usize> = OneShot::new();

        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = watched.iter().position(|w| *w == target) else {
                    continue;
                };
                // a batch may list the same element more than once
                if !latch.fire(index) {
                    continue;
                }
                observer.unobserve(&target);
                on_enter(&target);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(js_error)?;
        for target in &targets {
            observer.observe(target);
        }
        self.held.push((observer, callback));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }
}

impl Drop for Observers {
    fn drop(&mut self) {
        for (observer, _) in &self.held {
            observer.disconnect();
        }
    }
}

// ==============================================================================
// timers
// ==============================================================================

/// `setTimeout`-backed scheduler; timers are one-shot and never cancelled
#[derive(Debug, Clone, Copy, Default)]
pub struct Timers;

impl Scheduler for Timers {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
