//! ==============================================================================
//! lib.rs - marketing site behaviors
//! ==============================================================================
//!
//! purpose:
//!     wasm behavior layer for the server-rendered marketing pages: navbar
//!     scroll state, mobile menu, reveal and counter animations, smooth anchor
//!     scrolling, phone formatting, the contact form, tab groups and the
//!     coverage map.
//!
//! architecture:
//!     - compiled to wasm, loaded by the page as an es module
//!     - one initializer wires every behavior against existing markup
//!     - rules live in the `shared` crate; this crate only talks to the dom
//!     - `Site` owns every listener, observer and the map registry for the
//!       lifetime of the page
//!
//! ==============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use shared::{MapError, SiteConfig, SiteError, WidgetRegistry};
use wasm_bindgen::prelude::*;

mod anchors;
mod api;
mod config;
mod counter;
mod dom;
mod form;
mod leaflet;
mod map;
mod navbar;
mod phone;
mod reveal;
mod tabs;
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

use dom::{Listeners, Observers, Page, Timers};
use map::MapRegistry;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // level is narrowed once the page config is read
    let _ = console_log::init_with_level(log::Level::Trace);

    let page = match Page::current() {
        Ok(page) => page,
        Err(e) => {
            log::error!("site behaviors not started: {}", e);
            return;
        }
    };
    when_ready(page, boot);
}

/// run `f` once the document has parsed
fn when_ready(page: Page, f: fn(Page)) {
    if page.document.ready_state() != "loading" {
        f(page);
        return;
    }
    let document = page.document.clone();
    EventListener::once(&document, "DOMContentLoaded", move |_| f(page)).forget();
}

fn boot(page: Page) {
    let site = Site::boot(page);
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}

/// whether the coverage map was built on this page
#[wasm_bindgen(js_name = mapReady)]
pub fn map_ready() -> bool {
    SITE.with(|slot| slot.borrow().as_ref().map(|s| s.registry.is_installed()).unwrap_or(false))
}

// ==============================================================================
// site
// ==============================================================================

/// everything the page keeps alive
struct Site {
    page: Page,
    config: SiteConfig,
    listeners: Listeners,
    observers: Observers,
    registry: Rc<MapRegistry>,
    timers: Timers,
}

impl Site {
    fn boot(page: Page) -> Self {
        let config = config::load(&page.document);
        log::set_max_level(config.level().to_level_filter());

        let mut site = Site {
            timers: Timers,
            registry: Rc::new(WidgetRegistry::new(config.map.refresh_delay_ms)),
            listeners: Listeners::default(),
            observers: Observers::default(),
            config,
            page,
        };
        site.wire();
        log::info!(
            "site behaviors ready: {} listeners, {} observers",
            site.listeners.len(),
            site.observers.len()
        );
        site
    }

    fn wire(&mut self) {
        let Site { page, config, listeners, observers, registry, timers } = self;

        report("navbar", navbar::install_scroll_state(page, listeners, &config.navbar));
        report("mobile menu", navbar::install_mobile_menu(page, listeners, &config.menu));

        reveal::apply_stagger(page, &config.reveal);
        report("reveal", reveal::install(page, observers, &config.reveal));
        report("counters", counter::install(page, observers, &config.counter));

        report("anchors", anchors::install(page, listeners, &config.anchors, &config.navbar.id));
        report("phone", phone::install(page, listeners, &config.phone));
        report("contact form", form::install(page, listeners, *timers, &config.form));

        match map::install(page, registry, &config.map) {
            Ok(()) => {}
            Err(e @ (MapError::ContainerMissing(_) | MapError::LibraryMissing)) => {
                log::debug!("skipping coverage map: {}", e)
            }
            Err(e) => log::warn!("coverage map failed: {}", e),
        }

        for spec in &config.tab_groups {
            let result = tabs::install(page, listeners, spec, registry.clone(), *timers);
            report(&format!("tabs {}", spec.name), result);
        }
    }
}

/// absent markup is normal on pages without a section; anything else is not
fn report(name: &str, result: Result<(), SiteError>) {
    match result {
        Ok(()) => log::debug!("wired {}", name),
        Err(e @ SiteError::MissingElement(_)) => log::debug!("skipping {}: {}", name, e),
        Err(e) => log::warn!("{} not wired: {}", name, e),
    }
}
