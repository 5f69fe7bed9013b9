//! Statistic counters, animated once when scrolled into view

use std::cell::RefCell;
use std::rc::Rc;

use shared::config::CounterConfig;
use shared::counter::{parse_count, CounterAnimation};
use shared::SiteError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::dom::{js_message, Observers, Page};

type FrameCallback = Closure<dyn FnMut(f64)>;

pub fn install(page: &Page, observers: &mut Observers, config: &CounterConfig) -> Result<(), SiteError> {
    let targets = page.query_all(&config.selector)?;
    if targets.is_empty() {
        return Err(SiteError::MissingElement(config.selector.clone()));
    }

    let attr = config.count_attr.clone();
    let duration_ms = config.duration_ms;
    let page = page.clone();
    observers.observe_once(targets, None, config.threshold, move |el| {
        let raw = el.get_attribute(&attr).unwrap_or_default();
        let Some(target) = parse_count(&raw) else {
            log::warn!("counter skipped, {}={:?} is not a number", attr, raw);
            return;
        };
        let animation = CounterAnimation::new(target, duration_ms, page.now());
        animate(&page.window, el.clone(), animation);
    })
}

/// drive the animation from requestAnimationFrame until it reports done
fn animate(window: &Window, el: Element, animation: CounterAnimation) {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let handle = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(FrameCallback::new(move |now: f64| {
        let frame = animation.frame(now);
        el.set_text_content(Some(&frame.value.to_string()));

        if frame.done {
            // drops this closure once it returns
            handle.borrow_mut().take();
            return;
        }
        if let Some(callback) = handle.borrow().as_ref() {
            request_frame(&win, callback);
        }
    }));

    let first = slot.borrow();
    if let Some(callback) = first.as_ref() {
        request_frame(window, callback);
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) {
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {}", js_message(&e));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::testing::{sleep, wait_until, Fixture};
    use wasm_bindgen_test::wasm_bindgen_test;

    const MARKUP: &str = r#"
        <div id="count-fx">
            <span id="count-fx-clients" class="stat-number" data-count="250">0</span>
            <span id="count-fx-bad" class="stat-number" data-count="n/a">-</span>
        </div>
    "#;

    fn text(fixture: &Fixture, id: &str) -> String {
        fixture.get(id).text_content().unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn test_counts_up_to_target_once() {
        let fixture = Fixture::mount(MARKUP);
        let mut observers = Observers::default();
        let config = CounterConfig {
            selector: "#count-fx .stat-number[data-count]".to_string(),
            duration_ms: 80.0,
            ..CounterConfig::default()
        };
        install(fixture.page(), &mut observers, &config).unwrap();

        assert!(wait_until(3000, || text(&fixture, "count-fx-clients") == "250").await);
        assert_eq!(text(&fixture, "count-fx-bad"), "-");

        // a later trip through the viewport does not restart it
        let el = fixture.get("count-fx-clients");
        el.set_text_content(Some("7"));
        crate::dom::set_style(&el, "display", "none");
        sleep(50).await;
        crate::dom::set_style(&el, "display", "");
        sleep(200).await;
        assert_eq!(text(&fixture, "count-fx-clients"), "7");
    }

    #[wasm_bindgen_test]
    async fn test_animation_stops_on_the_target_value() {
        let fixture = Fixture::mount(r#"<span id="count-fx-direct">0</span>"#);
        let page = fixture.page();
        let el = fixture.get("count-fx-direct");

        animate(&page.window, el.clone(), CounterAnimation::new(42, 60.0, page.now()));
        assert!(wait_until(3000, || text(&fixture, "count-fx-direct") == "42").await);
        sleep(100).await;
        assert_eq!(text(&fixture, "count-fx-direct"), "42");
    }
}
