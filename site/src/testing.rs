//! Browser test fixtures: scratch markup, sleeps and a hand-cranked scheduler

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::Scheduler;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::Page;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// markup mounted at the top of `<body>`, removed on drop
pub struct Fixture {
    root: Element,
    page: Page,
}

impl Fixture {
    pub fn mount(html: &str) -> Self {
        let page = Page::current().unwrap();
        let root = page.document.create_element("div").unwrap();
        root.set_inner_html(html);
        let body = page.body().unwrap();
        body.insert_before(&root, body.first_child().as_ref()).unwrap();
        Self { root, page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn get(&self, id: &str) -> Element {
        self.page.by_id(id).unwrap()
    }

    pub fn click(&self, id: &str) {
        click(&self.get(id));
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// poll `done` every 10ms; false when `timeout_ms` runs out first
pub async fn wait_until(timeout_ms: u32, done: impl Fn() -> bool) -> bool {
    let mut waited = 0;
    while !done() {
        if waited >= timeout_ms {
            return false;
        }
        sleep(10).await;
        waited += 10;
    }
    true
}

/// records deferred tasks until the test runs them
#[derive(Clone, Default)]
pub struct ManualTimers {
    pending: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
}

impl ManualTimers {
    pub fn delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_all(&self) {
        let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualTimers {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}
