//! Tab groups: demo panels, info panels, map sub-views

use std::cell::RefCell;
use std::rc::Rc;

use shared::tabs::{ActiveTarget, TabGroup, TabGroupSpec, ACTIVE_CLASS};
use shared::{MapSurface, Scheduler, SiteError, WidgetRegistry};
use web_sys::Element;

use crate::dom::{self, Listeners, Page};

/// nav item or panel element
struct Tab(Element);

impl ActiveTarget for Tab {
    fn target_id(&self) -> String {
        self.0.id()
    }

    fn set_active(&self, active: bool) {
        dom::set_class(&self.0, ACTIVE_CLASS, active);
    }
}

pub fn install<M, S>(
    page: &Page,
    listeners: &mut Listeners,
    spec: &TabGroupSpec,
    registry: Rc<WidgetRegistry<M>>,
    timers: S,
) -> Result<(), SiteError>
where
    M: MapSurface + 'static,
    S: Scheduler + Clone + 'static,
{
    let container = page.query(&spec.container)?;
    let items = dom::query_all_in(&container, &spec.nav_item)?;
    if items.is_empty() {
        return Err(SiteError::MissingElement(format!("{} {}", spec.container, spec.nav_item)));
    }

    let keys = items.iter().map(|item| item.get_attribute(&spec.key_attr)).collect();
    let group = Rc::new(RefCell::new(TabGroup::new(spec.clone(), keys)));
    let items: Rc<Vec<Tab>> = Rc::new(items.into_iter().map(Tab).collect());

    for (index, item) in items.iter().enumerate() {
        let (page, items, group, registry, timers) =
            (page.clone(), items.clone(), group.clone(), registry.clone(), timers.clone());

        listeners.listen(&item.0, "click", move |_| {
            let Some(activation) = group.borrow_mut().activate(index) else {
                return;
            };

            let group = group.borrow();
            let spec = group.spec();
            // panels are looked up per click, markup may change after wiring
            let panels: Vec<Tab> = match page.query_all(&spec.panel) {
                Ok(panels) => panels.into_iter().map(Tab).collect(),
                Err(e) => {
                    log::warn!("{} panels: {}", spec.name, e);
                    Vec::new()
                }
            };
            activation.apply(&items, &panels);

            // a map revealed from a hidden panel has a zero-sized canvas
            if activation.refresh_map && registry.schedule_refresh(&timers) {
                log::debug!("{}: map refresh scheduled", spec.name);
            }
        });
    }
    log::debug!("tab group {} wired with {} items", spec.name, items.len());
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::testing::{Fixture, ManualTimers};
    use shared::tabs::MapRefresh;
    use std::cell::Cell;
    use wasm_bindgen_test::wasm_bindgen_test;

    const MARKUP: &str = r#"
        <div class="tabs-fx-nav">
            <button id="tabs-fx-go-ads" class="tabs-fx-item active" data-tab="ads">Ads</button>
            <button id="tabs-fx-go-map" class="tabs-fx-item active" data-tab="map">Map</button>
            <button id="tabs-fx-go-crm" class="tabs-fx-item" data-tab="crm">CRM</button>
        </div>
        <div id="tabs-fx-ads" class="tabs-fx-panel active"></div>
        <div id="tabs-fx-map" class="tabs-fx-panel active"></div>
        <div id="tabs-fx-crm" class="tabs-fx-panel"></div>
    "#;

    struct CountingMap(Rc<Cell<u32>>);

    impl MapSurface for CountingMap {
        fn refresh(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn spec() -> TabGroupSpec {
        TabGroupSpec {
            name: "fx".to_string(),
            container: ".tabs-fx-nav".to_string(),
            nav_item: ".tabs-fx-item".to_string(),
            panel: ".tabs-fx-panel".to_string(),
            key_attr: "data-tab".to_string(),
            panel_id_prefix: "tabs-fx-".to_string(),
            map_refresh: MapRefresh::OnTab("map".to_string()),
        }
    }

    fn active_ids(fixture: &Fixture, selector: &str) -> Vec<String> {
        fixture
            .page()
            .query_all(&format!("{}.{}", selector, ACTIVE_CLASS))
            .unwrap()
            .iter()
            .map(|el| el.id())
            .collect()
    }

    // ===========================================================================
    // mutual exclusion
    // ===========================================================================

    #[wasm_bindgen_test]
    fn test_one_item_and_one_panel_active_after_every_click() {
        let fixture = Fixture::mount(MARKUP);
        let mut listeners = Listeners::default();
        let registry: Rc<WidgetRegistry<CountingMap>> = Rc::new(WidgetRegistry::new(150));
        install(fixture.page(), &mut listeners, &spec(), registry, ManualTimers::default()).unwrap();

        for key in ["crm", "ads", "ads", "map", "crm"] {
            fixture.click(&format!("tabs-fx-go-{}", key));
            assert_eq!(active_ids(&fixture, ".tabs-fx-item"), vec![format!("tabs-fx-go-{}", key)]);
            assert_eq!(active_ids(&fixture, ".tabs-fx-panel"), vec![format!("tabs-fx-{}", key)]);
        }
    }

    // ===========================================================================
    // map refresh
    // ===========================================================================

    #[wasm_bindgen_test]
    fn test_map_tab_schedules_one_deferred_refresh() {
        let fixture = Fixture::mount(MARKUP);
        let mut listeners = Listeners::default();
        let timers = ManualTimers::default();
        let refreshes = Rc::new(Cell::new(0));
        let registry = Rc::new(WidgetRegistry::new(150));
        registry.install(CountingMap(refreshes.clone())).unwrap();
        install(fixture.page(), &mut listeners, &spec(), registry, timers.clone()).unwrap();

        fixture.click("tabs-fx-go-ads");
        assert!(timers.delays().is_empty());

        fixture.click("tabs-fx-go-map");
        assert_eq!(timers.delays(), vec![150]);
        assert_eq!(refreshes.get(), 0);

        timers.run_all();
        assert_eq!(refreshes.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_map_tab_without_map_schedules_nothing() {
        let fixture = Fixture::mount(MARKUP);
        let mut listeners = Listeners::default();
        let timers = ManualTimers::default();
        let registry: Rc<WidgetRegistry<CountingMap>> = Rc::new(WidgetRegistry::new(150));
        install(fixture.page(), &mut listeners, &spec(), registry, timers.clone()).unwrap();

        fixture.click("tabs-fx-go-map");
        assert!(timers.delays().is_empty());
        assert_eq!(active_ids(&fixture, ".tabs-fx-panel"), vec!["tabs-fx-map".to_string()]);
    }
}
