//! ==============================================================================
//! tabs.rs - declarative tab groups
//! ==============================================================================
//!
//! purpose:
//!     every tabbed area on the page (demo panels, info panels, map sub-views)
//!     is described by one `TabGroupSpec` instead of a hand-written handler.
//!
//! semantics:
//!     clicking nav item `i` clears `active` from every nav item and panel in
//!     the group, then marks item `i` and panel `#{panel_id_prefix}{key}`.
//!     groups whose `map_refresh` rule matches ask the widget registry for a
//!     deferred map size recalculation.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

/// class marking the active nav item and panel
pub const ACTIVE_CLASS: &str = "active";

/// when switching a tab should refresh the embedded map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapRefresh {
    #[default]
    Never,
    /// every switch (the map lives in one of this group's panels)
    Always,
    /// only when the given tab key becomes active
    OnTab(String),
}

impl MapRefresh {
    pub fn matches(&self, key: Option<&str>) -> bool {
        match self {
            MapRefresh::Never => false,
            MapRefresh::Always => true,
            MapRefresh::OnTab(tab) => key == Some(tab.as_str()),
        }
    }
}

/// selectors and naming for one tab group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroupSpec {
    /// used in logs
    pub name: String,
    /// group root; the group is skipped when absent
    pub container: String,
    /// nav items, queried inside `container`
    pub nav_item: String,
    /// panels, queried document-wide
    pub panel: String,
    /// attribute on a nav item naming its panel
    pub key_attr: String,
    pub panel_id_prefix: String,
    #[serde(default)]
    pub map_refresh: MapRefresh,
}

impl TabGroupSpec {
    pub fn panel_id(&self, key: &str) -> String {
        format!("{}{}", self.panel_id_prefix, key)
    }

    /// the demo sidebar; its `map` tab hosts the coverage map
    pub fn demo_panels() -> Self {
        Self {
            name: "demo".to_string(),
            container: ".demo-sidebar".to_string(),
            nav_item: ".demo-nav-item".to_string(),
            panel: ".demo-tab".to_string(),
            key_attr: "data-tab".to_string(),
            panel_id_prefix: "demo-tab-".to_string(),
            map_refresh: MapRefresh::OnTab("map".to_string()),
        }
    }

    pub fn info_panels() -> Self {
        Self {
            name: "info".to_string(),
            container: ".info-tabs".to_string(),
            nav_item: ".info-tab".to_string(),
            panel: ".info-panel".to_string(),
            key_attr: "data-panel".to_string(),
            panel_id_prefix: "info-panel-".to_string(),
            map_refresh: MapRefresh::Never,
        }
    }

    /// sub-views around the map; any switch may resize its canvas
    pub fn map_views() -> Self {
        Self {
            name: "map-view".to_string(),
            container: ".map-view-tabs".to_string(),
            nav_item: ".map-view-tab".to_string(),
            panel: ".map-view".to_string(),
            key_attr: "data-view".to_string(),
            panel_id_prefix: "map-view-".to_string(),
            map_refresh: MapRefresh::Always,
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![Self::demo_panels(), Self::info_panels(), Self::map_views()]
    }
}

/// result of clicking a nav item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub index: usize,
    /// panel to mark active, `None` when the nav item carries no key
    pub panel_id: Option<String>,
    pub refresh_map: bool,
}

/// a nav item or panel that can carry the active class
pub trait ActiveTarget {
    /// element id, compared against `Activation::panel_id`
    fn target_id(&self) -> String;
    fn set_active(&self, active: bool);
}

impl Activation {
    /// clear every item and panel of the group, then mark the clicked item and its panel
    pub fn apply<N: ActiveTarget, P: ActiveTarget>(&self, items: &[N], panels: &[P]) {
        for (i, item) in items.iter().enumerate() {
            item.set_active(i == self.index);
        }
        let mut marked = false;
        for panel in panels {
            // duplicate ids still leave a single active panel
            let on = !marked && self.panel_id.as_deref() == Some(panel.target_id().as_str());
            marked |= on;
            panel.set_active(on);
        }
    }
}

/// runtime state of one wired group
#[derive(Debug, Clone)]
pub struct TabGroup {
    spec: TabGroupSpec,
    keys: Vec<Option<String>>,
    active: Option<usize>,
}

impl TabGroup {
    /// `keys[i]` is the `key_attr` value of nav item `i`
    pub fn new(spec: TabGroupSpec, keys: Vec<Option<String>>) -> Self {
        Self { spec, keys, active: None }
    }

    pub fn spec(&self) -> &TabGroupSpec {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn activate(&mut self, index: usize) -> Option<Activation> {
        let key = self.keys.get(index)?.as_deref();
        let activation = Activation {
            index,
            panel_id: key.map(|k| self.spec.panel_id(k)),
            refresh_map: self.spec.map_refresh.matches(key),
        };
        self.active = Some(index);
        Some(activation)
    }
}
