//! ==============================================================================
//! config.rs - page-level configuration
//! ==============================================================================
//!
//! purpose:
//!     one configurable initializer replaces the per-page copies of the
//!     behavior script. pages may embed
//!         <script type="application/json" id="site-config">{ ... }</script>
//!     and every field they omit keeps its default.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_DURATION_MS;
use crate::error::ConfigError;
use crate::map::MapConfig;
use crate::scroll::{AnchorRootBehavior, DEFAULT_NAVBAR_THRESHOLD};
use crate::tabs::TabGroupSpec;

/// id of the embedded json config element
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    pub navbar: NavbarConfig,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub anchors: AnchorConfig,
    pub phone: PhoneConfig,
    pub form: FormConfig,
    pub tab_groups: Vec<TabGroupSpec>,
    pub map: MapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            navbar: NavbarConfig::default(),
            menu: MenuConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            anchors: AnchorConfig::default(),
            phone: PhoneConfig::default(),
            form: FormConfig::default(),
            tab_groups: TabGroupSpec::defaults(),
            map: MapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// parse the embedded json; blank text yields the defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// configured level, falling back to info on unknown names
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub id: String,
    pub threshold_px: f64,
    pub scrolled_class: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            id: "navbar".to_string(),
            threshold_px: DEFAULT_NAVBAR_THRESHOLD,
            scrolled_class: "scrolled".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_id: String,
    pub links_id: String,
    pub active_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "mobileToggle".to_string(),
            links_id: "navLinks".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    pub root_margin: String,
    pub threshold: f64,
    /// grids whose children reveal in sequence
    pub stagger_containers: Vec<String>,
    /// delay between siblings, in tenths of a second
    pub stagger_step_tenths: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".to_string(),
            visible_class: "visible".to_string(),
            root_margin: "0px 0px -80px 0px".to_string(),
            threshold: 0.1,
            stagger_containers: [".problems-grid", ".services-grid", ".why-grid", ".results-grid"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stagger_step_tenths: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub selector: String,
    pub count_attr: String,
    pub threshold: f64,
    pub duration_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: ".stat-number[data-count]".to_string(),
            count_attr: "data-count".to_string(),
            threshold: 0.5,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub selector: String,
    pub root: AnchorRootBehavior,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"#\"]".to_string(),
            root: AnchorRootBehavior::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub input_id: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            input_id: "phone".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub success_id: String,
    pub submit_selector: String,
    pub success_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            success_id: "formSuccess".to_string(),
            submit_selector: "button[type=\"submit\"]".to_string(),
            success_class: "show".to_string(),
        }
    }
}
