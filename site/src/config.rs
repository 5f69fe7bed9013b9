//! Reads the page-embedded site config

use shared::config::{SiteConfig, CONFIG_ELEMENT_ID};
use web_sys::Document;

/// config from `<script type="application/json" id="site-config">`, or defaults
pub fn load(document: &Document) -> SiteConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&el.text_content().unwrap_or_default()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            SiteConfig::default()
        }
    }
}
