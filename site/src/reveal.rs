//! Reveal-on-scroll animations with staggered grids

use shared::config::RevealConfig;
use shared::reveal::stagger_delay;
use shared::SiteError;

use crate::dom::{self, Observers, Page};

/// give children of each stagger grid an increasing `transition-delay`
pub fn apply_stagger(page: &Page, config: &RevealConfig) {
    for selector in &config.stagger_containers {
        let Ok(container) = page.query(selector) else {
            continue;
        };
        let children = match dom::query_all_in(&container, &config.selector) {
            Ok(children) => children,
            Err(e) => {
                log::warn!("stagger {}: {}", selector, e);
                continue;
            }
        };
        for (index, child) in children.iter().enumerate() {
            dom::set_style(child, "transition-delay", &stagger_delay(index, config.stagger_step_tenths));
        }
    }
}

/// add the visible class on first intersection, once per element
pub fn install(page: &Page, observers: &mut Observers, config: &RevealConfig) -> Result<(), SiteError> {
    let targets = page.query_all(&config.selector)?;
    if targets.is_empty() {
        return Err(SiteError::MissingElement(config.selector.clone()));
    }
    log::debug!("observing {} reveal targets", targets.len());

    let visible = config.visible_class.clone();
    observers.observe_once(
        targets,
        Some(config.root_margin.as_str()),
        config.threshold,
        move |el| dom::add_class(el, &visible),
    )
}
