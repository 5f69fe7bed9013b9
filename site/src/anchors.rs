//! Smooth scrolling for in-page `#` links

use shared::config::AnchorConfig;
use shared::scroll::{anchor_offset, resolve_anchor, AnchorAction};
use shared::SiteError;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom::{Listeners, Page};

pub fn install(page: &Page, listeners: &mut Listeners, config: &AnchorConfig, navbar_id: &str) -> Result<(), SiteError> {
    let anchors = page.query_all(&config.selector)?;
    if anchors.is_empty() {
        return Err(SiteError::MissingElement(config.selector.clone()));
    }

    for anchor in anchors {
        let page = page.clone();
        let link = anchor.clone();
        let root = config.root;
        let navbar_id = navbar_id.to_string();

        listeners.intercept(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();

            match resolve_anchor(&href, root) {
                AnchorAction::ScrollTop => page.smooth_scroll_to(0.0),
                AnchorAction::ScrollTo(id) => {
                    let Some(target) = page.document.get_element_by_id(id) else {
                        log::debug!("anchor target #{} not on this page", id);
                        return;
                    };
                    let navbar_height = page
                        .document
                        .get_element_by_id(&navbar_id)
                        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
                        .map(|nav| nav.offset_height() as f64)
                        .unwrap_or(0.0);
                    let top = anchor_offset(
                        target.get_bounding_client_rect().top(),
                        page.scroll_y(),
                        navbar_height,
                    );
                    page.smooth_scroll_to(top);
                }
                AnchorAction::Ignore => {}
            }
        });
    }
    Ok(())
}
