//! Navbar scroll state and mobile menu toggle

use shared::config::{MenuConfig, NavbarConfig};
use shared::scroll::is_scrolled;
use shared::SiteError;

use crate::dom::{self, Listeners, Page};

/// mark the navbar `scrolled` past the threshold, on every scroll event
pub fn install_scroll_state(page: &Page, listeners: &mut Listeners, config: &NavbarConfig) -> Result<(), SiteError> {
    let navbar = page.by_id(&config.id)?;
    let threshold = config.threshold_px;
    let class = config.scrolled_class.clone();

    let update = {
        let page = page.clone();
        move || dom::set_class(&navbar, &class, is_scrolled(page.scroll_y(), threshold))
    };

    // pages restored mid-scroll start in the right state
    update();
    listeners.listen(&page.window, "scroll", move |_| update());
    Ok(())
}

/// open/close the mobile menu and lock body scrolling while it is open
pub fn install_mobile_menu(page: &Page, listeners: &mut Listeners, config: &MenuConfig) -> Result<(), SiteError> {
    let toggle = page.by_id(&config.toggle_id)?;
    let links = page.by_id(&config.links_id)?;
    let body = page.body()?;
    let active = config.active_class.clone();

    {
        let (toggle_el, links, body, active) = (toggle.clone(), links.clone(), body.clone(), active.clone());
        listeners.listen(&toggle, "click", move |_| {
            let _ = toggle_el.class_list().toggle(&active);
            let _ = links.class_list().toggle(&active);
            let open = dom::has_class(&links, &active);
            dom::set_style(&body, "overflow", if open { "hidden" } else { "" });
        });
    }

    // any link inside the menu closes it
    for link in dom::query_all_in(&links, "a")? {
        let (toggle, links, body, active) = (toggle.clone(), links.clone(), body.clone(), active.clone());
        listeners.listen(&link, "click", move |_| {
            dom::remove_class(&toggle, &active);
            dom::remove_class(&links, &active);
            dom::set_style(&body, "overflow", "");
        });
    }
    Ok(())
}
