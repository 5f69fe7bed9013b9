//! ==============================================================================
//! scroll.rs - navbar scroll state and in-page anchor scrolling
//! ==============================================================================

use serde::{Deserialize, Serialize};

/// default scroll offset (px) past which the navbar is marked `scrolled`
pub const DEFAULT_NAVBAR_THRESHOLD: f64 = 50.0;

/// gap (px) left between the navbar and an anchor target
pub const ANCHOR_MARGIN: f64 = 20.0;

/// whether the navbar should carry the `scrolled` class
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// what a click on a bare `#` link does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorRootBehavior {
    /// smooth scroll back to the top of the page
    #[default]
    ScrollTop,
    /// swallow the click, stay put
    Ignore,
}

/// resolved action for an in-page link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    ScrollTop,
    /// scroll to the element with this id (without the `#`)
    ScrollTo(&'a str),
    Ignore,
}

/// classify the `href` of a `#...` link
pub fn resolve_anchor(href: &str, root: AnchorRootBehavior) -> AnchorAction<'_> {
    match href.strip_prefix('#') {
        Some("") => match root {
            AnchorRootBehavior::ScrollTop => AnchorAction::ScrollTop,
            AnchorRootBehavior::Ignore => AnchorAction::Ignore,
        },
        Some(id) => AnchorAction::ScrollTo(id),
        None => AnchorAction::Ignore,
    }
}

/// page offset to scroll to so the target sits just below the navbar
///
/// `rect_top` is the target's viewport-relative top, `scroll_y` the current
/// page offset.
pub fn anchor_offset(rect_top: f64, scroll_y: f64, navbar_height: f64) -> f64 {
    rect_top + scroll_y - navbar_height - ANCHOR_MARGIN
}
