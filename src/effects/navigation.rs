use crate::config::HEADER_OFFSET_PX;
use crate::flow::Section;
use log::{debug, warn};
use web_sys::{window, ScrollBehavior, ScrollToOptions};

/// Page offset to scroll to so the section top sits just below the fixed marquee.
pub fn scroll_target(element_top: f64, body_top: f64) -> f64 {
    element_top - body_top - HEADER_OFFSET_PX
}

pub fn scroll_to_section(section: Section) {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(section.id()) else {
        warn!("Section #{} not found, not scrolling", section.id());
        return;
    };
    let body_top = document
        .body()
        .map(|body| body.get_bounding_client_rect().top())
        .unwrap_or(0.0);
    let top = scroll_target(element.get_bounding_client_rect().top(), body_top);

    debug!("Scrolling to #{} at {}px", section.id(), top);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
