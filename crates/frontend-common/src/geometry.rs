//! Page geometry read from the live DOM

use gloo_utils::{document, window};
use softsell_core::{CoreError, CoreResult, SectionBounds, SectionGeometry, SectionId};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Reads section bounds from `offsetTop`/`offsetHeight` of the anchored elements
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSectionGeometry;

fn section_element(id: SectionId) -> CoreResult<HtmlElement> {
    document()
        .get_element_by_id(id.anchor())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| CoreError::section_not_found(id.anchor()))
}

impl SectionGeometry for DomSectionGeometry {
    fn bounds(&self, id: SectionId) -> CoreResult<SectionBounds> {
        let element = section_element(id)?;
        Ok(SectionBounds {
            id,
            top: f64::from(element.offset_top()),
            height: f64::from(element.offset_height()),
        })
    }
}

/// Vertical scroll offset of the window, 0 when unavailable
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Smoothly scroll a section into view
pub fn scroll_to_section(id: SectionId) -> CoreResult<()> {
    let element = section_element(id)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
