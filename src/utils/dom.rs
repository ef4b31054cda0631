use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

use crate::effects::geometry::Point;
use crate::state::question::Size;

/// Viewport coordinates of the element's centre.
pub fn element_center(node: &NodeRef) -> Option<Point> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(Point::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    ))
}

/// Rendered size including transforms.
pub fn client_size(node: &NodeRef) -> Option<Size> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(Size::new(rect.width(), rect.height()))
}

/// Layout size, ignoring transforms.
pub fn offset_size(node: &NodeRef) -> Option<Size> {
    let element = node.cast::<HtmlElement>()?;
    Some(Size::new(
        element.offset_width() as f64,
        element.offset_height() as f64,
    ))
}

/// Clicks on these elements have their own effect and should not also
/// drop a tap heart.
pub fn is_interactive(target: &Element) -> bool {
    let tag = target.tag_name();
    if tag.eq_ignore_ascii_case("button") || tag.eq_ignore_ascii_case("iframe") {
        return true;
    }
    [".reason-card", ".envelope"]
        .iter()
        .any(|selector| matches!(target.closest(selector), Ok(Some(_))))
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No section with id `{}`", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Top edge of each section relative to the viewport. Sections missing
/// from the document report `f64::INFINITY`, i.e. never reached.
pub fn section_tops<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<f64> {
    let document = web_sys::window().and_then(|w| w.document());
    ids.into_iter()
        .map(|id| {
            document
                .as_ref()
                .and_then(|d| d.get_element_by_id(id))
                .map(|e| e.get_bounding_client_rect().top())
                .unwrap_or(f64::INFINITY)
        })
        .collect()
}
