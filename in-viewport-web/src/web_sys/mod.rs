//! DOM bindings used by the watcher.

mod intersection_handle;

pub(crate) use self::intersection_handle::IntersectionObserverHandle;

use in_viewport_core::attribute::{AttributeNames, AttributeSnapshot};
use in_viewport_core::update::{DirectionUpdate, PositionUpdate, Update};
use smol_str::SmolStr;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Reads both watcher attributes off `element`, before any write for the
/// current observation.
pub(crate) fn snapshot(element: &Element, names: &AttributeNames) -> AttributeSnapshot {
    AttributeSnapshot {
        direction: element.get_attribute(&names.direction).map(SmolStr::from),
        position: element.get_attribute(&names.position).map(SmolStr::from),
    }
}

/// Writes a derived update onto `element`, direction first.
pub(crate) fn apply(element: &Element, names: &AttributeNames, update: &Update) {
    match &update.direction {
        DirectionUpdate::Clear => {
            element
                .remove_attribute(&names.direction)
                .unwrap_or_else(|error| report_attribute_error(&names.direction, &error));
        },
        DirectionUpdate::Set(value) => set_attribute(element, &names.direction, value),
    }

    match &update.position {
        PositionUpdate::Set(value) => set_attribute(element, &names.position, value),
        // Written regardless, with the value left unset.
        PositionUpdate::Indeterminate => set_attribute(element, &names.position, ""),
    }
}

fn set_attribute(element: &Element, name: &str, value: &str) {
    element
        .set_attribute(name, value)
        .unwrap_or_else(|error| report_attribute_error(name, &error));
}

// An invalid attribute name must not take the whole callback batch down.
fn report_attribute_error(name: &str, error: &JsValue) {
    web_sys::console::error_2(&format!("failed to write attribute `{name}`").into(), error);
}
