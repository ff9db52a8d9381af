//! Browser integration tests.
//!
//! From `tests/web`: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use in_viewport_web::{start, AttributeNames, LifecycleHooks, Vocabulary, WatcherAttributes};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, IntersectionObserverInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn insert_div(style: &str) -> Element {
    console_error_panic_hook::set_once();
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

const IN_VIEW: &str = "position: absolute; top: 0px; width: 10px; height: 10px;";
const FAR_BELOW: &str = "position: absolute; top: 100000px; width: 10px; height: 10px;";

/// Gives the observer time to deliver its initial batch.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 100)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn empty_targets_is_a_noop() {
    console_error_panic_hook::set_once();
    assert!(start(WatcherAttributes::default()).is_ok());
}

#[wasm_bindgen_test]
async fn annotates_element_below_the_viewport() {
    let element = insert_div(FAR_BELOW);
    start(WatcherAttributes::default().with_target(element.clone())).unwrap();
    settle().await;

    assert_eq!(element.get_attribute("data-in-viewport-position").as_deref(), Some("below"));
    assert_eq!(element.get_attribute("data-in-viewport-direction"), None);
}

#[wasm_bindgen_test]
async fn annotates_intersecting_element() {
    let element = insert_div(IN_VIEW);
    start(WatcherAttributes::default().with_target(element.clone())).unwrap();
    settle().await;

    assert_eq!(
        element.get_attribute("data-in-viewport-position").as_deref(),
        Some("intersecting")
    );
    // No earlier position was recorded, so the entry side defaults to below.
    assert_eq!(
        element.get_attribute("data-in-viewport-direction").as_deref(),
        Some("from-below")
    );
}

#[wasm_bindgen_test]
async fn hooks_fire_in_order() {
    let element = insert_div(IN_VIEW);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let log = |name: &'static str| {
        let calls = Rc::clone(&calls);
        move |_: &_| calls.borrow_mut().push(name)
    };
    let hooks = LifecycleHooks::default()
        .on_start(log("start"))
        .on_enter(log("enter"))
        .on_leave(log("leave"))
        .on_end(log("end"));

    start(WatcherAttributes::default().with_target(element).with_hooks(hooks)).unwrap();
    settle().await;

    assert_eq!(*calls.borrow(), ["start", "enter", "end"]);
}

#[wasm_bindgen_test]
async fn leave_hook_fires_for_non_intersecting_targets() {
    let element = insert_div(FAR_BELOW);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let log = |name: &'static str| {
        let calls = Rc::clone(&calls);
        move |_: &_| calls.borrow_mut().push(name)
    };
    let hooks = LifecycleHooks::default().on_enter(log("enter")).on_leave(log("leave"));

    start(WatcherAttributes::default().with_target(element).with_hooks(hooks)).unwrap();
    settle().await;

    assert_eq!(*calls.borrow(), ["leave"]);
}

#[wasm_bindgen_test]
async fn custom_names_and_vocabulary() {
    let element = insert_div(FAR_BELOW);
    let attributes = WatcherAttributes::default()
        .with_target(element.clone())
        .with_attribute_names(AttributeNames {
            direction: "data-scroll-direction".into(),
            position: "data-scroll-position".into(),
        })
        .with_vocabulary(Vocabulary {
            intersecting: "visible".into(),
            above: "over".into(),
            below: "under".into(),
        });

    start(attributes).unwrap();
    settle().await;

    assert_eq!(element.get_attribute("data-scroll-position").as_deref(), Some("under"));
    assert_eq!(element.get_attribute("data-in-viewport-position"), None);
}

#[wasm_bindgen_test]
fn invalid_options_surface_as_error() {
    let element = insert_div(IN_VIEW);
    let options = IntersectionObserverInit::new();
    options.set_root_margin("not-a-margin");

    let result = start(
        WatcherAttributes::default().with_target(element).with_observer_options(options),
    );
    assert!(result.is_err());
}
