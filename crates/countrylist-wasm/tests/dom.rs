use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, Window};

use countrylist_wasm::mount;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

/// A new host element in a page whose URL carries no query string.
fn fresh_root(id: &str) -> Element {
    let path = window().location().pathname().unwrap();
    window()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&path))
        .unwrap();

    let root = document().create_element("div").unwrap();
    root.set_id(id);
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn cancelable(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into()
        .unwrap()
}

fn list_items(root: &Element) -> u32 {
    root.query_selector_all("ul:not(.pagination) > li")
        .unwrap()
        .length()
}

fn location_search() -> String {
    window().location().search().unwrap()
}

#[wasm_bindgen_test]
fn search_paging_and_clear_drive_the_location() {
    let root = fresh_root("list-root");
    mount("list-root", Some(2)).unwrap();
    let history = window().history().unwrap();
    assert_eq!(list_items(&root), 2);

    // Typing alone commits nothing.
    let input: HtmlInputElement = find(&root, "input");
    input.set_value("f");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(location_search(), "");

    let form: Element = find(&root, "form");
    let proceeded = form.dispatch_event(&cancelable("submit")).unwrap();
    assert!(!proceeded, "submit default must be prevented");
    assert_eq!(location_search(), "?keyword=f&page=1");
    assert_eq!(list_items(&root), 2);

    // The current indicator is inert.
    let entries = history.length().unwrap();
    find::<HtmlElement>(&root, ".pagination--item-current").click();
    assert_eq!(history.length().unwrap(), entries);
    assert_eq!(location_search(), "?keyword=f&page=1");

    // Any other indicator pushes one entry, keeping the keyword.
    find::<HtmlElement>(&root, ".pagination [data-page=\"2\"]").click();
    assert_eq!(history.length().unwrap(), entries + 1);
    assert_eq!(location_search(), "?keyword=f&page=2");
    let current: HtmlElement = find(&root, ".pagination--item-current");
    assert_eq!(current.text_content().as_deref(), Some("2"));

    // A location change re-keys the input.
    history
        .push_state_with_url(&JsValue::NULL, "", Some("?keyword=ger&page=1"))
        .unwrap();
    window()
        .dispatch_event(&Event::new("popstate").unwrap())
        .unwrap();
    assert_eq!(input.value(), "ger");

    let proceeded = form.dispatch_event(&cancelable("reset")).unwrap();
    assert!(!proceeded, "reset default must be prevented");
    assert_eq!(location_search(), "?keyword=&page=1");
    assert_eq!(input.value(), "");
    assert_eq!(list_items(&root), 2);
}

#[wasm_bindgen_test]
fn second_mount_into_same_root_is_rejected() {
    let root = fresh_root("twice-root");
    mount("twice-root", None).unwrap();
    let children = root.child_element_count();

    assert!(mount("twice-root", None).is_err());
    assert_eq!(root.child_element_count(), children);
}
