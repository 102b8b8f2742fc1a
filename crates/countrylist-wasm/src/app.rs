// crates/countrylist-wasm/src/app.rs

//! DOM rendering and event wiring for the list view.
//!
//! The skeleton (form, list, pagination, random button) is built once on
//! mount and every listener is attached once. Renders only replace the
//! children of the list and the pagination and, when the form is re-keyed,
//! the input's value.

use crate::history::BrowserHistory;
use countrylist_core::widgets::SearchForm;
use countrylist_core::{Dataset, ListController, ViewConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement};

const PAGE_ATTR: &str = "data-page";
/// Set on a root element once a list view lives in it.
pub const MOUNTED_ATTR: &str = "data-countrylist-mounted";

struct Nodes {
    document: Document,
    input: HtmlInputElement,
    list: Element,
    pagination: Element,
}

struct App {
    controller: ListController<'static, BrowserHistory>,
    form: SearchForm,
    nodes: Nodes,
}

impl App {
    fn submit(&mut self) {
        let keyword = self.form.submit();
        let outcome = self.controller.search(&keyword);
        self.settle(outcome);
    }

    fn clear(&mut self) {
        let keyword = self.form.clear();
        self.nodes.input.set_value("");
        let outcome = self.controller.search(&keyword);
        self.settle(outcome);
    }

    fn select_page(&mut self, page: usize) {
        if let Some(page) = self.controller.pagination().click(page) {
            let outcome = self.controller.change_page(page);
            self.settle(outcome);
        }
    }

    fn random_keyword(&mut self) {
        let outcome = self.controller.search_random(js_sys::Math::random());
        self.settle(outcome);
    }

    fn location_changed(&mut self) {
        if self.controller.on_location_change() {
            self.render_or_log();
        }
    }

    fn settle(&mut self, outcome: countrylist_core::Result<bool>) {
        match outcome {
            Ok(true) => self.render_or_log(),
            Ok(false) => {}
            Err(err) => log::error!("{err}"),
        }
    }

    fn render_or_log(&mut self) {
        if let Err(err) = self.render() {
            log::error!("render failed: {err:?}");
        }
    }

    fn render(&mut self) -> Result<(), JsValue> {
        if self.form.sync(self.controller.query().keyword()) {
            self.nodes.input.set_value(self.form.draft());
        }

        let Nodes {
            document,
            list,
            pagination,
            ..
        } = &self.nodes;

        list.set_text_content(None);
        for row in self.controller.list_view().rows() {
            let li = document.create_element("li")?;
            li.set_attribute("data-key", row.key)?;
            li.set_text_content(Some(row.label));
            list.append_child(&li)?;
        }

        pagination.set_text_content(None);
        for indicator in self.controller.pagination().indicators() {
            let li = document.create_element("li")?;
            li.set_class_name(&indicator.class_name());
            li.set_attribute(PAGE_ATTR, &indicator.page.to_string())?;
            li.set_text_content(Some(&indicator.page.to_string()));
            pagination.append_child(&li)?;
        }

        Ok(())
    }
}

/// Builds the list view inside `root` and starts listening to the browser.
///
/// Fails when `root` already hosts a list view.
pub fn mount(root: &Element, dataset: &'static Dataset, config: ViewConfig) -> Result<(), JsValue> {
    if root.has_attribute(MOUNTED_ATTR) {
        return Err(JsValue::from_str("element already hosts a country list"));
    }
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let form: HtmlFormElement = document.create_element("form")?.dyn_into()?;
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("text");
    form.append_child(&input)?;
    let submit: Element = button(&document, "submit", "Search")?;
    form.append_child(&submit)?;
    let reset: Element = button(&document, "reset", "Clear")?;
    form.append_child(&reset)?;

    let list = document.create_element("ul")?;
    let pagination = document.create_element("ul")?;
    pagination.set_class_name("pagination");

    let random = button(&document, "button", "Random Change Keyword in the URL")?;
    let footer = document.create_element("div")?;
    footer.append_child(&random)?;

    root.append_child(&form)?;
    root.append_child(&list)?;
    root.append_child(&pagination)?;
    root.append_child(&footer)?;
    root.set_attribute(MOUNTED_ATTR, "")?;

    let mut controller = ListController::new(dataset, BrowserHistory::new(window.clone()), config);
    controller.mount();
    let search_form = SearchForm::new(controller.query().keyword());
    input.set_value(search_form.draft());

    let app = Rc::new(RefCell::new(App {
        controller,
        form: search_form,
        nodes: Nodes {
            document,
            input: input.clone(),
            list,
            pagination: pagination.clone(),
        },
    }));
    app.borrow_mut().render()?;

    listen(&form, "submit", {
        let app = Rc::clone(&app);
        move |event: Event| {
            event.prevent_default();
            app.borrow_mut().submit();
        }
    })?;

    // The input value is managed here, not by the native form reset.
    listen(&form, "reset", {
        let app = Rc::clone(&app);
        move |event: Event| {
            event.prevent_default();
            app.borrow_mut().clear();
        }
    })?;

    listen(&input, "input", {
        let app = Rc::clone(&app);
        let input = input.clone();
        move |_: Event| app.borrow_mut().form.input(&input.value())
    })?;

    listen(&pagination, "click", {
        let app = Rc::clone(&app);
        move |event: Event| {
            if let Some(page) = clicked_page(&event) {
                app.borrow_mut().select_page(page);
            }
        }
    })?;

    listen(&random, "click", {
        let app = Rc::clone(&app);
        move |_: Event| app.borrow_mut().random_keyword()
    })?;

    listen(&window, "popstate", move |_: Event| {
        app.borrow_mut().location_changed()
    })?;

    log::debug!("list view mounted");
    Ok(())
}

fn button(document: &Document, kind: &str, label: &str) -> Result<Element, JsValue> {
    let el = document.create_element("button")?;
    el.set_attribute("type", kind)?;
    el.set_text_content(Some(label));
    Ok(el)
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Page number of the indicator under the click, if any.
fn clicked_page(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let item = target.closest(&format!("[{PAGE_ATTR}]")).ok()??;
    item.get_attribute(PAGE_ATTR)?.parse().ok()
}
