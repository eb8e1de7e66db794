//! Leptos Theme Root Utilities
//!
//! Writes theme tokens onto `document.documentElement` and keeps small
//! string preferences in `localStorage`.
//! Every DOM call returns `Result<_, JsValue>`; the reactive helpers log
//! failures instead of propagating them.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

fn root_element() -> Result<web_sys::HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    root.dyn_into::<web_sys::HtmlElement>().map_err(JsValue::from)
}

fn local_storage() -> Result<web_sys::Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("window is not available"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage is not available"))
}

/// Set CSS custom properties on the root element's inline style
pub fn set_root_properties<'a, I>(props: I) -> Result<(), JsValue>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let style = root_element()?.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Put `class` on the root element and remove the other entries of `exclusive`
pub fn set_root_class(class: &str, exclusive: &[&str]) -> Result<(), JsValue> {
    let list = root_element()?.class_list();
    for other in exclusive.iter().filter(|other| **other != class) {
        list.remove_1(other)?;
    }
    list.add_1(class)
}

/// Read a stored string. Missing keys and unavailable storage both yield `None`.
pub fn storage_get(key: &str) -> Option<String> {
    match local_storage().and_then(|storage| storage.get_item(key)) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("reading {} failed: {:?}", key, err);
            None
        }
    }
}

pub fn storage_set(key: &str, value: &str) -> Result<(), JsValue> {
    local_storage()?.set_item(key, value)
}

/// Re-apply root properties whenever the signals read inside `props` change
pub fn use_root_properties<F>(props: F)
where
    F: Fn() -> Vec<(&'static str, &'static str)> + 'static,
{
    Effect::new(move |_| {
        let props = props();
        if let Err(err) = set_root_properties(props.iter().copied()) {
            log::warn!("applying {} properties failed: {:?}", props.len(), err);
        }
    });
}

/// Keep the root class in sync with `class`
pub fn use_root_class<F>(class: F, exclusive: &'static [&'static str])
where
    F: Fn() -> &'static str + 'static,
{
    Effect::new(move |_| {
        let class = class();
        if let Err(err) = set_root_class(class, exclusive) {
            log::warn!("setting class {} failed: {:?}", class, err);
        }
    });
}

/// Write the value produced by `value` under `key` every time it changes
pub fn use_persisted<F>(key: &'static str, value: F)
where
    F: Fn() -> String + 'static,
{
    Effect::new(move |_| {
        let value = value();
        if let Err(err) = storage_set(key, &value) {
            log::warn!("persisting {}={} failed: {:?}", key, value, err);
        }
    });
}
