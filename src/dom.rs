use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a no-argument listener to `target`. The closure is leaked, which is
/// fine for listeners that live for the page session.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a listener that needs the event object (e.g. to prevent default).
pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a keydown listener to the document.
pub fn add_keydown_listener(
    document: &web::Document,
    mut handler: impl FnMut(web::KeyboardEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::KeyboardEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Collect the elements matching `selector`; an invalid selector yields an
/// empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                elements.push(el);
            }
        }
    }
    elements
}

/// Read the preference store, if the host exposes one.
pub fn preference_store() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}
