//! Page plumbing: theme toggle, bilingual text swap, hamburger menu and
//! smooth-scroll anchors. Each feature degrades independently when its nodes
//! are absent; none of this touches the wave subsystem.

use crate::constants::*;
use crate::core::i18n::{Language, Translations};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn init(document: &web::Document) {
    init_theme_toggle(document);
    init_language_toggle(document);
    init_hamburger_menu(document);
    init_scroll_reveals(document);
    wire_nav_links(document);
}

fn nav_menu(document: &web::Document) -> Option<web::Element> {
    document.query_selector(NAV_MENU_SELECTOR).ok().flatten()
}

fn init_theme_toggle(document: &web::Document) {
    let Some(menu) = nav_menu(document) else {
        return;
    };
    let Ok(toggle) = document.create_element("button") else {
        return;
    };
    toggle.set_class_name(THEME_TOGGLE_CLASS);
    _ = toggle.set_attribute("aria-label", "Toggle light mode");
    _ = menu.append_child(&toggle);

    // Default is dark; a stored light preference is applied up front.
    let stored = dom::preference_store().and_then(|s| s.get_item(THEME_KEY).ok().flatten());
    if stored.as_deref() == Some(THEME_LIGHT) {
        if let Some(body) = document.body() {
            _ = body.class_list().add_1(LIGHT_THEME_CLASS);
        }
        _ = toggle.set_attribute("aria-label", "Toggle dark mode");
    }

    let doc = document.clone();
    let toggle_for_click = toggle.clone();
    dom::add_listener(&toggle, "click", move || {
        let Some(body) = doc.body() else {
            return;
        };
        _ = body.class_list().toggle(LIGHT_THEME_CLASS);
        let is_light = body.class_list().contains(LIGHT_THEME_CLASS);
        _ = toggle_for_click.set_attribute(
            "aria-label",
            if is_light {
                "Toggle dark mode"
            } else {
                "Toggle light mode"
            },
        );
        if let Some(store) = dom::preference_store() {
            _ = store.set_item(THEME_KEY, if is_light { THEME_LIGHT } else { THEME_DARK });
        }
    });
}

fn init_language_toggle(document: &web::Document) {
    let Some(menu) = nav_menu(document) else {
        return;
    };
    let Ok(toggle) = document.create_element("button") else {
        return;
    };
    toggle.set_class_name(LANGUAGE_TOGGLE_CLASS);
    _ = toggle.set_attribute("aria-label", "Toggle language");
    _ = menu.append_child(&toggle);

    let translations = Translations::new();

    // Stored preference wins, then the browser language, then English.
    let initial = dom::preference_store()
        .and_then(|s| s.get_item(LANGUAGE_KEY).ok().flatten())
        .as_deref()
        .and_then(Language::from_tag)
        .or_else(|| {
            web::window()
                .and_then(|w| w.navigator().language())
                .as_deref()
                .and_then(Language::from_tag)
        })
        .unwrap_or_default();
    apply_language(document, &translations, initial);

    let doc = document.clone();
    dom::add_listener(&toggle, "click", move || {
        let current = doc
            .document_element()
            .and_then(|el| el.get_attribute("lang"))
            .as_deref()
            .and_then(Language::from_tag)
            .unwrap_or_default();
        let next = current.toggled();
        apply_language(&doc, &translations, next);
        if let Some(store) = dom::preference_store() {
            _ = store.set_item(LANGUAGE_KEY, next.tag());
        }
    });
}

/// Rewrite every tagged node with the exact string for `lang`; nodes whose
/// key has no entry are left untouched.
fn apply_language(document: &web::Document, translations: &Translations, lang: Language) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", lang.tag());
    }
    let selector = format!("[{}]", I18N_ATTR);
    for el in dom::query_all(document, &selector) {
        let Some(key) = el.get_attribute(I18N_ATTR) else {
            continue;
        };
        if let Some(text) = translations.lookup(lang, &key) {
            el.set_text_content(Some(text));
        }
    }
}

fn init_hamburger_menu(document: &web::Document) {
    let (Ok(Some(hamburger)), Some(menu)) = (
        document.query_selector(HAMBURGER_SELECTOR),
        nav_menu(document),
    ) else {
        return;
    };
    let hamburger_for_click = hamburger.clone();
    dom::add_listener(&hamburger, "click", move || {
        _ = hamburger_for_click.class_list().toggle(MENU_ACTIVE_CLASS);
        _ = menu.class_list().toggle(MENU_ACTIVE_CLASS);
    });
}

/// Fade sections in as they scroll into view: each matching element gains the
/// reveal class the first time a tenth of it enters the viewport.
fn init_scroll_reveals(document: &web::Document) {
    let targets = dom::query_all(document, FADE_IN_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                _ = entry.target().class_list().add_1(ANIMATE_IN_CLASS);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from(FADE_IN_THRESHOLD));
    opts.set_root_margin(FADE_IN_ROOT_MARGIN);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => log::warn!("scroll reveal observer unavailable: {:?}", e),
    }
}

/// Same-page `#fragment` links scroll smoothly to their section, allowing for
/// the fixed navbar; links with a page component are left to the browser.
fn wire_nav_links(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let Some(fragment) = href.strip_prefix('#').map(str::to_owned) else {
            continue;
        };
        let doc = document.clone();
        dom::add_event_listener(&link, "click", move |ev| {
            let Some(target) = doc
                .get_element_by_id(&fragment)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            if let Some(window) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(target.offset_top() as f64 - NAVBAR_OFFSET_PX);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}
