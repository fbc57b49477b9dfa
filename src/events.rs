use crate::audio::AudioEmitter;
use crate::constants::*;
use crate::core::{SourceId, ViewportClass, WaveController};
use crate::{dom, frame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct HoverWiring {
    pub document: web::Document,
    pub controller: Rc<RefCell<WaveController>>,
    pub emitter: Rc<RefCell<AudioEmitter>>,
    pub wave_el: web::Element,
}

/// Wire a mouseenter handler on every hover target. Each element's
/// `data-wave-source` tag is parsed into a typed id once, at setup; untagged
/// or unparsable elements get the unknown id and therefore the default
/// profile. Returns the number of targets wired.
pub fn wire_hover_targets(w: &HoverWiring) -> usize {
    let targets = dom::query_all(&w.document, HOVER_TARGET_SELECTOR);
    for el in &targets {
        let source = el
            .get_attribute(SOURCE_ATTR)
            .and_then(|tag| SourceId::from_tag(&tag))
            .unwrap_or(SourceId::UNKNOWN);

        let controller = w.controller.clone();
        let emitter = w.emitter.clone();
        let wave_el = w.wave_el.clone();
        dom::add_listener(el, "mouseenter", move || {
            let tone = controller
                .borrow_mut()
                .on_hover(source, viewport_class(), Instant::now());
            emitter.borrow_mut().play(&tone);
            frame::apply_active_stroke(&wave_el);
        });
    }
    targets.len()
}

/// Escape closes the mobile menu.
pub fn wire_menu_escape(document: &web::Document) {
    let doc = document.clone();
    dom::add_keydown_listener(document, move |ev| {
        if ev.key() == "Escape" {
            for selector in [HAMBURGER_SELECTOR, NAV_MENU_SELECTOR] {
                if let Ok(Some(el)) = doc.query_selector(selector) {
                    _ = el.class_list().remove_1(MENU_ACTIVE_CLASS);
                }
            }
        }
    });
}

/// Resolve the amplitude multiplier class from the current window width.
/// Evaluated at trigger time only, never mid-animation.
fn viewport_class() -> ViewportClass {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|px| ViewportClass::from_width(px as f32))
        .unwrap_or(ViewportClass::Desktop)
}
