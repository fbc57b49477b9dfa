use crate::constants::*;
use crate::core::{self, WaveController, WaveGeometry};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the wave renderer: the controller handle, the target
/// SVG path element and the validated sampling geometry.
pub struct FrameContext {
    pub controller: Rc<RefCell<WaveController>>,
    pub wave_el: web::Element,
    pub geometry: WaveGeometry,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let (settled, state) = {
            let mut controller = self.controller.borrow_mut();
            let settled = controller.advance(now);
            controller.step_idle();
            (settled, controller.state(now))
        };
        if settled {
            apply_settled_stroke(&self.wave_el);
        }
        let points = core::sample(&state, self.geometry);
        _ = self.wave_el.set_attribute("d", &core::path_data(&points));
    }
}

/// Brighter glow while a trigger is in flight; applied when a hover fires.
pub fn apply_active_stroke(wave_el: &web::Element) {
    apply_stroke(wave_el, ACTIVE_FILTER, ACTIVE_STROKE_WIDTH);
}

/// Heavier steady glow once the envelope completes.
pub fn apply_settled_stroke(wave_el: &web::Element) {
    apply_stroke(wave_el, SETTLED_FILTER, SETTLED_STROKE_WIDTH);
}

fn apply_stroke(wave_el: &web::Element, filter: &str, width: &str) {
    _ = wave_el.set_attribute("filter", filter);
    _ = wave_el.set_attribute("stroke-width", width);
    _ = wave_el.set_attribute("vector-effect", "non-scaling-stroke");
    _ = wave_el.set_attribute("stroke-linecap", "round");
    _ = wave_el.set_attribute("stroke-linejoin", "round");
}

/// Start the self-rearming requestAnimationFrame loop. The closure holds a
/// handle to itself so each frame can schedule the next one.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
