#![cfg(target_arch = "wasm32")]
use crate::audio::AudioEmitter;
use crate::core::{WaveController, WaveGeometry, WAVE_SEGMENTS, WAVE_WIDTH};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page plumbing degrades per-feature and never blocks the wave subsystem.
    page::init(&document);

    // A missing render target disables the whole wave subsystem; there is no
    // partial operation.
    let wave_el = document
        .get_element_by_id(constants::WAVE_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::WAVE_ELEMENT_ID))?;
    let geometry =
        WaveGeometry::new(WAVE_WIDTH, WAVE_SEGMENTS).map_err(|e| anyhow::anyhow!("{}", e))?;

    let controller = Rc::new(RefCell::new(WaveController::new()));
    let emitter = Rc::new(RefCell::new(AudioEmitter::new()));

    let wired = events::wire_hover_targets(&events::HoverWiring {
        document: document.clone(),
        controller: controller.clone(),
        emitter,
        wave_el: wave_el.clone(),
    });
    log::info!("wave ready: {} hover targets", wired);
    events::wire_menu_escape(&document);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        controller,
        wave_el,
        geometry,
    })));

    Ok(())
}
