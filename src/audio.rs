use crate::core::Tone;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Fade-in before the exponential release, in seconds.
const FADE_IN_SEC: f64 = 0.01;
/// Exponential ramps cannot reach zero; this is the audible floor.
const RELEASE_FLOOR: f32 = 0.001;

/// Owner of the audio hardware resource.
///
/// The context is created lazily on the first tone request, which always
/// follows a user gesture (a hover), satisfying the browser autoplay gate.
/// Every failure is logged and swallowed: the wave keeps animating silently
/// when audio is unavailable, and a failed creation is retried on the next
/// hover.
pub struct AudioEmitter {
    ctx: Option<web::AudioContext>,
}

impl AudioEmitter {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    fn ensure_context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    if ctx.state() == web::AudioContextState::Suspended {
                        _ = ctx.resume();
                    }
                    log::info!("audio context initialized");
                    self.ctx = Some(ctx);
                }
                Err(e) => log::warn!("audio initialization failed: {:?}", e),
            }
        }
        self.ctx.as_ref()
    }

    /// Fire-and-forget tone emission. Each call schedules an independent
    /// oscillator with its own envelope; overlapping tones from rapid
    /// re-hovers are allowed and nothing cancels a sounding one.
    pub fn play(&mut self, tone: &Tone) {
        let Some(ctx) = self.ensure_context() else {
            return;
        };
        if let Err(e) = schedule_tone(ctx, tone) {
            log::warn!("tone scheduling failed: {:?}", e);
        }
    }
}

impl Default for AudioEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn schedule_tone(ctx: &web::AudioContext, tone: &Tone) -> Result<(), JsValue> {
    let osc = web::OscillatorNode::new(ctx)?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency().set_value(tone.frequency_hz);

    let gain = web::GainNode::new(ctx)?;
    let start = ctx.current_time();
    let end = start + tone.duration.as_secs_f64();
    gain.gain().set_value_at_time(0.0, start)?;
    gain.gain()
        .linear_ramp_to_value_at_time(tone.volume, start + FADE_IN_SEC)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(RELEASE_FLOOR, end)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start()?;
    osc.stop_with_when(end)?;
    Ok(())
}
