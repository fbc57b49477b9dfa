// Hero waveform core: oscillation state, hover triggers and curve sampling.
//
// Everything here is pure and host-testable (the native test harness includes
// this file directly, so it must stay self-contained). The web layer owns the
// clock source, the rendered SVG path and the audio emitter; this module only
// decides what shape the curve has at a given instant and which tone a hover
// should produce.

use instant::Instant;
use std::f32::consts::PI;
use std::time::Duration;
use thiserror::Error;

/// Horizontal span of the curve, in SVG user units.
pub const WAVE_WIDTH: f32 = 800.0;
/// Number of line segments per frame; the path has `WAVE_SEGMENTS + 1` points.
pub const WAVE_SEGMENTS: usize = 200;
/// Vertical centerline of the curve.
pub const CENTER_Y: f32 = 10.0;
/// Length of a triggered animation, matched by the tone duration.
pub const TRIGGER_DURATION: Duration = Duration::from_millis(1000);
/// Peak gain of emitted tones.
pub const TONE_VOLUME: f32 = 0.1;

// Idle oscillation tuning.
const IDLE_TARGET_AMPLITUDE: f32 = 10.0;
const IDLE_SMOOTHING: f32 = 0.1;
const IDLE_PHASE_STEP: f32 = 0.01;

// Triggered-mode shaping. Frequencies are normalized against C4 so the
// carrier wavelength tracks pitch; 2.35 confines the wave to roughly the
// middle 85% of the span.
const REFERENCE_FREQUENCY_HZ: f32 = 261.63;
const CENTER_FALLOFF: f32 = 2.35;

const COMPACT_VIEWPORT_MAX_PX: f32 = 768.0;
const COMPACT_AMPLITUDE_SCALE: f32 = 0.4;
const DESKTOP_AMPLITUDE_SCALE: f32 = 1.2;

#[derive(Debug, Error, PartialEq)]
pub enum WaveError {
    #[error("segments must be at least 1, got {0}")]
    InvalidSegments(usize),
    #[error("width must be positive, got {0}")]
    InvalidWidth(f32),
}

/// Identifier of a hover source, parsed once from the element's
/// `data-wave-source` attribute when listeners are wired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceId(pub u8);

impl SourceId {
    /// Id used for untagged or unparsable elements; maps to the default
    /// profile.
    pub const UNKNOWN: SourceId = SourceId(0);

    pub fn from_tag(tag: &str) -> Option<SourceId> {
        tag.trim().parse().ok().map(SourceId)
    }
}

/// Per-source animation amplitude and tone pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceProfile {
    pub amplitude: f32,
    pub frequency_hz: f32,
}

pub const DEFAULT_PROFILE: SourceProfile = SourceProfile {
    amplitude: 140.0,
    frequency_hz: 440.0,
};

/// Fixed mapping from the eight hero circles to (amplitude, pitch) pairs.
/// Any other id falls back to [`DEFAULT_PROFILE`].
pub fn source_profile(id: SourceId) -> SourceProfile {
    let (amplitude, frequency_hz) = match id.0 {
        1 => (250.0, 523.25), // C5
        2 => (190.0, 392.00), // G4
        3 => (170.0, 329.63), // E4
        4 => (230.0, 261.63), // C4
        5 => (210.0, 440.00), // A4
        6 => (270.0, 587.33), // D5
        7 => (200.0, 349.23), // F4
        8 => (220.0, 293.66), // D4
        _ => return DEFAULT_PROFILE,
    };
    SourceProfile {
        amplitude,
        frequency_hz,
    }
}

/// Device class used to scale trigger amplitude. Resolved once when the
/// trigger fires, never re-evaluated mid-animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width_px: f32) -> Self {
        if width_px <= COMPACT_VIEWPORT_MAX_PX {
            ViewportClass::Compact
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn amplitude_multiplier(self) -> f32 {
        match self {
            ViewportClass::Compact => COMPACT_AMPLITUDE_SCALE,
            ViewportClass::Desktop => DESKTOP_AMPLITUDE_SCALE,
        }
    }
}

/// Snapshot of the oscillation at one instant, consumed by [`sample`].
#[derive(Clone, Copy, Debug)]
pub enum OscillationState {
    Idle {
        amplitude: f32,
        phase: f32,
    },
    Triggered {
        /// Elapsed fraction of [`TRIGGER_DURATION`], clamped to [0, 1].
        progress: f32,
        peak_amplitude: f32,
        frequency_hz: f32,
    },
}

/// Fire-and-forget audio request produced by a hover, consumed by the
/// `AudioEmitter`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub volume: f32,
}

/// Validated sampling geometry. Constructed by the caller before the sampler
/// is ever invoked; the sampler itself assumes valid inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveGeometry {
    width: f32,
    segments: usize,
    center_y: f32,
}

impl WaveGeometry {
    pub fn new(width: f32, segments: usize) -> Result<Self, WaveError> {
        if segments == 0 {
            return Err(WaveError::InvalidSegments(segments));
        }
        if !(width > 0.0) {
            return Err(WaveError::InvalidWidth(width));
        }
        Ok(Self {
            width,
            segments,
            center_y: CENTER_Y,
        })
    }

    pub fn segments(&self) -> usize {
        self.segments
    }
}

/// Bell envelope over a triggered animation: 0 at both ends, 1 at the middle.
pub fn bell_envelope(progress: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * PI).sin()
}

/// Quadratic falloff confining the triggered wave to the middle of the span.
/// Reaches 1 at the center and 0 at `1 / 2.35 ≈ 0.4255` from it.
pub fn center_envelope(distance_from_center: f32) -> f32 {
    let normalized = distance_from_center * CENTER_FALLOFF;
    (1.0 - normalized).max(0.0).powi(2)
}

/// Produce the ordered `(x, y)` samples describing the curve for `state`.
/// The first point is always the pinned `(0, centerline)` path origin.
pub fn sample(state: &OscillationState, geom: WaveGeometry) -> Vec<[f32; 2]> {
    let mut points = Vec::with_capacity(geom.segments + 1);
    points.push([0.0, geom.center_y]);
    for i in 1..=geom.segments {
        let t = i as f32 / geom.segments as f32;
        let x = t * geom.width;
        let height = match *state {
            OscillationState::Idle { amplitude, phase } => {
                let wave_phase = phase + t * PI * 4.0;
                // sin(t*pi) pins both endpoints to the centerline.
                wave_phase.sin() * amplitude * (t * PI).sin()
            }
            OscillationState::Triggered {
                progress,
                peak_amplitude,
                frequency_hz,
            } => {
                let current = peak_amplitude * bell_envelope(progress);
                let envelope = center_envelope((t - 0.5).abs());
                if envelope > 0.0 {
                    let factor = frequency_hz / REFERENCE_FREQUENCY_HZ;
                    let wave_phase = (t - 0.5) * PI * 4.0 * factor;
                    wave_phase.sin() * current * envelope
                } else {
                    0.0
                }
            }
        };
        points.push([x, geom.center_y + height]);
    }
    points
}

/// Render a sample sequence as an SVG path description (`M … L …`).
pub fn path_data(points: &[[f32; 2]]) -> String {
    use std::fmt::Write;
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        _ = write!(d, "{} {:.2} {:.2}", cmd, p[0], p[1]);
    }
    d
}

struct TriggerState {
    started: Instant,
    peak_amplitude: f32,
    frequency_hz: f32,
}

impl TriggerState {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        (elapsed / TRIGGER_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Owns the oscillation mode and its accumulators for the page session.
///
/// State machine: `Idle --on_hover--> Triggered --(progress >= 1, observed by
/// advance)--> Idle`, with `Triggered --on_hover--> Triggered` restarting the
/// animation under the new source's parameters. The idle amplitude and phase
/// accumulators persist across triggers.
pub struct WaveController {
    idle_amplitude: f32,
    idle_phase: f32,
    trigger: Option<TriggerState>,
}

impl WaveController {
    pub fn new() -> Self {
        Self {
            idle_amplitude: 0.0,
            idle_phase: 0.0,
            trigger: None,
        }
    }

    /// Handle a hover from `source`, unconditionally replacing any in-flight
    /// trigger, and return the tone to emit alongside the animation. Never
    /// fails; re-triggering mid-animation is a valid interrupt, not an error.
    pub fn on_hover(&mut self, source: SourceId, viewport: ViewportClass, now: Instant) -> Tone {
        let profile = source_profile(source);
        self.trigger = Some(TriggerState {
            started: now,
            peak_amplitude: profile.amplitude * viewport.amplitude_multiplier(),
            frequency_hz: profile.frequency_hz,
        });
        Tone {
            frequency_hz: profile.frequency_hz,
            duration: TRIGGER_DURATION,
            volume: TONE_VOLUME,
        }
    }

    /// Observe trigger completion. Returns true exactly once per trigger,
    /// on the frame where progress reaches 1, so the caller can swap to the
    /// settled visual preset. Idle smoothing is the frame loop's job, not
    /// this method's.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let Some(trigger) = &self.trigger {
            if trigger.progress(now) >= 1.0 {
                self.trigger = None;
                return true;
            }
        }
        false
    }

    /// Per-frame idle smoothing: the amplitude relaxes toward its resting
    /// target at 10% of the remaining distance per frame (geometric, never
    /// overshoots) and the phase advances by a fixed step. A no-op while a
    /// trigger is in flight.
    pub fn step_idle(&mut self) {
        if self.trigger.is_none() {
            self.idle_amplitude += (IDLE_TARGET_AMPLITUDE - self.idle_amplitude) * IDLE_SMOOTHING;
            self.idle_phase += IDLE_PHASE_STEP;
        }
    }

    /// Snapshot the oscillation for sampling at `now`.
    pub fn state(&self, now: Instant) -> OscillationState {
        match &self.trigger {
            Some(trigger) => OscillationState::Triggered {
                progress: trigger.progress(now),
                peak_amplitude: trigger.peak_amplitude,
                frequency_hz: trigger.frequency_hz,
            },
            None => OscillationState::Idle {
                amplitude: self.idle_amplitude,
                phase: self.idle_phase,
            },
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.trigger.is_some()
    }

    pub fn idle_amplitude(&self) -> f32 {
        self.idle_amplitude
    }
}

impl Default for WaveController {
    fn default() -> Self {
        Self::new()
    }
}
