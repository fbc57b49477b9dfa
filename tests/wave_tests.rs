// Host-side tests for the pure waveform core.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod wave {
    include!("../src/core/wave.rs");
}

use instant::Instant;
use std::time::Duration;
use wave::*;

fn geometry() -> WaveGeometry {
    WaveGeometry::new(WAVE_WIDTH, WAVE_SEGMENTS).unwrap()
}

#[test]
fn geometry_rejects_zero_segments() {
    assert_eq!(
        WaveGeometry::new(WAVE_WIDTH, 0),
        Err(WaveError::InvalidSegments(0)),
    );
}

#[test]
fn geometry_rejects_non_positive_width() {
    assert_eq!(
        WaveGeometry::new(0.0, WAVE_SEGMENTS),
        Err(WaveError::InvalidWidth(0.0)),
    );
    assert!(WaveGeometry::new(-800.0, WAVE_SEGMENTS).is_err());
}

#[test]
fn sample_count_is_segments_plus_one() {
    let state = OscillationState::Idle {
        amplitude: 10.0,
        phase: 0.0,
    };
    let points = sample(&state, geometry());
    assert_eq!(points.len(), WAVE_SEGMENTS + 1);
}

#[test]
fn idle_endpoints_are_pinned_to_centerline() {
    let state = OscillationState::Idle {
        amplitude: 37.0,
        phase: 1.3,
    };
    let points = sample(&state, geometry());
    assert_eq!(points[0], [0.0, CENTER_Y]);
    let last = points[WAVE_SEGMENTS];
    assert!((last[0] - WAVE_WIDTH).abs() < 1e-3);
    // sin(t*pi) zeroes the envelope at t=1 up to f32 rounding.
    assert!((last[1] - CENTER_Y).abs() < 1e-3);
}

#[test]
fn idle_heights_stay_within_amplitude() {
    let state = OscillationState::Idle {
        amplitude: 25.0,
        phase: 0.7,
    };
    for p in sample(&state, geometry()) {
        assert!((p[1] - CENTER_Y).abs() <= 25.0 + 1e-4);
    }
}

#[test]
fn bell_envelope_is_zero_at_ends_and_one_at_middle() {
    assert!(bell_envelope(0.0).abs() < 1e-6);
    assert!((bell_envelope(0.5) - 1.0).abs() < 1e-6);
    assert!(bell_envelope(1.0).abs() < 1e-6);
    // Clamped outside the valid range.
    assert!(bell_envelope(-0.5).abs() < 1e-6);
    assert!(bell_envelope(1.5).abs() < 1e-6);
}

#[test]
fn center_envelope_peaks_at_center_and_dies_at_falloff_root() {
    assert!((center_envelope(0.0) - 1.0).abs() < 1e-6);
    // Root of 1 - 2.35*d.
    let root = 1.0 / 2.35;
    assert!(center_envelope(root - 1e-3) > 0.0);
    assert_eq!(center_envelope(root + 1e-3), 0.0);
    assert_eq!(center_envelope(0.5), 0.0);
    // Strictly decreasing on the support.
    let mut prev = center_envelope(0.0);
    for i in 1..40 {
        let d = i as f32 * 0.01;
        let v = center_envelope(d);
        assert!(v < prev, "not decreasing at d={d}");
        prev = v;
    }
}

#[test]
fn unknown_source_uses_default_profile() {
    assert_eq!(source_profile(SourceId(42)), DEFAULT_PROFILE);
    assert_eq!(source_profile(SourceId::UNKNOWN), DEFAULT_PROFILE);
    assert_eq!(DEFAULT_PROFILE.amplitude, 140.0);
    assert_eq!(DEFAULT_PROFILE.frequency_hz, 440.0);
}

#[test]
fn source_tag_parsing() {
    assert_eq!(SourceId::from_tag("4"), Some(SourceId(4)));
    assert_eq!(SourceId::from_tag(" 7 "), Some(SourceId(7)));
    assert_eq!(SourceId::from_tag("yellow"), None);
    assert_eq!(SourceId::from_tag(""), None);
}

#[test]
fn hover_returns_tone_matching_profile() {
    let mut controller = WaveController::new();
    let tone = controller.on_hover(SourceId(1), ViewportClass::Desktop, Instant::now());
    assert_eq!(tone.frequency_hz, 523.25);
    assert_eq!(tone.duration, TRIGGER_DURATION);
    assert_eq!(tone.volume, TONE_VOLUME);
    assert!(controller.is_triggered());
}

#[test]
fn retrigger_restarts_and_replaces_parameters() {
    let mut controller = WaveController::new();
    let t0 = Instant::now();
    controller.on_hover(SourceId(1), ViewportClass::Desktop, t0);
    let mid = t0 + Duration::from_millis(300);
    controller.on_hover(SourceId(3), ViewportClass::Desktop, mid);

    // Progress restarted from the second hover; old parameters discarded.
    match controller.state(mid) {
        OscillationState::Triggered {
            progress,
            peak_amplitude,
            frequency_hz,
        } => {
            assert!(progress.abs() < 1e-6);
            assert!((peak_amplitude - 170.0 * 1.2).abs() < 1e-3);
            assert!((frequency_hz - 329.63).abs() < 1e-3);
        }
        other => panic!("expected triggered state, got {other:?}"),
    }
}

#[test]
fn idle_amplitude_converges_within_45_steps() {
    let mut controller = WaveController::new();
    assert_eq!(controller.idle_amplitude(), 0.0);
    for _ in 0..45 {
        controller.step_idle();
    }
    // Geometric convergence at 0.9 per step toward the resting target of 10.
    assert!((controller.idle_amplitude() - 10.0).abs() < 0.1);
}

#[test]
fn step_idle_is_inert_while_triggered() {
    let mut controller = WaveController::new();
    controller.on_hover(SourceId(2), ViewportClass::Desktop, Instant::now());
    let before = controller.idle_amplitude();
    for _ in 0..10 {
        controller.step_idle();
    }
    assert_eq!(controller.idle_amplitude(), before);
}

#[test]
fn advance_settles_exactly_once_after_duration() {
    let mut controller = WaveController::new();
    let t0 = Instant::now();
    controller.on_hover(SourceId(5), ViewportClass::Desktop, t0);

    assert!(!controller.advance(t0 + Duration::from_millis(999)));
    assert!(controller.is_triggered());

    let done = t0 + Duration::from_millis(1001);
    assert!(controller.advance(done));
    assert!(!controller.is_triggered());
    // Only reported once per trigger.
    assert!(!controller.advance(done));
    assert!(matches!(
        controller.state(done),
        OscillationState::Idle { .. }
    ));
}

#[test]
fn idle_accumulators_survive_a_trigger() {
    let mut controller = WaveController::new();
    for _ in 0..20 {
        controller.step_idle();
    }
    let amp = controller.idle_amplitude();
    assert!(amp > 0.0);

    let t0 = Instant::now();
    controller.on_hover(SourceId(6), ViewportClass::Desktop, t0);
    controller.advance(t0 + Duration::from_millis(1500));
    assert_eq!(controller.idle_amplitude(), amp);
}

#[test]
fn desktop_hover_on_source_4_peaks_at_276() {
    let mut controller = WaveController::new();
    let t0 = Instant::now();
    let tone = controller.on_hover(SourceId(4), ViewportClass::Desktop, t0);
    assert!((tone.frequency_hz - 261.63).abs() < 1e-3);

    let mid = t0 + Duration::from_millis(500);
    let state = controller.state(mid);
    match state {
        OscillationState::Triggered {
            progress,
            peak_amplitude,
            ..
        } => {
            assert!((progress - 0.5).abs() < 1e-3);
            assert!((peak_amplitude - 276.0).abs() < 1e-3);
        }
        other => panic!("expected triggered state, got {other:?}"),
    }

    let points = sample(&state, geometry());
    // The exact center sample sits on a zero-crossing of the carrier
    // (wavePhase = 0), so its height is exactly zero. Original behavior,
    // reproduced faithfully.
    let center = points[WAVE_SEGMENTS / 2];
    assert_eq!(center[1], CENTER_Y);

    // The extrema nearest the center carry the real peak, shaped by the
    // center envelope: well above half the peak amplitude, never above it.
    let max_abs = points
        .iter()
        .map(|p| (p[1] - CENTER_Y).abs())
        .fold(0.0f32, f32::max);
    assert!(max_abs > 0.5 * 276.0, "max height {max_abs} too small");
    assert!(max_abs <= 276.0 + 1e-3, "max height {max_abs} exceeds peak");
}

#[test]
fn compact_viewport_scales_source_4_to_92() {
    let mut controller = WaveController::new();
    let t0 = Instant::now();
    controller.on_hover(SourceId(4), ViewportClass::Compact, t0);
    match controller.state(t0) {
        OscillationState::Triggered { peak_amplitude, .. } => {
            assert!((peak_amplitude - 92.0).abs() < 1e-3);
        }
        other => panic!("expected triggered state, got {other:?}"),
    }
}

#[test]
fn viewport_class_threshold() {
    assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Compact);
    assert_eq!(ViewportClass::from_width(769.0), ViewportClass::Desktop);
    assert_eq!(ViewportClass::Compact.amplitude_multiplier(), 0.4);
    assert_eq!(ViewportClass::Desktop.amplitude_multiplier(), 1.2);
}

#[test]
fn triggered_wave_is_confined_to_the_center_region() {
    let state = OscillationState::Triggered {
        progress: 0.5,
        peak_amplitude: 276.0,
        frequency_hz: 587.33,
    };
    let points = sample(&state, geometry());
    for (i, p) in points.iter().enumerate() {
        let t = i as f32 / WAVE_SEGMENTS as f32;
        if (t - 0.5).abs() > 1.0 / 2.35 {
            assert_eq!(p[1], CENTER_Y, "sample at t={t} outside support moved");
        }
    }
}

#[test]
fn triggered_envelope_endpoints_are_flat() {
    for progress in [0.0, 1.0] {
        let state = OscillationState::Triggered {
            progress,
            peak_amplitude: 276.0,
            frequency_hz: 261.63,
        };
        for p in sample(&state, geometry()) {
            assert!((p[1] - CENTER_Y).abs() < 1e-3);
        }
    }
}

#[test]
fn path_data_starts_at_origin_and_has_one_command_per_sample() {
    let state = OscillationState::Idle {
        amplitude: 10.0,
        phase: 0.0,
    };
    let points = sample(&state, geometry());
    let d = path_data(&points);
    assert!(d.starts_with("M 0.00 10.00"), "unexpected start: {d}");
    assert_eq!(d.matches(" L ").count(), WAVE_SEGMENTS);
}
