use std::time::Duration;

use crate::deck::crossfade::{Crossfade, TickTimer};

#[test]
fn starts_idle_and_opaque() {
    let fade = Crossfade::new(200, 60);
    assert!(!fade.is_fading());
    assert_eq!(fade.opacity(), 255);
}

#[test]
fn restart_drops_opacity_to_zero() {
    let mut fade = Crossfade::new(200, 60);
    fade.restart();
    assert!(fade.is_fading());
    assert_eq!(fade.opacity(), 0);
}

#[test]
fn converges_within_the_duration_budget() {
    // 200 ms at 60 fps must converge within ceil(200 * 60 / 1000) = 12 ticks.
    let mut fade = Crossfade::new(200, 60);
    fade.restart();
    for _ in 0..12 {
        fade.tick();
    }
    assert_eq!(fade.opacity(), 255);
    assert!(!fade.is_fading());
}

#[test]
fn opacity_is_monotonic_and_never_overshoots() {
    let mut fade = Crossfade::new(200, 60);
    fade.restart();
    let mut last = fade.opacity();
    for _ in 0..20 {
        fade.tick();
        assert!(fade.opacity() >= last);
        last = fade.opacity();
    }
    assert_eq!(last, 255);
}

#[test]
fn idle_ticks_are_noops() {
    let mut fade = Crossfade::new(200, 60);
    for _ in 0..5 {
        fade.tick();
    }
    assert_eq!(fade.opacity(), 255);
    assert!(!fade.is_fading());
}

#[test]
fn restart_supersedes_a_fade_in_progress() {
    let mut fade = Crossfade::new(200, 60);
    fade.restart();
    fade.tick();
    assert!(fade.opacity() > 0);
    fade.restart();
    assert_eq!(fade.opacity(), 0);
    assert!(fade.is_fading());
}

#[test]
fn tick_count_is_independent_of_frame_pacing() {
    // 200 ms of wall-clock time must yield the same number of ticks whether
    // frames arrive at 60 Hz or 120 Hz.
    let frame_60 = Duration::from_secs(1) / 60;
    let frame_120 = Duration::from_secs(1) / 120;

    let mut timer = TickTimer::new(60);
    let ticks_60: u32 = (0..12).map(|_| timer.advance(frame_60)).sum();

    let mut timer = TickTimer::new(60);
    let ticks_120: u32 = (0..24).map(|_| timer.advance(frame_120)).sum();

    assert_eq!(ticks_60, 12);
    assert_eq!(ticks_120, 12);
}

#[test]
fn sub_interval_frames_do_not_tick() {
    let mut timer = TickTimer::new(60);
    assert_eq!(timer.advance(Duration::from_millis(5)), 0);
    assert_eq!(timer.advance(Duration::from_millis(5)), 0);
    // The remainder carries over instead of being lost.
    assert_eq!(timer.advance(Duration::from_millis(7)), 1);
}

#[test]
fn fade_converges_on_schedule_at_high_refresh_rates() {
    // Driving the fade through the timer from 120 Hz repaints must not
    // finish it faster than the configured 200 ms.
    let mut fade = Crossfade::new(200, 60);
    let mut timer = TickTimer::new(60);
    fade.restart();

    let frame_120 = Duration::from_secs(1) / 120;
    let mut frames_to_converge = 0;
    for frame in 1..=48 {
        for _ in 0..timer.advance(frame_120) {
            fade.tick();
        }
        if !fade.is_fading() {
            frames_to_converge = frame;
            break;
        }
    }

    // 4 ticks of delta 77 reach 255; at 60 ticks/s that is at least 8 of
    // the 120 Hz frames, never the 4 frames raw per-repaint ticking gives.
    assert!(frames_to_converge >= 8, "converged after {frames_to_converge} frames");
    assert_eq!(fade.opacity(), 255);
}

#[test]
fn stalled_timer_replays_at_most_one_second() {
    let mut timer = TickTimer::new(60);
    assert_eq!(timer.advance(Duration::from_secs(30)), 60);
}

#[test]
fn zero_duration_is_an_instant_cut() {
    let mut fade = Crossfade::new(0, 60);
    fade.restart();
    fade.tick();
    assert_eq!(fade.opacity(), 255);
    assert!(!fade.is_fading());
}
