//! Timed playheads, advanced by frame deltas rather than scroll position.

use crate::ease::Ease;
use std::time::Duration;

/// Durations are clamped to this to keep divisions finite.
const MIN_DURATION_SEC: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Extra cycles after the first (total plays = n + 1).
    Times(u32),
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Playing,
    Paused,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Forward,
    Backward,
}

#[derive(Clone, Debug)]
pub struct Tween {
    duration: f32,
    delay: f32,
    repeat: Repeat,
    yoyo: bool,
    ease: Ease,
    time: f32,
    delay_left: f32,
    cycle: u32,
    heading: Heading,
    state: Playback,
}

impl Tween {
    pub fn new(duration_sec: f32) -> Self {
        Self {
            duration: duration_sec.max(MIN_DURATION_SEC),
            delay: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            ease: Ease::Linear,
            time: 0.0,
            delay_left: 0.0,
            cycle: 0,
            heading: Heading::Forward,
            state: Playback::Idle,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay_sec: f32) -> Self {
        self.delay = delay_sec.max(0.0);
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn duration_sec(&self) -> f32 {
        self.duration
    }

    pub fn time_sec(&self) -> f32 {
        self.time
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn playback(&self) -> Playback {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == Playback::Playing
    }

    pub fn is_at_start(&self) -> bool {
        self.cycle == 0 && self.time <= 0.0
    }

    pub fn is_at_end(&self) -> bool {
        self.state == Playback::Finished && self.heading == Heading::Forward
    }

    /// Linear position inside the current cycle, mirrored on odd yoyo cycles.
    pub fn progress(&self) -> f32 {
        let raw = (self.time / self.duration).clamp(0.0, 1.0);
        if self.yoyo && self.cycle % 2 == 1 {
            1.0 - raw
        } else {
            raw
        }
    }

    pub fn eased(&self) -> f32 {
        self.ease.apply(self.progress())
    }

    pub fn play(&mut self) {
        if self.is_at_start() && self.state != Playback::Playing {
            self.delay_left = self.delay;
        }
        self.heading = Heading::Forward;
        if self.state == Playback::Finished && self.time >= self.duration {
            // Already at the end; nothing left to play.
            return;
        }
        self.state = Playback::Playing;
    }

    pub fn reverse(&mut self) {
        self.heading = Heading::Backward;
        self.delay_left = 0.0;
        if self.is_at_start() {
            self.state = Playback::Finished;
            return;
        }
        self.state = Playback::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == Playback::Playing {
            self.state = Playback::Paused;
        }
    }

    /// Continue from the current position; a tween that never ran starts playing.
    pub fn resume(&mut self) {
        match self.state {
            Playback::Paused => self.state = Playback::Playing,
            Playback::Idle => self.play(),
            _ => {}
        }
    }

    pub fn restart(&mut self) {
        self.time = 0.0;
        self.cycle = 0;
        self.heading = Heading::Forward;
        self.delay_left = self.delay;
        self.state = Playback::Playing;
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.cycle = 0;
        self.delay_left = 0.0;
        self.heading = Heading::Forward;
        self.state = Playback::Idle;
    }

    /// Jump to the end of the final cycle (the end of the current cycle for
    /// infinite tweens).
    pub fn complete(&mut self) {
        if let Repeat::Times(n) = self.repeat {
            self.cycle = n;
        }
        self.time = self.duration;
        self.delay_left = 0.0;
        self.heading = Heading::Forward;
        self.state = Playback::Finished;
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.state != Playback::Playing {
            return;
        }
        let mut dt = dt.as_secs_f32();
        if dt <= 0.0 {
            return;
        }
        match self.heading {
            Heading::Forward => {
                if self.delay_left > 0.0 {
                    let used = dt.min(self.delay_left);
                    self.delay_left -= used;
                    dt -= used;
                    if dt <= 0.0 {
                        return;
                    }
                }
                self.time += dt;
                if self.time >= self.duration {
                    let wraps = (self.time / self.duration).floor() as u32;
                    let allowed = match self.repeat {
                        Repeat::Once => 0,
                        Repeat::Times(n) => n.saturating_sub(self.cycle),
                        Repeat::Infinite => u32::MAX,
                    };
                    if wraps > allowed {
                        self.cycle = self.cycle.saturating_add(allowed);
                        self.time = self.duration;
                        self.state = Playback::Finished;
                    } else {
                        self.cycle = self.cycle.saturating_add(wraps);
                        self.time = (self.time - wraps as f32 * self.duration).max(0.0);
                    }
                }
            }
            Heading::Backward => {
                self.time -= dt;
                if self.time <= 0.0 {
                    let unwinds = ((-self.time) / self.duration).floor() as u32 + 1;
                    if unwinds > self.cycle {
                        self.cycle = 0;
                        self.time = 0.0;
                        self.state = Playback::Finished;
                    } else {
                        self.cycle -= unwinds;
                        self.time = (self.time + unwinds as f32 * self.duration)
                            .min(self.duration);
                    }
                }
            }
        }
    }
}

/// Local progress of item `index` inside a staggered group whose shared clock
/// reads `time_sec`.
pub fn staggered_progress(time_sec: f32, index: usize, stagger_sec: f32, duration_sec: f32) -> f32 {
    let start = index as f32 * stagger_sec;
    ((time_sec - start) / duration_sec.max(MIN_DURATION_SEC)).clamp(0.0, 1.0)
}

/// Length of a staggered group's shared clock.
pub fn staggered_duration(count: usize, stagger_sec: f32, duration_sec: f32) -> f32 {
    count.saturating_sub(1) as f32 * stagger_sec + duration_sec
}

/// Linear 0..1 value that chases a 0/1 target at a fixed rate. Used for
/// hover/press style flags.
#[derive(Clone, Copy, Debug)]
pub struct Ramp {
    value: f32,
    target: f32,
    duration: f32,
}

impl Ramp {
    pub fn new(duration_sec: f32) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            duration: duration_sec.max(MIN_DURATION_SEC),
        }
    }

    pub fn set_on(&mut self, on: bool) {
        self.target = if on { 1.0 } else { 0.0 };
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    pub fn advance(&mut self, dt: Duration) {
        let step = dt.as_secs_f32() / self.duration;
        if self.value < self.target {
            self.value = (self.value + step).min(self.target);
        } else if self.value > self.target {
            self.value = (self.value - step).max(self.target);
        }
    }
}

/// Exponential follower that lets a displayed value lag behind a live one,
/// catching up in roughly `catch_up_sec`.
#[derive(Clone, Copy, Debug)]
pub struct Scrub {
    value: f32,
    catch_up: f32,
    initialized: bool,
}

/// Below this distance the follower snaps onto its target.
const SCRUB_SNAP_EPSILON: f32 = 1e-4;

impl Scrub {
    pub fn new(catch_up_sec: f32) -> Self {
        Self {
            value: 0.0,
            catch_up: catch_up_sec.max(0.0),
            initialized: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move toward `target`; the first call (and a zero catch-up) jumps.
    pub fn follow(&mut self, target: f32, dt: Duration) -> f32 {
        if !self.initialized || self.catch_up <= 0.0 {
            self.value = target;
            self.initialized = true;
            return self.value;
        }
        // ~98% of the gap is closed after `catch_up` seconds.
        let tau = self.catch_up / 4.0;
        let alpha = 1.0 - (-dt.as_secs_f32() / tau).exp();
        self.value += (target - self.value) * alpha;
        if (target - self.value).abs() < SCRUB_SNAP_EPSILON {
            self.value = target;
        }
        self.value
    }
}
