//! Progress-window triggers and the tween commands they fire.

use crate::error::ParseError;
use crate::tween::Tween;
use smallvec::{smallvec, SmallVec};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressWindow {
    pub start: f32,
    pub end: f32,
}

impl ProgressWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn region(&self, progress: f32) -> Region {
        if progress < self.start {
            Region::Before
        } else if progress > self.end {
            Region::After
        } else {
            Region::Inside
        }
    }

    pub fn contains(&self, progress: f32) -> bool {
        self.region(progress) == Region::Inside
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Before,
    Inside,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Crossed `start` moving forward.
    Enter,
    /// Crossed `end` moving forward.
    Leave,
    /// Crossed `end` moving backward.
    EnterBack,
    /// Crossed `start` moving backward.
    LeaveBack,
}

pub type TriggerEvents = SmallVec<[TriggerEvent; 2]>;

/// Starts out `Before` its window, so a trigger created past its start
/// fires `Enter` on the first update.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTrigger {
    window: ProgressWindow,
    region: Region,
}

impl ScrollTrigger {
    pub fn new(window: ProgressWindow) -> Self {
        Self {
            window,
            region: Region::Before,
        }
    }

    pub fn window(&self) -> ProgressWindow {
        self.window
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Move the window without firing anything; the next `update` reports
    /// the crossings relative to the new edges.
    pub fn set_window(&mut self, window: ProgressWindow) {
        self.window = window;
    }

    pub fn update(&mut self, progress: f32) -> TriggerEvents {
        let next = self.window.region(progress);
        let events = crossings(self.region, next);
        self.region = next;
        events
    }
}

fn crossings(from: Region, to: Region) -> TriggerEvents {
    use Region::*;
    use TriggerEvent::*;
    match (from, to) {
        (Before, Inside) => smallvec![Enter],
        (Before, After) => smallvec![Enter, Leave],
        (Inside, After) => smallvec![Leave],
        (Inside, Before) => smallvec![LeaveBack],
        (After, Inside) => smallvec![EnterBack],
        (After, Before) => smallvec![EnterBack, LeaveBack],
        _ => SmallVec::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
}

impl ToggleAction {
    pub fn apply(self, tween: &mut Tween) {
        match self {
            ToggleAction::None => {}
            ToggleAction::Play => tween.play(),
            ToggleAction::Pause => tween.pause(),
            ToggleAction::Resume => tween.resume(),
            ToggleAction::Reverse => tween.reverse(),
            ToggleAction::Restart => tween.restart(),
            ToggleAction::Reset => tween.reset(),
            ToggleAction::Complete => tween.complete(),
        }
    }
}

impl FromStr for ToggleAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ToggleAction::None),
            "play" => Ok(ToggleAction::Play),
            "pause" => Ok(ToggleAction::Pause),
            "resume" => Ok(ToggleAction::Resume),
            "reverse" => Ok(ToggleAction::Reverse),
            "restart" => Ok(ToggleAction::Restart),
            "reset" => Ok(ToggleAction::Reset),
            "complete" => Ok(ToggleAction::Complete),
            other => Err(ParseError::unknown("toggle action", other)),
        }
    }
}

/// What to do on enter, leave, enter-back and leave-back, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Play on the way in, rewind when scrolled back above the start.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// Run only while inside the window, keeping position while outside.
    pub const PLAY_PAUSE_RESUME: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::Pause,
        on_enter_back: ToggleAction::Resume,
        on_leave_back: ToggleAction::Pause,
    };

    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ParseError;

    /// Four space-separated actions, e.g. `"play pause resume pause"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: SmallVec<[&str; 4]> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(ParseError::unknown("toggle actions", s));
        }
        Ok(Self {
            on_enter: parts[0].parse()?,
            on_leave: parts[1].parse()?,
            on_enter_back: parts[2].parse()?,
            on_leave_back: parts[3].parse()?,
        })
    }
}
