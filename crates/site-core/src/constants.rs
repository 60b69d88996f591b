// Shared motion tuning for the site's animated components.
// Durations are seconds, distances CSS pixels, angles degrees.

// Pinned process scroller: viewport fractions a stage's left edge must cross
pub const STAGE_ENTER_VIEWPORT_FRACTION: f32 = 0.8; // reveal plays
pub const STAGE_EXIT_VIEWPORT_FRACTION: f32 = 0.2;
pub const EMBELLISH_ENTER_VIEWPORT_FRACTION: f32 = 0.6; // embellishment sub-window
pub const EMBELLISH_EXIT_VIEWPORT_FRACTION: f32 = 0.4;

// Stage reveal (icon, text, animation parts)
pub const STAGE_PART_COUNT: usize = 3;
pub const STAGE_REVEAL_DURATION_SEC: f32 = 0.8;
pub const STAGE_REVEAL_STAGGER_SEC: f32 = 0.2;
pub const STAGE_REVEAL_OFFSET_Y: f32 = 50.0;
pub const STAGE_REVEAL_SCALE_FROM: f32 = 0.8;

// Time for the displayed scroll position to catch up with the real one
pub const SCRUB_CATCH_UP_SEC: f32 = 1.0;
pub const PIN_START_TOLERANCE_PX: f32 = 0.5; // section top drift that forces a relayout

// Stage embellishments
pub const ROLLER_TURN_SEC: f32 = 2.0; // one full turn
pub const ARM_SWING_SEC: f32 = 1.5; // one half-swing
pub const ARM_SWING_DEG: f32 = 15.0;
pub const CHECKMARK_POP_SEC: f32 = 0.8;
pub const CHECKMARK_FROM_DEG: f32 = -180.0;
pub const BACK_OUT_OVERSHOOT: f32 = 1.7;
pub const PACKAGE_DROP_SEC: f32 = 0.6;
pub const PACKAGE_STAGGER_SEC: f32 = 0.2;
pub const PACKAGE_OFFSET_Y: f32 = 50.0;

// Magnetic button
pub const MAGNETIC_MAX_DISTANCE: f32 = 100.0; // capture radius from the box centre
pub const MAGNETIC_DAMPING_FACTOR: f32 = 0.3; // share of the pointer offset applied at the centre
pub const MAGNETIC_SPRING_STIFFNESS: f32 = 700.0;
pub const TILT_INPUT_RANGE: f32 = 50.0; // offset at which tilt saturates
pub const TILT_MAX_DEG: f32 = 10.0;
pub const HOVER_SCALE: f32 = 1.05;
pub const HOVER_SCALE_SEC: f32 = 0.2;
pub const PRESS_SCALE: f32 = 0.95;
pub const PRESS_SCALE_SEC: f32 = 0.1;
pub const GLOW_FADE_SEC: f32 = 0.3;
pub const GLOW_SCALE_FROM: f32 = 0.8;
pub const GLOW_SCALE_TO: f32 = 1.1;

// Viewport reveal wrapper
pub const REVEAL_DISTANCE: f32 = 50.0;
pub const REVEAL_DURATION_SEC: f32 = 0.6;
pub const REVEAL_THRESHOLD: f32 = 0.1; // visible fraction that triggers
pub const STAGGER_DELAY_SEC: f32 = 0.1;
pub const STAGGER_ITEM_OFFSET_Y: f32 = 20.0;
pub const STAGGER_ITEM_DURATION_SEC: f32 = 0.5;

// Letter cascade headline
pub const LETTER_STAGGER_SEC: f32 = 0.05;
pub const LETTER_OFFSET_Y: f32 = 50.0;
pub const LETTER_ROTATE_X_DEG: f32 = 90.0;
pub const LETTER_SCALE_FROM: f32 = 0.8;
pub const LETTER_SPRING_STIFFNESS: f32 = 300.0;
pub const LETTER_SPRING_DAMPING: f32 = 25.0; // raw coefficient (underdamped)

// Hero banner intro
pub const HERO_INTRO_DELAY_SEC: f32 = 1.0;
pub const HERO_LETTER_OFFSET_Y: f32 = 100.0;
pub const HERO_LETTER_DURATION_SEC: f32 = 0.8;
pub const HERO_SUBTITLE_OFFSET_Y: f32 = 50.0;
pub const HERO_SUBTITLE_DURATION_SEC: f32 = 1.0;
pub const HERO_SUBTITLE_OVERLAP_SEC: f32 = 0.5;
pub const HERO_BUTTONS_OFFSET_Y: f32 = 30.0;
pub const HERO_BUTTONS_DURATION_SEC: f32 = 0.8;
pub const HERO_BUTTONS_OVERLAP_SEC: f32 = 0.3;

// Hero banner scroll scrub
pub const HERO_TEXT_FADE_END: f32 = 0.5; // share of hero height over which the headline fades
pub const HERO_TEXT_LIFT_Y: f32 = -100.0;
pub const HERO_TEXT_SCALE_TO: f32 = 0.8;
pub const HERO_SCENE_ROTATE_Y_DEG: f32 = 90.0;
pub const HERO_BACKGROUND_FROM: [u8; 3] = [0x0f, 0x17, 0x2a]; // slate-900
pub const HERO_BACKGROUND_TO: [u8; 3] = [0x1e, 0x29, 0x3b]; // slate-800

// Particle background
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_SEED: u64 = 0x5EED_A4B0;
pub const PARTICLE_DRIFT: [f32; 2] = [15.0, -30.0]; // peak x/y excursion
pub const PARTICLE_PEAK_SCALE: f32 = 1.2;
pub const PARTICLE_FADE_TO: f32 = 0.3; // share of base opacity at the loop peak
pub const PARALLAX_SCROLL_RANGE: f32 = 1000.0;
pub const PARALLAX_SHIFT_Y: f32 = -200.0;
pub const PARTICLE_PALETTE: [[u8; 3]; 4] = [
    [0x3b, 0x82, 0xf6],
    [0x60, 0xa5, 0xfa],
    [0x93, 0xc5, 0xfd],
    [0xdb, 0xea, 0xfe],
];
