// Markup contract and frame pacing for the browser host.
// Components find their elements through these attribute selectors; a page
// that lacks one simply doesn't get that component.

// Longest frame step fed to the animations (seconds); longer gaps (tab in
// background, debugger pause) are treated as this
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Pinned manufacturing-process scroller
pub const PROCESS_SELECTOR: &str = "[data-process]";
pub const PROCESS_PIN_SELECTOR: &str = "[data-process-pin]";
pub const PROCESS_TRACK_SELECTOR: &str = "[data-process-track]";
pub const STAGE_ATTR: &str = "data-stage";
pub const STAGE_SELECTOR: &str = "[data-stage]";
pub const STAGE_PART_SELECTOR: &str = "[data-stage-part]";
pub const STAGE_DOT_SELECTOR: &str = "[data-stage-dot]";
pub const EMBELLISH_ATTR: &str = "data-embellish";
pub const STAGE_STATE_ATTR: &str = "data-state";
pub const PINNED_ATTR: &str = "data-pinned";
pub const CURRENT_STAGE_ATTR: &str = "data-current-stage";
pub const PROGRESS_VAR: &str = "--process-progress";

// Magnetic buttons
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_GLOW_SELECTOR: &str = "[data-magnetic-glow]";
pub const MAGNETIC_ATTRS: [&str; 2] = ["data-magnetic", "data-magnetic-radius"];

// Viewport reveals
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_ATTRS: [&str; 7] = [
    "data-reveal",
    "data-reveal-distance",
    "data-reveal-duration",
    "data-reveal-delay",
    "data-reveal-once",
    "data-reveal-threshold",
    "data-reveal-ease",
];
pub const STAGGER_SELECTOR: &str = "[data-stagger]";
pub const STAGGER_ITEM_SELECTOR: &str = "[data-stagger-item]";
pub const STAGGER_ATTRS: [&str; 3] = ["data-stagger", "data-reveal-delay", "data-reveal-once"];
pub const LETTERS_SELECTOR: &str = "[data-letters]";
pub const LETTER_SELECTOR: &str = "[data-letter]";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

// Hero banner
pub const HERO_SELECTOR: &str = "[data-hero]";
pub const HERO_TITLE_SELECTOR: &str = "[data-hero-title]";
pub const HERO_LETTER_CLASS: &str = "title-letter";
pub const HERO_SUBTITLE_SELECTOR: &str = "[data-hero-subtitle]";
pub const HERO_BUTTONS_SELECTOR: &str = "[data-hero-buttons]";
pub const HERO_HEADLINE_SELECTOR: &str = "[data-hero-headline]";
pub const HERO_SCENE_SELECTOR: &str = "[data-hero-scene]";

// Particle background
pub const PARTICLES_SELECTOR: &str = "canvas[data-particles]";

// Contact form
pub const CONTACT_FORM_SELECTOR: &str = "form[data-contact-form]";
pub const CONTACT_ACK_SELECTOR: &str = "[data-contact-ack]";
pub const HIDDEN_CLASS: &str = "hidden";

// Mirrored onto <body> on resize
pub const BREAKPOINT_ATTR: &str = "data-breakpoint";

// Navbar links for the current route get aria-current="page"
pub const NAV_LINK_SELECTOR: &str = "nav a[href]";
