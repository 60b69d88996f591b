pub mod constants;
pub mod contact;
pub mod ease;
pub mod error;
pub mod hero;
pub mod magnetic;
pub mod particles;
pub mod reveal;
pub mod routes;
pub mod scroll;
pub mod spring;
pub mod stages;
pub mod style;
pub mod track;
pub mod trigger;
pub mod tween;

pub use error::ParseError;
pub use scroll::{PinnedSection, ScrollSession};
pub use stages::{SectionFrame, StageController, StageFrame, MANUFACTURING_STAGES};
pub use style::{ElementStyle, Rgb};
pub use track::{Indicator, StageTrack};
