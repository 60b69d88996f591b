// Pure helpers shared by the DOM bindings. Nothing in here touches the
// browser, so the host tests include this file directly.

use crate::constants::{EMBELLISH_ATTR, MAX_FRAME_DT_SEC};
use site_core::reveal::Glyph;
use site_core::stages::Embellishment;
use site_core::ParseError;
use std::fmt::Write;
use std::time::Duration;

/// Frame step handed to the animations.
pub fn clamp_frame_dt(dt: Duration) -> Duration {
    dt.min(Duration::from_secs_f32(MAX_FRAME_DT_SEC))
}

/// Start from `config` and apply each attribute in turn. Bad values are
/// logged and skipped.
pub fn configure<T>(
    mut config: T,
    attrs: &[(&'static str, String)],
    apply: fn(&mut T, &str, &str) -> Result<(), ParseError>,
) -> T {
    for (name, value) in attrs {
        if let Err(e) = apply(&mut config, name, value) {
            log::warn!("[page] ignoring {}=\"{}\": {}", name, value, e);
        }
    }
    config
}

/// The `data-embellish` value that marks targets for `kind`.
pub fn embellishment_name(kind: Embellishment) -> &'static str {
    match kind {
        Embellishment::Rollers => "roller",
        Embellishment::SwingArm => "arm",
        Embellishment::Checkmark => "checkmark",
        Embellishment::Packages { .. } => "package",
    }
}

pub fn embellish_selector(kind: Embellishment) -> String {
    format!("[{}=\"{}\"]", EMBELLISH_ATTR, embellishment_name(kind))
}

fn escape_into(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        c => out.push(c),
    }
}

/// One inline-block span per letter; whitespace stays as plain text so the
/// line can still wrap between words.
pub fn glyph_markup(glyphs: &[Glyph], class: &str) -> String {
    let mut out = String::with_capacity(glyphs.len() * 48);
    for glyph in glyphs {
        match glyph.slot {
            Some(slot) => {
                _ = write!(
                    out,
                    "<span class=\"{}\" data-letter=\"{}\" style=\"display:inline-block\">",
                    class, slot
                );
                escape_into(&mut out, glyph.ch);
                out.push_str("</span>");
            }
            None => escape_into(&mut out, glyph.ch),
        }
    }
    out
}

pub fn px(v: f32) -> String {
    format!("{:.2}px", v)
}
