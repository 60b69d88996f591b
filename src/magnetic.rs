use crate::constants::*;
use crate::dom;
use crate::layout::configure;
use site_core::magnetic::{MagneticButton, MagneticConfig};
use std::time::Duration;
use web_sys as web;

/// DOM binding for one magnetic control.
pub struct MagneticControl {
    pub el: web::HtmlElement,
    glow: Option<web::HtmlElement>,
    pub button: MagneticButton,
    /// Whether the last rendered frame was the rest pose.
    rendered_rest: bool,
}

impl MagneticControl {
    pub fn mount_all(document: &web::Document) -> Vec<Self> {
        dom::query_all_doc(document, MAGNETIC_SELECTOR)
            .into_iter()
            .map(|el| {
                let config = configure(
                    MagneticConfig::default(),
                    &dom::data_attrs(&el, &MAGNETIC_ATTRS),
                    MagneticConfig::apply_attr,
                );
                _ = el.class_list().add_2(config.variant.as_str(), config.size.as_str());
                Self {
                    glow: dom::query(&el, MAGNETIC_GLOW_SELECTOR),
                    el,
                    button: MagneticButton::new(config),
                    rendered_rest: false,
                }
            })
            .collect()
    }

    pub fn frame(&mut self, dt: Duration) {
        let at_rest = self.button.is_at_rest();
        if at_rest && self.rendered_rest {
            return;
        }
        let frame = self.button.frame(dt);
        dom::apply_style(&self.el, &frame.button);
        if let Some(glow) = &self.glow {
            dom::apply_style(glow, &frame.glow);
        }
        self.rendered_rest = at_rest;
    }
}
