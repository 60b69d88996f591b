use crate::constants::*;
use crate::dom;
use crate::layout::{embellish_selector, px};
use site_core::stages::{StageConfig, StageController};
use site_core::{Indicator, SectionFrame, MANUFACTURING_STAGES};
use std::time::Duration;
use web_sys as web;

struct StagePanel {
    el: web::HtmlElement,
    parts: Vec<web::HtmlElement>,
    embellish: Vec<web::HtmlElement>,
}

/// DOM binding for the pinned horizontal process scroller.
pub struct ProcessSection {
    root: web::HtmlElement,
    pin: Option<web::HtmlElement>,
    track: web::HtmlElement,
    /// Indexed like the controller's stages; `None` where the page has no panel.
    panels: Vec<Option<StagePanel>>,
    controller: StageController,
    centered: Option<usize>,
}

impl ProcessSection {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let root = dom::query_doc(document, PROCESS_SELECTOR)?;
        let Some(track) = dom::query(&root, PROCESS_TRACK_SELECTOR) else {
            log::warn!("[process] section has no track; leaving it static");
            return None;
        };
        let pin = dom::query(&root, PROCESS_PIN_SELECTOR);
        let viewport = dom::viewport();
        let controller = StageController::new(
            &MANUFACTURING_STAGES,
            StageConfig::default(),
            dom::document_top(&root),
            viewport.x,
            dom::scroll_y(),
        );

        let mut panels: Vec<Option<StagePanel>> =
            (0..controller.stage_count()).map(|_| None).collect();
        for el in dom::query_all(&track, STAGE_SELECTOR) {
            let id = el.get_attribute(STAGE_ATTR).unwrap_or_default();
            let Some(index) = controller.index_of(&id) else {
                log::warn!("[process] unknown stage `{}`", id);
                continue;
            };
            let embellish = MANUFACTURING_STAGES[index]
                .embellishment
                .map(|kind| dom::query_all(&el, &embellish_selector(kind)))
                .unwrap_or_default();
            panels[index] = Some(StagePanel {
                parts: dom::query_all(&el, STAGE_PART_SELECTOR),
                embellish,
                el,
            });
        }
        for (index, panel) in panels.iter().enumerate() {
            let Some(panel) = panel else {
                log::debug!("[process] stage {} has no panel", index);
                continue;
            };
            for (dot, dot_el) in dom::query_all(&panel.el, STAGE_DOT_SELECTOR).iter().enumerate() {
                _ = dot_el
                    .class_list()
                    .add_1(Indicator::for_dot(dot, index).css_class());
            }
        }

        let mut section = Self {
            root,
            pin,
            track,
            panels,
            controller,
            centered: None,
        };
        section.apply_layout(viewport.y);
        log::info!(
            "[process] mounted {} stages, scroll distance {:.0}px",
            section.controller.stage_count(),
            section.controller.section().total_scrollable_distance()
        );
        Some(section)
    }

    fn apply_layout(&self, viewport_height: f32) {
        let section = self.controller.section();
        dom::set_style(&self.root, "height", &px(section.spacer_height(viewport_height)));
        if let Some(pin) = &self.pin {
            dom::set_style(pin, "position", "sticky");
            dom::set_style(pin, "top", "0px");
            dom::set_style(pin, "height", &px(viewport_height));
            dom::set_style(pin, "overflow", "hidden");
        }
        let panel_width = px(self.controller.track().panel_width());
        dom::set_style(&self.track, "width", &px(self.controller.track().track_width()));
        dom::set_style(&self.track, "display", "flex");
        for panel in self.panels.iter().flatten() {
            dom::set_style(&panel.el, "width", &panel_width);
            dom::set_style(&panel.el, "flex", "0 0 auto");
        }
    }

    /// Fonts and images above the section can push it down after mount, so
    /// the top is re-read on every scroll.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        let start = dom::document_top(&self.root);
        if self.controller.on_scroll_from(start, scroll_y) {
            log::debug!("[process] section moved to {:.0}px", start);
        }
    }

    pub fn on_resize(&mut self, viewport: glam::Vec2, scroll_y: f32) {
        let start = dom::document_top(&self.root);
        self.controller.relayout(start, viewport.x, scroll_y);
        self.apply_layout(viewport.y);
    }

    pub fn frame(&mut self, dt: Duration) {
        let frame = self.controller.frame(dt);
        self.render(&frame);
    }

    fn render(&mut self, frame: &SectionFrame) {
        dom::set_style(
            &self.track,
            "transform",
            &format!("translate3d({}, 0px, 0px)", px(frame.translate_x)),
        );
        dom::set_style(&self.root, PROGRESS_VAR, &format!("{:.4}", frame.progress));
        if self.centered != Some(frame.centered_index) {
            self.centered = Some(frame.centered_index);
            if let Some(id) = self.controller.stage_id(frame.centered_index) {
                _ = self.root.set_attribute(CURRENT_STAGE_ATTR, id.as_str());
            }
        }
        _ = self
            .root
            .set_attribute(PINNED_ATTR, if frame.pinned { "true" } else { "false" });

        for (stage, panel) in frame.stages.iter().zip(&self.panels) {
            let Some(panel) = panel else { continue };
            _ = panel.el.set_attribute(STAGE_STATE_ATTR, stage.phase.as_str());
            for (el, style) in panel.parts.iter().zip(stage.parts.iter()) {
                dom::apply_style(el, style);
            }
            match stage.embellishment.as_slice() {
                [] => {}
                [shared] => panel.embellish.iter().for_each(|el| dom::apply_style(el, shared)),
                styles => {
                    for (el, style) in panel.embellish.iter().zip(styles) {
                        dom::apply_style(el, style);
                    }
                }
            }
        }
        for (id, phase) in &frame.transitions {
            log::debug!("[process] {} -> {}", id.as_str(), phase.as_str());
        }
    }
}
