use crate::constants::*;
use crate::dom;
use crate::layout::{configure, glyph_markup};
use site_core::constants::REVEAL_THRESHOLD;
use site_core::ElementStyle;
use site_core::reveal::{
    split_glyphs, LetterCascade, LetterConfig, RevealConfig, RevealTrigger, StaggerConfig,
    StaggerGroup,
};
use std::time::Duration;
use web_sys as web;

enum RevealKind {
    Single(RevealTrigger),
    Stagger {
        group: StaggerGroup,
        children: Vec<web::HtmlElement>,
    },
    Letters {
        cascade: LetterCascade,
        letters: Vec<web::HtmlElement>,
    },
}

struct RevealItem {
    el: web::HtmlElement,
    kind: RevealKind,
}

/// Every viewport-revealed element on the page, addressed by the index
/// stored in its `data-reveal-index` attribute.
#[derive(Default)]
pub struct RevealSet {
    items: Vec<RevealItem>,
}

impl RevealSet {
    pub fn mount(document: &web::Document) -> Self {
        let mut items = Vec::new();

        for el in dom::query_all_doc(document, REVEAL_SELECTOR) {
            let config = configure(
                RevealConfig::default(),
                &dom::data_attrs(&el, &REVEAL_ATTRS),
                RevealConfig::apply_attr,
            );
            dom::apply_style(&el, &config.hidden_style());
            items.push(RevealItem {
                el,
                kind: RevealKind::Single(RevealTrigger::new(config)),
            });
        }

        for el in dom::query_all_doc(document, STAGGER_SELECTOR) {
            let config = configure(
                StaggerConfig::default(),
                &dom::data_attrs(&el, &STAGGER_ATTRS),
                StaggerConfig::apply_attr,
            );
            let children = dom::query_all(&el, STAGGER_ITEM_SELECTOR);
            let mut group = StaggerGroup::new(children.len(), config);
            for (child, style) in children.iter().zip(group.frame(Duration::ZERO)) {
                dom::apply_style(child, &style);
            }
            items.push(RevealItem {
                el,
                kind: RevealKind::Stagger { group, children },
            });
        }

        for el in dom::query_all_doc(document, LETTERS_SELECTOR) {
            let text = el.text_content().unwrap_or_default();
            let glyphs = split_glyphs(&text);
            el.set_inner_html(&glyph_markup(&glyphs, "letter"));
            let letters = dom::query_all(&el, LETTER_SELECTOR);
            let mut cascade = LetterCascade::new(&text, LetterConfig::default());
            for (letter, style) in letters.iter().zip(cascade.frame(Duration::ZERO)) {
                dom::apply_style(letter, &style);
            }
            items.push(RevealItem {
                el,
                kind: RevealKind::Letters { cascade, letters },
            });
        }

        for (index, item) in items.iter().enumerate() {
            _ = item.el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string());
        }
        if !items.is_empty() {
            log::info!("[reveal] watching {} elements", items.len());
        }
        Self { items }
    }

    pub fn elements(&self) -> impl Iterator<Item = &web::HtmlElement> {
        self.items.iter().map(|item| &item.el)
    }

    /// Thresholds the shared observer has to report.
    pub fn thresholds(&self) -> Vec<f32> {
        let mut out: Vec<f32> = self
            .items
            .iter()
            .map(|item| match &item.kind {
                RevealKind::Single(trigger) => trigger.config().threshold,
                _ => REVEAL_THRESHOLD,
            })
            .collect();
        out.push(0.0);
        out.sort_by(f32::total_cmp);
        out.dedup();
        out
    }

    pub fn index_of(el: &web::Element) -> Option<usize> {
        el.get_attribute(REVEAL_INDEX_ATTR)?.parse().ok()
    }

    /// Returns whether `index` still needs observing.
    pub fn on_intersection(&mut self, index: usize, ratio: f32) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        match &mut item.kind {
            RevealKind::Single(trigger) => {
                trigger.on_intersection(ratio);
                !trigger.is_done_observing()
            }
            RevealKind::Stagger { group, .. } => {
                group.on_intersection(ratio);
                !group.is_done_observing()
            }
            RevealKind::Letters { cascade, .. } => {
                if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                    cascade.start();
                }
                !cascade.is_started()
            }
        }
    }

    /// Put every element in its final pose and stop animating.
    pub fn show_all(&mut self) {
        let shown = ElementStyle::IDENTITY;
        for item in self.items.drain(..) {
            match item.kind {
                RevealKind::Single(_) => dom::apply_style(&item.el, &shown),
                RevealKind::Stagger { children, .. } => {
                    children.iter().for_each(|el| dom::apply_style(el, &shown))
                }
                RevealKind::Letters { letters, .. } => {
                    letters.iter().for_each(|el| dom::apply_style(el, &shown))
                }
            }
        }
    }

    pub fn frame(&mut self, dt: Duration) {
        for item in &mut self.items {
            match &mut item.kind {
                RevealKind::Single(trigger) => {
                    if trigger.is_animating() {
                        let style = trigger.frame(dt);
                        dom::apply_style(&item.el, &style);
                    }
                }
                RevealKind::Stagger { group, children } => {
                    if group.is_animating() {
                        for (child, style) in children.iter().zip(group.frame(dt)) {
                            dom::apply_style(child, &style);
                        }
                    }
                }
                RevealKind::Letters { cascade, letters } => {
                    if cascade.is_started() && !cascade.is_settled() {
                        for (letter, style) in letters.iter().zip(cascade.frame(dt)) {
                            dom::apply_style(letter, &style);
                        }
                    }
                }
            }
        }
    }
}
