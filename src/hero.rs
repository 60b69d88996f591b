use crate::constants::*;
use crate::dom;
use crate::layout::glyph_markup;
use site_core::hero::{HeroBanner, HeroConfig};
use site_core::reveal::split_glyphs;
use std::time::Duration;
use web_sys as web;

/// DOM binding for the landing hero. Optional parts that are missing from
/// the markup are skipped; only the root is required.
pub struct HeroSection {
    root: web::HtmlElement,
    letters: Vec<web::HtmlElement>,
    subtitle: Option<web::HtmlElement>,
    buttons: Option<web::HtmlElement>,
    headline: Option<web::HtmlElement>,
    scene: Option<web::HtmlElement>,
    banner: HeroBanner,
}

impl HeroSection {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let root = dom::query_doc(document, HERO_SELECTOR)?;
        let letters = match dom::query(&root, HERO_TITLE_SELECTOR) {
            Some(title) => {
                let text = title.text_content().unwrap_or_default();
                title.set_inner_html(&glyph_markup(&split_glyphs(&text), HERO_LETTER_CLASS));
                dom::query_all(&title, LETTER_SELECTOR)
            }
            None => Vec::new(),
        };
        let rect = dom::client_rect(&root);
        let banner = HeroBanner::new(
            letters.len(),
            dom::document_top(&root),
            rect.size.y,
            HeroConfig::default(),
        );
        log::info!("[hero] mounted with {} title letters", letters.len());
        Some(Self {
            subtitle: dom::query(&root, HERO_SUBTITLE_SELECTOR),
            buttons: dom::query(&root, HERO_BUTTONS_SELECTOR),
            headline: dom::query(&root, HERO_HEADLINE_SELECTOR),
            scene: dom::query(&root, HERO_SCENE_SELECTOR),
            root,
            letters,
            banner,
        })
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.banner.scroll.on_scroll(scroll_y);
    }

    pub fn on_resize(&mut self) {
        let height = dom::client_rect(&self.root).size.y;
        self.banner.scroll.relayout(dom::document_top(&self.root), height);
    }

    pub fn frame(&mut self, dt: Duration) {
        let intro_done = self.banner.intro.is_complete();
        let frame = self.banner.frame(dt);
        if !intro_done {
            for (el, style) in self.letters.iter().zip(&frame.intro.letters) {
                dom::apply_style(el, style);
            }
            if let Some(el) = &self.subtitle {
                dom::apply_style(el, &frame.intro.subtitle);
            }
            if let Some(el) = &self.buttons {
                dom::apply_style(el, &frame.intro.buttons);
            }
        }
        if let Some(el) = &self.headline {
            dom::apply_style(el, &frame.scroll.headline);
        }
        if let Some(el) = &self.scene {
            dom::apply_style(el, &frame.scroll.scene);
        }
        dom::set_style(&self.root, "background-color", &frame.scroll.background.to_css());
    }
}
