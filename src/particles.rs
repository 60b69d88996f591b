use crate::constants::PARTICLES_SELECTOR;
use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use site_core::constants::{PARTICLE_COUNT, PARTICLE_SEED};
use site_core::particles::ParticleField;
use std::f64::consts::TAU;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A particle field drawn into one `<canvas data-particles>`.
pub struct ParticleCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    elapsed: f32,
    scroll_y: f32,
}

impl ParticleCanvas {
    fn new(canvas: web::HtmlCanvasElement, seed: u64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            field: ParticleField::generate(PARTICLE_COUNT, seed),
            elapsed: 0.0,
            scroll_y: dom::scroll_y(),
        })
    }

    pub fn mount_all(document: &web::Document) -> Vec<Self> {
        dom::query_all_doc(document, PARTICLES_SELECTOR)
            .into_iter()
            .enumerate()
            .filter_map(|(i, el)| {
                let canvas = el.dyn_into::<web::HtmlCanvasElement>().ok()?;
                match Self::new(canvas, PARTICLE_SEED.wrapping_add(i as u64)) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        log::warn!("[particles] canvas {} left blank: {:?}", i, e);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    pub fn frame(&mut self, dt: Duration) {
        self.elapsed += dt.as_secs_f32();
        let dpr = dom::sync_canvas_backing_size(&self.canvas) as f64;
        let rect = dom::client_rect(&self.canvas);
        let ctx = &self.ctx;
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, rect.size.x as f64, rect.size.y as f64);
        for dot in self
            .field
            .sample(self.elapsed, self.scroll_y, Vec2::new(rect.size.x, rect.size.y))
        {
            ctx.set_fill_style_str(&dot.colour.to_css_alpha(dot.alpha));
            ctx.begin_path();
            _ = ctx.arc(
                dot.centre.x as f64,
                dot.centre.y as f64,
                dot.radius as f64,
                0.0,
                TAU,
            );
            ctx.fill();
        }
    }
}
