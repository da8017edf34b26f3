use eframe::egui;

use super::layout::Placement;
use super::notes;
use crate::source::{PageBitmap, PageSource};

/// Transform/visibility state for one view of a slide. The show window and
/// the presenter deck each hold their own view, but both reference the same
/// texture; pixel data is never duplicated.
#[derive(Debug, Clone, Default)]
pub struct SlideView {
    pub visible: bool,
    pub placement: Option<Placement>,
}

/// One slide's cached state. Identity is its index in the cache table.
#[derive(Clone, Default)]
pub struct SlideRecord {
    /// Shared bitmap, uploaded once at presentation resolution.
    pub texture: Option<egui::TextureHandle>,
    pub show_view: SlideView,
    pub presenter_view: SlideView,
    /// Memoized speaker notes; annotations are immutable once loaded.
    pub notes: Option<String>,
    /// Set when rasterization failed and the texture is a placeholder.
    pub broken: bool,
    /// Width / height of the rasterized bitmap.
    pub aspect: f32,
}

/// Lazily materialized per-slide table, sized to the document at load time.
/// Entries fill on first visit and are never evicted; decks are small enough
/// that full materialization stays bounded.
pub struct SlideCache {
    records: Vec<SlideRecord>,
    render_width: u32,
}

impl SlideCache {
    pub fn new(slide_count: usize, render_width: u32) -> Self {
        Self {
            records: vec![SlideRecord::default(); slide_count],
            render_width,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> &SlideRecord {
        &self.records[index]
    }

    pub fn record_mut(&mut self, index: usize) -> &mut SlideRecord {
        &mut self.records[index]
    }

    /// Rasterize and upload a slide on first visit. Idempotent: repeat calls
    /// touch neither the page source nor the texture. A page that fails to
    /// rasterize degrades to a placeholder texture with `broken` set rather
    /// than taking the session down.
    pub fn ensure_materialized(
        &mut self,
        ctx: &egui::Context,
        source: &dyn PageSource,
        index: usize,
    ) -> &mut SlideRecord {
        let record = &mut self.records[index];
        if record.texture.is_none() {
            let (bitmap, broken) = match source.render_page(index, self.render_width) {
                Ok(bitmap) => (bitmap, false),
                Err(err) => {
                    log::warn!("failed to rasterize page {index}: {err:#}");
                    (broken_page_bitmap(self.render_width), true)
                }
            };
            let pixels = composite_over_white(&bitmap);
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [bitmap.width as usize, bitmap.height as usize],
                &pixels,
            );
            let texture =
                ctx.load_texture(format!("slide-{index}"), image, egui::TextureOptions::LINEAR);
            record.texture = Some(texture);
            record.broken = broken;
            record.aspect = bitmap.width as f32 / bitmap.height as f32;
        }
        record
    }

    /// Memoized speaker notes for a slide. Extraction failures yield empty
    /// notes; they never propagate.
    pub fn notes_for(&mut self, source: &dyn PageSource, index: usize) -> &str {
        let record = &mut self.records[index];
        if record.notes.is_none() {
            let annotations = source.annotations(index).unwrap_or_else(|err| {
                log::warn!("failed to read annotations for page {index}: {err:#}");
                Vec::new()
            });
            record.notes = Some(notes::extract_notes(&annotations, notes::NOTES_MAX_LEN));
        }
        record.notes.as_deref().unwrap_or_default()
    }

    /// Hide every presenter view before a relayout, so slides placed by an
    /// earlier layout never leak through.
    pub fn hide_presenter_views(&mut self) {
        for record in &mut self.records {
            record.presenter_view.visible = false;
            record.presenter_view.placement = None;
        }
    }

    /// Hide every show view. The layout pass re-shows the current slide and
    /// its underlay afterwards.
    pub fn hide_show_views(&mut self) {
        for record in &mut self.records {
            record.show_view.visible = false;
        }
    }
}

/// Flatten a transparent-background rasterization onto opaque white, the
/// print-like appearance a projected page is expected to have.
pub fn composite_over_white(bitmap: &PageBitmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(bitmap.pixels.len());
    for px in bitmap.pixels.chunks_exact(4) {
        let a = px[3] as u32;
        for c in &px[..3] {
            out.push(((*c as u32 * a + 255 * (255 - a)) / 255) as u8);
        }
        out.push(255);
    }
    out
}

/// Placeholder bitmap for a page that failed to rasterize: a gray field with
/// red diagonal stripes, unmistakable next to real content.
pub fn broken_page_bitmap(width: u32) -> PageBitmap {
    let height = width * 3 / 4;
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 96 < 12 {
                pixels.extend_from_slice(&[176, 48, 48, 255]);
            } else {
                pixels.extend_from_slice(&[64, 64, 64, 255]);
            }
        }
    }
    PageBitmap {
        width,
        height,
        pixels,
    }
}
