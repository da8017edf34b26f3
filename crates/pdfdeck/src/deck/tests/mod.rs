mod crossfade;
mod layout;
mod notes;

use std::cell::RefCell;

use anyhow::Result;
use eframe::egui;

use super::DeckContext;
use super::layout::StageMetrics;
use crate::source::{Annotation, AnnotationKind, PageBitmap, PageSource};

/// In-memory page source with a rasterization call log.
pub struct FakeSource {
    pages: usize,
    annotations: Vec<Vec<Annotation>>,
    fail_pages: Vec<usize>,
    render_calls: RefCell<Vec<usize>>,
}

impl FakeSource {
    pub fn new(pages: usize) -> Self {
        Self {
            pages,
            annotations: vec![Vec::new(); pages],
            fail_pages: Vec::new(),
            render_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_annotations(mut self, page: usize, annotations: Vec<Annotation>) -> Self {
        self.annotations[page] = annotations;
        self
    }

    /// Make rasterization of one page fail.
    pub fn failing(mut self, page: usize) -> Self {
        self.fail_pages.push(page);
        self
    }

    /// How many times a page has been rasterized.
    pub fn render_count(&self, page: usize) -> usize {
        self.render_calls
            .borrow()
            .iter()
            .filter(|&&p| p == page)
            .count()
    }
}

impl PageSource for FakeSource {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn page_size(&self, _index: usize) -> Result<(f32, f32)> {
        Ok((640.0, 480.0))
    }

    fn render_page(&self, index: usize, _target_width: u32) -> Result<PageBitmap> {
        self.render_calls.borrow_mut().push(index);
        if self.fail_pages.contains(&index) {
            anyhow::bail!("page {index} is corrupt");
        }
        // A 4x3 page with a semi-transparent gray wash.
        Ok(PageBitmap {
            width: 4,
            height: 3,
            pixels: [100, 100, 100, 128].repeat(12),
        })
    }

    fn annotations(&self, index: usize) -> Result<Vec<Annotation>> {
        Ok(self.annotations[index].clone())
    }
}

/// Helper to create a text annotation.
pub fn text_note(text: &str) -> Annotation {
    Annotation {
        kind: AnnotationKind::Text,
        text: Some(text.to_string()),
    }
}

/// Helper to create a link annotation.
pub fn link() -> Annotation {
    Annotation {
        kind: AnnotationKind::Link,
        text: None,
    }
}

/// Helper to create an annotation of an unrecognized kind.
pub fn other(kind: &str) -> Annotation {
    Annotation {
        kind: AnnotationKind::Other(kind.to_string()),
        text: Some("not a note".to_string()),
    }
}

pub fn stage() -> StageMetrics {
    StageMetrics {
        stage_width: 1000.0,
        slide_width: 400.0,
        gap: 20.0,
    }
}

/// A deck context over a fake document, plus a headless egui context for
/// texture uploads. 200 ms fade at 60 fps, 30 degree deck angle.
pub fn deck(pages: usize) -> (DeckContext, egui::Context) {
    (DeckContext::new(pages, 64, 200, 60, 30.0), egui::Context::default())
}
