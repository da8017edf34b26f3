pub mod pdfium;

use anyhow::Result;

/// A rasterized page: RGBA8, row-major, straight (non-premultiplied) alpha.
#[derive(Debug, Clone)]
pub struct PageBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Kind of a page annotation, as far as the presenter cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Text-bearing annotation (sticky note, free text). These become speaker notes.
    Text,
    /// Hyperlink annotation. Skipped during notes extraction.
    Link,
    /// Anything else, with the backend's name for it.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub text: Option<String>,
}

/// Document boundary: everything the deck engine needs from a loaded document.
///
/// Implementations are used from the UI thread only; rendering is synchronous
/// and runs to completion.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Page dimensions in points (1/72 inch).
    fn page_size(&self, index: usize) -> Result<(f32, f32)>;

    /// Rasterize a page at the given pixel width; height follows the page
    /// aspect ratio. The background is left transparent.
    fn render_page(&self, index: usize, target_width: u32) -> Result<PageBitmap>;

    fn annotations(&self, index: usize) -> Result<Vec<Annotation>>;
}
