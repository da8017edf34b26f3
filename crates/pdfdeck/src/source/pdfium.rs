use std::path::Path;

use anyhow::{Result, anyhow};
use pdfium_render::prelude::*;

use super::{Annotation, AnnotationKind, PageBitmap, PageSource};

/// PDF backend on top of pdfium.
///
/// Pdfium keeps global C state, so the binding is created once and leaked;
/// it lives until process exit, which matches the single-session lifetime of
/// a presentation run.
pub struct PdfiumSource {
    document: PdfDocument<'static>,
}

impl PdfiumSource {
    /// Open a document. Fails if the library cannot be bound, the file is
    /// unreadable, or the document has no pages; all of these are fatal at
    /// startup, before any window opens.
    pub fn open(path: &Path) -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| anyhow!("could not bind the pdfium library: {e:?}"))?;
        let pdfium: &'static Pdfium = Box::leak(Box::new(Pdfium::new(bindings)));

        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| anyhow!("could not open {}: {e:?}", path.display()))?;

        if document.pages().is_empty() {
            anyhow::bail!("{} contains no pages", path.display());
        }

        Ok(Self { document })
    }

    fn page(&self, index: usize) -> Result<PdfPage<'_>> {
        self.document
            .pages()
            .get(index as u16)
            .map_err(|e| anyhow!("no page at index {index}: {e:?}"))
    }
}

impl PageSource for PdfiumSource {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_size(&self, index: usize) -> Result<(f32, f32)> {
        let page = self.page(index)?;
        Ok((page.width().value, page.height().value))
    }

    fn render_page(&self, index: usize, target_width: u32) -> Result<PageBitmap> {
        let (page_w, page_h) = self.page_size(index)?;
        let target_height = (target_width as f32 * page_h / page_w).round() as i32;
        let page = self.page(index)?;

        let config = PdfRenderConfig::new()
            .set_target_width(target_width as i32)
            .set_maximum_height(target_height);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| anyhow!("pdfium failed to render page {index}: {e:?}"))?;

        let image = bitmap.as_image().into_rgba8();
        let (width, height) = image.dimensions();
        Ok(PageBitmap {
            width,
            height,
            pixels: image.into_raw(),
        })
    }

    fn annotations(&self, index: usize) -> Result<Vec<Annotation>> {
        let page = self.page(index)?;
        let mut out = Vec::new();
        for annotation in page.annotations().iter() {
            let kind = match annotation.annotation_type() {
                PdfPageAnnotationType::Text | PdfPageAnnotationType::FreeText => {
                    AnnotationKind::Text
                }
                PdfPageAnnotationType::Link => AnnotationKind::Link,
                other => AnnotationKind::Other(format!("{other:?}")),
            };
            out.push(Annotation {
                kind,
                text: annotation.contents(),
            });
        }
        Ok(out)
    }
}
