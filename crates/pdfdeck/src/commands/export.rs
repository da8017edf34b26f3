use std::path::PathBuf;

use anyhow::Result;

use crate::deck::cache::composite_over_white;
use crate::source::PageSource;
use crate::source::pdfium::PdfiumSource;

/// Rasterize every page through the same white-compositing path the
/// presenter uses and write them out as PNGs, without opening a window.
pub fn run(file: PathBuf, output_dir: PathBuf, width: u32) -> Result<()> {
    let path = std::fs::canonicalize(&file)?;
    let source = PdfiumSource::open(&path)?;
    let slide_count = source.page_count();

    std::fs::create_dir_all(&output_dir)?;
    eprintln!(
        "Exporting {} slides to {} ({}px wide)",
        slide_count,
        output_dir.display(),
        width,
    );

    for index in 0..slide_count {
        let filename = format!("slide-{:02}.png", index + 1);
        let out_path = output_dir.join(&filename);
        match source.render_page(index, width) {
            Ok(bitmap) => {
                let pixels = composite_over_white(&bitmap);
                image::save_buffer(
                    &out_path,
                    &pixels,
                    bitmap.width,
                    bitmap.height,
                    image::ColorType::Rgba8,
                )?;
                eprintln!("  Saved {filename}");
            }
            Err(err) => {
                eprintln!("  Skipped {filename}: {err:#}");
            }
        }
    }

    eprintln!("Export complete.");
    Ok(())
}
