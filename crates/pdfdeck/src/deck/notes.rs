use crate::source::{Annotation, AnnotationKind};

/// Upper bound on aggregated notes length, in bytes. Appending stops once
/// the bound is reached.
pub const NOTES_MAX_LEN: usize = 4096;

/// Aggregate a page's text annotations into one speaker-notes string, in
/// document order. Links are skipped; unrecognized kinds are logged and
/// skipped, never treated as errors.
pub fn extract_notes(annotations: &[Annotation], max_len: usize) -> String {
    let mut out = String::new();
    for annotation in annotations {
        match &annotation.kind {
            AnnotationKind::Text => {
                let Some(text) = annotation.text.as_deref() else {
                    continue;
                };
                if out.len() >= max_len {
                    break;
                }
                let remaining = max_len - out.len();
                if text.len() > remaining {
                    let mut end = remaining;
                    while !text.is_char_boundary(end) {
                        end -= 1;
                    }
                    out.push_str(&text[..end]);
                    break;
                }
                out.push_str(text);
            }
            AnnotationKind::Link => {}
            AnnotationKind::Other(kind) => {
                log::debug!("ignoring {kind} annotation in notes extraction");
            }
        }
    }
    out
}
