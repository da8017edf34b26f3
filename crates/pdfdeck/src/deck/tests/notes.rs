use super::{link, other, text_note};
use crate::deck::notes::{NOTES_MAX_LEN, extract_notes};
use crate::source::{Annotation, AnnotationKind};

#[test]
fn concatenates_text_annotations_in_document_order() {
    let annotations = vec![text_note("A"), link(), text_note("B")];
    assert_eq!(extract_notes(&annotations, NOTES_MAX_LEN), "AB");
}

#[test]
fn empty_annotation_list_yields_empty_notes() {
    assert_eq!(extract_notes(&[], NOTES_MAX_LEN), "");
}

#[test]
fn unrecognized_kinds_are_skipped() {
    let annotations = vec![other("Highlight"), text_note("kept"), other("Stamp")];
    assert_eq!(extract_notes(&annotations, NOTES_MAX_LEN), "kept");
}

#[test]
fn text_annotation_without_content_is_skipped() {
    let annotations = vec![
        Annotation {
            kind: AnnotationKind::Text,
            text: None,
        },
        text_note("x"),
    ];
    assert_eq!(extract_notes(&annotations, NOTES_MAX_LEN), "x");
}

#[test]
fn truncates_at_the_configured_maximum() {
    let annotations = vec![text_note("abcdef"), text_note("ghijkl")];
    assert_eq!(extract_notes(&annotations, 8), "abcdefgh");
}

#[test]
fn stops_appending_once_full() {
    let annotations = vec![text_note("abcd"), text_note("efgh"), text_note("ijkl")];
    assert_eq!(extract_notes(&annotations, 4), "abcd");
}

#[test]
fn truncation_respects_char_boundaries() {
    // "é" is two bytes; truncating at 4 bytes must not split the second one.
    let annotations = vec![text_note("aéé")];
    let out = extract_notes(&annotations, 4);
    assert_eq!(out, "aé");
}
