use super::stage;
use crate::deck::layout::{Pivot, Slot, layout_deck};

#[test]
fn interior_slide_places_three() {
    let placements = layout_deck(2, 5, stage(), 30.0);
    let indices: Vec<usize> = placements.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn first_slide_has_no_previous_slot() {
    let placements = layout_deck(0, 5, stage(), 30.0);
    let indices: Vec<usize> = placements.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(placements[0].slot, Slot::Current);
    assert_eq!(placements[1].slot, Slot::Next);
}

#[test]
fn last_slide_has_no_next_slot() {
    let placements = layout_deck(4, 5, stage(), 30.0);
    let indices: Vec<usize> = placements.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![3, 4]);
    assert_eq!(placements[1].slot, Slot::Current);
}

#[test]
fn single_page_deck_places_only_the_current_slide() {
    let placements = layout_deck(0, 1, stage(), 30.0);
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].index, 0);
    assert_eq!(placements[0].slot, Slot::Current);
}

#[test]
fn current_slide_is_centered_upright_and_on_top() {
    let s = stage();
    let placements = layout_deck(2, 5, s, 30.0);
    let current = placements.iter().find(|p| p.slot == Slot::Current).unwrap();
    assert_eq!(current.x, (s.stage_width - s.slide_width) / 2.0);
    assert_eq!(current.angle_deg, 0.0);
    assert_eq!(current.pivot, Pivot::Center);
    assert!(placements.iter().all(|p| p.z <= current.z));
}

#[test]
fn neighbors_fold_away_about_their_inner_edges() {
    let s = stage();
    let placements = layout_deck(2, 5, s, 30.0);
    let center_x = (s.stage_width - s.slide_width) / 2.0;

    let previous = placements.iter().find(|p| p.slot == Slot::Previous).unwrap();
    assert_eq!(previous.x, center_x - s.slide_width - s.gap);
    assert_eq!(previous.angle_deg, 30.0);
    assert_eq!(previous.pivot, Pivot::RightEdge);

    let next = placements.iter().find(|p| p.slot == Slot::Next).unwrap();
    assert_eq!(next.x, center_x + s.slide_width + s.gap);
    assert_eq!(next.angle_deg, -30.0);
    assert_eq!(next.pivot, Pivot::LeftEdge);
}
