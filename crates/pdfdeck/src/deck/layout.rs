/// Which deck slot a placement fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Previous,
    Current,
    Next,
}

/// Edge the rotation pivots around. Neighbors rotate about the edge that
/// faces the current slide, so they appear to fold away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivot {
    LeftEdge,
    Center,
    RightEdge,
}

/// One positioned slide in the presenter deck. `x` is the left edge of the
/// unrotated slide in stage coordinates; `angle_deg` rotates about the
/// vertical axis through the pivot. Higher `z` paints on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub slot: Slot,
    pub x: f32,
    pub angle_deg: f32,
    pub pivot: Pivot,
    pub z: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageMetrics {
    pub stage_width: f32,
    pub slide_width: f32,
    pub gap: f32,
}

/// Compute the presenter deck layout: the current slide centered and upright,
/// immediate neighbors (where they exist) folded off to each side. Returns
/// placements in index order; the current slide carries the top z.
pub fn layout_deck(
    current: usize,
    count: usize,
    stage: StageMetrics,
    angle_deg: f32,
) -> Vec<Placement> {
    let center_x = (stage.stage_width - stage.slide_width) / 2.0;
    let mut placements = Vec::with_capacity(3);

    if current > 0 {
        placements.push(Placement {
            index: current - 1,
            slot: Slot::Previous,
            x: center_x - stage.slide_width - stage.gap,
            angle_deg,
            pivot: Pivot::RightEdge,
            z: 0,
        });
    }

    placements.push(Placement {
        index: current,
        slot: Slot::Current,
        x: center_x,
        angle_deg: 0.0,
        pivot: Pivot::Center,
        z: 1,
    });

    if current + 1 < count {
        placements.push(Placement {
            index: current + 1,
            slot: Slot::Next,
            x: center_x + stage.slide_width + stage.gap,
            angle_deg: -angle_deg,
            pivot: Pivot::LeftEdge,
            z: 0,
        });
    }

    placements
}
