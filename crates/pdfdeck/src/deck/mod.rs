pub mod cache;
pub mod crossfade;
pub mod layout;
pub mod navigation;
pub mod notes;

#[cfg(test)]
mod tests;

use eframe::egui;

use cache::SlideCache;
use crossfade::Crossfade;
use layout::{StageMetrics, layout_deck};
use navigation::Navigation;

use crate::source::PageSource;

/// Logical input commands, decoded from keys/buttons at the window boundary.
/// The deck core never sees raw input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    JumpFirst,
    JumpLast,
    ToggleFullscreen,
    Quit,
}

/// All mutable presentation state for one session: the navigation cursor,
/// the slide cache, the audience crossfade, and the slide still visible
/// underneath a fade in progress. Owned by the app and mutated only from
/// the UI thread.
pub struct DeckContext {
    nav: Navigation,
    cache: SlideCache,
    fade: Crossfade,
    /// Previously current audience slide, kept opaque below the fading one
    /// until the fade converges.
    underlay: Option<usize>,
    deck_angle_deg: f32,
}

impl DeckContext {
    pub fn new(
        slide_count: usize,
        render_width: u32,
        fade_duration_ms: u32,
        frame_rate: u32,
        deck_angle_deg: f32,
    ) -> Self {
        Self {
            nav: Navigation::new(slide_count),
            cache: SlideCache::new(slide_count, render_width),
            fade: Crossfade::new(fade_duration_ms, frame_rate),
            underlay: None,
            deck_angle_deg,
        }
    }

    pub fn current(&self) -> usize {
        self.nav.current()
    }

    pub fn slide_count(&self) -> usize {
        self.nav.count()
    }

    pub fn cache(&self) -> &SlideCache {
        &self.cache
    }

    pub fn fade_opacity(&self) -> u8 {
        self.fade.opacity()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_fading()
    }

    pub fn underlay(&self) -> Option<usize> {
        self.underlay
    }

    /// Memoized speaker notes for the current slide.
    pub fn current_notes(&mut self, source: &dyn PageSource) -> &str {
        let index = self.nav.current();
        self.cache.notes_for(source, index)
    }

    /// Dispatch a navigation command. Window-level commands
    /// (fullscreen/quit) are handled by the caller and ignored here.
    pub fn apply(
        &mut self,
        command: Command,
        ctx: &egui::Context,
        source: &dyn PageSource,
        stage: StageMetrics,
    ) {
        let from = self.nav.current();
        let moved = match command {
            Command::Advance => self.nav.next(),
            Command::Retreat => self.nav.previous(),
            Command::JumpFirst => self.nav.jump(0),
            Command::JumpLast => self.nav.jump(self.nav.count() - 1),
            Command::ToggleFullscreen | Command::Quit => false,
        };
        if moved {
            self.refresh(ctx, source, stage, Some(from));
        }
    }

    /// Jump to an arbitrary slide; out of range clamps silently.
    pub fn jump(
        &mut self,
        index: usize,
        ctx: &egui::Context,
        source: &dyn PageSource,
        stage: StageMetrics,
    ) {
        let from = self.nav.current();
        if self.nav.jump(index) {
            self.refresh(ctx, source, stage, Some(from));
        }
    }

    /// Position the cursor before the first layout, for a `--slide N` start.
    /// Clamps like any other jump.
    pub fn set_start_slide(&mut self, index: usize) {
        self.nav.jump(index);
    }

    /// First layout after the windows open: place the deck and fade the
    /// initial slide in from black.
    pub fn initial_refresh(
        &mut self,
        ctx: &egui::Context,
        source: &dyn PageSource,
        stage: StageMetrics,
    ) {
        self.refresh(ctx, source, stage, None);
    }

    /// Reposition the presenter deck without touching the audience fade.
    /// Used when the stage size changes between navigations.
    pub fn relayout(&mut self, ctx: &egui::Context, source: &dyn PageSource, stage: StageMetrics) {
        self.cache.hide_presenter_views();
        for placement in layout_deck(
            self.nav.current(),
            self.nav.count(),
            stage,
            self.deck_angle_deg,
        ) {
            let record = self.cache.ensure_materialized(ctx, source, placement.index);
            record.presenter_view.placement = Some(placement);
            record.presenter_view.visible = true;
        }
    }

    /// Navigation-triggered refresh: relayout the presenter deck, then raise
    /// the new audience slide at opacity zero above the slide we came from
    /// and restart the crossfade. Materialization always completes before
    /// any view becomes visible, so a slide is never shown half rendered.
    fn refresh(
        &mut self,
        ctx: &egui::Context,
        source: &dyn PageSource,
        stage: StageMetrics,
        from: Option<usize>,
    ) {
        self.relayout(ctx, source, stage);

        self.cache.hide_show_views();
        let current = self.nav.current();
        self.underlay = from.filter(|&f| f != current);
        if let Some(below) = self.underlay {
            self.cache.record_mut(below).show_view.visible = true;
        }
        let record = self.cache.ensure_materialized(ctx, source, current);
        record.show_view.visible = true;
        self.fade.restart();
    }

    /// Advance the crossfade one frame. Once it converges the underlay is
    /// fully occluded and gets hidden; only the current slide remains in the
    /// audience view.
    pub fn tick(&mut self) {
        self.fade.tick();
        if !self.fade.is_fading() {
            if let Some(below) = self.underlay.take() {
                self.cache.record_mut(below).show_view.visible = false;
            }
        }
    }
}
