use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use eframe::egui;

use crate::config::Config;
use crate::deck::crossfade::TickTimer;
use crate::deck::layout::{Pivot, Slot, StageMetrics};
use crate::deck::{Command, DeckContext};
use crate::source::PageSource;
use crate::source::pdfium::PdfiumSource;

/// Pixel width slides are rasterized at, for both views.
const RENDER_WIDTH: u32 = 1920;
const FRAME_RATE: u32 = 60;
const DEFAULT_FADE_MS: u32 = 200;
const DEFAULT_DECK_ANGLE: f32 = 30.0;

/// Fraction of the presenter window width one deck slide occupies.
const DECK_SLIDE_FRACTION: f32 = 0.42;
const DECK_GAP_FRACTION: f32 = 0.02;
/// Fraction of the presenter window height given to the deck; the rest holds
/// the clock, the slide counter, and the notes.
const DECK_HEIGHT_FRACTION: f32 = 0.62;

struct PresenterApp {
    deck: DeckContext,
    source: Box<dyn PageSource>,
    stage: StageMetrics,
    ticker: TickTimer,
    last_update: Instant,
    fullscreen: bool,
    initialized: bool,
}

impl PresenterApp {
    fn new(
        deck: DeckContext,
        source: Box<dyn PageSource>,
        fullscreen: bool,
        presenter_width: f32,
    ) -> Self {
        Self {
            deck,
            source,
            stage: stage_for_width(presenter_width),
            ticker: TickTimer::new(FRAME_RATE),
            last_update: Instant::now(),
            fullscreen,
            initialized: false,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ToggleFullscreen => {
                    self.fullscreen = !self.fullscreen;
                    ctx.send_viewport_cmd_to(
                        egui::ViewportId::ROOT,
                        egui::ViewportCommand::Fullscreen(self.fullscreen),
                    );
                }
                Command::Quit => {
                    ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
                }
                navigation => {
                    self.deck
                        .apply(navigation, ctx, self.source.as_ref(), self.stage);
                }
            }
        }
    }

    /// Audience view: the slide we are leaving stays opaque underneath while
    /// the current slide fades in on top.
    fn draw_show_window(&mut self, ctx: &egui::Context) {
        let bg = egui::Color32::BLACK;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                if let Some(below) = self.deck.underlay() {
                    self.paint_show_slide(ui, below, rect, 255);
                }
                self.paint_show_slide(ui, self.deck.current(), rect, self.deck.fade_opacity());
            });
    }

    fn paint_show_slide(&self, ui: &egui::Ui, index: usize, panel: egui::Rect, opacity: u8) {
        let record = self.deck.cache().record(index);
        if !record.show_view.visible {
            return;
        }
        let Some(texture) = &record.texture else {
            return;
        };
        let rect = fit_rect(panel, record.aspect);
        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::from_white_alpha(opacity),
        );
    }

    fn draw_presenter_window(&mut self, ctx: &egui::Context) {
        let bg = egui::Color32::from_rgb(24, 24, 28);
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                // Track resizes; the deck layout is in window coordinates.
                let stage = stage_for_width(rect.width());
                if stage != self.stage {
                    self.stage = stage;
                    self.deck.relayout(ctx, self.source.as_ref(), stage);
                }

                let deck_rect = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width(), rect.height() * DECK_HEIGHT_FRACTION),
                );
                self.draw_deck(ui, deck_rect);
                self.draw_presenter_chrome(ui, rect, deck_rect);
            });
    }

    /// The perspective deck: previous / current / next, neighbors folded
    /// away. Rotation about the vertical axis shows up as horizontal
    /// foreshortening toward the pivot edge.
    fn draw_deck(&self, ui: &egui::Ui, deck_rect: egui::Rect) {
        let mut placements: Vec<_> = (0..self.deck.slide_count())
            .filter_map(|i| {
                let record = self.deck.cache().record(i);
                if !record.presenter_view.visible {
                    return None;
                }
                record.presenter_view.placement.map(|p| (p, i))
            })
            .collect();
        placements.sort_by_key(|(p, _)| p.z);

        for (placement, index) in placements {
            let record = self.deck.cache().record(index);
            let Some(texture) = &record.texture else {
                continue;
            };

            let slide_w = self.stage.slide_width;
            let slide_h = slide_w / record.aspect.max(0.01);
            let drawn_w = slide_w * placement.angle_deg.to_radians().cos().abs();
            let x = deck_rect.left()
                + placement.x
                + match placement.pivot {
                    Pivot::LeftEdge => 0.0,
                    Pivot::Center => (slide_w - drawn_w) / 2.0,
                    Pivot::RightEdge => slide_w - drawn_w,
                };
            let y = deck_rect.top() + (deck_rect.height() - slide_h) / 2.0;
            let rect =
                egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(drawn_w, slide_h));

            // Neighbors sit back in the shadow.
            let tint = if placement.slot == Slot::Current {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(140)
            };
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                tint,
            );
        }
    }

    fn draw_presenter_chrome(&mut self, ui: &egui::Ui, rect: egui::Rect, deck_rect: egui::Rect) {
        let fg = egui::Color32::from_gray(230);
        let dim = egui::Color32::from_gray(150);
        let padding = 24.0;

        // Wall clock, once-per-second resolution.
        let clock = Local::now().format("%H:%M:%S").to_string();
        let clock_galley =
            ui.painter()
                .layout_no_wrap(clock, egui::FontId::monospace(48.0), fg);
        let clock_pos = egui::pos2(rect.left() + padding, deck_rect.bottom() + padding);
        ui.painter().galley(clock_pos, clock_galley, fg);

        let counter = format!("{} / {}", self.deck.current() + 1, self.deck.slide_count());
        let counter_galley =
            ui.painter()
                .layout_no_wrap(counter, egui::FontId::proportional(22.0), dim);
        let counter_pos = egui::pos2(rect.left() + padding, deck_rect.bottom() + padding + 64.0);
        ui.painter().galley(counter_pos, counter_galley, dim);

        // Speaker notes fill the rest of the bottom strip.
        let notes = self.deck.current_notes(self.source.as_ref()).to_string();
        if !notes.is_empty() {
            let notes_left = rect.left() + padding + 280.0;
            let notes_width = (rect.right() - padding - notes_left).max(100.0);
            let galley = ui.painter().layout(
                notes,
                egui::FontId::proportional(20.0),
                fg,
                notes_width,
            );
            let pos = egui::pos2(notes_left, deck_rect.bottom() + padding);
            ui.painter().galley(pos, galley, fg);
        }
    }
}

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initialized {
            self.deck
                .initial_refresh(ctx, self.source.as_ref(), self.stage);
            self.initialized = true;
        }

        let commands = ctx.input(|i| decode_commands(i));
        self.dispatch(ctx, commands);

        // Updates fire at the display's refresh rate and on every input
        // event; the timer converts elapsed time into fixed-rate ticks so
        // the fade takes its configured duration on any monitor.
        let elapsed = self.last_update.elapsed();
        self.last_update = Instant::now();
        for _ in 0..self.ticker.advance(elapsed) {
            self.deck.tick();
        }

        if self.deck.is_fading() {
            ctx.request_repaint_after(self.ticker.interval());
        } else {
            // Wake at the next second boundary for the clock.
            let subsec = Local::now().timestamp_subsec_millis().min(999) as u64;
            ctx.request_repaint_after(Duration::from_millis(1000 - subsec));
        }

        self.draw_show_window(ctx);

        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("pdfdeck-presenter"),
            egui::ViewportBuilder::default()
                .with_title("pdfdeck \u{2014} presenter")
                .with_inner_size([1100.0, 700.0]),
            |ctx, _class| {
                let commands = ctx.input(|i| decode_commands(i));
                self.dispatch(ctx, commands);
                self.draw_presenter_window(ctx);
            },
        );
    }
}

/// Decode raw input into logical commands; nothing past this point looks at
/// key codes or buttons.
fn decode_commands(i: &egui::InputState) -> Vec<Command> {
    let mut commands = Vec::new();

    if i.key_pressed(egui::Key::ArrowRight)
        || i.key_pressed(egui::Key::Space)
        || i.key_pressed(egui::Key::PageDown)
        || i.key_pressed(egui::Key::N)
    {
        commands.push(Command::Advance);
    }
    if i.key_pressed(egui::Key::ArrowLeft)
        || i.key_pressed(egui::Key::PageUp)
        || i.key_pressed(egui::Key::P)
    {
        commands.push(Command::Retreat);
    }
    if i.key_pressed(egui::Key::Home) {
        commands.push(Command::JumpFirst);
    }
    if i.key_pressed(egui::Key::End) {
        commands.push(Command::JumpLast);
    }
    if i.key_pressed(egui::Key::F) {
        commands.push(Command::ToggleFullscreen);
    }
    if i.key_pressed(egui::Key::Q) || i.key_pressed(egui::Key::Escape) {
        commands.push(Command::Quit);
    }

    if i.pointer.button_pressed(egui::PointerButton::Primary) {
        commands.push(Command::Advance);
    }
    if i.pointer.button_pressed(egui::PointerButton::Secondary) {
        commands.push(Command::Retreat);
    }

    commands
}

fn stage_for_width(width: f32) -> StageMetrics {
    StageMetrics {
        stage_width: width,
        slide_width: width * DECK_SLIDE_FRACTION,
        gap: width * DECK_GAP_FRACTION,
    }
}

/// Largest rect of the given aspect ratio centered in the panel.
fn fit_rect(panel: egui::Rect, aspect: f32) -> egui::Rect {
    let aspect = aspect.max(0.01);
    let mut w = panel.width();
    let mut h = w / aspect;
    if h > panel.height() {
        h = panel.height();
        w = h * aspect;
    }
    egui::Rect::from_center_size(panel.center(), egui::vec2(w, h))
}

pub fn run(file: PathBuf, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let path = std::fs::canonicalize(&file)?;
    let source = PdfiumSource::open(&path)?;
    let slide_count = source.page_count();

    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();
    let fade_ms = defaults.fade_ms.unwrap_or(DEFAULT_FADE_MS);
    let deck_angle = defaults.deck_angle.unwrap_or(DEFAULT_DECK_ANGLE);

    let mut deck = DeckContext::new(slide_count, RENDER_WIDTH, fade_ms, FRAME_RATE, deck_angle);
    if let Some(slide) = start_slide {
        deck.set_start_slide(slide.saturating_sub(1));
    }

    let title = format!(
        "pdfdeck \u{2014} {}",
        file.file_name().unwrap_or_default().to_string_lossy()
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PresenterApp::new(
                deck,
                Box::new(source),
                !windowed,
                1100.0,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
