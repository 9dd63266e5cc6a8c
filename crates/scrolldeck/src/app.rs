use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::deck::{self, Block, Deck, SlideContent};
use crate::nav::{
    CommitKind, ControlEvent, NavKey, NavSettings, NavigationIntent, SlideController,
    SlideRegistry, SmoothScroller, Viewport,
};
use crate::theme::Theme;

const TOOLBAR_HEIGHT: f32 = 44.0;
const MENU_MAX_HEIGHT: f32 = 420.0;

const NAV_KEYS: [(egui::Key, NavKey); 6] = [
    (egui::Key::ArrowDown, NavKey::Down),
    (egui::Key::PageDown, NavKey::PageDown),
    (egui::Key::ArrowUp, NavKey::Up),
    (egui::Key::PageUp, NavKey::PageUp),
    (egui::Key::Home, NavKey::Home),
    (egui::Key::End, NavKey::End),
];

struct DeckApp {
    deck: Deck,
    theme: Theme,
    controller: SlideController<SmoothScroller>,
    /// Requested with `--slide`; issued once the page height is known.
    start_slide: Option<usize>,
    /// Where the menu toggle was drawn last frame, for outside-click checks.
    menu_toggle_rect: egui::Rect,
}

impl DeckApp {
    fn new(deck: Deck, theme: Theme, settings: NavSettings, start_slide: Option<usize>) -> Self {
        let registry = SlideRegistry::build(&deck);
        let controller = SlideController::new(registry, SmoothScroller::new(0.0, 0.0), settings);
        Self {
            deck,
            theme,
            controller,
            start_slide,
            menu_toggle_rect: egui::Rect::NOTHING,
        }
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1280.0;
        let ref_h = 720.0;
        (rect.width() / ref_w).min(rect.height() / ref_h).max(0.25)
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();
        let mut events = Vec::new();
        let mut viewport_cmds = Vec::new();
        let mut toggle_theme = false;

        ctx.input(|i| {
            for (key, nav) in NAV_KEYS {
                if i.key_pressed(key) {
                    events.push(ControlEvent::Key(nav));
                }
            }
            if i.key_pressed(egui::Key::Escape) {
                events.push(ControlEvent::ClickedOutsideMenu);
            }
            if typing {
                return;
            }
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            toggle_theme = i.key_pressed(egui::Key::D);
        });

        // Sending viewport commands inside ctx.input() would deadlock.
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if toggle_theme {
            self.theme = self.theme.toggled();
        }
        for event in events {
            self.controller.dispatch(event);
        }
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        let select_all = self.controller.take_select_all();
        let surface = self.controller.surface();
        let prev_enabled = surface.prev_enabled();
        let next_enabled = surface.next_enabled();
        let has_slides = surface.input_max() > 0;
        let menu_open = surface.menu().is_open();
        let count_label = surface.count_label();
        let mut text = surface.input_text().to_string();
        let label_color = if has_slides {
            self.theme.foreground
        } else {
            self.theme.disabled
        };

        // Applied after the field's commit, which a click on a button also
        // triggers in the same frame.
        let mut clicks = Vec::new();

        ui.horizontal_centered(|ui| {
            if ui
                .add_enabled(has_slides, egui::Button::new("⏮"))
                .on_hover_text("First slide (Home)")
                .clicked()
            {
                clicks.push(ControlEvent::FirstClicked);
            }
            if ui
                .add_enabled(prev_enabled, egui::Button::new("▲"))
                .on_hover_text("Previous slide (Up / Page Up)")
                .clicked()
            {
                clicks.push(ControlEvent::PreviousClicked);
            }

            let id = ui.make_persistent_id("slide-number");
            if select_all {
                let mut state =
                    egui::text_edit::TextEditState::load(ui.ctx(), id).unwrap_or_default();
                let cr = egui::text::CCursorRange::two(
                    egui::text::CCursor::new(0),
                    egui::text::CCursor::new(text.chars().count()),
                );
                state.cursor.set_char_range(Some(cr));
                state.store(ui.ctx(), id);
            }
            let response = ui.add_enabled(
                has_slides,
                egui::TextEdit::singleline(&mut text)
                    .id(id)
                    .desired_width(44.0)
                    .horizontal_align(egui::Align::Center),
            );
            if response.gained_focus() {
                self.controller.dispatch(ControlEvent::InputFocused);
            }
            if response.changed() {
                self.controller.dispatch(ControlEvent::InputEdited(text));
            }
            if response.lost_focus() {
                let kind = ui.input(|i| {
                    if i.key_pressed(egui::Key::Enter) {
                        CommitKind::Enter
                    } else if i.key_pressed(egui::Key::Escape) {
                        CommitKind::Cancel
                    } else {
                        CommitKind::Blur
                    }
                });
                let text = self.controller.surface().input_text().to_string();
                self.controller
                    .dispatch(ControlEvent::InputCommitted { text, kind });
            } else if response.has_focus() && !self.controller.surface().input_focused() {
                response.surrender_focus();
            }
            ui.label(egui::RichText::new(count_label).color(label_color));

            if ui
                .add_enabled(next_enabled, egui::Button::new("▼"))
                .on_hover_text("Next slide (Down / Page Down)")
                .clicked()
            {
                clicks.push(ControlEvent::NextClicked);
            }
            if ui
                .add_enabled(has_slides, egui::Button::new("⏭"))
                .on_hover_text("Last slide (End)")
                .clicked()
            {
                clicks.push(ControlEvent::LastClicked);
            }

            ui.separator();
            let toggle = ui
                .add_enabled_ui(has_slides, |ui| ui.selectable_label(menu_open, "☰ Slides"))
                .inner;
            self.menu_toggle_rect = toggle.rect;
            if toggle.clicked() {
                clicks.push(ControlEvent::MenuToggled);
            }
        });

        for event in clicks {
            self.controller.dispatch(event);
        }
    }

    fn draw_menu(&mut self, ctx: &egui::Context) {
        let menu = self.controller.surface().menu();
        if !menu.is_open() {
            return;
        }
        let entries: Vec<(usize, String, bool)> = menu
            .entries()
            .iter()
            .map(|e| (e.slide(), e.label().to_string(), e.is_current()))
            .collect();
        let accent = self.theme.accent;
        let mut clicked = None;

        let area = egui::Area::new(egui::Id::new("slide-menu"))
            .order(egui::Order::Foreground)
            .pivot(egui::Align2::LEFT_BOTTOM)
            .fixed_pos(self.menu_toggle_rect.left_top())
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .max_height(MENU_MAX_HEIGHT)
                        .show(ui, |ui| {
                            for (slide, label, current) in &entries {
                                let mut text = egui::RichText::new(format!("{slide}. {label}"));
                                if *current {
                                    text = text.color(accent).strong();
                                }
                                if ui.selectable_label(*current, text).clicked() {
                                    clicked = Some(*slide);
                                }
                            }
                        });
                });
            });

        if let Some(slide) = clicked {
            self.controller.dispatch(ControlEvent::MenuEntryClicked(slide));
            return;
        }
        let outside_click = ctx.input(|i| {
            i.pointer.any_click()
                && i.pointer.interact_pos().is_some_and(|pos| {
                    !area.response.rect.contains(pos) && !self.menu_toggle_rect.contains(pos)
                })
        });
        if outside_click {
            self.controller.dispatch(ControlEvent::ClickedOutsideMenu);
        }
    }

    fn draw_pages(&self, ui: &egui::Ui, rect: egui::Rect, offset: f32, page_height: f32) {
        let painter = ui.painter_at(rect);
        let scale = Self::compute_scale(rect);

        if self.deck.slides.is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No slides",
                egui::FontId::proportional(self.theme.h2_size * scale),
                self.theme.foreground,
            );
            return;
        }

        for (page, slide) in self.deck.slides.iter().enumerate() {
            let top = rect.top() + page as f32 * page_height - offset;
            let page_rect = egui::Rect::from_min_size(
                egui::pos2(rect.left(), top),
                egui::vec2(rect.width(), page_height),
            );
            if !page_rect.intersects(rect) {
                continue;
            }
            painter.rect_filled(page_rect, 0.0, self.theme.page_background(page));
            draw_slide(&painter, slide, &self.theme, page_rect, scale);
        }
    }
}

fn draw_slide(
    painter: &egui::Painter,
    slide: &SlideContent,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) {
    let padding = 72.0 * scale;
    let content = rect.shrink(padding);
    let gap = 20.0 * scale;
    let mut y = content.top();

    for block in &slide.blocks {
        if y > content.bottom() {
            break;
        }
        match block {
            Block::Heading { level, text } => {
                let font = egui::FontId::proportional(theme.heading_size(*level) * scale);
                let galley =
                    painter.layout(text.clone(), font, theme.heading_color, content.width());
                let height = galley.rect.height();
                painter.galley(egui::pos2(content.left(), y), galley, theme.heading_color);
                y += height + gap;
            }
            Block::Paragraph(text) => {
                let font = egui::FontId::proportional(theme.body_size * scale);
                let galley = painter.layout(text.clone(), font, theme.foreground, content.width());
                let height = galley.rect.height();
                painter.galley(egui::pos2(content.left(), y), galley, theme.foreground);
                y += height + gap;
            }
            Block::Bullet(text) => {
                let size = theme.body_size * scale;
                let indent = size * 1.2;
                painter.text(
                    egui::pos2(content.left(), y),
                    egui::Align2::LEFT_TOP,
                    "•",
                    egui::FontId::proportional(size),
                    theme.accent,
                );
                let galley = painter.layout(
                    text.clone(),
                    egui::FontId::proportional(size),
                    theme.foreground,
                    content.width() - indent,
                );
                let height = galley.rect.height();
                painter.galley(
                    egui::pos2(content.left() + indent, y),
                    galley,
                    theme.foreground,
                );
                y += height + gap * 0.5;
            }
            Block::Code(code) => {
                let inner = 16.0 * scale;
                let galley = painter.layout(
                    code.clone(),
                    egui::FontId::monospace(theme.code_size * scale),
                    theme.code_foreground,
                    content.width() - inner * 2.0,
                );
                let box_rect = egui::Rect::from_min_size(
                    egui::pos2(content.left(), y),
                    egui::vec2(content.width(), galley.rect.height() + inner * 2.0),
                );
                painter.rect_filled(box_rect, 8.0 * scale, theme.code_background);
                painter.galley(
                    box_rect.min + egui::vec2(inner, inner),
                    galley,
                    theme.code_foreground,
                );
                y = box_rect.bottom() + gap;
            }
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_keys(ctx);

        egui::TopBottomPanel::bottom("toolbar")
            .exact_height(TOOLBAR_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(self.theme.toolbar_background)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| self.draw_toolbar(ui));

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let page_height = rect.height();
                let count = self.controller.slide_count();
                let viewport = Viewport {
                    offset: 0.0,
                    height: rect.height(),
                    page_height,
                };

                self.controller
                    .scroller_mut()
                    .set_geometry(page_height, viewport.max_offset(count));
                if let Some(slide) = self.start_slide.take() {
                    self.controller.navigate(NavigationIntent::JumpTo(slide));
                }
                if ui.rect_contains_pointer(rect) {
                    let dy = ctx.input(|i| i.smooth_scroll_delta.y);
                    self.controller.scroller_mut().nudge(-dy);
                }

                let offset = self.controller.scroller_mut().tick(now);
                self.controller.on_scroll(&Viewport { offset, ..viewport });
                self.draw_pages(ui, rect, offset, page_height);

                if self.controller.scroller().is_animating() {
                    ctx.request_repaint();
                }
            });

        self.draw_menu(ctx);
    }
}

pub fn run(file: PathBuf, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let deck = deck::load(&file)?;
    if deck.slides.is_empty() {
        warn!("no slides found in {}", file.display());
    }

    let config = Config::load_or_default();
    let theme_name = deck
        .meta
        .theme
        .as_deref()
        .or(config.theme())
        .unwrap_or("light");
    let theme = Theme::from_name(theme_name);
    let settings = config.nav_settings();

    let title = deck.meta.title.clone().unwrap_or_else(|| {
        format!(
            "scrolldeck \u{2014} {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        )
    });
    info!(
        slides = deck.slides.len(),
        theme = %theme.name,
        "presenting {}",
        file.display()
    );

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0 + TOOLBAR_HEIGHT])
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
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(deck, theme, settings, start_slide)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
