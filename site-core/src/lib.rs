use eframe::{App, CreationContext};
use egui::{self, Align, Layout, Rect, RichText, ScrollArea, Ui, UiBuilder};
use folio::{
    ActiveSectionTracker, CarouselScroller, CenterBand, Content, ContentError,
    IntersectionObserver, Language, NavBar, Palette, ParticleField, Preferences, Region,
    RevealTracker, ScrollDirection, SectionId, SectionRegions, SettingsBackground,
    SettingsScroll, NEON_LINES,
};
#[cfg(all(feature = "events", target_arch = "wasm32"))]
use std::{cell::RefCell, rc::Rc};

mod keybindings;
mod metrics;
mod overlays;
mod page;
mod page_scroll;
mod ui_consts;

use crate::keybindings::{dispatch as dispatch_keybindings, Command};
use crate::metrics::FpsCounter;
use crate::page::{demo_modal, render_demos, render_section, DemosState, Page};
use crate::page_scroll::PageScroll;
use crate::ui_consts::{
    OVERLAY_BTN_SIZE, OVERLAY_BTN_SPACING, OVERLAY_ICON_SIZE, PAGE_MAX_WIDTH, SECTION_SPACING,
    UI_MARGIN,
};
#[cfg(all(feature = "events", not(target_arch = "wasm32")))]
pub use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
use folio::events::{
    EventSink, PayloadActiveSection, PayloadCarouselScroll, PayloadDemo, PayloadLanguage,
    PayloadTheme, SiteEvent,
};
#[cfg(feature = "events")]
use folio::ActivationSource;

pub use crate::overlays::info_overlay::version_text;

// Main site application state
pub struct SiteApp {
    pub content: Content,
    pub settings_scroll: SettingsScroll,
    pub settings_background: SettingsBackground,
    pub preferences: Preferences,
    pub language: Language,
    // Scroll spy
    tracker: ActiveSectionTracker,
    observer: IntersectionObserver,
    regions: SectionRegions,
    reveal: RevealTracker,
    // Page scroll
    page_scroll: PageScroll,
    viewport_height: f32,
    // Blocks
    demos: DemosState,
    particles: ParticleField,
    // Misc
    fps: FpsCounter,
    pub show_debug_overlay: bool,
    // Events (feature gated)
    #[cfg(feature = "events")]
    pub last_events: Vec<String>,
    #[cfg(all(feature = "events", not(target_arch = "wasm32")))]
    pub event_publisher: Sender<SiteEvent>,
    #[cfg(all(feature = "events", not(target_arch = "wasm32")))]
    pub event_consumer: Receiver<SiteEvent>,
    #[cfg(all(feature = "events", target_arch = "wasm32"))]
    pub events_buf: Rc<RefCell<Vec<SiteEvent>>>,
}

impl SiteApp {
    /// Loads the bundled content and the stored preferences.
    ///
    /// # Errors
    /// When the bundled content does not parse or validate.
    pub fn try_new(cc: &CreationContext<'_>) -> Result<Self, ContentError> {
        let content = Content::bundled()?;
        let preferences = Preferences::load(&cc.egui_ctx);
        preferences.theme.apply(&cc.egui_ctx);

        let settings_scroll = SettingsScroll::default();
        tracing::info!(
            version = version_text(),
            demos = content.demos.len(),
            theme = ?preferences.theme,
            "site started"
        );

        #[cfg(all(feature = "events", not(target_arch = "wasm32")))]
        let (event_publisher, event_consumer) = unbounded();

        Ok(Self {
            content,
            settings_background: SettingsBackground::default(),
            preferences,
            language: Language::default(),
            tracker: ActiveSectionTracker::default(),
            observer: IntersectionObserver::new(CenterBand::new(
                settings_scroll.center_band_margin,
            )),
            regions: SectionRegions::new(),
            reveal: RevealTracker::new(),
            page_scroll: PageScroll::default(),
            viewport_height: 0.0,
            demos: DemosState::new(CarouselScroller::new(
                settings_scroll.carousel_step_fraction,
                settings_scroll.carousel_scroll_duration,
            )),
            particles: ParticleField::default(),
            fps: FpsCounter::new(),
            show_debug_overlay: false,
            #[cfg(feature = "events")]
            last_events: Vec::new(),
            #[cfg(all(feature = "events", not(target_arch = "wasm32")))]
            event_publisher,
            #[cfg(all(feature = "events", not(target_arch = "wasm32")))]
            event_consumer,
            #[cfg(all(feature = "events", target_arch = "wasm32"))]
            events_buf: Rc::new(RefCell::new(Vec::new())),
            settings_scroll,
        })
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    /// Makes `id` active and smoothly scrolls it right below the nav bar.
    pub fn navigate(&mut self, id: SectionId, now: f64) {
        let target = self.tracker.navigate_to(
            id,
            &self.regions,
            self.page_scroll.offset,
            self.settings_scroll.nav_height,
        );
        self.reveal.replay(id, now);
        #[cfg(feature = "events")]
        self.emit(SiteEvent::ActiveSectionChanged(PayloadActiveSection {
            id,
            source: ActivationSource::Navigation,
        }));
        if let Some(target) = target {
            let target = self
                .page_scroll
                .start(target, self.settings_scroll.page_scroll_duration, now);
            tracing::debug!(section = %id, target, "navigating");
        }
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.preferences.theme = self.preferences.theme.toggled();
        self.preferences.theme.apply(ctx);
        self.preferences.save(ctx);
        tracing::info!(theme = ?self.preferences.theme, "theme changed");
        #[cfg(feature = "events")]
        self.emit(SiteEvent::ThemeChanged(PayloadTheme {
            theme: self.preferences.theme,
        }));
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::info!(language = %self.language, "language changed");
        #[cfg(feature = "events")]
        self.emit(SiteEvent::LanguageChanged(PayloadLanguage {
            language: self.language,
        }));
    }

    fn scroll_carousel(&mut self, direction: ScrollDirection, now: f64) {
        let (from, to) = self.demos.scroll(direction, now);
        self.on_carousel_scrolled(direction, from, to);
    }

    fn on_carousel_scrolled(&mut self, direction: ScrollDirection, from: f32, to: f32) {
        tracing::debug!(?direction, from, to, "carousel scrolled");
        #[cfg(feature = "events")]
        self.emit(SiteEvent::CarouselScrolled(PayloadCarouselScroll {
            direction,
            from,
            to,
        }));
    }

    fn apply_command(&mut self, ctx: &egui::Context, cmd: Command, now: f64) {
        match cmd {
            Command::NavigateTo(id) => self.navigate(id, now),
            Command::ScrollCarousel(direction) => self.scroll_carousel(direction, now),
            Command::ToggleTheme => self.toggle_theme(ctx),
            Command::ToggleLanguage => self.toggle_language(),
            Command::CloseModal => {
                if let Some(_index) = self.demos.open.take() {
                    #[cfg(feature = "events")]
                    self.emit(SiteEvent::DemoClosed(PayloadDemo { index: _index }));
                }
            }
            Command::ToggleDebug => self.show_debug_overlay = !self.show_debug_overlay,
        }
    }

    fn process_keybindings(&mut self, ctx: &egui::Context, now: f64) {
        for cmd in dispatch_keybindings(ctx, self.demos.open.is_some()) {
            self.apply_command(ctx, cmd, now);
        }
    }

    fn ui_background(&mut self, ui: &mut Ui, palette: &Palette, now: f64) {
        if !self.settings_background.enabled {
            return;
        }
        let bounds = ui.max_rect();
        if !bounds.is_positive() {
            return;
        }
        if self.settings_background.neon_lines {
            let dark_mode = ui.visuals().dark_mode;
            for line in &NEON_LINES {
                line.paint(ui.painter(), bounds, dark_mode, now);
            }
        }
        if self.particles.is_empty() {
            self.particles = ParticleField::new(
                self.settings_background.count,
                bounds,
                self.settings_background.speed,
                &mut rand::rng(),
            );
        }
        self.particles.step(bounds);
        self.particles
            .paint(ui.painter(), &self.settings_background, palette);
    }

    fn ui_page(&mut self, ui: &mut Ui, palette: Palette, now: f64) {
        // Wheel, touch or drag scrolling takes over from a running navigation
        let (wheel, dragging) =
            ui.input(|i| (i.raw_scroll_delta.y, i.pointer.is_decidedly_dragging()));
        if self.page_scroll.interrupt(wheel, dragging) {
            tracing::debug!("page scroll animation cancelled by user input");
        }

        let mut area = ScrollArea::vertical()
            .id_salt("site_page")
            .auto_shrink([false, false]);
        if let Some(offset) = self.page_scroll.tick(now) {
            area = area.vertical_scroll_offset(offset);
        }

        let page = Page {
            content: &self.content,
            lang: self.language,
            palette,
        };
        let reveal = &self.reveal;
        let reveal_duration = self.settings_scroll.reveal_duration;
        let demos = &mut self.demos;
        let nav_height = self.settings_scroll.nav_height;

        let mut rects: Vec<(SectionId, Rect)> = Vec::with_capacity(SectionId::ALL.len());
        let mut demos_out = None;
        let out = area.show(ui, |ui| {
            ui.add_space(nav_height + SECTION_SPACING / 2.0);
            let width = ui.available_width().min(PAGE_MAX_WIDTH);
            let side = ((ui.available_width() - width) / 2.0).max(0.0);
            ui.horizontal_top(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_width(width);
                    for id in SectionId::ALL {
                        let opacity = ease_out(reveal.progress(id, now, reveal_duration));
                        let response = ui
                            .scope(|ui| {
                                ui.set_opacity(opacity);
                                render_section(ui, id, page);
                            })
                            .response;
                        rects.push((id, response.rect));
                        ui.add_space(SECTION_SPACING);
                        if id == SectionId::Skills {
                            demos_out = Some(render_demos(ui, demos, page, now));
                            ui.add_space(SECTION_SPACING);
                        }
                    }
                });
            });
            ui.add_space(SECTION_SPACING);
        });

        let viewport = out.inner_rect;
        self.viewport_height = viewport.height();
        self.page_scroll.measured(out.state.offset.y, out.content_size.y, viewport.height());
        self.regions = rects
            .into_iter()
            .map(|(id, rect)| (id, Region::new(rect.top() - viewport.top(), rect.height())))
            .collect();

        if let Some(demos_out) = demos_out {
            if let Some((direction, from, to)) = demos_out.scrolled {
                self.on_carousel_scrolled(direction, from, to);
            }
            if let Some(_index) = demos_out.opened {
                #[cfg(feature = "events")]
                self.emit(SiteEvent::DemoOpened(PayloadDemo { index: _index }));
            }
        }

        self.track_sections(now);
    }

    fn track_sections(&mut self, now: f64) {
        let vh = self.viewport_height;
        let entries = self.observer.observe(&self.regions, vh);
        if let Some(_id) = self.tracker.handle_entries(&entries, &self.regions, vh) {
            #[cfg(feature = "events")]
            self.emit(SiteEvent::ActiveSectionChanged(PayloadActiveSection {
                id: _id,
                source: ActivationSource::ScrollSpy,
            }));
        }
        for (id, region) in self.regions.iter() {
            if self.reveal.observe(id, &region, vh, now) {
                tracing::trace!(section = %id, "section revealed");
            }
        }
    }

    fn overlay_nav_bar(&mut self, ctx: &egui::Context, palette: Palette, now: f64) {
        let screen = ctx.screen_rect();
        let bar = Rect::from_min_size(
            screen.min,
            egui::vec2(screen.width(), self.settings_scroll.nav_height),
        );
        let content = &self.content;
        let lang = self.language;
        let active = self.tracker.active();

        let clicked = egui::Area::new(egui::Id::new("site_nav_bar"))
            .order(egui::Order::Middle)
            .fixed_pos(bar.min)
            .movable(false)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(bar, 0.0, palette.background.gamma_multiply(0.92));
                let mut child = ui.new_child(
                    UiBuilder::new()
                        .max_rect(bar.shrink2(egui::vec2(UI_MARGIN, 0.0)))
                        .layout(Layout::left_to_right(Align::Center)),
                );
                NavBar::new(active, move |id| content.nav_label(id, lang))
                    .with_accent(palette.accent)
                    .show(&mut child)
                    .clicked
            })
            .inner;

        if let Some(id) = clicked {
            self.navigate(id, now);
        }
    }

    fn overlay_buttons(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let labels = &self.content.labels;
        let pos = egui::pos2(
            screen.right() - UI_MARGIN - OVERLAY_BTN_SIZE * 2.0 - OVERLAY_BTN_SPACING,
            screen.top() + self.settings_scroll.nav_height + UI_MARGIN,
        );
        let btn_size = egui::vec2(OVERLAY_BTN_SIZE, OVERLAY_BTN_SIZE);
        let theme_tip = labels.toggle_theme.get(self.language).clone();
        let lang_tip = labels.toggle_language.get(self.language).clone();
        let theme_icon = self.preferences.theme.toggle_icon();
        let lang_label = self.language.switch_label();

        let (toggle_theme, toggle_lang) = egui::Area::new(egui::Id::new("site_floating_buttons"))
            .order(egui::Order::Middle)
            .fixed_pos(pos)
            .movable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = OVERLAY_BTN_SPACING;
                    let theme = ui
                        .add_sized(
                            btn_size,
                            egui::Button::new(RichText::new(theme_icon).size(OVERLAY_ICON_SIZE)),
                        )
                        .on_hover_text(theme_tip)
                        .clicked();
                    let lang = ui
                        .add_sized(btn_size, egui::Button::new(RichText::new(lang_label).strong()))
                        .on_hover_text(lang_tip)
                        .clicked();
                    (theme, lang)
                })
                .inner
            })
            .inner;

        if toggle_theme {
            self.toggle_theme(ctx);
        }
        if toggle_lang {
            self.toggle_language();
        }
    }

    fn overlay_debug(&self, ctx: &egui::Context) {
        if !self.show_debug_overlay {
            return;
        }
        #[cfg(feature = "events")]
        let events = self.last_events.as_slice();
        #[cfg(not(feature = "events"))]
        let events: &[String] = &[];
        overlays::debug_overlay::render(
            ctx,
            &overlays::debug_overlay::DebugInfo {
                fps: self.fps.fps(),
                active: self.tracker.active(),
                language: self.language,
                scroll_offset: self.page_scroll.offset,
                viewport_height: self.viewport_height,
                regions: &self.regions,
                events,
            },
            self.settings_scroll.nav_height,
        );
    }

    fn is_animating(&self, now: f64) -> bool {
        self.page_scroll.is_animating()
            || self.demos.scroller.is_animating()
            || self
                .reveal
                .is_animating(now, self.settings_scroll.reveal_duration)
            || self.settings_background.enabled
    }
}

#[cfg(feature = "events")]
impl SiteApp {
    fn emit(&self, event: SiteEvent) {
        #[cfg(not(target_arch = "wasm32"))]
        EventSink::send(&self.event_publisher, event);
        #[cfg(target_arch = "wasm32")]
        EventSink::send(&self.events_buf, event);
    }

    fn consume_events(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        let drained: Vec<SiteEvent> = self.event_consumer.try_iter().collect();
        #[cfg(target_arch = "wasm32")]
        let drained: Vec<SiteEvent> = self.events_buf.borrow_mut().drain(..).collect();

        for e in drained {
            self.last_events.push(format!("{e:?}"));
        }
        if self.last_events.len() > ui_consts::EVENTS_LIMIT {
            let overflow = self.last_events.len() - ui_consts::EVENTS_LIMIT;
            self.last_events.drain(0..overflow);
        }
    }
}

/// Cubic ease-out used by the section entry fade.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

impl App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let palette = Palette::from_ctx(ctx);

        // Handle global keyboard shortcuts
        self.process_keybindings(ctx, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                self.ui_background(ui, &palette, now);
                self.ui_page(ui, palette, now);
            });

        self.overlay_nav_bar(ctx, palette, now);
        self.overlay_buttons(ctx);

        let page = Page {
            content: &self.content,
            lang: self.language,
            palette,
        };
        if let Some(_index) = demo_modal(ctx, &mut self.demos, page) {
            #[cfg(feature = "events")]
            self.emit(SiteEvent::DemoClosed(PayloadDemo { index: _index }));
        }

        overlays::info_overlay::render_info_overlay(ctx, &self.content.name);

        #[cfg(feature = "events")]
        self.consume_events();
        self.overlay_debug(ctx);

        self.fps.update();
        if self.is_animating(now) {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_is_clamped() {
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
