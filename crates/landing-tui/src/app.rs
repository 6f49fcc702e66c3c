use std::sync::Arc;
use std::time::Instant;

use landing_core::page::content::PLACEHOLDER_HREF;
use landing_core::page::{MousePosition, Page};
use landing_core::AppConfig;
use ratatui::{layout::Rect, Frame};

use crate::input::Action;
use crate::layout::{viewport_bounds, Layout};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::widgets::{BackgroundWidget, PageWidget, RailWidget, StatusBarWidget};

/// Narrowest content column that still gets the rail beside it
pub const MIN_MAIN_WIDTH: u16 = 48;

/// Screen regions of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Areas {
    /// Hidden on narrow terminals
    pub rail: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
}

impl Areas {
    pub fn split(area: Rect, rail_width: u16) -> Self {
        let body = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let status = Rect {
            y: body.bottom(),
            height: area.height.min(1),
            ..area
        };

        if rail_width > 0 && body.width >= rail_width + MIN_MAIN_WIDTH {
            Self {
                rail: Some(Rect {
                    width: rail_width,
                    ..body
                }),
                main: Rect {
                    x: body.x + rail_width,
                    width: body.width - rail_width,
                    ..body
                },
                status,
            }
        } else {
            Self {
                rail: None,
                main: body,
                status,
            }
        }
    }
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub page: Page,
    /// Page scroll in rows
    pub scroll: ScrollAnimator,
    /// Terminal size
    pub size: (u16, u16),
    pub areas: Areas,
    /// Content column as laid out for the last frame
    pub layout: Layout,
    pub rail_layout: Layout,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, now: Instant) -> Self {
        let page = Page::mount(&config.motion, now);
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());
        Self {
            config,
            theme,
            page,
            scroll,
            size: (0, 0),
            areas: Areas::default(),
            layout: Layout::default(),
            rail_layout: Layout::default(),
            pending_key: None,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.areas = Areas::split(Rect::new(0, 0, width, height), self.config.ui.rail_width);
    }

    fn px_per_row(&self) -> f64 {
        self.config.ui.px_per_row
    }

    pub fn viewport_rows(&self) -> u16 {
        self.areas.main.height
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_rows())
    }

    /// Scroll position as a percentage of the scrollable range
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_scroll();
        if max == 0 {
            100
        } else {
            (self.scroll.current_scroll() as u32 * 100 / max as u32) as u16
        }
    }

    /// Lay out the frame at `now`, advance scrolling and report reveal anchors
    /// against the visible window. Returns how many reveals fired.
    pub fn update(&mut self, now: Instant) -> usize {
        let px = self.px_per_row();
        let main = self.areas.main;
        self.layout = Layout::compute(&self.page.main(now), main.width, main.height, px);
        let scroll = self.scroll.update(self.max_scroll(), now);

        let viewport = viewport_bounds(scroll, main.width, main.height, px);
        let fired = self
            .page
            .observe(&self.layout.anchor_bounds(px), viewport, now);

        if let Some(rail) = self.areas.rail {
            self.rail_layout = Layout::compute(
                &self.page.rail(now),
                rail.width.saturating_sub(1),
                rail.height,
                px,
            );
        }
        fired
    }

    /// Something needs frames faster than the idle tick
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.scroll.needs_update() || self.page.is_transitioning(now)
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        let max = self.max_scroll();
        let rows = self.viewport_rows();

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_down(max),
            Action::ScrollUp => self.scroll.scroll_up(max),
            Action::ScrollHalfPageDown => self.scroll.scroll_half_page_down(rows, max),
            Action::ScrollHalfPageUp => self.scroll.scroll_half_page_up(rows, max),
            Action::ScrollPageDown => self.scroll.scroll_full_page_down(rows, max),
            Action::ScrollPageUp => self.scroll.scroll_full_page_up(rows, max),
            Action::JumpToTop => self.scroll.scroll_to(0, max, now),
            Action::JumpToBottom => self.scroll.scroll_to(max, max, now),
            Action::PendingG => {
                self.pending_key = Some('g');
                return;
            }
            Action::Wheel(delta) => self.scroll.scroll_by(delta, max),
            Action::PointerMove { column, row } => self.pointer_move(column, row, now),
            Action::PointerDown { column, row } => {
                self.pointer_move(column, row, now);
                self.page.set_pressed(true, now);
            }
            Action::PointerUp => {
                if self.page.hovered().is_some() {
                    self.status_message =
                        Some(format!("Link target '{}' is a placeholder", PLACEHOLDER_HREF));
                }
                self.page.set_pressed(false, now);
            }
            Action::None => return,
        }
        if self.scroll.needs_update() {
            self.status_message = None;
        }
        self.pending_key = None;
    }

    /// Pointer over a screen cell: hero parallax and hover hit-testing
    fn pointer_move(&mut self, column: u16, row: u16, now: Instant) {
        let main = self.areas.main;
        let inside = column >= main.left()
            && column < main.right()
            && row >= main.top()
            && row < main.bottom();

        let hit = if inside {
            let col = (column - main.x) as i32;
            let page_row = (row - main.y) as i32 + self.scroll.current_scroll() as i32;
            if self.layout.in_hero(col, page_row) {
                let (width, height) = self.size;
                self.page
                    .on_pointer_move(MousePosition::from_pointer(column, row, width, height));
            }
            self.layout.hit_test(col, page_row)
        } else {
            None
        };
        self.page.set_hovered(hit, now);
    }

    /// Draw the last laid-out frame
    pub fn render(&self, frame: &mut Frame) {
        let scroll = self.scroll.current_scroll();
        let main = self.areas.main;
        let gradient = self.page.gradient();

        let buf = frame.buffer_mut();
        BackgroundWidget::render(buf, main, self.layout.hero, &gradient, scroll, &self.theme);
        PageWidget::render(buf, main, &self.layout, scroll, &self.theme);
        if let Some(rail) = self.areas.rail {
            RailWidget::render(buf, rail, &self.rail_layout, &self.theme);
        }

        StatusBarWidget::render(frame, self.areas.status, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::page::{FOOTER_CTA, HERO_CTA};
    use landing_core::view::RevealId;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app(width: u16, height: u16, now: Instant) -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), now);
        app.resize(width, height);
        app
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_areas_hide_rail_when_narrow() {
        let wide = Areas::split(Rect::new(0, 0, 120, 40), 28);
        assert_eq!(wide.rail, Some(Rect::new(0, 0, 28, 39)));
        assert_eq!(wide.main, Rect::new(28, 0, 92, 39));
        assert_eq!(wide.status, Rect::new(0, 39, 120, 1));

        let narrow = Areas::split(Rect::new(0, 0, 60, 20), 28);
        assert_eq!(narrow.rail, None);
        assert_eq!(narrow.main.width, 60);
    }

    #[test]
    fn test_first_frame_fires_only_hero_reveals() {
        let t0 = Instant::now();
        let mut app = app(120, 40, t0);
        assert_eq!(app.update(t0), 4);
        for i in 0..4 {
            assert!(app.page.reveal(RevealId(i)).unwrap().is_in_view());
        }
        assert!(!app.page.reveal(RevealId(4)).unwrap().is_in_view());
        // Nothing re-fires on the next frame
        assert_eq!(app.update(t0 + Duration::from_millis(16)), 0);
    }

    #[test]
    fn test_hero_appears_after_reveal() {
        let t0 = Instant::now();
        let mut app = app(120, 40, t0);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        app.update(t0);
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(!screen_text(&terminal).contains("ABSOLUTE"));

        let later = t0 + Duration::from_secs(1);
        app.update(later);
        terminal.draw(|frame| app.render(frame)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("ABSOLUTE"));
        assert!(text.contains("INITIALIZE DEMO"));
        assert!(text.contains("CORE / OS"));
        assert!(text.contains("Revealed: 4/11"));
    }

    #[test]
    fn test_scrolling_to_bottom_reveals_footer() {
        let t0 = Instant::now();
        let mut app = app(120, 40, t0);
        app.update(t0);
        app.handle_action(Action::JumpToBottom, t0);
        let done = t0 + Duration::from_secs(1);
        app.update(done);
        assert_eq!(app.scroll.current_scroll(), app.max_scroll());
        app.update(done);
        assert!(app.page.reveal(RevealId(9)).unwrap().is_in_view());
        assert!(app.page.reveal(RevealId(10)).unwrap().is_in_view());
        assert_eq!(app.scroll_percent(), 100);
    }

    #[test]
    fn test_pointer_hovers_cta() {
        let t0 = Instant::now();
        let mut app = app(120, 40, t0);
        app.update(t0);
        let later = t0 + Duration::from_secs(1);
        app.update(later);

        let (_, region) = *app
            .layout
            .hits
            .iter()
            .find(|(id, _)| *id == HERO_CTA)
            .unwrap();
        let main = app.areas.main;
        let column = main.x + region.x as u16;
        let row = main.y + region.y as u16;

        app.handle_action(Action::PointerMove { column, row }, later);
        assert_eq!(app.page.hovered(), Some(HERO_CTA));
        assert_ne!(app.page.mouse(), MousePosition::default());

        app.handle_action(Action::PointerDown { column, row }, later);
        app.handle_action(Action::PointerUp, later);
        assert!(app.status_message.as_deref().unwrap().contains('#'));
        app.handle_action(Action::ScrollDown, later);
        assert_eq!(app.status_message, None);

        app.handle_action(Action::PointerMove { column: 0, row: 0 }, later);
        assert_eq!(app.page.hovered(), None);
        assert_ne!(app.page.hovered(), Some(FOOTER_CTA));
    }

    #[test]
    fn test_gg_then_other_key_resets_pending() {
        let t0 = Instant::now();
        let mut app = app(120, 40, t0);
        app.update(t0);
        app.handle_action(Action::PendingG, t0);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::ScrollDown, t0);
        assert_eq!(app.pending_key, None);
        app.handle_action(Action::Quit, t0);
        assert!(app.should_quit);
    }
}
