use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let revealed = app.page.reveals().iter().filter(|r| r.is_in_view()).count();
        let total = app.page.reveals().len();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let mut text = format!(
                " {:>3}% | Revealed: {}/{}",
                app.scroll_percent(),
                revealed,
                total
            );
            if app.config.motion.reduced_motion {
                text.push_str(" | Reduced motion");
            }
            text
        };

        let help_hint = " q:quit j/k:scroll C-d/C-u:half gg/G:top/bottom ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.text_main).bg(theme.bg_panel),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg_panel)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.text_muted).bg(theme.bg_panel),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
