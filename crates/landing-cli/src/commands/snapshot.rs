use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{backend::TestBackend, Terminal};

use landing_core::AppConfig;
use landing_tui::{app::App, load_theme};

#[derive(Debug, Clone, Copy)]
pub struct SnapshotOptions {
    pub width: u16,
    pub height: u16,
    pub scroll: u16,
    pub at_ms: u64,
    pub json: bool,
}

pub fn run(config: Arc<AppConfig>, options: SnapshotOptions) -> Result<()> {
    println!("{}", render(config, options)?);
    Ok(())
}

/// Mount the page, observe it at the top and at the requested scroll, then
/// advance the clock to `at_ms` and capture one frame.
pub fn render(config: Arc<AppConfig>, options: SnapshotOptions) -> Result<String> {
    let theme = load_theme(&config.ui.theme);
    let mounted = Instant::now();
    let mut app = App::new(config, theme, mounted);
    app.resize(options.width, options.height);

    app.update(mounted);
    if options.scroll > 0 {
        app.scroll.set_scroll(options.scroll.min(app.max_scroll()));
        app.update(mounted);
    }

    let at = mounted + Duration::from_millis(options.at_ms);
    let fired = app.update(at);
    tracing::debug!(
        scroll = app.scroll.current_scroll(),
        fired,
        "snapshot observed"
    );

    if options.json {
        return Ok(serde_json::to_string_pretty(&app.page.view(at))?);
    }

    let mut terminal = Terminal::new(TestBackend::new(options.width, options.height))?;
    terminal.draw(|frame| app.render(frame))?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let lines: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect();
    Ok(lines.join("\n"))
}
