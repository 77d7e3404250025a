use super::hit_map::HitMap;
use super::page::render_page;
use crate::core::{Action, AppCore};
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::AppTheme;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Scrolled window onto the page
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: u16,
    pub page_height: u16,
    /// Terminal rows available to the page (status bar excluded)
    pub height: u16,
}

impl Viewport {
    pub fn max_offset(&self) -> u16 {
        self.page_height.saturating_sub(self.height)
    }

    pub fn resize(&mut self, page_height: u16, height: u16) {
        self.page_height = page_height;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let offset = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = offset as u16;
    }

    /// Apply a scroll action; other actions are ignored
    pub fn scroll(&mut self, action: Action) {
        let page = self.height.saturating_sub(1).max(1) as i32;
        match action {
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-page),
            Action::PageDown => self.scroll_by(page),
            _ => {}
        }
    }

    /// Page row under screen row `y`, if `y` shows the page
    pub fn page_row(&self, y: u16) -> Option<u16> {
        (y < self.height).then(|| y + self.offset)
    }
}

/// TUI Frontend using ratatui
///
/// Renders the page off-screen each frame and shows the rows the viewport
/// covers, with a key hint bar on the last terminal row.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    theme: AppTheme,
    started: Instant,
    viewport: Viewport,
    hits: HitMap,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new(theme: AppTheme) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(33),
            theme,
            started: Instant::now(),
            viewport: Viewport::default(),
            hits: HitMap::default(),
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    pub fn scroll(&mut self, action: Action) {
        self.viewport.scroll(action);
    }

    /// Button under a screen position, if any
    pub fn action_at(&self, x: u16, y: u16) -> Option<Action> {
        self.viewport
            .page_row(y)
            .and_then(|row| self.hits.action_at(x, row))
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
                mouse_event.modifiers,
            )),
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // First poll waits for a frame; the rest drain whatever queued up
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            match event::read() {
                Ok(ev) => {
                    if let Some(frontend_event) = Self::convert_event(ev) {
                        events.push(frontend_event);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read terminal event: {}", e);
                    events.push(FrontendEvent::quit());
                    break;
                }
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        let size = self.terminal.size()?;
        let elapsed = self.started.elapsed();
        let page = render_page(core, &self.theme, elapsed, size.width, &mut self.hits);
        self.viewport
            .resize(page.area.height, size.height.saturating_sub(1));

        let viewport = self.viewport;
        let status = status_line(core, &viewport);
        let theme = &self.theme;

        self.terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();
            buf.set_style(area, Style::default().bg(theme.background));

            let view = Rect::new(area.x, area.y, area.width, viewport.height.min(area.height));
            blit(&page, viewport.offset, buf, view);

            if area.height > 0 {
                let bar = Rect::new(area.x, area.bottom() - 1, area.width, 1);
                let style = Style::default()
                    .fg(theme.background)
                    .bg(theme.muted)
                    .add_modifier(Modifier::BOLD);
                buf.set_style(bar, style);
                buf.set_stringn(bar.x, bar.y, &status, bar.width as usize, style);
            }
        })?;

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

/// Copy page rows starting at `offset` into `area` of `target`
fn blit(page: &Buffer, offset: u16, target: &mut Buffer, area: Rect) {
    for row in 0..area.height {
        for col in 0..area.width {
            let Some(cell) = page.cell((col, offset + row)) else {
                continue;
            };
            if let Some(dest) = target.cell_mut((area.x + col, area.y + row)) {
                *dest = cell.clone();
            }
        }
    }
}

/// Key hints plus scroll position
fn status_line(core: &AppCore, viewport: &Viewport) -> String {
    let keys = &core.config.keybinds;
    let hint = |action: Action| keys.hint_for(action).unwrap_or("-").to_string();
    let mut line = format!(
        " {}/{} zone  {} heat  {}/{} fans  {} compare  {}/{} scroll  {} quit",
        hint(Action::NextZone),
        hint(Action::PreviousZone),
        hint(Action::ToggleHeatLoad),
        hint(Action::SetFanCount(crate::data::FanCount::Two)),
        hint(Action::SetFanCount(crate::data::FanCount::Three)),
        hint(Action::ToggleCompareMode),
        hint(Action::ScrollUp),
        hint(Action::ScrollDown),
        hint(Action::Quit),
    );
    if viewport.max_offset() > 0 {
        let percent = viewport.offset as u32 * 100 / viewport.max_offset() as u32;
        line.push_str(&format!("  [{}%]", percent));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::ViewState;
    use ratatui::style::Color;

    fn viewport() -> Viewport {
        let mut viewport = Viewport::default();
        viewport.resize(100, 20);
        viewport
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut viewport = viewport();
        viewport.scroll(Action::ScrollUp);
        assert_eq!(viewport.offset, 0);

        viewport.scroll(Action::PageDown);
        assert_eq!(viewport.offset, 19);
        for _ in 0..10 {
            viewport.scroll(Action::PageDown);
        }
        assert_eq!(viewport.offset, 80);

        viewport.scroll(Action::ScrollDown);
        assert_eq!(viewport.offset, 80);
        viewport.scroll(Action::PageUp);
        assert_eq!(viewport.offset, 61);
    }

    #[test]
    fn test_resize_clamps_offset() {
        let mut viewport = viewport();
        viewport.scroll_by(70);
        viewport.resize(100, 50);
        assert_eq!(viewport.offset, 50);
        viewport.resize(30, 50);
        assert_eq!(viewport.offset, 0);
    }

    #[test]
    fn test_page_row() {
        let mut viewport = viewport();
        viewport.scroll_by(5);
        assert_eq!(viewport.page_row(0), Some(5));
        assert_eq!(viewport.page_row(19), Some(24));
        // Status bar row
        assert_eq!(viewport.page_row(20), None);
    }

    #[test]
    fn test_blit_copies_scrolled_rows() {
        let mut page = Buffer::empty(Rect::new(0, 0, 4, 6));
        page.set_string(0, 3, "row3", Style::default().fg(Color::Red));
        let mut target = Buffer::empty(Rect::new(0, 0, 4, 2));
        blit(&page, 3, &mut target, Rect::new(0, 0, 4, 2));
        assert_eq!(target[(0, 0)].symbol(), "r");
        assert_eq!(target[(3, 0)].symbol(), "3");
        assert_eq!(target[(0, 0)].fg, Color::Red);
        assert_eq!(target[(0, 1)].symbol(), " ");
    }

    #[test]
    fn test_status_line_uses_keybinds() {
        let core = AppCore::new(Config::default(), ViewState::default());
        let mut viewport = viewport();
        let line = status_line(&core, &viewport);
        assert!(line.contains("Tab/Shift+Tab zone"));
        assert!(line.contains("h heat"));
        assert!(line.contains("q quit"));
        assert!(line.contains("[0%]"));

        viewport.scroll_by(80);
        assert!(status_line(&core, &viewport).contains("[100%]"));
    }
}
