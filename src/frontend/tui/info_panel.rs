//! Text panel for the selected zone.

use super::text::{put_str, wrap_text};
use crate::core::ViewController;
use crate::data::{Airflow, ViewState, Zone};
use crate::theme::AppTheme;
use crate::widgets::InfoPanelState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

pub struct InfoPanel<'a> {
    state: &'a InfoPanelState,
    theme: &'a AppTheme,
}

impl<'a> InfoPanel<'a> {
    pub fn new(state: &'a InfoPanelState, theme: &'a AppTheme) -> Self {
        Self { state, theme }
    }

    /// Content lines at the given inner width
    fn lines(state: &InfoPanelState, width: u16) -> Vec<(String, LineKind)> {
        let mut lines = Vec::new();
        if let Some(role) = state.role {
            lines.push((format!("Role: {}", role), LineKind::Role));
        }
        if let Some(recommendation) = &state.recommendation {
            for line in wrap_text(recommendation, width.saturating_sub(2)) {
                lines.push((format!(" {} ", line), LineKind::Badge));
            }
        }
        if !lines.is_empty() {
            lines.push((String::new(), LineKind::Body));
        }
        for line in wrap_text(state.body, width) {
            lines.push((line, LineKind::Body));
        }
        if let Some(details) = state.details {
            lines.push((String::new(), LineKind::Body));
            // Room for the quote bar
            for line in wrap_text(details, width.saturating_sub(2)) {
                lines.push((line, LineKind::Quote));
            }
        }
        lines
    }

    /// Height of the panel for `state`, borders included
    pub fn height(state: &InfoPanelState, width: u16) -> u16 {
        Self::lines(state, width.saturating_sub(4)).len() as u16 + 2
    }

    /// Tallest panel over every zone, so the layout does not jump on selection
    pub fn max_height(width: u16) -> u16 {
        Zone::ALL
            .iter()
            .map(|&zone| {
                let controller = ViewController::with_state(ViewState {
                    selected_zone: zone,
                    ..ViewState::default()
                });
                Self::height(&InfoPanelState::from_controller(&controller), width)
            })
            .max()
            .unwrap_or(2)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .title(format!(" {} ", self.state.title))
            .title_style(Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        block.render(area, buf);

        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2);
        let flow_color = match self.state.flow {
            Some(Airflow::Intake) => self.theme.cold,
            Some(Airflow::Exhaust) => self.theme.hot,
            None => self.theme.text,
        };

        for (row, (text, kind)) in Self::lines(self.state, width).iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            match kind {
                LineKind::Role => put_str(
                    buf,
                    x,
                    y,
                    text,
                    width,
                    Style::default().fg(flow_color).add_modifier(Modifier::BOLD),
                ),
                LineKind::Badge => put_str(
                    buf,
                    x,
                    y,
                    text,
                    width,
                    Style::default()
                        .fg(self.theme.accent)
                        .bg(self.theme.faded(self.theme.accent, 0.8)),
                ),
                LineKind::Body => {
                    put_str(buf, x, y, text, width, Style::default().fg(self.theme.text))
                }
                LineKind::Quote => {
                    put_str(buf, x, y, "▌", 1, Style::default().fg(self.theme.accent));
                    put_str(
                        buf,
                        x + 2,
                        y,
                        text,
                        width.saturating_sub(2),
                        Style::default()
                            .fg(self.theme.muted)
                            .add_modifier(Modifier::ITALIC),
                    );
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Role,
    Badge,
    Body,
    Quote,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::tui::text::buffer_lines;

    fn render(zone: Zone, width: u16) -> Vec<String> {
        let mut controller = ViewController::new();
        controller.select_zone(zone);
        let state = InfoPanelState::from_controller(&controller);
        let theme = AppTheme::default();
        let area = Rect::new(0, 0, width, InfoPanel::height(&state, width));
        let mut buf = Buffer::empty(area);
        InfoPanel::new(&state, &theme).render(area, &mut buf);
        buffer_lines(&buf)
    }

    #[test]
    fn test_overview_has_quote_and_no_badge() {
        let lines = render(Zone::Overview, 40);
        let text = lines.join("\n");
        assert!(lines[0].contains("Overview"));
        assert!(text.contains("▌"));
        assert!(!text.contains("Recommended"));
        assert!(!text.contains("Role:"));
    }

    #[test]
    fn test_zone_shows_role_and_badge() {
        let lines = render(Zone::Bottom, 40);
        assert!(lines[1].contains("Role: Intake"));
        assert!(lines[2].contains("Recommended: Reverse Blade"));
        assert!(!lines.join("").contains("▌"));
    }

    #[test]
    fn test_max_height_covers_every_zone() {
        let max = InfoPanel::max_height(30);
        for zone in Zone::ALL {
            let mut controller = ViewController::new();
            controller.select_zone(zone);
            let state = InfoPanelState::from_controller(&controller);
            assert!(InfoPanel::height(&state, 30) <= max);
        }
    }
}
