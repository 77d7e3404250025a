//! Concept summary cards and the footer note.

use super::text::{put_centered, put_str, wrap_text};
use crate::data::Airflow;
use crate::theme::AppTheme;
use crate::widgets::summary::{CardTone, SUMMARY_TITLE};
use crate::widgets::{ConceptCard, CONCEPT_CARDS, FOOTER_NOTE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

const SIDE_BY_SIDE_MIN: u16 = 90;

pub struct Summary<'a> {
    theme: &'a AppTheme,
}

/// One wrapped line of a card body
struct CardLine {
    text: String,
    /// Leading chars drawn bold
    bold: usize,
    callout: bool,
}

impl<'a> Summary<'a> {
    pub fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    fn side_by_side(inner_width: u16) -> bool {
        inner_width >= SIDE_BY_SIDE_MIN
    }

    fn card_width(inner_width: u16) -> u16 {
        if Self::side_by_side(inner_width) {
            (inner_width - 2) / 3
        } else {
            inner_width
        }
    }

    fn card_lines(card: &ConceptCard, width: u16) -> Vec<CardLine> {
        let mut lines = Vec::new();
        for (label, text) in card.items {
            let full = match label {
                Some(label) => format!("{} {}", label, text),
                None => text.to_string(),
            };
            let mut bold = label.map(|l| l.chars().count()).unwrap_or(0);
            for text in wrap_text(&full, width) {
                let n = text.chars().count();
                lines.push(CardLine {
                    text,
                    bold: bold.min(n),
                    callout: false,
                });
                bold = bold.saturating_sub(n + 1);
            }
        }
        if let Some(callout) = card.callout {
            lines.push(CardLine {
                text: String::new(),
                bold: 0,
                callout: false,
            });
            for text in wrap_text(callout, width) {
                lines.push(CardLine {
                    text,
                    bold: 0,
                    callout: true,
                });
            }
        }
        lines
    }

    /// Card height, borders included
    fn card_height(card: &ConceptCard, card_width: u16) -> u16 {
        Self::card_lines(card, card_width.saturating_sub(4)).len() as u16 + 2
    }

    fn cards_height(inner_width: u16) -> u16 {
        let width = Self::card_width(inner_width);
        let heights = CONCEPT_CARDS.iter().map(|card| Self::card_height(card, width));
        if Self::side_by_side(inner_width) {
            heights.max().unwrap_or(0)
        } else {
            heights.sum()
        }
    }

    fn footer_lines(inner_width: u16) -> Vec<String> {
        wrap_text(FOOTER_NOTE, inner_width.saturating_sub(4))
    }

    /// Section height for a given outer width
    pub fn height(width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        2 + Self::cards_height(inner) + 1 + Self::footer_lines(inner).len() as u16
    }

    fn tone_color(&self, tone: CardTone) -> Color {
        match tone {
            CardTone::Flow(Airflow::Intake) => self.theme.cold,
            CardTone::Flow(Airflow::Exhaust) => self.theme.hot,
            CardTone::Dynamics => self.theme.accent,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .title(format!(" {} ", SUMMARY_TITLE));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = Self::card_width(inner.width);
        let mut y = inner.y;
        for (i, card) in CONCEPT_CARDS.iter().enumerate() {
            let height = Self::card_height(card, width);
            let rect = if Self::side_by_side(inner.width) {
                Rect::new(inner.x + i as u16 * (width + 1), inner.y, width, Self::cards_height(inner.width))
            } else {
                let rect = Rect::new(inner.x, y, width, height);
                y += height;
                rect
            };
            self.render_card(card, rect.intersection(inner), buf);
        }

        let mut y = inner.y + Self::cards_height(inner.width) + 1;
        let note = Style::default()
            .fg(self.theme.muted)
            .add_modifier(Modifier::ITALIC);
        for line in Self::footer_lines(inner.width) {
            put_centered(buf, inner, y, &line, note);
            y += 1;
        }
    }

    fn render_card(&self, card: &ConceptCard, area: Rect, buf: &mut Buffer) {
        let color = self.tone_color(card.tone);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.faded(color, 0.4)))
            .title(format!(" {} ", card.heading))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        block.render(area, buf);

        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2);
        let text = Style::default().fg(self.theme.text);
        for (row, line) in Self::card_lines(card, width).iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            if line.callout {
                put_str(buf, x, y, &line.text, width, Style::default().fg(self.theme.accent));
                continue;
            }
            put_str(buf, x, y, &line.text, width, text);
            if line.bold > 0 {
                let label: String = line.text.chars().take(line.bold).collect();
                put_str(buf, x, y, &label, width, text.fg(color).add_modifier(Modifier::BOLD));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::tui::text::buffer_lines;

    fn render(width: u16) -> (Buffer, Vec<String>) {
        let theme = AppTheme::default();
        let area = Rect::new(0, 0, width, Summary::height(width));
        let mut buf = Buffer::empty(area);
        Summary::new(&theme).render(area, &mut buf);
        let lines = buffer_lines(&buf);
        (buf, lines)
    }

    #[test]
    fn test_wide_layout_puts_cards_side_by_side() {
        let (_, lines) = render(120);
        let headings = lines
            .iter()
            .find(|line| line.contains("1. Intake"))
            .expect("card headings");
        assert!(headings.contains("2. Exhaust"));
        assert!(headings.contains("3. Airflow Dynamics"));
    }

    #[test]
    fn test_narrow_layout_stacks_cards() {
        let (_, lines) = render(60);
        let row = |needle: &str| lines.iter().position(|line| line.contains(needle));
        let intake = row("1. Intake").expect("intake card");
        let exhaust = row("2. Exhaust").expect("exhaust card");
        assert!(intake < exhaust);
        assert!(lines.join(" ").contains("slight positive pressure"));
    }

    #[test]
    fn test_footer_is_last() {
        let (_, lines) = render(100);
        let note = lines
            .iter()
            .position(|line| line.contains("Note:"))
            .expect("footer note");
        assert!(note >= lines.len() - 4);
    }

    #[test]
    fn test_labels_are_bold() {
        let (buf, lines) = render(60);
        let y = lines.iter().position(|l| l.contains("Use:")).expect("label row");
        let byte = lines[y].find("Use:").expect("label col");
        let x = lines[y][..byte].chars().count();
        assert!(buf[(x as u16, y as u16)].modifier.contains(Modifier::BOLD));
    }
}
