//! Fan comparison section: compare-mode buttons and two fan cards.

use super::animation::{pulse, rotation_step};
use super::controls::draw_button;
use super::hit_map::HitMap;
use super::text::{put_centered, put_char, put_str, wrap_text};
use crate::core::Action;
use crate::data::{Airflow, CompareMode};
use crate::theme::AppTheme;
use crate::widgets::fan_card::{COMPARATOR_SUBTITLE, COMPARATOR_TITLE};
use crate::widgets::{AirIndicator, FanCardState, Verdict};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};
use std::time::Duration;

const FACE_WIDTH: u16 = 11;
const FACE_HEIGHT: u16 = 5;
/// Badge, face, air arrow and verdict
const CARD_FIXED_ROWS: u16 = 1 + FACE_HEIGHT + 1 + 1;
const SIDE_BY_SIDE_MIN: u16 = 50;
const BLADE_PERIOD: Duration = Duration::from_millis(1600);
const PULSE_PERIOD: Duration = Duration::from_millis(1200);

/// Blade ring around the hub, clockwise from the top left
const RING: [(i16, i16); 8] = [
    (-2, -1),
    (0, -1),
    (2, -1),
    (3, 0),
    (2, 1),
    (0, 1),
    (-2, 1),
    (-3, 0),
];

pub struct FanCompare<'a> {
    mode: CompareMode,
    theme: &'a AppTheme,
    elapsed: Duration,
}

impl<'a> FanCompare<'a> {
    pub fn new(mode: CompareMode, theme: &'a AppTheme, elapsed: Duration) -> Self {
        Self {
            mode,
            theme,
            elapsed,
        }
    }

    fn side_by_side(inner_width: u16) -> bool {
        inner_width >= SIDE_BY_SIDE_MIN
    }

    fn card_width(inner_width: u16) -> u16 {
        if Self::side_by_side(inner_width) {
            (inner_width - 1) / 2
        } else {
            inner_width
        }
    }

    /// Card height, borders included, tall enough for either caption in any mode
    fn card_height(card_width: u16) -> u16 {
        let caption_rows = [CompareMode::Intake, CompareMode::Exhaust]
            .iter()
            .flat_map(|&mode| FanCardState::pair(mode))
            .map(|card| wrap_text(card.caption, card_width.saturating_sub(4)).len() as u16)
            .max()
            .unwrap_or(1);
        CARD_FIXED_ROWS + caption_rows + 2
    }

    fn subtitle_rows(inner_width: u16) -> u16 {
        wrap_text(COMPARATOR_SUBTITLE, inner_width.saturating_sub(2)).len() as u16
    }

    /// Section height for a given outer width
    pub fn height(width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let card = Self::card_height(Self::card_width(inner));
        let cards = if Self::side_by_side(inner) { card } else { card * 2 };
        // subtitle, buttons row, blank row
        2 + Self::subtitle_rows(inner) + 2 + cards
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .title(format!(" {} ", COMPARATOR_TITLE));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        let muted = Style::default().fg(self.theme.muted);
        for line in wrap_text(COMPARATOR_SUBTITLE, inner.width.saturating_sub(2)) {
            put_centered(buf, inner, y, &line, muted);
            y += 1;
        }

        // Mode buttons, centered
        let buttons = [
            (CompareMode::Intake, "↑ Intake"),
            (CompareMode::Exhaust, "↓ Exhaust"),
        ];
        let button_width = 13;
        let total = button_width * 2 + 1;
        let start = inner.x + inner.width.saturating_sub(total) / 2;
        for (i, (mode, label)) in buttons.iter().enumerate() {
            let rect = Rect::new(start + i as u16 * (button_width + 1), y, button_width, 1)
                .intersection(inner);
            let fill = match mode {
                Airflow::Intake => self.theme.cold,
                Airflow::Exhaust => self.theme.hot,
            };
            draw_button(buf, rect, label, self.mode == *mode, fill, self.theme);
            hits.push(rect, Action::SetCompareMode(*mode));
        }
        y += 2;

        let card_width = Self::card_width(inner.width);
        let card_height = Self::card_height(card_width);
        for (i, card) in FanCardState::pair(self.mode).iter().enumerate() {
            let rect = if Self::side_by_side(inner.width) {
                Rect::new(inner.x + i as u16 * (card_width + 1), y, card_width, card_height)
            } else {
                Rect::new(inner.x, y + i as u16 * card_height, card_width, card_height)
            };
            self.render_card(card, rect.intersection(inner), buf);
        }
    }

    fn render_card(&self, card: &FanCardState, area: Rect, buf: &mut Buffer) {
        let border = if card.pretty_face {
            self.theme.good
        } else {
            self.theme.border
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < CARD_FIXED_ROWS || inner.width < FACE_WIDTH {
            return;
        }

        let mut y = inner.y;
        let badge = format!(" {} ", card.badge);
        put_centered(
            buf,
            inner,
            y,
            &badge,
            Style::default()
                .fg(self.theme.text)
                .bg(self.theme.faded(self.theme.border, 0.4))
                .add_modifier(Modifier::BOLD),
        );
        y += 1;

        let face = Rect::new(inner.x + (inner.width - FACE_WIDTH) / 2, y, FACE_WIDTH, FACE_HEIGHT);
        self.render_face(card, face, buf);
        y += FACE_HEIGHT;

        let (arrow, color) = match card.air {
            AirIndicator::Incoming => (
                '↑',
                self.theme
                    .faded(self.theme.cold, 0.5 * pulse(self.elapsed, PULSE_PERIOD)),
            ),
            AirIndicator::Outgoing => ('↓', self.theme.faded(self.theme.hot, 0.4)),
        };
        let air_x = inner.x + inner.width.saturating_sub(5) / 2;
        put_str(buf, air_x, y, "AIR", 3, Style::default().fg(self.theme.muted));
        put_char(buf, air_x + 4, y, arrow, Style::default().fg(color).add_modifier(Modifier::BOLD));
        y += 1;

        let verdict_color = match card.verdict {
            Verdict::Ideal => self.theme.good,
            Verdict::Poor => self.theme.bad,
        };
        put_centered(
            buf,
            inner,
            y,
            card.verdict.label(),
            Style::default().fg(verdict_color).add_modifier(Modifier::BOLD),
        );
        y += 1;

        let caption = Style::default().fg(self.theme.muted);
        for line in wrap_text(card.caption, inner.width.saturating_sub(2)) {
            if y >= inner.bottom() {
                break;
            }
            put_centered(buf, inner, y, &line, caption);
            y += 1;
        }
    }

    fn render_face(&self, card: &FanCardState, area: Rect, buf: &mut Buffer) {
        let frame = if card.pretty_face {
            self.theme.accent
        } else {
            self.theme.muted
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(frame))
            .render(area, buf);

        let cx = (area.x + area.width / 2) as i16;
        let cy = (area.y + area.height / 2) as i16;
        let at = |(dx, dy): (i16, i16)| ((cx + dx) as u16, (cy + dy) as u16);

        // Four blades, every other ring slot
        let step = rotation_step(self.elapsed, BLADE_PERIOD, RING.len());
        let blade = if card.pretty_face {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.faded(self.theme.muted, 0.5))
        };
        for k in 0..4 {
            let (x, y) = at(RING[(step + k * 2) % RING.len()]);
            put_char(buf, x, y, if card.pretty_face { '◆' } else { '·' }, blade);
        }

        let hub_x = cx as u16 - 1;
        if card.pretty_face {
            put_str(
                buf,
                hub_x,
                cy as u16,
                card.fan.hub_label(),
                3,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            // Struts and motor sticker on the back
            let strut = Style::default().fg(self.theme.muted);
            for (offset, glyph) in [((-3, -1), '╲'), ((3, -1), '╱'), ((-3, 1), '╱'), ((3, 1), '╲')] {
                let (x, y) = at(offset);
                put_char(buf, x, y, glyph, strut);
            }
            put_str(
                buf,
                hub_x,
                cy as u16,
                "12V",
                3,
                Style::default().fg(self.theme.background).bg(self.theme.muted),
            );
        }
    }
}
