//! Zone buttons and the heat / fan count toggles.

use super::hit_map::HitMap;
use super::text::{put_centered, put_str};
use crate::core::Action;
use crate::data::{FanCount, ViewState, Zone};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

/// Height of the controls block, borders included
pub const CONTROLS_HEIGHT: u16 = 8;

const ZONE_ROWS: [&[Zone]; 3] = [
    &[Zone::Overview],
    &[Zone::Bottom, Zone::Side],
    &[Zone::Top, Zone::Rear],
];

pub struct Controls<'a> {
    view: &'a ViewState,
    theme: &'a AppTheme,
}

impl<'a> Controls<'a> {
    pub fn new(view: &'a ViewState, theme: &'a AppTheme) -> Self {
        Self { view, theme }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .title(" Select Area ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 8 || inner.height < 6 {
            return;
        }

        for (row, zones) in ZONE_ROWS.iter().enumerate() {
            let y = inner.y + row as u16;
            let width = inner.width / zones.len() as u16;
            for (col, zone) in zones.iter().enumerate() {
                let x = inner.x + width * col as u16;
                // Last button takes the odd column
                let w = if col + 1 == zones.len() {
                    inner.right() - x
                } else {
                    width - 1
                };
                let rect = Rect::new(x, y, w, 1);
                let title = zone.info().title;
                draw_button(buf, rect, title, self.view.selected_zone == *zone, self.theme.accent, self.theme);
                hits.push(rect, Action::SelectZone(*zone));
            }
        }

        let label = Style::default().fg(self.theme.muted);
        let heat_y = inner.y + 4;
        put_str(buf, inner.x, heat_y, "Heat load", inner.width, label);
        let (text, on) = if self.view.heat_load {
            ("ON", true)
        } else {
            ("OFF", false)
        };
        let toggle = Rect::new(inner.right().saturating_sub(7), heat_y, 7.min(inner.width), 1);
        draw_button(buf, toggle, text, on, self.theme.hot, self.theme);
        hits.push(toggle, Action::ToggleHeatLoad);

        let fans_y = inner.y + 5;
        put_str(buf, inner.x, fans_y, "Fans per bank", inner.width, label);
        let counts = [FanCount::Two, FanCount::Three];
        for (i, count) in counts.iter().enumerate() {
            let x = inner.right().saturating_sub(9) + i as u16 * 5;
            let rect = Rect::new(x, fans_y, 4, 1).intersection(inner);
            let text = format!("{}x", count.get());
            draw_button(buf, rect, &text, self.view.fan_count == *count, self.theme.accent, self.theme);
            hits.push(rect, Action::SetFanCount(*count));
        }
    }
}

/// A one-row button; selected buttons are filled with `fill`
pub(super) fn draw_button(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    selected: bool,
    fill: Color,
    theme: &AppTheme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = if selected {
        Style::default()
            .fg(theme.background)
            .bg(fill)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.text)
            .bg(theme.faded(theme.border, 0.6))
    };
    buf.set_style(area, style);
    put_centered(buf, area, area.y, label, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::tui::text::buffer_lines;

    fn render(view: &ViewState) -> (Buffer, HitMap) {
        let theme = AppTheme::default();
        let area = Rect::new(0, 0, 32, CONTROLS_HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::default();
        Controls::new(view, &theme).render(area, &mut buf, &mut hits);
        (buf, hits)
    }

    #[test]
    fn test_buttons_are_drawn() {
        let (buf, hits) = render(&ViewState::default());
        let text = buffer_lines(&buf).join("\n");
        for zone in Zone::ALL {
            assert!(text.contains(zone.info().title), "missing {}", zone);
        }
        assert!(text.contains("OFF"));
        assert!(text.contains("2x"));
        assert!(text.contains("3x"));
        // 5 zones, heat, two fan counts
        assert_eq!(hits.len(), 8);
    }

    #[test]
    fn test_hit_regions() {
        let (_, hits) = render(&ViewState::default());
        // Overview spans the first button row
        assert_eq!(hits.action_at(2, 1), Some(Action::SelectZone(Zone::Overview)));
        assert_eq!(hits.action_at(2, 2), Some(Action::SelectZone(Zone::Bottom)));
        assert_eq!(hits.action_at(29, 3), Some(Action::SelectZone(Zone::Rear)));
        assert_eq!(hits.action_at(28, 5), Some(Action::ToggleHeatLoad));
        assert_eq!(hits.action_at(23, 6), Some(Action::SetFanCount(FanCount::Two)));
        assert_eq!(hits.action_at(28, 6), Some(Action::SetFanCount(FanCount::Three)));
    }

    #[test]
    fn test_selected_zone_is_filled() {
        let view = ViewState {
            selected_zone: Zone::Side,
            heat_load: true,
            ..ViewState::default()
        };
        let (buf, _) = render(&view);
        let theme = AppTheme::default();
        // Side button: second column of the second row
        assert_eq!(buf[(20, 2)].bg, theme.accent);
        assert_eq!(buf[(2, 1)].bg, theme.faded(theme.border, 0.6));
        assert!(buffer_lines(&buf).join("").contains("ON"));
    }
}
