//! Case diagram renderer
//!
//! Draws a side view of the case: motherboard with CPU cooler and graphics
//! card in the middle, the top and bottom fan banks on the horizontal panels,
//! the rear fan on the left wall and the side bank on the right (glass) wall.
//! Arrows and particles show where the air goes.

use super::animation::{bounce_offset, cooler_glyph, pulse, rotor_glyph};
use super::text::{is_blank, put_centered, put_char, put_str};
use crate::data::{Airflow, Zone};
use crate::theme::AppTheme;
use crate::widgets::{CaseDiagramState, FanBank, ParticleKind};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};
use std::time::Duration;

/// Height of the whole diagram block, borders included
pub const DIAGRAM_HEIGHT: u16 = 25;

const CASE_HEIGHT: u16 = 18;
const CASE_WIDTH_MAX: u16 = 46;
const MIN_CASE_WIDTH: u16 = 28;
const MIN_CASE_HEIGHT: u16 = 12;
const FAN_WIDTH: u16 = 3;
const PULSE_PERIOD: Duration = Duration::from_millis(1200);

pub struct CaseDiagram<'a> {
    state: &'a CaseDiagramState,
    theme: &'a AppTheme,
    elapsed: Duration,
    show_legend: bool,
}

/// Where things landed, used by tests and by the particle pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    inner: Rect,
    case: Rect,
    body: Rect,
}

impl<'a> CaseDiagram<'a> {
    pub fn new(
        state: &'a CaseDiagramState,
        theme: &'a AppTheme,
        elapsed: Duration,
        show_legend: bool,
    ) -> Self {
        Self {
            state,
            theme,
            elapsed,
            show_legend,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .title(" Case Airflow ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut top = inner.y;
        if self.show_legend {
            self.render_legend(inner, buf);
            top += 2;
        }

        let Some(geometry) = Self::geometry(inner, top) else {
            put_str(
                buf,
                inner.x,
                top,
                "Enlarge the terminal to see the case diagram",
                inner.width,
                Style::default().fg(self.theme.muted),
            );
            return;
        };

        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(self.theme.border))
            .render(geometry.case, buf);

        self.render_motherboard(geometry.body, buf);
        for bank in &self.state.banks {
            self.render_bank(bank, &geometry, buf);
        }
        for bank in self.state.banks.iter().filter(|b| b.shows_flow()) {
            self.render_particles(bank, &geometry, buf);
        }
    }

    fn geometry(inner: Rect, top: u16) -> Option<Geometry> {
        let case_width = inner.width.saturating_sub(8).min(CASE_WIDTH_MAX);
        // Two rows above the case for exhaust arrows, one below
        let case_height = CASE_HEIGHT.min(inner.bottom().saturating_sub(top + 3));
        if case_width < MIN_CASE_WIDTH || case_height < MIN_CASE_HEIGHT {
            return None;
        }

        let case = Rect::new(
            inner.x + (inner.width - case_width) / 2,
            top + 2,
            case_width,
            case_height,
        );
        let body = case.inner(Margin::new(1, 1));
        Some(Geometry { inner, case, body })
    }

    fn render_legend(&self, inner: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(self.theme.muted);
        let entries = [
            (self.theme.cold, "Cool air (intake)"),
            (self.theme.hot, "Hot air (exhaust)"),
        ];
        for (row, (color, label)) in entries.iter().enumerate() {
            let y = inner.y + row as u16;
            put_char(buf, inner.x + 1, y, '●', Style::default().fg(*color));
            put_str(buf, inner.x + 3, y, label, inner.width.saturating_sub(3), text);
        }
    }

    fn render_motherboard(&self, body: Rect, buf: &mut Buffer) {
        let margin_x = (body.width * 15 / 100).max(6);
        let margin_y = body.height * 15 / 100;
        let mobo = Rect::new(
            body.x + margin_x,
            body.y + margin_y,
            body.width.saturating_sub(margin_x * 2),
            body.height.saturating_sub(margin_y * 2),
        );
        Block::bordered()
            .border_style(Style::default().fg(self.theme.border))
            .render(mobo, buf);
        let board = mobo.inner(Margin::new(1, 1));
        if board.width < 5 || board.height < 7 {
            return;
        }

        let heat = self.state.heat_load;
        let component_border = if heat { self.theme.hot } else { self.theme.border };
        let label = Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD);

        // CPU cooler, near the top of the board
        let cpu_width = 11.min(board.width);
        let cpu = Rect::new(
            board.x + (board.width - cpu_width) / 2,
            board.y + board.height * 20 / 100,
            cpu_width,
            3,
        );
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(component_border))
            .render(cpu, buf);
        let spinner = cooler_glyph(self.elapsed, self.state.speed.cooler_period());
        put_centered(buf, cpu, cpu.y + 1, &format!("{} CPU {}", spinner, spinner), label);

        // Graphics card, a wide bar near the bottom of the board
        let gpu_width = (board.width * 9 / 10).max(5);
        let gpu = Rect::new(
            board.x + (board.width - gpu_width) / 2,
            board.bottom().saturating_sub(3 + board.height * 10 / 100),
            gpu_width,
            3,
        );
        Block::bordered()
            .border_style(Style::default().fg(component_border))
            .render(gpu, buf);
        let gpu_label = if gpu.width >= 17 { "GRAPHICS CARD" } else { "GPU" };
        put_centered(buf, gpu, gpu.y + 1, gpu_label, label);

        let mobo_label_y = cpu.bottom() + gpu.y.saturating_sub(cpu.bottom()) / 2;
        if mobo_label_y < gpu.y {
            put_centered(
                buf,
                board,
                mobo_label_y,
                "MOBO",
                Style::default().fg(self.theme.faded(self.theme.muted, 0.6)),
            );
        }

        if heat {
            self.render_heat_haze(board, buf);
        }
    }

    /// Tint the middle of the board hot and the lower left cool
    fn render_heat_haze(&self, board: Rect, buf: &mut Buffer) {
        let strength = 0.75 - 0.15 * pulse(self.elapsed, PULSE_PERIOD);
        let hot = self.theme.faded(self.theme.hot, strength);
        let cool = self.theme.faded(self.theme.cold, 0.85);

        let center_x = board.x + board.width / 2;
        let center_y = board.y + board.height / 2;
        tint(buf, board, center_x.saturating_sub(4), center_y.saturating_sub(1), 9, 3, hot);
        tint(
            buf,
            board,
            board.x + board.width / 3 - 2,
            board.bottom().saturating_sub(board.height / 3) - 1,
            5,
            2,
            cool,
        );
    }

    fn flow_color(&self, bank: &FanBank) -> Color {
        match bank.flow {
            Airflow::Intake => self.theme.cold,
            Airflow::Exhaust => self.theme.hot,
        }
    }

    /// Left edge and row of each fan in a bank
    fn fan_slots(bank: &FanBank, body: Rect) -> Vec<(u16, u16)> {
        let n = bank.fans.max(1) as u16;
        match bank.zone {
            Zone::Top | Zone::Bottom => {
                let y = if bank.zone == Zone::Top {
                    body.y
                } else {
                    body.bottom() - 1
                };
                let left = body.x + 3;
                let span = body.width.saturating_sub(6);
                let slot = span / n;
                (0..n)
                    .map(|i| (left + slot * i + slot.saturating_sub(FAN_WIDTH) / 2, y))
                    .collect()
            }
            Zone::Rear => vec![(body.x, body.y + body.height * 25 / 100 + 1)],
            Zone::Side => {
                let (start, end) = Self::side_rows(body);
                let span = end - start;
                (0..n)
                    .map(|i| (body.right() - FAN_WIDTH, start + span * (2 * i + 1) / (2 * n)))
                    .collect()
            }
            Zone::Overview => Vec::new(),
        }
    }

    fn side_rows(body: Rect) -> (u16, u16) {
        (
            body.y + body.height * 20 / 100,
            body.y + body.height * 80 / 100,
        )
    }

    fn render_bank(&self, bank: &FanBank, geometry: &Geometry, buf: &mut Buffer) {
        let fade = if bank.shows_flow() { 0.0 } else { 0.6 };
        let mut bracket = Style::default().fg(self.theme.faded(self.theme.border, fade));
        let mut rotor = Style::default().fg(self.theme.faded(self.flow_color(bank), fade));
        if bank.emphasized {
            bracket = bracket.fg(self.theme.accent).add_modifier(Modifier::BOLD);
            rotor = rotor.add_modifier(Modifier::BOLD);
        }

        let glyph = rotor_glyph(self.elapsed, self.state.speed.rotor_period());
        let slots = Self::fan_slots(bank, geometry.body);
        for &(x, y) in &slots {
            put_char(buf, x, y, '[', bracket);
            put_char(buf, x + 1, y, glyph, rotor);
            put_char(buf, x + 2, y, ']', bracket);
        }

        // Dimmed banks keep a faint arrow
        let arrow_fade = if bank.shows_flow() {
            0.45 * (1.0 - pulse(self.elapsed, PULSE_PERIOD))
        } else {
            0.8
        };
        let arrow = Style::default()
            .fg(self.theme.faded(self.flow_color(bank), arrow_fade))
            .add_modifier(Modifier::BOLD);
        let glyph = bank.arrow.glyph();
        let case = geometry.case;

        for &(x, y) in &slots {
            match bank.zone {
                Zone::Top => {
                    let lift = if bank.shows_flow() { bounce_offset(self.elapsed) } else { 0 };
                    put_char(buf, x + 1, case.y.saturating_sub(1 + lift), glyph, arrow);
                }
                Zone::Bottom => put_char(buf, x + 1, y.saturating_sub(1), glyph, arrow),
                Zone::Rear => put_char(buf, case.x.saturating_sub(1), y, glyph, arrow),
                Zone::Side => put_char(buf, x.saturating_sub(2), y, glyph, arrow),
                Zone::Overview => {}
            }
        }
    }

    fn render_particles(&self, bank: &FanBank, geometry: &Geometry, buf: &mut Buffer) {
        let Geometry { inner, case, body } = *geometry;
        let base = match bank.particles.kind {
            ParticleKind::Cold => self.theme.cold_particle,
            ParticleKind::Hot => self.theme.hot,
        };
        let lerp = |from: u16, to: u16, t: f32| -> u16 {
            let value = from as f32 + (to as f32 - from as f32) * t;
            value.round().max(0.0) as u16
        };

        for particle in bank.particles.particles(self.elapsed) {
            let (x, y) = match bank.zone {
                Zone::Top => (
                    lerp(body.x + 6, body.right().saturating_sub(6), particle.lane),
                    lerp(body.y + 1, case.y.saturating_sub(2), particle.travel),
                ),
                Zone::Bottom => (
                    lerp(body.x + 6, body.right().saturating_sub(6), particle.lane),
                    lerp(body.bottom() - 1, body.bottom().saturating_sub(6), particle.travel),
                ),
                Zone::Rear => {
                    let row = Self::fan_slots(bank, body)
                        .first()
                        .map(|&(_, y)| y)
                        .unwrap_or(body.y);
                    (
                        lerp(body.x + 4, case.x.saturating_sub(3), particle.travel),
                        lerp(row.saturating_sub(1), row + 1, particle.lane),
                    )
                }
                Zone::Side => {
                    let (start, end) = Self::side_rows(body);
                    (
                        lerp(case.right() + 2, body.right().saturating_sub(5), particle.travel),
                        lerp(start, end, particle.lane),
                    )
                }
                Zone::Overview => continue,
            };

            if x < inner.x || x >= inner.right() || y < inner.y || y >= inner.bottom() {
                continue;
            }
            if !is_blank(buf, x, y) {
                continue;
            }

            let glyph = if particle.intensity > 0.5 { '•' } else { '·' };
            let fade = (1.0 - particle.intensity / 0.8) * 0.7;
            put_char(buf, x, y, glyph, Style::default().fg(self.theme.faded(base, fade)));
        }
    }
}

/// Set the background of a rectangle, clipped to `bounds`
fn tint(buf: &mut Buffer, bounds: Rect, x: u16, y: u16, width: u16, height: u16, color: Color) {
    let patch = Rect::new(x, y, width, height).intersection(bounds);
    for py in patch.top()..patch.bottom() {
        for px in patch.left()..patch.right() {
            if let Some(cell) = buf.cell_mut((px, py)) {
                cell.set_bg(color);
            }
        }
    }
}
