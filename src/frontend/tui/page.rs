//! Full page layout and composition.
//!
//! The page is drawn into its own buffer, as tall as its content, and the
//! frontend copies the visible rows to the terminal. All rects here are in
//! page coordinates.

use super::case_diagram::{CaseDiagram, DIAGRAM_HEIGHT};
use super::controls::{Controls, CONTROLS_HEIGHT};
use super::fan_compare::FanCompare;
use super::hit_map::HitMap;
use super::info_panel::InfoPanel;
use super::summary::Summary;
use super::text::put_centered;
use crate::core::AppCore;
use crate::theme::AppTheme;
use crate::widgets::{CaseDiagramState, InfoPanelState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use std::time::Duration;

pub const PAGE_TITLE: &str = "Airflow Guide: Aquarium Case";
pub const PAGE_SUBTITLE: &str = "Understand the physics and pick the right fans (Forward vs Reverse)";

const HEADER_HEIGHT: u16 = 3;
/// Below this width the columns stack, diagram first
const TWO_COLUMN_MIN: u16 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub controls: Rect,
    pub info: Rect,
    pub diagram: Rect,
    pub compare: Rect,
    pub summary: Option<Rect>,
    pub height: u16,
}

impl PageLayout {
    pub fn compute(width: u16, show_summary: bool) -> Self {
        let header = Rect::new(0, 0, width, HEADER_HEIGHT);
        let top = header.bottom();

        let (controls, info, diagram, bottom) = if width >= TWO_COLUMN_MIN {
            let left = width / 3;
            let controls = Rect::new(0, top, left, CONTROLS_HEIGHT);
            let info = Rect::new(0, controls.bottom(), left, InfoPanel::max_height(left));
            let diagram = Rect::new(left, top, width - left, DIAGRAM_HEIGHT);
            let bottom = info.bottom().max(diagram.bottom());
            (controls, info, diagram, bottom)
        } else {
            let diagram = Rect::new(0, top, width, DIAGRAM_HEIGHT);
            let controls = Rect::new(0, diagram.bottom(), width, CONTROLS_HEIGHT);
            let info = Rect::new(0, controls.bottom(), width, InfoPanel::max_height(width));
            (controls, info, diagram, info.bottom())
        };

        let compare = Rect::new(0, bottom, width, FanCompare::height(width));
        let summary = show_summary.then(|| Rect::new(0, compare.bottom(), width, Summary::height(width)));
        let height = summary.map(|s| s.bottom()).unwrap_or(compare.bottom());

        Self {
            header,
            controls,
            info,
            diagram,
            compare,
            summary,
            height,
        }
    }
}

/// Draw the whole page at `width`, recording clickable regions into `hits`
pub fn render_page(
    core: &AppCore,
    theme: &AppTheme,
    elapsed: Duration,
    width: u16,
    hits: &mut HitMap,
) -> Buffer {
    let ui = &core.config.ui;
    let layout = PageLayout::compute(width, ui.show_summary);
    let area = Rect::new(0, 0, width, layout.height);
    let mut buf = Buffer::empty(area);
    buf.set_style(area, Style::default().bg(theme.background).fg(theme.text));
    hits.clear();

    put_centered(
        &mut buf,
        layout.header,
        layout.header.y,
        PAGE_TITLE,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    put_centered(
        &mut buf,
        layout.header,
        layout.header.y + 1,
        PAGE_SUBTITLE,
        Style::default().fg(theme.muted),
    );

    let view = core.view.state();
    Controls::new(view, theme).render(layout.controls, &mut buf, hits);

    let info = InfoPanelState::from_controller(&core.view);
    InfoPanel::new(&info, theme).render(layout.info, &mut buf);

    let diagram = CaseDiagramState::from_controller(&core.view);
    CaseDiagram::new(&diagram, theme, elapsed, ui.show_legend).render(layout.diagram, &mut buf);

    FanCompare::new(view.compare_mode, theme, elapsed).render(layout.compare, &mut buf, hits);

    if let Some(summary) = layout.summary {
        Summary::new(theme).render(summary, &mut buf);
    }

    buf
}
