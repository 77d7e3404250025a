//! Text layout helpers shared by the renderers.
//!
//! Wrapping is done here instead of through `Paragraph` so a section can be
//! measured before it is drawn; the page layout needs exact heights.
//! Widths are counted in chars: every string the guide draws is single-width.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let current_width = current.chars().count();
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current_width + 1 + word.chars().count()
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }

            // Single word wider than the line
            let split_at = word
                .char_indices()
                .nth(width)
                .map(|(idx, _)| idx)
                .unwrap_or(word.len());
            let rest = word.split_off(split_at);
            lines.push(word);
            word = rest;
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Write a string clipped to `max_width` and to the buffer bounds
pub fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
    let area = buf.area;
    if y < area.top() || y >= area.bottom() || x < area.left() || x >= area.right() {
        return;
    }
    let max_width = max_width.min(area.right() - x) as usize;
    buf.set_stringn(x, y, text, max_width, style);
}

/// Write a single character if the position is inside the buffer
pub fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

/// True when the cell exists and holds only a space
pub fn is_blank(buf: &Buffer, x: u16, y: u16) -> bool {
    buf.cell((x, y)).map(|c| c.symbol() == " ").unwrap_or(false)
}

/// Write `text` centered horizontally within `area` on row `y`
pub fn put_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let text_width = (text.chars().count() as u16).min(area.width);
    let x = area.x + (area.width - text_width) / 2;
    put_str(buf, x, y, text, area.width, style);
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
