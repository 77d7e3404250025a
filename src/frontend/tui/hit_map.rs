//! Clickable regions recorded while drawing the page.

use crate::core::Action;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    /// Action of the last region containing the point (page coordinates)
    pub fn action_at(&self, x: u16, y: u16) -> Option<Action> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(x, y)))
            .map(|(_, action)| *action)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_at() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 4, 1), Action::ToggleHeatLoad);
        hits.push(Rect::new(10, 2, 3, 1), Action::Quit);
        hits.push(Rect::new(5, 5, 0, 1), Action::NextZone);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits.action_at(3, 0), Some(Action::ToggleHeatLoad));
        assert_eq!(hits.action_at(4, 0), None);
        assert_eq!(hits.action_at(12, 2), Some(Action::Quit));

        hits.clear();
        assert_eq!(hits.action_at(3, 0), None);
    }
}
