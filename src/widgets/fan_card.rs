//! Fan comparison cards
//!
//! Side-by-side look at a standard and a reverse fan under the current
//! compare mode: which face the viewer sees, and whether that is the look
//! you want.

use crate::core::view_controller::pretty_face_visible;
use crate::data::{CompareMode, FanKind};

pub const COMPARATOR_TITLE: &str = "Visual Comparison";
pub const COMPARATOR_SUBTITLE: &str =
    "How a Forward fan and a Reverse fan look from inside the case.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ideal,
    Poor,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Ideal => "Ideal look",
            Verdict::Poor => "Poor look",
        }
    }
}

/// Air arrow next to the fan face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirIndicator {
    /// Pulsing cold arrow pointing into the case
    Incoming,
    /// Faded hot arrow pointing out of the case
    Outgoing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanCardState {
    pub fan: FanKind,
    pub badge: &'static str,
    /// Clean blades visible; otherwise struts and the motor sticker show
    pub pretty_face: bool,
    pub verdict: Verdict,
    pub caption: &'static str,
    pub air: AirIndicator,
}

impl FanCardState {
    pub fn new(fan: FanKind, mode: CompareMode) -> Self {
        let pretty_face = pretty_face_visible(fan, mode);
        let caption = match (fan, mode) {
            (FanKind::Standard, CompareMode::Intake) => {
                "As an intake, the rear grille faces anyone looking into the case."
            }
            (FanKind::Standard, CompareMode::Exhaust) => {
                "As an exhaust, the good-looking face is the one you see."
            }
            (FanKind::Reverse, CompareMode::Intake) => {
                "Air comes in and you still see the clean, good-looking face."
            }
            (FanKind::Reverse, CompareMode::Exhaust) => {
                "As an exhaust, you would be looking at the rear grille."
            }
        };

        Self {
            fan,
            badge: match fan {
                FanKind::Standard => "STANDARD FAN",
                FanKind::Reverse => "REVERSE FAN",
            },
            pretty_face,
            verdict: if pretty_face { Verdict::Ideal } else { Verdict::Poor },
            caption,
            air: match mode {
                CompareMode::Intake => AirIndicator::Incoming,
                CompareMode::Exhaust => AirIndicator::Outgoing,
            },
        }
    }

    /// Standard card first, reverse second
    pub fn pair(mode: CompareMode) -> [FanCardState; 2] {
        FanKind::ALL.map(|fan| FanCardState::new(fan, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_favors_reverse() {
        let [standard, reverse] = FanCardState::pair(CompareMode::Intake);
        assert_eq!(standard.fan, FanKind::Standard);
        assert!(!standard.pretty_face);
        assert_eq!(standard.verdict, Verdict::Poor);
        assert!(reverse.pretty_face);
        assert_eq!(reverse.verdict, Verdict::Ideal);
        assert_eq!(reverse.air, AirIndicator::Incoming);
    }

    #[test]
    fn test_exhaust_favors_standard() {
        let [standard, reverse] = FanCardState::pair(CompareMode::Exhaust);
        assert_eq!(standard.verdict, Verdict::Ideal);
        assert_eq!(reverse.verdict, Verdict::Poor);
        assert_eq!(standard.air, AirIndicator::Outgoing);
        assert!(reverse.caption.contains("rear grille"));
    }
}
