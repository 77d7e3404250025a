//! Static concept summary shown below the comparison cards.

use crate::data::Airflow;

/// Accent of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Flow(Airflow),
    Dynamics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptCard {
    pub heading: &'static str,
    pub tone: CardTone,
    /// (bold label, text); a missing label is a plain paragraph
    pub items: &'static [(Option<&'static str>, &'static str)],
    pub callout: Option<&'static str>,
}

pub const SUMMARY_TITLE: &str = "Key Concepts";

pub static CONCEPT_CARDS: [ConceptCard; 3] = [
    ConceptCard {
        heading: "1. Intake",
        tone: CardTone::Flow(Airflow::Intake),
        items: &[
            (Some("Use:"), "Reverse fans."),
            (Some("Where:"), "Bottom and side."),
            (
                None,
                "The side fans push cool air toward the GPU and CPU. Reverse fans keep the good-looking side (no grille) facing you here.",
            ),
        ],
        callout: None,
    },
    ConceptCard {
        heading: "2. Exhaust",
        tone: CardTone::Flow(Airflow::Exhaust),
        items: &[
            (Some("Use:"), "Standard (Forward) fans."),
            (Some("Where:"), "Top and rear."),
            (
                None,
                "Top fans speed up the rise of hot air (convection). Standard fans here show their good-looking face downward while pushing air out.",
            ),
        ],
        callout: None,
    },
    ConceptCard {
        heading: "3. Airflow Dynamics",
        tone: CardTone::Dynamics,
        items: &[
            (
                Some("Negative pressure (more exhaust):"),
                "Favors cooling because hot air leaves quickly, but dust is pulled in through every gap in the case.",
            ),
            (
                Some("Positive pressure (more intake):"),
                "Favors cleanliness. Air escapes through the gaps and keeps dust out, but pockets of heat can form inside.",
            ),
            (
                Some("Power supply (PSU):"),
                "Can count as an exhaust if it is mounted at the top.",
            ),
        ],
        callout: Some(
            "Balance is ideal, but a slight positive pressure (more air in than out) is recommended to cut down on cleaning.",
        ),
    },
];

pub const FOOTER_NOTE: &str = "Note: this guide focuses on the look and airflow dynamics of aquarium-style cases. Always check component specifications and manufacturer recommendations for optimal cooling.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_cover_both_flows() {
        assert!(CONCEPT_CARDS
            .iter()
            .any(|c| c.tone == CardTone::Flow(Airflow::Intake)));
        assert!(CONCEPT_CARDS
            .iter()
            .any(|c| c.tone == CardTone::Flow(Airflow::Exhaust)));
        assert!(CONCEPT_CARDS.iter().all(|c| !c.items.is_empty()));
    }
}
