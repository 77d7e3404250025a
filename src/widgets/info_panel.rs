//! Info panel state - text for the currently selected zone.

use crate::core::ViewController;
use crate::data::{Airflow, Zone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanelState {
    pub title: &'static str,
    pub role: Option<&'static str>,
    pub flow: Option<Airflow>,
    /// "Recommended: <fan type>", only outside the overview
    pub recommendation: Option<String>,
    pub body: &'static str,
    pub details: Option<&'static str>,
}

impl InfoPanelState {
    pub fn from_controller(controller: &ViewController) -> Self {
        let info = controller.current_info();
        let recommendation = if info.zone == Zone::Overview {
            None
        } else {
            info.fan_type().map(|fan| format!("Recommended: {}", fan))
        };

        Self {
            title: info.title,
            role: info.role(),
            flow: info.flow,
            recommendation,
            body: info.description,
            details: info.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_panel() {
        let panel = InfoPanelState::from_controller(&ViewController::new());
        let overview = Zone::Overview.info();
        assert_eq!(panel.title, "Overview");
        assert_eq!(panel.body, overview.description);
        assert_eq!(panel.details, overview.details);
        assert!(panel.role.is_none());
        assert!(panel.recommendation.is_none());
    }

    #[test]
    fn test_rear_panel() {
        let mut controller = ViewController::new();
        controller.select_zone(Zone::Rear);
        let panel = InfoPanelState::from_controller(&controller);
        assert_eq!(panel.role, Some("Exhaust"));
        assert_eq!(panel.flow, Some(Airflow::Exhaust));
        assert_eq!(
            panel.recommendation.as_deref(),
            Some("Recommended: Standard (Forward)")
        );
        assert!(panel.details.is_none());
    }
}
