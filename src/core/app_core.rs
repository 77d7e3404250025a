use crate::config::Config;
use crate::core::actions::Action;
use crate::core::view_controller::ViewController;
use crate::data::ViewState;

/// Core application state (frontend-agnostic)
///
/// AppCore holds the configuration and the single view controller of this
/// session, and applies actions coming from any frontend.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// The guide's view state
    pub view: ViewController,

    /// Application running flag
    pub running: bool,
}

impl AppCore {
    pub fn new(config: Config, initial: ViewState) -> Self {
        Self {
            config,
            view: ViewController::with_state(initial),
            running: true,
        }
    }

    /// Apply a view action. Scroll actions belong to the frontend and are ignored.
    pub fn apply(&mut self, action: Action) {
        let state = *self.view.state();
        match action {
            Action::SelectZone(zone) => self.view.select_zone(zone),
            Action::NextZone => self.view.select_zone(state.selected_zone.next()),
            Action::PreviousZone => self.view.select_zone(state.selected_zone.previous()),
            Action::ToggleHeatLoad => self.view.set_heat_load(!state.heat_load),
            Action::SetFanCount(count) => self.view.set_fan_count(count),
            Action::SetCompareMode(mode) => self.view.set_compare_mode(mode),
            Action::ToggleCompareMode => self.view.set_compare_mode(state.compare_mode.flipped()),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.running = false;
            }
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {}
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Airflow, FanCount, Zone};

    fn core() -> AppCore {
        AppCore::new(Config::default(), ViewState::default())
    }

    #[test]
    fn test_zone_navigation() {
        let mut core = core();
        core.apply(Action::NextZone);
        assert_eq!(core.view.state().selected_zone, Zone::Bottom);
        core.apply(Action::PreviousZone);
        core.apply(Action::PreviousZone);
        assert_eq!(core.view.state().selected_zone, Zone::Rear);
        core.apply(Action::SelectZone(Zone::Side));
        assert_eq!(core.view.state().selected_zone, Zone::Side);
    }

    #[test]
    fn test_toggles() {
        let mut core = core();
        core.apply(Action::ToggleHeatLoad);
        assert!(core.view.state().heat_load);
        core.apply(Action::ToggleHeatLoad);
        assert!(!core.view.state().heat_load);

        core.apply(Action::ToggleCompareMode);
        assert_eq!(core.view.state().compare_mode, Airflow::Exhaust);
        core.apply(Action::SetCompareMode(Airflow::Intake));
        assert_eq!(core.view.state().compare_mode, Airflow::Intake);

        core.apply(Action::SetFanCount(FanCount::Two));
        assert_eq!(core.view.state().fan_count, FanCount::Two);
    }

    #[test]
    fn test_quit_and_scroll() {
        let mut core = core();
        let before = *core.view.state();
        core.apply(Action::PageDown);
        core.apply(Action::None);
        assert_eq!(*core.view.state(), before);
        assert!(core.running);

        core.apply(Action::Quit);
        assert!(!core.running);
    }
}
