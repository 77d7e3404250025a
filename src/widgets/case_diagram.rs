//! Case diagram state
//!
//! Describes the four fan banks, their airflow and how strongly each one is
//! drawn. Top and bottom sit on the horizontal panels, the side bank on the
//! glass side, and the rear bank is always a single fan.

use super::particles::{ParticleField, ParticleKind};
use crate::core::ViewController;
use crate::data::{Airflow, AnimationSpeed, Visibility, Zone};

/// Arrow drawn next to each fan of a bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowArrow {
    Up,
    Left,
}

impl FlowArrow {
    pub fn glyph(self) -> char {
        match self {
            FlowArrow::Up => '↑',
            FlowArrow::Left => '←',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FanBank {
    pub zone: Zone,
    pub flow: Airflow,
    pub fans: usize,
    pub arrow: FlowArrow,
    pub visibility: Visibility,
    /// Selected zone outside the overview, drawn in bold
    pub emphasized: bool,
    pub particles: ParticleField,
}

impl FanBank {
    /// Arrows and particles only show for highlighted banks
    pub fn shows_flow(&self) -> bool {
        self.visibility.is_highlighted()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseDiagramState {
    /// Drawing order: top, rear, bottom, side
    pub banks: Vec<FanBank>,
    pub heat_load: bool,
    pub speed: AnimationSpeed,
}

impl CaseDiagramState {
    pub fn from_controller(controller: &ViewController) -> Self {
        let state = controller.state();
        let per_side = state.fan_count.get();

        let bank = |zone: Zone, fans: usize, arrow: FlowArrow, particle_count: usize, seed: u32| {
            // Every non-overview zone has a flow in the table
            let flow = zone.info().flow.unwrap_or(Airflow::Intake);
            let kind = match flow {
                Airflow::Intake => ParticleKind::Cold,
                Airflow::Exhaust => ParticleKind::Hot,
            };
            FanBank {
                zone,
                flow,
                fans,
                arrow,
                visibility: controller.visibility(zone),
                emphasized: controller.is_emphasized(zone),
                particles: ParticleField::new(kind, particle_count, seed),
            }
        };

        Self {
            banks: vec![
                bank(Zone::Top, per_side, FlowArrow::Up, 8, 1),
                bank(Zone::Rear, 1, FlowArrow::Left, 4, 2),
                bank(Zone::Bottom, per_side, FlowArrow::Up, 8, 3),
                bank(Zone::Side, per_side, FlowArrow::Left, 8, 4),
            ],
            heat_load: state.heat_load,
            speed: controller.animation_speed(),
        }
    }

    #[cfg(test)]
    pub fn bank(&self, zone: Zone) -> Option<&FanBank> {
        self.banks.iter().find(|b| b.zone == zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FanCount;

    #[test]
    fn test_overview_highlights_all_banks() {
        let diagram = CaseDiagramState::from_controller(&ViewController::new());
        assert_eq!(diagram.banks.len(), 4);
        assert!(diagram.banks.iter().all(|b| b.shows_flow() && !b.emphasized));
        assert!(!diagram.heat_load);
        assert_eq!(diagram.speed, AnimationSpeed::Slow);
    }

    #[test]
    fn test_fan_count_applies_to_multi_fan_banks() {
        let mut controller = ViewController::new();
        controller.set_fan_count(FanCount::Two);
        let diagram = CaseDiagramState::from_controller(&controller);

        assert_eq!(diagram.bank(Zone::Top).unwrap().fans, 2);
        assert_eq!(diagram.bank(Zone::Bottom).unwrap().fans, 2);
        assert_eq!(diagram.bank(Zone::Side).unwrap().fans, 2);
        assert_eq!(diagram.bank(Zone::Rear).unwrap().fans, 1);
    }

    #[test]
    fn test_selected_zone_dims_others() {
        let mut controller = ViewController::new();
        controller.select_zone(Zone::Side);
        let diagram = CaseDiagramState::from_controller(&controller);

        let side = diagram.bank(Zone::Side).unwrap();
        assert!(side.emphasized);
        assert!(side.shows_flow());
        for zone in [Zone::Top, Zone::Rear, Zone::Bottom] {
            let bank = diagram.bank(zone).unwrap();
            assert_eq!(bank.visibility, Visibility::Dimmed);
            assert!(!bank.shows_flow());
        }
    }

    #[test]
    fn test_bank_flows_and_particles() {
        let diagram = CaseDiagramState::from_controller(&ViewController::new());
        let bottom = diagram.bank(Zone::Bottom).unwrap();
        assert_eq!(bottom.flow, Airflow::Intake);
        assert_eq!(bottom.particles.kind, ParticleKind::Cold);
        assert_eq!(bottom.arrow, FlowArrow::Up);

        let rear = diagram.bank(Zone::Rear).unwrap();
        assert_eq!(rear.flow, Airflow::Exhaust);
        assert_eq!(rear.particles.kind, ParticleKind::Hot);
        assert_eq!(rear.particles.count, 4);
        assert_eq!(rear.arrow, FlowArrow::Left);

        assert_eq!(diagram.bank(Zone::Top).unwrap().arrow, FlowArrow::Up);
        let side = diagram.bank(Zone::Side).unwrap();
        assert_eq!(side.arrow, FlowArrow::Left);
        assert_eq!(side.particles.kind, ParticleKind::Cold);
    }

    #[test]
    fn test_heat_load_speeds_up_rotors() {
        let mut controller = ViewController::new();
        controller.set_heat_load(true);
        let diagram = CaseDiagramState::from_controller(&controller);
        assert!(diagram.heat_load);
        assert_eq!(diagram.speed, AnimationSpeed::Fast);
    }
}
