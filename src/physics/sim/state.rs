use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SimulationState {
    #[default] // Startzustand
    Running,
    Paused,
}

impl SimulationState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(SimulationState::default(), SimulationState::Running);
        assert_eq!(SimulationState::Running.toggled(), SimulationState::Paused);
        assert_eq!(SimulationState::Paused.toggled(), SimulationState::Running);
    }
}
