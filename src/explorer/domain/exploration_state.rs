use super::proposition::Proposition;

/// Where an exploration stands
///
/// `NoData` is a terminal answer from the host ("nothing was analysed"),
/// distinct from `Loading` which only means the snapshots are not read yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ExplorationState {
    #[default]
    Loading,
    NoData,
    Ready(Proposition),
}

impl ExplorationState {
    /// `NoData` unless the proposition carries at least one module
    pub fn from_proposition(proposition: Option<Proposition>) -> Self {
        match proposition {
            Some(proposition) if proposition.has_dependencies() => {
                ExplorationState::Ready(proposition)
            }
            _ => ExplorationState::NoData,
        }
    }

    pub fn proposition(&self) -> Option<&Proposition> {
        match self {
            ExplorationState::Ready(proposition) => Some(proposition),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ExplorationState::Loading)
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ExplorationState::NoData)
    }
}
