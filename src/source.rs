//! Frame producer identities

use crate::effect::ChampionId;

const SOURCE_NAME_HEALTH_BAR: &str = "health_bar";
const SOURCE_NAME_BURST: &str = "burst";

/// Identity of a frame producer.
///
/// The arbitrator holds exactly one current source and forwards only frames
/// tagged with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceId {
    /// Default health bar renderer
    HealthBar,
    /// Champion-specific module
    Champion(ChampionId),
    /// Generic burst animation
    Burst,
}

impl SourceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HealthBar => SOURCE_NAME_HEALTH_BAR,
            Self::Champion(id) => id.as_str(),
            Self::Burst => SOURCE_NAME_BURST,
        }
    }
}
