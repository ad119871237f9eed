use serde::{Deserialize, Serialize};

pub const EARLY_PUPPY_MAX_WEEKS: u32 = 12;
pub const GROWING_PUPPY_MAX_WEEKS: u32 = 24;
pub const ADOLESCENT_MAX_WEEKS: u32 = 52;

/// Coarse life phase derived from age alone. Variants are declared youngest
/// first so `Ord` follows age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    #[serde(rename = "Early puppy")]
    EarlyPuppy,
    #[serde(rename = "Growing puppy")]
    GrowingPuppy,
    #[serde(rename = "Adolescent")]
    Adolescent,
    #[serde(rename = "Adult")]
    Adult,
}

impl LifeStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::EarlyPuppy => "Early puppy",
            Self::GrowingPuppy => "Growing puppy",
            Self::Adolescent => "Adolescent",
            Self::Adult => "Adult",
        }
    }
}

pub fn stage_from_age(age_weeks: u32) -> LifeStage {
    if age_weeks <= EARLY_PUPPY_MAX_WEEKS {
        LifeStage::EarlyPuppy
    } else if age_weeks <= GROWING_PUPPY_MAX_WEEKS {
        LifeStage::GrowingPuppy
    } else if age_weeks <= ADOLESCENT_MAX_WEEKS {
        LifeStage::Adolescent
    } else {
        LifeStage::Adult
    }
}
