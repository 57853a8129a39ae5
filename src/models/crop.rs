use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropType {
    Almonds,
    Tomatoes,
    Corn,
    Wheat,
    Grapes,
}

impl CropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Almonds => "Almonds",
            CropType::Tomatoes => "Tomatoes",
            CropType::Corn => "Corn",
            CropType::Wheat => "Wheat",
            CropType::Grapes => "Grapes",
        }
    }

    /// Exact table label, as used by coefficient lookups
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == label)
    }

    /// Lenient parse for user input: case-insensitive, accepts common aliases
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "almonds" | "almond" => Some(CropType::Almonds),
            "tomatoes" | "tomato" => Some(CropType::Tomatoes),
            "corn" | "maize" => Some(CropType::Corn),
            "wheat" => Some(CropType::Wheat),
            "grapes" | "grape" | "vineyard" => Some(CropType::Grapes),
            _ => None,
        }
    }

    pub fn all() -> &'static [CropType] {
        &[
            CropType::Almonds,
            CropType::Tomatoes,
            CropType::Corn,
            CropType::Wheat,
            CropType::Grapes,
        ]
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Phenological growth stages, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GrowthStage {
    Initial,
    Development,
    MidSeason,
    LateSeason,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Initial => "Initial",
            GrowthStage::Development => "Development",
            GrowthStage::MidSeason => "Mid-season",
            GrowthStage::LateSeason => "Late-season",
        }
    }

    /// Classify a free-form stage label the way the coefficient table does:
    /// "Initial" and "Mid" are matched as substrings, everything else is
    /// treated as late season. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Initial") {
            GrowthStage::Initial
        } else if label.contains("Mid") {
            GrowthStage::MidSeason
        } else {
            GrowthStage::LateSeason
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tabulated crop coefficient. Development is published as a range because Kc
/// climbs linearly from the initial to the mid-season value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CropCoefficient {
    Fixed(f64),
    Range { start: f64, end: f64 },
}

impl CropCoefficient {
    /// Largest Kc the stage reaches
    pub fn peak(&self) -> f64 {
        match *self {
            CropCoefficient::Fixed(kc) => kc,
            CropCoefficient::Range { start, end } => start.max(end),
        }
    }

    pub fn fixed(&self) -> Option<f64> {
        match *self {
            CropCoefficient::Fixed(kc) => Some(kc),
            CropCoefficient::Range { .. } => None,
        }
    }
}

impl std::fmt::Display for CropCoefficient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropCoefficient::Fixed(kc) => write!(f, "{:.2}", kc),
            CropCoefficient::Range { start, end } => write!(f, "{:.2}-{:.2}", start, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageProfile {
    pub stage: GrowthStage,
    pub label: String,
    pub kc: CropCoefficient,
    pub duration_days: u32,
}

impl StageProfile {
    pub fn new(
        stage: GrowthStage,
        label: impl Into<String>,
        kc: CropCoefficient,
        duration_days: u32,
    ) -> Self {
        Self {
            stage,
            label: label.into(),
            kc,
            duration_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub crop: CropType,
    pub stages: Vec<StageProfile>,
}

impl CropProfile {
    pub fn stage(&self, stage: GrowthStage) -> Option<&StageProfile> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    pub fn season_length_days(&self) -> u32 {
        self.stages.iter().map(|s| s.duration_days).sum()
    }
}
