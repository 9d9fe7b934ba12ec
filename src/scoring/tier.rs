use crate::types::assessment::CategoryScores;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Good,
    SomeChallenges,
    Significant,
    Severe,
}

const TIERS: &[(f64, SeverityTier)] = &[
    (30.0, SeverityTier::Good),
    (50.0, SeverityTier::SomeChallenges),
    (70.0, SeverityTier::Significant),
];

impl SeverityTier {
    pub fn narrative(self) -> &'static str {
        match self {
            Self::Good => {
                "Your mental health appears to be in good standing. Keep up your self-care practices."
            }
            Self::SomeChallenges => {
                "You're experiencing some challenges. Consider incorporating stress-management techniques."
            }
            Self::Significant => {
                "You're facing significant difficulties. We recommend speaking with a mental health professional."
            }
            Self::Severe => {
                "You're experiencing severe symptoms. Please seek professional help immediately."
            }
        }
    }
}

pub fn severity_tier(scores: &CategoryScores) -> SeverityTier {
    let avg = scores.average();
    TIERS
        .iter()
        .find(|(upper, _)| avg < *upper)
        .map_or(SeverityTier::Severe, |(_, tier)| *tier)
}

pub fn classify_overall(scores: &CategoryScores) -> &'static str {
    severity_tier(scores).narrative()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Low,
    Moderate,
    High,
    Severe,
}

const BANDS: &[(u8, ScoreBand)] = &[
    (30, ScoreBand::Low),
    (50, ScoreBand::Moderate),
    (70, ScoreBand::High),
];

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| score < *upper)
            .map_or(ScoreBand::Severe, |(_, band)| *band)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Severe => "Severe",
        }
    }
}
