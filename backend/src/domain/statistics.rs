//! Dashboard aggregates over the stored applications.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Application;

/// Fixed, ordered vocabulary of education levels.
///
/// Variant order is the comparison order used for statistics.
///
/// # Examples
/// ```
/// use hiring_backend::domain::EducationLevel;
///
/// let level = EducationLevel::from_label("Master's Degree").unwrap();
/// assert!(level > EducationLevel::BachelorsDegree);
/// assert_eq!(level.rank(), 3);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Associate Degree")]
    AssociateDegree,
    #[serde(rename = "Bachelor's Degree")]
    BachelorsDegree,
    #[serde(rename = "Master's Degree")]
    MastersDegree,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    /// Every level, lowest first.
    pub const ALL: [Self; 5] = [
        Self::HighSchool,
        Self::AssociateDegree,
        Self::BachelorsDegree,
        Self::MastersDegree,
        Self::Phd,
    ];

    /// Parse the label used by the application form. Matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// Label as shown on the application form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::AssociateDegree => "Associate Degree",
            Self::BachelorsDegree => "Bachelor's Degree",
            Self::MastersDegree => "Master's Degree",
            Self::Phd => "PhD",
        }
    }

    /// Zero-based position in the ordered vocabulary.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }
}

/// Aggregate view shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStats {
    /// Number of stored applications.
    #[schema(example = 12)]
    pub total: usize,
    /// Applications submitted within the last 24 hours.
    #[schema(example = 3)]
    pub recent: usize,
    /// Most requested position; `null` when nothing is stored.
    #[schema(example = "Data Analyst")]
    pub top_position: Option<String>,
    /// Education level nearest the mean rank; `null` when no record carries
    /// a recognised level.
    pub average_education: Option<EducationLevel>,
}

impl ApplicationStats {
    /// Aggregate `applications` as seen at `now`.
    #[must_use]
    pub fn compute(applications: &[Application], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::hours(24);
        let recent = applications
            .iter()
            .filter(|app| app.submitted_at() > cutoff)
            .count();

        Self {
            total: applications.len(),
            recent,
            top_position: top_position(applications),
            average_education: average_education(applications),
        }
    }
}

fn top_position(applications: &[Application]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for app in applications {
        *counts.entry(app.position()).or_default() += 1;
    }
    // BTreeMap iterates in label order, so keeping the first maximum picks the
    // smallest label on ties.
    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (label, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
        .map(|(label, _)| label.to_owned())
}

fn average_education(applications: &[Application]) -> Option<EducationLevel> {
    let ranks: Vec<usize> = applications
        .iter()
        .filter_map(|app| EducationLevel::from_label(app.education()))
        .map(EducationLevel::rank)
        .collect();
    if ranks.is_empty() {
        return None;
    }
    let sum: usize = ranks.iter().sum();
    let count = ranks.len();
    // round(sum / count) with halves rounding up
    let rounded = (2 * sum + count) / (2 * count);
    EducationLevel::from_rank(rounded)
}
