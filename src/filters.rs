//! Filter and sort state plus the pure derivation functions behind both
//! list views.
//!
//! The derived list is always a fresh `Vec`; the source collection is never
//! mutated. For leads the order of operations is fixed: search, then status
//! filter, then (stable) score sort.
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::opportunity::{Opportunity, OpportunityStage};
use crate::domain::types::TypeConstraintError;

/// Status filter applied to the lead list: a concrete status or `all`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse::<LeadStatus>().map(StatusFilter::Only)
        }
    }
}

// Persists as the plain token ("all", "new", ...) the original stored.
impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Stage filter applied to the opportunity list: a concrete stage or `all`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StageFilter {
    #[default]
    All,
    Only(OpportunityStage),
}

impl StageFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StageFilter::All => "all",
            StageFilter::Only(stage) => stage.as_str(),
        }
    }

    pub fn matches(self, stage: OpportunityStage) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Only(wanted) => stage == wanted,
        }
    }
}

impl Display for StageFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StageFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StageFilter::All)
        } else {
            s.parse::<OpportunityStage>().map(StageFilter::Only)
        }
    }
}

impl Serialize for StageFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StageFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Ordering applied to the lead list's numeric score column.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSort {
    #[default]
    Default,
    Asc,
    Desc,
}

/// The full filter tuple the lead list derives from.
#[derive(Clone, Debug, Default)]
pub struct LeadFilters {
    pub search: String,
    pub status: StatusFilter,
    pub score_sort: ScoreSort,
}

/// The filter tuple the opportunity list derives from.
#[derive(Clone, Debug, Default)]
pub struct OpportunityFilters {
    pub search: String,
    pub stage: StageFilter,
}

/// Derives the lead list view: search, then status filter, then score sort.
///
/// The search is a case-insensitive substring match over name, company and
/// email. Sorting is stable, so equal scores keep the relative order of the
/// filtered input.
pub fn filter_leads(leads: &[Lead], filters: &LeadFilters) -> Vec<Lead> {
    let needle = filters.search.trim().to_lowercase();

    let mut derived: Vec<Lead> = leads
        .iter()
        .filter(|lead| {
            needle.is_empty()
                || lead.name.to_lowercase().contains(&needle)
                || lead.company.to_lowercase().contains(&needle)
                || lead.email.to_lowercase().contains(&needle)
        })
        .filter(|lead| filters.status.matches(lead.status))
        .cloned()
        .collect();

    match filters.score_sort {
        ScoreSort::Default => {}
        ScoreSort::Asc => derived.sort_by_key(|lead| lead.score),
        ScoreSort::Desc => derived.sort_by_key(|lead| Reverse(lead.score)),
    }

    derived
}

/// Derives the opportunity list view: search over name and account name,
/// intersected with the stage filter. Input order is preserved.
pub fn filter_opportunities(
    opportunities: &[Opportunity],
    filters: &OpportunityFilters,
) -> Vec<Opportunity> {
    let needle = filters.search.trim().to_lowercase();

    opportunities
        .iter()
        .filter(|opp| {
            needle.is_empty()
                || opp.name.to_lowercase().contains(&needle)
                || opp.account_name.to_lowercase().contains(&needle)
        })
        .filter(|opp| filters.stage.matches(opp.stage))
        .cloned()
        .collect()
}
