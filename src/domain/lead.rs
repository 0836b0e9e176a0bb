use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadId, TypeConstraintError};

/// Qualification state of a lead.
///
/// The canonical set is the union of the statuses the table renderer knows
/// (`converted`) and the ones the edit form offers (`inProgress`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    InProgress,
    Converted,
}

impl LeadStatus {
    /// The wire token for this status, matching the persisted strings.
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::InProgress => "inProgress",
            LeadStatus::Converted => "converted",
        }
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "inProgress" => Ok(LeadStatus::InProgress),
            "converted" => Ok(LeadStatus::Converted),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// A prospective contact record, the unit being qualified.
///
/// Leads are never deleted in-session; mutation is full-record replacement
/// keyed on `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub source: String,
    pub score: i32,
    pub status: LeadStatus,
}
