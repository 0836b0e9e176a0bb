use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{LeadId, OpportunityId, TypeConstraintError};

/// Position of an opportunity in the sales pipeline.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    #[default]
    Discovery,
    Proposal,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl OpportunityStage {
    /// The wire token for this stage, matching the persisted strings.
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityStage::Discovery => "discovery",
            OpportunityStage::Proposal => "proposal",
            OpportunityStage::Negotiation => "negotiation",
            OpportunityStage::ClosedWon => "closed_won",
            OpportunityStage::ClosedLost => "closed_lost",
        }
    }
}

impl Display for OpportunityStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OpportunityStage {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discovery" => Ok(OpportunityStage::Discovery),
            "proposal" => Ok(OpportunityStage::Proposal),
            "negotiation" => Ok(OpportunityStage::Negotiation),
            "closed_won" => Ok(OpportunityStage::ClosedWon),
            "closed_lost" => Ok(OpportunityStage::ClosedLost),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// A sales deal record created from a converted lead.
///
/// `original_lead_id` is a back-reference only; the lead record itself is
/// never touched by conversion.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: OpportunityId,
    pub name: String,
    pub stage: OpportunityStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
    pub original_lead_id: LeadId,
}

impl Opportunity {
    /// Applies a partial update; `None` fields are preserved.
    pub fn apply(&mut self, updates: &UpdateOpportunity) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(account_name) = &updates.account_name {
            self.account_name = account_name.clone();
        }
        if let Some(stage) = updates.stage {
            self.stage = stage;
        }
        if let Some(amount) = updates.amount {
            self.amount = Some(amount);
        }
    }
}

/// Payload fabricated by the lead conversion workflow.
#[derive(Clone, Debug, Deserialize)]
pub struct NewOpportunity {
    pub lead_id: LeadId,
    pub name: String,
    pub stage: OpportunityStage,
    pub amount: Option<f64>,
    pub account_name: String,
}

impl NewOpportunity {
    /// Materializes the opportunity under the identity and timestamp the
    /// store assigned.
    pub fn into_opportunity(self, id: OpportunityId, created_at: DateTime<Utc>) -> Opportunity {
        Opportunity {
            id,
            name: self.name,
            stage: self.stage,
            amount: self.amount,
            account_name: self.account_name,
            created_at,
            original_lead_id: self.lead_id,
        }
    }
}

/// Partial-field merge update applied to an existing opportunity.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateOpportunity {
    pub name: Option<String>,
    pub account_name: Option<String>,
    pub stage: Option<OpportunityStage>,
    pub amount: Option<f64>,
}
