use serde::Deserialize;
use validator::Validate;

use crate::domain::opportunity::{NewOpportunity, OpportunityStage, UpdateOpportunity};
use crate::domain::types::{LeadId, OpportunityId, TypeConstraintError};
use crate::forms::FormError;

/// Form data for converting a lead into an opportunity.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConvertLeadForm {
    /// Identifier of the lead being converted.
    pub lead_id: String,
    /// Opportunity name, prefilled with the lead's name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Initial pipeline stage.
    pub stage: OpportunityStage,
    /// Optional deal amount.
    pub amount: Option<f64>,
    #[validate(length(min = 1, message = "Account name is required"))]
    pub account_name: String,
}

impl ConvertLeadForm {
    /// Converts the validated form into the conversion payload.
    pub fn to_new_opportunity(&self) -> Result<NewOpportunity, FormError> {
        let lead_id = LeadId::new(&self.lead_id).map_err(|_: TypeConstraintError| FormError::InvalidLeadId)?;
        Ok(NewOpportunity {
            lead_id,
            name: self.name.clone(),
            stage: self.stage,
            amount: self.amount,
            account_name: self.account_name.clone(),
        })
    }
}

/// Form data for editing an existing opportunity.
///
/// A partial merge: fields left out of the payload are preserved. There is
/// no field-level validation beyond what the typed fields enforce.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOpportunityForm {
    /// Identifier of the opportunity being edited.
    pub id: String,
    pub name: Option<String>,
    pub account_name: Option<String>,
    pub stage: Option<OpportunityStage>,
    pub amount: Option<f64>,
}

impl SaveOpportunityForm {
    pub fn opportunity_id(&self) -> Result<OpportunityId, FormError> {
        OpportunityId::new(&self.id).map_err(|_| FormError::InvalidOpportunityId)
    }
}

impl From<&SaveOpportunityForm> for UpdateOpportunity {
    fn from(form: &SaveOpportunityForm) -> Self {
        UpdateOpportunity {
            name: form.name.clone(),
            account_name: form.account_name.clone(),
            stage: form.stage,
            amount: form.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_form_requires_name_and_account() {
        let form = ConvertLeadForm {
            lead_id: "l1".to_string(),
            name: String::new(),
            stage: OpportunityStage::Discovery,
            amount: None,
            account_name: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("account_name"));
    }

    #[test]
    fn test_convert_form_amount_is_optional() {
        let form = ConvertLeadForm {
            lead_id: "l1".to_string(),
            name: "Acme Co".to_string(),
            stage: OpportunityStage::Discovery,
            amount: None,
            account_name: "Acme Co".to_string(),
        };
        assert!(form.validate().is_ok());

        let payload = form.to_new_opportunity().unwrap();
        assert_eq!(payload.lead_id.as_str(), "l1");
        assert_eq!(payload.amount, None);
    }

    #[test]
    fn test_convert_form_deserializes_camel_case() {
        let form: ConvertLeadForm = serde_json::from_str(
            r#"{"leadId":"l1","name":"Acme Co","stage":"discovery","amount":5000,"accountName":"Acme Co"}"#,
        )
        .unwrap();
        assert_eq!(form.amount, Some(5000.0));
        assert_eq!(form.account_name, "Acme Co");
    }

    #[test]
    fn test_blank_lead_id_is_rejected() {
        let form = ConvertLeadForm {
            lead_id: "  ".to_string(),
            name: "Acme Co".to_string(),
            stage: OpportunityStage::Discovery,
            amount: None,
            account_name: "Acme Co".to_string(),
        };
        assert!(matches!(
            form.to_new_opportunity(),
            Err(FormError::InvalidLeadId)
        ));
    }

    #[test]
    fn test_blank_opportunity_id_is_rejected() {
        let form = SaveOpportunityForm::default();
        assert!(matches!(
            form.opportunity_id(),
            Err(FormError::InvalidOpportunityId)
        ));
    }

    #[test]
    fn test_save_form_converts_to_partial_update() {
        let form: SaveOpportunityForm =
            serde_json::from_str(r#"{"id":"opp-1","stage":"closed_won"}"#).unwrap();
        let update = UpdateOpportunity::from(&form);
        assert_eq!(update.stage, Some(OpportunityStage::ClosedWon));
        assert_eq!(update.name, None);
        assert_eq!(update.amount, None);
    }
}
