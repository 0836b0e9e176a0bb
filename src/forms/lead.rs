use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::lead::{Lead, LeadStatus};

/// Form data for editing a lead from the drawer.
///
/// Only email and status are editable; the rest of the record is carried
/// over unchanged by [`SaveLeadForm::apply_to`].
#[derive(Debug, Deserialize, Validate)]
pub struct SaveLeadForm {
    /// Identifier of the lead being edited.
    pub id: String,
    /// Updated email address.
    #[validate(email)]
    pub email: String,
    /// Updated status. The drawer offers new/contacted/inProgress only;
    /// `converted` is a filter/render value and is rejected here.
    #[validate(custom(function = "editable_status"))]
    pub status: LeadStatus,
}

fn editable_status(status: &LeadStatus) -> Result<(), ValidationError> {
    match status {
        LeadStatus::Converted => Err(ValidationError::new("status_not_editable")),
        _ => Ok(()),
    }
}

impl SaveLeadForm {
    /// Builds the full replacement record for the lead being edited. Email
    /// is normalized (trimmed, lowercased) on the way in.
    pub fn apply_to(&self, lead: &Lead) -> Lead {
        Lead {
            email: self.email.trim().to_lowercase(),
            status: self.status,
            ..lead.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LeadId;

    fn form(email: &str, status: LeadStatus) -> SaveLeadForm {
        SaveLeadForm {
            id: "l1".to_string(),
            email: email.to_string(),
            status,
        }
    }

    fn lead() -> Lead {
        Lead {
            id: LeadId::new("l1").unwrap(),
            name: "Jane".to_string(),
            company: "Acme".to_string(),
            email: "jane@acme.test".to_string(),
            source: "web".to_string(),
            score: 80,
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form("jane@acme.test", LeadStatus::InProgress).validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        assert!(form("not-an-email", LeadStatus::New).validate().is_err());
    }

    #[test]
    fn test_converted_status_is_rejected() {
        assert!(form("jane@acme.test", LeadStatus::Converted).validate().is_err());
    }

    #[test]
    fn test_apply_to_replaces_only_editable_fields() {
        let updated = form(" Jane.Doe@Acme.TEST ", LeadStatus::Contacted).apply_to(&lead());
        assert_eq!(updated.email, "jane.doe@acme.test");
        assert_eq!(updated.status, LeadStatus::Contacted);
        assert_eq!(updated.name, "Jane");
        assert_eq!(updated.score, 80);
        assert_eq!(updated.id, lead().id);
    }

    #[test]
    fn test_deserializes_from_form_payload() {
        let form: SaveLeadForm =
            serde_json::from_str(r#"{"id":"l1","email":"a@b.test","status":"inProgress"}"#).unwrap();
        assert_eq!(form.status, LeadStatus::InProgress);
    }
}
