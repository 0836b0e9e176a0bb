use validator::Validate;

use crate::domain::lead::Lead;
use crate::domain::types::LeadId;
use crate::dto::leads::LeadsPageData;
use crate::forms::lead::SaveLeadForm;
use crate::pagination::{LEADS_PAGE_WINDOW, Paginated};
use crate::services::{ServiceError, ServiceResult};
use crate::store::{ConfigStore, LeadsStore};

/// Assembles the leads table view: the derived list windowed to the current
/// page, with the search echo and any fetch error.
pub fn load_leads_page(leads: &LeadsStore, config: &ConfigStore) -> LeadsPageData {
    let derived = leads.filtered(config);
    let pagination = config.pagination();

    let search_query = Some(leads.search().trim().to_string()).filter(|s| !s.is_empty());

    LeadsPageData {
        leads: Paginated::new(derived, pagination.page, pagination.limit, LEADS_PAGE_WINDOW),
        search_query,
        error: leads.error().map(str::to_string),
    }
}

/// Commits a new search string; the list jumps back to the first page.
pub fn update_search(
    leads: &mut LeadsStore,
    config: &mut ConfigStore,
    search: &str,
) -> ServiceResult<()> {
    leads.set_search(search);
    config.reset_page()?;
    Ok(())
}

/// Validates the edit form and replaces the lead record it names.
pub fn save_lead(leads: &mut LeadsStore, form: &SaveLeadForm) -> ServiceResult<Lead> {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate lead form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let id = LeadId::new(&form.id).map_err(|_| ServiceError::NotFound)?;
    let current = leads.get(&id).ok_or(ServiceError::NotFound)?;
    let replacement = form.apply_to(current);

    leads.update(replacement).map_err(|err| {
        log::error!("Failed to save lead {id}: {err}");
        ServiceError::from(err)
    })
}
