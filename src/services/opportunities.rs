use chrono::Utc;
use validator::Validate;

use crate::domain::opportunity::{Opportunity, UpdateOpportunity};
use crate::dto::opportunities::OpportunitiesPageData;
use crate::filters::StageFilter;
use crate::forms::opportunity::{ConvertLeadForm, SaveOpportunityForm};
use crate::pagination::{OPPORTUNITIES_PAGE_WINDOW, Paginated};
use crate::services::{ServiceError, ServiceResult};
use crate::store::{ConfigStore, LeadsStore, OpportunitiesStore};

/// Assembles the opportunities table view.
pub fn load_opportunities_page(
    opportunities: &OpportunitiesStore,
    config: &ConfigStore,
) -> OpportunitiesPageData {
    let derived = opportunities.filtered();
    let pagination = config.pagination();

    let search_query =
        Some(opportunities.search().trim().to_string()).filter(|s| !s.is_empty());

    OpportunitiesPageData {
        opportunities: Paginated::new(
            derived,
            pagination.page,
            pagination.limit,
            OPPORTUNITIES_PAGE_WINDOW,
        ),
        search_query,
        stage_filter: opportunities.stage_filter(),
    }
}

/// Converts a lead into a new opportunity.
///
/// The lead record is never touched: conversion only appends to the
/// opportunity collection, and converting the same lead again creates
/// another independent opportunity.
pub fn convert_lead(
    leads: &LeadsStore,
    opportunities: &mut OpportunitiesStore,
    form: &ConvertLeadForm,
) -> ServiceResult<Opportunity> {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate conversion form: {err}");
        return Err(ServiceError::Form(err.to_string()));
    }

    let payload = form
        .to_new_opportunity()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    if leads.get(&payload.lead_id).is_none() {
        return Err(ServiceError::NotFound);
    }

    opportunities.insert(payload, Utc::now()).map_err(|err| {
        log::error!("Failed to convert lead: {err}");
        ServiceError::from(err)
    })
}

/// Applies the edit drawer's partial update and closes the editor by
/// clearing the selection.
pub fn save_opportunity(
    opportunities: &mut OpportunitiesStore,
    form: &SaveOpportunityForm,
) -> ServiceResult<Opportunity> {
    let id = form
        .opportunity_id()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    let updates = UpdateOpportunity::from(form);

    let updated = opportunities.update(&id, &updates).map_err(|err| {
        log::error!("Failed to save opportunity {id}: {err}");
        ServiceError::from(err)
    })?;
    opportunities.clear_selection();
    Ok(updated)
}

/// Commits a new search string; the list jumps back to the first page.
pub fn update_search(
    opportunities: &mut OpportunitiesStore,
    config: &mut ConfigStore,
    search: &str,
) -> ServiceResult<()> {
    opportunities.set_search(search)?;
    config.reset_page()?;
    Ok(())
}

/// Changes the stage filter; the list jumps back to the first page.
pub fn update_stage_filter(
    opportunities: &mut OpportunitiesStore,
    config: &mut ConfigStore,
    filter: StageFilter,
) -> ServiceResult<()> {
    opportunities.set_stage_filter(filter)?;
    config.reset_page()?;
    Ok(())
}
