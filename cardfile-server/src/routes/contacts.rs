/// Contact search relay endpoint
///
/// This endpoint accepts the structured contact-search filter from the
/// client, validates it, and relays it upstream with injected credentials.
/// The response is the upstream contact page, unmodified.
///
/// # Endpoint
///
/// `POST /api/contacts/query`
///
/// # Example Request
///
/// ```json
/// {
///   "query": {
///     "filter": {
///       "$or": [
///         { "info.name.first": { "$startsWith": "ann" } },
///         { "info.name.last":  { "$startsWith": "ann" } }
///       ]
///     },
///     "paging": { "limit": 10 },
///     "fieldsets": ["FULL"]
///   }
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "contacts": [
///     { "id": "c-1001", "info": { "name": { "first": "Ann" } } }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 422 Unprocessable Entity: filter fails validation
/// - 502 Bad Gateway: upstream status or transport failure

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{extract::State, Json};
use cardfile_shared::models::ContactsPage;
use cardfile_shared::query::ContactQuery;
use validator::Validate;

/// Contact search relay handler
pub async fn query_contacts(
    State(state): State<AppState>,
    Json(body): Json<ContactQuery>,
) -> ApiResult<Json<ContactsPage>> {
    // Validate request
    body.validate().map_err(ApiError::from)?;

    tracing::info!(
        clauses = body.query.filter.any_of.len(),
        limit = body.query.paging.limit,
        "Relaying contact search"
    );

    let page = state.crm.query_contacts(&body).await?;

    tracing::info!(contacts = page.contacts.len(), "Contact search completed");

    Ok(Json(page))
}
