/// Orders-by-member relay endpoint
///
/// This endpoint relays a member's pricing-plan orders from the upstream,
/// narrowed server-side to orders whose buyer matches the requested member
/// id. The client never sees sibling members' orders.
///
/// # Endpoint
///
/// `GET /api/orders/member/:member_id`
///
/// # Example Response
///
/// ```json
/// {
///   "orders": [
///     {
///       "planName": "Gold",
///       "status": "ACTIVE",
///       "startDate": "2023-02-01T10:30:00Z",
///       "buyer": { "memberId": "m-77" }
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: blank member id
/// - 502 Bad Gateway: upstream status or transport failure

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{Path, State},
    Json,
};
use cardfile_shared::models::OrdersPage;

/// Orders-by-member relay handler
pub async fn orders_for_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<OrdersPage>> {
    let member_id = member_id.trim();
    if member_id.is_empty() {
        return Err(ApiError::BadRequest("member id must not be blank".to_string()));
    }

    tracing::info!(member_id = %member_id, "Relaying orders lookup");

    let page = state.crm.orders_for_member(member_id).await?;

    tracing::info!(
        member_id = %member_id,
        orders = page.orders.len(),
        "Orders lookup completed"
    );

    Ok(Json(page))
}
