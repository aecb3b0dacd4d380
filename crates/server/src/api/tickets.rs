//! Ticket API handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use ticketify_core::{ChangeSet, Ticket, TicketParams};
use tracing::info;

use super::error::ApiError;
use crate::state::AppState;

/// Query parameters for listing tickets, as they arrive on the wire.
/// Normalization (clamping, sort resolution) happens in `TicketParams`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTicketsQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub order_by: Option<String>,
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub assign_to: Option<i64>,
    pub created_by: Option<i64>,
}

impl ListTicketsQuery {
    fn into_params(self) -> TicketParams {
        let mut params = TicketParams::new();
        if let Some(page_number) = self.page_number {
            params = params.with_page_number(page_number);
        }
        if let Some(page_size) = self.page_size {
            params = params.with_page_size(page_size);
        }
        if let Some(order_by) = self.order_by {
            params = params.with_order_by(order_by);
        }
        if let Some(search_term) = self.search_term {
            params = params.with_search_term(search_term);
        }
        if let Some(status) = self.status {
            params = params.with_status(status);
        }
        if let Some(assign_to) = self.assign_to {
            params = params.with_assign_to(assign_to);
        }
        if let Some(created_by) = self.created_by {
            params = params.with_created_by(created_by);
        }
        params
    }
}

/// List tickets with pagination metadata in the `X-Pagination` header.
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTicketsQuery>,
) -> Result<(HeaderMap, Json<Vec<Ticket>>), ApiError> {
    info!("fetching all tickets");

    let params = query.into_params();
    let page = state
        .ticket_store()
        .get_tickets(&params)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;

    let pagination = serde_json::json!({
        "totalCount": page.total_count,
        "pageSize": page.page_size,
        "pageNumber": page.page_number,
    });

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&pagination.to_string()) {
        headers.insert("X-Pagination", value);
    }

    Ok((headers, Json(page.items)))
}

/// Get a ticket by id.
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, ApiError> {
    info!("fetching ticket with id: {}", id);

    match state.ticket_store().get_by_id(id) {
        Ok(Some(ticket)) => Ok(Json(ticket)),
        Ok(None) => Err(ApiError::not_found(format!("Ticket not found: {}", id))),
        Err(e) => Err(ApiError::internal(&e, state.expose_errors())),
    }
}

/// Create a new ticket.
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(ticket): Json<Ticket>,
) -> Result<(StatusCode, HeaderMap, Json<Ticket>), ApiError> {
    info!("received new ticket creation request: {}", ticket.title);

    ticket.validate().map_err(ApiError::validation)?;

    let store = state.ticket_store();
    let mut changes = ChangeSet::new();
    let ticket = store
        .add(&mut changes, ticket)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    let committed = store
        .commit(changes)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    if !committed {
        return Err(ApiError::bad_request("problem adding ticket"));
    }

    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("/tickets/{}", ticket.id)) {
        headers.insert(header::LOCATION, value);
    }

    Ok((StatusCode::CREATED, headers, Json(ticket)))
}

/// Full-record replace of an existing ticket.
pub async fn update_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(ticket): Json<Ticket>,
) -> Result<StatusCode, ApiError> {
    info!("updating ticket of id: {}", id);

    // Rejected before any store interaction
    if ticket.id != id {
        return Err(ApiError::bad_request("cannot update this ticket"));
    }

    ticket.validate().map_err(ApiError::validation)?;

    let store = state.ticket_store();
    let exists = store
        .exists(id)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    if !exists {
        return Err(ApiError::not_found(format!("Ticket not found: {}", id)));
    }

    let mut changes = ChangeSet::new();
    store
        .update(&mut changes, ticket)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    let committed = store
        .commit(changes)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    if !committed {
        return Err(ApiError::bad_request("problem updating ticket"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a ticket.
pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    info!("deleting ticket of id: {}", id);

    let store = state.ticket_store();
    let ticket = store
        .get_by_id(id)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    if ticket.is_none() {
        return Err(ApiError::not_found(format!("Ticket not found: {}", id)));
    }

    let mut changes = ChangeSet::new();
    store
        .delete(&mut changes, id)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    let committed = store
        .commit(changes)
        .map_err(|e| ApiError::internal(&e, state.expose_errors()))?;
    if !committed {
        return Err(ApiError::bad_request("problem deleting ticket"));
    }

    Ok(StatusCode::NO_CONTENT)
}
