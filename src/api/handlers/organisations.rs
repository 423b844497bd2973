//! Organisation and location request handlers.
//!
//! Provides the HTTP surface for managing organisations and their
//! geographic locations.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::api::doc::ORGANISATION_TAG;
use crate::api::dto::{
    CreateLocationRequest, CreateOrganisationRequest, ErrorResponse, ListLocationsQuery,
    LocationResponse, OrganisationResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates organisation-related routes.
///
/// Routes:
/// - POST /create                         - Create a new organisation
/// - GET  /                               - List all organisations
/// - GET  /:organisation_id               - Get organisation by ID
/// - POST /create/locations               - Create a location for an organisation
/// - GET  /:organisation_id/locations     - List an organisation's locations
pub fn organisation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_organisations))
        .route("/create", post(create_organisation))
        .route("/create/locations", post(create_location))
        .route("/{organisation_id}", get(get_organisation))
        .route("/{organisation_id}/locations", get(list_organisation_locations))
}

/// POST /api/organisations/create - Create a new organisation
///
/// Creates an organisation from the JSON request body and returns
/// 201 Created with the persisted data including the assigned id.
#[utoipa::path(
    post,
    path = "/api/organisations/create",
    request_body = CreateOrganisationRequest,
    responses(
        (status = 201, description = "Organisation created", body = OrganisationResponse),
    ),
    tag = ORGANISATION_TAG
)]
pub async fn create_organisation(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrganisationRequest>,
) -> Result<(StatusCode, Json<OrganisationResponse>), AppError> {
    let new_organisation = payload.into_new_organisation();
    let organisation = state
        .services
        .organisations
        .create_organisation(new_organisation)
        .await?;
    Ok((StatusCode::CREATED, Json(OrganisationResponse::from(organisation))))
}

/// GET /api/organisations - List all organisations
///
/// Returns a JSON array of all organisations. An empty array is a valid
/// response.
#[utoipa::path(
    get,
    path = "/api/organisations/",
    responses(
        (status = 200, description = "All organisations", body = [OrganisationResponse]),
    ),
    tag = ORGANISATION_TAG
)]
pub async fn list_organisations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrganisationResponse>>, AppError> {
    let organisations = state.services.organisations.list_organisations().await?;
    let responses: Vec<OrganisationResponse> = organisations
        .into_iter()
        .map(OrganisationResponse::from)
        .collect();
    Ok(Json(responses))
}

/// GET /api/organisations/:organisation_id - Get organisation by ID
///
/// Returns the organisation with the specified ID or 404 if not found.
#[utoipa::path(
    get,
    path = "/api/organisations/{organisation_id}",
    params(("organisation_id" = i32, Path, description = "Organisation identifier")),
    responses(
        (status = 200, description = "The organisation", body = OrganisationResponse),
        (status = 404, description = "Organisation not found", body = ErrorResponse),
    ),
    tag = ORGANISATION_TAG
)]
pub async fn get_organisation(
    State(state): State<AppState>,
    Path(organisation_id): Path<i32>,
) -> Result<Json<OrganisationResponse>, AppError> {
    let organisation = state
        .services
        .organisations
        .get_organisation(organisation_id)
        .await?;
    Ok(Json(OrganisationResponse::from(organisation)))
}

/// POST /api/organisations/create/locations - Create a location
///
/// Creates a location tied to an existing organisation. Returns 404 when the
/// referenced organisation does not exist; nothing is persisted in that case.
#[utoipa::path(
    post,
    path = "/api/organisations/create/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 201, description = "Location created", body = LocationResponse),
        (status = 404, description = "Organisation not found", body = ErrorResponse),
    ),
    tag = ORGANISATION_TAG
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    let new_location = payload.into_new_location();
    let location = state.services.locations.create_location(new_location).await?;
    Ok((StatusCode::CREATED, Json(LocationResponse::from(location))))
}

/// GET /api/organisations/:organisation_id/locations - List locations
///
/// Lists an organisation's locations, optionally filtered by the
/// `bounding_box` query parameter (four comma-separated floats:
/// `min_lat,min_lon,max_lat,max_lon`, bounds inclusive). Returns 404 when
/// the resulting list is empty.
#[utoipa::path(
    get,
    path = "/api/organisations/{organisation_id}/locations",
    params(
        ("organisation_id" = i32, Path, description = "Organisation identifier"),
        ListLocationsQuery,
    ),
    responses(
        (status = 200, description = "Matching locations", body = [LocationResponse]),
        (status = 404, description = "No locations matched", body = ErrorResponse),
    ),
    tag = ORGANISATION_TAG
)]
pub async fn list_organisation_locations(
    State(state): State<AppState>,
    Path(organisation_id): Path<i32>,
    Query(query): Query<ListLocationsQuery>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let locations = state
        .services
        .locations
        .list_locations(organisation_id, query.bounding_box)
        .await?;
    let responses: Vec<LocationResponse> =
        locations.into_iter().map(LocationResponse::from).collect();
    Ok(Json(responses))
}
