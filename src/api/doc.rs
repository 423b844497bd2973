use utoipa::OpenApi;

pub const ORGANISATION_TAG: &str = "Organisations";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atlas",
        description = "An api server for organisations and their geographic locations",
    ),
    paths(
        crate::api::handlers::organisations::create_organisation,
        crate::api::handlers::organisations::list_organisations,
        crate::api::handlers::organisations::get_organisation,
        crate::api::handlers::organisations::create_location,
        crate::api::handlers::organisations::list_organisation_locations,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = ORGANISATION_TAG, description = "Organisation and location management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
