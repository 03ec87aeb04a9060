use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes as auth_routes;
use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::admin_sign_in::AdminSignInRequest;
use crate::auth::application::use_cases::admin_sign_out::AdminSignOutRequest;
use crate::content::adapter::incoming::web::routes as content_routes;
use crate::content::adapter::incoming::web::routes::{
    CreatedItemResponse, ObjectiveResponse, SetVisibilityRequest, SkillsResponse,
    UpdateObjectiveRequest, UpdateSkillsRequest,
};
use crate::content::domain::entities::{NewPortfolioItem, PortfolioItem, PortfolioSnapshot, Section};
use crate::media::adapter::incoming::web::routes as media_routes;
use crate::media::application::domain::entities::ImagePlaceholder;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio content and the single-administrator editing API",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Public portfolio
        content_routes::get_portfolio_handler,
        content_routes::get_section_items_handler,
        content_routes::get_objective_handler,
        content_routes::get_skills_handler,

        // Admin
        content_routes::admin_get_portfolio_handler,
        content_routes::admin_get_section_items_handler,
        content_routes::create_item_handler,
        content_routes::update_item_handler,
        content_routes::set_visibility_handler,
        content_routes::delete_item_handler,
        content_routes::update_objective_handler,
        content_routes::update_skills_handler,

        // Auth
        auth_routes::admin_sign_in_handler,
        auth_routes::admin_sign_out_handler,

        // Media
        media_routes::get_placeholder_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioSnapshot>,
            ErrorResponse,
            ErrorDetail,

            // Content
            Section,
            PortfolioItem,
            PortfolioSnapshot,
            NewPortfolioItem,
            CreatedItemResponse,
            SetVisibilityRequest,
            ObjectiveResponse,
            UpdateObjectiveRequest,
            SkillsResponse,
            UpdateSkillsRequest,

            // Auth
            AdminSignInRequest,
            AdminSignOutRequest,
            AdminSession,

            // Media
            ImagePlaceholder
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "portfolio", description = "Public portfolio content"),
        (name = "admin", description = "Content management for the allowlisted administrator"),
        (name = "auth", description = "Admin sign-in and sign-out"),
        (name = "media", description = "Image placeholder helpers"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token returned by /api/auth/sign-in"))
                        .build(),
                ),
            )
        }
    }
}
