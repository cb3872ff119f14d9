use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::ticket::list_tickets,
        handlers::ticket::upload_ticket,
        handlers::game::get_game,
        handlers::game::start_game,
        handlers::game::restart_game,
        handlers::game::call_number,
        handlers::claim::verify_claim,
    ),
    components(
        schemas(
            TicketResponse,
            GameResponse,
            CallNumberResponse,
            ClaimType,
            VerifyClaimRequest,
            VerifyClaimResponse,
        )
    ),
    tags(
        (name = "ticket", description = "Ticket upload and listing API"),
        (name = "game", description = "Tambola game control API"),
        (name = "claim", description = "Claim lookup API"),
    ),
    info(
        title = "Tambola Dashboard API",
        version = "1.0.0",
        description = "Backend REST API for hosting a Tambola (numbers bingo) game"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
