use std::net::SocketAddr;
use std::sync::Arc;

use crate::application::post_service::{BlogPostService, PostService};
use crate::data::post_repository::InMemoryPostRepository;
use crate::data::seed::seed_posts;
use crate::infrastructure::config::AppConfig;
use crate::presentation::dto::HealthResponse;
use crate::presentation::handlers;
use crate::presentation::middleware::RequestTracing;
use crate::presentation::utils::json_config;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::Utc;
use tracing::info;

/// Builds the store for this process, seeded according to `config`.
pub fn build_post_service(config: &AppConfig) -> BlogPostService {
    let repo = if config.seed_posts {
        InMemoryPostRepository::with_posts(seed_posts())
    } else {
        InMemoryPostRepository::new()
    };
    PostService::new(Arc::new(repo))
}

/// Route table shared by the server and the HTTP tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(handlers::post::get_posts)
        .service(handlers::post::get_post)
        .service(handlers::post::create_post)
        .service(handlers::post::update_post)
        .service(handlers::post::delete_post);
}

/// Binds the listener and returns the server future with the bound addresses.
///
/// The server only accepts connections once the returned [`Server`] is awaited
/// or spawned. Stop it through [`Server::handle`].
pub fn start_rest_server(
    config: &AppConfig,
    post_service: BlogPostService,
) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let cors_origins = config.cors_origins.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(RequestTracing)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(build_cors(&cors_origins))
            .app_data(web::Data::new(post_service.clone()))
            .configure(routes)
    })
    .bind((config.host.as_str(), config.port))?;

    let addrs = server.addrs();
    for addr in &addrs {
        info!(%addr, "HTTP server listening");
    }

    Ok((server.run(), addrs))
}

fn build_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600);

    if origins.is_empty() {
        return cors.allow_any_origin();
    }
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}
