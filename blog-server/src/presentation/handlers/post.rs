use crate::application::post_service::BlogPostService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, UpdatePostRequest};
use crate::presentation::utils::parse_post_id;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;

#[get("/blog-posts")]
pub async fn get_posts(
    req: HttpRequest,
    post: web::Data<BlogPostService>,
) -> Result<HttpResponse, DomainError> {
    let posts = post.get_posts().await?;

    info!(
        request_id = %request_id(&req),
        total = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/blog-posts/{id}")]
pub async fn get_post(
    post: web::Data<BlogPostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post_id = parse_post_id(&path)?;
    let post = post.get_post(post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

#[post("/blog-posts")]
pub async fn create_post(
    req: HttpRequest,
    post: web::Data<BlogPostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let post = post.create_post(payload.into_inner()).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[put("/blog-posts/{id}")]
pub async fn update_post(
    req: HttpRequest,
    post: web::Data<BlogPostService>,
    payload: web::Json<UpdatePostRequest>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let updated = post.update_post(&path, payload.into_inner()).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %updated.id,
        "post updated"
    );

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/blog-posts/{id}")]
pub async fn delete_post(
    req: HttpRequest,
    post: web::Data<BlogPostService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post_id = parse_post_id(&path)?;
    post.delete_post(post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post deleted"
    );

    Ok(HttpResponse::NoContent().finish())
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<crate::presentation::middleware::RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
