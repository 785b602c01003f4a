use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{Thought, ThoughtId, ThoughtPost};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/thoughts")
            .route("", web::post().to(create_thought))
            .route("", web::get().to(list_thoughts))
            .route("/{id}", web::get().to(get_thought))
            .route("/{id}", web::put().to(update_thought)),
    );
}

/// Create a new thought from a `ThoughtPost` body.
async fn create_thought(data: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    log::info!("Adding a new thought to the system");

    let post: ThoughtPost = match serde_json::from_slice(&body) {
        Ok(post) => post,
        Err(e) => {
            log::error!("Thought decoding failed: {}", e);
            return ApiError::BadRequest(e.to_string()).to_response();
        }
    };

    let thought = Thought {
        id: ThoughtId::new(),
        created_time: Utc::now(),
        title: post.title,
        content: post.thought,
    };
    data.store.put(thought.id, thought.clone());

    HttpResponse::Created().json(thought)
}

/// List all stored thoughts, in arbitrary order.
async fn list_thoughts(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list())
}

/// Fetch a single thought by id.
async fn get_thought(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match path.into_inner().parse::<ThoughtId>() {
        Ok(id) => id,
        Err(e) => {
            log::error!("Invalid thought id in url: {}", e);
            return e.to_response();
        }
    };

    match data.store.get(id) {
        Some(thought) => HttpResponse::Ok().json(thought),
        None => ApiError::NotFound.to_response(),
    }
}

/// Replace the thought at `id` with the request body.
async fn update_thought(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let id = match path.into_inner().parse::<ThoughtId>() {
        Ok(id) => id,
        Err(e) => {
            log::error!("Invalid thought id in url: {}", e);
            return e.to_response();
        }
    };

    // Existence is checked before the body is decoded.
    if data.store.get(id).is_none() {
        return ApiError::NotFound.to_response();
    }

    let thought: Thought = match serde_json::from_slice(&body) {
        Ok(thought) => thought,
        Err(e) => {
            log::error!("Thought decoding failed: {}", e);
            return ApiError::BadRequest(e.to_string()).to_response();
        }
    };

    // The decoded body is stored as-is under the path id, including any
    // client-supplied ID and CreatedTime.
    data.store.put(id, thought);
    HttpResponse::NoContent().finish()
}
