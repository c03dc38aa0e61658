use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use scoutx_core::Error;
use scoutx_engine::SimilarityEngine;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
struct SimilarPlayersRequest {
    #[serde(rename = "playerName")]
    player_name: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        engine: Arc<SimilarityEngine>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/healthz", web::get().to(health))
                .route("/api/similar-players", web::post().to(similar_players))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health(
    engine: web::Data<Arc<SimilarityEngine>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "players": engine.player_count()
    })))
}

/// A missing player is the caller's problem (404); anything else is ours
/// (500). The split must survive this boundary.
async fn similar_players(
    engine: web::Data<Arc<SimilarityEngine>>,
    req: web::Json<SimilarPlayersRequest>,
) -> ActixResult<HttpResponse> {
    match engine.find_similar(&req.player_name) {
        Ok(players) => Ok(HttpResponse::Ok().json(players)),
        Err(e @ Error::PlayerNotFound(_)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => {
            error!("similarity query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}
