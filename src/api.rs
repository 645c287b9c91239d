//! HTTP API: the `/api/matches` command endpoint plus the routes the bundled page uses.

use crate::logic::{leaderboard_csv, parse_score_input};
use crate::models::{PadelMatch, ScoreField, TournamentError};
use crate::service::TournamentService;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::Deserialize;
use std::sync::Mutex;

/// Shared service behind a lock; SQLite connections are not `Sync`.
pub type AppState = Data<Mutex<TournamentService>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Body of `POST /api/matches`, dispatched on `action`.
#[derive(Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum MatchAction {
    UpdateScore {
        #[serde(rename = "match")]
        game: PadelMatch,
    },
    AddCycle {
        matches: Vec<PadelMatch>,
        cycles: u32,
    },
    Reset,
}

const KNOWN_ACTIONS: [&str; 3] = ["update_score", "add_cycle", "reset"];

#[derive(Deserialize)]
struct ScoreBody {
    field: ScoreField,
    /// Raw field text; empty clears the score.
    #[serde(default)]
    value: String,
}

/// Path segment: match id (e.g. /api/matches/{id}/score)
#[derive(Deserialize)]
struct MatchPath {
    id: String,
}

/// Map a service error to a response. Store failures get a generic body.
fn error_response(e: &TournamentError, generic: &str) -> HttpResponse {
    match e {
        TournamentError::MatchNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Match not found" }))
        }
        TournamentError::InvalidScore(_) | TournamentError::InvalidMatch { .. } => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        TournamentError::NumberingOverflow(_) => {
            log::warn!("{}: {}", generic, e);
            HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }))
        }
        _ => {
            log::error!("{}: {}", generic, e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": generic }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// All matches (newest cycle first) and the cycle count.
#[get("/api/matches")]
async fn api_get_matches(state: AppState) -> HttpResponse {
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.match_list() {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(e) => error_response(&e, "Failed to fetch matches"),
    }
}

/// Command endpoint: `update_score`, `add_cycle`, or `reset`.
#[post("/api/matches")]
async fn api_post_matches(state: AppState, body: Json<serde_json::Value>) -> HttpResponse {
    let known = body
        .get("action")
        .and_then(|a| a.as_str())
        .is_some_and(|a| KNOWN_ACTIONS.contains(&a));
    if !known {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid action" }));
    }
    let action: MatchAction = match serde_json::from_value(body.into_inner()) {
        Ok(a) => a,
        Err(e) => {
            log::warn!("Malformed /api/matches body: {}", e);
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Invalid request body" }));
        }
    };
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let result = match action {
        MatchAction::UpdateScore { game } => svc
            .save_scores(game)
            .map(|m| HttpResponse::Ok().json(m)),
        MatchAction::AddCycle { matches, cycles } => svc
            .insert_cycle(matches, cycles)
            .map(|()| HttpResponse::Ok().json(serde_json::json!({ "success": true }))),
        MatchAction::Reset => svc
            .clear()
            .map(|()| HttpResponse::Ok().json(serde_json::json!({ "success": true }))),
    };
    result.unwrap_or_else(|e| error_response(&e, "Failed to process request"))
}

/// Set or clear one score from the raw input text.
#[put("/api/matches/{id}/score")]
async fn api_set_score(state: AppState, path: Path<MatchPath>, body: Json<ScoreBody>) -> HttpResponse {
    let value = match parse_score_input(&body.value) {
        Ok(v) => v,
        Err(e) => return error_response(&e, "Failed to process request"),
    };
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.update_score(&path.id, body.field, value) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e, "Failed to save match scores"),
    }
}

/// Grouped matches plus leaderboard. Seeds cycle 1 when empty.
#[get("/api/overview")]
async fn api_overview(state: AppState) -> HttpResponse {
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.overview() {
        Ok(o) => HttpResponse::Ok().json(o),
        Err(e) => error_response(&e, "Failed to load tournament data"),
    }
}

#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.leaderboard() {
        Ok(l) => HttpResponse::Ok().json(l),
        Err(e) => error_response(&e, "Failed to fetch leaderboard"),
    }
}

#[get("/api/leaderboard.csv")]
async fn api_leaderboard_csv(state: AppState) -> HttpResponse {
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.leaderboard().and_then(|l| leaderboard_csv(&l)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"leaderboard.csv\""))
            .body(csv),
        Err(e) => error_response(&e, "Failed to export leaderboard"),
    }
}

/// Append the next 15 rounds.
#[post("/api/cycles")]
async fn api_add_cycle(state: AppState) -> HttpResponse {
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.add_next_cycle().and_then(|_| svc.overview()) {
        Ok(o) => HttpResponse::Ok().json(o),
        Err(e) => error_response(&e, "Failed to add new cycle"),
    }
}

/// Wipe all matches and start again from cycle 1. The page confirms first.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let svc = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match svc.reset().and_then(|_| svc.overview()) {
        Ok(o) => HttpResponse::Ok().json(o),
        Err(e) => error_response(&e, "Failed to reset tournament"),
    }
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Register the page and every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(api_get_matches)
        .service(api_post_matches)
        .service(api_set_score)
        .service(api_overview)
        .service(api_leaderboard)
        .service(api_leaderboard_csv)
        .service(api_add_cycle)
        .service(api_reset);
}
