//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    get, post,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use bracket_vote_web::{
    apply_choice, build_game, current_match, restart, round_name, tournament_progress, undo,
    GameMatch, GameState, GameStore, Item, MemoryStore, Tournament, TournamentId,
};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-game entry: game state + last activity time (for auto-cleanup).
struct GameEntry {
    state: GameState,
    last_activity: Instant,
}

/// In-memory state: many games by ID (sessioned). Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, GameEntry>>>;

/// Inactivity threshold: games not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Session cookie field holding the current game's store key.
const SESSION_GAME_KEY: &str = "game_key";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct NewItemBody {
    title: String,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Deserialize)]
struct CreateGameBody {
    #[serde(default = "default_title")]
    title: String,
    items: Vec<NewItemBody>,
    bracket_size: usize,
    #[serde(default)]
    shuffle: bool,
}

fn default_title() -> String {
    "Bracket vote".to_string()
}

#[derive(Deserialize)]
struct CreateCsvQuery {
    #[serde(default = "default_title")]
    title: String,
    bracket_size: usize,
    #[serde(default)]
    shuffle: bool,
}

#[derive(Deserialize)]
struct ChoiceBody {
    match_id: Uuid,
    winner_id: Uuid,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: TournamentId,
}

/// Everything the page needs to render one tick: the bracket, the pairing
/// waiting for a vote, and the progress readouts.
#[derive(serde::Serialize)]
struct GameView<'a> {
    tournament: &'a Tournament,
    current_match: Option<&'a GameMatch>,
    round_name: Option<String>,
    progress: f64,
    can_undo: bool,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
}

fn game_view(state: &GameState) -> GameView<'_> {
    let t = &state.tournament;
    GameView {
        tournament: t,
        current_match: current_match(t),
        round_name: (!t.is_completed).then(|| round_name(t.current_round, t.total_rounds)),
        progress: tournament_progress(t),
        can_undo: state.can_undo,
        start_time: state.start_time,
        end_time: state.end_time,
    }
}

/// Save a snapshot after a committed mutation. Fire-and-forget: a failed save
/// never affects the in-memory game.
fn autosave(store: &MemoryStore, key: &str, state: &GameState) {
    if let Err(e) = store.save(key, state) {
        log::warn!("Autosave failed for game {}: {}", key, e);
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-vote-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn insert_game(
    state: &AppState,
    store: &Data<MemoryStore>,
    session: &Session,
    game: GameState,
) -> HttpResponse {
    let id = game.tournament.id;
    autosave(store, &id.to_string(), &game);
    if let Err(e) = session.insert(SESSION_GAME_KEY, id.to_string()) {
        log::warn!("Could not store game key in session: {}", e);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        GameEntry {
            state: game,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(game_view(&g.get(&id).unwrap().state))
}

/// Create a new game from a JSON item list (client stores id for subsequent requests).
#[post("/api/games")]
async fn api_create_game(
    state: AppState,
    store: Data<MemoryStore>,
    session: Session,
    body: Json<CreateGameBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let mut items: Vec<Item> = body
        .items
        .into_iter()
        .map(|i| Item::new(i.title.trim(), i.image_url.filter(|u| !u.is_empty())))
        .collect();
    if body.shuffle {
        items.shuffle(&mut rand::thread_rng());
    }
    match build_game(body.title, items, body.bracket_size) {
        Ok(game) => insert_game(&state, &store, &session, game),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Create a new game from a CSV body: one item per record, `title[,image_url]`.
#[post("/api/games/csv")]
async fn api_create_game_csv(
    state: AppState,
    store: Data<MemoryStore>,
    session: Session,
    query: Query<CreateCsvQuery>,
    body: String,
) -> HttpResponse {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());
    let mut items: Vec<Item> = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("Bad CSV: {}", e) }))
            }
        };
        let title = record.get(0).map(str::trim).unwrap_or_default();
        if title.is_empty() {
            continue;
        }
        let image_url = record
            .get(1)
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        items.push(Item::new(title, image_url));
    }
    if query.shuffle {
        items.shuffle(&mut rand::thread_rng());
    }
    match build_game(query.title.clone(), items, query.bracket_size) {
        Ok(game) => insert_game(&state, &store, &session, game),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Resume the session's game from the store (e.g. after a page reload).
/// Registered before the {id} route so "resume" is not parsed as an id.
#[get("/api/games/resume")]
async fn api_resume_game(
    state: AppState,
    store: Data<MemoryStore>,
    session: Session,
) -> HttpResponse {
    let key = match session.get::<String>(SESSION_GAME_KEY) {
        Ok(Some(k)) => k,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No saved game" }))
        }
        Err(_) => return HttpResponse::InternalServerError().body("session error"),
    };
    let saved = match store.restore(&key) {
        Ok(Some(s)) => s,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No saved game" }))
        }
        Err(e) => {
            log::warn!("Restore failed for game {}: {}", key, e);
            return HttpResponse::InternalServerError().body("store error");
        }
    };
    let id = saved.tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(GameEntry {
        state: saved,
        last_activity: Instant::now(),
    });
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(game_view(&entry.state))
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(game_view(&entry.state))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

/// Decide the current match (body: match id + winning item id).
#[post("/api/games/{id}/choice")]
async fn api_apply_choice(
    state: AppState,
    store: Data<MemoryStore>,
    path: Path<GamePath>,
    body: Json<ChoiceBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match apply_choice(&mut entry.state, body.match_id, body.winner_id) {
        Ok(()) => {
            autosave(&store, &path.id.to_string(), &entry.state);
            HttpResponse::Ok().json(game_view(&entry.state))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Undo the most recent choice.
#[post("/api/games/{id}/undo")]
async fn api_undo(state: AppState, store: Data<MemoryStore>, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    match undo(&mut entry.state) {
        Ok(()) => {
            autosave(&store, &path.id.to_string(), &entry.state);
            HttpResponse::Ok().json(game_view(&entry.state))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Restart the game: fresh bracket from the originally submitted items.
#[post("/api/games/{id}/restart")]
async fn api_restart(
    state: AppState,
    store: Data<MemoryStore>,
    path: Path<GamePath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    restart(&mut entry.state);
    autosave(&store, &path.id.to_string(), &entry.state);
    HttpResponse::Ok().json(game_view(&entry.state))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, GameEntry>::new()));
    let store = Data::new(MemoryStore::new());
    let session_key = actix_web::cookie::Key::generate();

    // Background task: every 30 minutes, remove games inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(store.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_game)
            .service(api_create_game_csv)
            .service(api_resume_game)
            .service(api_get_game)
            .service(api_apply_choice)
            .service(api_undo)
            .service(api_restart)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
