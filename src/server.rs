use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::{broadcast, Mutex};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::api::{
    ApiArchetypeRequest, ApiArchetypeResponse, ApiSuggestionRequest, ApiSuggestionResponse,
    CategoryArchetype,
};
use crate::provider::SuggestionClient;
use skive_archetype::archetype::StaticPhraseCatalog;
use skive_archetype::config::EngineConfig;
use skive_archetype::normalize::ratings_from_value;
use skive_archetype::suggest::{default_suggestions, sanitize_suggestions, RoleContext, SuggestionKind};
use skive_archetype::{generate_archetype, generate_consolidated_archetype, Rating, SkiveCategory};

#[derive(Clone)]
struct AppState {
    config: EngineConfig,
    catalog: Arc<StaticPhraseCatalog>,
    provider: Option<SuggestionClient>,
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
}

#[derive(Clone, Serialize)]
struct StreamEvent {
    event: String,
    message: String,
    timestamp_ms: u128,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = EngineConfig::load(None)?;
    if let Some(path) = config_path.as_ref() {
        tracing::info!(path = %path.display(), "engine config resolved");
    }

    let state = AppState {
        provider: SuggestionClient::from_env(&config.provider, None),
        config,
        catalog: Arc::new(StaticPhraseCatalog::seeded()),
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/archetype", post(archetype_handler))
        .route("/api/suggestions", post(suggestions_handler))
        .route("/api/suggestions/stream", get(stream_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn archetype_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiArchetypeRequest>,
) -> Result<Json<ApiArchetypeResponse>, (StatusCode, String)> {
    let scope = request
        .scope()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let ratings = ratings_from_value(&request.ratings, state.config.scores.policy);

    let categories = match scope {
        Some(category) => vec![category],
        None => categories_in_order(&ratings),
    };

    let mut category_archetypes = Vec::new();
    for category in categories {
        let archetype = generate_archetype(
            &ratings,
            Some(category),
            state.catalog.as_ref(),
            &state.config.selection,
        );
        category_archetypes.push(CategoryArchetype {
            category: category.label().to_string(),
            average: category_average(&ratings, category),
            archetype,
        });
    }

    let consolidated =
        generate_consolidated_archetype(&ratings, state.catalog.as_ref(), &state.config.selection);

    Ok(Json(ApiArchetypeResponse {
        rating_count: ratings.len(),
        categories: category_archetypes,
        consolidated,
    }))
}

async fn suggestions_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiSuggestionRequest>,
) -> Result<Json<ApiSuggestionResponse>, (StatusCode, String)> {
    let kind = request
        .kind()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let context = request.context();
    let use_ai = request.use_ai.unwrap_or(false);
    let target = request
        .target
        .unwrap_or(state.config.suggestions.target_count);
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(|| derive_request_id(kind, &context));

    let channel = if use_ai {
        Some(get_or_create_channel(&state, &request_id).await)
    } else {
        None
    };

    let mut warnings = Vec::new();
    let candidates = if use_ai {
        if let Some(sender) = channel.as_ref() {
            send_event(sender, "start", "Preparing suggestion prompt");
        }
        match &state.provider {
            Some(client) => {
                if let Some(sender) = channel.as_ref() {
                    send_event(sender, "calling", "Calling suggestion provider");
                }
                match client.fetch_candidates(kind, &context).await {
                    Ok(items) => {
                        if let Some(sender) = channel.as_ref() {
                            send_event(sender, "received", "Received provider response");
                        }
                        items
                    }
                    Err(err) => {
                        warnings.push(format!("AI suggestions failed: {}", err));
                        if let Some(sender) = channel.as_ref() {
                            send_event(sender, "error", "Provider call failed");
                        }
                        Vec::new()
                    }
                }
            }
            None => {
                warnings.push("AI suggestions not configured: set SUGGEST_API_KEY".to_string());
                if let Some(sender) = channel.as_ref() {
                    send_event(sender, "error", "AI suggestions not configured");
                }
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "merge", "Sanitizing and padding suggestions");
    }

    let tokens = context.tokens();
    let fallback = default_suggestions(kind, &context);
    let result = sanitize_suggestions(&candidates, &tokens, target, &fallback)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    if let Some(sender) = channel.as_ref() {
        send_event(sender, "done", "Suggestions ready");
        schedule_cleanup(state.channels.clone(), request_id.clone());
    }

    Ok(Json(ApiSuggestionResponse {
        request_id,
        items: result.items,
        source: result.source.label().to_string(),
        warnings,
    }))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = get_or_create_channel(&state, &query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| match event {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data)))
        }
        Err(_) => None,
    });

    send_event(&sender, "connected", "Streaming provider status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn get_or_create_channel(
    state: &AppState,
    request_id: &str,
) -> broadcast::Sender<StreamEvent> {
    let mut guard = state.channels.lock().await;
    if let Some(sender) = guard.get(request_id) {
        return sender.clone();
    }
    let (sender, _) = broadcast::channel(32);
    guard.insert(request_id.to_string(), sender.clone());
    sender
}

fn send_event(sender: &broadcast::Sender<StreamEvent>, event: &str, message: &str) {
    let _ = sender.send(StreamEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

fn schedule_cleanup(
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<StreamEvent>>>>,
    request_id: String,
) {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(10)).await;
        let mut guard = channels.lock().await;
        guard.remove(&request_id);
    });
}

fn categories_in_order(ratings: &[Rating]) -> Vec<SkiveCategory> {
    let mut categories = Vec::new();
    for rating in ratings {
        if !categories.contains(&rating.category) {
            categories.push(rating.category);
        }
    }
    categories
}

fn category_average(ratings: &[Rating], category: SkiveCategory) -> f64 {
    let scores: Vec<f64> = ratings
        .iter()
        .filter(|rating| rating.category == category)
        .map(|rating| rating.score)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn derive_request_id(kind: SuggestionKind, context: &RoleContext) -> String {
    let payload = format!(
        "{}:{}:{}:{}",
        kind.label(),
        context.profession,
        context.department,
        context.role
    );
    format!("req_{:x}", stable_hash64(&payload))
}

fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
