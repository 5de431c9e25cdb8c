//! HTTP Handlers

use crate::application::admin_players::{AdminPlayersUseCase, UpsertPlayerInput};
use crate::application::attempt_level::AttemptLevelUseCase;
use crate::application::caesar_prompt::CaesarPromptUseCase;
use crate::application::check_answer::CheckAnswerUseCase;
use crate::application::cipher_prompt::CipherPromptUseCase;
use crate::application::config::CtfConfig;
use crate::application::player_profile::PlayerProfileUseCase;
use crate::application::view_leaderboard::ViewLeaderboardUseCase;
use crate::domain::progress;
use crate::domain::repository::{CipherRepository, PlayerRepository};
use crate::error::{CtfError, CtfResult};
use crate::presentation::dto::{
    AdminPlayersResponse, AdminUpsertResponse, AdvanceResponse, AttemptResponse,
    CaesarPromptResponse, CatalogResponse, CheckResponse, CipherResponse, DeletePlayerQuery,
    LeaderboardResponse, LevelAccessResponse, PlayerResponse, PublicPuzzle, SetNameResponse,
    SuccessResponse,
};
use crate::presentation::extract::{JsonBody, PuzzlePath};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use chrono::{Local, Timelike, Utc};
use kernel::id::PlayerId;
use platform::cookie::{extract_cookie, set_cookie_header};
use platform::crypto::random_base36;
use std::sync::Arc;

/// Storage bound shared by every handler
pub trait CtfRepository:
    PlayerRepository + CipherRepository + Clone + Send + Sync + 'static
{
}

impl<T> CtfRepository for T where
    T: PlayerRepository + CipherRepository + Clone + Send + Sync + 'static
{
}

/// Shared state for CTF handlers
#[derive(Clone)]
pub struct CtfAppState<R>
where
    R: CtfRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<CtfConfig>,
}

/// Player id from the cookie, or a freshly issued one
struct PlayerSession {
    id: PlayerId,
    issued: bool,
}

fn player_session(headers: &HeaderMap, config: &CtfConfig) -> PlayerSession {
    let existing = extract_cookie(headers, &config.player_cookie_name)
        .and_then(|value| PlayerId::parse(value).ok());

    match existing {
        Some(id) => PlayerSession { id, issued: false },
        None => {
            let id = PlayerId::issue(Utc::now().timestamp_millis(), &random_base36(7));
            tracing::debug!(player_id = %id, "Issued player id");
            PlayerSession { id, issued: true }
        }
    }
}

/// Attach the player cookie when the id was issued by this request
fn with_player_cookie(
    session: &PlayerSession,
    config: &CtfConfig,
    body: impl IntoResponse,
) -> Response {
    let mut response = body.into_response();
    if session.issued {
        if let Some(cookie) = set_cookie_header(&config.player_cookie(), session.id.as_str()) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }
    response
}

/// GET /api/puzzle-catalog
pub async fn puzzle_catalog<R>(State(state): State<CtfAppState<R>>) -> CtfResult<Json<CatalogResponse>>
where
    R: CtfRepository,
{
    let catalog = state.config.catalog.load().await?;

    Ok(Json(CatalogResponse {
        puzzles: catalog.iter().map(PublicPuzzle::from).collect(),
        total_levels: catalog.total_levels(),
    }))
}

/// POST /api/check
pub async fn check_answer<R>(
    State(state): State<CtfAppState<R>>,
    body: JsonBody,
) -> CtfResult<Json<CheckResponse>>
where
    R: CtfRepository,
{
    let id = body.puzzle_id("id")?;
    let answer = body.string("answer")?;

    let use_case = CheckAnswerUseCase::new(state.repo.clone(), state.config.clone());
    let validation = use_case.execute(id, answer).await?;

    Ok(Json(CheckResponse {
        correct: validation.correct,
    }))
}

/// GET /api/puzzle/{id}
pub async fn caesar_prompt<R>(
    State(state): State<CtfAppState<R>>,
    PuzzlePath(id): PuzzlePath,
) -> CtfResult<Json<CaesarPromptResponse>>
where
    R: CtfRepository,
{
    let hour = Local::now().hour();

    let use_case = CaesarPromptUseCase::new(state.config.clone());
    let prompt = use_case.execute(id, hour).await?;

    Ok(Json(CaesarPromptResponse {
        prompt: prompt.ciphertext,
        hint: prompt.hint,
        shift: prompt.shift,
    }))
}

/// GET /api/puzzle/{id}/cipher
pub async fn cipher_prompt<R>(
    State(state): State<CtfAppState<R>>,
    PuzzlePath(id): PuzzlePath,
) -> CtfResult<Json<CipherResponse>>
where
    R: CtfRepository,
{
    let use_case = CipherPromptUseCase::new(state.repo.clone(), state.config.clone());
    let record = use_case.get_or_create(id).await?;

    Ok(Json(CipherResponse {
        mapping: record.mapping,
        answer: record.answer,
    }))
}

/// GET /api/player
pub async fn get_player<R>(
    State(state): State<CtfAppState<R>>,
    headers: HeaderMap,
) -> CtfResult<Response>
where
    R: CtfRepository,
{
    let session = player_session(&headers, &state.config);

    let use_case = PlayerProfileUseCase::new(state.repo.clone(), state.config.clone());
    let profile = use_case.get(&session.id).await?;

    let body = Json(PlayerResponse {
        player_id: profile.player_id,
        name: profile.name,
        current_level: profile.current_level,
        total_levels: profile.total_levels,
    });
    Ok(with_player_cookie(&session, &state.config, body))
}

/// POST /api/player
pub async fn set_player_name<R>(
    State(state): State<CtfAppState<R>>,
    headers: HeaderMap,
    body: JsonBody,
) -> CtfResult<Response>
where
    R: CtfRepository,
{
    let name = body.string("name")?;
    let level = body.optional_number("currentLevel")?;
    let session = player_session(&headers, &state.config);

    let use_case = PlayerProfileUseCase::new(state.repo.clone(), state.config.clone());
    let record = use_case.set_name(&session.id, name, level).await?;

    let body = Json(SetNameResponse {
        success: true,
        player_id: session.id.clone(),
        name: record.name,
        current_level: record.current_level,
    });
    Ok(with_player_cookie(&session, &state.config, body))
}

/// PATCH /api/player
pub async fn advance_player<R>(
    State(state): State<CtfAppState<R>>,
    headers: HeaderMap,
    body: JsonBody,
) -> CtfResult<Response>
where
    R: CtfRepository,
{
    let candidate = body.number("currentLevel")?;
    let session = player_session(&headers, &state.config);

    let use_case = PlayerProfileUseCase::new(state.repo.clone(), state.config.clone());
    let level = use_case.advance(&session.id, candidate).await?;

    let body = Json(AdvanceResponse {
        success: true,
        current_level: level,
    });
    Ok(with_player_cookie(&session, &state.config, body))
}

/// POST /api/player/attempt
pub async fn attempt_level<R>(
    State(state): State<CtfAppState<R>>,
    headers: HeaderMap,
    body: JsonBody,
) -> CtfResult<Response>
where
    R: CtfRepository,
{
    let id = body.puzzle_id("id")?;
    let answer = body.string("answer")?;
    let session = player_session(&headers, &state.config);

    let use_case =
        AttemptLevelUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case.execute(&session.id, id, answer).await?;

    let body = Json(AttemptResponse {
        correct: output.correct,
        current_level: output.current_level,
        total_levels: output.total_levels,
        completed: output.completed,
    });
    Ok(with_player_cookie(&session, &state.config, body))
}

/// GET /api/player/level/{id}
pub async fn level_access<R>(
    State(state): State<CtfAppState<R>>,
    headers: HeaderMap,
    PuzzlePath(id): PuzzlePath,
) -> CtfResult<Response>
where
    R: CtfRepository,
{
    let session = player_session(&headers, &state.config);

    let use_case = PlayerProfileUseCase::new(state.repo.clone(), state.config.clone());
    let profile = use_case.get(&session.id).await?;
    let access = progress::level_access(profile.current_level, id, profile.total_levels);

    let body = Json(LevelAccessResponse {
        access,
        current_level: profile.current_level,
        total_levels: profile.total_levels,
    });
    Ok(with_player_cookie(&session, &state.config, body))
}

/// GET /api/players
pub async fn leaderboard<R>(State(state): State<CtfAppState<R>>) -> CtfResult<Json<LeaderboardResponse>>
where
    R: CtfRepository,
{
    let use_case = ViewLeaderboardUseCase::new(state.repo.clone(), state.config.clone());
    let ranked = use_case.execute().await?;

    Ok(Json(LeaderboardResponse {
        players: ranked.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/admin/players
pub async fn admin_list_players<R>(
    State(state): State<CtfAppState<R>>,
) -> CtfResult<Json<AdminPlayersResponse>>
where
    R: CtfRepository,
{
    let use_case = AdminPlayersUseCase::new(state.repo.clone(), state.config.clone());
    let players = use_case.list().await?;

    Ok(Json(AdminPlayersResponse { players }))
}

/// POST /api/admin/players
pub async fn admin_upsert_player<R>(
    State(state): State<CtfAppState<R>>,
    body: JsonBody,
) -> CtfResult<Json<AdminUpsertResponse>>
where
    R: CtfRepository,
{
    let player_id = parse_player_id(Some(body.string("playerId")?))?;
    let input = UpsertPlayerInput {
        player_id,
        name: body.optional_string("name")?.map(str::to_string),
        current_level: body.optional_number("currentLevel")?,
    };

    let use_case = AdminPlayersUseCase::new(state.repo.clone(), state.config.clone());
    let player = use_case.upsert(input).await?;

    Ok(Json(AdminUpsertResponse {
        success: true,
        player,
    }))
}

/// DELETE /api/admin/players?playerId=
pub async fn admin_delete_player<R>(
    State(state): State<CtfAppState<R>>,
    Query(query): Query<DeletePlayerQuery>,
) -> CtfResult<Json<SuccessResponse>>
where
    R: CtfRepository,
{
    let player_id = parse_player_id(query.player_id.as_deref())?;

    let use_case = AdminPlayersUseCase::new(state.repo.clone(), state.config.clone());
    use_case.delete(&player_id).await?;

    Ok(Json(SuccessResponse { success: true }))
}

fn parse_player_id(raw: Option<&str>) -> CtfResult<PlayerId> {
    raw.and_then(|value| PlayerId::parse(value).ok())
        .ok_or(CtfError::InvalidField {
            field: "playerId",
            expected: "a non-empty player id",
        })
}
