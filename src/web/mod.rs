//! Web API module for Civic UI.
//!
//! Serves the theme preference, the style table and rendered markup to a
//! browser frontend.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /` - Rendered page (optional ?role=&name=&lang=&path=)
//! - `GET /api/theme` - Current mode and preference state
//! - `PUT /api/theme` - Save an explicit mode
//! - `DELETE /api/theme` - Forget the saved mode and follow the OS
//! - `POST /api/theme/toggle` - Flip the mode
//! - `GET /api/styles` - Current mode flag and style table
//! - `GET /api/styles/{mode}` - Style table for a mode
//! - `GET /api/classes/{button,card,text,input}` - Component classes
//! - `GET /api/navigation` - Visible navigation items (optional ?role=&lang=)
//! - `GET /api/status-color` - Badge classes (?kind=&value=)

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::components::{
    filter_items, nav_items, page, showcase, NavItem, NavView, NavigationBar, NavigationOptions,
};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::dom::{Document, RootClassList};
use crate::i18n::Language;
use crate::session::{User, UserRole};
use crate::style::status::{theme_aware_color, ColorKind};
use crate::style::{
    generate, ButtonSize, ButtonVariant, CardVariant, FontSize, InputState, StyleConfig, TextTone,
};
use crate::theme::{
    AmbientSource, FileStore, PreferenceStore, SystemAmbient, ThemeContext, ThemeMode,
    ThemeProvider,
};
use crate::ui_config::UiConfig;

/// How often the OS theme is re-read.
const AMBIENT_POLL_INTERVAL: Duration = Duration::from_secs(5);

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Server-wide theme preference
    theme: Arc<ThemeProvider>,
    /// OS preference the theme falls back to
    ambient: Arc<dyn AmbientSource + Send + Sync>,
    /// Receives the `dark` class for rendered pages
    root: RootClassList,
}

impl AppState {
    /// Creates a new application state.
    pub fn new<S>(config: Config, store: S, ambient: Arc<dyn AmbientSource + Send + Sync>) -> Self
    where
        S: PreferenceStore + 'static,
    {
        let root = RootClassList::new();
        let theme = ThemeProvider::new(store, ambient.as_ref(), root.clone());
        Self {
            config: Arc::new(config),
            theme: Arc::new(theme),
            ambient,
            root,
        }
    }

    /// The theme provider.
    #[must_use]
    pub fn theme(&self) -> &ThemeProvider {
        &self.theme
    }

    /// The mode from `?mode=`, or the provider's mode.
    fn mode(&self, requested: Option<&str>) -> Result<ThemeMode, ApiFailure> {
        match requested {
            Some(mode) => parse_param(mode),
            None => Ok(self.theme.mode()),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Theme state response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    /// Active mode
    pub mode: ThemeMode,
    /// Whether dark mode is active
    pub is_dark_mode: bool,
    /// Whether the mode was chosen rather than inherited from the OS
    pub explicit: bool,
    /// Persisted value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<String>,
}

impl ThemeResponse {
    fn from_provider(theme: &ThemeProvider) -> Self {
        Self {
            mode: theme.mode(),
            is_dark_mode: theme.is_dark_mode(),
            explicit: theme.has_explicit_preference(),
            saved: theme.stored_preference(),
        }
    }
}

/// Theme update request.
#[derive(Debug, Deserialize)]
pub struct ThemeUpdateRequest {
    /// `dark` or `light`
    pub mode: String,
}

/// Class string response.
#[derive(Debug, Serialize)]
pub struct ClassesResponse {
    /// Space-separated classes
    pub classes: String,
}

/// Query parameters shared by the class endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ClassesQuery {
    /// `dark` or `light`; defaults to the current mode
    pub mode: Option<String>,
    /// Button or card variant
    pub variant: Option<String>,
    /// Button or font size
    pub size: Option<String>,
    /// Text tone
    pub tone: Option<String>,
    /// Input state
    pub state: Option<String>,
    /// Extra classes appended last
    pub extra: Option<String>,
}

/// Query parameters for rendered views.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Render for a signed-in user with this role
    pub role: Option<String>,
    /// Full name of that user
    pub name: Option<String>,
    /// Language code
    pub lang: Option<String>,
    /// Current route
    pub path: Option<String>,
}

/// Navigation items response.
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    /// Whether the items are for a signed-in user
    pub authenticated: bool,
    /// Language the labels are in
    pub language: Language,
    /// Visible items in display order
    pub items: Vec<NavItem>,
}

/// Query parameters for badge colors.
#[derive(Debug, Deserialize)]
pub struct StatusColorQuery {
    /// status, priority, sla or role
    pub kind: Option<String>,
    /// Value to color
    pub value: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type ApiFailure = (StatusCode, Json<ApiError>);

/// Parses a query or path value, answering 400 on failure.
fn parse_param<T>(value: &str) -> Result<T, ApiFailure>
where
    T: FromStr<Err = anyhow::Error>,
{
    value
        .parse()
        .map_err(|e: anyhow::Error| (StatusCode::BAD_REQUEST, Json(ApiError::new(e.to_string()))))
}

/// Like [`parse_param`], with the type's default when the value is absent.
fn parse_or_default<T>(value: Option<&str>) -> Result<T, ApiFailure>
where
    T: FromStr<Err = anyhow::Error> + Default,
{
    value.map_or_else(|| Ok(T::default()), parse_param)
}

/// Builds the user a view query describes; no role means anonymous.
fn view_user(query: &ViewQuery) -> Result<Option<User>, ApiFailure> {
    let Some(role) = query.role.as_deref() else {
        return Ok(None);
    };
    let role: UserRole = parse_param(role)?;
    let name = query.name.as_deref().unwrap_or("Demo User");
    Ok(Some(User::new(role, name)))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Full page with the navigation bar and the showcase.
async fn render_page(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, ApiFailure> {
    let user = view_user(&query)?;
    let language = match query.lang.as_deref() {
        Some(code) => parse_param(code)?,
        None => state.config.ui.language,
    };

    let theme = state.theme.context();
    let ui = theme.ui();
    let document = Document::new();
    let bar = NavigationBar::new(&document, NavigationOptions::from_config(&state.config));
    let view = NavView {
        user: user.as_ref(),
        language,
        theme: &theme,
        system: &state.config.system,
        current_path: query.path.as_deref().unwrap_or("/"),
        notifications: &[],
    };

    Ok(Html(page(
        &ui,
        &state.root,
        language,
        &state.config.system.app_name,
        bar.render(&view),
        showcase(&ui),
    )))
}

/// GET /api/theme - Current theme state.
async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse::from_provider(&state.theme))
}

/// PUT /api/theme - Save an explicit mode.
async fn set_theme(
    State(state): State<AppState>,
    Json(request): Json<ThemeUpdateRequest>,
) -> Result<Json<ThemeResponse>, ApiFailure> {
    let mode: ThemeMode = parse_param(&request.mode)?;
    state.theme.set_mode(mode);
    debug!(%mode, "theme set over HTTP");
    Ok(Json(ThemeResponse::from_provider(&state.theme)))
}

/// DELETE /api/theme - Forget the saved mode.
async fn reset_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    state.theme.reset_to_system(state.ambient.as_ref());
    Json(ThemeResponse::from_provider(&state.theme))
}

/// POST /api/theme/toggle - Flip the mode.
async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    state.theme.toggle_dark_mode();
    Json(ThemeResponse::from_provider(&state.theme))
}

/// GET /api/styles - Current flag and style table.
async fn current_styles(State(state): State<AppState>) -> Json<ThemeContext> {
    Json(state.theme.context())
}

/// GET /api/styles/{mode} - Style table for a mode.
async fn styles_for_mode(Path(mode): Path<String>) -> Result<Json<StyleConfig>, ApiFailure> {
    let mode: ThemeMode = parse_param(&mode)?;
    Ok(Json(generate(mode.is_dark())))
}

/// Resolves the mode and runs `classes` against its style table.
fn with_ui<F>(
    state: &AppState,
    query: &ClassesQuery,
    classes: F,
) -> Result<Json<ClassesResponse>, ApiFailure>
where
    F: FnOnce(&UiConfig<'_>) -> Result<String, ApiFailure>,
{
    let mode = state.mode(query.mode.as_deref())?;
    let style = generate(mode.is_dark());
    let ui = UiConfig::new(&style, mode.is_dark());
    Ok(Json(ClassesResponse {
        classes: classes(&ui)?,
    }))
}

/// GET /api/classes/button
async fn button_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassesQuery>,
) -> Result<Json<ClassesResponse>, ApiFailure> {
    with_ui(&state, &query, |ui| {
        let variant: ButtonVariant = parse_or_default(query.variant.as_deref())?;
        let size: ButtonSize = parse_or_default(query.size.as_deref())?;
        Ok(ui.button_classes(variant, size, query.extra.as_deref()))
    })
}

/// GET /api/classes/card
async fn card_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassesQuery>,
) -> Result<Json<ClassesResponse>, ApiFailure> {
    with_ui(&state, &query, |ui| {
        let variant: CardVariant = parse_or_default(query.variant.as_deref())?;
        Ok(ui.card_classes(variant, query.extra.as_deref()))
    })
}

/// GET /api/classes/text
async fn text_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassesQuery>,
) -> Result<Json<ClassesResponse>, ApiFailure> {
    with_ui(&state, &query, |ui| {
        let tone: TextTone = parse_or_default(query.tone.as_deref())?;
        let size: FontSize = parse_or_default(query.size.as_deref())?;
        Ok(ui.text_classes(tone, size, query.extra.as_deref()))
    })
}

/// GET /api/classes/input
async fn input_classes(
    State(state): State<AppState>,
    Query(query): Query<ClassesQuery>,
) -> Result<Json<ClassesResponse>, ApiFailure> {
    with_ui(&state, &query, |ui| {
        let input_state: InputState = parse_or_default(query.state.as_deref())?;
        Ok(ui.input_classes(input_state, query.extra.as_deref()))
    })
}

/// GET /api/navigation - Items visible to a role.
async fn navigation_items(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<NavigationResponse>, ApiFailure> {
    let user = view_user(&query)?;
    let language = match query.lang.as_deref() {
        Some(code) => parse_param(code)?,
        None => state.config.ui.language,
    };

    Ok(Json(NavigationResponse {
        authenticated: user.is_some(),
        language,
        items: filter_items(&nav_items(language.translations()), user.as_ref()),
    }))
}

/// GET /api/status-color - Badge classes for a status, priority, SLA or role.
async fn status_color(
    Query(query): Query<StatusColorQuery>,
) -> Result<Json<ClassesResponse>, ApiFailure> {
    let kind: ColorKind = parse_or_default(query.kind.as_deref())?;
    Ok(Json(ClassesResponse {
        classes: theme_aware_color(&query.value, kind).to_string(),
    }))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS; the server is meant to run next to a local frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Rendered page
        .route("/", get(render_page))
        // Theme endpoints
        .route(
            "/api/theme",
            get(get_theme).put(set_theme).delete(reset_theme),
        )
        .route("/api/theme/toggle", post(toggle_theme))
        // Style table
        .route("/api/styles", get(current_styles))
        .route("/api/styles/{mode}", get(styles_for_mode))
        // Component classes
        .route("/api/classes/button", get(button_classes))
        .route("/api/classes/card", get(card_classes))
        .route("/api/classes/text", get(text_classes))
        .route("/api/classes/input", get(input_classes))
        // Navigation
        .route("/api/navigation", get(navigation_items))
        .route("/api/status-color", get(status_color))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// The theme preference is kept in the config directory, and the OS theme is
/// polled so the server follows it until a mode is chosen.
///
/// # Errors
///
/// Returns an error if the config directory cannot be resolved or the server
/// fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let store = FileStore::in_config_dir()?;
    info!("Theme preference file: {}", store.path().display());

    let ambient = Arc::new(SystemAmbient::new());
    let state = AppState::new(config, store, ambient.clone());
    let app = create_router(state);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(AMBIENT_POLL_INTERVAL);
        loop {
            interval.tick().await;
            ambient.poll();
        }
    });

    info!("Starting {} web server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<ButtonVariant>(None).unwrap(), ButtonVariant::Primary);
        assert_eq!(
            parse_or_default::<ButtonVariant>(Some("ghost")).unwrap(),
            ButtonVariant::Ghost
        );
        let (status, Json(error)) = parse_or_default::<ButtonVariant>(Some("shiny")).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.error.contains("shiny"));
    }

    #[test]
    fn test_view_user() {
        let anonymous = ViewQuery::default();
        assert!(view_user(&anonymous).unwrap().is_none());

        let officer = ViewQuery {
            role: Some("ward_officer".to_string()),
            name: Some("Asha Nair".to_string()),
            ..ViewQuery::default()
        };
        let user = view_user(&officer).unwrap().unwrap();
        assert_eq!(user.role, UserRole::WardOfficer);
        assert_eq!(user.full_name, "Asha Nair");

        let unknown = ViewQuery {
            role: Some("mayor".to_string()),
            ..ViewQuery::default()
        };
        assert!(view_user(&unknown).is_err());
    }
}
