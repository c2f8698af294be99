//! Rutas HTML
//!
//! Superficie original de la aplicación: listado en `/`, alta de modelos y
//! acciones sobre el motor. Las acciones siempre redirigen a `/`; si algo
//! falla el mensaje viaja en `?error=`.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use tracing::warn;

use crate::controllers::vehicle_controller::{VehicleAction, VehicleController};
use crate::dto::vehicle_dto::{IndexQuery, VehicleIdQuery};
use crate::factories::VehicleVariant;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views::home::{render_home, render_privacy};

pub fn create_home_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/privacy", get(privacy))
        .route("/add-mustang", get(add_mustang))
        .route("/add-explorer", get(add_explorer))
        .route("/add-escape", get(add_escape))
        .route("/start-engine", get(start_engine))
        .route("/stop-engine", get(stop_engine))
        .route("/add-gas", get(add_gas))
}

/// Redirect a `/?error=<mensaje>`
pub fn error_redirect(error: &AppError) -> Redirect {
    Redirect::to(&format!("/?error={}", urlencoding::encode(error.user_message())))
}

/// Query mal formado (ej. `?id=a&id=b`) como error de la aplicación
fn query_error(rejection: QueryRejection) -> AppError {
    AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
}

/// Un query inválido en `/` se muestra como mensaje; `/` nunca redirige.
async fn index(
    State(state): State<AppState>,
    query: Result<Query<IndexQuery>, QueryRejection>,
) -> Html<String> {
    let error = match query {
        Ok(Query(query)) => query.error,
        Err(rejection) => {
            let error = query_error(rejection);
            warn!("❌ Query inválido en /: {}", error);
            Some(error.user_message().to_string())
        }
    };

    let controller = VehicleController::from_state(&state);
    let vehicles = controller.list().await;
    Html(render_home(&vehicles, error.as_deref()))
}

async fn privacy() -> Html<String> {
    Html(render_privacy())
}

async fn add_variant(state: AppState, variant: VehicleVariant) -> Redirect {
    let controller = VehicleController::from_state(&state);
    match controller.add_variant(variant).await {
        Ok(_) => Redirect::to("/"),
        Err(e) => {
            warn!("❌ No se pudo agregar {}: {}", variant, e);
            error_redirect(&e)
        }
    }
}

async fn add_mustang(State(state): State<AppState>) -> Redirect {
    add_variant(state, VehicleVariant::Mustang).await
}

async fn add_explorer(State(state): State<AppState>) -> Redirect {
    add_variant(state, VehicleVariant::Explorer).await
}

async fn add_escape(State(state): State<AppState>) -> Redirect {
    add_variant(state, VehicleVariant::Escape).await
}

async fn perform(
    state: AppState,
    query: Result<Query<VehicleIdQuery>, QueryRejection>,
    action: VehicleAction,
) -> Redirect {
    let controller = VehicleController::from_state(&state);
    let result = match query {
        Ok(Query(query)) => controller.perform(query.id.as_deref(), action).await,
        Err(rejection) => Err(query_error(rejection)),
    };

    match result {
        Ok(_) => Redirect::to("/"),
        Err(e) => {
            warn!("❌ {} falló: {}", action.slug(), e);
            error_redirect(&e)
        }
    }
}

async fn start_engine(
    State(state): State<AppState>,
    query: Result<Query<VehicleIdQuery>, QueryRejection>,
) -> Redirect {
    perform(state, query, VehicleAction::StartEngine).await
}

async fn stop_engine(
    State(state): State<AppState>,
    query: Result<Query<VehicleIdQuery>, QueryRejection>,
) -> Redirect {
    perform(state, query, VehicleAction::StopEngine).await
}

async fn add_gas(
    State(state): State<AppState>,
    query: Result<Query<VehicleIdQuery>, QueryRejection>,
) -> Redirect {
    perform(state, query, VehicleAction::AddGas).await
}
