use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{ApiResponse, VehicleResponse};
use crate::factories::VehicleVariant;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/variants/:variant", post(create_vehicle))
        .route("/:id", get(get_vehicle))
        .route("/:id/:action", post(perform_action))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    let controller = VehicleController::from_state(&state);
    Json(controller.list().await)
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::from_state(&state);
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Path(variant): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let variant: VehicleVariant = variant.parse()?;
    let controller = VehicleController::from_state(&state);
    let response = controller.add_variant(variant).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            format!("Vehículo {} creado exitosamente", variant),
        )),
    ))
}

async fn perform_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, String)>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let action = VehicleController::parse_action(&action)?;
    let controller = VehicleController::from_state(&state);
    let response = controller.perform(Some(id.as_str()), action).await?;
    Ok(Json(ApiResponse::success(response)))
}
