use std::sync::Arc;

use axum::extract::{Extension, Json, Path, State};
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::CreateSlotRequest;
use crate::services::{SlotService, SlotStore};

#[derive(Clone)]
pub struct SlotState {
    pub config: Arc<AppConfig>,
    pub store: SlotStore,
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<SlotState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateSlotRequest>,
) -> Result<Json<Value>, AppError> {
    debug!("Slot creation requested by user: {}", user.id);

    let service = SlotService::new(state.store.clone());
    let slot = service.create(request).await?;

    Ok(Json(json!(slot)))
}

#[axum::debug_handler]
pub async fn list_slots(State(state): State<SlotState>) -> Result<Json<Value>, AppError> {
    let service = SlotService::new(state.store.clone());
    let slots = service.list_all().await;

    Ok(Json(json!({
        "slots": slots,
        "total": slots.len()
    })))
}

#[axum::debug_handler]
pub async fn list_doctor_slots(
    State(state): State<SlotState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = SlotService::new(state.store.clone());
    let slots = service.list_by_doctor(doctor_id).await;

    Ok(Json(json!({
        "slots": slots,
        "total": slots.len()
    })))
}

#[axum::debug_handler]
pub async fn mark_slot_unavailable(
    State(state): State<SlotState>,
    Extension(user): Extension<User>,
    Path(slot_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    debug!("Slot {} booking requested by user: {}", slot_id, user.id);

    let service = SlotService::new(state.store.clone());
    let slot = service.mark_unavailable(slot_id).await?;

    Ok(Json(json!(slot)))
}
