use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{CreateSlotRequest, Slot, SlotError, SlotStatus};

/// In-memory scheduling store. Slots are kept in creation order; all
/// mutation happens under the write lock so the availability transition
/// is an atomic read-modify-write per slot.
#[derive(Clone, Default)]
pub struct SlotStore {
    slots: Arc<RwLock<Vec<Slot>>>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct SlotService {
    store: SlotStore,
}

impl SlotService {
    pub fn new(store: SlotStore) -> Self {
        Self { store }
    }

    /// Create a slot for a doctor. New slots are always `Available`.
    pub async fn create(&self, request: CreateSlotRequest) -> Result<Slot, SlotError> {
        if request.start_time >= request.end_time {
            return Err(SlotError::ValidationError(
                "Start time must be before end time".to_string(),
            ));
        }

        let now = Utc::now();
        let slot = Slot {
            id: Uuid::new_v4(),
            doctor_id: request.doctor_id,
            start_time: request.start_time,
            end_time: request.end_time,
            status: SlotStatus::Available,
            created_at: now,
            updated_at: now,
        };

        let mut slots = self.store.slots.write().await;
        slots.push(slot.clone());
        debug!("Slot {} created for doctor {}", slot.id, slot.doctor_id);

        Ok(slot)
    }

    pub async fn list_all(&self) -> Vec<Slot> {
        let slots = self.store.slots.read().await;
        slots.clone()
    }

    /// Slots for one doctor, any state, in creation order.
    pub async fn list_by_doctor(&self, doctor_id: Uuid) -> Vec<Slot> {
        let slots = self.store.slots.read().await;
        slots
            .iter()
            .filter(|s| s.doctor_id == doctor_id)
            .cloned()
            .collect()
    }

    /// Transition a slot to `Unavailable`. Idempotent: marking a slot that
    /// is already unavailable returns the terminal state without error.
    pub async fn mark_unavailable(&self, slot_id: Uuid) -> Result<Slot, SlotError> {
        let mut slots = self.store.slots.write().await;

        let slot = slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or(SlotError::NotFound(slot_id))?;

        if slot.status != SlotStatus::Unavailable {
            slot.status = SlotStatus::Unavailable;
            slot.updated_at = Utc::now();
            debug!("Slot {} marked unavailable", slot_id);
        } else {
            debug!("Slot {} already unavailable", slot_id);
        }

        Ok(slot.clone())
    }
}
