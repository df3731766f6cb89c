//! Implementação em memória do colaborador de persistência
//!
//! Usada pelos testes de integração e disponível aos consumidores como
//! dublê de teste. A escrita condicional é feita sob um único lock de
//! escrita, honrando o contrato de compare-and-set da porta.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleState, VehicleStatus};
use crate::models::vendor::Vendor;
use crate::repositories::vehicle_store::VehicleStore;
use crate::utils::errors::{concurrency_conflict, not_found_error, AppResult};

/// Store em memória com o mesmo contrato do colaborador real
#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: RwLock<HashMap<Uuid, Vehicle>>,
    vendors: RwLock<HashMap<Uuid, Vendor>>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_vehicle(&self, vehicle: Vehicle) {
        self.vehicles.write().await.insert(vehicle.id, vehicle);
    }

    pub async fn insert_vendor(&self, vendor: Vendor) {
        self.vendors.write().await.insert(vendor.id, vendor);
    }

    /// Snapshot de todos os veículos, para agregações nos testes
    pub async fn all_vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn load_vehicle(&self, id: Uuid) -> AppResult<Vehicle> {
        self.vehicles
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found_error("vehicle", id))
    }

    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: VehicleStatus,
        new_state: VehicleState,
    ) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("vehicle", id))?;

        let found = vehicle.status();
        if found != expected {
            return Err(concurrency_conflict(id, expected, found));
        }

        vehicle.state = new_state;
        Ok(vehicle.clone())
    }

    async fn load_vendor(&self, id: Uuid) -> AppResult<Vendor> {
        self.vendors
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found_error("vendor", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use rust_decimal::Decimal;

    fn vehicle(id: u128) -> Vehicle {
        Vehicle::new(Uuid::from_u128(id), None, None, Decimal::from(50000))
    }

    #[tokio::test]
    async fn test_load_vehicle_not_found() {
        let store = InMemoryVehicleStore::new();
        let err = store.load_vehicle(Uuid::from_u128(99)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cas_rejects_stale_expected_status() {
        let store = InMemoryVehicleStore::new();
        store.insert_vehicle(vehicle(10)).await;

        let id = Uuid::from_u128(10);
        let vendor_id = Uuid::from_u128(5);
        let reserved = VehicleState::Reserved {
            assigned_vendor_id: vendor_id,
            reserved_at: chrono::Utc::now(),
        };

        // Primeira escrita condicional passa
        store
            .compare_and_set_status(id, VehicleStatus::Available, reserved.clone())
            .await
            .unwrap();

        // Repetir com o mesmo status esperado falha: o armazenado mudou
        let err = store
            .compare_and_set_status(id, VehicleStatus::Available, reserved)
            .await
            .unwrap_err();
        match err {
            AppError::ConcurrencyConflict {
                expected, found, ..
            } => {
                assert_eq!(expected, VehicleStatus::Available);
                assert_eq!(found, VehicleStatus::Reserved);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
