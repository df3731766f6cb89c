//! Motor de transições do ciclo de vida
//!
//! Cada operação carrega o registro atual, passa pelo resolvedor de
//! permissões, monta o novo estado e delega a escrita ao colaborador de
//! persistência via compare-and-set sobre o status corrente. Qualquer
//! pré-condição que falhe aborta sem mutação parcial.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::models::notification::StatusChangeNotification;
use crate::models::vehicle::{Vehicle, VehicleState, VehicleStatus};
use crate::repositories::vehicle_store::VehicleStore;
use crate::services::permission_service::{validate_operation, VehicleAction};
use crate::utils::errors::{transition_denied, AppResult, TransitionDenyReason};
use crate::utils::validation::validate_sale_value;

/// Tag de módulo de origem gravada nas notificações deste motor
pub const LIFECYCLE_SOURCE: &str = "lifecycle";

/// Resultado de uma transição aceita: o novo registro e a notificação
/// imutável que o descreve
#[derive(Debug, Clone)]
pub struct TransitionOutcome {
    pub vehicle: Vehicle,
    pub notification: StatusChangeNotification,
}

/// Motor de transições sobre um colaborador de persistência
pub struct LifecycleService<S> {
    store: S,
}

impl<S: VehicleStore> LifecycleService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reserva um veículo disponível; o vendedor vira o dono exclusivo
    pub async fn reserve(&self, vehicle_id: Uuid, vendor_id: Uuid) -> AppResult<TransitionOutcome> {
        let vehicle = self.store.load_vehicle(vehicle_id).await?;
        let vendor = self.store.load_vendor(vendor_id).await?;

        validate_operation(&vehicle, VehicleAction::Reserve, vendor_id)?;
        ensure_transition(&vehicle, VehicleStatus::Reserved)?;

        let new_state = VehicleState::Reserved {
            assigned_vendor_id: vendor_id,
            reserved_at: Utc::now(),
        };
        let updated = self
            .store
            .compare_and_set_status(vehicle_id, VehicleStatus::Available, new_state)
            .await?;

        info!("🔒 Veículo {} reservado por {}", vehicle_id, vendor.name);
        Ok(TransitionOutcome {
            notification: StatusChangeNotification::new(
                vehicle_id,
                VehicleStatus::Available,
                VehicleStatus::Reserved,
                LIFECYCLE_SOURCE,
                Some(vendor_id),
                Some(vendor.name),
            ),
            vehicle: updated,
        })
    }

    /// Passa uma reserva para negociação ativa; só o dono pode
    pub async fn negotiate(
        &self,
        vehicle_id: Uuid,
        vendor_id: Uuid,
    ) -> AppResult<TransitionOutcome> {
        let vehicle = self.store.load_vehicle(vehicle_id).await?;
        let vendor = self.store.load_vendor(vendor_id).await?;

        validate_operation(&vehicle, VehicleAction::Negotiate, vendor_id)?;
        ensure_transition(&vehicle, VehicleStatus::Negotiating)?;

        // A transição só parte de reserved; preserva o timestamp da reserva
        let reserved_at = match &vehicle.state {
            VehicleState::Reserved { reserved_at, .. } => *reserved_at,
            _ => {
                return Err(transition_denied(
                    vehicle_id,
                    TransitionDenyReason::InvalidStateForOperation,
                ))
            }
        };

        let new_state = VehicleState::Negotiating {
            assigned_vendor_id: vendor_id,
            reserved_at,
            negotiation_started_at: Utc::now(),
        };
        let updated = self
            .store
            .compare_and_set_status(vehicle_id, VehicleStatus::Reserved, new_state)
            .await?;

        info!("🤝 Veículo {} em negociação com {}", vehicle_id, vendor.name);
        Ok(TransitionOutcome {
            notification: StatusChangeNotification::new(
                vehicle_id,
                VehicleStatus::Reserved,
                VehicleStatus::Negotiating,
                LIFECYCLE_SOURCE,
                Some(vendor_id),
                Some(vendor.name),
            ),
            vehicle: updated,
        })
    }

    /// Conclui a venda de um veículo em negociação; o registro de venda
    /// fica imutável para qualquer operação posterior
    pub async fn finalize_sale(
        &self,
        vehicle_id: Uuid,
        vendor_id: Uuid,
        sale_value: Decimal,
    ) -> AppResult<TransitionOutcome> {
        validate_sale_value(sale_value)?;

        let vehicle = self.store.load_vehicle(vehicle_id).await?;
        let vendor = self.store.load_vendor(vendor_id).await?;

        validate_operation(&vehicle, VehicleAction::FinalizeSale, vendor_id)?;
        ensure_transition(&vehicle, VehicleStatus::Sold)?;

        let new_state = VehicleState::Sold {
            sold_vendor_id: vendor_id,
            sold_at: Utc::now(),
            sale_value,
        };
        let updated = self
            .store
            .compare_and_set_status(vehicle_id, VehicleStatus::Negotiating, new_state)
            .await?;

        info!(
            "💰 Veículo {} vendido por {} (R$ {})",
            vehicle_id, vendor.name, sale_value
        );
        Ok(TransitionOutcome {
            notification: StatusChangeNotification::new(
                vehicle_id,
                VehicleStatus::Negotiating,
                VehicleStatus::Sold,
                LIFECYCLE_SOURCE,
                Some(vendor_id),
                Some(vendor.name),
            ),
            vehicle: updated,
        })
    }

    /// Libera uma reserva ou negociação, devolvendo o veículo ao estoque
    /// e limpando o vendedor e os timestamps
    pub async fn release(&self, vehicle_id: Uuid, vendor_id: Uuid) -> AppResult<TransitionOutcome> {
        let vehicle = self.store.load_vehicle(vehicle_id).await?;
        let vendor = self.store.load_vendor(vendor_id).await?;

        validate_operation(&vehicle, VehicleAction::Release, vendor_id)?;
        ensure_transition(&vehicle, VehicleStatus::Available)?;

        let old_status = vehicle.status();
        let updated = self
            .store
            .compare_and_set_status(vehicle_id, old_status, VehicleState::Available)
            .await?;

        info!("🔓 Veículo {} liberado por {}", vehicle_id, vendor.name);
        Ok(TransitionOutcome {
            notification: StatusChangeNotification::new(
                vehicle_id,
                old_status,
                VehicleStatus::Available,
                LIFECYCLE_SOURCE,
                Some(vendor_id),
                Some(vendor.name),
            ),
            vehicle: updated,
        })
    }
}

/// Guarda da tabela de transições: a operação validada ainda precisa
/// corresponder a uma aresta válida a partir do estado atual
fn ensure_transition(vehicle: &Vehicle, target: VehicleStatus) -> AppResult<()> {
    if vehicle.status().can_transition_to(target) {
        Ok(())
    } else {
        Err(transition_denied(
            vehicle.id,
            TransitionDenyReason::InvalidStateForOperation,
        ))
    }
}
