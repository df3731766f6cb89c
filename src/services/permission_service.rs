//! Resolvedor de permissões
//!
//! Este módulo calcula as ações disponíveis sobre um veículo em função
//! do estado e da posse, e valida operações antes de qualquer mutação.
//! `validate_operation` é o portão único por onde toda chamada mutadora
//! precisa passar.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::{transition_denied, AppResult, TransitionDenyReason};

/// Ações que a camada de apresentação pode oferecer sobre um veículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleAction {
    Reserve,
    Negotiate,
    Edit,
    ToggleShowcase,
    Release,
    MarkSold,
    FinalizeSale,
}

/// Ações disponíveis para `vendor_id` sobre o veículo, em função de
/// (status, posse). Veículos com vendedor só oferecem ações ao dono;
/// vendidos não oferecem nenhuma.
pub fn available_actions(vehicle: &Vehicle, vendor_id: Uuid) -> Vec<VehicleAction> {
    use VehicleAction::*;

    match vehicle.status() {
        VehicleStatus::Available => vec![Reserve, Negotiate, Edit, ToggleShowcase],
        VehicleStatus::Reserved if vehicle.is_owned_by(vendor_id) => {
            vec![Negotiate, Release, MarkSold]
        }
        VehicleStatus::Negotiating if vehicle.is_owned_by(vendor_id) => {
            vec![FinalizeSale, Release, MarkSold]
        }
        _ => vec![],
    }
}

/// Ações que o dono teria no estado, independente de quem pergunta.
/// Usada para distinguir "não é o dono" de "estado não admite".
fn owner_actions(status: VehicleStatus) -> &'static [VehicleAction] {
    use VehicleAction::*;

    match status {
        VehicleStatus::Available => &[Reserve, Negotiate, Edit, ToggleShowcase],
        VehicleStatus::Reserved => &[Negotiate, Release, MarkSold],
        VehicleStatus::Negotiating => &[FinalizeSale, Release, MarkSold],
        VehicleStatus::Sold => &[],
    }
}

/// Rederiva o conjunto de ações e falha fechado quando a operação não
/// está nele, com o motivo discriminado:
///
/// - `AlreadyAssigned`: tentar reservar um veículo que já tem vendedor;
/// - `NotOwner`: a ação existiria para o dono, mas o chamador não é ele;
/// - `InvalidStateForOperation`: o estado atual não admite a ação para
///   ninguém (inclui qualquer operação sobre um veículo vendido).
pub fn validate_operation(
    vehicle: &Vehicle,
    operation: VehicleAction,
    vendor_id: Uuid,
) -> AppResult<()> {
    if available_actions(vehicle, vendor_id).contains(&operation) {
        return Ok(());
    }

    let status = vehicle.status();
    let reason = if operation == VehicleAction::Reserve && status.has_vendor() {
        TransitionDenyReason::AlreadyAssigned
    } else if status.has_vendor()
        && !vehicle.is_owned_by(vendor_id)
        && owner_actions(status).contains(&operation)
    {
        TransitionDenyReason::NotOwner
    } else {
        TransitionDenyReason::InvalidStateForOperation
    };

    Err(transition_denied(vehicle.id, reason))
}
