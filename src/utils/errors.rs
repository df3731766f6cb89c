//! Sistema de tratamento de erros
//!
//! Este módulo define todos os tipos de erro do núcleo de ciclo de vida
//! e os helpers para construí-los de forma consistente.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::vehicle::VehicleStatus;

/// Motivo discriminado de uma operação de transição rejeitada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionDenyReason {
    /// O veículo pertence a outro vendedor
    NotOwner,
    /// O estado atual não admite a operação solicitada
    InvalidStateForOperation,
    /// O veículo já tem vendedor atribuído
    AlreadyAssigned,
}

/// Erros principais do núcleo
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {0}")]
    ValidationErrors(#[from] validator::ValidationErrors),

    #[error("Invalid transition on vehicle {vehicle_id}: {reason:?}")]
    StateTransition {
        vehicle_id: Uuid,
        reason: TransitionDenyReason,
    },

    #[error("Concurrent update on vehicle {vehicle_id}: expected status '{expected}', found '{found}'")]
    ConcurrencyConflict {
        vehicle_id: Uuid,
        expected: VehicleStatus,
        found: VehicleStatus,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Motivo da rejeição, quando o erro é uma transição negada
    pub fn deny_reason(&self) -> Option<TransitionDenyReason> {
        match self {
            AppError::StateTransition { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

/// Helper para erros de recurso não encontrado
pub fn not_found_error(resource: &str, id: Uuid) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Helper para transições negadas
pub fn transition_denied(vehicle_id: Uuid, reason: TransitionDenyReason) -> AppError {
    AppError::StateTransition { vehicle_id, reason }
}

/// Helper para conflitos de escrita condicional no colaborador de persistência
pub fn concurrency_conflict(
    vehicle_id: Uuid,
    expected: VehicleStatus,
    found: VehicleStatus,
) -> AppError {
    AppError::ConcurrencyConflict {
        vehicle_id,
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_reason_accessor() {
        let err = transition_denied(Uuid::new_v4(), TransitionDenyReason::NotOwner);
        assert_eq!(err.deny_reason(), Some(TransitionDenyReason::NotOwner));

        let err = AppError::Validation("sale value must be positive".to_string());
        assert_eq!(err.deny_reason(), None);
    }

    #[test]
    fn test_concurrency_conflict_carries_both_statuses() {
        let id = Uuid::new_v4();
        let err = concurrency_conflict(id, VehicleStatus::Available, VehicleStatus::Reserved);
        match err {
            AppError::ConcurrencyConflict {
                vehicle_id,
                expected,
                found,
            } => {
                assert_eq!(vehicle_id, id);
                assert_eq!(expected, VehicleStatus::Available);
                assert_eq!(found, VehicleStatus::Reserved);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
