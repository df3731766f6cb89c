//! Porta do colaborador de persistência
//!
//! O núcleo não possui mecanismo próprio de consulta ou escrita; toda a
//! persistência acontece atrás desta trait. O contrato obrigatório é a
//! escrita condicional: uma mutação só é aplicada se o status armazenado
//! ainda for o esperado pelo chamador.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleState, VehicleStatus};
use crate::models::vendor::Vendor;
use crate::utils::errors::AppResult;

/// Colaborador de persistência consumido pelo motor de transições.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Carrega o registro atual do veículo
    async fn load_vehicle(&self, id: Uuid) -> AppResult<Vehicle>;

    /// Escrita condicional atômica: aplica `new_state` apenas se o status
    /// armazenado ainda for `expected`. Caso contrário retorna
    /// `AppError::ConcurrencyConflict` com os dois statuses, e o chamador
    /// deve reler antes de tentar de novo.
    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: VehicleStatus,
        new_state: VehicleState,
    ) -> AppResult<Vehicle>;

    /// Carrega o registro do vendedor
    async fn load_vendor(&self, id: Uuid) -> AppResult<Vendor>;
}
