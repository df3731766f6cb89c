//! Adaptador de compatibilidade legada
//!
//! Projeção pura e sem efeitos do modelo canônico de 4 estados para a
//! visão de 3 estados consumida pelos módulos antigos, mais os filtros
//! e a ordenação de exibição compartilhados pelas listagens.

use std::cmp::Ordering;

use crate::dto::vehicle_dto::LegacyVehicleResponse;
use crate::models::vehicle::{LegacyStatus, Vehicle};

/// Projeção com perda para a visão legada: `negotiating` aparece como
/// `reserved`, com `is_negotiating` indicando o subestado
pub fn to_legacy_view(vehicle: &Vehicle) -> LegacyVehicleResponse {
    vehicle.into()
}

/// Filtra pela visão legada. `reserved` casa com os canônicos
/// `reserved` **ou** `negotiating`; os demais são casamento exato.
pub fn filter_by_legacy_status(vehicles: &[Vehicle], status: LegacyStatus) -> Vec<&Vehicle> {
    vehicles
        .iter()
        .filter(|v| v.status().to_legacy() == status)
        .collect()
}

/// Ordena para exibição: prioridade de status ascendente
/// (available < reserved < negotiating < sold), preço de tabela
/// descendente e id ascendente como desempate total
pub fn sort_for_display(vehicles: &mut [Vehicle]) {
    vehicles.sort_by(display_order);
}

fn display_order(a: &Vehicle, b: &Vehicle) -> Ordering {
    a.status()
        .display_priority()
        .cmp(&b.status().display_priority())
        .then_with(|| b.value.cmp(&a.value))
        .then_with(|| a.id.cmp(&b.id))
}
