//! Motor de agregação
//!
//! Estatísticas reconciliadas entre a visão canônica e a visão legada,
//! em uma única passada, puras e independentes de ordem. O campo
//! `reserved` é a contagem compatível com a visão legada (inclui os em
//! negociação), de modo que consumidores antigos e novos nunca divergem.

use serde::{Deserialize, Serialize};

use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Contadores reconciliados do estoque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStats {
    pub available: usize,
    /// Contagem na visão legada: reservados canônicos + em negociação
    pub reserved: usize,
    /// Subconjunto de `reserved` que está em negociação ativa
    pub negotiating: usize,
    pub sold: usize,
    pub total: usize,
}

impl VehicleStats {
    /// Reservados no modelo canônico, sem os em negociação
    pub fn canonical_reserved(&self) -> usize {
        self.reserved - self.negotiating
    }

    /// Contagem que os consumidores legados enxergam como "reservado"
    pub fn legacy_reserved(&self) -> usize {
        self.reserved
    }
}

/// Calcula os contadores em uma única passada
pub fn calculate_stats(vehicles: &[Vehicle]) -> VehicleStats {
    vehicles
        .iter()
        .fold(VehicleStats::default(), |mut stats, vehicle| {
            match vehicle.status() {
                VehicleStatus::Available => stats.available += 1,
                VehicleStatus::Reserved => stats.reserved += 1,
                VehicleStatus::Negotiating => {
                    stats.reserved += 1;
                    stats.negotiating += 1;
                }
                VehicleStatus::Sold => stats.sold += 1,
            }
            stats.total += 1;
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleState;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn vehicle(id: u128, state: VehicleState) -> Vehicle {
        Vehicle {
            id: Uuid::from_u128(id),
            brand: None,
            model: None,
            value: Decimal::from(50000),
            state,
            created_at: Utc::now(),
        }
    }

    fn claimed(id: u128, negotiating: bool) -> Vehicle {
        let vendor = Uuid::from_u128(5);
        let now = Utc::now();
        if negotiating {
            vehicle(
                id,
                VehicleState::Negotiating {
                    assigned_vendor_id: vendor,
                    reserved_at: now,
                    negotiation_started_at: now,
                },
            )
        } else {
            vehicle(
                id,
                VehicleState::Reserved {
                    assigned_vendor_id: vendor,
                    reserved_at: now,
                },
            )
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats, VehicleStats::default());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.legacy_reserved(), 0);
    }

    #[test]
    fn test_single_negotiating_vehicle() {
        let stats = calculate_stats(&[claimed(1, true)]);
        assert_eq!(stats.available, 0);
        assert_eq!(stats.reserved, 1);
        assert_eq!(stats.negotiating, 1);
        assert_eq!(stats.sold, 0);
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn test_counts_reconcile_across_views() {
        let vehicles = vec![
            vehicle(1, VehicleState::Available),
            vehicle(2, VehicleState::Available),
            claimed(3, false),
            claimed(4, true),
            claimed(5, true),
            vehicle(
                6,
                VehicleState::Sold {
                    sold_vendor_id: Uuid::from_u128(5),
                    sold_at: Utc::now(),
                    sale_value: Decimal::from(52000),
                },
            ),
        ];

        let stats = calculate_stats(&vehicles);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.reserved, 3);
        assert_eq!(stats.negotiating, 2);
        assert_eq!(stats.canonical_reserved(), 1);
        assert_eq!(stats.sold, 1);
        assert_eq!(stats.total, 6);

        // Invariantes de reconciliação
        assert_eq!(
            stats.legacy_reserved(),
            stats.canonical_reserved() + stats.negotiating
        );
        assert_eq!(
            stats.available + stats.canonical_reserved() + stats.negotiating + stats.sold,
            stats.total
        );
    }

    #[test]
    fn test_order_independence() {
        let mut vehicles = vec![
            vehicle(1, VehicleState::Available),
            claimed(2, true),
            claimed(3, false),
        ];
        let forward = calculate_stats(&vehicles);
        vehicles.reverse();
        assert_eq!(calculate_stats(&vehicles), forward);
    }
}
