//! DTOs de veículo para os consumidores de dashboard
//!
//! Projeções em JSON camelCase consumidas pela camada de apresentação:
//! a visão canônica de 4 estados e a visão legada de 3 estados para os
//! módulos que não conhecem `negotiating`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::{LegacyStatus, Vehicle, VehicleStatus};

/// Visão canônica do veículo (modelo de 4 estados)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_vendor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negotiation_started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_vendor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_value: Option<Decimal>,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Visão legada do veículo (modelo de 3 estados).
///
/// Projeção com perda e unidirecional: consumidores legados só enxergam
/// `reserved`; o registro canônico segue sendo a fonte da verdade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVehicleResponse {
    pub id: Uuid,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: LegacyStatus,
    pub is_negotiating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_vendor_id: Option<Uuid>,
    pub value: Decimal,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            status: vehicle.status(),
            assigned_vendor_id: vehicle.state.assigned_vendor_id(),
            reserved_at: vehicle.state.reserved_at(),
            negotiation_started_at: vehicle.state.negotiation_started_at(),
            sold_vendor_id: vehicle.state.sold_vendor_id(),
            sale_value: vehicle.state.sale_value(),
            value: vehicle.value,
            created_at: vehicle.created_at,
        }
    }
}

impl From<&Vehicle> for LegacyVehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            status: vehicle.status().to_legacy(),
            is_negotiating: vehicle.status() == VehicleStatus::Negotiating,
            assigned_vendor_id: vehicle.state.assigned_vendor_id(),
            value: vehicle.value,
        }
    }
}
