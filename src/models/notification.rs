//! Notificação de mudança de status
//!
//! Registro imutável que descreve uma transição do ciclo de vida.
//! O núcleo apenas constrói o registro; o despacho (webhooks,
//! invalidação de cache, refresh entre módulos) é responsabilidade
//! do colaborador externo.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::vehicle::VehicleStatus;

/// Registro imutável de uma transição de status.
///
/// Campos privados: o valor é criado uma vez por transição e nunca
/// mutado; o timestamp é fixado na construção.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeNotification {
    vehicle_id: Uuid,
    old_status: VehicleStatus,
    new_status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_name: Option<String>,
    timestamp: DateTime<Utc>,
    /// Módulo de origem da transição
    source: String,
}

impl StatusChangeNotification {
    pub fn new(
        vehicle_id: Uuid,
        old_status: VehicleStatus,
        new_status: VehicleStatus,
        source: impl Into<String>,
        vendor_id: Option<Uuid>,
        vendor_name: Option<String>,
    ) -> Self {
        Self {
            vehicle_id,
            old_status,
            new_status,
            vendor_id,
            vendor_name,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }

    pub fn vehicle_id(&self) -> Uuid {
        self.vehicle_id
    }

    pub fn old_status(&self) -> VehicleStatus {
        self.old_status
    }

    pub fn new_status(&self) -> VehicleStatus {
        self.new_status
    }

    pub fn vendor_id(&self) -> Option<Uuid> {
        self.vendor_id
    }

    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor_name.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Payload JSON entregue ao colaborador de despacho
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).expect("notification serializes to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_shape() {
        let vehicle_id = Uuid::from_u128(10);
        let vendor_id = Uuid::from_u128(5);
        let notification = StatusChangeNotification::new(
            vehicle_id,
            VehicleStatus::Available,
            VehicleStatus::Reserved,
            "lifecycle",
            Some(vendor_id),
            Some("Ana Souza".to_string()),
        );

        let payload = notification.to_payload();
        assert_eq!(payload["vehicleId"], vehicle_id.to_string());
        assert_eq!(payload["oldStatus"], "available");
        assert_eq!(payload["newStatus"], "reserved");
        assert_eq!(payload["vendorId"], vendor_id.to_string());
        assert_eq!(payload["vendorName"], "Ana Souza");
        assert_eq!(payload["source"], "lifecycle");
        assert!(payload.get("timestamp").is_some());
    }

    #[test]
    fn test_optional_vendor_omitted_from_payload() {
        let notification = StatusChangeNotification::new(
            Uuid::from_u128(10),
            VehicleStatus::Reserved,
            VehicleStatus::Available,
            "scheduler",
            None,
            None,
        );

        let payload = notification.to_payload();
        assert!(payload.get("vendorId").is_none());
        assert!(payload.get("vendorName").is_none());
    }
}
