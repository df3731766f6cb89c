//! Modelo de Veículo
//!
//! Este módulo contém o modelo canônico de 4 estados do ciclo de vida,
//! a tabela de transições e o registro de veículo. A variante de estado
//! carrega exatamente os campos legais para aquele estado: um veículo
//! disponível não tem campo de vendedor, e um veículo vendido carrega o
//! registro imutável da venda.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Status canônico do veículo (modelo de 4 estados)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    /// Em estoque, sem vendedor
    Available,
    /// Reservado com exclusividade por um vendedor
    Reserved,
    /// Em negociação ativa pelo mesmo vendedor da reserva
    Negotiating,
    /// Vendido — estado terminal
    Sold,
}

/// Status no modelo legado de 3 estados, consumido pelos módulos que
/// não conhecem `negotiating`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyStatus {
    Available,
    Reserved,
    Sold,
}

impl VehicleStatus {
    /// Estado terminal: nenhuma transição adicional é permitida
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Sold)
    }

    /// Estados que exigem um vendedor atribuído
    pub fn has_vendor(&self) -> bool {
        matches!(self, Self::Reserved | Self::Negotiating)
    }

    /// Prioridade de exibição nas listagens:
    /// available < reserved < negotiating < sold
    pub fn display_priority(&self) -> u8 {
        match self {
            Self::Available => 1,
            Self::Reserved => 2,
            Self::Negotiating => 3,
            Self::Sold => 4,
        }
    }

    /// Projeção com perda para o modelo legado: `negotiating` vira `reserved`
    pub fn to_legacy(&self) -> LegacyStatus {
        match self {
            Self::Available => LegacyStatus::Available,
            Self::Reserved | Self::Negotiating => LegacyStatus::Reserved,
            Self::Sold => LegacyStatus::Sold,
        }
    }

    /// Tabela de transições do ciclo de vida. Qualquer par fora da tabela
    /// é inválido.
    pub fn can_transition_to(&self, target: VehicleStatus) -> bool {
        use VehicleStatus::*;
        matches!(
            (self, target),
            (Available, Reserved)
                | (Reserved, Negotiating)
                | (Reserved, Available)
                | (Negotiating, Sold)
                | (Negotiating, Available)
        )
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Reserved => write!(f, "reserved"),
            Self::Negotiating => write!(f, "negotiating"),
            Self::Sold => write!(f, "sold"),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "negotiating" => Ok(Self::Negotiating),
            "sold" => Ok(Self::Sold),
            _ => Err(AppError::Validation(format!("unknown vehicle status: {s}"))),
        }
    }
}

impl fmt::Display for LegacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Reserved => write!(f, "reserved"),
            Self::Sold => write!(f, "sold"),
        }
    }
}

impl FromStr for LegacyStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "sold" => Ok(Self::Sold),
            _ => Err(AppError::Validation(format!("unknown legacy status: {s}"))),
        }
    }
}

/// Estado do veículo como união discriminada pelo status.
///
/// Invariante estrutural: posse exclusiva em reserved/negotiating e
/// registro imutável de venda em sold. A combinação "available com
/// vendedor" não é representável.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VehicleState {
    Available,
    #[serde(rename_all = "camelCase")]
    Reserved {
        assigned_vendor_id: Uuid,
        reserved_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Negotiating {
        assigned_vendor_id: Uuid,
        reserved_at: DateTime<Utc>,
        negotiation_started_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Sold {
        sold_vendor_id: Uuid,
        sold_at: DateTime<Utc>,
        sale_value: Decimal,
    },
}

impl VehicleState {
    pub fn status(&self) -> VehicleStatus {
        match self {
            Self::Available => VehicleStatus::Available,
            Self::Reserved { .. } => VehicleStatus::Reserved,
            Self::Negotiating { .. } => VehicleStatus::Negotiating,
            Self::Sold { .. } => VehicleStatus::Sold,
        }
    }

    /// Vendedor com posse exclusiva, presente apenas em reserved/negotiating
    pub fn assigned_vendor_id(&self) -> Option<Uuid> {
        match self {
            Self::Reserved {
                assigned_vendor_id, ..
            }
            | Self::Negotiating {
                assigned_vendor_id, ..
            } => Some(*assigned_vendor_id),
            _ => None,
        }
    }

    pub fn reserved_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Reserved { reserved_at, .. } | Self::Negotiating { reserved_at, .. } => {
                Some(*reserved_at)
            }
            _ => None,
        }
    }

    pub fn negotiation_started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Negotiating {
                negotiation_started_at,
                ..
            } => Some(*negotiation_started_at),
            _ => None,
        }
    }

    pub fn sold_vendor_id(&self) -> Option<Uuid> {
        match self {
            Self::Sold { sold_vendor_id, .. } => Some(*sold_vendor_id),
            _ => None,
        }
    }

    pub fn sale_value(&self) -> Option<Decimal> {
        match self {
            Self::Sold { sale_value, .. } => Some(*sale_value),
            _ => None,
        }
    }
}

/// Registro canônico de veículo.
///
/// Criado em `available` pelo colaborador externo e mutado apenas pelo
/// motor de transições; a exclusão é responsabilidade externa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Preço de tabela, usado para ordenação de exibição
    pub value: Decimal,
    #[serde(flatten)]
    pub state: VehicleState,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Novo veículo em estoque, sem vendedor
    pub fn new(id: Uuid, brand: Option<String>, model: Option<String>, value: Decimal) -> Self {
        Self {
            id,
            brand,
            model,
            value,
            state: VehicleState::Available,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> VehicleStatus {
        self.state.status()
    }

    pub fn assigned_vendor_id(&self) -> Option<Uuid> {
        self.state.assigned_vendor_id()
    }

    pub fn is_owned_by(&self, vendor_id: Uuid) -> bool {
        self.state.assigned_vendor_id() == Some(vendor_id)
    }

    /// Predicado puro de expiração consultado pelo agendador externo.
    ///
    /// Mede a partir do timestamp de entrada no estado atual: `reserved_at`
    /// em reserva, `negotiation_started_at` em negociação. Veículos
    /// disponíveis ou vendidos nunca expiram.
    pub fn is_expired(&self, now: DateTime<Utc>, max_duration_days: i64) -> bool {
        let entered_at = match &self.state {
            VehicleState::Reserved { reserved_at, .. } => *reserved_at,
            VehicleState::Negotiating {
                negotiation_started_at,
                ..
            } => *negotiation_started_at,
            _ => return false,
        };
        now - entered_at > Duration::days(max_duration_days)
    }
}
