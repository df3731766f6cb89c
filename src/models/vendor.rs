//! Modelo de Vendedor
//!
//! Este módulo contém o registro de vendedor, os níveis de gamificação
//! e os snapshots de progresso de meta consultados pelo dashboard.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;

/// Nível do vendedor — determina o multiplicador de pontos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorLevel {
    Iniciante,
    Intermediario,
    Avancado,
    Expert,
}

/// Situação cadastral do vendedor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Ativo,
    Ferias,
    Suspenso,
    Inativo,
}

impl fmt::Display for VendorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iniciante => write!(f, "iniciante"),
            Self::Intermediario => write!(f, "intermediario"),
            Self::Avancado => write!(f, "avancado"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for VendorLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iniciante" => Ok(Self::Iniciante),
            "intermediario" => Ok(Self::Intermediario),
            "avancado" => Ok(Self::Avancado),
            "expert" => Ok(Self::Expert),
            _ => Err(AppError::Validation(format!("unknown vendor level: {s}"))),
        }
    }
}

/// Registro de vendedor.
///
/// A pontuação acumulada é mutada apenas pelo motor de pontuação, em
/// resposta a eventos de transição ou à virada de período.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: Uuid,
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    pub level: VendorLevel,
    pub status: VendorStatus,
    /// Pontuação acumulada de gamificação
    pub points: i64,
    pub monthly_revenue: Decimal,
    pub monthly_target: Decimal,
    /// Data de contratação
    pub hired_at: DateTime<Utc>,
}

impl Vendor {
    /// Percentual de progresso da meta mensal, saturado em 100.
    /// Sem meta positiva não há progresso a medir.
    pub fn meta_progress(&self) -> u8 {
        if self.monthly_target <= Decimal::ZERO {
            return 0;
        }
        let pct = (self.monthly_revenue * Decimal::from(100) / self.monthly_target)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        pct.to_i64().unwrap_or(0).clamp(0, 100) as u8
    }

    /// Snapshot avaliado no momento da consulta, não acompanhado
    /// continuamente
    pub fn meta_atingida(&self) -> bool {
        self.monthly_target > Decimal::ZERO && self.monthly_revenue >= self.monthly_target
    }
}
