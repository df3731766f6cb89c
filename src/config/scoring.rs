//! Configuração de pontuação
//!
//! Todos os valores do motor de gamificação são dados, não lógica:
//! pontos-base, multiplicadores por nível, bônus de pódio e a janela de
//! expiração de reservas. Os valores padrão podem ser sobrescritos por
//! variáveis de ambiente `SCORING_*`.

use serde::{Deserialize, Serialize};
use std::env;

use crate::models::vendor::VendorLevel;

/// Configuração do motor de pontuação e ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Pontos-base por venda concluída
    pub points_per_sale: i64,
    /// Pontos-base por lead convertido
    pub points_per_lead: i64,
    /// Bônus por atingir a meta mensal de faturamento
    pub monthly_target_bonus: i64,
    /// Bônus de pódio creditados na virada do período (1º, 2º, 3º)
    pub podium_bonuses: [i64; 3],
    /// Multiplicadores por nível
    pub multiplier_iniciante: f64,
    pub multiplier_intermediario: f64,
    pub multiplier_avancado: f64,
    pub multiplier_expert: f64,
    /// Janela máxima de reserva/negociação antes de expirar, em dias
    pub max_reservation_days: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_sale: 100,
            points_per_lead: 20,
            monthly_target_bonus: 150,
            podium_bonuses: [300, 200, 100],
            multiplier_iniciante: 1.0,
            multiplier_intermediario: 1.25,
            multiplier_avancado: 1.5,
            multiplier_expert: 2.0,
            max_reservation_days: 3,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl ScoringConfig {
    /// Carrega a configuração do ambiente, mantendo os padrões para
    /// variáveis ausentes ou inválidas
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            points_per_sale: env_or("SCORING_POINTS_PER_SALE", defaults.points_per_sale),
            points_per_lead: env_or("SCORING_POINTS_PER_LEAD", defaults.points_per_lead),
            monthly_target_bonus: env_or(
                "SCORING_MONTHLY_TARGET_BONUS",
                defaults.monthly_target_bonus,
            ),
            podium_bonuses: [
                env_or("SCORING_PODIUM_BONUS_1", defaults.podium_bonuses[0]),
                env_or("SCORING_PODIUM_BONUS_2", defaults.podium_bonuses[1]),
                env_or("SCORING_PODIUM_BONUS_3", defaults.podium_bonuses[2]),
            ],
            multiplier_iniciante: env_or(
                "SCORING_MULTIPLIER_INICIANTE",
                defaults.multiplier_iniciante,
            ),
            multiplier_intermediario: env_or(
                "SCORING_MULTIPLIER_INTERMEDIARIO",
                defaults.multiplier_intermediario,
            ),
            multiplier_avancado: env_or(
                "SCORING_MULTIPLIER_AVANCADO",
                defaults.multiplier_avancado,
            ),
            multiplier_expert: env_or("SCORING_MULTIPLIER_EXPERT", defaults.multiplier_expert),
            max_reservation_days: env_or(
                "SCORING_MAX_RESERVATION_DAYS",
                defaults.max_reservation_days,
            ),
        }
    }

    /// Multiplicador de pontos do nível
    pub fn multiplier_for(&self, level: VendorLevel) -> f64 {
        match level {
            VendorLevel::Iniciante => self.multiplier_iniciante,
            VendorLevel::Intermediario => self.multiplier_intermediario,
            VendorLevel::Avancado => self.multiplier_avancado,
            VendorLevel::Expert => self.multiplier_expert,
        }
    }
}
