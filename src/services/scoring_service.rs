//! Motor de pontuação e ranking de vendedores
//!
//! Acúmulo de pontos dirigido por configuração: pontos-base por venda,
//! por lead convertido e bônus de meta, todos multiplicados pelo nível
//! do vendedor; bônus de pódio creditados na virada do período. O
//! gatilho da virada é do agendador externo — aqui só se calcula o
//! valor resultante e a ordem.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::scoring::ScoringConfig;
use crate::models::vehicle::VehicleStatus;
use crate::models::vendor::{Vendor, VendorLevel};
use crate::services::lifecycle_service::TransitionOutcome;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_sale_value;

/// Entrada do ranking exposta ao dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRanking {
    pub position: u32,
    pub vendor_id: Uuid,
    pub name: String,
    pub level: VendorLevel,
    pub points: i64,
    pub meta_progress: u8,
    pub meta_atingida: bool,
}

/// Motor de pontuação sobre uma configuração de valores
pub struct ScoringService {
    config: ScoringConfig,
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringService {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn scaled(&self, base: i64, level: VendorLevel) -> i64 {
        (base as f64 * self.config.multiplier_for(level)).round() as i64
    }

    /// Pontos por venda concluída, já multiplicados pelo nível
    pub fn points_for_sale(&self, level: VendorLevel) -> i64 {
        self.scaled(self.config.points_per_sale, level)
    }

    /// Pontos por lead convertido, já multiplicados pelo nível
    pub fn points_for_lead(&self, level: VendorLevel) -> i64 {
        self.scaled(self.config.points_per_lead, level)
    }

    /// Bônus por atingir a meta mensal, já multiplicado pelo nível
    pub fn points_for_target_bonus(&self, level: VendorLevel) -> i64 {
        self.scaled(self.config.monthly_target_bonus, level)
    }

    /// Credita uma venda concluída: pontos de venda, faturamento do mês
    /// e, exatamente uma vez, o bônus quando a venda cruza a meta
    pub fn apply_sale(&self, vendor: &Vendor, sale_value: Decimal) -> AppResult<Vendor> {
        validate_sale_value(sale_value)?;

        let mut updated = vendor.clone();
        updated.points += self.points_for_sale(vendor.level);

        let had_met_target = vendor.meta_atingida();
        updated.monthly_revenue += sale_value;
        if !had_met_target && updated.meta_atingida() {
            updated.points += self.points_for_target_bonus(vendor.level);
        }

        Ok(updated)
    }

    /// Credita um lead convertido
    pub fn apply_lead_conversion(&self, vendor: &Vendor) -> Vendor {
        let mut updated = vendor.clone();
        updated.points += self.points_for_lead(vendor.level);
        updated
    }

    /// Ponte com o motor de transições: só o desfecho `sold` do próprio
    /// vendedor pontua; qualquer outro desfecho devolve o vendedor como
    /// está
    pub fn apply_sale_outcome(
        &self,
        vendor: &Vendor,
        outcome: &TransitionOutcome,
    ) -> AppResult<Vendor> {
        let notification = &outcome.notification;
        if notification.new_status() != VehicleStatus::Sold
            || notification.vendor_id() != Some(vendor.id)
        {
            return Ok(vendor.clone());
        }

        let sale_value = outcome.vehicle.state.sale_value().ok_or_else(|| {
            AppError::Validation("sold outcome without sale value".to_string())
        })?;
        self.apply_sale(vendor, sale_value)
    }

    /// Bônus de pódio para a posição (1ª, 2ª ou 3ª); zero fora do pódio
    pub fn podium_bonus_for(&self, position: u32) -> i64 {
        match position {
            1..=3 => self.config.podium_bonuses[(position - 1) as usize],
            _ => 0,
        }
    }

    /// Virada de período: credita os bônus de pódio pela ordem corrente
    /// do ranking e zera o faturamento mensal para o novo período
    pub fn apply_period_rollover(&self, vendors: &[Vendor]) -> Vec<Vendor> {
        let ranking = self.compute_vendor_ranking(vendors);
        let bonuses: HashMap<Uuid, i64> = ranking
            .iter()
            .take(3)
            .map(|entry| (entry.vendor_id, self.podium_bonus_for(entry.position)))
            .collect();

        vendors
            .iter()
            .map(|vendor| {
                let mut updated = vendor.clone();
                updated.points += bonuses.get(&vendor.id).copied().unwrap_or(0);
                updated.monthly_revenue = Decimal::ZERO;
                updated
            })
            .collect()
    }

    /// Ranking por pontuação acumulada descendente. Ordem total e
    /// idempotente: empates quebram por contratação mais antiga e, por
    /// fim, pelo id
    pub fn compute_vendor_ranking(&self, vendors: &[Vendor]) -> Vec<VendorRanking> {
        let mut ordered: Vec<&Vendor> = vendors.iter().collect();
        ordered.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.hired_at.cmp(&b.hired_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        ordered
            .into_iter()
            .enumerate()
            .map(|(index, vendor)| VendorRanking {
                position: index as u32 + 1,
                vendor_id: vendor.id,
                name: vendor.name.clone(),
                level: vendor.level,
                points: vendor.points,
                meta_progress: vendor.meta_progress(),
                meta_atingida: vendor.meta_atingida(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vendor::VendorStatus;
    use chrono::{Duration, Utc};

    fn vendor(id: u128, level: VendorLevel, points: i64) -> Vendor {
        Vendor {
            id: Uuid::from_u128(id),
            name: format!("Vendedor {id}"),
            level,
            status: VendorStatus::Ativo,
            points,
            monthly_revenue: Decimal::ZERO,
            monthly_target: Decimal::from(80000),
            hired_at: Utc::now() - Duration::days(id as i64),
        }
    }

    #[test]
    fn test_points_scale_with_level() {
        let service = ScoringService::default();
        assert_eq!(service.points_for_sale(VendorLevel::Iniciante), 100);
        assert_eq!(service.points_for_sale(VendorLevel::Intermediario), 125);
        assert_eq!(service.points_for_sale(VendorLevel::Avancado), 150);
        assert_eq!(service.points_for_sale(VendorLevel::Expert), 200);
    }

    #[test]
    fn test_apply_sale_credits_points_and_revenue() {
        let service = ScoringService::default();
        let before = vendor(1, VendorLevel::Iniciante, 0);

        let after = service.apply_sale(&before, Decimal::from(52000)).unwrap();
        assert_eq!(after.points, 100);
        assert_eq!(after.monthly_revenue, Decimal::from(52000));

        // O registro de entrada não é tocado
        assert_eq!(before.points, 0);
    }

    #[test]
    fn test_apply_sale_rejects_non_positive_value() {
        let service = ScoringService::default();
        let v = vendor(1, VendorLevel::Iniciante, 0);
        assert!(service.apply_sale(&v, Decimal::ZERO).is_err());
        assert!(service.apply_sale(&v, Decimal::from(-100)).is_err());
    }

    #[test]
    fn test_target_bonus_credited_exactly_once() {
        let service = ScoringService::default();
        let v = vendor(1, VendorLevel::Iniciante, 0);

        // Primeira venda: 50k de 80k — sem bônus
        let v = service.apply_sale(&v, Decimal::from(50000)).unwrap();
        assert_eq!(v.points, 100);

        // Segunda venda cruza a meta: venda + bônus
        let v = service.apply_sale(&v, Decimal::from(40000)).unwrap();
        assert_eq!(v.points, 100 + 100 + 150);
        assert!(v.meta_atingida());

        // Terceira venda acima da meta: só pontos de venda
        let v = service.apply_sale(&v, Decimal::from(30000)).unwrap();
        assert_eq!(v.points, 100 + 100 + 150 + 100);
    }

    #[test]
    fn test_lead_conversion_scales_with_level() {
        let service = ScoringService::default();

        let after = service.apply_lead_conversion(&vendor(1, VendorLevel::Iniciante, 0));
        assert_eq!(after.points, 20);

        let after = service.apply_lead_conversion(&vendor(2, VendorLevel::Expert, 10));
        assert_eq!(after.points, 10 + 40);
    }

    #[test]
    fn test_ranking_orders_by_points_desc() {
        let service = ScoringService::default();
        let vendors = vec![
            vendor(1, VendorLevel::Iniciante, 200),
            vendor(2, VendorLevel::Expert, 900),
            vendor(3, VendorLevel::Avancado, 500),
        ];

        let ranking = service.compute_vendor_ranking(&vendors);
        let ids: Vec<Uuid> = ranking.iter().map(|r| r.vendor_id).collect();
        assert_eq!(
            ids,
            vec![Uuid::from_u128(2), Uuid::from_u128(3), Uuid::from_u128(1)]
        );
        assert_eq!(ranking[0].position, 1);
        assert_eq!(ranking[2].position, 3);
    }

    #[test]
    fn test_ranking_is_idempotent_and_total_on_ties() {
        let service = ScoringService::default();
        // Mesmo total de pontos: contratação mais antiga (id 3) vem antes
        let vendors = vec![
            vendor(1, VendorLevel::Iniciante, 500),
            vendor(3, VendorLevel::Expert, 500),
        ];

        let first = service.compute_vendor_ranking(&vendors);
        let second = service.compute_vendor_ranking(&vendors);
        assert_eq!(first, second);
        assert_eq!(first[0].vendor_id, Uuid::from_u128(3));
        assert_ne!(first[0].position, first[1].position);
    }

    #[test]
    fn test_rollover_credits_podium_and_resets_revenue() {
        let service = ScoringService::default();
        let mut vendors = vec![
            vendor(1, VendorLevel::Iniciante, 900),
            vendor(2, VendorLevel::Iniciante, 700),
            vendor(3, VendorLevel::Iniciante, 500),
            vendor(4, VendorLevel::Iniciante, 100),
        ];
        for v in &mut vendors {
            v.monthly_revenue = Decimal::from(60000);
        }

        let rolled = service.apply_period_rollover(&vendors);

        assert_eq!(rolled[0].points, 900 + 300);
        assert_eq!(rolled[1].points, 700 + 200);
        assert_eq!(rolled[2].points, 500 + 100);
        assert_eq!(rolled[3].points, 100);
        assert!(rolled.iter().all(|v| v.monthly_revenue == Decimal::ZERO));
    }
}
