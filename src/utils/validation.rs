//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação dos valores
//! monetários que entram no núcleo.

use num_traits::Zero;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::{AppError, AppResult};

/// Validar que um valor seja positivo
pub fn validate_positive<T: PartialOrd + Zero + Serialize>(
    field: &'static str,
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("field".into(), &field);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar o valor de uma venda: precisa ser estritamente positivo
pub fn validate_sale_value(value: Decimal) -> AppResult<()> {
    validate_positive("sale_value", value)
        .map_err(|_| AppError::Validation(format!("sale value must be positive, got {}", value)))
}
