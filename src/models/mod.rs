//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados do núcleo: o veículo com o
//! ciclo de vida canônico de 4 estados, o vendedor com os dados de
//! gamificação e o registro imutável de notificação de transição.

pub mod notification;
pub mod vehicle;
pub mod vendor;
