//! Núcleo de ciclo de vida de veículos do back-office da concessionária.
//!
//! Camada pura de validação e cálculo: o modelo canônico de 4 estados e
//! sua tabela de transições, a projeção de compatibilidade para os
//! consumidores do modelo legado de 3 estados, o resolvedor de
//! permissões, o motor de transições sobre a porta de persistência, as
//! estatísticas reconciliadas e o motor de pontuação/ranking de
//! vendedores. Persistência, UI, upload, transporte de mensagens e
//! agendamento são colaboradores externos.

pub mod config;
pub mod dto;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use config::scoring::ScoringConfig;
pub use dto::vehicle_dto::{LegacyVehicleResponse, VehicleResponse};
pub use models::notification::StatusChangeNotification;
pub use models::vehicle::{LegacyStatus, Vehicle, VehicleState, VehicleStatus};
pub use models::vendor::{Vendor, VendorLevel, VendorStatus};
pub use repositories::{InMemoryVehicleStore, VehicleStore};
pub use services::legacy_service::{filter_by_legacy_status, sort_for_display, to_legacy_view};
pub use services::lifecycle_service::{LifecycleService, TransitionOutcome, LIFECYCLE_SOURCE};
pub use services::permission_service::{available_actions, validate_operation, VehicleAction};
pub use services::scoring_service::{ScoringService, VendorRanking};
pub use services::stats_service::{calculate_stats, VehicleStats};
pub use utils::errors::{AppError, AppResult, TransitionDenyReason};
