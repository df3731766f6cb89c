//! Services module
//!
//! Este módulo contém a lógica de negócio do núcleo: o resolvedor de
//! permissões, o motor de transições, o adaptador legado, a agregação
//! e o motor de pontuação.

pub mod legacy_service;
pub mod lifecycle_service;
pub mod permission_service;
pub mod scoring_service;
pub mod stats_service;

pub use legacy_service::*;
pub use lifecycle_service::*;
pub use permission_service::*;
pub use scoring_service::*;
pub use stats_service::*;
