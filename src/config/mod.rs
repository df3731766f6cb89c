//! Configuração do projeto
//!
//! Este módulo contém a configuração de pontuação e os parâmetros
//! operacionais do ciclo de vida.

pub mod scoring;

pub use scoring::*;
