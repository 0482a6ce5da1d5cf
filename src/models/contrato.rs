// src/models/contrato.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Tipo de contrato: modelo reutilizável de prazo/carência referenciado
// pelas vendas. "Excluir" um tipo de contrato é desativá-lo (ativo=false);
// nunca há exclusão física.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoContrato {
    pub id: i64,
    pub nome: String,
    /// Prazo do contrato em meses (sempre >= 1).
    pub prazo_meses: u32,
    /// Carência, em dias, antes de oferecer uma nova oportunidade.
    pub tempo_nova_oportunidade_dias: u32,
    pub ativo: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TipoContratoPayload {
    pub nome: String,
    pub prazo_meses: u32,
    pub tempo_nova_oportunidade_dias: u32,
    pub ativo: bool,
}
