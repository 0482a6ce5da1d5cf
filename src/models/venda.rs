// src/models/venda.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::cliente::Documento;
use crate::models::user::Perfil;

// --- STATUS ---

// Máquina de estados da venda: CRIADA -> ATIVA -> QUITADA, com
// cancelamento possível a partir de qualquer estado não terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusVenda {
    Criada,
    Ativa,
    Quitada,
    Cancelada,
}

impl StatusVenda {
    pub fn terminal(&self) -> bool {
        matches!(self, StatusVenda::Quitada | StatusVenda::Cancelada)
    }

    /// Relação de transição. As setas são unidirecionais; QUITADA e
    /// CANCELADA não têm saída.
    pub fn pode_transicionar_para(&self, destino: StatusVenda) -> bool {
        matches!(
            (self, destino),
            (StatusVenda::Criada, StatusVenda::Ativa)
                | (StatusVenda::Ativa, StatusVenda::Quitada)
                | (StatusVenda::Criada, StatusVenda::Cancelada)
                | (StatusVenda::Ativa, StatusVenda::Cancelada)
        )
    }

    pub fn pode_cancelar(&self) -> bool {
        self.pode_transicionar_para(StatusVenda::Cancelada)
    }
}

// --- PROJEÇÕES (resolvidas pelo servidor para exibição) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteResumo {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendedorResumo {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub perfil: Option<Perfil>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoContratoResumo {
    pub id: i64,
    pub nome: String,
    pub prazo_meses: u32,
    pub tempo_nova_oportunidade_dias: Option<u32>,
    pub ativo: Option<bool>,
}

// --- VENDA ---

// A venda referencia cliente/vendedor/tipo de contrato por id (referência
// fraca); as projeções expandidas só existem nas leituras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venda {
    pub id: i64,
    pub cliente_id: i64,
    /// Atribuído pelo servidor a partir da sessão; nunca editável.
    pub vendedor_id: i64,
    pub tipo_contrato_id: i64,
    /// A API trafega o valor como string decimal ("1234.56").
    pub valor: Decimal,
    pub data: NaiveDate,
    pub status: StatusVenda,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    pub cliente: Option<ClienteResumo>,
    pub vendedor: Option<VendedorResumo>,
    pub tipo_contrato: Option<TipoContratoResumo>,
    #[serde(default)]
    pub documentos: Vec<Documento>,
}

// Corpo de criação/atualização: sem id, timestamps, vendedor_id nem
// as projeções expandidas.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NovaVenda {
    pub cliente_id: i64,
    pub tipo_contrato_id: i64,
    pub valor: Decimal,
    pub data: String,
    pub status: StatusVenda,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelamento_so_a_partir_de_estado_nao_terminal() {
        assert!(StatusVenda::Criada.pode_cancelar());
        assert!(StatusVenda::Ativa.pode_cancelar());
        assert!(!StatusVenda::Quitada.pode_cancelar());
        assert!(!StatusVenda::Cancelada.pode_cancelar());
    }

    #[test]
    fn transicoes_sao_unidirecionais() {
        assert!(StatusVenda::Criada.pode_transicionar_para(StatusVenda::Ativa));
        assert!(StatusVenda::Ativa.pode_transicionar_para(StatusVenda::Quitada));

        // Sem volta nem atalho
        assert!(!StatusVenda::Ativa.pode_transicionar_para(StatusVenda::Criada));
        assert!(!StatusVenda::Criada.pode_transicionar_para(StatusVenda::Quitada));
        assert!(!StatusVenda::Quitada.pode_transicionar_para(StatusVenda::Ativa));
        assert!(!StatusVenda::Cancelada.pode_transicionar_para(StatusVenda::Ativa));
    }

    #[test]
    fn status_serializa_em_maiusculas() {
        assert_eq!(
            serde_json::to_string(&StatusVenda::Criada).unwrap(),
            "\"CRIADA\""
        );
        assert_eq!(
            serde_json::from_str::<StatusVenda>("\"QUITADA\"").unwrap(),
            StatusVenda::Quitada
        );
    }
}
