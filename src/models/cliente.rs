// src/models/cliente.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// --- ENUMS ---

// Classificação fixa dos documentos anexados ao cliente.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoDocumento {
    Rg,
    Cpf,
    Cnh,
    Contracheque,
    CompResidencia,
    Outros,
}

// --- CLIENTE (como vem da API) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: NaiveDate,
    pub email: String,
    pub telefone: String,

    // Endereço estruturado
    pub end_logradouro: String,
    pub end_numero: String,
    pub end_complemento: Option<String>,
    pub end_bairro: String,
    pub end_cidade: String,
    pub end_uf: String,
    pub end_cep: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // O cliente é dono dos seus documentos (coleção ordenada pelo servidor).
    #[serde(default)]
    pub documentos: Vec<Documento>,
}

// Documento anexado: criado no upload, imutável depois.
// Não há operação de atualização nem de exclusão no escopo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Documento {
    pub id: i64,
    pub cliente_id: i64,
    pub tipo: TipoDocumento,
    pub nome_arquivo: String,
    pub file_path: String,
    pub file_url: String,
    pub tamanho_bytes: u64,
    pub hash_conteudo: String,
    pub enviado_por_usuario_id: i64,
    pub enviado_em: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOAD ---

// Corpo de criação/atualização: tudo menos os campos atribuídos
// pelo servidor (id, timestamps, documentos). As datas viajam como
// string YYYY-MM-DD, como a API espera.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientePayload {
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub email: String,
    pub telefone: String,
    pub end_logradouro: String,
    pub end_numero: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_complemento: Option<String>,
    pub end_bairro: String,
    pub end_cidade: String,
    pub end_uf: String,
    pub end_cep: String,
}
