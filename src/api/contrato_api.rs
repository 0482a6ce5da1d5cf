// src/api/contrato_api.rs

use async_trait::async_trait;

use crate::api::RecursoCrud;
use crate::common::error::AppError;
use crate::form::combobox::{FonteOpcoes, OpcaoCombobox, PaginaOpcoes};
use crate::http::HttpClient;
use crate::models::contrato::{TipoContrato, TipoContratoPayload};

#[derive(Clone)]
pub struct TipoContratoApi {
    http: HttpClient,
}

impl TipoContratoApi {
    pub fn novo(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RecursoCrud for TipoContratoApi {
    type Entidade = TipoContrato;
    type Criar = TipoContratoPayload;
    type Atualizar = TipoContratoPayload;

    async fn listar(&self) -> Result<Vec<TipoContrato>, AppError> {
        self.http.get("/tipos-contrato").await
    }

    async fn criar(&self, payload: &TipoContratoPayload) -> Result<TipoContrato, AppError> {
        self.http.post("/tipos-contrato", payload).await
    }

    async fn atualizar(
        &self,
        id: i64,
        payload: &TipoContratoPayload,
    ) -> Result<TipoContrato, AppError> {
        self.http
            .put(&format!("/tipos-contrato/{}", id), payload)
            .await
    }

    /// DELETE aqui é desativação (ativo=false) no servidor.
    async fn remover(&self, id: i64) -> Result<(), AppError> {
        self.http.delete(&format!("/tipos-contrato/{}", id)).await
    }
}

// O formulário de venda também seleciona o tipo de contrato num combobox.
// A lista é curta, mas a fonte pagina mesmo assim, pelo mesmo contrato.
#[async_trait]
impl FonteOpcoes for TipoContratoApi {
    async fn buscar(
        &self,
        busca: &str,
        pagina: u32,
        tamanho_pagina: u32,
    ) -> Result<PaginaOpcoes, AppError> {
        let caminho = format!(
            "/tipos-contrato?search={}&page={}&per_page={}",
            urlencoding::encode(busca),
            pagina,
            tamanho_pagina
        );
        let tipos: Vec<TipoContrato> = self.http.get(&caminho).await?;

        let has_more = tipos.len() as u32 == tamanho_pagina;
        let data = tipos
            .into_iter()
            .filter(|t| t.ativo)
            .map(|t| OpcaoCombobox {
                valor: t.id.to_string(),
                rotulo: format!("{} ({}x)", t.nome, t.prazo_meses),
            })
            .collect();

        Ok(PaginaOpcoes {
            data,
            has_more,
            total: None,
        })
    }
}
