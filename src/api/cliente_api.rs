// src/api/cliente_api.rs

use async_trait::async_trait;

use crate::api::RecursoCrud;
use crate::common::error::AppError;
use crate::form::combobox::{FonteOpcoes, OpcaoCombobox, PaginaOpcoes};
use crate::http::HttpClient;
use crate::models::cliente::{Cliente, ClientePayload};

#[derive(Clone)]
pub struct ClienteApi {
    http: HttpClient,
}

impl ClienteApi {
    pub fn novo(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RecursoCrud for ClienteApi {
    type Entidade = Cliente;
    type Criar = ClientePayload;
    type Atualizar = ClientePayload;

    async fn listar(&self) -> Result<Vec<Cliente>, AppError> {
        self.http.get("/clientes").await
    }

    async fn criar(&self, payload: &ClientePayload) -> Result<Cliente, AppError> {
        self.http.post("/clientes", payload).await
    }

    async fn atualizar(&self, id: i64, payload: &ClientePayload) -> Result<Cliente, AppError> {
        self.http.put(&format!("/clientes/{}", id), payload).await
    }

    async fn remover(&self, id: i64) -> Result<(), AppError> {
        self.http.delete(&format!("/clientes/{}", id)).await
    }
}

// O combobox de cliente do formulário de venda pagina sobre o mesmo
// recurso, filtrando por nome no servidor.
#[async_trait]
impl FonteOpcoes for ClienteApi {
    async fn buscar(
        &self,
        busca: &str,
        pagina: u32,
        tamanho_pagina: u32,
    ) -> Result<PaginaOpcoes, AppError> {
        let caminho = format!(
            "/clientes?search={}&page={}&per_page={}",
            urlencoding::encode(busca),
            pagina,
            tamanho_pagina
        );
        let clientes: Vec<Cliente> = self.http.get(&caminho).await?;

        // Sem metadado de paginação no corpo, uma página cheia indica
        // que pode haver mais.
        let has_more = clientes.len() as u32 == tamanho_pagina;
        let data = clientes
            .into_iter()
            .map(|c| OpcaoCombobox {
                valor: c.id.to_string(),
                rotulo: format!("{} — {}", c.nome, c.cpf),
            })
            .collect();

        Ok(PaginaOpcoes {
            data,
            has_more,
            total: None,
        })
    }
}
