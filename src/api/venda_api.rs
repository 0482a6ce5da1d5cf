// src/api/venda_api.rs

use async_trait::async_trait;

use crate::api::RecursoCrud;
use crate::common::error::AppError;
use crate::http::HttpClient;
use crate::models::venda::{NovaVenda, Venda};

#[derive(Clone)]
pub struct VendaApi {
    http: HttpClient,
}

impl VendaApi {
    pub fn novo(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RecursoCrud for VendaApi {
    type Entidade = Venda;
    type Criar = NovaVenda;
    type Atualizar = NovaVenda;

    async fn listar(&self) -> Result<Vec<Venda>, AppError> {
        self.http.get("/vendas").await
    }

    // O vendedor_id sai da sessão, no servidor; o corpo nunca o carrega.
    async fn criar(&self, payload: &NovaVenda) -> Result<Venda, AppError> {
        self.http.post("/vendas", payload).await
    }

    async fn atualizar(&self, id: i64, payload: &NovaVenda) -> Result<Venda, AppError> {
        self.http.put(&format!("/vendas/{}", id), payload).await
    }

    /// DELETE de venda é o cancelamento (CRIADA/ATIVA -> CANCELADA).
    async fn remover(&self, id: i64) -> Result<(), AppError> {
        self.http.delete(&format!("/vendas/{}", id)).await
    }
}
