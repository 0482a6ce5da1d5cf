// src/api.rs

// Recursos REST tipados, um por entidade. Cumprem o mesmo papel que os
// repositórios por entidade de um backend, só que do lado consumidor:
// cada um embrulha o HttpClient com os endpoints e payloads certos.

use async_trait::async_trait;

use crate::common::error::AppError;

pub mod cliente_api;
pub mod contrato_api;
pub mod user_api;
pub mod venda_api;

pub use cliente_api::ClienteApi;
pub use contrato_api::TipoContratoApi;
pub use user_api::UserApi;
pub use venda_api::VendaApi;

/// As quatro operações que o controlador CRUD sincroniza. O "remover" de
/// tipo de contrato é desativação; a semântica fica no servidor.
#[async_trait]
pub trait RecursoCrud: Send + Sync {
    type Entidade: Send + Sync + Clone;
    type Criar: Send + Sync;
    type Atualizar: Send + Sync;

    async fn listar(&self) -> Result<Vec<Self::Entidade>, AppError>;
    async fn criar(&self, payload: &Self::Criar) -> Result<Self::Entidade, AppError>;
    async fn atualizar(
        &self,
        id: i64,
        payload: &Self::Atualizar,
    ) -> Result<Self::Entidade, AppError>;
    async fn remover(&self, id: i64) -> Result<(), AppError>;
}
