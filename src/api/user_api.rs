// src/api/user_api.rs

use async_trait::async_trait;

use crate::api::RecursoCrud;
use crate::common::error::AppError;
use crate::http::HttpClient;
use crate::models::user::{AtualizaUser, NovoUser, User};

#[derive(Clone)]
pub struct UserApi {
    http: HttpClient,
}

impl UserApi {
    pub fn novo(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RecursoCrud for UserApi {
    type Entidade = User;
    type Criar = NovoUser;
    // A atualização tem corpo próprio: senha em branco é omitida.
    type Atualizar = AtualizaUser;

    async fn listar(&self) -> Result<Vec<User>, AppError> {
        self.http.get("/users").await
    }

    async fn criar(&self, payload: &NovoUser) -> Result<User, AppError> {
        self.http.post("/users", payload).await
    }

    async fn atualizar(&self, id: i64, payload: &AtualizaUser) -> Result<User, AppError> {
        self.http.put(&format!("/users/{}", id), payload).await
    }

    async fn remover(&self, id: i64) -> Result<(), AppError> {
        self.http.delete(&format!("/users/{}", id)).await
    }
}
