// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// Usuário resumido como vem na resposta de login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub perfil: String,
    pub active: bool,
}

// A sessão persistida: exatamente o corpo de POST /auth/login.
// Toda chamada autenticada carrega `Authorization: {token_type} {token}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sessao {
    pub user: SessionUser,
    pub token: String,
    pub token_type: String,
}

impl Sessao {
    pub fn cabecalho_autorizacao(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

// Dados para login
#[derive(Debug, Serialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}
