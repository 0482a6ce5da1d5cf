// src/services/auth_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::common::error::AppError;
use crate::http::HttpClient;
use crate::models::auth::{LoginPayload, Sessao};
use crate::notify::Notificador;
use crate::services::sessao::ServicoSessao;

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
    sessao: Arc<ServicoSessao>,
    notificador: Arc<dyn Notificador>,
}

impl AuthService {
    pub fn novo(
        http: HttpClient,
        sessao: Arc<ServicoSessao>,
        notificador: Arc<dyn Notificador>,
    ) -> Self {
        Self {
            http,
            sessao,
            notificador,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), AppError> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        payload
            .validate()
            .map_err(|_| AppError::FormularioInvalido)?;

        self.notificador.pendente("Fazendo login...");

        let resultado: Result<Sessao, AppError> = self.http.post("/auth/login", &payload).await;

        match resultado {
            Ok(sessao) => {
                tracing::info!("Login de {}", sessao.user.email);
                self.sessao.iniciar(sessao).await?;
                self.notificador.sucesso("Login realizado com sucesso!");
                Ok(())
            }
            Err(erro) => {
                let mensagem = match &erro {
                    AppError::NaoAutorizado => "Credenciais inválidas".to_string(),
                    AppError::AcessoNegado => {
                        "Usuário inativo. Entre em contato com o administrador.".to_string()
                    }
                    _ => "Erro ao fazer login. Tente novamente.".to_string(),
                };
                self.notificador.falha(&mensagem);
                Err(erro)
            }
        }
    }

    /// Logout de melhor esforço: avisa o servidor se der, mas a sessão
    /// local é limpa incondicionalmente.
    pub async fn logout(&self) {
        if self.sessao.autenticado() {
            if let Err(e) = self.http.post_vazio("/auth/logout").await {
                tracing::warn!("Logout no servidor falhou (ignorado): {}", e);
            }
        }
        self.sessao.encerrar().await;
    }

    /// Restaura a sessão persistida no boot.
    pub async fn restaurar(&self) -> Result<bool, AppError> {
        self.sessao.restaurar().await
    }
}
