// src/http/client.rs

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::error::AppError;
use crate::config::AppConfig;
use crate::services::sessao::ServicoSessao;

// Cliente HTTP da API do back-office. Lê o header Authorization da sessão
// injetada antes de CADA chamada e classifica status não-2xx na taxonomia
// de AppError. Um 401 invalida a sessão globalmente.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    sessao: Arc<ServicoSessao>,
}

impl HttpClient {
    pub fn novo(config: &AppConfig, sessao: Arc<ServicoSessao>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            sessao,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, caminho: &str) -> Result<T, AppError> {
        let resposta = self.executar(Method::GET, caminho, None::<&()>).await?;
        Ok(resposta.json().await?)
    }

    pub async fn post<B, T>(&self, caminho: &str, corpo: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resposta = self.executar(Method::POST, caminho, Some(corpo)).await?;
        Ok(resposta.json().await?)
    }

    /// POST sem interesse no corpo da resposta (ex.: /auth/logout).
    pub async fn post_vazio(&self, caminho: &str) -> Result<(), AppError> {
        self.executar(Method::POST, caminho, None::<&()>).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, caminho: &str, corpo: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resposta = self.executar(Method::PUT, caminho, Some(corpo)).await?;
        Ok(resposta.json().await?)
    }

    pub async fn delete(&self, caminho: &str) -> Result<(), AppError> {
        self.executar(Method::DELETE, caminho, None::<&()>).await?;
        Ok(())
    }

    async fn executar<B: Serialize + ?Sized>(
        &self,
        metodo: Method,
        caminho: &str,
        corpo: Option<&B>,
    ) -> Result<reqwest::Response, AppError> {
        let url = format!("{}{}", self.base_url, caminho);

        let mut requisicao = self.http.request(metodo.clone(), &url);
        if let Some(cabecalho) = self.sessao.cabecalho_autorizacao() {
            requisicao = requisicao.header(reqwest::header::AUTHORIZATION, cabecalho);
        }
        if let Some(corpo) = corpo {
            requisicao = requisicao.json(corpo);
        }

        let resposta = requisicao.send().await?;
        let status = resposta.status();

        if status.is_success() {
            return Ok(resposta);
        }

        // Corpo de erro: a API manda { "message": ... } ou { "error": ... }
        let corpo_erro: serde_json::Value = resposta.json().await.unwrap_or_default();
        let mensagem = corpo_erro
            .get("message")
            .or_else(|| corpo_erro.get("error"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        tracing::warn!("{} {} respondeu {}", metodo, caminho, status);

        if status.as_u16() == 401 {
            // Sessão inválida: limpa tudo e sinaliza para a casca navegar
            // ao login. A limpeza local não depende do servidor.
            self.sessao.invalidar().await;
        }

        Err(AppError::do_status(status.as_u16(), mensagem))
    }
}
