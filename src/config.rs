// src/config.rs

use std::{env, path::PathBuf};

/// Configuração da aplicação, carregada do ambiente no bootstrap.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base da API REST do back-office (ex.: http://localhost:3333).
    pub api_base_url: String,
    /// Base do serviço de consulta de CEP.
    pub viacep_base_url: String,
    /// Arquivo onde a sessão autenticada é persistida.
    pub session_file: PathBuf,
}

impl AppConfig {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

        let viacep_base_url =
            env::var("VIACEP_BASE_URL").unwrap_or_else(|_| "https://viacep.com.br/ws".to_string());

        // Sem variável definida, a sessão vai para o diretório de dados do usuário.
        let session_file = match env::var("SESSION_FILE") {
            Ok(caminho) => PathBuf::from(caminho),
            Err(_) => dirs::data_dir()
                .unwrap_or_else(env::temp_dir)
                .join("consignado")
                .join("session.json"),
        };

        tracing::info!("✅ Configuração carregada (API em {})", api_base_url);

        Ok(Self {
            api_base_url,
            viacep_base_url,
            session_file,
        })
    }
}
