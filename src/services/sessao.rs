// src/services/sessao.rs

// A sessão é o único estado mutável compartilhado entre telas. Nada de
// singleton de módulo: o serviço é construído no bootstrap, injetado em
// quem precisa (cliente HTTP, AuthService) e desmontado no logout.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::common::error::AppError;
use crate::models::auth::Sessao;

// =========================================================================
//  ARMAZENAMENTO DURÁVEL
// =========================================================================

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn carregar(&self) -> Result<Option<Sessao>, AppError>;
    async fn salvar(&self, sessao: &Sessao) -> Result<(), AppError>;
    async fn limpar(&self) -> Result<(), AppError>;
}

/// Sessão num arquivo JSON (o equivalente do localStorage do navegador).
pub struct FileSessionStore {
    caminho: PathBuf,
}

impl FileSessionStore {
    pub fn novo(caminho: PathBuf) -> Self {
        Self { caminho }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn carregar(&self) -> Result<Option<Sessao>, AppError> {
        let conteudo = match tokio::fs::read_to_string(&self.caminho).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Registro corrompido é descartado, não derruba a restauração.
        match serde_json::from_str(&conteudo) {
            Ok(sessao) => Ok(Some(sessao)),
            Err(e) => {
                tracing::warn!("Sessão armazenada inválida, descartando: {}", e);
                let _ = tokio::fs::remove_file(&self.caminho).await;
                Ok(None)
            }
        }
    }

    async fn salvar(&self, sessao: &Sessao) -> Result<(), AppError> {
        if let Some(dir) = self.caminho.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_string(sessao)?;
        tokio::fs::write(&self.caminho, json).await?;
        Ok(())
    }

    async fn limpar(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.caminho).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =========================================================================
//  SERVIÇO DE SESSÃO
// =========================================================================

pub struct ServicoSessao {
    store: Box<dyn SessionStore>,
    atual: RwLock<Option<Sessao>>,
    // Levantada quando um 401 derruba a sessão no meio de uma chamada;
    // a casca da aplicação observa e navega para o login.
    expirada: AtomicBool,
}

impl ServicoSessao {
    pub fn novo(store: Box<dyn SessionStore>) -> Self {
        Self {
            store,
            atual: RwLock::new(None),
            expirada: AtomicBool::new(false),
        }
    }

    /// Restaura a sessão persistida no boot da aplicação.
    pub async fn restaurar(&self) -> Result<bool, AppError> {
        let sessao = self.store.carregar().await?;
        let restaurada = sessao.is_some();
        *self.atual.write().expect("lock de sessão envenenado") = sessao;
        if restaurada {
            tracing::info!("✅ Sessão restaurada do armazenamento local");
        }
        Ok(restaurada)
    }

    /// Grava a sessão recém-autenticada (login).
    pub async fn iniciar(&self, sessao: Sessao) -> Result<(), AppError> {
        self.store.salvar(&sessao).await?;
        self.expirada.store(false, Ordering::Relaxed);
        *self.atual.write().expect("lock de sessão envenenado") = Some(sessao);
        Ok(())
    }

    /// Remove a sessão local (logout ou 401). Sempre limpa, mesmo que a
    /// escrita no armazenamento falhe.
    pub async fn encerrar(&self) {
        *self.atual.write().expect("lock de sessão envenenado") = None;
        if let Err(e) = self.store.limpar().await {
            tracing::warn!("Falha ao limpar a sessão persistida: {}", e);
        }
    }

    /// Chamado pela camada HTTP quando a API responde 401.
    pub async fn invalidar(&self) {
        self.expirada.store(true, Ordering::Relaxed);
        self.encerrar().await;
    }

    pub fn autenticado(&self) -> bool {
        self.atual.read().expect("lock de sessão envenenado").is_some()
    }

    pub fn expirada(&self) -> bool {
        self.expirada.load(Ordering::Relaxed)
    }

    pub fn usuario(&self) -> Option<crate::models::auth::SessionUser> {
        self.atual
            .read()
            .expect("lock de sessão envenenado")
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// Valor do header Authorization, lido antes de cada chamada autenticada.
    pub fn cabecalho_autorizacao(&self) -> Option<String> {
        self.atual
            .read()
            .expect("lock de sessão envenenado")
            .as_ref()
            .map(|s| s.cabecalho_autorizacao())
    }
}
