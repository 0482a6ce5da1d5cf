// src/lib.rs

// Núcleo cliente do back-office de consignado: modelos tipados,
// validação declarativa, motor de formulários e sincronização CRUD
// contra a API REST. A camada visual (rotas, diálogos, toasts) é
// colaborador externo e entra por traits (Notificador, SessionStore...).

pub mod api;
pub mod common;
pub mod config;
pub mod form;
pub mod http;
pub mod models;
pub mod notify;
pub mod services;
pub mod validation;

/// Inicializa o logger da aplicação. Chamar uma única vez, no bootstrap.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();
}
