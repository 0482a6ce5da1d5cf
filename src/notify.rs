// src/notify.rs

// A notificação transitória (toast) é colaborador externo. Os controllers
// reportam cada mutação em três momentos, como o `toast.promise` da UI:
// pendente -> sucesso | falha.

pub trait Notificador: Send + Sync {
    fn pendente(&self, mensagem: &str);
    fn sucesso(&self, mensagem: &str);
    fn falha(&self, mensagem: &str);
}

/// Implementação padrão: encaminha para o log estruturado.
pub struct NotificadorTracing;

impl Notificador for NotificadorTracing {
    fn pendente(&self, mensagem: &str) {
        tracing::info!("⏳ {}", mensagem);
    }

    fn sucesso(&self, mensagem: &str) {
        tracing::info!("✅ {}", mensagem);
    }

    fn falha(&self, mensagem: &str) {
        tracing::warn!("❌ {}", mensagem);
    }
}
