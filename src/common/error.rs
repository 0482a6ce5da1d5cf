// src/common/error.rs

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A taxonomia segue o contrato de status HTTP da API:
// 401 -> sessão invalidada, 403 -> permissão, 404 -> não encontrado,
// 422 -> validação (mensagem do servidor preferida), resto -> genérico.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Não autorizado")]
    NaoAutorizado,

    #[error("Acesso negado")]
    AcessoNegado,

    #[error("Recurso não encontrado")]
    NaoEncontrado,

    // 422: a mensagem enviada pelo servidor, quando houver.
    #[error("Erro de validação")]
    Validacao { mensagem: Option<String> },

    // Qualquer outro status não-2xx.
    #[error("Erro na requisição: {status}")]
    Api { status: u16, mensagem: Option<String> },

    #[error("Erro de rede")]
    Rede(#[from] reqwest::Error),

    // Formulário com erros de campo ou validação assíncrona pendente.
    // Nunca chega à camada de rede: o envio é bloqueado antes.
    #[error("Formulário inválido")]
    FormularioInvalido,

    #[error("Erro ao acessar o armazenamento local")]
    Armazenamento(#[from] std::io::Error),

    #[error("Erro de serialização")]
    Serializacao(#[from] serde_json::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno")]
    Interno(#[from] anyhow::Error),
}

impl AppError {
    /// Converte um status não-2xx (e o corpo já extraído) na variante certa.
    pub fn do_status(status: u16, mensagem: Option<String>) -> Self {
        match status {
            401 => AppError::NaoAutorizado,
            403 => AppError::AcessoNegado,
            404 => AppError::NaoEncontrado,
            422 => AppError::Validacao { mensagem },
            _ => AppError::Api { status, mensagem },
        }
    }

    /// Mensagem exibível ao usuário quando não há uma frase específica
    /// da operação (os controllers CRUD têm as suas próprias).
    pub fn mensagem_usuario(&self) -> String {
        match self {
            AppError::NaoAutorizado => "Sessão expirada. Faça login novamente.".to_string(),
            AppError::AcessoNegado => "Você não tem permissão para esta ação.".to_string(),
            AppError::NaoEncontrado => "Registro não encontrado.".to_string(),
            AppError::Validacao { mensagem } => mensagem
                .clone()
                .unwrap_or_else(|| "Erro de validação. Verifique os dados.".to_string()),
            ref e => {
                tracing::error!("Erro inesperado: {}", e);
                "Ocorreu um erro inesperado. Tente novamente.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifica_status_http() {
        assert!(matches!(AppError::do_status(401, None), AppError::NaoAutorizado));
        assert!(matches!(AppError::do_status(403, None), AppError::AcessoNegado));
        assert!(matches!(AppError::do_status(404, None), AppError::NaoEncontrado));
        assert!(matches!(
            AppError::do_status(422, Some("CPF já cadastrado".into())),
            AppError::Validacao { .. }
        ));
        assert!(matches!(
            AppError::do_status(500, None),
            AppError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn validacao_prefere_mensagem_do_servidor() {
        let erro = AppError::do_status(422, Some("CPF já cadastrado".into()));
        assert_eq!(erro.mensagem_usuario(), "CPF já cadastrado");

        let sem_corpo = AppError::do_status(422, None);
        assert_eq!(
            sem_corpo.mensagem_usuario(),
            "Erro de validação. Verifique os dados."
        );
    }
}
