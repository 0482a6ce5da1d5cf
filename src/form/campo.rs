// src/form/campo.rs

/// Validação assíncrona de um campo (hoje, só a consulta de CEP).
/// O slot é acompanhado separadamente da lista de erros síncronos:
/// o envio fica bloqueado enquanto houver slot pendente ou inválido.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SlotAssincrono {
    /// Campo sem validação remota, ou valor ainda não verificado.
    #[default]
    Inativo,
    /// Consulta em voo para o valor guardado. Se o valor mudar antes da
    /// resposta, a resposta é descartada.
    Pendente { valor: String },
    Valido,
    Invalido { mensagem: String },
    /// O valor mudou depois de um resultado assentado: o veredito antigo
    /// (válido ou inválido) não vale mais e uma nova consulta é necessária.
    Desatualizado,
}

impl SlotAssincrono {
    pub fn pendente(&self) -> bool {
        matches!(self, SlotAssincrono::Pendente { .. })
    }

    pub fn bloqueia_envio(&self) -> bool {
        matches!(
            self,
            SlotAssincrono::Pendente { .. }
                | SlotAssincrono::Invalido { .. }
                | SlotAssincrono::Desatualizado
        )
    }
}

/// Estado de um campo dentro do formulário: o valor mora no modelo;
/// aqui ficam o tocado, os erros e a validação remota.
#[derive(Debug, Clone, Default)]
pub struct CampoEstado {
    /// O usuário já saiu do campo ao menos uma vez? Erros só aparecem
    /// depois disso, para não piscar antes da primeira interação.
    pub tocado: bool,
    pub erros: Vec<String>,
    pub assincrono: SlotAssincrono,
}

impl CampoEstado {
    /// Erros exibíveis: os do slot remoto entram junto com os síncronos.
    pub fn erros_visiveis(&self) -> Vec<String> {
        if !self.tocado {
            return Vec::new();
        }
        let mut visiveis = self.erros.clone();
        if let SlotAssincrono::Invalido { mensagem } = &self.assincrono {
            visiveis.push(mensagem.clone());
        }
        visiveis
    }
}
