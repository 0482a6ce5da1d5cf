// src/form/formulario.rs

use std::collections::HashMap;
use std::future::Future;

use validator::Validate;

use crate::common::error::AppError;
use crate::form::campo::{CampoEstado, SlotAssincrono};
use crate::validation::regras::CepLookup;
use crate::validation::validar;

/// Controlador de um formulário sobre o modelo de valores `T`.
/// A validação do schema roda a cada escrita e, de novo, atomicamente
/// no envio; o envio só acontece com todos os campos limpos e todas as
/// validações remotas assentadas.
pub struct Formulario<T: Validate + Clone> {
    valores: T,
    campos: HashMap<&'static str, CampoEstado>,
    enviando: bool,
}

impl<T: Validate + Clone> Formulario<T> {
    /// `nomes` são os campos que o formulário renderiza. Qualquer acesso
    /// posterior a um nome fora dessa lista é erro de programação.
    pub fn novo(valores: T, nomes: &[&'static str]) -> Self {
        let campos = nomes
            .iter()
            .map(|nome| (*nome, CampoEstado::default()))
            .collect();

        let mut form = Self {
            valores,
            campos,
            enviando: false,
        };
        form.revalidar();
        form
    }

    pub fn valores(&self) -> &T {
        &self.valores
    }

    // Contrato de programação: nome não registrado derruba na hora,
    // nunca devolve estado de outro campo.
    fn estado(&self, nome: &str) -> &CampoEstado {
        self.campos
            .get(nome)
            .unwrap_or_else(|| panic!("campo '{}' não registrado no formulário", nome))
    }

    fn estado_mut(&mut self, nome: &str) -> &mut CampoEstado {
        self.campos
            .get_mut(nome)
            .unwrap_or_else(|| panic!("campo '{}' não registrado no formulário", nome))
    }

    fn revalidar(&mut self) {
        let erros = validar(&self.valores);
        for (nome, estado) in self.campos.iter_mut() {
            estado.erros = erros.get(*nome).cloned().unwrap_or_default();
        }
    }

    /// Escreve no modelo através da lente do widget e revalida tudo.
    /// Só o campo alterado muda de lista de erros visível, porque a
    /// visibilidade é por-campo (tocado).
    pub fn definir(&mut self, nome: &'static str, aplicar: impl FnOnce(&mut T)) {
        // Falha rápido antes de alterar o modelo; e qualquer veredito
        // remoto do campo valia para o valor antigo, não para este.
        let estado = self.estado_mut(nome);
        if !matches!(estado.assincrono, SlotAssincrono::Inativo) {
            estado.assincrono = SlotAssincrono::Desatualizado;
        }
        aplicar(&mut self.valores);
        self.revalidar();
    }

    /// Blur: marca o campo como tocado; a partir daqui os erros aparecem.
    pub fn tocar(&mut self, nome: &'static str) {
        self.estado_mut(nome).tocado = true;
    }

    /// No envio reprovado a UI marca tudo como tocado para mostrar o
    /// que falta.
    pub fn tocar_todos(&mut self) {
        for estado in self.campos.values_mut() {
            estado.tocado = true;
        }
    }

    pub fn tocado(&self, nome: &str) -> bool {
        self.estado(nome).tocado
    }

    pub fn erros(&self, nome: &str) -> &[String] {
        &self.estado(nome).erros
    }

    pub fn erros_visiveis(&self, nome: &str) -> Vec<String> {
        self.estado(nome).erros_visiveis()
    }

    pub fn enviando(&self) -> bool {
        self.enviando
    }

    /// Válido = nenhum erro síncrono e nenhum slot remoto reprovado.
    pub fn valido(&self) -> bool {
        self.campos
            .values()
            .all(|c| c.erros.is_empty() && !matches!(c.assincrono, SlotAssincrono::Invalido { .. }))
    }

    /// O estado do botão de envio: desabilitado enquanto envia, com erro
    /// presente ou com validação remota em voo, reprovada ou desatualizada
    /// pela edição do valor.
    pub fn pode_enviar(&self) -> bool {
        !self.enviando
            && self
                .campos
                .values()
                .all(|c| c.erros.is_empty() && !c.assincrono.bloqueia_envio())
    }

    // =====================================================================
    //  VALIDAÇÃO REMOTA (slot por campo)
    // =====================================================================

    pub fn iniciar_validacao_remota(&mut self, nome: &'static str, valor: &str) {
        self.estado_mut(nome).assincrono = SlotAssincrono::Pendente {
            valor: valor.to_string(),
        };
    }

    /// Assenta o slot, mas só se a resposta for do valor ainda em voo;
    /// resposta de um valor já superado é ignorada.
    pub fn concluir_validacao_remota(
        &mut self,
        nome: &'static str,
        valor: &str,
        resultado: Result<bool, AppError>,
        mensagem_invalido: &str,
    ) {
        let estado = self.estado_mut(nome);
        match &estado.assincrono {
            SlotAssincrono::Pendente { valor: em_voo } if em_voo == valor => {
                estado.assincrono = match resultado {
                    Ok(true) => SlotAssincrono::Valido,
                    Ok(false) => SlotAssincrono::Invalido {
                        mensagem: mensagem_invalido.to_string(),
                    },
                    Err(e) => {
                        tracing::warn!("Validação remota de '{}' falhou: {}", nome, e);
                        SlotAssincrono::Invalido {
                            mensagem: mensagem_invalido.to_string(),
                        }
                    }
                };
            }
            _ => {
                tracing::debug!("Resposta remota superada para '{}', ignorada", nome);
            }
        }
    }

    /// Valida o CEP no serviço externo. Suspende só este campo; os
    /// demais continuam com validação síncrona normal.
    pub async fn validar_cep_remoto(
        &mut self,
        nome: &'static str,
        valor: String,
        lookup: &dyn CepLookup,
    ) {
        self.iniciar_validacao_remota(nome, &valor);
        let resultado = lookup.cep_existe(&valor).await;
        self.concluir_validacao_remota(nome, &valor, resultado, "CEP não encontrado");
    }

    // =====================================================================
    //  ENVIO
    // =====================================================================

    /// Revalida atomicamente e, se tudo estiver assentado e limpo, roda a
    /// ação de envio com uma cópia dos valores. Formulário inválido nunca
    /// chega à rede.
    pub async fn enviar<F, Fut, R>(&mut self, acao: F) -> Result<R, AppError>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<R, AppError>>,
    {
        self.revalidar();
        if !self.pode_enviar() {
            self.tocar_todos();
            return Err(AppError::FormularioInvalido);
        }

        self.enviando = true;
        let resultado = acao(self.valores.clone()).await;
        self.enviando = false;
        resultado
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::schemas::ClienteForm;

    fn form_cliente() -> Formulario<ClienteForm> {
        Formulario::novo(
            ClienteForm::default(),
            &["nome", "cpf", "email", "end_cep"],
        )
    }

    #[test]
    fn erros_so_aparecem_depois_do_blur() {
        let mut form = form_cliente();

        // O campo já está inválido (vazio), mas nada aparece
        assert!(!form.erros("nome").is_empty());
        assert!(form.erros_visiveis("nome").is_empty());

        form.tocar("nome");
        assert_eq!(
            form.erros_visiveis("nome"),
            vec!["Nome deve ter pelo menos 2 caracteres".to_string()]
        );
    }

    #[test]
    fn escrita_revalida_na_hora() {
        let mut form = form_cliente();
        form.tocar("nome");

        form.definir("nome", |v| v.nome = "Pedro Duarte".into());
        assert!(form.erros_visiveis("nome").is_empty());

        form.definir("nome", |v| v.nome = "P".into());
        assert!(!form.erros_visiveis("nome").is_empty());
    }

    #[test]
    #[should_panic(expected = "não registrado")]
    fn campo_desconhecido_derruba_rapido() {
        let form = form_cliente();
        let _ = form.erros("inexistente");
    }

    #[test]
    fn slot_pendente_bloqueia_envio() {
        let mut form = form_cliente();
        form.iniciar_validacao_remota("end_cep", "01001000");
        assert!(!form.pode_enviar());
    }

    #[test]
    fn resposta_remota_superada_e_ignorada() {
        let mut form = form_cliente();

        form.iniciar_validacao_remota("end_cep", "01001000");
        // O usuário trocou o CEP; nova consulta em voo
        form.iniciar_validacao_remota("end_cep", "04538132");

        // A resposta da consulta antiga chega atrasada: não assenta nada
        form.concluir_validacao_remota("end_cep", "01001000", Ok(false), "CEP não encontrado");
        assert!(form.estado("end_cep").assincrono.pendente());

        form.concluir_validacao_remota("end_cep", "04538132", Ok(true), "CEP não encontrado");
        assert_eq!(form.estado("end_cep").assincrono, SlotAssincrono::Valido);
    }

    #[test]
    fn cep_invalido_aparece_nos_erros_visiveis() {
        let mut form = form_cliente();
        form.tocar("end_cep");
        form.definir("end_cep", |v| v.end_cep = "99999999".into());

        form.iniciar_validacao_remota("end_cep", "99999999");
        form.concluir_validacao_remota("end_cep", "99999999", Ok(false), "CEP não encontrado");

        assert!(form
            .erros_visiveis("end_cep")
            .contains(&"CEP não encontrado".to_string()));
        assert!(!form.pode_enviar());
    }

    fn form_cliente_valido() -> Formulario<ClienteForm> {
        let mut form = form_cliente();
        form.definir("nome", |v| v.nome = "Pedro Duarte".into());
        form.definir("cpf", |v| v.cpf = "111.444.777-35".into());
        form.definir("email", |v| v.email = "peduarte@example.com".into());
        form.definir("end_cep", |v| v.end_cep = "01001000".into());
        form
    }

    #[test]
    fn editar_o_cep_verificado_exige_nova_consulta() {
        let mut form = form_cliente_valido();

        form.iniciar_validacao_remota("end_cep", "01001000");
        form.concluir_validacao_remota("end_cep", "01001000", Ok(true), "CEP não encontrado");
        assert!(form.pode_enviar());

        // O veredito era do CEP antigo; o novo ainda não foi consultado
        form.definir("end_cep", |v| v.end_cep = "04538132".into());
        assert_eq!(
            form.estado("end_cep").assincrono,
            SlotAssincrono::Desatualizado
        );
        assert!(!form.pode_enviar());
    }

    #[test]
    fn corrigir_o_cep_solta_o_erro_antigo() {
        let mut form = form_cliente_valido();
        form.tocar("end_cep");

        form.definir("end_cep", |v| v.end_cep = "99999999".into());
        form.iniciar_validacao_remota("end_cep", "99999999");
        form.concluir_validacao_remota("end_cep", "99999999", Ok(false), "CEP não encontrado");
        assert!(!form.pode_enviar());

        // A correção derruba o veredito reprovado na hora...
        form.definir("end_cep", |v| v.end_cep = "01001000".into());
        assert!(form.erros_visiveis("end_cep").is_empty());

        // ...e a nova consulta libera o envio
        form.iniciar_validacao_remota("end_cep", "01001000");
        form.concluir_validacao_remota("end_cep", "01001000", Ok(true), "CEP não encontrado");
        assert!(form.pode_enviar());
    }

    #[tokio::test]
    async fn envio_invalido_nao_roda_a_acao() {
        let mut form = form_cliente();
        let mut chamadas = 0u32;

        let resultado = form
            .enviar(|_valores| {
                chamadas += 1;
                async { Ok::<(), AppError>(()) }
            })
            .await;

        assert!(matches!(resultado, Err(AppError::FormularioInvalido)));
        assert_eq!(chamadas, 0);
        // E o envio reprovado revela os erros de todos os campos
        assert!(form.tocado("nome"));
    }
}
