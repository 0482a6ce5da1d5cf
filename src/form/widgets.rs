// src/form/widgets.rs

// Widgets de campo. Cada widget é uma descrição estática (nome do campo,
// rótulo, lentes de leitura/escrita) que opera sobre um Formulario<T>
// recebido por referência. A camada de tela só chama ao_digitar/ao_sair
// e lê valor/erros; toda a regra de validação fica no formulário.

use validator::Validate;

use crate::form::combobox::{EstadoCombobox, FonteOpcoes, RequisicaoOpcoes};
use crate::form::formulario::Formulario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoEntrada {
    Texto,
    Data,
    Senha,
}

/// Capacidade comum a todo widget: identidade no formulário, rótulo e
/// erros visíveis. A leitura/escrita do valor fica em cada variante,
/// porque o tipo do valor difere (texto, número, booleano, seleção).
pub trait CampoWidget<T: Validate + Clone> {
    fn nome(&self) -> &'static str;
    fn rotulo(&self) -> &'static str;

    fn ao_sair(&self, form: &mut Formulario<T>) {
        form.tocar(self.nome());
    }

    fn erros(&self, form: &Formulario<T>) -> Vec<String> {
        form.erros_visiveis(self.nome())
    }
}

/// Entrada de texto de linha única.
pub struct CampoTexto<T> {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub tipo: TipoEntrada,
    pub ler: fn(&T) -> &str,
    pub escrever: fn(&mut T, String),
}

impl<T: Validate + Clone> CampoTexto<T> {
    pub fn valor<'f>(&self, form: &'f Formulario<T>) -> &'f str {
        (self.ler)(form.valores())
    }

    pub fn ao_digitar(&self, form: &mut Formulario<T>, texto: &str) {
        let texto = texto.to_string();
        form.definir(self.nome, |v| (self.escrever)(v, texto));
    }
}

impl<T: Validate + Clone> CampoWidget<T> for CampoTexto<T> {
    fn nome(&self) -> &'static str {
        self.nome
    }

    fn rotulo(&self) -> &'static str {
        self.rotulo
    }
}

/// Área de texto multilinha (observações, complemento).
pub struct AreaTexto<T> {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub ler: fn(&T) -> &str,
    pub escrever: fn(&mut T, String),
}

impl<T: Validate + Clone> AreaTexto<T> {
    pub fn valor<'f>(&self, form: &'f Formulario<T>) -> &'f str {
        (self.ler)(form.valores())
    }

    pub fn ao_digitar(&self, form: &mut Formulario<T>, texto: &str) {
        let texto = texto.to_string();
        form.definir(self.nome, |v| (self.escrever)(v, texto));
    }
}

impl<T: Validate + Clone> CampoWidget<T> for AreaTexto<T> {
    fn nome(&self) -> &'static str {
        self.nome
    }

    fn rotulo(&self) -> &'static str {
        self.rotulo
    }
}

/// Entrada numérica. Texto que não parseia vira NaN no modelo, e NaN
/// reprova em qualquer range(...) do schema — o erro aparece no campo
/// em vez de ser engolido pelo parse.
pub struct CampoNumerico<T> {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub ler: fn(&T) -> f64,
    pub escrever: fn(&mut T, f64),
}

impl<T: Validate + Clone> CampoNumerico<T> {
    pub fn valor(&self, form: &Formulario<T>) -> f64 {
        (self.ler)(form.valores())
    }

    pub fn ao_digitar(&self, form: &mut Formulario<T>, texto: &str) {
        let numero = texto.trim().parse::<f64>().unwrap_or(f64::NAN);
        form.definir(self.nome, |v| (self.escrever)(v, numero));
    }
}

impl<T: Validate + Clone> CampoWidget<T> for CampoNumerico<T> {
    fn nome(&self) -> &'static str {
        self.nome
    }

    fn rotulo(&self) -> &'static str {
        self.rotulo
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OpcaoSelecao {
    pub valor: &'static str,
    pub rotulo: &'static str,
}

/// Seleção de lista fixa (status de venda, perfil de usuário).
pub struct CampoSelecao<T> {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub opcoes: &'static [OpcaoSelecao],
    pub ler: fn(&T) -> String,
    pub escrever: fn(&mut T, &str),
}

impl<T: Validate + Clone> CampoSelecao<T> {
    pub fn valor(&self, form: &Formulario<T>) -> String {
        (self.ler)(form.valores())
    }

    pub fn ao_selecionar(&self, form: &mut Formulario<T>, valor: &str) {
        form.definir(self.nome, |v| (self.escrever)(v, valor));
        form.tocar(self.nome);
    }
}

impl<T: Validate + Clone> CampoWidget<T> for CampoSelecao<T> {
    fn nome(&self) -> &'static str {
        self.nome
    }

    fn rotulo(&self) -> &'static str {
        self.rotulo
    }
}

/// Chave liga/desliga (ex.: tipo de contrato ativo).
pub struct CampoAlternancia<T> {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub ler: fn(&T) -> bool,
    pub escrever: fn(&mut T, bool),
}

impl<T: Validate + Clone> CampoAlternancia<T> {
    pub fn valor(&self, form: &Formulario<T>) -> bool {
        (self.ler)(form.valores())
    }

    pub fn alternar(&self, form: &mut Formulario<T>) {
        let novo = !(self.ler)(form.valores());
        form.definir(self.nome, |v| (self.escrever)(v, novo));
        form.tocar(self.nome);
    }
}

impl<T: Validate + Clone> CampoWidget<T> for CampoAlternancia<T> {
    fn nome(&self) -> &'static str {
        self.nome
    }

    fn rotulo(&self) -> &'static str {
        self.rotulo
    }
}

/// Combobox pesquisável ligado a um campo do formulário. O widget é
/// dono do EstadoCombobox; a seleção é escrita de volta no modelo
/// (vazio quando a seleção é desfeita).
pub struct CampoCombobox<T> {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub estado: EstadoCombobox,
    pub escrever: fn(&mut T, String),
}

impl<T: Validate + Clone> CampoCombobox<T> {
    pub fn novo(
        nome: &'static str,
        rotulo: &'static str,
        tamanho_pagina: u32,
    ) -> Self {
        Self {
            nome,
            rotulo,
            estado: EstadoCombobox::novo(tamanho_pagina),
            escrever: |_, _| {},
        }
    }

    pub fn com_escrita(mut self, escrever: fn(&mut T, String)) -> Self {
        self.escrever = escrever;
        self
    }

    pub fn abrir(&mut self) -> Option<RequisicaoOpcoes> {
        self.estado.abrir()
    }

    pub fn digitar(&mut self, texto: &str) -> Option<RequisicaoOpcoes> {
        self.estado.digitar(texto)
    }

    pub fn rolar_ate_fim(&mut self) -> Option<RequisicaoOpcoes> {
        self.estado.rolar_ate_fim()
    }

    pub async fn carregar(
        &mut self,
        pedido: Option<RequisicaoOpcoes>,
        fonte: &dyn FonteOpcoes,
    ) {
        self.estado.executar(pedido, fonte).await;
    }

    pub fn selecionar(&mut self, form: &mut Formulario<T>, valor: &str) {
        let selecao = self.estado.selecionar(valor).unwrap_or_default();
        form.definir(self.nome, |v| (self.escrever)(v, selecao));
        form.tocar(self.nome);
    }
}

impl<T: Validate + Clone> CampoWidget<T> for CampoCombobox<T> {
    fn nome(&self) -> &'static str {
        self.nome
    }

    fn rotulo(&self) -> &'static str {
        self.rotulo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::validation::regras::numero_minimo_um;

    #[derive(Clone, Validate)]
    struct Piloto {
        #[validate(length(min = 1, message = "Nome é obrigatório"))]
        nome: String,
        #[validate(custom(function = "numero_minimo_um", message = "Prazo deve ser no mínimo 1"))]
        prazo: f64,
    }

    fn form() -> Formulario<Piloto> {
        Formulario::novo(
            Piloto {
                nome: String::new(),
                prazo: 12.0,
            },
            &["nome", "prazo"],
        )
    }

    const NOME: CampoTexto<Piloto> = CampoTexto {
        nome: "nome",
        rotulo: "Nome",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.nome,
        escrever: |v, s| v.nome = s,
    };

    const PRAZO: CampoNumerico<Piloto> = CampoNumerico {
        nome: "prazo",
        rotulo: "Prazo (meses)",
        ler: |v| v.prazo,
        escrever: |v, n| v.prazo = n,
    };

    #[test]
    fn erro_so_aparece_depois_do_blur() {
        let mut f = form();
        assert!(NOME.erros(&f).is_empty());

        NOME.ao_sair(&mut f);
        assert_eq!(NOME.erros(&f), vec!["Nome é obrigatório".to_string()]);

        NOME.ao_digitar(&mut f, "Maria");
        assert!(NOME.erros(&f).is_empty());
        assert_eq!(NOME.valor(&f), "Maria");
    }

    #[test]
    fn texto_nao_numerico_vira_nan_e_reprova_no_schema() {
        let mut f = form();
        PRAZO.ao_digitar(&mut f, "abc");
        assert!(PRAZO.valor(&f).is_nan());

        PRAZO.ao_sair(&mut f);
        assert_eq!(
            PRAZO.erros(&f),
            vec!["Prazo deve ser no mínimo 1".to_string()]
        );

        PRAZO.ao_digitar(&mut f, "24");
        assert!(PRAZO.erros(&f).is_empty());
    }
}
