// src/form/combobox.rs

// Combobox pesquisável com paginação remota. O estado é uma máquina
// síncrona: abrir/digitar/rolar produzem uma RequisicaoOpcoes, e a
// resposta volta por `aplicar`. Cada mudança de busca incrementa a
// geração; resposta de geração anterior é descartada, então uma busca
// lenta nunca sobrescreve o resultado de uma mais nova (ordem lógica,
// não ordem de chegada).

use async_trait::async_trait;

use crate::common::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcaoCombobox {
    pub valor: String,
    pub rotulo: String,
}

#[derive(Debug, Clone)]
pub struct PaginaOpcoes {
    pub data: Vec<OpcaoCombobox>,
    pub has_more: bool,
    pub total: Option<u64>,
}

/// Fonte remota das opções ({search, page, page_size} -> página).
#[async_trait]
pub trait FonteOpcoes: Send + Sync {
    async fn buscar(
        &self,
        busca: &str,
        pagina: u32,
        tamanho_pagina: u32,
    ) -> Result<PaginaOpcoes, AppError>;
}

/// Pedido de carga emitido pela máquina; devolver o resultado em
/// `aplicar` com o mesmo pedido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequisicaoOpcoes {
    geracao: u64,
    pub busca: String,
    pub pagina: u32,
    pub tamanho_pagina: u32,
    /// true substitui a lista; false anexa (paginação).
    reset: bool,
}

#[derive(Debug)]
pub struct EstadoCombobox {
    aberto: bool,
    busca: String,
    opcoes: Vec<OpcaoCombobox>,
    carregando: bool,
    pagina: u32,
    tem_mais: bool,
    geracao: u64,
    selecionado: Option<String>,
    tamanho_pagina: u32,
}

impl EstadoCombobox {
    pub fn novo(tamanho_pagina: u32) -> Self {
        Self {
            aberto: false,
            busca: String::new(),
            opcoes: Vec::new(),
            carregando: false,
            pagina: 1,
            tem_mais: true,
            geracao: 0,
            selecionado: None,
            tamanho_pagina,
        }
    }

    pub fn opcoes(&self) -> &[OpcaoCombobox] {
        &self.opcoes
    }

    pub fn carregando(&self) -> bool {
        self.carregando
    }

    pub fn tem_mais(&self) -> bool {
        self.tem_mais
    }

    pub fn selecionado(&self) -> Option<&str> {
        self.selecionado.as_deref()
    }

    pub fn rotulo_selecionado(&self) -> Option<&str> {
        let valor = self.selecionado.as_deref()?;
        self.opcoes
            .iter()
            .find(|o| o.valor == valor)
            .map(|o| o.rotulo.as_str())
    }

    fn requisicao(&mut self, pagina: u32, reset: bool) -> RequisicaoOpcoes {
        self.carregando = true;
        self.pagina = pagina;
        RequisicaoOpcoes {
            geracao: self.geracao,
            busca: self.busca.clone(),
            pagina,
            tamanho_pagina: self.tamanho_pagina,
            reset,
        }
    }

    /// Abrir o controle dispara a página 1 com a busca corrente
    /// (vazia na primeira abertura).
    pub fn abrir(&mut self) -> Option<RequisicaoOpcoes> {
        if self.aberto {
            return None;
        }
        self.aberto = true;
        self.geracao += 1;
        Some(self.requisicao(1, true))
    }

    pub fn fechar(&mut self) {
        self.aberto = false;
    }

    /// Digitar reinicia na página 1 com o novo texto e invalida qualquer
    /// resposta ainda em voo da busca anterior.
    pub fn digitar(&mut self, texto: &str) -> Option<RequisicaoOpcoes> {
        self.busca = texto.to_string();
        self.opcoes.clear();
        self.tem_mais = true;
        self.geracao += 1;
        Some(self.requisicao(1, true))
    }

    /// Rolagem perto do fim: busca a próxima página, mas só com o controle
    /// aberto (a página 1 de `abrir` vem sempre primeiro), nunca com uma
    /// carga em voo nem depois da última página — é isso que impede a
    /// página 1 duplicada quando o usuário rola antes da resposta chegar.
    pub fn rolar_ate_fim(&mut self) -> Option<RequisicaoOpcoes> {
        if !self.aberto || !self.tem_mais || self.carregando {
            return None;
        }
        Some(self.requisicao(self.pagina + 1, false))
    }

    /// Aplica a resposta da fonte. Resposta de geração superada é
    /// descartada sem tocar na lista; erro só é logado (lista intacta).
    pub fn aplicar(&mut self, pedido: &RequisicaoOpcoes, resultado: Result<PaginaOpcoes, AppError>) {
        if pedido.geracao != self.geracao {
            tracing::debug!("Página de busca superada ('{}'), ignorada", pedido.busca);
            return;
        }
        self.carregando = false;

        match resultado {
            Ok(pagina) => {
                if pedido.reset {
                    self.opcoes = pagina.data;
                } else {
                    self.opcoes.extend(pagina.data);
                }
                self.tem_mais = pagina.has_more;
            }
            Err(e) => {
                tracing::error!("Erro ao carregar opções: {}", e);
            }
        }
    }

    /// Seleciona um valor; selecionar o já selecionado limpa (toggle).
    /// Devolve a seleção resultante para o widget propagar ao formulário.
    pub fn selecionar(&mut self, valor: &str) -> Option<String> {
        if self.selecionado.as_deref() == Some(valor) {
            self.selecionado = None;
        } else {
            self.selecionado = Some(valor.to_string());
        }
        self.aberto = false;
        self.selecionado.clone()
    }

    pub fn definir_selecionado(&mut self, valor: Option<String>) {
        self.selecionado = valor;
    }

    /// Conveniência: emite o pedido e resolve contra a fonte de uma vez.
    pub async fn executar(
        &mut self,
        pedido: Option<RequisicaoOpcoes>,
        fonte: &dyn FonteOpcoes,
    ) {
        if let Some(pedido) = pedido {
            let resultado = fonte
                .buscar(&pedido.busca, pedido.pagina, pedido.tamanho_pagina)
                .await;
            self.aplicar(&pedido, resultado);
        }
    }
}
