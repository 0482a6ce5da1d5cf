// src/services/crud.rs

// Controlador genérico de tela CRUD. Mantém a lista sincronizada com o
// servidor e orquestra as mutações: toast em três tempos, diálogo que só
// fecha em caso de sucesso, recarga da lista depois de cada mutação e
// confirmação explícita antes de remover.

use std::sync::Arc;

use crate::api::RecursoCrud;
use crate::common::error::AppError;
use crate::notify::Notificador;

/// Ciclo de vida da lista. Falha é exclusiva da carga da lista; mutação
/// que falha preserva o Pronto corrente e reporta só pelo toast.
#[derive(Debug, Clone)]
pub enum EstadoLista<T> {
    Idle,
    Carregando,
    Pronto(Vec<T>),
    Falha(String),
}

impl<T> EstadoLista<T> {
    pub fn itens(&self) -> &[T] {
        match self {
            EstadoLista::Pronto(itens) => itens,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoMutacao {
    Criacao,
    Atualizacao,
    Remocao,
}

/// Texto das notificações, por entidade (gênero e nome corretos:
/// "Venda criada...", "Usuário criado...").
#[derive(Debug, Clone, Copy)]
pub struct Mensagens {
    pub criando: &'static str,
    pub criado: &'static str,
    pub atualizando: &'static str,
    pub atualizado: &'static str,
    pub removendo: &'static str,
    pub removido: &'static str,
    pub nao_encontrado: &'static str,
}

pub struct Controlador<R: RecursoCrud> {
    recurso: R,
    notificador: Arc<dyn Notificador>,
    mensagens: Mensagens,
    estado: EstadoLista<R::Entidade>,
    mutacao: Option<TipoMutacao>,
    dialogo_aberto: bool,
    remocao_pendente: Option<i64>,
}

impl<R: RecursoCrud> Controlador<R> {
    pub fn novo(recurso: R, notificador: Arc<dyn Notificador>, mensagens: Mensagens) -> Self {
        Self {
            recurso,
            notificador,
            mensagens,
            estado: EstadoLista::Idle,
            mutacao: None,
            dialogo_aberto: false,
            remocao_pendente: None,
        }
    }

    pub fn estado(&self) -> &EstadoLista<R::Entidade> {
        &self.estado
    }

    pub fn itens(&self) -> &[R::Entidade] {
        self.estado.itens()
    }

    pub fn mutacao_em_andamento(&self) -> Option<TipoMutacao> {
        self.mutacao
    }

    // =====================================================================
    //  LISTA
    // =====================================================================

    pub async fn carregar(&mut self) {
        self.estado = EstadoLista::Carregando;
        match self.recurso.listar().await {
            Ok(itens) => {
                self.estado = EstadoLista::Pronto(itens);
            }
            Err(e) => {
                tracing::error!("Erro ao carregar lista: {}", e);
                self.estado = EstadoLista::Falha(e.mensagem_usuario());
            }
        }
    }

    /// Recarrega do servidor. A lista local nunca é remendada à mão:
    /// depois de qualquer mutação o estado vem sempre de uma nova leitura.
    pub async fn recarregar(&mut self) {
        self.carregar().await;
    }

    // =====================================================================
    //  DIÁLOGO
    // =====================================================================

    pub fn abrir_dialogo(&mut self) {
        self.dialogo_aberto = true;
    }

    pub fn fechar_dialogo(&mut self) {
        self.dialogo_aberto = false;
    }

    pub fn dialogo_aberto(&self) -> bool {
        self.dialogo_aberto
    }

    // =====================================================================
    //  MUTAÇÕES
    // =====================================================================

    pub async fn criar(&mut self, payload: &R::Criar) -> Result<(), AppError> {
        if !self.iniciar_mutacao(TipoMutacao::Criacao) {
            return Ok(());
        }
        self.notificador.pendente(self.mensagens.criando);

        let resultado = self.recurso.criar(payload).await;
        self.mutacao = None;

        match resultado {
            Ok(_) => {
                self.notificador.sucesso(self.mensagens.criado);
                self.dialogo_aberto = false;
                self.recarregar().await;
                Ok(())
            }
            Err(e) => {
                // Diálogo permanece aberto com o que o usuário digitou
                self.notificador.falha(&self.mensagem_falha(&e));
                Err(e)
            }
        }
    }

    pub async fn atualizar(&mut self, id: i64, payload: &R::Atualizar) -> Result<(), AppError> {
        if !self.iniciar_mutacao(TipoMutacao::Atualizacao) {
            return Ok(());
        }
        self.notificador.pendente(self.mensagens.atualizando);

        let resultado = self.recurso.atualizar(id, payload).await;
        self.mutacao = None;

        match resultado {
            Ok(_) => {
                self.notificador.sucesso(self.mensagens.atualizado);
                self.dialogo_aberto = false;
                self.recarregar().await;
                Ok(())
            }
            Err(e) => {
                self.notificador.falha(&self.mensagem_falha(&e));
                Err(e)
            }
        }
    }

    /// Primeiro passo da remoção: registra o alvo e espera a confirmação.
    pub fn solicitar_remocao(&mut self, id: i64) {
        self.remocao_pendente = Some(id);
    }

    pub fn remocao_pendente(&self) -> Option<i64> {
        self.remocao_pendente
    }

    pub fn cancelar_remocao(&mut self) {
        self.remocao_pendente = None;
    }

    /// Segundo passo: remove o alvo confirmado. Sem solicitação prévia,
    /// não faz nada.
    pub async fn confirmar_remocao(&mut self) -> Result<(), AppError> {
        let Some(id) = self.remocao_pendente.take() else {
            return Ok(());
        };
        if !self.iniciar_mutacao(TipoMutacao::Remocao) {
            return Ok(());
        }
        self.notificador.pendente(self.mensagens.removendo);

        let resultado = self.recurso.remover(id).await;
        self.mutacao = None;

        match resultado {
            Ok(()) => {
                self.notificador.sucesso(self.mensagens.removido);
                self.recarregar().await;
                Ok(())
            }
            Err(e @ AppError::NaoEncontrado) => {
                // Alguém já removeu: avisa e realinha a lista mesmo assim
                self.notificador.falha(self.mensagens.nao_encontrado);
                self.recarregar().await;
                Err(e)
            }
            Err(e) => {
                self.notificador.falha(&self.mensagem_falha(&e));
                Err(e)
            }
        }
    }

    /// Só uma mutação em voo por vez; clique repetido é ignorado.
    fn iniciar_mutacao(&mut self, tipo: TipoMutacao) -> bool {
        if let Some(em_voo) = self.mutacao {
            tracing::warn!("Mutação {:?} ignorada: {:?} em andamento", tipo, em_voo);
            return false;
        }
        self.mutacao = Some(tipo);
        true
    }

    fn mensagem_falha(&self, erro: &AppError) -> String {
        match erro {
            AppError::NaoEncontrado => self.mensagens.nao_encontrado.to_string(),
            _ => erro.mensagem_usuario(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    #[derive(Clone)]
    struct Item {
        id: i64,
    }

    struct RecursoFake {
        chamadas_criar: AtomicUsize,
        chamadas_listar: AtomicUsize,
        falhar_criar: Option<AppError>,
    }

    impl RecursoFake {
        fn novo() -> Self {
            Self {
                chamadas_criar: AtomicUsize::new(0),
                chamadas_listar: AtomicUsize::new(0),
                falhar_criar: None,
            }
        }
    }

    #[async_trait]
    impl RecursoCrud for RecursoFake {
        type Entidade = Item;
        type Criar = ();
        type Atualizar = ();

        async fn listar(&self) -> Result<Vec<Item>, AppError> {
            self.chamadas_listar.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Item { id: 1 }])
        }

        async fn criar(&self, _payload: &()) -> Result<Item, AppError> {
            self.chamadas_criar.fetch_add(1, Ordering::SeqCst);
            match &self.falhar_criar {
                Some(AppError::Validacao { mensagem }) => Err(AppError::Validacao {
                    mensagem: mensagem.clone(),
                }),
                Some(_) => Err(AppError::Api {
                    status: 500,
                    mensagem: None,
                }),
                None => Ok(Item { id: 2 }),
            }
        }

        async fn atualizar(&self, _id: i64, _payload: &()) -> Result<Item, AppError> {
            Ok(Item { id: 1 })
        }

        async fn remover(&self, _id: i64) -> Result<(), AppError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct NotificadorColetor {
        mensagens: Mutex<Vec<String>>,
    }

    impl Notificador for NotificadorColetor {
        fn pendente(&self, m: &str) {
            self.mensagens.lock().unwrap().push(format!("pendente: {m}"));
        }
        fn sucesso(&self, m: &str) {
            self.mensagens.lock().unwrap().push(format!("sucesso: {m}"));
        }
        fn falha(&self, m: &str) {
            self.mensagens.lock().unwrap().push(format!("falha: {m}"));
        }
    }

    const MSGS: Mensagens = Mensagens {
        criando: "Criando item...",
        criado: "Item criado com sucesso!",
        atualizando: "Atualizando item...",
        atualizado: "Item atualizado com sucesso!",
        removendo: "Removendo item...",
        removido: "Item removido com sucesso!",
        nao_encontrado: "Item não encontrado.",
    };

    fn controlador(recurso: RecursoFake) -> (Controlador<RecursoFake>, Arc<NotificadorColetor>) {
        let notificador = Arc::new(NotificadorColetor::default());
        let ctrl = Controlador::novo(recurso, notificador.clone(), MSGS);
        (ctrl, notificador)
    }

    #[tokio::test]
    async fn criar_com_sucesso_fecha_dialogo_e_recarrega() {
        let (mut ctrl, notif) = controlador(RecursoFake::novo());
        ctrl.carregar().await;
        ctrl.abrir_dialogo();

        ctrl.criar(&()).await.unwrap();

        assert!(!ctrl.dialogo_aberto());
        // Uma leitura inicial + uma recarga pós-mutação
        assert_eq!(ctrl.recurso.chamadas_listar.load(Ordering::SeqCst), 2);
        let mensagens = notif.mensagens.lock().unwrap();
        assert_eq!(mensagens.last().unwrap(), "sucesso: Item criado com sucesso!");
    }

    #[tokio::test]
    async fn falha_de_validacao_mantem_dialogo_e_mostra_mensagem_do_servidor() {
        let mut recurso = RecursoFake::novo();
        recurso.falhar_criar = Some(AppError::Validacao {
            mensagem: Some("CPF já cadastrado".to_string()),
        });
        let (mut ctrl, notif) = controlador(recurso);
        ctrl.carregar().await;
        ctrl.abrir_dialogo();

        assert!(ctrl.criar(&()).await.is_err());

        assert!(ctrl.dialogo_aberto());
        // Lista intacta, sem recarga
        assert_eq!(ctrl.recurso.chamadas_listar.load(Ordering::SeqCst), 1);
        assert_eq!(ctrl.itens().len(), 1);
        let mensagens = notif.mensagens.lock().unwrap();
        assert_eq!(mensagens.last().unwrap(), "falha: CPF já cadastrado");
    }

    #[tokio::test]
    async fn segunda_mutacao_durante_a_primeira_e_ignorada() {
        let (mut ctrl, _notif) = controlador(RecursoFake::novo());

        // Simula uma mutação em voo
        ctrl.mutacao = Some(TipoMutacao::Atualizacao);
        ctrl.criar(&()).await.unwrap();

        assert_eq!(ctrl.recurso.chamadas_criar.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remocao_exige_confirmacao() {
        let (mut ctrl, notif) = controlador(RecursoFake::novo());
        ctrl.carregar().await;

        // Sem solicitação prévia, confirmar não faz nada
        ctrl.confirmar_remocao().await.unwrap();
        assert_eq!(ctrl.recurso.chamadas_listar.load(Ordering::SeqCst), 1);

        ctrl.solicitar_remocao(1);
        assert_eq!(ctrl.remocao_pendente(), Some(1));
        ctrl.cancelar_remocao();
        assert_eq!(ctrl.remocao_pendente(), None);

        ctrl.solicitar_remocao(1);
        ctrl.confirmar_remocao().await.unwrap();
        assert_eq!(ctrl.recurso.chamadas_listar.load(Ordering::SeqCst), 2);
        let mensagens = notif.mensagens.lock().unwrap();
        assert_eq!(mensagens.last().unwrap(), "sucesso: Item removido com sucesso!");
    }
}
