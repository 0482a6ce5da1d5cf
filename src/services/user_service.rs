// src/services/user_service.rs

use std::sync::Arc;

use crate::api::UserApi;
use crate::http::HttpClient;
use crate::notify::Notificador;

use super::crud::{Controlador, Mensagens};

pub type ControladorUsers = Controlador<UserApi>;

const MENSAGENS: Mensagens = Mensagens {
    criando: "Criando usuário...",
    criado: "Usuário criado com sucesso!",
    atualizando: "Atualizando usuário...",
    atualizado: "Usuário atualizado com sucesso!",
    removendo: "Removendo usuário...",
    removido: "Usuário removido com sucesso!",
    nao_encontrado: "Usuário não encontrado.",
};

pub fn users(http: HttpClient, notificador: Arc<dyn Notificador>) -> ControladorUsers {
    Controlador::novo(UserApi::novo(http), notificador, MENSAGENS)
}
