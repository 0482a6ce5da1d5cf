// src/services/cliente_service.rs

use std::sync::Arc;

use crate::api::ClienteApi;
use crate::http::HttpClient;
use crate::notify::Notificador;

use super::crud::{Controlador, Mensagens};

pub type ControladorClientes = Controlador<ClienteApi>;

const MENSAGENS: Mensagens = Mensagens {
    criando: "Criando cliente...",
    criado: "Cliente criado com sucesso!",
    atualizando: "Atualizando cliente...",
    atualizado: "Cliente atualizado com sucesso!",
    removendo: "Removendo cliente...",
    removido: "Cliente removido com sucesso!",
    nao_encontrado: "Cliente não encontrado.",
};

pub fn clientes(http: HttpClient, notificador: Arc<dyn Notificador>) -> ControladorClientes {
    Controlador::novo(ClienteApi::novo(http), notificador, MENSAGENS)
}
