// src/services/venda_service.rs

use std::sync::Arc;

use crate::api::VendaApi;
use crate::http::HttpClient;
use crate::notify::Notificador;

use super::crud::{Controlador, Mensagens};

pub type ControladorVendas = Controlador<VendaApi>;

const MENSAGENS: Mensagens = Mensagens {
    criando: "Criando venda...",
    criado: "Venda criada com sucesso!",
    atualizando: "Atualizando venda...",
    atualizado: "Venda atualizada com sucesso!",
    removendo: "Cancelando venda...",
    removido: "Venda cancelada com sucesso!",
    nao_encontrado: "Venda não encontrada.",
};

pub fn vendas(http: HttpClient, notificador: Arc<dyn Notificador>) -> ControladorVendas {
    Controlador::novo(VendaApi::novo(http), notificador, MENSAGENS)
}
