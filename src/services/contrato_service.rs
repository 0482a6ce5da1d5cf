// src/services/contrato_service.rs

use std::sync::Arc;

use crate::api::TipoContratoApi;
use crate::http::HttpClient;
use crate::notify::Notificador;

use super::crud::{Controlador, Mensagens};

pub type ControladorContratos = Controlador<TipoContratoApi>;

// O "remover" aqui é desativação, mas a UI fala a língua do usuário.
const MENSAGENS: Mensagens = Mensagens {
    criando: "Criando tipo de contrato...",
    criado: "Tipo de contrato criado com sucesso!",
    atualizando: "Atualizando tipo de contrato...",
    atualizado: "Tipo de contrato atualizado com sucesso!",
    removendo: "Desativando tipo de contrato...",
    removido: "Tipo de contrato desativado com sucesso!",
    nao_encontrado: "Tipo de contrato não encontrado.",
};

pub fn contratos(http: HttpClient, notificador: Arc<dyn Notificador>) -> ControladorContratos {
    Controlador::novo(TipoContratoApi::novo(http), notificador, MENSAGENS)
}
