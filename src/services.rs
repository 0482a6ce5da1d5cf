pub mod auth_service;
pub mod cliente_service;
pub mod contrato_service;
pub mod crud;
pub mod sessao;
pub mod user_service;
pub mod venda_service;

pub use auth_service::AuthService;
pub use cliente_service::{clientes, ControladorClientes};
pub use contrato_service::{contratos, ControladorContratos};
pub use crud::{Controlador, EstadoLista, Mensagens, TipoMutacao};
pub use sessao::{FileSessionStore, ServicoSessao, SessionStore};
pub use user_service::{users, ControladorUsers};
pub use venda_service::{vendas, ControladorVendas};
