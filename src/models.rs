pub mod auth;
pub mod cliente;
pub mod contrato;
pub mod user;
pub mod venda;

pub use auth::{Sessao, SessionUser};
pub use cliente::{Cliente, ClientePayload, Documento, TipoDocumento};
pub use contrato::{TipoContrato, TipoContratoPayload};
pub use user::{AtualizaUser, NovoUser, Perfil, User};
pub use venda::{NovaVenda, StatusVenda, Venda};
