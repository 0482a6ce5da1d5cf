// src/form.rs

// Motor de formulários. Sem contexto implícito de form/field: o
// `Formulario` é o controlador, e cada widget carrega o nome do campo
// que controla e as lentes de leitura/escrita sobre o modelo de valores.
// Renderizar um campo fora do formulário certo deixa de ser um erro de
// runtime possível; usar um nome não registrado continua sendo erro de
// programação e derruba rápido (panic).

pub mod campo;
pub mod combobox;
pub mod formulario;
pub mod instancias;
pub mod widgets;

pub use campo::{CampoEstado, SlotAssincrono};
pub use combobox::{EstadoCombobox, FonteOpcoes, OpcaoCombobox, PaginaOpcoes, RequisicaoOpcoes};
pub use formulario::Formulario;
pub use instancias::{FormularioCliente, FormularioContrato, FormularioUser, FormularioVenda};
