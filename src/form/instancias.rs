// src/form/instancias.rs

// Formulários concretos, um por entidade. Cada um amarra o modelo de
// valor do schema aos widgets (descritores const; os comboboxes são
// estado próprio do formulário) e expõe construtores de criação e de
// edição pré-populada.

use crate::models::cliente::Cliente;
use crate::models::contrato::TipoContrato;
use crate::models::user::{Perfil, User};
use crate::models::venda::{StatusVenda, Venda};
use crate::validation::regras::CepLookup;
use crate::validation::schemas::{ClienteForm, ContratoForm, UserForm, VendaForm};

use super::formulario::Formulario;
use super::widgets::{
    AreaTexto, CampoAlternancia, CampoCombobox, CampoNumerico, CampoSelecao, CampoTexto,
    OpcaoSelecao, TipoEntrada,
};

const TAMANHO_PAGINA: u32 = 20;

// =========================================================================
//  CLIENTE
// =========================================================================

pub struct FormularioCliente {
    pub form: Formulario<ClienteForm>,
}

impl FormularioCliente {
    const CAMPOS: &'static [&'static str] = &[
        "nome",
        "cpf",
        "data_nascimento",
        "email",
        "telefone",
        "end_logradouro",
        "end_numero",
        "end_complemento",
        "end_bairro",
        "end_cidade",
        "end_uf",
        "end_cep",
    ];

    pub const NOME: CampoTexto<ClienteForm> = CampoTexto {
        nome: "nome",
        rotulo: "Nome completo",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.nome,
        escrever: |v, s| v.nome = s,
    };

    pub const CPF: CampoTexto<ClienteForm> = CampoTexto {
        nome: "cpf",
        rotulo: "CPF",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.cpf,
        escrever: |v, s| v.cpf = s,
    };

    pub const DATA_NASCIMENTO: CampoTexto<ClienteForm> = CampoTexto {
        nome: "data_nascimento",
        rotulo: "Data de nascimento",
        tipo: TipoEntrada::Data,
        ler: |v| &v.data_nascimento,
        escrever: |v, s| v.data_nascimento = s,
    };

    pub const EMAIL: CampoTexto<ClienteForm> = CampoTexto {
        nome: "email",
        rotulo: "Email",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.email,
        escrever: |v, s| v.email = s,
    };

    pub const TELEFONE: CampoTexto<ClienteForm> = CampoTexto {
        nome: "telefone",
        rotulo: "Telefone",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.telefone,
        escrever: |v, s| v.telefone = s,
    };

    pub const LOGRADOURO: CampoTexto<ClienteForm> = CampoTexto {
        nome: "end_logradouro",
        rotulo: "Logradouro",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.end_logradouro,
        escrever: |v, s| v.end_logradouro = s,
    };

    pub const NUMERO: CampoTexto<ClienteForm> = CampoTexto {
        nome: "end_numero",
        rotulo: "Número",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.end_numero,
        escrever: |v, s| v.end_numero = s,
    };

    pub const COMPLEMENTO: AreaTexto<ClienteForm> = AreaTexto {
        nome: "end_complemento",
        rotulo: "Complemento",
        ler: |v| &v.end_complemento,
        escrever: |v, s| v.end_complemento = s,
    };

    pub const BAIRRO: CampoTexto<ClienteForm> = CampoTexto {
        nome: "end_bairro",
        rotulo: "Bairro",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.end_bairro,
        escrever: |v, s| v.end_bairro = s,
    };

    pub const CIDADE: CampoTexto<ClienteForm> = CampoTexto {
        nome: "end_cidade",
        rotulo: "Cidade",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.end_cidade,
        escrever: |v, s| v.end_cidade = s,
    };

    pub const UF: CampoTexto<ClienteForm> = CampoTexto {
        nome: "end_uf",
        rotulo: "UF",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.end_uf,
        escrever: |v, s| v.end_uf = s,
    };

    pub const CEP: CampoTexto<ClienteForm> = CampoTexto {
        nome: "end_cep",
        rotulo: "CEP",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.end_cep,
        escrever: |v, s| v.end_cep = s,
    };

    pub fn novo() -> Self {
        Self {
            form: Formulario::novo(ClienteForm::default(), Self::CAMPOS),
        }
    }

    pub fn editar(cliente: &Cliente) -> Self {
        Self {
            form: Formulario::novo(ClienteForm::de_cliente(cliente), Self::CAMPOS),
        }
    }

    /// Dispara a conferência do CEP digitado no serviço externo
    /// (chamar no blur do campo de CEP).
    pub async fn validar_cep(&mut self, lookup: &dyn CepLookup) {
        let cep = self.form.valores().end_cep.clone();
        self.form.validar_cep_remoto("end_cep", cep, lookup).await;
    }
}

// =========================================================================
//  TIPO DE CONTRATO
// =========================================================================

pub struct FormularioContrato {
    pub form: Formulario<ContratoForm>,
}

impl FormularioContrato {
    const CAMPOS: &'static [&'static str] =
        &["nome", "prazo_meses", "tempo_nova_oportunidade_dias", "ativo"];

    pub const NOME: CampoTexto<ContratoForm> = CampoTexto {
        nome: "nome",
        rotulo: "Nome do contrato",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.nome,
        escrever: |v, s| v.nome = s,
    };

    pub const PRAZO: CampoNumerico<ContratoForm> = CampoNumerico {
        nome: "prazo_meses",
        rotulo: "Prazo (meses)",
        ler: |v| v.prazo_meses,
        escrever: |v, n| v.prazo_meses = n,
    };

    pub const CARENCIA: CampoNumerico<ContratoForm> = CampoNumerico {
        nome: "tempo_nova_oportunidade_dias",
        rotulo: "Nova oportunidade (dias)",
        ler: |v| v.tempo_nova_oportunidade_dias,
        escrever: |v, n| v.tempo_nova_oportunidade_dias = n,
    };

    pub const ATIVO: CampoAlternancia<ContratoForm> = CampoAlternancia {
        nome: "ativo",
        rotulo: "Ativo",
        ler: |v| v.ativo,
        escrever: |v, b| v.ativo = b,
    };

    pub fn novo() -> Self {
        Self {
            form: Formulario::novo(ContratoForm::default(), Self::CAMPOS),
        }
    }

    pub fn editar(tipo: &TipoContrato) -> Self {
        Self {
            form: Formulario::novo(ContratoForm::de_tipo(tipo), Self::CAMPOS),
        }
    }
}

// =========================================================================
//  VENDA
// =========================================================================

pub struct FormularioVenda {
    pub form: Formulario<VendaForm>,
    pub cliente: CampoCombobox<VendaForm>,
    pub tipo_contrato: CampoCombobox<VendaForm>,
}

impl FormularioVenda {
    const CAMPOS: &'static [&'static str] =
        &["cliente_id", "tipo_contrato_id", "valor", "data", "status"];

    pub const VALOR: CampoNumerico<VendaForm> = CampoNumerico {
        nome: "valor",
        rotulo: "Valor (R$)",
        ler: |v| v.valor,
        escrever: |v, n| v.valor = n,
    };

    pub const DATA: CampoTexto<VendaForm> = CampoTexto {
        nome: "data",
        rotulo: "Data da venda",
        tipo: TipoEntrada::Data,
        ler: |v| &v.data,
        escrever: |v, s| v.data = s,
    };

    pub const STATUS: CampoSelecao<VendaForm> = CampoSelecao {
        nome: "status",
        rotulo: "Status",
        opcoes: &[
            OpcaoSelecao { valor: "CRIADA", rotulo: "Criada" },
            OpcaoSelecao { valor: "ATIVA", rotulo: "Ativa" },
            OpcaoSelecao { valor: "QUITADA", rotulo: "Quitada" },
            OpcaoSelecao { valor: "CANCELADA", rotulo: "Cancelada" },
        ],
        ler: |v| match v.status {
            StatusVenda::Criada => "CRIADA".to_string(),
            StatusVenda::Ativa => "ATIVA".to_string(),
            StatusVenda::Quitada => "QUITADA".to_string(),
            StatusVenda::Cancelada => "CANCELADA".to_string(),
        },
        escrever: |v, s| {
            v.status = match s {
                "ATIVA" => StatusVenda::Ativa,
                "QUITADA" => StatusVenda::Quitada,
                "CANCELADA" => StatusVenda::Cancelada,
                _ => StatusVenda::Criada,
            };
        },
    };

    pub fn novo() -> Self {
        Self {
            form: Formulario::novo(VendaForm::default(), Self::CAMPOS),
            cliente: Self::combobox_cliente(None),
            tipo_contrato: Self::combobox_tipo(None),
        }
    }

    pub fn editar(venda: &Venda) -> Self {
        Self {
            form: Formulario::novo(VendaForm::de_venda(venda), Self::CAMPOS),
            cliente: Self::combobox_cliente(Some(venda.cliente_id.to_string())),
            tipo_contrato: Self::combobox_tipo(Some(venda.tipo_contrato_id.to_string())),
        }
    }

    fn combobox_cliente(selecionado: Option<String>) -> CampoCombobox<VendaForm> {
        let mut campo = CampoCombobox::novo("cliente_id", "Cliente", TAMANHO_PAGINA)
            .com_escrita(|v: &mut VendaForm, s| v.cliente_id = s);
        campo.estado.definir_selecionado(selecionado);
        campo
    }

    fn combobox_tipo(selecionado: Option<String>) -> CampoCombobox<VendaForm> {
        let mut campo = CampoCombobox::novo("tipo_contrato_id", "Tipo de contrato", TAMANHO_PAGINA)
            .com_escrita(|v: &mut VendaForm, s| v.tipo_contrato_id = s);
        campo.estado.definir_selecionado(selecionado);
        campo
    }
}

// =========================================================================
//  USUÁRIO
// =========================================================================

pub struct FormularioUser {
    pub form: Formulario<UserForm>,
}

impl FormularioUser {
    const CAMPOS: &'static [&'static str] = &["nome", "email", "password", "perfil", "active"];

    pub const NOME: CampoTexto<UserForm> = CampoTexto {
        nome: "nome",
        rotulo: "Nome",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.nome,
        escrever: |v, s| v.nome = s,
    };

    pub const EMAIL: CampoTexto<UserForm> = CampoTexto {
        nome: "email",
        rotulo: "Email",
        tipo: TipoEntrada::Texto,
        ler: |v| &v.email,
        escrever: |v, s| v.email = s,
    };

    // Em branco na edição mantém a senha atual.
    pub const SENHA: CampoTexto<UserForm> = CampoTexto {
        nome: "password",
        rotulo: "Senha",
        tipo: TipoEntrada::Senha,
        ler: |v| &v.password,
        escrever: |v, s| v.password = s,
    };

    pub const PERFIL: CampoSelecao<UserForm> = CampoSelecao {
        nome: "perfil",
        rotulo: "Perfil",
        opcoes: &[
            OpcaoSelecao { valor: "ADMIN", rotulo: "Administrador" },
            OpcaoSelecao { valor: "VENDEDOR", rotulo: "Vendedor" },
        ],
        ler: |v| match v.perfil {
            Perfil::Admin => "ADMIN".to_string(),
            Perfil::Vendedor => "VENDEDOR".to_string(),
        },
        escrever: |v, s| {
            v.perfil = if s == "ADMIN" {
                Perfil::Admin
            } else {
                Perfil::Vendedor
            };
        },
    };

    pub const ATIVO: CampoAlternancia<UserForm> = CampoAlternancia {
        nome: "active",
        rotulo: "Ativo",
        ler: |v| v.active,
        escrever: |v, b| v.active = b,
    };

    pub fn novo() -> Self {
        Self {
            form: Formulario::novo(UserForm::default(), Self::CAMPOS),
        }
    }

    pub fn editar(user: &User) -> Self {
        Self {
            form: Formulario::novo(UserForm::de_user(user), Self::CAMPOS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulario_de_venda_comeca_invalido() {
        let fv = FormularioVenda::novo();
        assert!(!fv.form.valido());
        // Nada visível antes de qualquer interação
        assert!(fv.form.erros_visiveis("cliente_id").is_empty());
    }

    #[test]
    fn selecao_no_combobox_escreve_no_modelo() {
        let mut fv = FormularioVenda::novo();
        // Simula opção já carregada e clicada
        fv.cliente.selecionar(&mut fv.form, "42");
        assert_eq!(fv.form.valores().cliente_id, "42");

        // Toggle: desfazer a seleção esvazia o campo e o erro volta
        fv.cliente.selecionar(&mut fv.form, "42");
        assert_eq!(fv.form.valores().cliente_id, "");
        assert!(!fv.form.erros_visiveis("cliente_id").is_empty());
    }

    #[test]
    fn edicao_pre_popula_e_ja_e_valida() {
        use chrono::NaiveDate;
        use rust_decimal::Decimal;

        let venda = crate::models::venda::Venda {
            id: 1,
            cliente_id: 7,
            tipo_contrato_id: 3,
            vendedor_id: 2,
            valor: Decimal::new(1_200_055, 2),
            data: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status: StatusVenda::Ativa,
            cliente: None,
            vendedor: None,
            tipo_contrato: None,
            created_at: None,
            updated_at: None,
            documentos: Vec::new(),
        };

        let fv = FormularioVenda::editar(&venda);
        assert!(fv.form.valido());
        assert_eq!(fv.cliente.estado.selecionado(), Some("7"));
        assert_eq!(FormularioVenda::STATUS.valor(&fv.form), "ATIVA");
    }

    #[test]
    fn alternancia_de_ativo_no_contrato() {
        let mut fc = FormularioContrato::novo();
        assert!(FormularioContrato::ATIVO.valor(&fc.form));
        FormularioContrato::ATIVO.alternar(&mut fc.form);
        assert!(!FormularioContrato::ATIVO.valor(&fc.form));
    }
}
