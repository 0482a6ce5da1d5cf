// src/validation/schemas.rs

// Modelos de valor dos formulários, um por entidade. São o que o usuário
// digita (strings e números crus); os payloads tipados de src/models só
// nascem depois que o schema aprova. A validação roda a cada alteração
// de valor e de novo, atomicamente, no envio.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use validator::Validate;

use crate::common::error::AppError;
use crate::models::cliente::{Cliente, ClientePayload};
use crate::models::contrato::{TipoContrato, TipoContratoPayload};
use crate::models::user::{AtualizaUser, NovoUser, Perfil, User};
use crate::models::venda::{NovaVenda, StatusVenda, Venda};
use crate::validation::regras::{cpf_campo, numero_minimo_um, numero_nao_negativo, telefone_campo};

// =========================================================================
//  CLIENTE
// =========================================================================

#[derive(Debug, Clone, Default, Validate)]
pub struct ClienteForm {
    #[validate(length(min = 2, message = "Nome deve ter pelo menos 2 caracteres"))]
    pub nome: String,

    #[validate(custom(function = "cpf_campo"))]
    pub cpf: String,

    #[validate(length(min = 1, message = "Data de nascimento é obrigatória"))]
    pub data_nascimento: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[validate(
        length(min = 1, message = "Telefone é obrigatório"),
        custom(function = "telefone_campo")
    )]
    pub telefone: String,

    #[validate(length(min = 1, message = "Logradouro é obrigatório"))]
    pub end_logradouro: String,

    #[validate(length(min = 1, message = "Número é obrigatório"))]
    pub end_numero: String,

    pub end_complemento: String,

    #[validate(length(min = 1, message = "Bairro é obrigatório"))]
    pub end_bairro: String,

    #[validate(length(min = 1, message = "Cidade é obrigatória"))]
    pub end_cidade: String,

    #[validate(length(equal = 2, message = "UF deve ter 2 caracteres"))]
    pub end_uf: String,

    // O comprimento é checado aqui; a existência do CEP é a validação
    // assíncrona do formulário (slot próprio, não bloqueia os demais campos).
    #[validate(length(min = 8, message = "CEP deve ter pelo menos 8 caracteres"))]
    pub end_cep: String,
}

impl ClienteForm {
    /// Pré-popula o formulário para edição.
    pub fn de_cliente(cliente: &Cliente) -> Self {
        Self {
            nome: cliente.nome.clone(),
            cpf: cliente.cpf.clone(),
            data_nascimento: cliente.data_nascimento.format("%Y-%m-%d").to_string(),
            email: cliente.email.clone(),
            telefone: cliente.telefone.clone(),
            end_logradouro: cliente.end_logradouro.clone(),
            end_numero: cliente.end_numero.clone(),
            end_complemento: cliente.end_complemento.clone().unwrap_or_default(),
            end_bairro: cliente.end_bairro.clone(),
            end_cidade: cliente.end_cidade.clone(),
            end_uf: cliente.end_uf.clone(),
            end_cep: cliente.end_cep.clone(),
        }
    }

    pub fn para_payload(&self) -> ClientePayload {
        ClientePayload {
            nome: self.nome.trim().to_string(),
            cpf: self.cpf.clone(),
            data_nascimento: self.data_nascimento.clone(),
            email: self.email.trim().to_string(),
            telefone: self.telefone.clone(),
            end_logradouro: self.end_logradouro.clone(),
            end_numero: self.end_numero.clone(),
            end_complemento: if self.end_complemento.trim().is_empty() {
                None
            } else {
                Some(self.end_complemento.clone())
            },
            end_bairro: self.end_bairro.clone(),
            end_cidade: self.end_cidade.clone(),
            end_uf: self.end_uf.clone(),
            end_cep: self.end_cep.clone(),
        }
    }
}

// =========================================================================
//  TIPO DE CONTRATO
// =========================================================================

#[derive(Debug, Clone, Validate)]
pub struct ContratoForm {
    #[validate(length(min = 2, message = "Nome do contrato deve ter pelo menos 2 caracteres"))]
    pub nome: String,

    // Campos numéricos chegam do widget como f64; entrada não numérica
    // vira NaN e precisa reprovar aqui (range deixaria NaN passar).
    #[validate(custom(function = "numero_minimo_um", message = "Prazo deve ser pelo menos 1 mês"))]
    pub prazo_meses: f64,

    #[validate(custom(function = "numero_nao_negativo", message = "Tempo não pode ser negativo"))]
    pub tempo_nova_oportunidade_dias: f64,

    pub ativo: bool,
}

impl Default for ContratoForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            prazo_meses: 0.0,
            tempo_nova_oportunidade_dias: 30.0,
            ativo: true,
        }
    }
}

impl ContratoForm {
    pub fn de_tipo(tipo: &TipoContrato) -> Self {
        Self {
            nome: tipo.nome.clone(),
            prazo_meses: f64::from(tipo.prazo_meses),
            tempo_nova_oportunidade_dias: f64::from(tipo.tempo_nova_oportunidade_dias),
            ativo: tipo.ativo,
        }
    }

    pub fn para_payload(&self) -> TipoContratoPayload {
        TipoContratoPayload {
            nome: self.nome.trim().to_string(),
            prazo_meses: self.prazo_meses as u32,
            tempo_nova_oportunidade_dias: self.tempo_nova_oportunidade_dias as u32,
            ativo: self.ativo,
        }
    }
}

// =========================================================================
//  VENDA
// =========================================================================

#[derive(Debug, Clone, Validate)]
pub struct VendaForm {
    // Valor selecionado no combobox paginado (id do cliente como string).
    #[validate(length(min = 1, message = "Cliente é obrigatório"))]
    pub cliente_id: String,

    #[validate(length(min = 1, message = "Tipo de contrato é obrigatório"))]
    pub tipo_contrato_id: String,

    #[validate(custom(function = "numero_nao_negativo", message = "Valor deve ser um número positivo"))]
    pub valor: f64,

    #[validate(length(min = 1, message = "Data é obrigatória"))]
    pub data: String,

    // O conjunto fechado de status é garantido pelo próprio tipo.
    pub status: StatusVenda,
}

impl Default for VendaForm {
    fn default() -> Self {
        Self {
            cliente_id: String::new(),
            tipo_contrato_id: String::new(),
            valor: 0.0,
            data: String::new(),
            status: StatusVenda::Criada,
        }
    }
}

impl VendaForm {
    pub fn de_venda(venda: &Venda) -> Self {
        Self {
            cliente_id: venda.cliente_id.to_string(),
            tipo_contrato_id: venda.tipo_contrato_id.to_string(),
            valor: venda.valor.to_f64().unwrap_or(0.0),
            data: venda.data.format("%Y-%m-%d").to_string(),
            status: venda.status,
        }
    }

    pub fn para_payload(&self) -> Result<NovaVenda, AppError> {
        let cliente_id: i64 = self
            .cliente_id
            .parse()
            .map_err(|_| AppError::FormularioInvalido)?;
        let tipo_contrato_id: i64 = self
            .tipo_contrato_id
            .parse()
            .map_err(|_| AppError::FormularioInvalido)?;

        // NaN nunca chega aqui: o schema já reprovou antes do envio.
        let valor = Decimal::from_f64_retain(self.valor)
            .ok_or(AppError::FormularioInvalido)?
            .round_dp(2);

        Ok(NovaVenda {
            cliente_id,
            tipo_contrato_id,
            valor,
            data: self.data.clone(),
            status: self.status,
        })
    }
}

// =========================================================================
//  USUÁRIO
// =========================================================================

#[derive(Debug, Clone, Validate)]
pub struct UserForm {
    #[validate(length(min = 2, message = "Nome deve ter pelo menos 2 caracteres"))]
    pub nome: String,

    #[validate(email(message = "Email inválido"))]
    pub email: String,

    /// Opcional: em branco na edição significa "manter a senha atual".
    pub password: String,

    pub perfil: Perfil,
    pub active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            nome: String::new(),
            email: String::new(),
            password: String::new(),
            perfil: Perfil::Vendedor,
            active: true,
        }
    }
}

impl UserForm {
    pub fn de_user(user: &User) -> Self {
        Self {
            nome: user.nome.clone(),
            email: user.email.clone(),
            password: String::new(),
            perfil: user.perfil,
            active: user.active,
        }
    }

    fn senha(&self) -> Option<String> {
        let senha = self.password.trim();
        if senha.is_empty() {
            None
        } else {
            Some(senha.to_string())
        }
    }

    pub fn para_novo(&self) -> NovoUser {
        NovoUser {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.senha(),
            perfil: self.perfil,
            active: self.active,
        }
    }

    /// Senha em branco fica FORA do corpo (nunca string vazia).
    pub fn para_atualizacao(&self) -> AtualizaUser {
        AtualizaUser {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.senha(),
            perfil: self.perfil,
            active: self.active,
        }
    }
}
