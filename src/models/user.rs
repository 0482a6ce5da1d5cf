// src/models/user.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Perfil {
    Admin,
    Vendedor,
}

// Usuário do sistema. A senha nunca aparece nas leituras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub perfil: Perfil,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NovoUser {
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub perfil: Perfil,
    pub active: bool,
}

// Na edição a senha é opcional: em branco, o campo é OMITIDO do corpo
// (nunca enviado como string vazia, senão o servidor a sobrescreveria).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AtualizaUser {
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub perfil: Perfil,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senha_em_branco_fica_fora_do_corpo_de_atualizacao() {
        let payload = AtualizaUser {
            nome: "Maria".into(),
            email: "maria@example.com".into(),
            password: None,
            perfil: Perfil::Vendedor,
            active: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn senha_preenchida_vai_no_corpo() {
        let payload = AtualizaUser {
            nome: "Maria".into(),
            email: "maria@example.com".into(),
            password: Some("nova-senha".into()),
            perfil: Perfil::Admin,
            active: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["password"], "nova-senha");
    }
}
