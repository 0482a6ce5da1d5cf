// src/validation.rs

pub mod regras;
pub mod schemas;

use std::collections::HashMap;

use validator::Validate;

/// Erros de validação agrupados por campo, prontos para exibição.
pub type ErrosDeCampo = HashMap<String, Vec<String>>;

/// Achata um `ValidationErrors` no mapa campo -> mensagens que o motor
/// de formulários consome. Regras sem mensagem explícita são ignoradas.
pub fn mapear_erros(erros: &validator::ValidationErrors) -> ErrosDeCampo {
    let mut mapa = ErrosDeCampo::new();
    for (campo, erros_do_campo) in erros.field_errors() {
        let mensagens: Vec<String> = erros_do_campo
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        mapa.insert(campo.to_string(), mensagens);
    }
    mapa
}

/// Valida o modelo inteiro e devolve o mapa de erros (vazio se válido).
pub fn validar<T: Validate>(valores: &T) -> ErrosDeCampo {
    match valores.validate() {
        Ok(()) => ErrosDeCampo::new(),
        Err(erros) => mapear_erros(&erros),
    }
}
