// src/validation/regras.rs

use async_trait::async_trait;
use validator::ValidationError;

use crate::common::error::AppError;

// =========================================================================
//  CPF
// =========================================================================

/// Valida um CPF pelos dois dígitos verificadores (módulo 11).
/// Aceita o número com ou sem máscara; qualquer coisa que não reduza a
/// exatamente 11 dígitos é inválida, assim como sequências repetidas.
pub fn validar_cpf(cpf: &str) -> bool {
    let digitos: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digitos.len() != 11 {
        return false;
    }

    // 111.111.111-11 passa no módulo 11, mas não é um CPF real
    if digitos.iter().all(|&d| d == digitos[0]) {
        return false;
    }

    // Dígito verificador sobre os `n` primeiros dígitos, pesos (n+1)..2
    let verificador = |n: usize| -> u32 {
        let soma: u32 = digitos[..n]
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (n as u32 + 1 - i as u32))
            .sum();
        let resto = (soma * 10) % 11;
        if resto >= 10 { 0 } else { resto }
    };

    verificador(9) == digitos[9] && verificador(10) == digitos[10]
}

// =========================================================================
//  TELEFONE
// =========================================================================

/// Telefone fixo (10 dígitos) ou celular (11 dígitos, terceiro dígito 9),
/// com DDD entre 11 e 99.
pub fn validar_telefone(telefone: &str) -> bool {
    let limpo: Vec<u32> = telefone.chars().filter_map(|c| c.to_digit(10)).collect();

    if limpo.len() != 10 && limpo.len() != 11 {
        return false;
    }

    let ddd = limpo[0] * 10 + limpo[1];
    if ddd < 11 {
        return false;
    }

    if limpo.len() == 11 && limpo[2] != 9 {
        return false;
    }

    true
}

// Adaptadores para o derive do `validator`.

pub fn cpf_campo(cpf: &str) -> Result<(), ValidationError> {
    if validar_cpf(cpf) {
        return Ok(());
    }
    let mut err = ValidationError::new("cpf");
    err.message = Some("CPF inválido".into());
    Err(err)
}

pub fn telefone_campo(telefone: &str) -> Result<(), ValidationError> {
    if validar_telefone(telefone) {
        return Ok(());
    }
    let mut err = ValidationError::new("telefone");
    err.message = Some("Telefone deve estar no formato (XX) X XXXX-XXXX".into());
    Err(err)
}

// =========================================================================
//  NÚMEROS
// =========================================================================

// Os campos numéricos dos widgets passam entrada não numérica adiante
// como NaN, e `range(...)` não reprova NaN (comparação parcial sempre
// falsa). A checagem de mínimo precisa exigir um número finito.

pub fn numero_minimo_um(valor: f64) -> Result<(), ValidationError> {
    if valor.is_finite() && valor >= 1.0 {
        return Ok(());
    }
    let mut err = ValidationError::new("minimo_um");
    err.message = Some("Deve ser um número maior ou igual a 1".into());
    Err(err)
}

pub fn numero_nao_negativo(valor: f64) -> Result<(), ValidationError> {
    if valor.is_finite() && valor >= 0.0 {
        return Ok(());
    }
    let mut err = ValidationError::new("nao_negativo");
    err.message = Some("Deve ser um número maior ou igual a zero".into());
    Err(err)
}

// =========================================================================
//  CEP (validação assíncrona, via serviço externo)
// =========================================================================

#[async_trait]
pub trait CepLookup: Send + Sync {
    /// Confirma a existência do CEP. Implementações devem devolver
    /// Ok(false) para CEPs bem formados porém inexistentes e Err apenas
    /// para falhas de transporte.
    async fn cep_existe(&self, cep: &str) -> Result<bool, AppError>;
}

/// Consulta o ViaCEP: GET {base}/{cep}/json/ e o campo `erro` da resposta
/// decide. Menos de 8 dígitos invalida sem ir à rede.
pub struct ViaCep {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCep {
    pub fn novo(base_url: &str) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CepLookup for ViaCep {
    async fn cep_existe(&self, cep: &str) -> Result<bool, AppError> {
        let limpo: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
        if limpo.len() < 8 {
            return Ok(false);
        }

        let url = format!("{}/{}/json/", self.base_url, limpo);
        let resposta = self.http.get(&url).send().await?;
        let corpo: serde_json::Value = resposta.json().await?;

        // O ViaCEP responde 200 com { "erro": true } para CEP inexistente.
        let erro = corpo
            .get("erro")
            .map(|v| !matches!(v, serde_json::Value::Bool(false)))
            .unwrap_or(false);

        Ok(!erro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_valido_conhecido() {
        assert!(validar_cpf("11144477735"));
        // Com máscara também
        assert!(validar_cpf("111.444.777-35"));
    }

    #[test]
    fn cpf_rejeita_digitos_repetidos() {
        assert!(!validar_cpf("11111111111"));
        assert!(!validar_cpf("00000000000"));
    }

    #[test]
    fn cpf_rejeita_tamanho_errado() {
        assert!(!validar_cpf("123456789"));
        assert!(!validar_cpf("111444777350"));
        assert!(!validar_cpf(""));
    }

    #[test]
    fn cpf_rejeita_verificador_errado() {
        assert!(!validar_cpf("11144477736"));
        assert!(!validar_cpf("11144477745"));
    }

    #[test]
    fn telefone_celular_e_fixo() {
        assert!(validar_telefone("11987654321"));
        assert!(validar_telefone("1187654321"));
        assert!(validar_telefone("(11) 9 8765-4321"));
    }

    #[test]
    fn telefone_rejeita_ddd_invalido() {
        assert!(!validar_telefone("0187654321"));
    }

    #[test]
    fn telefone_celular_exige_nono_digito() {
        assert!(!validar_telefone("11187654321"));
    }

    #[test]
    fn telefone_rejeita_tamanho_errado() {
        assert!(!validar_telefone("119876543"));
        assert!(!validar_telefone("119876543210"));
    }

    #[test]
    fn minimos_numericos_rejeitam_nan_e_infinito() {
        assert!(numero_minimo_um(1.0).is_ok());
        assert!(numero_minimo_um(84.0).is_ok());
        assert!(numero_minimo_um(0.0).is_err());
        assert!(numero_minimo_um(f64::NAN).is_err());
        assert!(numero_minimo_um(f64::INFINITY).is_err());

        assert!(numero_nao_negativo(0.0).is_ok());
        assert!(numero_nao_negativo(-1.0).is_err());
        assert!(numero_nao_negativo(f64::NAN).is_err());
    }

    #[tokio::test]
    async fn cep_curto_nao_vai_a_rede() {
        // Base inválida de propósito: se tentasse a rede, falharia.
        let lookup = ViaCep::novo("http://127.0.0.1:1").unwrap();
        assert!(!lookup.cep_existe("1234").await.unwrap());
        assert!(!lookup.cep_existe("").await.unwrap());
    }
}
