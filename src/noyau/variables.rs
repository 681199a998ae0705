// src/noyau/variables.rs
//
// Magasin de variables (capacité injectée) + substitution des identifiants.
//
// Contrats :
// - Le noyau ne possède pas le magasin : la REPL le possède et le prête.
// - Valeurs stockées sous forme TEXTE (entier décimal, signe optionnel).
// - La substitution se fait entre tokenize() et la normalisation des signes.

use std::collections::HashMap;

use log::trace;
use num_bigint::BigInt;

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

/// Capacité “variables” vue par le noyau et par la REPL.
pub trait MagasinVariables {
    fn lookup(&self, name: &str) -> Option<&str>;

    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    fn assign(&mut self, name: &str, value: String);
}

/// Implémentation simple : nom -> valeur textuelle.
#[derive(Clone, Debug, Default)]
pub struct Variables {
    table: HashMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl MagasinVariables for Variables {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.table.get(name).map(String::as_str)
    }

    fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    fn assign(&mut self, name: &str, value: String) {
        self.table.insert(name.to_string(), value);
    }
}

/// Remplace chaque Ident par la valeur entière stockée.
pub fn substituer(
    tokens: Vec<Tok>,
    magasin: &dyn MagasinVariables,
) -> Result<Vec<Tok>, ErreurCalcul> {
    tokens
        .into_iter()
        .map(|t| -> Result<Tok, ErreurCalcul> {
            let Tok::Ident(name) = t else {
                return Ok(t);
            };
            let brut = magasin
                .lookup(&name)
                .ok_or_else(|| ErreurCalcul::VariableInconnue { nom: name.clone() })?;
            let n: BigInt = brut
                .parse()
                .map_err(|_| ErreurCalcul::VariableInconnue { nom: name.clone() })?;
            trace!("substitution {name} -> {n}");
            Ok(Tok::Num(n))
        })
        .collect()
}
