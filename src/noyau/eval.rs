//! Noyau — évaluation (pipeline réel)
//!
//! contrôle -> jetons -> variables -> signes -> RPN -> entier
//!
//! Remarque : le contrôle (opérateurs collés, parenthèses) se fait sur le
//! texte brut, AVANT tout découpage : les étapes suivantes supposent une
//! entrée plausible.

use std::sync::OnceLock;

use log::debug;
use num_bigint::BigInt;
use regex::Regex;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::signes::normaliser_signes;
use super::variables::{substituer, MagasinVariables};

/// Trace du pipeline (pour le journal et les tests).
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub signes: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct Resultat {
    pub valeur: BigInt,
    pub demarche: Demarche,
}

/// Opérateur (ou '(') suivi d’un opérateur multiplicatif, de '^' ou de ')'.
fn motif_collage() -> &'static Regex {
    static MOTIF: OnceLock<Regex> = OnceLock::new();
    MOTIF.get_or_init(|| Regex::new(r"[-+*/^(][*/^)]").expect("motif collage"))
}

/// Contrôle du texte brut (espaces ignorés) :
/// - pas de `* / ^` collé à un opérateur ou à '(' (ex: "2 ** 3", "2 + * 3", "(*2)")
/// - pas de "()" ni d’opérateur avant ')'
/// - pas de `* / ^ )` en tête, pas d’opérateur ni de '(' en fin
/// - parenthèses équilibrées, jamais de ')' qui ne ferme rien
pub fn valider_expression(s: &str) -> Result<(), ErreurCalcul> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(m) = motif_collage().find(&compact) {
        return Err(ErreurCalcul::invalide(format!(
            "opérateurs collés: {:?}",
            m.as_str()
        )));
    }

    if compact.starts_with(&['*', '/', '^', ')'][..]) {
        return Err(ErreurCalcul::invalide("opérateur en tête"));
    }
    if compact.ends_with(&['+', '-', '*', '/', '^', '('][..]) {
        return Err(ErreurCalcul::invalide("opérateur en fin"));
    }

    let mut profondeur: usize = 0;
    for c in compact.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur = profondeur
                    .checked_sub(1)
                    .ok_or_else(|| ErreurCalcul::invalide("')' sans '('"))?;
            }
            _ => {}
        }
    }
    if profondeur != 0 {
        return Err(ErreurCalcul::invalide("parenthèses non fermées"));
    }

    Ok(())
}

/// API publique : évalue une expression entière.
/// - Le magasin n’est lu que pour substituer les identifiants (jamais écrit).
/// - Même entrée + même magasin => même résultat (aucun état caché).
pub fn eval_expression(
    expr_str: &str,
    magasin: &dyn MagasinVariables,
) -> Result<Resultat, ErreurCalcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::invalide("Entrée vide"));
    }

    // 1) Contrôle
    valider_expression(s)?;

    // 2) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);

    // 3) Variables
    let jetons = substituer(jetons, magasin)?;

    // 4) Signes
    let normalises = normaliser_signes(jetons);
    let signes_txt = format_tokens(&normalises);

    // 5) RPN
    let rpn = to_rpn(&normalises)?;
    let rpn_txt = format_tokens(&rpn);

    debug!("jetons [{jetons_txt}] signes [{signes_txt}] rpn [{rpn_txt}]");

    // 6) Entier
    let valeur = eval_rpn(&rpn)?;

    Ok(Resultat {
        valeur,
        demarche: Demarche {
            jetons: jetons_txt,
            signes: signes_txt,
            rpn: rpn_txt,
        },
    })
}
