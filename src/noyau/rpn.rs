// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> entier
// Objectif:
// - Convertir une suite de Tok (signes déjà normalisés) en RPN (postfix)
// - Puis réduire la RPN en un BigInt
//
// Règles (compatibilité de résultat, pas un shunting-yard “manuel”) :
// - '+' '-' : dépilent tous les + - * / du sommet, puis s’empilent.
// - '*' '/' : dépilent tous les * / du sommet, puis s’empilent.
// - '^'     : s’empile si la pile est VIDE, sinon part DIRECTEMENT en
//             sortie (une '(' ouverte compte comme non vide).
//             '^' empilé bloque le dépilement.
// - Résultat final : SOMME de ce qui reste sur la pile d’évaluation.

use log::trace;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

/// Opérateurs que '+' / '-' font sortir de la pile.
fn sort_devant_additif(t: &Tok) -> bool {
    matches!(t, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
}

/// Opérateurs que '*' / '/' font sortir de la pile.
fn sort_devant_multiplicatif(t: &Tok) -> bool {
    matches!(t, Tok::Star | Tok::Slash)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Ident(name) => {
                return Err(ErreurCalcul::invalide(format!(
                    "variable non substituée: {name}"
                )))
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' (la '(' est jetée)
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::invalide("')' sans '('")),
                    }
                }
            }

            Tok::Plus | Tok::Minus => {
                while ops.last().is_some_and(sort_devant_additif) {
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }

            Tok::Star | Tok::Slash => {
                while ops.last().is_some_and(sort_devant_multiplicatif) {
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
            }

            Tok::Caret => {
                if ops.is_empty() {
                    ops.push(tok);
                } else {
                    out.push(tok);
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::invalide("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Exposant de `^` : entier positif ou nul, tenant dans un u32.
fn exposant(n: &BigInt) -> Result<u32, ErreurCalcul> {
    if n.is_negative() {
        return Err(ErreurCalcul::ExposantInvalide {
            exposant: n.to_string(),
        });
    }
    n.to_u32().ok_or_else(|| ErreurCalcul::ExposantInvalide {
        exposant: n.to_string(),
    })
}

/// Applique un opérateur binaire : `a OP b`.
fn appliquer(op: &Tok, a: BigInt, b: BigInt) -> Result<BigInt, ErreurCalcul> {
    let r = match op {
        Tok::Plus => a + b,
        Tok::Minus => a - b,
        Tok::Star => a * b,
        Tok::Slash => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            // BigInt : division tronquée vers zéro
            a / b
        }
        Tok::Caret => a.pow(exposant(&b)?),
        autre => {
            return Err(ErreurCalcul::invalide(format!(
                "opérateur inattendu en RPN: {autre:?}"
            )))
        }
    };
    Ok(r)
}

/// Réduit une RPN en entier.
///
/// Chaque opérateur dépile la droite (num2) puis la gauche (num1).
/// À la fin, TOUT ce qui reste sur la pile est additionné.
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigInt, ErreurCalcul> {
    let mut st: Vec<BigInt> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push(n.clone()),

            op if op.est_operateur() => {
                let num2 = st
                    .pop()
                    .ok_or_else(|| ErreurCalcul::invalide("opérande manquant"))?;
                let num1 = st
                    .pop()
                    .ok_or_else(|| ErreurCalcul::invalide("opérande manquant"))?;
                st.push(appliquer(op, num1, num2)?);
            }

            _ => return Err(ErreurCalcul::invalide("jeton inattendu en RPN")),
        }
    }

    if st.len() > 1 {
        trace!("pile finale à {} valeurs : somme", st.len());
    }
    Ok(st.into_iter().sum())
}
