// src/noyau/signes.rs
//
// Normalisation des signes (avant shunting-yard).
//
// Une “série” = suite consécutive de + / -. Signe effectif : `-` si le nombre
// de `-` est impair, `+` sinon.
//
// Règles (parcours droite -> gauche, chaque série est résolue avant que son
// contexte ne change) :
// - position binaire (après une valeur ou `)`) : UN seul opérateur + ou -.
// - position unaire (début, après `(`, après un opérateur) :
//     - devant un entier  : le signe est replié dans l’entier ;
//     - devant `(` avec `-` : le groupe G devient `( 0 - G )` ;
//     - signe `+`          : la série disparaît ;
//     - sinon              : le signe reste tel quel (l’évaluation refusera).
//
// Jamais d’erreur ici : une série mal formée est résolue structurellement.

use num_bigint::BigInt;
use num_traits::Zero;

use super::jetons::Tok;

/// Signe effectif d’une série de + / -.
fn signe_negatif(serie: &[Tok]) -> bool {
    serie.iter().filter(|t| matches!(t, Tok::Minus)).count() % 2 == 1
}

/// Dans `rev` (sortie à l’envers), le dernier élément est un `(`.
/// Retourne l’indice de la `)` qui le ferme, s’il existe.
fn fermeture_du_groupe(rev: &[Tok]) -> Option<usize> {
    let mut profondeur: usize = 0;
    for k in (0..rev.len()).rev() {
        match rev[k] {
            Tok::LPar => profondeur += 1,
            Tok::RPar => {
                profondeur = profondeur.checked_sub(1)?;
                if profondeur == 0 {
                    return Some(k);
                }
            }
            _ => {}
        }
    }
    None
}

/// Replie les signes unaires ; la sortie ne contient plus que des entiers,
/// des opérateurs binaires et des parenthèses.
pub fn normaliser_signes(tokens: Vec<Tok>) -> Vec<Tok> {
    // construite à l’envers, retournée à la fin
    let mut rev: Vec<Tok> = Vec::with_capacity(tokens.len() + 4);

    let mut fin = tokens.len();
    while fin > 0 {
        let i = fin - 1;

        if !tokens[i].est_signe() {
            rev.push(tokens[i].clone());
            fin = i;
            continue;
        }

        // série [debut, fin)
        let mut debut = i;
        while debut > 0 && tokens[debut - 1].est_signe() {
            debut -= 1;
        }
        let negatif = signe_negatif(&tokens[debut..fin]);
        let operateur = if negatif { Tok::Minus } else { Tok::Plus };

        let binaire = debut > 0 && tokens[debut - 1].ferme_une_valeur();

        if binaire {
            rev.push(operateur);
        } else if let Some(Tok::Num(n)) = rev.last_mut() {
            if negatif {
                *n = -std::mem::take(n);
            }
        } else if matches!(rev.last(), Some(Tok::LPar)) {
            if negatif {
                match fermeture_du_groupe(&rev) {
                    Some(k) => {
                        // ( 0 - G ) : à l’envers, `)` avant G et `- 0 (` après
                        rev.insert(k, Tok::RPar);
                        rev.push(Tok::Minus);
                        rev.push(Tok::Num(BigInt::zero()));
                        rev.push(Tok::LPar);
                    }
                    None => rev.push(operateur),
                }
            }
        } else {
            rev.push(operateur);
        }

        fin = debut;
    }

    rev.reverse();
    rev
}
