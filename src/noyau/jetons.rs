// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Entier (signé après normalisation des signes)
    Num(BigInt),

    // Variable : remplacée par sa valeur avant la normalisation.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur binaire (+ - * / ^).
    pub fn est_operateur(&self) -> bool {
        matches!(
            self,
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret
        )
    }

    /// Signe candidat (+ ou -), unaire ou binaire selon la position.
    pub fn est_signe(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus)
    }

    /// Valeur ou fin de sous-expression : ce qui précède un opérateur binaire.
    pub fn ferme_une_valeur(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::Ident(_) | Tok::RPar)
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12), chiffres consécutifs => un seul jeton
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - identifiants [a-zA-Z]+ (variables)
///
/// Les espaces sont retirés AVANT le découpage : "1 2" se lit "12".
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let simple = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Mot : chiffres seuls => Num, lettres seules => Ident, mélange => refus
        if c.is_ascii_alphanumeric() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();

            if mot.bytes().all(|b| b.is_ascii_digit()) {
                let n = BigInt::parse_bytes(mot.as_bytes(), 10)
                    .ok_or_else(|| ErreurCalcul::JetonInvalide {
                        fragment: mot.clone(),
                    })?;
                out.push(Tok::Num(n));
            } else if mot.bytes().all(|b| b.is_ascii_alphabetic()) {
                out.push(Tok::Ident(mot));
            } else {
                return Err(ErreurCalcul::JetonInvalide { fragment: mot });
            }
            continue;
        }

        return Err(ErreurCalcul::JetonInvalide {
            fragment: c.to_string(),
        });
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
