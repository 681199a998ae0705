//! src/app/classement.rs
//!
//! Classement d’une ligne (déjà rognée) en catégorie fermée.
//!
//! Contrats :
//! - Aucune évaluation ici : on décide seulement QUI traite la ligne.
//! - Le noyau ne reçoit que des lignes classées `Expression`.
//! - Motifs compilés une seule fois (OnceLock).
//! - Lettres et chiffres ASCII seulement (`\d`, `\w` du crate regex sont Unicode).

use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Categorie {
    Vide,
    /// "/nom" (sans le '/')
    Commande(String),
    /// "cle = valeur", coupé au premier '='
    Affectation {
        cle: String,
        valeur: String,
    },
    /// un seul mot : lecture d’une variable
    Appel(String),
    /// chiffres seuls : renvoyés tels quels
    Valeur(String),
    Expression(String),
    Inconnue,
}

/// Motifs partagés (classement + contrôle des affectations).
pub struct Motifs {
    pub valeur: Regex,
    pub mot: Regex,
    pub expression: Regex,
    pub identifiant: Regex,
    pub valeur_affectable: Regex,
}

pub fn motifs() -> &'static Motifs {
    static MOTIFS: OnceLock<Motifs> = OnceLock::new();
    MOTIFS.get_or_init(|| Motifs {
        valeur: Regex::new(r"^[0-9]+$").expect("motif valeur"),
        mot: Regex::new(r"^[0-9A-Za-z_]+$").expect("motif mot"),
        // alphabet des expressions + au moins un opérateur ou une parenthèse
        expression: Regex::new(r"^[0-9A-Za-z_\s+\-*/^()]*[+\-*/^()][0-9A-Za-z_\s+\-*/^()]*$")
            .expect("motif expression"),
        identifiant: Regex::new(r"^[a-zA-Z]+$").expect("motif identifiant"),
        valeur_affectable: Regex::new(r"^([a-zA-Z]+|-?[0-9]+)$").expect("motif valeur affectable"),
    })
}

pub fn classer(ligne: &str) -> Categorie {
    let m = motifs();

    if ligne.is_empty() {
        return Categorie::Vide;
    }
    if let Some(nom) = ligne.strip_prefix('/') {
        return Categorie::Commande(nom.to_string());
    }
    if let Some((cle, valeur)) = ligne.split_once('=') {
        return Categorie::Affectation {
            cle: cle.trim().to_string(),
            valeur: valeur.trim().to_string(),
        };
    }
    if m.valeur.is_match(ligne) {
        return Categorie::Valeur(ligne.to_string());
    }
    if m.mot.is_match(ligne) {
        return Categorie::Appel(ligne.to_string());
    }
    if m.expression.is_match(ligne) {
        return Categorie::Expression(ligne.to_string());
    }
    Categorie::Inconnue
}
