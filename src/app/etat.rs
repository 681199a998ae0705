//! src/app/etat.rs
//!
//! État de session (sans vue, sans noyau).
//!
//! Rôle : posséder le magasin de variables et les compteurs de session,
//! et offrir les opérations de tenue des variables (affectation, lecture).
//!
//! Contrats :
//! - Aucune évaluation d’expression ici.
//! - Une affectation refusée ne touche JAMAIS au magasin.
//! - Valeurs stockées sous forme décimale canonique ("007" -> "7").

use std::fmt;

use log::{debug, warn};
use num_bigint::BigInt;

use super::classement::motifs;
use crate::noyau::{ErreurCalcul, MagasinVariables, Variables};

/// Ce que la boucle doit écrire après une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    Rien,
    Texte(String),
    /// Dernier message, puis fin de session.
    Quitter(String),
}

/// Erreurs de saisie (hors noyau) + erreurs du noyau.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurSaisie {
    IdentifiantInvalide(String),
    AffectationInvalide(String),
    VariableInconnue(String),
    CommandeInconnue(String),
    Calcul(ErreurCalcul),
}

impl fmt::Display for ErreurSaisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurSaisie::IdentifiantInvalide(_) => write!(f, "Invalid identifier"),
            ErreurSaisie::AffectationInvalide(_) => write!(f, "Invalid assignment"),
            ErreurSaisie::VariableInconnue(_) => write!(f, "Unknown variable"),
            ErreurSaisie::CommandeInconnue(_) => write!(f, "Unknown command"),
            ErreurSaisie::Calcul(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErreurSaisie {}

impl From<ErreurCalcul> for ErreurSaisie {
    fn from(e: ErreurCalcul) -> Self {
        ErreurSaisie::Calcul(e)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- variables (prêtées au noyau en lecture) ---
    pub variables: Variables,

    // --- paramètres ---
    pub invite: Option<String>, // texte écrit avant chaque lecture

    // --- compteurs ---
    pub lignes: usize,
    pub evaluations: usize,
    pub erreurs: usize,
}

impl AppCalc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_invite(mut self, invite: Option<String>) -> Self {
        self.invite = invite;
        self
    }

    /// `cle = valeur` :
    /// - cle : lettres seules
    /// - valeur : lettres seules (copie d’une variable) ou entier signé
    pub fn affecter(&mut self, cle: &str, valeur: &str) -> Result<(), ErreurSaisie> {
        let m = motifs();

        if !m.identifiant.is_match(cle) {
            return Err(ErreurSaisie::IdentifiantInvalide(cle.to_string()));
        }
        if !m.valeur_affectable.is_match(valeur) {
            return Err(ErreurSaisie::AffectationInvalide(valeur.to_string()));
        }

        let stockee = if m.identifiant.is_match(valeur) {
            self.variables
                .lookup(valeur)
                .map(str::to_string)
                .ok_or_else(|| ErreurSaisie::VariableInconnue(valeur.to_string()))?
        } else {
            // entier signé accepté (`a = -5`), forme canonique stockée
            valeur
                .parse::<BigInt>()
                .map_err(|_| ErreurSaisie::AffectationInvalide(valeur.to_string()))?
                .to_string()
        };

        debug!("affectation {cle} = {stockee}");
        self.variables.assign(cle, stockee);
        Ok(())
    }

    /// Lecture d’une variable par son nom.
    pub fn appeler(&self, nom: &str) -> Result<String, ErreurSaisie> {
        if !motifs().identifiant.is_match(nom) {
            return Err(ErreurSaisie::IdentifiantInvalide(nom.to_string()));
        }
        self.variables
            .lookup(nom)
            .map(str::to_string)
            .ok_or_else(|| ErreurSaisie::VariableInconnue(nom.to_string()))
    }

    /// Utilitaire : placer une erreur (compteur + journal), rendre le message.
    pub fn set_erreur(&mut self, e: ErreurSaisie) -> Reponse {
        self.erreurs += 1;
        warn!("ligne {} refusée: {e:?}", self.lignes);
        Reponse::Texte(e.to_string())
    }

    /// Utilitaire : déposer un résultat d’évaluation.
    pub fn set_resultat(&mut self, valeur: &BigInt) -> Reponse {
        self.evaluations += 1;
        Reponse::Texte(valeur.to_string())
    }
}
