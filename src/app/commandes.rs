//! src/app/commandes.rs
//!
//! Commandes "/nom" : variantes fermées, exécutées par un répartiteur.

use std::str::FromStr;

use super::etat::{ErreurSaisie, Reponse};

const TEXTE_AIDE: &str = "The program calculates numbers";
const TEXTE_AU_REVOIR: &str = "Bye!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Exit,
    Help,
}

impl FromStr for Commande {
    type Err = ErreurSaisie;

    /// `nom` sans le '/' initial.
    fn from_str(nom: &str) -> Result<Self, Self::Err> {
        match nom {
            "exit" => Ok(Commande::Exit),
            "help" => Ok(Commande::Help),
            _ => Err(ErreurSaisie::CommandeInconnue(nom.to_string())),
        }
    }
}

/// Répartiteur : une commande -> une réponse (jamais de sortie du processus ici).
pub fn executer_commande(cmd: Commande) -> Reponse {
    match cmd {
        Commande::Exit => Reponse::Quitter(TEXTE_AU_REVOIR.to_string()),
        Commande::Help => Reponse::Texte(TEXTE_AIDE.to_string()),
    }
}
