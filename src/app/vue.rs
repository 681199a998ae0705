// src/app/vue.rs
//
// Vue (ligne de commande)
// -----------------------
// Objectifs :
// - Une ligne lue, entièrement traitée, une réponse écrite, puis la suivante.
// - Entrée / sortie génériques (stdin/stdout en vrai, mémoire en test).
// - Journal sur stderr (log), résultats sur la sortie.
//
// Note :
// - "/exit" termine la boucle ; la fin d’entrée aussi.
// - Octets non UTF-8 : remplacés (U+FFFD), la ligne est refusée comme
//   n’importe quelle entrée inconnue, la session continue.

use std::io::{self, BufRead, Write};

use log::info;

use super::classement::{classer, Categorie};
use super::commandes::{executer_commande, Commande};
use super::etat::{AppCalc, ErreurSaisie, Reponse};
use crate::noyau::{eval_expression, ErreurCalcul};

/// Boucle principale : lit `entree` jusqu’à "/exit" ou la fin.
pub fn executer<R: BufRead, W: Write>(
    app: &mut AppCalc,
    mut entree: R,
    mut sortie: W,
) -> io::Result<()> {
    info!("session ouverte");

    let mut brut: Vec<u8> = Vec::new();
    loop {
        if let Some(invite) = &app.invite {
            write!(sortie, "{invite}")?;
            sortie.flush()?;
        }

        brut.clear();
        if entree.read_until(b'\n', &mut brut)? == 0 {
            break;
        }
        let ligne = String::from_utf8_lossy(&brut);
        let ligne = ligne.trim_end_matches(&['\n', '\r'][..]);

        match app.traiter_ligne(ligne) {
            Reponse::Rien => {}
            Reponse::Texte(t) => writeln!(sortie, "{t}")?,
            Reponse::Quitter(t) => {
                writeln!(sortie, "{t}")?;
                break;
            }
        }
        sortie.flush()?;
    }

    info!(
        "session fermée: {} lignes, {} évaluations, {} erreurs",
        app.lignes, app.evaluations, app.erreurs
    );
    Ok(())
}

impl AppCalc {
    /// Classe puis répartit UNE ligne.
    pub fn traiter_ligne(&mut self, ligne: &str) -> Reponse {
        self.lignes += 1;

        match classer(ligne.trim()) {
            Categorie::Vide => Reponse::Rien,

            Categorie::Commande(nom) => match nom.parse::<Commande>() {
                Ok(cmd) => executer_commande(cmd),
                Err(e) => self.set_erreur(e),
            },

            Categorie::Affectation { cle, valeur } => match self.affecter(&cle, &valeur) {
                Ok(()) => Reponse::Rien,
                Err(e) => self.set_erreur(e),
            },

            Categorie::Appel(nom) => match self.appeler(&nom) {
                Ok(v) => Reponse::Texte(v),
                Err(e) => self.set_erreur(e),
            },

            Categorie::Valeur(v) => Reponse::Texte(v),

            Categorie::Expression(expr) => self.eval_via_noyau(&expr),

            Categorie::Inconnue => self.set_erreur(ErreurSaisie::Calcul(ErreurCalcul::invalide(
                "entrée non classée",
            ))),
        }
    }

    /// Évalue l’expression via le noyau (magasin prêté en lecture).
    fn eval_via_noyau(&mut self, expr: &str) -> Reponse {
        match eval_expression(expr, &self.variables) {
            Ok(r) => self.set_resultat(&r.valeur),
            Err(e) => self.set_erreur(e.into()),
        }
    }
}
