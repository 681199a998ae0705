// src/app.rs
//
// Calculatrice Z — module App (racine)
// -----------------------------------
// Rôle:
// - Déclarer les sous-modules (classement, commandes, etat, vue)
// - Ré-exporter AppCalc (pour main.rs: use calculatrice_z::app::AppCalc;)
//
// Important:
// - Le noyau ne voit jamais la ligne brute : classement.rs décide d’abord.
// - Le magasin de variables vit dans AppCalc et n’est prêté qu’en lecture au noyau.

pub mod classement;
pub mod commandes;
pub mod etat;
pub mod vue;

// Ré-export pratique
pub use etat::{AppCalc, ErreurSaisie, Reponse};
pub use vue::executer;
