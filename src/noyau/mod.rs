//! Noyau exact Z (entiers non bornés)
//!
//! Organisation interne :
//! - erreur.rs    : erreurs récupérables (une ligne abandonnée, pas le processus)
//! - jetons.rs    : tokenisation
//! - variables.rs : magasin de variables (capacité) + substitution
//! - signes.rs    : repli des séries de + / -
//! - rpn.rs       : shunting-yard + réduction RPN
//! - eval.rs      : contrôle + pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod signes;
pub mod variables;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, Demarche, Resultat};
pub use variables::{MagasinVariables, Variables};
