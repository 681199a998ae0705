//! Calculatrice Z : calculatrice en ligne de commande sur entiers non bornés.
//!
//! - `noyau` : jetons -> signes -> RPN -> entier (exact, sans flottants)
//! - `app`   : classement des lignes, variables, commandes, boucle de lecture

pub mod app;
pub mod noyau;

pub use app::{executer, AppCalc};
pub use noyau::{eval_expression, ErreurCalcul, Variables};
