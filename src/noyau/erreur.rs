// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - Toutes récupérables : seule la ligne courante est abandonnée.
// - Display = message affiché à l’utilisateur (protocole de sortie de la REPL).
// - Debug   = détail pour le journal.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Opérateurs mal placés, parenthèses déséquilibrées, RPN incohérente.
    ExpressionInvalide {
        /// Ce qui a été détecté (journal seulement).
        detail: String,
    },
    /// Un identifiant n’a pas d’entrée dans le magasin de variables.
    VariableInconnue {
        /// Le nom cherché.
        nom: String,
    },
    /// `/` avec un opérande droit nul.
    DivisionParZero,
    /// `^` avec un exposant négatif ou hors de la plage supportée.
    ExposantInvalide {
        /// L’exposant refusé, en décimal.
        exposant: String,
    },
    /// Caractère (ou mot) hors de l’alphabet des expressions.
    JetonInvalide {
        /// Le fragment refusé.
        fragment: String,
    },
}

impl ErreurCalcul {
    /// Raccourci : expression invalide avec détail.
    pub fn invalide(detail: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ErreurCalcul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCalcul::ExpressionInvalide { .. } | ErreurCalcul::JetonInvalide { .. } => {
                write!(f, "Invalid expression")
            }
            ErreurCalcul::VariableInconnue { .. } => write!(f, "Unknown variable"),
            ErreurCalcul::DivisionParZero => write!(f, "Division by zero"),
            ErreurCalcul::ExposantInvalide { .. } => write!(f, "Invalid exponent"),
        }
    }
}

impl std::error::Error for ErreurCalcul {}
