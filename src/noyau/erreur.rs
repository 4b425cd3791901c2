// src/noyau/erreur.rs

//! Erreurs du noyau.
//!
//! Chaque étape (jetons → postfixe → évaluation) détecte localement la violation
//! qu’elle observe et la remonte telle quelle via `?`. Aucune valeur par défaut,
//! aucune panique.
//!
//! Les problèmes de domaine flottant (1/0, (-8)^0.5, ...) ne sont PAS des erreurs :
//! ils donnent Infinity / NaN selon IEEE-754.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    /// Un opérateur binaire a trouvé moins de deux valeurs sur la pile.
    #[error("opérandes insuffisants pour '{operateur}'")]
    InsufficientOperands { operateur: String },

    /// Symbole hors de l’ensemble {+, -, *, /, %, //, **, ^}.
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(String),

    /// La pile finale ne contient pas exactement une valeur (entrée vide,
    /// opérateur manquant, ...).
    #[error("expression invalide ({restantes} valeur(s) restante(s))")]
    InvalidExpression { restantes: usize },

    /// `a // 0` : la division entière n’a pas de valeur spéciale IEEE.
    #[error("division entière par zéro")]
    IntegerDivisionByZero,
}
