//! Noyau f64 : expression infixe -> nombre
//!
//! Organisation interne :
//! - operateur.rs  : opérateurs binaires + table de précédence (lecture seule)
//! - jetons.rs     : tokenisation (moins unaire, ** et //)
//! - postfixe.rs   : shunting-yard (infixe -> RPN)
//! - evaluation.rs : pile de f64 + sémantique des opérateurs
//! - erreur.rs     : erreurs typées
//! - eval.rs       : pipeline complet
//!
//! Aucun affichage, aucun historique ici : voir `crate::app`.

pub mod erreur;
pub mod eval;
pub mod evaluation;
pub mod jetons;
pub mod operateur;
pub mod postfixe;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculate_expression, calculate_with_demarche, DemarcheNoyau};
