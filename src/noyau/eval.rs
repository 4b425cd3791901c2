//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> postfixe (shunting-yard) -> pile de f64
//!
//! Aucun état conservé entre deux appels : tout vit dans des Vec locaux.

use super::erreur::ErreurCalcul;
use super::evaluation::evaluate_postfix;
use super::jetons::{format_tokens, tokenize};
use super::postfixe::to_postfix;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub postfixe: String,
}

/// API publique : évalue une expression infixe.
pub fn calculate_expression(expression: &str) -> Result<f64, ErreurCalcul> {
    calculate_with_demarche(expression).map(|(v, _d)| v)
}

/// Comme [`calculate_expression`], avec les étapes intermédiaires en texte
/// (jetons + postfixe) pour le panneau “Démarche”.
pub fn calculate_with_demarche(expression: &str) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Jetons
    let jetons = tokenize(expression);
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: [{jetons_txt}]");

    // 2) Postfixe
    let postfixe = to_postfix(&jetons)?;
    let postfixe_txt = format_tokens(&postfixe);
    log::debug!("postfixe: [{postfixe_txt}]");

    // 3) Pile
    let valeur = evaluate_postfix(&postfixe)?;
    log::debug!("{expression:?} = {valeur}");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        postfixe: postfixe_txt,
    };

    Ok((valeur, d))
}
