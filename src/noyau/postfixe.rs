// src/noyau/postfixe.rs
//
// Shunting-yard : jetons infixes -> postfixe (RPN)
//
// Règles:
// - Num : sortie directe
// - '(' : empilée ; ')' : dépile jusqu’à '(' (absente => erreur)
// - opérateur : dépile tant que précédence(sommet) >= précédence(jeton)
//   => associativité GAUCHE pour tous, puissance comprise : 2^3^2 = (2^3)^2
// - symbole inconnu : précédence 0, traité comme un opérateur
// - opérateur en position préfixe (début, après '(' ou après un opérateur) :
//   opérande gauche absent => erreur. Sans ce garde, "+ 1 2" deviendrait "1 2 +".
//
// NOTE:
// - Pas d’injection de 0 pour le moins unaire : il est déjà collé au nombre par tokenize.

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Op(op) => op.precedence(),
        _ => 0,
    }
}

/// Convertit une suite de jetons en postfixe (notation polonaise inversée).
///
/// Exemple:
///   tokens:   [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   postfixe: [Num(2), Num(3), Num(4), Op(*), Op(+)]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre, une expression fermée ou un symbole inconnu.
    // Sert à détecter l’opérateur sans opérande gauche.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => parenthèse orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::UnbalancedParentheses),
                    }
                }
                prev_was_value = true;
            }

            Tok::Op(op) if !prev_was_value => {
                return Err(ErreurCalcul::InsufficientOperands {
                    operateur: op.symbole().to_string(),
                });
            }

            Tok::Op(_) | Tok::Inconnu(_) => {
                let p_tok = precedence(&tok);
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < p_tok {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        log::trace!("dépile {top:?} (précédence >= {p_tok})");
                        out.push(top);
                    }
                }
                prev_was_value = matches!(tok, Tok::Inconnu(_));
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::UnbalancedParentheses);
        }
        out.push(op);
    }

    Ok(out)
}
