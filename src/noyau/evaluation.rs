// src/noyau/evaluation.rs
//
// Évaluation d’une suite postfixe sur une pile de f64.

use num_integer::Integer;

use super::erreur::ErreurCalcul;
use super::jetons::Tok;
use super::operateur::Operateur;

/// Évalue une RPN.
///
/// - Num : empilé
/// - Op  : dépile b (sommet) puis a, empile a op b
/// - à la fin, exactement une valeur doit rester
pub fn evaluate_postfix(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => pile.push(*v),

            Tok::Op(op) => {
                let (b, a) = match (pile.pop(), pile.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => {
                        return Err(ErreurCalcul::InsufficientOperands {
                            operateur: op.symbole().to_string(),
                        })
                    }
                };
                let r = appliquer(a, b, *op)?;
                log::trace!("{a} {op} {b} = {r}");
                pile.push(r);
            }

            Tok::Inconnu(s) => return Err(ErreurCalcul::UnknownOperator(s.clone())),

            // to_postfix ne laisse passer aucune parenthèse
            Tok::LPar => return Err(ErreurCalcul::UnknownOperator("(".into())),
            Tok::RPar => return Err(ErreurCalcul::UnknownOperator(")".into())),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::InvalidExpression {
            restantes: pile.len(),
        }),
    }
}

/// Applique un opérateur binaire.
///
/// Sémantique flottante IEEE-754 : 1/0 = inf, 0/0 = NaN, (-8)^0.5 = NaN.
/// Seule `//` peut échouer (diviseur entier nul).
pub fn appliquer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => a / b,
        Operateur::Puissance | Operateur::Chapeau => a.powf(b),
        Operateur::DiviseEntier => division_entiere(a, b)? as f64,
        // reste tronqué : signe de a
        Operateur::Modulo => a % b,
    };
    Ok(r)
}

/// floor(a / b) sur les parties entières (troncature vers 0, saturante, NaN -> 0).
/// 7.9 // 2.9 = 7 // 2 = 3 : la partie fractionnaire est perdue (comportement conservé).
fn division_entiere(a: f64, b: f64) -> Result<i64, ErreurCalcul> {
    let (a, b) = (a as i64, b as i64);
    if b == 0 {
        return Err(ErreurCalcul::IntegerDivisionByZero);
    }
    // seul débordement possible : i64::MIN / -1
    if b == -1 {
        return Ok(a.wrapping_neg());
    }
    Ok(Integer::div_floor(&a, &b))
}
