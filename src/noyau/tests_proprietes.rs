//! Tests de propriétés (campagne) : invariants du pipeline.
//!
//! - postfixe = mêmes nombres + mêmes opérateurs, sans parenthèses
//! - une expression bien formée laisse exactement une valeur
//! - concurrence : appels parallèles = appels séquentiels
//! - profondeur : pile explicite, pas de récursion => pas de stack overflow

use std::thread;
use std::time::{Duration, Instant};

use super::jetons::{tokenize, Tok};
use super::postfixe::to_postfix;
use super::{calculate_expression, ErreurCalcul};

fn eval_ok(expr: &str) -> f64 {
    calculate_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn compte(tokens: &[Tok]) -> (usize, usize, usize) {
    let mut nums = 0;
    let mut ops = 0;
    let mut pars = 0;
    for t in tokens {
        match t {
            Tok::Num(_) => nums += 1,
            Tok::Op(_) | Tok::Inconnu(_) => ops += 1,
            Tok::LPar | Tok::RPar => pars += 1,
        }
    }
    (nums, ops, pars)
}

/* ------------------------ Conservation des jetons ------------------------ */

#[test]
fn prop_postfixe_conserve_nombres_et_operateurs() {
    for expr in [
        "1 + 2",
        "(1 + 2) * 3",
        "((4 // 3) % 2) ** (1 - (-0))",
        "2 ^ 3 ^ 2 - (-1)",
        "(((7)))",
        "10 / (5 - 5)",
    ] {
        let jetons = tokenize(expr);
        let rpn = to_postfix(&jetons).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let (n_in, o_in, _) = compte(&jetons);
        let (n_out, o_out, p_out) = compte(&rpn);
        assert_eq!(n_in, n_out, "expr={expr:?}");
        assert_eq!(o_in, o_out, "expr={expr:?}");
        assert_eq!(p_out, 0, "expr={expr:?}");
    }
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn prop_exemples_reference() {
    assert_eq!(eval_ok("2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok("(2 + 3) * 4"), 20.0);
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 64.0);
    assert_eq!(eval_ok("-5 + 3"), -2.0);
    assert_eq!(eval_ok("(-5) * 2"), -10.0);
    assert_eq!(eval_ok("7 // 2"), 3.0);
    assert_eq!(eval_ok("10**2"), 100.0);
    assert_eq!(eval_ok("10 ** 2"), 100.0);
    assert_eq!(
        calculate_expression("(1 + 2)"),
        Ok(3.0),
        "parenthèses équilibrées"
    );
    assert_eq!(
        calculate_expression("(1 + 2"),
        Err(ErreurCalcul::UnbalancedParentheses)
    );
}

/* ------------------------ Concurrence ------------------------ */

#[test]
fn prop_appels_concurrents_identiques() {
    let exprs = ["2 ^ 3 ^ 2", "(1 + 2) * 3 // 2", "17 % 5 - 1 / 4", "1 / 0", "(-3) ** 3"];
    let attendus: Vec<u64> = exprs.iter().map(|e| eval_ok(e).to_bits()).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                exprs
                    .iter()
                    .map(|e| eval_ok(e).to_bits())
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    for h in handles {
        let obtenus = h.join().unwrap_or_else(|_| panic!("thread paniqué"));
        assert_eq!(obtenus, attendus);
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn prop_parentheses_profondes_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1.0);

    let ouvert = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(
        calculate_expression(&ouvert),
        Err(ErreurCalcul::UnbalancedParentheses)
    );
    budget(t0, max);
}

#[test]
fn prop_longue_somme_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 1 + 1 + ... (10 000 termes) : associativité gauche => pile bornée
    let expr = vec!["1"; 10_000].join(" + ");
    assert_eq!(eval_ok(&expr), 10_000.0);
    budget(t0, max);
}
