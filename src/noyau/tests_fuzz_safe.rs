//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : le pipeline == un évaluateur de référence (descente récursive,
//!   associativité gauche partout) sur des expressions bien formées
//! - entrées “poubelle” : jamais de panique, toujours une erreur typée ou un nombre

use std::time::{Duration, Instant};

use super::evaluation::appliquer;
use super::operateur::Operateur;
use super::{calculate_expression, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const OPS: [&str; 8] = ["+", "-", "*", "/", "%", "//", "**", "^"];

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(20), rng.pick(100)),
        2 => format!("{}", 1 + rng.pick(3)),
        _ => format!("{}", rng.pick(1000)),
    }
}

/// Morceaux séparés (joints par " " pour l’entrée texte).
fn gen_expr(rng: &mut Rng, depth: usize, out: &mut Vec<String>) {
    gen_atome(rng, depth, out);
    let n = rng.pick(4);
    for _ in 0..n {
        out.push(OPS[rng.pick(OPS.len() as u32) as usize].to_string());
        gen_atome(rng, depth, out);
    }
}

fn gen_atome(rng: &mut Rng, depth: usize, out: &mut Vec<String>) {
    match rng.pick(5) {
        0 if depth > 0 => {
            out.push("(".into());
            gen_expr(rng, depth - 1, out);
            out.push(")".into());
        }
        1 => {
            // négatif : seulement juste après '('
            out.push("(".into());
            out.push(format!("-{}", gen_nombre(rng)));
            out.push(")".into());
        }
        _ => out.push(gen_nombre(rng)),
    }
}

/* ------------------------ Évaluateur de référence ------------------------ */

struct Reference<'a> {
    morceaux: &'a [String],
    pos: usize,
}

impl<'a> Reference<'a> {
    fn suivant(&self) -> Option<&'a str> {
        self.morceaux.get(self.pos).map(String::as_str)
    }

    fn op_parmi(&mut self, niveau: &[&str]) -> Option<Operateur> {
        let s = self.suivant()?;
        if niveau.contains(&s) {
            self.pos += 1;
            Operateur::depuis_symbole(s)
        } else {
            None
        }
    }

    fn niveau(&mut self, n: usize) -> Result<f64, ErreurCalcul> {
        const NIVEAUX: [&[&str]; 3] = [&["+", "-"], &["*", "/", "%", "//"], &["**", "^"]];
        if n == NIVEAUX.len() {
            return self.atome();
        }
        let mut acc = self.niveau(n + 1)?;
        while let Some(op) = self.op_parmi(NIVEAUX[n]) {
            let b = self.niveau(n + 1)?;
            acc = appliquer(acc, b, op)?;
        }
        Ok(acc)
    }

    fn atome(&mut self) -> Result<f64, ErreurCalcul> {
        let s = self.suivant().unwrap_or_else(|| panic!("fin inattendue"));
        self.pos += 1;
        if s == "(" {
            let v = self.niveau(0)?;
            assert_eq!(self.suivant(), Some(")"));
            self.pos += 1;
            Ok(v)
        } else {
            Ok(s.parse::<f64>().unwrap_or_else(|_| panic!("nombre attendu: {s:?}")))
        }
    }
}

fn reference(morceaux: &[String]) -> Result<f64, ErreurCalcul> {
    let mut r = Reference { morceaux, pos: 0 };
    let v = r.niveau(0)?;
    assert_eq!(r.pos, morceaux.len());
    Ok(v)
}

fn meme_resultat(a: &Result<f64, ErreurCalcul>, b: &Result<f64, ErreurCalcul>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_pipeline_egal_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let mut morceaux = Vec::new();
        gen_expr(&mut rng, 3, &mut morceaux);
        let expr = morceaux.join(" ");

        let obtenu = calculate_expression(&expr);
        let attendu = reference(&morceaux);
        assert!(
            meme_resultat(&obtenu, &attendu),
            "expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}"
        );

        if obtenu.is_ok() {
            seen_ok += 1;
        }
    }

    // Seule erreur possible ici : // par zéro (rare)
    assert!(seen_ok > 200, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_entrees_poubelle_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    const ALPHABET: &[char] = &[
        '0', '1', '7', '9', '.', '+', '-', '*', '/', '%', '^', '(', ')', ' ', '$', 'x', 'é',
    ];

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // déterminisme + aucune panique
        let a = calculate_expression(&expr);
        let b = calculate_expression(&expr);
        assert!(meme_resultat(&a, &b), "expr={expr:?} a={a:?} b={b:?}");

        if a.is_err() {
            seen_err += 1;
        }
    }

    // Du bruit aléatoire est presque toujours mal formé.
    assert!(seen_err > 250, "trop peu d’erreurs: {seen_err}");
}
