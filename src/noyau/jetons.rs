// src/noyau/jetons.rs

use super::operateur::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    // Symbole non reconnu (ex: "$", "1.", ".5").
    // NOTE: pas d’erreur ici, c’est l’évaluation qui le refusera.
    Inconnu(String),

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux ASCII (ex: 12, 3.25)
/// - moins unaire collé au nombre (ex: "-5", "(-2.5)")
/// - opérateurs + - * / % ^ et // ** (un seul jeton)
/// - parenthèses ( )
///
/// Ne renvoie jamais d’erreur : tout caractère inattendu devient `Tok::Inconnu`.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut tampon = String::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            // un blanc termine le littéral en cours
            vider_tampon(&mut tampon, &mut out);
            i += 1;
            continue;
        }

        // Chiffres et '.' : on accumule
        if c.is_ascii_digit() || c == '.' {
            tampon.push(c);
            i += 1;
            continue;
        }

        vider_tampon(&mut tampon, &mut out);

        // Moins unaire : début d’entrée (rien émis) ou juste après '('
        if c == '-' && matches!(out.last(), None | Some(Tok::LPar)) {
            tampon.push(c);
            i += 1;
            continue;
        }

        // Opérateurs à deux caractères (lookahead d’un caractère)
        let suivant = chars.get(i + 1).copied();
        match (c, suivant) {
            ('*', Some('*')) => {
                out.push(Tok::Op(Operateur::Puissance));
                i += 2;
                continue;
            }
            ('/', Some('/')) => {
                out.push(Tok::Op(Operateur::DiviseEntier));
                i += 2;
                continue;
            }
            _ => {}
        }

        out.push(match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => symbole(&c.to_string()),
        });
        i += 1;
    }

    vider_tampon(&mut tampon, &mut out);

    log::trace!("tokenize({s:?}) -> {}", format_tokens(&out));
    out
}

/// Émet le littéral en attente (s’il y en a un).
fn vider_tampon(tampon: &mut String, out: &mut Vec<Tok>) {
    if tampon.is_empty() {
        return;
    }

    let tok = if est_litteral_numerique(tampon) {
        match tampon.parse::<f64>() {
            Ok(v) => Tok::Num(v),
            Err(_) => Tok::Inconnu(tampon.clone()),
        }
    } else {
        // "-" seul, "1.", ".5", "1.2.3", ...
        symbole(tampon)
    };

    out.push(tok);
    tampon.clear();
}

fn symbole(s: &str) -> Tok {
    match Operateur::depuis_symbole(s) {
        Some(op) => Tok::Op(op),
        None => Tok::Inconnu(s.to_string()),
    }
}

/// Forme acceptée : -?[0-9]+(\.[0-9]+)?
fn est_litteral_numerique(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);

    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (corps, None),
    };

    let chiffres = |t: &str| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit());

    chiffres(entier) && frac.map_or(true, chiffres)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Inconnu(s) => s.clone(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
