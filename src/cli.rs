// src/cli.rs
//
// Ligne de commande (NATIF seulement)
// -----------------------------------
// - sans --eval : lance l’interface graphique
// - avec --eval : évalue, écrit "expr = valeur" et quitte (code 1 si au moins une erreur)

use std::io::Write;

use clap::Parser;

use crate::app::affichage::format_resultat;
use crate::app::historique::{CAPACITE_DEFAUT, CAPACITE_MAX};
use crate::noyau::calculate_expression;

#[derive(Parser, Debug)]
#[command(version, about = "Calculatrice RPN : infixe -> postfixe -> f64", long_about = None)]
pub struct Args {
    /// Évalue EXPR sans interface graphique (répétable)
    #[arg(short, long = "eval", value_name = "EXPR", allow_hyphen_values = true)]
    pub eval: Vec<String>,

    /// Nombre maximal de lignes gardées dans l’historique de la vue
    #[arg(
        long,
        default_value_t = CAPACITE_DEFAUT as u64,
        value_parser = clap::value_parser!(u64).range(1..=CAPACITE_MAX as u64)
    )]
    pub historique_max: u64,
}

/// Évalue chaque expression dans l’ordre ; renvoie false si au moins une a échoué.
pub fn executer_evals(
    exprs: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<bool> {
    let mut tout_ok = true;

    for expr in exprs {
        match calculate_expression(expr) {
            Ok(v) => writeln!(out, "{expr} = {}", format_resultat(v))?,
            Err(e) => {
                log::warn!("expression refusée {expr:?}: {e}");
                writeln!(err, "{expr} = erreur: {e}")?;
                tout_ok = false;
            }
        }
    }

    Ok(tout_ok)
}
