// src/app/affichage.rs
//
// Mise en forme d’un résultat f64 pour l’écran (le noyau ne formate rien).

/// - entier fini : sans partie décimale ("14", "-3")
/// - sinon : plus courte écriture qui relit la même valeur ("0.1", "2.5")
/// - spéciales : "Infinity", "-Infinity", "NaN"
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 s’affiche "0"
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
