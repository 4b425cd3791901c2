// src/noyau/operateur.rs
//
// Opérateurs binaires reconnus + table de précédence.
//
// Symboles et précédences figés à la compilation (lecture seule, partagés par tous les appels).
// `**` et `^` sont synonymes (puissance) mais gardent leur graphie pour la démarche.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    DiviseEntier, // //
    Puissance,    // **
    Chapeau,      // ^
}

/// Tous les opérateurs, dans l’ordre des niveaux de précédence.
pub static TOUS: [Operateur; 8] = [
    Operateur::Plus,
    Operateur::Moins,
    Operateur::Fois,
    Operateur::Divise,
    Operateur::Modulo,
    Operateur::DiviseEntier,
    Operateur::Puissance,
    Operateur::Chapeau,
];

impl Operateur {
    /// Recherche exacte (None si symbole inconnu).
    pub fn depuis_symbole(s: &str) -> Option<Operateur> {
        TOUS.iter().copied().find(|op| op.symbole() == s)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Modulo => "%",
            Operateur::DiviseEntier => "//",
            Operateur::Puissance => "**",
            Operateur::Chapeau => "^",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise | Operateur::Modulo | Operateur::DiviseEntier => 2,
            Operateur::Puissance | Operateur::Chapeau => 3,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}
