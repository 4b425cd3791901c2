//! src/app/historique.rs
//!
//! Historique des calculs (mémoire seulement, rien sur disque).
//!
//! Contrats :
//! - ordre chronologique : la plus récente en dernier
//! - capacité bornée (>= 1) : quand c’est plein, la plus ancienne sort

use std::collections::VecDeque;

/// Capacité par défaut (surchargée par `--historique-max`).
pub const CAPACITE_DEFAUT: usize = 50;

/// Garde-fou : on borne la capacité (anti-abus / anti-gel de la vue).
pub const CAPACITE_MAX: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    /// Valeur formatée, ou message d’erreur.
    pub resultat: String,
    pub erreur: bool,
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::avec_capacite(CAPACITE_DEFAUT)
    }
}

impl Historique {
    pub fn avec_capacite(capacite: usize) -> Self {
        let capacite = capacite.clamp(1, CAPACITE_MAX);
        Self {
            entrees: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        while self.entrees.len() >= self.capacite {
            self.entrees.pop_front();
        }
        self.entrees.push_back(entree);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn entrees(&self) -> impl DoubleEndedIterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }
}
