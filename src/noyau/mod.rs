//! Noyau de la calculatrice à pavé
//!
//! Organisation interne :
//! - erreur.rs   : taxonomie des erreurs (analyse / arithmétique / format numérique)
//! - nombre.rs   : valeur entière exacte ou réelle
//! - jetons.rs   : tokenisation + traduction des glyphes ÷ ×
//! - rpn.rs      : shunting-yard + évaluation à pile
//! - eval.rs     : pipeline complet
//! - format.rs   : affichage des résultats (repr + troncature)
//! - moteur.rs   : état de la calculatrice + opérations du pavé

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod nombre;
pub mod rpn;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::{Evenement, Moteur, Rendu, Unaire};
