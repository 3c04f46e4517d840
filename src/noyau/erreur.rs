// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toutes finissent en sentinelle "Error" côté moteur, mais on garde le genre
// pour le diagnostic et les tests.

/// Erreur d’évaluation ou de lecture d’un opérande.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalc {
    /// La suite de jetons ne forme pas une expression (parenthèses, opérande
    /// manquant, jeton inconnu, entrée vide).
    #[error("expression invalide : {0}")]
    Analyse(String),

    /// Division par zéro, racine d’un négatif, dépassement.
    #[error("erreur arithmétique : {0}")]
    Arithmetique(String),

    /// `percent` sur un opérande qui n’est pas un nombre.
    #[error("nombre illisible : {0:?}")]
    FormatNumerique(String),
}

impl ErreurCalc {
    pub fn analyse(msg: impl Into<String>) -> Self {
        Self::Analyse(msg.into())
    }

    pub fn arithmetique(msg: impl Into<String>) -> Self {
        Self::Arithmetique(msg.into())
    }
}
