// src/noyau/nombre.rs
//
// Valeur numérique du noyau : entier exact OU réel (f64).
//
// Règles (tour numérique) :
// - Entier (+ - * sq) Entier => Entier exact
// - '/' et sqrt => toujours Reel (Entier / Entier : un seul arrondi, via BigRational)
// - mélange Entier/Reel => Reel
// - Reel non fini (inf/nan) => erreur arithmétique (dépassement)

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurCalc;
use super::format::repr_reel;

/// Garde-fou : taille max (en bits) d’un entier exact (anti-gel sur sq(sq(sq(...)))).
const BITS_MAX: u64 = 1 << 16;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Reel(f64),
}

impl Nombre {
    #[cfg(test)]
    pub fn entier(n: i64) -> Self {
        Nombre::Entier(BigInt::from(n))
    }

    /// Conversion vers f64 (entier trop grand => dépassement).
    pub fn en_reel(&self) -> Result<f64, ErreurCalc> {
        match self {
            Nombre::Reel(x) => Ok(*x),
            Nombre::Entier(n) => n
                .to_f64()
                .filter(|x| x.is_finite())
                .ok_or_else(|| ErreurCalc::arithmetique("entier trop grand pour un réel")),
        }
    }

    pub fn est_nul(&self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(x) => *x == 0.0,
        }
    }

    pub fn additionner(self, autre: Nombre) -> Result<Nombre, ErreurCalc> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => entier_borne(a + b),
            (a, b) => reel_fini(a.en_reel()? + b.en_reel()?),
        }
    }

    pub fn soustraire(self, autre: Nombre) -> Result<Nombre, ErreurCalc> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => entier_borne(a - b),
            (a, b) => reel_fini(a.en_reel()? - b.en_reel()?),
        }
    }

    pub fn multiplier(self, autre: Nombre) -> Result<Nombre, ErreurCalc> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                if a.bits() + b.bits() > BITS_MAX {
                    return Err(ErreurCalc::arithmetique("entier trop grand"));
                }
                entier_borne(a * b)
            }
            (a, b) => reel_fini(a.en_reel()? * b.en_reel()?),
        }
    }

    /// Division “vraie” : toujours un réel.
    ///
    /// Entier / Entier passe par le rationnel exact a/b, arrondi une seule fois
    /// (pas de double arrondi au-delà de 2^53, pas de refus des entiers géants).
    pub fn diviser(self, autre: Nombre) -> Result<Nombre, ErreurCalc> {
        if autre.est_nul() {
            return Err(ErreurCalc::arithmetique("division par zéro"));
        }
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                let q = BigRational::new(a, b)
                    .to_f64()
                    .ok_or_else(|| ErreurCalc::arithmetique("quotient hors des réels"))?;
                reel_fini(q)
            }
            (a, b) => reel_fini(a.en_reel()? / b.en_reel()?),
        }
    }

    pub fn oppose(self) -> Nombre {
        match self {
            Nombre::Entier(n) => Nombre::Entier(-n),
            Nombre::Reel(x) => Nombre::Reel(-x),
        }
    }

    /// sq(x) = x^2 (reste entier si x entier).
    pub fn carre(self) -> Result<Nombre, ErreurCalc> {
        let copie = self.clone();
        self.multiplier(copie)
    }

    /// sqrt(x) = x^0.5 (toujours réel, refus des négatifs).
    pub fn racine(self) -> Result<Nombre, ErreurCalc> {
        let negatif = match &self {
            Nombre::Entier(n) => n.is_negative(),
            Nombre::Reel(x) => *x < 0.0,
        };
        if negatif {
            return Err(ErreurCalc::arithmetique("racine d’un nombre négatif"));
        }
        reel_fini(self.en_reel()?.powf(0.5))
    }
}

fn entier_borne(n: BigInt) -> Result<Nombre, ErreurCalc> {
    if n.bits() > BITS_MAX {
        return Err(ErreurCalc::arithmetique("entier trop grand"));
    }
    Ok(Nombre::Entier(n))
}

fn reel_fini(x: f64) -> Result<Nombre, ErreurCalc> {
    if x.is_finite() {
        Ok(Nombre::Reel(x))
    } else {
        Err(ErreurCalc::arithmetique("dépassement de capacité"))
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            Nombre::Reel(x) => f.write_str(&repr_reel(*x)),
        }
    }
}
