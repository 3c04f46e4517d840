//! src/noyau/moteur.rs
//!
//! Moteur d’expression : accumule les touches en deux morceaux
//! - `total`   : partie déjà engagée de l’expression (petit afficheur)
//! - `courant` : opérande en cours de frappe (grand afficheur)
//!
//! Drapeau `vient_d_evaluer` (état “Frais”) : posé par `evaluate` (succès) et
//! `apply_unary` ; la touche suivante repart d’un opérande vide.
//! `clear` et `backspace` ne touchent jamais au drapeau.
//!
//! Contrats :
//! - Aucune dépendance à l’affichage : l’UI lit `rendu()` après chaque événement.
//! - Aucune panique sur entrée malformée : toute erreur devient la sentinelle "Error".

use tracing::{debug, warn};

use super::erreur::ErreurCalc;
use super::eval::eval_expression;
use super::format::{format_resultat, repr_reel};

/// Valeur affichée dans `courant` après un échec.
pub const SENTINELLE_ERREUR: &str = "Error";

/// Glyphes d’opérateurs binaires tels qu’affichés.
pub const OPERATEURS: [char; 4] = ['+', '-', '×', '÷'];

/// Fonctions unaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unaire {
    Carre,
    Racine,
}

impl Unaire {
    /// Nom de la fonction dans l’expression (sq / sqrt).
    pub fn nom(self) -> &'static str {
        match self {
            Unaire::Carre => "sq",
            Unaire::Racine => "sqrt",
        }
    }
}

/// Événement d’entrée, tel que transmis par l’UI (ou la console).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// Chiffre, '.', parenthèse ou glyphe d’opérateur.
    Ajouter(String),
    Effacer,
    RetourArriere,
    Pourcentage,
    InverserSigne,
    Unaire(Unaire),
    Evaluer,
}

/// Ce que l’UI dessine après chaque événement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendu {
    pub total: String,
    pub courant: String,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    total: String,
    courant: String,
    vient_d_evaluer: bool,
    historique: Vec<String>,
    dernier_resultat: String,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            total: String::new(),
            courant: "0".to_string(),
            vient_d_evaluer: false,
            historique: Vec::new(),
            dernier_resultat: String::new(),
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn courant(&self) -> &str {
        &self.courant
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.vient_d_evaluer
    }

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    /// Les `n` dernières entrées, de la plus ancienne à la plus récente.
    pub fn historique_recent(&self, n: usize) -> &[String] {
        let debut = self.historique.len().saturating_sub(n);
        &self.historique[debut..]
    }

    /// Dernier résultat complet (non tronqué).
    pub fn dernier_resultat(&self) -> &str {
        &self.dernier_resultat
    }

    /// Étape de rendu explicite : copie des deux afficheurs.
    pub fn rendu(&self) -> Rendu {
        Rendu {
            total: self.total.clone(),
            courant: self.courant.clone(),
        }
    }

    /* ------------------------ Répartition des événements ------------------------ */

    pub fn appliquer(&mut self, evt: &Evenement) -> Result<(), ErreurCalc> {
        match evt {
            Evenement::Ajouter(jeton) => self.add_to_expression(jeton),
            Evenement::Effacer => self.clear(),
            Evenement::RetourArriere => self.backspace(),
            Evenement::Pourcentage => return self.percent(),
            Evenement::InverserSigne => self.toggle_sign(),
            Evenement::Unaire(u) => self.apply_unary(*u),
            Evenement::Evaluer => return self.evaluate(),
        }
        Ok(())
    }

    /* ------------------------ Opérations ------------------------ */

    /// C : si rien n’est tapé ("0"), efface le total ; sinon remet seulement l’opérande à "0".
    pub fn clear(&mut self) {
        if self.courant == "0" {
            self.total.clear();
        } else {
            self.courant = "0".to_string();
        }
    }

    /// ← : retire le dernier caractère de l’opérande (jamais du total).
    pub fn backspace(&mut self) {
        self.courant.pop();
    }

    /// % : opérande * 0.01, réécrit comme un réel.
    ///
    /// Opérande illisible ("", ".", "Error") : sentinelle + `FormatNumerique`.
    pub fn percent(&mut self) -> Result<(), ErreurCalc> {
        match self.courant.trim().parse::<f64>() {
            Ok(x) => {
                self.courant = repr_reel(x * 0.01);
                Ok(())
            }
            Err(_) => {
                let e = ErreurCalc::FormatNumerique(self.courant.clone());
                warn!(erreur = %e, "pourcentage impossible");
                self.courant = SENTINELLE_ERREUR.to_string();
                Err(e)
            }
        }
    }

    /// +/- : enveloppe l’opérande dans le TOTAL, `-(<courant>)`, en écrasant le total.
    ///
    /// Ce n’est pas une négation numérique de l’opérande : l’opérande reste affiché
    /// tel quel, et un `evaluate` direct le reprend à la place du total.
    pub fn toggle_sign(&mut self) {
        self.total = format!("-({})", self.courant);
    }

    /// x² / √x.
    /// - opérande non vide : total (gardé seulement hors état Frais) + fn(opérande)
    /// - opérande vide     : fn(total)
    pub fn apply_unary(&mut self, u: Unaire) {
        if !self.courant.is_empty() {
            let prefixe = if !self.total.is_empty() && !self.vient_d_evaluer {
                self.total.as_str()
            } else {
                ""
            };
            self.total = format!("{prefixe}{}({})", u.nom(), self.courant);
            self.courant.clear();
        } else {
            self.total = format!("{}({})", u.nom(), self.total);
        }

        // la prochaine touche ne doit pas se coller à l’expression enveloppée
        self.vient_d_evaluer = true;
    }

    /// Routage d’une touche : chiffre, '.', parenthèse ou opérateur.
    pub fn add_to_expression(&mut self, jeton: &str) {
        if self.vient_d_evaluer {
            self.courant.clear();
        }

        if !jeton.is_empty() && jeton.chars().all(|c| c.is_ascii_digit()) {
            if self.courant == "0" {
                self.courant = jeton.to_string();
            } else {
                self.courant.push_str(jeton);
            }
        } else if jeton == "." {
            // pas de garde contre un second '.' : "1.2.3" échouera à l’évaluation
            self.courant.push('.');
        } else {
            // flush : l’opérande (éventuellement vide) passe dans le total avec le jeton
            self.total.push_str(&self.courant);
            self.total.push_str(jeton);
            self.courant.clear();
        }

        self.vient_d_evaluer = false;
    }

    /// = : replie l’opérande dans le total, évalue, historise.
    ///
    /// Échec : `courant` = "Error", total (replié) et historique inchangés, drapeau inchangé.
    pub fn evaluate(&mut self) -> Result<(), ErreurCalc> {
        if !self.courant.is_empty() && !self.vient_d_evaluer {
            let finit_par_operateur = self
                .total
                .chars()
                .last()
                .is_some_and(|c| OPERATEURS.contains(&c));

            if finit_par_operateur {
                self.total.push_str(&self.courant);
            } else {
                self.total = self.courant.clone();
            }
            self.courant.clear();
        }

        debug!(total = %self.total, "évaluation");

        match eval_expression(&self.total) {
            Ok(brut) => {
                self.historique.push(format!("{} = {}", self.total, brut));
                self.courant = format_resultat(&brut);
                self.dernier_resultat = brut;
                self.vient_d_evaluer = true;
                Ok(())
            }
            Err(e) => {
                warn!(total = %self.total, erreur = %e, "évaluation échouée");
                self.courant = SENTINELLE_ERREUR.to_string();
                Err(e)
            }
        }
    }
}
