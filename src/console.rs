//! Mode sans fenêtre : rejoue une suite de touches et imprime le rendu.
//!
//! Syntaxe : éléments séparés par des espaces ; chaque élément est soit un
//! libellé du pavé ("C", "←", "%", "+/-", "x²", "√x", "="), soit une suite de
//! caractères clavier ("12", "*", "/", "(").

use std::fmt::Write as _;

use anyhow::{bail, Result};

use crate::app::etat::AppCalc;
use crate::app::touches::{evenement_pour_bouton, evenement_pour_touche};
use crate::noyau::Evenement;

/// Traduit la suite en événements (élément inconnu => erreur).
pub fn evenements(sequence: &str) -> Result<Vec<Evenement>> {
    let mut out = Vec::new();

    for element in sequence.split_whitespace() {
        if let Some(evt) = evenement_pour_bouton(element) {
            out.push(evt);
            continue;
        }
        for c in element.chars() {
            match evenement_pour_touche(c) {
                Some(evt) => out.push(evt),
                None => bail!("touche inconnue {c:?} dans {element:?}"),
            }
        }
    }

    Ok(out)
}

/// Rejoue la suite sur une calculatrice neuve et retourne le texte à imprimer.
pub fn executer(sequence: &str, app: &mut AppCalc) -> Result<String> {
    for evt in evenements(sequence)? {
        app.traiter(&evt);
    }

    let mut sortie = String::new();
    writeln!(sortie, "total   : {}", app.rendu.total)?;
    writeln!(sortie, "courant : {}", app.rendu.courant)?;
    let historique = app.texte_historique();
    if !historique.is_empty() {
        writeln!(sortie, "historique :")?;
        for ligne in historique.lines() {
            writeln!(sortie, "  {ligne}")?;
        }
    }
    Ok(sortie)
}
