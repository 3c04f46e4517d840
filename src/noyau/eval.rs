//! Noyau — évaluation (pipeline réel)
//!
//! glyphes (÷ ×) -> jetons -> RPN -> valeur (pile) -> texte brut
//!
//! Le texte brut est la valeur complète (non tronquée) ; la troncature pour
//! l’afficheur se fait dans format.rs.

use tracing::debug;

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize, traduire_glyphes};
use super::rpn::{evaluer_rpn, to_rpn};

/// API publique : évalue une expression d’afficheur et retourne le résultat brut.
///
/// Entiers exacts ("1+2" => "3"), réels dès qu’il y a '/', sqrt ou un littéral décimal
/// ("sqrt(9)" => "3.0").
pub fn eval_expression(expr_str: &str) -> Result<String, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::analyse("Entrée vide"));
    }

    // 1) Glyphes -> opérateurs
    let traduit = traduire_glyphes(s);

    // 2) Jetons
    let jetons = tokenize(&traduit)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(rpn = %format_tokens(&rpn), "expression analysée");

    // 4) Valeur
    let valeur = evaluer_rpn(&rpn)?;
    debug!(%valeur, "expression évaluée");

    Ok(valeur.to_string())
}
