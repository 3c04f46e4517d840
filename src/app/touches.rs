//! src/app/touches.rs
//!
//! Traduction des entrées brutes (boutons du pavé, clavier) en `Evenement`.
//! Le moteur ne voit que les glyphes canoniques : '*' -> '×', '/' -> '÷'.

use crate::noyau::{Evenement, Unaire};

/// Disposition du pavé (6 lignes x 4 colonnes).
pub const PAVE: [[&str; 4]; 6] = [
    ["(", ")", "C", "←"],
    ["%", "x²", "√x", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["+/-", "0", ".", "="],
];

/// Bouton du pavé -> événement.
pub fn evenement_pour_bouton(label: &str) -> Option<Evenement> {
    let evt = match label {
        "C" => Evenement::Effacer,
        "←" => Evenement::RetourArriere,
        "%" => Evenement::Pourcentage,
        "+/-" => Evenement::InverserSigne,
        "x²" => Evenement::Unaire(Unaire::Carre),
        "√x" => Evenement::Unaire(Unaire::Racine),
        "=" => Evenement::Evaluer,
        "(" | ")" | "." | "+" | "-" | "×" | "÷" => Evenement::Ajouter(label.to_string()),
        _ if label.len() == 1 && label.chars().all(|c| c.is_ascii_digit()) => {
            Evenement::Ajouter(label.to_string())
        }
        _ => return None,
    };
    Some(evt)
}

/// Caractère tapé au clavier -> événement.
pub fn evenement_pour_touche(c: char) -> Option<Evenement> {
    let evt = match c {
        '0'..='9' | '(' | ')' | '.' | '+' | '-' | '×' | '÷' => Evenement::Ajouter(c.to_string()),
        '*' => Evenement::Ajouter("×".to_string()),
        '/' => Evenement::Ajouter("÷".to_string()),
        '=' | '\n' | '\r' => Evenement::Evaluer,
        _ => return None,
    };
    Some(evt)
}
