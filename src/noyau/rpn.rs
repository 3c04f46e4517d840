// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la grammaire au passage
// - Puis l’évaluer avec une pile (aucune récursion, quelle que soit la longueur)
//
// Règles:
// - Ident(name): seulement sq / sqrt, obligatoirement suivis de '('
// - '+' / '-' quand on attend une valeur => unaire (Pos / Neg), préfixe,
//   plus prioritaire que * et /  ("2*-3" => 2 3 neg *)
// - Pas de multiplication implicite : "2(3)" ou "1.2.3" sont refusés

use super::erreur::ErreurCalc;
use super::jetons::Tok;
use super::nombre::Nombre;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        _ => 0,
    }
}

/// Identificateurs reconnus comme fonctions (unaire).
fn is_fonction_ident(name: &str) -> bool {
    matches!(name, "sq" | "sqrt")
}

/// Dépile vers `out` tant que le sommet est un opérateur de précédence >= `p`.
/// S’arrête sur '(' (et donc avant toute fonction, qui est sous sa parenthèse).
fn depiler_operateurs(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, p: i32) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar | Tok::Ident(_)) || precedence(top) < p {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sqrt"), LPar, Num(9), RPar, Plus, Num(1)]
///   rpn:    [Num(9), Ident("sqrt"), Num(1), Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // vrai quand le prochain jeton doit commencer une valeur
    let mut attend_valeur = true;

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalc::analyse("opérateur manquant entre deux valeurs"));
                }
                out.push(tok.clone());
                attend_valeur = false;
            }

            Tok::Ident(name) => {
                if !attend_valeur {
                    return Err(ErreurCalc::analyse(format!("'{name}' inattendu")));
                }
                if !is_fonction_ident(name) {
                    return Err(ErreurCalc::analyse(format!("identifiant inconnu: '{name}'")));
                }
                if !matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    return Err(ErreurCalc::analyse(format!("'{name}' doit être suivi de '('")));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(tok.clone());
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurCalc::analyse("'(' inattendue après une valeur"));
                }
                ops.push(Tok::LPar);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurCalc::analyse("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurCalc::analyse("')' sans '(' correspondante"));
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Ident(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                // unaire préfixe : rien à dépiler
                ops.push(if matches!(tok, Tok::Minus) {
                    Tok::Neg
                } else {
                    Tok::Pos
                });
            }

            Tok::Star | Tok::Slash if attend_valeur => {
                return Err(ErreurCalc::analyse(format!(
                    "opérande manquant avant '{}'",
                    if matches!(tok, Tok::Star) { '*' } else { '/' }
                )));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                depiler_operateurs(&mut ops, &mut out, precedence(tok));
                ops.push(tok.clone());
                attend_valeur = true;
            }

            Tok::Neg | Tok::Pos => {
                return Err(ErreurCalc::analyse("jeton unaire inattendu en entrée"));
            }
        }
    }

    if attend_valeur {
        return Err(ErreurCalc::analyse(if tokens.is_empty() {
            "Entrée vide"
        } else {
            "expression incomplète"
        }));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::analyse("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN avec une pile de valeurs (sans récursion : "1+1+…+1" sur
/// des milliers de termes ne consomme que du tas).
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<Nombre, ErreurCalc> {
    let invalide = || ErreurCalc::analyse("expression invalide");
    let mut st: Vec<Nombre> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push(n.clone()),

            Tok::Neg => {
                let x = st.pop().ok_or_else(invalide)?;
                st.push(x.oppose());
            }
            // +x : identité
            Tok::Pos => {
                if st.is_empty() {
                    return Err(invalide());
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(invalide)?;
                let a = st.pop().ok_or_else(invalide)?;

                st.push(match tok {
                    Tok::Plus => a.additionner(b)?,
                    Tok::Minus => a.soustraire(b)?,
                    Tok::Star => a.multiplier(b)?,
                    _ => a.diviser(b)?,
                });
            }

            Tok::Ident(name) => {
                let x = st.pop().ok_or_else(|| {
                    ErreurCalc::analyse(format!("fonction '{name}' sans argument"))
                })?;
                st.push(match name.as_str() {
                    "sq" => x.carre()?,
                    "sqrt" => x.racine()?,
                    _ => {
                        return Err(ErreurCalc::analyse(format!(
                            "identifiant inconnu: '{name}'"
                        )))
                    }
                });
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalc::analyse("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(invalide()),
    }
}
