// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurCalc;
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    // Fonctions : seuls sq / sqrt sont acceptés par rpn.rs
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,

    // Unaires : jamais produits par tokenize, seulement par to_rpn
    Neg,
    Pos,

    LPar,
    RPar,
}

/// Glyphes d’affichage -> opérateurs évaluables (÷ -> /, × -> *).
pub fn traduire_glyphes(s: &str) -> String {
    s.replace('÷', "/").replace('×', "*")
}

/// Tokenize une chaîne (déjà traduite) en jetons.
/// Supporte:
/// - entiers (ex: 12) -> Entier exact ; zéros non significatifs refusés (07)
/// - réels (ex: 1.5, 5., .5, 1.234568e+10) -> Reel
/// - opérateurs + - * /
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]*
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (n, suivant) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = suivant;
            continue;
        }

        return Err(ErreurCalc::analyse(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Lit un littéral à partir de `start` : chiffres [ '.' chiffres ] [ e[+-]chiffres ].
/// Retourne le nombre et l’indice du caractère suivant.
fn lire_nombre(chars: &[char], start: usize) -> Result<(Nombre, usize), ErreurCalc> {
    let mut i = start;
    let mut chiffres = 0usize;
    let mut reel = false;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
        chiffres += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        reel = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
            chiffres += 1;
        }
    }
    if chiffres == 0 {
        return Err(ErreurCalc::analyse("nombre invalide: '.'"));
    }

    // exposant seulement s’il est complet (e, signe optionnel, au moins un chiffre)
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            reel = true;
            i = j;
        }
    }

    let texte: String = chars[start..i].iter().collect();

    if reel {
        let x: f64 = texte
            .parse()
            .map_err(|_| ErreurCalc::analyse(format!("nombre invalide: '{texte}'")))?;
        return Ok((Nombre::Reel(x), i));
    }

    if texte.len() > 1 && texte.starts_with('0') && texte.chars().any(|c| c != '0') {
        return Err(ErreurCalc::analyse(format!(
            "zéros non significatifs: '{texte}'"
        )));
    }
    let n = BigInt::parse_bytes(texte.as_bytes(), 10)
        .ok_or_else(|| ErreurCalc::analyse(format!("nombre invalide: '{texte}'")))?;
    Ok((Nombre::Entier(n), i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
