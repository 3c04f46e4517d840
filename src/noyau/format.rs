// src/noyau/format.rs
//
// Politique d’affichage des résultats.
// - repr_reel : écriture “canonique” d’un réel (la plus courte qui relit la même valeur)
// - format_resultat : troncature pour l’afficheur (perte volontaire, affichage seulement)

/// Au-delà de cette longueur de partie entière, on passe en notation scientifique.
const LARGEUR_ENTIERE_MAX: usize = 10;

/// Longueur max (caractères) d’un résultat affiché en notation normale.
const LARGEUR_AFFICHAGE: usize = 11;

/// Chiffres après la virgule en notation scientifique.
const CHIFFRES_SCI: usize = 6;

/* ------------------------ Réels ------------------------ */

/// Écriture d’un réel :
/// - chiffres les plus courts qui relisent la même valeur
/// - notation fixe si l’exposant décimal est dans [-4, 16), toujours avec une partie décimale (3.0)
/// - sinon notation scientifique d.ddde±XX (1e+16, 1.5e-05)
pub fn repr_reel(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // "{:e}" donne déjà les chiffres minimaux : "-1.2345e3", "0e0"
    let brut = format!("{x:e}");
    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut.as_str()),
    };

    let (mantisse, exposant) = corps.split_once('e').unwrap_or((corps, "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();

    let corps = if (-4..16).contains(&exposant) {
        notation_fixe(&chiffres, exposant)
    } else {
        notation_sci(&chiffres, exposant)
    };

    format!("{signe}{corps}")
}

fn notation_fixe(chiffres: &str, exposant: i32) -> String {
    if exposant < 0 {
        let zeros = "0".repeat(exposant.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{chiffres}");
    }

    let virgule = exposant as usize + 1;
    if chiffres.len() > virgule {
        format!("{}.{}", &chiffres[..virgule], &chiffres[virgule..])
    } else {
        let zeros = "0".repeat(virgule - chiffres.len());
        format!("{chiffres}{zeros}.0")
    }
}

fn notation_sci(chiffres: &str, exposant: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    if reste.is_empty() {
        format!("{tete}{}", suffixe_exposant(exposant))
    } else {
        format!("{tete}.{reste}{}", suffixe_exposant(exposant))
    }
}

/// e+05, e-12, e+123 : signe toujours présent, au moins deux chiffres.
fn suffixe_exposant(e: i32) -> String {
    let signe = if e < 0 { '-' } else { '+' };
    format!("e{signe}{:02}", e.unsigned_abs())
}

/// Notation scientifique à `decimales` chiffres après la virgule (1.234568e+10).
pub fn format_scientifique(x: f64, decimales: usize) -> String {
    if !x.is_finite() {
        return repr_reel(x);
    }

    let brut = format!("{x:.decimales$e}");
    match brut.split_once('e') {
        Some((mantisse, exposant)) => {
            let e: i32 = exposant.parse().unwrap_or(0);
            format!("{mantisse}{}", suffixe_exposant(e))
        }
        None => brut,
    }
}

/* ------------------------ Afficheur ------------------------ */

/// Met un résultat brut en forme pour l’afficheur.
///
/// - non numérique : rendu tel quel
/// - partie entière (avant le premier '.') de plus de 10 caractères : scientifique, 6 décimales
/// - sinon : les 11 premiers caractères
pub fn format_resultat(brut: &str) -> String {
    let Ok(nombre) = brut.trim().parse::<f64>() else {
        return brut.to_string();
    };

    let partie_entiere = brut.split('.').next().unwrap_or("");
    if partie_entiere.chars().count() > LARGEUR_ENTIERE_MAX {
        format_scientifique(nombre, CHIFFRES_SCI)
    } else {
        brut.chars().take(LARGEUR_AFFICHAGE).collect()
    }
}
