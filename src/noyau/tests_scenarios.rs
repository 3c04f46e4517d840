//! Tests de scénarios (campagne) : suites de touches complètes, du pavé jusqu’à l’historique.
//!
//! Notation compacte d’une suite (un caractère = une touche) :
//! - chiffres . ( ) + - × ÷ : ajout à l’expression
//! - C effacer, ← retour arrière, % pourcentage, ± inversion de signe
//! - ² carré, √ racine, = évaluation
//!
//! Notes (comportement actuel du moteur, volontairement conservé) :
//! - "(" tapé en premier flushe le "0" initial : "0(" est une multiplication implicite, donc refusée.
//! - Après une erreur, "Error" reste l’opérande : il faut C avant de retaper.
//! - Un opérateur après "=" prolonge le total, un chiffre repart d’un opérande neuf.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval::eval_expression;
use super::moteur::{Evenement, Moteur, Unaire, SENTINELLE_ERREUR};

fn evenement(c: char) -> Evenement {
    match c {
        'C' => Evenement::Effacer,
        '←' => Evenement::RetourArriere,
        '%' => Evenement::Pourcentage,
        '±' => Evenement::InverserSigne,
        '²' => Evenement::Unaire(Unaire::Carre),
        '√' => Evenement::Unaire(Unaire::Racine),
        '=' => Evenement::Evaluer,
        autre => Evenement::Ajouter(autre.to_string()),
    }
}

/// Joue la suite ; retourne la dernière erreur rencontrée (s’il y en a).
fn jouer(m: &mut Moteur, suite: &str) -> Option<ErreurCalc> {
    let mut derniere = None;
    for c in suite.chars() {
        if let Err(e) = m.appliquer(&evenement(c)) {
            derniere = Some(e);
        }
    }
    derniere
}

fn scenario_ok(suite: &str) -> Moteur {
    let mut m = Moteur::new();
    if let Some(e) = jouer(&mut m, suite) {
        panic!("suite={suite:?} err={e}");
    }
    m
}

fn assert_affiche(suite: &str, attendu: &str) {
    let m = scenario_ok(suite);
    assert_eq!(m.courant(), attendu, "suite={suite:?}");
}

fn assert_derniere_entree(m: &Moteur, attendu: &str) {
    assert_eq!(
        m.historique().last().map(String::as_str),
        Some(attendu),
        "historique={:?}",
        m.historique()
    );
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn scen_priorites() {
    assert_affiche("2+3×4=", "14");
    assert_affiche("←(2+3)×4=", "20");
    assert_affiche("8-2-1=", "5");
    assert_affiche("2×-3=", "-6");
}

#[test]
fn scen_entiers_exacts_et_reels() {
    let m = scenario_ok("99999×99999=");
    assert_eq!(m.courant(), "9999800001");
    assert_derniere_entree(&m, "99999×99999 = 9999800001");

    // la division produit toujours un réel
    assert_affiche("1÷4=", "0.25");
    assert_affiche("8÷4=", "2.0");

    let m = scenario_ok("0.1+0.2=");
    assert_eq!(m.courant(), "0.300000000");
    assert_eq!(m.dernier_resultat(), "0.30000000000000004");
}

#[test]
fn scen_grand_entier_en_scientifique() {
    let m = scenario_ok("123456×123456=");
    assert_eq!(m.courant(), "1.524138e+10");
    assert_eq!(m.dernier_resultat(), "15241383936");
    assert_derniere_entree(&m, "123456×123456 = 15241383936");
}

/* ------------------------ Enchaînements ------------------------ */

#[test]
fn scen_enchainement_par_operateur() {
    let m = scenario_ok("7÷3=×3=");
    assert_eq!(m.total(), "7÷3×3");
    assert_eq!(m.courant(), "7.0");
    assert_eq!(m.historique().len(), 2);
}

#[test]
fn scen_unaire_sur_resultat() {
    let m = scenario_ok("2×3=²=");
    assert_eq!(
        m.historique(),
        &["2×3 = 6".to_string(), "sq(6) = 36".to_string()]
    );
    assert_eq!(m.courant(), "36");
}

#[test]
fn scen_resultat_scientifique_relu() {
    // l’opérande affiché "1.234568e+10" est repris tel quel par x²
    let m = scenario_ok("12345678901.5=²=");
    assert_derniere_entree(&m, "sq(1.234568e+10) = 1.524158146624e+20");
    // partie entière d’un seul chiffre : simple troncature
    assert_eq!(m.courant(), "1.524158146");
}

#[test]
fn scen_pourcentage_dans_une_somme() {
    let m = scenario_ok("5+50%=");
    assert_derniere_entree(&m, "5+0.5 = 5.5");
    assert_eq!(m.courant(), "5.5");
}

#[test]
fn scen_racine_de_carre() {
    let m = scenario_ok("3²√=");
    assert_eq!(m.total(), "sqrt(sq(3))");
    assert_eq!(m.courant(), "3.0");
}

/* ------------------------ Erreurs et reprise ------------------------ */

#[test]
fn scen_racine_de_negatif() {
    let mut m = Moteur::new();
    // ± écrit "-(4)" dans le total, ← vide l’opérande, √ enveloppe le total
    let e = jouer(&mut m, "4±←√=");
    assert!(matches!(e, Some(ErreurCalc::Arithmetique(_))), "err={e:?}");
    assert_eq!(m.total(), "sqrt(-(4))");
    assert_eq!(m.courant(), SENTINELLE_ERREUR);
    assert!(m.historique().is_empty());
}

#[test]
fn scen_reprise_apres_erreur() {
    let mut m = Moteur::new();
    assert!(jouer(&mut m, "5÷0=").is_some());
    assert_eq!(m.courant(), SENTINELLE_ERREUR);

    // sans C, le chiffre se colle à la sentinelle
    let mut colle = m.clone();
    jouer(&mut colle, "3");
    assert_eq!(colle.courant(), "Error3");

    assert!(jouer(&mut m, "CC8=").is_none());
    assert_eq!(m.courant(), "8");
    assert_eq!(m.historique(), &["8 = 8".to_string()]);
}

#[test]
fn scen_parenthese_en_premier() {
    let mut m = Moteur::new();
    let e = jouer(&mut m, "(1+2)=");
    assert!(matches!(e, Some(ErreurCalc::Analyse(_))), "err={e:?}");
    assert_eq!(m.total(), "0(1+2)");
}

#[test]
fn scen_operateur_final() {
    let mut m = Moteur::new();
    let e = jouer(&mut m, "1+=");
    assert!(matches!(e, Some(ErreurCalc::Analyse(_))), "err={e:?}");
    assert_eq!(m.total(), "1+");
    assert!(m.historique().is_empty());
}

#[test]
fn scen_pourcentage_sur_point() {
    let mut m = Moteur::new();
    let e = jouer(&mut m, "+.%");
    assert_eq!(e, Some(ErreurCalc::FormatNumerique(".".into())));
    assert_eq!(m.courant(), SENTINELLE_ERREUR);
}

/* ------------------------ Pipeline direct ------------------------ */

#[test]
fn scen_pipeline_refuse_le_hors_grammaire() {
    for expr in ["2**3", "abs(2)", "sq 2", "1;2", "__import__", "2(3)", "(1+2"] {
        assert!(
            matches!(eval_expression(expr), Err(ErreurCalc::Analyse(_))),
            "expr={expr:?}"
        );
    }
}

#[test]
fn scen_pipeline_imbrication_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // ((((1)))) : les parenthèses disparaissent dans la RPN
    for profondeur in [1usize, 8, 32, 64] {
        budget(t0, max);
        let expr = format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur));
        assert_eq!(eval_expression(&expr).as_deref(), Ok("1"), "profondeur={profondeur}");
    }
}

#[test]
fn scen_longue_session_au_pave() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // 100 000 × "+1" : l’évaluation ne doit pas faire tomber le processus
    let mut m = Moteur::new();
    jouer(&mut m, "1");
    for _ in 0..99_999 {
        jouer(&mut m, "+1");
    }
    budget(t0, max);

    assert!(jouer(&mut m, "=").is_none());
    assert_eq!(m.dernier_resultat(), "100000");
    assert_eq!(m.courant(), "100000");
    budget(t0, max);
}
