//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des suites de touches sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE événement

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::moteur::{Evenement, Moteur, Unaire, SENTINELLE_ERREUR};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_evenement(rng: &mut Rng) -> Evenement {
    // chiffres surreprésentés : sinon presque tout finit en erreur d’analyse
    match rng.pick(20) {
        0..=7 => Evenement::Ajouter(rng.pick(10).to_string()),
        8 => Evenement::Ajouter(".".into()),
        9 => Evenement::Ajouter("(".into()),
        10 => Evenement::Ajouter(")".into()),
        11 => {
            let op = ["+", "-", "×", "÷"][rng.pick(4) as usize];
            Evenement::Ajouter(op.into())
        }
        12 => Evenement::Effacer,
        13 => Evenement::RetourArriere,
        14 => Evenement::Pourcentage,
        15 => Evenement::InverserSigne,
        16 => Evenement::Unaire(Unaire::Carre),
        17 => Evenement::Unaire(Unaire::Racine),
        _ => Evenement::Evaluer,
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_courant(m: &Moteur) {
    assert!(
        !m.courant().contains(['×', '÷', '(', ')']),
        "opérateur dans l’opérande: {:?}",
        m.courant()
    );
}

fn applique_et_verifie(m: &mut Moteur, evt: &Evenement) -> Result<(), ErreurCalc> {
    let avant = m.clone();
    let res = m.appliquer(evt);

    check_courant(m);

    match (evt, &res) {
        (Evenement::Evaluer, Ok(())) => {
            assert_eq!(m.historique().len(), avant.historique().len() + 1);
            assert!(m.vient_d_evaluer());
            let derniere = m.historique().last().map(String::as_str).unwrap_or("");
            assert!(derniere.contains(" = "), "entrée mal formée: {derniere:?}");
        }
        (Evenement::Evaluer, Err(e)) => {
            assert!(
                matches!(e, ErreurCalc::Analyse(_) | ErreurCalc::Arithmetique(_)),
                "genre inattendu: {e:?}"
            );
            assert_eq!(m.courant(), SENTINELLE_ERREUR);
            assert_eq!(m.historique(), avant.historique());
            assert_eq!(m.vient_d_evaluer(), avant.vient_d_evaluer());
        }
        (Evenement::Pourcentage, Err(e)) => {
            assert!(matches!(e, ErreurCalc::FormatNumerique(_)), "genre inattendu: {e:?}");
            assert_eq!(m.courant(), SENTINELLE_ERREUR);
            assert_eq!(m.total(), avant.total());
        }
        (_, Err(e)) => panic!("seuls = et % peuvent échouer: {evt:?} -> {e:?}"),
        (Evenement::Effacer | Evenement::RetourArriere, Ok(())) => {
            assert_eq!(m.vient_d_evaluer(), avant.vient_d_evaluer());
            assert_eq!(m.historique(), avant.historique());
        }
        (Evenement::Unaire(_), Ok(())) => assert!(m.vient_d_evaluer()),
        (Evenement::Ajouter(_), Ok(())) => assert!(!m.vient_d_evaluer()),
        _ => {}
    }

    res
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_par_touche() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut m = Moteur::new();
        let longueur = 1 + rng.pick(30);
        for _ in 0..longueur {
            let evt = gen_evenement(&mut rng);
            let est_eval = evt == Evenement::Evaluer;
            match applique_et_verifie(&mut m, &evt) {
                Ok(()) if est_eval => seen_ok += 1,
                Err(_) => seen_err += 1,
                _ => {}
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    fn rejoue(seed: u64) -> (String, String, Vec<String>) {
        let mut rng = Rng::new(seed);
        let mut m = Moteur::new();
        for _ in 0..300 {
            let evt = gen_evenement(&mut rng);
            let _ = m.appliquer(&evt);
        }
        (m.total().to_string(), m.courant().to_string(), m.historique().to_vec())
    }

    // Même seed => mêmes touches => même état
    assert_eq!(rejoue(0xBADC0DE), rejoue(0xBADC0DE));
}

#[test]
fn fuzz_safe_chaines_de_carres_bornees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // sq(sq(sq(...))) : le garde-fou doit couper avant de geler
    let mut m = Moteur::new();
    m.add_to_expression("9");
    m.apply_unary(Unaire::Carre);
    for _ in 0..40 {
        budget(t0, max);
        m.apply_unary(Unaire::Carre);
    }
    match m.evaluate() {
        Err(ErreurCalc::Arithmetique(_)) => {}
        autre => panic!("dépassement attendu, obtenu {autre:?}"),
    }
    assert_eq!(m.courant(), SENTINELLE_ERREUR);
}
