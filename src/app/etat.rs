//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur, relayer les événements, et garder le dernier rendu
//! (total + courant) que la vue dessine.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `Moteur::appliquer`.
//! - Rendu recalculé après CHAQUE événement (pas d’affichage lié au moteur).
//! - Une erreur du moteur est journalisée, jamais propagée à l’UI (la sentinelle suffit).

use tracing::debug;

use crate::config::Config;
use crate::noyau::{Evenement, Moteur, Rendu};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- sorties ---
    pub rendu: Rendu,

    // --- paramètres ---
    pub historique_visible: usize,

    // --- UX ---
    pub afficher_historique: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        let moteur = Moteur::new();
        let rendu = moteur.rendu();
        Self {
            moteur,
            rendu,
            historique_visible: config.historique_visible,
            afficher_historique: false,
        }
    }

    /// Relaye un événement au moteur puis rafraîchit le rendu.
    pub fn traiter(&mut self, evt: &Evenement) {
        if let Err(e) = self.moteur.appliquer(evt) {
            // le moteur a déjà posé la sentinelle et journalisé le détail
            debug!(?evt, erreur = %e, "événement en erreur");
        }
        self.rendu = self.moteur.rendu();
    }

    /// Historique visible (les N derniers calculs), une entrée par ligne.
    pub fn texte_historique(&self) -> String {
        self.moteur
            .historique_recent(self.historique_visible)
            .join("\n")
    }

    pub fn basculer_historique(&mut self) {
        self.afficher_historique = !self.afficher_historique;
    }
}
