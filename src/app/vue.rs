// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Afficheur : total (petit, à droite) + courant (grand, à droite) + bouton 🕘
// - Pavé 6x4 : chaque clic devient un Evenement (touches.rs), relayé par etat.rs
// - Fenêtre d’historique : les N derniers calculs, à la demande
//
// Note :
// - Les clics sont collectés pendant le dessin de la grille, puis traités après
//   (pas de mutation du moteur pendant qu’egui emprunte l’Ui).

use eframe::egui;
use egui::{Align, Color32, Layout, RichText};

use super::etat::AppCalc;
use super::touches::{evenement_pour_bouton, PAVE};

const GRIS_CLAIR: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
const BLANC: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
const BLANC_CASSE: Color32 = Color32::from_rgb(0xF8, 0xFA, 0xFF);
const GRIS_TOTAL: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const COULEUR_LIBELLE: Color32 = Color32::from_rgb(0x25, 0x26, 0x5E);
const VIOLET: Color32 = Color32::from_rgb(0x80, 0x00, 0x80);

const ESPACE_PAVE: f32 = 4.0;
const HAUTEUR_TOUCHE: f32 = 48.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE_PAVE, ESPACE_PAVE);

        self.ui_afficheur(ui);
        ui.add_space(6.0);
        self.ui_pave(ui);

        self.ui_historique(ui.ctx());
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(GRIS_CLAIR)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    let bouton = ui
                        .add(egui::Button::new(RichText::new("🕘").size(12.0)).frame(false))
                        .on_hover_text("Historique");
                    if bouton.clicked() {
                        self.basculer_historique();
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(&self.rendu.total)
                                .size(16.0)
                                .color(GRIS_TOTAL),
                        );
                    });
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.rendu.courant)
                            .size(32.0)
                            .strong()
                            .color(COULEUR_LIBELLE),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = ((ui.available_width() - 3.0 * ESPACE_PAVE) / 4.0).max(40.0);
        let mut clics: Vec<&'static str> = Vec::new();

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACE_PAVE, ESPACE_PAVE])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for label in ligne {
                        if Self::touche(ui, label, largeur).clicked() {
                            clics.push(label);
                        }
                    }
                    ui.end_row();
                }
            });

        for label in clics {
            if let Some(evt) = evenement_pour_bouton(label) {
                self.traiter(&evt);
            }
        }
    }

    fn touche(ui: &mut egui::Ui, label: &str, largeur: f32) -> egui::Response {
        let chiffre = label.chars().all(|c| c.is_ascii_digit());
        let egal = label == "=";

        let (fond, texte) = if egal {
            (VIOLET, Color32::WHITE)
        } else if chiffre {
            (BLANC, COULEUR_LIBELLE)
        } else {
            (BLANC_CASSE, COULEUR_LIBELLE)
        };
        let taille = if chiffre { 22.0 } else { 20.0 };

        let mut riche = RichText::new(label).size(taille).color(texte);
        if chiffre {
            riche = riche.strong();
        }

        ui.add_sized(
            [largeur, HAUTEUR_TOUCHE],
            egui::Button::new(riche).fill(fond),
        )
    }

    fn ui_historique(&mut self, ctx: &egui::Context) {
        if !self.afficher_historique {
            return;
        }

        let texte = self.texte_historique();
        let mut ouvert = true;

        egui::Window::new("Historique")
            .open(&mut ouvert)
            .default_size([300.0, 400.0])
            .show(ctx, |ui| {
                if texte.is_empty() {
                    ui.label("Aucun calcul");
                } else {
                    ui.label(RichText::new(&texte).size(14.0));
                }
            });

        self.afficher_historique = ouvert;
    }
}
