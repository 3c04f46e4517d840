// src/app.rs
//
// Calculatrice à pavé — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, traité avant le dessin, dans l’ordre d’arrivée) :
// - texte : chiffres ( ) . + - * / (traduits par touches.rs)
// - Enter = "=", Backspace = "←", Escape = "C"

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Evenement;
use touches::evenement_pour_touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for evt in evenements_clavier(ctx) {
            self.traiter(&evt);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

fn evenements_clavier(ctx: &egui::Context) -> Vec<Evenement> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for e in &i.events {
            match e {
                egui::Event::Text(t) => out.extend(t.chars().filter_map(evenement_pour_touche)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push(Evenement::Evaluer),
                    egui::Key::Backspace => out.push(Evenement::RetourArriere),
                    egui::Key::Escape => out.push(Evenement::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
        out
    })
}
