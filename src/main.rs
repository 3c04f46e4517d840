// src/main.rs
//
// Calculatrice à pavé — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap + config TOML + journal tracing,
//   puis eframe::run_native (ou mode console avec --touches)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod config;
mod console;
mod noyau;

use app::AppCalc;
use config::Config;

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use config::Options;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let options = Options::parse();

    let mut config = Config::charger(options.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(erreur = %e, "config ignorée, valeurs par défaut");
        Config::default()
    });
    options.surcharger(&mut config);

    let mut app = AppCalc::new(&config);

    // Mode console : pas de fenêtre
    if let Some(sequence) = options.touches.as_deref() {
        print!("{}", console::executer(sequence, &mut app)?);
        return Ok(());
    }

    let fenetre = &config.fenetre;
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(fenetre.titre.as_str())
            .with_inner_size([fenetre.largeur, fenetre.hauteur])
            .with_min_inner_size([240.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &fenetre.titre,
        native,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("fenêtre eframe : {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Config};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let config = Config::default();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;
        d.set_title(&config.fenetre.titre);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let app = AppCalc::new(&config);

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |_cc| Ok(Box::new(app))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
