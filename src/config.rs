//! Configuration : fichier TOML (facultatif) + options de ligne de commande.
//!
//! Fichier par défaut : `<config_dir>/calculatrice_pave/config.toml`.
//! Toutes les clés ont une valeur par défaut ; un fichier partiel suffit.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use tracing::info;

/// Nombre de calculs montrés dans la fenêtre d’historique.
const HISTORIQUE_VISIBLE_DEFAUT: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin} impossible : {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config TOML invalide : {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub historique_visible: usize,
    pub fenetre: ConfigFenetre,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFenetre {
    pub titre: String,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            historique_visible: HISTORIQUE_VISIBLE_DEFAUT,
            fenetre: ConfigFenetre::default(),
        }
    }
}

impl Default for ConfigFenetre {
    fn default() -> Self {
        Self {
            titre: "Calculatrice".to_string(),
            largeur: 280.0,
            hauteur: 450.0,
        }
    }
}

impl Config {
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice_pave").join("config.toml"))
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }

    /// Charge la configuration.
    /// - chemin explicite : doit exister
    /// - chemin par défaut absent : valeurs par défaut
    pub fn charger(chemin: Option<&Path>) -> Result<Self, ErreurConfig> {
        let (chemin, explicite) = match chemin {
            Some(c) => (c.to_path_buf(), true),
            None => match Self::chemin_defaut() {
                Some(c) => (c, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicite && !chemin.exists() {
            info!(chemin = %chemin.display(), "pas de fichier de config, valeurs par défaut");
            return Ok(Self::default());
        }

        let texte = fs::read_to_string(&chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.clone(),
            source,
        })?;
        let config = Self::depuis_toml(&texte)?;
        info!(chemin = %chemin.display(), "config chargée");
        Ok(config)
    }
}

/// Calculatrice à pavé : moteur d’expression + interface egui.
#[derive(Parser, Debug)]
#[command(name = "calculatrice_pave", version, about)]
pub struct Options {
    /// Fichier de configuration TOML.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rejoue une suite de touches sans fenêtre (ex: "1 + 2 =" ou "9 √x =").
    #[arg(short, long)]
    pub touches: Option<String>,

    /// Nombre de calculs visibles dans l’historique (remplace la config).
    #[arg(long)]
    pub historique: Option<usize>,
}

impl Options {
    /// Applique les options qui surchargent la configuration.
    pub fn surcharger(&self, config: &mut Config) {
        if let Some(n) = self.historique {
            config.historique_visible = n;
        }
    }
}
