// src/main.rs
//
// Calculatrice F64 — point d'entrée natif
// ---------------------------------------
// But:
// - eframe::run_native + NativeOptions
// - tracing_subscriber initialisé AVANT la première frame
//   (RUST_LOG=calculatrice_f64=debug pour tracer le pipeline)

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice F64";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
