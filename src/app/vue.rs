// src/app/vue.rs
//
// Vue (UI egui) — pavé de calculatrice
// ------------------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour les boutons et le clavier
// - Clavier : chiffres/opérateurs/parenthèses au fil de la frappe,
//   Enter ou '=' évalue, Backspace efface le dernier caractère
// - Tactile : gros boutons
//
// Note :
// - `calculer()` est le SEUL endroit où la vue touche le noyau :
//   expression normalisée -> eval_expression_finie -> format ou erreur.

use eframe::egui;
use tracing::debug;

use super::etat::{AppCalc, Constante, FonctionSci};
use super::format::format_resultat;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice F64");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_memoire_et_mode(ui);

                ui.add_space(4.0);

                self.ui_scientifique(ui);

                ui.add_space(8.0);

                self.ui_pave_principal(ui);
            });
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // ligne expression (petite), puis entrée en cours (grande)
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(if self.expression.is_empty() {
                            " "
                        } else {
                            self.expression.as_str()
                        })
                        .monospace()
                        .weak(),
                    );
                    ui.label(egui::RichText::new(&self.courant).monospace().size(28.0));
                });
            });
    }

    /* ------------------------ Rangées de boutons ------------------------ */

    fn ui_memoire_et_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if Self::bouton(ui, "MC", "Efface la mémoire") {
                self.memoire_effacer();
            }
            if Self::bouton(ui, "MR", "Rappelle la mémoire") {
                self.memoire_rappel();
            }
            if Self::bouton(ui, "M+", "Ajoute l'entrée à la mémoire") {
                self.memoire_ajouter();
            }
            if Self::bouton(ui, "M−", "Soustrait l'entrée de la mémoire") {
                self.memoire_soustraire();
            }
            if Self::bouton(ui, "MS", "Stocke l'entrée en mémoire") {
                self.memoire_stocker();
            }

            ui.separator();

            // Deg / Rad (exclusifs)
            if ui.selectable_label(!self.mode_radians, "Deg").clicked() {
                self.regler_mode_radians(false);
            }
            if ui.selectable_label(self.mode_radians, "Rad").clicked() {
                self.regler_mode_radians(true);
            }
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let fonctions: [(&str, FonctionSci); 9] = [
                ("sin", FonctionSci::Sin),
                ("cos", FonctionSci::Cos),
                ("tan", FonctionSci::Tan),
                ("asin", FonctionSci::Asin),
                ("acos", FonctionSci::Acos),
                ("atan", FonctionSci::Atan),
                ("log", FonctionSci::Log),
                ("ln", FonctionSci::Ln),
                ("√", FonctionSci::Sqrt),
            ];
            for (label, f) in fonctions {
                if Self::bouton(ui, label, "Applique à l'entrée en cours") {
                    self.appliquer_fonction(f);
                }
            }

            ui.separator();

            if Self::bouton(ui, "x!", "Factorielle de l'entrée") {
                self.factorielle();
            }
            if Self::bouton(ui, "%", "Entrée divisée par 100") {
                self.pourcent();
            }
            if Self::bouton(ui, "±", "Change le signe de l'entrée") {
                self.basculer_signe();
            }
            if Self::bouton(ui, "π", "Insère π") {
                self.saisir_constante(Constante::Pi);
            }
            if Self::bouton(ui, "e", "Insère e") {
                self.saisir_constante(Constante::E);
            }
        });
    }

    fn ui_pave_principal(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_f64")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                if Self::bouton(ui, "AC", "Remise à zéro (la mémoire survit)") {
                    self.effacer_tout();
                }
                if Self::bouton(ui, "DEL", "Efface le dernier caractère") {
                    self.effacer_dernier();
                }
                if Self::bouton(ui, "(", "") {
                    self.saisir_parenthese('(');
                }
                if Self::bouton(ui, ")", "") {
                    self.saisir_parenthese(')');
                }
                ui.end_row();

                self.rangee_chiffres(ui, ['7', '8', '9'], '/');
                self.rangee_chiffres(ui, ['4', '5', '6'], '*');
                self.rangee_chiffres(ui, ['1', '2', '3'], '-');

                if Self::bouton(ui, "0", "") {
                    self.saisir_chiffre('0');
                }
                if Self::bouton(ui, ".", "") {
                    self.saisir_point();
                }
                if Self::bouton(ui, "^", "Puissance") {
                    self.saisir_puissance();
                }
                if Self::bouton(ui, "+", "") {
                    self.saisir_operateur('+');
                }
                ui.end_row();
            });

        ui.add_space(4.0);

        let egal = ui.add_sized(
            [ui.available_width().min(240.0), 34.0],
            egui::Button::new("="),
        );
        if egal.clicked() {
            self.calculer();
        }
    }

    fn rangee_chiffres(&mut self, ui: &mut egui::Ui, chiffres: [char; 3], op: char) {
        for c in chiffres {
            if Self::bouton(ui, &c.to_string(), "") {
                self.saisir_chiffre(c);
            }
        }
        // dernière colonne : l'opérateur, avec son glyphe d'affichage
        let glyphe = match op {
            '/' => "÷",
            '*' => "×",
            '-' => "−",
            _ => "+",
        };
        if Self::bouton(ui, glyphe, "") {
            self.saisir_operateur(op);
        }
        ui.end_row();
    }

    fn bouton(ui: &mut egui::Ui, label: &str, tip: &str) -> bool {
        let resp = ui.add_sized([52.0, 30.0], egui::Button::new(label));
        let resp = if tip.is_empty() {
            resp
        } else {
            resp.on_hover_text(tip)
        };
        resp.clicked()
    }

    /* ------------------------ Clavier ------------------------ */

    fn clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche(c);
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.calculer(),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.effacer_dernier(),
                _ => {}
            }
        }
    }

    /// Une touche "texte" du clavier physique (même mappage que les boutons).
    fn touche(&mut self, c: char) {
        match c {
            '0'..='9' => self.saisir_chiffre(c),
            '.' => self.saisir_point(),
            '+' | '-' | '*' | '/' => self.saisir_operateur(c),
            '^' => self.saisir_puissance(),
            '(' | ')' => self.saisir_parenthese(c),
            '=' => self.calculer(),
            _ => {}
        }
    }

    /* ------------------------ Pont vers le noyau ------------------------ */

    /// Évalue l'expression complète via le noyau, puis dépose le résultat
    /// formaté (ou l'état d'erreur) dans l'état UI.
    pub(crate) fn calculer(&mut self) {
        let complete = self.expression_complete();
        if complete.is_empty() {
            return;
        }

        match crate::noyau::eval_expression_finie(&complete) {
            Ok(v) => self.deposer_resultat(format_resultat(v)),
            Err(e) => {
                debug!(expression = %complete, erreur = %e, "évaluation refusée");
                self.deposer_erreur();
            }
        }
    }
}
