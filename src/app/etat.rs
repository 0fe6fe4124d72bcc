//! src/app/etat.rs
//!
//! État calculatrice (sans vue, sans noyau).
//!
//! Rôle : porter l'état que la source gardait en globales (entrée en cours,
//! expression accumulée, registre mémoire, mode d'angle, dernier résultat)
//! et offrir les opérations "boutons" correspondantes.
//!
//! Contrats :
//! - Aucune évaluation d'expression ici (pas de noyau, pas de parsing
//!   d'infixe) ; les fonctions scientifiques n'agissent que sur l'entrée
//!   en cours, jamais sur l'expression.
//! - Actions déterministes, sans effet de bord caché.
//! - L'expression affichée porte les glyphes × ÷ − ; la normalisation
//!   ASCII se fait dans `expression_complete()` juste avant le noyau.

use super::format::format_resultat;

/// Texte d'état d'erreur affiché à la place de l'entrée.
pub const AFFICHAGE_ERREUR: &str = "Erreur";

/// Garde-fou factorielle (au-delà, f64 déborde de toute façon).
const FACTORIELLE_MAX: i64 = 170;

/// Fonctions scientifiques "un coup" : appliquées à l'entrée en cours.
#[derive(Clone, Copy, Debug)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
}

#[derive(Clone, Copy, Debug)]
pub enum Constante {
    Pi,
    E,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub courant: String,    // entrée en cours ("0" au repos)
    pub expression: String, // expression accumulée (avec glyphes d'affichage)

    // --- registres ---
    pub memoire: f64,
    pub mode_radians: bool,

    // --- dernier résultat déposé (Some => la prochaine saisie repart à neuf) ---
    pub dernier_resultat: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            courant: "0".to_string(),
            expression: String::new(),
            memoire: 0.0,
            mode_radians: false, // degrés par défaut, comme la source
            dernier_resultat: None,
        }
    }
}

impl AppCalc {
    /* ------------------------ Saisie chiffres / point ------------------------ */

    pub fn saisir_chiffre(&mut self, chiffre: char) {
        debug_assert!(chiffre.is_ascii_digit());

        if self.courant == "0" || self.courant == AFFICHAGE_ERREUR || self.dernier_resultat.is_some()
        {
            self.courant = chiffre.to_string();
            self.dernier_resultat = None;
        } else {
            self.courant.push(chiffre);
        }
    }

    pub fn saisir_point(&mut self) {
        if self.dernier_resultat.is_some() || self.courant == AFFICHAGE_ERREUR {
            self.courant = "0.".to_string();
            self.dernier_resultat = None;
        } else if !self.courant.contains('.') {
            self.courant.push('.');
        }
    }

    /* ------------------------ Opérateurs / parenthèses ------------------------ */

    /// Pousse l'entrée en cours puis l'opérateur (glyphe d'affichage) dans
    /// l'expression. `op` est l'un de '+', '-', '*', '/'.
    pub fn saisir_operateur(&mut self, op: char) {
        if self.courant == AFFICHAGE_ERREUR {
            return;
        }
        self.expression
            .push_str(&format!("{} {} ", self.courant, glyphe_operateur(op)));
        self.courant = "0".to_string();
        self.dernier_resultat = None;
    }

    pub fn saisir_puissance(&mut self) {
        if self.courant == AFFICHAGE_ERREUR {
            return;
        }
        self.expression.push_str(&format!("{} ^ ", self.courant));
        self.courant = "0".to_string();
        self.dernier_resultat = None;
    }

    /// '(' : multiplication implicite si une valeur est déjà saisie
    /// ("2 (" devient "2 × ("). ')' : pousse l'entrée puis ferme.
    pub fn saisir_parenthese(&mut self, paren: char) {
        if paren == '(' {
            if self.courant == "0" {
                self.expression.push_str("( ");
            } else {
                self.expression.push_str(&format!("{} × ( ", self.courant));
                self.courant = "0".to_string();
            }
        } else {
            self.expression.push_str(&format!("{} ) ", self.courant));
            self.courant = "0".to_string();
        }
    }

    /* ------------------------ Transformations de l'entrée ------------------------ */

    pub fn basculer_signe(&mut self) {
        if self.courant == "0" || self.courant == AFFICHAGE_ERREUR {
            return;
        }
        if let Some(reste) = self.courant.strip_prefix('-') {
            self.courant = reste.to_string();
        } else {
            self.courant.insert(0, '-');
        }
    }

    pub fn pourcent(&mut self) {
        match self.courant.parse::<f64>() {
            Ok(v) => {
                self.courant = format_resultat(v / 100.0);
                self.dernier_resultat = Some(self.courant.clone());
            }
            Err(_) => self.courant = AFFICHAGE_ERREUR.to_string(),
        }
    }

    pub fn factorielle(&mut self) {
        let n = match self.courant.parse::<f64>() {
            Ok(v) => v.trunc() as i64,
            Err(_) => {
                self.courant = AFFICHAGE_ERREUR.to_string();
                return;
            }
        };

        if !(0..=FACTORIELLE_MAX).contains(&n) {
            self.courant = AFFICHAGE_ERREUR.to_string();
            return;
        }

        let mut resultat = 1.0_f64;
        for i in 2..=n {
            resultat *= i as f64;
        }
        self.courant = format_resultat(resultat);
        self.dernier_resultat = Some(self.courant.clone());
    }

    /// Applique une fonction scientifique à l'entrée en cours (jamais à
    /// l'expression). Les angles respectent le mode Deg/Rad.
    pub fn appliquer_fonction(&mut self, f: FonctionSci) {
        use std::f64::consts::PI;

        let v = match self.courant.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                self.courant = AFFICHAGE_ERREUR.to_string();
                return;
            }
        };

        let en_radians = |x: f64, radians: bool| if radians { x } else { x * PI / 180.0 };
        let depuis_radians = |x: f64, radians: bool| if radians { x } else { x * 180.0 / PI };

        let resultat = match f {
            FonctionSci::Sin => en_radians(v, self.mode_radians).sin(),
            FonctionSci::Cos => en_radians(v, self.mode_radians).cos(),
            FonctionSci::Tan => en_radians(v, self.mode_radians).tan(),
            FonctionSci::Asin => depuis_radians(v.asin(), self.mode_radians),
            FonctionSci::Acos => depuis_radians(v.acos(), self.mode_radians),
            FonctionSci::Atan => depuis_radians(v.atan(), self.mode_radians),
            FonctionSci::Log => v.log10(),
            FonctionSci::Ln => v.ln(),
            FonctionSci::Sqrt => v.sqrt(),
        };

        if resultat.is_finite() {
            self.courant = format_resultat(resultat);
        } else {
            self.courant = AFFICHAGE_ERREUR.to_string();
        }
        self.dernier_resultat = Some(self.courant.clone());
    }

    pub fn saisir_constante(&mut self, c: Constante) {
        // la constante entre comme texte numérique : le tokenizer ne voit
        // jamais un nom
        let v = match c {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        };
        self.courant = format_resultat(v);
        self.dernier_resultat = Some(self.courant.clone());
    }

    /* ------------------------ Effacement ------------------------ */

    /// AC : remise à zéro (la mémoire survit, comme la source).
    pub fn effacer_tout(&mut self) {
        self.courant = "0".to_string();
        self.expression.clear();
        self.dernier_resultat = None;
    }

    /// DEL : retire le dernier caractère, plancher à "0".
    pub fn effacer_dernier(&mut self) {
        if self.courant == AFFICHAGE_ERREUR || self.courant.chars().count() <= 1 {
            self.courant = "0".to_string();
        } else {
            self.courant.pop();
        }
    }

    /* ------------------------ Registre mémoire ------------------------ */

    fn courant_ou_zero(&self) -> f64 {
        self.courant.parse::<f64>().unwrap_or(0.0)
    }

    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    pub fn memoire_rappel(&mut self) {
        self.courant = format_resultat(self.memoire);
        self.dernier_resultat = Some(self.courant.clone());
    }

    pub fn memoire_ajouter(&mut self) {
        self.memoire += self.courant_ou_zero();
    }

    pub fn memoire_soustraire(&mut self) {
        self.memoire -= self.courant_ou_zero();
    }

    pub fn memoire_stocker(&mut self) {
        self.memoire = self.courant_ou_zero();
    }

    /* ------------------------ Mode d'angle ------------------------ */

    pub fn regler_mode_radians(&mut self, radians: bool) {
        self.mode_radians = radians;
    }

    /* ------------------------ Pont vers le noyau ------------------------ */

    /// Expression complète normalisée pour le noyau : glyphes d'affichage
    /// remplacés par les opérateurs ASCII, espaces retirés. Contrat
    /// collaborateur : c'est la SEULE forme que le noyau reçoit.
    pub fn expression_complete(&self) -> String {
        // une entrée restée à "0" juste après une ')' est un artefact de
        // saisie, pas un opérande
        let courant = if self.courant == "0" && self.expression.trim_end().ends_with(')') {
            ""
        } else {
            self.courant.as_str()
        };

        let brute = format!("{}{}", self.expression, courant);
        brute
            .replace('×', "*")
            .replace('÷', "/")
            .replace('−', "-")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// Dépose un résultat formaté : l'expression est consommée, l'entrée
    /// en cours devient le résultat.
    pub fn deposer_resultat(&mut self, affiche: String) {
        self.expression.clear();
        self.courant = affiche.clone();
        self.dernier_resultat = Some(affiche);
    }

    /// État d'erreur : l'expression partielle est abandonnée.
    pub fn deposer_erreur(&mut self) {
        self.expression.clear();
        self.courant = AFFICHAGE_ERREUR.to_string();
        self.dernier_resultat = None;
    }
}

/// Glyphe d'affichage d'un opérateur ('-' devient '−', etc.).
fn glyphe_operateur(op: char) -> char {
    match op {
        '-' => '−',
        '*' => '×',
        '/' => '÷',
        autre => autre,
    }
}
