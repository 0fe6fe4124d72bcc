// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// - Chaque étage (jetons / RPN / évaluation) retourne Result, jamais de panic.
// - ResultatNonFini : succès structurel mais valeur ±∞ ou NaN
//   (ex: 1/0) ; c'est l'appelant qui décide d'en faire un état d'erreur.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    /// Symbole hors alphabet (ni chiffre, ni opérateur, ni parenthèse).
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// Littéral numérique collecté mais refusé par le parse f64 (ex: "1.2.3", "-").
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// '(' sans ')' correspondante, ou ')' orpheline.
    #[error("parenthèses non équilibrées")]
    ParenthesesNonEquilibrees,

    /// Opérateur rencontré avec moins de deux valeurs sur la pile.
    #[error("opérandes insuffisants")]
    OperandesInsuffisants,

    /// Pile finale de taille ≠ 1 (entrée vide comprise).
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Évaluation aboutie mais valeur non finie (±∞, NaN).
    #[error("résultat non fini ({0})")]
    ResultatNonFini(f64),
}
