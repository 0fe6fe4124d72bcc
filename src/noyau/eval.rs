//! Noyau — évaluation (pipeline complet)
//!
//! tokenize -> RPN (shunting-yard) -> évaluation sur pile
//!
//! Chaque étage est une fonction pure de son entrée ; le premier échec
//! court-circuite le reste. Aucun texte utilisateur n'est jamais exécuté
//! comme du code : seul ce pipeline dédié produit la valeur.

use tracing::debug;

use super::erreur::ErreurEval;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression infixe et retourne le double brut.
///
/// Le résultat peut être non fini (ex: "1/0" => +∞) : l'évaluation a
/// structurellement réussi. Voir [`eval_expression_finie`] pour la version
/// qui classe les non-finis en erreur.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    debug!(n = jetons.len(), "jetons");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!(n = rpn.len(), "rpn");

    // 3) Valeur
    let v = eval_rpn(&rpn)?;
    debug!(valeur = v, "évaluation");

    Ok(v)
}

/// Comme [`eval_expression`], mais ±∞ et NaN deviennent
/// [`ErreurEval::ResultatNonFini`]. C'est la variante que la couche
/// d'affichage consomme.
pub fn eval_expression_finie(expr_str: &str) -> Result<f64, ErreurEval> {
    let v = eval_expression(expr_str)?;
    if !v.is_finite() {
        return Err(ErreurEval::ResultatNonFini(v));
    }
    Ok(v)
}
