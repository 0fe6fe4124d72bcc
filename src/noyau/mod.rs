//! Noyau F64
//!
//! Organisation interne :
//! - erreur.rs  : taxonomie d'erreurs (un variant par étage qui échoue)
//! - jetons.rs  : tokenisation (littéraux f64, moins unaire, notation sci.)
//! - rpn.rs     : shunting-yard + évaluation postfixe sur pile
//! - eval.rs    : pipeline complet + garde "résultat fini"
//!
//! Aucun état partagé entre appels : chaque évaluation est une fonction
//! pure de la chaîne d'entrée.

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_expression, eval_expression_finie};
