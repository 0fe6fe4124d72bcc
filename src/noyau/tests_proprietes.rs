//! Tests propriétés (campagne) : invariants du pipeline + limites contrôlées.
//!
//! But : vérifier les propriétés observables sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//! - comparaison à une évaluation de référence (récursive directe) sur
//!   des expressions entièrement parenthésées : l'accord doit tenir à la
//!   tolérance flottante près.

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::{eval_expression, eval_expression_finie};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Égalité flottante à tolérance relative (absolue près de zéro).
fn assert_proche(expr: &str, obtenu: f64, attendu: f64) {
    let ecart = (obtenu - attendu).abs();
    let borne = 1e-9_f64.max(attendu.abs() * 1e-12);
    assert!(
        ecart <= borne,
        "expr={expr:?} obtenu={obtenu} attendu={attendu} ecart={ecart}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Table de base (contrats publics) ------------------------ */

#[test]
fn prop_table_de_base() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("2^3^2"), 512.0);
    assert_eq!(eval_ok("-5*2"), -10.0);
}

#[test]
fn prop_echecs_de_base() {
    assert_eq!(
        eval_expression("(1+2"),
        Err(ErreurEval::ParenthesesNonEquilibrees)
    );
    assert_eq!(eval_expression(""), Err(ErreurEval::ExpressionInvalide));
    assert!(matches!(
        eval_expression_finie("1/0"),
        Err(ErreurEval::ResultatNonFini(_))
    ));
}

/* ------------------------ Accord avec la référence récursive ------------------------ */

// Grille systématique : ((a op1 b) op2 c), comparée à l'arithmétique
// directe. Entièrement parenthésé => la précédence ne joue pas, seul le
// pipeline (jetons -> RPN -> pile) est sous test.

#[derive(Clone, Copy)]
struct Op {
    symbole: char,
    applique: fn(f64, f64) -> f64,
}

const OPS: [Op; 5] = [
    Op { symbole: '+', applique: |a, b| a + b },
    Op { symbole: '-', applique: |a, b| a - b },
    Op { symbole: '*', applique: |a, b| a * b },
    Op { symbole: '/', applique: |a, b| a / b },
    Op { symbole: '^', applique: |a, b| a.powf(b) },
];

const VALEURS: [f64; 5] = [0.0, 1.0, 2.5, 4.0, -3.0];

#[test]
fn prop_grille_profondeur_deux() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for &a in &VALEURS {
        for &b in &VALEURS {
            for &c in &VALEURS {
                for op1 in OPS {
                    for op2 in OPS {
                        budget(t0, max);

                        let attendu = (op2.applique)((op1.applique)(a, b), c);
                        if !attendu.is_finite() {
                            // hors contrat "fini" : couvert par prop_non_finis
                            continue;
                        }

                        let expr =
                            format!("(({a}{}{b}){}{c})", op1.symbole, op2.symbole);
                        // les littéraux négatifs sortent au format "-3" : le '-'
                        // est en position de valeur, donc absorbé comme prévu
                        assert_proche(&expr, eval_ok(&expr), attendu);
                    }
                }
            }
        }
    }
}

#[test]
fn prop_non_finis() {
    // succès structurel, valeur non finie
    let v = eval_ok("(1/0)");
    assert!(v.is_infinite() && v.is_sign_positive());

    let v = eval_ok("(0-1)/0");
    assert!(v.is_infinite() && v.is_sign_negative());

    let v = eval_ok("0/0");
    assert!(v.is_nan());

    // la variante finie les classe toutes en erreur
    for expr in ["1/0", "(0-1)/0", "0/0", "10^10^10"] {
        assert!(
            matches!(
                eval_expression_finie(expr),
                Err(ErreurEval::ResultatNonFini(_))
            ),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Associativité et ordre des opérandes ------------------------ */

#[test]
fn prop_gauche_associatif_chaines() {
    // a-b-c-d == ((a-b)-c)-d
    assert_eq!(eval_ok("100-20-30-40"), 10.0);
    // a/b/c == (a/b)/c
    assert_eq!(eval_ok("64/4/2"), 8.0);
}

#[test]
fn prop_caret_droite_associatif_chaine() {
    // 2^1^3 = 2^(1^3) = 2, pas (2^1)^3 = 8
    assert_eq!(eval_ok("2^1^3"), 2.0);
    // mélange : 2*3^2 = 18 (le '^' lie plus fort)
    assert_eq!(eval_ok("2*3^2"), 18.0);
}

#[test]
fn prop_ordre_des_operandes_non_commutatif() {
    assert_eq!(eval_ok("7-2"), 5.0);
    assert_eq!(eval_ok("2-7"), -5.0);
    assert_eq!(eval_ok("8/2"), 4.0);
    assert_eq!(eval_ok("2/8"), 0.25);
    assert_eq!(eval_ok("2^3"), 8.0);
    assert_eq!(eval_ok("3^2"), 9.0);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

/// Parenthésage en arbre équilibré, pour sommer sans pile profonde.
fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

#[test]
fn prop_stress_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 800*(0.5) = 400 ; le pipeline est itératif, seule la chaîne est grosse
    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 400.0);
}

#[test]
fn prop_stress_chaine_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // somme plate (associativité gauche) : 500 termes de 1
    let mut expr = String::from("1");
    for _ in 1..500 {
        expr.push_str("+1");
    }
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 500.0);
}
