// src/app/format.rs
//
// Formatage d'affichage (côté collaborateur, pas côté noyau) :
// le noyau rend un f64 brut, ici on décide de sa forme à l'écran.
// - entier "exact" assez petit : sans décimales
// - très grand / très petit : notation exponentielle
// - sinon : 12 chiffres significatifs, forme courte

/// Seuil au-delà duquel un entier passe en notation exponentielle.
const SEUIL_EXPOSANT_HAUT: f64 = 1e15;

/// Seuil en-deçà duquel un non-nul passe en notation exponentielle.
const SEUIL_EXPOSANT_BAS: f64 = 1e-10;

/// Formate un double FINI pour l'affichage.
pub fn format_resultat(x: f64) -> String {
    // entier exact : pas de décimales ("14", pas "14.0")
    if x.fract() == 0.0 && x.abs() < SEUIL_EXPOSANT_HAUT {
        return format!("{}", x as i64);
    }

    if x.abs() >= SEUIL_EXPOSANT_HAUT || (x != 0.0 && x.abs() < SEUIL_EXPOSANT_BAS) {
        return format!("{x:.8e}");
    }

    // arrondi à 12 chiffres significatifs, puis re-parse pour retrouver
    // la forme décimale la plus courte qui retombe sur la même valeur
    let arrondi: f64 = format!("{x:.11e}").parse().unwrap_or(x);
    format!("{arrondi}")
}
