// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Vrai si le prochain jeton serait en *position de valeur* :
/// début d'expression, juste après '(' ou juste après un opérateur.
/// Sert à distinguer le moins unaire (absorbé dans le littéral)
/// de la soustraction binaire.
fn position_valeur(sortie: &[Tok]) -> bool {
    matches!(
        sortie.last(),
        None | Some(Tok::LPar | Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret)
    )
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - flottants (ex: 12, 3.5, .5)
/// - notation scientifique (ex: 1.5e-3, 2E+8)
/// - moins unaire absorbé dans le littéral ("-5" => Num(-5.0))
/// - opérateurs + - * / ^
/// - parenthèses ( )
///
/// Un seul passage gauche→droite, sans retour arrière. Tout caractère
/// hors alphabet fait échouer la tokenisation immédiatement.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Littéral numérique : chiffre, '.', ou '-' en position de valeur.
        if c.is_ascii_digit() || c == '.' || (c == '-' && position_valeur(&out)) {
            let debut = i;
            if c == '-' {
                i += 1;
            }

            // mantisse : chiffres et '.'
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            // exposant : 'e'/'E' suivi d'autre chose, signe optionnel collé, puis chiffres.
            // Un 'e' final n'est PAS absorbé (il échouera comme caractère inattendu).
            if i + 1 < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                i += 1;
                if chars[i] == '+' || chars[i] == '-' {
                    i += 1;
                }
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            let texte: String = chars[debut..i].iter().collect();
            let v: f64 = texte
                .parse()
                .map_err(|_| ErreurEval::NombreInvalide(texte.clone()))?;

            out.push(Tok::Num(v));
            continue;
        }

        // Opérateurs (le '-' qui arrive ici est forcément binaire)
        match c {
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '*' => out.push(Tok::Star),
            '/' => out.push(Tok::Slash),
            '^' => out.push(Tok::Caret),
            autre => return Err(ErreurEval::CaractereInattendu(autre)),
        }
        i += 1;
    }

    Ok(out)
}
