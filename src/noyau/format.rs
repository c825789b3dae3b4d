// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::formule::Compose;

/* ------------------------ Helpers rationnels ------------------------ */

/// "3" si entier, "3/2" sinon.
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Équation finale ------------------------ */

/// Rend l'équation équilibrée:
///   "2H2 + 1O2 → 2H2O"
///
/// Le coefficient 1 est affiché explicitement: l'équation se relit alors
/// terme à terme sans se demander si un coefficient a été élidé.
pub fn format_equation(
    reactifs: &[Compose],
    produits: &[Compose],
    coefficients: &[BigInt],
) -> String {
    let gauche = format_cote(reactifs, &coefficients[..reactifs.len()]);
    let droite = format_cote(produits, &coefficients[reactifs.len()..]);
    format!("{gauche} → {droite}")
}

fn format_cote(composes: &[Compose], coefficients: &[BigInt]) -> String {
    composes
        .iter()
        .zip(coefficients.iter())
        .map(|(compose, coeff)| format!("{coeff}{}", compose.formule))
        .collect::<Vec<_>>()
        .join(" + ")
}

/* ------------------------ Affichages de la démarche ------------------------ */

/// Une ligne par composé: "H2O : H×2, O×1".
pub fn format_compositions(composes: &[Compose]) -> String {
    composes
        .iter()
        .map(|compose| {
            let atomes = compose
                .composition
                .iter()
                .map(|(symbole, quantite)| format!("{symbole}×{quantite}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} : {atomes}", compose.formule)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Matrice signée, lignes étiquetées par l'élément, colonnes alignées.
pub fn format_matrice(elements: &[String], matrice: &[Vec<i64>]) -> String {
    let largeur = matrice
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    let etiquette = elements.iter().map(|e| e.len()).max().unwrap_or(1);

    elements
        .iter()
        .zip(matrice.iter())
        .map(|(element, ligne)| {
            let cellules = ligne
                .iter()
                .map(|v| format!("{v:>largeur$}"))
                .collect::<Vec<_>>()
                .join("  ");
            format!("{element:<etiquette$} | {cellules}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Vecteur rationnel du solveur: "1 | 1/2 | 1".
pub fn format_solution(solution: &[BigRational]) -> String {
    solution
        .iter()
        .map(format_rat)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Coefficients entiers finaux: "2, 1, 2".
pub fn format_coefficients(coefficients: &[BigInt]) -> String {
    coefficients
        .iter()
        .map(|coeff| coeff.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
