// src/noyau/normalise.rs
//
// Du vecteur rationnel du solveur aux coefficients entiers minimaux.
//
// Étapes:
// (a) ppcm de tous les dénominateurs
// (b) mise à l'échelle par ce multiple (exacte: il efface chaque dénominateur)
// (c) valeur absolue (le signe vient du choix de base du noyau, pas de la chimie)
// (d) refus si un coefficient tombe à zéro (composé qui ne participe pas)
// (e) division par le pgcd commun => représentation positive minimale
//
// Normaliser un vecteur déjà normalisé le laisse inchangé.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurEquilibrage;

/// Convertit la solution rationnelle en entiers positifs de pgcd 1.
pub fn normaliser(solution: &[BigRational]) -> Result<Vec<BigInt>, ErreurEquilibrage> {
    if solution.is_empty() {
        return Err(ErreurEquilibrage::SolutionDegeneree);
    }

    // (a) le multiple qui rend tout entier d'un coup
    let mut ppcm = BigInt::one();
    for valeur in solution {
        ppcm = ppcm.lcm(valeur.denom());
    }

    // (b) + (c) mise à l'échelle exacte puis valeur absolue
    let facteur = BigRational::from_integer(ppcm);
    let mut entiers: Vec<BigInt> = solution
        .iter()
        .map(|valeur| (valeur * &facteur).to_integer().abs())
        .collect();

    // (d) un coefficient nul = un composé absent de l'équilibre: refus
    if entiers.iter().any(|coeff| coeff.is_zero()) {
        return Err(ErreurEquilibrage::SolutionDegeneree);
    }

    // (e) réduction au pgcd commun
    let mut pgcd = entiers[0].clone();
    for coeff in &entiers[1..] {
        pgcd = pgcd.gcd(coeff);
    }
    for coeff in &mut entiers {
        *coeff = &*coeff / &pgcd;
    }

    Ok(entiers)
}
