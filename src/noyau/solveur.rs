// src/noyau/solveur.rs
//
// Base du noyau (espace nul) d'une matrice stœchiométrique.
//
// Tout se joue sur l'exactitude: l'élimination se fait en BigRational,
// jamais en flottant. Un résidu de virgule flottante fausserait la
// normalisation entière en aval (les atomes doivent s'annuler EXACTEMENT).
//
// Déroulé:
// 1) conversion i64 -> BigRational
// 2) réduction de Gauss-Jordan en place (forme échelonnée réduite)
// 3) lecture des colonnes libres:
//    - aucune  => seule la solution nulle existe => refus
//    - une     => variable libre posée à 1, pivots lus sur leur ligne
//    - au-delà => espace de dimension > 1 => refus explicite (ambigu)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurEquilibrage;

/// Calcule un vecteur générateur du noyau de la matrice (entrée signée,
/// cf. matrice.rs). Le vecteur retourné vérifie matrice · v = 0 exactement.
pub fn base_noyau(matrice: &[Vec<i64>]) -> Result<Vec<BigRational>, ErreurEquilibrage> {
    let m = matrice.len();
    let n = matrice.first().map_or(0, |ligne| ligne.len());
    if n == 0 {
        // aucun composé: rien à équilibrer
        return Err(ErreurEquilibrage::NonEquilibrable);
    }

    // 1) matrice exacte
    let mut mat: Vec<Vec<BigRational>> = matrice
        .iter()
        .map(|ligne| {
            ligne
                .iter()
                .map(|&x| BigRational::from_integer(BigInt::from(x)))
                .collect()
        })
        .collect();

    // 2) forme échelonnée réduite
    let pivots = reduire_gauss(&mut mat, m, n);

    // 3) colonnes libres
    let libres: Vec<usize> = (0..n).filter(|c| !pivots.contains(c)).collect();

    match libres.len() {
        0 => Err(ErreurEquilibrage::NonEquilibrable),
        1 => {
            let libre = libres[0];

            // variable libre = 1; chaque pivot se lit sur sa ligne:
            //   x_pivot + mat[ligne][libre] * x_libre = 0
            let mut solution = vec![BigRational::zero(); n];
            solution[libre] = BigRational::one();
            for (ligne, &col) in pivots.iter().enumerate() {
                solution[col] = -mat[ligne][libre].clone();
            }
            Ok(solution)
        }
        dimension => Err(ErreurEquilibrage::SolutionAmbigue(dimension)),
    }
}

/// Réduction de Gauss-Jordan en place. Retourne les colonnes de pivot,
/// dans l'ordre des lignes.
///
/// Le pivot choisi est la première entrée non nulle de la colonne: en
/// arithmétique exacte il n'y a aucune stabilité numérique à soigner.
pub fn reduire_gauss(mat: &mut [Vec<BigRational>], m: usize, n: usize) -> Vec<usize> {
    let mut pivots: Vec<usize> = Vec::new();
    let mut ligne = 0;
    let mut col = 0;

    while ligne < m && col < n {
        let Some(p) = (ligne..m).find(|&r| !mat[r][col].is_zero()) else {
            // colonne déjà nulle sous la ligne courante
            col += 1;
            continue;
        };
        mat.swap(ligne, p);

        // normalise la ligne du pivot (pivot = 1)
        let pivot = mat[ligne][col].clone();
        for c in col..n {
            let q = &mat[ligne][c] / &pivot;
            mat[ligne][c] = q;
        }

        // annule la colonne partout ailleurs (au-dessus ET au-dessous:
        // la forme réduite rend la rétro-substitution triviale)
        for r in 0..m {
            if r == ligne || mat[r][col].is_zero() {
                continue;
            }
            let facteur = mat[r][col].clone();
            for c in col..n {
                let retrait = &facteur * &mat[ligne][c];
                mat[r][c] -= retrait;
            }
        }

        pivots.push(col);
        ligne += 1;
        col += 1;
    }

    pivots
}
