// src/noyau/matrice.rs
//
// Matrice stœchiométrique signée.
//
// Convention:
// - une ligne par élément (union des symboles de tous les composés)
// - une colonne par composé, réactifs PUIS produits (l'ordre des colonnes
//   est celui des entrées et doit être préservé partout en aval, sinon les
//   coefficients ne retombent plus sur le bon composé)
// - entrée = nombre d'atomes, négative pour les colonnes produits
//
// L'ordre des lignes est celui du BTreeSet (trié, donc stable). Il reste
// interne: seule la démarche l'affiche.

use std::collections::BTreeSet;

use super::formule::Compose;

/// Construit la liste ordonnée des éléments et la matrice signée.
///
/// Pas de mode d'échec propre: un côté vide est accepté tel quel, le
/// solveur refusera de lui-même le système trivial qui en résulte.
pub fn construire_matrice(
    reactifs: &[Compose],
    produits: &[Compose],
) -> (Vec<String>, Vec<Vec<i64>>) {
    // Union des symboles sur tous les composés
    let mut ensemble: BTreeSet<String> = BTreeSet::new();
    for compose in reactifs.iter().chain(produits.iter()) {
        ensemble.extend(compose.composition.keys().cloned());
    }
    let elements: Vec<String> = ensemble.into_iter().collect();

    // Une ligne par élément, réactifs positifs puis produits négatifs
    let mut matrice: Vec<Vec<i64>> = Vec::with_capacity(elements.len());
    for element in &elements {
        let mut ligne: Vec<i64> = Vec::with_capacity(reactifs.len() + produits.len());
        for compose in reactifs {
            ligne.push(compose.composition.get(element).copied().unwrap_or(0));
        }
        for compose in produits {
            ligne.push(-compose.composition.get(element).copied().unwrap_or(0));
        }
        matrice.push(ligne);
    }

    (elements, matrice)
}
