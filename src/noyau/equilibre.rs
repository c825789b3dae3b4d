//! Noyau — équilibrage (pipeline réel)
//!
//! formules → composition → matrice stœchiométrique → base du noyau (Gauss exact)
//!          → normalisation entière → équation formatée
//!
//! Remarque : le noyau est pur et sans état. Chaque appel reconstruit tout,
//! aucun partage entre requêtes, donc appelable depuis n'importe quel nombre
//! d'appelants concurrents sans synchronisation.

use super::erreur::ErreurEquilibrage;
use super::format::{
    format_coefficients, format_compositions, format_equation, format_matrice, format_solution,
};
use super::formule::Compose;
use super::matrice::construire_matrice;
use super::normalise::normaliser;
use super::solveur::base_noyau;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub composes: String,
    pub elements: String,
    pub matrice: String,
    pub solution: String,
    pub coefficients: String,
    pub note: String,
}

/// API publique : équilibre une équation et retourne:
/// - l'équation formatée ("2H2 + 1O2 → 2H2O")
/// - la démarche (compositions, matrice, solution rationnelle, coefficients)
///
/// Contrat de frontière : les formules arrivent déjà débarrassées de leurs
/// espaces (c'est l'appelant qui découpe et nettoie), chaque côté dans
/// l'ordre d'entrée. Cet ordre est celui des colonnes de la matrice et
/// celui des coefficients rendus.
pub fn equilibrer_equation(
    reactifs: &[String],
    produits: &[String],
) -> Result<(String, DemarcheNoyau), ErreurEquilibrage> {
    // 1) Analyse des formules (le premier refus l'emporte, dans l'ordre d'entrée)
    let reactifs: Vec<Compose> = reactifs
        .iter()
        .map(|formule| Compose::depuis_formule(formule))
        .collect::<Result<_, _>>()?;
    let produits: Vec<Compose> = produits
        .iter()
        .map(|formule| Compose::depuis_formule(formule))
        .collect::<Result<_, _>>()?;

    // 2) Matrice stœchiométrique (réactifs positifs, produits négatifs)
    let (elements, matrice) = construire_matrice(&reactifs, &produits);

    // 3) Base du noyau (élimination de Gauss exacte, jamais de flottants)
    let solution = base_noyau(&matrice)?;

    // 4) Normalisation entière (ppcm, valeur absolue, pgcd)
    let coefficients = normaliser(&solution)?;

    // 5) Équation finale
    let equation = format_equation(&reactifs, &produits, &coefficients);

    // 6) Démarche
    let demarche = DemarcheNoyau {
        composes: {
            let tous: Vec<Compose> = reactifs.iter().chain(produits.iter()).cloned().collect();
            format_compositions(&tous)
        },
        elements: elements.join(", "),
        matrice: format_matrice(&elements, &matrice),
        solution: format_solution(&solution),
        coefficients: format_coefficients(&coefficients),
        note: "Pipeline : formules → composition → matrice stœchiométrique → noyau exact (Gauss) → normalisation entière → équation.".into(),
    };

    Ok((equation, demarche))
}
