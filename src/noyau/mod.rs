//! Noyau exact d'équilibrage
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie des refus (thiserror)
//! - formule.rs   : analyse d'une formule en composition élément → quantité
//! - matrice.rs   : matrice stœchiométrique signée (réactifs +, produits −)
//! - solveur.rs   : élimination de Gauss exacte + base du noyau
//! - normalise.rs : coefficients entiers positifs minimaux (ppcm / pgcd)
//! - format.rs    : affichages (équation, matrice, démarche)
//! - equilibre.rs : pipeline complet

pub mod equilibre;
pub mod erreur;
pub mod format;
pub mod formule;
pub mod matrice;
pub mod normalise;
pub mod solveur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use equilibre::{equilibrer_equation, DemarcheNoyau};
pub use erreur::ErreurEquilibrage;
