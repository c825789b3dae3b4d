// src/noyau/erreur.rs
//
// Taxonomie des refus du noyau.
//
// Contrat:
// - chaque refus est retourné au point de détection et remonte tel quel
//   jusqu'à la frontière (la vue l'affiche, le noyau ne journalise rien)
// - aucun refus ne sert de flux de contrôle ordinaire : ce sont des
//   issues déterministes (validation d'entrée, algèbre), pas des pannes

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ErreurEquilibrage {
    /// La formule ne respecte pas la grammaire (majuscule initiale,
    /// minuscules, chiffres). La formule fautive est conservée telle quelle.
    #[error("format invalide dans la formule : « {0} »")]
    FormatInvalide(String),

    /// Le système n'admet que la solution nulle : aucun équilibre n'existe.
    #[error("équation non équilibrable (seule la solution triviale existe)")]
    NonEquilibrable,

    /// La normalisation a produit un coefficient nul : un composé
    /// ne participe pas à la réaction.
    #[error("solution dégénérée : au moins un coefficient est nul")]
    SolutionDegeneree,

    /// L'espace des solutions est de dimension > 1 : plusieurs équilibres
    /// valides coexistent, on refuse plutôt que d'en choisir un en silence.
    #[error("équilibrage ambigu : l'espace des solutions est de dimension {0}")]
    SolutionAmbigue(usize),
}
