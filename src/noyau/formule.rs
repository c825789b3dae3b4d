// src/noyau/formule.rs
//
// Analyse d'une formule brute ("H2O", "Fe2O3", "C5H6OOH") en composition
// élément → nombre d'atomes.
//
// Grammaire (volontairement stricte):
// - un symbole commence par une majuscule ASCII, suivie de minuscules
// - un nombre optionnel suit le symbole (défaut: 1)
// - un symbole répété accumule ses quantités (hydrates, groupes répétés)
// - tout autre caractère est un refus net: pas de parenthèses, pas de
//   charges ioniques, pas d'espaces (la frontière les retire AVANT l'appel)

use std::collections::BTreeMap;

use super::erreur::ErreurEquilibrage;

/// Un composé chimique : la formule d'origine + sa composition dérivée.
/// Construit une fois par chaîne d'entrée, immuable ensuite.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Compose {
    /// Chaîne d'origine, restituée telle quelle dans l'équation finale.
    pub formule: String,
    /// Quantité d'atomes par symbole d'élément (toujours ≥ 1).
    pub composition: BTreeMap<String, i64>,
}

impl Compose {
    pub fn depuis_formule(formule: &str) -> Result<Self, ErreurEquilibrage> {
        Ok(Self {
            formule: formule.to_string(),
            composition: parse_formule(formule)?,
        })
    }
}

/// Parse une formule en composition élément → quantité.
///
/// Exemples:
///   "H2O"     => {H: 2, O: 1}
///   "C5H6OOH" => {C: 5, H: 7, O: 2}   (le O et le H finaux s'accumulent)
///   "h2o"     => refus (minuscule initiale)
pub fn parse_formule(formule: &str) -> Result<BTreeMap<String, i64>, ErreurEquilibrage> {
    let refus = || ErreurEquilibrage::FormatInvalide(formule.to_string());

    let chars: Vec<char> = formule.chars().collect();
    if chars.is_empty() {
        return Err(refus());
    }

    let mut composition: BTreeMap<String, i64> = BTreeMap::new();
    let mut i: usize = 0;

    while i < chars.len() {
        // Symbole: une majuscule puis des minuscules
        if !chars[i].is_ascii_uppercase() {
            return Err(refus());
        }
        let debut = i;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_lowercase() {
            i += 1;
        }
        let symbole: String = chars[debut..i].iter().collect();

        // Quantité: des chiffres, ou rien (=> 1)
        let debut_quantite = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let quantite: i64 = if debut_quantite == i {
            1
        } else {
            let texte: String = chars[debut_quantite..i].iter().collect();
            // un dépassement i64 est traité comme un format hors domaine
            texte.parse().map_err(|_| refus())?
        };

        // "H0" déclarerait un élément absent: refus (quantité toujours ≥ 1)
        if quantite == 0 {
            return Err(refus());
        }

        *composition.entry(symbole).or_insert(0) += quantite;
    }

    Ok(composition)
}
