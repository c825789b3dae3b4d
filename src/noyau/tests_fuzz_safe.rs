//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants clés :
//!   * une formule générée valide n'est JAMAIS refusée pour son format
//!   * du charabia est TOUJOURS refusé pour son format (et porte la fautive)
//!   * tout équilibre réussi conserve chaque élément, pgcd 1, positivité
//!   * même seed => mêmes sorties

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use super::equilibre::equilibrer_equation;
use super::erreur::ErreurEquilibrage;
use super::formule::Compose;
use super::matrice::construire_matrice;
use super::normalise::normaliser;
use super::solveur::base_noyau;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de formules (bornée) ------------------------ */

const ELEMENTS_FUZZ: &[&str] = &["H", "O", "C", "N", "Na", "Cl", "S", "Fe", "K", "Ca"];

/// Formule syntaxiquement valide: 1 à 3 symboles, quantités 1..12.
fn gen_formule(rng: &mut Rng) -> String {
    let nb_symboles = 1 + rng.pick(3);
    let mut formule = String::new();
    for _ in 0..nb_symboles {
        let element = ELEMENTS_FUZZ[rng.pick(ELEMENTS_FUZZ.len() as u32) as usize];
        formule.push_str(element);
        if rng.coin() {
            let quantite = 1 + rng.pick(12);
            formule.push_str(&quantite.to_string());
        }
    }
    formule
}

/// Charabia: commence volontairement hors grammaire.
fn gen_charabia(rng: &mut Rng) -> String {
    let fautives = [
        "h2o", "2HO", "(H2O)", "H2O+", " H2O", "Na@", "co2", "H_2", "→", "H2O ",
    ];
    fautives[rng.pick(fautives.len() as u32) as usize].to_string()
}

/// Réaction aléatoire. Une fois sur deux, construction garantie équilibrable:
/// A + B → AB (la concaténation de deux formules valides est valide et
/// additionne les compositions, donc 1, 1, 1 convient toujours).
fn gen_reaction(rng: &mut Rng) -> (Vec<String>, Vec<String>) {
    if rng.coin() {
        let a = gen_formule(rng);
        let b = gen_formule(rng);
        let ab = format!("{a}{b}");
        (vec![a, b], vec![ab])
    } else {
        let nb_reactifs = 1 + rng.pick(2);
        let nb_produits = 1 + rng.pick(2);
        let reactifs = (0..nb_reactifs).map(|_| gen_formule(rng)).collect();
        let produits = (0..nb_produits).map(|_| gen_formule(rng)).collect();
        (reactifs, produits)
    }
}

/* ------------------------ Helpers invariants ------------------------ */

/// Rejoue le pipeline étape par étape et vérifie les trois invariants.
fn verifie_invariants(reactifs: &[String], produits: &[String]) {
    let reactifs: Vec<Compose> = reactifs
        .iter()
        .map(|f| Compose::depuis_formule(f).unwrap())
        .collect();
    let produits: Vec<Compose> = produits
        .iter()
        .map(|f| Compose::depuis_formule(f).unwrap())
        .collect();
    let (elements, matrice) = construire_matrice(&reactifs, &produits);
    let solution = base_noyau(&matrice).unwrap();
    let coefficients = normaliser(&solution).unwrap();

    // positivité
    assert!(coefficients.iter().all(|c| *c >= BigInt::one()));

    // minimalité
    let pgcd = coefficients
        .iter()
        .fold(coefficients[0].clone(), |acc, c| acc.gcd(c));
    assert!(pgcd.is_one());

    // conservation: pour chaque élément, Σ coefficient × entrée signée = 0
    for (i, _element) in elements.iter().enumerate() {
        let mut somme = BigInt::from(0);
        for (j, coeff) in coefficients.iter().enumerate() {
            somme += coeff * BigInt::from(matrice[i][j]);
        }
        assert_eq!(somme, BigInt::from(0), "élément {} déséquilibré", elements[i]);
    }
}

fn resultat_texte(reactifs: &[String], produits: &[String]) -> String {
    match equilibrer_equation(reactifs, produits) {
        Ok((equation, _d)) => equation,
        Err(e) => format!("refus: {e}"),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_formules_valides_jamais_refusees_pour_format() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_refus = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let (reactifs, produits) = gen_reaction(&mut rng);
        match equilibrer_equation(&reactifs, &produits) {
            Ok((equation, _d)) => {
                assert!(equation.contains('→'));
                verifie_invariants(&reactifs, &produits);
                seen_ok += 1;
            }
            Err(e) => {
                // toutes les formules générées sont valides: seuls les refus
                // algébriques sont permis ici
                assert!(
                    !matches!(e, ErreurEquilibrage::FormatInvalide(_)),
                    "refus de format inattendu: réactifs={reactifs:?} produits={produits:?} err={e}"
                );
                seen_refus += 1;
            }
        }
    }

    // on veut voir un mix des deux, sinon le fuzz ne balaye rien
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_refus > 10, "trop peu de refus: {seen_refus}");
}

#[test]
fn fuzz_safe_charabia_toujours_refuse() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let fautive = gen_charabia(&mut rng);
        let reactifs = vec![fautive.clone(), "O2".to_string()];
        let produits = vec!["H2O".to_string()];

        let refus = equilibrer_equation(&reactifs, &produits).unwrap_err();
        assert_eq!(
            refus,
            ErreurEquilibrage::FormatInvalide(fautive.clone()),
            "fautive={fautive:?}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // même seed => mêmes réactions => mêmes sorties, refus compris
    let passe = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let (reactifs, produits) = gen_reaction(&mut rng);
                resultat_texte(&reactifs, &produits)
            })
            .collect()
    };

    let premiere = passe(0xD15EA5E_u64);
    budget(t0, max);
    let seconde = passe(0xD15EA5E_u64);

    assert_eq!(premiere, seconde);
}

#[test]
fn fuzz_safe_grande_equation_sans_gel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // beaucoup de colonnes d'un coup: n copies d'un même couple équilibrable
    // => espace de dimension n, le refus doit rester immédiat et exact
    let mut reactifs = Vec::new();
    let mut produits = Vec::new();
    for _ in 0..12 {
        reactifs.push("H2".to_string());
        reactifs.push("O2".to_string());
        produits.push("H2O".to_string());
        produits.push("H2O".to_string());
    }

    let refus = equilibrer_equation(&reactifs, &produits).unwrap_err();
    match refus {
        ErreurEquilibrage::SolutionAmbigue(dimension) => assert!(dimension > 1),
        autre => panic!("refus inattendu: {autre}"),
    }
    budget(t0, max);
}
