//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de l'équilibreur (entrées réactifs/produits,
//! équation résultat, erreur, démarche) et offrir des opérations simples
//! (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : borne sur la longueur des entrées.

/// Garde-fou : longueur maximale d'un champ de formules (anti-abus / anti-gel).
pub const ENTREE_MAX: usize = 512;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub composes: String,
    pub elements: String,
    pub matrice: String,
    pub solution: String,
    pub coefficients: String,
    pub note: String,
}

/// Champ destinataire des boutons d'insertion (dernier champ focalisé).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Cible {
    #[default]
    Reactifs,
    Produits,
}

#[derive(Clone, Debug)]
pub struct AppEquil {
    // --- entrées utilisateur ---
    pub entree_reactifs: String,
    pub entree_produits: String,

    // --- sorties ---
    pub equation: String, // équation équilibrée ("2H2 + 1O2 → 2H2O")
    pub erreur: String,   // message de refus (si parsing/algèbre échoue)

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- UX ---
    pub cible: Cible,
    // Permet à vue.rs de redonner le focus au champ ciblé après un clic bouton.
    pub focus_cible: bool,
}

impl Default for AppEquil {
    fn default() -> Self {
        Self {
            entree_reactifs: String::new(),
            entree_produits: String::new(),
            equation: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            cible: Cible::Reactifs,
            focus_cible: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppEquil {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrées + résultats).
    pub fn reset_total(&mut self) {
        self.clear_entrees();
        self.clear_resultats();
        self.cible = Cible::Reactifs;
    }

    /// C : effacer seulement les entrées (sans toucher aux résultats).
    pub fn clear_entrees(&mut self) {
        self.entree_reactifs.clear();
        self.entree_produits.clear();
        self.focus_cible = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.equation.clear();
        self.erreur.clear();
        self.clear_demarche();
        self.focus_cible = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `equation` (dernier résultat) pour ne pas effacer
    ///   l'écran sur une faute de frappe.
    /// - On coupe la démarche (non fiable si l'équilibrage échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_demarche();
        self.focus_cible = true;
    }

    /// Utilitaire : déposer un résultat complet (équation + démarche).
    pub fn set_resultats(&mut self, equation: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.equation = equation.into();
        self.demarche = demarche;
        self.focus_cible = true;
    }

    /// Accès au champ actuellement ciblé par les boutons d'insertion.
    pub fn entree_cible(&mut self) -> &mut String {
        match self.cible {
            Cible::Reactifs => &mut self.entree_reactifs,
            Cible::Produits => &mut self.entree_produits,
        }
    }
}
