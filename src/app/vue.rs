// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppEquil (etat.rs) pour natif + wasm
// - Clavier : Enter équilibre (quand un des champs a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_cible)
// - Deux champs (réactifs / produits), les boutons d'insertion visent le
//   dernier champ focalisé (cible)
//
// Note :
// - Le nettoyage des espaces et le découpage sur '+' se font ICI, pas dans
//   le noyau : le noyau reçoit des formules déjà propres.

use eframe::egui;

use super::etat::{AppEquil, Cible, Demarche, ENTREE_MAX};

/// Formules proposées en insertion rapide (utile sur mobile).
const FORMULES_RAPIDES: [&str; 8] = ["H2O", "O2", "H2", "CO2", "CH4", "NaCl", "Fe2O3", "HCl"];

impl AppEquil {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Équilibreur Q-pur");
                ui.add_space(6.0);

                self.ui_entrees(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));

        let resp_reactifs = self.champ_formules(
            ui,
            "Réactifs :",
            "entree_reactifs_edit",
            "Ex: H2 + O2",
            Cible::Reactifs,
        );
        let resp_produits = self.champ_formules(
            ui,
            "Produits :",
            "entree_produits_edit",
            "Ex: H2O",
            Cible::Produits,
        );

        // --- Clavier : Enter équilibre (seulement si un champ est focus) ---
        // On évite les déclenchements globaux quand l'utilisateur clique ailleurs.
        if (resp_reactifs.has_focus() || resp_produits.has_focus()) && enter {
            self.equilibrer_via_noyau();
            self.focus_cible = true;
        }

        ui.add_space(6.0);

        // Actions
        ui.horizontal(|ui| {
            // Contrat: C = entrées seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement les entrées", Action::ClearEntrees);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([110.0, 32.0], egui::Button::new("Équilibrer"));
            if eq.clicked() {
                self.equilibrer_via_noyau();
                self.focus_cible = true;
            }
        });

        ui.add_space(8.0);

        // Insertions rapides : '+' et formules courantes
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "+", "+", InsertKind::Plus);

            ui.separator();

            for formule in FORMULES_RAPIDES {
                self.bouton_insert(ui, formule, formule, InsertKind::Formule);
            }
        });

        ui.add_space(8.0);

        // Pavé numérique (quantités des formules)
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Un champ de formules : étiquette + TextEdit, suivi de la cible.
    fn champ_formules(
        &mut self,
        ui: &mut egui::Ui,
        etiquette: &str,
        id: &str,
        indice: &str,
        cible: Cible,
    ) -> egui::Response {
        ui.label(etiquette);

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(match cible {
                Cible::Reactifs => &mut self.entree_reactifs,
                Cible::Produits => &mut self.entree_produits,
            })
            .desired_width(ui.available_width())
            .hint_text(indice)
            .id_source(id)
            .code_editor(),
        );

        // Le dernier champ focalisé devient la cible des boutons.
        if resp.has_focus() {
            self.cible = cible;
        }

        // Si on a cliqué un bouton, on redonne le focus au champ ciblé.
        if self.focus_cible && self.cible == cible {
            resp.request_focus();
            self.focus_cible = false;
        }

        resp
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_equilibreur")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Chiffre);
                self.bouton_insert(ui, "8", "8", InsertKind::Chiffre);
                self.bouton_insert(ui, "9", "9", InsertKind::Chiffre);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Chiffre);
                self.bouton_insert(ui, "5", "5", InsertKind::Chiffre);
                self.bouton_insert(ui, "6", "6", InsertKind::Chiffre);
                self.bouton_insert(ui, "+", "+", InsertKind::Plus);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Chiffre);
                self.bouton_insert(ui, "2", "2", InsertKind::Chiffre);
                self.bouton_insert(ui, "3", "3", InsertKind::Chiffre);
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Chiffre);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d'un coup les formules insérées en bloc.
    fn backspace_entree(&mut self) {
        let entree = self.entree_cible();
        if entree.is_empty() {
            return;
        }

        // Retire espaces finaux
        while entree.ends_with(' ') {
            entree.pop();
        }

        // Retire formules connues (insérées par bouton)
        for pat in FORMULES_RAPIDES {
            if entree.ends_with(pat) {
                for _ in 0..pat.chars().count() {
                    entree.pop();
                }
                while entree.ends_with(' ') {
                    entree.pop();
                }
                return;
            }
        }

        // Sinon : un caractère
        entree.pop();
        while entree.ends_with(' ') {
            entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Équation équilibrée :");
        Self::champ_monospace(ui, "equation_out", &self.equation, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Composés", "demarche_composes", &self.demarche.composes);
                Self::champ_demarche(ui, "Éléments", "demarche_elements", &self.demarche.elements);
                Self::champ_demarche(ui, "Matrice", "demarche_matrice", &self.demarche.matrice);
                Self::champ_demarche(ui, "Solution", "demarche_solution", &self.demarche.solution);
                Self::champ_demarche(
                    ui,
                    "Coefficients",
                    "demarche_coefficients",
                    &self.demarche.coefficients,
                );
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        // On garde un cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntrees => self.clear_entrees(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_cible = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([52.0, 28.0], egui::Button::new(label));
        if !resp.clicked() || to_insert.is_empty() {
            return;
        }

        let entree = self.entree_cible();
        match kind {
            InsertKind::Plus => {
                while entree.ends_with(' ') {
                    entree.pop();
                }
                if !entree.is_empty() {
                    entree.push(' ');
                }
                entree.push_str(to_insert);
                entree.push(' ');
            }
            InsertKind::Formule => {
                // espace si juste avant c'est une lettre ou un chiffre
                // (deux formules collées n'en feraient qu'une)
                if !entree.is_empty() && !entree.ends_with(char::is_whitespace) {
                    let dernier = entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = dernier {
                        if c.is_ascii_alphanumeric() {
                            entree.push(' ');
                        }
                    }
                }
                entree.push_str(to_insert);
            }
            InsertKind::Chiffre => {
                // chiffres: pas d'espaces auto (ils suivent un symbole)
                entree.push_str(to_insert);
            }
        }

        self.focus_cible = true;
    }

    /// Équilibre via le noyau, puis dépose équation/démarche dans l'état UI.
    ///
    /// Contrat de frontière : ICI on retire tous les espaces et on découpe
    /// chaque côté sur '+'. Le noyau ne fait aucun traitement d'espaces.
    fn equilibrer_via_noyau(&mut self) {
        let brut_reactifs = self.entree_reactifs.trim();
        let brut_produits = self.entree_produits.trim();

        if brut_reactifs.is_empty() || brut_produits.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }
        if brut_reactifs.len() > ENTREE_MAX || brut_produits.len() > ENTREE_MAX {
            self.set_erreur("Entrée trop longue");
            return;
        }

        let reactifs = decouper_cote(brut_reactifs);
        let produits = decouper_cote(brut_produits);

        match crate::noyau::equilibrer_equation(&reactifs, &produits) {
            Ok((equation, d_noyau)) => {
                let d_ui = Demarche {
                    composes: d_noyau.composes,
                    elements: d_noyau.elements,
                    matrice: d_noyau.matrice,
                    solution: d_noyau.solution,
                    coefficients: d_noyau.coefficients,
                    note: d_noyau.note,
                };
                self.set_resultats(equation, d_ui);
            }
            Err(refus) => {
                self.set_erreur(refus.to_string());
            }
        }
        self.focus_cible = true;
    }
}

/// "H2 + O2" => ["H2", "O2"] : espaces retirés, découpe sur '+'.
/// Un segment vide ("H2 + + O2") est transmis tel quel : le noyau le
/// refusera comme formule invalide.
fn decouper_cote(brut: &str) -> Vec<String> {
    let sans_espaces: String = brut.chars().filter(|c| !c.is_whitespace()).collect();
    sans_espaces.split('+').map(|s| s.to_string()).collect()
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntrees,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Chiffre,
    Formule,
    Plus,
}
