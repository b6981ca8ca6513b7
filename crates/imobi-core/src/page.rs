//! # Page
//!
//! The orchestrator. Owns the catalog, the viewer, every card's local state
//! and the creation form, and is the only place any of them change.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Page                                       │
//! │                                                                         │
//! │   Viewer ─────────────┬───────────────────────────┐                     │
//! │   (switches)          │ owner?                    │ current_user_id     │
//! │                       ▼                           ▼                     │
//! │   Option<PropertyForm> ── Submission ──►  Catalog  ◄── RentRequest ──┐  │
//! │                          (create)       (owned list)     (rent)      │  │
//! │                                              │                       │  │
//! │                                              ▼                       │  │
//! │                                     display_order()                  │  │
//! │                                              │                       │  │
//! │                                              ▼                       │  │
//! │                          HashMap<id, CardState> ── request_rent ─────┘  │
//! │                                                                         │
//! │   Children only ever see `&Property` and return intents.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::card::{CardContext, CardState, CardView};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::form::{FormField, PropertyDraft, PropertyForm};
use crate::notice::Notice;
use crate::types::Property;
use crate::viewer::Viewer;

// =============================================================================
// Page
// =============================================================================

/// The whole listing page.
#[derive(Debug, Clone)]
pub struct Page {
    catalog: Catalog,
    viewer: Viewer,
    cards: HashMap<String, CardState>,
    /// `Some` exactly while the viewer is an owner.
    form: Option<PropertyForm>,
}

impl Default for Page {
    fn default() -> Self {
        Page::new()
    }
}

impl Page {
    /// A fresh page: seed listings, logged out.
    pub fn new() -> Self {
        Page::with_catalog(Catalog::seeded())
    }

    /// A page with no listings.
    pub fn empty() -> Self {
        Page::with_catalog(Catalog::new())
    }

    /// A logged-out page over an existing catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Page {
            catalog,
            viewer: Viewer::Anonymous,
            cards: HashMap::new(),
            form: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    pub fn current_user_id(&self) -> Option<&'static str> {
        self.viewer.current_user_id()
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Flips the "Simular login" switch.
    pub fn set_logged_in(&mut self, logged_in: bool) -> Viewer {
        self.set_viewer(self.viewer.with_logged_in(logged_in));
        self.viewer
    }

    /// Flips the "Proprietário" switch.
    ///
    /// ## Errors
    /// `SessionToggleDisabled` while logged out; nothing changes.
    pub fn set_owner_role(&mut self, owner: bool) -> CoreResult<Viewer> {
        let viewer = self.viewer.with_owner_role(owner)?;
        self.set_viewer(viewer);
        Ok(self.viewer)
    }

    /// "Entrar" / "Criar conta". Authentication is not wired up, so both
    /// only explain that.
    pub fn request_auth(&self) -> Notice {
        Notice::auth_required()
    }

    fn set_viewer(&mut self, viewer: Viewer) {
        self.viewer = viewer;
        match (viewer.can_create(), self.form.is_some()) {
            (true, false) => self.form = Some(PropertyForm::new()),
            (false, true) => self.form = None,
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// The form, while it is rendered.
    pub fn form(&self) -> Option<&PropertyForm> {
        self.form.as_ref()
    }

    /// Types into one form field.
    ///
    /// ## Errors
    /// `FormHidden` unless the viewer is an owner.
    pub fn update_form_field(&mut self, field: FormField, value: &str) -> CoreResult<()> {
        let form = self.form.as_mut().ok_or(CoreError::FormHidden)?;
        form.set_field(field, value);
        Ok(())
    }

    /// "Salvar imóvel": submits the form as the current owner and prepends
    /// the new listing.
    ///
    /// ## Errors
    /// - `FormHidden` unless the viewer is an owner
    /// - `Validation` if the draft is incomplete or the id is taken
    ///   (draft kept)
    pub fn submit_form(&mut self) -> CoreResult<(Property, Notice)> {
        let owner_id = self.current_user_id().ok_or(CoreError::FormHidden)?;
        let form = self.form.as_mut().ok_or(CoreError::FormHidden)?;
        let submission = form.submit(owner_id, self.catalog.properties())?;

        self.catalog.create(submission.property.clone())?;
        Ok((submission.property, submission.notice))
    }

    /// Prepends a listing.
    ///
    /// ## Errors
    /// `Validation(Duplicate)` if the id is taken.
    pub fn create(&mut self, property: Property) -> CoreResult<()> {
        self.catalog.create(property)
    }

    // -------------------------------------------------------------------------
    // Cards
    // -------------------------------------------------------------------------

    /// Local state of a card (default if never touched).
    pub fn card(&self, id: &str) -> CardState {
        self.cards.get(id).cloned().unwrap_or_default()
    }

    fn card_mut(&mut self, id: &str) -> CoreResult<&mut CardState> {
        if self.catalog.get(id).is_none() {
            return Err(CoreError::PropertyNotFound(id.to_string()));
        }
        Ok(self.cards.entry(id.to_string()).or_default())
    }

    /// "Ver detalhes" / "Ocultar detalhes"; returns the new expanded state.
    pub fn toggle_details(&mut self, id: &str) -> CoreResult<bool> {
        Ok(self.card_mut(id)?.toggle_details())
    }

    /// Sets a card's day count (clamped to at least one).
    pub fn set_rental_days(&mut self, id: &str, days: i64) -> CoreResult<u64> {
        let card = self.card_mut(id)?;
        card.set_days(days);
        Ok(card.days())
    }

    /// Sets a card's day count from raw input text.
    pub fn set_rental_days_input(&mut self, id: &str, input: &str) -> CoreResult<u64> {
        let card = self.card_mut(id)?;
        card.set_days_input(input);
        Ok(card.days())
    }

    /// "Alugar" on a card: asks the card for a request and applies it.
    ///
    /// ## Errors
    /// - `PropertyNotFound` for an unknown id
    /// - `RentBlocked` when the card refuses
    pub fn rent_from_card(&mut self, id: &str) -> CoreResult<Notice> {
        let property = self
            .catalog
            .get(id)
            .ok_or_else(|| CoreError::PropertyNotFound(id.to_string()))?;
        let ctx = CardContext::new(property, self.viewer);
        let request = self.card(id).request_rent(&ctx)?;

        Ok(self.rent(&request.property_id, request.days))
    }

    /// Marks a listing as rented and confirms with the day count.
    ///
    /// An unknown id leaves the catalog untouched; the confirmation is
    /// still returned.
    pub fn rent(&mut self, id: &str, days: u64) -> Notice {
        self.catalog.rent(id);
        Notice::rent_requested(days)
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Available listings first, rented after, stable within each group.
    pub fn display_order(&self) -> Vec<&Property> {
        self.catalog.display_order()
    }

    /// Everything a surface needs to draw the page.
    pub fn view(&self) -> PageView {
        let banner = (!self.viewer.is_logged_in()).then(Banner::login_required);

        let creation = match &self.form {
            Some(form) => CreationSection::Form {
                draft: form.draft().clone(),
            },
            None => CreationSection::Placeholder {
                title: "Cadastro de imóvel".to_string(),
                description: "Disponível apenas para usuários proprietários autenticados."
                    .to_string(),
            },
        };

        let cards = self
            .display_order()
            .into_iter()
            .map(|property| {
                let ctx = CardContext::new(property, self.viewer);
                self.card(&property.id).view(&ctx)
            })
            .collect();

        PageView {
            heading: "Aluguel de imóveis em wei".to_string(),
            viewer: self.viewer,
            current_user_id: self.current_user_id().map(str::to_string),
            logged_in: self.viewer.is_logged_in(),
            owner_role: self.viewer.is_owner_role(),
            owner_switch_enabled: self.viewer.is_logged_in(),
            banner,
            creation,
            cards,
        }
    }
}

// =============================================================================
// Views
// =============================================================================

/// A rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Hero heading under the site header.
    pub heading: String,
    pub viewer: Viewer,
    pub current_user_id: Option<String>,
    pub logged_in: bool,
    pub owner_role: bool,
    pub owner_switch_enabled: bool,
    /// Shown only while logged out.
    pub banner: Option<Banner>,
    pub creation: CreationSection,
    /// In display order.
    pub cards: Vec<CardView>,
}

/// The logged-out banner with its two auth buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
    pub actions: Vec<String>,
}

impl Banner {
    fn login_required() -> Self {
        Banner {
            title: "Você precisa estar logado para usar o sistema.".to_string(),
            subtitle: "Ative a autenticação para cadastrar e alugar imóveis.".to_string(),
            actions: vec!["Entrar".to_string(), "Criar conta".to_string()],
        }
    }
}

/// The creation area: the form for owners, a placeholder for everyone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreationSection {
    Form { draft: PropertyDraft },
    Placeholder { title: String, description: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentBlock;
    use crate::wei::Wei;

    fn owner_page() -> Page {
        let mut page = Page::new();
        page.set_logged_in(true);
        page.set_owner_role(true).unwrap();
        page
    }

    fn fill_form(page: &mut Page, price: &str) {
        page.update_form_field(FormField::ImageUrl, "https://example.com/casa.jpg")
            .unwrap();
        page.update_form_field(FormField::Title, "Casa de praia").unwrap();
        page.update_form_field(FormField::Description, "Pé na areia.")
            .unwrap();
        page.update_form_field(FormField::PriceWei, price).unwrap();
    }

    #[test]
    fn test_fresh_page_is_seeded_and_logged_out() {
        let page = Page::new();
        assert_eq!(page.catalog().len(), 2);
        assert_eq!(page.viewer(), Viewer::Anonymous);
        assert_eq!(page.current_user_id(), None);
        assert!(page.form().is_none());
    }

    #[test]
    fn test_owner_creates_listing_at_front() {
        let mut page = owner_page();
        fill_form(&mut page, "500");

        let (property, notice) = page.submit_form().unwrap();

        assert_eq!(page.catalog().len(), 3);
        assert_eq!(page.catalog().properties()[0].id, property.id);
        assert_eq!(property.owner_id, "owner-1");
        assert_eq!(property.price_wei, Wei::from(500u64));
        assert!(!property.is_rented);
        assert_eq!(notice.title, "Imóvel cadastrado");
        assert_eq!(page.form().unwrap().draft(), &PropertyDraft::default());
    }

    #[test]
    fn test_invalid_submission_creates_nothing() {
        let mut page = owner_page();
        fill_form(&mut page, "0");

        let err = page.submit_form().unwrap_err();
        assert_eq!(err.notice(), Some(Notice::fill_all_fields()));
        assert_eq!(page.catalog().len(), 2);
        assert_eq!(page.form().unwrap().draft().title, "Casa de praia");
    }

    #[test]
    fn test_form_hidden_for_renters() {
        let mut page = Page::new();
        page.set_logged_in(true);
        assert!(page.form().is_none());
        assert!(matches!(
            page.update_form_field(FormField::Title, "x"),
            Err(CoreError::FormHidden)
        ));
        assert!(matches!(page.submit_form(), Err(CoreError::FormHidden)));
        assert!(matches!(
            page.view().creation,
            CreationSection::Placeholder { .. }
        ));
    }

    #[test]
    fn test_logout_drops_form_draft() {
        let mut page = owner_page();
        page.update_form_field(FormField::Title, "Rascunho").unwrap();

        page.set_logged_in(false);
        assert!(page.form().is_none());

        page.set_logged_in(true);
        page.set_owner_role(true).unwrap();
        assert_eq!(page.form().unwrap().draft().title, "");
    }

    #[test]
    fn test_owner_switch_disabled_while_logged_out() {
        let mut page = Page::new();
        assert!(matches!(
            page.set_owner_role(true),
            Err(CoreError::SessionToggleDisabled)
        ));
        assert_eq!(page.viewer(), Viewer::Anonymous);
        assert!(!page.view().owner_switch_enabled);
    }

    #[test]
    fn test_auth_buttons_only_notify() {
        let page = Page::new();
        let before = page.catalog().clone();
        let notice = page.request_auth();

        assert_eq!(notice.title, "Autenticação necessária");
        assert_eq!(page.catalog(), &before);
        assert_eq!(page.viewer(), Viewer::Anonymous);
        assert!(page.view().banner.is_some());
    }

    #[test]
    fn test_renter_rents_for_three_days() {
        let mut page = Page::new();
        page.set_logged_in(true);
        page.toggle_details("p1").unwrap();
        page.set_rental_days("p1", 3).unwrap();

        let view = page.view();
        let card = view.cards.iter().find(|c| c.id == "p1").unwrap();
        assert_eq!(card.details.as_ref().unwrap().total_wei.to_string(), "300");

        let notice = page.rent_from_card("p1").unwrap();
        assert!(notice.description.contains('3'));
        assert!(page.catalog().get("p1").unwrap().is_rented);
        assert!(page.catalog().get("p2").unwrap().is_rented);

        // The button is now disabled; a second attempt is refused silently.
        let err = page.rent_from_card("p1").unwrap_err();
        assert!(matches!(err, CoreError::RentBlocked(RentBlock::AlreadyRented)));
        assert!(err.notice().is_none());
    }

    #[test]
    fn test_rent_changes_only_target() {
        let mut page = owner_page();
        fill_form(&mut page, "10");
        page.submit_form().unwrap();
        let before: Vec<Property> = page.catalog().properties().to_vec();

        page.rent("p1", 2);

        for (old, new) in before.iter().zip(page.catalog().properties()) {
            if new.id == "p1" {
                assert!(!old.is_rented && new.is_rented);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_rent_unknown_id_still_confirms() {
        let mut page = Page::new();
        let before = page.catalog().clone();
        let notice = page.rent("ghost", 5);
        assert_eq!(notice, Notice::rent_requested(5));
        assert_eq!(page.catalog(), &before);
    }

    #[test]
    fn test_anonymous_rent_is_refused_with_notice() {
        let mut page = Page::new();
        page.toggle_details("p1").unwrap();
        let err = page.rent_from_card("p1").unwrap_err();
        assert_eq!(err.notice().unwrap().title, "Faça login para alugar");
        assert!(!page.catalog().get("p1").unwrap().is_rented);
    }

    #[test]
    fn test_collapsed_card_cannot_rent() {
        let mut page = Page::new();
        page.set_logged_in(true);
        assert!(page.view().cards[0].details.is_none());

        let err = page.rent_from_card("p1").unwrap_err();

        assert!(matches!(err, CoreError::RentBlocked(RentBlock::DetailsHidden)));
        assert!(err.notice().is_none());
        assert!(!page.catalog().get("p1").unwrap().is_rented);
    }

    #[test]
    fn test_card_state_survives_reordering() {
        let mut page = Page::new();
        page.set_logged_in(true);
        page.toggle_details("p1").unwrap();
        page.set_rental_days("p1", 4).unwrap();
        page.rent_from_card("p1").unwrap();

        // p1 moved behind the available listings but kept its state.
        let card = page.card("p1");
        assert!(card.expanded());
        assert_eq!(card.days(), 4);
    }

    #[test]
    fn test_unknown_card_is_not_found() {
        let mut page = Page::new();
        assert!(matches!(
            page.toggle_details("nope"),
            Err(CoreError::PropertyNotFound(_))
        ));
    }

    #[test]
    fn test_view_orders_available_first() {
        let mut page = owner_page();
        fill_form(&mut page, "1");
        let (created, _) = page.submit_form().unwrap();

        let order: Vec<String> = page.view().cards.into_iter().map(|c| c.id).collect();
        assert_eq!(order, vec![created.id, "p1".to_string(), "p2".to_string()]);
    }
}
