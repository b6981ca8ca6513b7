//! # Listing Commands
//!
//! The "Cadastro de imóvel" form: typing into fields and saving.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Owner fills the form                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update_form_field(foto | titulo | descricao | valor, text)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit_property()                                                      │
//! │       │                                                                 │
//! │       ├── incomplete ──► VALIDATION_ERROR + "Preencha todos os campos" │
//! │       │                                                                 │
//! │       └── OK ──► new listing first in the catalog                      │
//! │                  + "Imóvel cadastrado"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use imobi_core::form::FormField;
use imobi_core::page::PageView;

use super::reject;
use crate::error::ApiError;
use crate::state::{NoticeState, PageState};

/// Replaces the content of one form field.
///
/// ## Errors
/// `FORBIDDEN` unless the viewer is an owner (the form is not rendered).
pub fn update_form_field(
    page: &PageState,
    notices: &NoticeState,
    field: FormField,
    value: &str,
) -> Result<PageView, ApiError> {
    debug!(%field, len = value.len(), "update_form_field command");

    page.with_page_mut(|p| {
        p.update_form_field(field, value)
            .map_err(|e| reject(notices, e))?;
        Ok(p.view())
    })
}

/// "Salvar imóvel".
///
/// ## Errors
/// - `FORBIDDEN` unless the viewer is an owner
/// - `VALIDATION_ERROR` for a missing field or a zero price (toast queued)
pub fn submit_property(page: &PageState, notices: &NoticeState) -> Result<PageView, ApiError> {
    debug!("submit_property command");

    page.with_page_mut(|p| {
        let (property, notice) = p.submit_form().map_err(|e| reject(notices, e))?;
        info!(
            property_id = %property.id,
            owner_id = %property.owner_id,
            price_wei = %property.price_wei,
            "listing created"
        );
        notices.push(notice);
        Ok(p.view())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::page::{set_logged_in, set_owner_role};
    use crate::error::ErrorCode;
    use imobi_core::page::CreationSection;

    fn owner_session() -> (PageState, NoticeState) {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        set_logged_in(&page, true);
        set_owner_role(&page, &notices, true).unwrap();
        (page, notices)
    }

    #[test]
    fn test_owner_submits_valid_listing() {
        let (page, notices) = owner_session();
        for (field, value) in [
            (FormField::ImageUrl, "https://example.com/a.jpg"),
            (FormField::Title, "Studio perto da praia"),
            (FormField::Description, "Mobiliado, com varanda."),
            (FormField::PriceWei, "500"),
        ] {
            update_form_field(&page, &notices, field, value).unwrap();
        }

        let view = submit_property(&page, &notices).unwrap();

        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.cards[0].title, "Studio perto da praia");
        assert!(!view.cards[0].is_rented);
        assert_eq!(view.cards[0].price_wei.to_string(), "500");
        assert_eq!(notices.drain()[0].notice.title, "Imóvel cadastrado");
        match view.creation {
            CreationSection::Form { draft } => assert!(draft.title.is_empty()),
            other => panic!("expected form, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_submission_queues_toast() {
        let (page, notices) = owner_session();
        update_form_field(&page, &notices, FormField::Title, "Só o título").unwrap();

        let err = submit_property(&page, &notices).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(notices.drain()[0].notice.title, "Preencha todos os campos");
        assert_eq!(page.with_page(|p| p.catalog().len()), 2);
    }

    #[test]
    fn test_form_forbidden_for_renter() {
        let page = PageState::seeded();
        let notices = NoticeState::new();
        set_logged_in(&page, true);

        let err = update_form_field(&page, &notices, FormField::Title, "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        let err = submit_property(&page, &notices).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
