//! # Property Form
//!
//! The "Cadastro de imóvel" form: a draft of four fields and a submit that
//! either produces a complete [`Property`] or refuses with a notice.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Salvar imóvel"                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate draft: title → image_url → description → price_wei           │
//! │       │                                                                 │
//! │       ├── any failure ──► Err(Validation) → "Preencha todos os campos" │
//! │       │                   (draft untouched, no listing)                │
//! │       │                                                                 │
//! │       └── OK ──► Property { id: UUID v4, owner, is_rented: false }     │
//! │                  draft reset to empty                                   │
//! │                  Notice "Imóvel cadastrado"                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreResult, ValidationError};
use crate::notice::Notice;
use crate::types::Property;
use crate::validation::{
    validate_description, validate_image_url, validate_price_wei, validate_title,
    validate_unique_id, ValidationResult,
};
use crate::wei::Wei;

// =============================================================================
// Draft
// =============================================================================

/// What the user has typed so far. Everything starts empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[ts(as = "String")]
    pub price_wei: Wei,
}

/// One input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Description,
    ImageUrl,
    PriceWei,
}

impl FormField {
    /// Fields in the order the form renders them.
    pub const ALL: [FormField; 4] = [
        FormField::ImageUrl,
        FormField::Title,
        FormField::Description,
        FormField::PriceWei,
    ];

    /// Label shown above the input.
    pub const fn label(self) -> &'static str {
        match self {
            FormField::ImageUrl => "Link para foto",
            FormField::Title => "Título",
            FormField::Description => "Descrição",
            FormField::PriceWei => "Valor por dia (wei)",
        }
    }

    /// Placeholder shown in an empty input.
    pub const fn placeholder(self) -> &'static str {
        match self {
            FormField::ImageUrl => "https://...",
            FormField::Title => "Apartamento moderno no centro",
            FormField::Description => "Detalhes, comodidades, proximidades...",
            FormField::PriceWei => "1000000000000000000",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::ImageUrl => "image_url",
            FormField::PriceWei => "price_wei",
        };
        f.write_str(key)
    }
}

/// Accepts the English keys and the Portuguese words the terminal uses.
impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" | "titulo" | "título" => Ok(FormField::Title),
            "description" | "descricao" | "descrição" => Ok(FormField::Description),
            "image_url" | "imageurl" | "foto" => Ok(FormField::ImageUrl),
            "price_wei" | "pricewei" | "valor" | "preco" | "preço" => Ok(FormField::PriceWei),
            other => Err(ValidationError::InvalidFormat {
                field: "field".to_string(),
                reason: format!("unknown form field '{other}'"),
            }),
        }
    }
}

// =============================================================================
// Form
// =============================================================================

/// A successful submission: the new listing and the toast to show.
#[derive(Debug, Clone)]
pub struct Submission {
    pub property: Property,
    pub notice: Notice,
}

/// The creation form and its draft.
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    draft: PropertyDraft,
}

impl PropertyForm {
    /// Creates a form with an empty draft.
    pub fn new() -> Self {
        PropertyForm::default()
    }

    /// Current draft (read only).
    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.draft.image_url = image_url.into();
    }

    pub fn set_price_wei(&mut self, price_wei: Wei) {
        self.draft.price_wei = price_wei;
    }

    /// Sets a field from the raw text of its input.
    ///
    /// The price input behaves like a numeric field: text that is not a
    /// whole non-negative number reads as zero.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Title => self.set_title(value),
            FormField::Description => self.set_description(value),
            FormField::ImageUrl => self.set_image_url(value),
            FormField::PriceWei => self.set_price_wei(Wei::parse_lenient(value)),
        }
    }

    /// Checks the draft: title, image URL, description, price.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_title(&self.draft.title)?;
        validate_image_url(&self.draft.image_url)?;
        validate_description(&self.draft.description)?;
        validate_price_wei(&self.draft.price_wei)?;
        Ok(())
    }

    /// Submits the draft with a fresh UUID v4 id, checked against the
    /// listings that already exist.
    ///
    /// ## Errors
    /// `CoreError::Validation` when a field is missing, the price is not
    /// positive or the id is taken. The draft is left as typed.
    pub fn submit(&mut self, owner_id: &str, existing: &[Property]) -> CoreResult<Submission> {
        self.submit_with_id(owner_id, Uuid::new_v4().to_string(), existing)
    }

    /// Same as [`submit`](Self::submit) with a caller-chosen id.
    pub fn submit_with_id(
        &mut self,
        owner_id: &str,
        id: String,
        existing: &[Property],
    ) -> CoreResult<Submission> {
        self.validate()?;
        validate_unique_id(existing, &id)?;

        let draft = std::mem::take(&mut self.draft);
        let property = Property {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            price_wei: draft.price_wei,
            owner_id: owner_id.to_string(),
            is_rented: false,
        };

        Ok(Submission {
            property,
            notice: Notice::property_created(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
