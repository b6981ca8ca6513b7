//! # Rendering
//!
//! Turns a [`PageView`] and the pending toasts into what the terminal shows.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ══ Imobiliária Wei ══                                                  │
//! │  Simular login [x]   Proprietário [ ]   [Cadastrar imóvel]             │
//! │                                                                         │
//! │  Aluguel de imóveis em wei                                              │
//! │                                                                         │
//! │  (banner, logged out only)                                              │
//! │                                                                         │
//! │  Cadastro de imóvel: form (owner) or placeholder                        │
//! │                                                                         │
//! │  Imóveis: numbered cards, available first                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text output is built as a list of lines; JSON output is one document per
//! action.

use serde::Serialize;

use imobi_core::card::CardView;
use imobi_core::form::FormField;
use imobi_core::notice::NoticeKind;
use imobi_core::page::{CreationSection, PageView};

use crate::error::ApiError;
use crate::state::{ConfigState, RaisedNotice};

/// Renders the whole page as text.
pub fn render_page(view: &PageView, config: &ConfigState) -> String {
    let mut lines = vec![
        format!("══ {} ══", config.site_name),
        header(view),
        String::new(),
        view.heading.clone(),
    ];

    if let Some(banner) = &view.banner {
        lines.push(String::new());
        lines.push(format!("! {}", banner.title));
        lines.push(format!("  {}", banner.subtitle));
        lines.push(format!("  [{}]", banner.actions.join("] [")));
    }

    lines.push(String::new());
    lines.extend(creation_lines(&view.creation, config));

    lines.push(String::new());
    lines.push("Imóveis".to_string());
    if view.cards.is_empty() {
        lines.push("  Nenhum imóvel cadastrado.".to_string());
    }
    for (index, card) in view.cards.iter().enumerate() {
        lines.extend(card_lines(index + 1, card, config));
    }

    lines.join("\n")
}

/// Renders only the creation area. Used by the header button.
pub fn render_creation(view: &PageView, config: &ConfigState) -> String {
    creation_lines(&view.creation, config).join("\n")
}

/// One line per toast, oldest first.
pub fn render_notices(notices: &[RaisedNotice]) -> String {
    notices
        .iter()
        .map(|raised| {
            let tag = match raised.notice.kind {
                NoticeKind::Info => "info",
                NoticeKind::Success => "sucesso",
                NoticeKind::Warning => "atenção",
            };
            format!(
                "({}) [{}] {}: {}",
                raised.raised_at.format("%H:%M:%S"),
                tag,
                raised.notice.title,
                raised.notice.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// What JSON mode prints after each action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame<'a> {
    pub page: &'a PageView,
    pub notices: &'a [RaisedNotice],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a ApiError>,
}

/// Serializes a [`Frame`] on a single line.
pub fn render_json(frame: &Frame<'_>) -> serde_json::Result<String> {
    serde_json::to_string(frame)
}

fn header(view: &PageView) -> String {
    let owner = if view.owner_switch_enabled {
        format!("Proprietário {}", checkbox(view.owner_role))
    } else {
        format!("Proprietário {} (desativado)", checkbox(view.owner_role))
    };
    format!(
        "Simular login {}   {}   [Cadastrar imóvel]",
        checkbox(view.logged_in),
        owner
    )
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn creation_lines(creation: &CreationSection, config: &ConfigState) -> Vec<String> {
    match creation {
        CreationSection::Placeholder { title, description } => {
            vec![title.clone(), format!("  {description}")]
        }
        CreationSection::Form { draft } => {
            let mut lines = vec!["Cadastro de imóvel".to_string()];
            for field in FormField::ALL {
                let value = match field {
                    FormField::ImageUrl => draft.image_url.clone(),
                    FormField::Title => draft.title.clone(),
                    FormField::Description => draft.description.clone(),
                    FormField::PriceWei if draft.price_wei.is_zero() => String::new(),
                    FormField::PriceWei => config.format_wei(&draft.price_wei),
                };
                let shown = if value.is_empty() {
                    format!("({})", field.placeholder())
                } else {
                    value
                };
                lines.push(format!("  {}: {}", field.label(), shown));
            }
            lines.push("  [Salvar imóvel]".to_string());
            lines
        }
    }
}

fn card_lines(position: usize, card: &CardView, config: &ConfigState) -> Vec<String> {
    let mut badges = Vec::new();
    if card.is_rented {
        badges.push("Alugado");
    }
    if card.is_owner {
        badges.push("Você é o proprietário");
    }

    let mut title = format!("  {position}. {}", card.title);
    if !badges.is_empty() {
        title.push_str(&format!("  <{}>", badges.join("> <")));
    }

    let mut lines = vec![
        String::new(),
        title,
        format!("     {}", card.image_url),
        format!("     Valor por dia: {}", config.format_wei(&card.price_wei)),
    ];

    if let Some(details) = &card.details {
        let rent = if details.rent_enabled {
            "[Alugar]"
        } else {
            "[Alugar] (desativado)"
        };
        lines.push(format!("     {}", details.description));
        lines.push(format!("     Dias de locação: {}", details.days));
        lines.push(format!("     Total: {}", config.format_wei(&details.total_wei)));
        lines.push(format!("     {rent}"));
    }
    lines.push(format!("     [{}]", card.toggle_label));
    lines
}
