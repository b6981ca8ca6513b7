//! # Notices
//!
//! The transient toasts shown to the user. Every text here is Portuguese,
//! exactly as the listing page displays it.
//!
//! Operations never print anything themselves: they return a [`Notice`] (or
//! an error that maps to one) and the surface decides how to show it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visual tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Neutral information (e.g. auth not wired up).
    Info,
    /// An action went through.
    Success,
    /// An action was refused.
    Warning,
}

/// A toast: short title plus one line of description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    /// Creates a notice.
    pub fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Raised by the "Entrar" and "Criar conta" buttons.
    pub fn auth_required() -> Self {
        Notice::new(
            NoticeKind::Info,
            "Autenticação necessária",
            "Conecte seu projeto ao Supabase (botão verde no topo) para ativar login/cadastro.",
        )
    }

    /// Raised when an anonymous viewer tries to rent.
    pub fn login_to_rent() -> Self {
        Notice::new(
            NoticeKind::Warning,
            "Faça login para alugar",
            "Conecte a autenticação para continuar.",
        )
    }

    /// Raised when the owner tries to rent their own listing.
    pub fn owner_cannot_rent() -> Self {
        Notice::new(
            NoticeKind::Warning,
            "Ação não permitida",
            "O proprietário não pode alugar o próprio imóvel.",
        )
    }

    /// Raised when the creation form is submitted incomplete.
    pub fn fill_all_fields() -> Self {
        Notice::new(
            NoticeKind::Warning,
            "Preencha todos os campos",
            "Inclua título, descrição, foto e valor em wei.",
        )
    }

    /// Raised when one form field exceeds its length ceiling.
    pub fn field_too_long(label: &str, max: usize) -> Self {
        Notice::new(
            NoticeKind::Warning,
            "Preencha todos os campos",
            format!("{label} deve ter no máximo {max} caracteres."),
        )
    }

    /// Raised when a listing id is already taken.
    pub fn duplicate_listing(id: &str) -> Self {
        Notice::new(
            NoticeKind::Warning,
            "Imóvel já cadastrado",
            format!("Já existe um imóvel com o identificador {id}."),
        )
    }

    /// Raised after a successful form submission.
    pub fn property_created() -> Self {
        Notice::new(
            NoticeKind::Success,
            "Imóvel cadastrado",
            "Seu imóvel foi adicionado com sucesso.",
        )
    }

    /// Raised after a rent request, with the requested day count.
    pub fn rent_requested(days: u64) -> Self {
        Notice::new(
            NoticeKind::Success,
            "Solicitação enviada",
            format!("Imóvel selecionado para {days} dia(s)."),
        )
    }
}
