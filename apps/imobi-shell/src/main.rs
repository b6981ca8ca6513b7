//! # Imobiliária Wei Shell Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Imobiliária Wei                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Terminal: "login on", "alugar 1", "salvar" ...                  │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    imobi_shell_lib                               │  │
//! │  │  shell.rs ───► parse line, dispatch                              │  │
//! │  │  commands/ ──► set_logged_in, submit_property, rent_property     │  │
//! │  │  state/ ─────► PageState, NoticeState, ConfigState               │  │
//! │  │  render.rs ──► page + toasts (text or JSON)                      │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  imobi-core: catalog, viewer, form, cards, wei                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    imobi_shell_lib::run()
}
