//! # Imobiliária Wei Shell Library
//!
//! Interactive listing page for Imobiliária Wei, driven from the terminal.
//! This is the main entry point that configures state and runs the loop.
//!
//! ## Module Organization
//! ```text
//! imobi_shell_lib/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── page.rs     ◄─── Page (catalog, session, form, cards)
//! │   ├── notice.rs   ◄─── Toast queue
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── page.rs     ◄─── View, session switches, auth buttons
//! │   ├── listing.rs  ◄─── Creation form
//! │   ├── card.rs     ◄─── Details, rental days, rent
//! │   ├── notice.rs   ◄─── Toast draining
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── render.rs       ◄─── Text / JSON output
//! ├── shell.rs        ◄─── Line parser and action loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use imobi_core::page::Page;

use error::ApiError;
use shell::Shell;
use state::{ConfigState, NoticeState, PageState};

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (DEBUG for imobi crates), override with RUST_LOG    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • IMOBI_* environment variables over defaults                       │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • PageState: seeded with the two example listings (or empty)        │
/// │     • NoticeState: empty toast queue                                    │
/// │                                                                         │
/// │  4. Run the action loop until `sair` or end of input ────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Imobiliária Wei shell");

    let config = ConfigState::from_env()?;
    info!(
        site = %config.site_name,
        seed = config.seed_listings,
        output = ?config.output,
        "Configuration loaded"
    );

    let page_state = if config.seed_listings {
        PageState::seeded()
    } else {
        PageState::new(Page::empty())
    };
    let notice_state = NoticeState::new();
    info!("State initialized");

    let shell = Shell::new(page_state, notice_state, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell
        .run(stdin.lock(), &mut stdout)
        .map_err(ApiError::from)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with the rendered page.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=imobi=trace` - Show trace for imobi crates only
/// - Default: INFO, DEBUG for imobi crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,imobi=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
