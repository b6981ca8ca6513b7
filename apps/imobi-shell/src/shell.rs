//! # Terminal Shell
//!
//! Reads one action per line, runs the matching command, then prints the
//! toasts it raised and the page as it now looks.
//!
//! ## Action Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► ShellCommand::parse ──► Shell::execute ──► command fn  │
//! │                        │                       │                        │
//! │                  INVALID_COMMAND          ApiError?                     │
//! │                        │                       │                        │
//! │                        └──────────┬────────────┘                        │
//! │                                   ▼                                     │
//! │                 drain notices ──► print toasts, error, page             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cards are addressed by their 1-based position in the grid as last
//! rendered, so `alugar 1` always means the first card on screen.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use imobi_core::form::FormField;

use crate::commands;
use crate::error::ApiError;
use crate::render::{self, Frame};
use crate::state::{ConfigState, NoticeState, OutputMode, PageState};

/// Help listing printed by `ajuda`.
pub const HELP: &str = "\
Comandos:
  login on|off                     Simular login
  owner on|off                     Alternar papel de proprietário
  entrar                           Entrar
  criar-conta                      Criar conta
  cadastrar                        Mostrar o cadastro de imóvel
  campo <titulo|descricao|foto|valor> <texto>
                                   Preencher um campo do cadastro
  salvar                           Salvar imóvel
  detalhes <n>                     Ver/ocultar detalhes do imóvel n
  dias <n> <dias>                  Dias de locação do imóvel n
  alugar <n>                       Alugar o imóvel n
  json                             Mostrar a página em JSON
  ajuda                            Esta ajuda
  sair                             Encerrar";

// =============================================================================
// Parsing
// =============================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login(bool),
    Owner(bool),
    Entrar,
    CriarConta,
    Cadastrar,
    Campo(FormField, String),
    Salvar,
    Detalhes(usize),
    Dias(usize, String),
    Alugar(usize),
    Json,
    Ajuda,
    Sair,
}

impl ShellCommand {
    /// Parses a line. Blank lines yield `None`.
    ///
    /// ## Errors
    /// `INVALID_COMMAND` for unknown verbs or missing/garbled arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, ApiError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (verb, rest) = split_word(line);

        let command = match verb.to_lowercase().as_str() {
            "login" => ShellCommand::Login(parse_switch(rest)?),
            "owner" | "proprietario" | "proprietário" => ShellCommand::Owner(parse_switch(rest)?),
            "entrar" => ShellCommand::Entrar,
            "criar-conta" => ShellCommand::CriarConta,
            "cadastrar" => ShellCommand::Cadastrar,
            "campo" => {
                let (name, value) = split_word(rest);
                let field = name.parse::<FormField>().map_err(|_| {
                    ApiError::invalid_command(format!("Campo desconhecido: '{name}'"))
                })?;
                ShellCommand::Campo(field, value.to_string())
            }
            "salvar" => ShellCommand::Salvar,
            "detalhes" => ShellCommand::Detalhes(parse_position(rest)?),
            "dias" => {
                let (position, days) = split_word(rest);
                ShellCommand::Dias(parse_position(position)?, days.trim().to_string())
            }
            "alugar" => ShellCommand::Alugar(parse_position(rest)?),
            "json" => ShellCommand::Json,
            "ajuda" | "help" | "?" => ShellCommand::Ajuda,
            "sair" | "exit" | "quit" => ShellCommand::Sair,
            other => {
                return Err(ApiError::invalid_command(format!(
                    "Comando desconhecido: '{other}'. Digite 'ajuda'."
                )))
            }
        };
        Ok(Some(command))
    }
}

/// Splits off the first word; the remainder keeps its inner spacing.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_switch(arg: &str) -> Result<bool, ApiError> {
    match arg.trim().to_lowercase().as_str() {
        "on" | "sim" | "1" | "true" => Ok(true),
        "off" | "nao" | "não" | "0" | "false" => Ok(false),
        other => Err(ApiError::invalid_command(format!(
            "Use 'on' ou 'off', não '{other}'"
        ))),
    }
}

fn parse_position(arg: &str) -> Result<usize, ApiError> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::invalid_command(format!(
            "Posição inválida: '{}'",
            arg.trim()
        ))),
    }
}

// =============================================================================
// Execution
// =============================================================================

/// What to print once a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Toasts and the full page.
    Render,
    /// Toasts and the creation area only.
    Creation,
    /// The page as JSON, whatever the output mode.
    Json,
    Help,
    Quit,
}

/// The three state types plus the loop that drives them.
#[derive(Debug, Clone)]
pub struct Shell {
    page: PageState,
    notices: NoticeState,
    config: ConfigState,
}

impl Shell {
    pub fn new(page: PageState, notices: NoticeState, config: ConfigState) -> Self {
        Shell {
            page,
            notices,
            config,
        }
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn notices(&self) -> &NoticeState {
        &self.notices
    }

    /// Runs one command against the state.
    pub fn execute(&self, command: ShellCommand) -> Result<Flow, ApiError> {
        debug!(?command, "executing");

        match command {
            ShellCommand::Login(on) => {
                commands::page::set_logged_in(&self.page, on);
            }
            ShellCommand::Owner(on) => {
                commands::page::set_owner_role(&self.page, &self.notices, on)?;
            }
            ShellCommand::Entrar => commands::page::request_login(&self.page, &self.notices),
            ShellCommand::CriarConta => {
                commands::page::request_signup(&self.page, &self.notices);
            }
            ShellCommand::Cadastrar => return Ok(Flow::Creation),
            ShellCommand::Campo(field, value) => {
                commands::listing::update_form_field(&self.page, &self.notices, field, &value)?;
            }
            ShellCommand::Salvar => {
                commands::listing::submit_property(&self.page, &self.notices)?;
            }
            ShellCommand::Detalhes(position) => {
                let id = self.property_at(position)?;
                commands::card::toggle_details(&self.page, &self.notices, &id)?;
            }
            ShellCommand::Dias(position, input) => {
                let id = self.property_at(position)?;
                commands::card::set_rental_days(&self.page, &self.notices, &id, &input)?;
            }
            ShellCommand::Alugar(position) => {
                let id = self.property_at(position)?;
                commands::card::rent_property(&self.page, &self.notices, &id)?;
            }
            ShellCommand::Json => return Ok(Flow::Json),
            ShellCommand::Ajuda => return Ok(Flow::Help),
            ShellCommand::Sair => return Ok(Flow::Quit),
        }
        Ok(Flow::Render)
    }

    /// Maps a grid position to the listing id drawn there.
    fn property_at(&self, position: usize) -> Result<String, ApiError> {
        let view = commands::page::get_page(&self.page);
        position
            .checked_sub(1)
            .and_then(|index| view.cards.get(index))
            .map(|card| card.id.clone())
            .ok_or_else(|| ApiError::not_found("Property", &position.to_string()))
    }

    /// Reads actions until `sair` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        let config = commands::config::get_config(&self.config);
        info!(site = %config.site_name, output = ?config.output, "shell started");

        self.print(Flow::Render, None, out)?;

        for line in input.lines() {
            let line = line?;
            let outcome = ShellCommand::parse(&line)
                .and_then(|parsed| parsed.map(|command| self.execute(command)).transpose());

            match outcome {
                Ok(None) => continue,
                Ok(Some(Flow::Quit)) => break,
                Ok(Some(flow)) => self.print(flow, None, out)?,
                Err(err) => {
                    warn!(code = ?err.code, message = %err.message, "action refused");
                    self.print(Flow::Render, Some(&err), out)?;
                }
            }
            out.flush()?;
        }

        info!("shell finished");
        Ok(())
    }

    fn print<W: Write>(&self, flow: Flow, error: Option<&ApiError>, out: &mut W) -> io::Result<()> {
        let notices = commands::notice::drain_notices(&self.notices);
        let view = commands::page::get_page(&self.page);

        if flow == Flow::Json || self.config.output == OutputMode::Json {
            let frame = Frame {
                page: &view,
                notices: &notices,
                error,
            };
            let json = render::render_json(&frame).map_err(io::Error::from)?;
            return writeln!(out, "{json}");
        }

        if !notices.is_empty() {
            writeln!(out, "{}", render::render_notices(&notices))?;
        }
        if let Some(err) = error {
            writeln!(out, "Erro: {}", err.message)?;
            return Ok(());
        }

        match flow {
            Flow::Help => writeln!(out, "{HELP}"),
            Flow::Creation => writeln!(out, "{}", render::render_creation(&view, &self.config)),
            _ => writeln!(out, "{}\n", render::render_page(&view, &self.config)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell() -> Shell {
        Shell::new(
            PageState::seeded(),
            NoticeState::new(),
            ConfigState::default(),
        )
    }

    fn run_script(shell: &Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellCommand::parse("login on").unwrap(),
            Some(ShellCommand::Login(true))
        );
        assert_eq!(
            ShellCommand::parse("  owner off ").unwrap(),
            Some(ShellCommand::Owner(false))
        );
        assert_eq!(
            ShellCommand::parse("campo titulo Casa de praia  azul").unwrap(),
            Some(ShellCommand::Campo(
                FormField::Title,
                "Casa de praia  azul".to_string()
            ))
        );
        assert_eq!(
            ShellCommand::parse("dias 2 abc").unwrap(),
            Some(ShellCommand::Dias(2, "abc".to_string()))
        );
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ShellCommand::parse("voar").is_err());
        assert!(ShellCommand::parse("login talvez").is_err());
        assert!(ShellCommand::parse("alugar 0").is_err());
        assert!(ShellCommand::parse("alugar x").is_err());
        assert!(ShellCommand::parse("campo cor azul").is_err());
    }

    #[test]
    fn test_positions_follow_display_order() {
        let shell = shell();
        shell.execute(ShellCommand::Login(true)).unwrap();
        shell.execute(ShellCommand::Detalhes(1)).unwrap();
        shell.execute(ShellCommand::Alugar(1)).unwrap();

        let rented = shell.page().with_page(|p| p.catalog().get("p1").unwrap().is_rented);
        assert!(rented);
        assert!(shell.execute(ShellCommand::Alugar(3)).is_err());
    }

    #[test]
    fn test_renter_session_script() {
        let shell = shell();
        let out = run_script(
            &shell,
            "login on\ndetalhes 1\ndias 1 3\nalugar 1\nsair\ndetalhes 1\n",
        );

        assert!(out.contains("Total: 300 wei"));
        assert!(out.contains("Imóvel selecionado para 3 dia(s)."));
        assert!(out.contains("1. Apto contemporâneo no centro  <Alugado>"));
        assert!(shell.notices().is_empty());
    }

    #[test]
    fn test_owner_creates_listing_script() {
        let shell = shell();
        let out = run_script(
            &shell,
            "login on\nowner on\ncampo foto https://example.com/x.jpg\n\
             campo titulo Loft\ncampo descricao Pé direito alto\ncampo valor 42\nsalvar\n",
        );

        assert!(out.contains("Imóvel cadastrado"));
        assert!(out.contains("1. Loft"));
        assert!(out.contains("Valor por dia: 42 wei"));
        assert_eq!(shell.page().with_page(|p| p.catalog().len()), 3);
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let shell = shell();
        let out = run_script(&shell, "owner on\ndetalhes 1\nalugar 1\nvoar\nentrar\n");

        assert!(out.contains("Erro:"));
        assert!(out.contains("Faça login para alugar"));
        assert!(out.contains("Comando desconhecido: 'voar'"));
        assert!(out.contains("Autenticação necessária"));
    }

    #[test]
    fn test_json_mode() {
        let config = ConfigState {
            output: OutputMode::Json,
            ..ConfigState::default()
        };
        let shell = Shell::new(PageState::seeded(), NoticeState::new(), config);
        let out = run_script(&shell, "entrar\n");

        let frames: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1]["notices"][0]["title"], "Autenticação necessária");
        assert_eq!(frames[1]["page"]["loggedIn"], false);
    }
}
