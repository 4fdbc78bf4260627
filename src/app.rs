use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::adapters::{FileImageLoader, GoogleVisionClientProvider};
use crate::core::models::DetectSettings;
use crate::core::orchestrators::DetectOrchestrator;
use crate::global_constants;

#[derive(Parser, Debug)]
#[command(
    name = global_constants::APPLICATION_NAME,
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// text | isbn | lotto
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Image file path or gs:// URI
    #[arg(allow_hyphen_values = true)]
    pub path: Option<String>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Text,
    Isbn,
    Lotto,
    Advertised(String),
    Unknown(String),
}

impl Command {
    pub fn parse(word: &str) -> Self {
        match word {
            "text" => Command::Text,
            "isbn" => Command::Isbn,
            "lotto" => Command::Lotto,
            advertised if global_constants::ADVERTISED_ONLY_COMMANDS.contains(&advertised) => {
                Command::Advertised(advertised.to_string())
            }
            other => Command::Unknown(other.to_string()),
        }
    }
}

pub fn build_default_orchestrator() -> Result<DetectOrchestrator> {
    let settings = DetectSettings::load()?;

    DetectOrchestrator::build(
        Arc::new(FileImageLoader::new()),
        Arc::new(GoogleVisionClientProvider::from_settings(&settings)),
        &settings,
    )
}

/// Routes one invocation. The orchestrator is only built once a command
/// actually needs the service.
pub fn run<F>(
    cli: CliArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    build_orchestrator: F,
) -> Result<()>
where
    F: FnOnce() -> Result<DetectOrchestrator>,
{
    let Some(command_word) = cli.command else {
        out.write_all(global_constants::USAGE_TEXT.as_bytes())?;
        return Ok(());
    };

    if !cli.extra.is_empty() {
        log::debug!(
            "{} Ignoring extra arguments: {:?}",
            global_constants::LOG_TAG_DISPATCH,
            cli.extra
        );
    }

    let path = cli.path.unwrap_or_default();
    let command = Command::parse(&command_word);
    log::debug!(
        "{} {:?} on {:?}",
        global_constants::LOG_TAG_DISPATCH,
        command,
        path
    );

    match command {
        Command::Text => build_orchestrator()?.detect_text(&path, out)?,
        Command::Isbn | Command::Lotto if path.is_empty() => {
            log::debug!(
                "{} No path given for {}, nothing to do",
                global_constants::LOG_TAG_DISPATCH,
                command_word
            );
        }
        Command::Isbn => {
            build_orchestrator()?.detect_isbn(&path, out, err)?;
        }
        Command::Lotto => {
            build_orchestrator()?.detect_lotto(&path, err)?;
        }
        Command::Advertised(name) => {
            log::debug!(
                "{} '{}' is listed in the usage text but not implemented",
                global_constants::LOG_TAG_DISPATCH,
                name
            );
        }
        Command::Unknown(word) => {
            log::debug!(
                "{} Unknown command '{}'",
                global_constants::LOG_TAG_DISPATCH,
                word
            );
        }
    }

    Ok(())
}
