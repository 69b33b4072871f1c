use std::env;
use std::io::{self, IsTerminal, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{Command, Session, TreeAction};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::repl::run_repl;
use crate::cli::{output, CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Stack { ops }) => _stack(load_settings(cli)?, ops),
        Some(Commands::Tree { action }) => _tree(load_settings(cli)?, action),
        Some(Commands::Repl) | None => _repl(load_settings(cli)?),
        Some(Commands::Config { command }) => _config(cli, command),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
    }
}

fn write_err(e: io::Error) -> CliError {
    CliError::io("write output", e)
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let dir = cli.config_dir.clone().or_else(|| env::current_dir().ok());
    debug!("load_settings: local dir {:?}", dir);
    Ok(Settings::load(dir.as_deref())?)
}

/// Session already positioned on the simulator page.
fn simulator_session(settings: Settings) -> CliResult<Session> {
    let page = settings.site.simulator_page.clone();
    let mut session = Session::new(settings)?;
    session.open(&page);
    Ok(session)
}

#[instrument(skip(settings))]
fn _stack(settings: Settings, ops: &[String]) -> CliResult<()> {
    let mut commands = Vec::with_capacity(ops.len());
    for op in ops {
        let command = op.parse::<Command>()?;
        if !command.is_stack_op() {
            return Err(CliError::Usage(format!("not a stack operation: {}", op)));
        }
        commands.push(command);
    }

    let mut session = simulator_session(settings)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for command in commands {
        let response = session.execute(command);
        output::write_status(&mut out, &response.status).map_err(write_err)?;
    }
    writeln!(out, "{}", session.stack().render()).map_err(write_err)?;
    Ok(())
}

#[instrument(skip(settings))]
fn _tree(settings: Settings, action: &str) -> CliResult<()> {
    let action = action.parse::<TreeAction>()?;
    let mut session = simulator_session(settings)?;
    let response = session.execute(Command::Tree(action));
    output::write_response(&mut io::stdout().lock(), &response).map_err(write_err)?;
    Ok(())
}

#[instrument(skip(settings))]
fn _repl(settings: Settings) -> CliResult<()> {
    let mut session = simulator_session(settings)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if interactive {
        writeln!(out, "{}", session.nav()).map_err(write_err)?;
        writeln!(out, "Type 'help' for commands.").map_err(write_err)?;
    }
    run_repl(&mut session, stdin.lock(), &mut out, interactive)
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            output::header("Config files:");
            match global_config_path() {
                Some(path) => output::info(&format!(
                    "  global: {} ({})",
                    path.display(),
                    if path.exists() { "found" } else { "missing" }
                )),
                None => output::info("  global: unavailable"),
            }
            let dir = match &cli.config_dir {
                Some(dir) => dir.clone(),
                None => env::current_dir().map_err(|e| CliError::io("current directory", e))?,
            };
            let local = local_config_path(&dir);
            output::info(&format!(
                "  local:  {} ({})",
                local.display(),
                if local.exists() { "found" } else { "missing" }
            ));
        }
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
}
