//! Command dispatch

use std::io::{self, BufRead, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::application::{ConversionService, Mode};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Config { command }) => cmd_config(command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => cmd_convert(cli),
    }
}

/// Pick the mode: the command line flag wins over settings.
pub fn resolve_mode(flag: Option<&str>, settings: &Settings) -> CliResult<Mode> {
    let mode = match flag {
        Some(m) => m.parse::<Mode>()?,
        None => settings.mode()?,
    };
    Ok(mode)
}

#[instrument(skip(cli))]
fn cmd_convert(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let mode = resolve_mode(cli.mode.as_deref(), &settings)?;
    let service = ConversionService::new(mode);
    info!("mode: {}", mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.values.is_empty() {
        debug!("no arguments, reading standard input");
        convert_reader(&service, io::stdin().lock(), &mut out)
    } else {
        convert_all(&service, &cli.values, &mut out)
    }
}

/// Convert each value in order, writing one result per line.
///
/// Stops at the first value that fails to convert.
pub fn convert_all<I, S, W>(service: &ConversionService, values: I, out: &mut W) -> CliResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    for value in values {
        let value = value.as_ref();
        let converted = service
            .convert(value)
            .map_err(|source| CliError::Conversion {
                input: value.to_string(),
                source,
            })?;
        writeln!(out, "{}", converted)?;
    }
    Ok(())
}

/// Convert whitespace separated tokens from `reader` as they arrive.
pub fn convert_reader<R, W>(service: &ConversionService, reader: R, out: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        convert_all(service, line.split_whitespace(), out)?;
        out.flush()?;
    }
    Ok(())
}

#[instrument]
fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

#[instrument]
fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::exitcode;
    use std::io::Cursor;

    fn run_reader(mode: Mode, input: &str) -> (CliResult<()>, String) {
        let service = ConversionService::new(mode);
        let mut out = Vec::new();
        let result = convert_reader(&service, Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn given_arguments_when_converting_then_one_line_each() {
        let service = ConversionService::new(Mode::ToRoman);
        let mut out = Vec::new();
        convert_all(&service, ["1", "19", "1999"], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "I\nXIX\nMCMXCIX\n");
    }

    #[test]
    fn given_stdin_tokens_when_converting_then_splits_on_whitespace() {
        let (result, out) = run_reader(Mode::ToArabic, "XXV  vl\n\tM\u{0305}\n");
        result.unwrap();
        assert_eq!(out, "25\n45\n1000000\n");
    }

    #[test]
    fn given_bad_value_when_converting_then_stops_after_earlier_output() {
        let (result, out) = run_reader(Mode::ToArabic, "I ABC X");
        assert_eq!(out, "1\n");
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
        assert!(matches!(err, CliError::Conversion { ref input, .. } if input == "ABC"));
    }

    #[test]
    fn given_empty_stdin_when_converting_then_no_output() {
        let (result, out) = run_reader(Mode::ToRoman, "");
        result.unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn given_mode_flag_when_resolving_then_overrides_settings() {
        let settings = Settings {
            mode: "1".to_string(),
        };
        assert_eq!(resolve_mode(Some("i"), &settings).unwrap(), Mode::ToArabic);
        assert_eq!(resolve_mode(None, &settings).unwrap(), Mode::ToRoman);
    }

    #[test]
    fn given_invalid_mode_when_resolving_then_usage_error() {
        let err = resolve_mode(Some("V"), &Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Application(ApplicationError::InvalidMode(_))
        ));
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }
}
