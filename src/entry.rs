use std::ffi::OsString;
use std::io::{BufWriter, Write};

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use irtt_telegraf::args::ExporterArgs;
use irtt_telegraf::config::{apply_config, load_config};
use irtt_telegraf::error::{AppError, AppResult, SinkError};
use irtt_telegraf::sinks::{write_error, write_result};
use irtt_telegraf::stats::load_result;
use thiserror::Error;

use crate::logger::init_logging;

/// Failure handed to the failure record; only logged.
#[derive(Debug, Error)]
#[error("{0}")]
struct RunFailure(String);

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    init_logging(args.verbose);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    let options = args.export_options();
    let encoding = args.encoding();
    let mut sink = open_output(args.output.as_deref())?;

    if let Some(target) = args.failed_target.as_deref() {
        let failure = RunFailure(args.failure_reason.clone());
        write_error(&mut sink, &failure, target, &options, encoding)?;
    } else {
        let result = load_result(&args.result)?;
        write_result(&mut sink, &result, &options, encoding)?;
    }

    sink.flush()
        .map_err(|err| AppError::sink(SinkError::Write { source: err }))
}

fn parse_args() -> AppResult<(ExporterArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = ExporterArgs::command().get_matches_from(raw_args);
    let args = ExporterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn open_output(path: Option<&str>) -> AppResult<BufWriter<Box<dyn Write>>> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    Ok(BufWriter::new(writer))
}
