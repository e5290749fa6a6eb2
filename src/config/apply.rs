use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::ExporterArgs;
use crate::args::parsers::validate_tag;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn apply_switch(
    matches: &ArgMatches,
    name: &str,
    target: &mut bool,
    value: Option<bool>,
    negated: bool,
) {
    if !is_cli(matches, name)
        && let Some(value) = value
    {
        *target = value != negated;
    }
}

/// Applies configuration values to CLI arguments.
///
/// Values given on the command line win. Config tags are merged under CLI
/// tags, so a CLI `--tag` overrides a config tag with the same key.
///
/// # Errors
///
/// Returns an error when a config tag has an empty key or value.
pub fn apply_config(
    args: &mut ExporterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "format")
        && let Some(format) = config.format
    {
        args.format = format;
    }

    if let Some(tags) = config.tags.as_ref() {
        let mut merged = Vec::with_capacity(tags.len().saturating_add(args.tags.len()));
        for (key, value) in tags {
            validate_tag(key, value).map_err(|err| {
                AppError::config(ConfigError::InvalidTag {
                    key: key.clone(),
                    source: err,
                })
            })?;
            merged.push((key.trim().to_owned(), value.trim().to_owned()));
        }
        merged.append(&mut args.tags);
        args.tags = merged;
    }

    apply_switch(matches, "no_rtt", &mut args.no_rtt, config.include_rtt, true);
    apply_switch(
        matches,
        "no_send_delay",
        &mut args.no_send_delay,
        config.include_send_delay,
        true,
    );
    apply_switch(
        matches,
        "no_receive_delay",
        &mut args.no_receive_delay,
        config.include_receive_delay,
        true,
    );
    apply_switch(matches, "no_ipdv", &mut args.no_ipdv, config.include_ipdv, true);
    apply_switch(
        matches,
        "no_packet_loss",
        &mut args.no_packet_loss,
        config.include_packet_loss,
        true,
    );
    apply_switch(
        matches,
        "no_bitrate",
        &mut args.no_bitrate,
        config.include_bitrate,
        true,
    );
    apply_switch(
        matches,
        "no_server_processing",
        &mut args.no_server_processing,
        config.include_server_processing,
        true,
    );
    apply_switch(
        matches,
        "include_timer_error",
        &mut args.include_timer_error,
        config.include_timer_error,
        false,
    );

    Ok(())
}
