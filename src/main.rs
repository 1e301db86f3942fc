//! mozdef-event: send MozDef events configured from mozdef_client_config.conf
//!
//! A CLI over the library: resolves the shared config file, validates it, and
//! performs a guarded send.

mod cli;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;

use cli::{Cli, Commands};
use mozdef_client_config::config::{self, ConfigResolver, ConfigService, EventSettings};
use mozdef_client_config::domain::logger;
use mozdef_client_config::{ConfigedEventBuilder, ConfigedMozDefEvent, EventFields};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        logger::init(cli.log_dir.as_deref())?;
    }

    let resolver = if cli.config.is_empty() {
        ConfigResolver::default()
    } else {
        ConfigResolver::new(cli.config.iter().cloned())
    };

    match cli.command {
        Commands::Send {
            summary,
            category,
            source,
            severity,
            tags,
            details,
        } => {
            let mut event: ConfigedMozDefEvent =
                match ConfigedEventBuilder::with_resolver(resolver).build() {
                    Ok(event) => event,
                    Err(e) => {
                        explain_unusable(&cli.config)?;
                        return Err(e).context("Failed to configure MozDef event");
                    }
                };

            if let Some(category) = category {
                event.set_category(&category);
            }
            if let Some(source) = source {
                event.set_source(source);
            }

            let client = event.event_mut();
            client.set_summary(summary);
            client.set_tags(tags);
            if let Some(severity) = severity {
                client.set_severity_from_string(&severity);
            }
            for detail in &details {
                let (key, value) = parse_detail(detail)?;
                client.add_detail(key, value);
            }

            if !event.send_events() && !cli.quiet {
                eprintln!("send_events is off; event not sent.");
            }
            event
                .send(EventFields::default())
                .context("Failed to send MozDef event")?;
        }
        Commands::Check => {
            let config = resolver.resolve();
            if config.origin().is_none() {
                explain_unusable(&cli.config)?;
            }
            let settings = EventSettings::from_config(&config).with_context(|| match config.origin() {
                Some(path) => format!("Invalid configuration in {}", path.display()),
                None => "No usable configuration file found".to_string(),
            })?;

            match config.origin() {
                Some(path) => println!("config_file = {}", path.display()),
                None => println!("config_file = (none)"),
            }
            println!("mozdef_url = {}", settings.destination_url);
            println!("send_events = {}", settings.send_events);
            println!("send_to_syslog = {}", settings.send_to_syslog);
            println!("syslog_only = {}", settings.syslog_only);
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Init { path, url, force } => {
            let config_path = path.unwrap_or_else(ConfigService::default_path);
            ConfigService::generate_at(&config_path, url.as_deref(), force)?;
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Version => {
            println!("mozdef-event {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Report why a single explicitly given config file could not be used.
///
/// Resolution only logs unusable candidates, so an existing but malformed
/// `--config` file would otherwise surface as "no configuration".
fn explain_unusable(explicit: &[PathBuf]) -> Result<()> {
    if let [path] = explicit {
        if path.is_file() {
            config::load(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        }
    }
    Ok(())
}

/// Split `KEY=VALUE`; VALUE is JSON when it parses as JSON, else a string.
fn parse_detail(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("Invalid detail '{}': expected KEY=VALUE", raw);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid detail '{}': key cannot be empty", raw);
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
