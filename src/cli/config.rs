//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::Category;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default category (e.g. tens-by-tens, TExTE)
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Default number of exercises
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Largest number of exercises per worksheet
    #[arg(long, value_name = "N")]
    max_count: Option<usize>,

    /// Fill in answers by default (true or false)
    #[arg(long, value_name = "BOOL")]
    show_solution: Option<bool>,

    /// Web server host
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Web server port
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| CliError::config_load(&e))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // A broken file is reported, never overwritten with defaults
        let mut config = Config::load().map_err(|e| CliError::config_load(&e))?;

        if !self.apply(&mut config)? {
            return Err(CliError::validation(
                "At least one configuration option must be specified: \
                 --category, --count, --max-count, --show-solution, --host, or --port",
            ));
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    /// Applies the given options. Returns false if no option was given.
    fn apply(&self, config: &mut Config) -> CliResult<bool> {
        let mut changed = false;

        if let Some(category) = &self.category {
            config.worksheet.category = category.parse::<Category>()?;
            changed = true;
        }
        if let Some(count) = self.count {
            config.worksheet.count = count;
            changed = true;
        }
        if let Some(max_count) = self.max_count {
            config.worksheet.max_count = max_count;
            changed = true;
        }
        if let Some(show_solution) = self.show_solution {
            config.worksheet.show_solution = show_solution;
            changed = true;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
            changed = true;
        }
        if let Some(port) = self.port {
            config.server.port = port;
            changed = true;
        }

        Ok(changed)
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Worksheet:");
    println!(
        "  Category: {} ({})",
        config.worksheet.category,
        config.worksheet.category.code()
    );
    println!("  Exercises: {}", config.worksheet.count);
    println!("  Max Exercises: {}", config.worksheet.max_count);
    println!("  Show Solution: {}", config.worksheet.show_solution);
    println!();

    println!("Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!();

    if !Config::exists() {
        println!("(No config file yet, showing defaults)");
    }
}
