//! CLI command bodies

mod lineages;
mod show;
mod toggle;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use treemenu::config::{load_layered, Config};
use treemenu::domain::entities::TreeSnapshot;
use treemenu::domain::services::build_data;
use treemenu::infrastructure::{load_input, STDIN_PATH};
use treemenu::ui::output::{print_build_warnings, print_config_warnings};
use treemenu::ui::terminal::detect_capabilities;

use crate::cli::{Cli, Commands};

pub use lineages::cmd_lineages;
pub use show::cmd_show;
pub use toggle::cmd_toggle;

/// Run the parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let session = Session::from_cli(&cli)?;
    match cli.command {
        Commands::Show { file } => cmd_show(&session, file.as_deref()),
        Commands::Toggle {
            file,
            property,
            lineages,
        } => cmd_toggle(&session, file.as_deref(), property, &lineages),
        Commands::Lineages { file } => cmd_lineages(&session, file.as_deref()),
    }
}

/// Resolved settings shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub unicode: bool,
    pub json: bool,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read working directory")?;
        let (mut config, warnings) =
            load_layered(cli.config.as_deref(), &cwd).context("failed to load configuration")?;

        if let Some(field) = &cli.identifier {
            config.tree.identifier = (!field.is_empty()).then(|| field.clone());
        }
        if let Some(sort) = cli.sort {
            config.tree.sort = sort;
        }
        if cli.ascii {
            config.output.unicode = Some(false);
        }

        let unicode = config
            .output
            .unicode
            .unwrap_or_else(|| detect_capabilities().supports_unicode);

        if !cli.json {
            print_config_warnings(&warnings, unicode);
        }
        tracing::debug!(?config, unicode, "session ready");

        Ok(Self {
            config,
            unicode,
            json: cli.json,
        })
    }

    /// Load tree data and build it under the session's configuration
    pub fn build(&self, file: Option<&Path>) -> Result<TreeSnapshot> {
        let path = input_path(file)?;
        let input = load_input(&path)
            .with_context(|| format!("failed to read tree data from {}", display(&path)))?;

        let snapshot = build_data(input, &self.config.build_config());
        if !self.json {
            print_build_warnings(snapshot.warnings(), self.unicode);
        }
        Ok(snapshot)
    }
}

fn input_path(file: Option<&Path>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path.to_path_buf()),
        None if detect_capabilities().stdin_is_tty => {
            bail!("no tree data given: pass a FILE or pipe JSON on stdin")
        }
        None => Ok(PathBuf::from(STDIN_PATH)),
    }
}

fn display(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}
