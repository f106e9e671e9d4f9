//! Command dispatch: resolves settings, opens the library, prints results.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::AddOutcome;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Config { command }) => return cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let container = ServiceContainer::new(load_settings(cli)?);
    match &cli.command {
        Some(Commands::Search {
            term,
            include_category,
            include_files,
        }) => cmd_search(&container, term, *include_category, *include_files),
        Some(Commands::Show { category }) => cmd_show(&container, category),
        Some(Commands::AddCategory { area, name }) => {
            cmd_add_category(&container, area, name, cli.dry_run)
        }
        Some(Commands::AddId {
            category,
            name,
            placeholder,
        }) => cmd_add_id(&container, category, name, *placeholder, cli.dry_run),
        Some(Commands::Tree {
            indent,
            tabs,
            files,
            fancy,
        }) => cmd_tree(&container, *indent, *tabs, *files, *fancy),
        Some(Commands::Validate) => cmd_validate(&container),
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => Ok(()),
        None => cmd_tree(&container, None, false, false, false),
    }
}

/// Settings from config layers, with `--jd-root` on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(root) = &cli.jd_root {
        settings = settings.with_root(root);
    }
    debug!("library root: {}", settings.root.display());
    Ok(settings)
}

#[instrument(skip(container))]
fn cmd_search(
    container: &ServiceContainer,
    term: &str,
    include_category: bool,
    include_files: bool,
) -> CliResult<()> {
    let library = container.library()?;
    output::info(&library.search(term, include_category, include_files));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, category: &str) -> CliResult<()> {
    let library = container.library()?;
    output::info(&library.get_category(category));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_add_category(
    container: &ServiceContainer,
    area: &str,
    name: &str,
    dry_run: bool,
) -> CliResult<()> {
    let library = container.library()?;
    let outcome = library.add_category(area, name, dry_run)?;
    report_outcome(&outcome, "area");
    Ok(())
}

#[instrument(skip(container))]
fn cmd_add_id(
    container: &ServiceContainer,
    category: &str,
    name: &str,
    placeholder: bool,
    dry_run: bool,
) -> CliResult<()> {
    let library = container.library()?;
    let placeholder = placeholder || container.settings.placeholder;
    let outcome = library.add_identifier(category, name, placeholder, dry_run)?;
    report_outcome(&outcome, "category");
    Ok(())
}

fn report_outcome(outcome: &AddOutcome, parent_kind: &str) {
    match outcome {
        AddOutcome::Created(path) => output::action("Created", &path.display()),
        AddOutcome::DryRun(path) => output::action("Would have created", &path.display()),
        AddOutcome::NoCapacity { parent } => {
            output::warning(&format!("no free slot left in {}", parent))
        }
        AddOutcome::ParentNotFound(code) => {
            output::warning(&format!("no {} found for {}", parent_kind, code))
        }
    }
}

#[instrument(skip(container))]
fn cmd_tree(
    container: &ServiceContainer,
    indent: Option<usize>,
    tabs: bool,
    files: bool,
    fancy: bool,
) -> CliResult<()> {
    let library = container.library()?;
    let mut options = container.tree_options();
    if let Some(width) = indent {
        options.indent_width = width;
    }
    options.use_tabs |= tabs;
    options.print_files |= files;

    if fancy {
        output::info(&library.fancy_tree(options.print_files));
    } else {
        print!("{}", library.print_tree(&options));
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_validate(container: &ServiceContainer) -> CliResult<()> {
    let library = container.library()?;
    let violations = library.validate();
    if violations.is_empty() {
        output::success("no naming violations");
        return Ok(());
    }
    output::header(&format!("{} naming violations", violations.len()));
    for violation in &violations {
        output::failure(violation);
    }
    Err(CliError::Violations(violations.len()))
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
