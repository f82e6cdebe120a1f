use std::io::Write;

use clap::CommandFactory;
use tracing::{debug, info, instrument};

use crate::builder::{sample_tree, TreeBuilder};
use crate::cli::args::{Cli, Commands, ConfigCommands, OutputArgs, TreeArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::TreeError;
use crate::invert::Strategy;
use crate::render;
use crate::tree::BinaryTree;

/// How listings are written, after CLI flags are layered over settings.
#[derive(Debug, Clone)]
struct View {
    separator: String,
    shape: bool,
}

impl View {
    fn new(settings: &Settings, args: &OutputArgs) -> CliResult<Self> {
        if args.separator.as_deref() == Some("") {
            return Err(CliError::InvalidArgs(
                "--separator must not be empty".to_string(),
            ));
        }
        Ok(Self {
            separator: args
                .separator
                .clone()
                .unwrap_or_else(|| settings.separator.clone()),
            shape: args.shape || settings.show_shape,
        })
    }
}

pub fn execute_command<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "effective settings");

    match &cli.command {
        Some(Commands::Demo(output)) => _demo(&View::new(&settings, output)?, out),
        Some(Commands::Invert {
            strategy,
            output,
            tree,
        }) => _invert(
            strategy.unwrap_or(settings.strategy),
            &View::new(&settings, output)?,
            tree,
            out,
        ),
        Some(Commands::Print { output, tree }) => {
            _print(&View::new(&settings, output)?, tree, out)
        }
        Some(Commands::Config { command }) => _config(command, &settings, out),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, out);
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run with --help".to_string(),
        )),
    }
}

/// Sample tree: original, after recursive inversion, back after iterative inversion.
#[instrument(skip(out))]
fn _demo<W: Write>(view: &View, out: &mut W) -> CliResult<()> {
    let mut tree = sample_tree();
    output::header(out, "BINARY TREE INVERSION").map_err(TreeError::from)?;

    listing(out, "Original tree", &tree, view)?;

    BinaryTree::invert_recursive(tree.root_mut());
    listing(out, "After recursive inversion", &tree, view)?;

    output::info(
        out,
        "Now it will return to original format after iterative inversion.",
    )
    .map_err(TreeError::from)?;
    BinaryTree::invert_iterative(tree.root_mut());
    listing(out, "After iterative inversion", &tree, view)?;
    Ok(())
}

#[instrument(skip(out))]
fn _invert<W: Write>(
    strategy: Strategy,
    view: &View,
    args: &TreeArgs,
    out: &mut W,
) -> CliResult<()> {
    let mut tree = TreeBuilder::parse(args.slots.as_slice())?.build()?;
    info!(nodes = tree.len(), height = tree.height(), %strategy, "tree ready");

    listing(out, "Original tree", &tree, view)?;
    tree.invert_with(strategy);
    listing(out, &format!("After {} inversion", strategy), &tree, view)?;
    Ok(())
}

#[instrument(skip(out))]
fn _print<W: Write>(view: &View, args: &TreeArgs, out: &mut W) -> CliResult<()> {
    let tree = TreeBuilder::parse(args.slots.as_slice())?.build()?;
    listing(out, "Tree", &tree, view)
}

fn _config<W: Write>(command: &ConfigCommands, settings: &Settings, out: &mut W) -> CliResult<()> {
    let text = match command {
        ConfigCommands::Show => settings.to_toml()?,
        ConfigCommands::Template => Settings::template(),
    };
    write!(out, "{}", text).map_err(TreeError::from)?;
    Ok(())
}

/// One labelled in-order line, plus the shape when requested.
fn listing<W: Write>(out: &mut W, label: &str, tree: &BinaryTree, view: &View) -> CliResult<()> {
    let emit = |out: &mut W| -> std::io::Result<()> {
        output::label(out, label)?;
        render::write_in_order(tree.root(), out, &view.separator)?;
        writeln!(out)?;
        if view.shape {
            for line in render::to_termtree(tree.root()).to_string().lines() {
                output::detail(out, line)?;
            }
        }
        Ok(())
    };
    emit(out).map_err(|e| CliError::from(TreeError::from(e)))
}
