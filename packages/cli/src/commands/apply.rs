use crate::commands::open_session;
use crate::config::Config;
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use designable_common::{NodeTemplate, Props};
use designable_editor::{DesignerSession, ResizeAxis, ResizeDirection};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Stands for the currently selected node in a script
const SELECTED: &str = "$selected";

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Edit script: a JSON array of steps
    pub script: PathBuf,

    /// Layout file (defaults to the configured tree file)
    #[arg(short, long)]
    pub tree: Option<PathBuf>,

    /// Write the result here instead of back to the layout file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run the script without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// One step of an edit script
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ScriptStep {
    /// Instantiate a catalog component
    Insert { parent: String, component: String },

    /// Add a raw node
    Add {
        parent: String,
        #[serde(flatten)]
        node: NodeTemplate,
    },

    Remove { id: String },

    Update { id: String, props: Props },

    Resize {
        id: String,
        axis: ResizeAxis,
        direction: Direction,
    },

    Select { id: Option<String> },

    Undo,

    Redo,

    /// Run the inner steps as one undo step
    Batch {
        description: String,
        steps: Vec<ScriptStep>,
    },
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
}

impl From<Direction> for ResizeDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Increase => ResizeDirection::Increase,
            Direction::Decrease => ResizeDirection::Decrease,
        }
    }
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let tree_path = config.tree_path(cwd, args.tree.as_ref());
    let mut session = open_session(&config, &tree_path)?;

    let script_path = PathBuf::from(cwd).join(&args.script);
    let content = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read script {}", script_path.display()))?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    println!(
        "{} {} steps from {}",
        "▶".bright_blue(),
        steps.len(),
        args.script.display()
    );

    run_script(&mut session, &steps)?;

    let output = args
        .output
        .map(|path| PathBuf::from(cwd).join(path))
        .unwrap_or(tree_path);

    if args.dry_run {
        println!("{}", session.engine().export_tree()?);
    } else {
        fs::write(&output, session.engine().export_tree()?)?;
        println!("{} Wrote {}", "✓".green(), output.display());
    }

    Ok(())
}

/// Run every step in order, stopping at the first one that fails
pub(crate) fn run_script(session: &mut DesignerSession, steps: &[ScriptStep]) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        run_step(session, step).with_context(|| format!("Step {} failed", index + 1))?;
    }
    Ok(())
}

fn run_step(session: &mut DesignerSession, step: &ScriptStep) -> Result<()> {
    debug!(?step, "running script step");

    match step {
        ScriptStep::Insert { parent, component } => {
            let parent = resolve(session, parent)?;
            let id = session.insert_from_catalog(&parent, component)?;
            println!("  {} {} {}", "+".green(), component, id.dimmed());
        }

        ScriptStep::Add { parent, node } => {
            let parent = resolve(session, parent)?;
            let Some(id) = session.engine_mut().add_component(&parent, node.clone()) else {
                bail!("Parent {} not found", parent);
            };
            println!("  {} {} {}", "+".green(), node.component_type, id.dimmed());
        }

        ScriptStep::Remove { id } => {
            let id = resolve(session, id)?;
            if !session.engine_mut().remove_component(&id) {
                bail!("Cannot remove {}", id);
            }
            println!("  {} {}", "-".red(), id);
        }

        ScriptStep::Update { id, props } => {
            let id = resolve(session, id)?;
            if !session.engine_mut().update_component_props(&id, props.clone()) {
                bail!("Component {} not found", id);
            }
            println!("  {} {}", "~".yellow(), id);
        }

        ScriptStep::Resize {
            id,
            axis,
            direction,
        } => {
            let id = resolve(session, id)?;
            if !session.resize(&id, *axis, (*direction).into()) {
                // Hitting the floor is not an error
                println!("  {} {} unchanged", "=".dimmed(), id);
            } else {
                println!("  {} {} {}", "↔".yellow(), id, axis.style_key());
            }
        }

        ScriptStep::Select { id } => {
            let id = id.as_deref().map(|id| resolve(session, id)).transpose()?;
            session.engine_mut().select_component(id.as_deref());
        }

        ScriptStep::Undo => {
            if !session.engine_mut().undo() {
                bail!("Nothing to undo");
            }
        }

        ScriptStep::Redo => {
            if !session.engine_mut().redo() {
                bail!("Nothing to redo");
            }
        }

        ScriptStep::Batch { description, steps } => {
            session.engine_mut().begin_batch(description.clone());
            let result = run_script(session, steps);
            session.engine_mut().end_batch();
            result?;
        }
    }

    Ok(())
}

fn resolve(session: &DesignerSession, id: &str) -> Result<String> {
    if id != SELECTED {
        return Ok(id.to_string());
    }

    match session.engine().state().selected_id() {
        Some(selected) => Ok(selected.to_string()),
        None => bail!("Script refers to {} but nothing is selected", SELECTED),
    }
}
