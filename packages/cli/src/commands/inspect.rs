use crate::commands::open_session;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use designable_common::{walk_node, ComponentNode, IdCollector, Visitor};
use designable_editor::{Capabilities, DesignerSession, ResizeAxis};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Layout file (defaults to the configured tree file)
    pub tree: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.tree_path(cwd, args.tree.as_ref());
    let session = open_session(&config, &path)?;

    match args.format.as_str() {
        "text" => println!("{}", render_outline(&session)),
        "json" => println!("{}", serde_json::to_string_pretty(&capability_report(&session))?),
        other => {
            return Err(anyhow::anyhow!(
                "Invalid format: {}. Use: text or json",
                other
            ))
        }
    }

    Ok(())
}

/// Indented outline of the tree, one node per line with its affordances
pub(crate) fn render_outline(session: &DesignerSession) -> String {
    let mut printer = OutlinePrinter {
        session,
        lines: Vec::new(),
    };
    printer.visit_node(session.engine().root(), 0);
    printer.lines.join("\n")
}

/// Capabilities of every node in depth-first order
pub(crate) fn capability_report(session: &DesignerSession) -> Vec<Capabilities> {
    IdCollector::collect(session.engine().root())
        .iter()
        .filter_map(|id| session.capabilities(id))
        .collect()
}

struct OutlinePrinter<'a> {
    session: &'a DesignerSession,
    lines: Vec<String>,
}

impl Visitor for OutlinePrinter<'_> {
    fn visit_node(&mut self, node: &ComponentNode, depth: usize) {
        let mut flags = Vec::new();
        if let Some(caps) = self.session.capabilities(&node.id) {
            if caps.droppable {
                flags.push("drop".to_string());
            }
            for axis in &caps.resizable {
                flags.push(match axis {
                    ResizeAxis::Width => "resize:w".to_string(),
                    ResizeAxis::Height => "resize:h".to_string(),
                });
            }
            if caps.translatable {
                flags.push("i18n".to_string());
            }
        }

        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(" "))
        };

        self.lines.push(format!(
            "{}{} {}{} {}",
            "  ".repeat(depth),
            node.component_type.bright_white().bold(),
            node.id.dimmed(),
            flags.yellow(),
            self.session.label_for(&node.component_type)
        ));

        walk_node(self, node, depth);
    }
}
