use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use designable_editor::DesignerSession;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Override the configured language
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn catalog(args: CatalogArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(language) = args.language {
        config.language = language;
    }

    let session = DesignerSession::with_defaults(config.session_options());
    println!("{}", render_catalog(&session, &args.format)?);
    Ok(())
}

/// Catalog grouped for the palette, as text or JSON
pub(crate) fn render_catalog(session: &DesignerSession, format: &str) -> Result<String> {
    let groups = session.catalog().components_by_group();

    match format {
        "json" => Ok(serde_json::to_string_pretty(&groups)?),
        "text" => {
            let mut out = String::new();
            for (group, components) in &groups {
                let heading = format!("components.{group}");
                out.push_str(&format!("{}\n", session.translate(&heading).bright_blue().bold()));

                for component in components {
                    let marker = if component.is_container { "▣" } else { "▢" };
                    out.push_str(&format!(
                        "  {} {} {}\n",
                        marker,
                        component.id.bright_white(),
                        session.label_for(&component.id).dimmed()
                    ));
                }
            }
            Ok(out.trim_end().to_string())
        }
        other => Err(anyhow::anyhow!(
            "Invalid format: {}. Use: text or json",
            other
        )),
    }
}
