use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use designable_editor::DesignerEngine;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// UI language for labels (zh-cn, en-us)
    #[arg(short, long, default_value = "zh-cn")]
    pub language: String,

    /// Layout file to create
    #[arg(short, long, default_value = "layout.json")]
    pub tree_file: String,

    /// Undo levels kept per session (0 = unlimited)
    #[arg(long, default_value_t = 50)]
    pub history_limit: usize,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Designable project...".bright_blue().bold()
    );

    // Empty layout holding only the root
    let tree_path = PathBuf::from(cwd).join(&args.tree_file);
    if !tree_path.exists() {
        if let Some(parent) = tree_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tree_path, DesignerEngine::new().export_tree()?)?;
        println!("  {} Created {}", "✓".green(), args.tree_file);
    }

    let config = Config {
        history_limit: args.history_limit,
        language: args.language.clone(),
        tree_file: args.tree_file.clone(),
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: designable catalog");
    println!("  2. Write an edit script and run: designable apply <script>");
    println!("  3. Run: designable inspect");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_layout() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(
            InitArgs {
                language: "en-us".to_string(),
                tree_file: "pages/home.json".to_string(),
                history_limit: 20,
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.language, "en-us");
        assert_eq!(config.history_limit, 20);

        let layout = fs::read_to_string(dir.path().join("pages/home.json")).unwrap();
        let mut engine = DesignerEngine::new();
        assert!(engine.import_tree(&layout));
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "historyLimit": 7 }"#).unwrap();

        init(
            InitArgs {
                language: "zh-cn".to_string(),
                tree_file: "layout.json".to_string(),
                history_limit: 50,
                force: false,
            },
            &cwd,
        )
        .unwrap();

        assert_eq!(Config::load(&cwd).unwrap().history_limit, 7);
    }
}
