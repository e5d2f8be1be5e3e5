//! View-state CLI commands
//!
//! `view` renders the frame a shareable URL describes; `session` drives a
//! controller through scripted UI actions over an in-memory history.

use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use extmarket_core::catalog::{CatalogIndex, Category};
use extmarket_core::config::MarketplaceConfig;
use extmarket_core::view::{Layout, MemoryNavigator, Mode, ViewController, ViewSnapshot};

use crate::catalog_cli::{print_details, render_records};

/// One scripted UI action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Focus,
    Click,
    Type(String),
    Category(Category),
    Open(String),
    Close,
    Layout(Layout),
    Home,
    Back,
    Forward,
    Show,
}

impl FromStr for SessionAction {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };

        let action = match verb {
            "focus" => SessionAction::Focus,
            "click" => SessionAction::Click,
            // Text is taken verbatim so trailing spaces survive
            "type" => SessionAction::Type(rest.to_string()),
            "category" => SessionAction::Category(Category::parse(rest.trim())),
            "open" => {
                let package_name = rest.trim();
                if package_name.is_empty() {
                    bail!("'open' needs a package name");
                }
                SessionAction::Open(package_name.to_string())
            }
            "close" => SessionAction::Close,
            "layout" => {
                let layout = rest.trim();
                SessionAction::Layout(Layout::parse(layout).ok_or_else(|| {
                    anyhow!("Unknown layout '{layout}' (expected grid or list)")
                })?)
            }
            "home" => SessionAction::Home,
            "back" => SessionAction::Back,
            "forward" => SessionAction::Forward,
            "show" => SessionAction::Show,
            other => bail!("Unknown action '{other}'"),
        };
        Ok(action)
    }
}

/// Parse a session script, skipping blank lines and `#` comments
pub fn parse_script(script: &str) -> Result<Vec<SessionAction>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(number, line)| {
            line.parse()
                .with_context(|| format!("Invalid action on line {}", number + 1))
        })
        .collect()
}

/// Apply one action, returning the URL query afterwards
pub fn apply_action(
    controller: &mut ViewController<MemoryNavigator>,
    action: &SessionAction,
) -> String {
    match action {
        SessionAction::Focus => controller.focus_search(),
        SessionAction::Click => controller.click_search(),
        SessionAction::Type(text) => controller.input_search(text),
        SessionAction::Category(category) => controller.select_category(category.clone()),
        SessionAction::Open(package_name) => {
            if !controller.open_extension(package_name) {
                warn!(package_name = %package_name, "Extension not in catalog; ignoring");
            }
        }
        SessionAction::Close => controller.close_extension(),
        SessionAction::Layout(layout) => controller.set_layout(*layout),
        SessionAction::Home => controller.return_to_landing(),
        SessionAction::Back => {
            if controller.navigator_mut().back() {
                controller.on_navigate();
            } else {
                debug!("Already at the oldest history entry");
            }
        }
        SessionAction::Forward => {
            if controller.navigator_mut().forward() {
                controller.on_navigate();
            } else {
                debug!("Already at the newest history entry");
            }
        }
        SessionAction::Show => {}
    }
    controller.navigator().current_query()
}

fn print_snapshot(snapshot: &ViewSnapshot<'_>, query: &str) {
    println!("URL:      {}", if query.is_empty() { "(none)" } else { query });
    println!("Mode:     {}", snapshot.mode);
    println!("Layout:   {}", snapshot.layout);
    println!("Category: {}", snapshot.category);
    if !snapshot.search_text.is_empty() {
        println!("Search:   {:?}", snapshot.search_text);
    }
    println!();

    match snapshot.mode {
        Mode::Landing => {
            if snapshot.featured.is_empty() {
                println!("No featured extensions.");
            } else {
                println!("Featured extensions:\n");
                println!("{}", render_records(snapshot.featured.iter().copied()));
            }
        }
        Mode::Browse => {
            println!("{}", snapshot.summary);
            if !snapshot.visible.is_empty() {
                println!();
                match snapshot.layout {
                    Layout::Grid => {
                        println!("{}", render_records(snapshot.visible.iter().copied()))
                    }
                    Layout::List => {
                        for record in &snapshot.visible {
                            println!("  {} ({})", record.name, record.package_name);
                        }
                    }
                }
            }
        }
    }

    if let Some(record) = snapshot.selected {
        println!();
        println!("--- Details ---");
        print_details(record);
    }
}

pub fn execute_view(
    index: Arc<CatalogIndex>,
    config: &MarketplaceConfig,
    url: &str,
    json_output: bool,
) -> Result<()> {
    let controller = ViewController::with_config(index, MemoryNavigator::from_query(url), config);
    let canonical = controller.current_params().to_query();
    let snapshot = controller.snapshot();

    if json_output {
        let output = serde_json::json!({
            "url": canonical,
            "state": controller.state(),
            "snapshot": snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_snapshot(&snapshot, &canonical);
    }

    Ok(())
}

pub fn execute_session(
    index: Arc<CatalogIndex>,
    config: &MarketplaceConfig,
    script: Option<&Path>,
    start: &str,
) -> Result<()> {
    let content = match script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read session script: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read session script from stdin")?;
            buffer
        }
    };
    let actions = parse_script(&content)?;
    debug!(actions = actions.len(), "Parsed session script");

    let mut controller =
        ViewController::with_config(index, MemoryNavigator::from_query(start), config);

    for action in &actions {
        let query = apply_action(&mut controller, action);
        if *action == SessionAction::Show {
            print_snapshot(&controller.snapshot(), &query);
            println!();
        } else {
            println!("{query}");
        }
    }

    debug!(entries = controller.navigator().len(), "Session finished");
    Ok(())
}
