use crate::catalog::Catalog;
use crate::config::Config;
use crate::filter::filter_endpoints;
use crate::render::render_endpoint;
use crate::types::{CategoryKey, Endpoint};
use clap::{Parser, Subcommand};
use color_eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "nkezefuu-docs")]
#[command(about = "Terminal browser for the NKEZEFUU API documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Category to open the browser on
    #[arg(short, long, global = true)]
    pub category: Option<CategoryKey>,

    /// Initial search term
    #[arg(short, long, global = true)]
    pub search: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all categories with their endpoint counts
    Categories,
    /// List the endpoints of one category
    List {
        /// Print the endpoints as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the request, usage and responses of one endpoint
    Show {
        /// Endpoint id, e.g. auth-login
        id: String,
    },
    /// Print the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        init: bool,
    },
}

pub fn categories_text(catalog: &Catalog) -> String {
    let width = catalog
        .categories()
        .iter()
        .map(|c| c.key.as_str().len())
        .max()
        .unwrap_or(0);

    catalog
        .categories()
        .iter()
        .map(|category| {
            format!(
                "{:width$}  {} ({})\n",
                category.key,
                category.name,
                catalog.endpoints_in(category.key).len(),
            )
        })
        .collect()
}

/// Endpoints selected by `list`, first category when none is given
pub fn list_endpoints<'a>(
    catalog: &'a Catalog,
    category: Option<CategoryKey>,
    search: Option<&str>,
) -> Vec<&'a Endpoint> {
    let category = category.unwrap_or_else(|| catalog.first_category());
    filter_endpoints(catalog.endpoints(), category, search.unwrap_or(""))
}

pub fn list_text(endpoints: &[&Endpoint]) -> String {
    endpoints
        .iter()
        .map(|e| format!("{:7} {:45} {}\n", e.method, e.path, e.id))
        .collect()
}

pub fn list_json(endpoints: &[&Endpoint]) -> Result<String> {
    Ok(serde_json::to_string_pretty(endpoints)?)
}

pub fn show_text(catalog: &Catalog, id: &str) -> Result<String> {
    let endpoint = catalog.require_endpoint(id)?;
    Ok(render_endpoint(endpoint).to_plain_text())
}

/// Print the configuration, optionally writing it to disk first
pub fn config_command(config: &Config, init: bool) -> Result<String> {
    let mut out = String::new();
    if init {
        let path = config.save()?;
        tracing::info!(path = %path.display(), "wrote config file");
        out.push_str(&format!("# written to {}\n", path.display()));
    } else {
        out.push_str(&format!("# {}\n", Config::config_path()?.display()));
    }
    out.push_str(&config.to_toml()?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tui_flags() {
        let cli = Cli::try_parse_from(["nkezefuu-docs", "--category", "mobile", "-s", "login"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.category, Some(CategoryKey::Mobile));
        assert_eq!(cli.search.as_deref(), Some("login"));
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = Cli::try_parse_from(["nkezefuu-docs", "--category", "nope"]).unwrap_err();
        assert!(err.to_string().contains("unknown category 'nope'"));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["nkezefuu-docs", "list", "--json", "-c", "password"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::List { json: true })));
        assert_eq!(cli.category, Some(CategoryKey::Password));

        let cli = Cli::try_parse_from(["nkezefuu-docs", "show", "auth-login"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { ref id }) if id == "auth-login"));
    }

    #[test]
    fn test_categories_text() {
        let text = categories_text(&Catalog::builtin());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("authentication"));
        assert!(lines[0].ends_with("(2)"));
        assert!(lines[9].starts_with("mobile"));
    }

    #[test]
    fn test_list_defaults_to_first_category() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = list_endpoints(&catalog, None, None)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["auth-login", "auth-refresh"]);

        let text = list_text(&list_endpoints(&catalog, None, Some("LOGIN")));
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("POST    /api/auth/login"));
    }

    #[test]
    fn test_list_json() {
        let catalog = Catalog::builtin();
        let json = list_json(&list_endpoints(&catalog, Some(CategoryKey::Mobile), None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert!(!items.is_empty());
        assert_eq!(items[0]["category"], "mobile");
        assert!(items[0]["responses"].is_array());
    }

    #[test]
    fn test_show_unknown_endpoint() {
        let catalog = Catalog::builtin();
        let err = show_text(&catalog, "missing").unwrap_err();
        assert!(err.to_string().contains("missing"));

        let text = show_text(&catalog, "auth-login").unwrap();
        assert!(text.starts_with("POST /api/auth/login\n"));
    }
}
