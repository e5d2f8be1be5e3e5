//! Catalog CLI commands
//!
//! Read-only queries against the merged extension catalog.

use anyhow::{Context, Result};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use extmarket_core::catalog::{CatalogIndex, Category, ExtensionRecord};
use extmarket_core::filter::{filter_category, result_summary};

const DESCRIPTION_WIDTH: usize = 50;

/// Table row for extension listings
#[derive(Tabled)]
struct ExtensionRow {
    #[tabled(rename = "Package")]
    package_name: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Class")]
    extension_class: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&ExtensionRecord> for ExtensionRow {
    fn from(record: &ExtensionRecord) -> Self {
        let name = if record.is_recommended() {
            format!("{} *", record.name)
        } else {
            record.name.clone()
        };
        Self {
            package_name: record.package_name.clone(),
            name,
            extension_class: record.extension_class.clone(),
            author: record.author.clone(),
            description: truncate(record.short_description(), DESCRIPTION_WIDTH),
        }
    }
}

/// Table row for category counts
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Extensions")]
    count: usize,
}

/// Shorten to `width` characters, marking the cut with "..."
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

pub(crate) fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ExtensionRecord>,
{
    let rows: Vec<ExtensionRow> = records.into_iter().map(ExtensionRow::from).collect();
    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

pub fn execute_search(
    index: &CatalogIndex,
    query: Option<&str>,
    category: &str,
    json_output: bool,
) -> Result<()> {
    let category = Category::parse(category);
    let results = filter_category(index, &category, query.unwrap_or(""));

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if let Category::Unknown(key) = &category {
        println!("Unknown category '{key}'.");
        println!("\nRun 'extmarket categories' to see available categories.");
        return Ok(());
    }

    if results.is_empty() {
        println!("No extensions found.");
        return Ok(());
    }

    println!("{}:\n", result_summary(results.len()));
    println!("{}", render_records(results));

    Ok(())
}

/// Render the detail view for one extension
pub(crate) fn format_details(record: &ExtensionRecord) -> String {
    let mut lines = vec![
        format!("Extension: {}", record.name),
        format!("Package:   {}", record.package_name),
        format!("Type:      {}", record.extension_type),
    ];
    if !record.extension_class.is_empty() {
        lines.push(format!("Class:     {}", record.extension_class));
    }
    if record.is_recommended() {
        lines.push("Featured:  yes".to_string());
    }

    if !record.description.is_empty() {
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.extend(record.description.lines().map(|line| format!("  {line}")));
    }

    lines.push(String::new());
    lines.push(format!("Author:            {}", record.author));
    lines.push(format!("Extension author:  {}", record.extension_author));
    lines.push(format!("License:           {}", record.license));
    lines.push(format!("Platform version:  {}", record.extension_platform_version));

    lines.push(String::new());
    lines.push("Links:".to_string());
    lines.push(format!("  Extension: {}", record.extension_website));
    if record.has_distinct_origin() {
        lines.push(format!("  Origin:    {}", record.website));
    }

    if !record.requirements.is_empty() {
        lines.push(String::new());
        lines.push("Requirements:".to_string());
        lines.push(format!("  {}", record.requirements));
    }

    lines.join("\n")
}

pub(crate) fn print_details(record: &ExtensionRecord) {
    println!("{}", format_details(record));
}

pub fn execute_show(index: &CatalogIndex, package_name: &str, json_output: bool) -> Result<()> {
    let record = index
        .find(package_name)
        .with_context(|| format!("Extension '{package_name}' not found in catalog"))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print_details(record);
    }

    Ok(())
}

pub fn execute_categories(index: &CatalogIndex, json_output: bool) -> Result<()> {
    let counts = index.category_counts();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    let rows: Vec<CategoryRow> = counts
        .iter()
        .map(|count| CategoryRow {
            key: count.category.key().to_string(),
            label: count.label.to_string(),
            count: count.count,
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");

    Ok(())
}

pub fn execute_featured(index: &CatalogIndex, limit: usize, json_output: bool) -> Result<()> {
    let featured = index.featured(limit);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&featured)?);
        return Ok(());
    }

    if featured.is_empty() {
        println!("No featured extensions.");
        return Ok(());
    }

    println!("Featured extensions:\n");
    println!("{}", render_records(featured));

    Ok(())
}
