//! Non-interactive section output: plain styled text for humans, JSON
//! for scripts.

use crate::args::OutputFormat;
use crate::presentation::formatters::{FormatOptions, format_section, format_section_list};
use anyhow::{Result, anyhow};
use folio_types::content::{Portfolio, portfolio};
use folio_types::{SectionId, Theme, section_descriptors};
use is_terminal::IsTerminal;
use serde_json::json;

pub fn list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&section_descriptors())?);
        }
        OutputFormat::Plain => {
            for line in format_section_list(&options()) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

pub fn show(name: &str, format: OutputFormat, theme: &Theme) -> Result<()> {
    let id = SectionId::from_name(name).map_err(|_| {
        let names: Vec<&str> = SectionId::ALL.iter().map(|s| s.name()).collect();
        anyhow!("unknown section '{}'; expected one of: {}", name, names.join(", "))
    })?;

    match format {
        OutputFormat::Json => {
            println!("{}", section_json(portfolio(), id)?);
        }
        OutputFormat::Plain => {
            for line in format_section(portfolio(), id, theme, &options()) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn options() -> FormatOptions {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
        .clamp(40, 100);
    FormatOptions {
        color: std::io::stdout().is_terminal(),
        width,
    }
}

fn section_json(content: &Portfolio, id: SectionId) -> Result<String> {
    let value = match id {
        SectionId::Hero | SectionId::About => json!(&content.profile),
        SectionId::Education => json!(&content.education),
        SectionId::Experience => json!(&content.experience),
        SectionId::Projects => json!(&content.projects),
        SectionId::Skills => json!({
            "categories": &content.skills,
            "tools": &content.tools,
        }),
        SectionId::Contact => json!(&content.profile.links),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
