use super::args::{Cli, Commands, SectionCommand};
use super::handlers;
use crate::config::{AnimationSettings, Config};
use anyhow::Result;
use folio_types::Theme;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let theme = resolve_theme(&cli, &config)?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::View {
            fps,
            particles,
            link_distance,
        } => {
            let settings =
                AnimationSettings::resolve(&config.animation, particles, link_distance, fps);
            handlers::view::handle(theme, settings)
        }

        Commands::Section { command } => match command {
            SectionCommand::List => handlers::section::list(cli.format),
            SectionCommand::Show { name } => handlers::section::show(&name, cli.format, &theme),
        },
    }
}

/// Flag wins over config file; the default preset otherwise
fn resolve_theme(cli: &Cli, config: &Config) -> Result<Theme> {
    if let Some(arg) = cli.theme {
        return Ok(arg.resolve());
    }
    if let Some(name) = &config.theme {
        return Ok(Theme::by_name(name)?);
    }
    Ok(Theme::default())
}

fn show_guidance() {
    println!("folio - a terminal portfolio\n");
    println!("Quick commands:");
    println!("  folio view                        # Open the interactive portfolio");
    println!("  folio section list                # List the declared sections");
    println!("  folio section show projects       # Print one section as text");
    println!("  folio section show home --format json\n");
    println!("For more commands:");
    println!("  folio --help");
}
