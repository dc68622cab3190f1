use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive portfolio (full-screen TUI)")]
    View {
        #[arg(long, help = "Frames per second for the animation loop")]
        fps: Option<u16>,

        #[arg(long, help = "Particle count for the backdrop")]
        particles: Option<usize>,

        #[arg(long, help = "Pair distance below which particles are linked")]
        link_distance: Option<f64>,
    },

    #[command(about = "Inspect portfolio sections without the TUI")]
    Section {
        #[command(subcommand)]
        command: SectionCommand,
    },
}

#[derive(Subcommand)]
pub enum SectionCommand {
    #[command(about = "List the declared sections in document order")]
    List,

    #[command(about = "Print one section's content")]
    Show {
        #[arg(help = "Section name, e.g. 'projects' (see 'section list')")]
        name: String,
    },
}
