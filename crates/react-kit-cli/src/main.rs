//! React Kit CLI - Create a new React project with modern tooling

use anyhow::Result;
use clap::Parser;
use react_kit_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "react-kit")]
#[command(about = "Create a new React project with modern tooling")]
#[command(version)]
pub struct Args {
    /// Name of the project ("." scaffolds into the current directory)
    pub project_name: Option<String>,

    /// Language variant (typescript/ts or javascript/js)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Add-ons to enable (comma-separated: redux,shadcn)
    #[arg(short, long, value_delimiter = ',')]
    pub add_ons: Option<Vec<String>>,

    /// Local directory to use for overlay packs instead of fetching from remote (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            language: args.language,
            add_ons: args.add_ons,
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = react_kit_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
