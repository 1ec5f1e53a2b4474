//! Charm-style CLI prompts using cliclack

use crate::config::{AddOn, Language, ProjectConfig, CURRENT_DIR};
use crate::overlay::{OverlaySource, OverlayStore};
use crate::patcher;
use crate::runtime::{check, npm, version};
use crate::{deps, USER_AGENT};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default project name offered by the name prompt
const DEFAULT_PROJECT_NAME: &str = "my-react-app";

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, or "." for the current directory
    pub project_name: Option<String>,

    /// Language variant (typescript/ts or javascript/js)
    pub language: Option<String>,

    /// Add-ons to enable (redux, shadcn)
    pub add_ons: Option<Vec<String>>,

    /// Local directory to use for overlay packs instead of fetching from remote
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("React Project Kit")?;
    cliclack::log::info("Create a new React project with modern tooling")?;

    // Step 1: Check runtimes (Node.js + npm)
    handle_runtime_check(&args)?;

    // Step 2: Collect the configuration; the working directory is read once
    // here and threaded through every later step
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = collect_config(&args, &cwd)?;

    // Step 3: Setup overlay store
    let store = setup_store(&args)?;

    // Step 4: Generate, overlay, install
    let project_root = config.project_root(&cwd);
    create_project(&store, &config, &cwd, &project_root).await?;

    // Step 5: Optional shadcn/ui setup
    if config.has(AddOn::Shadcn) {
        setup_shadcn(&project_root, config.language).await?;
    }

    // Step 6: Show next steps
    print_next_steps(&config)?;

    Ok(())
}

fn handle_runtime_check(args: &CreateArgs) -> Result<()> {
    match check::check_runtimes() {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            cliclack::log::success(format!("Detected runtimes: {}", runtime_info.join(", ")))?;

            // Advisory only: an old Node warns but does not block
            if let Some(warning) = runtimes
                .iter()
                .find(|r| r.name == "Node.js")
                .and_then(|r| r.version.as_deref())
                .and_then(version::node_version_warning)
            {
                cliclack::log::warning(warning)?;
            }

            Ok(())
        }
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;

            // In non-interactive mode there is nothing to ask
            if args.yes {
                anyhow::bail!("Please install the missing runtimes and try again.");
            }

            let action: &str = cliclack::select("What would you like to do?")
                .item("docs", format!("Open Node.js website ({})", check::NODE_DOCS_URL), "")
                .item("cancel", "Cancel setup", "")
                .interact()?;

            if action == "docs" {
                open::that(check::NODE_DOCS_URL)?;
                cliclack::outro("After installing Node.js, run this command again.")?;
                std::process::exit(0);
            }

            anyhow::bail!("Setup cancelled.");
        }
    }
}

/// Collect the full project configuration from flags and prompts.
///
/// Every field is fixed once this returns; no later step re-validates or
/// re-derives it.
fn collect_config(args: &CreateArgs, cwd: &Path) -> Result<ProjectConfig> {
    let project_name = select_project_name(args, cwd)?;
    let language = select_language(args)?;
    let add_ons = select_add_ons(args)?;

    Ok(ProjectConfig::new(project_name, language, add_ons))
}

fn select_project_name(args: &CreateArgs, cwd: &Path) -> Result<String> {
    let validate = |cwd: &Path, input: &str| -> Result<(), String> {
        if input.trim().is_empty() {
            return Err("Project name cannot be empty".to_string());
        }
        if input != CURRENT_DIR && cwd.join(input).exists() {
            return Err("Directory already exists".to_string());
        }
        Ok(())
    };

    // A name given on the command line (or implied by --yes) is validated
    // once; a bad value is an error rather than a re-ask.
    if let Some(name) = &args.project_name {
        validate(cwd, name).map_err(|e| anyhow::anyhow!("{}: {}", e, name))?;
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name.clone());
    }

    if args.yes {
        validate(cwd, DEFAULT_PROJECT_NAME)
            .map_err(|e| anyhow::anyhow!("{}: {}", e, DEFAULT_PROJECT_NAME))?;
        cliclack::log::info(format!("Project name: {}", DEFAULT_PROJECT_NAME))?;
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }

    let cwd_owned = cwd.to_path_buf();
    let name: String = cliclack::input("What is your project named?")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(move |input: &String| validate(&cwd_owned, input))
        .interact()?;

    Ok(name)
}

fn select_language(args: &CreateArgs) -> Result<Language> {
    if let Some(lang_str) = &args.language {
        let language = Language::parse(lang_str)
            .ok_or_else(|| anyhow::anyhow!("Unknown language: {}", lang_str))?;
        cliclack::log::info(format!("Language: {}", language))?;
        return Ok(language);
    }

    if args.yes {
        cliclack::log::info(format!("Language: {}", Language::TypeScript))?;
        return Ok(Language::TypeScript);
    }

    let language: Language = cliclack::select("Would you like to use TypeScript or JavaScript?")
        .item(Language::TypeScript, "TypeScript", "")
        .item(Language::JavaScript, "JavaScript", "")
        .interact()?;

    Ok(language)
}

fn select_add_ons(args: &CreateArgs) -> Result<Vec<AddOn>> {
    if let Some(add_on_args) = &args.add_ons {
        let mut add_ons = Vec::new();
        for s in add_on_args {
            match AddOn::parse(s) {
                Some(add_on) => add_ons.push(add_on),
                None => cliclack::log::warning(format!("Unknown add-on: {}", s))?,
            }
        }
        return Ok(add_ons);
    }

    // --yes means "defaults", and the default is no add-ons
    if args.yes {
        return Ok(Vec::new());
    }

    let selected: Vec<AddOn> = cliclack::multiselect("Which optional packages would you like?")
        .item(AddOn::Shadcn, AddOn::Shadcn.display_name(), AddOn::Shadcn.hint())
        .item(AddOn::Redux, AddOn::Redux.display_name(), AddOn::Redux.hint())
        .required(false)
        .interact()?;

    Ok(selected)
}

fn setup_store(args: &CreateArgs) -> Result<OverlayStore> {
    let source = match &args.template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local overlays from {}", path.display()))?;
            OverlaySource::local(path.clone())
        }
        None => OverlaySource::default_remote()?,
    };

    Ok(OverlayStore::new(source, USER_AGENT))
}

async fn create_project(
    store: &OverlayStore,
    config: &ProjectConfig,
    cwd: &Path,
    project_root: &Path,
) -> Result<()> {
    // Base generation; npm's own output is streamed to the terminal
    cliclack::log::step("Creating project files...")?;

    if !config.is_current_dir() {
        tokio::fs::create_dir_all(project_root)
            .await
            .with_context(|| format!("Failed to create {}", project_root.display()))?;
    }

    npm::create_vite_project(cwd, config).await?;

    // Overlay copy - must run after generation, before patching
    let spinner = cliclack::spinner();
    spinner.start("Applying overlay files...");
    let copied = store.apply(&config.overlay_name(), project_root).await?;
    if copied.is_empty() {
        spinner.stop("No overlay files for this configuration");
    } else {
        spinner.stop(format!("Applied {} overlay files", copied.len()));
    }

    // Dependencies: fixed default set, then the add-on-conditional set
    cliclack::log::step("Installing dependencies...")?;
    npm::install_packages(project_root, deps::DEFAULT_DEPENDENCIES).await?;
    npm::install_packages(project_root, &deps::add_on_dependencies(config)).await?;
    cliclack::log::success("Dependencies installed")?;

    Ok(())
}

async fn setup_shadcn(project_root: &Path, language: Language) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Setting up shadcn/ui...");

    match patcher::setup_shadcn(project_root, language).await {
        Ok(()) => {
            spinner.stop("shadcn/ui setup complete");
            Ok(())
        }
        Err(e) => {
            // Earlier steps (generation, install) already succeeded; the
            // partial patches stay in place and the run fails as a whole.
            spinner.stop("Failed to set up shadcn/ui");
            Err(e)
        }
    }
}

fn print_next_steps(config: &ProjectConfig) -> Result<()> {
    let mut steps = Vec::new();

    if !config.is_current_dir() {
        steps.push(format!("cd {}", config.project_name));
    }
    steps.push("npm run dev".to_string());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
