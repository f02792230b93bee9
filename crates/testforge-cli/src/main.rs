use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, WrapErr};
use tracing_subscriber::EnvFilter;

use testforge_core::config::DEFAULT_CONFIG_FILE;
use testforge_core::generation::unique_test_types;
use testforge_core::{
    ci_config, ci_export, compare, export_suite, CiProvider, Config, ExportSink, FileExporter,
    Framework, TestGenerationConfig, TestType,
};

mod output;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "testforge")]
#[command(about = "Generate test file stubs for front-end components", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Generation options shared by commands that build suites.
#[derive(clap::Args, Clone)]
struct GenerateArgs {
    /// Test framework (jest, vitest, cypress, playwright, mocha, jasmine)
    #[arg(short, long)]
    framework: Option<Framework>,

    /// Comma-separated test types (unit, integration, e2e, performance, accessibility)
    #[arg(short, long, value_delimiter = ',')]
    types: Vec<TestType>,

    /// Seed for the simulated runner
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a test suite for a component file ("-" reads stdin)
    Generate {
        file: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,

        /// Run the suite this many times after generating it
        #[arg(long, default_value_t = 0)]
        run: usize,

        /// Write the generated test files to the export directory
        #[arg(long)]
        export: bool,

        /// Export directory (overrides config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print generated test code
        #[arg(long)]
        show_code: bool,

        /// Print the session as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate and run suites for two components and compare the results
    Compare {
        left: PathBuf,
        right: PathBuf,

        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Print or save a CI pipeline config
    Ci {
        /// github, gitlab, jenkins or azure
        provider: CiProvider,

        /// Directory to write `<provider>-ci.yml` into
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List supported test type and framework combinations
    Templates,
    /// Write a default testforge.toml to the current directory
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load().wrap_err("failed to load configuration")?;

    match cli.command {
        Commands::Generate {
            file,
            args,
            run,
            export,
            out,
            show_code,
            json,
        } => {
            let source = read_source(&file)?;
            let generation = generation_config(&config, &args);
            let mut session = Session::start(&config, args.seed);

            let suite = session.generate(&source, &generation)?;
            for _ in 0..run {
                session.run(&suite.id, !json).await?;
            }

            let suite = session.suite(&suite.id)?;
            if json {
                output::print_session_json(session.store())?;
            } else {
                output::print_suite(suite, show_code);
                if run > 0 {
                    output::print_history(session.store());
                }
            }

            if export || out.is_some() {
                let dir = out.unwrap_or_else(|| config.export.output_path());
                let paths = FileExporter::new(&dir).save_all(&export_suite(suite))?;
                output::print_written(&paths, json)?;
            }

            session.finish().await;
        }
        Commands::Compare { left, right, args } => {
            let generation = generation_config(&config, &args);
            let mut session = Session::start(&config, args.seed);

            let left_suite = session.generate(&read_source(&left)?, &generation)?;
            let right_suite = session.generate(&read_source(&right)?, &generation)?;
            session.run(&left_suite.id, true).await?;
            session.run(&right_suite.id, true).await?;

            match compare(session.store(), &left_suite.id, &right_suite.id) {
                Some(diff) => output::print_comparison(&diff),
                None => println!("Nothing to compare."),
            }

            session.finish().await;
        }
        Commands::Ci { provider, out } => match out {
            Some(dir) => {
                let path = FileExporter::new(dir).save(&ci_export(provider))?;
                output::print_written(&[path], false)?;
            }
            None => println!("{}", ci_config(provider)),
        },
        Commands::Templates => output::print_templates(),
        Commands::InitConfig { force } => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", DEFAULT_CONFIG_FILE);
            }
            std::fs::write(path, Config::default_config_string())
                .wrap_err_with(|| format!("failed to write {}", DEFAULT_CONFIG_FILE))?;
            println!("Wrote {}", DEFAULT_CONFIG_FILE);
        }
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TESTFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Merges CLI flags over the configured generation defaults.
fn generation_config(config: &Config, args: &GenerateArgs) -> TestGenerationConfig {
    let mut generation = config.generation.clone();
    if let Some(framework) = args.framework {
        generation.framework = framework;
    }
    if !args.types.is_empty() {
        generation.test_types = unique_test_types(args.types.iter().copied());
    }
    generation
}

fn read_source(path: &Path) -> color_eyre::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .wrap_err("failed to read stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}
