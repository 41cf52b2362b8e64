mod cli;
mod config;

use actiongraph::adapters::outbound::console::StderrProgressReporter;
use actiongraph::adapters::outbound::filesystem::FileSystemReader;
use actiongraph::application::dto::{AnalysisQuery, AnalysisRequest};
use actiongraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use actiongraph::application::read_models::AnalysisReadModelBuilder;
use actiongraph::application::use_cases::AnalyzeTraceUseCase;
use actiongraph::ports::outbound::TraceSource;
use actiongraph::shared::error::ExitCode;
use actiongraph::shared::Result;
use chrono::Utc;
use cli::{Args, Command, DEFAULT_TOP_LIMIT};
use config::ConfigFile;
use std::path::Path;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here as well
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?.unwrap_or_default();

    // Command-line flags win over the config file
    let source = TraceSource::from_arg(
        args.file
            .as_deref()
            .or(config.file.as_deref())
            .unwrap_or(TraceSource::STDIN_ARG),
    );
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let query = build_query(args.command, &config);

    // Create adapters (Dependency Injection)
    let trace_reader = FileSystemReader::new();
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = AnalyzeTraceUseCase::new(trace_reader, progress_reporter);
    let response = use_case.execute(AnalysisRequest::new(source, query))?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let read_model = AnalysisReadModelBuilder::build(&response, Utc::now());
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn build_query(command: Command, config: &ConfigFile) -> AnalysisQuery {
    match command {
        Command::Top { limit } => AnalysisQuery::Top {
            limit: cli::top_limit(limit.or(config.top_limit).unwrap_or(DEFAULT_TOP_LIMIT)),
        },
        Command::Tree { level, packages } => AnalysisQuery::Tree {
            focus: packages,
            level: level.or(config.tree_level).and_then(cli::tree_level),
        },
        Command::Graph { why } => AnalysisQuery::Graph { target: why },
        Command::Types => AnalysisQuery::Types,
    }
}
