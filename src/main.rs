mod cli;

use cli::{Args, Command};
use gitlab_mr_deps::adapters::outbound::network::ReqwestTransport;
use gitlab_mr_deps::application::dto::CreateMergeRequestDependencyOptions;
use gitlab_mr_deps::application::factories::FormatterFactory;
use gitlab_mr_deps::application::services::MergeRequestDependenciesService;
use gitlab_mr_deps::config::{discover_config, load_config_from_path, Settings};
use gitlab_mr_deps::ports::outbound::RequestOption;
use gitlab_mr_deps::shared::error::ExitCode;
use gitlab_mr_deps::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "gitlab_mr_deps=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    // Load settings: explicit config path, else auto-discovery in cwd
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(config, args.overrides())?;

    // Create adapter and service (Dependency Injection)
    let transport = ReqwestTransport::new(&settings.base_url, settings.token.clone())?
        .with_timeout(settings.timeout);
    let service = MergeRequestDependenciesService::new(transport);

    let request_options: Vec<RequestOption> = settings
        .sudo
        .iter()
        .map(|user| RequestOption::Sudo(user.clone()))
        .collect();

    match args.command {
        Command::List {
            project,
            merge_requests,
            format,
        } => {
            let report = service
                .dependency_report(project, &merge_requests, &request_options)
                .await?;

            let formatter = FormatterFactory::create(format, std::io::stdout().is_terminal());
            print!("{}", formatter.format(&report)?);
        }
        Command::Create {
            project,
            merge_request,
            blocking_id,
        } => {
            let options = CreateMergeRequestDependencyOptions::new(blocking_id);
            let response = service
                .create_dependency(&project, merge_request, &options, &request_options)
                .await?;

            eprintln!(
                "✅ Merge request !{} in {} is now blocked by merge request {} ({})",
                merge_request, project, blocking_id, response.status
            );
        }
        Command::Delete {
            project,
            merge_request,
            blocking_merge_request,
        } => {
            let response = service
                .delete_dependency(&project, merge_request, blocking_merge_request, &request_options)
                .await?;

            eprintln!(
                "✅ Merge request !{} in {} is no longer blocked by !{} ({})",
                merge_request, project, blocking_merge_request, response.status
            );
        }
    }

    Ok(())
}
