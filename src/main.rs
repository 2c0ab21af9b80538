use leverage_strategy::cli::{CliArgs, OutputFormat};
use leverage_strategy::config::Config;
use leverage_strategy::prompt::render_instructions;
use leverage_strategy::strategy::profiles;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // Logs go to stderr so stdout only carries the rendered output.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn list_profiles() {
    for profile in profiles() {
        let mode = if profile.enable_code_level_protection {
            "automated"
        } else {
            "advisory"
        };
        println!("{:<14} {:<10} {}", profile.id, mode, profile.description);
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = match CliArgs::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        list_profiles();
        return ExitCode::SUCCESS;
    }

    // Initialize tracing before loading so override events are visible
    init_tracing(args.log_level.as_deref());

    let config = match Config::load_with(
        &args.config_path,
        args.override_lookup(|key: &str| env::var(key).ok()),
    ) {
        Ok(c) => c,
        Err(e) => {
            error!(config = %args.config_path, error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };

    info!(
        config = %args.config_path,
        app = %config.app.name,
        env = %config.app.env,
        profile = %config.strategy.profile,
        system_max_leverage = config.strategy.system_max_leverage,
        "Config loaded"
    );

    let params = match config.derive() {
        Ok(params) => params,
        Err(e) => {
            error!(error = %e, "Failed to derive strategy");
            return ExitCode::FAILURE;
        }
    };

    info!(
        strategy = %params.name,
        leverage_min = params.leverage_min,
        leverage_max = params.leverage_max,
        code_level_protection = params.enable_code_level_protection,
        "Strategy derived"
    );

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_instructions(&params, &config.prompt_context()))
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&params) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!(error = %e, "Failed to serialize strategy");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
