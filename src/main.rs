use clap::Parser;
use rps_round::utils::{logger, validation::Validate};
use rps_round::{CliConfig, GameEngine, GameError, GameSettings, OutputFormat, RoundReport};
use std::io::{self, Write};

fn run(config: &CliConfig) -> Result<(), GameError> {
    config.validate()?;
    let settings = GameSettings::resolve(config)?;
    tracing::debug!("Effective settings: {:?}", settings);

    let mut engine = GameEngine::from_config(&settings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let report = engine.play_round(&mut input, &mut output)?;
    print_report(&mut output, &report, settings.format)?;
    Ok(())
}

fn print_report<W: Write>(output: &mut W, report: &RoundReport, format: OutputFormat) -> Result<(), GameError> {
    match format {
        OutputFormat::Text => {
            writeln!(output)?;
            writeln!(output, "Computer chose: {}", report.computer_choice)?;
            writeln!(output, "{}", report.message)?;
        }
        OutputFormat::Json => {
            writeln!(output)?;
            writeln!(output, "{}", serde_json::to_string(report)?)?;
        }
    }
    output.flush()?;
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Round failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
