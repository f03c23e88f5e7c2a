use tracing_subscriber::fmt::format::{Compact, Format, Json};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "rps_round=debug,info"
    } else {
        "rps_round=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

// 日誌寫到 stderr，stdout 只留給遊戲輸出
fn stderr_format() -> Format {
    fmt::format()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let format: Format<Compact> = stderr_format().compact();
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr).event_format(format))
        .init();
}

pub fn init_json_logger(verbose: bool) {
    let format: Format<Json> = stderr_format().json();
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .event_format(format),
        )
        .init();
}
