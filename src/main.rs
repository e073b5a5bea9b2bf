use dotenv::dotenv;
use human_panic::setup_panic;
use std::process::ExitCode;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use rust_peer_eval::config::AppConfig;
use rust_peer_eval::errors::PeerEvalError;
use rust_peer_eval::services::submissions::{audit_submissions, load_submissions};

fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init().map_err(PeerEvalError::from) {
        eprintln!("{}", e.format_simple());
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting submission check...
        Project: {}
        Version: {}
        System: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.system_name
    );

    // 命令行参数优先于配置文件
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.audit.input_path.clone());

    let rows = match load_submissions(&input_path) {
        Ok(rows) => rows,
        Err(e) => {
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            error!("{}", e.format_simple());
            return ExitCode::FAILURE;
        }
    };

    let report = audit_submissions(&rows, config.audit.indent);

    debug!(
        "Submission check completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
