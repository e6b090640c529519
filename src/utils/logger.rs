use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log targets of this package: the library and the `compare-roles` binary.
const TARGETS: [&str; 2] = ["compare_role_permissions", "compare_roles"];

/// Default filter when `RUST_LOG` is unset; every crate target gets `level`.
pub fn default_directives(level: &str, fallback: Option<&str>) -> String {
    let mut directives: Vec<String> = TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    if let Some(fallback) = fallback {
        directives.push(fallback.to_string());
    }
    directives.join(",")
}

pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        default_directives("debug", Some("info"))
    } else {
        default_directives("warn", None)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    // 日誌寫到 stderr，stdout 留給報表輸出
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON log lines for running under a service manager or log collector.
pub fn init_json_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives("info", None)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
