use std::io::Write;
use std::sync::Arc;

use chrono::Local;
use env_logger::Builder;
use log::{LevelFilter, info};

use accesslog_config::Settings;
use accesslog_db::PgConnector;
use accesslog_error::Result;
use accesslog_server::{AccessLogServer, AppState};

/// 로거 세팅 (RUST_LOG 가 있으면 우선)
fn setup_logger() {
    #[cfg(debug_assertions)]
    {
        Builder::new()
            .filter(None, LevelFilter::Debug)
            .parse_default_env()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {} {}:{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init()
    }

    #[cfg(not(debug_assertions))]
    {
        Builder::new()
            .filter(None, LevelFilter::Info)
            .parse_default_env()
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 로거 세팅
    setup_logger();

    info!("accesslog 서버 시작");

    // 통합 설정 로드
    let settings = Settings::new()?;

    // db 커넥터 (요청마다 새 연결)
    let connector = Arc::new(PgConnector::new(&settings.database));
    let state = AppState::new(connector, settings.database.retry);

    AccessLogServer::new(settings.server, state).run().await
}
