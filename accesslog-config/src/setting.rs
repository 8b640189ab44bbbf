use std::path::Path;

use log::info;

use accesslog_error::{AccessLogError, Result};

use crate::config::Config;
use crate::dbconfig::DbConfig;

/// 통합 세팅 인스턴스
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: Config,
    pub database: DbConfig,
}

impl Settings {
    /// Setting 생성
    pub fn new() -> Result<Self> {
        let server = Self::load_server_config()?;
        let database = Self::load_db_config()?;

        Ok(Self { server, database })
    }

    /// 서버 설정 로드
    fn load_server_config() -> Result<Config> {
        // yml 파일 유무 확인
        if Path::new("config.yml").exists() {
            info!("서버 설정파일 로드: config.yml");
            match Config::from_file("config.yml") {
                Ok(config) => Ok(config),
                Err(e) => Err(AccessLogError::Config(format!(
                    "failed to load config.yml: {e}"
                ))),
            }
        } else {
            // 기본설정사용
            info!("서버 기본설정 사용");
            Ok(Config::new())
        }
    }

    /// db 설정 로드
    fn load_db_config() -> Result<DbConfig> {
        let config = DbConfig::from_env()?;
        info!(
            "DB 설정 로드: {}@{}:{}/{}",
            config.connection.user,
            config.connection.host,
            config.connection.port,
            config.connection.database
        );
        Ok(config)
    }
}
