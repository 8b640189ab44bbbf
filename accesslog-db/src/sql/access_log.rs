/// 테이블 생성 쿼리
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS access_log (
        id SERIAL PRIMARY KEY,
        ip TEXT,
        timestamp TIMESTAMP
    )";

/// 접근 기록 쿼리
pub const INSERT_ACCESS: &str = "
    INSERT INTO access_log (ip, timestamp)
    VALUES ($1, $2)";

/// 최근 접근 목록 조회 쿼리
pub const SELECT_RECENT: &str = "
    SELECT id, ip, timestamp
    FROM access_log
    ORDER BY timestamp DESC
    LIMIT $1";

/// 전체 접근 수 조회 쿼리
pub const COUNT_ACCESSES: &str = "
    SELECT COUNT(*)
    FROM access_log";

/// ip별 접근 수 상위 조회 쿼리
pub const SELECT_TOP_IPS: &str = "
    SELECT ip, COUNT(*) AS count
    FROM access_log
    GROUP BY ip
    ORDER BY count DESC
    LIMIT $1";
