use hyper::header::HeaderMap;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const X_REAL_IP: &str = "x-real-ip";

/// 헤더 값을 문자열로 (UTF-8 이 아니면 손실 변환)
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

/// 실제 클라이언트 ip 결정
///
/// 1. `X-Forwarded-For` 의 첫 번째 항목 (쉼표 분리 후 공백 제거)
/// 2. `X-Real-IP`
/// 3. 전송 계층 원격 주소
///
/// 앞단 로드밸런서가 헤더를 정리한다고 가정하므로 형식 검증은 하지 않는다.
pub fn resolve_client_ip(headers: &HeaderMap, remote_addr: &str) -> String {
    if let Some(forwarded) = header_value(headers, X_FORWARDED_FOR).filter(|v| !v.is_empty()) {
        return forwarded
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
    }

    if let Some(real_ip) = header_value(headers, X_REAL_IP).filter(|v| !v.is_empty()) {
        return real_ip;
    }

    remote_addr.to_string()
}
