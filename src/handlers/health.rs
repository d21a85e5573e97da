use axum::http::StatusCode;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// The relay has no warm-up phase, so readiness and liveness coincide.
pub async fn readyz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probes_report_ok() {
        assert_eq!(livez().await, (StatusCode::OK, "ok"));
        assert_eq!(readyz().await, (StatusCode::OK, "ok"));
    }
}
