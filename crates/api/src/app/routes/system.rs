/// Liveness probe used by deploy checks and the test harness.
pub async fn root() -> &'static str {
    "Library server is running"
}
