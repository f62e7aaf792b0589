//! Endpoint table listing

use todomart_server::http::endpoints;

/// Print one `METHOD PATH  summary` line per endpoint
pub fn run_routes() {
    for line in render() {
        println!("{line}");
    }
}

fn render() -> Vec<String> {
    endpoints()
        .iter()
        .map(|e| format!("{:<7} {:<16} {}", e.method.as_str(), e.path, e.summary))
        .chain(std::iter::once(format!(
            "{:<7} {:<16} {}",
            "OPTIONS", "*", "CORS preflight"
        )))
        .collect()
}
