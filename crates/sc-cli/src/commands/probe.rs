use std::time::Duration;

use colored::Colorize;

use sc_assets::{DEFAULT_PROBE_URLS, probe};

pub fn run(urls: &[String], timeout_secs: u64) -> Result<(), String> {
    let timeout = Duration::from_secs(timeout_secs);
    let urls: Vec<&str> = if urls.is_empty() {
        DEFAULT_PROBE_URLS.to_vec()
    } else {
        urls.iter().map(String::as_str).collect()
    };

    let mut reachable = 0;
    for url in &urls {
        println!("  {}", url.bold());
        match probe(url, timeout) {
            Ok(report) => {
                let status = report.status.to_string();
                let status = if report.is_success() {
                    reachable += 1;
                    status.green()
                } else {
                    status.red()
                };
                println!("    status:       {status}");
                println!(
                    "    content-type: {}",
                    report.content_type.as_deref().unwrap_or("(none)")
                );
                println!("    size:         {} bytes", report.bytes);
            }
            Err(e) => println!("    {} {e}", "failed:".red()),
        }
        println!();
    }

    println!("  {reachable}/{} reachable", urls.len());
    Ok(())
}
