use chrono::{SecondsFormat, Utc};

fn main() {
    // Release pipelines can pin the timestamp for reproducible builds.
    println!("cargo::rerun-if-env-changed=FORGEMIRROR_BUILD_TIME");
    // Otherwise restamp whenever the binary's sources change.
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=src");
    println!("cargo::rerun-if-changed=../forgemirror/src");

    let build_time = std::env::var("FORGEMIRROR_BUILD_TIME")
        .unwrap_or_else(|_| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

    println!("cargo::rustc-env=FORGEMIRROR_BUILD_TIME={build_time}");
}
