//! Build script for disk-doc.
//!
//! Injects version metadata from git and the toolchain so `disk-doc version`
//! can report what it was built from.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!(
        "cargo:rustc-env=DISK_DOC_TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    if let Some(hash) = get_git_hash() {
        println!("cargo:rustc-env=DISK_DOC_GIT_HASH={}", hash);
    }

    if let Some(date) = get_build_date() {
        println!("cargo:rustc-env=DISK_DOC_BUILD_DATE={}", date);
    }

    if let Some(version) = get_rustc_version() {
        println!("cargo:rustc-env=DISK_DOC_RUSTC_VERSION={}", version);
    }
}

/// Short hash of the checked-out commit, if built from a git tree
fn get_git_hash() -> Option<String> {
    run_trimmed("git", &["rev-parse", "--short", "HEAD"])
}

/// Build date in ISO 8601 (UTC)
fn get_build_date() -> Option<String> {
    run_trimmed("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

/// The rustc version number, e.g. "1.75.0"
fn get_rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    // "rustc 1.75.0 (82e1608df 2023-12-21)" -> "1.75.0"
    run_trimmed(&rustc, &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
}

fn run_trimmed(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}
