//! Build script for pi-calc
//!
//! Captures the compiler version so the system report can show it at runtime

use std::env;
use std::process::Command;

fn main() {
    // Rebuild when build script or compiler changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    // "rustc 1.85.0 (4d91de4e4 2025-02-17)" -> "1.85.0"
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string());

    println!("cargo:rustc-env=PI_CALC_RUSTC_VERSION={version}");
}
