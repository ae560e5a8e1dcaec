//! Build script for the civibase-web crate.
//!
//! This script loads environment variables at compile time, making them available
//! to the `option_env!()` macro in the source code.
//!
//! Priority order:
//! 1. Environment variables already set (e.g., from CI/CD, system env)
//! 2. Variables from `.env` file (if it exists)

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Tell Cargo to rerun this build script if .env changes
    println!("cargo:rerun-if-changed=.env");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let env_file = PathBuf::from(&manifest_dir).join(".env");

    // Count how many variables are already set in the environment
    let required_vars = ["CIVIBASE_API_BASE_URL"];
    let env_vars_set = required_vars
        .iter()
        .filter(|&var| env::var(var).is_ok())
        .count();

    if env_file.exists() {
        println!(
            "cargo:warning=Found .env file, loading configuration (environment variables take priority)"
        );

        let contents = fs::read_to_string(&env_file).expect("Failed to read env file");

        for line in contents.lines() {
            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse KEY=VALUE
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Only set if not already set in environment
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else if env_vars_set > 0 {
        println!(
            "cargo:warning=Using API configuration from environment variables ({}/{} set)",
            env_vars_set,
            required_vars.len()
        );
    } else {
        println!("cargo:warning=No .env file found and no environment variables set");
        println!("cargo:warning=Set CIVIBASE_API_BASE_URL or create a .env file");
    }
}
