//! Best-effort run log. Records staged files and external command
//! invocations so a failed `iconutil` run can be reconstructed afterwards.
//! Logging never fails the build; write errors are dropped.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn log_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let dir = PathBuf::from(format!("{}/Library/Application Support/Inkwell", home));
    let _ = fs::create_dir_all(&dir);
    dir.join("icon-builder.log")
}

pub fn log_line(line: &str) {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = writeln!(f, "[{}] {}", now, line);
    }
}

pub fn log_command(program: &str, args: &[String]) {
    log_line(&format!("RUN: {} {}", program, args.join(" ")));
}

pub fn log_status(program: &str, status: ExitStatus) {
    log_line(&format!("EXIT: {} -> {}", program, status));
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}
