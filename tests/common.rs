#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hl() -> Command {
    cargo_bin_cmd!("hostelog")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hostelog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so every run uses the defaults and
/// never touches the user's home directory.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

/// A `/view_logs` response with naive (local-time) timestamps, so date
/// filters behave the same whatever the machine's time zone is.
pub const VIEW_LOGS: &str = r#"{
  "status": "success",
  "logs": [
    {
      "id": 7,
      "student_id": 42,
      "name": "Jane Smith",
      "register_no": 2210451,
      "entry_time": "2025-09-01 08:00:00",
      "entry_status": "On Time",
      "exit_time": "2025-09-01 18:00:00",
      "exit_status": "Late"
    },
    {
      "id": 8,
      "student_id": 43,
      "name": "Asha Nair",
      "register_no": "2210452",
      "entry_time": "2025-09-01 08:30:00",
      "entry_Status": "Late",
      "exit_time": null
    },
    {
      "id": 9,
      "student_id": 44,
      "entry_time": "2025-09-02 07:55:00",
      "exit_time": ""
    },
    {
      "id": 10,
      "student_id": 45,
      "name": "Nobody Yet"
    }
  ]
}"#;

pub fn write_logs(name: &str, content: &str) -> String {
    let p = temp_path(name, "json");
    fs::write(&p, content).expect("write fixture");
    p
}
