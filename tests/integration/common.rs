use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> PathBuf {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_tty-cursor"));
    if raw.is_absolute() {
        return raw;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(raw)
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &Path, platform: &str, file_logging: &str) {
    let cfg = format!(
        r#"{{
      "platform": {{ "value": "{platform}", "description": "convention" }},
      "file_logging_enabled": {{ "value": "{file_logging}", "description": "file logging" }},
      "escaped_output": {{ "value": "False", "description": "escaped" }}
    }}"#
    );
    fs::write(dir.join("tty-cursor.json"), cfg).unwrap();
}

/// Run the binary with its config and logs kept inside `dir`.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .arg("--config")
        .arg(dir.join("tty-cursor.json"))
        .arg("--logs")
        .arg(dir.join("logs"))
        .args(args)
        .output()
        .expect("binary should run")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
