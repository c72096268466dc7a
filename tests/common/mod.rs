#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

// Writing an executable while another test thread forks can make exec fail
// with ETXTBSY; stub creation and use are serialized.
static STUB_LOCK: Mutex<()> = Mutex::new(());

pub fn stub_lock() -> MutexGuard<'static, ()> {
    STUB_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, format!("// {rel}\n")).unwrap();
    path
}

/// Writes a shell script that appends its arguments to `log` and exits 3
/// when the target file name contains `bad`.
#[cfg(unix)]
pub fn stub_formatter(dir: &Path, log: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("stub-format.sh");
    let body = format!(
        "#!/bin/sh\nfor last; do :; done\nprintf '%s\\n' \"$*\" >> '{}'\ncase \"$last\" in\n  *bad*) exit 3 ;;\nesac\nexit 0\n",
        log.display()
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

pub fn read_log(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
