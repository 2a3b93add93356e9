use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    // Re-run if the Git HEAD changes
    println!("cargo:rerun-if-changed=../.git/HEAD");

    if let Some(describe) = git(&["describe", "--tags", "--always", "--dirty"]) {
        println!("cargo:rustc-env=SITE_GIT_DESCRIBE={describe}");
    }
    if let Some(hash) = git(&["rev-parse", "--short=9", "HEAD"]) {
        println!("cargo:rustc-env=SITE_GIT_HASH={hash}");
    }
}
