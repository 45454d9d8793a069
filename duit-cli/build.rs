use std::path::Path;
use std::process::Command;

/// `git describe` of the workspace, e.g. `3f2a9c1` or `v0.1.0-4-g3f2a9c1-dirty`.
fn describe(repo: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?.trim().to_owned();
    (!rev.is_empty()).then_some(rev)
}

fn main() {
    let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_else(|| ".".into());
    let workspace = Path::new(&manifest_dir).join("..");

    let rev = describe(&workspace).unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=DUIT_BUILD_SHA={rev}");

    let head = workspace.join(".git/HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    }
}
