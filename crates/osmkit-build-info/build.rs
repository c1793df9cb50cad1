use std::env;
use std::path::{Path, PathBuf};

use vergen_gix::{Emitter, GixBuilder};

const SHA_OVERRIDE_VAR: &str = "OSMKIT_BUILD_SHA_SHORT";
const UNKNOWN_SHA: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={SHA_OVERRIDE_VAR}");

    if let Some(sha) = pinned_sha() {
        emit_sha(&sha);
        return;
    }

    // Source tarballs have no checkout; that is not worth a warning.
    let Some(repo) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .as_deref()
        .and_then(checkout_root)
    else {
        emit_sha(UNKNOWN_SHA);
        return;
    };

    if let Err(reason) = emit_from_git(repo) {
        println!("cargo:warning=osmkit-build-info: {reason}, building without a git SHA");
        emit_sha(UNKNOWN_SHA);
    }
}

/// A packager-supplied SHA, used verbatim when it starts with 7 hex digits.
fn pinned_sha() -> Option<String> {
    let raw = env::var(SHA_OVERRIDE_VAR).ok()?;
    let sha = raw.trim().get(..7)?;
    sha.chars()
        .all(|c| c.is_ascii_hexdigit())
        .then(|| sha.to_ascii_lowercase())
}

fn checkout_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

fn emit_from_git(repo: PathBuf) -> Result<(), String> {
    let git = GixBuilder::default()
        .repo_path(Some(repo))
        .sha(true)
        .build()
        .map_err(|e| format!("vergen-gix config failed: {e}"))?;

    Emitter::default()
        .add_instructions(&git)
        .and_then(|emitter| emitter.emit())
        .map_err(|e| format!("vergen-gix emit failed: {e}"))
}

// The crate reads VERGEN_GIT_SHA through `env!()`, so it must always be set.
fn emit_sha(sha: &str) {
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}
