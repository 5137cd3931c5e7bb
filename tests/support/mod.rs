use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for designkb isolated from the user's config and environment
pub fn designkb(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("designkb");
    cmd.env("DESIGNKB_CONFIG_DIR", config_dir)
        .env_remove("DESIGNKB_CORPUS_DIR")
        .env_remove("DESIGNKB_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a corpus root where every partition of the family exists.
/// Partitions not named in `files` are written empty.
#[allow(dead_code)]
pub fn write_corpus(root: &Path, family: &str, names: &[&str], files: &[(&str, &str)]) {
    let family_dir = root.join(family);
    fs::create_dir_all(&family_dir).unwrap();
    for name in names {
        fs::write(family_dir.join(format!("{}.toml", name)), "").unwrap();
    }
    for (name, content) in files {
        fs::write(family_dir.join(format!("{}.toml", name)), content).unwrap();
    }
}

#[allow(dead_code)]
pub const DOMAINS: &[&str] = &[
    "style",
    "typography",
    "color",
    "product",
    "landing",
    "chart",
    "ux",
    "prompt",
];

#[allow(dead_code)]
pub const STACKS: &[&str] = &[
    "html-tailwind",
    "react",
    "nextjs",
    "vue",
    "nuxtjs",
    "nuxt-ui",
    "svelte",
    "swiftui",
    "react-native",
    "flutter",
];

/// Temporary directory used as an empty config dir
pub fn config_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Parse stdout of a `--format json` run
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
