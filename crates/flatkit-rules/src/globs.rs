//! Shared file globs
//!
//! Flat-config (minimatch) syntax, not shell globs.

pub const GLOB_SRC_EXT: &str = "?([cm])[jt]s?(x)";
pub const GLOB_SRC: &str = "**/*.?([cm])[jt]s?(x)";

pub const GLOB_JSX: &str = "**/*.?([cm])jsx";

pub const GLOB_TS: &str = "**/*.?([cm])ts";
pub const GLOB_TSX: &str = "**/*.?([cm])tsx";
pub const GLOB_DTS: &str = "**/*.d.?([cm])ts";

pub const GLOB_JSON: &str = "**/*.json";
pub const GLOB_JSON5: &str = "**/*.json5";
pub const GLOB_JSONC: &str = "**/*.jsonc";

pub const GLOB_MARKDOWN: &str = "**/*.md";
pub const GLOB_SVELTE: &str = "**/*.svelte";

pub const GLOB_TESTS: &[&str] = &[
    "**/__tests__/**/*.?([cm])[jt]s?(x)",
    "**/*.spec.?([cm])[jt]s?(x)",
    "**/*.test.?([cm])[jt]s?(x)",
    "**/*.bench.?([cm])[jt]s?(x)",
    "**/*.benchmark.?([cm])[jt]s?(x)",
];

/// Built-in global exclusions
pub const GLOB_EXCLUDE: &[&str] = &[
    "**/node_modules",
    "**/dist",
    "**/package-lock.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/bun.lockb",
    "**/output",
    "**/coverage",
    "**/temp",
    "**/.temp",
    "**/tmp",
    "**/.tmp",
    "**/.history",
    "**/.vitepress/cache",
    "**/.nuxt",
    "**/.next",
    "**/.svelte-kit",
    "**/.vercel",
    "**/.changeset",
    "**/.idea",
    "**/.cache",
    "**/.output",
    "**/.vite-inspect",
    "**/.yarn",
    "**/vite.config.*.timestamp-*",
    "**/CHANGELOG*.md",
    "**/*.min.*",
    "**/LICENSE*",
    "**/__snapshots__",
    "**/auto-import?(s).d.ts",
];

/// Globs for files that carry a component extension
pub fn component_globs(component_exts: &[String]) -> Vec<String> {
    component_exts
        .iter()
        .map(|ext| format!("**/*.{}", ext.trim_start_matches('.')))
        .collect()
}
