//! Gitignore-derived ignores
//!
//! Reads ignore files and converts each gitignore pattern into a flat-config
//! glob, relative to the working directory.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use flatkit_core::{ConfigFragment, FlatkitError, GitignoreParams, Result};

/// Patterns that read the same in both syntaxes
const PASSTHROUGH: [&str; 4] = ["", "**", "/**", "**/"];

/// Load the configured ignore files into one ignores fragment
///
/// Missing files fail the producer in strict mode and are skipped otherwise.
pub async fn gitignore(params: GitignoreParams) -> Result<Vec<ConfigFragment>> {
    let cwd = match &params.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir().map_err(|e| FlatkitError::io_error(".", e))?,
    };

    let mut ignores: Vec<String> = Vec::new();
    for file in locate_files(&params, &cwd)? {
        let content = match tokio::fs::read_to_string(&file).await {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound && !params.strict => {
                tracing::debug!("Ignore file {} not found, skipping", file.display());
                continue;
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                return Err(FlatkitError::producer_error(
                    "gitignore",
                    format!("Ignore file not found: {}", file.display()),
                ));
            }
            Err(e) => return Err(FlatkitError::io_error(&file, e)),
        };

        let dir = file.parent().unwrap_or(&cwd);
        let before = ignores.len();
        for pattern in parse_patterns(&content) {
            let Some(relative) = relative_to_cwd(&convert_pattern(pattern), dir, &cwd) else {
                continue;
            };
            if !ignores.contains(&relative) {
                ignores.push(relative);
            }
        }
        tracing::debug!(
            "Loaded {} ignore patterns from {}",
            ignores.len() - before,
            file.display()
        );
    }

    Ok(vec![ConfigFragment::named(params.name).with_ignores(ignores)])
}

/// Paths of the ignore files to read
///
/// Entries containing glob characters are expanded under `cwd`. Plain names
/// are looked up in `cwd` only when `root` is set, otherwise in the nearest
/// ancestor that has them.
fn locate_files(params: &GitignoreParams, cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in &params.files {
        if entry.contains(['*', '?', '[']) {
            let pattern = cwd.join(entry);
            let paths = glob::glob(&pattern.to_string_lossy()).map_err(|e| {
                FlatkitError::config_error(format!("Invalid ignore file glob '{entry}': {e}"))
            })?;
            for path in paths {
                match path {
                    Ok(path) => files.push(path),
                    Err(e) => tracing::warn!("Skipping unreadable ignore file: {}", e),
                }
            }
        } else if params.root {
            files.push(cwd.join(entry));
        } else {
            let found = cwd
                .ancestors()
                .map(|dir| dir.join(entry))
                .find(|candidate| candidate.is_file());
            files.push(found.unwrap_or_else(|| cwd.join(entry)));
        }
    }

    Ok(files)
}

/// Non-empty, non-comment lines of an ignore file
fn parse_patterns(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Convert one gitignore pattern to a flat-config glob
pub fn convert_pattern(pattern: &str) -> String {
    let (negated, body) = match pattern.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", pattern),
    };
    let body = body.trim_end();

    if PASSTHROUGH.contains(&body) {
        return format!("{negated}{body}");
    }

    let first_slash = body.find('/');
    let match_everywhere = match first_slash {
        None => true,
        Some(index) => index == body.len() - 1,
    };
    let prefix = if match_everywhere { "**/" } else { "" };
    let unanchored = if first_slash == Some(0) { &body[1..] } else { body };
    let suffix = if body.ends_with("/**") { "/*" } else { "" };

    format!("{negated}{prefix}{}{suffix}", escape_literals(unanchored))
}

/// Escape `{` and `(`, which are literal in gitignore but syntax in globs
fn escape_literals(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '{' | '(' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Re-root a converted pattern from the ignore file's directory onto `cwd`
///
/// Patterns from an ancestor's file that cannot match inside `cwd` are dropped.
fn relative_to_cwd(pattern: &str, dir: &Path, cwd: &Path) -> Option<String> {
    if dir == cwd {
        return Some(pattern.to_string());
    }

    let (negated, body) = match pattern.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", pattern),
    };

    if let Ok(nested) = dir.strip_prefix(cwd) {
        let nested = to_slash(nested);
        return Some(format!("{negated}{nested}/{body}"));
    }

    if let Ok(below) = cwd.strip_prefix(dir) {
        if body.starts_with("**/") {
            return Some(pattern.to_string());
        }
        let below = format!("{}/", to_slash(below));
        return body
            .strip_prefix(&below)
            .map(|rest| format!("{negated}{rest}"));
    }

    None
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatkit_core::GITIGNORE_FRAGMENT_NAME;
    use std::fs;
    use tempfile::TempDir;

    fn params(cwd: &Path, strict: bool) -> GitignoreParams {
        GitignoreParams {
            strict,
            cwd: Some(cwd.to_path_buf()),
            root: true,
            ..GitignoreParams::lenient()
        }
    }

    #[test]
    fn test_convert_pattern() {
        assert_eq!(convert_pattern("node_modules"), "**/node_modules");
        assert_eq!(convert_pattern("dist/"), "**/dist/");
        assert_eq!(convert_pattern("/build"), "build");
        assert_eq!(convert_pattern("src/generated"), "src/generated");
        assert_eq!(convert_pattern("logs/**"), "logs/**/*");
        assert_eq!(convert_pattern("!keep.log"), "!**/keep.log");
        assert_eq!(convert_pattern("!/out"), "!out");
        assert_eq!(convert_pattern("*.log   "), "**/*.log");
    }

    #[test]
    fn test_convert_pattern_passthrough() {
        for pattern in PASSTHROUGH {
            assert_eq!(convert_pattern(pattern), pattern);
        }
        assert_eq!(convert_pattern("!**"), "!**");
    }

    #[test]
    fn test_convert_pattern_escapes_literals() {
        assert_eq!(convert_pattern("file{1}.txt"), "**/file\\{1}.txt");
        assert_eq!(convert_pattern("a(b).js"), "**/a\\(b).js");
        assert_eq!(convert_pattern("already\\{x"), "**/already\\{x");
    }

    #[test]
    fn test_parse_patterns_skips_comments_and_blanks() {
        let patterns: Vec<_> = parse_patterns("# deps\nnode_modules\n\n  \n*.log\n").collect();
        assert_eq!(patterns, vec!["node_modules", "*.log"]);
    }

    #[test]
    fn test_relative_to_cwd() {
        let root = Path::new("/repo");
        let cwd = Path::new("/repo/packages/app");

        assert_eq!(
            relative_to_cwd("**/dist", root, cwd).as_deref(),
            Some("**/dist")
        );
        assert_eq!(
            relative_to_cwd("packages/app/build", root, cwd).as_deref(),
            Some("build")
        );
        assert_eq!(relative_to_cwd("packages/other/build", root, cwd), None);
        assert_eq!(
            relative_to_cwd("!packages/app/keep", root, cwd).as_deref(),
            Some("!keep")
        );
        assert_eq!(
            relative_to_cwd("gen", Path::new("/repo/packages/app/sub"), cwd).as_deref(),
            Some("sub/gen")
        );
    }

    #[tokio::test]
    async fn test_reads_gitignore() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "node_modules\n/coverage\n!keep\n").unwrap();

        let fragments = gitignore(params(temp.path(), true)).await.unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].name_or_default(), GITIGNORE_FRAGMENT_NAME);
        assert_eq!(
            fragments[0].ignores.as_deref().unwrap(),
            ["**/node_modules", "coverage", "!**/keep"]
        );
    }

    #[tokio::test]
    async fn test_missing_file_lenient() {
        let temp = TempDir::new().unwrap();
        let fragments = gitignore(params(temp.path(), false)).await.unwrap();
        assert_eq!(fragments[0].ignores.as_deref().unwrap(), [] as [String; 0]);
    }

    #[tokio::test]
    async fn test_missing_file_strict() {
        let temp = TempDir::new().unwrap();
        let err = gitignore(params(temp.path(), true)).await.unwrap_err();
        assert!(matches!(err, FlatkitError::ProducerError { .. }));
    }

    #[tokio::test]
    async fn test_finds_nearest_ancestor_file() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().join("packages").join("app");
        fs::create_dir_all(&cwd).unwrap();
        fs::write(
            temp.path().join(".gitignore"),
            "dist\n/packages/app/build\n/packages/other/build\n",
        )
        .unwrap();

        let fragments = gitignore(GitignoreParams {
            root: false,
            ..params(&cwd, true)
        })
        .await
        .unwrap();
        assert_eq!(
            fragments[0].ignores.as_deref().unwrap(),
            ["**/dist", "build"]
        );
    }

    #[tokio::test]
    async fn test_glob_entries_expand() {
        let temp = TempDir::new().unwrap();
        for package in ["a", "b"] {
            let dir = temp.path().join("packages").join(package);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(".gitignore"), "/out\n").unwrap();
        }

        let fragments = gitignore(GitignoreParams {
            files: vec!["packages/*/.gitignore".into()],
            ..params(temp.path(), true)
        })
        .await
        .unwrap();
        assert_eq!(
            fragments[0].ignores.as_deref().unwrap(),
            ["packages/a/out", "packages/b/out"]
        );
    }

    #[tokio::test]
    async fn test_custom_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "x\n").unwrap();
        let fragments = gitignore(GitignoreParams {
            name: "custom/gitignore".into(),
            ..params(temp.path(), true)
        })
        .await
        .unwrap();
        assert_eq!(fragments[0].name_or_default(), "custom/gitignore");
    }
}
