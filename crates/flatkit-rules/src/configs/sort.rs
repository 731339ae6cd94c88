//! Key ordering for manifest and type-system config files

use flatkit_core::{ConfigFragment, Result, rules_from_json};
use serde_json::json;

pub const SORT_PACKAGE_JSON: &str = "flatkit/sort/package-json";
pub const SORT_TSCONFIG: &str = "flatkit/sort/tsconfig-json";

pub fn sort_package_json() -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "jsonc/sort-array-values": [
            "error",
            { "order": { "type": "asc" }, "pathPattern": "^files$" },
        ],
        "jsonc/sort-keys": [
            "error",
            {
                "order": [
                    "publisher",
                    "name",
                    "displayName",
                    "type",
                    "version",
                    "private",
                    "packageManager",
                    "description",
                    "author",
                    "contributors",
                    "license",
                    "funding",
                    "homepage",
                    "repository",
                    "bugs",
                    "keywords",
                    "categories",
                    "sideEffects",
                    "imports",
                    "exports",
                    "main",
                    "module",
                    "unpkg",
                    "jsdelivr",
                    "types",
                    "typesVersions",
                    "bin",
                    "icon",
                    "files",
                    "engines",
                    "activationEvents",
                    "contributes",
                    "scripts",
                    "peerDependencies",
                    "peerDependenciesMeta",
                    "dependencies",
                    "optionalDependencies",
                    "devDependencies",
                    "pnpm",
                    "overrides",
                    "resolutions",
                    "husky",
                    "simple-git-hooks",
                    "lint-staged",
                    "eslintConfig",
                ],
                "pathPattern": "^$",
            },
            {
                "order": { "type": "asc" },
                "pathPattern": "^(?:dev|peer|optional|bundled)?[Dd]ependencies(Meta)?$",
            },
            {
                "order": { "type": "asc" },
                "pathPattern": "^(?:resolutions|overrides|pnpm.overrides)$",
            },
            {
                "order": ["types", "import", "require", "default"],
                "pathPattern": "^exports.*$",
            },
        ],
    }))?;

    Ok(vec![
        ConfigFragment::named(SORT_PACKAGE_JSON)
            .with_files(["**/package.json"])
            .with_rules(rules),
    ])
}

pub fn sort_tsconfig() -> Result<Vec<ConfigFragment>> {
    let rules = rules_from_json(json!({
        "jsonc/sort-keys": [
            "error",
            {
                "order": ["extends", "compilerOptions", "references", "files", "include", "exclude"],
                "pathPattern": "^$",
            },
            {
                "order": [
                    "incremental",
                    "composite",
                    "tsBuildInfoFile",
                    "target",
                    "jsx",
                    "lib",
                    "experimentalDecorators",
                    "module",
                    "rootDir",
                    "moduleResolution",
                    "baseUrl",
                    "paths",
                    "types",
                    "resolveJsonModule",
                    "allowJs",
                    "checkJs",
                    "strict",
                    "noImplicitAny",
                    "strictNullChecks",
                    "noUnusedLocals",
                    "noUnusedParameters",
                    "declaration",
                    "declarationMap",
                    "sourceMap",
                    "outDir",
                    "noEmit",
                    "isolatedModules",
                    "verbatimModuleSyntax",
                    "esModuleInterop",
                    "forceConsistentCasingInFileNames",
                    "skipLibCheck",
                ],
                "pathPattern": "^compilerOptions$",
            },
        ],
    }))?;

    Ok(vec![
        ConfigFragment::named(SORT_TSCONFIG)
            .with_files(["**/tsconfig.json", "**/tsconfig.*.json"])
            .with_rules(rules),
    ])
}
