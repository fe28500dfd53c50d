//! End-to-end generation scenarios
//!
//! Each scenario runs the full pipeline against an in-memory project, or a
//! temporary directory, and inspects the written files and the install request.

use eslintgen::emit::{FsSink, MemorySink, DOTFILE, IGNORE_FILE, MANIFEST_FILE, SCRIPT_FILE};
use eslintgen::install::RecordingInstaller;
use eslintgen::prompt::ScriptedPrompter;
use eslintgen::settings::{ConfigOutputKind, ListInput, TestFramework};
use eslintgen::{generate, Defaults, GenerateOptions, RawSettings};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

struct Outcome {
    sink: MemorySink,
    installer: RecordingInstaller,
}

impl Outcome {
    fn json(&self, path: &str) -> Value {
        let text = self
            .sink
            .get(path)
            .unwrap_or_else(|| panic!("{} was not written", path));
        serde_json::from_str(text).unwrap()
    }

    fn text(&self, path: &str) -> &str {
        self.sink.get(path).unwrap()
    }

    fn packages(&self) -> &[String] {
        &self.installer.last().unwrap().packages
    }
}

fn run(explicit: RawSettings, answers: Value) -> Outcome {
    run_in(MemorySink::new(), explicit, answers)
}

fn run_in(mut sink: MemorySink, explicit: RawSettings, answers: Value) -> Outcome {
    let Value::Object(answers) = answers else {
        panic!("answers must be an object");
    };
    let mut installer = RecordingInstaller::new();
    let options = GenerateOptions {
        explicit,
        skip_install: false,
    };

    generate(
        &options,
        &Defaults::default(),
        &mut ScriptedPrompter::new(answers),
        &mut sink,
        &mut installer,
    )
    .unwrap();

    Outcome { sink, installer }
}

#[test]
fn test_defaults_produce_reasonable_eslintrc() {
    let outcome = run(RawSettings::default(), json!({}));

    assert_eq!(
        outcome.json(DOTFILE),
        json!({
            "extends": "eslint:recommended",
            "parser": "babel-eslint",
            "env": {"es6": true},
            "rules": {},
        })
    );
}

#[test]
fn test_defaults_ignore_file() {
    let outcome = run(RawSettings::default(), json!({}));
    let ignore = outcome.text(IGNORE_FILE);

    assert!(ignore.contains("node_modules/"));
    assert!(ignore.contains("coverage/"));
}

#[test]
fn test_eslintrc_keys_follow_reference_order() {
    let outcome = run(
        RawSettings {
            plugins: Some("react".into()),
            ..Default::default()
        },
        json!({}),
    );

    let order = ["extends", "parser", "plugins", "env", "globals", "rules"];
    let text = outcome.text(DOTFILE);
    let config: Value = serde_json::from_str(text).unwrap();
    let positions: Vec<usize> = config
        .as_object()
        .unwrap()
        .keys()
        .map(|key| order.iter().position(|k| k == key).unwrap())
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_defaults_install_dev_dependencies() {
    let outcome = run(RawSettings::default(), json!({}));
    let plan = outcome.installer.last().unwrap();

    assert!(plan.save_dev);
    assert_eq!(plan.packages, vec!["eslint", "babel-eslint"]);
}

#[test]
fn test_lint_script_added() {
    let outcome = run(RawSettings::default(), json!({}));
    assert_eq!(outcome.json(MANIFEST_FILE)["scripts"]["lint"], "eslint .");
}

#[test]
fn test_existing_manifest_preserved() {
    let sink = MemorySink::new().with_file(
        MANIFEST_FILE,
        r#"{"name": "shop", "scripts": {"test": "mocha", "lint": "old"}}"#,
    );
    let outcome = run_in(sink, RawSettings::default(), json!({}));
    let manifest = outcome.json(MANIFEST_FILE);

    assert_eq!(manifest["name"], "shop");
    assert_eq!(manifest["scripts"], json!({"test": "mocha", "lint": "eslint ."}));
}

#[test]
fn test_envs_from_options() {
    let outcome = run(
        RawSettings {
            envs: Some("es6, browser, jquery".into()),
            test_framework: Some(TestFramework::Mocha),
            ..Default::default()
        },
        json!({}),
    );

    assert_eq!(
        outcome.json(DOTFILE)["env"],
        json!({"browser": true, "es6": true, "jquery": true})
    );
}

#[test]
fn test_envs_from_prompts() {
    let outcome = run(
        RawSettings::default(),
        json!({"env": ["es6", "browser", "jquery"], "testFramework": "mocha"}),
    );

    assert_eq!(
        outcome.json(DOTFILE)["env"],
        json!({"browser": true, "es6": true, "jquery": true})
    );
}

#[test]
fn test_built_in_extends_not_installed() {
    let outcome = run(
        RawSettings {
            extends: Some("eslint:recommended".into()),
            ..Default::default()
        },
        json!({}),
    );

    assert_eq!(outcome.json(DOTFILE)["extends"], "eslint:recommended");
    assert!(!outcome.packages().iter().any(|p| p == "eslint-config-eslint"));
}

#[test]
fn test_extends_from_options() {
    let outcome = run(
        RawSettings {
            extends: Some("shopify".into()),
            ..Default::default()
        },
        json!({}),
    );

    assert_eq!(outcome.json(DOTFILE)["extends"], "shopify");
    assert!(outcome.packages().contains(&"eslint-config-shopify".to_string()));
}

#[test]
fn test_extends_variants_from_prompts() {
    let cases = [
        ("shopify", "shopify", "eslint-config-shopify"),
        ("eslint-config-shopify", "shopify", "eslint-config-shopify"),
        ("plugin:shopify/default", "plugin:shopify/default", "eslint-plugin-shopify"),
        (
            "plugin:eslint-plugin-shopify/default",
            "plugin:shopify/default",
            "eslint-plugin-shopify",
        ),
        (
            "eslint-plugin-shopify/default",
            "plugin:shopify/default",
            "eslint-plugin-shopify",
        ),
    ];

    for (raw, canonical, package) in cases {
        let outcome = run(RawSettings::default(), json!({"extends": raw}));

        assert_eq!(outcome.json(DOTFILE)["extends"], canonical, "extends {}", raw);
        assert!(
            outcome.packages().contains(&package.to_string()),
            "extends {} should install {}",
            raw,
            package
        );
    }
}

#[test]
fn test_plugins_from_options() {
    let outcome = run(
        RawSettings {
            plugins: Some("one, plugin-two, eslint-plugin-three".into()),
            ..Default::default()
        },
        json!({}),
    );

    assert_eq!(outcome.json(DOTFILE)["plugins"], json!(["one", "two", "three"]));
}

#[test]
fn test_plugins_from_prompts() {
    let outcome = run(
        RawSettings::default(),
        json!({"plugins": ["one", "plugin-two", "eslint-plugin-three"]}),
    );

    assert_eq!(outcome.json(DOTFILE)["plugins"], json!(["one", "two", "three"]));
    assert_eq!(
        outcome.packages(),
        [
            "eslint",
            "babel-eslint",
            "eslint-plugin-one",
            "eslint-plugin-two",
            "eslint-plugin-three",
        ]
    );
}

#[test]
fn test_babel_declined() {
    let outcome = run(
        RawSettings {
            extends: Some("eslint:recommended".into()),
            ..Default::default()
        },
        json!({"babel": false, "needsTests": false}),
    );

    assert_eq!(
        outcome.json(DOTFILE),
        json!({"extends": "eslint:recommended", "env": {}, "rules": {}})
    );
    assert!(!outcome.packages().contains(&"babel-eslint".to_string()));
}

#[test]
fn test_ignore_appends_to_defaults() {
    let outcome = run(RawSettings::default(), json!({"ignore": "foo/, bar/, baz/"}));

    assert_eq!(
        outcome.text(IGNORE_FILE),
        "node_modules/\ncoverage/\nfoo/\nbar/\nbaz/\n"
    );
}

#[test]
fn test_ignore_without_tests_adds_test_dirs() {
    let outcome = run(
        RawSettings {
            ignore: Some(ListInput::Items(vec!["dist/".into()])),
            ..Default::default()
        },
        json!({"needsTests": false}),
    );

    assert_eq!(
        outcome.text(IGNORE_FILE),
        "node_modules/\ncoverage/\ndist/\ntest/\nspec/\n"
    );
    assert!(outcome.sink.get("test/.eslintrc").is_none());
}

#[test]
fn test_disable_rules() {
    let outcome = run(
        RawSettings::default(),
        json!({"disableRules": "shopify/require-flow, no-var"}),
    );

    assert_eq!(
        outcome.json(DOTFILE)["rules"],
        json!({"no-var": 0, "shopify/require-flow": 0})
    );
}

#[test]
fn test_config_type_dotfile() {
    let outcome = run(RawSettings::default(), json!({"configType": "dotfile"}));
    assert_eq!(outcome.json(DOTFILE)["extends"], "eslint:recommended");
}

#[test]
fn test_config_type_javascript() {
    let outcome = run(RawSettings::default(), json!({"configType": "javascript"}));
    let script = outcome.text(SCRIPT_FILE);

    assert!(script.contains("module.exports = {"));
    assert!(script.contains("extends: \"eslint:recommended\""));
    assert!(outcome.sink.get(DOTFILE).is_none());
}

#[test]
fn test_config_type_package() {
    let outcome = run(RawSettings::default(), json!({"configType": "package"}));

    assert_eq!(
        outcome.json(MANIFEST_FILE)["eslintConfig"]["extends"],
        "eslint:recommended"
    );
    assert!(outcome.sink.get(DOTFILE).is_none());
}

#[test]
fn test_use_package_answer() {
    let outcome = run(
        RawSettings {
            config_type: None,
            ..Default::default()
        },
        json!({"usePackage": true}),
    );

    assert!(outcome.json(MANIFEST_FILE).get("eslintConfig").is_some());
}

#[test]
fn test_explicit_config_type_wins_over_answers() {
    let outcome = run(
        RawSettings {
            config_type: Some(ConfigOutputKind::Javascript),
            ..Default::default()
        },
        json!({"usePackage": true, "configType": "dotfile"}),
    );

    assert!(outcome.sink.get(SCRIPT_FILE).is_some());
    assert!(outcome.sink.get(DOTFILE).is_none());
}

#[test]
fn test_test_directory_config() {
    let outcome = run(
        RawSettings {
            test_framework: Some(TestFramework::Jasmine),
            test_dir: Some("spec/".into()),
            ..Default::default()
        },
        json!({"env": ["node"]}),
    );

    assert_eq!(
        outcome.json("spec/.eslintrc"),
        json!({
            "env": {"es6": true, "jasmine": true, "node": true},
            "globals": {"assert": false, "expect": false, "sinon": false},
            "rules": {"init-declarations": 0, "no-unused-expressions": 0},
        })
    );
    assert!(!outcome.text(IGNORE_FILE).contains("spec/"));
}

#[test]
fn test_capitalized_framework_answer() {
    let outcome = run(
        RawSettings::default(),
        json!({"testFramework": "Jest", "testDir": "__tests__"}),
    );

    assert_eq!(outcome.json("__tests__/.eslintrc")["env"]["jest"], true);
}

#[test]
fn test_root_test_directory_keeps_main_config() {
    for dir in [".", "./"] {
        let temp = TempDir::new().unwrap();
        let mut sink = FsSink::new(temp.path());
        let options = GenerateOptions {
            explicit: RawSettings {
                extends: Some("shopify".into()),
                test_framework: Some(TestFramework::Mocha),
                test_dir: Some(dir.into()),
                ..Default::default()
            },
            skip_install: true,
        };

        let report = generate(
            &options,
            &Defaults::default(),
            &mut ScriptedPrompter::empty(),
            &mut sink,
            &mut RecordingInstaller::new(),
        )
        .unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join(DOTFILE)).unwrap())
                .unwrap();
        assert_eq!(written["extends"], "shopify", "test dir {:?}", dir);
        assert_eq!(written["parser"], "babel-eslint");
        assert!(written.get("globals").is_none());

        let paths: Vec<String> = report
            .files
            .iter()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(paths, vec![DOTFILE, MANIFEST_FILE, IGNORE_FILE]);
    }
}
