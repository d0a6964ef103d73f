//! Tests for run configuration resolution

use cma_core::{
    Error, ProjectLayout, ReporterOptions, RunConfigResolver, locate, select_collection,
};
use cma_test_utils::TestProject;
use rstest::rstest;
use serde_json::json;

fn resolver_for(project: &TestProject) -> RunConfigResolver {
    RunConfigResolver::new(ProjectLayout::new(project.root()))
}

mod environment_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locate_dev_environment() {
        let project = TestProject::new().with_environment("dev");

        let env = locate(&project.environments_dir(), "dev").unwrap();
        assert_eq!(env, TestProject::environment("dev"));
    }

    #[test]
    fn test_locate_matches_prefix() {
        let project = TestProject::new().with_file(
            "environments/tst-local.json",
            r#"{"name": "tst-local"}"#,
        );

        let env = locate(&project.environments_dir(), "tst").unwrap();
        assert_eq!(env["name"], "tst-local");
    }

    #[test]
    fn test_locate_unknown_names_expected_file() {
        let project = TestProject::new().with_environment("dev");

        let err = locate(&project.environments_dir(), "pre").unwrap_err();
        assert!(err.is_environment_not_found());
        assert!(
            err.to_string()
                .contains("'environments/pre.postman_environment.json'"),
            "unexpected message: {err}"
        );
    }
}

mod collection_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("example", TestProject::ci_collection())]
    #[case("dev", TestProject::primary_collection())]
    #[case("prod", TestProject::primary_collection())]
    fn test_select_collection(#[case] environment: &str, #[case] expected: serde_json::Value) {
        let project = TestProject::new().with_collections();
        let layout = ProjectLayout::new(project.root());

        assert_eq!(select_collection(&layout, environment).unwrap(), expected);
    }

    #[test]
    fn test_bundled_collections_resolve() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        let layout = ProjectLayout::new(&root);

        let primary = select_collection(&layout, "dev").unwrap();
        let folders: Vec<&str> = primary["item"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["name"].as_str())
            .collect();
        assert_eq!(folders, vec!["admin", "system"]);

        let ci = select_collection(&layout, "example").unwrap();
        assert_eq!(ci["info"]["name"], "CI");
    }

    #[test]
    fn test_bundled_example_resolves_end_to_end() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");

        let config = RunConfigResolver::new(ProjectLayout::new(&root))
            .resolve("example", "cli", None::<String>)
            .unwrap();
        assert_eq!(config.environment()["name"], "example");
        assert_eq!(config.reporters(), ["cli"]);
    }

    #[test]
    fn test_malformed_collection_is_json_error() {
        let project = TestProject::new()
            .with_file("cma.postman_collection.json", "[")
            .with_environment("dev");

        let err = resolver_for(&project).resolve("dev", "cli", None::<String>).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}

mod resolve_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_example_end_to_end() {
        let project = TestProject::new()
            .with_collections()
            .with_environment("example");

        let config = resolver_for(&project)
            .resolve("example", "cli", None::<String>)
            .unwrap();

        assert_eq!(config.collection(), &TestProject::ci_collection());
        assert_eq!(config.environment(), &TestProject::environment("example"));
        assert!(config.folders().is_empty());
        assert_eq!(config.reporters(), ["cli"]);
        assert_eq!(config.reporter_options(), &ReporterOptions::default());
    }

    #[test]
    fn test_resolve_lists_pass_through() {
        let project = TestProject::new().with_collections().with_environment("dev");

        let config = resolver_for(&project)
            .resolve(
                "dev",
                vec!["CLI".to_string(), "html".to_string(), "cli".to_string()],
                vec!["admin".to_string(), "system".to_string()],
            )
            .unwrap();

        assert_eq!(config.collection(), &TestProject::primary_collection());
        assert_eq!(config.folders(), ["admin", "system"]);
        assert_eq!(config.reporters(), ["cli", "htmlextra"]);
    }

    #[test]
    fn test_resolve_missing_environment() {
        let project = TestProject::new().with_collections().with_environment("dev");

        let err = resolver_for(&project)
            .resolve("prod", "cli", None::<String>)
            .unwrap_err();

        match err {
            Error::EnvironmentNotFound { name, available } => {
                assert_eq!(name, "prod");
                assert_eq!(available, vec!["dev"]);
            }
            other => panic!("expected EnvironmentNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_injected_reporter_options() {
        let project = TestProject::new().with_collections().with_environment("dev");
        let options = ReporterOptions::empty().with_option("htmlextra", "title", "Test run");

        let config = resolver_for(&project)
            .with_reporter_options(options.clone())
            .resolve("dev", "html", None::<String>)
            .unwrap();

        assert_eq!(config.reporter_options(), &options);
        assert_eq!(config.reporters(), ["htmlextra"]);
    }

    #[test]
    fn test_resolved_configuration_serializes_for_newman() {
        let project = TestProject::new()
            .with_collections()
            .with_environment("example");

        let config = resolver_for(&project)
            .resolve("example", "cli", None::<String>)
            .unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["folder"], json!([]));
        assert_eq!(value["reporters"], json!(["cli"]));
        assert_eq!(
            value["reporter"]["htmlextra"]["title"],
            "SROC Charging Module API"
        );
    }
}
