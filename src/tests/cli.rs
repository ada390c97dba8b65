use std::io::Write;

use clap::Parser;

use crate::catalog::Catalog;
use crate::cli::Args;
use crate::recommend::Recommender;
use crate::{load_catalog, load_config, run_recommend};

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn path_str(file: &tempfile::NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

fn query(name: &str) -> Vec<String> {
    name.split(' ').map(str::to_string).collect()
}

#[test]
pub fn test_defaults_without_flags_or_config() {
    let args = Args::try_parse_from(["reco", "list"]).unwrap();

    let config = load_config(&args).unwrap();
    assert_eq!(config.top_n, 3);

    let catalog = load_catalog(&args, &config).unwrap();
    assert_eq!(catalog.len(), Catalog::builtin().len());
    assert_eq!(catalog.resolve("gravity"), Some(5));
}

#[test]
pub fn test_top_n_flag_overrides_config() {
    let config_file = temp_file("top_n: 5\n");

    let args = Args::try_parse_from(["reco", "--config", path_str(&config_file), "list"]).unwrap();
    assert_eq!(load_config(&args).unwrap().top_n, 5);

    let args = Args::try_parse_from([
        "reco",
        "--config",
        path_str(&config_file),
        "--top-n",
        "1",
        "list",
    ])
    .unwrap();
    assert_eq!(load_config(&args).unwrap().top_n, 1);
}

#[test]
pub fn test_zero_top_n_flag_rejected() {
    assert!(Args::try_parse_from(["reco", "--top-n", "0", "list"]).is_err());
}

#[test]
pub fn test_catalog_flag_wins_over_config() {
    let config_csv = temp_file("name,description\nHeat,A detective hunts bank robbers.\nRonin,Mercenaries chase a briefcase.\n");
    let flag_csv = temp_file("name,description\nAlien,A crew meets a creature.\nAliens,Marines fight the creature.\n");
    let config_file = temp_file(&format!("catalog: \"{}\"\n", path_str(&config_csv)));

    let args = Args::try_parse_from(["reco", "--config", path_str(&config_file), "list"]).unwrap();
    let config = load_config(&args).unwrap();
    let catalog = load_catalog(&args, &config).unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Heat", "Ronin"]);

    let args = Args::try_parse_from([
        "reco",
        "--config",
        path_str(&config_file),
        "--catalog",
        path_str(&flag_csv),
        "list",
    ])
    .unwrap();
    let config = load_config(&args).unwrap();
    let catalog = load_catalog(&args, &config).unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Alien", "Aliens"]);
}

#[test]
pub fn test_recommend_multi_word_name() {
    let args = Args::try_parse_from(["reco", "recommend", "the", "martian"]).unwrap();
    match args.command {
        Some(crate::cli::Command::Recommend { name, json, .. }) => {
            assert_eq!(name, vec!["the", "martian"]);
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
pub fn test_recommend_prints_list() {
    let recommender = Recommender::new(Catalog::builtin()).unwrap();
    let mut out = Vec::new();

    run_recommend(&recommender, &query("gravity"), 2, false, false, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nRecommended Movies:\n👉 The Martian\n👉 Interstellar\n\n"
    );
}

#[test]
pub fn test_recommend_trims_like_the_shell() {
    let recommender = Recommender::new(Catalog::builtin()).unwrap();
    let mut out = Vec::new();

    run_recommend(&recommender, &[" gravity ".to_string()], 1, false, false, &mut out).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("👉 The Martian\n"));
}

#[test]
pub fn test_recommend_not_found_fails_after_notice() {
    let recommender = Recommender::new(Catalog::builtin()).unwrap();
    let mut out = Vec::new();

    let err = run_recommend(&recommender, &query("unknown movie"), 3, false, false, &mut out)
        .unwrap_err();

    assert_eq!(err.to_string(), "movie not found: unknown movie");
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "❌ Movie not found. Please try again.\n\n"
    );
}

#[test]
pub fn test_recommend_json() {
    let recommender = Recommender::new(Catalog::builtin()).unwrap();
    let mut out = Vec::new();

    run_recommend(&recommender, &query("Gravity"), 3, true, false, &mut out).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|rec| rec["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["The Martian", "Interstellar", "The Dark Knight"]);
}
