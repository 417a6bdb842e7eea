//! Checks that every shipped game mode data file loads and samples cleanly.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use quiz_core::{compare_answers, load, parse_str, render, GameMode, Sampler};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn every_mode_data_file_parses() {
    for mode in GameMode::ALL {
        let path = mode.resolve_path(&workspace_root());
        let records = load(&path).unwrap_or_else(|e| panic!("{}: {}", mode.name(), e));
        assert!(!records.is_empty(), "{} has no records", mode.name());
        assert!(records.iter().all(|r| !r.answers().is_empty()));
    }
}

#[test]
fn simple_mode_accepts_alternate_romanization() {
    let records = load(GameMode::Katakana.resolve_path(&workspace_root())).unwrap();
    let shi = records
        .iter()
        .find(|r| r.key().trim() == "シ")
        .expect("シ row");
    assert!(compare_answers("shi", shi).is_correct);
    assert!(compare_answers("SI", shi).is_correct);
    assert!(!compare_answers("chi", shi).is_correct);
}

#[test]
fn shipped_data_survives_render_round_trip() {
    for mode in GameMode::ALL {
        let records = load(mode.resolve_path(&workspace_root())).unwrap();
        let reparsed = parse_str(&render(&records).unwrap(), mode.data_path()).unwrap();
        assert_eq!(reparsed, records);
    }
}

#[test]
fn sampling_shipped_data_is_reproducible() {
    let records = load(GameMode::KatakanaFancy.resolve_path(&workspace_root())).unwrap();
    let requested = records.len() + 10;

    let first = Sampler::new(2025).sample(records.len(), requested);
    let second = Sampler::new(2025).sample(records.len(), requested);
    assert_eq!(first, second);
    assert_eq!(first.len(), requested);

    let mut fresh = first[..records.len()].to_vec();
    fresh.sort_unstable();
    assert_eq!(fresh, (0..records.len()).collect::<Vec<_>>());
}
