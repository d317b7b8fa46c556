//! End-to-end tests: catalog CSVs through aggregation and ranking

use std::fs;

use ipl_scorer::{
    catalog::load_catalog,
    storage::TeamStore,
    teams::{aggregate, leaderboard},
    Role,
};
use tempfile::TempDir;

fn write_fixture_csvs(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf, std::path::PathBuf) {
    let batters = dir.path().join("batters.csv");
    let bowlers = dir.path().join("bowlers.csv");
    let allrounders = dir.path().join("allrounders.csv");

    fs::write(
        &batters,
        "Name,Runs 2024,SR 2024,Avg 2024\n\
         Travis Head,567,178.2,43.6\n\
         Phil Salt,435,182.1,33.5\n",
    )
    .unwrap();
    // Second season has economy 0: that triple's economy term must vanish
    fs::write(
        &bowlers,
        "Name,W 2024,Econ 2024,Avg 2024,W 2025,Econ 2025,Avg 2025\n\
         Pat Cummins,3,0,20,0,0,0\n",
    )
    .unwrap();
    fs::write(
        &allrounders,
        "Name,R1,SR1,A1,W1,E1,BA1,R2,SR2,A2,W2,E2,BA2\n\
         Ravindra Jadeja,40,130,35,2,7,25,10,90,15,1,8,20\n",
    )
    .unwrap();

    (batters, bowlers, allrounders)
}

#[test]
fn test_catalog_scores_match_formulas() {
    let dir = TempDir::new().unwrap();
    let (batters, bowlers, allrounders) = write_fixture_csvs(&dir);
    let catalog = load_catalog(&batters, &bowlers, &allrounders).unwrap();

    let head = catalog.get("Travis Head").unwrap();
    assert_eq!(head.role, Role::Batter);
    assert!((head.score() - 788.8).abs() < 1e-9);

    // 3*25 + 0 (economy 0) + 20*2.5 = 125; all-zero second triple adds 0
    let cummins = catalog.get("Pat Cummins").unwrap();
    assert_eq!(cummins.score(), 125.0);

    let jadeja = catalog.get("Ravindra Jadeja").unwrap();
    assert!((jadeja.score() - 552.77).abs() < 1e-2);
}

#[test]
fn test_team_total_is_sum_of_resolvable_members() {
    let dir = TempDir::new().unwrap();
    let (batters, bowlers, allrounders) = write_fixture_csvs(&dir);
    let catalog = load_catalog(&batters, &bowlers, &allrounders).unwrap();

    let members: Vec<String> = ["Travis Head", "Pat Cummins", "Ghost Player"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let with_ghost = aggregate(&members, &catalog);
    let without_ghost = aggregate(&members[..2], &catalog);

    // Unresolvable names contribute 0 and do not change the total
    assert_eq!(with_ghost.total, without_ghost.total);
    assert_eq!(with_ghost.per_player.len(), 2);
}

#[test]
fn test_leaderboard_reflects_current_store() {
    let dir = TempDir::new().unwrap();
    let (batters, bowlers, allrounders) = write_fixture_csvs(&dir);
    let catalog = load_catalog(&batters, &bowlers, &allrounders).unwrap();

    let mut store = TeamStore::open(&dir.path().join("teams.json")).unwrap();
    store.create_team("Heads").unwrap();
    store.add_member("Heads", "Travis Head").unwrap();
    store.create_team("Bowlers United").unwrap();
    store.add_member("Bowlers United", "Pat Cummins").unwrap();

    let rows = leaderboard(&store, &catalog);
    assert_eq!(rows[0].team, "Heads");
    assert_eq!(rows[1].team, "Bowlers United");

    // Scores are recomputed per call: mutating the store shows up
    // immediately on the next leaderboard
    store.add_member("Bowlers United", "Ravindra Jadeja").unwrap();
    let rows = leaderboard(&store, &catalog);
    assert_eq!(rows[0].team, "Bowlers United");
}
