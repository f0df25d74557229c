use pitlane::model::Driver;
use pitlane::roster::{LoadStatus, Roster};
use pitlane::store::fs::CsvFileStore;
use pitlane::store::{DataStore, LoadOutcome};
use std::fs;
use tempfile::TempDir;

fn hamilton() -> Driver {
    Driver {
        number: 44,
        name: "Lewis Hamilton".to_string(),
        team: "Ferrari".to_string(),
        age: 40,
        nationality: "British".to_string(),
        podiums: 200,
        entries: 350,
        championships: 7,
        career_points: 5000.0,
        season_points: 120.0,
    }
}

fn setup() -> (TempDir, CsvFileStore) {
    let dir = TempDir::new().unwrap();
    let store = CsvFileStore::new(dir.path().join("drivers.csv"));
    (dir, store)
}

#[test]
fn test_absent_file_loads_empty() {
    let (_dir, store) = setup();
    assert_eq!(store.load().unwrap(), LoadOutcome::Absent);

    let (roster, status) = Roster::load(store).unwrap();
    assert!(roster.is_empty());
    assert_eq!(status, LoadStatus::FileAbsent);
}

#[test]
fn test_round_trip_keeps_every_field() {
    let (_dir, mut store) = setup();
    let mut odd = hamilton();
    odd.number = 7;
    odd.name = "Kimi, \"Iceman\" Räikkönen".to_string();
    odd.season_points = 0.1 + 0.2;
    odd.career_points = 1873.0;

    store.save(&[hamilton(), odd.clone()]).unwrap();
    let loaded = store.load().unwrap().into_drivers();

    // File order is by racing number.
    assert_eq!(loaded, vec![odd, hamilton()]);
}

#[test]
fn test_file_layout() {
    let (dir, mut store) = setup();
    store.save(&[hamilton()]).unwrap();

    let text = fs::read_to_string(dir.path().join("drivers.csv")).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Racing Number,Name,Team,Age,Nationality,Podiums,GP Entered,World Championships,Career Points,Current Season Points"
    );
    assert_eq!(lines[1], "44,Lewis Hamilton,Ferrari,40,British,200,350,7,5000.0,120.0");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_save_leaves_no_tmp_files() {
    let (dir, mut store) = setup();
    store.save(&[hamilton()]).unwrap();
    store.save(&[]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert!(store.load().unwrap().into_drivers().is_empty());
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("season").join("2025").join("drivers.csv");
    let mut store = CsvFileStore::new(&path);

    store.save(&[hamilton()]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_malformed_rows_are_dropped_on_load() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("drivers.csv"),
        "Racing Number,Name,Team,Age,Nationality,Podiums,GP Entered,World Championships,Career Points,Current Season Points\n\
         44,Lewis Hamilton,Ferrari,40,British,200,350,7,5000.0,120.0\n\
         1,Max Verstappen,Red Bull,twenty-seven,Dutch,110,210,4,3000,155\n\
         4,Lando Norris,McLaren\n\
         81,Oscar Piastri,McLaren,24,Australian,20,60,0,800,180\n",
    )
    .unwrap();

    let (roster, status) = Roster::load(store).unwrap();
    assert_eq!(status, LoadStatus::Loaded(2));
    let numbers: Vec<_> = roster.drivers().iter().map(|d| d.number).collect();
    assert_eq!(numbers, vec![44, 81]);
}

#[test]
fn test_roster_mutations_reach_the_file() {
    let (dir, store) = setup();
    let path = dir.path().join("drivers.csv");

    let (mut roster, _) = Roster::load(store).unwrap();
    let mut driver = hamilton();
    driver.season_points = 121.5;
    pitlane::commands::add::run(&mut roster, driver).unwrap();

    let (reloaded, status) = Roster::load(CsvFileStore::new(&path)).unwrap();
    assert_eq!(status, LoadStatus::Loaded(1));
    assert_eq!(reloaded.find(44).unwrap().season_points, 121.5);
}
