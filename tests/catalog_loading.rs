use squadforge::data::CsvConnector;
use squadforge::types::Position;
use std::fs;
use std::path::PathBuf;

struct TempCsv {
    path: PathBuf,
}

impl TempCsv {
    fn write(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("failed to write temp CSV");
        Self { path }
    }
}

impl Drop for TempCsv {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn loads_a_catalog_with_original_style_headers() {
    let csv = TempCsv::write(
        "squadforge_catalog_ok.csv",
        "PLAYER_NAME,TEAM_ID,CURRENT_PRICE,SCORE,POSITION\n\
         Martin,1,40,5.5,GK\n\
         Dupont,1,30,3.25,MID\n\
         Durand,2,50,4.0,MID\n\
         Petit,3,45,4.5,FWD\n\
         Moreau,2,20,1.5,DEF\n",
    );

    let (catalog, summary) = CsvConnector::load_catalog(&csv.path, Some(5)).unwrap();

    assert_eq!(catalog.total_players(), 5);
    assert_eq!(catalog.players_at(Position::Midfielder).unwrap().len(), 2);
    assert_eq!(catalog.players_at(Position::Goalkeeper).unwrap().len(), 1);

    assert_eq!(summary.total_players, 5);
    assert_eq!(summary.price_range, (20, 50));
    assert_eq!(summary.score_range, (1.5, 5.5));
    assert_eq!(summary.players_per_position[&Position::Midfielder], 2);

    let keeper = &catalog.players_at(Position::Goalkeeper).unwrap()[0];
    assert_eq!(keeper.name, "Martin");
    assert_eq!(keeper.club_id, "1");
    assert_eq!(keeper.price, 40);
    assert!((keeper.score - 5.5).abs() < 1e-9);
}

#[test]
fn rejects_a_catalog_below_the_minimum_size() {
    let csv = TempCsv::write(
        "squadforge_catalog_small.csv",
        "name,club,price,score,position\n\
         Martin,1,40,5.5,GK\n",
    );

    let result = CsvConnector::load_catalog(&csv.path, Some(5));
    assert!(result.is_err());
}

#[test]
fn rejects_an_unknown_position_code() {
    let csv = TempCsv::write(
        "squadforge_catalog_bad_position.csv",
        "name,club,price,score,position\n\
         Martin,1,40,5.5,GK\n\
         Dupont,1,30,3.25,SWEEPER\n",
    );

    let result = CsvConnector::load_catalog(&csv.path, Some(1));
    assert!(result.is_err());
}

#[test]
fn rejects_a_catalog_missing_a_column() {
    let csv = TempCsv::write(
        "squadforge_catalog_missing_column.csv",
        "name,club,score,position\n\
         Martin,1,5.5,GK\n",
    );

    let result = CsvConnector::load_catalog(&csv.path, Some(1));
    assert!(result.is_err());
}

#[test]
fn missing_input_file_is_an_error() {
    let result = CsvConnector::load_catalog("definitely/not/here.csv", None);
    assert!(result.is_err());
}
