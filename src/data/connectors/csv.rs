use super::{
    types::{CatalogSummary, RequiredColumn},
    validator::DataValidator,
};
use crate::error::{Result, SquadforgeError};
use crate::types::{Catalog, PlayerRecord, Position};
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| SquadforgeError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load and validate a player catalog. Returns the grouped catalog and
    /// a summary for startup logging.
    pub fn load_catalog<P: AsRef<Path>>(
        path: P,
        min_players: Option<usize>,
    ) -> Result<(Catalog, CatalogSummary)> {
        let df = Self::load(&path)?;

        let column_map = DataValidator::validate_catalog_columns(&df)?;

        let min_players = min_players.unwrap_or(5);
        DataValidator::validate_minimum_rows(&df, min_players)?;

        // Warn about nulls but don't fail; null cells are rejected per row below
        let null_report = DataValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        let catalog = Self::extract_catalog(&df, &column_map)?;
        let summary = Self::summarize(&path, &catalog);

        Ok((catalog, summary))
    }

    fn extract_catalog(
        df: &DataFrame,
        column_map: &std::collections::HashMap<RequiredColumn, String>,
    ) -> Result<Catalog> {
        let names = df
            .column(&column_map[&RequiredColumn::Name])?
            .cast(&DataType::String)?;
        let names = names.str()?;
        let clubs = df
            .column(&column_map[&RequiredColumn::Club])?
            .cast(&DataType::String)?;
        let clubs = clubs.str()?;
        let prices = df
            .column(&column_map[&RequiredColumn::Price])?
            .cast(&DataType::Int64)?;
        let prices = prices.i64()?;
        let scores = df
            .column(&column_map[&RequiredColumn::Score])?
            .cast(&DataType::Float64)?;
        let scores = scores.f64()?;
        let positions = df
            .column(&column_map[&RequiredColumn::Position])?
            .cast(&DataType::String)?;
        let positions = positions.str()?;

        let mut catalog = Catalog::new();
        for i in 0..df.height() {
            let name = names.get(i).ok_or_else(|| {
                SquadforgeError::DataLoading(format!("Missing player name at row {}", i))
            })?;
            let club = clubs.get(i).ok_or_else(|| {
                SquadforgeError::DataLoading(format!("Missing club id for player '{}'", name))
            })?;
            let price = prices.get(i).ok_or_else(|| {
                SquadforgeError::DataLoading(format!("Missing price for player '{}'", name))
            })?;
            if price < 0 {
                return Err(SquadforgeError::DataLoading(format!(
                    "Negative price {} for player '{}'",
                    price, name
                )));
            }
            let score = scores.get(i).ok_or_else(|| {
                SquadforgeError::DataLoading(format!("Missing score for player '{}'", name))
            })?;
            let code = positions.get(i).ok_or_else(|| {
                SquadforgeError::DataLoading(format!("Missing position for player '{}'", name))
            })?;
            let position = Position::from_code(code).ok_or_else(|| {
                SquadforgeError::DataLoading(format!(
                    "Unknown position '{}' for player '{}'",
                    code, name
                ))
            })?;

            catalog.insert(PlayerRecord {
                name: name.to_string(),
                club_id: club.to_string(),
                price: price as u64,
                score,
                position,
            });
        }

        Ok(catalog)
    }

    fn summarize<P: AsRef<Path>>(path: P, catalog: &Catalog) -> CatalogSummary {
        let mut price_range = (u64::MAX, 0u64);
        let mut score_range = (f64::INFINITY, f64::NEG_INFINITY);
        for player in catalog.all_players() {
            price_range.0 = price_range.0.min(player.price);
            price_range.1 = price_range.1.max(player.price);
            score_range.0 = score_range.0.min(player.score);
            score_range.1 = score_range.1.max(player.score);
        }
        if catalog.total_players() == 0 {
            price_range = (0, 0);
            score_range = (0.0, 0.0);
        }

        CatalogSummary {
            file_path: path.as_ref().to_string_lossy().to_string(),
            total_players: catalog.total_players(),
            players_per_position: catalog.position_counts(),
            price_range,
            score_range,
        }
    }
}
