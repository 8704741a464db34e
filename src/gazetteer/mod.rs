//! City gazetteer for "type to locate"
//!
//! Loads `name,country,latitude,longitude` rows from CSV and resolves typed
//! text to a city whose location can be handed to the navigator.

mod city;


use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

use log::{debug, info};

use crate::navigation::errors::{NavError, NavResult};
use crate::utils::progress::ProgressTracker;

pub use self::city::City;

/// Default cap on autocomplete suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;

const PROGRESS_INTERVAL: usize = 10_000;

/// Searchable set of cities
#[derive(Debug, Default)]
pub struct Gazetteer {
    cities: Vec<City>,
    by_key: BTreeMap<String, usize>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load cities from a CSV file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> NavResult<usize> {
        let path = path.as_ref();
        info!("Loading cities from: {}", path.display());
        let file = File::open(path).map_err(|e| {
            NavError::GazetteerError(format!("Cannot open {}: {}", path.display(), e))
        })?;
        self.load_csv(BufReader::new(file))
    }

    /// Replace the contents with the cities in a CSV stream
    ///
    /// The first record is a header. Fields are trimmed, and quoted fields
    /// may hold commas. Rows with fewer than four fields, an unparsable
    /// coordinate or an empty name are skipped.
    ///
    /// # Errors
    /// `GazetteerError` on malformed CSV or when no row yields a city.
    pub fn load_csv<R: BufRead>(&mut self, reader: R) -> NavResult<usize> {
        self.cities.clear();
        self.by_key.clear();

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let header = csv_reader.headers()
            .map_err(|e| NavError::GazetteerError(format!("Failed to read CSV header: {}", e)))?;
        debug!("CSV header: {:?}", header);

        let progress = ProgressTracker::spinner("Loading cities");
        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| {
                NavError::GazetteerError(format!("CSV parse error at row {}: {}", row_idx + 1, e))
            })?;

            if let Some(city) = Self::parse_record(&record) {
                self.insert(city);
            }

            if (row_idx + 1) % PROGRESS_INTERVAL == 0 {
                debug!("Loaded {} cities...", self.cities.len());
                progress.set_message(&format!("{} cities", self.cities.len()));
            }
            progress.tick();
        }
        progress.finish();

        if self.cities.is_empty() {
            return Err(NavError::GazetteerError("No valid city rows found".to_string()));
        }

        info!("Loaded {} cities successfully", self.cities.len());
        Ok(self.cities.len())
    }

    fn parse_record(record: &StringRecord) -> Option<City> {
        if record.len() < 4 {
            return None;
        }

        let name = record.get(0)?;
        if name.is_empty() {
            return None;
        }
        let latitude = record.get(2)?.parse::<f64>().ok()?;
        let longitude = record.get(3)?.parse::<f64>().ok()?;

        Some(City {
            name: name.to_string(),
            country: record.get(1)?.to_string(),
            latitude,
            longitude,
        })
    }

    fn insert(&mut self, city: City) {
        let index = self.cities.len();
        self.by_key.insert(city.search_key(), index);
        self.cities.push(city);
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities in load order
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Resolve typed text to a city
    ///
    /// Tries, in order: the exact "Name, Country" key, the same key ignoring
    /// case, then the city name alone ignoring case. Duplicate keys resolve
    /// to the row loaded last.
    pub fn find(&self, text: &str) -> Option<&City> {
        let search = text.trim();
        if search.is_empty() {
            return None;
        }

        if let Some(&index) = self.by_key.get(search) {
            return self.cities.get(index);
        }

        let lowered = search.to_lowercase();
        if let Some((_, &index)) = self.by_key.iter().find(|(key, _)| key.to_lowercase() == lowered) {
            return self.cities.get(index);
        }

        let found = self.cities.iter().find(|city| city.name.to_lowercase() == lowered);
        if found.is_none() {
            debug!("City not found: {}", search);
        }
        found
    }

    /// Keys containing the text, ignoring case, in key order
    pub fn suggest(&self, text: &str, limit: usize) -> Vec<&str> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.by_key
            .keys()
            .filter(|key| key.to_lowercase().contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}
