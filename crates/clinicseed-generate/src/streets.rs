//! Street reference data: the tabular address list generators sample from.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::errors::SeedError;

/// One row of the street reference file.
#[derive(Debug, Clone, Deserialize)]
pub struct StreetRecord {
    pub street: String,
    pub house: String,
    pub zip_code: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// The full address list, read into memory once per run, with a
/// `"street, house"` index for coordinate lookups.
#[derive(Debug, Clone)]
pub struct StreetBook {
    records: Vec<StreetRecord>,
    coordinates: HashMap<String, [f64; 2]>,
}

impl StreetBook {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let mut reader = csv::Reader::from_path(path).map_err(|err| {
            SeedError::Reference(format!("failed to open {}: {}", path.display(), err))
        })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: StreetRecord = row?;
            records.push(record);
        }
        if records.is_empty() {
            return Err(SeedError::Reference(format!(
                "street file {} has no rows",
                path.display()
            )));
        }

        let coordinates = records
            .iter()
            .map(|record| {
                (
                    address_key(&record.street, &record.house),
                    [record.longitude, record.latitude],
                )
            })
            .collect();

        Ok(Self {
            records,
            coordinates,
        })
    }

    /// Uniform random address row.
    pub fn pick(&self, rng: &mut impl Rng) -> &StreetRecord {
        self.records
            .choose(rng)
            .expect("street book is never empty after load")
    }

    /// `[longitude, latitude]` for a street/house pair from the book.
    pub fn coordinates(&self, street: &str, house: &str) -> Option<[f64; 2]> {
        self.coordinates.get(&address_key(street, house)).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the street data bundled with this crate.
    pub fn bundled_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("streets.csv")
    }
}

fn address_key(street: &str, house: &str) -> String {
    format!("{street}, {house}")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn bundled_streets_load_and_index() {
        let book = StreetBook::load(&StreetBook::bundled_path()).expect("bundled asset loads");
        assert!(!book.is_empty());

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let record = book.pick(&mut rng);
        let coords = book
            .coordinates(&record.street, &record.house)
            .expect("picked address has coordinates");
        // Kazan bounding box.
        assert!(coords[0] > 48.0 && coords[0] < 50.0, "longitude {}", coords[0]);
        assert!(coords[1] > 55.0 && coords[1] < 56.5, "latitude {}", coords[1]);
    }

    #[test]
    fn missing_file_is_a_reference_error() {
        let err = StreetBook::load(Path::new("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, SeedError::Reference(_)));
    }

    #[test]
    fn unknown_address_has_no_coordinates() {
        let book = StreetBook::load(&StreetBook::bundled_path()).expect("bundled asset loads");
        assert!(book.coordinates("Nowhere", "1").is_none());
    }
}
