//! Startup import of postal-region reference data.
//!
//! The reference file is comma delimited with a header row. Data rows need at
//! least [`MIN_FIELDS`] columns; shorter rows are logged and skipped. Each
//! accepted row becomes one region with its coordinate:
//!
//! | column | field        |
//! |--------|--------------|
//! | 1      | region code  |
//! | 2      | region name  |
//! | 4      | country      |
//! | 5      | city         |
//! | 6      | postal code  |
//! | 10, 11 | latitude, longitude |
//!
//! Each line is judged on its own: double quotes carry no meaning and a
//! stray one never joins lines together.
//!
//! The whole import runs in one transaction that first clears the previous
//! reference rows. An unreadable file, a broken coordinate or a database
//! failure rolls everything back and is reported as a [`LoadError`].

use crate::config::DEFAULT_REGION_BATCH_SIZE;
use crate::db::{regions, DbPool, Location, NewRegion};
use csv::StringRecord;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_FIELDS: usize = 16;

const REGION_CODE: usize = 1;
const REGION_NAME: usize = 2;
const COUNTRY: usize = 4;
const CITY: usize = 5;
const POSTAL_CODE: usize = 6;
const LATITUDE: usize = 10;
const LONGITUDE: usize = 11;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read reference data: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: column {column} is not a number: '{value}'")]
    InvalidCoordinate {
        line: u64,
        column: usize,
        value: String,
    },

    #[error("cannot store reference data: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub imported: usize,
    pub skipped: usize,
    pub batches: usize,
}

/// Outcome of the startup import, reported by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ReferenceDataStatus {
    Loaded { imported: usize, skipped: usize },
    Failed { error: String },
    Disabled,
}

impl ReferenceDataStatus {
    pub fn is_healthy(&self) -> bool {
        !matches!(self, ReferenceDataStatus::Failed { .. })
    }
}

impl From<&Result<LoadSummary, LoadError>> for ReferenceDataStatus {
    fn from(result: &Result<LoadSummary, LoadError>) -> Self {
        match result {
            Ok(summary) => ReferenceDataStatus::Loaded {
                imported: summary.imported,
                skipped: summary.skipped,
            },
            Err(e) => ReferenceDataStatus::Failed {
                error: e.to_string(),
            },
        }
    }
}

pub struct RegionLoader {
    pool: DbPool,
    batch_size: usize,
}

impl RegionLoader {
    pub fn new(pool: DbPool, batch_size: usize) -> Self {
        let batch_size = if batch_size == 0 {
            DEFAULT_REGION_BATCH_SIZE
        } else {
            batch_size
        };
        Self { pool, batch_size }
    }

    pub async fn load_file(&self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("📥 Loading region reference data from {}", path.display());
        self.load_from_reader(file).await
    }

    pub async fn load_from_reader<R: Read + Send>(&self, reader: R) -> Result<LoadSummary, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut tx = self.pool.begin().await?;
        let replaced = regions::clear_regions(&mut tx).await?;
        if replaced > 0 {
            tracing::info!("Replacing {} existing region rows", replaced);
        }

        let mut summary = LoadSummary::default();
        let mut batch = Vec::with_capacity(self.batch_size);

        for result in csv_reader.records() {
            // Invalid UTF-8 is as fatal as a failed read.
            let record = result?;

            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match parse_row(&record, line)? {
                Some(region) => batch.push(region),
                None => {
                    tracing::warn!(
                        "⚠️ Line {} has {} fields, expected at least {}; skipped: {:?}",
                        line,
                        record.len(),
                        MIN_FIELDS,
                        record
                    );
                    summary.skipped += 1;
                    continue;
                }
            }

            if batch.len() >= self.batch_size {
                flush(&mut tx, &mut batch, &mut summary).await?;
            }
        }

        if !batch.is_empty() {
            flush(&mut tx, &mut batch, &mut summary).await?;
        }

        tx.commit().await?;

        tracing::info!(
            "✅ Region reference data loaded: {} imported, {} skipped, {} batches",
            summary.imported,
            summary.skipped,
            summary.batches
        );
        Ok(summary)
    }
}

async fn flush(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    batch: &mut Vec<NewRegion>,
    summary: &mut LoadSummary,
) -> Result<(), LoadError> {
    regions::insert_regions(tx, batch).await?;
    summary.imported += batch.len();
    summary.batches += 1;
    tracing::debug!("Flushed batch {} ({} rows)", summary.batches, batch.len());
    batch.clear();
    Ok(())
}

/// `Ok(None)` means the row is too short to use.
pub fn parse_row(record: &StringRecord, line: u64) -> Result<Option<NewRegion>, LoadError> {
    if record.len() < MIN_FIELDS {
        return Ok(None);
    }

    let field = |index: usize| record[index].to_string();
    let coordinate = |column: usize| {
        record[column]
            .trim()
            .parse::<f64>()
            .map_err(|_| LoadError::InvalidCoordinate {
                line,
                column,
                value: record[column].to_string(),
            })
    };

    Ok(Some(NewRegion {
        region_code: field(REGION_CODE),
        region_name: field(REGION_NAME),
        country: field(COUNTRY),
        city: field(CITY),
        postal_code: field(POSTAL_CODE),
        location: Location {
            latitude: coordinate(LATITUDE)?,
            longitude: coordinate(LONGITUDE)?,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    const HEADER: &str = "id,iso,state,district,country,city,postcode,a,b,c,lat,lon,d,e,f,g\n";

    fn row(postcode: &str, city: &str) -> String {
        format!("1,DE-BE,Berlin,Mitte,DE,{city},{postcode},x,x,x,52.52,13.40,x,x,x,x\n")
    }

    #[test]
    fn test_parse_row_field_mapping() {
        let record = StringRecord::from(vec![
            "7", "DE-BY", "Bayern", "Oberbayern", "DE", "München", "80331", "", "", "", "48.137",
            "11.575", "", "", "", "",
        ]);

        let region = parse_row(&record, 2).unwrap().unwrap();

        assert_eq!(region.region_code, "DE-BY");
        assert_eq!(region.region_name, "Bayern");
        assert_eq!(region.country, "DE");
        assert_eq!(region.city, "München");
        assert_eq!(region.postal_code, "80331");
        assert_eq!(region.location, Location { latitude: 48.137, longitude: 11.575 });
    }

    #[test]
    fn test_parse_row_too_short() {
        let record = StringRecord::from(vec!["1", "DE-BE", "Berlin"]);
        assert!(parse_row(&record, 3).unwrap().is_none());
    }

    #[test]
    fn test_parse_row_bad_coordinate() {
        let mut fields = vec!["x"; MIN_FIELDS];
        fields[LATITUDE] = "north";
        let record = StringRecord::from(fields);

        let err = parse_row(&record, 5).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidCoordinate { line: 5, column: LATITUDE, .. }
        ));
    }

    #[tokio::test]
    async fn test_short_rows_are_skipped() {
        let pool = create_memory_pool().await.unwrap();
        let loader = RegionLoader::new(pool.clone(), 1000);
        let data = format!("{HEADER}{}too,short,row\n{}", row("10115", "Berlin"), row("10117", "Berlin"));

        let summary = loader.load_from_reader(data.as_bytes()).await.unwrap();

        assert_eq!(summary, LoadSummary { imported: 2, skipped: 1, batches: 1 });
        assert_eq!(regions::count_regions(&pool).await.unwrap(), 2);
        assert_eq!(regions::count_locations(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_batches_flush_at_size() {
        let pool = create_memory_pool().await.unwrap();
        let loader = RegionLoader::new(pool.clone(), 2);
        let data: String = std::iter::once(HEADER.to_string())
            .chain((0..5).map(|i| row(&format!("1011{i}"), "Berlin")))
            .collect();

        let summary = loader.load_from_reader(data.as_bytes()).await.unwrap();

        assert_eq!(summary.imported, 5);
        assert_eq!(summary.batches, 3);
        assert_eq!(regions::count_regions(&pool).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_bad_coordinate_rolls_back() {
        let pool = create_memory_pool().await.unwrap();
        let loader = RegionLoader::new(pool.clone(), 1);
        let good = format!("{HEADER}{}", row("10115", "Berlin"));
        loader.load_from_reader(good.as_bytes()).await.unwrap();

        let broken = format!(
            "{HEADER}{}1,DE-BE,Berlin,Mitte,DE,Berlin,10119,x,x,x,lat,13.40,x,x,x,x\n",
            row("10117", "Berlin")
        );
        let err = loader.load_from_reader(broken.as_bytes()).await.unwrap_err();

        assert!(matches!(err, LoadError::InvalidCoordinate { line: 3, .. }));
        let kept = regions::list_regions(&pool).await.unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].postal_code, "10115");
    }

    #[tokio::test]
    async fn test_reload_replaces_previous_rows() {
        let pool = create_memory_pool().await.unwrap();
        let loader = RegionLoader::new(pool.clone(), 1000);
        let data = format!("{HEADER}{}", row("10115", "Berlin"));

        loader.load_from_reader(data.as_bytes()).await.unwrap();
        loader.load_from_reader(data.as_bytes()).await.unwrap();

        assert_eq!(regions::count_regions(&pool).await.unwrap(), 1);
        assert_eq!(regions::count_locations(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stray_quote_stays_on_its_line() {
        let pool = create_memory_pool().await.unwrap();
        let loader = RegionLoader::new(pool.clone(), 1000);
        let data = format!(
            "{HEADER}{}1,DE-BE,Berlin,Mitte,DE,\"Berlin,10117,x,x,x,52.51,13.39,x,x,x,x\n{}{}",
            row("10115", "Berlin"),
            row("28195", "Bremen"),
            row("20095", "Hamburg")
        );

        let summary = loader.load_from_reader(data.as_bytes()).await.unwrap();

        assert_eq!(summary, LoadSummary { imported: 4, skipped: 0, batches: 1 });
        let stored = regions::list_regions(&pool).await.unwrap();
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[1].city, "\"Berlin");
        assert_eq!(stored[3].postal_code, "20095");
    }

    #[tokio::test]
    async fn test_invalid_utf8_aborts_load() {
        let pool = create_memory_pool().await.unwrap();
        let loader = RegionLoader::new(pool.clone(), 1);
        let good = format!("{HEADER}{}", row("10115", "Berlin"));
        loader.load_from_reader(good.as_bytes()).await.unwrap();

        let mut data = format!("{HEADER}{}", row("10117", "Berlin")).into_bytes();
        data.extend_from_slice(b"1,DE-BE,Berlin,Mitte,DE,Berl\xFFin,10119,x,x,x,52.5,13.4,x,x,x,x\n");
        let err = loader.load_from_reader(&data[..]).await.unwrap_err();

        assert!(matches!(err, LoadError::Csv(_)));
        let kept = regions::list_regions(&pool).await.unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].postal_code, "10115");
    }

    #[test]
    fn test_status_from_result() {
        let ok: Result<LoadSummary, LoadError> = Ok(LoadSummary { imported: 3, skipped: 1, batches: 1 });
        assert_eq!(
            ReferenceDataStatus::from(&ok),
            ReferenceDataStatus::Loaded { imported: 3, skipped: 1 }
        );

        let failed: Result<LoadSummary, LoadError> = Err(LoadError::InvalidCoordinate {
            line: 4,
            column: LONGITUDE,
            value: "east".to_string(),
        });
        let status = ReferenceDataStatus::from(&failed);
        assert!(!status.is_healthy());
        assert!(ReferenceDataStatus::Disabled.is_healthy());
    }
}
