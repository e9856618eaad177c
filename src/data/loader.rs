use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
    UInt32Array, UInt64Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Restaurant, RestaurantDataset};

/// Columns every input file must carry, in no particular order.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["name", "city", "cuisine", "rating", "rating_count", "cost"];

/// Structural problems with an input file, as opposed to per-row dirt
/// (which is cleaned silently). These abort the load.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("no valid rows after cleaning; every row was missing a required field")]
    Empty,
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a restaurant dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the columns in [`REQUIRED_COLUMNS`]
/// * `.json`    – records-oriented array, `df.to_json(orient='records')`
/// * `.parquet` – flat columns of the same names, `df.to_parquet()`
///
/// Rows missing any of name, city, rating, cost, or rating_count are
/// dropped here so the pipeline only ever sees valid records; an input
/// with zero surviving rows is a fatal [`SchemaError::Empty`].
pub fn load_file(path: &Path) -> Result<RestaurantDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!(SchemaError::UnsupportedExtension(other.to_string())),
    };

    if records.is_empty() {
        bail!(SchemaError::Empty);
    }
    Ok(RestaurantDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row cleaning – shared by all three loaders
// ---------------------------------------------------------------------------

/// One row as it appears in the file, before cleaning.  `rating_count`
/// is read as `f64` because pandas widens integer columns containing NaN
/// to float, so counts arrive as `523.0` in JSON and Parquet output.
#[derive(Debug, Default, Deserialize)]
struct RawRow {
    name: Option<String>,
    city: Option<String>,
    cuisine: Option<String>,
    rating: Option<f64>,
    rating_count: Option<f64>,
    cost: Option<f64>,
}

impl RawRow {
    /// The equivalent of `dropna(subset=['city', 'name', 'rating', 'cost'])`
    /// plus the scoring invariant: `rating_count` must be a non-negative
    /// finite number and `cost` non-negative.  Returns `None` when the row
    /// must be dropped.
    fn clean(self) -> Option<Restaurant> {
        let name = self.name?.trim().to_string();
        let city = self.city?.trim().to_string();
        if name.is_empty() || city.is_empty() {
            return None;
        }

        let rating = self.rating.filter(|r| r.is_finite())?;
        let cost = self.cost.filter(|c| c.is_finite() && *c >= 0.0)?;
        let rating_count = self
            .rating_count
            .filter(|n| n.is_finite() && *n >= 0.0)? as u64;

        Some(Restaurant {
            name,
            city,
            cuisine: self.cuisine.unwrap_or_default().trim().to_string(),
            rating,
            rating_count,
            cost,
        })
    }
}

/// Run the cleaning pass over raw rows, logging what gets dropped.
fn clean_rows(raw: Vec<RawRow>) -> Vec<Restaurant> {
    let total = raw.len();
    let records: Vec<Restaurant> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let cleaned = row.clean();
            if cleaned.is_none() {
                log::debug!("Dropping row {i}: missing or invalid required field");
            }
            cleaned
        })
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        log::info!("Dropped {dropped} of {total} rows with incomplete required fields");
    }
    records
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Restaurant>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

/// CSV layout: header row naming at least the [`REQUIRED_COLUMNS`];
/// extra columns are ignored.  Empty or unparsable cells count as missing.
fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Restaurant>> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let col = |name: &'static str| -> Result<usize, SchemaError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(SchemaError::MissingColumn(name))
    };
    let name_idx = col("name")?;
    let city_idx = col("city")?;
    let cuisine_idx = col("cuisine")?;
    let rating_idx = col("rating")?;
    let count_idx = col("rating_count")?;
    let cost_idx = col("cost")?;

    let mut raw = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let text = |idx: usize| -> Option<String> {
            record
                .get(idx)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let number = |idx: usize| -> Option<f64> {
            record.get(idx).and_then(|s| s.trim().parse::<f64>().ok())
        };

        raw.push(RawRow {
            name: text(name_idx),
            city: text(city_idx),
            cuisine: text(cuisine_idx),
            rating: number(rating_idx),
            rating_count: number(count_idx),
            cost: number(cost_idx),
        });
    }

    Ok(clean_rows(raw))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "name": "Spice Villa",
///     "city": "Pune",
///     "cuisine": "North Indian",
///     "rating": 4.3,
///     "rating_count": 523,
///     "cost": 350
///   },
///   ...
/// ]
/// ```
///
/// Missing keys and `null` values both count as missing fields.
fn load_json(path: &Path) -> Result<Vec<Restaurant>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    read_json(&text)
}

fn read_json(text: &str) -> Result<Vec<Restaurant>> {
    let raw: Vec<RawRow> = serde_json::from_str(text).context("parsing JSON records")?;
    Ok(clean_rows(raw))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per [`REQUIRED_COLUMNS`] entry.
///
/// String columns may be Utf8 or LargeUtf8; numeric columns any common
/// int/float width.  Works with files written by both **Pandas**
/// (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<Restaurant>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut raw = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let name_col = batch_column(&batch, "name")?;
        let city_col = batch_column(&batch, "city")?;
        let cuisine_col = batch_column(&batch, "cuisine")?;
        let rating_col = batch_column(&batch, "rating")?;
        let count_col = batch_column(&batch, "rating_count")?;
        let cost_col = batch_column(&batch, "cost")?;

        for row in 0..batch.num_rows() {
            raw.push(RawRow {
                name: cell_string(&name_col, row),
                city: cell_string(&city_col, row),
                cuisine: cell_string(&cuisine_col, row),
                rating: cell_f64(&rating_col, row),
                rating_count: cell_f64(&count_col, row),
                cost: cell_f64(&cost_col, row),
            });
        }
    }

    Ok(clean_rows(raw))
}

// -- Arrow cell helpers --

/// Look up a required column in a record batch.
fn batch_column(batch: &RecordBatch, name: &'static str) -> Result<ArrayRef, SchemaError> {
    batch
        .schema()
        .index_of(name)
        .map(|i| batch.column(i).clone())
        .map_err(|_| SchemaError::MissingColumn(name))
}

/// Extract a string cell; `None` for nulls or non-string columns.
fn cell_string(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_any().downcast_ref::<StringArray>()?;
            Some(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Some(arr.value(row).to_string())
        }
        _ => None,
    }
}

/// Extract a numeric cell as `f64`; `None` for nulls or non-numeric columns.
fn cell_f64(col: &ArrayRef, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>()?;
            Some(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>()?;
            Some(arr.value(row) as f64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>()?;
            Some(arr.value(row) as f64)
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>()?;
            Some(arr.value(row) as f64)
        }
        DataType::UInt64 => {
            let arr = col.as_any().downcast_ref::<UInt64Array>()?;
            Some(arr.value(row) as f64)
        }
        DataType::UInt32 => {
            let arr = col.as_any().downcast_ref::<UInt32Array>()?;
            Some(arr.value(row) as f64)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_from(text: &str) -> Result<Vec<Restaurant>> {
        read_csv(csv::Reader::from_reader(text.as_bytes()))
    }

    const HEADER: &str = "name,city,cuisine,rating,rating_count,cost\n";

    #[test]
    fn csv_happy_path() {
        let records = csv_from(&format!(
            "{HEADER}Spice Villa,Pune,North Indian,4.3,523,350\nCorner Dosa,Pune,South Indian,4.1,8000,150\n"
        ))
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Spice Villa");
        assert_eq!(records[0].rating_count, 523);
        assert_eq!(records[1].cost, 150.0);
    }

    #[test]
    fn rows_missing_required_fields_are_dropped() {
        let records = csv_from(&format!(
            "{HEADER}\
             ,Pune,Thai,4.0,10,100\n\
             NoCity,,Thai,4.0,10,100\n\
             NoRating,Pune,Thai,,10,100\n\
             NoCost,Pune,Thai,4.0,10,\n\
             NoCount,Pune,Thai,4.0,,100\n\
             Keeper,Pune,Thai,4.0,10,100\n"
        ))
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Keeper");
    }

    #[test]
    fn empty_cuisine_is_allowed() {
        let records = csv_from(&format!("{HEADER}Plain,Pune,,4.0,10,100\n")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cuisine, "");
    }

    #[test]
    fn unparsable_numbers_count_as_missing() {
        let records = csv_from(&format!(
            "{HEADER}Bad,Pune,Thai,four,10,100\nGood,Pune,Thai,4.0,10,100\n"
        ))
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Good");
    }

    #[test]
    fn negative_cost_is_dropped() {
        let records = csv_from(&format!("{HEADER}Neg,Pune,Thai,4.0,10,-5\n")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let err = csv_from("name,city,rating,rating_count,cost\nA,B,4.0,1,1\n").unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().expect("schema error");
        assert!(matches!(schema, SchemaError::MissingColumn("cuisine")));
    }

    #[test]
    fn json_records_path() {
        let records = read_json(
            r#"[
                {"name": "Spice Villa", "city": "Pune", "cuisine": "North Indian",
                 "rating": 4.3, "rating_count": 523.0, "cost": 350},
                {"name": "Gap Row", "city": null, "cuisine": "Thai",
                 "rating": 4.0, "rating_count": 10, "cost": 100}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rating_count, 523);
    }

    #[test]
    fn json_missing_keys_count_as_missing_fields() {
        let records = read_json(r#"[{"name": "Only Name", "city": "Pune"}]"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().expect("schema error");
        assert!(matches!(schema, SchemaError::UnsupportedExtension(_)));
    }

    /// Write a throwaway CSV under the system temp dir and hand it to `f`.
    fn with_temp_csv<T>(tag: &str, contents: &str, f: impl FnOnce(&Path) -> T) -> T {
        let path = std::env::temp_dir().join(format!(
            "plateful-loader-{tag}-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, contents).expect("writing temp CSV");
        let result = f(&path);
        let _ = std::fs::remove_file(&path);
        result
    }

    #[test]
    fn load_file_reads_csv_from_disk() {
        let dataset = with_temp_csv(
            "ok",
            &format!("{HEADER}Spice Villa,Pune,North Indian,4.3,523,350\n"),
            |path| load_file(path).unwrap(),
        );
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.cities, vec!["Pune".to_string()]);
    }

    #[test]
    fn all_rows_dirty_is_a_fatal_empty_error() {
        let err = with_temp_csv(
            "dirty",
            &format!("{HEADER},Pune,Thai,4.0,10,100\nNoRating,Pune,Thai,,10,100\n"),
            |path| load_file(path).unwrap_err(),
        );
        let schema = err.downcast_ref::<SchemaError>().expect("schema error");
        assert!(matches!(schema, SchemaError::Empty));
    }
}
