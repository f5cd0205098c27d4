use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{DataError, LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Required columns
// ---------------------------------------------------------------------------

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the four required columns (canonical)
/// * `.json`    – records-oriented array keyed by the column names
/// * `.parquet` – flat columns of the same names
///
/// Columns beyond the required four are ignored in every format.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DataError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let site_idx = column_index(&headers, SITE_COLUMN)?;
    let payload_idx = column_index(&headers, PAYLOAD_COLUMN)?;
    let class_idx = column_index(&headers, CLASS_COLUMN)?;
    let booster_idx = column_index(&headers, BOOSTER_COLUMN)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let payload_mass_kg = parse_f64(row.get(payload_idx).unwrap_or(""), row_no)?;
        let class = parse_class(row.get(class_idx).unwrap_or(""), row_no)?;

        records.push(LaunchRecord {
            launch_site: row.get(site_idx).unwrap_or("").to_string(),
            payload_mass_kg,
            outcome: Outcome::from_class(class)?,
            booster_version_category: row.get(booster_idx).unwrap_or("").to_string(),
        });
    }

    Ok(LaunchDataset::from_records(records))
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DataError::MissingColumn(name))
}

fn parse_f64(s: &str, row: usize) -> Result<f64, DataError> {
    s.trim().parse::<f64>().map_err(|_| DataError::InvalidValue {
        row,
        column: PAYLOAD_COLUMN,
        message: format!("'{s}' is not a number"),
    })
}

fn parse_class(s: &str, row: usize) -> Result<i64, DataError> {
    s.trim().parse::<i64>().map_err(|_| DataError::InvalidValue {
        row,
        column: CLASS_COLUMN,
        message: format!("'{s}' is not an integer"),
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record of the records-oriented JSON export
/// (`df.to_json(orient='records')` of the same table).
#[derive(Debug, Deserialize)]
struct RawLaunchRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: Vec<RawLaunchRecord> =
        serde_json::from_str(&text).context("parsing JSON launch records")?;

    let records = raw
        .into_iter()
        .map(|r| {
            Ok(LaunchRecord {
                launch_site: r.launch_site,
                payload_mass_kg: r.payload_mass_kg,
                outcome: Outcome::from_class(r.class)?,
                booster_version_category: r.booster_version_category,
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the launch-records schema as flat columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): strings may arrive as Utf8 or
/// LargeUtf8, numerics as 32- or 64-bit.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut row_no = 0usize;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let site_col = batch.column(parquet_column(&schema, SITE_COLUMN)?);
        let payload_col = batch.column(parquet_column(&schema, PAYLOAD_COLUMN)?);
        let class_col = batch.column(parquet_column(&schema, CLASS_COLUMN)?);
        let booster_col = batch.column(parquet_column(&schema, BOOSTER_COLUMN)?);

        for row in 0..batch.num_rows() {
            let launch_site = extract_string(site_col, row, row_no, SITE_COLUMN)?;
            let payload_mass_kg = extract_f64(payload_col, row, row_no, PAYLOAD_COLUMN)?;
            let class = extract_i64(class_col, row, row_no, CLASS_COLUMN)?;
            let booster = extract_string(booster_col, row, row_no, BOOSTER_COLUMN)?;

            records.push(LaunchRecord {
                launch_site,
                payload_mass_kg,
                outcome: Outcome::from_class(class)?,
                booster_version_category: booster,
            });
            row_no += 1;
        }
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn parquet_column(
    schema: &arrow::datatypes::Schema,
    name: &'static str,
) -> Result<usize, DataError> {
    schema
        .index_of(name)
        .map_err(|_| DataError::MissingColumn(name))
}

fn invalid(row: usize, column: &'static str, col: &Arc<dyn Array>) -> DataError {
    DataError::InvalidValue {
        row,
        column,
        message: format!("unexpected Arrow type {:?}", col.data_type()),
    }
}

fn check_not_null(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    column: &'static str,
) -> Result<(), DataError> {
    if col.is_null(row) {
        return Err(DataError::InvalidValue {
            row: row_no,
            column,
            message: "null value".to_string(),
        });
    }
    Ok(())
}

fn extract_string(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    column: &'static str,
) -> Result<String, DataError> {
    check_not_null(col, row, row_no, column)?;
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        _ => Err(invalid(row_no, column, col)),
    }
}

fn extract_f64(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    column: &'static str,
) -> Result<f64, DataError> {
    check_not_null(col, row, row_no, column)?;
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row) as f64)
    } else {
        Err(invalid(row_no, column, col))
    }
}

fn extract_i64(
    col: &Arc<dyn Array>,
    row: usize,
    row_no: usize,
    column: &'static str,
) -> Result<i64, DataError> {
    check_not_null(col, row, row_no, column)?;
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as i64)
    } else {
        Err(invalid(row_no, column, col))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    const CSV_FIXTURE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,525.5,v1.0
2,CCAFS LC-40,1,677.0,v1.0
3,VAFB SLC-4E,1,500.0,v1.1
4,KSC LC-39A,1,9600.2,FT
";

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn assert_fixture_dataset(ds: &LaunchDataset) {
        assert_eq!(ds.len(), 4);
        assert_eq!(
            ds.distinct_sites,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
        assert_eq!(ds.booster_categories, vec!["v1.0", "v1.1", "FT"]);
        assert_eq!(ds.min_payload, 500);
        assert_eq!(ds.max_payload, 9_601);
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[0].payload_mass_kg, 525.5);
        assert_eq!(ds.records[3].launch_site, "KSC LC-39A");
    }

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "launches.csv", CSV_FIXTURE);
        let ds = load_file(&path).unwrap();
        assert_fixture_dataset(&ds);
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg)\nCCAFS LC-40,500.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing required column 'class'"));
    }

    #[test]
    fn csv_bad_class_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "launches.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             CCAFS LC-40,2,500.0,v1.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("outcome class must be 0 or 1"));
    }

    #[test]
    fn csv_bad_payload_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "launches.csv",
            "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             CCAFS LC-40,1,heavy,v1.0\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("'heavy' is not a number"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"[
            {"Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 525.5, "class": 0, "Booster Version Category": "v1.0"},
            {"Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 677.0, "class": 1, "Booster Version Category": "v1.0"},
            {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 500.0, "class": 1, "Booster Version Category": "v1.1"},
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 9600.2, "class": 1, "Booster Version Category": "FT"}
        ]"#;
        let path = write_fixture(&dir, "launches.json", json);
        let ds = load_file(&path).unwrap();
        assert_fixture_dataset(&ds);
    }

    #[test]
    fn loads_flat_parquet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(SITE_COLUMN, DataType::Utf8, false),
            Field::new(PAYLOAD_COLUMN, DataType::Float64, false),
            Field::new(CLASS_COLUMN, DataType::Int64, false),
            Field::new(BOOSTER_COLUMN, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec![
                    "CCAFS LC-40",
                    "CCAFS LC-40",
                    "VAFB SLC-4E",
                    "KSC LC-39A",
                ])),
                Arc::new(Float64Array::from(vec![525.5, 677.0, 500.0, 9600.2])),
                Arc::new(Int64Array::from(vec![0, 1, 1, 1])),
                Arc::new(StringArray::from(vec!["v1.0", "v1.0", "v1.1", "FT"])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_fixture_dataset(&ds);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(load_file(&path).is_err());
    }
}
