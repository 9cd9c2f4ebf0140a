//! End-to-end tests for the pipeline orchestrator.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use polars::prelude::{AnyValue, DataType};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use lifexp_cli::{FormatRegistry, PipelineConfig, PipelineError, run};
use lifexp_ingest::{IngestError, ReaderKind};
use lifexp_model::{ModelError, REGION, VALUE, YEAR};
use lifexp_transform::{CleanerKind, TransformError};

const WIDE_EXPORT: &str = "unit,sex,age,geo\\time\t2011 \t2010 \n\
                           Y,F,Y_LT1,PT\t79.9\t80.1 b\n\
                           Y,F,Y_LT1,AT\t83.0\t82.7 e\n\
                           Y,M,Y_LT1,PT\tN/A\t: \n\
                           Y,M,Y65,PT\t18.1 p\t17.9\n";

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn archive(&self, name: &str, entry: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer.start_file(entry, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
        writer.finish().unwrap();
        path
    }

    fn config(&self) -> PipelineConfig {
        PipelineConfig::new(
            FormatRegistry::standard(),
            self.dir.path().join("data/pt_life_expectancy.csv"),
        )
    }
}

fn column_strings(df: &polars::prelude::DataFrame, name: &str) -> Vec<String> {
    let column = df.column(name).unwrap();
    (0..df.height())
        .map(|idx| match column.get(idx).unwrap() {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            other => other.to_string(),
        })
        .collect()
}

#[test]
fn wide_export_produces_region_extract() {
    let ws = Workspace::new();
    let input = ws.write("eu_life_expectancy_raw.tsv", WIDE_EXPORT);
    let config = ws.config();

    let outcome = run(&config, &input, "PT").unwrap();
    assert_eq!(outcome.strategy.reader, ReaderKind::Delimited);
    assert_eq!(outcome.strategy.cleaner, CleanerKind::WideToLong);
    assert_eq!(outcome.raw_rows, 4);
    assert_eq!(outcome.clean_rows, 6);

    let table = &outcome.table;
    assert_eq!(table.height(), 4);
    assert_eq!(table.column(YEAR).unwrap().dtype(), &DataType::Int64);
    assert_eq!(table.column(VALUE).unwrap().dtype(), &DataType::Float64);
    assert!(column_strings(table, REGION).iter().all(|r| r == "PT"));
    assert_eq!(table.column(YEAR).unwrap().get(0).unwrap(), AnyValue::Int64(2011));
    assert_eq!(table.column(VALUE).unwrap().get(0).unwrap(), AnyValue::Float64(79.9));
    assert_eq!(table.column(VALUE).unwrap().get(2).unwrap(), AnyValue::Float64(80.1));

    let written = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(written.lines().next(), Some("unit,sex,age,region,year,value"));
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn padded_region_token_does_not_match() {
    let ws = Workspace::new();
    let input = ws.write(
        "eu_life_expectancy_raw.tsv",
        "unit,sex,age,geo\\time\t2011 \n\
         Y,F,Y_LT1, PT \t12345678901234567.5\n\
         Y,F,Y_LT1,PT\t79.9\n",
    );
    let config = ws.config();

    let outcome = run(&config, &input, "PT").unwrap();
    assert_eq!(outcome.clean_rows, 2);
    assert_eq!(outcome.table.height(), 1);
    assert_eq!(column_strings(&outcome.table, REGION), vec!["PT"]);

    let written = fs::read_to_string(&config.output_path).unwrap();
    assert!(!written.contains(" PT "));
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn zipped_json_export_produces_region_extract() {
    let ws = Workspace::new();
    let input = ws.archive(
        "eurostat_life_expect.zip",
        "eurostat_life_expect.json",
        r#"[
            {"unit": "YR", "sex": "F", "age": "Y65", "region": "PT", "year": 2021,
             "life_expectancy": 75.2, "flag": "e", "flag_detail": "estimated"},
            {"unit": "YR", "sex": "F", "age": "Y65", "region": "FR", "year": 2021,
             "life_expectancy": 77.0, "flag": null, "flag_detail": null},
            {"unit": "YR", "sex": "M", "age": "Y65", "region": "PT", "year": 2021,
             "life_expectancy": null, "flag": ":", "flag_detail": "not available"}
        ]"#,
    );

    let outcome = run(&ws.config(), &input, "PT").unwrap();
    assert_eq!(outcome.strategy.reader, ReaderKind::ArchiveJson);
    assert_eq!(outcome.clean_rows, 2);

    let table = &outcome.table;
    let names: Vec<&str> = table.get_column_names().iter().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["unit", "sex", "age", "region", "year", "value"]);
    assert_eq!(table.height(), 1);
    assert_eq!(table.column(VALUE).unwrap().get(0).unwrap(), AnyValue::Float64(75.2));
}

#[test]
fn unsupported_extension_fails_before_reading() {
    let ws = Workspace::new();
    // The file does not exist: selection must fail first.
    let err = run(&ws.config(), &ws.dir.path().join("export.xlsx"), "PT").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::UnsupportedFormat { ref extension } if extension == "xlsx"
    ));
    assert_eq!(err.to_string(), "unsupported file format 'xlsx'");
}

#[test]
fn invalid_region_aborts_without_output() {
    let ws = Workspace::new();
    let input = ws.write("raw.tsv", WIDE_EXPORT);
    let config = ws.config();
    let err = run(&config, &input, "XX").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Country(ModelError::InvalidCountryCode { .. })
    ));
    assert!(!config.output_path.exists());
}

#[test]
fn stage_errors_surface_unchanged() {
    let ws = Workspace::new();

    let bad_year = ws.write("bad_year.tsv", "unit,sex,age,geo\\time\t2010\ttotal\nY,F,Y1,PT\t1.0\t2.0\n");
    let err = run(&ws.config(), &bad_year, "PT").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Transform(TransformError::TypeConversion { .. })
    ));
    assert_eq!(err.to_string(), "cannot convert 'total' in column 'total' to an integer year");

    let bad_archive = ws.write("broken.zip", "not a zip");
    let err = run(&ws.config(), &bad_archive, "PT").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Ingest(IngestError::CorruptArchive { .. })
    ));

    let empty_archive = ws.archive("notes.zip", "notes.txt", "nothing here");
    let err = run(&ws.config(), &empty_archive, "PT").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Ingest(IngestError::NoJsonEntry { .. })
    ));
}

#[test]
fn repeated_runs_write_identical_bytes() {
    let ws = Workspace::new();
    let input = ws.write("raw.tsv", WIDE_EXPORT);
    let config = ws.config();

    let first = run(&config, &input, "PT").unwrap();
    let first_bytes = fs::read(&config.output_path).unwrap();
    let second = run(&config, &input, "PT").unwrap();
    let second_bytes = fs::read(&config.output_path).unwrap();

    assert!(first.table.equals(&second.table));
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn output_path_is_configurable() {
    let ws = Workspace::new();
    let input = ws.write("raw.tsv", WIDE_EXPORT);
    let target = ws.dir.path().join("nested/dir/at.csv");
    let config = ws.config().with_output_path(&target);

    let outcome = run(&config, &input, "AT").unwrap();
    assert_eq!(outcome.output_path, target);
    assert_eq!(outcome.table.height(), 2);
    assert!(Path::new(&target).exists());
}
