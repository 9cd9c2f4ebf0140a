//! Default-configuration entry point. Kept in its own test binary since it
//! changes the process working directory.

use std::env;
use std::fs;
use std::path::Path;

use lifexp_cli::{DEFAULT_OUTPUT_PATH, run_pipeline};
use lifexp_model::REGION;

#[test]
fn run_pipeline_writes_to_default_output_path() {
    let dir = tempfile::tempdir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    fs::write(
        "export.tsv",
        "unit,sex,age,geo\\time\t2011 \t2010 \n\
         Y,F,Y_LT1,PT\t79.9\t80.1 b\n\
         Y,F,Y_LT1,AT\t83.0\t82.7\n",
    )
    .unwrap();

    let table = run_pipeline(Path::new("export.tsv"), "PT").unwrap();
    assert_eq!(table.height(), 2);
    assert_eq!(table.column(REGION).unwrap().n_unique().unwrap(), 1);

    let written = fs::read_to_string(dir.path().join(DEFAULT_OUTPUT_PATH)).unwrap();
    assert!(written.starts_with("unit,sex,age,region,year,value"));
    assert_eq!(written.lines().count(), 3);
}
