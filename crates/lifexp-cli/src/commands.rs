use anyhow::{Context, Result};
use comfy_table::Table;

use lifexp_cli::{PipelineConfig, PipelineOutcome, run};
use lifexp_model::{Country, DEFAULT_REGION};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_countries() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Code", "Default"]);
    apply_table_style(&mut table);
    for (idx, country) in Country::all().enumerate() {
        let marker = if country.as_str() == DEFAULT_REGION { "yes" } else { "" };
        table.add_row(vec![
            (idx + 1).to_string(),
            country.to_string(),
            marker.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_extract(args: &RunArgs) -> Result<PipelineOutcome> {
    let mut config = PipelineConfig::default();
    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }
    run(&config, &args.path, &args.region)
        .with_context(|| format!("process {}", args.path.display()))
}
