//! Generate command handler.

use crate::render::render_rows;
use anyhow::Context;
use chrono::NaiveDate;
use synth_core::{Dataset, DatasetConfig, TableKind, TableRow};
use synth_generator::DatasetGenerator;
use synth_populate_csv::{CSVPopulateArgs, CSVPopulator, CommonGenerateArgs};

/// Resolve the effective configuration: config file first, CLI flags on top.
pub fn resolve_config(common: &CommonGenerateArgs) -> anyhow::Result<DatasetConfig> {
    let config = match &common.config {
        Some(path) => DatasetConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => DatasetConfig::default(),
    };

    Ok(match common.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

/// Generate the selected tables for `reference`.
pub fn generate_dataset(
    common: &CommonGenerateArgs,
    reference: NaiveDate,
) -> anyhow::Result<Dataset> {
    let config = resolve_config(common)?;
    let generator = DatasetGenerator::new(config, reference)
        .context("Failed to set up dataset generator")?;

    let range = generator.date_range();
    tracing::info!(
        "Generating data from {} to {} with seed {}",
        range.start(),
        range.end(),
        generator.config().seed
    );

    let tables = common.selected_tables();
    let dataset = if common.concurrent {
        generator.generate_concurrently(&tables)
    } else {
        generator.generate_tables(&tables)
    }
    .context("Dataset generation failed")?;

    Ok(dataset)
}

fn preview<T: TableRow>(rows: &[T], n: usize) -> String {
    let records: Vec<Vec<String>> = rows.iter().take(n).map(TableRow::to_record).collect();
    render_rows(T::column_names(), &records)
}

/// Row counts of the selected tables followed by a preview of each.
pub fn summary(dataset: &Dataset, tables: &[TableKind], preview_rows: usize) -> String {
    let mut out = String::from("Dataset overview:\n");
    for &table in tables {
        out.push_str(&format!(
            "  {:<10} {} rows\n",
            table.name(),
            dataset.row_count(table)
        ));
    }

    if preview_rows == 0 {
        return out;
    }

    for &table in tables {
        out.push_str(&format!("\n{} ({}):\n", table.name(), table.file_name()));
        out.push_str(&match table {
            TableKind::Traffic => preview(&dataset.traffic, preview_rows),
            TableKind::Orders => preview(&dataset.orders, preview_rows),
            TableKind::Customers => preview(&dataset.customers, preview_rows),
            TableKind::AbTests => preview(&dataset.ab_tests, preview_rows),
        });
    }
    out
}

/// Run the generate command.
pub fn run_generate(args: CSVPopulateArgs) -> anyhow::Result<()> {
    let reference = args
        .common
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let tables = args.common.selected_tables();

    let dataset = generate_dataset(&args.common, reference)?;
    for &table in &tables {
        tracing::info!("Generated {} rows for '{}'", dataset.row_count(table), table);
    }

    if args.common.dry_run {
        tracing::info!("Dry-run mode: no files written");
        print!("{}", summary(&dataset, &tables, 0));
        return Ok(());
    }

    let outputs = CSVPopulator::new()
        .populate_dataset(&dataset, &args.output_dir, &tables)
        .with_context(|| format!("Failed to write tables to {:?}", args.output_dir))?;

    for output in &outputs {
        tracing::info!(
            "Saved {} ({} rows, {} bytes)",
            output.path.display(),
            output.metrics.rows_written,
            output.metrics.file_size_bytes
        );
    }

    print!("{}", summary(&dataset, &tables, args.preview));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn common(tables: Vec<TableKind>) -> CommonGenerateArgs {
        CommonGenerateArgs {
            config: None,
            seed: None,
            as_of: None,
            tables,
            concurrent: false,
            dry_run: false,
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_seed_flag_overrides_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "seed: 7\ncustomer_count: 10\n").unwrap();

        let mut args = common(Vec::new());
        args.config = Some(path);
        args.seed = Some(99);

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.customer_count, 10);
    }

    #[test]
    fn test_missing_config_file() {
        let mut args = common(Vec::new());
        args.config = Some(PathBuf::from("/nonexistent/config.yaml"));

        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load config"));
    }

    #[test]
    fn test_generate_selected_tables_only() {
        let dataset = generate_dataset(&common(vec![TableKind::AbTests]), reference()).unwrap();

        assert_eq!(dataset.ab_tests.len(), 60);
        assert!(dataset.orders.is_empty());
        assert!(dataset.traffic.is_empty());
    }

    #[test]
    fn test_concurrent_respects_table_selection() {
        let mut args = common(vec![TableKind::Customers]);
        args.concurrent = true;

        let concurrent = generate_dataset(&args, reference()).unwrap();
        let sequential =
            generate_dataset(&common(vec![TableKind::Customers]), reference()).unwrap();

        assert_eq!(concurrent, sequential);
        assert!(concurrent.orders.is_empty());
        assert_eq!(concurrent.customers.len(), 2000);
    }

    #[test]
    fn test_summary_lists_counts_and_previews() {
        let dataset = generate_dataset(&common(vec![TableKind::AbTests]), reference()).unwrap();
        let text = summary(&dataset, &[TableKind::AbTests], 2);

        assert!(text.contains("ab_tests   60 rows"));
        assert!(text.contains("ab_tests (ab_test_results.csv):"));
        assert!(text.contains("Product_Page_Redesign"));
        // two overview lines, blank, title, header, two rows
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_summary_without_preview() {
        let text = summary(&Dataset::default(), &TableKind::ALL, 0);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("orders     0 rows"));
    }
}
