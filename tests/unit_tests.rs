use chrono::NaiveDate;
use clap::Parser;
use commerce_synth::InspectArgs;
use synth_core::TableKind;
use synth_populate_csv::CSVPopulateArgs;

#[derive(Parser)]
struct GenerateCli {
    #[command(flatten)]
    args: CSVPopulateArgs,
}

#[derive(Parser)]
struct InspectCli {
    #[command(flatten)]
    args: InspectArgs,
}

#[test]
fn test_generate_defaults() {
    let cli = GenerateCli::try_parse_from(["generate"]).unwrap();

    assert_eq!(cli.args.output_dir, std::path::PathBuf::from("."));
    assert_eq!(cli.args.preview, 5);
    assert!(cli.args.common.config.is_none());
    assert!(cli.args.common.seed.is_none());
    assert!(!cli.args.common.dry_run);
    assert_eq!(cli.args.common.selected_tables(), TableKind::ALL.to_vec());
}

#[test]
fn test_generate_flags() {
    let cli = GenerateCli::try_parse_from([
        "generate",
        "-o",
        "out",
        "--seed",
        "7",
        "--as-of",
        "2024-06-30",
        "--tables",
        "customers,orders,customers",
        "--concurrent",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(cli.args.output_dir, std::path::PathBuf::from("out"));
    assert_eq!(cli.args.common.seed, Some(7));
    assert_eq!(
        cli.args.common.as_of,
        Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    );
    assert_eq!(
        cli.args.common.selected_tables(),
        vec![TableKind::Orders, TableKind::Customers]
    );
    assert!(cli.args.common.concurrent);
    assert!(cli.args.common.dry_run);
}

#[test]
fn test_generate_rejects_unknown_table() {
    assert!(GenerateCli::try_parse_from(["generate", "--tables", "refunds"]).is_err());
}

#[test]
fn test_generate_rejects_bad_date() {
    assert!(GenerateCli::try_parse_from(["generate", "--as-of", "30/06/2024"]).is_err());
}

#[test]
fn test_inspect_defaults() {
    let cli = InspectCli::try_parse_from(["inspect"]).unwrap();

    assert_eq!(cli.args.file, std::path::PathBuf::from("orders.csv"));
    assert_eq!(cli.args.preview, 5);
    assert_eq!(cli.args.filter_column, "country");
    assert_eq!(cli.args.filter_value, "US");
    assert!(!cli.args.no_filter);
}

#[test]
fn test_inspect_flags() {
    let cli = InspectCli::try_parse_from([
        "inspect",
        "data/customers.csv",
        "--preview",
        "3",
        "--filter-column",
        "gender",
        "--filter-value",
        "F",
    ])
    .unwrap();

    assert_eq!(cli.args.file, std::path::PathBuf::from("data/customers.csv"));
    assert_eq!(cli.args.preview, 3);
    assert_eq!(cli.args.filter_column, "gender");
    assert_eq!(cli.args.filter_value, "F");
}
