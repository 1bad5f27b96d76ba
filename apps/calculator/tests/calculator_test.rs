//! End-to-end tests of the calculator commands, driven the way the binary
//! drives them but with in-memory stdout/stderr.

use clap::Parser;

use fee_calculator_lib::cli::{
    CalculateArgs, Cli, ExportArgs, FieldArgs, FormArgs, OutputFormat,
};
use fee_calculator_lib::state::ConfigState;
use fee_calculator_lib::statement::StatementFormat;
use fee_calculator_lib::{execute, execute_calculate, execute_form};

fn fields(minimum: &str, final_price: &str, constant: &str, ratio: &str) -> FieldArgs {
    FieldArgs {
        minimum_allowed: Some(minimum.to_string()),
        final_purchase_price: Some(final_price.to_string()),
        constant_amount: Some(constant.to_string()),
        ratio: Some(ratio.to_string()),
    }
}

fn calculate(
    fields: FieldArgs,
    format: OutputFormat,
    export: ExportArgs,
) -> (u8, String, String) {
    let args = CalculateArgs {
        fields,
        format,
        export,
    };
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = execute_calculate(args, &ConfigState::default(), &mut out, &mut err).unwrap();

    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_documented_scenarios_in_text_mode() {
    let cases = [
        (("100000", "100000", "2000", "0.1"), "Selling Agent Commission: $2000\n"),
        (("100000", "150000", "2000", "0.1"), "Selling Agent Commission: $7000\n"),
        (("0", "0", "0", "0"), "Selling Agent Commission: $0\n"),
        (("100000", "200000", "0", "1"), "Selling Agent Commission: $100000\n"),
    ];

    for ((minimum, final_price, constant, ratio), expected) in cases {
        let (code, out, _) = calculate(
            fields(minimum, final_price, constant, ratio),
            OutputFormat::Text,
            ExportArgs::default(),
        );
        assert_eq!(code, 0);
        assert_eq!(out, expected);
    }
}

#[test]
fn test_price_below_minimum() {
    let (code, out, _) = calculate(
        fields("100000", "90000", "2000", "0.1"),
        OutputFormat::Text,
        ExportArgs::default(),
    );

    assert_eq!(code, 1);
    assert!(out.starts_with("Error: Final purchase price cannot be less than the minimum allowed"));
    assert!(!out.contains('$'));
}

#[test]
fn test_price_below_minimum_json() {
    let (code, out, _) = calculate(
        fields("100000", "90000", "2000", "0.1"),
        OutputFormat::Json,
        ExportArgs::default(),
    );

    assert_eq!(code, 1);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["code"], "INVALID_PRICE_RANGE");
    assert!(json.get("quote").is_none());
}

#[test]
fn test_missing_field_notice() {
    let mut args = fields("100000", "150000", "2000", "0.1");
    args.ratio = None;

    let (code, out, err) = calculate(args, OutputFormat::Text, ExportArgs::default());

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert_eq!(err, "Please fill in all fields.\n");
}

#[test]
fn test_non_numeric_field_json() {
    let (code, out, _) = calculate(
        fields("100000", "150000", "2000", "ten percent"),
        OutputFormat::Json,
        ExportArgs::default(),
    );

    assert_eq!(code, 2);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"][0], "ratio");
}

#[test]
fn test_json_success_document() {
    let (code, out, _) = calculate(
        fields("100000", "150000", "2000", "0.1"),
        OutputFormat::Json,
        ExportArgs::default(),
    );

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["quote"]["agentFee"], 7000.0);
    assert_eq!(json["quote"]["surplus"], 50000.0);
    assert_eq!(json["quote"]["tier"], "progressive");
    assert_eq!(json["display"], "Selling Agent Commission: $7000");
    assert_eq!(json["unusualRatio"], false);
}

#[test]
fn test_export_after_calculation() {
    let dir = tempfile::tempdir().unwrap();
    let export = ExportArgs {
        export: true,
        statement_format: StatementFormat::Json,
        out_dir: Some(dir.path().to_path_buf()),
    };

    let (code, _, err) = calculate(
        fields("100000", "150000", "2000", "0.1"),
        OutputFormat::Text,
        export,
    );

    assert_eq!(code, 0);
    assert!(err.starts_with("Statement written to "));

    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
    let path = files[0].as_ref().unwrap().path();
    let body = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["quote"]["agentFee"], 7000.0);
}

#[test]
fn test_no_export_when_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let export = ExportArgs {
        export: true,
        statement_format: StatementFormat::Text,
        out_dir: Some(dir.path().to_path_buf()),
    };

    let (code, _, _) = calculate(
        fields("100000", "90000", "2000", "0.1"),
        OutputFormat::Text,
        export,
    );

    assert_eq!(code, 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_interactive_form_with_text_statement() {
    let dir = tempfile::tempdir().unwrap();
    let args = FormArgs {
        export: ExportArgs {
            export: true,
            statement_format: StatementFormat::Text,
            out_dir: Some(dir.path().to_path_buf()),
        },
    };
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = execute_form(
        args,
        &ConfigState::default(),
        "100000\n150000\n2000\n0.1\n".as_bytes(),
        &mut out,
        &mut err,
    )
    .unwrap();

    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Progressive Scale Real Estate Agent Fee Calculator\n"));
    assert!(out.ends_with("Selling Agent Commission: $7000\n"));

    let entry = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
    let statement = std::fs::read_to_string(entry.path()).unwrap();
    assert!(statement.contains("Selling Agent Commission"));
    assert!(statement.contains("$7000"));
}

#[test]
fn test_interactive_form_missing_field() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = execute_form(
        FormArgs {
            export: ExportArgs::default(),
        },
        &ConfigState::default(),
        "100000\n\n2000\n0.1\n".as_bytes(),
        &mut out,
        &mut err,
    )
    .unwrap();

    assert_eq!(code, 2);
    assert!(String::from_utf8(out)
        .unwrap()
        .ends_with("Please fill in all fields.\n"));
}

#[test]
fn test_interactive_form_unreadable_input_is_reported() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = execute_form(
        FormArgs {
            export: ExportArgs::default(),
        },
        &ConfigState::default(),
        &b"100000\n\xff\xfe\n2000\n0.1\n"[..],
        &mut out,
        &mut err,
    )
    .unwrap();

    assert_eq!(code, 1);
    let err = String::from_utf8(err).unwrap();
    assert!(err.starts_with("Terminal I/O failed"), "stderr was {err:?}");
}

#[test]
fn test_unusual_ratio_warning_on_stderr() {
    let (code, out, err) = calculate(
        fields("100", "110", "5", "2"),
        OutputFormat::Text,
        ExportArgs::default(),
    );

    assert_eq!(code, 0);
    assert_eq!(out, "Selling Agent Commission: $25\n");
    assert!(err.starts_with("Warning: Ratio is outside the 0 to 1 range"));
}

#[test]
fn test_invalid_config_file_reported_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fee.toml");
    std::fs::write(&path, "paper_width = 500\n").unwrap();

    let cli = Cli::try_parse_from([
        "fee-calculator",
        "--config",
        path.to_str().unwrap(),
        "calculate",
        "--minimum",
        "100000",
        "--final",
        "150000",
        "--constant",
        "2000",
        "--ratio",
        "0.1",
        "--format",
        "json",
    ])
    .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = execute(cli, &b""[..], &mut out, &mut err).unwrap();

    assert_eq!(code, 1);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["code"], "CONFIG_ERROR");
    assert_eq!(json["message"], "Invalid value for paper_width");
}

#[test]
fn test_invalid_config_file_reported_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let cli = Cli::try_parse_from(["fee-calculator", "--config", path.to_str().unwrap(), "config"])
        .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = execute(cli, &b""[..], &mut out, &mut err).unwrap();

    assert_eq!(code, 1);
    assert!(out.is_empty());
    assert!(String::from_utf8(err)
        .unwrap()
        .starts_with("Failed to load configuration"));
}
