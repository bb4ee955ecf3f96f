//! celladdr CLI - spreadsheet cell address conversion tool

use anyhow::{bail, Context, Result};
use cell_address_core::{
    column_index_from_letters, column_name, get_sheet_name, is_r1c1_format, parse_address,
    to_address, to_address_r1c1, Address, AddressKind,
};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "celladdr")]
#[command(
    author,
    version,
    about = "Parse and format spreadsheet cell addresses (A1 and R1C1)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an address and show its coordinates
    Parse {
        /// Address text, e.g. "Sheet1!A1:C4" or "R1C1"
        address: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format 0-based row/column indices as an address
    Format {
        /// Row index (0-based)
        #[arg(allow_negative_numbers = true)]
        row: i64,

        /// Column index (0-based)
        #[arg(allow_negative_numbers = true)]
        col: i64,

        /// Emit R1C1 notation instead of A1
        #[arg(long)]
        r1c1: bool,

        /// Qualify the address with a sheet name
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Convert a 0-based column index to letters
    Column {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Convert column letters to a 0-based index
    Letters { letters: String },

    /// Extract the sheet name from an address
    Sheet { address: String },
}

/// Everything `parse` reports about an address
#[derive(Debug, Serialize)]
struct AddressReport {
    input: String,
    notation: &'static str,
    kind: AddressKind,
    sheet: String,
    row_first: u32,
    row_last: u32,
    column_first: u32,
    column_last: u32,
    rows: u32,
    columns: u32,
    cells: u64,
    a1: String,
    r1c1: String,
}

impl AddressReport {
    fn new(input: &str, address: &Address) -> Self {
        Self {
            input: input.to_string(),
            notation: if is_r1c1_format(input) { "R1C1" } else { "A1" },
            kind: address.kind(),
            sheet: address.sheet_name().to_string(),
            row_first: address.row_first(),
            row_last: address.row_last(),
            column_first: address.column_first(),
            column_last: address.column_last(),
            rows: address.row_count(),
            columns: address.column_count(),
            cells: address.cell_count(),
            a1: address.full_address(),
            r1c1: address.full_address_r1c1(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { address, json } => parse(&address, json),
        Commands::Format {
            row,
            col,
            r1c1,
            sheet,
        } => {
            println!("{}", format_address(row, col, r1c1, sheet.as_deref()));
            Ok(())
        }
        Commands::Column { index } => {
            println!("{}", column_name(index));
            Ok(())
        }
        Commands::Letters { letters } => {
            let index = column_index_from_letters(&letters)
                .with_context(|| format!("'{letters}' is not a column name"))?;
            println!("{index}");
            Ok(())
        }
        Commands::Sheet { address } => {
            let sheet = get_sheet_name(&address).context("Failed to read sheet name")?;
            println!("{sheet}");
            Ok(())
        }
    }
}

fn parse(input: &str, json: bool) -> Result<()> {
    let Some(address) = parse_address(input) else {
        bail!("'{input}' is not a valid cell address");
    };
    tracing::debug!(%address, "parsed address");

    let report = AddressReport::new(input, &address);
    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode JSON")?;
        println!("{text}");
        return Ok(());
    }

    if address.is_error() {
        println!("{}", address);
        return Ok(());
    }

    println!("Address: {}", report.a1);
    println!("R1C1:    {}", report.r1c1);
    println!("Sheet:   {}", report.sheet);
    println!("Kind:    {:?}", report.kind);
    println!("Rows:    {}..={} ({})", report.row_first, report.row_last, report.rows);
    println!(
        "Columns: {}..={} ({})",
        report.column_first, report.column_last, report.columns
    );
    println!("Cells:   {}", report.cells);

    Ok(())
}

fn format_address(row: i64, col: i64, r1c1: bool, sheet: Option<&str>) -> String {
    let local = if r1c1 {
        to_address_r1c1(row, col)
    } else {
        to_address(row, col)
    };

    // Qualify through Address so quoting rules stay in one place
    match (sheet, u32::try_from(row), u32::try_from(col)) {
        (Some(sheet), Ok(row), Ok(col)) => match Address::cell(sheet, row, col) {
            Ok(address) if r1c1 => address.full_address_r1c1(),
            Ok(address) => address.full_address(),
            Err(_) => local,
        },
        _ => local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(0, 0, false, None), "$A$1");
        assert_eq!(format_address(3, 2, true, None), "R4C3");
        assert_eq!(format_address(1, 1, false, Some("Sheet 1")), "'Sheet 1'!$B$2");
        assert_eq!(format_address(-1, 0, false, Some("Sheet1")), "#REF!");
    }

    #[test]
    fn test_report() {
        let address = parse_address("Sheet1!E:F").unwrap();
        let report = AddressReport::new("Sheet1!E:F", &address);
        assert_eq!(report.notation, "A1");
        assert_eq!(report.kind, AddressKind::EntireColumns);
        assert_eq!(report.columns, 2);
        assert_eq!(report.a1, "Sheet1!$E:$F");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "EntireColumns");
        assert_eq!(json["row_last"], 1_048_575);
    }

    #[test]
    fn test_cli_parses_negative_indices() {
        let cli = Cli::try_parse_from(["celladdr", "format", "-1", "0"]).unwrap();
        assert!(matches!(cli.command, Commands::Format { row: -1, col: 0, .. }));
    }
}
