//! Write the deposit report spreadsheet to disk.
//!
//! Usage:
//!   export_deposits [--status PAID] [--crypto BTC] [--from 2026-01-01]
//!                   [--to 2026-01-31] [--search satoshi] [--out reports/]
//!
//! Reads the same `PAYMENTS_API_*` variables as the server.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use dotenvy::dotenv;

use payment_admin_dashboard::app::{DepositReportScreen, UseCases};
use payment_admin_dashboard::domain::{DepositFilters, Locale};
use payment_admin_dashboard::infra::{
    ApiClient, ApiClientConfig, HttpConfigRepository, HttpDashboardRepository,
    HttpDepositRepository, HttpUserRepository,
};

struct Args {
    filters: DepositFilters,
    out_dir: PathBuf,
}

fn parse_date(flag: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{value}'"))
}

fn parse_args() -> Result<Args> {
    let mut filters = DepositFilters::default();
    let mut out_dir = PathBuf::from(".");

    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .with_context(|| format!("{flag} requires a value"))?;
        match flag.as_str() {
            "--status" => {
                filters.status = Some(value.parse().map_err(anyhow::Error::msg)?);
            }
            "--crypto" => {
                filters.crypto_type = Some(value.parse().map_err(anyhow::Error::msg)?);
            }
            "--from" => filters.start_date = Some(parse_date(&flag, &value)?),
            "--to" => filters.end_date = Some(parse_date(&flag, &value)?),
            "--search" => filters.search = Some(value),
            "--out" => out_dir = PathBuf::from(value),
            other => bail!("Unknown flag '{other}'"),
        }
    }

    Ok(Args { filters, out_dir })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = parse_args()?;

    let api = ApiClientConfig::from_env().context("PAYMENTS_API_URL not set")?;
    let client = ApiClient::new(api).context("Failed to create payments API client")?;
    let use_cases = Arc::new(UseCases::new(
        Arc::new(HttpConfigRepository::new(client.clone())),
        Arc::new(HttpUserRepository::new(client.clone())),
        Arc::new(HttpDepositRepository::new(client.clone())),
        Arc::new(HttpDashboardRepository::new(client)),
    ));

    let mut screen = DepositReportScreen::new(use_cases, Locale::English);
    screen.set_filters(args.filters);
    let Some(sheet) = screen.export(Utc::now().date_naive()).await else {
        bail!(
            "Export failed: {}",
            screen.error().unwrap_or("unknown error")
        );
    };

    let path = args.out_dir.join(sheet.filename());
    let rows = sheet.row_count();
    tokio::fs::write(&path, sheet.into_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {} deposits to {}", rows, path.display());
    Ok(())
}
