// Command-line stage breakdown: prints per-unit stages, total stages and the totals summary.
//
// Usage:
//   cargo run --bin stage_breakdown_cli -- --product pipe --route conventional --energy renewable \
//       --grade high --units 10 --outer_radius_m 0.05 --inner_radius_m 0.04 --length_m 2 \
//       [--eol recycle] [--csv data/processed/train.csv] [--profile allocation.json]
//
// No HTTP server is started; the same pipeline as POST /dashboard/stages runs in-process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use lca_dashboard::config::AllocationProfile;
use lca_dashboard::{logging, DashboardApi, DashboardRequest, Scope, StageRow, TotalsSummary};

const FLAGS: &[&str] = &[
    "product",
    "units",
    "route",
    "grade",
    "energy",
    "eol",
    "outer_radius_m",
    "inner_radius_m",
    "length_m",
    "thickness_m",
    "width_m",
    "sheet_length_m",
    "csv",
    "profile",
];

fn parse_args() -> anyhow::Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let name = arg
            .strip_prefix("--")
            .ok_or_else(|| anyhow!("unexpected argument: {}", arg))?;
        if !FLAGS.contains(&name) {
            bail!("unknown flag: --{}", name);
        }
        let value = args
            .next()
            .ok_or_else(|| anyhow!("missing value for --{}", name))?;
        values.insert(name.to_string(), value);
    }
    Ok(values)
}

fn required(values: &HashMap<String, String>, name: &str) -> anyhow::Result<String> {
    values
        .get(name)
        .cloned()
        .ok_or_else(|| anyhow!("--{} is required", name))
}

fn optional_f64(values: &HashMap<String, String>, name: &str) -> anyhow::Result<Option<f64>> {
    values
        .get(name)
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("--{} expects a number, got {}", name, v))
        })
        .transpose()
}

fn print_stage_table(rows: &[&StageRow], with_quality: bool) {
    print!("{:<60}", "stage");
    if with_quality {
        print!(" {:>13}", "quality_score");
    }
    println!(
        " {:>15} {:>15} {:>15} {:>15} {:>15} {:>15}",
        "electricity_kwh",
        "carbon_kgco2e",
        "naturalGas_nm3",
        "wastewater_l",
        "mfg_cost_usd",
        "transport_usd"
    );
    for row in rows {
        print!("{:<60}", row.stage);
        if with_quality {
            match row.quality_score {
                Some(q) => print!(" {:>13.3}", q),
                None => print!(" {:>13}", "-"),
            }
        }
        println!(
            " {:>15.4} {:>15.4} {:>15.4} {:>15.4} {:>15.4} {:>15.4}",
            row.electricity_kwh,
            row.carbon_kgco2e,
            row.natural_gas_nm3,
            row.wastewater_l,
            row.manufacturing_cost_per_unit_usd,
            row.transport_cost_usd
        );
    }
}

fn print_summary(summary: &TotalsSummary) {
    let m = &summary.metrics;
    println!("{:<28} {}", "units", summary.units);
    println!("{:<28} {:.4}", "electricity_kwh", m.electricity_kwh);
    println!("{:<28} {:.4}", "carbon_kgco2e", m.carbon_kgco2e);
    println!("{:<28} {:.4}", "naturalGas_nm3", m.natural_gas_nm3);
    println!("{:<28} {:.4}", "wastewater_l", m.wastewater_l);
    println!("{:<28} {:.4}", "manufacturing_cost_per_unit", m.manufacturing_cost_per_unit);
    println!("{:<28} {:.4}", "transport_cost_usd", m.transport_cost_usd);
    match summary.quality_score {
        Some(q) => println!("{:<28} {:.3}", "Quality_Score", q),
        None => println!("{:<28} -", "Quality_Score"),
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let values = parse_args()?;

    let units = match values.get("units") {
        Some(v) => v
            .parse::<i64>()
            .with_context(|| format!("--units expects an integer, got {}", v))?,
        None => 1,
    };

    let request = DashboardRequest {
        product: required(&values, "product")?,
        units,
        route_type: required(&values, "route")?,
        bauxite_grade: values.get("grade").cloned().unwrap_or_else(|| "na".to_string()),
        energy_source: required(&values, "energy")?,
        eol_option: values.get("eol").cloned().unwrap_or_else(|| "recycle".to_string()),
        outer_radius_m: optional_f64(&values, "outer_radius_m")?,
        inner_radius_m: optional_f64(&values, "inner_radius_m")?,
        length_m: optional_f64(&values, "length_m")?,
        thickness_m: optional_f64(&values, "thickness_m")?,
        width_m: optional_f64(&values, "width_m")?,
        sheet_length_m: optional_f64(&values, "sheet_length_m")?,
    };

    let csv = values
        .get("csv")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/processed/train.csv"));

    let profile = match values.get("profile") {
        Some(path) => AllocationProfile::from_json_file(path)
            .with_context(|| format!("failed to load allocation profile {}", path))?,
        None => AllocationProfile::default(),
    };

    let api = DashboardApi::new(Arc::new(profile));
    let response = api.get_stages(&request, &csv)?;

    let per_unit: Vec<&StageRow> = response
        .stages
        .iter()
        .filter(|r| r.scope == Scope::PerUnit)
        .collect();
    let total: Vec<&StageRow> = response
        .stages
        .iter()
        .filter(|r| r.scope == Scope::Total)
        .collect();

    println!(
        "\nBASELINE ({}, {} rows, keys: {})",
        response.baselines_used.fallback_level,
        response.baselines_used.matched_rows,
        response.baselines_used.matched_keys.join(",")
    );

    println!("\nPER-UNIT STAGES");
    print_stage_table(&per_unit, true);

    println!("\nTOTAL STAGES");
    print_stage_table(&total, false);

    println!("\nTOTALS SUMMARY");
    print_summary(&response.totals.total);

    Ok(())
}
