//! Command implementations.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use cmms_core::{apply, catalog, TableQuery};
use cmms_model::{
    Calibration, EquipmentCategory, EquipmentStatus, Priority, WorkOrder, WorkOrderStatus,
};
use cmms_store::{export_csv, fixtures, import_equipment_csv, Dataset, JsonStore, Repository};

use cmms_cli::tables::{count_table, page_info, render_table};

use crate::cli::{
    CalibrationArgs, EquipmentArgs, ExportArgs, ExportKindArg, ImportArgs, PageArgs, SeedArgs,
    WorkOrderArgs,
};

/// Load the dataset a command operates on: the configured JSON store, or
/// the built-in sample data when none is given.
pub fn load_dataset(data: Option<&Path>) -> anyhow::Result<Dataset> {
    match data {
        Some(path) => {
            let store = JsonStore::new(path);
            store
                .load()
                .with_context(|| format!("failed to load dataset from {}", path.display()))
        }
        None => {
            info!("no --data store configured, using sample dataset");
            Ok(fixtures::sample_dataset())
        }
    }
}

fn query_from(page: &PageArgs) -> TableQuery {
    TableQuery::new(page.page_size)
}

pub fn run_equipment(args: &EquipmentArgs, dataset: &Dataset) -> anyhow::Result<()> {
    let columns = catalog::equipment_columns();
    let mut query = query_from(&args.page);
    if let Some(search) = &args.search {
        query.set_search(search.clone());
    }
    if let Some(status) = &args.status {
        let status = EquipmentStatus::parse(status)
            .with_context(|| format!("unknown status '{status}'"))?;
        query.set_filter("status", Some(status.label().to_string()));
    }
    if let Some(category) = &args.category {
        let category = EquipmentCategory::parse(category)
            .with_context(|| format!("unknown category '{category}'"))?;
        query.set_filter("category", Some(category.label().to_string()));
    }
    query.set_page(args.page.page);

    let records = dataset.equipment.records();
    let view = apply(&columns, records, &query);
    println!("{}", render_table(&columns, &view));
    println!("{}", page_info(&view));
    Ok(())
}

pub fn run_work_orders(args: &WorkOrderArgs, dataset: &Dataset) -> anyhow::Result<()> {
    let columns = catalog::work_order_columns();
    let mut query = query_from(&args.page);
    if let Some(search) = &args.search {
        query.set_search(search.clone());
    }
    if let Some(status) = &args.status {
        let status = WorkOrderStatus::parse(status)
            .with_context(|| format!("unknown status '{status}'"))?;
        query.set_filter("status", Some(status.label().to_string()));
    }
    if let Some(priority) = &args.priority {
        let priority =
            Priority::parse(priority).with_context(|| format!("unknown priority '{priority}'"))?;
        query.set_filter("priority", Some(priority.label().to_string()));
    }
    query.set_page(args.page.page);

    let today = Local::now().date_naive();
    let records: Vec<WorkOrder> = if args.overdue {
        dataset
            .work_orders
            .records()
            .iter()
            .filter(|order| order.overdue(today))
            .cloned()
            .collect()
    } else {
        dataset.work_orders.list()
    };

    let view = apply(&columns, &records, &query);
    println!("{}", render_table(&columns, &view));
    println!("{}", page_info(&view));
    Ok(())
}

pub fn run_calibrations(args: &CalibrationArgs, dataset: &Dataset) -> anyhow::Result<()> {
    let columns = catalog::calibration_columns();
    let mut query = query_from(&args.page);
    query.set_page(args.page.page);

    let today = Local::now().date_naive();
    let records: Vec<Calibration> = if args.overdue {
        dataset
            .calibrations
            .records()
            .iter()
            .filter(|calibration| calibration.overdue(today))
            .cloned()
            .collect()
    } else {
        dataset.calibrations.list()
    };

    let view = apply(&columns, &records, &query);
    println!("{}", render_table(&columns, &view));
    println!("{}", page_info(&view));
    Ok(())
}

pub fn run_summary(dataset: &Dataset) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    let equipment_rows: Vec<(String, usize)> = EquipmentStatus::all()
        .iter()
        .map(|status| {
            let count = dataset
                .equipment
                .records()
                .iter()
                .filter(|e| e.status == *status)
                .count();
            (status.label().to_string(), count)
        })
        .collect();
    println!("{}", count_table("Equipment", &equipment_rows));

    let order_rows: Vec<(String, usize)> = Priority::all()
        .iter()
        .map(|priority| {
            let count = dataset
                .work_orders
                .records()
                .iter()
                .filter(|order| order.is_open() && order.priority == *priority)
                .count();
            (format!("Open / {}", priority.label()), count)
        })
        .collect();
    println!();
    println!("{}", count_table("Work Orders", &order_rows));

    let overdue_orders = dataset
        .work_orders
        .records()
        .iter()
        .filter(|order| order.overdue(today))
        .count();
    let overdue_calibrations = dataset
        .calibrations
        .records()
        .iter()
        .filter(|calibration| calibration.overdue(today))
        .count();
    let pm_due = dataset
        .pm_schedules
        .records()
        .iter()
        .filter(|schedule| schedule.due_within(today, 30))
        .count();
    let attention_rows = vec![
        ("Overdue work orders".to_string(), overdue_orders),
        ("Overdue calibrations".to_string(), overdue_calibrations),
        ("PM due within 30 days".to_string(), pm_due),
    ];
    println!();
    println!("{}", count_table("Attention", &attention_rows));
    Ok(())
}

pub fn run_export(args: &ExportArgs, dataset: &Dataset) -> anyhow::Result<()> {
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    let rows = match args.what {
        ExportKindArg::Equipment => {
            let records = dataset.equipment.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::equipment_columns(), &rows)?;
            rows.len()
        }
        ExportKindArg::WorkOrders => {
            let records = dataset.work_orders.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::work_order_columns(), &rows)?;
            rows.len()
        }
        ExportKindArg::Inspections => {
            let records = dataset.inspections.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::inspection_columns(), &rows)?;
            rows.len()
        }
        ExportKindArg::PmSchedules => {
            let records = dataset.pm_schedules.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::pm_schedule_columns(), &rows)?;
            rows.len()
        }
        ExportKindArg::Meters => {
            let records = dataset.meter_readings.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::meter_reading_columns(), &rows)?;
            rows.len()
        }
        ExportKindArg::Calibrations => {
            let records = dataset.calibrations.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::calibration_columns(), &rows)?;
            rows.len()
        }
        ExportKindArg::Organizations => {
            let records = dataset.organizations.records();
            let rows: Vec<_> = records.iter().collect();
            export_csv(file, &catalog::organization_columns(), &rows)?;
            rows.len()
        }
    };

    println!("Exported {} records to {}", rows, args.output.display());
    Ok(())
}

pub fn run_import(args: &ImportArgs, data: Option<&Path>) -> anyhow::Result<()> {
    let Some(data) = data else {
        bail!("import requires --data <PATH> so the records have somewhere to go");
    };

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let outcome = import_equipment_csv(file)?;

    let store = JsonStore::new(data);
    let mut dataset = if data.exists() {
        store.load()?
    } else {
        Dataset::default()
    };

    let bar = ProgressBar::new(outcome.records.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("importing equipment");

    let mut inserted = 0usize;
    for record in outcome.records {
        let code = record.code.clone();
        match dataset.equipment.insert(record) {
            Ok(()) => inserted += 1,
            Err(error) => warn!(code = %code, %error, "skipped record"),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    store.save(&dataset)?;

    println!("Imported {} records into {}", inserted, data.display());
    if !outcome.issues.is_empty() {
        eprintln!("Rejected lines:");
        for issue in &outcome.issues {
            eprintln!("- line {}: {}", issue.line, issue.message);
        }
    }
    Ok(())
}

pub fn run_seed(args: &SeedArgs) -> anyhow::Result<()> {
    let store = JsonStore::new(&args.output);
    let dataset = fixtures::sample_dataset();
    store.save(&dataset)?;
    println!(
        "Seeded {} with {} equipment records, {} work orders",
        args.output.display(),
        dataset.equipment.records().len(),
        dataset.work_orders.records().len()
    );
    Ok(())
}
