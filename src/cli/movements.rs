//! Movement log commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::{load_snapshot, parse_sort, write_export};
use crate::config::{Settings, SisgefiPaths};
use crate::display;
use crate::error::SisgefiResult;
use crate::export::export_filename_today;
use crate::models::Movement;
use crate::services::movements::EXPORT_PREFIX;
use crate::services::{MovementLog, FILTER_ALL};

/// Movement log subcommands
#[derive(Subcommand)]
pub enum MovementCommands {
    /// List movements from a snapshot, with search, filters and sorting
    List {
        /// Path to the movements snapshot (JSON array)
        file: PathBuf,

        /// Free-text search over activity and receipt code
        #[arg(short, long, default_value = "")]
        search: String,

        /// Kind filter: "Ingreso", "Egreso", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        tipo: String,

        /// Field to sort by (id, fecha, tipo, actividad, cantidad)
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        direction: String,
    },

    /// Export the filtered movement list with the totals trailer
    Export {
        /// Path to the movements snapshot (JSON array)
        file: PathBuf,

        /// Free-text search over activity and receipt code
        #[arg(short, long, default_value = "")]
        search: String,

        /// Kind filter: "Ingreso", "Egreso", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        tipo: String,

        /// Field to sort by (id, fecha, tipo, actividad, cantidad)
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        direction: String,

        /// Output file (defaults to movimientos_<date>.csv in the exports dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show income, expense and balance totals for a snapshot
    Summary {
        /// Path to the movements snapshot (JSON array)
        file: PathBuf,
    },

    /// Show activity statistics for a snapshot
    Activity {
        /// Path to the movements snapshot (JSON array)
        file: PathBuf,
    },
}

/// Handle movement subcommands
pub fn handle_movement_command(
    paths: &SisgefiPaths,
    settings: &Settings,
    cmd: MovementCommands,
) -> SisgefiResult<()> {
    let symbol = settings.currency_symbol.as_str();
    match cmd {
        MovementCommands::List {
            file,
            search,
            tipo,
            sort,
            direction,
        } => {
            let movements: Vec<Movement> = load_snapshot(&file)?;
            let log = MovementLog::with_records(movements);

            let criteria = MovementLog::criteria(&search, &tipo);
            let sort = parse_sort(&sort, &direction)?;
            let out = log.query(&criteria, &sort);

            println!(
                "{}",
                display::render_table(
                    &out.records,
                    &MovementLog::schema(),
                    &MovementLog::columns(),
                    symbol,
                )
            );
            println!("{}", display::showing_line(out.visible_count, out.total_count, "movimientos"));

            // Totals stay global regardless of the active filter
            let summary = log.summary();
            println!();
            println!("Ingresos: {}", display::format_currency(summary.income, symbol));
            println!("Egresos:  {}", display::format_currency(summary.expense, symbol));
            println!("Balance:  {}", display::format_currency(summary.balance, symbol));
        }

        MovementCommands::Export {
            file,
            search,
            tipo,
            sort,
            direction,
            output,
        } => {
            let movements: Vec<Movement> = load_snapshot(&file)?;
            let log = MovementLog::with_records(movements);

            let criteria = MovementLog::criteria(&search, &tipo);
            let sort = parse_sort(&sort, &direction)?;
            let out = log.query(&criteria, &sort);

            let bytes = log.export(&out.records)?;
            let path = match output {
                Some(path) => path,
                None => {
                    paths.ensure_directories()?;
                    paths.exports_dir().join(export_filename_today(EXPORT_PREFIX))
                }
            };
            write_export(&path, &bytes)?;

            println!(
                "Exported {} of {} movimientos to {}",
                out.visible_count,
                out.total_count,
                path.display()
            );
        }

        MovementCommands::Summary { file } => {
            let movements: Vec<Movement> = load_snapshot(&file)?;
            let log = MovementLog::with_records(movements);

            let summary = log.summary();
            println!("Ingresos: {}", display::format_currency(summary.income, symbol));
            println!("Egresos:  {}", display::format_currency(summary.expense, symbol));
            println!("Balance:  {}", display::format_currency(summary.balance, symbol));
        }

        MovementCommands::Activity { file } => {
            let movements: Vec<Movement> = load_snapshot(&file)?;
            let log = MovementLog::with_records(movements);

            let report = log.activity_report();
            println!(
                "Usuario más activo:   {}",
                report.most_active_user.as_deref().unwrap_or("-")
            );
            println!(
                "Transacción mayor:    {}",
                display::format_currency(report.largest_amount, symbol)
            );
            println!(
                "Promedio de ingresos: {}",
                display::format_currency(report.average_income, symbol)
            );
            println!(
                "Promedio de egresos:  {}",
                display::format_currency(report.average_expense, symbol)
            );

            if !report.frequent_activities.is_empty() {
                println!();
                println!("Actividades frecuentes:");
                for tally in &report.frequent_activities {
                    println!(
                        "  {} ({} mov., {})",
                        tally.activity,
                        tally.count,
                        display::format_currency(tally.total, symbol)
                    );
                }
            }
        }
    }

    Ok(())
}
