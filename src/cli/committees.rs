//! Committee roster commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::{load_snapshot, parse_sort, write_export};
use crate::config::{Settings, SisgefiPaths};
use crate::display;
use crate::error::SisgefiResult;
use crate::export::export_filename_today;
use crate::models::Committee;
use crate::services::committees::EXPORT_PREFIX;
use crate::services::{CommitteeRoster, FILTER_ALL};

/// Committee roster subcommands
#[derive(Subcommand)]
pub enum CommitteeCommands {
    /// List committees from a snapshot, with search, filters and sorting
    List {
        /// Path to the committees snapshot (JSON array)
        file: PathBuf,

        /// Free-text search over name and season
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter: "activo", "inactivo", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        estado: String,

        /// Field to sort by (id, nombre, epoca, estado)
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        direction: String,
    },

    /// Export the filtered committee list as a spreadsheet file
    Export {
        /// Path to the committees snapshot (JSON array)
        file: PathBuf,

        /// Free-text search over name and season
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter: "activo", "inactivo", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        estado: String,

        /// Field to sort by (id, nombre, epoca, estado)
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        direction: String,

        /// Output file (defaults to comites_<date>.csv in the exports dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle committee subcommands
pub fn handle_committee_command(
    paths: &SisgefiPaths,
    settings: &Settings,
    cmd: CommitteeCommands,
) -> SisgefiResult<()> {
    match cmd {
        CommitteeCommands::List {
            file,
            search,
            estado,
            sort,
            direction,
        } => {
            let committees: Vec<Committee> = load_snapshot(&file)?;
            let roster = CommitteeRoster::with_records(committees);

            let criteria = CommitteeRoster::criteria(&search, &estado);
            let sort = parse_sort(&sort, &direction)?;
            let out = roster.query(&criteria, &sort);

            println!(
                "{}",
                display::render_table(
                    &out.records,
                    &CommitteeRoster::schema(),
                    &CommitteeRoster::columns(),
                    &settings.currency_symbol,
                )
            );
            println!("{}", display::showing_line(out.visible_count, out.total_count, "comités"));
        }

        CommitteeCommands::Export {
            file,
            search,
            estado,
            sort,
            direction,
            output,
        } => {
            let committees: Vec<Committee> = load_snapshot(&file)?;
            let roster = CommitteeRoster::with_records(committees);

            let criteria = CommitteeRoster::criteria(&search, &estado);
            let sort = parse_sort(&sort, &direction)?;
            let out = roster.query(&criteria, &sort);

            let bytes = roster.export(&out.records)?;
            let path = match output {
                Some(path) => path,
                None => {
                    paths.ensure_directories()?;
                    paths.exports_dir().join(export_filename_today(EXPORT_PREFIX))
                }
            };
            write_export(&path, &bytes)?;

            println!(
                "Exported {} of {} comités to {}",
                out.visible_count,
                out.total_count,
                path.display()
            );
        }
    }

    Ok(())
}
