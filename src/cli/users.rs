//! User directory commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::{load_snapshot, parse_sort, write_export};
use crate::config::{Settings, SisgefiPaths};
use crate::display;
use crate::error::SisgefiResult;
use crate::export::export_filename_today;
use crate::models::User;
use crate::services::users::EXPORT_PREFIX;
use crate::services::{UserDirectory, FILTER_ALL};

/// User directory subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List users from a snapshot, with search, filters and sorting
    List {
        /// Path to the users snapshot (JSON array)
        file: PathBuf,

        /// Free-text search over names, email and committee
        #[arg(short, long, default_value = "")]
        search: String,

        /// Committee filter: a committee name, "sin-comite", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        comite: String,

        /// Status filter: "activo", "inactivo", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        estado: String,

        /// Role filter: a numeric role id, or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        rol: String,

        /// Field to sort by (id, nombre, email, estado, ...)
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        direction: String,
    },

    /// Export the filtered user list as a spreadsheet file
    Export {
        /// Path to the users snapshot (JSON array)
        file: PathBuf,

        /// Free-text search over names, email and committee
        #[arg(short, long, default_value = "")]
        search: String,

        /// Committee filter: a committee name, "sin-comite", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        comite: String,

        /// Status filter: "activo", "inactivo", or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        estado: String,

        /// Role filter: a numeric role id, or "todos"
        #[arg(long, default_value = FILTER_ALL)]
        rol: String,

        /// Field to sort by (id, nombre, email, estado, ...)
        #[arg(long, default_value = "id")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(short, long, default_value = "asc")]
        direction: String,

        /// Output file (defaults to usuarios_<date>.csv in the exports dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the distinct committee names present in a snapshot
    Committees {
        /// Path to the users snapshot (JSON array)
        file: PathBuf,
    },
}

/// Handle user subcommands
pub fn handle_user_command(
    paths: &SisgefiPaths,
    settings: &Settings,
    cmd: UserCommands,
) -> SisgefiResult<()> {
    match cmd {
        UserCommands::List {
            file,
            search,
            comite,
            estado,
            rol,
            sort,
            direction,
        } => {
            let users: Vec<User> = load_snapshot(&file)?;
            let directory = UserDirectory::with_records(users);

            let criteria = UserDirectory::criteria(&search, &comite, &estado, &rol);
            let sort = parse_sort(&sort, &direction)?;
            let out = directory.query(&criteria, &sort);

            println!(
                "{}",
                display::render_table(
                    &out.records,
                    &UserDirectory::schema(),
                    &UserDirectory::columns(),
                    &settings.currency_symbol,
                )
            );
            println!("{}", display::showing_line(out.visible_count, out.total_count, "usuarios"));
        }

        UserCommands::Export {
            file,
            search,
            comite,
            estado,
            rol,
            sort,
            direction,
            output,
        } => {
            let users: Vec<User> = load_snapshot(&file)?;
            let directory = UserDirectory::with_records(users);

            let criteria = UserDirectory::criteria(&search, &comite, &estado, &rol);
            let sort = parse_sort(&sort, &direction)?;
            let out = directory.query(&criteria, &sort);

            let bytes = directory.export(&out.records)?;
            let path = match output {
                Some(path) => path,
                None => {
                    paths.ensure_directories()?;
                    paths.exports_dir().join(export_filename_today(EXPORT_PREFIX))
                }
            };
            write_export(&path, &bytes)?;

            println!(
                "Exported {} of {} usuarios to {}",
                out.visible_count,
                out.total_count,
                path.display()
            );
        }

        UserCommands::Committees { file } => {
            let users: Vec<User> = load_snapshot(&file)?;
            let directory = UserDirectory::with_records(users);

            let options = directory.committee_options();
            if options.is_empty() {
                println!("No committees found.");
            } else {
                for name in options {
                    println!("{}", name);
                }
            }
        }
    }

    Ok(())
}
