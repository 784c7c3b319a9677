use std::path::{Path, PathBuf};

use arapi::{Binding, EntryId, EntryPoint, EntryQuery, Profile, SchemaFilter, Session, StructItem, XmlInput};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "arapi", about = "Workflow server client API explorer")]
struct Cli {
    /// Connection profile (YAML)
    #[arg(short, long, default_value = "arapi.yaml")]
    profile: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the client library and show which entry points it provides
    Probe,
    /// List schema names
    Schemas {
        /// Only schemas changed after this timestamp
        #[arg(long, default_value_t = 0)]
        changed_since: i32,
    },
    /// Show a schema definition
    Schema { name: String },
    /// Show a field definition
    Field { schema: String, id: u32 },
    /// Read one entry
    Entry {
        schema: String,
        id: String,
        /// Field ids to read (default: all)
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<u32>,
    },
    /// Search a schema
    Entries {
        schema: String,
        /// Query text
        #[arg(short, long)]
        query: Option<String>,
        /// Maximum number of matches
        #[arg(short, long, default_value_t = 0)]
        max: u32,
    },
    /// List the objects in an XML definition file
    Xml { input: PathBuf },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let profile = or_exit(Profile::load(&cli.profile));
    let binding = or_exit(Binding::load(&profile.binding));
    match cli.command {
        Commands::Probe => cmd_probe(&binding),
        command => {
            let mut session = Session::new(binding);
            or_exit(session.login(&profile.login_params()));
            run(&session, command);
            if let Err(e) = session.logoff() {
                log::warn!("logoff failed: {e}");
            }
        }
    }
}

fn or_exit<T>(result: arapi::Result<T>) -> T {
    match result {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_yaml<T: Serialize>(value: &T) {
    match serde_yaml::to_string(value) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(session: &Session, command: Commands) {
    match command {
        Commands::Probe => cmd_probe(session.binding()),
        Commands::Schemas { changed_since } => {
            let filter = SchemaFilter {
                changed_since,
                ..Default::default()
            };
            for name in or_exit(session.list_schemas(&filter)) {
                println!("{name}");
            }
        }
        Commands::Schema { name } => print_yaml(&or_exit(session.get_schema(&name))),
        Commands::Field { schema, id } => print_yaml(&or_exit(session.get_field(&schema, id))),
        Commands::Entry { schema, id, fields } => {
            let fields = (!fields.is_empty()).then_some(fields.as_slice());
            print_yaml(&or_exit(session.get_entry(&schema, &EntryId::new(&id), fields)));
        }
        Commands::Entries { schema, query, max } => {
            let query = EntryQuery {
                qualifier: query,
                max,
                ..EntryQuery::all()
            };
            let list = or_exit(session.list_entries(&schema, &query));
            for item in &list.items {
                println!("{}\t{}", item.id, item.description);
            }
            println!("# {} of {} matches", list.items.len(), list.matches);
        }
        Commands::Xml { input } => cmd_xml(session, &input),
    }
}

fn cmd_probe(binding: &Binding) {
    println!("Library:   {}", binding.library_name());
    println!("Version:   {}", binding.version());
    println!("Revision:  {}", binding.revision());

    let (ready, absent): (Vec<EntryPoint>, Vec<EntryPoint>) =
        EntryPoint::ALL.iter().copied().partition(|e| binding.supports(*e));
    println!("Available: {} of {}", ready.len(), EntryPoint::ALL.len());
    for entry in absent {
        if let Err(e) = binding.callee(entry) {
            println!("  {:<36} {e}", entry.symbol());
        }
    }
}

fn cmd_xml(session: &Session, input: &Path) {
    let parsed = or_exit(session.parse_xml(&XmlInput::File(input.to_path_buf()), None));
    for block in parsed.app_blocks() {
        println!("# application {block}");
    }
    for StructItem { kind, name } in parsed.items() {
        println!("{kind:#010x}\t{name}");
    }
}
