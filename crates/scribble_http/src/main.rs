use clap::Parser;
use scribble_core::db::{open_db, open_db_in_memory};
use scribble_core::{default_log_level, init_logging};
use scribble_http::{serve, AppState};

/// Scribble note-taking backend.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the REST API
    Serve {
        /// Host to bind
        #[arg(short = 's', long, default_value_t = String::from("0.0.0.0"))]
        host: String,

        /// Port to bind
        #[arg(short = 'p', long, default_value_t = 3000)]
        port: u16,

        /// SQLite database file; `:memory:` serves an ephemeral store
        #[arg(short = 'd', long, default_value_t = String::from("scribble.db"))]
        db_path: String,

        /// Absolute directory for rolling log files; logging stays off
        /// when omitted
        #[arg(long)]
        log_dir: Option<String>,

        /// Log level (trace|debug|info|warn|error)
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn main() {
    let command = Command::parse();

    match command {
        Command::Serve {
            host,
            port,
            db_path,
            log_dir,
            log_level,
        } => {
            if let Some(log_dir) = log_dir {
                let level = log_level.as_deref().unwrap_or_else(|| default_log_level());
                if let Err(err) = init_logging(level, &log_dir) {
                    eprintln!("logging disabled: {err}");
                }
            }

            let conn = if db_path == ":memory:" {
                open_db_in_memory()
            } else {
                open_db(&db_path)
            };
            let conn = match conn {
                Ok(conn) => conn,
                Err(err) => {
                    eprintln!("failed to open note store at `{db_path}`: {err}");
                    std::process::exit(1);
                }
            };

            println!("Serving notes API at {host}:{port} from {db_path}");
            if let Err(err) = serve(&host, port, AppState::new(conn)) {
                eprintln!("server exited with error: {err}");
                std::process::exit(1);
            }
        }
    }
}
