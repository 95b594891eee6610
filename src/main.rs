use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use subnet_calc::cli::{self, Command, Query};
use subnet_calc::config::{Config, OutputFormat};
use subnet_calc::output::{print_report, print_report_json};
use subnet_calc::resolver::{Resolve, SystemResolver};

#[tokio::main]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    if let Err(e) = run().await {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::parse_args(&args, &config)? {
        Command::Report {
            addr,
            prefix,
            divide,
            format,
        } => {
            let report = subnet_calc::report(&addr, prefix, divide)?;
            match format {
                OutputFormat::Text => print_report(&report),
                OutputFormat::Json => print_report_json(report)?,
            }
        }
        Command::Resolve(Query::Name(name)) => {
            let ip = SystemResolver.lookup_host(&name).await?;
            println!("{name} has address {ip}");
        }
        Command::Resolve(Query::Addr(addr)) => {
            let hostname = SystemResolver.lookup_addr(addr).await?;
            println!("{addr} resolves to {hostname}");
        }
    }

    Ok(())
}

// Report output owns stdout, so the fallback appender targets stderr.
fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = log4rs::config::Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
            .expect("Error building fallback logging config");
        log4rs::init_config(config).expect("Error initializing log4rs");
    }
}
