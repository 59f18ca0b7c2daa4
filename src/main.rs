use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add_command, handle_categories_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, ExportCommands, ListArgs, Menu, SummaryArgs,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::display::DisplayOptions;
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "ExpenseCLI records what you spend (amount, description, category, date) \
                  and reports totals per month and category. Run without a subcommand \
                  for the interactive menu."
)]
struct Cli {
    /// Directory holding config.json and data/expenses.json
    #[arg(long, global = true, env = "EXPENSE_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses in the order they were added
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show totals per month and category
    Summary(SummaryArgs),

    /// Show the configured categories
    Categories,

    /// Export data to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    expense_cli::logging::init(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    settings.validate()?;
    let categories = settings.category_set()?;
    let options = DisplayOptions::from(&settings);

    let (mut storage, warning) = Storage::open(paths.clone())?;
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
        eprintln!(
            "Starting with an empty expense list; the unreadable file was copied to {}",
            paths.quarantine_file().display()
        );
    }

    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(
                &mut storage,
                &categories,
                &options,
                stdin.lock(),
                io::stdout(),
            )
            .run(|| Local::now().date_naive())?;
        }
        Commands::Add(args) => {
            handle_add_command(&mut storage, &categories, &options, args, today)?;
        }
        Commands::List(args) => {
            handle_list_command(&mut storage, &categories, &options, args)?;
        }
        Commands::Summary(args) => {
            handle_summary_command(&mut storage, &categories, &options, args)?;
        }
        Commands::Categories => handle_categories_command(&categories),
        Commands::Export(cmd) => {
            handle_export_command(&storage, &categories, cmd)?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("ExpenseCLI Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Categories:      {}", settings.categories.join(", "));
            println!("  Expenses stored: {}", storage.expenses.len());
        }
    }

    Ok(())
}
