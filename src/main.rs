// Console front-end: reads one command per line, prints the reply, and
// leaves everything else to the library.

use anyhow::Result;
use chore::context::{AppContext, StandardContext};
use chore::controller::TaskController;
use simplelog::{LevelFilter, WriteLogger};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_usage();
        return Ok(());
    }

    let override_root = parse_root_arg(&args);
    let ctx = StandardContext::new(override_root);
    init_logging(&ctx);

    let mut controller = TaskController::new(&ctx)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", controller.welcome_text())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", controller.process_command(&line))?;
        out.flush()?;
        if controller.is_session_over() {
            break;
        }
    }

    Ok(())
}

fn parse_root_arg(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if (arg == "--root" || arg == "-r")
            && let Some(path) = iter.next()
        {
            return Some(PathBuf::from(path));
        }
    }
    None
}

/// Log to a file in the data directory so the interactive console stays
/// clean. Logging is best-effort; a failure here never blocks startup.
fn init_logging(ctx: &dyn AppContext) {
    if let Some(path) = ctx.get_log_file_path()
        && let Ok(file) = std::fs::File::create(&path)
    {
        let _ = WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file);
    }
}

fn print_usage() {
    println!(
        "Chore v{} - a personal task tracker driven by one-line commands",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    chore [--root <path>]");
    println!("    chore --help");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (typed at the prompt):");
    println!("    list                                              Show all tasks");
    println!("    todo <desc>                                       Add a plain task");
    println!("    deadline <desc> /by yyyy-mm-dd [HHmm]             Add a dated task");
    println!("    event <desc> /from yyyy-mm-dd [HHmm] /to ...      Add a ranged task");
    println!("    mark <n> / unmark <n>                             Toggle completion");
    println!("    delete <n>                                        Remove a task");
    println!("    find <keywords>                                   Search descriptions");
    println!("    help                                              Show the command reference");
    println!("    bye                                               Save and exit");
}
