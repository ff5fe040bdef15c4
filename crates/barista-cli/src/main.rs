mod command;
mod input;
mod render;
mod session;

use barista_core::CafeConfig;

use session::{FAREWELL, Session, Step};

fn print_usage(program: &str) {
    println!("Café round-robin simulator");
    println!("Usage:");
    println!("  {program} [config.json]");
    println!("  {program} --help");
    println!();
    println!("Commands (one per line):");
    println!("  CREATE <name> <capacity>   open a queue");
    println!("  ENQ <name> <item...>       place an order");
    println!("  SKIP <name>                skip the queue's next service");
    println!("  RUN <turns> <quantum>      serve queues round-robin");
    println!("  DISPLAY [json]             show queues");
    println!("  MENU                       show the menu");
    println!("A blank line or Ctrl-C ends the session.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "barista".to_string());
    let config = match std::env::args().nth(1).as_deref() {
        Some("--help") | Some("-h") | Some("help") => {
            print_usage(&program);
            return Ok(());
        }
        Some(path) => CafeConfig::load(path)?,
        None => CafeConfig::default(),
    };

    let mut session = Session::new(&config);
    let mut lines = input::spawn_reader(std::io::BufReader::new(std::io::stdin()));

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line.transpose()? else {
                    println!("{FAREWELL}");
                    break;
                };
                match session.handle_line(&line) {
                    Step::Print(output) => {
                        for out in output {
                            println!("{out}");
                        }
                    }
                    Step::Quit => {
                        println!("{FAREWELL}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                println!("{FAREWELL}");
                break;
            }
        }
    }

    log::info!(
        "session ended: time={} turns={}",
        session.scheduler().clock(),
        session.scheduler().turn_counter()
    );
    Ok(())
}
