use bhaisaur::core::config::Revision;
use bhaisaur::core::constants::INPUT_POLL_MS;
use bhaisaur::core::event_log::EventLog;
use bhaisaur::input::{handle_event, InputResult};
use bhaisaur::runner::{stop, tick_runner, RunnerEvent, RunnerGame};
use bhaisaur::ui::draw_ui;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command line.
struct Options {
    revision: Revision,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    mute: bool,
    print_config: bool,
}

/// Audio cues. The terminal bell stands in for the jump sound.
struct Cues {
    muted: bool,
}

impl Cues {
    fn play(&self, event: &RunnerEvent) {
        if self.muted {
            return;
        }
        if let RunnerEvent::Jumped = event {
            // Best effort: a failed bell never interrupts the run
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'bhaisaur --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match options.revision.load_config(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if options.print_config {
        println!("{}", config.to_json());
        return Ok(());
    }

    let mut game = RunnerGame::new(config);
    let mut log = EventLog::new();
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let cues = Cues {
        muted: options.mute,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut game, &mut log, &mut rng, &cues);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if game.attempts > 0 {
        println!(
            "Best score: {} over {} run{}",
            game.high_score,
            game.attempts,
            if game.attempts == 1 { "" } else { "s" }
        );
    }
    println!("Goodbye!");

    Ok(())
}

/// Draw, poll input, advance the clock. Returns when the player quits.
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    game: &mut RunnerGame,
    log: &mut EventLog,
    rng: &mut StdRng,
    cues: &Cues,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &*game, &*log))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            match handle_event(event::read()?, game) {
                InputResult::Quit => {
                    log.record(&stop(game));
                    return Ok(());
                }
                InputResult::Continue(Some(event)) => {
                    cues.play(&event);
                    log.record(&[event]);
                }
                InputResult::Continue(None) => {}
            }
        }

        // Consume whole milliseconds only so fractions carry into the next tick
        let elapsed_ms = last_tick.elapsed().as_millis() as u64;
        last_tick += Duration::from_millis(elapsed_ms);

        let report = tick_runner(game, elapsed_ms, rng);
        for event in &report.events {
            cues.play(event);
        }
        log.record(&report.events);
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        revision: Revision::default(),
        seed: None,
        config_path: None,
        mute: false,
        print_config: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-r" | "--revision" => {
                let name = args.get(i + 1).ok_or("--revision needs a value")?;
                options.revision = Revision::from_name(name)
                    .ok_or_else(|| format!("Unknown revision: {}", name))?;
                i += 1;
            }
            "-s" | "--seed" => {
                let value = args.get(i + 1).ok_or("--seed needs a value")?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
                i += 1;
            }
            "-c" | "--config" => {
                let path = args.get(i + 1).ok_or("--config needs a file")?;
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "-m" | "--mute" => options.mute = true,
            "--print-config" => options.print_config = true,
            "--version" | "-V" => {
                println!("bhaisaur {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Bhaisaur - Terminal Endless Runner\n");
    println!("Usage: bhaisaur [options]\n");
    println!("Options:");
    println!("  -r, --revision <R>  classic, aerial, or fair (default: fair)");
    println!("  -s, --seed <N>      Seed the obstacle generator");
    println!("  -c, --config <FILE> JSON tuning overrides applied on the revision");
    println!("  -m, --mute          Disable the jump bell");
    println!("  --print-config      Print the effective configuration and exit");
    println!("  --version           Show version information");
    println!("  --help              Show this help message\n");
    println!("Controls: Space/Up/Enter/k/w or a left click to start, jump, and retry.");
    println!("          q or Esc to quit.");
}
