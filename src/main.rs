//! Paelles - a terminal-based paella recipe calculator.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paelles::app::App;
use paelles::calculator::{calculate, Inputs, TextRenderer};
use paelles::clipboard::{copy_to_clipboard, COPIED_MESSAGE, COPY_FAILED_MESSAGE};
use paelles::config::CalculatorConfig;
use paelles::recipe::PanSize;
use paelles::share::share_text;
use paelles::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "paelles")]
#[command(about = "A paella recipe calculator for the terminal", long_about = None)]
struct Args {
    /// Number of guests
    #[arg(short = 'p', long = "persones")]
    persones: Option<u32>,

    /// Pan diameter in centimetres (70, 60 or 50)
    #[arg(short = 'm', long = "mida-paella", value_parser = parse_pan_size)]
    mida_paella: Option<PanSize>,

    /// Start from a share link; --persones and --mida-paella override it
    #[arg(long)]
    link: Option<String>,

    /// Print the ingredient table and exit
    #[arg(long, conflicts_with_all = ["share", "share_text"])]
    print: bool,

    /// Copy the share text to the clipboard and exit
    #[arg(long, conflicts_with = "share_text")]
    share: bool,

    /// Print the share text and exit
    #[arg(long)]
    share_text: bool,

    /// Base URL for share links
    #[arg(long)]
    base_url: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_pan_size(value: &str) -> std::result::Result<PanSize, String> {
    value.parse().map_err(|e: paelles::PaellaError| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Paelles");
    }

    let mut config = CalculatorConfig::default();
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url.clone());
    }

    let inputs = resolve_inputs(&args, &config)?;

    if args.print {
        let mut renderer = TextRenderer::new(io::stdout().lock());
        calculate(&inputs, &mut renderer)?;
    } else if args.share_text {
        println!("{}", share_text(&config.base_url, &inputs)?);
    } else if args.share {
        share(&config, &inputs)?;
    } else {
        run_interactive(config, inputs)?;
    }

    if args.log.is_some() {
        tracing::info!("Paelles exited");
    }

    Ok(())
}

fn resolve_inputs(args: &Args, config: &CalculatorConfig) -> Result<Inputs> {
    let mut inputs = match &args.link {
        Some(link) => Inputs::from_link_or(link, config.defaults)?,
        None => config.defaults,
    };

    if let Some(pan_size) = args.mida_paella {
        inputs.pan_size = pan_size;
    }
    if let Some(guests) = args.persones {
        inputs.guests = guests;
    }

    Ok(inputs)
}

// Clipboard failures fall back to printing the text.
fn share(config: &CalculatorConfig, inputs: &Inputs) -> Result<()> {
    let text = share_text(&config.base_url, inputs)?;

    match copy_to_clipboard(&text) {
        Ok(()) => eprintln!("{}", COPIED_MESSAGE),
        Err(e) => {
            tracing::error!("Error copying text: {}", e);
            eprintln!("{}", COPY_FAILED_MESSAGE);
            println!("{}", text);
        },
    }

    Ok(())
}

fn run_interactive(config: CalculatorConfig, inputs: Inputs) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config, inputs);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (_, KeyCode::Char('q'))
            | (_, KeyCode::Esc) => return Ok(()),

            // Pan size selector
            (_, KeyCode::Left) | (_, KeyCode::Char('h')) | (_, KeyCode::BackTab) => {
                app.prev_pan_size();
            },
            (_, KeyCode::Right) | (_, KeyCode::Char('l')) | (_, KeyCode::Tab) => {
                app.next_pan_size();
            },

            // Guest count
            (_, KeyCode::Up) | (_, KeyCode::Char('k')) | (_, KeyCode::Char('+')) => {
                app.increment_guests();
            },
            (_, KeyCode::Down) | (_, KeyCode::Char('j')) | (_, KeyCode::Char('-')) => {
                app.decrement_guests();
            },
            (_, KeyCode::Char(c)) if c.is_ascii_digit() => {
                app.input_guests(c);
            },
            (_, KeyCode::Backspace) => {
                app.backspace_guests();
            },

            // Features
            (_, KeyCode::Char('s')) => {
                app.share();
            },
            (_, KeyCode::Char('T')) => {
                app.cycle_theme();
            },
            (_, KeyCode::Char('?')) => {
                app.toggle_help();
            },

            _ => {},
        }
    }
}
