use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::cursor::{MoveToColumn, MoveToPreviousLine};
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};

use ivrikey::config::Config;
use ivrikey::curriculum::letters::normalize_geresh;
use ivrikey::curriculum::{CURRICULUM, lessons};
use ivrikey::engine::clock::{Clock, SystemClock};
use ivrikey::engine::review_queue::{ReviewLimits, ReviewSession};
use ivrikey::engine::srs::ReviewStatus;
use ivrikey::event::{DrillEvent, EventHandler};
use ivrikey::generator::exercise;
use ivrikey::generator::random_words::{LineShape, RandomWordGenerator};
use ivrikey::keyboard::{self, finger};
use ivrikey::session::drill::DrillState;
use ivrikey::session::input::{self, CharStatus};
use ivrikey::session::result::DrillResult;
use ivrikey::store::ProgressStore;
use ivrikey::store::json_store::JsonStore;
use ivrikey::store::schema::ExportData;
use ivrikey::{logging, vocab};

#[derive(Parser)]
#[command(name = "ivrikey", version, about = "Hebrew keyboard typing tutor")]
struct Cli {
    #[arg(long, global = true, help = "New vocabulary items per day")]
    daily_new: Option<usize>,

    #[arg(long, global = true, help = "Vocabulary reviews per day")]
    daily_review: Option<usize>,

    #[arg(short, long, global = true, help = "Lines of practice text per exercise")]
    lines: Option<usize>,

    #[arg(long, global = true, default_value = "warn", help = "Log filter when RUST_LOG is unset")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the letter curriculum with best speeds
    Lessons,
    /// Print generated practice text for a curriculum entry
    Text { index: usize },
    /// Type a curriculum entry against the clock
    Drill { index: usize },
    /// Review vocabulary due today
    Review,
    /// Show vocabulary and speed progress
    Stats,
    /// Forget progress (both kinds unless one is chosen)
    Reset {
        #[arg(long)]
        vocab: bool,
        #[arg(long)]
        speed: bool,
    },
    /// Save the effective settings, flags included, to the config file
    SaveConfig,
    /// Write all progress to a JSON file
    Export { path: PathBuf },
    /// Replace all progress from an exported JSON file
    Import { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);
    keyboard::validate_legend()?;

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("could not read config, using defaults: {err:#}");
        Config::default()
    });
    if let Some(n) = cli.daily_new {
        config.daily_new_limit = n;
    }
    if let Some(n) = cli.daily_review {
        config.daily_review_limit = n;
    }
    if let Some(n) = cli.lines {
        config.line_count = n;
    }
    config.validate();

    let store = JsonStore::from_config(&config)?;
    if store.check_interrupted_import() {
        tracing::warn!("removed backups left by an interrupted import");
    }

    match cli.command {
        Command::Lessons => list_lessons(&store),
        Command::Text { index } => print_text(&config, index),
        Command::Drill { index } => drill(&config, &store, index),
        Command::Review => review(&config, store),
        Command::Stats => stats(&config, store),
        Command::Reset { vocab, speed } => reset(&config, store, vocab, speed),
        Command::SaveConfig => {
            config.save()?;
            println!("Saved settings to {}", Config::config_path().display());
            Ok(())
        }
        Command::Export { path } => {
            let data = store.export_all(&config);
            fs::write(&path, serde_json::to_string_pretty(&data)?)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Exported progress to {}", path.display());
            Ok(())
        }
        Command::Import { path } => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let data: ExportData = serde_json::from_str(&content)?;
            store.import_all(&data)?;
            println!("Imported progress from {}", path.display());
            Ok(())
        }
    }
}

fn list_lessons(store: &JsonStore) -> Result<()> {
    let profile = store.load_profile();
    for (index, descriptor) in CURRICULUM.iter().enumerate() {
        let id = lessons::exercise_id(index, descriptor.mode);
        let best = profile
            .speed
            .wpm(&id)
            .map(|wpm| format!("{wpm} wpm"))
            .unwrap_or_else(|| "-".to_string());
        println!("{index:>2}  {id:<12} {:<20} {best}", descriptor.label());
    }
    Ok(())
}

fn generator(config: &Config) -> RandomWordGenerator {
    RandomWordGenerator::from_entropy(LineShape::from_config(config))
}

fn print_text(config: &Config, index: usize) -> Result<()> {
    let lines = exercise::exercise_text(&mut generator(config), index, config.line_count)?;
    for line in lines {
        println!("{}", line.trim_end());
    }
    Ok(())
}

fn drill(config: &Config, store: &JsonStore, index: usize) -> Result<()> {
    let descriptor = lessons::descriptor(index)?;
    let exercise_id = lessons::exercise_id(index, descriptor.mode);
    let text = exercise::exercise_text_string(&mut generator(config), index, config.line_count)?;
    let mut drill = DrillState::new(&text);

    println!("{}  (Esc to quit)\r", descriptor.label());
    enable_raw_mode()?;
    let outcome = run_drill(&mut drill);
    disable_raw_mode()?;
    println!();
    outcome?;

    let result = DrillResult::from_drill(&drill, &exercise_id);
    println!(
        "{:.0} wpm, {}% accuracy, {} of {} chars{}",
        result.wpm,
        result.accuracy,
        result.correct,
        result.total_chars,
        if result.partial { " (abandoned)" } else { "" }
    );
    if result.partial {
        return Ok(());
    }

    let today = SystemClock.today();
    let mut profile = store.load_profile();
    profile.speed.check_streak(today);
    if profile.speed.save_wpm(&exercise_id, result.rounded_wpm(), today) {
        println!("New best for {exercise_id}! Streak: {} days", profile.speed.streak);
    }
    if let Err(err) = store.save_profile(&profile) {
        tracing::warn!("failed to save speed records: {err:#}");
    }
    Ok(())
}

fn run_drill(drill: &mut DrillState) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(250));
    let mut out = io::stdout();
    queue!(out, Print("\r\n"))?;

    loop {
        render_drill(&mut out, drill)?;
        match events.next()? {
            DrillEvent::Key(key) => match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Backspace => input::process_backspace(drill),
                KeyCode::Char(ch) => {
                    input::process_char(drill, ch);
                }
                _ => {}
            },
            DrillEvent::Tick => {}
        }
        if drill.is_complete() {
            render_drill(&mut out, drill)?;
            break;
        }
    }
    events.cancel();
    execute!(out, Print("\r\n\r\n"))?;
    Ok(())
}

/// Draw the target with per-char status on one line and the live numbers
/// below it, leaving the cursor at the start of the target line.
fn render_drill(out: &mut impl Write, drill: &DrillState) -> Result<()> {
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    for letter in drill.letter_states() {
        let shown = if letter.ch == ' ' { '·' } else { letter.ch };
        let styled = match letter.status {
            CharStatus::Correct => shown.with(Color::Green),
            CharStatus::Incorrect => shown.with(Color::Red).attribute(Attribute::Underlined),
            CharStatus::Current => shown.attribute(Attribute::Reverse),
            CharStatus::Pending => shown.with(Color::DarkGrey),
        };
        queue!(out, PrintStyledContent(styled))?;
    }

    let hint = drill
        .expected()
        .and_then(finger::hebrew_finger)
        .map(|f| format!("  next: {}", f.describe()))
        .unwrap_or_default();
    queue!(
        out,
        Print("\r\n"),
        Print(format!(
            "{}%  {:.0}s  {:.0} wpm{hint}",
            drill.accuracy(),
            drill.elapsed_secs(),
            drill.wpm()
        )),
        MoveToPreviousLine(1)
    )?;
    out.flush()?;
    Ok(())
}

fn open_session(config: &Config, store: JsonStore) -> ReviewSession<JsonStore> {
    ReviewSession::new(
        store,
        Box::new(SystemClock),
        vocab::VOCABULARY,
        ReviewLimits::from_config(config),
    )
}

fn review(config: &Config, store: JsonStore) -> Result<()> {
    let mut session = open_session(config, store);
    session.start_session();
    println!("Type the Hebrew word. Empty line skips, :q quits.");

    let stdin = io::stdin();
    while let Some(item) = session.current_item().copied() {
        let category = vocab::category_label(item.category).unwrap_or(item.category);
        print!("{} ({}) [{category}] > ", item.english, item.transliteration);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let answer = normalize_geresh(line.trim());
        match answer.as_str() {
            ":q" => break,
            "" => {
                session.skip_item();
                continue;
            }
            _ => {}
        }

        let correct = answer == normalize_geresh(item.hebrew);
        if let Some(state) = session.record_answer(correct) {
            if correct {
                println!("  correct, next in {} days", state.interval);
            } else {
                println!("  it is {}, again tomorrow", item.hebrew);
            }
        }
    }

    let stats = session.session_stats();
    println!(
        "Session: {} new, {} reviewed, {} left today",
        stats.new_learned, stats.reviewed, stats.remaining
    );
    Ok(())
}

fn stats(config: &Config, store: JsonStore) -> Result<()> {
    let session = open_session(config, store);
    let overview = session.vocab_with_progress();
    let count = |status: ReviewStatus| overview.iter().filter(|p| p.status == status).count();

    println!("Vocabulary ({} words)", overview.len());
    for status in [
        ReviewStatus::New,
        ReviewStatus::Learning,
        ReviewStatus::Reviewing,
        ReviewStatus::Mastered,
    ] {
        println!("  {:<10} {}", status.as_str(), count(status));
    }
    println!("  due today  {}", session.due_items().len());

    let mut profile = session.store().load_profile();
    profile.speed.check_streak(SystemClock.today());
    println!("Typing");
    println!("  exercises  {}", profile.speed.completed_count());
    println!("  best       {} wpm", profile.speed.best_wpm());
    println!("  average    {} wpm", profile.speed.average_wpm());
    println!("  streak     {} days", profile.speed.streak);
    println!("Progress is kept in {}", session.store().base_dir().display());
    Ok(())
}

fn reset(config: &Config, store: JsonStore, vocab: bool, speed: bool) -> Result<()> {
    let (vocab, speed) = if vocab || speed {
        (vocab, speed)
    } else {
        (true, true)
    };
    if speed {
        let mut profile = store.load_profile();
        profile.speed.reset();
        store.save_profile(&profile)?;
        println!("Speed records cleared");
    }
    if vocab {
        let mut session = open_session(config, store);
        session.reset_progress();
        println!("Vocabulary progress cleared");
    }
    Ok(())
}
