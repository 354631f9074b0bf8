use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use tracing::{debug, info};

use guess_engine::game::{
    classify, format_probability, Card, DeckMode, Guess, JokerVariant, Rules, Suit,
    MAX_STREAK_LEVEL,
};
use guess_engine::service::{
    action_mask_from_state, FileStore, GameSession, GameSummary, PlayMode, SaveSlots,
};

// ============================================================================
// 命令列參數
// ============================================================================

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DeckArg {
    Small,
    Large,
}

impl From<DeckArg> for DeckMode {
    fn from(arg: DeckArg) -> Self {
        match arg {
            DeckArg::Small => DeckMode::Small,
            DeckArg::Large => DeckMode::Large,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum JokerArg {
    Red,
    Black,
    Green,
}

impl From<JokerArg> for JokerVariant {
    fn from(arg: JokerArg) -> Self {
        match arg {
            JokerArg::Red => JokerVariant::Red,
            JokerArg::Black => JokerVariant::Black,
            JokerArg::Green => JokerVariant::Green,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "guess-sim")]
#[command(about = "Headless card-guessing simulator", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "100")]
    games: u32,

    /// Deck size
    #[arg(short, long, value_enum, default_value = "small")]
    deck: DeckArg,

    /// Jokers shuffled into the deck (comma-separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    jokers: Vec<JokerArg>,

    /// Base seed; game i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,

    /// Bank once the buffer reaches this many points
    #[arg(short, long, default_value = "1000")]
    bank_at: u64,

    /// Directory for the stats book
    #[arg(long, default_value = "./guess_data")]
    data_dir: PathBuf,

    /// Balance rules JSON (missing fields use defaults)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Run games on the rayon pool
    #[arg(short, long)]
    parallel: bool,
}

// ============================================================================
// 策略
// ============================================================================

/// 對所有未見的一般牌取期望基礎分最高的猜測
fn best_guess(session: &GameSession) -> Guess {
    let state = session.state();
    let table = session.rules().points(state.deck_mode);

    let unseen: Vec<Card> = state
        .deck
        .iter()
        .copied()
        .chain(state.current_card)
        .filter(|c| !c.is_joker())
        .collect();

    let mut best = Guess::new(state.deck_mode.ranks()[0], Suit::Spades);
    let mut best_points = 0u64;
    for &rank in state.deck_mode.ranks() {
        for &suit in Suit::all() {
            let guess = Guess::new(rank, suit);
            let points: u64 = unseen
                .iter()
                .map(|card| table.points_for(classify(&guess, card)) as u64)
                .sum();
            if points > best_points {
                best_points = points;
                best = guess;
            }
        }
    }
    best
}

fn play_game(
    seed: u64,
    mode: DeckMode,
    jokers: &[JokerVariant],
    rules: &Rules,
    bank_at: u64,
) -> Result<GameSummary> {
    let mut session = GameSession::with_rules(rules.clone(), seed);
    session.setup(mode, PlayMode::Training);
    if !session.choose_loadout(jokers) {
        anyhow::bail!(
            "loadout of {} jokers exceeds the {} slots of the {:?} deck",
            jokers.len(),
            rules.joker_slots(mode),
            mode
        );
    }

    while !session.state().is_over() {
        let mask = action_mask_from_state(session.state());
        let state = session.state();
        let saturated = state.streak_level >= MAX_STREAK_LEVEL;
        if mask.bank && (state.buffer >= bank_at || saturated) {
            session.bank();
        } else if mask.guess {
            let guess = best_guess(&session);
            session.guess(guess);
        }
        session.tick();
        session.discard();
    }

    let summary = session.summary();
    debug!(seed, score = summary.final_score, guesses = summary.guesses, "game finished");
    Ok(summary)
}

// ============================================================================
// 入口
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let rules = match &args.rules {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading rules from {}", path.display()))?;
            Rules::from_json(&text)
                .with_context(|| format!("invalid rules in {}", path.display()))?
        }
        None => Rules::default(),
    };

    let mode: DeckMode = args.deck.into();
    let jokers: Vec<JokerVariant> = args.jokers.iter().map(|&j| j.into()).collect();
    let base_seed = args.seed.unwrap_or_else(rand::random);

    info!(
        games = args.games,
        ?mode,
        jokers = jokers.len(),
        base_seed,
        parallel = args.parallel,
        "starting simulation"
    );

    let bank_at = args.bank_at;
    let run = |i: u32| play_game(base_seed.wrapping_add(i as u64), mode, &jokers, &rules, bank_at);
    let summaries: Vec<GameSummary> = if args.parallel {
        (0..args.games).into_par_iter().map(run).collect::<Result<_>>()?
    } else {
        (0..args.games).map(run).collect::<Result<_>>()?
    };

    let store = FileStore::open(&args.data_dir)
        .with_context(|| format!("opening data dir {}", args.data_dir.display()))?;
    let mut slots = SaveSlots::new(store);
    let mut book = slots.load_stats().context("loading stats book")?;

    for (i, summary) in summaries.iter().enumerate() {
        info!(
            game = i + 1,
            score = summary.final_score,
            max_multiplier = summary.max_multiplier,
            hits = summary.tiers.hits(),
            misses = summary.tiers.miss,
            "game result"
        );
        book.record_now(summary);
    }
    slots.save_stats(&book).context("saving stats book")?;

    let title = book.title();
    info!(
        games_played = book.games_played,
        total_points = book.total_points,
        best_score = book.best_score,
        best_multiplier = book.best_multiplier,
        accuracy = %format_probability(book.accuracy()),
        title = %format!("{} ({})", title.name, title.rank),
        "stats book updated"
    );

    Ok(())
}
