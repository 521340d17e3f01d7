//! Prediction dashboard CLI — terminal front-end for the prediction backend.
//!
//! Commands:
//! - `list` — every prediction, newest first, with the average move
//! - `show` / `predict` — one prediction card (cached board vs. on-demand)
//! - `history` — predictions from a trailing window of days
//! - `profit` — leveraged profit estimate from the average move
//! - `chart` — chart rows and axis domains for one timeframe
//! - `indicators` — view or change the indicator selection
//! - `refresh` — ask the backend to pull the latest market data
//! - `watch` — re-fetch predictions on an interval
//! - `unlock` — enter the dashboard password

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use futures_util::{pin_mut, StreamExt};
use std::time::Duration;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

use prediction_dashboard::prelude::*;
use prediction_dashboard::shared::fmt::num;
use prediction_dashboard::shared::parse_date;

#[derive(Parser)]
#[command(
    name = "prediction-dashboard",
    about = "Prediction dashboard — weekly direction calls, profit estimates, charts"
)]
struct Cli {
    /// Backend base URL. Overrides PREDICTIONS_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all predictions, newest first.
    List,
    /// Show one prediction from the full list.
    Show {
        /// Date (YYYY-MM-DD).
        date: String,
    },
    /// Request the prediction for a date from the backend.
    Predict {
        /// Date (YYYY-MM-DD).
        date: String,
    },
    /// Predictions from a trailing window of days.
    History {
        /// Window start, in days before today.
        #[arg(long, default_value_t = 14)]
        from_days: u64,

        /// Window end, in days before today.
        #[arg(long, default_value_t = 7)]
        to_days: u64,
    },
    /// Estimate profit from the average weekly move.
    Profit {
        /// Amount invested.
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,

        /// Leverage multiplier.
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        leverage: f64,

        /// Average over the 7-14 days ago window instead of every prediction.
        #[arg(long, default_value_t = false)]
        history: bool,
    },
    /// Chart rows for one prediction's sequence.
    Chart {
        /// Date (YYYY-MM-DD).
        date: String,

        /// hourly, fourhourly, daily, weekly or monthly.
        #[arg(long, default_value = "daily")]
        timeframe: Timeframe,
    },
    /// Show or change the charted indicators.
    Indicators {
        #[command(subcommand)]
        action: Option<IndicatorAction>,
    },
    /// Ask the backend to fetch the latest market data.
    Refresh,
    /// Re-fetch predictions on an interval until interrupted.
    Watch {
        /// Seconds between fetches. Defaults to DASHBOARD_REFRESH_SECS or one hour.
        #[arg(long)]
        interval_secs: Option<u64>,
    },
    /// Enter the dashboard password.
    Unlock { password: String },
}

#[derive(Subcommand)]
enum IndicatorAction {
    /// Select an indicator, or deselect it if already selected.
    Toggle {
        /// Indicator key, e.g. ema_12 or RSI_14.
        key: Indicator,
    },
    /// Deselect all indicators.
    Clear,
}

#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Prediction")]
    direction: String,
    #[tabled(rename = "Change")]
    pct_change: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Future Date")]
    future_date: String,
    #[tabled(rename = "Correct")]
    verdict: String,
}

impl From<PredictionCard> for PredictionRow {
    fn from(card: PredictionCard) -> Self {
        Self {
            date: card.date,
            direction: card.direction,
            pct_change: card.pct_change,
            confidence: card.confidence,
            future_date: card.future_date,
            verdict: card.verdict_label.to_string(),
        }
    }
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Indicators")]
    indicators: String,
}

impl From<&ChartPoint> for ChartRow {
    fn from(p: &ChartPoint) -> Self {
        Self {
            date: p.date.clone(),
            open: num::fixed(p.open, 2),
            high: num::fixed(p.high, 2),
            low: num::fixed(p.low, 2),
            close: num::fixed(p.close, 2),
            volume: num::grouped_f64(p.volume, 2),
            indicators: p
                .indicators
                .iter()
                .map(|(name, v)| format!("{}={}", name, num::fixed(*v, 2)))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = DashboardConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let client = DashboardClientBuilder::from_config(&config)
        .build()
        .context("failed to build dashboard client")?;

    if let Commands::Unlock { password } = &cli.command {
        return cmd_unlock(&client, password).await;
    }
    if !client.settings().is_unlocked().await {
        bail!("Dashboard is locked. Run `prediction-dashboard unlock <password>` first.");
    }

    match cli.command {
        Commands::List => cmd_list(&client).await,
        Commands::Show { date } => cmd_show(&client, &date).await,
        Commands::Predict { date } => cmd_predict(&client, &date).await,
        Commands::History { from_days, to_days } => cmd_history(&client, from_days, to_days).await,
        Commands::Profit {
            amount,
            leverage,
            history,
        } => cmd_profit(&client, amount, leverage, history).await,
        Commands::Chart { date, timeframe } => cmd_chart(&client, &date, timeframe).await,
        Commands::Indicators { action } => cmd_indicators(&client, action).await,
        Commands::Refresh => cmd_refresh(&client).await,
        Commands::Watch { interval_secs } => {
            let interval = match interval_secs {
                Some(0) => bail!("--interval-secs must be greater than zero"),
                Some(secs) => Duration::from_secs(secs),
                None => client.refresh_interval(),
            };
            cmd_watch(&client, interval).await
        }
        Commands::Unlock { .. } => Ok(()),
    }
}

// ── Commands ─────────────────────────────────────────────────────────────────

async fn cmd_list(client: &DashboardClient) -> Result<()> {
    let board = client
        .predictions()
        .all()
        .await
        .context("Failed to fetch predictions")?;
    print_board(&board);
    Ok(())
}

async fn cmd_show(client: &DashboardClient, date: &str) -> Result<()> {
    let date = parse_arg_date(date)?;
    let board = client
        .predictions()
        .all()
        .await
        .context("Failed to fetch predictions")?;
    let Some(prediction) = board.get(date) else {
        bail!("No prediction for {}", date);
    };
    print_card(&PredictionCard::new(date, prediction, today_utc()));
    Ok(())
}

async fn cmd_predict(client: &DashboardClient, date: &str) -> Result<()> {
    let date = parse_arg_date(date)?;
    let prediction = client.predictions().get_or_placeholder(date).await;
    print_card(&PredictionCard::new(date, &prediction, today_utc()));
    Ok(())
}

async fn cmd_history(client: &DashboardClient, from_days: u64, to_days: u64) -> Result<()> {
    let board = client
        .predictions()
        .history(today_utc(), from_days, to_days)
        .await?;
    print_board(&board);
    Ok(())
}

async fn cmd_profit(client: &DashboardClient, amount: f64, leverage: f64, history: bool) -> Result<()> {
    let predictions = client.predictions();
    let board = if history {
        predictions.history(today_utc(), 14, 7).await?
    } else {
        predictions.all().await.context("Failed to fetch predictions")?
    };
    let summary = CalculatorSummary::new(ProfitInput::new(amount, leverage), board.average_pct_change());
    for (label, value) in summary.lines() {
        println!("{}: {}", label, value);
    }
    Ok(())
}

async fn cmd_chart(client: &DashboardClient, date: &str, timeframe: Timeframe) -> Result<()> {
    let date = parse_arg_date(date)?;
    let prediction = client.predictions().get_or_placeholder(date).await;
    if prediction.is_error() {
        bail!("No sequence data available for {}", date);
    }

    let selection = client.settings().selected_indicators().await;
    let series = ChartSeries::build(&prediction.sequence, timeframe, &selection, &chrono::Local);

    let available = prediction.sequence.available_indicators();
    println!(
        "{} ({}) available indicators: {}",
        date,
        timeframe.title(),
        available.iter().map(|i| i.key()).collect::<Vec<_>>().join(", ")
    );

    if series.is_empty() {
        println!("No {} data.", timeframe);
        return Ok(());
    }

    let mut table = Table::new(series.points.iter().map(ChartRow::from));
    table.with(Style::rounded());
    println!("{}", table);

    let (lo, hi): (f64, f64) = series.close_domain.into();
    println!("Close domain: [{}, {}]", num::fixed(lo, 2), num::fixed(hi, 2));
    for (indicator, domain) in &series.indicator_domains {
        println!(
            "{} domain: [{}, {}] ({})",
            indicator.name(),
            num::fixed(domain.min, 2),
            num::fixed(domain.max, 2),
            indicator.color()
        );
    }
    Ok(())
}

async fn cmd_indicators(client: &DashboardClient, action: Option<IndicatorAction>) -> Result<()> {
    let settings = client.settings();
    match action {
        Some(IndicatorAction::Toggle { key }) => {
            let selected = settings.toggle_indicator(key).await?;
            println!("{} {}", key.name(), if selected { "selected" } else { "deselected" });
        }
        Some(IndicatorAction::Clear) => {
            settings.clear_indicators().await?;
            println!("Selection cleared");
        }
        None => {}
    }

    let selection = settings.selected_indicators().await;
    for indicator in Indicator::ALL {
        let mark = if selection.contains(indicator) { "x" } else { " " };
        println!("[{}] {:<10} {}", mark, indicator.name(), indicator.color());
    }
    Ok(())
}

async fn cmd_refresh(client: &DashboardClient) -> Result<()> {
    let status = client
        .admin()
        .refresh()
        .await
        .context("Failed to trigger data refresh")?;
    if status.is_success() {
        println!("Latest data fetched ({})", status);
    } else {
        println!("Backend answered: {}", status);
    }
    Ok(())
}

async fn cmd_watch(client: &DashboardClient, interval: Duration) -> Result<()> {
    let updates = client.predictions().watch(interval);
    pin_mut!(updates);

    let mut board = PredictionBoard::new();
    while let Some(update) = updates.next().await {
        match update {
            Ok(snapshot) => {
                board.apply_snapshot(snapshot);
                print_board(&board);
            }
            Err(e) => eprintln!("Failed to fetch predictions: {}", e),
        }
    }
    Ok(())
}

async fn cmd_unlock(client: &DashboardClient, password: &str) -> Result<()> {
    if client.settings().unlock(password).await? {
        println!("Unlocked");
        Ok(())
    } else {
        bail!("Incorrect password")
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn print_board(board: &PredictionBoard) {
    if board.is_empty() {
        println!("No predictions.");
        return;
    }
    let today = today_utc();
    let rows: Vec<PredictionRow> = board
        .sorted_desc()
        .into_iter()
        .map(|(key, prediction)| PredictionCard::new(key, prediction, today).into())
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!(
        "{}: {}",
        prediction_dashboard::view::calculator::AVERAGE_LABEL,
        num::percent(board.average_pct_change())
    );
}

fn print_card(card: &PredictionCard) {
    println!("Date:        {}", card.date);
    println!("Prediction:  {}", card.direction);
    println!("Change:      {}", card.pct_change);
    println!("Confidence:  {}", card.confidence);
    println!("Future Date: {}", card.future_date);
    println!("Correct:     {}", card.verdict_label);
}

fn parse_arg_date(raw: &str) -> Result<NaiveDate> {
    parse_date(raw).with_context(|| format!("expected a date as YYYY-MM-DD, got {:?}", raw))
}
