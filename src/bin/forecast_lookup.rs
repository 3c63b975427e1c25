use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use forecast_advisor_service::advisor::{CurrentConditions, FeasibilityVerdict};
use forecast_advisor_service::config::DEFAULT_FORECAST_URL;
use forecast_advisor_service::fetcher::ForecastFetcher;
use forecast_advisor_service::services::{AdvisorService, ForecastDetail, ForecastService};
use forecast_advisor_service::storage::{JsonFileStore, RecentSearches};

#[derive(Parser)]
#[command(name = "forecast-lookup")]
#[command(about = "Look up a city's forecast and ask the activity advisor", long_about = None)]
struct Cli {
    /// City to look up (omit with --recent)
    #[arg(required_unless_present = "recent")]
    city: Option<String>,

    /// Free-text question for the activity advisor, e.g. "Can I go for a run?"
    #[arg(short, long)]
    question: Option<String>,

    /// List recent searches and exit
    #[arg(long)]
    recent: bool,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "FORECAST_URL", default_value = DEFAULT_FORECAST_URL)]
    forecast_url: String,

    #[arg(long, env = "FORECAST_UNITS", default_value = "metric")]
    units: String,

    #[arg(long, env = "RECENT_SEARCHES_PATH", default_value = "recent_searches.json")]
    recent_searches_path: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    let recent_searches =
        RecentSearches::new(Arc::new(JsonFileStore::new(&cli.recent_searches_path)));

    if cli.recent {
        let searches = recent_searches.list()?;
        if searches.is_empty() {
            println!("No recent searches.");
        }
        for (i, city) in searches.iter().enumerate() {
            println!("{}. {}", i + 1, city);
        }
        return Ok(());
    }

    let city = cli.city.unwrap_or_default();
    let api_key = cli
        .api_key
        .ok_or("an API key is required (--api-key or OPENWEATHER_API_KEY)")?;

    let fetcher = ForecastFetcher::new(cli.forecast_url, api_key, cli.units);
    let service = ForecastService::new(fetcher, recent_searches);

    let forecast = service.search(&city).await?;
    let Some(detail) = ForecastService::build_detail(&forecast) else {
        println!("No weather data available.");
        return Ok(());
    };
    print_detail(&detail);

    if let Some(question) = cli.question {
        let advisor = AdvisorService::new(Duration::ZERO);
        let current = CurrentConditions::from(&detail.current);
        match advisor.advise(&question, &current, &detail.city.name).await {
            Some(verdict) => print_verdict(&verdict),
            None => println!("\n(empty question, nothing to evaluate)"),
        }
    }

    Ok(())
}

fn print_detail(detail: &ForecastDetail) {
    let now = &detail.current;
    println!("Weather in {}", detail.city.name);
    println!("Forecast time: {}", now.timestamp);
    println!(
        "  {:.1}°C (feels like {:.1}°C), {} - {}",
        now.temperature, now.feels_like, now.condition, now.description
    );
    println!(
        "  Min {:.1}°C / Max {:.1}°C, humidity {}%, pressure {} hPa",
        now.temp_min, now.temp_max, now.humidity, now.pressure
    );
    println!(
        "  Clouds {}%, visibility {:.1} km, wind {} m/s ({}), rain probability {:.0}%",
        now.cloud_coverage,
        now.visibility_meters / 1000.0,
        now.wind_speed,
        detail.wind_direction,
        now.precipitation_probability * 100.0
    );
    if let Some(gust) = now.wind_gust {
        println!("  Wind gust {} m/s", gust);
    }

    for day in &detail.days {
        println!("\n{}", day.date);
        for sample in &day.samples {
            println!("  {}  {:>6.1}°C", sample.time_of_day(), sample.temperature);
        }
        let agg = &day.aggregate;
        println!(
            "  avg {:.1}°C, low {:.1}°C, high {:.1}°C, mostly {}, {:.0} hPa, wind {:.1} m/s",
            agg.average_temperature,
            agg.min_temperature,
            agg.max_temperature,
            agg.dominant_condition,
            agg.average_pressure,
            agg.average_wind_speed
        );
    }
}

fn print_verdict(verdict: &FeasibilityVerdict) {
    println!("\nActivity: {} ({:?})", verdict.activity, verdict.tier);
    println!("{}", verdict.recommendation);
    for reason in &verdict.reasons {
        println!("  - {}", reason);
    }
}
