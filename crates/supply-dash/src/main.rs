use clap::Parser;
use tracing::info;

use supply_dash::cli::{validate_log_level, Args, Command};
use supply_dash::data::generator::{generate_monthly_trend, generate_weekly_trend};
use supply_dash::data::regions::{default_regions, load_region_table};
use supply_dash::doctor::DoctorReport;
use supply_dash::error::DashResult;
use supply_dash::logging::init_tracing;
use supply_dash::narrative::{NarrativeSummarizer, SummaryConfig};
use supply_dash::output::write_json;
use supply_dash::random::seeded_rng;
use supply_dash::ranking::generate_regional_performance_from;
use supply_dash::snapshot::{attach_summaries, build_snapshot, DashboardFilter};

#[tokio::main]
async fn main() -> DashResult<()> {
    let args = Args::parse();
    validate_log_level(&args.log_level)?;
    init_tracing(&args.log_level);

    let regions = match args.regions.as_deref() {
        Some(path) => load_region_table(path)?,
        None => default_regions().to_vec(),
    };
    let output = args.output.as_deref();
    let mut rng = seeded_rng(args.seed);

    match args.command {
        Command::Trends { weekly } => {
            if weekly {
                write_json(output, &generate_weekly_trend(&mut rng))?;
            } else {
                write_json(output, &generate_monthly_trend(&mut rng))?;
            }
        }
        Command::Regions { category } => {
            let records = generate_regional_performance_from(&regions, category, &mut rng);
            write_json(output, &records)?;
        }
        Command::Snapshot {
            org,
            week,
            with_summary,
        } => {
            let filter = DashboardFilter::new(&org, &week)?;
            let mut snapshot = build_snapshot(filter, &regions, args.seed, &mut rng)?;
            if with_summary {
                let summarizer = NarrativeSummarizer::from_config(&SummaryConfig::from_env());
                attach_summaries(&mut snapshot, &summarizer).await;
            }
            write_json(output, &snapshot)?;
        }
        Command::Summary { context } => {
            let summarizer = NarrativeSummarizer::from_config(&SummaryConfig::from_env());
            let configured = summarizer.is_configured();
            info!(configured, "requesting summary");
            write_json(output, &summarizer.report(&context).await)?;
        }
        Command::Doctor => {
            let report = DoctorReport::collect(
                args.seed,
                args.regions.as_deref(),
                regions.len(),
                output,
                &SummaryConfig::from_env(),
            );
            write_json(output, &report)?;
        }
    }

    Ok(())
}
