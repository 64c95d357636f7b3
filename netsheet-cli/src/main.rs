use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};

use netsheet_cli::config::{BrandingConfig, Config};
use netsheet_cli::logging;
use netsheet_cli::report::{self, batch, glossary, net_sheet, roi, timeline};
use netsheet_cli::submit::{SendContactError, send_contact};
use netsheet_core::calculations::{ImprovementType, RoiCalculator};
use netsheet_core::{ContactForm, Location, NetSheetForm, RoiForm, TimelineForm, compute_breakdown};
use netsheet_data::{GlossaryLoader, ScenarioLoader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Seller tools: net sheet, closing timeline, improvement ROI, glossary and
/// contact requests.
#[derive(Debug, Parser)]
#[command(name = "seller-tools", version, about)]
struct Cli {
    /// Log level or filter directive. Overrides the config file; RUST_LOG
    /// overrides both.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate net proceeds from a sale.
    NetSheet(NetSheetArgs),
    /// Plan the listing checklist back from a target closing date.
    Timeline(TimelineArgs),
    /// Estimate the return on a pre-sale improvement.
    Roi(RoiArgs),
    /// Run every scenario in a CSV file through the net sheet.
    Batch {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Browse or search real estate terms.
    Glossary {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Send a consultation request.
    Contact(ContactArgs),
}

#[derive(Debug, Args)]
struct NetSheetArgs {
    #[arg(long, default_value = "")]
    listing_price: String,
    #[arg(long, default_value = "")]
    mortgage_payoff: String,
    #[arg(long, default_value = "")]
    yearly_property_taxes: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    closing_date: String,
    /// Total commission percent.
    #[arg(long, default_value = "6")]
    commission_rate: String,
    /// San Antonio, Houston or Dallas.
    #[arg(long, default_value = "San Antonio")]
    location: String,
    /// Use the entered transfer and recording taxes instead of the
    /// location's rule.
    #[arg(long)]
    manual_taxes: bool,
    #[arg(long, default_value = "")]
    transfer_tax: String,
    #[arg(long, default_value = "")]
    recording_tax: String,
    #[arg(long, default_value = "")]
    hoa_fees: String,
    #[arg(long, default_value = "")]
    home_warranty: String,
    #[arg(long, default_value = "")]
    repairs_concessions: String,
    #[arg(long, default_value = "")]
    misc_closing_costs: String,
    /// Reject malformed, negative or out-of-range values and bad dates
    /// instead of treating them as 0.
    #[arg(long)]
    strict: bool,
    /// Print the breakdown as JSON.
    #[arg(long)]
    json: bool,
    /// Write the net sheet document into this directory.
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct TimelineArgs {
    /// Target closing date, YYYY-MM-DD.
    #[arg(short, long, default_value = "")]
    target: String,
    /// Plan as of this date instead of today.
    #[arg(long)]
    today: Option<NaiveDate>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct RoiArgs {
    /// Improvement key, e.g. kitchen-remodel, landscaping, custom.
    #[arg(long = "type")]
    improvement_type: Option<String>,
    #[arg(long, default_value = "")]
    cost: String,
    #[arg(long, default_value = "")]
    home_value: String,
    /// Expected ROI percent; defaults to the improvement's average.
    #[arg(long, default_value = "")]
    roi: String,
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// 1-2 Months, 3-6 Months or 6+ Months.
    #[arg(long, default_value = "")]
    timeline: String,
    /// Yes or No.
    #[arg(long, default_value = "")]
    proceeds_new_home: String,
    #[arg(long, default_value = "")]
    current_payoff: String,
    /// Yes or No.
    #[arg(long, default_value = "")]
    liens: String,
    #[arg(long, default_value = "")]
    bedrooms: String,
    #[arg(long, default_value = "")]
    bathrooms: String,
    #[arg(long, default_value = "")]
    sq_ft: String,
    #[arg(long, default_value = "")]
    notes: String,
    #[arg(long, default_value = "")]
    property_address: String,
    /// Overrides [contact] endpoint.
    #[arg(long)]
    endpoint: Option<String>,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn export(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<()> {
    let path = report::write_document(dir, file_name, contents)?;
    println!("Saved {}", path.display());
    Ok(())
}

fn net_sheet_form(args: &NetSheetArgs) -> Result<NetSheetForm> {
    let location = Location::parse(&args.location)
        .with_context(|| format!("Unknown location: {}", args.location))?;

    Ok(NetSheetForm {
        listing_price: args.listing_price.clone(),
        mortgage_payoff: args.mortgage_payoff.clone(),
        yearly_property_taxes: args.yearly_property_taxes.clone(),
        closing_date: args.closing_date.clone(),
        commission_rate: args.commission_rate.clone(),
        location,
        use_auto_calculated_taxes: !args.manual_taxes,
        transfer_tax: args.transfer_tax.clone(),
        recording_tax: args.recording_tax.clone(),
        hoa_fees: args.hoa_fees.clone(),
        home_warranty: args.home_warranty.clone(),
        repairs_concessions: args.repairs_concessions.clone(),
        misc_closing_costs: args.misc_closing_costs.clone(),
    })
}

fn run_net_sheet(
    args: NetSheetArgs,
    branding: &BrandingConfig,
) -> Result<()> {
    let form = net_sheet_form(&args)?;
    let input = if args.strict {
        form.to_input_strict().context("Rejected by --strict")?
    } else {
        form.to_input()
    };

    let breakdown = compute_breakdown(&input);

    if args.json {
        let json = serde_json::to_string_pretty(&breakdown)
            .context("Failed to serialize net sheet")?;
        println!("{json}");
    } else {
        print!("{}", net_sheet::render_screen(&breakdown));
    }

    if let Some(dir) = &args.export {
        let generated = today();
        export(
            dir,
            &net_sheet::document_file_name(generated),
            &net_sheet::render_document(&breakdown, branding, generated),
        )?;
    }
    Ok(())
}

fn run_timeline(
    args: TimelineArgs,
    branding: &BrandingConfig,
) -> Result<()> {
    let as_of = args.today.unwrap_or_else(today);
    let projection = TimelineForm::new(args.target)
        .plan(as_of)
        .context("Cannot plan timeline")?;

    if let Some(advisory) = &projection.advisory {
        warn!(
            days_until_closing = advisory.days_until_closing,
            "Target date is sooner than the recommended lead time"
        );
        eprintln!("Note: {}", timeline::advisory_message(advisory));
    }

    if args.json {
        let json = serde_json::to_string_pretty(&projection)
            .context("Failed to serialize timeline")?;
        println!("{json}");
    } else {
        print!("{}", timeline::render_screen(&projection));
    }

    if let Some(dir) = &args.export {
        export(
            dir,
            &timeline::document_file_name(projection.target_closing_date),
            &timeline::render_document(&projection, branding, as_of),
        )?;
    }
    Ok(())
}

fn run_roi(
    args: RoiArgs,
    branding: &BrandingConfig,
) -> Result<()> {
    let improvement_type = match &args.improvement_type {
        Some(key) => Some(
            ImprovementType::parse(key)
                .with_context(|| format!("Unknown improvement type: {key}"))?,
        ),
        None => None,
    };

    let form = RoiForm {
        improvement_type,
        improvement_cost: args.cost,
        current_home_value: args.home_value,
        expected_roi: args.roi,
    };
    let result = RoiCalculator.calculate(&form.to_input());

    print!("{}", roi::render_screen(&result));

    if let Some(dir) = &args.export {
        let generated = today();
        export(
            dir,
            &roi::document_file_name(generated),
            &roi::render_document(&result, branding, generated),
        )?;
    }
    Ok(())
}

fn run_batch(file: &Path) -> Result<()> {
    let reader =
        File::open(file).with_context(|| format!("Failed to open: {}", file.display()))?;
    let scenarios = ScenarioLoader::parse(reader)
        .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;
    info!(count = scenarios.len(), "Loaded scenarios");

    let rows: Vec<_> = scenarios
        .into_iter()
        .map(|s| {
            let breakdown = compute_breakdown(&s.input);
            (s.name, breakdown)
        })
        .collect();

    print!("{}", batch::render_summary(&rows));
    Ok(())
}

fn run_glossary(search: Option<&str>) -> Result<()> {
    let terms = GlossaryLoader::builtin().context("Failed to load glossary")?;
    let sections = terms.search(search.unwrap_or_default());
    print!("{}", glossary::render(&sections));
    Ok(())
}

async fn run_contact(
    args: ContactArgs,
    config: &Config,
) -> Result<()> {
    let form = ContactForm {
        name: args.name,
        phone: args.phone,
        timeline: args.timeline,
        proceeds_new_home: args.proceeds_new_home,
        current_payoff: args.current_payoff,
        liens: args.liens,
        bedrooms: args.bedrooms,
        bathrooms: args.bathrooms,
        sq_ft: args.sq_ft,
        notes: args.notes,
        property_address: args.property_address,
    };

    match send_contact(&form, &config.contact, args.endpoint.as_deref()).await {
        Ok(()) => {
            println!("Thank you! Your request has been sent.");
            Ok(())
        }
        Err(SendContactError::Invalid(errors)) => {
            for error in &errors {
                eprintln!("  {error}");
            }
            bail!("Contact form is incomplete")
        }
        Err(e) => Err(e).context("Failed to send contact request"),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("Failed to load configuration")?;
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_str());
    logging::init_logging(level, config.logging.file.as_deref())?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::NetSheet(args) => run_net_sheet(args, &config.branding),
        Command::Timeline(args) => run_timeline(args, &config.branding),
        Command::Roi(args) => run_roi(args, &config.branding),
        Command::Batch { file } => run_batch(&file),
        Command::Glossary { search } => run_glossary(search.as_deref()),
        Command::Contact(args) => run_contact(args, &config).await,
    }
}
