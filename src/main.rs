use clap::Parser;
use travel_quote::core::duration::parse_date;
use travel_quote::core::reducer::FormEvent;
use travel_quote::core::ConfigProvider;
use travel_quote::domain::model::{PriceDisplay, ReferenceList};
use travel_quote::utils::error::{ErrorSeverity, QuoteError};
use travel_quote::utils::logger::{self, LogFormat};
use travel_quote::utils::validation::Validate;
use travel_quote::{
    config::cli::read_events_file, load_reference_data, CliConfig, Command, HttpReferenceSource,
    LocalStorage, QuoteSession, ReferenceData, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    tracing::info!("Starting travel-quote CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ travel-quote failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> travel_quote::Result<TomlConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    if let Some(path) = &cli.output_path {
        config.output.path = path.clone();
    }
    if cli.offline {
        config.reference.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

async fn fetch_reference(config: &TomlConfig) -> ReferenceData {
    if !config.reference_enabled() {
        tracing::info!("Reference lookups disabled, using built-in lists");
        return ReferenceData::offline();
    }
    let source = HttpReferenceSource::from_config(config);
    load_reference_data(&source).await
}

async fn run(cli: CliConfig) -> travel_quote::Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Command::Countries => {
            let reference = fetch_reference(&config).await;
            print_list(&reference.countries, |c| {
                format!("{} ({})", c.label(), c.english_name)
            });
        }
        Command::Airports => {
            let reference = fetch_reference(&config).await;
            if let ReferenceList::Fallback(_) = reference.airports {
                println!("(built-in list)");
            }
            print_list(&reference.airports, |a| a.label());
        }
        Command::Render {
            events,
            per_person,
            print,
            today,
        } => {
            let today = match today {
                Some(raw) => parse_date(&raw).ok_or_else(|| QuoteError::InvalidConfigValueError {
                    field: "today".to_string(),
                    value: raw.clone(),
                    reason: "expected YYYY-MM-DD".to_string(),
                })?,
                None => chrono::Local::now().date_naive(),
            };

            // Lookups run alongside loading the events; neither waits on the other.
            let events_future = async {
                match &events {
                    Some(path) => read_events_file(path).await,
                    None => Ok(Vec::new()),
                }
            };
            let (reference, events) = tokio::join!(fetch_reference(&config), events_future);
            let mut events = events?;
            tracing::info!("Applying {} form events", events.len());

            if per_person {
                events.push(FormEvent::SetPriceDisplay {
                    display: PriceDisplay::PerPerson,
                });
            }

            let mut session = QuoteSession::start(config.initial_form(), today);
            session.dispatch_all(events);

            warn_unknown_destinations(&session, &reference);

            let preview = session.preview();
            if preview.duration_hint != preview.duration {
                tracing::warn!("⚠️ {}", preview.duration_hint);
            }

            let storage = LocalStorage::new(config.output_path().to_string());
            let location = session.export(&storage).await?;

            if print {
                println!("{}", preview.to_document());
            }
            tracing::info!("✅ Quotation ready");
            println!("📁 Quotation saved to: {}", location);
        }
    }

    Ok(())
}

fn print_list<T>(list: &ReferenceList<T>, label: impl Fn(&T) -> String) {
    if let Some(message) = list.unavailable_message() {
        println!("{}", message);
        return;
    }
    for item in list.items() {
        println!("{}", label(item));
    }
}

fn warn_unknown_destinations(session: &QuoteSession, reference: &ReferenceData) {
    let ReferenceList::Loaded(countries) = &reference.countries else {
        return;
    };
    for label in session.form().destinations.labels() {
        let known = countries
            .iter()
            .any(|c| c.label() == label.as_str() || c.english_name == *label);
        if !known {
            tracing::warn!("Destination '{}' is not in the country list", label);
        }
    }
}
