use clap::Parser;
use smile_desk::config::{BookArgs, Command, TestimonialArgs};
use smile_desk::core::composer::today_iso;
use smile_desk::utils::logger::{self, LogFormat};
use smile_desk::utils::validation::Validate;
use smile_desk::{
    Carousel, CliConfig, DeskError, Draft, LogNavigator, PracticeConfig, RequestComposer,
    StdoutNavigator,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let outcome = match &cli.command {
        Command::Book(args) => book(&config, args).await,
        Command::Services => {
            list_services(&config);
            Ok(())
        }
        Command::Slots => {
            list_slots(&config);
            Ok(())
        }
        Command::Testimonials(args) => show_testimonial(&config, args),
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> smile_desk::Result<PracticeConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            PracticeConfig::from_file(path)?
        }
        None => PracticeConfig::default(),
    };

    // 驗證配置
    config.validate()?;
    tracing::debug!("Configuration validated for {}", config.practice_name());
    Ok(config)
}

async fn book(config: &PracticeConfig, args: &BookArgs) -> smile_desk::Result<()> {
    let mut draft = match &args.draft {
        Some(path) => Draft::from_json(&std::fs::read_to_string(path)?)?,
        None => Draft::default(),
    };
    for update in args.field_updates() {
        draft.apply(update);
    }

    if !draft.preferred_date.is_empty() && draft.preferred_date < today_iso() {
        tracing::warn!("Preferred date {} is in the past", draft.preferred_date);
    }
    if !draft.preferred_time.is_empty() && !config.time_slot_catalog().contains(&draft.preferred_time) {
        tracing::warn!("Preferred time {} is not one of the offered slots", draft.preferred_time);
    }

    if args.dry_run {
        let mut composer = RequestComposer::with_settings(
            config.composer_settings(),
            config.service_catalog(),
            LogNavigator,
        );
        load_draft(&mut composer, draft);
        let handoff = composer.submit()?;
        composer.settle();

        println!("{}", handoff.message);
        println!();
        println!("🔗 {}", handoff.url);
        return Ok(());
    }

    let mut composer = RequestComposer::with_settings(
        config.composer_settings(),
        config.service_catalog(),
        StdoutNavigator,
    );
    load_draft(&mut composer, draft);
    println!("⏳ {}", composer.phase().button_label());
    composer.submit_and_settle().await?;
    println!("✅ Request handed off to {}", config.handoff_target().host());

    Ok(())
}

fn load_draft<N: smile_desk::Navigator>(composer: &mut RequestComposer<N>, draft: Draft) {
    use smile_desk::FieldUpdate;

    composer.update_field(FieldUpdate::Name(draft.name));
    composer.update_field(FieldUpdate::Phone(draft.phone));
    composer.update_field(FieldUpdate::Email(draft.email));
    composer.update_field(FieldUpdate::ServiceCode(draft.service_code));
    composer.update_field(FieldUpdate::PreferredDate(draft.preferred_date));
    composer.update_field(FieldUpdate::PreferredTime(draft.preferred_time));
    composer.update_field(FieldUpdate::Notes(draft.notes));
    composer.update_field(FieldUpdate::Emergency(draft.is_emergency));
}

fn list_services(config: &PracticeConfig) {
    println!("📋 Services offered by {}:", config.practice_name());
    for service in config.service_catalog().iter() {
        println!("  {:<14} {}", service.code, service.label);
    }
}

fn list_slots(config: &PracticeConfig) {
    println!("🕒 Preferred time slots:");
    for slot in config.time_slot_catalog().labels() {
        println!("  {}", slot);
    }
    println!("📅 Earliest date: {}", today_iso());
}

fn show_testimonial(config: &PracticeConfig, args: &TestimonialArgs) -> smile_desk::Result<()> {
    let testimonials = config.testimonials();
    let mut carousel = Carousel::new(&testimonials)?;

    if let Some(index) = args.goto {
        carousel.go_to(index)?;
    }
    for _ in 0..args.next {
        carousel.next();
    }
    for _ in 0..args.previous {
        carousel.previous();
    }

    let current = carousel.current();
    println!(
        "[{}] {} {}, {}",
        current.initials(),
        current.stars(),
        current.name,
        current.location
    );
    println!("  \"{}\"", current.text);
    println!("  Treatment: {}", current.treatment_label);
    if current.has_before_after_media {
        println!("  📸 Before/After Photos Available");
    }

    let dots: String = carousel
        .indicators()
        .iter()
        .map(|dot| if dot.active { '●' } else { '○' })
        .collect();
    println!("  {} ({}/{})", dots, carousel.current_index() + 1, carousel.len());

    Ok(())
}

fn exit_with(e: &DeskError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e {
        DeskError::MissingRequiredField { .. }
        | DeskError::IndexOutOfRange { .. }
        | DeskError::UnknownField { .. }
        | DeskError::InvalidFieldValue { .. } => 2,
        _ => 1,
    };
    std::process::exit(exit_code);
}
