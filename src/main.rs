use clap::Parser;
use gemini_studio::core::ConfigProvider;
use gemini_studio::domain::model::Mode;
use gemini_studio::utils::{logger, validation::Validate};
use gemini_studio::{
    save_rendered, CliConfig, Form, GeminiClient, LocalStorage, Overrides, Settings, Studio,
    StudioError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting gemini-studio");
    tracing::debug!("CLI config: {:?}", redacted(&cli));

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

async fn run(cli: CliConfig) -> Result<(), StudioError> {
    let settings = Settings::load(cli.config.as_deref(), Overrides::from(&cli))?;
    settings.validate()?;

    let Some(form) = cli.command.clone().into_form() else {
        print_modes();
        return Ok(());
    };

    // 先檢查表單，缺欄位時不需要 API key
    form.validate()?;

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the model will not be called");
        print_dry_run(&form, &settings)?;
        return Ok(());
    }

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let client = GeminiClient::from_config(&settings)?;
    let studio = Studio::new_with_monitoring(client, settings.generation().clone(), cli.monitor);

    let rendered = studio.run(&form).await?;
    println!("{}", rendered.to_display());

    if cli.save {
        let storage = LocalStorage::new(settings.output_dir().to_string());
        let path = save_rendered(&storage, &rendered).await?;
        println!("📁 Output saved to: {}", path);
    }

    Ok(())
}

fn print_modes() {
    println!("Choose Application:");
    for mode in Mode::ALL {
        println!("  {:<10} {}", mode.name(), mode.label());
    }
}

fn print_dry_run(form: &Form, settings: &Settings) -> Result<(), StudioError> {
    let plan = form.plan()?;
    let mode = form.mode();

    println!("{}", mode.title());
    println!("{}", mode.subheading());
    println!();
    println!("Model: {}", settings.model());
    println!(
        "Generation: {}",
        serde_json::to_string(settings.generation())?
    );
    for content in &plan.history {
        println!("[history] {}", content.text());
    }
    println!("[message] {}", plan.message);
    Ok(())
}

fn redacted(cli: &CliConfig) -> CliConfig {
    let mut copy = cli.clone();
    if copy.api_key.is_some() {
        copy.api_key = Some("***".to_string());
    }
    copy
}
