//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `personnel_core` linkage and configuration loading.
//! - Push one entity/action pair through the dataset service and print the
//!   stored datasets as JSON.

use log::info;
use personnel_core::model::action::{ActionData, ActionTranslationNode};
use personnel_core::model::entity::{EntityData, EntityTranslationNode};
use personnel_core::{
    init_logging, ActionBridge, CoreConfig, Dataset, DatasetService, EntityBridge, LanguageCode,
    MemoryStore, SystemClock,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("personnel_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }
    let lang = match config.fallback_language.clone() {
        Some(lang) => lang,
        None => LanguageCode::parse("en")?,
    };

    println!("personnel_core ping={}", personnel_core::ping());
    println!("personnel_core version={}", personnel_core::core_version());

    let mut service = DatasetService::new(MemoryStore::new(), SystemClock);

    let mut invoice_title = EntityTranslationNode::new(lang.clone());
    invoice_title.title = "Invoice".to_string();
    let mut entity = EntityData {
        name: "invoice".to_string(),
        enabled: true,
        translations: [invoice_title].into_iter().collect(),
        ..EntityData::default()
    };
    entity.set_complete(true);
    let entity = service.save::<EntityBridge>(&entity)?;

    let mut view_title = ActionTranslationNode::new(lang);
    view_title.title = "View".to_string();
    let mut action = ActionData {
        entity_id: entity.id.unwrap_or_default(),
        name: "view".to_string(),
        enabled: true,
        translations: [view_title].into_iter().collect(),
        ..ActionData::default()
    };
    action.set_complete(true);
    let action = service.save::<ActionBridge>(&action)?;

    info!("event=cli_smoke module=cli status=ok");
    println!("entity={}", serde_json::to_string(&entity)?);
    println!("action={}", serde_json::to_string(&action)?);
    Ok(())
}
