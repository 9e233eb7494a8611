use personnel_core::model::action::{ActionData, ActionTranslationNode};
use personnel_core::model::auth_log::AuthLogData;
use personnel_core::model::employee::{EmployeeData, EmployeeTranslationNode};
use personnel_core::model::entity::{EntityData, EntityTranslationNode};
use personnel_core::model::log_record::LogData;
use personnel_core::model::position::{PositionData, PositionTranslationNode};
use personnel_core::repo::reference::KnownReferences;
use personnel_core::{
    ActionBridge, AggregateKind, AuthLogBridge, Bridge, BridgeContext, Dataset, EmployeeBridge,
    EntityBridge, LanguageCode, LogBridge, ManualClock, OptionMap, PositionBridge,
};
use serde_json::json;

fn lang(code: &str) -> LanguageCode {
    LanguageCode::parse(code).unwrap()
}

fn options(pairs: &[(&str, serde_json::Value)]) -> OptionMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn complete<D: Dataset>(mut dataset: D) -> D {
    dataset.set_complete(true);
    dataset
}

fn known() -> KnownReferences {
    KnownReferences::new()
        .with(AggregateKind::Position, 3)
        .with(AggregateKind::Entity, 4)
        .with(AggregateKind::Action, 5)
        .with(AggregateKind::Employee, 6)
}

#[test]
fn entity_invoice_roundtrips_with_timestamps() {
    let clock = ManualClock::new(1_700_000_000_000);
    let resolver = known();
    let ctx = BridgeContext::new(&resolver, &clock);

    let mut title = EntityTranslationNode::new(lang("en"));
    title.title = "Invoice".to_string();
    let dataset = complete(EntityData {
        name: "invoice".to_string(),
        enabled: true,
        translations: [title].into_iter().collect(),
        ..EntityData::default()
    });

    let mut entity = EntityBridge::new(&clock);
    entity.import(&dataset, &ctx).unwrap();
    let exported = entity.export();

    assert!(exported.is_complete());
    assert_eq!(exported.id, None);
    assert_eq!(exported.name, "invoice");
    assert!(exported.enabled);
    assert_eq!(exported.translations.len(), 1);
    assert_eq!(exported.translations.get("en").unwrap().title, "Invoice");
    assert_eq!(exported.created_at, Some(1_700_000_000_000));
    assert_eq!(exported.updated_at, Some(1_700_000_000_000));
}

#[test]
fn employee_roundtrip_preserves_every_field() {
    let clock = ManualClock::new(10);
    let resolver = known();
    let ctx = BridgeContext::new(&resolver, &clock);

    let mut en = EmployeeTranslationNode::new(lang("en"));
    en.firstname = "Ada".to_string();
    en.lastname = "Lovelace".to_string();
    en.slug = Some("ada-lovelace".to_string());
    en.options = options(&[("signature", json!("A.L."))]);
    let mut fr = EmployeeTranslationNode::new(lang("fr"));
    fr.firstname = "Ada".to_string();
    fr.lastname = "Lovelace".to_string();
    fr.brief = Some("Analyste".to_string());

    let dataset = complete(EmployeeData {
        username: "Ada".to_string(),
        username_canonical: "ada".to_string(),
        email: "Ada@Example.org".to_string(),
        email_canonical: "ada@example.org".to_string(),
        enabled: true,
        locked: false,
        salt: "s4lt".to_string(),
        password: "hash".to_string(),
        position_id: 3,
        options: options(&[("theme", json!("dark")), ("page_size", json!(50))]),
        roles: vec!["ROLE_ADMIN".to_string()],
        translations: [en, fr].into_iter().collect(),
        ..EmployeeData::default()
    });

    let mut employee = EmployeeBridge::new(&clock);
    employee.import(&dataset, &ctx).unwrap();
    let exported = employee.export();

    let expected = EmployeeData {
        created_at: Some(10),
        updated_at: Some(10),
        ..dataset.clone()
    };
    assert_eq!(exported, expected);
    assert_eq!(exported.logged_at, None);
    let order: Vec<&str> = exported.translations.keys().map(|k| k.as_str()).collect();
    assert_eq!(order, ["en", "fr"]);
}

#[test]
fn position_and_action_roundtrip() {
    let clock = ManualClock::new(42);
    let resolver = known();
    let ctx = BridgeContext::new(&resolver, &clock);

    let mut title = PositionTranslationNode::new(lang("en"));
    title.title = "Accountant".to_string();
    title.short = Some("Acct".to_string());
    let position = complete(PositionData {
        name: "accountant".to_string(),
        enabled: true,
        options: options(&[("level", json!(2))]),
        translations: [title].into_iter().collect(),
        ..PositionData::default()
    });
    let mut bridge = PositionBridge::new(&clock);
    bridge.import(&position, &ctx).unwrap();
    assert_eq!(
        bridge.export(),
        PositionData {
            created_at: Some(42),
            updated_at: Some(42),
            ..position.clone()
        }
    );

    let mut view = ActionTranslationNode::new(lang("en"));
    view.title = "View".to_string();
    let action = complete(ActionData {
        entity_id: 4,
        name: "view".to_string(),
        enabled: true,
        rules: options(&[("owner_only", json!(true))]),
        translations: [view].into_iter().collect(),
        ..ActionData::default()
    });
    let mut bridge = ActionBridge::new(&clock);
    bridge.import(&action, &ctx).unwrap();
    assert_eq!(bridge.entity().map(|r| r.id()), Some(4));
    assert_eq!(
        bridge.export(),
        ActionData {
            created_at: Some(42),
            updated_at: Some(42),
            ..action.clone()
        }
    );
}

#[test]
fn log_records_roundtrip_without_updated_at() {
    let clock = ManualClock::new(7);
    let resolver = known();
    let ctx = BridgeContext::new(&resolver, &clock);

    let log = complete(LogData {
        object_id: 900,
        entity_id: 4,
        action_id: 5,
        version_id: Some(2),
        employee_id: 6,
        params: options(&[("field", json!("amount"))]),
        ..LogData::default()
    });
    let mut bridge = LogBridge::new(&clock);
    bridge.import(&log, &ctx).unwrap();
    assert_eq!(
        bridge.export(),
        LogData {
            created_at: Some(7),
            ..log.clone()
        }
    );

    let auth = complete(AuthLogData {
        employee_id: 6,
        ip: "10.0.0.8".to_string(),
        params: options(&[("agent", json!("cli"))]),
        ..AuthLogData::default()
    });
    let mut bridge = AuthLogBridge::new(&clock);
    bridge.import(&auth, &ctx).unwrap();
    assert_eq!(
        bridge.export(),
        AuthLogData {
            created_at: Some(7),
            ..auth.clone()
        }
    );
}

#[test]
fn repeated_import_only_moves_updated_at() {
    let clock = ManualClock::new(100);
    let resolver = known();
    let ctx = BridgeContext::new(&resolver, &clock);

    let mut title = EntityTranslationNode::new(lang("en"));
    title.title = "Invoice".to_string();
    let dataset = complete(EntityData {
        name: "invoice".to_string(),
        enabled: true,
        translations: [title].into_iter().collect(),
        ..EntityData::default()
    });

    let mut entity = EntityBridge::new(&clock);
    entity.import(&dataset, &ctx).unwrap();
    let once = entity.export();

    clock.advance(500);
    entity.import(&dataset, &ctx).unwrap();
    let twice = entity.export();

    assert_eq!(twice.updated_at, Some(600));
    assert_eq!(twice.created_at, once.created_at);
    assert_eq!(
        EntityData {
            updated_at: once.updated_at,
            ..twice
        },
        once
    );
}

#[test]
fn export_never_mutates_aggregate() {
    let clock = ManualClock::new(1);
    let resolver = known();
    let ctx = BridgeContext::new(&resolver, &clock);

    let dataset = complete(AuthLogData {
        employee_id: 6,
        ip: "127.0.0.1".to_string(),
        ..AuthLogData::default()
    });
    let mut bridge = AuthLogBridge::new(&clock);
    bridge.import(&dataset, &ctx).unwrap();

    let before = bridge.clone();
    let _ = bridge.export();
    let _ = bridge.export();
    assert_eq!(bridge, before);
}
