use personnel_core::model::action::{ActionData, ActionTranslationNode};
use personnel_core::model::employee::{EmployeeData, EmployeeTranslationNode};
use personnel_core::model::entity::{EntityData, EntityTranslationNode};
use personnel_core::model::position::{PositionData, PositionTranslationNode};
use personnel_core::repo::reference::KnownReferences;
use personnel_core::{
    ActionBridge, AggregateKind, Bridge, BridgeContext, Dataset, EmployeeBridge, EntityBridge,
    LanguageCode, ManualClock, OptionMap, PositionBridge,
};
use serde_json::json;

fn lang(code: &str) -> LanguageCode {
    LanguageCode::parse(code).unwrap()
}

fn options(key: &str, value: serde_json::Value) -> OptionMap {
    [(key.to_string(), value)].into_iter().collect()
}

fn complete<D: Dataset>(mut dataset: D) -> D {
    dataset.set_complete(true);
    dataset
}

fn keys<'a>(langs: impl Iterator<Item = &'a LanguageCode>) -> Vec<&'a str> {
    langs.map(|lang| lang.as_str()).collect()
}

fn resolver() -> KnownReferences {
    KnownReferences::new()
        .with(AggregateKind::Position, 3)
        .with(AggregateKind::Entity, 4)
}

fn employee_node(code: &str, tag: &str) -> EmployeeTranslationNode {
    let mut node = EmployeeTranslationNode::new(lang(code));
    node.firstname = format!("first-{tag}");
    node.lastname = format!("last-{tag}");
    node.slug = Some(format!("slug-{tag}"));
    node.brief = Some(format!("brief-{tag}"));
    node.description = Some(format!("description-{tag}"));
    node.options = options("signature", json!(tag));
    node
}

fn position_node(code: &str, tag: &str) -> PositionTranslationNode {
    let mut node = PositionTranslationNode::new(lang(code));
    node.title = format!("title-{tag}");
    node.slug = Some(format!("slug-{tag}"));
    node.short = Some(format!("short-{tag}"));
    node.description = Some(format!("description-{tag}"));
    node
}

fn action_node(code: &str, tag: &str) -> ActionTranslationNode {
    let mut node = ActionTranslationNode::new(lang(code));
    node.title = format!("title-{tag}");
    node.slug = Some(format!("slug-{tag}"));
    node.description = Some(format!("description-{tag}"));
    node
}

#[test]
fn employee_reimport_overwrites_every_translation_field() {
    let clock = ManualClock::new(100);
    let resolver = resolver();
    let ctx = BridgeContext::new(&resolver, &clock);

    let first = complete(EmployeeData {
        username: "ada".to_string(),
        position_id: 3,
        translations: [employee_node("en", "v1"), employee_node("fr", "v1")]
            .into_iter()
            .collect(),
        ..EmployeeData::default()
    });
    let mut second = first.clone();
    second.translations = [employee_node("fr", "v2"), employee_node("de", "v2")]
        .into_iter()
        .collect();

    let mut employee = EmployeeBridge::new(&clock);
    employee.import(&first, &ctx).unwrap();
    clock.advance(50);
    employee.import(&second, &ctx).unwrap();
    let exported = employee.export();

    assert_eq!(
        exported,
        EmployeeData {
            created_at: Some(100),
            updated_at: Some(150),
            ..second
        }
    );
    assert_eq!(keys(exported.translations.keys()), ["fr", "de"]);
    let fr = exported.translations.get("fr").unwrap();
    assert_eq!(fr.brief.as_deref(), Some("brief-v2"));
    assert_eq!(fr.options["signature"], json!("v2"));
}

#[test]
fn position_reimport_overwrites_every_translation_field() {
    let clock = ManualClock::new(100);
    let resolver = resolver();
    let ctx = BridgeContext::new(&resolver, &clock);

    let first = complete(PositionData {
        name: "clerk".to_string(),
        enabled: true,
        options: options("level", json!(1)),
        translations: [position_node("en", "v1"), position_node("fr", "v1")]
            .into_iter()
            .collect(),
        ..PositionData::default()
    });
    let mut second = first.clone();
    second.options = options("level", json!(2));
    second.translations = [position_node("fr", "v2"), position_node("de", "v2")]
        .into_iter()
        .collect();

    let mut position = PositionBridge::new(&clock);
    position.import(&first, &ctx).unwrap();
    clock.advance(50);
    position.import(&second, &ctx).unwrap();
    let exported = position.export();

    assert_eq!(
        exported,
        PositionData {
            created_at: Some(100),
            updated_at: Some(150),
            ..second
        }
    );
    assert_eq!(keys(exported.translations.keys()), ["fr", "de"]);
    assert_eq!(
        exported.translations.get("fr").unwrap().short.as_deref(),
        Some("short-v2")
    );
}

#[test]
fn action_reimport_overwrites_every_translation_field() {
    let clock = ManualClock::new(100);
    let resolver = resolver();
    let ctx = BridgeContext::new(&resolver, &clock);

    let first = complete(ActionData {
        entity_id: 4,
        name: "view".to_string(),
        rules: options("owner_only", json!(false)),
        translations: [action_node("en", "v1"), action_node("fr", "v1")]
            .into_iter()
            .collect(),
        ..ActionData::default()
    });
    let mut second = first.clone();
    second.rules = options("owner_only", json!(true));
    second.translations = [action_node("fr", "v2"), action_node("de", "v2")]
        .into_iter()
        .collect();

    let mut action = ActionBridge::new(&clock);
    action.import(&first, &ctx).unwrap();
    clock.advance(50);
    action.import(&second, &ctx).unwrap();
    let exported = action.export();

    assert_eq!(
        exported,
        ActionData {
            created_at: Some(100),
            updated_at: Some(150),
            ..second
        }
    );
    assert_eq!(keys(exported.translations.keys()), ["fr", "de"]);
    assert_eq!(
        exported.translations.get("fr").unwrap().slug.as_deref(),
        Some("slug-v2")
    );
}

#[test]
fn reordered_reimport_exports_in_dataset_order() {
    let clock = ManualClock::new(1);
    let resolver = resolver();
    let ctx = BridgeContext::new(&resolver, &clock);

    let titled = |code: &str, title: &str| {
        let mut node = EntityTranslationNode::new(lang(code));
        node.title = title.to_string();
        node
    };
    let first = complete(EntityData {
        name: "invoice".to_string(),
        translations: [titled("en", "Invoice"), titled("fr", "Facture")]
            .into_iter()
            .collect(),
        ..EntityData::default()
    });
    let mut second = first.clone();
    second.translations = [titled("fr", "Facture"), titled("en", "Invoice")]
        .into_iter()
        .collect();

    let mut entity = EntityBridge::new(&clock);
    entity.import(&first, &ctx).unwrap();
    entity.import(&second, &ctx).unwrap();
    let exported = entity.export();

    assert_eq!(keys(exported.translations.keys()), ["fr", "en"]);
    let wire = serde_json::to_string(&exported.translations).unwrap();
    assert_eq!(
        serde_json::to_string(&second.translations).unwrap(),
        wire
    );
}
