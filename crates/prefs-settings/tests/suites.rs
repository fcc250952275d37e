//! Integration tests for settings backed by registry suites

use std::{collections::HashSet, sync::Arc, thread};

use prefs_settings::{SettingsError, SettingsManager, TypedSetting, register_setting_key};
use prefs_store::{StoreConfiguration, StoreError, StoredValue, SuiteRegistry};

register_setting_key!(const IS_PREMIUM: bool = "isPremium");
register_setting_key!(const USERNAME: String = "username");
register_setting_key!(const LAUNCH_COUNT: i64 = "launchCount");
register_setting_key!(const VOLUME: f64 = "volume");
register_setting_key!(const SCALE: f32 = "scale");
register_setting_key!(const AVATAR: Vec<u8> = "avatar");

fn sqlite_registry(dir: &tempfile::TempDir) -> SuiteRegistry {
    SuiteRegistry::open(StoreConfiguration::Sqlite {
        file_path: dir.path().join("prefs.sqlite"),
    })
    .unwrap()
}

fn assert_round_trips(registry: &SuiteRegistry) {
    let store = registry.default_suite().unwrap();

    let is_premium = TypedSetting::from_key(store.clone(), IS_PREMIUM, false);
    let username = TypedSetting::from_key(store.clone(), USERNAME, "guest".to_string());
    let launch_count = TypedSetting::from_key(store.clone(), LAUNCH_COUNT, 0);
    let volume = TypedSetting::from_key(store.clone(), VOLUME, 0.5);
    let scale = TypedSetting::from_key(store.clone(), SCALE, 1.0);
    let avatar = TypedSetting::from_key(store, AVATAR, Vec::new());

    assert!(!is_premium.get().unwrap());
    assert_eq!(username.get().unwrap(), "guest");
    assert_eq!(launch_count.get().unwrap(), 0);
    assert_eq!(volume.get().unwrap(), 0.5);
    assert_eq!(scale.get().unwrap(), 1.0);
    assert!(avatar.get().unwrap().is_empty());

    is_premium.set(true).unwrap();
    username.set("ada".to_string()).unwrap();
    launch_count.set(i64::MIN).unwrap();
    volume.set(0.1).unwrap();
    scale.set(2.25).unwrap();
    avatar.set(vec![0x89, 0x50, 0x4e, 0x47]).unwrap();

    assert!(is_premium.get().unwrap());
    assert_eq!(username.get().unwrap(), "ada");
    assert_eq!(launch_count.get().unwrap(), i64::MIN);
    assert_eq!(volume.get().unwrap(), 0.1);
    assert_eq!(scale.get().unwrap(), 2.25);
    assert_eq!(avatar.get().unwrap(), vec![0x89, 0x50, 0x4e, 0x47]);

    for stored in [
        is_premium.has_stored_value(),
        username.has_stored_value(),
        launch_count.has_stored_value(),
        volume.has_stored_value(),
        scale.has_stored_value(),
        avatar.has_stored_value(),
    ] {
        assert!(stored.unwrap());
    }
}

fn assert_boundary_values(registry: &SuiteRegistry) {
    let manager = SettingsManager::with_default_suite(registry).unwrap();

    manager.set_value("nan", f64::NAN).unwrap();
    manager.set_value("inf", f64::INFINITY).unwrap();
    manager.set_value("negInf", f64::NEG_INFINITY).unwrap();
    manager.set_value("floatNan", f32::NAN).unwrap();
    manager.set_value("floatMax", f32::MAX).unwrap();
    manager.set_value("floatNegInf", f32::NEG_INFINITY).unwrap();
    manager.set_value("empty", String::new()).unwrap();
    manager.set_value("noBytes", Vec::<u8>::new()).unwrap();
    manager.set_value("big", i64::MAX).unwrap();

    assert!(manager.get_value("nan", 0.0_f64).unwrap().is_nan());
    assert_eq!(manager.get_value("inf", 0.0_f64).unwrap(), f64::INFINITY);
    assert_eq!(manager.get_value("negInf", 0.0_f64).unwrap(), f64::NEG_INFINITY);
    assert!(manager.get_value("floatNan", 0.0_f32).unwrap().is_nan());
    assert_eq!(manager.get_value("floatMax", 0.0_f32).unwrap(), f32::MAX);
    assert_eq!(
        manager.get_value("floatNegInf", 0.0_f32).unwrap(),
        f32::NEG_INFINITY
    );
    assert_eq!(
        manager.get_value("empty", "fallback".to_string()).unwrap(),
        ""
    );
    assert!(manager.get_value("noBytes", vec![1_u8]).unwrap().is_empty());
    assert_eq!(manager.get_value("big", 0_i64).unwrap(), i64::MAX);

    // Stored empty values are present, not absent.
    assert!(manager.has_key("empty").unwrap());
    assert!(manager.has_key("noBytes").unwrap());

    let snapshot = manager.snapshot().unwrap();
    assert_eq!(snapshot.len(), 9);
    assert!(matches!(snapshot["nan"], StoredValue::Double(value) if value.is_nan()));
    assert_eq!(snapshot["floatMax"], StoredValue::Float(f32::MAX));
    assert_eq!(snapshot["noBytes"], StoredValue::Bytes(Vec::new()));
}

#[test]
fn test_round_trip_memory() {
    let registry = SuiteRegistry::open(StoreConfiguration::Memory).unwrap();
    assert_round_trips(&registry);
}

#[test]
fn test_round_trip_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    assert_round_trips(&sqlite_registry(&dir));
}

#[test]
fn test_boundary_values_memory() {
    let registry = SuiteRegistry::open(StoreConfiguration::Memory).unwrap();
    assert_boundary_values(&registry);
}

#[test]
fn test_boundary_values_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    assert_boundary_values(&sqlite_registry(&dir));
}

#[test]
fn test_boundary_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let registry = sqlite_registry(&dir);
        let manager = SettingsManager::with_default_suite(&registry).unwrap();
        manager.set_value("nan", f64::NAN).unwrap();
        manager.set_value("negInf", f32::NEG_INFINITY).unwrap();
    }

    let registry = sqlite_registry(&dir);
    let manager = SettingsManager::with_default_suite(&registry).unwrap();
    assert!(manager.get_value("nan", 0.0_f64).unwrap().is_nan());
    assert_eq!(manager.get_value("negInf", 0.0_f32).unwrap(), f32::NEG_INFINITY);
}

#[test]
fn test_suite_names_differing_in_case_stay_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let registry = sqlite_registry(&dir);

    let premium = SettingsManager::for_suite(&registry, "premium").unwrap();
    premium.set_value("isPremium", true).unwrap();

    assert!(matches!(
        SettingsManager::for_suite(&registry, "Premium"),
        Err(SettingsError::Store(StoreError::InvalidSuiteName(_)))
    ));
    assert_eq!(premium.clear_all_settings().unwrap(), 1);
    assert!(registry.suite_names().unwrap().iter().all(|name| name != "Premium"));
}

#[test]
fn test_clear_is_scoped_to_one_suite() {
    let dir = tempfile::tempdir().unwrap();
    let registry = sqlite_registry(&dir);

    let standard = SettingsManager::with_default_suite(&registry).unwrap();
    let premium = SettingsManager::for_suite(&registry, "premium").unwrap();

    standard.set_value("theme", "light".to_string()).unwrap();
    standard.set_value("launchCount", 3_i64).unwrap();
    premium.set_value("theme", "gold".to_string()).unwrap();
    premium.set_value("isPremium", true).unwrap();

    assert_eq!(standard.clear_all_settings().unwrap(), 2);

    assert!(standard.all_keys().unwrap().is_empty());
    let premium_keys: HashSet<String> = premium.all_keys().unwrap().into_iter().collect();
    assert_eq!(
        premium_keys,
        HashSet::from(["theme".to_string(), "isPremium".to_string()])
    );
    assert_eq!(
        premium.get_value("theme", String::new()).unwrap(),
        "gold"
    );
}

#[test]
fn test_mismatch_across_handles() {
    let registry = SuiteRegistry::open(StoreConfiguration::Memory).unwrap();
    let manager = SettingsManager::with_default_suite(&registry).unwrap();
    manager.set_value("launchCount", "many".to_string()).unwrap();

    let launch_count = TypedSetting::from_key(registry.default_suite().unwrap(), LAUNCH_COUNT, 1);
    assert_eq!(launch_count.get().unwrap(), 1);
    assert!(launch_count.has_stored_value().unwrap());

    launch_count.reset().unwrap();
    assert!(!manager.has_key("launchCount").unwrap());
}

#[test]
fn test_values_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let registry = sqlite_registry(&dir);
        let premium = registry.suite("premium").unwrap();
        TypedSetting::from_key(premium, IS_PREMIUM, false)
            .set(true)
            .unwrap();
    }

    let registry = sqlite_registry(&dir);
    let premium = TypedSetting::from_key(registry.suite("premium").unwrap(), IS_PREMIUM, false);
    let standard = TypedSetting::from_key(registry.default_suite().unwrap(), IS_PREMIUM, false);
    assert!(premium.get().unwrap());
    assert!(!standard.has_stored_value().unwrap());
}

#[test]
fn test_shared_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Arc::new(sqlite_registry(&dir));

    thread::scope(|scope| {
        for i in 0..4_i64 {
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                let manager = SettingsManager::with_default_suite(&registry).unwrap();
                manager.set_value(&format!("worker{i}"), i).unwrap();
            });
        }
    });

    let manager = SettingsManager::with_default_suite(&registry).unwrap();
    let snapshot = manager.snapshot().unwrap();
    assert_eq!(snapshot.len(), 4);
    assert_eq!(snapshot["worker3"], StoredValue::Int(3));
}
