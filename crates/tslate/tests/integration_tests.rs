//! Integration tests for catalog loading and locale switching

use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tslate::{Locale, ResourceLocator, TranslationManager};

/// Create a temporary directory with test translation files
fn create_test_locales() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    fs::write(
        temp_dir.path().join("wallet_uk.ts"),
        r#"<TS language="uk" version="2.1">
<context>
    <name>AddressBookPage</name>
    <message>
        <source>Create a new address</source>
        <translation>Створити нову адресу</translation>
    </message>
    <message>
        <source>&amp;New</source>
        <translation>&amp;Нова</translation>
    </message>
</context>
<context>
    <name>ChainSyncOverlay</name>
    <message numerus="yes">
        <source>%n active connection(s)</source>
        <translation><numerusform>%n активне з'єднання</numerusform><numerusform>%n активні з'єднання</numerusform><numerusform>%n активних з'єднань</numerusform></translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();

    // language-only file; territory-qualified requests must still find it
    fs::write(
        temp_dir.path().join("wallet_vi.ts"),
        r#"<TS language="vi_VN" version="2.1">
<context>
    <name>AddressBookPage</name>
    <message>
        <source>Create a new address</source>
        <translation>Tạo một địa chỉ mới</translation>
    </message>
</context>
</TS>"#,
    )
    .unwrap();

    fs::write(
        temp_dir.path().join("wallet_de.ts"),
        r#"<TS language="de" version="2.1">
<context>
    <name>AddressBookPage</name>
    <message>
        <source>Create a new address</source>
"#,
    )
    .unwrap();

    temp_dir
}

fn manager_for(temp_dir: &TempDir) -> TranslationManager {
    let locator = ResourceLocator::new(temp_dir.path(), "wallet");
    TranslationManager::new(locator, Locale::from_code("en").unwrap())
}

#[test]
fn starts_with_identity_catalog() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);

    assert_eq!(manager.locale().code(), "en");
    assert!(manager.catalog().is_empty());
    assert_eq!(
        manager.tr("AddressBookPage", "Create a new address"),
        "Create a new address"
    );
}

#[test]
fn loads_locale_and_translates() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);

    manager.load_locale(&Locale::from_code("uk").unwrap()).unwrap();
    assert_eq!(manager.locale().code(), "uk");
    assert_eq!(
        manager.tr("AddressBookPage", "Create a new address"),
        "Створити нову адресу"
    );
    // accelerator markers survive entity decoding
    assert_eq!(manager.tr("AddressBookPage", "&New"), "&Нова");
}

#[test]
fn plural_translation_substitutes_count() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);
    manager.set_locale(&Locale::from_code("uk").unwrap());

    assert_eq!(
        manager.trn("ChainSyncOverlay", "%n active connection(s)", 1),
        "1 активне з'єднання"
    );
    assert_eq!(
        manager.trn("ChainSyncOverlay", "%n active connection(s)", 3),
        "3 активні з'єднання"
    );
    assert_eq!(
        manager.trn("ChainSyncOverlay", "%n active connection(s)", 5),
        "5 активних з'єднань"
    );
    assert_eq!(
        manager.trn("ChainSyncOverlay", "%n active connection(s)", 11),
        "11 активних з'єднань"
    );
}

#[test]
fn territory_request_falls_back_to_language_file() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);

    manager
        .load_locale(&Locale::from_code("vi_VN").unwrap())
        .unwrap();
    assert_eq!(
        manager.tr("AddressBookPage", "Create a new address"),
        "Tạo một địa chỉ mới"
    );
    // the file's own language attribute names the active locale
    assert_eq!(manager.locale().code(), "vi_VN");
}

#[test]
fn strict_load_keeps_previous_catalog_on_failure() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);
    manager.load_locale(&Locale::from_code("uk").unwrap()).unwrap();

    let result = manager.load_locale(&Locale::from_code("de").unwrap());
    assert!(result.is_err());
    // the Ukrainian catalog is still active
    assert_eq!(
        manager.tr("AddressBookPage", "Create a new address"),
        "Створити нову адресу"
    );
}

#[test]
fn set_locale_falls_back_to_identity_on_malformed_file() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);

    manager.set_locale(&Locale::from_code("de").unwrap());
    assert_eq!(manager.locale().code(), "de");
    assert!(manager.catalog().is_empty());
    assert_eq!(
        manager.tr("AddressBookPage", "Create a new address"),
        "Create a new address"
    );
}

#[test]
fn set_locale_falls_back_to_identity_on_missing_file() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);

    manager.set_locale(&Locale::from_code("ja").unwrap());
    assert_eq!(manager.locale().code(), "ja");
    assert_eq!(manager.tr("Any", "Done loading"), "Done loading");
}

#[test]
fn readers_keep_their_snapshot_across_swaps() {
    let temp_dir = create_test_locales();
    let manager = manager_for(&temp_dir);
    manager.load_locale(&Locale::from_code("uk").unwrap()).unwrap();

    let snapshot = manager.catalog();
    manager.load_locale(&Locale::from_code("vi_VN").unwrap()).unwrap();

    // the old snapshot still answers with Ukrainian strings
    assert_eq!(
        snapshot.lookup("AddressBookPage", "Create a new address"),
        "Створити нову адресу"
    );
    assert_eq!(
        manager.tr("AddressBookPage", "Create a new address"),
        "Tạo một địa chỉ mới"
    );
}

#[test]
fn concurrent_readers_need_no_locks() {
    let temp_dir = create_test_locales();
    let manager = Arc::new(manager_for(&temp_dir));
    manager.load_locale(&Locale::from_code("uk").unwrap()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            std::thread::spawn(move || {
                for count in 0..100u64 {
                    let text = manager.trn("ChainSyncOverlay", "%n active connection(s)", count);
                    assert!(!text.is_empty());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
