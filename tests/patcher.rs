// Catalog load/patch/save guard rails against on-disk fixtures.
mod support;

use anyhow::Result;
use locpatch::builtin::{INTRODUCED_SECTIONS, PREEXISTING_SECTIONS, en_patch_set};
use locpatch::{
    Catalog, CatalogError, ErrorKind, PatchEntry, PatchOptions, PatchSet, apply_patch_set,
    run_patch,
};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::path::Path;

use support::{ScratchCatalog, fixture_path};

#[test]
fn merge_preserves_untouched_keys_and_sets_payload_keys() -> Result<()> {
    let mut catalog = Catalog::load(&fixture_path("en_before.json"))?;
    let before = catalog.section("common").cloned().expect("common present");
    let payload = json!({"save": "Save", "loading": "Loading…"});
    let set = PatchSet::new(vec![PatchEntry::merge("common", payload.clone())?]);
    apply_patch_set(&mut catalog, &set)?;

    let after = catalog.section("common").and_then(Value::as_object).expect("object");
    let payload = payload.as_object().expect("object");
    for (key, value) in before.as_object().expect("object") {
        if !payload.contains_key(key) {
            assert_eq!(after.get(key), Some(value), "untouched key {key} changed");
        }
    }
    for (key, value) in payload {
        assert_eq!(after.get(key), Some(value), "payload key {key} not applied");
    }
    Ok(())
}

#[test]
fn replace_is_idempotent() -> Result<()> {
    let entry = PatchEntry::replace("settings", json!({"new": "y"}))?;
    let mut once = Catalog::load(&fixture_path("en_before.json"))?;
    apply_patch_set(&mut once, &PatchSet::new(vec![entry.clone()]))?;
    let mut twice = Catalog::load(&fixture_path("en_before.json"))?;
    apply_patch_set(&mut twice, &PatchSet::new(vec![entry.clone(), entry]))?;
    assert_eq!(once.section("settings"), twice.section("settings"));
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn builtin_set_applies_to_catalog_with_expected_sections() -> Result<()> {
    let scratch = ScratchCatalog::from_fixture("en_before.json")?;
    let before = Catalog::load(scratch.path())?;
    for section in PREEXISTING_SECTIONS {
        assert!(before.contains_section(section), "fixture lacks {section}");
    }

    let report = run_patch(&PatchOptions::new(scratch.path(), en_patch_set()?))?;
    assert!(report.written);
    assert_eq!(report.introduced, INTRODUCED_SECTIONS.to_vec());

    let after = Catalog::load(scratch.path())?;
    let expected: BTreeSet<&str> = before
        .section_names()
        .chain(INTRODUCED_SECTIONS)
        .collect();
    let actual: BTreeSet<&str> = after.section_names().collect();
    assert_eq!(actual, expected);

    // Sections not named by the patch set are untouched.
    assert_eq!(after.section("auth"), before.section("auth"));
    // Merge keeps keys it does not mention.
    assert_eq!(
        after.section("common").and_then(|s| s.get("cancel")),
        Some(&json!("Cancel"))
    );
    assert_eq!(
        after.section("orderDetail").and_then(|s| s.get("legacy_header")),
        Some(&json!("Order details"))
    );
    // Nested mapping in a merge payload replaces the old mapping.
    assert_eq!(
        after.section("orderDetail").and_then(|s| s.get("section")),
        Some(&json!({
            "recipient": "Recipient",
            "order_info": "Order Info",
            "driver": "Driver",
            "location": "Location"
        }))
    );
    assert_eq!(
        after
            .section("shipmentTracking")
            .and_then(|s| s.pointer("/col/legacy")),
        None
    );
    // settings is replaced outright.
    let settings = after
        .section("settings")
        .and_then(Value::as_object)
        .expect("object");
    assert!(!settings.contains_key("save_settings"));
    assert!(!settings.contains_key("company_name"));
    assert_eq!(
        settings.get("page_sub"),
        Some(&json!("Configure your delivery platform"))
    );
    assert_eq!(
        after
            .section("superAdmin")
            .and_then(|s| s.pointer("/login/delivery_link")),
        Some(&json!("Delivery Login →"))
    );

    let expected_values = [
        ("/common/save_changes", "Save Changes"),
        ("/reports/no_data", "No data available"),
        ("/shipmentTracking/col/tracking", "Tracking"),
        ("/cod/export_report", "Export Report"),
        ("/returns/submit", "Submit Return"),
        ("/dispatch/title", "Dispatch Board"),
        ("/invoices/label", "Invoice"),
        ("/performance/delivery_rate", "Delivery Rate"),
        ("/integrations/generate_key_btn", "Generate Key"),
        ("/clients/empty_title", "No clients yet"),
        ("/notifications/sms_test", "SMS Test"),
        ("/zones/page_title", "Delivery Zones"),
        ("/orderDetail/select_driver", "— Select driver —"),
    ];
    let document = Value::Object(after.into_map());
    for (pointer, expected) in expected_values {
        assert_eq!(document.pointer(pointer), Some(&json!(expected)), "{pointer}");
    }
    Ok(())
}

#[test]
fn saved_output_round_trips_byte_for_byte() -> Result<()> {
    let scratch = ScratchCatalog::from_fixture("en_before.json")?;
    run_patch(&PatchOptions::new(scratch.path(), en_patch_set()?))?;
    let first = scratch.read()?;

    let reloaded = Catalog::load(scratch.path())?;
    assert_eq!(reloaded.to_json_string()?, first);

    reloaded.save(scratch.path())?;
    assert_eq!(scratch.read()?, first);
    Ok(())
}

#[test]
fn output_keeps_non_ascii_literal() -> Result<()> {
    let scratch = ScratchCatalog::from_fixture("en_before.json")?;
    run_patch(&PatchOptions::new(scratch.path(), en_patch_set()?))?;
    let text = scratch.read()?;
    assert!(text.contains("Loading settings…"));
    assert!(text.contains("📍 My GPS"));
    assert!(text.contains("Delivery Login →"));
    assert!(text.contains(" · Real-time payment tracking"));
    assert!(!text.contains("\\u"));
    assert!(!text.ends_with('\n'));
    assert!(text.starts_with("{\n  \"common\": {\n    \"cancel\""));
    Ok(())
}

#[test]
fn missing_merge_section_aborts_without_touching_file() -> Result<()> {
    let original = r#"{"common": {"a": "1"}}"#;
    let scratch = ScratchCatalog::new(original)?;
    let set = PatchSet::new(vec![PatchEntry::merge("ghost", json!({"x": "1"}))?]);
    let err = run_patch(&PatchOptions::new(scratch.path(), set)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSection);
    assert_eq!(scratch.read()?, original);
    Ok(())
}

#[test]
fn load_reports_missing_and_malformed_files() -> Result<()> {
    let err = Catalog::load(Path::new("/nonexistent/locpatch/en.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let scratch = ScratchCatalog::new("{ not json")?;
    let err = Catalog::load(scratch.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));

    let scratch = ScratchCatalog::new("\"just a string\"")?;
    let err = Catalog::load(scratch.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    Ok(())
}

#[test]
fn save_into_missing_directory_is_a_write_error() -> Result<()> {
    let scratch = ScratchCatalog::new("{}")?;
    let catalog = Catalog::load(scratch.path())?;
    let target = scratch.dir().join("missing").join("en.json");
    let err = catalog.save(&target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);
    Ok(())
}

#[test]
fn declarative_patch_file_matches_in_code_entries() -> Result<()> {
    let scratch = ScratchCatalog::new(
        r#"[{"section": "common", "op": "merge", "payload": {"b": "2"}}]"#,
    )?;
    let from_file = PatchSet::from_path(scratch.path())?;
    let in_code = PatchSet::new(vec![PatchEntry::merge("common", json!({"b": "2"}))?]);
    assert_eq!(from_file, in_code);
    Ok(())
}
