#![cfg(target_arch = "wasm32")]

use spinwheel_game::KeyValueStore;
use spinwheel_game::constants::{CONFIG_STORAGE_KEY, HISTORY_STORAGE_KEY};
use spinwheel_web::dom::now_utc;
use spinwheel_web::storage::{BrowserStore, browser_wheel, history_log};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    BrowserStore.set("spinWheel.probe", "ok").expect("write");
    assert_eq!(
        BrowserStore.get("spinWheel.probe").expect("read").as_deref(),
        Some("ok")
    );
    BrowserStore.remove("spinWheel.probe").expect("remove");
    assert_eq!(BrowserStore.get("spinWheel.probe").expect("read"), None);
}

#[wasm_bindgen_test]
fn history_written_in_browser_uses_camel_case() {
    BrowserStore.remove(HISTORY_STORAGE_KEY).expect("reset");
    let entry = history_log().append_at("Nothing", now_utc());
    assert_eq!(entry.id, 1);
    let raw = BrowserStore
        .get(HISTORY_STORAGE_KEY)
        .expect("read")
        .expect("history stored");
    assert!(raw.contains("\"resultName\":\"Nothing\""));
    history_log().clear();
}

#[wasm_bindgen_test]
fn engine_reads_configuration_from_local_storage() {
    BrowserStore
        .set(
            CONFIG_STORAGE_KEY,
            r#"[{"name":"A","weight":1},{"name":"B","weight":1},{"name":"C","weight":1}]"#,
        )
        .expect("write");
    assert_eq!(browser_wheel().create_engine().config().len(), 3);
    BrowserStore.remove(CONFIG_STORAGE_KEY).expect("reset");
}
