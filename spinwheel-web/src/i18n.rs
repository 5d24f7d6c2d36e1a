use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

const DEFAULT_LANG: &str = "th";
const FALLBACK_LANG: &str = "en";
#[cfg(target_arch = "wasm32")]
const LOCALE_STORAGE_KEY: &str = "spinWheel.locale";

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    /// BCP 47 tag handed to `Intl` formatters.
    pub tag: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "th",
        name: "ไทย",
        tag: "th-TH",
    },
    LocaleMeta {
        code: "en",
        name: "English",
        tag: "en-US",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("th", include_str!("../i18n/th.json")),
    ("en", include_str!("../i18n/en.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    serde_json::from_str(data).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    Some(I18nBundle {
        lang: lang.to_string(),
        translations: load_translations(lang)?,
        fallback: load_translations(FALLBACK_LANG)?,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Null,
        fallback: Value::Null,
    }
}

#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang())
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(empty_bundle),
    );
}

/// Switch the active language. Unknown codes are ignored.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unknown locale `{lang}`");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

/// `Intl` tag for the active language, e.g. `th-TH`.
#[must_use]
pub fn current_tag() -> &'static str {
    let lang = current_lang();
    LOCALE_META
        .iter()
        .find(|m| m.code == lang)
        .map_or("th-TH", |m| m.tag)
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate `key`, falling back to English and then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate `key`, substituting `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

/// Format a stored ISO-8601 timestamp for display (date, short month, time).
///
/// Unparseable input is shown verbatim.
#[must_use]
pub fn fmt_timestamp(iso: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use js_sys::{Date, Object, Reflect};
        use wasm_bindgen::JsValue;

        let date = Date::new(&JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_string();
        }
        let options = Object::new();
        for (key, value) in [
            ("year", "numeric"),
            ("month", "short"),
            ("day", "numeric"),
            ("hour", "2-digit"),
            ("minute", "2-digit"),
        ] {
            let _ = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
        }
        date.to_locale_string(current_tag(), &options).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::DateTime::parse_from_rfc3339(iso).map_or_else(
            |_| iso.to_string(),
            |dt| {
                dt.with_timezone(&chrono::Utc)
                    .format("%-d %b %Y %H:%M")
                    .to_string()
            },
        )
    }
}
