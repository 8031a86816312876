//! Typed preference facade
//!
//! [`Prefs`] is the single point of typed access to persisted settings. It
//! holds a shared [`KeyValueStore`] handle that is created once at process
//! start and cloned into whichever component needs it.
//!
//! Reads never fail. An absent key, a value of the wrong primitive type or
//! malformed JSON all resolve to the setting's default. Writes return
//! [`Result`] and fail only when the store cannot commit or a value cannot
//! be serialized.
//!
//! The facade adds no locking of its own. Read-modify-write helpers such as
//! [`Prefs::add_bounded`] are not atomic across callers: two writers
//! accumulating into the same set may lose one another's update.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use wikiprefs::{catalog, MemoryStore, Prefs};
//!
//! let prefs = Prefs::new(MemoryStore::shared());
//!
//! assert!(prefs.get(&catalog::SHOW_IMAGES));
//! prefs.set(&catalog::SHOW_IMAGES, false)?;
//! assert!(!prefs.get(&catalog::SHOW_IMAGES));
//!
//! prefs.add_reading_lists_deleted_ids(&BTreeSet::from([4, 8]))?;
//! assert_eq!(prefs.reading_lists_deleted_ids(), BTreeSet::from([4, 8]));
//! # Ok::<(), wikiprefs::Error>(())
//! ```

use crate::catalog::{self, DEFAULT_FONT_FAMILY, MIN_SESSION_TIMEOUT};
use crate::codec::{csv_to_list, decode_json, encode_json, list_to_csv};
use crate::enums::{HttpLogLevel, PageAction, PrefEnum};
use crate::error::Result;
use crate::pref::{EnumPref, JsonPref, Scalar, ScalarPref};
use crate::records::{MapPosition, PageTitle, Tab};
use crate::sets::{bounded_union, ordered_union};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Build-dependent inputs to a handful of defaults
#[derive(Debug, Clone)]
pub struct PrefsOptions {
    /// Developer builds show developer settings and log HTTP traffic by default
    pub dev_release: bool,
    /// App or system language code, the default for wiki-code settings
    pub fallback_language: String,
}

impl Default for PrefsOptions {
    fn default() -> Self {
        Self {
            dev_release: false,
            fallback_language: "en".to_string(),
        }
    }
}

/// Typed access to a shared preference store
#[derive(Clone)]
pub struct Prefs {
    store: Arc<dyn KeyValueStore>,
    options: PrefsOptions,
}

impl Prefs {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_options(store, PrefsOptions::default())
    }

    pub fn with_options(store: Arc<dyn KeyValueStore>, options: PrefsOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn options(&self) -> &PrefsOptions {
        &self.options
    }

    // Generic accessors

    /// Read a scalar setting, falling back to its declared default
    pub fn get<T: Scalar>(&self, pref: &ScalarPref<T>) -> T {
        pref.read(self.store())
    }

    pub fn set<T: Scalar>(&self, pref: &ScalarPref<T>, value: T) -> Result<()> {
        pref.write(self.store(), value)
    }

    /// Read a structured setting; absent or undecodable text yields the fallback
    pub fn get_json<T: DeserializeOwned>(&self, pref: &JsonPref<T>) -> T {
        pref.read(self.store())
    }

    pub fn set_json<T: Serialize>(&self, pref: &JsonPref<T>, value: &T) -> Result<()> {
        self.store.set_string(pref.key, Some(encode_json(value)?.as_str()))
    }

    /// Read an enum setting; unknown variant names yield the default
    pub fn get_enum<T: PrefEnum>(&self, pref: &EnumPref<T>) -> T {
        pref.read(self.store())
    }

    pub fn set_enum<T: PrefEnum>(&self, pref: &EnumPref<T>, value: T) -> Result<()> {
        self.store.set_string(pref.key, Some(value.as_str()))
    }

    /// Raw optional string under `key`
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.store.get_string(key, None)
    }

    /// Writing `None` removes the key
    pub fn set_string(&self, key: &str, value: Option<&str>) -> Result<()> {
        self.store.set_string(key, value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key)
    }

    /// Accumulate `new_elements` into the set stored under `key`
    ///
    /// If the union stays below `cap` it is stored. Otherwise exactly
    /// `new_elements` is stored and the previous contents are discarded.
    pub fn add_bounded<E>(&self, key: &str, new_elements: &BTreeSet<E>, cap: usize) -> Result<()>
    where
        E: Ord + Clone + Serialize + DeserializeOwned,
    {
        let current: BTreeSet<E> = self.decode_key(key).unwrap_or_default();
        let unseen = new_elements.difference(&current).count();
        if !current.is_empty() && current.len() + unseen >= cap {
            log::debug!(
                "'{}' reached its cap of {}; dropping {} older entries",
                key,
                cap,
                current.len()
            );
        }
        let next = bounded_union(current, new_elements, cap);
        self.store.set_string(key, Some(encode_json(&next)?.as_str()))
    }

    fn decode_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        decode_json(key, self.store.get_string(key, None).as_deref())
    }

    // Appearance and environment

    /// Font family, `sans-serif` when unset or empty
    pub fn font_family(&self) -> String {
        let family = self.get(&catalog::FONT_FAMILY);
        if family.is_empty() {
            DEFAULT_FONT_FAMILY.to_string()
        } else {
            family
        }
    }

    /// Remote configuration JSON, `{}` when unset or empty
    pub fn remote_config_json(&self) -> String {
        let json = self.get(&catalog::REMOTE_CONFIG_JSON);
        if json.is_empty() {
            "{}".to_string()
        } else {
            json
        }
    }

    pub fn is_show_developer_settings_enabled(&self) -> bool {
        self.store.get_boolean(
            catalog::SHOW_DEVELOPER_SETTINGS.key,
            self.options.dev_release,
        )
    }

    /// HTTP logging verbosity; unset means `Basic` on developer builds and
    /// `None` elsewhere, unrecognized names mean `None`
    pub fn http_log_level(&self) -> HttpLogLevel {
        match self.get(&catalog::HTTP_LOG_LEVEL) {
            None if self.options.dev_release => HttpLogLevel::Basic,
            None => HttpLogLevel::None,
            Some(name) => HttpLogLevel::from_str(&name).unwrap_or(HttpLogLevel::None),
        }
    }

    pub fn restbase_uri_format(&self) -> String {
        self.get(&catalog::RESTBASE_URI_FORMAT)
            .filter(|format| !format.is_empty())
            .unwrap_or_else(|| catalog::DEFAULT_RESTBASE_URI_FORMAT.to_string())
    }

    /// Session timeout in minutes, never below the minimum
    pub fn session_timeout(&self) -> i32 {
        self.get(&catalog::SESSION_TIMEOUT).max(MIN_SESSION_TIMEOUT)
    }

    // Cookies

    /// Raw cookie strings keyed by domain
    pub fn cookies(&self) -> BTreeMap<String, Vec<String>> {
        if !self.contains(catalog::COOKIE_MAP.key) {
            return BTreeMap::new();
        }
        self.get_json(&catalog::COOKIE_MAP)
    }

    pub fn set_cookies(&self, cookies: &BTreeMap<String, Vec<String>>) -> Result<()> {
        self.set_json(&catalog::COOKIE_MAP, cookies)
    }

    // Languages

    pub fn mru_language_codes(&self) -> Vec<String> {
        csv_to_list(&self.get(&catalog::LANGUAGE_MRU).unwrap_or_default())
    }

    pub fn set_mru_language_codes<S: AsRef<str>>(&self, codes: &[S]) -> Result<()> {
        self.set(&catalog::LANGUAGE_MRU, Some(list_to_csv(codes)))
    }

    pub fn app_language_codes(&self) -> Vec<String> {
        csv_to_list(&self.get(&catalog::LANGUAGE_APP).unwrap_or_default())
    }

    pub fn set_app_language_codes<S: AsRef<str>>(&self, codes: &[S]) -> Result<()> {
        self.set(&catalog::LANGUAGE_APP, Some(list_to_csv(codes)))
    }

    fn language_or_fallback(&self, pref: &ScalarPref<Option<String>>) -> String {
        self.get(pref)
            .unwrap_or_else(|| self.options.fallback_language.clone())
    }

    pub fn user_contrib_filter_lang_code(&self) -> String {
        self.language_or_fallback(&catalog::USER_CONTRIB_FILTER_LANG_CODE)
    }

    pub fn recent_edits_wiki_code(&self) -> String {
        self.language_or_fallback(&catalog::RECENT_EDITS_WIKI_CODE)
    }

    pub fn places_wiki_code(&self) -> String {
        self.language_or_fallback(&catalog::PLACES_WIKI_CODE)
    }

    // Tabs

    pub fn tabs(&self) -> Vec<Tab> {
        self.get_json(&catalog::TABS)
    }

    pub fn set_tabs(&self, tabs: &[Tab]) -> Result<()> {
        self.store
            .set_string(catalog::TABS.key, Some(encode_json(tabs)?.as_str()))
    }

    pub fn has_tabs(&self) -> bool {
        self.contains(catalog::TABS.key)
    }

    pub fn clear_tabs(&self) -> Result<()> {
        self.remove(catalog::TABS.key)
    }

    // Parametrized keys

    pub fn last_run_time(&self, task: &str) -> i64 {
        self.store.get_long(&catalog::last_run_time_key(task), 0)
    }

    pub fn set_last_run_time(&self, task: &str, time: i64) -> Result<()> {
        self.store.set_long(&catalog::last_run_time_key(task), time)
    }

    pub fn asked_for_permission_once(&self, permission: &str) -> bool {
        self.store
            .get_boolean(&catalog::permission_asked_key(permission), false)
    }

    pub fn set_asked_for_permission_once(&self, permission: &str) -> Result<()> {
        self.store
            .set_boolean(&catalog::permission_asked_key(permission), true)
    }

    // Reading lists

    /// Sort mode with a caller-chosen default, since the default depends on the screen
    pub fn reading_list_sort_mode(&self, default: i32) -> i32 {
        self.store
            .get_int(catalog::READING_LIST_SORT_MODE.key, default)
    }

    pub fn set_reading_list_sort_mode(&self, mode: i32) -> Result<()> {
        self.set(&catalog::READING_LIST_SORT_MODE, mode)
    }

    pub fn reading_list_page_sort_mode(&self, default: i32) -> i32 {
        self.store
            .get_int(catalog::READING_LIST_PAGE_SORT_MODE.key, default)
    }

    pub fn set_reading_list_page_sort_mode(&self, mode: i32) -> Result<()> {
        self.set(&catalog::READING_LIST_PAGE_SORT_MODE, mode)
    }

    pub fn reading_lists_deleted_ids(&self) -> BTreeSet<i64> {
        self.get_json(&catalog::READING_LISTS_DELETED_IDS)
    }

    pub fn add_reading_lists_deleted_ids(&self, ids: &BTreeSet<i64>) -> Result<()> {
        self.add_bounded(
            catalog::READING_LISTS_DELETED_IDS.key,
            ids,
            catalog::MAX_DELETED_IDS,
        )
    }

    pub fn reading_list_pages_deleted_ids(&self) -> BTreeSet<String> {
        self.get_json(&catalog::READING_LIST_PAGES_DELETED_IDS)
    }

    pub fn add_reading_list_pages_deleted_ids(&self, ids: &BTreeSet<String>) -> Result<()> {
        self.add_bounded(
            catalog::READING_LIST_PAGES_DELETED_IDS.key,
            ids,
            catalog::MAX_DELETED_IDS,
        )
    }

    // Editing

    pub fn recent_used_templates(&self) -> BTreeSet<PageTitle> {
        self.get_json(&catalog::RECENT_USED_TEMPLATES)
    }

    pub fn add_recent_used_templates(&self, templates: &BTreeSet<PageTitle>) -> Result<()> {
        self.add_bounded(
            catalog::RECENT_USED_TEMPLATES.key,
            templates,
            catalog::MAX_RECENT_TEMPLATES,
        )
    }

    pub fn increment_total_anon_descriptions_edited(&self) -> Result<()> {
        let count = self.get(&catalog::TOTAL_ANON_DESCRIPTIONS_EDITED);
        self.set(&catalog::TOTAL_ANON_DESCRIPTIONS_EDITED, count.saturating_add(1))
    }

    // Announcements

    pub fn announcement_shown_dialogs(&self) -> BTreeSet<String> {
        self.get_json(&catalog::ANNOUNCEMENT_SHOWN_DIALOGS)
    }

    /// Record announcement ids as shown; ids already stored are kept
    pub fn add_announcement_shown_dialogs(&self, ids: &BTreeSet<String>) -> Result<()> {
        let mut shown = self.announcement_shown_dialogs();
        shown.extend(ids.iter().cloned());
        self.set_json(&catalog::ANNOUNCEMENT_SHOWN_DIALOGS, &shown)
    }

    pub fn reset_announcement_shown_dialogs(&self) -> Result<()> {
        self.remove(catalog::ANNOUNCEMENT_SHOWN_DIALOGS.key)
    }

    // Explore feed

    pub fn increment_explore_feed_visit_count(&self) -> Result<()> {
        let count = self.get(&catalog::EXPLORE_FEED_VISIT_COUNT);
        self.set(&catalog::EXPLORE_FEED_VISIT_COUNT, count.saturating_add(1))
    }

    /// Forget hidden cards, card enablement, card order and per-card
    /// disabled languages
    pub fn reset_feed_customizations(&self) -> Result<()> {
        for key in [
            catalog::FEED_HIDDEN_CARDS.key,
            catalog::FEED_CARDS_ENABLED.key,
            catalog::FEED_CARDS_ORDER.key,
            catalog::FEED_CARDS_LANG_DISABLED.key,
        ] {
            self.remove(key)?;
        }
        Ok(())
    }

    // Page toolbar

    pub fn customize_toolbar_order(&self) -> Vec<i32> {
        self.get_json(&catalog::CUSTOMIZE_TOOLBAR_ORDER)
    }

    /// Overflow menu order: the stored order (or its default), followed by
    /// every page action that is neither on the toolbar nor already listed,
    /// in page-action order
    pub fn customize_toolbar_menu_order(&self) -> Vec<i32> {
        let toolbar: BTreeSet<i32> = self.customize_toolbar_order().into_iter().collect();
        let not_in_toolbar = PageAction::ALL
            .iter()
            .map(|action| action.code())
            .filter(|code| !toolbar.contains(code));
        ordered_union(
            self.get_json(&catalog::CUSTOMIZE_TOOLBAR_MENU_ORDER),
            not_in_toolbar,
        )
    }

    pub fn reset_toolbar_and_menu_order(&self) -> Result<()> {
        self.remove(catalog::CUSTOMIZE_TOOLBAR_ORDER.key)?;
        self.remove(catalog::CUSTOMIZE_TOOLBAR_MENU_ORDER.key)
    }

    // Places

    /// Default location as `lat,lng` text; empty counts as unset
    pub fn places_default_location(&self) -> Option<String> {
        self.get(&catalog::PLACES_DEFAULT_LOCATION_LATLNG)
            .filter(|latlng| !latlng.is_empty())
    }

    pub fn places_last_location(&self) -> Option<MapPosition> {
        let raw = self.get(&catalog::PLACES_LAST_LOCATION_AND_ZOOM)?;
        let position = MapPosition::parse(&raw);
        if position.is_none() {
            log::warn!("Ignoring malformed map position '{}'", raw);
        }
        position
    }

    pub fn set_places_last_location(&self, position: Option<MapPosition>) -> Result<()> {
        self.set(
            &catalog::PLACES_LAST_LOCATION_AND_ZOOM,
            position.map(|p| p.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::PrefValue;

    fn prefs() -> Prefs {
        Prefs::new(MemoryStore::shared())
    }

    #[test]
    fn test_unwritten_keys_return_defaults() {
        let prefs = prefs();
        assert!(!prefs.get(&catalog::READING_FOCUS_MODE));
        assert!(prefs.get(&catalog::COLLAPSE_TABLES));
        assert_eq!(prefs.get(&catalog::ANALYTICS_QUEUE_SIZE), 128);
        assert_eq!(prefs.get(&catalog::READING_LIST_RECENT_RECEIVED_ID), -1);
        assert_eq!(prefs.get(&catalog::APP_CHANNEL), None);
        assert_eq!(prefs.get(&catalog::PUSH_NOTIFICATION_TOKEN), "");
        assert!(prefs.tabs().is_empty());
        assert!(prefs.cookies().is_empty());
        assert_eq!(prefs.get_json(&catalog::SESSION_DATA).total_pages(), 0);
        assert_eq!(
            prefs.get_enum(&catalog::RECOMMENDED_READING_LIST_UPDATE_FREQUENCY),
            crate::enums::ReadingListUpdateFrequency::Weekly
        );
    }

    #[test]
    fn test_every_catalog_entry_reads_its_default() {
        let store = MemoryStore::new();
        let rows = catalog::descriptors();
        let values = catalog::current_values(&store);
        assert_eq!(rows.len(), values.len());
        for (row, (key, value)) in rows.iter().zip(values) {
            assert_eq!(row.key, key);
            assert_eq!(row.default, value, "unexpected default for '{}'", key);
        }
    }

    #[test]
    fn test_optional_string_none_removes() {
        let prefs = prefs();
        assert_eq!(prefs.get_string("edit_notice_key"), None);
        prefs.set_string("edit_notice_key", Some("seen")).unwrap();
        assert_eq!(prefs.get_string("edit_notice_key"), Some("seen".to_string()));
        prefs.set_string("edit_notice_key", None).unwrap();
        assert!(!prefs.contains("edit_notice_key"));
    }

    #[test]
    fn test_scalar_round_trip() {
        let prefs = prefs();
        prefs.set(&catalog::TEXT_SIZE_MULTIPLIER, -3).unwrap();
        prefs.set(&catalog::PAGE_LAST_SHOWN, 99).unwrap();
        prefs
            .set(&catalog::APP_CHANNEL, Some("alpha".to_string()))
            .unwrap();
        assert_eq!(prefs.get(&catalog::TEXT_SIZE_MULTIPLIER), -3);
        assert_eq!(prefs.get(&catalog::PAGE_LAST_SHOWN), 99);
        assert_eq!(prefs.get(&catalog::APP_CHANNEL), Some("alpha".to_string()));

        prefs.set(&catalog::APP_CHANNEL, None).unwrap();
        assert!(!prefs.contains(catalog::APP_CHANNEL.key));
    }

    #[test]
    fn test_malformed_map_returns_empty() {
        let prefs = prefs();
        prefs
            .store()
            .set_string(catalog::FEED_CARDS_LANG_SUPPORTED.key, Some("{\"1\": [oops"))
            .unwrap();
        assert!(prefs.get_json(&catalog::FEED_CARDS_LANG_SUPPORTED).is_empty());

        prefs
            .store()
            .set_string(catalog::COOKIE_MAP.key, Some("not json"))
            .unwrap();
        assert!(prefs.cookies().is_empty());
    }

    #[test]
    fn test_json_stored_under_wrong_primitive_returns_fallback() {
        let prefs = prefs();
        prefs
            .store()
            .put(catalog::FEED_CARDS_ORDER.key, PrefValue::Int(3))
            .unwrap();
        assert!(prefs.get_json(&catalog::FEED_CARDS_ORDER).is_empty());
    }

    #[test]
    fn test_unknown_enum_name_returns_default() {
        let prefs = prefs();
        prefs
            .store()
            .set_string(catalog::OTD_NOTIFICATION_STATE.key, Some("SOMETIMES"))
            .unwrap();
        assert_eq!(
            prefs.get_enum(&catalog::OTD_NOTIFICATION_STATE),
            crate::enums::OnThisDayNotificationState::NoInteracted
        );
    }

    #[test]
    fn test_bounded_replaces_on_overflow() {
        let prefs = prefs();
        let existing: BTreeSet<i64> = (0..255).collect();
        prefs
            .set_json(&catalog::READING_LISTS_DELETED_IDS, &existing)
            .unwrap();

        let new: BTreeSet<i64> = (1000..1005).collect();
        prefs.add_reading_lists_deleted_ids(&new).unwrap();
        assert_eq!(prefs.reading_lists_deleted_ids(), new);
    }

    #[test]
    fn test_bounded_keeps_union_below_cap() {
        let prefs = prefs();
        let existing: BTreeSet<PageTitle> = (0..10)
            .map(|i| PageTitle::new("en", format!("Template:T{i}")))
            .collect();
        prefs
            .set_json(&catalog::RECENT_USED_TEMPLATES, &existing)
            .unwrap();

        let new: BTreeSet<PageTitle> = [
            PageTitle::new("en", "Template:T3"),
            PageTitle::new("en", "Template:Cite web"),
            PageTitle::new("en", "Template:Infobox"),
        ]
        .into_iter()
        .collect();
        prefs.add_recent_used_templates(&new).unwrap();

        let stored = prefs.recent_used_templates();
        assert_eq!(stored.len(), 12);
        assert!(stored.is_superset(&existing));
        assert!(stored.is_superset(&new));
    }

    #[test]
    fn test_bounded_recovers_from_malformed_history() {
        let prefs = prefs();
        prefs
            .store()
            .set_string(catalog::READING_LIST_PAGES_DELETED_IDS.key, Some("[1, 2"))
            .unwrap();

        let new: BTreeSet<String> = ["a".to_string()].into_iter().collect();
        prefs.add_reading_list_pages_deleted_ids(&new).unwrap();
        assert_eq!(prefs.reading_list_pages_deleted_ids(), new);
    }

    #[test]
    fn test_announcement_dialogs_merge_without_cap() {
        let prefs = prefs();
        let first: BTreeSet<String> = (0..300).map(|i| format!("a{i}")).collect();
        prefs.add_announcement_shown_dialogs(&first).unwrap();
        let second: BTreeSet<String> = ["b".to_string()].into_iter().collect();
        prefs.add_announcement_shown_dialogs(&second).unwrap();
        assert_eq!(prefs.announcement_shown_dialogs().len(), 301);

        prefs.reset_announcement_shown_dialogs().unwrap();
        assert!(prefs.announcement_shown_dialogs().is_empty());
    }

    #[test]
    fn test_toolbar_menu_order_defaults_cover_all_actions() {
        let prefs = prefs();
        assert_eq!(prefs.customize_toolbar_order(), PageAction::default_toolbar());
        assert_eq!(
            prefs.customize_toolbar_menu_order(),
            PageAction::default_overflow_menu()
        );
    }

    #[test]
    fn test_toolbar_menu_order_appends_unplaced_actions() {
        let prefs = prefs();
        // Toolbar keeps only Save and Theme; menu lists Share first, twice
        prefs
            .set_json(&catalog::CUSTOMIZE_TOOLBAR_ORDER, &vec![0, 3])
            .unwrap();
        prefs
            .set_json(&catalog::CUSTOMIZE_TOOLBAR_MENU_ORDER, &vec![5, 5, 7])
            .unwrap();

        assert_eq!(
            prefs.customize_toolbar_menu_order(),
            vec![5, 7, 1, 2, 4, 6, 8, 9, 10, 11, 12]
        );

        prefs.reset_toolbar_and_menu_order().unwrap();
        assert_eq!(prefs.customize_toolbar_order(), PageAction::default_toolbar());
    }

    #[test]
    fn test_reset_feed_customizations_keeps_supported_languages() {
        let prefs = prefs();
        let langs: BTreeMap<i32, Vec<String>> = BTreeMap::from([(1, vec!["en".to_string()])]);
        prefs
            .set_json(&catalog::FEED_CARDS_LANG_SUPPORTED, &langs)
            .unwrap();
        prefs
            .set_json(&catalog::FEED_CARDS_LANG_DISABLED, &langs)
            .unwrap();
        prefs.set_json(&catalog::FEED_CARDS_ORDER, &vec![2, 1]).unwrap();

        prefs.reset_feed_customizations().unwrap();

        assert!(prefs.get_json(&catalog::FEED_CARDS_ORDER).is_empty());
        assert!(prefs.get_json(&catalog::FEED_CARDS_LANG_DISABLED).is_empty());
        assert_eq!(prefs.get_json(&catalog::FEED_CARDS_LANG_SUPPORTED), langs);
    }

    #[test]
    fn test_derived_string_defaults() {
        let prefs = prefs();
        assert_eq!(prefs.font_family(), "sans-serif");
        assert_eq!(prefs.remote_config_json(), "{}");
        assert_eq!(
            prefs.restbase_uri_format(),
            catalog::DEFAULT_RESTBASE_URI_FORMAT
        );

        prefs
            .set(&catalog::FONT_FAMILY, "serif".to_string())
            .unwrap();
        assert_eq!(prefs.font_family(), "serif");
    }

    #[test]
    fn test_session_timeout_is_clamped() {
        let prefs = prefs();
        assert_eq!(prefs.session_timeout(), catalog::DEFAULT_SESSION_TIMEOUT);
        prefs.set(&catalog::SESSION_TIMEOUT, -5).unwrap();
        assert_eq!(prefs.session_timeout(), MIN_SESSION_TIMEOUT);
    }

    #[test]
    fn test_build_dependent_defaults() {
        let dev = Prefs::with_options(
            MemoryStore::shared(),
            PrefsOptions {
                dev_release: true,
                fallback_language: "de".to_string(),
            },
        );
        assert!(dev.is_show_developer_settings_enabled());
        assert_eq!(dev.http_log_level(), HttpLogLevel::Basic);
        assert_eq!(dev.places_wiki_code(), "de");
        assert_eq!(dev.recent_edits_wiki_code(), "de");

        let release = prefs();
        assert!(!release.is_show_developer_settings_enabled());
        assert_eq!(release.http_log_level(), HttpLogLevel::None);
        assert_eq!(release.user_contrib_filter_lang_code(), "en");

        release
            .set(&catalog::HTTP_LOG_LEVEL, Some("BODY".to_string()))
            .unwrap();
        assert_eq!(release.http_log_level(), HttpLogLevel::Body);
        release
            .set(&catalog::HTTP_LOG_LEVEL, Some("LOUD".to_string()))
            .unwrap();
        assert_eq!(release.http_log_level(), HttpLogLevel::None);
    }

    #[test]
    fn test_language_lists_use_csv() {
        let prefs = prefs();
        assert!(prefs.mru_language_codes().is_empty());
        prefs.set_mru_language_codes(&["en", "fr"]).unwrap();
        assert_eq!(prefs.mru_language_codes(), vec!["en", "fr"]);
        assert_eq!(
            prefs.get(&catalog::LANGUAGE_MRU),
            Some("en,fr".to_string())
        );
        prefs.set_app_language_codes(&["ja"]).unwrap();
        assert_eq!(prefs.app_language_codes(), vec!["ja"]);
    }

    #[test]
    fn test_tabs_lifecycle() {
        let prefs = prefs();
        assert!(!prefs.has_tabs());
        let tab = Tab {
            back_stack: vec![PageTitle::new("en", "Ferris")],
            back_stack_position: 0,
        };
        prefs.set_tabs(&[tab.clone()]).unwrap();
        assert!(prefs.has_tabs());
        assert_eq!(prefs.tabs(), vec![tab]);
        prefs.clear_tabs().unwrap();
        assert!(!prefs.has_tabs());
    }

    #[test]
    fn test_parametrized_keys() {
        let prefs = prefs();
        assert_eq!(prefs.last_run_time("sync"), 0);
        prefs.set_last_run_time("sync", 1234).unwrap();
        assert_eq!(prefs.last_run_time("sync"), 1234);
        assert_eq!(prefs.last_run_time("other"), 0);

        assert!(!prefs.asked_for_permission_once("camera"));
        prefs.set_asked_for_permission_once("camera").unwrap();
        assert!(prefs.asked_for_permission_once("camera"));
    }

    #[test]
    fn test_sort_modes_use_caller_default() {
        let prefs = prefs();
        assert_eq!(prefs.reading_list_sort_mode(4), 4);
        prefs.set_reading_list_sort_mode(1).unwrap();
        assert_eq!(prefs.reading_list_sort_mode(4), 1);
        assert_eq!(prefs.reading_list_page_sort_mode(2), 2);
    }

    #[test]
    fn test_counters() {
        let prefs = prefs();
        prefs.increment_explore_feed_visit_count().unwrap();
        prefs.increment_explore_feed_visit_count().unwrap();
        assert_eq!(prefs.get(&catalog::EXPLORE_FEED_VISIT_COUNT), 2);
        prefs.increment_total_anon_descriptions_edited().unwrap();
        assert_eq!(prefs.get(&catalog::TOTAL_ANON_DESCRIPTIONS_EDITED), 1);
    }

    #[test]
    fn test_places() {
        let prefs = prefs();
        assert_eq!(prefs.places_last_location(), None);
        assert_eq!(prefs.places_default_location(), None);

        let position = MapPosition {
            latitude: 1.5,
            longitude: 2.5,
            zoom: 10.0,
        };
        prefs.set_places_last_location(Some(position)).unwrap();
        assert_eq!(prefs.places_last_location(), Some(position));

        prefs
            .set(&catalog::PLACES_LAST_LOCATION_AND_ZOOM, Some("1.5|north".to_string()))
            .unwrap();
        assert_eq!(prefs.places_last_location(), None);

        prefs.set_places_last_location(None).unwrap();
        assert!(!prefs.contains(catalog::PLACES_LAST_LOCATION_AND_ZOOM.key));

        prefs
            .set(&catalog::PLACES_DEFAULT_LOCATION_LATLNG, Some(String::new()))
            .unwrap();
        assert_eq!(prefs.places_default_location(), None);
    }
}
