//! Settings catalog
//!
//! Every persisted setting is declared here once, with its stable key, value
//! type and default. Keys are never reused for a different purpose; renaming
//! one orphans the value already stored under the old name.
//!
//! A few defaults depend on the running build (developer release, system
//! language). Those are resolved by the named accessors on
//! [`Prefs`](crate::Prefs) and the catalog records the build-independent value.

use crate::enums::{
    OnThisDayNotificationState, PageAction, ReadingListUpdateFrequency,
    RecommendedReadingListSource,
};
use crate::pref::{EnumPref, JsonPref, PrefDescriptor, ScalarPref};
use crate::records::{
    DonationResult, PageTitle, SessionData, SourceWithOffset, StreamConfig, Tab,
};
use crate::store::KeyValueStore;
use std::collections::{BTreeMap, BTreeSet};

/// Marshalling id of the fallback color theme
pub const THEME_FALLBACK_ID: i32 = 0;

/// Minutes of inactivity before an analytics session ends
pub const DEFAULT_SESSION_TIMEOUT: i32 = 30;
pub const MIN_SESSION_TIMEOUT: i32 = 1;

/// Caps for the bounded accumulation sets
pub const MAX_DELETED_IDS: usize = 256;
pub const MAX_RECENT_TEMPLATES: usize = 100;

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_RESTBASE_URI_FORMAT: &str = "%1$s://%2$s/api/rest_v1/";

fn default_watchlist_types() -> BTreeSet<String> {
    ["all_edits", "all_users", "all_revisions"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_recent_edits_types() -> BTreeSet<String> {
    ["all_edits", "all_users", "all_page_types"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Key for the last time a background task ran
pub fn last_run_time_key(task: &str) -> String {
    format!("{task}-lastrun")
}

/// Key recording that a runtime permission was requested once
pub fn permission_asked_key(permission: &str) -> String {
    format!("permission_asked_{permission}")
}

macro_rules! catalog {
    ($( $(#[$meta:meta])* $name:ident: $ty:ty = $ctor:expr; )+) => {
        $(
            $(#[$meta])*
            pub const $name: $ty = $ctor;
        )+

        /// Every declared setting, in declaration order
        pub fn descriptors() -> Vec<PrefDescriptor> {
            vec![$($name.describe()),+]
        }

        /// Current value of every declared setting, rendered like its default
        pub fn current_values(store: &dyn KeyValueStore) -> Vec<(&'static str, serde_json::Value)> {
            vec![$(($name.key, $name.read_value(store))),+]
        }
    };
}

catalog! {
    // Install and channel
    APP_CHANNEL: ScalarPref<Option<String>> = ScalarPref::new("app_channel", None);
    /// Kept under its historical key for analytics continuity
    APP_INSTALL_ID: ScalarPref<Option<String>> = ScalarPref::new("reading_app_install_id", None);
    REMOTE_CONFIG_JSON: ScalarPref<String> = ScalarPref::new("remote_config", "");

    // Appearance
    CURRENT_THEME_ID: ScalarPref<i32> = ScalarPref::new("color_theme", THEME_FALLBACK_ID);
    PREVIOUS_THEME_ID: ScalarPref<i32> = ScalarPref::new("previous_color_theme", THEME_FALLBACK_ID);
    MATCH_SYSTEM_THEME: ScalarPref<bool> = ScalarPref::new("match_system_theme", true);
    DIM_DARK_MODE_IMAGES: ScalarPref<bool> = ScalarPref::new("dim_dark_mode_images", true);
    READING_FOCUS_MODE: ScalarPref<bool> = ScalarPref::new("reading_focus_mode", false);
    FONT_FAMILY: ScalarPref<String> = ScalarPref::new("font_family", "");
    TEXT_SIZE_MULTIPLIER: ScalarPref<i32> = ScalarPref::new("text_size_multiplier", 0);
    EDITING_TEXT_SIZE_MULTIPLIER: ScalarPref<i32> = ScalarPref::new("editing_text_size_multiplier", 0);

    // Languages, stored as comma-separated codes
    LANGUAGE_MRU: ScalarPref<Option<String>> = ScalarPref::new("language_mru", None);
    LANGUAGE_APP: ScalarPref<Option<String>> = ScalarPref::new("language_app", None);
    SELECTED_LANGUAGE_POSITION_IN_SEARCH: ScalarPref<i32> = ScalarPref::new("selected_language_position_in_search", 0);

    // Network and developer options
    SHOW_DEVELOPER_SETTINGS: ScalarPref<bool> = ScalarPref::new("show_developer_settings", false);
    COOKIE_MAP: JsonPref<BTreeMap<String, Vec<String>>> = JsonPref::new("cookie_map", BTreeMap::new);
    HTTP_LOG_LEVEL: ScalarPref<Option<String>> = ScalarPref::new("retrofit_log_level", None);
    RESTBASE_URI_FORMAT: ScalarPref<Option<String>> = ScalarPref::new("restbase_uri_format", None);
    MEDIAWIKI_BASE_URI: ScalarPref<String> = ScalarPref::new("mediawiki_base_uri", "");
    MEDIAWIKI_BASE_URI_SUPPORTS_LANG_CODE: ScalarPref<bool> = ScalarPref::new("mediawiki_base_uri_supports_lang_code", true);
    EVENT_PLATFORM_INTAKE_URI_OVERRIDE: ScalarPref<String> = ScalarPref::new("event_platform_intake_base_uri", "");
    MEMORY_LEAK_TEST: ScalarPref<bool> = ScalarPref::new("memory_leak_test", false);
    LOGIN_FORCE_EMAIL_AUTH: ScalarPref<bool> = ScalarPref::new("login_force_email_auth", false);

    // Tabs and session
    TABS: JsonPref<Vec<Tab>> = JsonPref::new("tabs", Vec::new);
    SESSION_DATA: JsonPref<SessionData> = JsonPref::new("session_data", SessionData::default);
    SESSION_TIMEOUT: ScalarPref<i32> = ScalarPref::new("session_timeout", DEFAULT_SESSION_TIMEOUT);
    PAGE_LAST_SHOWN: ScalarPref<i64> = ScalarPref::new("page_last_shown", 0);

    // Announcements
    ANNOUNCEMENT_COUNTRY_OVERRIDE: ScalarPref<Option<String>> = ScalarPref::new("announcement_country_override", None);
    ANNOUNCEMENT_IGNORE_DATE: ScalarPref<bool> = ScalarPref::new("announcement_ignore_date", false);
    ANNOUNCEMENT_PAUSE_TIME: ScalarPref<i64> = ScalarPref::new("announcement_pause_time", 0);
    ANNOUNCEMENT_DEBUG_URL: ScalarPref<bool> = ScalarPref::new("announcement_debug_url", false);
    ANNOUNCEMENT_VERSION_CODE: ScalarPref<i32> = ScalarPref::new("announcement_version_code", 0);
    ANNOUNCEMENT_SHOWN_DIALOGS: JsonPref<BTreeSet<String>> = JsonPref::new("announcement_shown_dialogs", BTreeSet::new);

    // Content
    SHOW_IMAGES: ScalarPref<bool> = ScalarPref::new("show_images", true);
    DOWNLOAD_ONLY_OVER_WIFI: ScalarPref<bool> = ScalarPref::new("download_only_over_wifi", false);
    DOWNLOAD_READING_LIST_ARTICLES: ScalarPref<bool> = ScalarPref::new("download_reading_list_articles", true);
    SHOW_LINK_PREVIEWS: ScalarPref<bool> = ScalarPref::new("show_link_previews", true);
    COLLAPSE_TABLES: ScalarPref<bool> = ScalarPref::new("collapse_tables", true);
    PREFER_OFFLINE_CONTENT: ScalarPref<bool> = ScalarPref::new("prefer_offline_content", false);

    // Reading lists and sync
    READING_LIST_SORT_MODE: ScalarPref<i32> = ScalarPref::new("reading_list_sort_mode", 0);
    READING_LIST_PAGE_SORT_MODE: ScalarPref<i32> = ScalarPref::new("reading_list_page_sort_mode", 0);
    READING_LISTS_PAGE_SAVE_COUNT: ScalarPref<i32> = ScalarPref::new("save_count_reading_lists", 0);
    READING_LIST_SYNC_ENABLED: ScalarPref<bool> = ScalarPref::new("sync_reading_lists", false);
    READING_LIST_SYNC_REMINDER_ENABLED: ScalarPref<bool> = ScalarPref::new("reading_list_sync_reminder_enabled", true);
    READING_LIST_LOGIN_REMINDER_ENABLED: ScalarPref<bool> = ScalarPref::new("reading_list_login_reminder_enabled", true);
    READING_LISTS_REMOTE_DELETE_PENDING: ScalarPref<bool> = ScalarPref::new("reading_lists_remote_delete_pending", false);
    READING_LISTS_REMOTE_SETUP_PENDING: ScalarPref<bool> = ScalarPref::new("reading_lists_remote_setup_pending", false);
    READING_LISTS_LAST_SYNC_TIME: ScalarPref<String> = ScalarPref::new("reading_lists_last_sync_time", "");
    READING_LISTS_DELETED_IDS: JsonPref<BTreeSet<i64>> = JsonPref::new("reading_lists_deleted_ids", BTreeSet::new);
    READING_LIST_PAGES_DELETED_IDS: JsonPref<BTreeSet<String>> = JsonPref::new("reading_list_pages_deleted_ids", BTreeSet::new);
    SHOW_READING_LIST_SYNC_PROMPT: ScalarPref<bool> = ScalarPref::new("show_reading_lists_sync_prompt", true);
    READING_LISTS_FIRST_TIME_SYNC: ScalarPref<bool> = ScalarPref::new("reading_lists_first_time_sync", true);
    READING_LIST_RECENT_RECEIVED_ID: ScalarPref<i64> = ScalarPref::new("reading_lists_recent_receive_id", -1);
    RECEIVE_READING_LISTS_DATA: ScalarPref<Option<String>> = ScalarPref::new("receive_reading_lists_data", None);

    // Onboarding
    INITIAL_ONBOARDING_ENABLED: ScalarPref<bool> = ScalarPref::new("initial_onboarding_enabled", true);
    DESCRIPTION_EDIT_TUTORIAL_ENABLED: ScalarPref<bool> = ScalarPref::new("description_edit_tutorial_enabled", true);
    SHOW_SEARCH_TAB_TOOLTIP: ScalarPref<bool> = ScalarPref::new("show_search_tab_tooltip", true);
    SHOW_IMAGE_ZOOM_TOOLTIP: ScalarPref<bool> = ScalarPref::new("image_zoom_tooltip_shown", true);
    SHOW_CUSTOMIZE_TOOLBAR_TOOLTIP: ScalarPref<bool> = ScalarPref::new("customize_toolbar_tooltip", true);

    // Editing
    LAST_DESCRIPTION_EDIT_TIME: ScalarPref<i64> = ScalarPref::new("last_description_edit_time", 0);
    TOTAL_ANON_DESCRIPTIONS_EDITED: ScalarPref<i32> = ScalarPref::new("total_anon_descriptions_edited", 0);
    TEMPORARY_WIKITEXT: ScalarPref<String> = ScalarPref::new("temporary_wikitext_storage", "");
    AUTO_SHOW_EDIT_NOTICES: ScalarPref<bool> = ScalarPref::new("auto_show_edit_notices", true);
    EDIT_SYNTAX_HIGHLIGHT: ScalarPref<bool> = ScalarPref::new("edit_syntax_highlight", true);
    EDIT_MONOSPACE_FONT: ScalarPref<bool> = ScalarPref::new("edit_monospace_font", false);
    EDIT_LINE_NUMBERS: ScalarPref<bool> = ScalarPref::new("edit_line_numbers", false);
    EDIT_TYPING_SUGGESTIONS: ScalarPref<bool> = ScalarPref::new("edit_typing_suggestions", true);
    EDIT_HISTORY_FILTER_TYPE: ScalarPref<String> = ScalarPref::new("edit_history_filter_type", "");
    RECENT_USED_TEMPLATES: JsonPref<BTreeSet<PageTitle>> = JsonPref::new("recent_used_templates", BTreeSet::new);
    USER_CONTRIB_FILTER_EXCLUDED_NS: JsonPref<BTreeSet<i32>> = JsonPref::new("user_contrib_filter_excluded_ns", BTreeSet::new);
    USER_CONTRIB_FILTER_LANG_CODE: ScalarPref<Option<String>> = ScalarPref::new("user_contrib_filter_lang_code", None);
    SUGGESTED_EDITS_PAUSE_REVERTS: ScalarPref<i32> = ScalarPref::new("suggested_edits_pause_reverts", 0);
    TALK_TOPICS_SORT_MODE: ScalarPref<i32> = ScalarPref::new("talk_topics_sort_mode", 0);
    TALK_TOPIC_EXPAND_ALL: ScalarPref<bool> = ScalarPref::new("talk_topic_expand_all", true);

    // Anonymous users and notifications
    NOTIFICATION_UNREAD_COUNT: ScalarPref<i32> = ScalarPref::new("notification_unread_count", 0);
    HAS_ANONYMOUS_NOTIFICATION: ScalarPref<bool> = ScalarPref::new("anon_user_has_notification", false);
    LAST_ANON_USER_WITH_MESSAGES: ScalarPref<String> = ScalarPref::new("last_anon_user_with_messages", "");
    LAST_ANON_EDIT_TIME: ScalarPref<i64> = ScalarPref::new("last_anon_edit_time", 0);
    LAST_ANON_NOTIFICATION_TIME: ScalarPref<i64> = ScalarPref::new("last_anon_notification_time", 0);
    REMOTE_NOTIFICATIONS_SEEN_TIME: ScalarPref<String> = ScalarPref::new("remote_notifications_seen_time", "");
    HIDE_READ_NOTIFICATIONS: ScalarPref<bool> = ScalarPref::new("notification_hide_read", false);
    NOTIFICATION_EXCLUDED_WIKI_CODES: JsonPref<BTreeSet<String>> = JsonPref::new("excluded_wiki_codes_notification", BTreeSet::new);
    NOTIFICATION_EXCLUDED_TYPE_CODES: JsonPref<BTreeSet<String>> = JsonPref::new("excluded_type_codes_notification", BTreeSet::new);
    PUSH_NOTIFICATION_TOKEN: ScalarPref<String> = ScalarPref::new("push_notification_token", "");
    PUSH_NOTIFICATION_TOKEN_OLD: ScalarPref<String> = ScalarPref::new("push_notification_token_old", "");
    PUSH_NOTIFICATION_TOKEN_SUBSCRIBED: ScalarPref<bool> = ScalarPref::new("push_notification_token_subscribed", false);

    // Explore feed
    FEED_HIDDEN_CARDS: JsonPref<BTreeSet<String>> = JsonPref::new("feed_hidden_cards", BTreeSet::new);
    FEED_CARDS_ENABLED: JsonPref<Vec<bool>> = JsonPref::new("feed_cards_enabled", Vec::new);
    FEED_CARDS_ORDER: JsonPref<Vec<i32>> = JsonPref::new("feed_cards_order", Vec::new);
    FEED_CARDS_LANG_SUPPORTED: JsonPref<BTreeMap<i32, Vec<String>>> = JsonPref::new("feed_cards_lang_supported", BTreeMap::new);
    FEED_CARDS_LANG_DISABLED: JsonPref<BTreeMap<i32, Vec<String>>> = JsonPref::new("feed_cards_lang_disabled", BTreeMap::new);
    EXPLORE_FEED_VISIT_COUNT: ScalarPref<i32> = ScalarPref::new("explore_feed_visit_count", 0);

    // Page toolbar
    CUSTOMIZE_TOOLBAR_ORDER: JsonPref<Vec<i32>> = JsonPref::new("customize_toolbar_order", PageAction::default_toolbar);
    CUSTOMIZE_TOOLBAR_MENU_ORDER: JsonPref<Vec<i32>> = JsonPref::new("customize_toolbar_menu_order", PageAction::default_overflow_menu);

    // Analytics
    EVENT_PLATFORM_SESSION_ID: ScalarPref<Option<String>> = ScalarPref::new("event_platform_session_id", None);
    STREAM_CONFIGS: JsonPref<BTreeMap<String, StreamConfig>> = JsonPref::new("event_platform_stored_stream_configs", BTreeMap::new);
    ANALYTICS_QUEUE_SIZE: ScalarPref<i32> = ScalarPref::new("event_platform_queue_size", 128);
    INSTALL_REFERRER_ATTEMPTS: ScalarPref<i32> = ScalarPref::new("install_referrer_attempts", 0);

    // Watchlist and recent edits
    WATCHLIST_EXCLUDED_WIKI_CODES: JsonPref<BTreeSet<String>> = JsonPref::new("excluded_wiki_codes_watchlist", BTreeSet::new);
    WATCHLIST_INCLUDED_TYPE_CODES: JsonPref<BTreeSet<String>> = JsonPref::new("included_type_codes_watchlist", default_watchlist_types);
    RECENT_EDITS_WIKI_CODE: ScalarPref<Option<String>> = ScalarPref::new("recent_edits_wiki_code", None);
    RECENT_EDITS_INCLUDED_TYPE_CODES: JsonPref<BTreeSet<String>> = JsonPref::new("recent_edits_included_type_codes", default_recent_edits_types);

    // Places
    PLACES_WIKI_CODE: ScalarPref<Option<String>> = ScalarPref::new("places_wiki_code", None);
    PLACES_DEFAULT_LOCATION_LATLNG: ScalarPref<Option<String>> = ScalarPref::new("default_places_location_latlng", None);
    PLACES_LAST_LOCATION_AND_ZOOM: ScalarPref<Option<String>> = ScalarPref::new("places_last_location_and_zoom_level", None);

    // Donations
    DONATION_BANNER_OPT_IN: ScalarPref<bool> = ScalarPref::new("donation_banner_opt_in", true);
    DONATION_TEST_ENV: ScalarPref<bool> = ScalarPref::new("donation_test_env", false);
    DONATION_RESULTS: JsonPref<Vec<DonationResult>> = JsonPref::new("donation_results", Vec::new);
    PAYMENT_METHODS_LAST_QUERY_TIME: ScalarPref<i64> = ScalarPref::new("payment_methods_last_query_time", 0);
    PAYMENT_METHODS_MERCHANT_ID: ScalarPref<String> = ScalarPref::new("payment_methods_merchant_id", "");
    PAYMENT_METHODS_GATEWAY_ID: ScalarPref<String> = ScalarPref::new("payment_methods_gateway_id", "");

    // On this day game
    OTD_GAME_STATE: ScalarPref<String> = ScalarPref::new("otd_game_state", "");
    OTD_GAME_HISTORY: ScalarPref<String> = ScalarPref::new("otd_game_history", "");
    OTD_GAME_QUESTIONS_PER_DAY: ScalarPref<i32> = ScalarPref::new("otd_game_num_questions", 5);
    OTD_SOUND_ON: ScalarPref<bool> = ScalarPref::new("otd_sound_on", true);
    OTD_NOTIFICATION_STATE: EnumPref<OnThisDayNotificationState> = EnumPref::new("otd_notification_state", OnThisDayNotificationState::NoInteracted);

    // Year in review
    YEAR_IN_REVIEW_ENABLED: ScalarPref<bool> = ScalarPref::new("year_in_review_is_enabled", false);

    // Recommended reading list
    RECOMMENDED_READING_LIST_ENABLED: ScalarPref<bool> = ScalarPref::new("recommended_reading_list_enabled", false);
    RECOMMENDED_READING_LIST_ARTICLES_NUMBER: ScalarPref<i32> = ScalarPref::new("recommended_reading_list_articles_number", 5);
    RECOMMENDED_READING_LIST_UPDATE_FREQUENCY: EnumPref<ReadingListUpdateFrequency> = EnumPref::new("recommended_reading_list_update_frequency", ReadingListUpdateFrequency::Weekly);
    RECOMMENDED_READING_LIST_SOURCE: EnumPref<RecommendedReadingListSource> = EnumPref::new("recommended_reading_list_source", RecommendedReadingListSource::Interests);
    RECOMMENDED_READING_LIST_INTERESTS: JsonPref<Vec<PageTitle>> = JsonPref::new("recommended_reading_list_interests", Vec::new);
    RECOMMENDED_READING_LIST_SOURCE_TITLES: JsonPref<Vec<SourceWithOffset>> = JsonPref::new("recommended_reading_list_titles_with_offset", Vec::new);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let rows = descriptors();
        let keys: HashSet<&str> = rows.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), rows.len(), "a key is declared twice");
    }

    #[test]
    fn test_parametrized_keys() {
        assert_eq!(last_run_time_key("sync"), "sync-lastrun");
        assert_eq!(
            permission_asked_key("location"),
            "permission_asked_location"
        );
    }

    #[test]
    fn test_descriptors_render_defaults() {
        let rows = descriptors();
        let queue = rows
            .iter()
            .find(|d| d.key == "event_platform_queue_size")
            .unwrap();
        assert_eq!(queue.default, serde_json::json!(128));

        let toolbar = rows
            .iter()
            .find(|d| d.key == "customize_toolbar_order")
            .unwrap();
        assert_eq!(toolbar.default, serde_json::json!([0, 1, 2, 3, 4]));
    }
}
