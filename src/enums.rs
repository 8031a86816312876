//! Enumerations persisted by variant name

/// An enum stored as its variant name
///
/// Unknown names decode to `None`, which the facade replaces with the
/// preference's default.
pub trait PrefEnum: Copy + 'static {
    fn as_str(&self) -> &'static str;

    fn from_str(s: &str) -> Option<Self>;
}

macro_rules! pref_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl PrefEnum for $name {
            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pref_enum! {
    /// Verbosity of HTTP request logging
    pub enum HttpLogLevel {
        None => "NONE",
        Basic => "BASIC",
        Headers => "HEADERS",
        Body => "BODY",
    }
}

pref_enum! {
    pub enum OnThisDayNotificationState {
        NoInteracted => "NO_INTERACTED",
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

pref_enum! {
    pub enum ReadingListUpdateFrequency {
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
    }
}

pref_enum! {
    pub enum RecommendedReadingListSource {
        Interests => "INTERESTS",
        ReadingLists => "READING_LISTS",
        History => "HISTORY",
    }
}

pref_enum! {
    /// Actions that can sit on the page toolbar or in its overflow menu,
    /// in enumeration order
    pub enum PageAction {
        Save => "SAVE",
        Language => "LANGUAGE",
        FindInArticle => "FIND_IN_ARTICLE",
        Theme => "THEME",
        Contents => "CONTENTS",
        Share => "SHARE",
        AddToWatchlist => "ADD_TO_WATCHLIST",
        ViewTalkPage => "VIEW_TALK_PAGE",
        ViewEditHistory => "VIEW_EDIT_HISTORY",
        NewTab => "NEW_TAB",
        ExploreFeed => "EXPLORE_FEED",
        Categories => "CATEGORIES",
        EditArticle => "EDIT_ARTICLE",
    }
}

impl PageAction {
    /// Stable numeric code used in stored orderings
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn default_toolbar() -> Vec<i32> {
        [
            PageAction::Save,
            PageAction::Language,
            PageAction::FindInArticle,
            PageAction::Theme,
            PageAction::Contents,
        ]
        .iter()
        .map(|a| a.code())
        .collect()
    }

    pub fn default_overflow_menu() -> Vec<i32> {
        [
            PageAction::AddToWatchlist,
            PageAction::ViewTalkPage,
            PageAction::ViewEditHistory,
            PageAction::NewTab,
            PageAction::Share,
            PageAction::ExploreFeed,
            PageAction::Categories,
            PageAction::EditArticle,
        ]
        .iter()
        .map(|a| a.code())
        .collect()
    }
}
