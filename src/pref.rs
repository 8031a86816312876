//! Typed preference descriptors
//!
//! A descriptor pairs a stable key with its value type and default. They are
//! declared as `const` items in [`catalog`](crate::catalog) and passed to the
//! generic accessors on [`Prefs`](crate::Prefs).

use crate::codec::decode_json;
use crate::enums::PrefEnum;
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::types::PrefKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// A value type that maps directly onto a store primitive
pub trait Scalar: Serialize + Sized {
    /// How the default is spelled in a `const` descriptor
    type Default: Copy;

    const KIND: PrefKind;

    fn read(store: &dyn KeyValueStore, key: &str, default: Self::Default) -> Self;

    fn write(store: &dyn KeyValueStore, key: &str, value: Self) -> Result<()>;

    fn describe_default(default: Self::Default) -> serde_json::Value;
}

impl Scalar for bool {
    type Default = bool;
    const KIND: PrefKind = PrefKind::Bool;

    fn read(store: &dyn KeyValueStore, key: &str, default: bool) -> Self {
        store.get_boolean(key, default)
    }

    fn write(store: &dyn KeyValueStore, key: &str, value: Self) -> Result<()> {
        store.set_boolean(key, value)
    }

    fn describe_default(default: bool) -> serde_json::Value {
        default.into()
    }
}

impl Scalar for i32 {
    type Default = i32;
    const KIND: PrefKind = PrefKind::Int;

    fn read(store: &dyn KeyValueStore, key: &str, default: i32) -> Self {
        store.get_int(key, default)
    }

    fn write(store: &dyn KeyValueStore, key: &str, value: Self) -> Result<()> {
        store.set_int(key, value)
    }

    fn describe_default(default: i32) -> serde_json::Value {
        default.into()
    }
}

impl Scalar for i64 {
    type Default = i64;
    const KIND: PrefKind = PrefKind::Long;

    fn read(store: &dyn KeyValueStore, key: &str, default: i64) -> Self {
        store.get_long(key, default)
    }

    fn write(store: &dyn KeyValueStore, key: &str, value: Self) -> Result<()> {
        store.set_long(key, value)
    }

    fn describe_default(default: i64) -> serde_json::Value {
        default.into()
    }
}

impl Scalar for String {
    type Default = &'static str;
    const KIND: PrefKind = PrefKind::String;

    fn read(store: &dyn KeyValueStore, key: &str, default: &'static str) -> Self {
        store.get_string(key, Some(default)).unwrap_or_default()
    }

    fn write(store: &dyn KeyValueStore, key: &str, value: Self) -> Result<()> {
        store.set_string(key, Some(value.as_str()))
    }

    fn describe_default(default: &'static str) -> serde_json::Value {
        default.into()
    }
}

/// Nullable string; writing `None` removes the key
impl Scalar for Option<String> {
    type Default = Option<&'static str>;
    const KIND: PrefKind = PrefKind::String;

    fn read(store: &dyn KeyValueStore, key: &str, default: Option<&'static str>) -> Self {
        store.get_string(key, default)
    }

    fn write(store: &dyn KeyValueStore, key: &str, value: Self) -> Result<()> {
        store.set_string(key, value.as_deref())
    }

    fn describe_default(default: Option<&'static str>) -> serde_json::Value {
        default.map_or(serde_json::Value::Null, Into::into)
    }
}

/// One row of the settings catalog, for listing
#[derive(Debug, Clone, Serialize)]
pub struct PrefDescriptor {
    pub key: &'static str,
    pub kind: PrefKind,
    pub default: serde_json::Value,
}

/// A scalar setting: key, type and default
pub struct ScalarPref<T: Scalar> {
    pub key: &'static str,
    pub default: T::Default,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Scalar> ScalarPref<T> {
    pub const fn new(key: &'static str, default: T::Default) -> Self {
        Self {
            key,
            default,
            _marker: PhantomData,
        }
    }

    pub fn describe(&self) -> PrefDescriptor {
        PrefDescriptor {
            key: self.key,
            kind: T::KIND,
            default: T::describe_default(self.default),
        }
    }

    /// Stored value, or the default when absent or mismatched
    pub fn read(&self, store: &dyn KeyValueStore) -> T {
        T::read(store, self.key, self.default)
    }

    pub fn write(&self, store: &dyn KeyValueStore, value: T) -> Result<()> {
        T::write(store, self.key, value)
    }

    /// Current value rendered the same way as the catalog default
    pub fn read_value(&self, store: &dyn KeyValueStore) -> serde_json::Value {
        serde_json::to_value(self.read(store)).unwrap_or_default()
    }
}

/// A structured setting stored as JSON text under one key
pub struct JsonPref<T> {
    pub key: &'static str,
    /// Produces the value used when the key is absent or undecodable
    pub fallback: fn() -> T,
}

impl<T> JsonPref<T> {
    pub const fn new(key: &'static str, fallback: fn() -> T) -> Self {
        Self { key, fallback }
    }
}

impl<T: Serialize> JsonPref<T> {
    pub fn describe(&self) -> PrefDescriptor {
        PrefDescriptor {
            key: self.key,
            kind: PrefKind::Json,
            default: serde_json::to_value((self.fallback)()).unwrap_or_default(),
        }
    }
}

impl<T: DeserializeOwned> JsonPref<T> {
    /// Decoded value; absent or undecodable text yields the fallback
    pub fn read(&self, store: &dyn KeyValueStore) -> T {
        decode_json(self.key, store.get_string(self.key, None).as_deref())
            .unwrap_or_else(self.fallback)
    }
}

impl<T: Serialize + DeserializeOwned> JsonPref<T> {
    pub fn read_value(&self, store: &dyn KeyValueStore) -> serde_json::Value {
        serde_json::to_value(self.read(store)).unwrap_or_default()
    }
}

/// A setting stored as an enum variant name
pub struct EnumPref<T: PrefEnum> {
    pub key: &'static str,
    pub default: T,
}

impl<T: PrefEnum> EnumPref<T> {
    pub const fn new(key: &'static str, default: T) -> Self {
        Self { key, default }
    }

    pub fn describe(&self) -> PrefDescriptor {
        PrefDescriptor {
            key: self.key,
            kind: PrefKind::Enum,
            default: self.default.as_str().into(),
        }
    }

    /// Stored variant; unknown names yield the default
    pub fn read(&self, store: &dyn KeyValueStore) -> T {
        match store.get_string(self.key, None) {
            Some(name) => T::from_str(&name).unwrap_or_else(|| {
                log::warn!("Unknown value '{}' for '{}'", name, self.key);
                self.default
            }),
            None => self.default,
        }
    }

    pub fn read_value(&self, store: &dyn KeyValueStore) -> serde_json::Value {
        self.read(store).as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ReadingListUpdateFrequency;

    #[test]
    fn test_scalar_descriptor() {
        const PREF: ScalarPref<i32> = ScalarPref::new("queue_size", 128);
        let row = PREF.describe();
        assert_eq!(row.key, "queue_size");
        assert_eq!(row.kind, PrefKind::Int);
        assert_eq!(row.default, serde_json::json!(128));
    }

    #[test]
    fn test_optional_string_descriptor() {
        const PREF: ScalarPref<Option<String>> = ScalarPref::new("channel", None);
        assert_eq!(PREF.describe().default, serde_json::Value::Null);
    }

    #[test]
    fn test_json_descriptor_renders_fallback() {
        const PREF: JsonPref<Vec<i32>> = JsonPref::new("order", Vec::new);
        let row = PREF.describe();
        assert_eq!(row.kind, PrefKind::Json);
        assert_eq!(row.default, serde_json::json!([]));
    }

    #[test]
    fn test_read_value_matches_default_when_unset() {
        const COUNT: ScalarPref<i32> = ScalarPref::new("queue_size", 128);
        const ORDER: JsonPref<Vec<i32>> = JsonPref::new("order", Vec::new);
        let store = crate::store::MemoryStore::new();
        assert_eq!(COUNT.read_value(&store), COUNT.describe().default);
        assert_eq!(ORDER.read_value(&store), ORDER.describe().default);

        COUNT.write(&store, 7).unwrap();
        assert_eq!(COUNT.read_value(&store), serde_json::json!(7));
    }

    #[test]
    fn test_enum_descriptor() {
        const PREF: EnumPref<ReadingListUpdateFrequency> =
            EnumPref::new("frequency", ReadingListUpdateFrequency::Weekly);
        assert_eq!(PREF.describe().default, serde_json::json!("WEEKLY"));
    }
}
