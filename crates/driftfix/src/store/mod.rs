//! Preference store abstraction and backends.
//!
//! The engine only ever talks to a store through [`PreferenceStore`]: typed
//! reads with a caller-supplied fallback and typed writes, always by key. It
//! never enumerates keys.
//!
//! Both shipped backends keep every value as text, the way platform
//! preference registries do. A typed read of text that does not parse as the
//! requested type yields the fallback.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::value::Value;

/// Typed get-with-default / put access to a key-value preference backend.
pub trait PreferenceStore {
    fn get_int(&self, key: &str, default: i64) -> Result<i64>;
    fn get_double(&self, key: &str, default: f64) -> Result<f64>;
    fn get_float(&self, key: &str, default: f32) -> Result<f32>;
    fn get_bool(&self, key: &str, default: bool) -> Result<bool>;
    fn get_string(&self, key: &str, default: &str) -> Result<String>;

    fn put_int(&mut self, key: &str, value: i64) -> Result<()>;
    fn put_double(&mut self, key: &str, value: f64) -> Result<()>;
    fn put_float(&mut self, key: &str, value: f32) -> Result<()>;
    fn put_bool(&mut self, key: &str, value: bool) -> Result<()>;
    fn put_string(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read `key` as the kind of `default`, falling back to `default`.
pub fn read<S: PreferenceStore + ?Sized>(store: &S, key: &str, default: &Value) -> Result<Value> {
    Ok(match default {
        Value::Int(d) => Value::Int(store.get_int(key, *d)?),
        Value::Double(d) => Value::Double(store.get_double(key, *d)?),
        Value::Float(d) => Value::Float(store.get_float(key, *d)?),
        Value::Boolean(d) => Value::Boolean(store.get_bool(key, *d)?),
        Value::String(d) => Value::String(store.get_string(key, d)?),
    })
}

/// Write `value` under `key` using the store operation for its kind.
pub fn write<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &Value) -> Result<()> {
    match value {
        Value::Int(v) => store.put_int(key, *v),
        Value::Double(v) => store.put_double(key, *v),
        Value::Float(v) => store.put_float(key, *v),
        Value::Boolean(v) => store.put_bool(key, *v),
        Value::String(v) => store.put_string(key, v),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
