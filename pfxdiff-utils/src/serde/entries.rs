//! (De-)serialize maps with non-string keys as a sequence of `{key, val}` entries.
//!
//! JSON objects only allow string keys. Use this module with `#[serde(with = "...")]` on any
//! map type that can be iterated by reference and collected from `(K, V)` pairs, e.g.,
//! `HashMap<(Window, IpVersion), Results>`.
//!
//! Based on <https://github.com/serde-rs/json/issues/456>

use std::marker::PhantomData;

use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

#[derive(Serialize)]
struct EntryRef<'a, K, V> {
    key: &'a K,
    val: &'a V,
}

#[derive(Deserialize)]
struct Entry<K, V> {
    key: K,
    val: V,
}

/// Serialize the map as a sequence of entries, in the iteration order of the map.
pub fn serialize<'a, M, K, V, S>(map: &'a M, serializer: S) -> Result<S::Ok, S::Error>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Serialize + 'a,
    V: Serialize + 'a,
    S: Serializer,
{
    serializer.collect_seq(map.into_iter().map(|(key, val)| EntryRef { key, val }))
}

/// Deserialize a sequence of entries into any map type. Later entries overwrite earlier ones with
/// the same key.
pub fn deserialize<'de, M, K, V, D>(deserializer: D) -> Result<M, D::Error>
where
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    struct EntriesVisitor<M, K, V>(PhantomData<(M, K, V)>);

    impl<'de, M, K, V> Visitor<'de> for EntriesVisitor<M, K, V>
    where
        M: FromIterator<(K, V)>,
        K: Deserialize<'de>,
        V: Deserialize<'de>,
    {
        type Value = M;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a sequence of {key, val} entries")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<M, A::Error> {
            let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Entry { key, val }) = seq.next_element::<Entry<K, V>>()? {
                entries.push((key, val));
            }
            Ok(entries.into_iter().collect())
        }
    }

    deserializer.deserialize_seq(EntriesVisitor(PhantomData))
}
