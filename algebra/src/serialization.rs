use crate::prelude::*;

/// Helper trait to serialize field elements, group elements and proofs that have a canonical byte form
pub trait VerkleFromToBytes: Sized {
    /// convert to bytes
    fn verkle_to_bytes(&self) -> Vec<u8>;
    /// reconstruct from bytes
    fn verkle_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Implement serde for a type that implements `VerkleFromToBytes`.
///
/// Human readable formats get a url-safe base64 string, binary formats get the raw bytes.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl ::serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use $crate::serialization::VerkleFromToBytes;
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&self.verkle_to_bytes()))
                } else {
                    serializer.serialize_bytes(&self.verkle_to_bytes())
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use $crate::serialization::VerkleFromToBytes;
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::obj_serde::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::obj_serde::BytesVisitor)?
                };
                $t::verkle_from_bytes(bytes.as_slice()).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Serde visitors shared by everything that goes through `serialize_deserialize!`.
pub mod obj_serde {
    use crate::prelude::*;
    use serde::de::{SeqAccess, Visitor};

    /// Collects bytes from a byte buffer, a sequence, or a base64 string.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
            formatter.write_str("a valid VerkleFromTo object")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = vec![];
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            b64dec(v).map_err(serde::de::Error::custom)
        }
    }
}
