//! Serde helpers for the `-1`-means-unset convention on the wire.
//!
//! Remote consumers already parse `-1` as "not configured" for the numeric
//! system-rule thresholds. The Rust model uses `Option` instead; these
//! modules keep the wire format stable: `None` serializes as `-1`, and an
//! incoming `-1` (or JSON null) deserializes back to `None`. Any other
//! negative value is preserved so validation can reject it.

pub mod f64_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const UNSET: f64 = -1.0;

    pub fn serialize<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(v.unwrap_or(UNSET))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let v = Option::<f64>::deserialize(d)?;
        Ok(v.filter(|x| *x != UNSET))
    }
}

pub mod i64_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const UNSET: i64 = -1;

    pub fn serialize<S: Serializer>(v: &Option<i64>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(v.unwrap_or(UNSET))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let v = Option::<i64>::deserialize(d)?;
        Ok(v.filter(|x| *x != UNSET))
    }
}
