use crate::{InternetTime, LOCAL_DATE_CENTIBEATS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// values are written as `2025-12-31 @234.56`, which parses back exactly

impl Serialize for InternetTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self
            .format(&LOCAL_DATE_CENTIBEATS)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for InternetTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        InternetTime::parse(&text, &LOCAL_DATE_CENTIBEATS).map_err(serde::de::Error::custom)
    }
}
