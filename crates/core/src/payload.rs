//! Fixed-shape response payloads.
//!
//! Every value here is mocked. Nothing is derived from the request beyond the
//! resource kind that was asked for.

use serde::Serialize;

/// Which mock resource an endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Weather,
    StockPrice,
    HeartRate,
}

impl ResourceKind {
    /// Path segment the resource is served under (without leading slash).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Weather => "weather",
            ResourceKind::StockPrice => "stockPrice",
            ResourceKind::HeartRate => "heartRate",
        }
    }

    pub const fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::Weather,
            ResourceKind::StockPrice,
            ResourceKind::HeartRate,
        ]
    }
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weather {
    pub temperature: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockPrice {
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeartRate {
    pub heart_rate: u32,
}

/// One of the three response bodies, serialized without a tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Weather(Weather),
    StockPrice(StockPrice),
    HeartRate(HeartRate),
}

impl Payload {
    /// Constant payload for `kind`.
    pub fn mocked(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Weather => Payload::Weather(Weather {
                temperature: 72.01,
                wind_speed: 14.11,
            }),
            ResourceKind::StockPrice => Payload::StockPrice(StockPrice { price: 148.72 }),
            ResourceKind::HeartRate => Payload::HeartRate(HeartRate { heart_rate: 72 }),
        }
    }
}
