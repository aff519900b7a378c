//! Caller-supplied strategy configuration.
//!
//! Options are a keyed record holding `calculate_revenue` and `calculate_bonus`.
//! Members are usually strategies, but a record decoded from configuration data
//! may hold arbitrary JSON values in their place, and the options themselves may
//! arrive as a bare JSON scalar. Both shapes are representable so validation can
//! tell a missing strategy from a value of the wrong kind.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use sr_algo::{BonusByProfit, BonusStrategy, RevenueStrategy, SimpleRevenue};

/// Record key of the revenue strategy.
pub const CALCULATE_REVENUE: &str = "calculate_revenue";
/// Record key of the bonus strategy.
pub const CALCULATE_BONUS: &str = "calculate_bonus";

/// One member of the options record.
#[derive(Clone)]
pub enum OptionMember {
    Revenue(Arc<dyn RevenueStrategy>),
    Bonus(Arc<dyn BonusStrategy>),
    /// Plain data where a strategy was expected.
    Value(Value),
}

impl OptionMember {
    /// Strategies are always truthy; values follow JSON truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionMember::Revenue(_) | OptionMember::Bonus(_) => true,
            OptionMember::Value(v) => is_truthy(v),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            OptionMember::Revenue(_) => "revenue strategy",
            OptionMember::Bonus(_) => "bonus strategy",
            OptionMember::Value(_) => "value",
        }
    }
}

impl fmt::Debug for OptionMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionMember::Value(v) => f.debug_tuple("Value").field(v).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

/// Strategy configuration for one analysis call.
#[derive(Clone, Debug)]
pub enum AnalysisOptions {
    Record(BTreeMap<String, OptionMember>),
    /// A non-record value supplied as options.
    Scalar(Value),
}

impl AnalysisOptions {
    pub fn new<R, B>(revenue: R, bonus: B) -> Self
    where
        R: RevenueStrategy + 'static,
        B: BonusStrategy + 'static,
    {
        Self::from_arcs(Arc::new(revenue), Arc::new(bonus))
    }

    pub fn from_arcs(revenue: Arc<dyn RevenueStrategy>, bonus: Arc<dyn BonusStrategy>) -> Self {
        let mut members = BTreeMap::new();
        members.insert(CALCULATE_REVENUE.to_string(), OptionMember::Revenue(revenue));
        members.insert(CALCULATE_BONUS.to_string(), OptionMember::Bonus(bonus));
        AnalysisOptions::Record(members)
    }

    /// `SimpleRevenue` + `BonusByProfit`.
    pub fn reference() -> Self {
        Self::new(SimpleRevenue, BonusByProfit)
    }

    /// An empty record.
    pub fn empty() -> Self {
        AnalysisOptions::Record(BTreeMap::new())
    }

    /// Set (or replace) a record member. Scalars become a record first.
    pub fn with_member(self, key: impl Into<String>, member: OptionMember) -> Self {
        let mut members = match self {
            AnalysisOptions::Record(m) => m,
            AnalysisOptions::Scalar(_) => BTreeMap::new(),
        };
        members.insert(key.into(), member);
        AnalysisOptions::Record(members)
    }

    /// Remove a record member; no-op for scalars.
    pub fn without_member(mut self, key: &str) -> Self {
        if let AnalysisOptions::Record(m) = &mut self {
            m.remove(key);
        }
        self
    }

    pub fn member(&self, key: &str) -> Option<&OptionMember> {
        match self {
            AnalysisOptions::Record(m) => m.get(key),
            AnalysisOptions::Scalar(_) => None,
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::reference()
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
