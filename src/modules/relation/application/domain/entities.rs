use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::user::application::domain::UserId;

/// Kind of edge between two users. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Event,
    Friends,
    Matched,
}

impl RelationType {
    pub const ALL: [RelationType; 3] = [Self::Event, Self::Friends, Self::Matched];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Friends => "friends",
            Self::Matched => "matched",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown relation type: {0}")]
pub struct UnknownRelationType(pub String);

impl FromStr for RelationType {
    type Err = UnknownRelationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownRelationType(s.to_string()))
    }
}

/// Which storage slot of a relation a user occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Low,
    High,
}

impl Endpoint {
    pub fn other(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// An unordered pair of users in storage order: `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalPair {
    low: UserId,
    high: UserId,
}

impl CanonicalPair {
    pub fn of(a: UserId, b: UserId) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    /// The pair for `subject` and `other`, plus the slot `subject` lands in.
    pub fn locate(subject: UserId, other: UserId) -> (Self, Endpoint) {
        let pair = Self::of(subject, other);
        let endpoint = if pair.low == subject {
            Endpoint::Low
        } else {
            Endpoint::High
        };
        (pair, endpoint)
    }

    pub fn low(&self) -> UserId {
        self.low
    }

    pub fn high(&self) -> UserId {
        self.high
    }

    pub fn user_at(&self, endpoint: Endpoint) -> UserId {
        match endpoint {
            Endpoint::Low => self.low,
            Endpoint::High => self.high,
        }
    }

    /// Slot held by `user`, or `None` if the user is not part of the pair.
    /// A user paired with itself is reported in the low slot.
    pub fn endpoint_of(&self, user: UserId) -> Option<Endpoint> {
        if user == self.low {
            Some(Endpoint::Low)
        } else if user == self.high {
            Some(Endpoint::High)
        } else {
            None
        }
    }

    /// The participant that is not `user`.
    pub fn other_than(&self, user: UserId) -> Option<UserId> {
        self.endpoint_of(user)
            .map(|endpoint| self.user_at(endpoint.other()))
    }
}

/// A relation about to be written.
///
/// Fields name the slots the caller intends; [`NewRelation::canonicalize`]
/// must run before the value reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRelation {
    pub relation_type: RelationType,
    pub user_id_low: UserId,
    pub user_id_high: UserId,
    pub blocked_low: bool,
    pub blocked_high: bool,
}

impl NewRelation {
    pub fn between(relation_type: RelationType, low: UserId, high: UserId) -> Self {
        Self {
            relation_type,
            user_id_low: low,
            user_id_high: high,
            blocked_low: false,
            blocked_high: false,
        }
    }

    /// Order the ids so `user_id_low <= user_id_high`. Blocked flags travel
    /// with their user.
    pub fn canonicalize(self) -> Self {
        if self.user_id_high < self.user_id_low {
            Self {
                relation_type: self.relation_type,
                user_id_low: self.user_id_high,
                user_id_high: self.user_id_low,
                blocked_low: self.blocked_high,
                blocked_high: self.blocked_low,
            }
        } else {
            self
        }
    }

    pub fn pair(&self) -> CanonicalPair {
        CanonicalPair::of(self.user_id_low, self.user_id_high)
    }
}

/// A stored relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: i32,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    pub user_id_low: UserId,
    pub user_id_high: UserId,
    pub blocked_low: bool,
    pub blocked_high: bool,
}

impl RelationRecord {
    pub fn pair(&self) -> CanonicalPair {
        CanonicalPair::of(self.user_id_low, self.user_id_high)
    }

    /// Either side having blocked the other.
    pub fn is_blocked(&self) -> bool {
        self.blocked_low || self.blocked_high
    }

    pub fn blocked_by(&self, endpoint: Endpoint) -> bool {
        match endpoint {
            Endpoint::Low => self.blocked_low,
            Endpoint::High => self.blocked_high,
        }
    }
}
