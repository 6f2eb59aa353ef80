mod entities;

pub use entities::{
    CanonicalPair, Endpoint, NewRelation, RelationRecord, RelationType, UnknownRelationType,
};
