use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::modules::relation::application::domain::{
    CanonicalPair, Endpoint, NewRelation, RelationRecord,
};
use crate::modules::relation::application::ports::outgoing::{
    RelationRepository, RelationRepositoryError,
};
use crate::modules::user::application::domain::UserId;
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::{
    ActiveModel as RelationActiveModel, Column as RelationColumn, Entity as RelationEntity,
};

#[derive(Clone, Debug)]
pub struct RelationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RelationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active(relation: NewRelation) -> RelationActiveModel {
        RelationActiveModel {
            id: NotSet,
            kind: Set(relation.relation_type.into()),
            user_id_low: Set(relation.user_id_low.value()),
            user_id_high: Set(relation.user_id_high.value()),
            blocked_low: Set(relation.blocked_low),
            blocked_high: Set(relation.blocked_high),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

fn database_error(e: DbErr) -> RelationRepositoryError {
    RelationRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl RelationRepository for RelationRepositoryPostgres {
    async fn create_relation(
        &self,
        relation: NewRelation,
    ) -> Result<RelationRecord, RelationRepositoryError> {
        let relation = relation.canonicalize();

        let model = Self::to_active(relation)
            .insert(&*self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!(
                        low = %relation.user_id_low,
                        high = %relation.user_id_high,
                        "relation already exists"
                    );
                    RelationRepositoryError::RelationAlreadyExists
                } else {
                    database_error(e)
                }
            })?;

        info!(
            id = model.id,
            kind = %relation.relation_type,
            low = model.user_id_low,
            high = model.user_id_high,
            "relation created"
        );
        Ok(model.to_record())
    }

    async fn upsert_relation(
        &self,
        relation: NewRelation,
    ) -> Result<RelationRecord, RelationRepositoryError> {
        // Entity::insert skips the insert hook; order the pair here
        let relation = relation.canonicalize();

        let model = RelationEntity::insert(Self::to_active(relation))
            .on_conflict(
                OnConflict::columns([RelationColumn::UserIdLow, RelationColumn::UserIdHigh])
                    .update_columns([RelationColumn::Kind, RelationColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(database_error)?;

        info!(
            id = model.id,
            kind = %relation.relation_type,
            low = model.user_id_low,
            high = model.user_id_high,
            "relation upserted"
        );
        Ok(model.to_record())
    }

    async fn block(
        &self,
        blocker: UserId,
        target: UserId,
    ) -> Result<RelationRecord, RelationRepositoryError> {
        let (pair, endpoint) = CanonicalPair::locate(blocker, target);

        let row = RelationEntity::find()
            .filter(RelationColumn::UserIdLow.eq(pair.low().value()))
            .filter(RelationColumn::UserIdHigh.eq(pair.high().value()))
            .one(&*self.db)
            .await
            .map_err(database_error)?
            .ok_or(RelationRepositoryError::RelationNotFound)?;

        let record = row.to_record();
        if record.blocked_by(endpoint) {
            debug!(%blocker, %target, "relation already blocked");
            return Ok(record);
        }

        let mut active: RelationActiveModel = row.into();
        match endpoint {
            Endpoint::Low => active.blocked_low = Set(true),
            Endpoint::High => active.blocked_high = Set(true),
        }

        let updated = active.update(&*self.db).await.map_err(database_error)?;

        info!(%blocker, %target, id = updated.id, "relation blocked");
        Ok(updated.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::relation::adapter::outgoing::sea_orm_entity::{
        Model as RelationModel, RelationKind,
    };
    use crate::modules::relation::application::domain::RelationType;
    use crate::tests::support::fixtures::relation_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr, Statement, Value};

    fn uid(id: i32) -> UserId {
        UserId::from(id)
    }

    fn first_statement(db: Arc<DatabaseConnection>) -> Statement {
        let db = Arc::try_unwrap(db).unwrap();
        let log = db.into_transaction_log();

        log[0].statements()[0].clone()
    }

    fn bound_ints(statement: &Statement) -> Vec<i32> {
        statement
            .values
            .as_ref()
            .unwrap()
            .0
            .iter()
            .filter_map(|v| match v {
                Value::Int(Some(i)) => Some(*i),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_create_relation_stores_canonical_pair() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![relation_model(
                1,
                RelationKind::Friends,
                5,
                9,
                false,
                false,
            )]])
            .into_connection();
        let db = Arc::new(db);

        let repo = RelationRepositoryPostgres::new(db.clone());

        let record = repo
            .create_relation(NewRelation::between(RelationType::Friends, uid(9), uid(5)))
            .await
            .unwrap();

        assert_eq!(record.user_id_low, uid(5));
        assert_eq!(record.user_id_high, uid(9));

        drop(repo);
        // Low slot receives the smaller id
        assert_eq!(bound_ints(&first_statement(db)), vec![5, 9]);
    }

    #[tokio::test]
    async fn test_create_relation_duplicate_pair() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"user_id_low_user_id_high\""
                    .into(),
            ))])
            .into_connection();

        let repo = RelationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_relation(NewRelation::between(RelationType::Matched, uid(5), uid(9)))
            .await;

        assert!(matches!(
            result,
            Err(RelationRepositoryError::RelationAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_create_relation_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let repo = RelationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_relation(NewRelation::between(RelationType::Event, uid(1), uid(2)))
            .await;

        assert!(matches!(
            result,
            Err(RelationRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_upsert_relation_updates_type_on_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![relation_model(
                3,
                RelationKind::Matched,
                5,
                9,
                true,
                false,
            )]])
            .into_connection();
        let db = Arc::new(db);

        let repo = RelationRepositoryPostgres::new(db.clone());

        let record = repo
            .upsert_relation(NewRelation::between(RelationType::Matched, uid(9), uid(5)))
            .await
            .unwrap();

        assert_eq!(record.relation_type, RelationType::Matched);

        drop(repo);
        let statement = first_statement(db);
        assert_eq!(bound_ints(&statement), vec![5, 9]);

        // Only the type and timestamp are overwritten; blocked flags keep their stored value
        let sql = &statement.sql;
        assert!(
            sql.contains(
                r#"ON CONFLICT ("user_id_low", "user_id_high") DO UPDATE SET "type" = "excluded"."type", "updated_at" = "excluded"."updated_at""#
            ),
            "{sql}"
        );
        let update_set = sql
            .split("DO UPDATE SET")
            .nth(1)
            .and_then(|rest| rest.split("RETURNING").next())
            .unwrap();
        assert!(!update_set.contains("blocked_"), "{sql}");
    }

    #[tokio::test]
    async fn test_block_sets_blocker_flag() {
        let existing = relation_model(1, RelationKind::Friends, 5, 9, false, false);
        let updated = relation_model(1, RelationKind::Friends, 5, 9, false, true);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repo = RelationRepositoryPostgres::new(Arc::new(db));

        // user 9 holds the high slot
        let record = repo.block(uid(9), uid(5)).await.unwrap();

        assert!(record.blocked_high);
        assert!(!record.blocked_low);
    }

    #[tokio::test]
    async fn test_block_already_blocked_skips_write() {
        // Only the lookup is mocked: an update would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![relation_model(
                1,
                RelationKind::Friends,
                5,
                9,
                true,
                false,
            )]])
            .into_connection();

        let repo = RelationRepositoryPostgres::new(Arc::new(db));

        let record = repo.block(uid(5), uid(9)).await.unwrap();

        assert!(record.blocked_low);
    }

    #[tokio::test]
    async fn test_block_missing_relation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<RelationModel>::new()])
            .into_connection();

        let repo = RelationRepositoryPostgres::new(Arc::new(db));

        let result = repo.block(uid(5), uid(9)).await;

        assert!(matches!(
            result,
            Err(RelationRepositoryError::RelationNotFound)
        ));
    }
}
