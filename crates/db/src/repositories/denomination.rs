//! Denomination catalog repository.

use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use rano_core::denomination::{Denomination, DenominationCatalog, DenominationKind};
use rano_shared::{error::AppError, types::DenominationId};

use crate::entities::{denominations, sea_orm_active_enums};

/// Read-only access to the seeded denomination catalog.
#[derive(Debug, Clone)]
pub struct DenominationRepository {
    db: DatabaseConnection,
}

impl DenominationRepository {
    /// Creates a new denomination repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the active catalog, in counting-sheet order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn catalog(&self) -> Result<DenominationCatalog, AppError> {
        catalog_on(&self.db)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// Loads the active catalog on an arbitrary connection, so repositories
/// holding a transaction can validate counts inside it.
pub(crate) async fn catalog_on<C: ConnectionTrait>(
    conn: &C,
) -> Result<DenominationCatalog, sea_orm::DbErr> {
    let rows = denominations::Entity::find()
        .filter(denominations::Column::IsActive.eq(true))
        .order_by_asc(denominations::Column::DisplayOrder)
        .all(conn)
        .await?;

    let entries = rows
        .into_iter()
        .map(|row| Denomination {
            id: DenominationId::from_uuid(row.id),
            value: row.value,
            kind: db_kind_to_core(&row.kind),
        })
        .collect();

    Ok(DenominationCatalog::new(entries))
}

/// Converts database `DenominationKind` to the core enum.
pub(crate) fn db_kind_to_core(
    kind: &sea_orm_active_enums::DenominationKind,
) -> DenominationKind {
    match kind {
        sea_orm_active_enums::DenominationKind::Banknote => DenominationKind::Banknote,
        sea_orm_active_enums::DenominationKind::Coin => DenominationKind::Coin,
    }
}

/// Converts the core `DenominationKind` to the database enum.
pub(crate) fn core_kind_to_db(kind: DenominationKind) -> sea_orm_active_enums::DenominationKind {
    match kind {
        DenominationKind::Banknote => sea_orm_active_enums::DenominationKind::Banknote,
        DenominationKind::Coin => sea_orm_active_enums::DenominationKind::Coin,
    }
}
