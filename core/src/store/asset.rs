use super::InvestStore;
use crate::error::EtlResult;
use crate::model::{Asset, NewAsset, RecordId};
use rusqlite::{params, OptionalExtension};

impl InvestStore {
    /// Insert a validated asset. Returns the assigned id.
    pub fn insert_asset(&self, asset: &NewAsset) -> EtlResult<RecordId> {
        self.conn.execute(
            "INSERT INTO Assets (asset_name, asset_type, total_slots, annual_return)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                asset.asset_name,
                asset.asset_type,
                asset.total_slots,
                asset.annual_return
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_asset(&self, id: RecordId) -> EtlResult<Option<Asset>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, asset_name, asset_type, total_slots, annual_return
             FROM Assets WHERE id = ?1",
        )?;
        let row = stmt
            .query_row(params![id], |r| {
                Ok(Asset {
                    id: r.get(0)?,
                    asset_name: r.get(1)?,
                    asset_type: r.get(2)?,
                    total_slots: r.get(3)?,
                    annual_return: r.get(4)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    pub fn asset_count(&self) -> EtlResult<i64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Assets", [], |r| r.get(0))?;
        Ok(n)
    }
}
