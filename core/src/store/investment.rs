use super::InvestStore;
use crate::error::EtlResult;
use crate::model::{Investment, NewInvestment, RecordId};
use rusqlite::{params, OptionalExtension};

impl InvestStore {
    /// Insert a validated investment. Returns the assigned id.
    ///
    /// Fails with a storage error if investor_id or asset_id does not
    /// reference an existing row — the schema's foreign keys enforce
    /// referential integrity, the store does not pre-check.
    pub fn insert_investment(&self, investment: &NewInvestment) -> EtlResult<RecordId> {
        self.conn.execute(
            "INSERT INTO Investments (investor_id, asset_id, invested_amount)
             VALUES (?1, ?2, ?3)",
            params![
                investment.investor_id,
                investment.asset_id,
                investment.invested_amount
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_investment(&self, id: RecordId) -> EtlResult<Option<Investment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, investor_id, asset_id, invested_amount
             FROM Investments WHERE id = ?1",
        )?;
        let row = stmt
            .query_row(params![id], |r| {
                Ok(Investment {
                    id: r.get(0)?,
                    investor_id: r.get(1)?,
                    asset_id: r.get(2)?,
                    invested_amount: r.get(3)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    pub fn investments_for_investor(&self, investor_id: RecordId) -> EtlResult<Vec<Investment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, investor_id, asset_id, invested_amount
             FROM Investments WHERE investor_id = ?1
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(params![investor_id], |r| {
            Ok(Investment {
                id: r.get(0)?,
                investor_id: r.get(1)?,
                asset_id: r.get(2)?,
                invested_amount: r.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn investment_count(&self) -> EtlResult<i64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Investments", [], |r| r.get(0))?;
        Ok(n)
    }
}
