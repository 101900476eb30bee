use super::InvestStore;
use crate::error::EtlResult;
use crate::model::{Investor, NewInvestor, RecordId};
use rusqlite::{params, OptionalExtension};

impl InvestStore {
    /// Insert a validated investor row. Returns the assigned id.
    pub fn insert_investor(&self, investor: &NewInvestor) -> EtlResult<RecordId> {
        self.conn.execute(
            "INSERT INTO Investors (name, email, phone_number) VALUES (?1, ?2, ?3)",
            params![investor.name, investor.email, investor.phone_number],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_investor(&self, id: RecordId) -> EtlResult<Option<Investor>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, phone_number FROM Investors WHERE id = ?1",
        )?;
        let row = stmt
            .query_row(params![id], |r| {
                Ok(Investor {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    email: r.get(2)?,
                    phone_number: r.get(3)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    pub fn all_investors(&self) -> EtlResult<Vec<Investor>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, phone_number FROM Investors ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok(Investor {
                id: r.get(0)?,
                name: r.get(1)?,
                email: r.get(2)?,
                phone_number: r.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn investor_count(&self) -> EtlResult<i64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Investors", [], |r| r.get(0))?;
        Ok(n)
    }
}
