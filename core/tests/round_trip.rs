//! End-to-end ETL tests — import, insert, and read back.

use invest_core::importer::{import_rows, ImportOptions};
use invest_core::model::{NewAsset, NewInvestment, NewInvestor};
use invest_core::store::InvestStore;
use std::io::Write;

/// A record that passes through the full path keeps its values: what
/// the importer produced is what a later query-by-id returns.
#[test]
fn imported_records_round_trip_through_the_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = dir.path().join("investors.csv");
    let mut file = std::fs::File::create(&source).unwrap();
    writeln!(file, "Ana,ana@x.com,+1-555-0101").unwrap();
    writeln!(file, "Bo,bo@x.com,+1-555-0102").unwrap();
    drop(file);

    let store = InvestStore::in_memory().unwrap();
    store.ensure_schema().unwrap();

    let mut ids = Vec::new();
    for record in import_rows(&source, ImportOptions::default()).unwrap() {
        let record = record.unwrap();
        ids.push((store.insert_investor(&record).unwrap(), record));
    }
    assert_eq!(ids.len(), 2);

    for (id, expected) in &ids {
        let stored = store.get_investor(*id).unwrap().unwrap();
        assert_eq!(stored.name, expected.name);
        assert_eq!(stored.email, expected.email);
        assert_eq!(stored.phone_number, expected.phone_number);
    }

    // Ids are unique and rows come back in insert order.
    let all = store.all_investors().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
    assert_eq!(all[0].name, "Ana");
    assert_eq!(all[1].name, "Bo");
}

#[test]
fn investment_links_an_investor_to_an_asset() {
    let store = InvestStore::in_memory().unwrap();
    store.ensure_schema().unwrap();

    let ana = NewInvestor::new("Ana", "ana@x.com", "+1-555-0101").unwrap();
    let investor_id = store.insert_investor(&ana).unwrap();

    let fund = NewAsset::new("Solar Fund", "infrastructure", 200, 0.07).unwrap();
    let asset_id = store.insert_asset(&fund).unwrap();
    let stored_fund = store.get_asset(asset_id).unwrap().unwrap();
    assert_eq!(stored_fund.asset_name, "Solar Fund");
    assert_eq!(stored_fund.total_slots, 200);
    assert_eq!(store.asset_count().unwrap(), 1);

    let stake = NewInvestment::new(investor_id, asset_id, 2_500.0).unwrap();
    let investment_id = store.insert_investment(&stake).unwrap();

    let stored = store.get_investment(investment_id).unwrap().unwrap();
    assert_eq!(stored.investor_id, investor_id);
    assert_eq!(stored.asset_id, asset_id);
    assert_eq!(stored.invested_amount, 2_500.0);

    let for_ana = store.investments_for_investor(investor_id).unwrap();
    assert_eq!(for_ana.len(), 1);
    assert_eq!(for_ana[0].id, investment_id);
}

/// Foreign keys reject an investment whose investor or asset id does
/// not exist.
#[test]
fn dangling_investment_references_are_rejected() {
    let store = InvestStore::in_memory().unwrap();
    store.ensure_schema().unwrap();

    let stake = NewInvestment::new(999, 999, 100.0).unwrap();
    let err = store.insert_investment(&stake);
    assert!(err.is_err(), "insert with dangling ids must fail");

    let ana = NewInvestor::new("Ana", "ana@x.com", "+1-555-0101").unwrap();
    let investor_id = store.insert_investor(&ana).unwrap();

    // Valid investor, dangling asset: still rejected.
    let stake = NewInvestment::new(investor_id, 999, 100.0).unwrap();
    assert!(store.insert_investment(&stake).is_err());

    assert_eq!(store.investment_count().unwrap(), 0);
}
