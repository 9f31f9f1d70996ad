//! Load debt portfolios from CSV files

use super::Debt;
use csv::Reader;
use std::io::Read;
use std::path::Path;

/// Default portfolio location relative to the working directory
pub const DEFAULT_PORTFOLIO_PATH: &str = "data/debts.csv";

/// Raw CSV row matching the portfolio file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "MinPayment")]
    min_payment: f64,
}

impl CsvRow {
    fn into_debt(self) -> Debt {
        Debt {
            id: self.id,
            name: self.name,
            category: self.category,
            balance: self.balance,
            annual_rate_pct: self.rate,
            min_payment: self.min_payment,
        }
    }
}

/// Load all debts from a CSV file
///
/// A malformed numeric field is reported as a deserialization error rather
/// than being coerced to zero.
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, csv::Error> {
    let mut reader = Reader::from_path(path)?;
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.into_debt());
    }

    Ok(debts)
}

/// Load debts from any reader (e.g., string buffer, network stream)
pub fn load_debts_from_reader<R: Read>(reader: R) -> Result<Vec<Debt>, csv::Error> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.into_debt());
    }

    Ok(debts)
}

/// Load debts from the default portfolio location
pub fn load_default_portfolio() -> Result<Vec<Debt>, csv::Error> {
    load_debts(DEFAULT_PORTFOLIO_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Id,Name,Category,Balance,Rate,MinPayment
1,Visa Platinum,Credit Card,4200.00,22.99,95.00
2,Car Loan,Auto,11800.00,6.49,310.00
3,Store Card,Credit Card,860.00,26.99,35.00
";

    #[test]
    fn test_load_from_reader() {
        let debts = load_debts_from_reader(SAMPLE.as_bytes()).expect("Failed to parse portfolio");
        assert_eq!(debts.len(), 3);

        let first = &debts[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Visa Platinum");
        assert_eq!(first.category, "Credit Card");
        assert_eq!(first.balance, 4200.0);
        assert_eq!(first.annual_rate_pct, 22.99);
        assert_eq!(first.min_payment, 95.0);
    }

    #[test]
    fn test_malformed_numeric_is_an_error() {
        let bad = "Id,Name,Category,Balance,Rate,MinPayment\n1,Visa,Credit Card,abc,22.99,95.00\n";
        assert!(load_debts_from_reader(bad.as_bytes()).is_err());
    }
}
