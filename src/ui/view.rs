use super::UiState;
use crate::models::Entry;

pub const MONTHLY_PAGE_VIEWS: f64 = 10_000.0;
/// Cups of tea boiled per kg of CO2.
const TEA_CUPS_PER_KG: f64 = 644.0 / 4.75;
pub const TREES_PER_YEAR: u32 = 1;
pub const SMARTPHONE_CHARGES: u32 = 801;

/// Yearly figures for a page with [`MONTHLY_PAGE_VIEWS`] views a month.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyImpact {
    pub co2_kg: String,
    pub tea_cups: String,
    pub trees: u32,
    pub smartphone_charges: u32,
}

impl YearlyImpact {
    pub fn from_carbon(carbon: f64) -> Self {
        let co2_kg = carbon * MONTHLY_PAGE_VIEWS;
        Self {
            co2_kg: format!("{co2_kg:.2}"),
            tea_cups: format!("{:.0}", co2_kg * TEA_CUPS_PER_KG),
            trees: TREES_PER_YEAR,
            smartphone_charges: SMARTPHONE_CHARGES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub rating: String,
    pub url: String,
    pub percent_cleaner: u8,
    pub tested_on: String,
    pub carbon_grams: String,
    pub impact: YearlyImpact,
}

impl From<&Entry> for ResultCard {
    fn from(entry: &Entry) -> Self {
        Self {
            rating: entry.rating.to_string(),
            url: entry.url.clone(),
            percent_cleaner: entry.percent_cleaner,
            tested_on: entry.date.format("%-d %b %Y").to_string(),
            carbon_grams: entry.carbon.to_string(),
            impact: YearlyImpact::from_carbon(entry.carbon),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: i64,
    pub url: String,
    pub carbon: String,
    pub rating: String,
    pub percent_cleaner: u8,
}

pub struct PageView {
    pub card: Option<ResultCard>,
    pub rows: Vec<HistoryRow>,
    pub url_input: String,
}

impl From<&UiState> for PageView {
    fn from(state: &UiState) -> Self {
        Self {
            card: state.latest.as_ref().map(ResultCard::from),
            rows: state
                .entries
                .iter()
                .map(|e| HistoryRow {
                    id: e.id,
                    url: e.url.clone(),
                    carbon: e.carbon.to_string(),
                    rating: e.rating.to_string(),
                    percent_cleaner: e.percent_cleaner,
                })
                .collect(),
            url_input: state.url_input.clone(),
        }
    }
}
