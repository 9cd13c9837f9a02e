//! Inventory view model: filter, search and sort over a record snapshot.
//!
//! The view model never mutates records. It holds the snapshot last read
//! from the store plus the user's filter/search/sort inputs, and derives
//! the rows to render from them on demand.

use core::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use wigstock_core::ItemId;

use crate::column::Column;
use crate::item::InventoryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Sort directive of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        column: Column,
        direction: SortDirection,
    },
}

impl SortState {
    /// Next state after a click on `column`'s header.
    ///
    /// Same column: ascending, then descending, then unsorted. Another
    /// column always starts over at ascending.
    pub fn cycle(self, column: Column) -> Self {
        match self {
            SortState::Sorted {
                column: current,
                direction,
            } if current == column => match direction {
                SortDirection::Ascending => SortState::Sorted {
                    column,
                    direction: SortDirection::Descending,
                },
                SortDirection::Descending => SortState::Unsorted,
            },
            _ => SortState::Sorted {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }

    pub fn column(&self) -> Option<Column> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { column, .. } => Some(*column),
        }
    }

    /// Direction if `column` is the active sort column (header highlighting).
    pub fn direction_for(&self, column: Column) -> Option<SortDirection> {
        match self {
            SortState::Sorted {
                column: current,
                direction,
            } if *current == column => Some(*direction),
            _ => None,
        }
    }
}

/// Derives the visible, ordered rows from a record snapshot.
#[derive(Debug, Clone, Default)]
pub struct InventoryViewModel {
    records: Vec<InventoryItem>,
    filters: BTreeMap<Column, String>,
    search_term: String,
    sort: SortState,
}

impl InventoryViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<InventoryItem>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Replace the snapshot (after a successful re-fetch). Inputs are kept.
    pub fn replace_records(&mut self, records: Vec<InventoryItem>) {
        self.records = records;
    }

    pub fn records(&self) -> &[InventoryItem] {
        &self.records
    }

    pub fn find(&self, id: ItemId) -> Option<&InventoryItem> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Set a column filter. An empty value clears it.
    pub fn set_filter(&mut self, column: Column, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&column);
        } else {
            self.filters.insert(column, value);
        }
    }

    pub fn clear_filter(&mut self, column: Column) {
        self.filters.remove(&column);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &BTreeMap<Column, String> {
        &self.filters
    }

    pub fn filter(&self, column: Column) -> Option<&str> {
        self.filters.get(&column).map(String::as_str)
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Advance the three-state sort toggle for `column`; returns the new state.
    pub fn cycle_sort(&mut self, column: Column) -> SortState {
        self.sort = self.sort.cycle(column);
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Records passing every filter and the search, in sort order.
    ///
    /// Unsorted keeps snapshot order. Sorting is stable, so equal keys also
    /// keep snapshot order.
    pub fn visible_records(&self) -> Vec<&InventoryItem> {
        let filters: Vec<(Column, String)> = self
            .filters
            .iter()
            .map(|(c, v)| (*c, v.to_lowercase()))
            .collect();
        let term = self.search_term.to_lowercase();

        let mut rows: Vec<&InventoryItem> = self
            .records
            .iter()
            .filter(|r| matches_filters(r, &filters) && matches_search(r, &term))
            .collect();

        if let SortState::Sorted { column, direction } = self.sort {
            rows.sort_by(|a, b| compare_for_sort(a, b, column, direction));
        }

        rows
    }

    /// Sorted distinct display values of `column` across the snapshot.
    ///
    /// Feeds the per-column filter pickers. Absent values are skipped.
    pub fn distinct_values(&self, column: Column) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|r| r.field_text(column))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// AND across `filters`; each value must already be lowercased.
///
/// An absent field never satisfies a filter.
fn matches_filters(item: &InventoryItem, filters: &[(Column, String)]) -> bool {
    filters.iter().all(|(column, needle)| {
        item.field_text(*column)
            .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
    })
}

/// OR across the searchable fields; `term` must already be lowercased.
fn matches_search(item: &InventoryItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    Column::SEARCHABLE.iter().any(|column| {
        item.field_text(*column)
            .is_some_and(|text| text.to_lowercase().contains(term))
    })
}

/// Absent values sort last in both directions; direction only flips the
/// comparison of present values.
fn compare_for_sort(
    a: &InventoryItem,
    b: &InventoryItem,
    column: Column,
    direction: SortDirection,
) -> Ordering {
    match (a.field(column), b.field(column)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.cmp(&y);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{curly_dream, elegant_wave, item, sample};

    fn names(rows: &[&InventoryItem]) -> Vec<String> {
        rows.iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn search_curly_yields_only_curly_dream() {
        let mut vm = InventoryViewModel::with_records(vec![
            item("Elegant Wave", "299.99"),
            item("Curly Dream", "329.99"),
        ]);
        vm.set_search_term("curly");
        assert_eq!(names(&vm.visible_records()), vec!["Curly Dream"]);
    }

    #[test]
    fn empty_inputs_show_everything_in_snapshot_order() {
        let vm = InventoryViewModel::with_records(sample());
        assert_eq!(
            names(&vm.visible_records()),
            vec!["Elegant Wave", "Sleek Straight", "Curly Dream"]
        );
    }

    #[test]
    fn search_covers_barcode_and_client_name() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_search_term("98765");
        assert_eq!(names(&vm.visible_records()), vec!["Sleek Straight"]);
        vm.set_search_term("JOHNSON");
        assert_eq!(names(&vm.visible_records()), vec!["Curly Dream"]);
    }

    #[test]
    fn search_ignores_fields_outside_the_searchable_set() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_search_term("Shelf");
        assert!(vm.visible_records().is_empty());
    }

    #[test]
    fn absent_search_field_does_not_exclude_record() {
        let mut vm = InventoryViewModel::with_records(vec![elegant_wave()]);
        // client_name is absent, name still matches
        vm.set_search_term("elegant");
        assert_eq!(vm.visible_records().len(), 1);
    }

    #[test]
    fn filters_combine_with_and() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_filter(Column::HairType, "human");
        assert_eq!(
            names(&vm.visible_records()),
            vec!["Elegant Wave", "Curly Dream"]
        );
        vm.set_filter(Column::Status, "sold");
        assert_eq!(names(&vm.visible_records()), vec!["Curly Dream"]);
        vm.clear_filter(Column::Status);
        assert_eq!(vm.visible_records().len(), 2);
    }

    #[test]
    fn empty_filter_value_clears_the_filter() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_filter(Column::Name, "wave");
        assert_eq!(vm.filter(Column::Name), Some("wave"));
        vm.set_filter(Column::Name, "");
        assert_eq!(vm.filter(Column::Name), None);
        assert_eq!(vm.visible_records().len(), 3);
    }

    #[test]
    fn clear_filters_drops_every_column() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_filter(Column::HairType, "human");
        vm.set_filter(Column::Status, "sold");
        assert_eq!(
            vm.filters().keys().copied().collect::<Vec<_>>(),
            vec![Column::HairType, Column::Status]
        );
        vm.clear_filters();
        assert!(vm.filters().is_empty());
        assert_eq!(vm.visible_records().len(), 3);
    }

    #[test]
    fn filter_on_absent_field_excludes_record() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_filter(Column::ClientName, "a");
        assert_eq!(
            names(&vm.visible_records()),
            vec!["Sleek Straight", "Curly Dream"]
        );
    }

    #[test]
    fn filter_matches_price_display_text() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_filter(Column::Price, "249");
        assert_eq!(names(&vm.visible_records()), vec!["Sleek Straight"]);
    }

    #[test]
    fn filter_and_search_both_apply() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_filter(Column::HairType, "human");
        vm.set_search_term("straight");
        assert!(vm.visible_records().is_empty());
    }

    #[test]
    fn sort_toggle_cycles_through_three_states() {
        let s = SortState::Unsorted;
        let s = s.cycle(Column::Name);
        assert_eq!(
            s,
            SortState::Sorted {
                column: Column::Name,
                direction: SortDirection::Ascending
            }
        );
        let s = s.cycle(Column::Name);
        assert_eq!(s.direction_for(Column::Name), Some(SortDirection::Descending));
        let s = s.cycle(Column::Name);
        assert_eq!(s, SortState::Unsorted);
    }

    #[test]
    fn other_column_restarts_at_ascending() {
        let s = SortState::Unsorted
            .cycle(Column::Name)
            .cycle(Column::Name)
            .cycle(Column::Price);
        assert_eq!(
            s,
            SortState::Sorted {
                column: Column::Price,
                direction: SortDirection::Ascending
            }
        );
        assert_eq!(s.direction_for(Column::Name), None);
    }

    #[test]
    fn sorts_price_numerically() {
        let mut vm = InventoryViewModel::with_records(vec![
            item("A", "1000"),
            item("B", "99.5"),
            item("C", "250"),
        ]);
        vm.cycle_sort(Column::Price);
        assert_eq!(names(&vm.visible_records()), vec!["B", "C", "A"]);
        vm.cycle_sort(Column::Price);
        assert_eq!(names(&vm.visible_records()), vec!["A", "C", "B"]);
    }

    #[test]
    fn absent_values_stay_last_in_both_directions() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.cycle_sort(Column::ClientName);
        assert_eq!(
            names(&vm.visible_records()),
            vec!["Sleek Straight", "Curly Dream", "Elegant Wave"]
        );
        vm.cycle_sort(Column::ClientName);
        assert_eq!(
            names(&vm.visible_records()),
            vec!["Curly Dream", "Sleek Straight", "Elegant Wave"]
        );
    }

    #[test]
    fn third_click_restores_snapshot_order() {
        let mut vm = InventoryViewModel::with_records(sample());
        let before = names(&vm.visible_records());
        vm.cycle_sort(Column::Name);
        vm.cycle_sort(Column::Name);
        assert_eq!(vm.cycle_sort(Column::Name), SortState::Unsorted);
        assert_eq!(names(&vm.visible_records()), before);
    }

    #[test]
    fn equal_keys_keep_snapshot_order() {
        let mut vm = InventoryViewModel::with_records(vec![
            item("First", "10"),
            item("Second", "10"),
            item("Third", "5"),
        ]);
        vm.cycle_sort(Column::Price);
        assert_eq!(names(&vm.visible_records()), vec!["Third", "First", "Second"]);
    }

    #[test]
    fn status_sorts_by_display_name() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.cycle_sort(Column::Status);
        let statuses: Vec<&str> = vm
            .visible_records()
            .iter()
            .map(|r| r.status().as_str())
            .collect();
        assert_eq!(statuses, vec!["Hold", "In Stock", "Sold"]);
    }

    #[test]
    fn replace_records_keeps_inputs() {
        let mut vm = InventoryViewModel::with_records(sample());
        vm.set_search_term("curly");
        vm.replace_records(vec![curly_dream(), elegant_wave()]);
        assert_eq!(vm.search_term(), "curly");
        assert_eq!(names(&vm.visible_records()), vec!["Curly Dream"]);
    }

    #[test]
    fn distinct_values_are_sorted_and_deduplicated() {
        let vm = InventoryViewModel::with_records(sample());
        assert_eq!(
            vm.distinct_values(Column::HairType),
            vec!["Human Hair".to_string(), "Synthetic".to_string()]
        );
        assert_eq!(
            vm.distinct_values(Column::ClientName),
            vec!["Jane Smith".to_string(), "Mary Johnson".to_string()]
        );
    }

    #[test]
    fn sort_state_serializes_with_tag() {
        let json = serde_json::to_value(SortState::Sorted {
            column: Column::HairType,
            direction: SortDirection::Descending,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"state": "sorted", "column": "hair_type", "direction": "desc"})
        );
    }

    mod proptest_tests {
        use super::*;
        use crate::fixtures::{at, fields};
        use proptest::prelude::*;
        use wigstock_core::ItemId;

        fn arb_text() -> impl Strategy<Value = String> {
            "[A-Za-z ]{1,8}"
        }

        fn arb_record() -> impl Strategy<Value = InventoryItem> {
            (
                arb_text(),
                arb_text(),
                proptest::option::of(arb_text()),
                proptest::option::of(arb_text()),
                1u32..100_000,
            )
                .prop_map(|(name, style, color, client, cents)| {
                    let mut f = fields(&name, "1");
                    f.style = style;
                    f.color = color;
                    f.client_name = client;
                    f.price = rust_decimal::Decimal::new(cents as i64, 2);
                    InventoryItem::new(ItemId::new(), f, at(1))
                })
        }

        fn contains_ci(haystack: Option<String>, needle: &str) -> bool {
            haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: column filters keep exactly the records matching all of them.
            #[test]
            fn filters_select_exact_subset(
                records in proptest::collection::vec(arb_record(), 0..12),
                name_filter in "[a-z]{0,2}",
                color_filter in "[a-z]{0,2}",
            ) {
                let mut vm = InventoryViewModel::with_records(records.clone());
                vm.set_filter(Column::Name, name_filter.clone());
                vm.set_filter(Column::Color, color_filter.clone());

                let expected: Vec<ItemId> = records
                    .iter()
                    .filter(|r| {
                        (name_filter.is_empty() || contains_ci(r.field_text(Column::Name), &name_filter))
                            && (color_filter.is_empty() || contains_ci(r.field_text(Column::Color), &color_filter))
                    })
                    .map(|r| r.id)
                    .collect();
                let visible: Vec<ItemId> = vm.visible_records().iter().map(|r| r.id).collect();
                prop_assert_eq!(visible, expected);
            }

            /// Property: search keeps a record iff some searchable field contains the term.
            #[test]
            fn search_is_or_over_searchable_fields(
                records in proptest::collection::vec(arb_record(), 0..12),
                term in "[a-zA-Z]{0,2}",
            ) {
                let mut vm = InventoryViewModel::with_records(records.clone());
                vm.set_search_term(term.clone());

                let expected: Vec<ItemId> = records
                    .iter()
                    .filter(|r| {
                        term.is_empty()
                            || Column::SEARCHABLE.iter().any(|c| contains_ci(r.field_text(*c), &term))
                    })
                    .map(|r| r.id)
                    .collect();
                let visible: Vec<ItemId> = vm.visible_records().iter().map(|r| r.id).collect();
                prop_assert_eq!(visible, expected);
            }

            /// Property: three clicks on one header restore the original order.
            #[test]
            fn three_clicks_restore_order(
                records in proptest::collection::vec(arb_record(), 0..12),
                column in proptest::sample::select(Column::ALL.to_vec()),
            ) {
                let mut vm = InventoryViewModel::with_records(records.clone());
                vm.cycle_sort(column);
                vm.cycle_sort(column);
                prop_assert_eq!(vm.cycle_sort(column), SortState::Unsorted);
                let visible: Vec<ItemId> = vm.visible_records().iter().map(|r| r.id).collect();
                let original: Vec<ItemId> = records.iter().map(|r| r.id).collect();
                prop_assert_eq!(visible, original);
            }

            /// Property: descending is ascending reversed over present keys; absent keys trail both.
            #[test]
            fn descending_reverses_present_keys(
                records in proptest::collection::vec(arb_record(), 0..12),
            ) {
                // distinct prices make the present-key order total
                let mut seen = BTreeSet::new();
                let records: Vec<InventoryItem> = records
                    .into_iter()
                    .filter(|r| seen.insert(r.fields.price))
                    .collect();
                let mut vm = InventoryViewModel::with_records(records);

                vm.cycle_sort(Column::Price);
                let asc: Vec<ItemId> = vm.visible_records().iter().map(|r| r.id).collect();
                vm.cycle_sort(Column::Price);
                let mut desc: Vec<ItemId> = vm.visible_records().iter().map(|r| r.id).collect();
                desc.reverse();
                prop_assert_eq!(asc, desc);

                vm.set_sort(SortState::Sorted { column: Column::Color, direction: SortDirection::Ascending });
                let asc = vm.visible_records();
                let first_absent = asc.iter().position(|r| r.fields.color.is_none()).unwrap_or(asc.len());
                prop_assert!(asc[first_absent..].iter().all(|r| r.fields.color.is_none()));

                vm.set_sort(SortState::Sorted { column: Column::Color, direction: SortDirection::Descending });
                let desc = vm.visible_records();
                let first_absent = desc.iter().position(|r| r.fields.color.is_none()).unwrap_or(desc.len());
                prop_assert!(desc[first_absent..].iter().all(|r| r.fields.color.is_none()));
            }
        }
    }
}
