//! Split State
//!
//! Explicit form state for the bill splitter: person count, items, people
//! and the per-item assignment controls. Every change ends in a full
//! totals pass, so nothing is accumulated incrementally.

use std::collections::HashSet;

use crate::console;
use crate::models::{AssignmentControl, Item, ItemDraft, Person, PersonRecord};
use crate::money::Cents;

pub const DEFAULT_PERSON_COUNT: u32 = 2;
pub const MAX_PERSON_COUNT: u32 = 50;

/// User input that mutates the split
#[derive(Debug, Clone, PartialEq)]
pub enum SplitEvent {
    /// Raw text of the person count control
    CountChanged(String),
    ItemActiveToggled { item: u32, active: bool },
    AssignmentToggled { person: u32, item: u32, assigned: bool },
    PriceEdited { item: u32, text: String },
    NameEdited { person: u32, name: String },
    PhoneEdited { person: u32, phone: String },
}

/// An item with its row of person checkboxes
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: Item,
    /// One control per person, ordered by person index
    pub controls: Vec<AssignmentControl>,
}

impl ItemRow {
    pub fn control(&self, person: u32) -> Option<&AssignmentControl> {
        self.controls.iter().find(|c| c.person == person)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitState {
    person_count: u32,
    max_person_count: u32,
    items: Vec<ItemRow>,
    people: Vec<Person>,
}

impl Default for SplitState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PERSON_COUNT, MAX_PERSON_COUNT)
    }
}

impl SplitState {
    pub fn new(drafts: Vec<ItemDraft>, person_count: u32, max_person_count: u32) -> Self {
        let mut state = Self {
            person_count: 0,
            max_person_count: max_person_count.max(1),
            items: build_rows(drafts),
            people: Vec::new(),
        };
        state.regenerate_people(person_count);
        state
    }

    pub fn person_count(&self) -> u32 {
        self.person_count
    }

    pub fn items(&self) -> &[ItemRow] {
        &self.items
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn item(&self, item: u32) -> Option<&ItemRow> {
        self.items.iter().find(|row| row.item.index == item)
    }

    pub fn person(&self, person: u32) -> Option<&Person> {
        person.checked_sub(1).and_then(|i| self.people.get(i as usize))
    }

    pub fn is_assigned(&self, person: u32, item: u32) -> bool {
        self.item(item)
            .and_then(|row| row.control(person))
            .map_or(false, |c| c.checked)
    }

    /// Route one event to its operation
    pub fn dispatch(&mut self, event: SplitEvent) {
        match event {
            SplitEvent::CountChanged(text) => {
                self.apply_count_input(&text);
            }
            SplitEvent::ItemActiveToggled { item, active } => self.set_item_active(item, active),
            SplitEvent::AssignmentToggled { person, item, assigned } => {
                self.toggle_assignment(person, item, assigned)
            }
            SplitEvent::PriceEdited { item, text } => self.set_item_price(item, text),
            SplitEvent::NameEdited { person, name } => self.set_person_name(person, name),
            SplitEvent::PhoneEdited { person, phone } => self.set_person_phone(person, phone),
        }
    }

    /// Apply the raw text of the count control.
    ///
    /// Text without leading digits is a no-op (returns false). Anything
    /// after the leading digits is dropped (`"2.5"` is 2), and the number
    /// is clamped into `1..=max_person_count`.
    pub fn apply_count_input(&mut self, text: &str) -> bool {
        let count = match parse_count(text) {
            Some(n) => n.clamp(1, self.max_person_count as i64) as u32,
            None => {
                console::warn("SPLIT", &format!("ignoring person count {:?}", text));
                return false;
            }
        };
        self.regenerate_people(count);
        true
    }

    /// Replace every person with `count` fresh records (total zero) and
    /// rebuild the assignment controls to match.
    pub fn regenerate_people(&mut self, count: u32) {
        let count = count.clamp(1, self.max_person_count);
        self.person_count = count;
        self.people = (1..=count).map(Person::new).collect();
        self.regenerate_assignment_controls(count);
        self.recompute_totals();
    }

    /// Give every item exactly `count` unchecked controls tagged with the
    /// item's current price.
    pub fn regenerate_assignment_controls(&mut self, count: u32) {
        for row in &mut self.items {
            let item = row.item.index;
            let price = row.item.price;
            row.controls = (1..=count)
                .map(|person| AssignmentControl {
                    person,
                    item,
                    price,
                    checked: false,
                })
                .collect();
        }
    }

    /// Deactivating clears every assignment of the item first
    pub fn set_item_active(&mut self, item: u32, active: bool) {
        if let Some(row) = self.items.iter_mut().find(|row| row.item.index == item) {
            if !active {
                for control in &mut row.controls {
                    control.checked = false;
                }
            }
            row.item.active = active;
        }
        self.recompute_totals();
    }

    pub fn toggle_assignment(&mut self, person: u32, item: u32, assigned: bool) {
        match self.items.iter_mut().find(|row| row.item.index == item) {
            Some(row) if row.item.active => {
                if let Some(control) = row.controls.iter_mut().find(|c| c.person == person) {
                    control.checked = assigned;
                }
            }
            Some(_) => console::warn("SPLIT", &format!("item {} is not active", item)),
            None => {}
        }
        self.recompute_totals();
    }

    /// Store a newly typed price and re-tag the item's controls with it
    pub fn set_item_price(&mut self, item: u32, text: String) {
        if let Some(row) = self.items.iter_mut().find(|row| row.item.index == item) {
            row.item.price = crate::money::price_or_zero(&text);
            row.item.price_text = text;
            for control in &mut row.controls {
                control.price = row.item.price;
            }
        }
        self.recompute_totals();
    }

    pub fn set_person_name(&mut self, person: u32, name: String) {
        if let Some(p) = self.person_mut(person) {
            p.name = name;
        }
    }

    pub fn set_person_phone(&mut self, person: u32, phone: String) {
        if let Some(p) = self.person_mut(person) {
            p.phone = phone;
        }
    }

    /// Swap the whole item list, keeping the current people
    pub fn replace_items(&mut self, drafts: Vec<ItemDraft>) {
        self.items = build_rows(drafts);
        self.regenerate_assignment_controls(self.person_count);
        self.recompute_totals();
    }

    /// Full totals pass: zero every person, then add the price of each
    /// checked control on an active item.
    pub fn recompute_totals(&mut self) {
        for person in &mut self.people {
            person.total = Cents::ZERO;
        }
        for row in self.items.iter().filter(|row| row.item.active) {
            for control in row.controls.iter().filter(|c| c.checked) {
                if let Some(i) = control.person.checked_sub(1) {
                    if let Some(person) = self.people.get_mut(i as usize) {
                        person.total += control.price;
                    }
                }
            }
        }
    }

    /// Sum of active item prices
    pub fn bill_total(&self) -> Cents {
        self.items
            .iter()
            .filter(|row| row.item.active)
            .map(|row| row.item.price)
            .sum()
    }

    /// Sum of active item prices nobody is assigned to
    pub fn unassigned_total(&self) -> Cents {
        self.items
            .iter()
            .filter(|row| row.item.active && !row.controls.iter().any(|c| c.checked))
            .map(|row| row.item.price)
            .sum()
    }

    /// People as sent to the upload endpoint
    pub fn people_payload(&self) -> Vec<PersonRecord> {
        self.people
            .iter()
            .map(|p| PersonRecord {
                name: p.label(),
                phone: p.phone.clone(),
            })
            .collect()
    }

    fn person_mut(&mut self, person: u32) -> Option<&mut Person> {
        person.checked_sub(1).and_then(|i| self.people.get_mut(i as usize))
    }
}

/// Leading integer of the count text; oversized values saturate
fn parse_count(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Keep each draft's own index where it is unique; everything else gets
/// the lowest unused index starting at 1.
fn build_rows(drafts: Vec<ItemDraft>) -> Vec<ItemRow> {
    let mut taken = HashSet::new();
    let explicit: Vec<Option<u32>> = drafts
        .iter()
        .map(|d| d.index.filter(|i| taken.insert(*i)))
        .collect();

    let mut next = 1;
    drafts
        .into_iter()
        .zip(explicit)
        .map(|(draft, index)| {
            let index = index.unwrap_or_else(|| {
                while taken.contains(&next) {
                    next += 1;
                }
                taken.insert(next);
                next
            });
            ItemRow {
                item: Item::from_draft(index, draft),
                controls: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_money;

    fn state(prices: &[&str], people: u32) -> SplitState {
        let drafts = prices
            .iter()
            .enumerate()
            .map(|(i, p)| ItemDraft::new(format!("Item {}", i + 1), *p))
            .collect();
        SplitState::new(drafts, people, MAX_PERSON_COUNT)
    }

    fn total(state: &SplitState, person: u32) -> String {
        format_money(state.person(person).unwrap().total, "$")
    }

    #[test]
    fn test_regenerate_people_starts_at_zero() {
        for n in 1..=6 {
            let s = state(&["10.00", "5.50"], n);
            assert_eq!(s.person_count(), n);
            assert_eq!(s.people().len(), n as usize);
            assert!(s.people().iter().all(|p| p.total == Cents::ZERO));
            for row in s.items() {
                assert_eq!(row.controls.len(), n as usize);
                assert!(row.controls.iter().all(|c| !c.checked));
            }
            assert_eq!(total(&s, n), "$0.00");
        }
    }

    #[test]
    fn test_totals_sum_assigned_items() {
        let mut s = state(&["10.00", "5.50"], 2);
        s.toggle_assignment(1, 1, true);
        s.toggle_assignment(1, 2, true);

        assert_eq!(total(&s, 1), "$15.50");
        assert_eq!(total(&s, 2), "$0.00");
    }

    #[test]
    fn test_shared_item_counts_for_each_person() {
        let mut s = state(&["12.00"], 3);
        s.toggle_assignment(1, 1, true);
        s.toggle_assignment(3, 1, true);

        assert_eq!(total(&s, 1), "$12.00");
        assert_eq!(total(&s, 2), "$0.00");
        assert_eq!(total(&s, 3), "$12.00");
    }

    #[test]
    fn test_deactivate_clears_assignments() {
        let mut s = state(&["10.00", "5.00"], 1);
        s.toggle_assignment(1, 1, true);
        s.toggle_assignment(1, 2, true);
        assert_eq!(total(&s, 1), "$15.00");

        s.set_item_active(1, false);
        assert_eq!(total(&s, 1), "$5.00");
        assert!(!s.is_assigned(1, 1));

        // Reactivating does not bring the old assignment back
        s.set_item_active(1, true);
        assert_eq!(total(&s, 1), "$5.00");
        assert!(!s.is_assigned(1, 1));
    }

    #[test]
    fn test_inactive_item_rejects_assignment() {
        let mut s = state(&["7.00"], 2);
        s.set_item_active(1, false);
        s.toggle_assignment(2, 1, true);

        assert!(!s.is_assigned(2, 1));
        assert_eq!(total(&s, 2), "$0.00");
    }

    #[test]
    fn test_count_change_discards_people() {
        let mut s = state(&["10.00", "4.00"], 3);
        s.set_person_name(3, "Carol".into());
        s.toggle_assignment(3, 1, true);
        s.toggle_assignment(1, 2, true);

        s.regenerate_people(1);
        assert_eq!(s.people().len(), 1);
        assert_eq!(s.person(1).unwrap().name, "");
        assert!(s.person(3).is_none());
        for row in s.items() {
            assert_eq!(row.controls.len(), 1);
            assert!(!row.controls[0].checked);
        }
        assert_eq!(total(&s, 1), "$0.00");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut s = state(&["3.10", "2.20"], 2);
        s.toggle_assignment(2, 1, true);
        s.toggle_assignment(2, 2, true);

        s.recompute_totals();
        let first = s.clone();
        s.recompute_totals();
        assert_eq!(s, first);
        assert_eq!(total(&s, 2), "$5.30");
    }

    #[test]
    fn test_malformed_price_counts_as_zero() {
        let mut s = state(&["", "abc", "2.00"], 1);
        for item in 1..=3 {
            s.toggle_assignment(1, item, true);
        }
        assert_eq!(total(&s, 1), "$2.00");
        assert!(!total(&s, 1).contains("NaN"));
    }

    #[test]
    fn test_count_input_guards() {
        let mut s = state(&["1.00"], 3);

        assert!(!s.apply_count_input("three"));
        assert!(!s.apply_count_input(""));
        assert_eq!(s.person_count(), 3);

        assert!(s.apply_count_input("0"));
        assert_eq!(s.person_count(), 1);

        assert!(s.apply_count_input("-4"));
        assert_eq!(s.person_count(), 1);

        assert!(s.apply_count_input("1000"));
        assert_eq!(s.person_count(), MAX_PERSON_COUNT);

        assert!(s.apply_count_input(" 4 "));
        assert_eq!(s.people().len(), 4);

        assert!(s.apply_count_input("2.5"));
        assert_eq!(s.person_count(), 2);

        assert!(s.apply_count_input("99999999999999999999999"));
        assert_eq!(s.person_count(), MAX_PERSON_COUNT);

        assert!(!s.apply_count_input(".5"));
        assert!(!s.apply_count_input("-"));
        assert_eq!(s.person_count(), MAX_PERSON_COUNT);
    }

    #[test]
    fn test_price_edit_retags_controls() {
        let mut s = state(&["10.00"], 2);
        s.toggle_assignment(2, 1, true);

        s.set_item_price(1, "12.25".into());
        assert_eq!(s.item(1).unwrap().control(2).unwrap().price, Cents(1225));
        assert_eq!(total(&s, 2), "$12.25");

        s.set_item_price(1, "".into());
        assert_eq!(total(&s, 2), "$0.00");
    }

    #[test]
    fn test_dispatch_routes_events() {
        let mut s = state(&["8.00", "2.00"], 2);

        s.dispatch(SplitEvent::AssignmentToggled { person: 2, item: 1, assigned: true });
        s.dispatch(SplitEvent::AssignmentToggled { person: 2, item: 2, assigned: true });
        assert_eq!(total(&s, 2), "$10.00");

        s.dispatch(SplitEvent::AssignmentToggled { person: 2, item: 2, assigned: false });
        assert_eq!(total(&s, 2), "$8.00");

        s.dispatch(SplitEvent::ItemActiveToggled { item: 1, active: false });
        assert_eq!(total(&s, 2), "$0.00");

        s.dispatch(SplitEvent::NameEdited { person: 1, name: "Ana".into() });
        s.dispatch(SplitEvent::PhoneEdited { person: 1, phone: "555-0100".into() });
        assert_eq!(s.person(1).unwrap().label(), "Ana");

        s.dispatch(SplitEvent::CountChanged("5".into()));
        assert_eq!(s.people().len(), 5);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut s = state(&["1.00"], 1);
        s.toggle_assignment(0, 1, true);
        s.toggle_assignment(9, 1, true);
        s.toggle_assignment(1, 42, true);
        s.set_item_active(42, false);
        s.set_person_name(0, "nobody".into());

        assert_eq!(total(&s, 1), "$0.00");
        assert!(!s.is_assigned(1, 1));
    }

    #[test]
    fn test_people_payload_defaults_names() {
        let mut s = state(&[], 2);
        s.set_person_name(1, "  Dev ".into());
        s.set_person_phone(2, "+91 98765 43210".into());

        let payload = s.people_payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].name, "Dev");
        assert_eq!(payload[0].phone, "");
        assert_eq!(payload[1].name, "Person 2");
        assert_eq!(payload[1].phone, "+91 98765 43210");

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Dev","phone":""},{"name":"Person 2","phone":"+91 98765 43210"}]"#
        );
    }

    #[test]
    fn test_replace_items_keeps_people() {
        let mut s = state(&["1.00"], 3);
        s.set_person_name(2, "Bo".into());
        s.toggle_assignment(1, 1, true);

        s.replace_items(vec![ItemDraft::new("Chakli Sticks", "80.00"), ItemDraft::new("Kaju Katli", "99")]);
        assert_eq!(s.items().len(), 2);
        assert_eq!(s.person(2).unwrap().name, "Bo");
        assert!(s.items().iter().all(|row| row.controls.len() == 3));
        assert_eq!(total(&s, 1), "$0.00");
        assert_eq!(s.bill_total(), Cents(17_900));
    }

    #[test]
    fn test_bill_and_unassigned_totals() {
        let mut s = state(&["10.00", "5.00", "1.00"], 2);
        s.set_item_active(3, false);
        assert_eq!(s.bill_total(), Cents(1500));
        assert_eq!(s.unassigned_total(), Cents(1500));

        s.toggle_assignment(1, 1, true);
        s.toggle_assignment(2, 1, true);
        assert_eq!(s.unassigned_total(), Cents(500));
    }

    #[test]
    fn test_huge_prices_do_not_reach_totals() {
        let mut s = state(&["1e300", "1e300", "2.00"], 1);
        for item in 1..=3 {
            s.toggle_assignment(1, item, true);
        }
        assert_eq!(total(&s, 1), "$2.00");
        assert_eq!(s.bill_total(), Cents(200));
    }

    #[test]
    fn test_colliding_indices_are_renumbered() {
        let mut explicit = ItemDraft::new("Soup", "4.00");
        explicit.index = Some(2);
        let mut duplicate = ItemDraft::new("Salad", "5.00");
        duplicate.index = Some(2);
        let drafts = vec![explicit, ItemDraft::new("Bread", "3.00"), duplicate, ItemDraft::new("Tea", "1.00")];
        let mut s = SplitState::new(drafts, 1, MAX_PERSON_COUNT);

        let indices: Vec<u32> = s.items().iter().map(|row| row.item.index).collect();
        assert_eq!(indices, vec![2, 1, 3, 4]);

        s.toggle_assignment(1, 1, true);
        s.toggle_assignment(1, 3, true);
        assert!(s.is_assigned(1, 1));
        assert!(!s.is_assigned(1, 2));
        assert_eq!(total(&s, 1), "$8.00");
    }

    #[test]
    fn test_draft_index_is_kept() {
        let mut draft = ItemDraft::new("Soup", "4.00");
        draft.index = Some(7);
        let mut s = SplitState::new(vec![draft], 1, MAX_PERSON_COUNT);

        assert_eq!(s.items()[0].item.index, 7);
        assert_eq!(s.items()[0].controls[0].item, 7);
        s.toggle_assignment(1, 7, true);
        assert_eq!(total(&s, 1), "$4.00");
    }
}
