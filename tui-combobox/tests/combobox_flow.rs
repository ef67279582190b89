//! End-to-end flows: items driven by the store-backed container

use std::rc::Rc;

use tui_combobox::prelude::*;
use tui_combobox::testing::{key_event, RenderHarness};

type Store = ComboboxStore<String>;
type Item = ComboboxItem<String, Store>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("tui_combobox_core=debug")
        .with_test_writer()
        .try_init();
}

fn store(json: &str) -> Rc<Store> {
    Rc::new(ComboboxStore::new(ComboboxConfig::from_json(json).unwrap()))
}

fn items(store: &Rc<Store>, values: &[&str]) -> Vec<Item> {
    values
        .iter()
        .map(|v| {
            let mut item = Item::new(v.to_string()).with_container(Rc::clone(store));
            item.on_create().unwrap();
            item
        })
        .collect()
}

fn refresh(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.on_state_refresh().unwrap();
    }
}

fn selected(items: &[Item]) -> Vec<&str> {
    items
        .iter()
        .filter(|i| i.is_selected())
        .filter_map(|i| i.value().map(String::as_str))
        .collect()
}

#[tokio::test]
async fn test_single_selection_click_flow() {
    init_tracing();
    let store = store("{}");
    let mut items = items(&store, &["W", "X", "Y"]);
    assert_eq!(store.registered_count(), 3);

    items[1].handle_click().await;

    assert_eq!(store.value(), Some("X".to_string()));
    assert!(store.is_focused());

    refresh(&mut items);
    assert_eq!(selected(&items), vec!["X"]);

    // Selecting another item moves the single selection
    items[2].handle_click().await;
    refresh(&mut items);
    assert_eq!(selected(&items), vec!["Y"]);

    // Clicking the selected item again clears it
    items[2].handle_click().await;
    refresh(&mut items);
    assert!(selected(&items).is_empty());
    assert_eq!(store.value(), None);
}

#[tokio::test]
async fn test_multi_selection_uses_value_equality() {
    let store = store(r#"{"selection_mode": "multi"}"#);
    let mut items = items(&store, &["A", "B", "C"]);

    items[0].handle_click().await;
    items[2].handle_click().await;
    refresh(&mut items);
    assert_eq!(selected(&items), vec!["A", "C"]);

    // A separate String instance with the same contents counts too
    store.dispatch(ComboboxAction::SetSelectedValues(vec![String::from("B")]));
    refresh(&mut items);
    assert_eq!(selected(&items), vec!["B"]);
}

#[test]
fn test_search_filters_by_text_then_value() {
    let store = store(r#"{"editable": true}"#);
    let mut items = items(&store, &["banana", "cherry"]);
    let mut labelled = Item::new("x1".to_string())
        .text("Mango")
        .with_container(Rc::clone(&store));
    labelled.on_create().unwrap();

    store.dispatch(ComboboxAction::SetSearch(Some("AN".into())));
    refresh(&mut items);
    labelled.on_state_refresh().unwrap();

    assert!(items[0].is_eligible());
    assert!(!items[1].is_eligible());
    assert!(labelled.is_eligible());

    // Hidden items stay registered
    assert_eq!(store.registered_count(), 3);

    store.dispatch(ComboboxAction::SetSearch(None));
    refresh(&mut items);
    assert!(items.iter().all(Item::is_eligible));
}

#[test]
fn test_custom_search_overrides_substring() {
    let store = Rc::new(
        ComboboxStore::new(ComboboxConfig::from_json(r#"{"editable": true}"#).unwrap())
            .with_search_fn(|value: Option<&String>, _text, search| {
                value.is_some_and(|v| v.starts_with(search))
            }),
    );
    let mut items = items(&store, &["banana", "cabana"]);

    store.dispatch(ComboboxAction::SetSearch(Some(" ba ".into())));
    refresh(&mut items);

    assert!(items[0].is_eligible());
    // Substring would match, the predicate does not
    assert!(!items[1].is_eligible());
}

#[test]
fn test_converter_drives_display_and_errors_surface() {
    let store = Rc::new(ComboboxStore::new(ComboboxConfig::default()).with_converter(
        |v: Option<&String>| -> tui_combobox::Result<String> {
            match v.map(String::as_str) {
                Some("bad") => Err(ComboboxError::conversion("cannot show 'bad'")),
                Some(v) => Ok(v.to_uppercase()),
                None => Ok("-".into()),
            }
        },
    ));
    let items = items(&store, &["kiwi", "bad"]);

    assert_eq!(items[0].display_string().unwrap(), "KIWI");
    let err = items[1].display_string().unwrap_err();
    assert_eq!(err.error_code(), "combobox.conversion_failed");
}

#[tokio::test]
async fn test_functional_item_never_selects() {
    let store = store("{}");
    let mut action = Item::new("create".to_string())
        .text("Create new...")
        .functional(true)
        .with_container(Rc::clone(&store));
    action.on_create().unwrap();

    action.handle_click().await;
    action.on_state_refresh().unwrap();

    assert_eq!(store.value(), None);
    assert!(!action.is_selected());
    assert!(!action.is_navigable());
    assert!(store.is_focused());
}

#[test]
fn test_disabled_predicate_blocks_navigation() {
    let store = Rc::new(
        ComboboxStore::new(ComboboxConfig::default())
            .with_item_disabled_fn(|v: Option<&String>| v.is_some_and(|v| v == "B")),
    );
    let items = items(&store, &["A", "B", "C"]);

    let flags = navigable_flags(&items);
    assert_eq!(flags, vec![true, false, true]);
    assert_eq!(next_navigable(&flags, Some(0), NavCommand::Next), Some(2));
}

#[test]
fn test_drop_deregisters() {
    let store = store("{}");
    let items = items(&store, &["A", "B"]);
    assert_eq!(store.registered_count(), 2);

    drop(items);
    assert_eq!(store.registered_count(), 0);
}

#[test]
fn test_density_downgrades_typography() {
    let slim = store(r#"{"dense": "slim"}"#);
    let standard = store(r#"{"dense": "standard"}"#);

    assert_eq!(items(&slim, &["A"])[0].typo(), Typo::Body2);
    assert_eq!(items(&standard, &["A"])[0].typo(), Typo::Body1);
}

#[derive(Debug, Clone, PartialEq)]
enum HostAction {
    Activate(usize),
    Toggle(usize),
    Close,
}

#[tokio::test]
async fn test_list_keyboard_flow() {
    let store = store(r#"{"editable": true, "color": "success"}"#);
    let mut items = items(&store, &["apple", "banana", "cherry"]);
    let mut list = ComboboxItemList::new();

    store.dispatch(ComboboxAction::SetSearch(Some("e".into())));
    refresh(&mut items);

    let displays: Vec<String> = items
        .iter()
        .map(|i| i.display_string())
        .collect::<tui_combobox::Result<_>>()
        .unwrap();
    let rows: Vec<ItemRow> = items
        .iter()
        .zip(&displays)
        .map(|(item, display)| ItemRow::for_item(item, display))
        .collect();

    let props = |active| ComboboxItemListProps {
        rows: &rows,
        active,
        is_focused: true,
        keymap: store.keymap(),
        typo: Typo::Body1,
        color: ItemColor::Success,
        bordered: false,
        on_activate: HostAction::Activate,
        on_toggle: HostAction::Toggle,
        on_close: || HostAction::Close,
    };

    // banana is filtered out, so down from apple lands on cherry
    let actions: Vec<_> = list
        .handle_event(&key_event("down"), props(Some(0)))
        .into_iter()
        .collect();
    assert_eq!(actions, vec![HostAction::Activate(2)]);

    let mut render = RenderHarness::new(20, 5);
    let output = render.render_to_string_plain(|frame| {
        list.render(frame, frame.area(), props(Some(2)));
    });
    assert!(output.contains("apple"));
    assert!(!output.contains("banana"));

    let actions: Vec<_> = list
        .handle_event(&key_event("enter"), props(Some(2)))
        .into_iter()
        .collect();
    assert_eq!(actions, vec![HostAction::Toggle(2)]);

    items[2].handle_click().await;
    refresh(&mut items);
    assert_eq!(selected(&items), vec!["cherry"]);
    assert!(store.is_focused());

    // The host answers a close request by dropping focus
    let actions: Vec<_> = list
        .handle_event(&key_event("esc"), props(Some(2)))
        .into_iter()
        .collect();
    assert_eq!(actions, vec![HostAction::Close]);
    assert!(store.dispatch(ComboboxAction::Blur));
    assert!(!store.is_focused());
}

#[test]
fn test_host_sets_value_directly() {
    let store = store("{}");
    let mut items = items(&store, &["red", "green"]);

    assert!(store.dispatch(ComboboxAction::SetValue(Some("green".into()))));
    refresh(&mut items);
    assert_eq!(selected(&items), vec!["green"]);

    assert!(!store.dispatch(ComboboxAction::SetValue(Some("green".into()))));
    store.dispatch(ComboboxAction::SetValue(None));
    refresh(&mut items);
    assert!(selected(&items).is_empty());
}
