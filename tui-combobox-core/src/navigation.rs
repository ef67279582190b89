//! Keyboard navigation over combobox items

use crate::container::ComboboxContainer;
use crate::item::ComboboxItem;
use crate::keymap::NavCommand;

/// Navigability flag per item, in order
pub fn navigable_flags<T, C: ComboboxContainer<T>>(items: &[ComboboxItem<T, C>]) -> Vec<bool> {
    items.iter().map(ComboboxItem::is_navigable).collect()
}

/// Where the active row moves for a command
///
/// Rows that are not navigable are skipped. Returns `None` when the active
/// row would not change or the command is not a movement.
pub fn next_navigable(
    navigable: &[bool],
    current: Option<usize>,
    command: NavCommand,
) -> Option<usize> {
    let mut indices = navigable
        .iter()
        .enumerate()
        .filter(|(_, ok)| **ok)
        .map(|(i, _)| i);

    let target = match command {
        NavCommand::Next => match current {
            Some(cur) => indices.find(|&i| i > cur),
            None => indices.next(),
        },
        NavCommand::Prev => match current {
            Some(cur) => indices.rev().find(|&i| i < cur),
            None => indices.next_back(),
        },
        NavCommand::First => indices.next(),
        NavCommand::Last => indices.next_back(),
        NavCommand::Toggle | NavCommand::Close => None,
    }?;

    (Some(target) != current).then_some(target)
}
