use crate::runtime::Effects;

#[inline]
pub fn eq_update<T: PartialEq>(value: &mut T, next_value: T) -> Effects {
    if *value != next_value {
        *value = next_value;
        Effects::none()
    } else {
        Effects::none().unchanged()
    }
}

/// Applies `update` to every matching item, reporting whether any of them changed.
pub fn eq_update_where<T, P, U>(items: &mut [T], predicate: P, mut update: U) -> Effects
where
    P: Fn(&T) -> bool,
    U: FnMut(&mut T) -> Effects,
{
    items
        .iter_mut()
        .filter(|item| predicate(item))
        .fold(Effects::none().unchanged(), |effects, item| {
            effects.join(update(item))
        })
}
