use alloc::rc::Rc;

use frametween::Accessor;

use crate::PropertyStore;

/// Builds an [`Accessor`] for `property` on `target`, going through `store`.
///
/// Nothing is read or written until the accessor is used.
pub fn make_property_accessor<S>(store: &Rc<S>, target: S::Target, property: &str) -> Accessor
where
    S: PropertyStore + 'static,
{
    let property: Rc<str> = Rc::from(property);
    let (get_store, get_target, get_property) =
        (Rc::clone(store), target.clone(), Rc::clone(&property));
    let set_store = Rc::clone(store);

    Accessor::new(
        move || get_store.get_property(&get_target, &get_property),
        move |value| set_store.set_property(&target, &property, value),
    )
}
