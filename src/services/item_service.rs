use crate::errors::AppError;
use crate::state::item::Item;
use crate::state::ItemStore;
use crate::validation::Validate;

/// Validate `item` and insert it.
pub fn insert(store: &ItemStore, item: Item) -> Result<(), AppError> {
    item.validate()?;
    store.create(item)?;
    Ok(())
}

/// Insert `item` and return the updated listing.
pub fn create(store: &ItemStore, item: Item) -> Result<Vec<Item>, AppError> {
    insert(store, item)?;
    Ok(store.list())
}

/// Remove the item with `id` (if present) and return the updated listing.
pub fn delete(store: &ItemStore, id: &str) -> Result<Vec<Item>, AppError> {
    if id.is_empty() {
        return Err(AppError::MissingIdentifier);
    }

    store.delete(id);
    Ok(store.list())
}

/// All items, sorted by id.
pub fn list(store: &ItemStore) -> Vec<Item> {
    store.list()
}
