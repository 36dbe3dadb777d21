use sea_orm::Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// A single-field ordering.
#[derive(Debug, Clone, Copy)]
pub struct SortSpec<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// Resolve `sortBy=field:direction` against the sortable fields of a model.
///
/// Only `desc` sorts descending; any other (or no) direction is ascending.
/// No `sortBy`, or a field that is not sortable, gives `default` descending
/// (newest first when `default` is the creation timestamp).
pub fn resolve_sort<C: Copy>(
    sort_by: Option<&str>,
    sortable: &[(&'static str, C)],
    default: C,
) -> SortSpec<C> {
    let fallback = SortSpec {
        column: default,
        direction: SortDirection::Desc,
    };

    let Some(raw) = sort_by.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback;
    };

    let (field, direction) = match raw.split_once(':') {
        Some((field, direction)) => (field.trim(), direction.trim()),
        None => (raw, ""),
    };

    match sortable.iter().find(|(name, _)| *name == field) {
        Some(&(_, column)) => SortSpec {
            column,
            direction: if direction == "desc" {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        },
        None => {
            tracing::debug!(field, "Unknown sort field, using default order");
            fallback
        }
    }
}
