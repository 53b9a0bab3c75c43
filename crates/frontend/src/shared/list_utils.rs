//! List helpers shared by the table screens (sorting)

use std::cmp::Ordering;

/// Trait for row types that support column sorting
pub trait Sortable {
    /// Compare two rows by the named field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the named field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Arrow shown in the sorted column header
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        total: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![
            Row { name: "b", total: 2.0 },
            Row { name: "a", total: 3.0 },
            Row { name: "c", total: 1.0 },
        ];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "a");
        sort_list(&mut rows, "total", false);
        assert_eq!(rows[0].total, 3.0);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator("name", "name", true), " ▲");
        assert_eq!(sort_indicator("name", "name", false), " ▼");
        assert_eq!(sort_indicator("name", "total", true), "");
    }
}
