//! The built-in example catalog
//!
//! Each submodule contributes one or more example groups. Every entry pairs
//! a source listing with the function that runs it; the listing is the
//! function's body with the final expression shown unwrapped, so the page
//! displays exactly the code that produced each result.

mod arithmetic;
mod calendar;
mod compare;
mod construct;
mod current;
mod durations;
mod format;
mod invalid;
mod zones;

use crate::catalog::{Catalog, ComputeError};

type SnippetResult = std::result::Result<String, ComputeError>;

/// Build the full catalog in page order.
///
/// The final group demonstrates failure handling and is the only one whose
/// entries are expected to error.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        current::group(),
        construct::group(),
        arithmetic::adding(),
        arithmetic::subtracting(),
        arithmetic::distances(),
        zones::group(),
        compare::group(),
        format::group(),
        durations::group(),
        calendar::fields(),
        calendar::boundaries(),
        invalid::group(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.groups().len(), 12);
        assert_eq!(catalog.entry_count(), 42);
        for group in catalog.groups() {
            assert!(
                !group.entries().is_empty(),
                "group '{}' has no entries",
                group.title()
            );
        }
    }

    #[test]
    fn test_group_order() {
        let titles: Vec<&str> = catalog().groups().iter().map(|g| g.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Reading the current date and time",
                "Constructing dates and times",
                "Adding spans of time",
                "Subtracting spans of time",
                "Distances between moments",
                "Converting between time zones",
                "Comparing dates",
                "Formatting for humans and machines",
                "Working with durations",
                "Inspecting calendar fields",
                "Month boundaries",
                "When dates are invalid",
            ]
        );
    }

    #[test]
    fn test_find_each_group_by_fragment() {
        let catalog = catalog();
        for (fragment, expected) in [
            ("current", 1),
            ("construct", 2),
            ("adding", 3),
            ("subtract", 4),
            ("distance", 5),
            ("zones", 6),
            ("comparing", 7),
            ("formatting", 8),
            ("durations", 9),
            ("fields", 10),
            ("boundaries", 11),
            ("invalid", 12),
        ] {
            let (position, _) = catalog
                .find(fragment)
                .unwrap_or_else(|_| panic!("no group matches '{}'", fragment));
            assert_eq!(position, expected, "fragment '{}'", fragment);
        }
    }

    #[test]
    fn test_sources_are_distinct() {
        let catalog = catalog();
        let mut seen = std::collections::HashSet::new();
        for group in catalog.groups() {
            for entry in group.entries() {
                assert!(
                    seen.insert(entry.source()),
                    "duplicate source in '{}': {}",
                    group.title(),
                    entry.source()
                );
            }
        }
    }

    // Every listing line must also exist as a code line in its module: the
    // leading lines verbatim, the final expression wrapped in Ok(...).
    #[test]
    fn test_listings_mirror_their_functions() {
        let modules = [
            include_str!("arithmetic.rs"),
            include_str!("calendar.rs"),
            include_str!("compare.rs"),
            include_str!("construct.rs"),
            include_str!("current.rs"),
            include_str!("durations.rs"),
            include_str!("format.rs"),
            include_str!("invalid.rs"),
            include_str!("zones.rs"),
        ];

        for group in catalog().groups() {
            for entry in group.entries() {
                let module = modules
                    .iter()
                    .find(|text| text.contains(entry.source()))
                    .unwrap_or_else(|| panic!("listing not found: {}", entry.source()));

                let lines: Vec<&str> = entry.source().lines().collect();
                let (last, leading) = lines.split_last().expect("empty listing");
                for line in leading {
                    let hits = module
                        .lines()
                        .filter(|candidate| candidate.trim() == line.trim())
                        .count();
                    assert!(hits >= 2, "listing line has no body twin: {}", line);
                }
                let wrapped = format!("Ok({})", last.trim());
                assert!(
                    module.lines().any(|candidate| candidate.trim() == wrapped),
                    "final expression has no Ok-wrapped body twin: {}",
                    last
                );
            }
        }
    }
}
