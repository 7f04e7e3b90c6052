//! Integration tests for the chrono cookbook library

use chrono_cookbook::capability::TimeCapability;
use chrono_cookbook::render::{render_catalog, render_group, ColorMode, RenderOptions, PAGE_TITLE};
use chrono_cookbook::runner::{evaluate, ExampleBlock, RenderState};
use chrono_cookbook::snippets;

const FAILING_GROUP: &str = "When dates are invalid";

/// Wide, unstyled options so table cells never wrap mid-fragment
fn plain_options() -> RenderOptions {
    RenderOptions {
        width: 400,
        color: ColorMode::Never,
    }
}

fn capability() -> Option<TimeCapability> {
    let cap = TimeCapability::acquire();
    assert!(cap.is_some(), "test environment must have a usable clock");
    cap
}

#[test]
fn test_only_the_failure_group_fails() {
    let cap = capability();
    let catalog = snippets::catalog();

    let mut failures = Vec::new();
    for group in catalog.groups() {
        for entry in group.entries() {
            let state = evaluate(cap, entry);
            if state.is_error() {
                failures.push((group.title(), entry.source()));
            }
        }
    }

    assert_eq!(
        failures.len(),
        3,
        "unexpected failure set: {:?}",
        failures
    );
    for (title, source) in &failures {
        assert_eq!(
            *title, FAILING_GROUP,
            "entry failed outside the failure group: {}",
            source
        );
    }

    println!("✓ All {} entries behave as catalogued", catalog.entry_count());
}

#[test]
fn test_every_state_has_exactly_one_side() {
    let cap = capability();

    for group in snippets::catalog().groups() {
        for entry in group.entries() {
            let state = evaluate(cap, entry);
            assert_ne!(
                state.output().is_some(),
                state.error().is_some(),
                "state must hold exactly one of output and error: {}",
                entry.source()
            );
            let side = state.output().or_else(|| state.error());
            assert_eq!(
                Some(state.display_text()),
                side,
                "display text must be the populated side: {}",
                entry.source()
            );
        }
    }
}

#[test]
fn test_full_page_keeps_group_order() {
    let page = render_catalog(&snippets::catalog(), capability(), &plain_options());

    assert!(page.starts_with(PAGE_TITLE), "page must open with its title");

    let headings = [
        "1. Reading the current date and time",
        "2. Constructing dates and times",
        "3. Adding spans of time",
        "4. Subtracting spans of time",
        "5. Distances between moments",
        "6. Converting between time zones",
        "7. Comparing dates",
        "8. Formatting for humans and machines",
        "9. Working with durations",
        "10. Inspecting calendar fields",
        "11. Month boundaries",
        "12. When dates are invalid",
    ];

    let mut last = 0;
    for heading in headings {
        let position = page
            .find(heading)
            .unwrap_or_else(|| panic!("heading missing from page: {}", heading));
        assert!(position > last, "heading out of order: {}", heading);
        last = position;
    }
}

#[test]
fn test_page_shows_sources_beside_results() {
    let page = render_catalog(&snippets::catalog(), capability(), &plain_options());

    // Source lines appear verbatim
    assert!(page.contains("let due = start + Months::new(1) + Days::new(5);"));
    assert!(page.contains(r#"let utc = DateTime::parse_from_rfc3339("2023-10-26T14:30:00Z")?;"#));

    // Deterministic results appear alongside
    assert!(page.contains("2023-02-20"), "month-and-days sum missing");
    assert!(page.contains("P73D"), "date span missing");
    assert!(page.contains("PT15300S"), "duration total missing");
    assert!(page.contains("jeudi 26 octobre 2023"), "localized date missing");
    assert!(page.contains("2023-10-26T23:30:00+09:00"), "zone conversion missing");
}

#[test]
fn test_failures_carry_the_error_label() {
    let page = render_catalog(&snippets::catalog(), capability(), &plain_options());

    assert_eq!(
        page.matches("Error:").count(),
        3,
        "exactly the failure group's rows should be labelled"
    );
    assert!(page.contains("Error: 2023-02-30 is not a real calendar day"));
    assert!(page.contains("Error: input contains invalid characters"));
    assert!(page.contains("Error: input is out of range"));
}

#[test]
fn test_page_without_capability_shows_only_the_notice() {
    let catalog = snippets::catalog();
    let page = render_catalog(&catalog, None, &plain_options());

    assert_eq!(
        page.matches("initialized").count(),
        catalog.entry_count(),
        "every entry should show the fixed notice"
    );
    assert_eq!(
        page.matches("Error:").count(),
        catalog.entry_count(),
        "every row should be an error row"
    );
    assert!(
        !page.contains("2023-02-20"),
        "no computation should have produced output"
    );

    println!("✓ Missing capability reported uniformly across {} entries", catalog.entry_count());
}

#[test]
fn test_redraw_reuses_captured_results() {
    let cap = capability();
    let catalog = snippets::catalog();

    let mut blocks: Vec<ExampleBlock> = catalog
        .groups()
        .iter()
        .flat_map(|group| group.entries())
        .map(|entry| ExampleBlock::new(cap, *entry))
        .collect();

    let before: Vec<RenderState> = blocks.iter().map(|b| b.state().clone()).collect();

    // Redraw: feed every block the same entry again
    for (block, entry) in blocks
        .iter_mut()
        .zip(catalog.groups().iter().flat_map(|group| group.entries()))
    {
        block.update(cap, *entry);
    }

    let after: Vec<RenderState> = blocks.iter().map(|b| b.state().clone()).collect();
    assert_eq!(
        before, after,
        "redrawing with unchanged entries must not change any captured result"
    );
}

#[test]
fn test_lookup_matches_rendered_heading() {
    let catalog = snippets::catalog();
    let (position, group) = catalog
        .find("invalid")
        .expect("failure group should be findable by fragment");

    let section = render_group(position, group, capability(), &plain_options());
    assert!(
        section.starts_with("12. When dates are invalid\n"),
        "section heading should carry the catalog position: {}",
        section.lines().next().unwrap_or_default()
    );
}
