//! Terminal page rendering
//!
//! Lays the catalog out as a sequence of numbered sections, each a
//! two-column table with the example's source on the left and its captured
//! result on the right. Failed results are flagged in red on top of the
//! error label they already carry.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::capability::TimeCapability;
use crate::catalog::{Catalog, ExampleGroup};
use crate::runner::ExampleBlock;

/// Heading printed above the rendered catalog
pub const PAGE_TITLE: &str = "chrono date & time cookbook";

/// Introductory line printed under the page title
pub const PAGE_NOTE: &str =
    "Each example shows its source next to the result it produced in this run.";

/// How styling escapes are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Style when stdout is a terminal
    Auto,
    /// Always emit styling escapes
    Always,
    /// Never emit styling escapes
    Never,
}

/// Layout settings for the rendered page
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Total table width in columns
    pub width: u16,
    /// Styling behavior
    pub color: ColorMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 120,
            color: ColorMode::Auto,
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn result_cell(block: &ExampleBlock) -> Cell {
    let cell = Cell::new(block.state().display_text());
    if block.state().is_error() {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

/// Build the table for one group, running each entry once
pub fn group_table(
    group: &ExampleGroup,
    capability: Option<TimeCapability>,
    options: &RenderOptions,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(options.width);

    match options.color {
        ColorMode::Always => {
            table.enforce_styling();
        }
        ColorMode::Never => {
            table.force_no_tty();
        }
        ColorMode::Auto => {}
    }

    table.set_header(vec![header_cell("Source"), header_cell("Result")]);

    for entry in group.entries() {
        let block = ExampleBlock::new(capability, *entry);
        table.add_row(vec![Cell::new(block.entry().source()), result_cell(&block)]);
    }

    table
}

/// Render one group as a numbered section
pub fn render_group(
    position: usize,
    group: &ExampleGroup,
    capability: Option<TimeCapability>,
    options: &RenderOptions,
) -> String {
    let table = group_table(group, capability, options);
    format!("{}. {}\n{}\n", position, group.title(), table)
}

/// Render the whole catalog as one page
pub fn render_catalog(
    catalog: &Catalog,
    capability: Option<TimeCapability>,
    options: &RenderOptions,
) -> String {
    let mut page = String::new();
    page.push_str(PAGE_TITLE);
    page.push('\n');
    page.push_str(PAGE_NOTE);
    page.push('\n');

    for (index, group) in catalog.groups().iter().enumerate() {
        page.push('\n');
        page.push_str(&render_group(index + 1, group, capability, options));
    }

    page
}
