use std::fmt::Write;

use doorfacet_core::Product;
use doorfacet_filter::{ActiveChip, FacetCounts, FacetDefinition, FacetSchema, Page};

pub fn product_line(p: &Product) -> String {
    let sale = if p.on_sale { " · on sale" } else { "" };
    format!(
        "{:<6} {:<40} {} · {} · {} · {}″×{}″{sale}",
        p.id, p.name, p.availability, p.style, p.door_type, p.width_in, p.height_in
    )
}

pub fn chips_line(chips: &[ActiveChip]) -> Option<String> {
    if chips.is_empty() {
        return None;
    }
    let parts: Vec<String> = chips.iter().map(|c| format!("{}: {}", c.label, c.value)).collect();
    Some(format!("Active filters ({}): {}", chips.len(), parts.join(", ")))
}

pub fn listing(page: &Page<&Product>, catalog_size: usize, chips: &[ActiveChip]) -> String {
    let mut out = String::new();
    match page.span() {
        Some((first, last)) => {
            let _ = writeln!(out, "Showing {first}–{last} of {} (catalog: {catalog_size})", page.total);
        }
        None if page.total == 0 => {
            let _ = writeln!(out, "No products match your selection. Try adjusting your filters.");
        }
        None => {
            let _ = writeln!(out, "Page {} is past the last page ({}).", page.page, page.total_pages);
        }
    }
    if let Some(line) = chips_line(chips) {
        let _ = writeln!(out, "{line}");
    }
    for p in &page.items {
        let _ = writeln!(out, "  {}", product_line(p));
    }
    out
}

pub fn counts(counts: &[FacetCounts]) -> String {
    let mut out = String::new();
    for facet in counts {
        let _ = writeln!(out, "{}", facet.label);
        for option in &facet.options {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            let _ = writeln!(out, "  {mark} {} ({})", option.value, option.count);
        }
    }
    out
}

pub fn schema(schema: &FacetSchema) -> String {
    let mut out = String::new();
    for facet in schema.facets() {
        match facet {
            FacetDefinition::MultiSelect(f) => {
                let _ = writeln!(out, "{:<14} multi-select  {:?}  [{}]", f.key, f.field, f.options.join(", "));
            }
            FacetDefinition::Range(f) => {
                let _ = writeln!(out, "{:<14} range         {:?}  [{}{unit}, {}{unit}]", f.key, f.field, f.min, f.max, unit = f.unit);
            }
        }
    }
    out
}
