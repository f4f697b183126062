use anyhow::{Result, anyhow};
use comfy_table::{Cell, CellAlignment, Table};

use pin_map::{FieldRule, columns_from, rule_for};
use pin_model::{Attribute, CodedColumn};
use pin_output::OutputFormat;

use pin_cli::pipeline::{GenerateOptions, GenerateResult, run_generate as run_pipeline};
use pin_cli::summary::{align_column, apply_table_style, dim_cell, header_cell};

use crate::cli::{GenerateArgs, OutputFormatArg};
use crate::progress::BarObserver;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let options = GenerateOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        sheet: args.sheet.clone(),
        format: args.format.map(|format| match format {
            OutputFormatArg::Xlsx => OutputFormat::Xlsx,
            OutputFormatArg::Csv => OutputFormat::Csv,
        }),
        dry_run: args.dry_run,
    };
    let mut observer = BarObserver::new(!args.no_progress);
    run_pipeline(&options, &mut observer)
}

pub fn run_rules(attribute: Option<&str>) -> Result<()> {
    let attributes: Vec<Attribute> = match attribute {
        Some(name) => vec![parse_attribute(name)?],
        None => Attribute::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Coded column"),
        header_cell("Pattern"),
        header_cell("Code"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);

    for attribute in attributes {
        let mut columns = columns_from(attribute).peekable();
        if columns.peek().is_none() {
            println!(
                "{attribute}: not coded from its own value; {} is read from {}",
                CodedColumn::TrimType.header(),
                Attribute::ModelNumber
            );
        }
        for column in columns {
            match rule_for(column) {
                FieldRule::Lookup(lookup) => {
                    for rule in lookup.rules() {
                        table.add_row(vec![
                            Cell::new(column.header()),
                            Cell::new(format!("contains \"{}\"", rule.pattern)),
                            Cell::new(rule.code),
                        ]);
                    }
                    table.add_row(vec![
                        Cell::new(column.header()),
                        dim_cell("(no match)"),
                        display_code(lookup.default_code()),
                    ]);
                }
                other => {
                    table.add_row(vec![
                        Cell::new(column.header()),
                        Cell::new(other.describe()),
                        dim_cell("-"),
                    ]);
                }
            }
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_code(attribute: &str, value: &str) -> Result<()> {
    let attribute = parse_attribute(attribute)?;
    let mut columns = columns_from(attribute).peekable();
    if columns.peek().is_none() {
        println!(
            "{attribute} is echoed into the description only; {} is derived from {}",
            CodedColumn::TrimType.header(),
            Attribute::ModelNumber
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Coded column"),
        header_cell("Code"),
        header_cell("Matched"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);

    for column in columns {
        let rule = rule_for(column);
        let code = rule.apply(Some(value));
        let matched = match rule {
            FieldRule::Lookup(lookup) => match lookup.resolve(value) {
                Some(winner) => Cell::new(format!("contains \"{}\"", winner.pattern)),
                None => dim_cell("(no match)"),
            },
            other => dim_cell(other.describe()),
        };
        table.add_row(vec![Cell::new(column.header()), display_code(&code), matched]);
    }
    println!("{table}");
    Ok(())
}

/// Resolve a header (any case) or a slug such as `rating-class`.
pub fn parse_attribute(name: &str) -> Result<Attribute> {
    let wanted = slug(name);
    Attribute::ALL
        .into_iter()
        .find(|attribute| slug(attribute.header()) == wanted)
        .ok_or_else(|| {
            let known: Vec<String> = Attribute::ALL
                .iter()
                .map(|attribute| slug(attribute.header()))
                .collect();
            anyhow!("unknown attribute '{name}' (known: {})", known.join(", "))
        })
}

fn slug(text: &str) -> String {
    text.trim()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn display_code(code: &str) -> Cell {
    if code.is_empty() {
        dim_cell("(blank)")
    } else {
        Cell::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_parse_from_header_or_slug() {
        assert_eq!(
            parse_attribute("Rating Class").unwrap(),
            Attribute::RatingClass
        );
        assert_eq!(
            parse_attribute("rating-class").unwrap(),
            Attribute::RatingClass
        );
        assert_eq!(
            parse_attribute("in x body x out size").unwrap(),
            Attribute::Size
        );
        assert_eq!(
            parse_attribute(" TRIM_CHARACTERISTIC ").unwrap(),
            Attribute::TrimCharacteristic
        );
    }

    #[test]
    fn unknown_attribute_lists_known_slugs() {
        let err = parse_attribute("Colour").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown attribute 'Colour'"));
        assert!(message.contains("model-number"));
    }
}
